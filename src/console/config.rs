//! Console configuration from environment variables.

use std::env;

const DEFAULT_PROMPT: &str = "roadshow> ";

/// Console front-end configuration.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Seed a handful of sample presentations at startup.
    pub demo_data: bool,
    /// Prompt printed before each command.
    pub prompt: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            demo_data: false,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Read configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `ROADSHOW_DEMO_DATA` (optional, default: false): preload sample
    ///   presentations for manual exploration (`true`/`false`)
    /// - `ROADSHOW_PROMPT` (optional, default: `roadshow> `): prompt string
    ///
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        let demo_data = env::var("ROADSHOW_DEMO_DATA")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(false);
        let prompt = env::var("ROADSHOW_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());

        Self { demo_data, prompt }
    }
}
