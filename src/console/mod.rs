//! Interactive console front-end.
//!
//! Re-creates the original form application's flows as a line-oriented
//! menu: scheduling a presentation, viewing the schedule with an optional
//! location filter, checking slot availability, removing an entry, and
//! dumping the schedule as JSON. All parsing of dates (`YYYY-MM-DD`) and
//! times (`HH:MM`) happens at this boundary; the core never parses text.
//! Parse and validation failures are printed and the user returns to the
//! menu — scheduler state is never corrupted by a failed flow.

pub mod config;

pub use config::ConsoleConfig;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};

use crate::models::Presentation;
use crate::state::AppState;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Menu-driven console over arbitrary line-oriented input and output.
///
/// Generic over the reader/writer so flows can be exercised in tests with
/// in-memory buffers.
pub struct Console<R, W> {
    state: AppState,
    reader: R,
    writer: W,
    prompt: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(state: AppState, reader: R, writer: W) -> Self {
        Self {
            state,
            reader,
            writer,
            prompt: ConsoleConfig::default().prompt,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Run the menu loop until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        self.print_menu()?;
        loop {
            write!(self.writer, "{}", self.prompt)?;
            self.writer.flush()?;
            let Some(choice) = self.read_line()? else {
                break;
            };
            match choice.as_str() {
                "1" | "schedule" => self.schedule()?,
                "2" | "view" => self.view()?,
                "3" | "check" => self.check_availability()?,
                "4" | "remove" => self.remove()?,
                "5" | "dump" => self.dump_json()?,
                "h" | "help" => self.print_menu()?,
                "q" | "quit" | "exit" => break,
                "" => {}
                other => writeln!(self.writer, "Unknown command: {other}")?,
            }
        }
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.writer, "IPO Roadshow Scheduler")?;
        writeln!(self.writer, "  1) schedule a presentation")?;
        writeln!(self.writer, "  2) view schedule")?;
        writeln!(self.writer, "  3) check availability")?;
        writeln!(self.writer, "  4) remove a presentation")?;
        writeln!(self.writer, "  5) dump schedule as JSON")?;
        writeln!(self.writer, "  h) help  q) quit")?;
        Ok(())
    }

    /// Read one trimmed line; `None` on end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line).context("reading input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_field(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.writer, "{label}: ")?;
        self.writer.flush()?;
        self.read_line()
    }

    fn prompt_date(&mut self) -> Result<Option<NaiveDate>> {
        let Some(raw) = self.prompt_field("Date (YYYY-MM-DD)")? else {
            return Ok(None);
        };
        match NaiveDate::parse_from_str(&raw, DATE_FORMAT) {
            Ok(date) => Ok(Some(date)),
            Err(e) => {
                writeln!(self.writer, "Error: invalid date '{raw}': {e}")?;
                Ok(None)
            }
        }
    }

    fn prompt_time(&mut self, label: &str) -> Result<Option<NaiveTime>> {
        let Some(raw) = self.prompt_field(label)? else {
            return Ok(None);
        };
        match NaiveTime::parse_from_str(&raw, TIME_FORMAT) {
            Ok(time) => Ok(Some(time)),
            Err(e) => {
                writeln!(self.writer, "Error: invalid time '{raw}': {e}")?;
                Ok(None)
            }
        }
    }

    /// Prompt for location, date and time range (shared by the
    /// availability-check and presentation flows).
    fn prompt_slot_fields(&mut self) -> Result<Option<(String, NaiveDate, NaiveTime, NaiveTime)>> {
        let Some(location) = self.prompt_field("Location")? else {
            return Ok(None);
        };
        let Some(date) = self.prompt_date()? else {
            return Ok(None);
        };
        let Some(start) = self.prompt_time("Start time (HH:MM)")? else {
            return Ok(None);
        };
        let Some(end) = self.prompt_time("End time (HH:MM)")? else {
            return Ok(None);
        };
        Ok(Some((location, date, start, end)))
    }

    fn prompt_presentation(&mut self) -> Result<Option<Presentation>> {
        let Some(company) = self.prompt_field("Company name")? else {
            return Ok(None);
        };
        let Some((location, date, start, end)) = self.prompt_slot_fields()? else {
            return Ok(None);
        };
        match Presentation::new(company, location, date, start, end) {
            Ok(p) => Ok(Some(p)),
            Err(e) => {
                writeln!(self.writer, "Error: {e}")?;
                Ok(None)
            }
        }
    }

    fn schedule(&mut self) -> Result<()> {
        let Some(presentation) = self.prompt_presentation()? else {
            return Ok(());
        };
        match self.state.scheduler_mut().add(presentation) {
            Ok(()) => writeln!(self.writer, "Presentation scheduled successfully!")?,
            Err(e) => writeln!(self.writer, "Error: {e}")?,
        }
        Ok(())
    }

    fn view(&mut self) -> Result<()> {
        let Some(filter) = self.prompt_field("Location filter (blank for all)")? else {
            return Ok(());
        };
        let entries = if filter.is_empty() {
            self.state.scheduler().list_all()
        } else {
            self.state.scheduler().list_by_location(&filter)
        };
        if entries.is_empty() {
            writeln!(self.writer, "No presentations scheduled")?;
        } else {
            for presentation in &entries {
                writeln!(self.writer, "{presentation}")?;
            }
        }
        Ok(())
    }

    fn check_availability(&mut self) -> Result<()> {
        let Some((location, date, start, end)) = self.prompt_slot_fields()? else {
            return Ok(());
        };
        let candidate = match Presentation::new("availability check", location, date, start, end) {
            Ok(p) => p,
            Err(e) => {
                writeln!(self.writer, "Error: {e}")?;
                return Ok(());
            }
        };

        let conflict = self.state.scheduler().find_conflict(&candidate).cloned();
        match conflict {
            None => writeln!(self.writer, "This time slot is available!")?,
            Some(existing) => {
                writeln!(self.writer, "Time slot not available:")?;
                writeln!(self.writer, "{existing}")?;
            }
        }
        Ok(())
    }

    fn remove(&mut self) -> Result<()> {
        let Some(presentation) = self.prompt_presentation()? else {
            return Ok(());
        };
        let removed = {
            let mut scheduler = self.state.scheduler_mut();
            let before = scheduler.len();
            scheduler.remove(&presentation);
            before - scheduler.len()
        };
        if removed == 0 {
            writeln!(self.writer, "No matching presentation found")?;
        } else {
            writeln!(self.writer, "Removed {removed} matching entry(ies)")?;
        }
        Ok(())
    }

    fn dump_json(&mut self) -> Result<()> {
        let entries = self.state.scheduler().list_all();
        let json = serde_json::to_string_pretty(&entries).context("serializing schedule")?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

/// Seed a few sample presentations so the menus have data to show.
pub fn seed_demo_data(state: &AppState) -> Result<()> {
    let samples = [
        ("Acme Corp", "NYC", "2026-09-01", "09:00", "10:00"),
        ("Globex", "NYC", "2026-09-01", "10:30", "11:30"),
        ("Initech", "London", "2026-09-02", "14:00", "15:00"),
    ];

    let mut scheduler = state.scheduler_mut();
    for (company, location, date, start, end) in samples {
        let date = NaiveDate::parse_from_str(date, DATE_FORMAT).context("parsing demo date")?;
        let start = NaiveTime::parse_from_str(start, TIME_FORMAT).context("parsing demo time")?;
        let end = NaiveTime::parse_from_str(end, TIME_FORMAT).context("parsing demo time")?;
        let presentation = Presentation::new(company, location, date, start, end)?;
        scheduler.add(presentation)?;
    }
    Ok(())
}

/// Run the console front-end over stdin/stdout.
pub fn run(state: AppState, config: &ConsoleConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console =
        Console::new(state, stdin.lock(), stdout.lock()).with_prompt(config.prompt.clone());
    console.run()
}
