//! Console front-end flow tests over in-memory buffers.

use chrono::{NaiveDate, NaiveTime};
use roadshow_scheduler::console::Console;
use roadshow_scheduler::{AppState, Presentation};

fn run_console(state: AppState, input: &str) -> String {
    let mut output = Vec::new();
    {
        let mut console = Console::new(state, input.as_bytes(), &mut output);
        console.run().expect("console run should succeed");
    }
    String::from_utf8(output).expect("console output is utf-8")
}

fn seeded_state() -> AppState {
    let state = AppState::new();
    state
        .scheduler_mut()
        .add(
            Presentation::new(
                "Acme",
                "NYC",
                NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid test date"),
                NaiveTime::from_hms_opt(9, 0, 0).expect("valid test time"),
                NaiveTime::from_hms_opt(10, 0, 0).expect("valid test time"),
            )
            .expect("valid presentation"),
        )
        .expect("seed add should succeed");
    state
}

#[test]
fn test_schedule_then_view() {
    let input = "1\nAcme\nNYC\n2024-06-01\n09:00\n10:00\n2\n\nq\n";
    let output = run_console(AppState::new(), input);

    assert!(output.contains("Presentation scheduled successfully!"), "{output}");
    assert!(
        output.contains("Acme            | NYC        | 2024-06-01 | 09:00 - 10:00"),
        "{output}"
    );
}

#[test]
fn test_view_empty_schedule() {
    let output = run_console(AppState::new(), "2\n\nq\n");
    assert!(output.contains("No presentations scheduled"), "{output}");
}

#[test]
fn test_view_with_location_filter_is_case_insensitive() {
    let output = run_console(seeded_state(), "2\nnyc\nq\n");
    assert!(output.contains("Acme"), "{output}");
}

#[test]
fn test_schedule_conflict_is_reported() {
    let input = "1\nBeta\nNYC\n2024-06-01\n09:30\n10:30\nq\n";
    let output = run_console(seeded_state(), input);

    assert!(
        output.contains("Scheduling conflict with existing booking"),
        "{output}"
    );
    assert!(output.contains("Acme"), "{output}");
}

#[test]
fn test_check_availability_taken_slot() {
    let input = "3\nNYC\n2024-06-01\n09:30\n10:30\nq\n";
    let output = run_console(seeded_state(), input);

    assert!(output.contains("Time slot not available:"), "{output}");
    assert!(output.contains("Acme"), "{output}");
}

#[test]
fn test_check_availability_free_slot() {
    let input = "3\nNYC\n2024-06-01\n10:00\n11:00\nq\n";
    let output = run_console(seeded_state(), input);

    assert!(output.contains("This time slot is available!"), "{output}");
}

#[test]
fn test_availability_check_leaves_no_booking_behind() {
    let state = seeded_state();
    run_console(state.clone(), "3\nNYC\n2024-06-01\n10:00\n11:00\nq\n");
    assert_eq!(state.scheduler().len(), 1);
}

#[test]
fn test_invalid_date_is_reported() {
    let output = run_console(AppState::new(), "1\nAcme\nNYC\nJune first\n");
    assert!(output.contains("Error: invalid date 'June first'"), "{output}");
}

#[test]
fn test_invalid_time_range_is_reported() {
    let input = "1\nAcme\nNYC\n2024-06-01\n10:00\n09:00\nq\n";
    let output = run_console(AppState::new(), input);
    assert!(
        output.contains("Error: End time 09:00 cannot be before start time 10:00"),
        "{output}"
    );
}

#[test]
fn test_remove_flow() {
    let state = seeded_state();
    let input = "4\nAcme\nNYC\n2024-06-01\n09:00\n10:00\nq\n";
    let output = run_console(state.clone(), input);

    assert!(output.contains("Removed 1 matching entry(ies)"), "{output}");
    assert!(state.scheduler().is_empty());
}

#[test]
fn test_remove_without_match_reports_noop() {
    let input = "4\nBeta\nNYC\n2024-06-01\n09:00\n10:00\nq\n";
    let output = run_console(seeded_state(), input);
    assert!(output.contains("No matching presentation found"), "{output}");
}

#[test]
fn test_dump_json() {
    let output = run_console(seeded_state(), "5\nq\n");
    assert!(output.contains("\"company_name\": \"Acme\""), "{output}");
    assert!(output.contains("\"location\": \"NYC\""), "{output}");
}

#[test]
fn test_unknown_command_is_reported() {
    let output = run_console(AppState::new(), "banana\nq\n");
    assert!(output.contains("Unknown command: banana"), "{output}");
}

#[test]
fn test_end_of_input_terminates_loop() {
    // No explicit quit; the loop must end when input runs out.
    let output = run_console(AppState::new(), "");
    assert!(output.contains("IPO Roadshow Scheduler"), "{output}");
}
