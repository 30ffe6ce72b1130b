//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.
//!
//! # Output Format
//!
//! ## Fetch
//!
//! ```text
//! Downloading ALEX from https://i.postimg.cc/jjmMvWwT/ALEX.png
//! Saved ALEX → web-images/alex.webp (800x400, 31822 bytes)
//! Skipping BRUNO (already exists at web-images/bruno.webp)
//! ```
//!
//! ## Check
//!
//! ```text
//! 001 ALEX → web-images/alex.webp (fetch)
//! 002 BRUNO → web-images/bruno.webp (exists, skip)
//!
//! 77 images: 1 to skip, 76 to fetch
//! ```

use crate::process::{PlannedAction, PlannedEntry, ProcessEvent};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format one progress event.
pub fn format_process_event(event: &ProcessEvent) -> String {
    match event {
        ProcessEvent::Skipped { label, destination } => format!(
            "Skipping {} (already exists at {})",
            label,
            destination.display()
        ),
        ProcessEvent::Fetching { label, url } => format!("Downloading {} from {}", label, url),
        ProcessEvent::Saved {
            label,
            destination,
            width,
            height,
            bytes,
        } => format!(
            "Saved {} → {} ({}x{}, {} bytes)",
            label,
            destination.display(),
            width,
            height,
            bytes
        ),
    }
}

/// Print one progress event to stdout.
pub fn print_process_event(event: &ProcessEvent) {
    println!("{}", format_process_event(event));
}

/// Format the dry-run listing produced by [`plan`](crate::process::plan).
pub fn format_check_output(planned: &[PlannedEntry]) -> Vec<String> {
    let mut lines: Vec<String> = planned
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let action = match entry.action {
                PlannedAction::Skip => "exists, skip",
                PlannedAction::Fetch => "fetch",
                PlannedAction::Refetch => "exists, overwrite",
            };
            format!(
                "{} {} → {} ({})",
                format_index(i + 1),
                entry.label,
                entry.destination.display(),
                action
            )
        })
        .collect();

    let skipped = planned
        .iter()
        .filter(|e| e.action == PlannedAction::Skip)
        .count();
    lines.push(String::new());
    lines.push(format!(
        "{} images: {} to skip, {} to fetch",
        planned.len(),
        skipped,
        planned.len() - skipped
    ));
    lines
}

/// Print check output to stdout.
pub fn print_check_output(planned: &[PlannedEntry]) {
    for line in format_check_output(planned) {
        println!("{}", line);
    }
}
