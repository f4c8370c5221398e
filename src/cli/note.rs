use std::fs;

use colored::Colorize;

use crate::store::{Note, NoteStore, TEXT_CAP};

use super::error::Result;

/// Prompts for a day, month and text, then appends one record to the
/// store. Day and month are stored as given, without range checks.
pub fn add(store: &NoteStore) -> Result<()> {
    let day: i32 = promptly::prompt("Day (DD)")?;
    let month: i32 = promptly::prompt("Month (MM)")?;
    let text: String = promptly::prompt(format!("Note (up to {} characters)", TEXT_CAP))?;

    if let Some(parent) = store.path().parent() {
        fs::create_dir_all(parent)?;
    }
    match store.append(&Note::new(day, month, &text)) {
        Ok(()) => println!("Note saved"),
        Err(e) => println!("Failed to save note: {}", e),
    }
    Ok(())
}

/// Prints a month's notes in storage order. A store that cannot be read
/// is reported and treated as empty.
pub fn list(store: &NoteStore, month: i32) {
    let notes = match store.month_notes(month) {
        Ok(notes) => notes,
        Err(e) => {
            println!("{}", e);
            Vec::new()
        }
    };
    if notes.is_empty() {
        println!("No notes for this month");
        return;
    }
    for note in &notes {
        println!(
            "{} {}",
            format!("day {:2}:", note.day).bright_black(),
            note.text
        );
    }
}
