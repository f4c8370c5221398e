use colored::Colorize;

use crate::date::MonthYear;
use crate::render;
use crate::store::NoteStore;

use super::error::Result;
use super::note;

/// Interactive month view. Re-renders after every command; refused
/// navigation and unrenderable months print their diagnostic and leave
/// the current month as it is.
pub fn browse(store: &NoteStore, start: MonthYear) -> Result<()> {
    let mut current = start;
    loop {
        match render::render_month(current, store) {
            Ok(grid) => print!("{}", grid),
            Err(e) => println!("{}", e),
        }
        println!(
            "{}",
            "[n] next  [p] previous  [s] notes  [q] quit".bright_black()
        );

        let input: String = match promptly::prompt("> ") {
            Ok(input) => input,
            // End of input quits the view, same as `q`.
            Err(_) => break,
        };
        match input.trim() {
            "n" => current = current.next(),
            "p" => match current.prev() {
                Ok(prev) => current = prev,
                Err(e) => println!("{}", e),
            },
            "s" => note::list(store, current.month as i32),
            "q" => break,
            _ => {}
        }
    }
    Ok(())
}
