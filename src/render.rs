use std::result;

use colored::Colorize;

use crate::date::{self, month_length, MonthYear, MIN_YEAR};
use crate::store::{self, NoteStore};
use crate::weekday::{day_number, Weekday};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Date(#[from] date::Error),
    #[error("{0}")]
    Store(#[from] store::Error),
    #[error("day 1 of {my} has no valid weekday (index {index})")]
    FirstDayOutOfRange { my: MonthYear, index: i32 },
}

pub type Result<T> = result::Result<T, Error>;

const RULE: &str = "---------------------------";

/// Renders the grid for one month: title, weekday header and the days in
/// seven 4-character columns, day 1 placed under its computed weekday.
/// Days with a note in the store are marked `*` on a red background.
pub fn render_month(my: MonthYear, store: &NoteStore) -> Result<String> {
    let length = month_length(my.month, my.year)?;
    if my.year < MIN_YEAR {
        return Err(date::Error::BeforeMinYear(my.year).into());
    }
    let first = day_number(1, my.month, my.year);
    if !(0..7).contains(&first) {
        return Err(Error::FirstDayOutOfRange { my, index: first });
    }

    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("{}\n", my));
    out.push_str(RULE);
    out.push('\n');
    out.push_str(header().trim_end());
    out.push('\n');

    out.push_str(&"    ".repeat(first as usize));
    let mut col = first as u32;
    for day in 1..=length {
        let noted = store.exists(day as i32, my.month as i32)?;
        let num = format!("{:02}", day);
        if noted {
            out.push_str(&format!("*{} ", num.on_red()));
        } else {
            out.push_str(&format!(" {} ", num));
        }
        col += 1;
        if col % 7 == 0 {
            out.push('\n');
        }
    }
    if col % 7 != 0 {
        out.push('\n');
    }

    Ok(out)
}

fn header() -> String {
    let mut header = String::new();
    for index in 0..7 {
        let letter = Weekday::from_index(index).expect("index in range").letter();
        header.push_str(&format!(" {}  ", letter));
    }
    header
}

#[cfg(test)]
mod tests {
    use crate::store::Note;

    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> NoteStore {
        NoteStore::new(dir.path().join("notes.dat"))
    }

    fn plain(grid: &str) -> Vec<String> {
        grid.lines().map(|line| line.to_string()).collect()
    }

    #[test]
    fn february_2000_grid() {
        colored::control::set_override(false);
        let dir = tempfile::tempdir().unwrap();
        let grid = render_month(MonthYear::new(2, 2000), &store_in(&dir)).unwrap();
        let lines = plain(&grid);

        assert_eq!(lines[0], RULE);
        assert_eq!(lines[1], "February 2000");
        assert_eq!(lines[2], RULE);
        assert_eq!(lines[3], " S   M   T   W   T   F   S");
        // 1 Feb 2000 computes to Tuesday: two leading blank cells.
        assert_eq!(
            lines[4],
            format!("{} 01  02  03  04  05 ", "    ".repeat(2))
        );
        assert_eq!(lines[5], " 06  07  08  09  10  11  12 ");
        // 29 day cells, ending on the leap day.
        assert_eq!(lines[8], " 27  28  29 ");
        assert_eq!(lines.len(), 9);
        assert!(!grid.contains("30"));
    }

    #[test]
    fn first_row_with_single_cell() {
        colored::control::set_override(false);
        let dir = tempfile::tempdir().unwrap();
        // 1 Aug 2026 computes to Saturday, the last column.
        let grid = render_month(MonthYear::new(8, 2026), &store_in(&dir)).unwrap();
        let lines = plain(&grid);
        assert_eq!(lines[4], format!("{} 01 ", "    ".repeat(6)));
        assert_eq!(lines[5], " 02  03  04  05  06  07  08 ");
        assert_eq!(lines[9], " 30  31 ");
    }

    #[test]
    fn noted_days_are_marked() {
        colored::control::set_override(false);
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.append(&Note::new(5, 2, "pay rent")).unwrap();
        store.append(&Note::new(5, 3, "wrong month")).unwrap();

        let grid = render_month(MonthYear::new(2, 2000), &store).unwrap();
        assert!(grid.contains("*05 "));
        assert!(!grid.contains(" 05 "));
        // Only day 5 carries the marker.
        assert_eq!(grid.matches('*').count(), 1);
    }

    #[test]
    fn invalid_inputs_are_refused() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(matches!(
            render_month(MonthYear::new(13, 2000), &store),
            Err(Error::Date(date::Error::InvalidMonth(13)))
        ));
        assert!(matches!(
            render_month(MonthYear::new(1, 1599), &store),
            Err(Error::Date(date::Error::BeforeMinYear(1599)))
        ));
        // September 1600 is one of the months where the preserved weekday
        // calculation pushes day 1 out of range.
        assert!(matches!(
            render_month(MonthYear::new(9, 1600), &store),
            Err(Error::FirstDayOutOfRange { index: -1, .. })
        ));
    }
}
