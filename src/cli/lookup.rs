use crate::date::Date;
use crate::weekday::{day_number, weekday_name};

/// Prints the weekday of a date, or the validation diagnostic.
pub fn day(date: Date) {
    if let Err(e) = date.validate() {
        println!("{}", e);
        return;
    }
    println!("{}", weekday_name(day_number(date.day, date.month, date.year)));
}
