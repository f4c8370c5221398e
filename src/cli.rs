use std::path::PathBuf;

use chrono::{Datelike, Local};
use clap::{Parser, Subcommand};
use directories::ProjectDirs;

use crate::date::{Date, MonthYear};
use crate::store::NoteStore;

mod error;
mod grid;
mod lookup;
mod note;

#[derive(Debug, Parser)]
#[command(about = "Perpetual calendar with flat-file day notes")]
pub struct Opt {
    /// Note store file
    #[arg(short, long)]
    file: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the weekday of a date
    Day { day: u32, month: u32, year: i32 },
    /// Browse month grids interactively [default]
    Grid {
        month: Option<u32>,
        year: Option<i32>,
    },
    /// Record a note for a day
    Note,
    /// List all notes of a month
    Notes { month: u32 },
}

fn default_store_path() -> PathBuf {
    ProjectDirs::from("", "", "almanac")
        .expect("could not determine data dir")
        .data_dir()
        .join("notes.dat")
}

fn current_month() -> MonthYear {
    let today = Local::now().naive_local().date();
    MonthYear::new(today.month(), today.year())
}

pub fn run() -> anyhow::Result<()> {
    let opt = Opt::parse();
    let store = NoteStore::new(opt.file.unwrap_or_else(default_store_path));

    match opt.command {
        Some(Command::Day { day, month, year }) => lookup::day(Date::new(day, month, year)),
        Some(Command::Grid { month, year }) => {
            let current = current_month();
            let start = MonthYear::new(
                month.unwrap_or(current.month),
                year.unwrap_or(current.year),
            );
            grid::browse(&store, start)?;
        }
        Some(Command::Note) => note::add(&store)?,
        Some(Command::Notes { month }) => note::list(&store, month as i32),
        None => grid::browse(&store, current_month())?,
    }

    Ok(())
}
