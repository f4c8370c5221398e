use std::fs::{File, OpenOptions};
use std::io::{self, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use std::result;

/// Capacity of a record's text field in bytes.
pub const TEXT_CAP: usize = 50;

/// On-disk record: day and month as little-endian i32, then the
/// NUL-padded text field. No header, no terminator; end of file ends the
/// sequence.
const RECORD_LEN: usize = 4 + 4 + TEXT_CAP;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = result::Result<T, Error>;

/// A note attached to a day of a month. Day and month are stored as
/// given; the store does not range-check them, and several notes may
/// share the same day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub day: i32,
    pub month: i32,
    pub text: String,
}

impl Note {
    /// Builds a note, clipping the text to [`TEXT_CAP`] bytes on a
    /// character boundary.
    pub fn new(day: i32, month: i32, text: &str) -> Self {
        Self {
            day,
            month,
            text: clip(text).to_string(),
        }
    }

    fn encode(&self) -> [u8; RECORD_LEN] {
        let mut buf = [0; RECORD_LEN];
        buf[..4].copy_from_slice(&self.day.to_le_bytes());
        buf[4..8].copy_from_slice(&self.month.to_le_bytes());
        let text = clip(&self.text).as_bytes();
        buf[8..8 + text.len()].copy_from_slice(text);
        buf
    }

    fn decode(buf: &[u8; RECORD_LEN]) -> Self {
        let day = i32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
        let month = i32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
        let text = &buf[8..];
        let end = text.iter().position(|&b| b == 0).unwrap_or(TEXT_CAP);
        Self {
            day,
            month,
            text: String::from_utf8_lossy(&text[..end]).into_owned(),
        }
    }
}

fn clip(text: &str) -> &str {
    if text.len() <= TEXT_CAP {
        return text;
    }
    let mut end = TEXT_CAP;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// Append-only flat file of note records. Every operation opens the
/// file, runs a single sequential pass and closes it again; an absent
/// file reads as an empty store.
#[derive(Debug, Clone)]
pub struct NoteStore {
    path: PathBuf,
}

impl NoteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one record, creating the file on first use.
    pub fn append(&self, note: &Note) -> Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        file.write_all(&note.encode())?;
        Ok(())
    }

    /// Whether any record matches both day and month exactly.
    pub fn exists(&self, day: i32, month: i32) -> Result<bool> {
        let mut file = match self.open_for_scan()? {
            Some(file) => file,
            None => return Ok(false),
        };
        let mut buf = [0; RECORD_LEN];
        while read_record(&mut file, &mut buf)? {
            let note = Note::decode(&buf);
            if note.day == day && note.month == month {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// All notes of a month, in insertion order.
    pub fn month_notes(&self, month: i32) -> Result<Vec<Note>> {
        let mut file = match self.open_for_scan()? {
            Some(file) => file,
            None => return Ok(Vec::new()),
        };
        let mut notes = Vec::new();
        let mut buf = [0; RECORD_LEN];
        while read_record(&mut file, &mut buf)? {
            let note = Note::decode(&buf);
            if note.month == month {
                notes.push(note);
            }
        }
        Ok(notes)
    }

    fn open_for_scan(&self) -> Result<Option<File>> {
        match File::open(&self.path) {
            Ok(file) => Ok(Some(file)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Reads one whole record. A clean end of file, or a trailing partial
/// record, ends the sequence.
fn read_record(file: &mut File, buf: &mut [u8; RECORD_LEN]) -> Result<bool> {
    match file.read_exact(buf) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(false),
        Err(e) => Err(e.into()),
    }
}
