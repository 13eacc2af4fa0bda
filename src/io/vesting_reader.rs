//! Lazy reader over vesting-info CSV rows
//!
//! The vesting-info file is consumed opaquely: every row is handed out as the
//! ordered list of its comma-separated fields, with no header row and no
//! fixed field count. Rows are produced on demand while the transformation
//! iterates, in a single forward pass.
//!
//! ```no_run
//! use genesis_tools::io::{InputSource, VestingRows};
//! use std::path::PathBuf;
//!
//! let source = InputSource::File(PathBuf::from("i-4-vesting-type-accounts.csv"));
//! let rows = VestingRows::new(&source).unwrap();
//! for row in rows {
//!     match row {
//!         Ok(fields) => println!("{}", fields.join(" | ")),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! Blank lines are rows too: each one comes out as an empty row, and a line
//! ending in `\r\n` reads the same as one ending in `\n`.
//!
//! # Error Handling
//!
//! - Failing to open the input is returned from `new()`
//! - A malformed row (invalid UTF-8) or a read failure is yielded once as an
//!   `Err` item, after which the iterator is exhausted

use crate::io::source::InputSource;
use crate::types::GenesisError;
use csv::{ReaderBuilder, StringRecord, Terminator, Trim};
use std::cell::Cell;
use std::fmt;
use std::io::{self, Read};
use std::iter::FusedIterator;
use std::rc::Rc;

/// One vesting-info row: its fields in file order
pub type VestingRow = Vec<String>;

/// Passes reads through and records when the input reports end of stream
struct EofFlag<R> {
    inner: R,
    reached: Rc<Cell<bool>>,
}

impl<R: Read> Read for EofFlag<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        if n == 0 && !buf.is_empty() {
            self.reached.set(true);
        }
        Ok(n)
    }
}

/// Single-pass iterator over vesting-info rows
///
/// Not `Clone`: the underlying input can only be read once.
pub struct VestingRows {
    reader: csv::Reader<Box<dyn Read>>,
    record: StringRecord,
    at_eof: Rc<Cell<bool>>,
    /// Empty rows still owed before `pending`
    blank_rows: u64,
    blank_line: u64,
    pending: Option<(u64, VestingRow)>,
    next_line: u64,
    line: u64,
    finished: bool,
}

impl VestingRows {
    /// Open an input source and prepare it for streaming iteration
    ///
    /// # Errors
    ///
    /// Returns `GenesisError::FileAccess` if the source cannot be opened.
    pub fn new(source: &InputSource) -> Result<Self, GenesisError> {
        Ok(Self::from_reader(source.open()?))
    }

    /// Wrap any reader as a row sequence
    ///
    /// The CSV reader is configured to:
    /// - Treat the first line as data, not as a header
    /// - Accept rows with differing field counts
    /// - Keep fields exactly as written (no whitespace trimming)
    /// - End records at `\n` only, so blank lines can be counted
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        let at_eof = Rc::new(Cell::new(false));
        let boxed: Box<dyn Read> = Box::new(EofFlag {
            inner: reader,
            reached: Rc::clone(&at_eof),
        });
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::None)
            .terminator(Terminator::Any(b'\n'))
            .buffer_capacity(8 * 1024)
            .from_reader(boxed);

        Self {
            reader,
            record: StringRecord::new(),
            at_eof,
            blank_rows: 0,
            blank_line: 0,
            pending: None,
            next_line: 1,
            line: 0,
            finished: false,
        }
    }

    /// Line number of the most recently yielded row (0 before the first row)
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Queue the blank lines that the csv reader stepped over
    fn queue_blank_rows(&mut self, count: u64) {
        self.blank_rows = count;
        self.blank_line = self.next_line;
        self.next_line += count;
    }

    fn current_row(&self) -> VestingRow {
        // A `\r\n` line with nothing else on it
        if self.record.len() == 1 && &self.record[0] == "\r" {
            return VestingRow::new();
        }

        let mut row: VestingRow = self.record.iter().map(str::to_string).collect();
        if let Some(last) = row.last_mut() {
            if last.ends_with('\r') {
                last.pop();
            }
        }
        row
    }
}

impl Iterator for VestingRows {
    type Item = Result<VestingRow, GenesisError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.blank_rows > 0 {
            self.blank_rows -= 1;
            self.line = self.blank_line;
            self.blank_line += 1;
            return Some(Ok(VestingRow::new()));
        }
        if let Some((line, row)) = self.pending.take() {
            self.line = line;
            return Some(Ok(row));
        }
        if self.finished {
            return None;
        }

        // csv skips empty lines silently, so they are recovered from how many
        // lines each read consumed beyond the record itself.
        let start = self.reader.position().line();
        match self.reader.read_record(&mut self.record) {
            Ok(true) => {
                let consumed = self.reader.position().line() - start;
                let embedded: u64 = self
                    .record
                    .iter()
                    .map(|field| field.matches('\n').count() as u64)
                    .sum();
                let terminator = u64::from(!self.at_eof.get());
                self.queue_blank_rows(consumed.saturating_sub(embedded + terminator));

                let record_line = self.next_line;
                self.next_line += embedded + 1;
                self.pending = Some((record_line, self.current_row()));
                self.next()
            }
            Ok(false) => {
                self.finished = true;
                let trailing = self.reader.position().line() - start;
                self.queue_blank_rows(trailing);
                self.next()
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e.into()))
            }
        }
    }
}

impl FusedIterator for VestingRows {}

impl fmt::Debug for VestingRows {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VestingRows")
            .field("line", &self.line)
            .field("blank_rows", &self.blank_rows)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}
