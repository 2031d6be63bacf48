// Rust guideline compliant 2026-10-16

//! Batch scanner that walks files line by line and stops at the first hit.

use crate::config::LineNumbering;
use crate::models::Violation;
use crate::rules::check_line;
use crate::Result;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Scans a batch of files with a running line counter.
///
/// With [`LineNumbering::Global`] the counter is never reset between files,
/// so a reported number only locates a line together with its file name.
#[derive(Debug, Clone)]
pub struct Scanner {
    numbering: LineNumbering,
    counter: usize,
}

impl Scanner {
    /// Creates a scanner with the counter at zero.
    #[must_use]
    pub fn new(numbering: LineNumbering) -> Self {
        Self {
            numbering,
            counter: 0,
        }
    }

    /// Returns the number of lines counted so far.
    #[must_use]
    pub fn lines_seen(&self) -> usize {
        self.counter
    }

    /// Scans a single file.
    ///
    /// # Arguments
    ///
    /// * `root` - Directory `path` is relative to
    /// * `path` - Path reported in the violation
    ///
    /// # Returns
    ///
    /// The first violation in the file, or `None` if every line passes.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read.
    pub fn scan_file(&mut self, root: &Path, path: &Path) -> Result<Option<Violation>> {
        if self.numbering == LineNumbering::PerFile {
            self.counter = 0;
        }

        let mut reader = BufReader::new(File::open(root.join(path))?);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                return Ok(None);
            }

            for raw in split_lone_cr(&buf) {
                self.counter += 1;

                let line = String::from_utf8_lossy(raw);
                if let Some(hit) = check_line(&line) {
                    tracing::debug!(
                        path = %path.display(),
                        line = self.counter,
                        rule = %hit.rule,
                        "rule fired"
                    );
                    return Ok(Some(Violation {
                        path: path.to_path_buf(),
                        line_number: self.counter,
                        line: hit.reported,
                        rule: hit.rule,
                    }));
                }
            }
        }
    }

    /// Scans files in order and returns the first violation across the batch.
    ///
    /// # Errors
    ///
    /// Returns an error if any file up to the first violation cannot be read.
    pub fn scan_all<P: AsRef<Path>>(
        &mut self,
        root: &Path,
        paths: &[P],
    ) -> Result<Option<Violation>> {
        for path in paths {
            if let Some(violation) = self.scan_file(root, path.as_ref())? {
                return Ok(Some(violation));
            }
        }
        Ok(None)
    }
}

/// Splits a chunk ending in `\n` (or EOF) at lone `\r` terminators.
///
/// Each piece keeps its terminator; `\r\n` stays a single terminator.
fn split_lone_cr(chunk: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut start = 0;
    for (i, &byte) in chunk.iter().enumerate() {
        if byte == b'\r' && chunk.get(i + 1) != Some(&b'\n') {
            lines.push(&chunk[start..=i]);
            start = i + 1;
        }
    }
    if start < chunk.len() {
        lines.push(&chunk[start..]);
    }
    lines
}
