//! Shared fixtures for integration tests.

#![allow(dead_code)]

use regex::Regex;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// In-memory console; clones share the same buffer so a test can read what
/// the logger wrote.
#[derive(Debug, Clone, Default)]
pub struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        let buf = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Lines including their trailing newline.
    pub fn lines(&self) -> Vec<String> {
        self.contents()
            .split_inclusive('\n')
            .map(ToString::to_string)
            .collect()
    }
}

impl Write for Capture {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// `MM/DD/YY HH:MM:SS - `, plus the `secs.micros - ` field under `debug-timing`.
pub fn prefix_regex() -> Regex {
    Regex::new(r"^\d{2}/\d{2}/\d{2} \d{2}:\d{2}:\d{2} - (\d+\.\d{6} - )?").unwrap()
}

/// The caller's text after the time prefix.
pub fn strip_prefix(line: &str) -> &str {
    let re = prefix_regex();
    let m = re.find(line).expect("line has no time prefix");
    &line[m.end()..]
}
