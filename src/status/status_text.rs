use std::{collections::TryReserveError, fmt, io::{self, Read}};

use super::{classify, StatusState};

/*
 * Raw output of the status command. Kept as bytes so the menu line
 * reproduces it unmodified, even when truncation splits a UTF-8 sequence
 */
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusText(Vec<u8>);

impl StatusText {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn state(&self) -> StatusState {
        classify(&self.0)
    }
}

impl From<Vec<u8>> for StatusText {
    fn from(value: Vec<u8>) -> Self {
        StatusText(value)
    }
}

impl fmt::Display for StatusText {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

// Holds at most `capacity - 1` bytes, the last slot stays reserved
#[derive(Debug)]
pub struct StatusBuffer {
    bytes: Vec<u8>,
    capacity: usize,
}

impl StatusBuffer {
    pub fn allocate(capacity: usize) -> Result<Self, TryReserveError> {
        let mut bytes = Vec::new();
        bytes.try_reserve_exact(capacity)?;

        Ok(Self { bytes, capacity })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn limit(&self) -> usize {
        self.capacity.saturating_sub(1)
    }

    pub fn fill<R: Read>(&mut self, reader: R) -> io::Result<usize> {
        self.bytes.clear();

        reader.take(self.limit() as u64).read_to_end(&mut self.bytes)
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    pub fn into_text(self) -> StatusText {
        StatusText(self.bytes)
    }
}
