//! DXF line source trait

use crate::error::Result;
use encoding_rs::Encoding;

/// Trait for reading the raw lines of a DXF stream
pub trait DxfStreamReader {
    /// Read the next line without its terminator, `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>>;

    /// One-based number of the last line read
    fn line_number(&self) -> usize;

    /// Reset the reader to the beginning
    fn reset(&mut self) -> Result<()>;

    /// Set the decoding used for lines that are not valid UTF-8
    fn set_encoding(&mut self, encoding: &'static Encoding);

    /// Fail on lines that are not valid UTF-8 instead of decoding them
    fn set_strict(&mut self, strict: bool);
}

/// Iterator over the remaining lines of a stream reader
pub struct Lines<'a> {
    reader: &'a mut dyn DxfStreamReader,
    done: bool,
}

impl<'a> Lines<'a> {
    /// Iterate over `reader` from its current position
    pub fn new(reader: &'a mut dyn DxfStreamReader) -> Self {
        Self {
            reader,
            done: false,
        }
    }
}

impl Iterator for Lines<'_> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.reader.read_line() {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                // an error is reported once
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
