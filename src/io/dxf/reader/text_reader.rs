//! DXF ASCII text reader

use super::stream_reader::DxfStreamReader;
use crate::error::{DxfError, Result};
use encoding_rs::Encoding;
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom};

const BYTE_ORDER_MARK: &str = "\u{feff}";

/// DXF ASCII text file reader
///
/// Lines are returned verbatim apart from their `\n` or `\r\n` terminator:
/// the fixed-width group code tokens depend on leading spaces surviving.
pub struct DxfTextReader<R: Read + Seek> {
    reader: BufReader<R>,
    line_number: usize,
    /// Non-UTF8 fallback encoding.  `None` means use Latin-1 (byte-to-char).
    encoding: Option<&'static Encoding>,
    strict: bool,
}

impl<R: Read + Seek> DxfTextReader<R> {
    /// Create a new DXF text reader
    pub fn new(reader: BufReader<R>) -> Result<Self> {
        Ok(Self {
            reader,
            line_number: 0,
            encoding: None,
            strict: false,
        })
    }

    fn decode(&self, bytes: Vec<u8>) -> Result<String> {
        match String::from_utf8(bytes) {
            Ok(line) => Ok(line),
            Err(err) if self.strict => Err(DxfError::Encoding {
                line: self.line_number,
                message: err.utf8_error().to_string(),
            }),
            Err(err) => {
                let bytes = err.into_bytes();
                Ok(match self.encoding {
                    Some(encoding) => encoding.decode_without_bom_handling(&bytes).0.into_owned(),
                    // Latin-1 is a 1:1 mapping of bytes 0-255 to Unicode code points
                    None => bytes.iter().map(|&b| b as char).collect(),
                })
            }
        }
    }
}

impl<R: Read + Seek> DxfStreamReader for DxfTextReader<R> {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }

        if bytes.last() == Some(&b'\n') {
            bytes.pop();
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
        }

        self.line_number += 1;
        let line = self.decode(bytes)?;

        if self.line_number == 1 {
            if let Some(rest) = line.strip_prefix(BYTE_ORDER_MARK) {
                return Ok(Some(rest.to_string()));
            }
        }
        Ok(Some(line))
    }

    fn line_number(&self) -> usize {
        self.line_number
    }

    fn reset(&mut self) -> Result<()> {
        self.reader.seek(SeekFrom::Start(0))?;
        self.line_number = 0;
        Ok(())
    }

    fn set_encoding(&mut self, encoding: &'static Encoding) {
        self.encoding = Some(encoding);
    }

    fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }
}
