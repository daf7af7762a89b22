//! Positional lookahead over a section's lines
//!
//! Coordinates are not read sequentially: on a ` 10` line the X value sits one
//! line ahead and the Y value three lines ahead, with an optional ` 42` bulge
//! code four lines ahead. Every such read goes through [`LineCursor`], which
//! turns an out-of-range offset into [`DxfError::Incomplete`].

use super::DxfCode;
use crate::error::{DxfError, Result};
use crate::types::{Point, Vector2};

/// Offset of the X value from its code line
const X_OFFSET: usize = 1;
/// Offset of the Y value from the X code line
const Y_OFFSET: usize = 3;
/// Offset of the optional bulge code from the X code line
const BULGE_CODE_OFFSET: usize = 4;
/// Offset of the bulge value from the X code line
const BULGE_OFFSET: usize = 5;

/// Cursor anchored on one line of a section
#[derive(Debug, Clone, Copy)]
pub struct LineCursor<'a> {
    lines: &'a [String],
    position: usize,
}

impl<'a> LineCursor<'a> {
    /// Anchor a cursor at `position`
    pub fn new(lines: &'a [String], position: usize) -> Self {
        Self { lines, position }
    }

    /// Index of the anchor line
    pub fn position(&self) -> usize {
        self.position
    }

    /// One-based line number of the anchor within its section
    pub fn line_number(&self) -> usize {
        self.position + 1
    }

    /// Group code on the anchor line, if it is one
    pub fn code(&self) -> Option<DxfCode> {
        self.code_at(0)
    }

    /// Group code `offset` lines ahead, if that line is one
    pub fn code_at(&self, offset: usize) -> Option<DxfCode> {
        self.lines
            .get(self.position + offset)
            .and_then(|line| DxfCode::from_token(line))
    }

    /// Raw line `offset` lines ahead of the anchor
    pub fn value(&self, offset: usize) -> Result<&'a str> {
        self.lines
            .get(self.position + offset)
            .map(String::as_str)
            .ok_or(DxfError::Incomplete {
                line: self.line_number(),
                offset,
            })
    }

    /// Floating point value `offset` lines ahead
    pub fn real(&self, offset: usize) -> Result<f64> {
        let raw = self.value(offset)?;
        raw.trim()
            .parse::<f64>()
            .map_err(|_| self.invalid(offset, raw, "a real number"))
    }

    /// 16-bit integer `offset` lines ahead, as used by flags and color codes
    pub fn short(&self, offset: usize) -> Result<i16> {
        let raw = self.value(offset)?;
        raw.trim()
            .parse::<i16>()
            .map_err(|_| self.invalid(offset, raw, "a 16-bit integer"))
    }

    /// Non-negative count `offset` lines ahead
    pub fn count(&self, offset: usize) -> Result<usize> {
        let raw = self.value(offset)?;
        raw.trim()
            .parse::<usize>()
            .map_err(|_| self.invalid(offset, raw, "a vertex count"))
    }

    /// X/Y pair anchored on an X code line
    pub fn vector(&self) -> Result<Vector2> {
        Ok(Vector2::new(self.real(X_OFFSET)?, self.real(Y_OFFSET)?))
    }

    /// Vertex anchored on an X code line, with the bulge when a ` 42` code follows it
    pub fn vertex(&self) -> Result<Point> {
        let location = self.vector()?;
        let bulge = match self.code_at(BULGE_CODE_OFFSET) {
            Some(DxfCode::Bulge) => self.real(BULGE_OFFSET)?,
            _ => 0.0,
        };
        Ok(Point::with_bulge(location.x, location.y, bulge))
    }

    pub(crate) fn invalid(&self, offset: usize, raw: &str, expected: &'static str) -> DxfError {
        DxfError::InvalidValue {
            line: self.line_number() + offset,
            value: raw.to_string(),
            expected,
        }
    }
}
