//! Text label entity (TEXT and MTEXT)

use super::{Entity, EntityKinds};
use crate::types::{BoundingBox2D, Point};
use nom::branch::alt;
use nom::character::complete::{anychar, char, digit0, satisfy};
use nom::combinator::value;
use nom::multi::fold_many0;
use nom::sequence::tuple;
use nom::IResult;

/// A text label
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// Layer name
    pub layer: String,
    /// Label content with formatting codes removed
    pub content: String,
    /// Insertion point used for containment tests
    pub anchor: Point,
}

impl Text {
    /// Create a new text with already clean content
    pub fn new(layer: impl Into<String>, content: impl Into<String>, anchor: Point) -> Self {
        Text {
            layer: layer.into(),
            content: content.into(),
            anchor,
        }
    }

    /// Create a text from raw drawing content.
    ///
    /// Returns `None` when nothing is left once formatting codes are stripped.
    pub fn from_raw(layer: impl Into<String>, raw: &str, anchor: Point) -> Option<Self> {
        let content = strip_formatting(raw);
        if content.is_empty() {
            return None;
        }
        Some(Text::new(layer, content, anchor))
    }
}

impl Entity for Text {
    fn layer(&self) -> &str {
        &self.layer
    }

    fn kind(&self) -> EntityKinds {
        EntityKinds::TEXT
    }

    fn entity_type(&self) -> &'static str {
        "TEXT"
    }

    fn bounding_box(&self) -> Option<BoundingBox2D> {
        Some(BoundingBox2D::from_point(self.anchor.location()))
    }
}

/// Remove MTEXT formatting from a raw label.
///
/// - `{...}` groups are unwrapped down to the text after the last `|` and `;`
/// - a leading `\` format run keeps only what follows its last `;`
/// - `\X<digits>` and `^X` control codes become spaces
/// - runs of spaces collapse and the result is trimmed
pub fn strip_formatting(raw: &str) -> String {
    let mut content = raw;

    if let Some(inner) = braced(content) {
        let inner = inner.trim();
        let inner = inner.strip_suffix(';').unwrap_or(inner);
        let segment = inner.rsplit('|').next().unwrap_or(inner);
        content = segment.rsplit(';').next().unwrap_or(segment).trim();
    }

    if content.starts_with('\\') {
        let trimmed = content.trim();
        content = trimmed.rsplit(';').next().unwrap_or(trimmed).trim();
    }

    let replaced = match replace_control_codes(content) {
        Ok((_, replaced)) => replaced,
        Err(_) => content.to_string(),
    };

    collapse_spaces(&replaced).trim().to_string()
}

/// Inner text of a single-line `{...}` group with at least one character inside
fn braced(content: &str) -> Option<&str> {
    let inner = content.strip_prefix('{')?.strip_suffix('}')?;
    if inner.is_empty() || inner.contains('\n') {
        return None;
    }
    Some(inner)
}

/// `\A1`, `\P`, `\H2` style codes
fn backslash_code(input: &str) -> IResult<&str, ()> {
    value(
        (),
        tuple((char('\\'), satisfy(|c| c.is_ascii_uppercase()), digit0)),
    )(input)
}

/// `^J` style caret codes
fn caret_code(input: &str) -> IResult<&str, ()> {
    value((), tuple((char('^'), satisfy(|c| c.is_ascii_uppercase()))))(input)
}

fn replace_control_codes(input: &str) -> IResult<&str, String> {
    fold_many0(
        alt((value(' ', alt((backslash_code, caret_code))), anychar)),
        String::new,
        |mut acc, c| {
            acc.push(c);
            acc
        },
    )(input)
}

fn collapse_spaces(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut previous_space = false;
    for c in input.chars() {
        if c == ' ' {
            if !previous_space {
                out.push(c);
            }
            previous_space = true;
        } else {
            out.push(c);
            previous_space = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_content_is_kept() {
        assert_eq!(strip_formatting("Kitchen"), "Kitchen");
        assert_eq!(strip_formatting("  Living   room "), "Living room");
    }

    #[test]
    fn test_braced_font_group() {
        assert_eq!(
            strip_formatting("{\\fArial|b0|i0|c0|p34;Kitchen}"),
            "Kitchen"
        );
        assert_eq!(strip_formatting("{\\C1;Bath;}"), "Bath");
    }

    #[test]
    fn test_leading_format_run() {
        assert_eq!(strip_formatting("\\A1;Bedroom 2"), "Bedroom 2");
    }

    #[test]
    fn test_control_codes_become_spaces() {
        assert_eq!(strip_formatting("Bed\\Proom"), "Bed room");
        assert_eq!(strip_formatting("Hall^JEast"), "Hall East");
        assert_eq!(strip_formatting("Office\\H2"), "Office");
        // lower-case letters are not control codes
        assert_eq!(strip_formatting("a\\b"), "a\\b");
    }

    #[test]
    fn test_empty_braces_are_not_unwrapped() {
        assert_eq!(strip_formatting("{}"), "{}");
    }

    #[test]
    fn test_from_raw_rejects_empty_content() {
        assert!(Text::from_raw("0", "   ", Point::new(0.0, 0.0)).is_none());
        assert!(Text::from_raw("0", "\\P", Point::new(0.0, 0.0)).is_none());
        let text = Text::from_raw("ROOMS", "{\\fArial;Lobby}", Point::new(1.0, 2.0)).unwrap();
        assert_eq!(text.content, "Lobby");
        assert_eq!(text.layer(), "ROOMS");
        assert_eq!(text.kind(), EntityKinds::TEXT);
    }
}
