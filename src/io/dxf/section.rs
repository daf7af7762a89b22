//! Partition of a DXF line stream into named sections

use crate::error::{DxfError, Result};
use indexmap::IndexMap;
use std::fmt;
use tracing::{debug, warn};

/// Line closing the current section
const END_SECTION: &str = "ENDSEC";

/// The sections a DXF file can contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionName {
    Header,
    Classes,
    Tables,
    Blocks,
    Entities,
    Objects,
    ThumbnailImage,
}

impl SectionName {
    /// Every section, in file order
    pub const ALL: [SectionName; 7] = [
        SectionName::Header,
        SectionName::Classes,
        SectionName::Tables,
        SectionName::Blocks,
        SectionName::Entities,
        SectionName::Objects,
        SectionName::ThumbnailImage,
    ];

    /// Recognise a section name line. The match is exact: no trimming, no case folding.
    pub fn from_token(line: &str) -> Option<Self> {
        match line {
            "HEADER" => Some(SectionName::Header),
            "CLASSES" => Some(SectionName::Classes),
            "TABLES" => Some(SectionName::Tables),
            "BLOCKS" => Some(SectionName::Blocks),
            "ENTITIES" => Some(SectionName::Entities),
            "OBJECTS" => Some(SectionName::Objects),
            "THUMBNAILIMAGE" => Some(SectionName::ThumbnailImage),
            _ => None,
        }
    }

    /// Section name as written in the file
    pub fn token(self) -> &'static str {
        match self {
            SectionName::Header => "HEADER",
            SectionName::Classes => "CLASSES",
            SectionName::Tables => "TABLES",
            SectionName::Blocks => "BLOCKS",
            SectionName::Entities => "ENTITIES",
            SectionName::Objects => "OBJECTS",
            SectionName::ThumbnailImage => "THUMBNAILIMAGE",
        }
    }

    /// Lower-case lookup key (`"entities"`, `"tables"`, ...)
    pub fn key(self) -> &'static str {
        match self {
            SectionName::Header => "header",
            SectionName::Classes => "classes",
            SectionName::Tables => "tables",
            SectionName::Blocks => "blocks",
            SectionName::Entities => "entities",
            SectionName::Objects => "objects",
            SectionName::ThumbnailImage => "thumbnailimage",
        }
    }

    /// Look a section up by its lower-case key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|name| name.key() == key)
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Raw section lines keyed by section name, in the order sections were opened
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionTable {
    sections: IndexMap<SectionName, Vec<String>>,
}

impl SectionTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines of a section
    pub fn get(&self, name: SectionName) -> Option<&[String]> {
        self.sections.get(&name).map(Vec::as_slice)
    }

    /// Lines of a section addressed by lower-case key
    pub fn get_by_key(&self, key: &str) -> Option<&[String]> {
        SectionName::from_key(key).and_then(|name| self.get(name))
    }

    /// Lines of the ENTITIES section, empty when the file has none
    pub fn entities(&self) -> &[String] {
        self.get(SectionName::Entities).unwrap_or(&[])
    }

    /// Lines of the TABLES section, empty when the file has none
    pub fn tables(&self) -> &[String] {
        self.get(SectionName::Tables).unwrap_or(&[])
    }

    /// Check whether a section was present
    pub fn contains(&self, name: SectionName) -> bool {
        self.sections.contains_key(&name)
    }

    /// Names of the sections present, in opening order
    pub fn names(&self) -> impl Iterator<Item = SectionName> + '_ {
        self.sections.keys().copied()
    }

    /// Number of sections present
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check whether no section was found
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Replace the lines held for a section
    pub fn insert(&mut self, name: SectionName, lines: Vec<String>) {
        self.sections.insert(name, lines);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SplitState {
    Outside,
    InSection(SectionName),
}

/// Incremental section splitter.
///
/// A section-name line opens a fresh buffer from any state (re-opening a
/// section replaces its earlier lines), `ENDSEC` closes it, and every other
/// line inside a section is kept verbatim. Lines outside any section are dropped.
#[derive(Debug)]
pub struct SectionSplitter {
    state: SplitState,
    table: SectionTable,
}

impl SectionSplitter {
    /// Create a splitter in the outside state
    pub fn new() -> Self {
        Self {
            state: SplitState::Outside,
            table: SectionTable::new(),
        }
    }

    /// Section currently being buffered
    pub fn current(&self) -> Option<SectionName> {
        match self.state {
            SplitState::Outside => None,
            SplitState::InSection(name) => Some(name),
        }
    }

    /// Feed one line
    pub fn push_line(&mut self, line: String) {
        if let Some(name) = SectionName::from_token(&line) {
            debug!(section = %name, "section opened");
            self.table.insert(name, Vec::new());
            self.state = SplitState::InSection(name);
            return;
        }

        if let SplitState::InSection(name) = self.state {
            if line == END_SECTION {
                let count = self.table.get(name).map_or(0, <[String]>::len);
                debug!(section = %name, lines = count, "section closed");
                self.state = SplitState::Outside;
            } else if let Some(lines) = self.table.sections.get_mut(&name) {
                lines.push(line);
            }
        }
    }

    /// Stop feeding and take the table
    pub fn finish(self) -> SectionTable {
        if let SplitState::InSection(name) = self.state {
            warn!(section = %name, "input ended inside a section");
        }
        self.table
    }
}

impl Default for SectionSplitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a line sequence into sections.
///
/// The first failing line aborts the split and its error is returned; no
/// partial table is produced.
pub fn split_sections<I, S, E>(lines: I) -> Result<SectionTable>
where
    I: IntoIterator<Item = std::result::Result<S, E>>,
    S: Into<String>,
    E: Into<DxfError>,
{
    let mut splitter = SectionSplitter::new();
    for line in lines {
        splitter.push_line(line.map_err(Into::<DxfError>::into)?.into());
    }
    Ok(splitter.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    fn ok_lines(raw: &[&str]) -> Vec<std::result::Result<String, Infallible>> {
        raw.iter().map(|s| Ok(s.to_string())).collect()
    }

    fn split(raw: &[&str]) -> SectionTable {
        split_sections(raw.iter().map(|s| Ok::<_, DxfError>(*s))).unwrap()
    }

    #[test]
    fn test_single_section() {
        let table = split(&["  0", "SECTION", "  2", "ENTITIES", "  0", "LINE", "  0", "ENDSEC", "  0", "EOF"]);
        // "  0" before ENDSEC belongs to the section
        assert_eq!(table.entities(), ["  0", "LINE", "  0"]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_outside_lines_are_dropped() {
        let table = split(&["junk", "TABLES", "a", "ENDSEC", "more junk"]);
        assert_eq!(table.tables(), ["a"]);
        assert!(table.get(SectionName::Header).is_none());
    }

    #[test]
    fn test_reopened_section_replaces_lines() {
        let table = split(&["ENTITIES", "first", "ENDSEC", "ENTITIES", "second", "ENDSEC"]);
        assert_eq!(table.entities(), ["second"]);
    }

    #[test]
    fn test_section_name_inside_section_restarts() {
        let table = split(&["HEADER", "h", "TABLES", "t", "ENDSEC"]);
        assert_eq!(table.get(SectionName::Header).unwrap(), ["h"]);
        assert_eq!(table.tables(), ["t"]);
        assert_eq!(table.names().collect::<Vec<_>>(), vec![SectionName::Header, SectionName::Tables]);
    }

    #[test]
    fn test_unterminated_section_is_kept() {
        let table = split(&["ENTITIES", "a", "b"]);
        assert_eq!(table.entities(), ["a", "b"]);
    }

    #[test]
    fn test_lines_are_verbatim() {
        let table = split(&["ENTITIES", "  8", " ROOMS ", "ENDSEC "]);
        // "ENDSEC " with a trailing space does not close the section
        assert_eq!(table.entities(), ["  8", " ROOMS ", "ENDSEC "]);
        assert!(SectionName::from_token(" ENTITIES").is_none());
    }

    #[test]
    fn test_lookup_by_key() {
        let table = split(&["THUMBNAILIMAGE", "x", "ENDSEC"]);
        assert_eq!(table.get_by_key("thumbnailimage").unwrap(), ["x"]);
        assert!(table.get_by_key("THUMBNAILIMAGE").is_none());
        assert!(table.contains(SectionName::ThumbnailImage));
    }

    #[test]
    fn test_error_aborts_split() {
        let lines: Vec<Result<String>> = vec![
            Ok("ENTITIES".to_string()),
            Err(DxfError::Custom("broken pipe".into())),
            Ok("ENDSEC".to_string()),
        ];
        let err = split_sections(lines).unwrap_err();
        assert_eq!(err.to_string(), "broken pipe");
    }

    #[test]
    fn test_infallible_source() {
        let table = split_sections(ok_lines(&["BLOCKS", "b", "ENDSEC"])).unwrap();
        assert_eq!(table.get(SectionName::Blocks).unwrap(), ["b"]);
    }

    #[test]
    fn test_incremental_splitter() {
        let mut splitter = SectionSplitter::new();
        assert_eq!(splitter.current(), None);
        splitter.push_line("OBJECTS".into());
        assert_eq!(splitter.current(), Some(SectionName::Objects));
        splitter.push_line("ENDSEC".into());
        assert_eq!(splitter.current(), None);
        assert!(splitter.finish().get(SectionName::Objects).unwrap().is_empty());
    }
}
