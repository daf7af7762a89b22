//! Text to polygon containment mapping

use crate::entities::{Polygon, PolygonId, Text};
use ahash::AHashSet;
use tracing::debug;

/// A polygon and the texts whose anchor it contains, in text order
#[derive(Debug, Clone)]
pub struct MappingEntry<'a> {
    pub polygon: &'a Polygon,
    pub texts: Vec<&'a Text>,
}

impl MappingEntry<'_> {
    /// Number of texts inside the polygon
    pub fn text_count(&self) -> usize {
        self.texts.len()
    }

    /// Check whether no text falls inside the polygon
    pub fn is_unlabeled(&self) -> bool {
        self.texts.is_empty()
    }
}

/// Containment mapping between texts and polygons.
///
/// Every polygon has an entry, in polygon order. A text inside several
/// overlapping polygons appears in each of their entries.
#[derive(Debug, Clone)]
pub struct Mapping<'a> {
    entries: Vec<MappingEntry<'a>>,
    texts: &'a [Text],
    matched: AHashSet<usize>,
}

impl<'a> Mapping<'a> {
    /// Test every text anchor against every polygon
    pub fn build(texts: &'a [Text], polygons: &'a [Polygon]) -> Self {
        let mut matched = AHashSet::new();

        let entries: Vec<MappingEntry<'a>> = polygons
            .iter()
            .map(|polygon| {
                let mut inside = Vec::new();
                for (index, text) in texts.iter().enumerate() {
                    if polygon.contains(&text.anchor) {
                        inside.push(text);
                        matched.insert(index);
                    }
                }
                MappingEntry {
                    polygon,
                    texts: inside,
                }
            })
            .collect();

        let mapping = Self {
            entries,
            texts,
            matched,
        };
        debug!(
            polygons = mapping.len(),
            labeled = mapping.labeled().count(),
            orphans = mapping.orphan_count(),
            "mapping built"
        );
        mapping
    }

    /// All entries, in polygon order
    pub fn entries(&self) -> &[MappingEntry<'a>] {
        &self.entries
    }

    /// Entry of a polygon
    pub fn get(&self, id: PolygonId) -> Option<&MappingEntry<'a>> {
        self.entries.iter().find(|entry| entry.polygon.id == id)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether there are no polygons
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries holding at least one text
    pub fn labeled(&self) -> impl Iterator<Item = &MappingEntry<'a>> + '_ {
        self.entries.iter().filter(|entry| !entry.is_unlabeled())
    }

    /// Entries holding no text
    pub fn unlabeled(&self) -> impl Iterator<Item = &MappingEntry<'a>> + '_ {
        self.entries.iter().filter(|entry| entry.is_unlabeled())
    }

    /// Texts that fall inside no polygon, in text order
    pub fn orphans(&self) -> impl Iterator<Item = &'a Text> + '_ {
        let texts = self.texts;
        (0..texts.len())
            .filter(move |index| !self.matched.contains(index))
            .map(move |index| &texts[index])
    }

    fn orphan_count(&self) -> usize {
        self.texts.len() - self.matched.len()
    }
}

/// Map every text to the polygons containing its anchor
pub fn build_mapping<'a>(texts: &'a [Text], polygons: &'a [Polygon]) -> Mapping<'a> {
    Mapping::build(texts, polygons)
}
