//! DXF file reader

mod entity_builder;
mod section_reader;
mod stream_reader;
mod table_reader;
mod text_reader;

pub use entity_builder::{CircleBuilder, EntityBuilder, PolygonBuilder, TextBuilder};
pub use section_reader::EntityReader;
pub use stream_reader::{DxfStreamReader, Lines};
pub use table_reader::{read_entity_layers, TableReader};
pub use text_reader::DxfTextReader;

use super::code_page::{encoding_from_code_page, is_unicode_version};
use super::section::{split_sections, SectionTable};
use crate::document::Drawing;
use crate::error::{DxfError, Result};
use encoding_rs::Encoding;
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;
use tracing::debug;

/// Configuration for the DXF reader.
#[derive(Debug, Clone)]
pub struct DxfReaderConfiguration {
    /// Decoding for lines that are not valid UTF-8.
    ///
    /// Default: `None` (Latin-1, byte to char).
    pub encoding: Option<&'static Encoding>,

    /// When `true`, a line that is not valid UTF-8 ends the read with
    /// [`DxfError::Encoding`] instead of being decoded with the fallback.
    pub strict_encoding: bool,

    /// When `true`, `$DWGCODEPAGE` in the HEADER section of a pre-2007
    /// drawing overrides `encoding`.
    pub detect_code_page: bool,

    /// Lower every circle into a polygon with this many sides when building
    /// a [`Drawing`]. `None` keeps circles apart from polygons.
    pub circle_sides: Option<usize>,
}

impl Default for DxfReaderConfiguration {
    fn default() -> Self {
        Self {
            encoding: None,
            strict_encoding: false,
            detect_code_page: true,
            circle_sides: None,
        }
    }
}

/// DXF file reader
pub struct DxfReader {
    reader: Box<dyn DxfStreamReader>,
    config: DxfReaderConfiguration,
}

impl DxfReader {
    /// Create a new DXF reader from any reader
    pub fn from_reader<R: Read + Seek + 'static>(reader: R) -> Result<Self> {
        let mut buf_reader = BufReader::new(reader);

        if Self::is_binary(&mut buf_reader)? {
            return Err(DxfError::Custom("binary DXF files are not supported".to_string()));
        }

        Ok(Self {
            reader: Box::new(DxfTextReader::new(buf_reader)?),
            config: DxfReaderConfiguration::default(),
        })
    }

    /// Create a new DXF reader from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_reader(File::open(path)?)
    }

    /// Check if a stream contains binary DXF data
    fn is_binary<R: Read + Seek>(reader: &mut R) -> Result<bool> {
        const SENTINEL: &[u8] = b"AutoCAD Binary DXF";
        let mut buffer = vec![0u8; SENTINEL.len()];

        let mut filled = 0;
        while filled < buffer.len() {
            match reader.read(&mut buffer[filled..])? {
                0 => break,
                n => filled += n,
            }
        }

        // Always seek back to start after checking
        reader.seek(SeekFrom::Start(0))?;

        Ok(filled == SENTINEL.len() && buffer == SENTINEL)
    }

    /// Set the reader configuration.
    pub fn with_configuration(mut self, config: DxfReaderConfiguration) -> Self {
        if let Some(encoding) = config.encoding {
            self.reader.set_encoding(encoding);
        }
        self.reader.set_strict(config.strict_encoding);
        self.config = config;
        self
    }

    /// Current configuration
    pub fn configuration(&self) -> &DxfReaderConfiguration {
        &self.config
    }

    /// Read the stream and split it into sections
    pub fn read_sections(mut self) -> Result<SectionTable> {
        self.split()
    }

    /// Read the stream and extract the whole drawing
    pub fn read(mut self) -> Result<Drawing> {
        let sections = self.split()?;
        Ok(Drawing::from_sections_with(sections, self.config.circle_sides))
    }

    fn split(&mut self) -> Result<SectionTable> {
        if self.config.detect_code_page {
            self.read_code_page()?;
        }
        split_sections(Lines::new(self.reader.as_mut()))
    }

    /// Pre-scan the HEADER section for $ACADVER and $DWGCODEPAGE.
    ///
    /// After this call the reader is reset to the beginning. If the drawing
    /// predates AutoCAD 2007 and names a code page, the stream reader's
    /// fallback encoding is set accordingly.
    fn read_code_page(&mut self) -> Result<()> {
        let mut version: Option<String> = None;
        let mut code_page: Option<String> = None;
        let mut in_header = false;

        // value lines follow their variable name and group code
        let mut pending: Option<&'static str> = None;
        let mut skip = 0;

        while let Some(line) = self.reader.read_line()? {
            if !in_header {
                in_header = line == "HEADER";
                continue;
            }
            if line == "ENDSEC" {
                break;
            }
            if skip > 0 {
                skip -= 1;
                if skip == 0 {
                    match pending.take() {
                        Some("$ACADVER") => version = Some(line.trim().to_string()),
                        Some(_) => code_page = Some(line.trim().to_string()),
                        None => {}
                    }
                }
                continue;
            }
            match line.trim() {
                "$ACADVER" => pending = Some("$ACADVER"),
                "$DWGCODEPAGE" => pending = Some("$DWGCODEPAGE"),
                _ => continue,
            }
            skip = 2;
        }

        let unicode = version.as_deref().is_some_and(is_unicode_version);
        if !unicode {
            if let Some(encoding) = code_page.as_deref().and_then(encoding_from_code_page) {
                debug!(code_page = ?code_page, encoding = encoding.name(), "code page detected");
                self.reader.set_encoding(encoding);
            }
        }

        // Reset reader to beginning for the full read
        self.reader.reset()
    }
}
