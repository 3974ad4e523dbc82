/// Presentation root object and presentation.xml generation.
use std::fmt::Write as FmtWrite;
use std::path::Path;

use crate::pptx::package;
use crate::pptx::slide::Slide;
use crate::Result;

/// A presentation under construction.
///
/// Dimensions are EMUs (English Metric Units, 914,400 EMU = 1 inch).
#[derive(Debug)]
pub struct Presentation {
    /// Slides in the presentation
    pub(crate) slides: Vec<Slide>,
    /// Slide width in EMUs
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
}

impl Presentation {
    /// Create a new empty presentation with default dimensions.
    ///
    /// Default size is 10" x 7.5" (standard 4:3 aspect ratio).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: 9_144_000,
            slide_height: 6_858_000,
        }
    }

    /// Set the slide canvas size in EMUs.
    pub fn set_slide_size(&mut self, width: i64, height: i64) {
        self.slide_width = width;
        self.slide_height = height;
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Add a new slide to the presentation.
    pub fn add_slide(&mut self) -> &mut Slide {
        let slide_id = (self.slides.len() + 256) as u32;
        self.slides.push(Slide::new(slide_id));
        self.slides.last_mut().unwrap()
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Generate presentation.xml content.
    ///
    /// `slide_rel_ids` holds the relationship ID for each slide in order
    /// (e.g. `["rId2", "rId3", ...]`).
    pub(crate) fn presentation_xml(&self, slide_rel_ids: &[String]) -> Result<String> {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<p:presentation xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#);

        xml.push_str("<p:sldMasterIdLst>");
        xml.push_str(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#);
        xml.push_str("</p:sldMasterIdLst>");

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (index, slide) in self.slides.iter().enumerate() {
                let rel_id = slide_rel_ids
                    .get(index)
                    .map(|s| s.as_str())
                    .ok_or_else(|| {
                        crate::Error::Xml(format!("Missing relationship ID for slide {}", index))
                    })?;
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    rel_id
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )?;
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");

        Ok(xml)
    }

    /// Serialize the whole package to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        package::write_package(self)
    }

    /// Write the package to a file.
    ///
    /// The package is serialized in memory first, so on error nothing is
    /// written and an existing file at `path` is left untouched.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}
