/// Slide part generation.
use crate::pptx::format::{ImageFormat, TextFormat};
use crate::pptx::shape::Shape;
use crate::{Error, Result};

/// A slide holding shapes in insertion order.
#[derive(Debug, Clone)]
pub struct Slide {
    /// Slide ID (unique identifier)
    pub(crate) slide_id: u32,
    /// Shapes on the slide
    pub(crate) shapes: Vec<Shape>,
}

impl Slide {
    pub(crate) fn new(slide_id: u32) -> Self {
        Self {
            slide_id,
            shapes: Vec::new(),
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Add a single-run text box. Positions and sizes are in EMUs.
    pub fn add_text_box(
        &mut self,
        text: &str,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        format: TextFormat,
    ) {
        // IDs: 1 = group shape, user shapes from 2
        let shape_id = (self.shapes.len() + 2) as u32;
        let shape =
            Shape::new_text_box(shape_id, text.to_string(), x, y, width, height, format);
        self.shapes.push(shape);
    }

    /// Add a picture from raw bytes. Positions and sizes are in EMUs.
    ///
    /// The image format is detected from the data's magic number.
    pub fn add_picture_from_bytes(
        &mut self,
        data: Vec<u8>,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        description: Option<String>,
    ) -> Result<()> {
        let format = ImageFormat::detect_from_bytes(&data)
            .ok_or_else(|| Error::UnsupportedImage("unknown image format".to_string()))?;

        let shape_id = (self.shapes.len() + 2) as u32;
        let desc = description.unwrap_or_else(|| "Picture".to_string());
        let shape = Shape::new_picture(shape_id, data, format, x, y, width, height, desc);
        self.shapes.push(shape);

        Ok(())
    }

    /// Get the number of shapes on the slide.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Collect all images on this slide, in shape order.
    pub(crate) fn images(&self) -> Vec<(&[u8], ImageFormat)> {
        self.shapes
            .iter()
            .filter_map(|shape| shape.image_data())
            .collect()
    }

    /// Generate slide XML content.
    ///
    /// `image_rel_ids` holds one relationship ID per picture shape, in shape
    /// order; they are consumed as pictures are serialized.
    pub(crate) fn to_xml(&self, image_rel_ids: &[String]) -> Result<String> {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);

        xml.push_str(
            r#"<p:sld xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
        );
        xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );

        xml.push_str("<p:cSld>");
        xml.push_str("<p:spTree>");

        // Group shape properties (required)
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        let mut image_counter = 0usize;
        for shape in &self.shapes {
            let rel_id = if shape.image_data().is_some() {
                let rid = image_rel_ids.get(image_counter).map(|s| s.as_str());
                image_counter += 1;
                rid
            } else {
                None
            };
            shape.to_xml(&mut xml, rel_id)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}
