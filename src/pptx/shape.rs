/// Shape types and DrawingML serialization.
use std::fmt::Write as FmtWrite;

use crate::pptx::format::{ImageFormat, TextFormat};
use crate::pptx::xml::escape_xml;
use crate::{Error, Result};

/// A shape on a slide: a text box or a picture.
#[derive(Debug, Clone)]
pub struct Shape {
    /// Shape ID, unique within the slide
    pub(crate) shape_id: u32,
    pub(crate) kind: ShapeKind,
}

#[derive(Debug, Clone)]
pub(crate) enum ShapeKind {
    TextBox {
        text: String,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        format: TextFormat,
    },
    Picture {
        data: Vec<u8>,
        format: ImageFormat,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        description: String,
    },
}

impl Shape {
    pub(crate) fn new_text_box(
        shape_id: u32,
        text: String,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        format: TextFormat,
    ) -> Self {
        Self {
            shape_id,
            kind: ShapeKind::TextBox {
                text,
                x,
                y,
                width,
                height,
                format,
            },
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new_picture(
        shape_id: u32,
        data: Vec<u8>,
        format: ImageFormat,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        description: String,
    ) -> Self {
        Self {
            shape_id,
            kind: ShapeKind::Picture {
                data,
                format,
                x,
                y,
                width,
                height,
                description,
            },
        }
    }

    /// Get image data if this shape is a picture.
    pub(crate) fn image_data(&self) -> Option<(&[u8], ImageFormat)> {
        match &self.kind {
            ShapeKind::Picture { data, format, .. } => Some((data.as_slice(), *format)),
            _ => None,
        }
    }

    /// Generate XML for this shape.
    ///
    /// `rel_id` is the image relationship for pictures; text boxes ignore it.
    pub(crate) fn to_xml(&self, xml: &mut String, rel_id: Option<&str>) -> Result<()> {
        match &self.kind {
            ShapeKind::TextBox {
                text,
                x,
                y,
                width,
                height,
                format,
            } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="Text Box {}"/>"#,
                    self.shape_id, self.shape_id
                )?;
                xml.push_str("<p:cNvSpPr txBox=\"1\"/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                xml.push_str("<a:xfrm>");
                write!(xml, r#"<a:off x="{}" y="{}"/>"#, x, y)?;
                write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, width, height)?;
                xml.push_str("</a:xfrm>");
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("</p:spPr>");

                xml.push_str("<p:txBody>");
                // Word wrap on, fixed box size (no autofit)
                xml.push_str(r#"<a:bodyPr wrap="square" rtlCol="0"/>"#);
                xml.push_str("<a:lstStyle/>");
                xml.push_str("<a:p>");
                write!(xml, r#"<a:pPr algn="{}"/>"#, format.alignment.as_algn())?;
                xml.push_str("<a:r>");

                xml.push_str("<a:rPr lang=\"en-US\" dirty=\"0\"");

                if let Some(size) = format.size {
                    write!(xml, " sz=\"{}\"", crate::unit::pt_to_centipoints(size))?;
                }

                if format.bold {
                    xml.push_str(" b=\"1\"");
                }

                xml.push('>');

                // Schema order: fill before latin
                if let Some(color) = format.color {
                    write!(
                        xml,
                        "<a:solidFill><a:srgbClr val=\"{}\"/></a:solidFill>",
                        color.to_hex()
                    )?;
                }

                if let Some(ref font) = format.font {
                    write!(xml, "<a:latin typeface=\"{}\"/>", escape_xml(font))?;
                }

                xml.push_str("</a:rPr>");

                write!(xml, "<a:t>{}</a:t>", escape_xml(text))?;
                xml.push_str("</a:r>");
                xml.push_str("</a:p>");
                xml.push_str("</p:txBody>");

                xml.push_str("</p:sp>");
            },
            ShapeKind::Picture {
                data: _,
                format: _,
                x,
                y,
                width,
                height,
                description,
            } => {
                let rid = rel_id.ok_or_else(|| {
                    Error::Xml("Picture shape requires an image relationship ID".to_string())
                })?;

                xml.push_str("<p:pic>");
                xml.push_str("<p:nvPicPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="Picture {}" descr="{}"/>"#,
                    self.shape_id,
                    self.shape_id,
                    escape_xml(description)
                )?;
                xml.push_str("<p:cNvPicPr/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvPicPr>");

                xml.push_str("<p:blipFill>");
                write!(xml, r#"<a:blip r:embed="{}"/>"#, rid)?;
                xml.push_str("<a:stretch><a:fillRect/></a:stretch>");
                xml.push_str("</p:blipFill>");

                xml.push_str("<p:spPr>");
                xml.push_str("<a:xfrm>");
                write!(xml, r#"<a:off x="{}" y="{}"/>"#, x, y)?;
                write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, width, height)?;
                xml.push_str("</a:xfrm>");
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("</p:spPr>");
                xml.push_str("</p:pic>");
            },
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::pptx::format::Alignment;

    #[test]
    fn test_text_box_xml() {
        let format = TextFormat {
            font: Some("Arial".to_string()),
            size: Some(9.6),
            bold: true,
            color: Some(Rgb::from_hex("#a1b2c3").unwrap()),
            alignment: Alignment::Center,
        };
        let shape =
            Shape::new_text_box(2, "Hi & bye".to_string(), 100, 200, 300, 400, format);

        let mut xml = String::new();
        shape.to_xml(&mut xml, None).unwrap();

        assert!(xml.contains(r#"<a:off x="100" y="200"/>"#));
        assert!(xml.contains(r#"<a:ext cx="300" cy="400"/>"#));
        assert!(xml.contains(r#"<a:pPr algn="ctr"/>"#));
        assert!(xml.contains(r#"sz="960""#));
        assert!(xml.contains(r#"b="1""#));
        assert!(xml.contains(r#"<a:srgbClr val="A1B2C3"/>"#));
        assert!(xml.contains(r#"<a:latin typeface="Arial"/>"#));
        assert!(xml.contains("<a:t>Hi &amp; bye</a:t>"));
        assert!(xml.contains(r#"wrap="square""#));
    }

    #[test]
    fn test_text_box_non_bold_omits_attr() {
        let shape = Shape::new_text_box(
            2,
            "x".to_string(),
            0,
            0,
            1,
            1,
            TextFormat::default(),
        );
        let mut xml = String::new();
        shape.to_xml(&mut xml, None).unwrap();
        assert!(!xml.contains(r#"b="1""#));
        assert!(xml.contains(r#"<a:pPr algn="l"/>"#));
    }

    #[test]
    fn test_picture_xml() {
        let shape = Shape::new_picture(
            2,
            vec![0x89, 0x50, 0x4E, 0x47],
            ImageFormat::Png,
            0,
            0,
            3_048_000,
            3_048_000,
            "Background".to_string(),
        );
        let mut xml = String::new();
        shape.to_xml(&mut xml, Some("rId2")).unwrap();

        assert!(xml.contains(r#"<a:blip r:embed="rId2"/>"#));
        assert!(xml.contains(r#"<a:ext cx="3048000" cy="3048000"/>"#));
        assert!(xml.contains(r#"descr="Background""#));
    }

    #[test]
    fn test_picture_requires_rel_id() {
        let shape = Shape::new_picture(
            2,
            Vec::new(),
            ImageFormat::Png,
            0,
            0,
            1,
            1,
            String::new(),
        );
        let mut xml = String::new();
        assert!(shape.to_xml(&mut xml, None).is_err());
    }
}
