//! Layout-to-slide conversion.
//!
//! Computes text-box geometry from pixel coordinates and assembles the
//! single-slide presentation. Input y coordinates are baselines (SVG
//! convention), so the box top is shifted up by one font size; box height is
//! twice the font size, a fixed heuristic leaving room for one line plus
//! padding.

use crate::color::Rgb;
use crate::layout::{Anchor, Layout, TextElement};
use crate::pptx::{Alignment, Presentation, TextFormat};
use crate::unit::{inches_to_emu, px_to_emu, px_to_inches, px_to_pt};
use crate::Result;

/// Text-box placement in inches, before EMU conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxGeometry {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Compute the box geometry for one element.
///
/// `maxWidth` defaults to 0.8 x the canvas width. The left edge shifts by
/// the anchor (none, half width, full width), then left and top clamp to 0.
/// Nothing clamps against the right or bottom canvas edges; boxes may
/// overflow there.
pub fn element_box(layout_width: f64, el: &TextElement) -> BoxGeometry {
    let max_width = el.max_width.unwrap_or(layout_width * 0.8);
    let width = px_to_inches(max_width);
    let height = px_to_inches(el.font_size * 2.0);
    let top = px_to_inches(el.y - el.font_size);

    let x = px_to_inches(el.x);
    let left = match el.anchor {
        Anchor::Start => x,
        Anchor::Middle => x - width / 2.0,
        Anchor::End => x - width,
    };

    BoxGeometry {
        left: left.max(0.0),
        top: top.max(0.0),
        width,
        height,
    }
}

/// Paragraph alignment mirroring the element's anchor.
pub fn alignment_for(anchor: Anchor) -> Alignment {
    match anchor {
        Anchor::Start => Alignment::Left,
        Anchor::Middle => Alignment::Center,
        Anchor::End => Alignment::Right,
    }
}

/// Build the single-slide presentation: full-bleed background picture plus
/// one text box per element, in input order.
pub fn build_presentation(layout: &Layout, image: Vec<u8>) -> Result<Presentation> {
    let width = px_to_emu(layout.width);
    let height = px_to_emu(layout.height);

    let mut pres = Presentation::new();
    pres.set_slide_size(width, height);

    let slide = pres.add_slide();
    slide.add_picture_from_bytes(
        image,
        0,
        0,
        width,
        height,
        Some("Background".to_string()),
    )?;

    for el in &layout.elements {
        let geometry = element_box(layout.width, el);
        let format = TextFormat {
            font: Some(el.font_family.clone()),
            size: Some(px_to_pt(el.font_size)),
            bold: el.is_bold(),
            color: Some(Rgb::from_hex(&el.color)?),
            alignment: alignment_for(el.anchor),
        };

        slide.add_text_box(
            &el.text,
            inches_to_emu(geometry.left),
            inches_to_emu(geometry.top),
            inches_to_emu(geometry.width),
            inches_to_emu(geometry.height),
            format,
        );
    }

    Ok(pres)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    fn element(json: &str) -> TextElement {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_worked_example_geometry() {
        // 1000x1000 canvas, centered element at x=500, baseline y=100
        let el = element(r#"{"text":"Hi","x":500,"y":100,"fontSize":40,"anchor":"middle"}"#);
        let geometry = element_box(1000.0, &el);

        let width = 0.8 * 1000.0 / 300.0;
        assert!((geometry.width - width).abs() < 1e-12);
        assert!((geometry.left - (500.0 / 300.0 - width / 2.0)).abs() < 1e-12);
        assert!((geometry.top - 60.0 / 300.0).abs() < 1e-12);
        assert!((geometry.height - 80.0 / 300.0).abs() < 1e-12);
    }

    #[test]
    fn test_start_anchor_uses_x_directly() {
        let el = element(r#"{"text":"a","x":90,"y":60,"fontSize":30}"#);
        let geometry = element_box(600.0, &el);
        assert!((geometry.left - 90.0 / 300.0).abs() < 1e-12);
    }

    #[test]
    fn test_end_anchor_right_aligns() {
        let el = element(r#"{"text":"a","x":600,"y":60,"fontSize":30,"anchor":"end","maxWidth":300}"#);
        let geometry = element_box(600.0, &el);
        assert!((geometry.left - (600.0 / 300.0 - 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_negative_left_and_top_clamp_to_zero() {
        // Middle anchor near the left edge pushes the box past 0
        let el = element(r#"{"text":"a","x":10,"y":5,"fontSize":40,"anchor":"middle"}"#);
        let geometry = element_box(1000.0, &el);
        assert_eq!(geometry.left, 0.0);
        assert_eq!(geometry.top, 0.0);
    }

    #[test]
    fn test_no_right_edge_clamping() {
        // End of canvas: the box may overflow the right edge uncorrected
        let el = element(r#"{"text":"a","x":990,"y":60,"fontSize":30,"maxWidth":600}"#);
        let geometry = element_box(1000.0, &el);
        assert!(geometry.left + geometry.width > 1000.0 / 300.0);
        assert!((geometry.left - 990.0 / 300.0).abs() < 1e-12);
    }

    #[test]
    fn test_alignment_mapping() {
        assert_eq!(alignment_for(Anchor::Start), Alignment::Left);
        assert_eq!(alignment_for(Anchor::Middle), Alignment::Center);
        assert_eq!(alignment_for(Anchor::End), Alignment::Right);
    }

    #[test]
    fn test_build_presentation_worked_example() {
        let layout = Layout::from_slice(
            br#"{
                "width": 1000,
                "height": 1000,
                "elements": [
                    {"text": "Hi", "x": 500, "y": 100, "fontSize": 40, "anchor": "middle"}
                ]
            }"#,
        )
        .unwrap();

        let pres = build_presentation(&layout, PNG_MAGIC.to_vec()).unwrap();
        assert_eq!(pres.slide_width(), 3_048_000);
        assert_eq!(pres.slide_height(), 3_048_000);
        assert_eq!(pres.slide_count(), 1);
        assert_eq!(pres.slides[0].shape_count(), 2);

        let xml = pres.slides[0].to_xml(&["rId2".to_string()]).unwrap();
        // Background fills the canvas
        assert!(xml.contains(r#"<a:off x="0" y="0"/><a:ext cx="3048000" cy="3048000"/>"#));
        // 40 px at 300 DPI is 9.6 pt, centered, Arial, non-bold, black
        assert!(xml.contains(r#"sz="960""#));
        assert!(xml.contains(r#"<a:pPr algn="ctr"/>"#));
        assert!(xml.contains(r#"<a:latin typeface="Arial"/>"#));
        assert!(xml.contains(r#"<a:srgbClr val="000000"/>"#));
        assert!(!xml.contains(r#"b="1""#));
        // top = (100 - 40) px -> 60/300 in -> 182880 EMU
        assert!(xml.contains(r#"y="182880""#));
    }

    #[test]
    fn test_invalid_color_propagates() {
        let layout = Layout::from_slice(
            br##"{
                "width": 100,
                "height": 100,
                "elements": [
                    {"text": "a", "x": 0, "y": 10, "fontSize": 10, "color": "#zz0000"}
                ]
            }"##,
        )
        .unwrap();
        assert!(build_presentation(&layout, PNG_MAGIC.to_vec()).is_err());
    }

    #[test]
    fn test_elements_keep_input_order() {
        let layout = Layout::from_slice(
            br#"{
                "width": 300,
                "height": 300,
                "elements": [
                    {"text": "one", "x": 0, "y": 30, "fontSize": 10},
                    {"text": "two", "x": 0, "y": 60, "fontSize": 10}
                ]
            }"#,
        )
        .unwrap();

        let pres = build_presentation(&layout, PNG_MAGIC.to_vec()).unwrap();
        let xml = pres.slides[0].to_xml(&["rId2".to_string()]).unwrap();
        assert!(xml.find("<a:t>one</a:t>").unwrap() < xml.find("<a:t>two</a:t>").unwrap());
    }
}
