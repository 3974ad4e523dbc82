//! JSON layout data model.
//!
//! Mirrors the layout description emitted by the upstream rendering
//! pipeline: a pixel canvas plus text elements with SVG-style positioning.
//! Optional fields carry the documented defaults; `anchor` and `fontWeight`
//! accept arbitrary values and fall back silently when unrecognized.

use serde::{Deserialize, Deserializer};

use crate::Result;

/// A pixel-based layout description: canvas size plus text elements.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// Canvas width in pixels
    pub width: f64,
    /// Canvas height in pixels
    pub height: f64,
    /// Text elements in z-order
    pub elements: Vec<TextElement>,
}

impl Layout {
    /// Parse a layout from JSON bytes.
    ///
    /// Missing required keys (`width`, `height`, `elements`, per-element
    /// `text`/`x`/`y`/`fontSize`) and syntax errors both surface as
    /// [`Error::Layout`](crate::Error::Layout).
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// One positioned, styled text run.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    pub text: String,
    /// Anchor x coordinate in pixels
    pub x: f64,
    /// Baseline y coordinate in pixels
    pub y: f64,
    /// Font size in pixels (at 300 DPI)
    pub font_size: f64,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    /// Only the literal string "bold" selects bold; non-string values
    /// (numeric CSS weights) are kept as absent
    #[serde(default, deserialize_with = "lenient_font_weight")]
    pub font_weight: Option<String>,
    /// 6-hex-digit RGB, optional leading `#`
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub anchor: Anchor,
    /// Text box width in pixels; defaults to 0.8 x canvas width
    #[serde(default)]
    pub max_width: Option<f64>,
}

impl TextElement {
    pub fn is_bold(&self) -> bool {
        self.font_weight.as_deref() == Some("bold")
    }
}

fn default_font_family() -> String {
    "Arial".to_string()
}

fn default_color() -> String {
    "#000000".to_string()
}

// fontWeight can be a string ("bold", "normal") or a number (700). Anything
// that is not a string can never equal "bold", so it collapses to None.
fn lenient_font_weight<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}

/// Horizontal anchoring, borrowed from SVG `text-anchor` semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    Start,
    Middle,
    End,
}

impl<'de> Deserialize<'de> for Anchor {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Unrecognized values fall back to Start rather than erroring
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "middle" => Anchor::Middle,
            "end" => Anchor::End,
            _ => Anchor::Start,
        })
    }
}
