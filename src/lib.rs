//! generate-pptx - turn a background image plus a pixel-based JSON text
//! layout into an editable single-slide PowerPoint presentation.
//!
//! The layout JSON carries a canvas size in pixels and a list of text
//! elements with SVG-style positioning (baseline y coordinates and
//! `start`/`middle`/`end` anchors). All pixel values are interpreted at a
//! fixed 300 DPI and converted to the EMU and point units OOXML uses.
//!
//! The crate is split into a conversion front (parsing and geometry) and a
//! minimal `.pptx` writer that assembles the OPC package directly:
//!
//! - [`layout`] - the JSON data model with its defaulting rules
//! - [`unit`] / [`color`] - fixed-DPI conversions and hex RGB decoding
//! - [`convert`] - layout-to-slide geometry and presentation assembly
//! - [`pptx`] - DrawingML shape serialization and ZIP packaging
//!
//! # Example
//!
//! ```no_run
//! use generate_pptx::convert::build_presentation;
//! use generate_pptx::layout::Layout;
//!
//! # fn main() -> generate_pptx::Result<()> {
//! let json = std::fs::read("layout.json")?;
//! let image = std::fs::read("background.png")?;
//!
//! let layout = Layout::from_slice(&json)?;
//! let pres = build_presentation(&layout, image)?;
//! pres.save("slide.pptx")?;
//! # Ok(())
//! # }
//! ```

pub mod color;
pub mod convert;
pub mod error;
pub mod layout;
pub mod pptx;
pub mod unit;

pub use error::{Error, Result};
