//! Minimal OOXML presentation writer.
//!
//! Builds a valid `.pptx` (OPC) package from scratch: DrawingML shape and
//! slide XML, the static master/layout/theme parts every presentation needs,
//! `[Content_Types].xml`, relationship parts, and the final ZIP container.
//! Only the subset the converter needs is implemented: one picture shape,
//! text-box shapes with a single styled run each.

pub(crate) mod constants;
pub mod format;
pub(crate) mod package;
pub mod presentation;
pub mod shape;
pub mod slide;
pub(crate) mod template;
pub(crate) mod xml;

pub use format::{Alignment, ImageFormat, TextFormat};
pub use presentation::Presentation;
pub use shape::Shape;
pub use slide::Slide;
