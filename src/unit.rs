//! Unit conversion utilities.
//!
//! Layout coordinates arrive in pixels authored at a fixed 300 DPI. OOXML
//! geometry is expressed in EMUs (914,400 per inch) and font sizes in
//! points, stored as centipoints in DrawingML attributes.

/// Resolution at which all pixel values in a layout are interpreted.
pub const DPI: f64 = 300.0;

pub const EMUS_PER_INCH: i64 = 914_400;
pub const POINTS_PER_INCH: f64 = 72.0;

/// Convert a pixel value to inches at the fixed 300 DPI resolution.
#[inline]
pub fn px_to_inches(px: f64) -> f64 {
    px / DPI
}

/// Convert a pixel font size to typographic points.
#[inline]
pub fn px_to_pt(px: f64) -> f64 {
    px * POINTS_PER_INCH / DPI
}

#[inline]
pub fn inches_to_emu(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64).round() as i64
}

#[inline]
pub fn px_to_emu(px: f64) -> i64 {
    inches_to_emu(px_to_inches(px))
}

/// Font size attribute value for `<a:rPr sz="...">`, in centipoints.
#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * 100.0).round() as u32
}
