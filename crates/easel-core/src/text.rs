// File: crates/easel-core/src/text.rs
// Summary: Label formatting and middle-ellipsizing against a surface's text metrics.

use crate::surface::DrawSurface;

pub const ELLIPSIS: &str = "...";

/// Axis label text: two decimal places.
pub fn format_value(v: f64) -> String {
    let s = format!("{v:.2}");
    // small negatives round to zero but keep their sign
    if s == "-0.00" { "0.00".to_owned() } else { s }
}

/// Shorten `text` by replacing characters in its middle with `...` until it measures at
/// most `max_width` in the surface's current font. Returns an empty string when not even
/// the ellipsis fits.
pub fn ellipsize_middle<S: DrawSurface + ?Sized>(surface: &S, text: &str, max_width: f64) -> String {
    if surface.text_extent(text).0 <= max_width {
        return text.to_owned();
    }
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    for removed in 1..=len {
        let kept = len - removed;
        let head = (kept + 1) / 2;
        let tail = kept - head;
        let mut candidate: String = chars[..head].iter().collect();
        candidate.push_str(ELLIPSIS);
        candidate.extend(&chars[len - tail..]);
        if surface.text_extent(&candidate).0 <= max_width {
            return candidate;
        }
    }
    String::new()
}
