//! Per-node color derivation.
//!
//! Each node gets its type's base color nudged by an independent uniform
//! offset per channel, clamped to [0, 255], with a fixed transparency suffix
//! appended as an opaque tag. The random source is an explicit parameter so
//! tests can seed it.

use rand::Rng;

use crate::error::VizError;

/// Default per-channel variation magnitude.
pub const DEFAULT_VARIATION: u8 = 30;
/// Default transparency suffix appended verbatim to derived colors.
pub const DEFAULT_ALPHA: &str = "aa";

/// An RGB triple parsed from a "#rrggbb" string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Parse a "#rrggbb" base color.
pub fn parse_hex(value: &str) -> Result<Rgb, VizError> {
    let malformed = || VizError::ColorFormat {
        value: value.to_string(),
    };

    let digits = value.strip_prefix('#').ok_or_else(malformed)?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(malformed());
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| malformed())
    };
    Ok(Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

/// Nudge one channel by a uniform offset in [-variation, +variation].
fn jitter<R: Rng>(channel: u8, variation: u8, rng: &mut R) -> u8 {
    let variation = i16::from(variation);
    let offset = rng.gen_range(-variation..=variation);
    (i16::from(channel) + offset).clamp(0, 255) as u8
}

/// Derive a per-node color from `base`.
///
/// Output is lowercase "#rrggbb" followed by `alpha` verbatim. Fails only on
/// a malformed `base`.
pub fn derive<R: Rng>(
    base: &str,
    variation: u8,
    alpha: &str,
    rng: &mut R,
) -> Result<String, VizError> {
    let rgb = parse_hex(base)?;
    Ok(format!(
        "#{:02x}{:02x}{:02x}{}",
        jitter(rgb.r, variation, rng),
        jitter(rgb.g, variation, rng),
        jitter(rgb.b, variation, rng),
        alpha
    ))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
