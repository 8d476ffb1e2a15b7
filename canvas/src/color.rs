//! Stroke colors and CSS color-string parsing.
//!
//! The toolbar hands colors around as CSS strings (swatch values like
//! `#ee3333` or the default `rgb(255, 255, 255)`); the raster needs channels.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// An opaque RGB stroke color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RGB`, `#RRGGBB`, or `rgb(r, g, b)`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.starts_with('#') {
            return parse_hex(&trimmed[1..]);
        }
        parse_rgb_fn(trimmed)
    }

    pub(crate) fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, 255)
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    match hex.len() {
        3 => {
            let r = hex_byte(&hex.get(0..1)?.repeat(2))?;
            let g = hex_byte(&hex.get(1..2)?.repeat(2))?;
            let b = hex_byte(&hex.get(2..3)?.repeat(2))?;
            Some(Color::rgb(r, g, b))
        }
        6 => {
            let r = hex_byte(hex.get(0..2)?)?;
            let g = hex_byte(hex.get(2..4)?)?;
            let b = hex_byte(hex.get(4..6)?)?;
            Some(Color::rgb(r, g, b))
        }
        _ => None,
    }
}

fn hex_byte(digits: &str) -> Option<u8> {
    // from_str_radix tolerates a leading sign.
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match u8::from_str_radix(digits, 16) {
        Ok(v) => Some(v),
        Err(_) => None,
    }
}

fn decimal_byte(digits: &str) -> Option<u8> {
    let digits = digits.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match digits.parse::<u8>() {
        Ok(v) => Some(v),
        Err(_) => None,
    }
}

fn parse_rgb_fn(raw: &str) -> Option<Color> {
    let inner = raw.strip_prefix("rgb(")?.strip_suffix(')')?;
    let mut channels = inner.split(',');
    let r = decimal_byte(channels.next()?)?;
    let g = decimal_byte(channels.next()?)?;
    let b = decimal_byte(channels.next()?)?;
    if channels.next().is_some() {
        return None;
    }
    Some(Color::rgb(r, g, b))
}
