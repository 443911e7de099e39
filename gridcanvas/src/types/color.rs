use std::str::FromStr;

use thiserror::Error;

/// An 8-bit RGBA color in device space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized color {0:?}")]
pub struct ParseColorError(pub String);

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Parses `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb()`/`rgba()` functional
    /// notation, CSS color names, and `transparent`.
    pub fn parse(s: &str) -> Result<Self, ParseColorError> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("transparent") {
            return Ok(Self::TRANSPARENT);
        }
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ParseColorError(s.to_string()));
        }
        if trimmed.starts_with("rgb") {
            return parse_functional(trimmed).ok_or_else(|| ParseColorError(s.to_string()));
        }
        match palette::named::from_str(&trimmed.to_ascii_lowercase()) {
            Some(named) => Ok(Self::rgb(named.red, named.green, named.blue)),
            None => Err(ParseColorError(s.to_string())),
        }
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let digit = |i: usize| -> Option<u8> {
        u8::from_str_radix(hex.get(i..i + 1)?, 16).ok()
    };
    let byte = |i: usize| -> Option<u8> {
        u8::from_str_radix(hex.get(i..i + 2)?, 16).ok()
    };
    match hex.len() {
        3 => {
            let (r, g, b) = (digit(0)?, digit(1)?, digit(2)?);
            Some(Color::rgb(r * 17, g * 17, b * 17))
        }
        6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

fn parse_functional(s: &str) -> Option<Color> {
    let inner = s
        .strip_prefix("rgba")
        .or_else(|| s.strip_prefix("rgb"))?
        .trim()
        .strip_prefix('(')?
        .strip_suffix(')')?;
    let mut parts = inner.split(',').map(str::trim);
    let r = parts.next()?.parse::<u8>().ok()?;
    let g = parts.next()?.parse::<u8>().ok()?;
    let b = parts.next()?.parse::<u8>().ok()?;
    let a = match parts.next() {
        Some(alpha) => {
            let alpha = alpha.parse::<f32>().ok()?;
            (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        None => 255,
    };
    if parts.next().is_some() {
        return None;
    }
    Some(Color::rgba(r, g, b, a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_hex_forms() {
        assert_eq!(Color::parse("#e8e8e8").unwrap(), Color::rgb(232, 232, 232));
        assert_eq!(Color::parse("#999").unwrap(), Color::rgb(153, 153, 153));
        assert_eq!(
            Color::parse("#11223344").unwrap(),
            Color::rgba(0x11, 0x22, 0x33, 0x44)
        );
    }

    #[test]
    fn test_parses_functional_notation() {
        assert_eq!(
            Color::parse("rgb(10, 20, 30)").unwrap(),
            Color::rgb(10, 20, 30)
        );
        assert_eq!(
            Color::parse("rgba(0,0,0,0.85)").unwrap(),
            Color::rgba(0, 0, 0, 217)
        );
    }

    #[test]
    fn test_parses_named_and_transparent() {
        assert_eq!(Color::parse("blue").unwrap(), Color::rgb(0, 0, 255));
        assert_eq!(Color::parse("transparent").unwrap(), Color::TRANSPARENT);
        assert!(Color::parse("not-a-color").is_err());
    }
}
