//! Color utilities for the views

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An sRGB color, written as `#rrggbb` in config files and view models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend towards `other`; `t` is clamped to [0, 1]
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("expected a #rrggbb color, got '{s}'"));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| format!("invalid hex digits in color '{s}'"))
        };
        Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Get a categorical color from a palette
///
/// Okabe-Ito colors first, so the default is readable with color vision
/// deficiencies.
pub fn categorical_color(index: usize) -> Rgb {
    const PALETTE: &[Rgb] = &[
        Rgb::new(0x00, 0x72, 0xb2), // Blue
        Rgb::new(0xe6, 0x9f, 0x00), // Orange
        Rgb::new(0x00, 0x9e, 0x73), // Bluish green
        Rgb::new(0xcc, 0x79, 0xa7), // Reddish purple
        Rgb::new(0xd5, 0x5e, 0x00), // Vermillion
        Rgb::new(0x56, 0xb4, 0xe9), // Sky blue
        Rgb::new(0xf0, 0xe4, 0x42), // Yellow
        Rgb::new(0x2f, 0x6d, 0xf6), // Accent blue
    ];
    PALETTE[index % PALETTE.len()]
}

/// Closed numeric interval used for axes and color domains
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Position of `value` within the range, clamped to [0, 1]
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.5;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }
}

/// Diverging color map (red-white-blue) over a fixed domain
///
/// Values outside the domain take the end colors, so colors stay comparable
/// across years and levels whatever the actual data range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DivergingScale {
    pub domain: ValueRange,
    pub low: Rgb,
    pub mid: Rgb,
    pub high: Rgb,
}

impl Default for DivergingScale {
    fn default() -> Self {
        Self {
            domain: ValueRange::new(-10.0, 10.0),
            low: Rgb::new(0x67, 0x00, 0x1f),
            mid: Rgb::new(0xf7, 0xf7, 0xf7),
            high: Rgb::new(0x05, 0x30, 0x61),
        }
    }
}

impl DivergingScale {
    pub fn color(&self, value: f64) -> Rgb {
        let t = self.domain.normalize(value);
        if t < 0.5 {
            self.low.lerp(self.mid, t * 2.0)
        } else {
            self.mid.lerp(self.high, (t - 0.5) * 2.0)
        }
    }

    /// Midpoint of the domain
    pub fn midpoint(&self) -> f64 {
        (self.domain.min + self.domain.max) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let color: Rgb = "#2F6DF6".parse().unwrap();
        assert_eq!(color, Rgb::new(0x2f, 0x6d, 0xf6));
        assert_eq!(color.to_string(), "#2f6df6");
        assert!("#12345".parse::<Rgb>().is_err());
        assert!("#zz0000".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_diverging_scale_endpoints() {
        let scale = DivergingScale::default();
        assert_eq!(scale.color(-10.0), scale.low);
        assert_eq!(scale.color(0.0), scale.mid);
        assert_eq!(scale.color(10.0), scale.high);
        // Clamped outside the domain
        assert_eq!(scale.color(-42.0), scale.low);
        assert_eq!(scale.color(99.0), scale.high);
    }

    #[test]
    fn test_categorical_palette_wraps() {
        assert_eq!(categorical_color(0), categorical_color(8));
        assert_ne!(categorical_color(0), categorical_color(1));
    }
}
