//! Color values and interpolation for fills.

use std::fmt;

use serde::{Serialize, Serializer};

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }

    /// CSS hex notation, e.g. `#08519c`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear blend from `self` (t = 0) to `other` (t = 1).
    pub fn lerp(&self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            (a as f64 + (b as f64 - a as f64) * t)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Rgb { r: mix(self.r, other.r), g: mix(self.g, other.g), b: mix(self.b, other.b) }
    }
}

impl fmt::Display for Rgb {
    /// Format as CSS: rgb(r,g,b)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

pub const BLUE: Rgb = Rgb::new(0, 0, 255);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const RED: Rgb = Rgb::new(255, 0, 0);

// "blues" ramp endpoints: light (#deebf7) → dark (#08519c)
pub const BLUES_LIGHT: Rgb = Rgb::new(0xde, 0xeb, 0xf7);
pub const BLUES_DARK: Rgb = Rgb::new(0x08, 0x51, 0x9c);

/// Fill for regions with no value.
pub const NO_DATA: Rgb = Rgb::new(0xd3, 0xd3, 0xd3);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_and_css() {
        assert_eq!(BLUES_DARK.to_hex(), "#08519c");
        assert_eq!(RED.to_string(), "rgb(255,0,0)");
        assert_eq!(serde_json::to_string(&NO_DATA).unwrap(), "\"#d3d3d3\"");
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        assert_eq!(BLUE.lerp(WHITE, 0.0), BLUE);
        assert_eq!(BLUE.lerp(WHITE, 1.0), WHITE);
        assert_eq!(BLUE.lerp(WHITE, 0.5), Rgb::new(128, 128, 255));
        assert_eq!(BLUE.lerp(WHITE, 7.0), WHITE);
    }
}
