use std::fmt;

/// A single RGBA color value.
///
/// Defaults to opaque black. Equality and hashing compare the exact
/// `(r, g, b, a)` tuple, which is what distinct-color grouping relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Pixel {
    fn default() -> Self {
        Self::rgba(0, 0, 0, 255)
    }
}

impl Pixel {
    /// Fully transparent black.
    pub const TRANSPARENT: Pixel = Pixel::rgba(0, 0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const fn gray(value: u8) -> Self {
        Self::rgba(value, value, value, 255)
    }

    pub const fn gray_alpha(value: u8, a: u8) -> Self {
        Self::rgba(value, value, value, a)
    }

    /// Build a pixel from 1 to 4 interleaved channel samples.
    ///
    /// Returns `None` for an empty or over-long slice.
    pub fn from_channels(samples: &[u8]) -> Option<Self> {
        match *samples {
            [v] => Some(Self::gray(v)),
            [v, a] => Some(Self::gray_alpha(v, a)),
            [r, g, b] => Some(Self::rgb(r, g, b)),
            [r, g, b, a] => Some(Self::rgba(r, g, b, a)),
            _ => None,
        }
    }

    /// Parse the canonical `#rrggbbaa` form produced by [`Pixel::rgba_hex`].
    pub fn from_rgba_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 8 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).ok();
        Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?))
    }

    /// `#rrggbb` in lowercase hex.
    pub fn rgb_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `#rrggbbaa` in lowercase hex.
    pub fn rgba_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }

    /// Alpha normalized to `[0, 1]`.
    pub fn opacity(&self) -> f64 {
        f64::from(self.a) / 255.0
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rgba_hex())
    }
}

impl From<[u8; 4]> for Pixel {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}
