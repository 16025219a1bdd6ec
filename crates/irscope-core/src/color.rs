//! Color handling for irscope graphs
//!
//! This module provides the [`Rgb`] color type, the [`ColorPair`] used to
//! draw a colored box with readable text on top, and [`generate`], which
//! spreads any number of colors evenly around the hue wheel.
//!
//! Parsing and the HSL round trip behind [`Rgb::complementary`] go through
//! the `color` crate. Colors are written as `#RRGGBB` with uppercase hex
//! digits.

use std::{fmt, str::FromStr};

use color::{AlphaColor, DynamicColor, Hsl, Srgb};
use rand::Rng;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Errors produced when reading colors from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid hex color `{input}`: {reason}")]
    InvalidHex { input: String, reason: String },
}

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn r(self) -> u8 {
        self.r
    }

    pub fn g(self) -> u8 {
        self.g
    }

    pub fn b(self) -> u8 {
        self.b
    }

    /// Draws a uniformly random color.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.random(), rng.random(), rng.random())
    }

    /// Converts an HSV triple to RGB.
    ///
    /// `hue` is in degrees `[0, 360]`, `saturation` and `value` in `[0, 100]`.
    /// Out-of-range arguments are clamped. A hue of exactly 360 falls into
    /// the last sector and comes out magenta rather than red, so the final
    /// color of a [`generate`] palette differs from the first.
    ///
    /// # Examples
    ///
    /// ```
    /// # use irscope_core::color::Rgb;
    /// assert_eq!(Rgb::from_hsv(0.0, 100.0, 100.0), Rgb::new(255, 0, 0));
    /// assert_eq!(Rgb::from_hsv(120.0, 100.0, 100.0), Rgb::new(0, 255, 0));
    /// assert_eq!(Rgb::from_hsv(360.0, 100.0, 100.0), Rgb::new(255, 0, 255));
    /// assert_eq!(Rgb::from_hsv(0.0, 0.0, 50.0), Rgb::new(128, 128, 128));
    /// ```
    pub fn from_hsv(hue: f64, saturation: f64, value: f64) -> Self {
        // `color` has no HSV space; the sector formula stays local and in
        // f64 so that half-way channels such as 229.5 round up.
        let h = hue.clamp(0.0, 360.0);
        let s = saturation.clamp(0.0, 100.0) / 100.0;
        let v = value.clamp(0.0, 100.0) / 100.0;

        if s == 0.0 {
            return Self::from_unit(v, v, v);
        }

        let h = h / 60.0;
        let sector = h.floor();
        let f = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match (sector as u32).min(5) {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Self::from_unit(r, g, b)
    }

    /// Returns the high-contrast partner of this color.
    ///
    /// The color is converted to HSL, its hue is rotated by 180 degrees and
    /// it is converted back. Lightness and saturation are kept, so grays map
    /// to themselves.
    ///
    /// # Examples
    ///
    /// ```
    /// # use irscope_core::color::Rgb;
    /// assert_eq!(Rgb::new(255, 0, 0).complementary(), Rgb::new(0, 255, 255));
    /// assert_eq!(Rgb::WHITE.complementary(), Rgb::WHITE);
    /// ```
    pub fn complementary(self) -> Self {
        let mut hsl = self.to_srgb().convert::<Hsl>();
        let hue = hsl.components[0];
        hsl.components[0] = if hue.is_nan() {
            0.0
        } else {
            (hue + 180.0).rem_euclid(360.0)
        };
        Self::from_srgb(hsl.convert::<Srgb>())
    }

    /// Formats the color as `#RRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parses a `#RRGGBB` color. Lowercase digits are accepted.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let invalid = |reason: &str| ColorError::InvalidHex {
            input: hex.to_string(),
            reason: reason.to_string(),
        };

        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| invalid("expected a leading `#`"))?;
        if digits.len() != 6 {
            return Err(invalid("expected six hex digits"));
        }

        let parsed = DynamicColor::from_str(hex).map_err(|err| invalid(&err.to_string()))?;
        Ok(Self::from_srgb(parsed.to_alpha_color::<Srgb>()))
    }

    fn to_srgb(self) -> AlphaColor<Srgb> {
        AlphaColor::from_rgb8(self.r, self.g, self.b)
    }

    fn from_srgb(color: AlphaColor<Srgb>) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b)
    }

    fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self::new(unit_to_u8(r), unit_to_u8(g), unit_to_u8(b))
    }
}

fn unit_to_u8(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A background color and the contrasting color used for text drawn on it.
///
/// The complementary half is always derived from the base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ColorPair {
    color: Rgb,
    complimentary: Rgb,
}

impl ColorPair {
    /// Builds a pair whose text color is the complement of `color`.
    pub fn from_color(color: Rgb) -> Self {
        Self {
            color,
            complimentary: color.complementary(),
        }
    }

    /// White background with black text.
    pub fn neutral() -> Self {
        Self {
            color: Rgb::WHITE,
            complimentary: Rgb::BLACK,
        }
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn complementary(&self) -> Rgb {
        self.complimentary
    }
}

/// Generates `count` visually distinct color pairs.
///
/// Hues are spread evenly over the full wheel in steps of `360 / (count - 1)`
/// while saturation and value cycle through 80, 90, 100, 70 so neighbouring
/// colors differ in brightness as well. A single color is picked at random.
///
/// # Examples
///
/// ```
/// # use irscope_core::color::{generate, Rgb};
/// let mut rng = rand::rng();
///
/// assert!(generate(0, &mut rng).is_empty());
/// assert_eq!(generate(1, &mut rng).len(), 1);
///
/// let colors = generate(3, &mut rng);
/// assert_eq!(colors[0].color(), Rgb::from_hsv(0.0, 80.0, 80.0));
/// assert_eq!(colors[1].color(), Rgb::from_hsv(180.0, 90.0, 90.0));
/// ```
pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<ColorPair> {
    match count {
        0 => Vec::new(),
        1 => vec![ColorPair::from_color(Rgb::random(rng))],
        _ => {
            let step = 360.0 / (count - 1) as f64;
            let mut sv = 70.0;
            (0..count)
                .map(|index| {
                    sv = if sv > 90.0 { 70.0 } else { sv + 10.0 };
                    ColorPair::from_color(Rgb::from_hsv(step * index as f64, sv, sv))
                })
                .collect()
        }
    }
}
