//! Immutable color value with hex parsing and color-space math.
//!
//! A [`Color`] is either a concrete sRGB value (with an optional alpha byte)
//! or the [`Color::EMPTY`] sentinel meaning "unset". Every operation returns
//! a new value; nothing mutates in place.
//!
//! ## Supported Input
//!
//! - **Hex**: `#RGB`, `#RRGGBB`, `#RRGGBBAA`, with or without the `#`
//! - **Components**: [`Color::rgb`], [`Color::rgba`]
//! - **HSL**: [`Color::hsl`], hue in degrees, saturation/lightness in 0-1
//! - **LCh(uv)**: [`Color::oklch`], lightness/chroma scaled to 0-1
//!
//! ## Manipulation
//!
//! ```
//! use hue::Color;
//!
//! let accent = Color::from_hex("#bd93f9");
//! let hover = accent.lighten(0.1);
//! let tint = accent.with_alpha(0.1);
//! assert_eq!(tint.hex(), "#bd93f919");
//! assert_ne!(hover, accent);
//! ```

use std::fmt;
use std::str::FromStr;

use palette::white_point::D65;
use palette::{FromColor, Lab, Lchuv, Mix, Srgb};

use crate::error::ColorParseError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct Channels {
    r: u8,
    g: u8,
    b: u8,
    a: Option<u8>,
}

/// A theme color.
///
/// Renders canonically as lowercase hex: six digits for opaque colors and
/// eight digits once an alpha byte has been attached. The default value is
/// [`Color::EMPTY`], which is distinct from every real color including black.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(Option<Channels>);

impl Color {
    /// The unset color.
    pub const EMPTY: Color = Color(None);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color(Some(Channels { r, g, b, a: None }))
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color(Some(Channels {
            r,
            g,
            b,
            a: Some(a),
        }))
    }

    /// Builds a color from a hex string, returning [`Color::EMPTY`] for invalid input.
    ///
    /// For the reason a string was rejected, use [`Color::parse`].
    pub fn from_hex(input: &str) -> Self {
        Self::parse(input).unwrap_or(Self::EMPTY)
    }

    /// Parses `#RGB`, `#RRGGBB` or `#RRGGBBAA` (the `#` is optional).
    ///
    /// Three-digit shorthand is expanded by doubling each digit.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let body = input.strip_prefix('#').unwrap_or(input);
        if body.is_empty() {
            return Err(ColorParseError::Empty);
        }
        if let Some(bad) = body.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(bad));
        }

        let digits = body.as_bytes();
        match digits.len() {
            3 => Ok(Self::rgb(
                nibble(digits[0]) * 17,
                nibble(digits[1]) * 17,
                nibble(digits[2]) * 17,
            )),
            6 => Ok(Self::rgb(
                byte(digits[0], digits[1]),
                byte(digits[2], digits[3]),
                byte(digits[4], digits[5]),
            )),
            8 => Ok(Self::rgba(
                byte(digits[0], digits[1]),
                byte(digits[2], digits[3]),
                byte(digits[4], digits[5]),
                byte(digits[6], digits[7]),
            )),
            n => Err(ColorParseError::InvalidLength(n)),
        }
    }

    /// Creates a color from hue (degrees, any real value), saturation and lightness (0-1).
    pub fn hsl(h: f64, s: f64, l: f64) -> Self {
        let (r, g, b) = hsl_to_rgb(h.rem_euclid(360.0), s.clamp(0.0, 1.0), l.clamp(0.0, 1.0));
        Self::rgb(unit_to_byte(r), unit_to_byte(g), unit_to_byte(b))
    }

    /// Creates a color from cylindrical Luv coordinates.
    ///
    /// `l` and `c` are scaled by 100 before conversion; out-of-gamut results
    /// are clamped to sRGB rather than rejected.
    pub fn oklch(l: f64, c: f64, h: f64) -> Self {
        let lch: Lchuv<D65, f64> = Lchuv::new(l * 100.0, c * 100.0, h);
        Self::from_srgb(Srgb::from_color(lch))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Alpha byte, if one was attached.
    pub fn alpha(&self) -> Option<u8> {
        self.0.and_then(|c| c.a)
    }

    /// Red, green and blue components. Empty colors read as black.
    pub fn rgb_values(&self) -> (u8, u8, u8) {
        match self.0 {
            Some(c) => (c.r, c.g, c.b),
            None => (0, 0, 0),
        }
    }

    /// Red, green, blue and alpha components; alpha is 255 when absent.
    pub fn rgba_values(&self) -> (u8, u8, u8, u8) {
        let (r, g, b) = self.rgb_values();
        (r, g, b, self.alpha().unwrap_or(255))
    }

    /// Hue (0-360), saturation (0-1) and lightness (0-1).
    pub fn hsl_values(&self) -> (f64, f64, f64) {
        let (r, g, b) = self.rgb_values();
        rgb_to_hsl(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        )
    }

    /// Lightness (0-1), chroma and hue (0-360) in cylindrical Luv.
    pub fn oklch_values(&self) -> (f64, f64, f64) {
        let lch: Lchuv<D65, f64> = Lchuv::from_color(self.srgb());
        (
            lch.l / 100.0,
            lch.chroma / 100.0,
            lch.hue.into_positive_degrees(),
        )
    }

    /// WCAG 2.1 relative luminance in `[0, 1]`. Alpha is ignored.
    pub fn relative_luminance(&self) -> f64 {
        let (r, g, b) = self.rgb_values();
        0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
    }

    pub fn is_dark(&self) -> bool {
        self.relative_luminance() < 0.5
    }

    pub fn is_light(&self) -> bool {
        !self.is_dark()
    }

    pub fn lighten(self, amount: f64) -> Self {
        self.map_hsl(|h, s, l| (h, s, (l + amount).min(1.0)))
    }

    pub fn darken(self, amount: f64) -> Self {
        self.map_hsl(|h, s, l| (h, s, (l - amount).max(0.0)))
    }

    pub fn saturate(self, amount: f64) -> Self {
        self.map_hsl(|h, s, l| (h, (s + amount).min(1.0), l))
    }

    pub fn desaturate(self, amount: f64) -> Self {
        self.map_hsl(|h, s, l| (h, (s - amount).max(0.0), l))
    }

    /// The color on the opposite side of the hue wheel.
    pub fn complement(self) -> Self {
        self.map_hsl(|h, s, l| ((h + 180.0).rem_euclid(360.0), s, l))
    }

    pub fn invert(self) -> Self {
        match self.0 {
            Some(c) => Color(Some(Channels {
                r: 255 - c.r,
                g: 255 - c.g,
                b: 255 - c.b,
                a: c.a,
            })),
            None => Self::EMPTY,
        }
    }

    /// Blends toward `other` in Lab space.
    ///
    /// A ratio of `0.0` (or less) returns `self` unchanged and `1.0` (or more)
    /// returns `other` unchanged. The blended result is opaque.
    pub fn mix(self, other: Color, ratio: f64) -> Self {
        if ratio <= 0.0 {
            return self;
        }
        if ratio >= 1.0 {
            return other;
        }
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }

        let from: Lab<D65, f64> = Lab::from_color(self.srgb());
        let to: Lab<D65, f64> = Lab::from_color(other.srgb());
        Self::from_srgb(Srgb::from_color(from.mix(to, ratio)))
    }

    /// Replaces the alpha channel. `alpha` is clamped to `[0, 1]` and truncated
    /// to a byte, so the result always renders with eight hex digits.
    pub fn with_alpha(self, alpha: f64) -> Self {
        match self.0 {
            Some(c) => Self::rgba(c.r, c.g, c.b, (alpha.clamp(0.0, 1.0) * 255.0) as u8),
            None => Self::EMPTY,
        }
    }

    /// `#rrggbb` or `#rrggbbaa`; the empty string for [`Color::EMPTY`].
    pub fn hex(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!("#{}", self.hex_no_prefix())
        }
    }

    pub fn hex_no_prefix(&self) -> String {
        match self.0 {
            Some(Channels { r, g, b, a: Some(a) }) => format!("{r:02x}{g:02x}{b:02x}{a:02x}"),
            Some(Channels { r, g, b, a: None }) => format!("{r:02x}{g:02x}{b:02x}"),
            None => String::new(),
        }
    }

    pub fn css_rgb(&self) -> String {
        let (r, g, b) = self.rgb_values();
        format!("rgb({r}, {g}, {b})")
    }

    pub fn css_rgba(&self) -> String {
        let (r, g, b, a) = self.rgba_values();
        format!("rgba({r}, {g}, {b}, {:.3})", f64::from(a) / 255.0)
    }

    pub fn css_hsl(&self) -> String {
        let (h, s, l) = self.hsl_values();
        format!("hsl({h:.1}, {:.1}%, {:.1}%)", s * 100.0, l * 100.0)
    }

    pub fn css_oklch(&self) -> String {
        let (l, c, h) = self.oklch_values();
        format!("oklch({l:.3} {c:.3} {h:.1})")
    }

    /// A `var(--{prefix}-{name})` reference.
    pub fn css_var(prefix: &str, name: &str) -> String {
        format!("var(--{prefix}-{name})")
    }

    fn srgb(&self) -> Srgb<f64> {
        let (r, g, b) = self.rgb_values();
        Srgb::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        )
    }

    fn from_srgb(rgb: Srgb<f64>) -> Self {
        Self::rgb(
            unit_to_byte(rgb.red),
            unit_to_byte(rgb.green),
            unit_to_byte(rgb.blue),
        )
    }

    // HSL round trip; the result is opaque.
    fn map_hsl(self, f: impl FnOnce(f64, f64, f64) -> (f64, f64, f64)) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        let (h, s, l) = self.hsl_values();
        let (h, s, l) = f(h, s, l);
        Self::hsl(h, s, l)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn nibble(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => 0,
    }
}

fn byte(high: u8, low: u8) -> u8 {
    nibble(high) * 16 + nibble(low)
}

fn unit_to_byte(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l < 0.5 {
        d / (max + min)
    } else {
        d / (2.0 - max - min)
    };
    let mut h = if max == r {
        (g - b) / d
    } else if max == g {
        2.0 + (b - r) / d
    } else {
        4.0 + (r - g) / d
    };
    h *= 60.0;
    if h < 0.0 {
        h += 360.0;
    }
    (h, s, l)
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let h = h / 360.0;

    (
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    )
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== HEX PARSING TESTS ====================

    #[test]
    fn test_hex_3_digit_expands() {
        assert_eq!(Color::from_hex("#f55").hex(), "#ff5555");
        assert_eq!(Color::from_hex("abc").hex(), "#aabbcc");
    }

    #[test]
    fn test_hex_6_and_8_digit() {
        assert_eq!(Color::from_hex("#282A36").hex(), "#282a36");
        assert_eq!(Color::from_hex("282a3680").hex(), "#282a3680");
        assert_eq!(Color::from_hex("#282a3680").alpha(), Some(0x80));
    }

    #[test]
    fn test_hex_invalid_is_empty() {
        assert!(Color::from_hex("").is_empty());
        assert!(Color::from_hex("#12345").is_empty());
        assert!(Color::from_hex("#ggg").is_empty());
        assert!(Color::from_hex("#ffff").is_empty());
        assert!(Color::from_hex(" #fff").is_empty());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Color::parse(""), Err(ColorParseError::Empty));
        assert_eq!(Color::parse("#"), Err(ColorParseError::Empty));
        assert_eq!(Color::parse("#12345"), Err(ColorParseError::InvalidLength(5)));
        assert_eq!(Color::parse("#xyz"), Err(ColorParseError::InvalidDigit('x')));
    }

    #[test]
    fn test_from_str() {
        let c: Color = "#ff0000".parse().unwrap();
        assert_eq!(c, Color::rgb(255, 0, 0));
    }

    // ==================== EMPTY SENTINEL TESTS ====================

    #[test]
    fn test_empty_is_not_black() {
        assert_ne!(Color::EMPTY, Color::rgb(0, 0, 0));
        assert_eq!(Color::default(), Color::EMPTY);
        assert_eq!(Color::EMPTY.hex(), "");
        assert_eq!(Color::EMPTY.to_string(), "");
    }

    #[test]
    fn test_empty_propagates_through_operators() {
        assert!(Color::EMPTY.lighten(0.2).is_empty());
        assert!(Color::EMPTY.darken(0.2).is_empty());
        assert!(Color::EMPTY.saturate(0.2).is_empty());
        assert!(Color::EMPTY.complement().is_empty());
        assert!(Color::EMPTY.invert().is_empty());
        assert!(Color::EMPTY.with_alpha(0.5).is_empty());
    }

    // ==================== FORMATTING TESTS ====================

    #[test]
    fn test_css_formats() {
        let red = Color::rgb(255, 0, 0);
        assert_eq!(red.css_rgb(), "rgb(255, 0, 0)");
        assert_eq!(red.css_rgba(), "rgba(255, 0, 0, 1.000)");
        assert_eq!(red.css_hsl(), "hsl(0.0, 100.0%, 50.0%)");
        assert_eq!(Color::css_var("theme", "accent"), "var(--theme-accent)");
    }

    // ==================== HSL TESTS ====================

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(Color::hsl(0.0, 1.0, 0.5).hex(), "#ff0000");
        assert_eq!(Color::hsl(120.0, 1.0, 0.5).hex(), "#00ff00");
        assert_eq!(Color::hsl(240.0, 1.0, 0.5).hex(), "#0000ff");
    }

    #[test]
    fn test_hsl_hue_wraps() {
        assert_eq!(Color::hsl(480.0, 1.0, 0.5), Color::hsl(120.0, 1.0, 0.5));
        assert_eq!(Color::hsl(-120.0, 1.0, 0.5), Color::hsl(240.0, 1.0, 0.5));
    }

    #[test]
    fn test_hsl_values() {
        let (h, s, l) = Color::rgb(0, 255, 0).hsl_values();
        assert!((h - 120.0).abs() < 1e-9);
        assert!((s - 1.0).abs() < 1e-9);
        assert!((l - 0.5).abs() < 1e-9);

        let (h, s, _) = Color::rgb(128, 128, 128).hsl_values();
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
    }

    // ==================== MANIPULATION TESTS ====================

    #[test]
    fn test_lighten_darken() {
        assert_eq!(Color::rgb(0, 0, 0).lighten(0.5).hex(), "#808080");
        assert_eq!(Color::rgb(255, 255, 255).darken(0.5).hex(), "#808080");
        assert_eq!(Color::rgb(128, 128, 128).lighten(1.0).hex(), "#ffffff");
        assert_eq!(Color::rgb(0, 0, 0).darken(0.3).hex(), "#000000");
    }

    #[test]
    fn test_hsl_operators_drop_alpha() {
        let c = Color::rgba(0, 0, 0, 0x80).lighten(0.5);
        assert_eq!(c.hex(), "#808080");
        assert_eq!(c.alpha(), None);
        assert_eq!(Color::rgba(255, 0, 0, 0x33).complement().hex(), "#00ffff");
    }

    #[test]
    fn test_saturate_desaturate() {
        let (_, s, _) = Color::rgb(128, 128, 128).saturate(0.5).hsl_values();
        assert!((s - 0.5).abs() < 0.01);
        assert_eq!(Color::rgb(255, 0, 0).desaturate(1.0).hex(), "#808080");
    }

    #[test]
    fn test_complement_and_invert() {
        assert_eq!(Color::rgb(255, 0, 0).complement().hex(), "#00ffff");
        assert_eq!(Color::rgb(0, 0, 0).invert().hex(), "#ffffff");
        assert_eq!(Color::from_hex("#123456").invert().hex(), "#edcba9");
    }

    #[test]
    fn test_with_alpha_clamps() {
        let white = Color::rgb(255, 255, 255);
        assert_eq!(white.with_alpha(-1.0).hex(), "#ffffff00");
        assert_eq!(white.with_alpha(2.0).hex(), "#ffffffff");
        assert_eq!(white.with_alpha(0.5).hex(), "#ffffff7f");
        assert_eq!(white.with_alpha(1.0).alpha(), Some(255));
    }

    #[test]
    fn test_mix_endpoints() {
        let black = Color::from_hex("#000000");
        let white = Color::from_hex("#ffffff");
        assert_eq!(black.mix(white, 0.0), black);
        assert_eq!(black.mix(white, 1.0), white);
    }

    #[test]
    fn test_mix_midpoint_is_gray() {
        let mid = Color::from_hex("#000000").mix(Color::from_hex("#ffffff"), 0.5);
        let (r, g, b) = mid.rgb_values();
        for c in [r, g, b] {
            assert!((110..=130).contains(&c), "channel {c} out of range");
        }
        assert!(r.max(g).max(b) - r.min(g).min(b) <= 1);
    }

    #[test]
    fn test_mix_with_empty() {
        let red = Color::rgb(255, 0, 0);
        assert_eq!(red.mix(Color::EMPTY, 0.5), red);
        assert_eq!(Color::EMPTY.mix(red, 0.5), red);
    }

    // ==================== LUMINANCE TESTS ====================

    #[test]
    fn test_luminance_bounds() {
        assert!(Color::from_hex("#000000").relative_luminance().abs() < 0.001);
        assert!((Color::from_hex("#ffffff").relative_luminance() - 1.0).abs() < 0.001);
        assert!(Color::from_hex("#000000").is_dark());
        assert!(Color::from_hex("#ffffff").is_light());
    }

    #[test]
    fn test_luminance_ignores_alpha() {
        let opaque = Color::from_hex("#f8f8f2");
        let translucent = opaque.with_alpha(0.5);
        assert_eq!(opaque.relative_luminance(), translucent.relative_luminance());
    }

    // ==================== LCH TESTS ====================

    #[test]
    fn test_oklch_round_trip() {
        let red = Color::rgb(255, 0, 0);
        let (l, c, h) = red.oklch_values();
        let (r, g, b) = Color::oklch(l, c, h).rgb_values();
        assert!(r >= 254);
        assert!(g <= 1);
        assert!(b <= 1);
    }

    #[test]
    fn test_oklch_white() {
        let (l, c, _) = Color::rgb(255, 255, 255).oklch_values();
        assert!((l - 1.0).abs() < 0.001);
        assert!(c < 0.001);
    }

    #[test]
    fn test_oklch_clamps_out_of_gamut() {
        let c = Color::oklch(0.5, 5.0, 40.0);
        assert!(!c.is_empty());
    }
}
