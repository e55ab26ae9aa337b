use std::fmt;

/// BT.709 channel weights used by [`luminance`].
pub const LUMA_RED: f64 = 0.2126;
pub const LUMA_GREEN: f64 = 0.7152;
pub const LUMA_BLUE: f64 = 0.0722;

/// Opaque sRGB color.
///
/// Colors are plain values: every operation in this crate returns a new
/// `Color` and never mutates its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack the channels into `0x00RRGGBB`, suitable as a hash key.
    #[must_use]
    pub const fn as_key(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Weighted brightness estimate in `[0, 255]`. See [`luminance`].
    #[must_use]
    pub fn luminance(self) -> f64 {
        luminance(self)
    }

    /// HSL saturation as a percentage in `[0, 100]`.
    #[must_use]
    pub fn saturation(self) -> f64 {
        self.to_hsl().s
    }

    /// HSL lightness as a percentage in `[0, 100]`.
    #[must_use]
    pub fn lightness(self) -> f64 {
        self.to_hsl().l
    }

    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let max_channel = self.r.max(self.g).max(self.b);
        let min_channel = self.r.min(self.g).min(self.b);
        let max = f64::from(max_channel) / 255.0;
        let min = f64::from(min_channel) / 255.0;
        let l = (max + min) / 2.0;

        if max_channel == min_channel {
            return Hsl::new(0.0, 0.0, l * 100.0);
        }

        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let sector = if max_channel == self.r {
            (g - b) / d + if self.g < self.b { 6.0 } else { 0.0 }
        } else if max_channel == self.g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl::new(sector * 60.0, s * 100.0, l * 100.0)
    }

    /// Lowercase `#rrggbb` form.
    #[must_use]
    pub fn hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        hsl.to_color()
    }
}

/// Perceived brightness: `0.2126 R + 0.7152 G + 0.0722 B` over 0-255 channels.
///
/// Not rounded. A saturated blue and a saturated yellow with the same raw
/// channel magnitude land far apart, which is the point of the weighting.
#[must_use]
pub fn luminance(color: Color) -> f64 {
    LUMA_RED * f64::from(color.r) + LUMA_GREEN * f64::from(color.g) + LUMA_BLUE * f64::from(color.b)
}

/// HSL representation used for lightness/saturation arithmetic.
///
/// Hue is in degrees `[0, 360)`; saturation and lightness are percentages
/// in `[0, 100]`. Constructors and every adjustment keep the components in
/// range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[must_use]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
        }
    }

    /// Convert back to sRGB, rounding each channel to the nearest integer.
    #[must_use]
    pub fn to_color(self) -> Color {
        let s = self.s / 100.0;
        let l = self.l / 100.0;
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let hp = self.h / 60.0;
        let x = c * (1.0 - (hp.rem_euclid(2.0) - 1.0).abs());
        let (r1, g1, b1) = match hp as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = l - c / 2.0;
        Color::new(to_channel(r1 + m), to_channel(g1 + m), to_channel(b1 + m))
    }

    /// Scale lightness relative to its headroom.
    ///
    /// Positive `percent` moves that share of the remaining distance toward
    /// 100; negative moves that share of the current value toward 0.
    #[must_use]
    pub fn scale_lightness(self, percent: f64) -> Self {
        Self::new(self.h, self.s, scale_component(self.l, percent))
    }

    /// Scale saturation relative to its headroom. See [`Hsl::scale_lightness`].
    #[must_use]
    pub fn scale_saturation(self, percent: f64) -> Self {
        Self::new(self.h, scale_component(self.s, percent), self.l)
    }

    /// Raise lightness by `amount` percentage points.
    #[must_use]
    pub fn lighten(self, amount: f64) -> Self {
        Self::new(self.h, self.s, self.l + amount)
    }

    /// Lower lightness by `amount` percentage points.
    #[must_use]
    pub fn darken(self, amount: f64) -> Self {
        Self::new(self.h, self.s, self.l - amount)
    }

    /// Raise saturation by `amount` percentage points.
    #[must_use]
    pub fn saturate(self, amount: f64) -> Self {
        Self::new(self.h, self.s + amount, self.l)
    }
}

fn scale_component(value: f64, percent: f64) -> f64 {
    let factor = percent.clamp(-100.0, 100.0) / 100.0;
    if factor > 0.0 {
        value + (100.0 - value) * factor
    } else {
        value + value * factor
    }
}

fn to_channel(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}
