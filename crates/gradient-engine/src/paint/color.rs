/// Straight-alpha RGBA color with every channel in `[0, 1]`.
///
/// Invariant:
/// - always RGB; colors specified in any other model go through
///   [`normalize_to_rgb`](super::normalize_to_rgb) before they reach a ramp.
///
/// Channels are not premultiplied. Drawing backends that blend premultiplied
/// should convert at upload time.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB components.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Hue / saturation / brightness decomposition.
    ///
    /// Achromatic colors (`r == g == b`) report hue `0` and saturation `0`.
    pub fn to_hsba(self) -> Hsba {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;

        let saturation = if max <= 0.0 { 0.0 } else { delta / max };

        let sixths = if delta <= 0.0 {
            0.0
        } else if max == self.r {
            ((self.g - self.b) / delta).rem_euclid(6.0)
        } else if max == self.g {
            (self.b - self.r) / delta + 2.0
        } else {
            (self.r - self.g) / delta + 4.0
        };

        Hsba {
            h: sixths / 6.0,
            s: saturation,
            b: max,
            a: self.a,
        }
    }

    /// The automatic dimming transform: same hue and brightness, saturation `0`.
    ///
    /// Alpha is untouched. Applying it twice gives the same color as applying it once.
    #[inline]
    pub fn dimmed(self) -> Self {
        self.to_hsba().desaturated().to_rgba()
    }
}

/// Hue / saturation / brightness color.
///
/// - `h` is a fraction of a full turn in `[0, 1)`; values outside wrap.
/// - `s`, `b` and `a` are in `[0, 1]` and are clamped on conversion.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Hsba {
    pub h: f32,
    pub s: f32,
    pub b: f32,
    pub a: f32,
}

impl Hsba {
    #[inline]
    pub const fn new(h: f32, s: f32, b: f32, a: f32) -> Self {
        Self { h, s, b, a }
    }

    /// Same hue, brightness and alpha with saturation forced to `0`.
    #[inline]
    pub fn desaturated(self) -> Self {
        Self { s: 0.0, ..self }
    }

    pub fn to_rgba(self) -> Color {
        let h = self.h.rem_euclid(1.0) * 6.0;
        let s = self.s.clamp(0.0, 1.0);
        let v = self.b.clamp(0.0, 1.0);
        let a = self.a.clamp(0.0, 1.0);

        let sector = h.floor();
        let f = h - sector;

        let p = v * (1.0 - s);
        let q = v * (1.0 - f * s);
        let t = v * (1.0 - (1.0 - f) * s);

        let (r, g, b) = match sector as u8 % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Color::new(r, g, b, a)
    }
}
