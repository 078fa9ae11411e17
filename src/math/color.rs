use std::ops;

use super::approx_eq::ApproxEq;

/// RGB color with channels in the display range `[0, 255]`.
/// Values outside of it are allowed until the color is clamped.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
}

impl Color {
    pub const MAX_CHANNEL: f64 = 255.;

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
    pub const fn black() -> Self {
        Self::new(0., 0., 0.)
    }
    pub const fn white() -> Self {
        Self::new(Self::MAX_CHANNEL, Self::MAX_CHANNEL, Self::MAX_CHANNEL)
    }
    pub fn r(&self) -> f64 {
        self.r
    }
    pub fn g(&self) -> f64 {
        self.g
    }
    pub fn b(&self) -> f64 {
        self.b
    }

    fn clamp_channel(v: f64) -> f64 {
        v.clamp(0., Self::MAX_CHANNEL)
    }

    /// Each channel independently limited to `[0, 255]`.
    pub fn clamped(&self) -> Self {
        Self {
            r: Self::clamp_channel(self.r),
            g: Self::clamp_channel(self.g),
            b: Self::clamp_channel(self.b),
        }
    }

    /// Fractional part is truncated, not rounded.
    pub fn to_bytes(&self) -> [u8; 3] {
        let clamped = self.clamped();
        [clamped.r as u8, clamped.g as u8, clamped.b as u8]
    }
}

impl ApproxEq for Color {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        self.r.approx_eq_epsilon(&other.r, epsilon)
            && self.g.approx_eq_epsilon(&other.g, epsilon)
            && self.b.approx_eq_epsilon(&other.b, epsilon)
    }
}

impl ops::Mul<f64> for Color {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Color {
            r: self.r * rhs,
            g: self.g * rhs,
            b: self.b * rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq_low_prec;

    #[test]
    fn mul_f64() {
        assert_approx_eq_low_prec!(Color::new(20., 30., 40.) * 2., Color::new(40., 60., 80.));
    }

    #[test]
    fn clamp_out_of_range_channels() {
        assert_approx_eq_low_prec!(
            Color::new(300., -20., 128.).clamped(),
            Color::new(255., 0., 128.)
        );
    }

    #[test]
    fn bytes_are_truncated() {
        assert_eq!(Color::new(200.9, 0.2, 254.99).to_bytes(), [200, 0, 254]);
        assert_eq!(Color::new(1000., -1000., 255.).to_bytes(), [255, 0, 255]);
    }
}
