//! Color type for the floating-point pixel buffer.
//!
//! Channels are stored as `f32` and are never clamped by the rasterizer; values outside
//! `[0, 1]` pass through to the display collaborator unchanged. Clamping only happens
//! when converting to 8-bit output formats.

/// RGB color with floating-point components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Rgb {
    /// Red component (nominally 0.0-1.0).
    pub r: f32,
    /// Green component (nominally 0.0-1.0).
    pub g: f32,
    /// Blue component (nominally 0.0-1.0).
    pub b: f32,
}

impl Rgb {
    /// Black, the cleared buffer value.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    /// White.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    /// Red.
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    /// Green.
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);
    /// Blue.
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);
    /// Yellow, the default highlight color for selected polygons.
    pub const YELLOW: Self = Self::new(1.0, 1.0, 0.0);

    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a gray with all three channels set to `v`.
    #[must_use]
    pub const fn gray(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Convert to array representation in buffer channel order.
    #[must_use]
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Create from array representation in buffer channel order.
    #[must_use]
    pub const fn from_array(arr: [f32; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Linear interpolation between two colors.
    ///
    /// `t` is clamped to `[0, 1]`; the channels themselves are not.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let inv_t = 1.0 - t;

        Self::new(
            self.r * inv_t + other.r * t,
            self.g * inv_t + other.g * t,
            self.b * inv_t + other.b * t,
        )
    }

    /// Convert to 8-bit channels, clamping to `[0, 1]` first.
    #[must_use]
    pub fn to_rgb8(self) -> [u8; 3] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    /// Rec. 709 relative luminance of the (unclamped) channels.
    #[must_use]
    pub fn luminance(self) -> f32 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }
}

impl From<[f32; 3]> for Rgb {
    fn from(arr: [f32; 3]) -> Self {
        Self::from_array(arr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(Rgb::RED.lerp(Rgb::BLUE, 0.0), Rgb::RED);
        assert_eq!(Rgb::RED.lerp(Rgb::BLUE, 1.0), Rgb::BLUE);
    }

    #[test]
    fn test_lerp_midpoint() {
        let mid = Rgb::BLACK.lerp(Rgb::WHITE, 0.5);
        assert_relative_eq!(mid.r, 0.5);
        assert_relative_eq!(mid.g, 0.5);
        assert_relative_eq!(mid.b, 0.5);
    }

    #[test]
    fn test_lerp_keeps_out_of_gamut_channels() {
        let hot = Rgb::new(4.0, 0.0, -1.0);
        assert_eq!(hot.lerp(hot, 0.3), hot);
    }

    #[test]
    fn test_to_rgb8_clamps() {
        assert_eq!(Rgb::new(2.0, -1.0, 0.5).to_rgb8(), [255, 0, 128]);
        assert_eq!(Rgb::WHITE.to_rgb8(), [255, 255, 255]);
    }

    #[test]
    fn test_luminance() {
        assert_relative_eq!(Rgb::WHITE.luminance(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(Rgb::BLACK.luminance(), 0.0);
    }
}
