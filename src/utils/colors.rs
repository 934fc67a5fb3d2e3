use gpui::Rgba;

/// Extension trait for modifying RGBA colors.
pub trait RgbaExt {
    /// Returns a new color with the specified alpha value.
    fn alpha(self, alpha: f32) -> Self;

    /// Linearly interpolates each channel towards `to` by `delta` (0..=1).
    fn mix(self, to: &Self, delta: f32) -> Self;
}

impl RgbaExt for Rgba {
    fn alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    fn mix(self, to: &Self, delta: f32) -> Self {
        let delta = delta.clamp(0., 1.);
        let lerp = |a: f32, b: f32| a + (b - a) * delta;

        Rgba {
            r: lerp(self.r, to.r),
            g: lerp(self.g, to.g),
            b: lerp(self.b, to.b),
            a: lerp(self.a, to.a),
        }
    }
}
