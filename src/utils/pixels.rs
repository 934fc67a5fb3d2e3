use gpui::{AbsoluteLength, DefiniteLength, Pixels, Window, px};

pub trait PixelsExt {
    /// Calculates the top and bottom padding needed in order for
    /// the height of an element to reach this px value.
    fn padding_needed_for_height(
        &self,
        window: &Window,
        text_size: AbsoluteLength,
        line_height: DefiniteLength,
    ) -> Pixels;

    /// Same as [`PixelsExt::padding_needed_for_height`] once the line height
    /// is already known in pixels. Never negative.
    fn padding_for_line_height(&self, line_height: Pixels) -> Pixels;
}

impl PixelsExt for Pixels {
    fn padding_needed_for_height(
        &self,
        window: &Window,
        text_size: AbsoluteLength,
        line_height: DefiniteLength,
    ) -> Pixels {
        let text_size = match text_size {
            AbsoluteLength::Pixels(text_size) => text_size,
            AbsoluteLength::Rems(text_size) => text_size.to_pixels(window.rem_size()),
        }
        .to_f64() as f32;

        let line_height = match line_height {
            DefiniteLength::Absolute(line_height) => {
                line_height.to_pixels(window.rem_size()).to_f64() as f32
            }

            DefiniteLength::Fraction(frac) => text_size * frac,
        };

        self.padding_for_line_height(px(line_height))
    }

    fn padding_for_line_height(&self, line_height: Pixels) -> Pixels {
        let height = self.to_f64() as f32;
        let line_height = line_height.to_f64() as f32;

        px(((height - line_height) / 2.).max(0.))
    }
}
