use gpui::{
    App, Hsla, IntoElement, Length, Radians, RenderOnce, SharedString, Styled, Transformation,
    Window, prelude::FluentBuilder, px, svg,
};

use crate::{ChipIconKind, theme::ThemeExt};

/// An SVG icon, tinted with the theme's primary text color unless a color is
/// given.
///
/// Paths are resolved through the application's asset source.
#[derive(IntoElement)]
pub struct Icon {
    path: SharedString,
    size: Option<Length>,
    rotation: Radians,
    color: Option<Hsla>,
}

impl Icon {
    pub fn new(path: impl Into<SharedString>) -> Self {
        Self {
            path: path.into(),
            size: None,
            rotation: Radians(0.),
            color: None,
        }
    }

    /// Sets the width and height. Defaults to 14px.
    pub fn size(mut self, size: impl Into<Length>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn color(mut self, color: impl Into<Hsla>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn rotate(mut self, rotation: impl Into<Radians>) -> Self {
        self.rotation = rotation.into();
        self
    }
}

impl From<ChipIconKind> for Icon {
    fn from(kind: ChipIconKind) -> Self {
        Icon::new(kind)
    }
}

impl RenderOnce for Icon {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let size = self.size.unwrap_or(px(14.).into());
        let color = self
            .color
            .unwrap_or_else(|| cx.get_theme().variants.active(cx).colors.text.primary.into());

        svg()
            .path(self.path)
            .flex_none()
            .size(size)
            .min_w(size)
            .min_h(size)
            .text_color(color)
            .when(self.rotation.0 != 0., |this| {
                this.with_transformation(Transformation::rotate(self.rotation))
            })
    }
}
