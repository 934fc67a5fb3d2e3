#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::str::FromStr;

use enum_assoc::Assoc;
use gpui::App;

use crate::{
    components::ChipGroupError,
    theme::{ThemeChipColors, ThemeExt},
};

/// Visual treatment of a chip, chosen by the surface the chips sit on.
///
/// Use `colors()` to get the palette from the active theme variant.
#[derive(Assoc, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[func(pub fn colors(&self, cx: &App) -> ThemeChipColors)]
#[func(pub fn tag(&self) -> &'static str)]
pub enum ChipStyle {
    /// Chips on the primary background.
    #[default]
    #[assoc(colors = cx.get_theme().variants.active(cx).colors.chip.default)]
    #[assoc(tag = "default")]
    Default,
    /// Chips on a dark contrast surface.
    #[assoc(colors = cx.get_theme().variants.active(cx).colors.chip.on_dark)]
    #[assoc(tag = "on-dark")]
    OnDark,
    /// Chips placed over imagery.
    #[assoc(colors = cx.get_theme().variants.active(cx).colors.chip.on_image)]
    #[assoc(tag = "on-image")]
    OnImage,
}

impl FromStr for ChipStyle {
    type Err = ChipGroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "on-dark" | "onDark" => Ok(Self::OnDark),
            "on-image" | "onImage" => Ok(Self::OnImage),
            other => Err(ChipGroupError::UnknownChipStyle(other.to_string())),
        }
    }
}


#[cfg(all(test, feature = "test-support"))]
mod gpui_tests {
    use super::*;
    use crate::theme::{ActiveVariantId, Theme};
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_chip_style_resolves_distinct_palettes(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);

            let default = ChipStyle::Default.colors(cx);
            let on_dark = ChipStyle::OnDark.colors(cx);

            assert_ne!(default, on_dark, "Styles should resolve different palettes");
            assert!(default.bg_selected.a > 0.0, "Selected background should be visible");
        });
    }

    #[gpui::test]
    fn test_chip_style_follows_active_variant(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);

            cx.set_global(ActiveVariantId(0));
            let light = ChipStyle::Default.colors(cx);

            cx.set_global(ActiveVariantId(1));
            let dark = ChipStyle::Default.colors(cx);

            assert_ne!(light.bg, dark.bg, "Variants should change the chip palette");
        });
    }
}
