use std::{
    ops::{Deref, DerefMut},
    sync::LazyLock,
};

use gpui::{AbsoluteLength, App, DefiniteLength, Global, Pixels, Rgba, SharedString};
use serde::Deserialize;
use smallvec::SmallVec;

use super::deserializers::{
    de_abs_length, de_def_length, de_pixels, de_string_or_non_empty_list, de_variants,
};

#[derive(Debug, Deserialize, Clone)]
pub struct Theme {
    pub name: SharedString,
    pub layout: ThemeLayout,
    pub variants: ThemeVariants,
}

macro_rules! generate_builtin_themes {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            pub const $name: LazyLockTheme = LazyLockTheme::new(|| {
                Theme::from_string(include_str!($path))
                    .expect(concat!("bundled theme ", $path, " should be valid"))
            });
        )+
    };
}

pub struct LazyLockTheme(LazyLock<Theme>);

impl LazyLockTheme {
    #[inline(always)]
    const fn new(f: fn() -> Theme) -> Self {
        Self(LazyLock::new(f))
    }
}

impl Deref for LazyLockTheme {
    type Target = Theme;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for LazyLockTheme {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl AsRef<Theme> for LazyLockTheme {
    fn as_ref(&self) -> &Theme {
        &self.0
    }
}

impl AsRef<Theme> for Theme {
    fn as_ref(&self) -> &Theme {
        self
    }
}

impl Theme {
    generate_builtin_themes!(["../../themes/default.json", DEFAULT]);

    /// Parses a theme from its JSON representation.
    pub fn from_string<S: AsRef<str>>(str: S) -> Result<Theme, serde_json::Error> {
        serde_json::from_str(str.as_ref())
    }
}

impl Global for Theme {}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeLayout {
    pub text: ThemeText,
    pub corner_radii: ThemeCornerRadii,
    pub size: ThemeSize,
    pub padding: ThemePadding,
    pub breakpoints: ThemeBreakpoints,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeText {
    #[serde(deserialize_with = "de_pixels")]
    pub base_size: Pixels,
    pub default_font: ThemeFont,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeFont {
    #[serde(deserialize_with = "de_string_or_non_empty_list")]
    pub family: SmallVec<[SharedString; 1]>,
    #[serde(deserialize_with = "de_def_length")]
    pub line_height: DefiniteLength,
    pub sizes: ThemeTextSizes,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeTextSizes {
    #[serde(deserialize_with = "de_abs_length")]
    pub body: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub caption: AbsoluteLength,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeCornerRadii {
    #[serde(deserialize_with = "de_pixels")]
    pub pill: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeSize {
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemePadding {
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
}

/// Viewport widths at which responsive components change layout.
///
/// A query such as "above tablet" matches once the viewport is wider than
/// `tablet`. `hysteresis` is the distance the width must move past a
/// threshold before an already-evaluated query flips.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct ThemeBreakpoints {
    #[serde(deserialize_with = "de_pixels")]
    pub mobile: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub small_tablet: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub tablet: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub hysteresis: Pixels,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(transparent)]
pub struct ThemeVariants {
    #[serde(deserialize_with = "de_variants")]
    pub variants: SmallVec<[ThemeVariant; 2]>,
}

impl ThemeVariants {
    /// Returns the variant selected by [`ActiveVariantId`], falling back to the
    /// first variant when none is set or the id is out of range.
    pub fn active(&self, cx: &App) -> &ThemeVariant {
        let id = cx
            .try_global::<ActiveVariantId>()
            .map(|id| id.0)
            .unwrap_or_default();

        self.variants.get(id).unwrap_or(&self.variants[0])
    }
}

pub struct ActiveVariantId(pub usize);

impl gpui::Global for ActiveVariantId {}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeVariant {
    pub kind: ThemeVariantKind,
    pub colors: ThemeColors,
}

#[derive(Debug, Deserialize, Clone)]
pub enum ThemeVariantKind {
    Dark,
    Light,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeColors {
    pub background: ThemeBackgroundColors,
    pub accent: ThemeAccentColors,
    pub text: ThemeTextColors,
    pub chip: ThemeChipPalettes,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeBackgroundColors {
    pub primary: Rgba,
    pub contrast: Rgba,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeAccentColors {
    pub focus: Rgba,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeTextColors {
    pub primary: Rgba,
    pub link: Rgba,
}

/// One colour palette per chip style.
#[derive(Debug, Deserialize, Clone)]
pub struct ThemeChipPalettes {
    pub default: ThemeChipColors,
    pub on_dark: ThemeChipColors,
    pub on_image: ThemeChipColors,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct ThemeChipColors {
    pub bg: Rgba,
    pub bg_hover: Rgba,
    pub bg_selected: Rgba,
    pub bg_selected_hover: Rgba,
    pub border: Rgba,
    pub text: Rgba,
    pub text_selected: Rgba,
    pub text_disabled: Rgba,
    pub nudger_bg: Rgba,
}
