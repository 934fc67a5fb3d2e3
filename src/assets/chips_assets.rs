#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::SharedString;

cfg_if::cfg_if!(
    if #[cfg(feature = "assets")] {
        use std::borrow::Cow;

        use gpui::Result;
        use rust_embed::RustEmbed;

        use crate::assets::AssetProvider;

        /// Icons bundled with the chips crate.
        #[derive(RustEmbed)]
        #[folder = "assets/"]
        #[include = "icons/**/*.svg"]
        #[exclude = "*.DS_Store"]
        pub struct ChipsAssets;

        impl AssetProvider for ChipsAssets {
            fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
                <Self as RustEmbed>::get(path).map(|f| f.data)
            }

            fn list(&self, path: &str) -> Result<Vec<SharedString>> {
                Ok(ChipsAssets::iter()
                    .filter_map(|p| p.starts_with(path).then(|| p.into()))
                    .collect())
            }
        }
    }
);

/// Built-in icon identifiers that map to bundled SVG assets.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn path(&self) -> SharedString)]
pub enum ChipIconKind {
    /// Leading icon injected into the pinned chip.
    #[assoc(path = "icons/filter.svg".into())]
    Filter,

    /// Leading nudger.
    #[assoc(path = "icons/chevron_left.svg".into())]
    ChevronLeft,

    /// Trailing nudger.
    #[assoc(path = "icons/chevron_right.svg".into())]
    ChevronRight,

    /// Dropdown chips and collapsed expand buttons.
    #[assoc(path = "icons/chevron_down.svg".into())]
    ChevronDown,

    /// Expanded expand buttons.
    #[assoc(path = "icons/chevron_up.svg".into())]
    ChevronUp,

    /// Dismissible chips.
    #[assoc(path = "icons/close.svg".into())]
    Close,
}

impl From<ChipIconKind> for SharedString {
    fn from(value: ChipIconKind) -> Self {
        value.path()
    }
}

#[cfg(all(test, feature = "assets"))]
mod tests {
    use super::*;
    use crate::assets::AssetProvider;

    const ALL: [ChipIconKind; 6] = [
        ChipIconKind::Filter,
        ChipIconKind::ChevronLeft,
        ChipIconKind::ChevronRight,
        ChipIconKind::ChevronDown,
        ChipIconKind::ChevronUp,
        ChipIconKind::Close,
    ];

    #[test]
    fn test_every_icon_kind_is_bundled() {
        for icon in ALL {
            let path = icon.path();
            assert!(
                AssetProvider::get(&ChipsAssets, &path).is_some(),
                "{path} should be embedded"
            );
        }
    }

    #[test]
    fn test_list_filters_by_prefix() {
        let icons = AssetProvider::list(&ChipsAssets, "icons/").unwrap();
        assert_eq!(icons.len(), ALL.len());

        let chevrons = AssetProvider::list(&ChipsAssets, "icons/chevron").unwrap();
        assert_eq!(chevrons.len(), 4);
    }
}
