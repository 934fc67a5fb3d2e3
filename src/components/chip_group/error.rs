use gpui::ElementId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChipGroupError {
    #[error("Unknown chip component `{0}`.")]
    UnknownComponent(String),
    #[error("Unknown chip group type `{0}`.")]
    UnknownGroupType(String),
    #[error("Unknown chip style `{0}`.")]
    UnknownChipStyle(String),
    #[error(
        "Chip group {group:?} has a bad combination of aria props. Exactly one of aria_label or aria_labelled_by should be used."
    )]
    AriaLabelling {
        group: ElementId,
        has_label: bool,
        has_labelled_by: bool,
    },
}
