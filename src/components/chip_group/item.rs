#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::{fmt, rc::Rc, str::FromStr};

use enum_assoc::Assoc;
use gpui::{App, SharedString, Window};

use super::ChipGroupError;

/// Called with the chip's requested selection and its position in the group.
pub type OnChipClick = Rc<dyn Fn(bool, ChipPosition, &mut Window, &mut App)>;

/// Where an activated chip sits in its group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChipPosition {
    /// Index into the list the caller passed in, counting hidden chips.
    Index(usize),
    /// The pinned chip rendered ahead of a rail.
    Pinned,
}

impl ChipPosition {
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Pinned => None,
        }
    }
}

/// Which chip primitive renders an item.
#[derive(Assoc, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[func(pub fn tag(&self) -> &'static str)]
pub enum ChipComponent {
    #[default]
    #[assoc(tag = "selectable")]
    Selectable,
    #[assoc(tag = "dismissible")]
    Dismissible,
    #[assoc(tag = "dropdown")]
    Dropdown,
    #[assoc(tag = "icon")]
    Icon,
}

impl FromStr for ChipComponent {
    type Err = ChipGroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "selectable" => Ok(Self::Selectable),
            "dismissible" => Ok(Self::Dismissible),
            "dropdown" => Ok(Self::Dropdown),
            "icon" => Ok(Self::Icon),
            other => Err(ChipGroupError::UnknownComponent(other.to_string())),
        }
    }
}

/// How a group lays out its chips.
#[derive(Assoc, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[func(pub fn tag(&self) -> &'static str)]
pub enum ChipGroupType {
    /// A single horizontally scrolling row.
    #[default]
    #[assoc(tag = "rail")]
    Rail,
    /// Rows that wrap onto new lines.
    #[assoc(tag = "wrap")]
    Wrap,
}

impl FromStr for ChipGroupType {
    type Err = ChipGroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rail" => Ok(Self::Rail),
            "wrap" => Ok(Self::Wrap),
            other => Err(ChipGroupError::UnknownGroupType(other.to_string())),
        }
    }
}

/// One chip in a [`ChipGroup`](super::ChipGroup).
#[derive(Clone)]
pub struct ChipItem {
    pub(crate) id: SharedString,
    pub(crate) text: SharedString,
    pub(crate) selected: bool,
    pub(crate) hidden: bool,
    pub(crate) disabled: bool,
    pub(crate) component: ChipComponent,
    pub(crate) accessibility_label: Option<SharedString>,
    pub(crate) leading_icon: Option<SharedString>,
    pub(crate) on_click: Option<OnChipClick>,
}

impl ChipItem {
    /// Creates a selectable, visible, unselected chip.
    ///
    /// `id` must be unique within the group; it keys the chip's element state.
    pub fn new(id: impl Into<SharedString>, text: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            selected: false,
            hidden: false,
            disabled: false,
            component: ChipComponent::default(),
            accessibility_label: None,
            leading_icon: None,
            on_click: None,
        }
    }

    pub fn id(&self) -> &SharedString {
        &self.id
    }

    pub fn text(&self) -> &SharedString {
        &self.text
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn component(mut self, component: ChipComponent) -> Self {
        self.component = component;
        self
    }

    /// Sets the component from its tag, e.g. `"dismissible"`.
    pub fn component_tag(self, tag: &str) -> Result<Self, ChipGroupError> {
        Ok(self.component(tag.parse()?))
    }

    /// Label announced instead of the visible text. Defaults to the text.
    pub fn accessibility_label(mut self, label: impl Into<SharedString>) -> Self {
        self.accessibility_label = Some(label.into());
        self
    }

    pub fn leading_icon(mut self, icon: impl Into<SharedString>) -> Self {
        self.leading_icon = Some(icon.into());
        self
    }

    pub fn on_click(
        mut self,
        on_click: impl Fn(bool, ChipPosition, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Rc::new(on_click));
        self
    }

    pub(crate) fn resolved_accessibility_label(&self) -> SharedString {
        self.accessibility_label
            .clone()
            .unwrap_or_else(|| self.text.clone())
    }
}

impl fmt::Debug for ChipItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChipItem")
            .field("id", &self.id)
            .field("text", &self.text)
            .field("selected", &self.selected)
            .field("hidden", &self.hidden)
            .field("disabled", &self.disabled)
            .field("component", &self.component)
            .field("has_on_click", &self.on_click.is_some())
            .finish()
    }
}
