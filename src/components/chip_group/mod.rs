use gpui::{
    App, ElementId, InteractiveElement, IntoElement, ParentElement, Pixels, RenderOnce,
    ScrollHandle, SharedString, StatefulInteractiveElement, Styled, Window, div,
    prelude::FluentBuilder, px,
};

use crate::{
    ChipIconKind,
    components::Chip,
    primitives::{BreakpointQuery, use_breakpoint},
    theme::{ChipStyle, ThemeExt},
    utils::ElementIdExt,
};

mod error;
pub use error::*;

mod item;
pub use item::*;

mod nudger;
pub use nudger::*;

mod state;
pub use state::*;

mod single_select;
pub use single_select::*;

/// A chip as it will be drawn, after hidden chips are dropped and the pinned
/// chip has been adjusted for the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct ChipSlot {
    pub id: SharedString,
    pub position: ChipPosition,
    pub text: SharedString,
    pub accessibility_label: SharedString,
    pub component: ChipComponent,
    pub selected: bool,
    pub disabled: bool,
    pub leading_icon: Option<SharedString>,
}

impl ChipSlot {
    fn from_item(item: &ChipItem, position: ChipPosition) -> Self {
        Self {
            id: item.id.clone(),
            position,
            text: item.text.clone(),
            accessibility_label: item.resolved_accessibility_label(),
            component: item.component,
            selected: item.selected,
            disabled: item.disabled,
            leading_icon: item.leading_icon.clone(),
        }
    }
}

/// Everything a [`ChipGroup`] draws, computed without touching the window.
#[derive(Debug, Clone, PartialEq)]
pub struct ChipGroupLayout {
    pub group_type: ChipGroupType,
    pub chips: Vec<ChipSlot>,
    pub pinned: Option<ChipSlot>,
    pub nudgers: bool,
    /// Carried for callers that mirror the group into their own accessibility
    /// layer; gpui has no accessibility tree, so nothing drawn depends on it.
    pub multiselectable: bool,
}

/// A stateless group of chips laid out as a scrolling rail or a wrapping list.
///
/// Selection is whatever the caller passes in each chip's `selected` flag;
/// see [`StatefulChipGroup`] for a group that tracks it itself.
#[derive(IntoElement)]
pub struct ChipGroup {
    id: ElementId,
    chips: Vec<ChipItem>,
    group_type: ChipGroupType,
    chip_style: ChipStyle,
    sticky_chip: Option<ChipItem>,
    aria_label: Option<SharedString>,
    aria_labelled_by: Option<SharedString>,
    aria_multiselectable: bool,
    nudge_step: Pixels,
}

impl ChipGroup {
    pub fn new(id: impl Into<ElementId>, chips: impl IntoIterator<Item = ChipItem>) -> Self {
        Self {
            id: id.into(),
            chips: chips.into_iter().collect(),
            group_type: ChipGroupType::default(),
            chip_style: ChipStyle::default(),
            sticky_chip: None,
            aria_label: None,
            aria_labelled_by: None,
            aria_multiselectable: true,
            nudge_step: px(240.),
        }
    }

    pub fn group_type(mut self, group_type: ChipGroupType) -> Self {
        self.group_type = group_type;
        self
    }

    pub fn chip_style(mut self, chip_style: ChipStyle) -> Self {
        self.chip_style = chip_style;
        self
    }

    /// Pins a chip ahead of the rail, outside its scroll area.
    ///
    /// Only drawn for [`ChipGroupType::Rail`]. It always gets a leading filter
    /// icon, shows its text above the tablet breakpoint and collapses to an
    /// icon-only chip below it. Its `on_click` receives [`ChipPosition::Pinned`].
    pub fn sticky_chip(mut self, chip: ChipItem) -> Self {
        self.sticky_chip = Some(chip);
        self
    }

    /// Names the group. gpui has no accessibility tree, so the label and
    /// [`aria_labelled_by`](Self::aria_labelled_by) are only checked by
    /// [`validate_aria_labelling`](Self::validate_aria_labelling).
    pub fn aria_label(mut self, label: impl Into<SharedString>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    /// Id of an element that names the group. Validation-only, like
    /// [`aria_label`](Self::aria_label).
    pub fn aria_labelled_by(mut self, labelled_by: impl Into<SharedString>) -> Self {
        self.aria_labelled_by = Some(labelled_by.into());
        self
    }

    /// Reported through [`ChipGroupLayout::multiselectable`]; it does not
    /// change how chips are drawn or selected.
    pub fn aria_multiselectable(mut self, multiselectable: bool) -> Self {
        self.aria_multiselectable = multiselectable;
        self
    }

    /// How far one nudger activation scrolls the rail.
    pub fn nudge_step(mut self, step: impl Into<Pixels>) -> Self {
        self.nudge_step = step.into();
        self
    }

    pub(crate) fn id(&self) -> &ElementId {
        &self.id
    }

    pub(crate) fn with_chips(mut self, chips: Vec<ChipItem>) -> Self {
        self.chips = chips;
        self
    }

    /// Checks that exactly one of `aria_label` and `aria_labelled_by` is set.
    pub fn validate_aria_labelling(&self) -> Result<(), ChipGroupError> {
        let has_label = self.aria_label.is_some();
        let has_labelled_by = self.aria_labelled_by.is_some();

        if has_label == has_labelled_by {
            return Err(ChipGroupError::AriaLabelling {
                group: self.id.clone(),
                has_label,
                has_labelled_by,
            });
        }

        Ok(())
    }

    /// Resolves what the group draws for a viewport that is (`is_desktop`) or
    /// is not above the tablet breakpoint.
    pub fn layout(&self, is_desktop: bool) -> ChipGroupLayout {
        let is_rail = self.group_type == ChipGroupType::Rail;

        let chips = self
            .chips
            .iter()
            .enumerate()
            .filter(|(_, chip)| !chip.hidden)
            .map(|(index, chip)| ChipSlot::from_item(chip, ChipPosition::Index(index)))
            .collect();

        let pinned = self
            .sticky_chip
            .as_ref()
            .filter(|chip| is_rail && !chip.hidden)
            .map(|chip| ChipSlot {
                component: if is_desktop {
                    ChipComponent::Selectable
                } else {
                    ChipComponent::Icon
                },
                leading_icon: Some(ChipIconKind::Filter.path()),
                ..ChipSlot::from_item(chip, ChipPosition::Pinned)
            });

        ChipGroupLayout {
            group_type: self.group_type,
            chips,
            pinned,
            nudgers: is_rail && is_desktop,
            multiselectable: self.aria_multiselectable,
        }
    }

    fn on_click_for(&self, position: ChipPosition) -> Option<OnChipClick> {
        match position {
            ChipPosition::Index(index) => self.chips.get(index)?.on_click.clone(),
            ChipPosition::Pinned => self.sticky_chip.as_ref()?.on_click.clone(),
        }
    }

    fn render_chip(&self, slot: ChipSlot) -> Chip {
        let chip_id = match slot.position {
            ChipPosition::Index(_) => self.id.with_suffix(format!("chip:{}", slot.id)),
            ChipPosition::Pinned => self.id.with_suffix("chip:pinned"),
        };

        let chip = Chip::new(chip_id, slot.text)
            .component(slot.component)
            .chip_style(self.chip_style)
            .selected(slot.selected)
            .disabled(slot.disabled)
            .accessibility_label(slot.accessibility_label);

        let chip = match slot.leading_icon {
            Some(icon) => chip.leading_icon(icon),
            None => chip,
        };

        match self.on_click_for(slot.position) {
            Some(on_click) => {
                let position = slot.position;
                chip.on_click(move |selected, window, cx| {
                    (on_click)(*selected, position, window, cx)
                })
            }
            None => chip,
        }
    }

    fn warn_aria_once(&self, window: &mut Window, cx: &mut App) {
        let Err(err) = self.validate_aria_labelling() else {
            return;
        };

        let warned =
            window.use_keyed_state(self.id.with_suffix("state:aria_warned"), cx, |_window, _cx| {
                false
            });

        if !*warned.read(cx) {
            tracing::warn!("{err}");
            warned.update(cx, |this, _cx| *this = true);
        }
    }
}

impl RenderOnce for ChipGroup {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        self.warn_aria_once(window, cx);

        let gap = cx.get_theme().layout.padding.md;
        let pinned_background = self.chip_style.colors(cx).nudger_bg;

        let is_desktop = use_breakpoint(
            self.id.with_suffix("state:breakpoint"),
            BreakpointQuery::AboveTablet,
            window,
            cx,
        );
        let layout = self.layout(is_desktop);
        let is_rail = layout.group_type == ChipGroupType::Rail;

        let scroll_handle = window
            .use_keyed_state(
                self.id.with_suffix("state:scroll_handle"),
                cx,
                |_window, _cx| ScrollHandle::new(),
            )
            .read(cx)
            .clone();

        let pinned = layout.pinned.map(|slot| self.render_chip(slot));
        let chips = layout
            .chips
            .into_iter()
            .map(|slot| self.render_chip(slot))
            .collect::<Vec<_>>();

        let list = div()
            .id(self.id.with_suffix("list"))
            .flex()
            .flex_row()
            .items_center()
            .gap(gap)
            .map(|this| {
                if is_rail {
                    this.flex_1()
                        .min_w_0()
                        .overflow_x_scroll()
                        .track_scroll(&scroll_handle)
                } else {
                    this.w_full().flex_wrap()
                }
            })
            .children(chips);

        div()
            .id(self.id.clone())
            .flex()
            .flex_row()
            .items_center()
            .gap(gap)
            .w_full()
            .when(layout.nudgers, |this| {
                this.child(
                    Nudger::leading(self.id.with_suffix("nudger:leading"), scroll_handle.clone())
                        .chip_style(self.chip_style)
                        .step(self.nudge_step),
                )
            })
            .when_some(pinned, |this, pinned| {
                this.child(
                    div()
                        .flex_none()
                        .pr(gap)
                        .bg(pinned_background)
                        .child(pinned),
                )
            })
            .child(list)
            .when(layout.nudgers, |this| {
                this.child(
                    Nudger::trailing(self.id.with_suffix("nudger:trailing"), scroll_handle)
                        .chip_style(self.chip_style)
                        .step(self.nudge_step),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chips() -> Vec<ChipItem> {
        vec![
            ChipItem::new("london", "London"),
            ChipItem::new("paris", "Paris").hidden(true),
            ChipItem::new("rome", "Rome").selected(true),
            ChipItem::new("oslo", "Oslo").hidden(true),
            ChipItem::new("lima", "Lima").component(ChipComponent::Dropdown),
        ]
    }

    #[test]
    fn test_hidden_chips_are_skipped_but_keep_their_index() {
        let layout = ChipGroup::new("group", chips()).layout(true);

        assert_eq!(layout.chips.len(), 3);
        assert_eq!(
            layout
                .chips
                .iter()
                .map(|slot| slot.position)
                .collect::<Vec<_>>(),
            vec![
                ChipPosition::Index(0),
                ChipPosition::Index(2),
                ChipPosition::Index(4)
            ]
        );
        assert!(layout.chips[1].selected);
        assert_eq!(layout.chips[2].component, ChipComponent::Dropdown);
    }

    #[test]
    fn test_layout_is_idempotent() {
        let group = ChipGroup::new("group", chips())
            .sticky_chip(ChipItem::new("filters", "Filters"))
            .aria_label("Cities");

        assert_eq!(group.layout(true), group.layout(true));
        assert_eq!(group.layout(false), group.layout(false));
    }

    #[test]
    fn test_nudgers_only_for_desktop_rails() {
        let rail = ChipGroup::new("group", chips());
        let wrap = ChipGroup::new("group", chips()).group_type(ChipGroupType::Wrap);

        assert!(rail.layout(true).nudgers);
        assert!(!rail.layout(false).nudgers);
        assert!(!wrap.layout(true).nudgers);
        assert!(!wrap.layout(false).nudgers);
    }

    #[test]
    fn test_pinned_chip_follows_breakpoint() {
        let group = ChipGroup::new("group", chips())
            .sticky_chip(ChipItem::new("filters", "Filters").component(ChipComponent::Dropdown));

        let desktop = group.layout(true).pinned.unwrap();
        let mobile = group.layout(false).pinned.unwrap();

        assert_eq!(desktop.component, ChipComponent::Selectable);
        assert_eq!(mobile.component, ChipComponent::Icon);
        assert_eq!(desktop.position, ChipPosition::Pinned);
        assert_eq!(desktop.leading_icon, Some(ChipIconKind::Filter.path()));
        assert_eq!(mobile.leading_icon, Some(ChipIconKind::Filter.path()));
        assert_eq!(mobile.accessibility_label, SharedString::from("Filters"));
    }

    #[test]
    fn test_pinned_chip_only_in_rails() {
        let group = ChipGroup::new("group", chips())
            .group_type(ChipGroupType::Wrap)
            .sticky_chip(ChipItem::new("filters", "Filters"));

        assert!(group.layout(true).pinned.is_none());
    }

    #[test]
    fn test_aria_labelling_needs_exactly_one_prop() {
        let neither = ChipGroup::new("group", chips());
        let both = ChipGroup::new("group", chips())
            .aria_label("Cities")
            .aria_labelled_by("cities-heading");
        let label = ChipGroup::new("group", chips()).aria_label("Cities");
        let labelled_by = ChipGroup::new("group", chips()).aria_labelled_by("cities-heading");

        assert!(matches!(
            neither.validate_aria_labelling(),
            Err(ChipGroupError::AriaLabelling {
                has_label: false,
                has_labelled_by: false,
                ..
            })
        ));
        assert!(matches!(
            both.validate_aria_labelling(),
            Err(ChipGroupError::AriaLabelling {
                has_label: true,
                has_labelled_by: true,
                ..
            })
        ));
        assert!(label.validate_aria_labelling().is_ok());
        assert!(labelled_by.validate_aria_labelling().is_ok());
    }

    #[test]
    fn test_multiselectable_defaults_on() {
        assert!(ChipGroup::new("group", chips()).layout(true).multiselectable);
        assert!(
            !ChipGroup::new("group", chips())
                .aria_multiselectable(false)
                .layout(true)
                .multiselectable
        );
    }

    #[test]
    fn test_on_click_lookup_uses_original_index() {
        let group = ChipGroup::new(
            "group",
            vec![
                ChipItem::new("a", "A").hidden(true),
                ChipItem::new("b", "B").on_click(|_, _, _, _| {}),
            ],
        );

        assert!(group.on_click_for(ChipPosition::Index(0)).is_none());
        assert!(group.on_click_for(ChipPosition::Index(1)).is_some());
        assert!(group.on_click_for(ChipPosition::Index(5)).is_none());
        assert!(group.on_click_for(ChipPosition::Pinned).is_none());
    }
}

#[cfg(all(test, feature = "test-support"))]
mod gpui_tests {
    use super::*;
    use crate::theme::Theme;
    use gpui::{AppContext, Context, TestAppContext};

    struct ChipGroupTestView {
        group_type: ChipGroupType,
        labelled: bool,
    }

    impl gpui::Render for ChipGroupTestView {
        fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
            let group = ChipGroup::new(
                "group",
                (0..12).map(|i| ChipItem::new(format!("chip-{i}"), format!("Chip {i}"))),
            )
            .group_type(self.group_type)
            .sticky_chip(ChipItem::new("filters", "Filters"));

            div()
                .size_full()
                .child(if self.labelled {
                    group.aria_label("Filters")
                } else {
                    group
                })
        }
    }

    fn open(cx: &mut TestAppContext, group_type: ChipGroupType, labelled: bool) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);

            cx.open_window(Default::default(), |_window, cx| {
                cx.new(|_cx| ChipGroupTestView {
                    group_type,
                    labelled,
                })
            })
            .unwrap();
        });
        cx.run_until_parked();
    }

    #[gpui::test]
    fn test_rail_renders(cx: &mut TestAppContext) {
        open(cx, ChipGroupType::Rail, true);
    }

    #[gpui::test]
    fn test_wrap_renders(cx: &mut TestAppContext) {
        open(cx, ChipGroupType::Wrap, true);
    }

    #[gpui::test]
    fn test_bad_aria_props_still_render(cx: &mut TestAppContext) {
        open(cx, ChipGroupType::Rail, false);
    }
}
