use gpui::{App, ElementId, Entity, IntoElement, Pixels, RenderOnce, SharedString, Window};

use crate::{
    components::{ChipGroup, ChipGroupType, ChipItem},
    theme::ChipStyle,
    utils::ElementIdExt,
};

/// Selection flags for a chip list, index-aligned with the chips it was built
/// from.
///
/// The chip ids are kept alongside the flags only to notice when the list
/// changes shape. Duplicate ids are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChipSelection {
    ids: Vec<SharedString>,
    flags: Vec<bool>,
}

impl ChipSelection {
    /// Takes each chip's `selected` flag as its initial state.
    pub fn from_chips(chips: &[ChipItem]) -> Self {
        Self {
            ids: chips.iter().map(|chip| chip.id.clone()).collect(),
            flags: chips.iter().map(|chip| chip.selected).collect(),
        }
    }

    /// Whether this selection was built from a list with the same ids in the
    /// same order as `chips`.
    pub fn matches_shape(&self, chips: &[ChipItem]) -> bool {
        self.ids.len() == chips.len()
            && self.ids.iter().zip(chips).all(|(id, chip)| *id == chip.id)
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    /// Sets the flag at `index`. Returns false when `index` is out of range.
    pub fn set(&mut self, index: usize, selected: bool) -> bool {
        match self.flags.get_mut(index) {
            Some(flag) => {
                *flag = selected;
                true
            }
            None => false,
        }
    }

    pub fn to_vec(&self) -> Vec<bool> {
        self.flags.clone()
    }
}

/// Resets `selection` when `chips` no longer has the shape it was built from.
/// Returns true if it was reset.
pub(crate) fn sync_selection(
    group: &ElementId,
    selection: &Entity<ChipSelection>,
    chips: &[ChipItem],
    cx: &mut App,
) -> bool {
    if selection.read(cx).matches_shape(chips) {
        return false;
    }

    tracing::debug!(
        ?group,
        previous = selection.read(cx).len(),
        current = chips.len(),
        "chip list changed shape, resetting selection"
    );

    selection.update(cx, |this, cx| {
        *this = ChipSelection::from_chips(chips);
        cx.notify();
    });

    true
}

/// Overrides each chip's `selected` flag from `selection` and wraps its
/// `on_click` so activation also writes the new flag back.
///
/// The caller's callback runs first and sees the same arguments.
pub(crate) fn adapt_chips(
    chips: Vec<ChipItem>,
    selection: &Entity<ChipSelection>,
    cx: &App,
) -> Vec<ChipItem> {
    let snapshot = selection.read(cx);

    chips
        .into_iter()
        .enumerate()
        .map(|(index, chip)| {
            let caller_on_click = chip.on_click.clone();
            let selection = selection.clone();

            ChipItem {
                selected: snapshot.is_selected(index),
                ..chip
            }
            .on_click(move |selected, position, window, cx| {
                if let Some(on_click) = caller_on_click.as_ref() {
                    (on_click)(selected, position, window, cx);
                }

                let index = position.index().unwrap_or(index);
                selection.update(cx, |this, cx| {
                    this.set(index, selected);
                    cx.notify();
                });
            })
        })
        .collect()
}

/// A [`ChipGroup`] that keeps its own selection.
///
/// Each chip's `selected` flag is only read on first render. After that the
/// group flips a chip's flag whenever it is activated, after forwarding the
/// activation to the chip's own `on_click`. If the chip list later changes
/// length or ids, the selection starts over from the new flags.
#[derive(IntoElement)]
pub struct StatefulChipGroup {
    chips: Vec<ChipItem>,
    base: ChipGroup,
}

impl StatefulChipGroup {
    pub fn new(id: impl Into<ElementId>, chips: impl IntoIterator<Item = ChipItem>) -> Self {
        Self {
            chips: chips.into_iter().collect(),
            base: ChipGroup::new(id, Vec::new()),
        }
    }

    pub fn group_type(mut self, group_type: ChipGroupType) -> Self {
        self.base = self.base.group_type(group_type);
        self
    }

    pub fn chip_style(mut self, chip_style: ChipStyle) -> Self {
        self.base = self.base.chip_style(chip_style);
        self
    }

    pub fn sticky_chip(mut self, chip: ChipItem) -> Self {
        self.base = self.base.sticky_chip(chip);
        self
    }

    pub fn aria_label(mut self, label: impl Into<SharedString>) -> Self {
        self.base = self.base.aria_label(label);
        self
    }

    pub fn aria_labelled_by(mut self, labelled_by: impl Into<SharedString>) -> Self {
        self.base = self.base.aria_labelled_by(labelled_by);
        self
    }

    pub fn aria_multiselectable(mut self, multiselectable: bool) -> Self {
        self.base = self.base.aria_multiselectable(multiselectable);
        self
    }

    pub fn nudge_step(mut self, step: impl Into<Pixels>) -> Self {
        self.base = self.base.nudge_step(step);
        self
    }
}

impl RenderOnce for StatefulChipGroup {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let id = self.base.id().clone();
        let chips = self.chips;

        let selection =
            window.use_keyed_state(id.with_suffix("state:selection"), cx, |_window, _cx| {
                ChipSelection::from_chips(&chips)
            });
        sync_selection(&id, &selection, &chips, cx);

        self.base.with_chips(adapt_chips(chips, &selection, cx))
    }
}


#[cfg(all(test, feature = "test-support"))]
mod gpui_tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::{
        components::ChipPosition,
        theme::{Theme, ThemeExt},
    };
    use gpui::{
        AppContext, Context, Modifiers, ParentElement, Render, Styled, TestAppContext,
        VisualTestContext, div,
    };

    type Calls = Rc<RefCell<Vec<(bool, ChipPosition)>>>;

    /// `(id, selected, hidden)`; each chip is labelled with its id in upper case.
    type Spec = (&'static str, bool, bool);

    struct StatefulTestView {
        chips: Vec<Spec>,
        calls: Calls,
    }

    impl Render for StatefulTestView {
        fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
            let chips = self.chips.iter().map(|(id, selected, hidden)| {
                let calls = self.calls.clone();

                ChipItem::new(*id, id.to_uppercase())
                    .selected(*selected)
                    .hidden(*hidden)
                    .on_click(move |selected, position, _window, _cx| {
                        calls.borrow_mut().push((selected, position));
                    })
            });

            div().size_full().child(
                StatefulChipGroup::new("group", chips)
                    .aria_label("Letters")
                    .sticky_chip(ChipItem::new("filters", "Filters")),
            )
        }
    }

    fn chips() -> Vec<ChipItem> {
        vec![
            ChipItem::new("a", "A"),
            ChipItem::new("b", "B").selected(true),
            ChipItem::new("c", "C"),
        ]
    }

    fn open(cx: &mut TestAppContext, chips: Vec<Spec>) -> (VisualTestContext, Calls) {
        let calls = Calls::default();

        let window = cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);

            cx.open_window(Default::default(), |_window, cx| {
                cx.new(|_cx| StatefulTestView {
                    chips,
                    calls: calls.clone(),
                })
            })
            .unwrap()
        });
        cx.run_until_parked();

        (VisualTestContext::from_window(window.into(), cx), calls)
    }

    fn click(vcx: &mut VisualTestContext, selector: &'static str) {
        let bounds = vcx
            .debug_bounds(selector)
            .unwrap_or_else(|| panic!("{selector} should be drawn"));
        vcx.simulate_click(bounds.center(), Modifiers::none());
    }

    #[gpui::test]
    fn test_clicks_toggle_tracked_selection(cx: &mut TestAppContext) {
        let (mut vcx, calls) = open(
            cx,
            vec![("a", false, false), ("b", true, false), ("c", false, false)],
        );

        click(&mut vcx, "chip-A");
        assert_eq!(*calls.borrow(), vec![(true, ChipPosition::Index(0))]);

        click(&mut vcx, "chip-B");
        assert_eq!(
            *calls.borrow(),
            vec![(true, ChipPosition::Index(0)), (false, ChipPosition::Index(1))]
        );

        // The tracked flags are now [true, false, false].
        click(&mut vcx, "chip-A");
        click(&mut vcx, "chip-B");
        click(&mut vcx, "chip-C");
        assert_eq!(
            calls.borrow()[2..],
            [
                (false, ChipPosition::Index(0)),
                (true, ChipPosition::Index(1)),
                (true, ChipPosition::Index(2)),
            ]
        );
    }

    #[gpui::test]
    fn test_hidden_chip_keeps_original_index(cx: &mut TestAppContext) {
        let (mut vcx, calls) = open(
            cx,
            vec![("a", false, false), ("h", false, true), ("b", true, false)],
        );

        assert!(vcx.debug_bounds("chip-H").is_none());

        click(&mut vcx, "chip-B");
        click(&mut vcx, "chip-A");
        click(&mut vcx, "chip-B");

        assert_eq!(
            *calls.borrow(),
            vec![
                (false, ChipPosition::Index(2)),
                (true, ChipPosition::Index(0)),
                (true, ChipPosition::Index(2)),
            ]
        );
    }

    #[gpui::test]
    fn test_adapted_chips_render_state(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let selection = cx.new(|_cx| ChipSelection::from_chips(&chips()));
            selection.update(cx, |this, _cx| {
                this.set(2, true);
            });

            let adapted = adapt_chips(chips(), &selection, cx);
            assert_eq!(
                adapted.iter().map(|c| c.selected).collect::<Vec<_>>(),
                vec![false, true, true]
            );
            assert!(adapted.iter().all(|c| c.on_click.is_some()));
        });
    }

    #[gpui::test]
    fn test_shape_change_resets_selection(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let id = ElementId::from("group");
            let selection = cx.new(|_cx| ChipSelection::from_chips(&chips()));
            selection.update(cx, |this, _cx| {
                this.set(0, true);
            });

            assert!(!sync_selection(&id, &selection, &chips(), cx));
            assert_eq!(selection.read(cx).to_vec(), vec![true, true, false]);

            let grown = vec![
                ChipItem::new("a", "A"),
                ChipItem::new("b", "B"),
                ChipItem::new("c", "C"),
                ChipItem::new("d", "D").selected(true),
            ];
            assert!(sync_selection(&id, &selection, &grown, cx));
            assert_eq!(selection.read(cx).to_vec(), vec![false, false, false, true]);
        });
    }
}
