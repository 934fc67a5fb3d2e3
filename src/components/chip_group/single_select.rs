use std::rc::Rc;

use gpui::{App, ElementId, IntoElement, Pixels, RenderOnce, SharedString, Window};

use crate::{
    components::{ChipGroup, ChipGroupType, ChipItem},
    theme::ChipStyle,
    utils::ElementIdExt,
};

pub type OnSingleSelect = Rc<dyn Fn(bool, usize, &mut Window, &mut App)>;

/// The selected index after the chip at `index` asks to become `selected`.
///
/// Selecting a chip replaces the current selection. Deselecting the selected
/// chip clears it; deselecting any other chip changes nothing.
pub fn next_single_selection(
    current: Option<usize>,
    selected: bool,
    index: usize,
) -> Option<usize> {
    if selected {
        Some(index)
    } else if current == Some(index) {
        None
    } else {
        current
    }
}

fn single_select_chips(
    chips: Vec<ChipItem>,
    selected_index: Option<usize>,
    on_item_click: Option<OnSingleSelect>,
) -> Vec<ChipItem> {
    chips
        .into_iter()
        .enumerate()
        .map(|(index, chip)| {
            let caller_on_click = chip.on_click.clone();
            let on_item_click = on_item_click.clone();

            ChipItem {
                selected: selected_index == Some(index),
                ..chip
            }
            .on_click(move |selected, position, window, cx| {
                if let Some(on_click) = caller_on_click.as_ref() {
                    (on_click)(selected, position, window, cx);
                }

                if let Some(on_item_click) = on_item_click.as_ref() {
                    (on_item_click)(selected, position.index().unwrap_or(index), window, cx);
                }
            })
        })
        .collect()
}

/// A chip group where at most one chip is selected.
///
/// The selection is owned by the caller: pass it in with
/// [`selected_index`](Self::selected_index) and update it from
/// [`on_item_click`](Self::on_item_click).
#[derive(IntoElement)]
pub struct SingleSelectChipGroup {
    chips: Vec<ChipItem>,
    selected_index: Option<usize>,
    on_item_click: Option<OnSingleSelect>,
    base: ChipGroup,
}

impl SingleSelectChipGroup {
    pub fn new(id: impl Into<ElementId>, chips: impl IntoIterator<Item = ChipItem>) -> Self {
        Self {
            chips: chips.into_iter().collect(),
            selected_index: None,
            on_item_click: None,
            base: ChipGroup::new(id, Vec::new()).aria_multiselectable(false),
        }
    }

    pub fn selected_index(mut self, selected_index: Option<usize>) -> Self {
        self.selected_index = selected_index;
        self
    }

    pub fn on_item_click(
        mut self,
        on_item_click: impl Fn(bool, usize, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_item_click = Some(Rc::new(on_item_click));
        self
    }

    pub fn group_type(mut self, group_type: ChipGroupType) -> Self {
        self.base = self.base.group_type(group_type);
        self
    }

    pub fn chip_style(mut self, chip_style: ChipStyle) -> Self {
        self.base = self.base.chip_style(chip_style);
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

    pub fn nudge_step(mut self, step: impl Into<Pixels>) -> Self {
        self.base = self.base.nudge_step(step);
        self
    }
}

impl RenderOnce for SingleSelectChipGroup {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        self.base.with_chips(single_select_chips(
            self.chips,
            self.selected_index,
            self.on_item_click,
        ))
    }
}

/// A [`SingleSelectChipGroup`] that keeps the selected index itself.
///
/// The initial selection is the first chip flagged `selected`.
#[derive(IntoElement)]
pub struct StatefulSingleSelectChipGroup {
    on_item_click: Option<OnSingleSelect>,
    base: SingleSelectChipGroup,
}

impl StatefulSingleSelectChipGroup {
    pub fn new(id: impl Into<ElementId>, chips: impl IntoIterator<Item = ChipItem>) -> Self {
        Self {
            on_item_click: None,
            base: SingleSelectChipGroup::new(id, chips),
        }
    }

    /// Called after the group has updated its selection.
    pub fn on_item_click(
        mut self,
        on_item_click: impl Fn(bool, usize, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_item_click = Some(Rc::new(on_item_click));
        self
    }

    pub fn group_type(mut self, group_type: ChipGroupType) -> Self {
        self.base = self.base.group_type(group_type);
        self
    }

    pub fn chip_style(mut self, chip_style: ChipStyle) -> Self {
        self.base = self.base.chip_style(chip_style);
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

    pub fn nudge_step(mut self, step: impl Into<Pixels>) -> Self {
        self.base = self.base.nudge_step(step);
        self
    }
}

impl RenderOnce for StatefulSingleSelectChipGroup {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let id = self.base.base.id().clone();
        let initial = self.base.chips.iter().position(|chip| chip.selected);

        let selected_index = window.use_keyed_state(
            id.with_suffix("state:selected_index"),
            cx,
            |_window, _cx| initial,
        );
        let current = *selected_index.read(cx);
        let on_item_click = self.on_item_click;

        self.base
            .selected_index(current)
            .on_item_click(move |selected, index, window, cx| {
                selected_index.update(cx, |this, cx| {
                    *this = next_single_selection(*this, selected, index);
                    cx.notify();
                });

                if let Some(on_item_click) = on_item_click.as_ref() {
                    (on_item_click)(selected, index, window, cx);
                }
            })
    }
}
