use gpui::{
    App, CursorStyle, ElementId, InteractiveElement, IntoElement, MouseButton, ParentElement,
    Pixels, RenderOnce, ScrollHandle, StatefulInteractiveElement, Styled, Window, div,
    prelude::FluentBuilder,
};

use crate::{
    ChipIconKind,
    components::Icon,
    extensions::click_behavior::{ClickBehavior, ClickBehaviorExt},
    primitives::{NudgeDirection, ScrollNudge, horizontal_max_offset},
    theme::{ChipStyle, ThemeExt},
    utils::{ElementIdExt, RgbaExt},
};

/// A round button beside a chip rail that scrolls it by one step.
///
/// It is disabled once the rail cannot move further in its direction. In test
/// builds its debug selector is its element id.
#[derive(IntoElement)]
pub struct Nudger {
    id: ElementId,
    direction: NudgeDirection,
    scroll_handle: ScrollHandle,
    chip_style: ChipStyle,
    nudge: ScrollNudge,
    click_behavior: ClickBehavior,
}

impl Nudger {
    fn new(id: impl Into<ElementId>, direction: NudgeDirection, scroll_handle: ScrollHandle) -> Self {
        Self {
            id: id.into(),
            direction,
            scroll_handle,
            chip_style: ChipStyle::default(),
            nudge: ScrollNudge::default(),
            click_behavior: ClickBehavior::default(),
        }
    }

    /// A nudger that scrolls back towards the first chip.
    pub fn leading(id: impl Into<ElementId>, scroll_handle: ScrollHandle) -> Self {
        Self::new(id, NudgeDirection::Leading, scroll_handle)
    }

    /// A nudger that scrolls on towards the last chip.
    pub fn trailing(id: impl Into<ElementId>, scroll_handle: ScrollHandle) -> Self {
        Self::new(id, NudgeDirection::Trailing, scroll_handle)
    }

    pub fn chip_style(mut self, chip_style: ChipStyle) -> Self {
        self.chip_style = chip_style;
        self
    }

    pub fn step(mut self, step: impl Into<Pixels>) -> Self {
        self.nudge = ScrollNudge::new(step.into());
        self
    }

    /// Whether activating the nudger would move the rail.
    pub fn is_enabled(&self) -> bool {
        self.nudge.can_nudge(
            self.scroll_handle.offset().x,
            horizontal_max_offset(&self.scroll_handle),
            self.direction,
        )
    }
}

impl ClickBehaviorExt for Nudger {
    fn click_behavior_mut(&mut self) -> &mut ClickBehavior {
        &mut self.click_behavior
    }
}

impl RenderOnce for Nudger {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let colors = self.chip_style.colors(cx);
        let size = cx.get_theme().layout.size.md;
        let icon_size = cx.get_theme().layout.size.sm;
        let corner_radius = cx.get_theme().layout.corner_radii.pill;

        let is_enabled = self.is_enabled();

        let is_hover_state =
            window.use_keyed_state(self.id.with_suffix("state:hover"), cx, |_window, _cx| false);
        let is_hover = *is_hover_state.read(cx) && is_enabled;

        let icon = match self.direction {
            NudgeDirection::Leading => ChipIconKind::ChevronLeft,
            NudgeDirection::Trailing => ChipIconKind::ChevronRight,
        };

        let background = if is_hover {
            colors.nudger_bg.mix(&colors.bg_hover, 0.5)
        } else {
            colors.nudger_bg
        };

        div()
            .id(self.id.clone())
            .debug_selector(|| self.id.to_string())
            .flex()
            .flex_none()
            .items_center()
            .justify_center()
            .size(size)
            .rounded(corner_radius)
            .border_1()
            .border_color(colors.border)
            .bg(background)
            .child(Icon::new(icon).size(icon_size).color(colors.text))
            .map(|this| {
                if is_enabled {
                    this.cursor(CursorStyle::PointingHand)
                } else {
                    this.cursor(CursorStyle::OperationNotAllowed).opacity(0.4)
                }
            })
            .when(is_enabled, |this| {
                let is_hover_state_on_hover = is_hover_state.clone();
                let scroll_handle = self.scroll_handle;
                let nudge = self.nudge;
                let direction = self.direction;
                let click_behavior = self.click_behavior;

                this.on_hover(move |hover, _window, cx| {
                    is_hover_state_on_hover.update(cx, |this, _cx| *this = *hover);
                    cx.notify(is_hover_state_on_hover.entity_id());
                })
                .on_mouse_down(MouseButton::Left, |_, window, _cx| window.prevent_default())
                .on_click(move |_, window, cx| {
                    click_behavior.apply(window, cx);

                    nudge.apply(&scroll_handle, direction);
                    tracing::trace!(?direction, offset = ?scroll_handle.offset().x, "nudged chip rail");
                    window.refresh();
                })
                .on_mouse_up_out(MouseButton::Left, move |_event, _window, cx| {
                    is_hover_state.update(cx, |this, _cx| *this = false);
                    cx.notify(is_hover_state.entity_id());
                })
            })
    }
}
