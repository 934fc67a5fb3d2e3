use std::f32::consts::PI;

use gpui::{
    App, CursorStyle, ElementId, InteractiveElement, IntoElement, MouseButton, ParentElement,
    Radians, RenderOnce, Rgba, SharedString, StatefulInteractiveElement, Styled, Window, div,
    prelude::FluentBuilder,
};

use crate::{
    ChipIconKind,
    components::{ChipComponent, Icon},
    extensions::click_behavior::{ClickBehavior, ClickBehaviorExt},
    theme::{ChipStyle, ThemeChipColors, ThemeExt},
    utils::{ElementIdExt, PixelsExt, RgbaExt},
};

/// A single pill-shaped chip.
///
/// The [`ChipComponent`] picks the rendering:
/// - `Selectable` shows its text and a filled background while selected.
/// - `Dismissible` is always drawn selected and carries a trailing close icon.
/// - `Dropdown` carries a trailing chevron that flips while selected.
/// - `Icon` shows only its leading icon; the text becomes its accessibility label.
///
/// In test builds the chip can be found with the debug selector `chip-{label}`.
#[derive(IntoElement)]
pub struct Chip {
    id: ElementId,
    text: SharedString,
    accessibility_label: Option<SharedString>,
    component: ChipComponent,
    chip_style: ChipStyle,
    selected: bool,
    disabled: bool,
    leading_icon: Option<SharedString>,
    on_click: Option<Box<dyn Fn(&bool, &mut Window, &mut App) + 'static>>,
    click_behavior: ClickBehavior,
}

impl Chip {
    pub fn new(id: impl Into<ElementId>, text: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            accessibility_label: None,
            component: ChipComponent::default(),
            chip_style: ChipStyle::default(),
            selected: false,
            disabled: false,
            leading_icon: None,
            on_click: None,
            click_behavior: ClickBehavior::default(),
        }
    }

    pub fn component(mut self, component: ChipComponent) -> Self {
        self.component = component;
        self
    }

    pub fn chip_style(mut self, chip_style: ChipStyle) -> Self {
        self.chip_style = chip_style;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn leading_icon(mut self, icon: impl Into<SharedString>) -> Self {
        self.leading_icon = Some(icon.into());
        self
    }

    pub fn accessibility_label(mut self, label: impl Into<SharedString>) -> Self {
        self.accessibility_label = Some(label.into());
        self
    }

    /// Called with the selection the chip asks for, i.e. the inverse of its
    /// current `selected` flag.
    pub fn on_click(mut self, on_click: impl Fn(&bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(on_click));
        self
    }

    /// The label assistive technology should announce for this chip.
    pub fn label(&self) -> SharedString {
        self.accessibility_label
            .clone()
            .unwrap_or_else(|| self.text.clone())
    }

    fn appears_selected(&self) -> bool {
        self.selected || self.component == ChipComponent::Dismissible
    }

    fn shows_text(&self) -> bool {
        self.component != ChipComponent::Icon
    }

    fn trailing_icon(&self) -> Option<(ChipIconKind, Radians)> {
        match self.component {
            ChipComponent::Dismissible => Some((ChipIconKind::Close, Radians(0.))),
            ChipComponent::Dropdown if self.selected => {
                Some((ChipIconKind::ChevronDown, Radians(PI)))
            }
            ChipComponent::Dropdown => Some((ChipIconKind::ChevronDown, Radians(0.))),
            ChipComponent::Selectable | ChipComponent::Icon => None,
        }
    }
}

impl ClickBehaviorExt for Chip {
    fn click_behavior_mut(&mut self) -> &mut ClickBehavior {
        &mut self.click_behavior
    }
}

fn background_color(colors: &ThemeChipColors, selected: bool, hover: bool) -> Rgba {
    match (selected, hover) {
        (true, true) => colors.bg_selected_hover,
        (true, false) => colors.bg_selected,
        (false, true) => colors.bg_hover,
        (false, false) => colors.bg,
    }
}

fn text_color(colors: &ThemeChipColors, selected: bool, disabled: bool) -> Rgba {
    if disabled {
        colors.text_disabled
    } else if selected {
        colors.text_selected
    } else {
        colors.text
    }
}

impl RenderOnce for Chip {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let colors = self.chip_style.colors(cx);
        let focus_color = cx.get_theme().variants.active(cx).colors.accent.focus;
        let height = cx.get_theme().layout.size.md;
        let icon_size = cx.get_theme().layout.size.sm;
        let corner_radius = cx.get_theme().layout.corner_radii.pill;
        let horizontal_padding = cx.get_theme().layout.padding.lg;
        let gap = cx.get_theme().layout.padding.sm;
        let font_family = cx.get_theme().layout.text.default_font.family[0].clone();
        let line_height = cx.get_theme().layout.text.default_font.line_height;
        let text_size = cx.get_theme().layout.text.default_font.sizes.caption;
        let vertical_padding = height.padding_needed_for_height(window, text_size, line_height);
        let icon_only_padding = if vertical_padding > gap {
            vertical_padding
        } else {
            gap
        };

        let is_disabled = self.disabled;
        let appears_selected = self.appears_selected();
        let shows_text = self.shows_text();
        let trailing_icon = self.trailing_icon();
        let label = self.label();

        let is_hover_state =
            window.use_keyed_state(self.id.with_suffix("state:hover"), cx, |_window, _cx| false);
        let is_hover = *is_hover_state.read(cx) && !is_disabled;

        let focus_handle = window
            .use_keyed_state(
                self.id.with_suffix("state:focus_handle"),
                cx,
                |_window, cx| cx.focus_handle().tab_stop(true),
            )
            .read(cx)
            .clone();
        let is_focus = focus_handle.is_focused(window);

        if is_focus && is_disabled {
            window.blur();
        }

        let background = background_color(&colors, appears_selected, is_hover);
        let foreground = text_color(&colors, appears_selected, is_disabled);
        let border_color = if is_focus {
            focus_color
        } else if appears_selected {
            background
        } else {
            colors.border
        };

        div()
            .id(self.id.clone())
            .debug_selector(|| format!("chip-{label}"))
            .flex()
            .flex_row()
            .flex_none()
            .items_center()
            .gap(gap)
            .h(height)
            .min_h(height)
            .map(|this| {
                if shows_text {
                    this.px(horizontal_padding).py(vertical_padding)
                } else {
                    this.px(icon_only_padding).justify_center()
                }
            })
            .rounded(corner_radius)
            .border_1()
            .border_color(border_color)
            .bg(background)
            .text_color(foreground)
            .text_size(text_size)
            .line_height(line_height)
            .font_family(font_family)
            .when(is_disabled, |this| this.bg(background.alpha(background.a * 0.5)))
            .cursor(if is_disabled {
                CursorStyle::OperationNotAllowed
            } else {
                CursorStyle::PointingHand
            })
            .when_some(self.leading_icon, |this, icon| {
                this.child(Icon::new(icon).size(icon_size).color(foreground))
            })
            .when(shows_text, |this| this.child(self.text))
            .when_some(trailing_icon, |this, (icon, rotation)| {
                this.child(
                    Icon::new(icon)
                        .size(icon_size)
                        .rotate(rotation)
                        .color(foreground),
                )
            })
            .when(!is_disabled, |this| {
                let is_hover_state_on_hover = is_hover_state.clone();
                let selected = self.selected;
                let on_click = self.on_click;
                let click_behavior = self.click_behavior;

                this.on_hover(move |hover, _window, cx| {
                    is_hover_state_on_hover.update(cx, |this, _cx| *this = *hover);
                    cx.notify(is_hover_state_on_hover.entity_id());
                })
                .on_mouse_down(MouseButton::Left, |_, window, _cx| {
                    // Keeps the focus ring hidden for pointer clicks.
                    window.prevent_default();
                })
                .on_click(move |_, window, cx| {
                    click_behavior.apply(window, cx);

                    if !is_focus {
                        window.blur();
                    }

                    if let Some(on_click) = on_click.as_ref() {
                        (on_click)(&!selected, window, cx);
                    }
                })
                .on_mouse_up_out(MouseButton::Left, move |_event, _window, cx| {
                    is_hover_state.update(cx, |this, _cx| *this = false);
                    cx.notify(is_hover_state.entity_id());
                })
                .track_focus(&focus_handle)
            })
    }
}
