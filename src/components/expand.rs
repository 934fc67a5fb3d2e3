use std::rc::Rc;

use gpui::{
    App, CursorStyle, ElementId, InteractiveElement, IntoElement, MouseButton, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window, div,
    prelude::FluentBuilder,
};

use crate::{
    ChipIconKind,
    components::Icon,
    extensions::click_behavior::{ClickBehavior, ClickBehaviorExt},
    theme::ThemeExt,
    utils::{ElementIdExt, RgbaExt},
};

type Callback = Rc<dyn Fn(&mut Window, &mut App)>;

/// A link-style "show more" button with a chevron that follows its state.
///
/// Activating a collapsed button calls `on_show` then `on_toggle(false)`;
/// activating an expanded one calls `on_hide` then `on_toggle(true)`. The
/// caller owns `collapsed` and is expected to update it from `on_toggle`.
/// In test builds the button's debug selector is its element id.
#[derive(IntoElement)]
pub struct Expand {
    id: ElementId,
    text: SharedString,
    collapsed: bool,
    on_show: Option<Callback>,
    on_hide: Option<Callback>,
    on_toggle: Option<Rc<dyn Fn(&bool, &mut Window, &mut App)>>,
    click_behavior: ClickBehavior,
}

impl Expand {
    pub fn new(id: impl Into<ElementId>, text: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            collapsed: true,
            on_show: None,
            on_hide: None,
            on_toggle: None,
            click_behavior: ClickBehavior::default(),
        }
    }

    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }

    pub fn on_show(mut self, on_show: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_show = Some(Rc::new(on_show));
        self
    }

    pub fn on_hide(mut self, on_hide: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_hide = Some(Rc::new(on_hide));
        self
    }

    /// Called with the new `collapsed` value.
    pub fn on_toggle(mut self, on_toggle: impl Fn(&bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_toggle = Some(Rc::new(on_toggle));
        self
    }

    fn icon(&self) -> ChipIconKind {
        if self.collapsed {
            ChipIconKind::ChevronDown
        } else {
            ChipIconKind::ChevronUp
        }
    }

    fn activate(
        collapsed: bool,
        on_show: Option<&Callback>,
        on_hide: Option<&Callback>,
        on_toggle: Option<&Rc<dyn Fn(&bool, &mut Window, &mut App)>>,
        window: &mut Window,
        cx: &mut App,
    ) {
        let reveal = if collapsed { on_show } else { on_hide };

        if let Some(reveal) = reveal {
            (reveal)(window, cx);
        }

        if let Some(on_toggle) = on_toggle {
            (on_toggle)(&!collapsed, window, cx);
        }
    }
}

impl ClickBehaviorExt for Expand {
    fn click_behavior_mut(&mut self) -> &mut ClickBehavior {
        &mut self.click_behavior
    }
}

impl RenderOnce for Expand {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let link_color = cx.get_theme().variants.active(cx).colors.text.link;
        let primary_text_color = cx.get_theme().variants.active(cx).colors.text.primary;
        let focus_color = cx.get_theme().variants.active(cx).colors.accent.focus;
        let font_family = cx.get_theme().layout.text.default_font.family[0].clone();
        let text_size = cx.get_theme().layout.text.default_font.sizes.body;
        let line_height = cx.get_theme().layout.text.default_font.line_height;
        let icon_size = cx.get_theme().layout.size.sm;
        let gap = cx.get_theme().layout.padding.sm;
        let corner_radius = cx.get_theme().layout.corner_radii.sm;

        let is_hover_state =
            window.use_keyed_state(self.id.with_suffix("state:hover"), cx, |_window, _cx| false);
        let is_hover = *is_hover_state.read(cx);

        let focus_handle = window
            .use_keyed_state(
                self.id.with_suffix("state:focus_handle"),
                cx,
                |_window, cx| cx.focus_handle().tab_stop(true),
            )
            .read(cx)
            .clone();
        let is_focus = focus_handle.is_focused(window);

        let color = if is_hover {
            link_color.mix(&primary_text_color, 0.2)
        } else {
            link_color
        };
        let icon = self.icon();

        div()
            .id(self.id.clone())
            .debug_selector(|| self.id.to_string())
            .flex()
            .flex_row()
            .items_center()
            .gap(gap)
            .rounded(corner_radius)
            .border_1()
            .border_color(if is_focus {
                focus_color
            } else {
                focus_color.alpha(0.)
            })
            .cursor(CursorStyle::PointingHand)
            .font_family(font_family)
            .text_size(text_size)
            .line_height(line_height)
            .text_color(color)
            .when(is_hover, |this| this.underline())
            .child(self.text)
            .child(Icon::new(icon).size(icon_size).color(color))
            .on_hover(move |hover, _window, cx| {
                is_hover_state.update(cx, |this, _cx| *this = *hover);
                cx.notify(is_hover_state.entity_id());
            })
            .on_mouse_down(MouseButton::Left, |_, window, _cx| window.prevent_default())
            .on_click({
                let collapsed = self.collapsed;
                let on_show = self.on_show;
                let on_hide = self.on_hide;
                let on_toggle = self.on_toggle;
                let click_behavior = self.click_behavior;

                move |_, window, cx| {
                    click_behavior.apply(window, cx);

                    Self::activate(
                        collapsed,
                        on_show.as_ref(),
                        on_hide.as_ref(),
                        on_toggle.as_ref(),
                        window,
                        cx,
                    );
                }
            })
            .track_focus(&focus_handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chevron_follows_state() {
        assert_eq!(Expand::new("expand", "More").icon(), ChipIconKind::ChevronDown);
        assert_eq!(
            Expand::new("expand", "Less").collapsed(false).icon(),
            ChipIconKind::ChevronUp
        );
    }
}

#[cfg(all(test, feature = "test-support"))]
mod gpui_tests {
    use std::cell::RefCell;

    use super::*;
    use crate::theme::Theme;
    use gpui::{AppContext, Context, Modifiers, Render, TestAppContext, VisualTestContext};

    struct ExpandTestView {
        collapsed: bool,
    }

    impl Render for ExpandTestView {
        fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
            div().size_full().child(
                Expand::new("expand", "Show more")
                    .collapsed(self.collapsed)
                    .on_toggle(cx.listener(|view, collapsed, _window, cx| {
                        view.collapsed = *collapsed;
                        cx.notify();
                    })),
            )
        }
    }

    fn recorder(log: &Rc<RefCell<Vec<String>>>, name: &'static str) -> Callback {
        let log = log.clone();
        Rc::new(move |_window: &mut Window, _cx: &mut App| {
            log.borrow_mut().push(name.to_string())
        })
    }

    #[gpui::test]
    fn test_activation_order(cx: &mut TestAppContext) {
        let log = Rc::new(RefCell::new(Vec::new()));

        let window = cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);

            cx.open_window(Default::default(), |_window, cx| {
                cx.new(|_cx| ExpandTestView { collapsed: true })
            })
            .unwrap()
        });
        cx.run_until_parked();

        window
            .update(cx, |_view, window, cx| {
                let on_show = recorder(&log, "show");
                let on_hide = recorder(&log, "hide");
                let toggle_log = log.clone();
                let on_toggle: Rc<dyn Fn(&bool, &mut Window, &mut App)> =
                    Rc::new(move |collapsed: &bool, _window: &mut Window, _cx: &mut App| {
                        toggle_log.borrow_mut().push(format!("toggle:{collapsed}"))
                    });

                Expand::activate(
                    true,
                    Some(&on_show),
                    Some(&on_hide),
                    Some(&on_toggle),
                    window,
                    cx,
                );
                Expand::activate(
                    false,
                    Some(&on_show),
                    Some(&on_hide),
                    Some(&on_toggle),
                    window,
                    cx,
                );
            })
            .unwrap();

        assert_eq!(
            *log.borrow(),
            vec!["show", "toggle:false", "hide", "toggle:true"]
        );
    }

    #[gpui::test]
    fn test_expand_renders_both_states(cx: &mut TestAppContext) {
        let window = cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);

            cx.open_window(Default::default(), |_window, cx| {
                cx.new(|_cx| ExpandTestView { collapsed: true })
            })
            .unwrap()
        });
        cx.run_until_parked();

        window
            .update(cx, |view, _window, cx| {
                view.collapsed = false;
                cx.notify();
            })
            .unwrap();
        cx.run_until_parked();

        let view = window.root(cx).unwrap();
        view.read_with(cx, |view, _cx| assert!(!view.collapsed));
    }

    #[gpui::test]
    fn test_clicking_flips_collapsed(cx: &mut TestAppContext) {
        let window = cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);

            cx.open_window(Default::default(), |_window, cx| {
                cx.new(|_cx| ExpandTestView { collapsed: true })
            })
            .unwrap()
        });
        cx.run_until_parked();

        let view = window.root(cx).unwrap();
        let mut vcx = VisualTestContext::from_window(window.into(), cx);

        let bounds = vcx.debug_bounds("expand").unwrap();
        vcx.simulate_click(bounds.center(), Modifiers::none());
        view.read_with(&vcx, |view, _cx| assert!(!view.collapsed));

        let bounds = vcx.debug_bounds("expand").unwrap();
        vcx.simulate_click(bounds.center(), Modifiers::none());
        view.read_with(&vcx, |view, _cx| assert!(view.collapsed));
    }
}
