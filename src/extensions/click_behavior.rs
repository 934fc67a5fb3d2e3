use gpui::{App, Window};

/// Settings that control what happens to a click after a chip or control has
/// handled it.
///
/// By default, click handlers call `cx.stop_propagation()` and
/// `window.prevent_default()`, so a chip inside a clickable card does not also
/// activate the card.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct ClickBehavior {
    /// If true, `cx.stop_propagation()` will NOT be called.
    pub allow_propagation: bool,
    /// If true, `window.prevent_default()` will NOT be called.
    pub allow_default: bool,
}

impl ClickBehavior {
    /// Applies the click behavior settings to the given window and app context.
    pub fn apply(&self, window: &mut Window, cx: &mut App) {
        if !self.allow_default {
            window.prevent_default();
        }
        if !self.allow_propagation {
            cx.stop_propagation();
        }
    }
}

/// A trait for components that let callers opt out of the automatic
/// `stop_propagation()` and `prevent_default()` calls.
pub trait ClickBehaviorExt: Sized {
    /// Returns a mutable reference to the click behavior settings.
    fn click_behavior_mut(&mut self) -> &mut ClickBehavior;

    /// Lets the click bubble up to parent handlers.
    fn allow_click_propagation(mut self) -> Self {
        self.click_behavior_mut().allow_propagation = true;
        self
    }

    /// Lets the platform default action for the click run.
    fn allow_default_click_behaviour(mut self) -> Self {
        self.click_behavior_mut().allow_default = true;
        self
    }
}
