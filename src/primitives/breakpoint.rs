use gpui::{App, ElementId, Pixels, Window};

use crate::theme::{ThemeBreakpoints, ThemeExt};

/// A named viewport-width query, resolved against the theme's breakpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakpointQuery {
    /// Viewport no wider than the mobile breakpoint.
    Mobile,
    /// Viewport no wider than the small tablet breakpoint.
    SmallTablet,
    /// Viewport no wider than the tablet breakpoint.
    Tablet,
    /// Viewport wider than the mobile breakpoint.
    AboveMobile,
    /// Viewport wider than the small tablet breakpoint.
    AboveSmallTablet,
    /// Viewport wider than the tablet breakpoint; treated as desktop.
    AboveTablet,
}

impl BreakpointQuery {
    /// The width this query compares against.
    pub fn threshold(&self, breakpoints: &ThemeBreakpoints) -> Pixels {
        match self {
            Self::Mobile | Self::AboveMobile => breakpoints.mobile,
            Self::SmallTablet | Self::AboveSmallTablet => breakpoints.small_tablet,
            Self::Tablet | Self::AboveTablet => breakpoints.tablet,
        }
    }

    fn is_above(&self) -> bool {
        matches!(
            self,
            Self::AboveMobile | Self::AboveSmallTablet | Self::AboveTablet
        )
    }

    /// Evaluates the query for `width` with no memory of earlier results.
    pub fn matches(&self, width: Pixels, breakpoints: &ThemeBreakpoints) -> bool {
        let threshold = self.threshold(breakpoints);

        if self.is_above() {
            width > threshold
        } else {
            width <= threshold
        }
    }

    /// Evaluates the query given the previous result.
    ///
    /// A previous result is kept until `width` is at least
    /// `breakpoints.hysteresis` away from the threshold, so a window resized
    /// back and forth across the threshold does not flip on every frame. With a
    /// zero hysteresis this is identical to [`BreakpointQuery::matches`].
    pub fn resolve(
        &self,
        width: Pixels,
        breakpoints: &ThemeBreakpoints,
        previous: Option<bool>,
    ) -> bool {
        let matched = self.matches(width, breakpoints);

        match previous {
            Some(previous) if previous != matched => {
                let distance = (width.to_f64() - self.threshold(breakpoints).to_f64()).abs();

                if distance >= breakpoints.hysteresis.to_f64() {
                    matched
                } else {
                    previous
                }
            }
            _ => matched,
        }
    }
}

/// Evaluates `query` against the window's current viewport width.
///
/// The last result is kept in keyed state under `id`, which is what gives the
/// query its hysteresis. gpui re-renders on resize, so callers that read this
/// during render are re-evaluated whenever the viewport changes.
pub fn use_breakpoint(
    id: impl Into<ElementId>,
    query: BreakpointQuery,
    window: &mut Window,
    cx: &mut App,
) -> bool {
    let width = window.viewport_size().width;
    let breakpoints = cx.get_theme().layout.breakpoints;

    let state = window.use_keyed_state(id, cx, |_window, _cx| {
        query.matches(width, &breakpoints)
    });

    let previous = *state.read(cx);
    let matched = query.resolve(width, &breakpoints, Some(previous));

    if matched != previous {
        tracing::debug!(?query, ?width, matched, "breakpoint query changed");
        state.update(cx, |this, _cx| *this = matched);
    }

    matched
}
