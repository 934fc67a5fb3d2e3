use gpui::{Axis, Pixels, ScrollHandle, point, px};

/// Which edge of a horizontal rail a nudge moves towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NudgeDirection {
    /// Towards the first item.
    Leading,
    /// Towards the last item.
    Trailing,
}

/// Moves the horizontal offset of a scroll container by a fixed step.
///
/// Offsets follow gpui's convention: `0` is the start of the content and the
/// offset becomes more negative as content scrolls towards its end. The
/// trailing edge is clamped by gpui during layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollNudge {
    pub step: Pixels,
}

impl Default for ScrollNudge {
    fn default() -> Self {
        Self { step: px(240.) }
    }
}

impl ScrollNudge {
    pub fn new(step: Pixels) -> Self {
        Self { step }
    }

    /// The offset after one nudge in `direction` from `current`.
    pub fn next_offset(&self, current: Pixels, direction: NudgeDirection) -> Pixels {
        let current = current.to_f64() as f32;
        let step = (self.step.to_f64() as f32).abs();

        match direction {
            NudgeDirection::Leading => px((current + step).min(0.)),
            NudgeDirection::Trailing => px(current - step),
        }
    }

    /// Whether a nudge in `direction` would move the content at all.
    ///
    /// `max_offset` is how far the content can scroll, or `None` while the
    /// container has not been laid out, in which case the trailing edge is
    /// assumed reachable.
    pub fn can_nudge(
        &self,
        current: Pixels,
        max_offset: Option<Pixels>,
        direction: NudgeDirection,
    ) -> bool {
        match direction {
            NudgeDirection::Leading => current < px(0.),
            NudgeDirection::Trailing => {
                max_offset.is_none_or(|max_offset| -current < max_offset)
            }
        }
    }

    /// Applies one nudge to `handle`, keeping its vertical offset.
    pub fn apply(&self, handle: &ScrollHandle, direction: NudgeDirection) {
        let offset = handle.offset();
        handle.set_offset(point(self.next_offset(offset.x, direction), offset.y));
    }
}

/// The horizontal scroll range of the container tracked by `handle`, once it
/// has been laid out.
pub fn horizontal_max_offset(handle: &ScrollHandle) -> Option<Pixels> {
    (handle.bounds().size.width > px(0.)).then(|| handle.max_offset().along(Axis::Horizontal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_nudge_moves_towards_content_end() {
        let nudge = ScrollNudge::new(px(100.));

        assert_eq!(nudge.next_offset(px(0.), NudgeDirection::Trailing), px(-100.));
        assert_eq!(nudge.next_offset(px(-150.), NudgeDirection::Trailing), px(-250.));
    }

    #[test]
    fn test_leading_nudge_clamps_at_start() {
        let nudge = ScrollNudge::new(px(100.));

        assert_eq!(nudge.next_offset(px(-250.), NudgeDirection::Leading), px(-150.));
        assert_eq!(nudge.next_offset(px(-40.), NudgeDirection::Leading), px(0.));
        assert_eq!(nudge.next_offset(px(0.), NudgeDirection::Leading), px(0.));
    }

    #[test]
    fn test_negative_step_behaves_like_positive() {
        let nudge = ScrollNudge::new(px(-100.));

        assert_eq!(nudge.next_offset(px(0.), NudgeDirection::Trailing), px(-100.));
    }

    #[test]
    fn test_leading_nudge_unavailable_at_start() {
        let nudge = ScrollNudge::default();

        assert!(!nudge.can_nudge(px(0.), Some(px(500.)), NudgeDirection::Leading));
        assert!(nudge.can_nudge(px(-1.), Some(px(500.)), NudgeDirection::Leading));
    }

    #[test]
    fn test_trailing_nudge_unavailable_at_end() {
        let nudge = ScrollNudge::default();

        assert!(nudge.can_nudge(px(0.), Some(px(500.)), NudgeDirection::Trailing));
        assert!(nudge.can_nudge(px(-499.), Some(px(500.)), NudgeDirection::Trailing));
        assert!(!nudge.can_nudge(px(-500.), Some(px(500.)), NudgeDirection::Trailing));
        assert!(!nudge.can_nudge(px(0.), Some(px(0.)), NudgeDirection::Trailing));
    }

    #[test]
    fn test_trailing_nudge_assumed_before_layout() {
        let nudge = ScrollNudge::default();

        assert!(nudge.can_nudge(px(0.), None, NudgeDirection::Trailing));
        assert_eq!(horizontal_max_offset(&ScrollHandle::new()), None);
    }

    #[test]
    fn test_apply_updates_scroll_handle() {
        let handle = ScrollHandle::new();
        let nudge = ScrollNudge::new(px(80.));

        nudge.apply(&handle, NudgeDirection::Trailing);
        assert_eq!(handle.offset().x, px(-80.));

        nudge.apply(&handle, NudgeDirection::Leading);
        assert_eq!(handle.offset().x, px(0.));
        assert_eq!(handle.offset().y, px(0.));
    }
}
