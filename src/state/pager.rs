/// Tab/pager synchronization for the preview area
///
/// The page index is the single source of truth: the tab bar is a read-only
/// view of it, and the horizontal pager is driven by an explicit
/// scroll-to-offset command issued on tab taps. Scroll events coming back
/// from a commanded scroll are suppressed by a re-entrancy guard until the
/// pager reaches the commanded page, so the two directions converge without
/// oscillation.

/// Number of preview formats, and therefore pages and tabs.
pub const PAGE_COUNT: usize = 3;

/// Fixed width of one preview page in logical pixels. The view lays each
/// page out at exactly this width so that scroll offsets map to page
/// indices.
pub const PAGE_WIDTH: f32 = 420.0;

/// Tolerance when deciding that a commanded scroll has arrived.
const SNAP_EPSILON: f32 = 2.0;

#[derive(Debug, Default)]
pub struct PagerSync {
    page: usize,
    /// Target page of an in-flight programmatic scroll, if any. While set,
    /// incoming scroll events do not change the active page.
    snap_target: Option<usize>,
}

impl PagerSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// The active page (and tab) index.
    pub fn active(&self) -> usize {
        self.page
    }

    /// Handle a tap on tab `index`.
    ///
    /// Returns the absolute x offset the pager should be scrolled to, or
    /// `None` when no scroll is needed (out-of-range index, or the tab is
    /// already active with no scroll in flight). The page index updates
    /// immediately; the pager follows.
    pub fn tab_pressed(&mut self, index: usize) -> Option<f32> {
        if index >= PAGE_COUNT {
            return None;
        }
        if index == self.page && self.snap_target.is_none() {
            return None;
        }
        self.page = index;
        self.snap_target = Some(index);
        Some(index as f32 * PAGE_WIDTH)
    }

    /// Handle a scroll event reporting the pager's absolute x offset.
    ///
    /// Returns `true` when the active page changed. During a commanded
    /// scroll this always returns `false`; the guard clears once the offset
    /// lands on the commanded page.
    pub fn scrolled(&mut self, offset_x: f32) -> bool {
        let settled = Self::nearest_page(offset_x);

        if let Some(target) = self.snap_target {
            let target_x = target as f32 * PAGE_WIDTH;
            if (offset_x - target_x).abs() <= SNAP_EPSILON {
                self.snap_target = None;
            }
            return false;
        }

        if settled != self.page {
            self.page = settled;
            return true;
        }
        false
    }

    fn nearest_page(offset_x: f32) -> usize {
        let page = (offset_x / PAGE_WIDTH).round();
        (page.max(0.0) as usize).min(PAGE_COUNT - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_page() {
        let pager = PagerSync::new();
        assert_eq!(pager.active(), 0);
    }

    #[test]
    fn tab_press_moves_page_and_commands_scroll() {
        let mut pager = PagerSync::new();

        let offset = pager.tab_pressed(2);
        assert_eq!(pager.active(), 2);
        assert_eq!(offset, Some(2.0 * PAGE_WIDTH));
    }

    #[test]
    fn tab_press_out_of_range_is_noop() {
        let mut pager = PagerSync::new();

        assert_eq!(pager.tab_pressed(PAGE_COUNT), None);
        assert_eq!(pager.active(), 0);
    }

    #[test]
    fn pressing_the_active_tab_commands_nothing() {
        let mut pager = PagerSync::new();
        assert_eq!(pager.tab_pressed(0), None);
    }

    #[test]
    fn commanded_scroll_does_not_retrigger_state_change() {
        let mut pager = PagerSync::new();
        pager.tab_pressed(1);

        // Intermediate positions while the pager animates toward page 1,
        // then the arrival event. None of them may change the active page.
        assert!(!pager.scrolled(0.3 * PAGE_WIDTH));
        assert!(!pager.scrolled(0.8 * PAGE_WIDTH));
        assert!(!pager.scrolled(1.0 * PAGE_WIDTH));
        assert_eq!(pager.active(), 1);

        // The guard has cleared; a redundant settle on the same page is
        // idempotent.
        assert!(!pager.scrolled(1.0 * PAGE_WIDTH));
        assert_eq!(pager.active(), 1);
    }

    #[test]
    fn user_scroll_settles_on_nearest_page() {
        let mut pager = PagerSync::new();

        assert!(pager.scrolled(0.7 * PAGE_WIDTH));
        assert_eq!(pager.active(), 1);

        assert!(pager.scrolled(1.6 * PAGE_WIDTH));
        assert_eq!(pager.active(), 2);

        // Offsets past the last page clamp to it.
        assert!(!pager.scrolled(5.0 * PAGE_WIDTH));
        assert_eq!(pager.active(), 2);
    }

    #[test]
    fn scroll_within_current_page_changes_nothing() {
        let mut pager = PagerSync::new();

        assert!(!pager.scrolled(0.2 * PAGE_WIDTH));
        assert_eq!(pager.active(), 0);
    }

    #[test]
    fn directions_converge_after_mixed_input() {
        let mut pager = PagerSync::new();

        // User swipes to page 2, then taps tab 0, and the commanded scroll
        // travels back through pages 1 and 0.
        assert!(pager.scrolled(2.0 * PAGE_WIDTH));
        let offset = pager.tab_pressed(0);
        assert_eq!(offset, Some(0.0));

        assert!(!pager.scrolled(1.4 * PAGE_WIDTH));
        assert!(!pager.scrolled(0.5 * PAGE_WIDTH));
        assert!(!pager.scrolled(0.0));
        assert_eq!(pager.active(), 0);

        // Subsequent user scrolls behave normally again.
        assert!(pager.scrolled(1.0 * PAGE_WIDTH));
        assert_eq!(pager.active(), 1);
    }
}
