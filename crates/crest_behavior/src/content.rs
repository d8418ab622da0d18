//! Scrolling content behavior
//!
//! Owns the content's vertical offset relative to its resting position
//! (seated below the fully expanded header). At layout time it resizes
//! the content so the bottom edge is reachable once the bar has
//! retracted; during a gesture it consumes motion only while there is
//! room left in that direction.
//!
//! The content view handle is non-owning: the view may be recycled by
//! the host at any point, and every access checks liveness first. A dead
//! view turns every operation into a silent no-op.

use crest_core::{CoordError, ScrollBounds, ScrollCapability, ViewId, ViewTree};

/// Behavior attached to the scrollable content element. Depends on
/// exactly one header view.
pub struct ContentBehavior {
    view: ViewId,
    header: ViewId,
    resting_top: i32,
    current_offset: Option<i32>,
    collapse_range: i32,
}

impl ContentBehavior {
    pub fn new(view: ViewId, header: ViewId) -> Self {
        Self {
            view,
            header,
            resting_top: 0,
            current_offset: None,
            collapse_range: 0,
        }
    }

    pub fn view(&self) -> ViewId {
        self.view
    }

    pub fn header(&self) -> ViewId {
        self.header
    }

    pub fn resting_top(&self) -> i32 {
        self.resting_top
    }

    /// Signed offset from resting; 0 resting, `-collapse_range` when
    /// fully shifted up beneath the collapsed bar.
    pub fn offset(&self) -> i32 {
        self.current_offset.unwrap_or(0)
    }

    fn bounds(&self) -> ScrollBounds {
        ScrollBounds::new(self.resting_top, self.collapse_range)
    }

    /// Layout pass: the host has positioned the content at its natural
    /// top. Resolves the header dependency, derives the resting top,
    /// resizes the content so its bottom edge is reachable at full
    /// collapse, and re-applies the committed offset clamped against the
    /// new range.
    pub fn on_layout(&mut self, tree: &mut ViewTree) -> Result<(), CoordError> {
        let header_height = tree
            .height(self.header)
            .ok_or(CoordError::MissingDependency(self.header))?;
        let range = tree
            .collapse_range(self.header)
            .ok_or(CoordError::MissingDependency(self.header))?;

        let Some(view) = tree.get(self.view) else {
            // The content view was recycled between layout passes.
            return Ok(());
        };
        let frame = view.frame();
        let measured = view.measured();

        self.collapse_range = range;
        self.resting_top = frame.top + header_height;

        // Show the bottom edge when the content sits at its topmost
        // position: trade the header's height for the collapse range.
        let actual_height = measured.height - header_height + range;
        tree.measure(self.view, measured.width, actual_height);
        tree.layout(
            self.view,
            frame.left,
            frame.top,
            frame.right,
            frame.top + actual_height,
        );

        let offset = self.offset().clamp(-range.max(0), 0);
        self.apply_offset(tree, offset);
        Ok(())
    }

    /// Consume motion while there is room left in its direction: upward
    /// (`dy > 0`) until fully shifted beneath the bar, downward
    /// (`dy < 0`) until back at resting. Returns the consumed scroll
    /// delta (same sign as `dy`).
    pub fn on_pre_scroll(&mut self, tree: &mut ViewTree, dy: i32) -> i32 {
        let Some(top) = tree.top(self.view) else {
            return 0;
        };
        let bounds = self.bounds();
        let has_room = (dy > 0 && top > bounds.min()) || (dy < 0 && top < bounds.max());
        if !has_room {
            return 0;
        }
        -self.scroll(tree, dy)
    }

    /// Residual hook: apply downward motion the scrolling target could
    /// not consume. Upward residue is ignored.
    pub fn on_scroll(&mut self, tree: &mut ViewTree, dy_unconsumed: i32) {
        if dy_unconsumed < 0 {
            self.scroll(tree, dy_unconsumed);
        }
    }

    /// Raw clamped scroll: move the top by `-dy` within bounds. Returns
    /// `top_after - top_before`.
    pub fn scroll(&mut self, tree: &mut ViewTree, dy: i32) -> i32 {
        let Some(top) = tree.top(self.view) else {
            return 0;
        };
        let target = self.bounds().clamp(top - dy);
        self.apply_offset(tree, target - self.resting_top)
    }

    /// Seat the content against the bar: pull it back to resting when it
    /// sits above the bar's bottom edge, push it fully up when the bar
    /// has retracted. Idempotent.
    pub fn adjust_layout(&mut self, tree: &mut ViewTree) {
        let Some(top) = tree.top(self.view) else {
            return;
        };
        let Some(header_bottom) = tree.bottom(self.header) else {
            return;
        };

        if top < header_bottom {
            self.apply_offset(tree, 0);
        } else if top != header_bottom {
            self.apply_offset(tree, -self.collapse_range);
        }
    }

    /// The single commit path for the content's top, expressed as an
    /// offset from resting. Returns the applied displacement.
    fn apply_offset(&mut self, tree: &mut ViewTree, target_offset: i32) -> i32 {
        let Some(top) = tree.top(self.view) else {
            return 0;
        };
        let target_top = self.resting_top + target_offset;
        let applied = target_top - top;
        self.current_offset = Some(target_offset);

        if applied != 0 {
            tree.offset_vertical(self.view, applied);
            tracing::trace!("content top {} -> {} (offset {})", top, target_top, target_offset);
        }
        applied
    }
}

impl ScrollCapability for ContentBehavior {
    /// The content can still scroll up while it exists and has not yet
    /// reached its topmost (fully collapsed) position.
    fn can_scroll_up(&self, tree: &ViewTree) -> bool {
        match tree.top(self.view) {
            Some(top) => top > self.resting_top - self.collapse_range,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crest_core::{Rect, View};

    /// Header 100 tall with a 40 px range at the top of a 640 px screen;
    /// content laid out full-bleed behind it.
    fn setup() -> (ViewTree, ContentBehavior) {
        let mut tree = ViewTree::new();
        let header = tree.insert(View::with_frame(Rect::new(0, 0, 360, 100)));
        tree.set_collapse_range(header, 40);
        let content = tree.insert(View::with_frame(Rect::new(0, 0, 360, 640)));

        let mut behavior = ContentBehavior::new(content, header);
        behavior.on_layout(&mut tree).unwrap();
        (tree, behavior)
    }

    #[test]
    fn test_layout_resizes_and_seats_below_header() {
        let (tree, behavior) = setup();

        assert_eq!(behavior.resting_top(), 100);
        // 640 - 100 header + 40 range.
        assert_eq!(tree.measured_height(behavior.view()), Some(580));
        assert_eq!(tree.top(behavior.view()), Some(100));
        assert_eq!(tree.bottom(behavior.view()), Some(680));
        // Fully collapsed the bottom edge lands exactly on the screen
        // bottom: 60 + 580 = 640.
    }

    #[test]
    fn test_layout_fails_without_header() {
        let mut tree = ViewTree::new();
        let header = tree.insert(View::new());
        let content = tree.insert(View::new());
        tree.remove(header);

        let mut behavior = ContentBehavior::new(content, header);
        assert_eq!(
            behavior.on_layout(&mut tree),
            Err(CoordError::MissingDependency(header))
        );
    }

    #[test]
    fn test_layout_with_dead_content_is_noop() {
        let (mut tree, mut behavior) = setup();
        tree.remove(behavior.view());
        assert_eq!(behavior.on_layout(&mut tree), Ok(()));
    }

    #[test]
    fn test_scroll_clamps_and_conserves() {
        let (mut tree, mut behavior) = setup();

        assert_eq!(behavior.scroll(&mut tree, 30), -30);
        assert_eq!(tree.top(behavior.view()), Some(70));

        assert_eq!(behavior.scroll(&mut tree, 50), -10);
        assert_eq!(tree.top(behavior.view()), Some(60));

        assert_eq!(behavior.scroll(&mut tree, -200), 40);
        assert_eq!(tree.top(behavior.view()), Some(100));
    }

    #[test]
    fn test_pre_scroll_gated_by_room_in_both_directions() {
        let (mut tree, mut behavior) = setup();

        // At resting there is no room downward.
        assert_eq!(behavior.on_pre_scroll(&mut tree, -20), 0);

        assert_eq!(behavior.on_pre_scroll(&mut tree, 25), 25);
        assert_eq!(behavior.on_pre_scroll(&mut tree, 25), 15);
        // Fully collapsed: no room upward, room downward again.
        assert_eq!(behavior.on_pre_scroll(&mut tree, 25), 0);
        assert_eq!(behavior.on_pre_scroll(&mut tree, -10), -10);
        assert_eq!(tree.top(behavior.view()), Some(70));
    }

    #[test]
    fn test_residual_scroll_applies_downward_only() {
        let (mut tree, mut behavior) = setup();
        behavior.scroll(&mut tree, 40);

        behavior.on_scroll(&mut tree, 15);
        assert_eq!(tree.top(behavior.view()), Some(60));

        behavior.on_scroll(&mut tree, -15);
        assert_eq!(tree.top(behavior.view()), Some(75));
    }

    #[test]
    fn test_can_scroll_up_tracks_position_and_liveness() {
        let (mut tree, mut behavior) = setup();
        assert!(behavior.can_scroll_up(&tree));

        behavior.scroll(&mut tree, 40);
        assert!(!behavior.can_scroll_up(&tree));

        behavior.scroll(&mut tree, -1);
        assert!(behavior.can_scroll_up(&tree));

        tree.remove(behavior.view());
        assert!(!behavior.can_scroll_up(&tree));
    }

    #[test]
    fn test_adjust_layout_pulls_back_to_resting() {
        let (mut tree, mut behavior) = setup();
        behavior.scroll(&mut tree, 25);

        // The bar is expanded (bottom at 100) but the content sits at
        // 75, above the bar's bottom edge.
        behavior.adjust_layout(&mut tree);
        assert_eq!(tree.top(behavior.view()), Some(100));
    }

    #[test]
    fn test_adjust_layout_pushes_to_collapsed() {
        let (mut tree, mut behavior) = setup();
        // Bar retracted by the host pair; content still at resting.
        tree.offset_vertical(behavior.header(), -40);

        behavior.adjust_layout(&mut tree);
        assert_eq!(tree.top(behavior.view()), Some(60));
    }

    #[test]
    fn test_adjust_layout_is_idempotent() {
        let (mut tree, mut behavior) = setup();
        tree.offset_vertical(behavior.header(), -40);

        behavior.adjust_layout(&mut tree);
        let once = tree.top(behavior.view());
        behavior.adjust_layout(&mut tree);
        assert_eq!(tree.top(behavior.view()), once);
    }

    #[test]
    fn test_operations_on_dead_view_are_noops() {
        let (mut tree, mut behavior) = setup();
        tree.remove(behavior.view());

        assert_eq!(behavior.scroll(&mut tree, 30), 0);
        assert_eq!(behavior.on_pre_scroll(&mut tree, 30), 0);
        behavior.on_scroll(&mut tree, -30);
        behavior.adjust_layout(&mut tree);
    }

    #[test]
    fn test_relayout_reclamps_offset_against_new_range() {
        let (mut tree, mut behavior) = setup();
        behavior.scroll(&mut tree, 40);
        assert_eq!(behavior.offset(), -40);

        // Next pass the header advertises a smaller range; the host has
        // re-laid the content at its natural top.
        tree.set_collapse_range(behavior.header(), 20);
        tree.layout(behavior.view(), 0, 0, 360, 640);
        tree.measure(behavior.view(), 360, 640);
        behavior.on_layout(&mut tree).unwrap();

        assert_eq!(behavior.offset(), -20);
        assert_eq!(tree.top(behavior.view()), Some(80));
    }
}
