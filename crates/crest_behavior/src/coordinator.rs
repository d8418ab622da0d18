//! Gesture routing between the paired behaviors
//!
//! The host's scroll container forwards one nested-scroll gesture at a
//! time; the coordinator fans each step out to the header and content
//! behaviors in the order the pairing requires and merges what they
//! consumed.
//!
//! Delta bookkeeping for one step:
//!
//! - Upward motion (`dy > 0`): both behaviors race over the same raw
//!   delta and retract in lockstep; their travel is reported as consumed
//!   so the scrolling target holds still until the pair has collapsed.
//! - Downward motion (`dy < 0`): the header refuses the pre-scroll
//!   phase, and the content's travel *shadows* the gesture rather than
//!   consuming it: the full delta flows on so the residual pass can keep
//!   the bar glued to the content (the bar only expands through
//!   `on_scroll`). The shadowed amount is subtracted from the unconsumed
//!   delta before it reaches the content's residual hook, so the two
//!   paths never double-apply.

use crest_core::{CoordError, ScrollCapability, ViewId, ViewTree};

use crate::content::ContentBehavior;
use crate::header::{HeaderBehavior, SnapConfig};

/// Owns one header/content behavior pair and routes gestures between
/// them. All calls happen on the host's dispatch thread.
pub struct ScrollCoordinator {
    header: HeaderBehavior,
    content: ContentBehavior,
    /// Downward travel the content absorbed during the pre-scroll phase
    /// of the current step.
    absorbed_down: i32,
}

impl ScrollCoordinator {
    pub fn new(header_view: ViewId, content_view: ViewId) -> Self {
        Self::with_config(header_view, content_view, SnapConfig::default())
    }

    pub fn with_config(header_view: ViewId, content_view: ViewId, config: SnapConfig) -> Self {
        Self {
            header: HeaderBehavior::with_config(header_view, config),
            content: ContentBehavior::new(content_view, header_view),
            absorbed_down: 0,
        }
    }

    pub fn header(&self) -> &HeaderBehavior {
        &self.header
    }

    pub fn header_mut(&mut self) -> &mut HeaderBehavior {
        &mut self.header
    }

    pub fn content(&self) -> &ContentBehavior {
        &self.content
    }

    /// Layout pass in dependency order: the header first, then the
    /// content that seats against it.
    pub fn on_layout(&mut self, tree: &mut ViewTree) -> Result<(), CoordError> {
        self.header.on_layout(tree)?;
        self.content.on_layout(tree)?;
        Ok(())
    }

    /// A drag gesture is starting.
    pub fn on_gesture_start(&mut self) {
        self.absorbed_down = 0;
        self.header.on_gesture_start();
    }

    /// Pre-scroll phase: the raw delta before the scrolling target sees
    /// it. Returns `(consumed_x, consumed_y)`; horizontal motion is
    /// never consumed.
    pub fn on_pre_scroll(&mut self, tree: &mut ViewTree, dx: i32, dy: i32) -> (i32, i32) {
        let _ = dx;

        let can_scroll_up = self.content.can_scroll_up(tree);
        let header_consumed = self.header.on_pre_scroll(tree, dy, can_scroll_up);
        let content_consumed = self.content.on_pre_scroll(tree, dy);

        self.absorbed_down = content_consumed.min(0);

        // The pair moved together over the same delta; upward travel is
        // the max of the two, downward travel is shadowed (see module
        // docs).
        let consumed_y = if dy > 0 {
            header_consumed.max(content_consumed)
        } else {
            0
        };
        tracing::trace!(
            "pre-scroll dy={} header={} content={} -> consumed {}",
            dy,
            header_consumed,
            content_consumed,
            consumed_y
        );
        (0, consumed_y)
    }

    /// Post-scroll phase: what the scrolling target consumed internally
    /// and what is left over.
    pub fn on_scroll(
        &mut self,
        tree: &mut ViewTree,
        dx_consumed: i32,
        dy_consumed: i32,
        dx_unconsumed: i32,
        dy_unconsumed: i32,
    ) {
        let _ = (dx_consumed, dx_unconsumed);

        self.header.on_scroll(tree, dy_consumed, dy_unconsumed);

        // The content may have absorbed part of this step's downward
        // motion already; only the rest counts as unconsumed for it.
        let residual = (dy_unconsumed - self.absorbed_down).min(0);
        self.content.on_scroll(tree, residual);
        self.absorbed_down = 0;
    }

    /// The gesture ended; decide and start the snap.
    pub fn on_gesture_end(&mut self, tree: &mut ViewTree) {
        let content_top = tree.top(self.content.view());
        self.header.on_gesture_end(tree, content_top);
    }

    /// Fling hooks: never consumed, the snap decision at gesture end
    /// covers settling.
    pub fn on_pre_fling(&mut self, _velocity_x: f32, _velocity_y: f32) -> bool {
        false
    }

    pub fn on_fling(&mut self, _velocity_x: f32, _velocity_y: f32, _target_consumed: bool) -> bool {
        false
    }

    /// Advance the snap animation by `dt_ms`. When a snap completes the
    /// content is seated against the bar's final position. Returns
    /// whether the snap is still running.
    pub fn tick(&mut self, tree: &mut ViewTree, dt_ms: f32) -> bool {
        let was_snapping = self.header.is_snapping();
        let still_snapping = self.header.tick(tree, dt_ms);
        if was_snapping && !still_snapping {
            self.content.adjust_layout(tree);
        }
        still_snapping
    }

    /// Force the pair fully open or fully closed, immediately.
    pub fn set_expanded(&mut self, tree: &mut ViewTree, expanded: bool) {
        self.header.set_expanded(tree, expanded);
        self.content.adjust_layout(tree);
    }
}
