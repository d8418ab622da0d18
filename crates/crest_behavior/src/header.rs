//! Collapsible header behavior
//!
//! Owns the header's vertical offset state. During a gesture it gets
//! first refusal on upward motion (the bar retracts before the scrolling
//! target sees the delta); when the gesture ends it snaps the bar fully
//! open or fully closed based on the direction of the final motion and
//! the content's position.
//!
//! Every top mutation (scroll, snap tick, `set_expanded`, layout
//! re-clamp) goes through one clamped commit path, so listeners observe
//! an identical stream of in-range offsets regardless of the source.

use crest_animation::{Easing, Tween};
use crest_core::{CoordError, ScrollBounds, ViewId, ViewTree};
use smallvec::SmallVec;

/// Callback receiving the signed header offset (`current_top -
/// resting_top`; 0 fully expanded, `-collapse_range` fully collapsed).
pub type OffsetCallback = Box<dyn FnMut(i32) + Send>;

/// Handle returned by [`HeaderBehavior::register_offset_listener`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OffsetListenerId(u64);

/// Configuration for the post-gesture snap transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapConfig {
    /// Snap duration in milliseconds
    pub duration_ms: u32,
    /// Easing applied to the interpolated top position
    pub easing: Easing,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            duration_ms: 200,
            easing: Easing::Linear,
        }
    }
}

/// Behavior attached to the collapsible header element.
pub struct HeaderBehavior {
    view: ViewId,
    resting_top: i32,
    current_top: Option<i32>,
    collapse_range: i32,
    /// Top displacement applied by the most recent scroll step; negative
    /// while the bar is retracting, positive while it is being revealed.
    last_consumed: i32,
    snap: Option<Tween>,
    config: SnapConfig,
    listeners: SmallVec<[(OffsetListenerId, OffsetCallback); 2]>,
    next_listener_id: u64,
}

impl HeaderBehavior {
    pub fn new(view: ViewId) -> Self {
        Self::with_config(view, SnapConfig::default())
    }

    pub fn with_config(view: ViewId, config: SnapConfig) -> Self {
        Self {
            view,
            resting_top: 0,
            current_top: None,
            collapse_range: 0,
            last_consumed: 0,
            snap: None,
            config,
            listeners: SmallVec::new(),
            next_listener_id: 0,
        }
    }

    pub fn view(&self) -> ViewId {
        self.view
    }

    pub fn resting_top(&self) -> i32 {
        self.resting_top
    }

    pub fn current_top(&self) -> Option<i32> {
        self.current_top
    }

    pub fn collapse_range(&self) -> i32 {
        self.collapse_range
    }

    /// Signed offset from the resting position; 0 before the first
    /// layout pass.
    pub fn offset(&self) -> i32 {
        self.current_top.map_or(0, |top| top - self.resting_top)
    }

    pub fn is_snapping(&self) -> bool {
        self.snap.is_some()
    }

    fn bounds(&self) -> ScrollBounds {
        ScrollBounds::new(self.resting_top, self.collapse_range)
    }

    /// Layout pass: the host has just positioned the header at its
    /// resting top. Re-reads the collapse range (it may change across
    /// layouts) and re-validates any previously committed top against
    /// the new window.
    pub fn on_layout(&mut self, tree: &mut ViewTree) -> Result<(), CoordError> {
        let view = tree
            .get(self.view)
            .ok_or(CoordError::MissingDependency(self.view))?;
        self.resting_top = view.frame().top;
        self.collapse_range = view.collapse_range();

        match self.current_top {
            Some(current) => {
                let clamped = self.bounds().clamp(current);
                self.commit_top(tree, clamped);
            }
            // First layout: the bar is where the host put it, nothing
            // has changed from the listeners' point of view.
            None => self.current_top = Some(self.resting_top),
        }
        Ok(())
    }

    /// A drag gesture is starting: forget the previous direction and
    /// halt any in-flight snap before it can commit another tick.
    pub fn on_gesture_start(&mut self) {
        self.last_consumed = 0;
        self.snap = None;
    }

    /// First-refusal hook. Only upward motion (`dy > 0`) is considered,
    /// and only while the paired content still reports room to scroll
    /// up; otherwise nothing is consumed. Returns the consumed scroll
    /// delta (same sign as `dy`).
    pub fn on_pre_scroll(&mut self, tree: &mut ViewTree, dy: i32, peer_can_scroll_up: bool) -> i32 {
        if dy <= 0 || !peer_can_scroll_up {
            return 0;
        }

        let applied = self.scroll(tree, dy);
        if applied != 0 {
            self.last_consumed = applied;
        }
        -applied
    }

    /// Residual hook, fed the target's consumed and unconsumed deltas
    /// after it scrolled. No capability gate here: the content already
    /// took its share, the bar just follows the leftover motion.
    pub fn on_scroll(&mut self, tree: &mut ViewTree, dy_consumed: i32, dy_unconsumed: i32) {
        let applied = self.scroll(tree, dy_consumed + dy_unconsumed);
        if applied != 0 {
            self.last_consumed = applied;
        }
    }

    /// The gesture ended: pick a snap target from the final motion
    /// direction. `content_top` is the paired content view's current
    /// top, if it still exists.
    pub fn on_gesture_end(&mut self, tree: &mut ViewTree, content_top: Option<i32>) {
        if self.last_consumed > 0 {
            // Ended while the bar was being revealed.
            self.snap_to(tree, self.resting_top);
        } else if self.last_consumed < 0 {
            let Some(height) = tree.height(self.view) else {
                return;
            };
            // Collapsing fully while the content has not scrolled past
            // the bar would reveal blank space below it.
            let threshold = self.resting_top + height - self.collapse_range;
            if content_top.is_some_and(|top| top > threshold) {
                self.snap_to(tree, self.resting_top);
            } else {
                self.snap_to(tree, self.resting_top - self.collapse_range);
            }
        }
    }

    /// Raw clamped scroll: move the top by `-dy` within bounds. Returns
    /// `top_after - top_before`, so summing returns over a sequence
    /// gives the net displacement.
    pub fn scroll(&mut self, tree: &mut ViewTree, dy: i32) -> i32 {
        let Some(top) = tree.top(self.view) else {
            return 0;
        };
        let target = self.bounds().clamp(top - dy);
        self.commit_top(tree, target)
    }

    /// Advance the snap animation. Each tick's interpolated top is
    /// committed through the same clamped path as scroll, so listeners
    /// fire identically. Returns whether the snap is still running.
    pub fn tick(&mut self, tree: &mut ViewTree, dt_ms: f32) -> bool {
        let Some(tween) = self.snap.as_mut() else {
            return false;
        };
        tween.tick(dt_ms);
        let value = tween.value().round() as i32;
        let finished = !tween.is_playing();

        let target = self.bounds().clamp(value);
        self.commit_top(tree, target);

        if finished {
            self.snap = None;
        }
        !finished
    }

    /// Force the bar fully open or fully closed, immediately. Cancels
    /// any in-flight snap first.
    pub fn set_expanded(&mut self, tree: &mut ViewTree, expanded: bool) {
        self.snap = None;
        let target = if expanded {
            self.resting_top
        } else {
            self.resting_top - self.collapse_range
        };
        self.commit_top(tree, self.bounds().clamp(target));
    }

    /// Register an offset listener. Listeners are notified synchronously
    /// on every committed change, in registration order, with the signed
    /// offset from resting.
    pub fn register_offset_listener<F>(&mut self, callback: F) -> OffsetListenerId
    where
        F: FnMut(i32) + Send + 'static,
    {
        let id = OffsetListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(callback)));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unregister_offset_listener(&mut self, id: OffsetListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener, _)| *listener != id);
        self.listeners.len() != before
    }

    fn snap_to(&mut self, tree: &ViewTree, target: i32) {
        self.snap = None;
        let Some(top) = tree.top(self.view) else {
            return;
        };
        tracing::debug!("header snap {} -> {}", top, target);
        self.snap = Some(Tween::new(
            top as f32,
            target as f32,
            self.config.duration_ms,
            self.config.easing,
        ));
    }

    /// The single commit path for the header's top. Records the new
    /// position, moves the view, and notifies listeners when the view
    /// actually moved. Returns the applied displacement.
    fn commit_top(&mut self, tree: &mut ViewTree, target: i32) -> i32 {
        let Some(top) = tree.top(self.view) else {
            return 0;
        };
        let applied = target - top;
        self.current_top = Some(target);

        if applied != 0 {
            tree.offset_vertical(self.view, applied);
            let offset = target - self.resting_top;
            tracing::trace!("header top {} -> {} (offset {})", top, target, offset);
            self.notify_offset(offset);
        }
        applied
    }

    fn notify_offset(&mut self, offset: i32) {
        for (_, callback) in self.listeners.iter_mut() {
            callback(offset);
        }
    }
}
