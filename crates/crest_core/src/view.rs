//! View arena
//!
//! The host layout system owns view measurement and positioning; this
//! arena is the surface of it that the coordinators consume. Views are
//! addressed by slotmap ids, so an id held by a behavior is a non-owning
//! handle: the host may remove the view at any time, after which every
//! lookup returns `None` and every mutation is a silent no-op.

use slotmap::{new_key_type, SlotMap};

use crate::geometry::{Rect, Size};

new_key_type! {
    /// Stable handle to a view in the arena.
    pub struct ViewId;
}

/// A participant view as the coordinators see it: a committed frame, the
/// last measured size, and how far the view may retract (zero for
/// non-collapsible views).
#[derive(Clone, Copy, Debug, Default)]
pub struct View {
    frame: Rect,
    measured: Size,
    collapse_range: i32,
}

impl View {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a view already positioned at `frame`, measured at the
    /// frame's dimensions.
    pub fn with_frame(frame: Rect) -> Self {
        Self {
            frame,
            measured: Size::new(frame.width(), frame.height()),
            collapse_range: 0,
        }
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn measured(&self) -> Size {
        self.measured
    }

    pub fn collapse_range(&self) -> i32 {
        self.collapse_range
    }
}

/// Arena of host-managed views.
pub struct ViewTree {
    views: SlotMap<ViewId, View>,
}

impl ViewTree {
    pub fn new() -> Self {
        Self {
            views: SlotMap::with_key(),
        }
    }

    pub fn insert(&mut self, view: View) -> ViewId {
        self.views.insert(view)
    }

    pub fn remove(&mut self, id: ViewId) -> Option<View> {
        self.views.remove(id)
    }

    pub fn contains(&self, id: ViewId) -> bool {
        self.views.contains_key(id)
    }

    pub fn get(&self, id: ViewId) -> Option<&View> {
        self.views.get(id)
    }

    pub fn get_mut(&mut self, id: ViewId) -> Option<&mut View> {
        self.views.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Record a measured size for the view.
    pub fn measure(&mut self, id: ViewId, width: i32, height: i32) {
        if let Some(view) = self.views.get_mut(id) {
            view.measured = Size::new(width, height);
        }
    }

    /// Commit a frame for the view.
    pub fn layout(&mut self, id: ViewId, left: i32, top: i32, right: i32, bottom: i32) {
        if let Some(view) = self.views.get_mut(id) {
            view.frame = Rect::new(left, top, right, bottom);
            tracing::trace!("layout {:?} -> {:?}", id, view.frame);
        }
    }

    /// Shift the view's frame vertically without re-laying it out.
    pub fn offset_vertical(&mut self, id: ViewId, dy: i32) {
        if let Some(view) = self.views.get_mut(id) {
            view.frame.offset_vertical(dy);
        }
    }

    pub fn set_collapse_range(&mut self, id: ViewId, range: i32) {
        if let Some(view) = self.views.get_mut(id) {
            view.collapse_range = range;
        }
    }

    pub fn collapse_range(&self, id: ViewId) -> Option<i32> {
        self.views.get(id).map(|v| v.collapse_range)
    }

    pub fn top(&self, id: ViewId) -> Option<i32> {
        self.views.get(id).map(|v| v.frame.top)
    }

    pub fn bottom(&self, id: ViewId) -> Option<i32> {
        self.views.get(id).map(|v| v.frame.bottom)
    }

    pub fn height(&self, id: ViewId) -> Option<i32> {
        self.views.get(id).map(|v| v.frame.height())
    }

    pub fn measured_width(&self, id: ViewId) -> Option<i32> {
        self.views.get(id).map(|v| v.measured.width)
    }

    pub fn measured_height(&self, id: ViewId) -> Option<i32> {
        self.views.get(id).map(|v| v.measured.height)
    }
}

impl Default for ViewTree {
    fn default() -> Self {
        Self::new()
    }
}
