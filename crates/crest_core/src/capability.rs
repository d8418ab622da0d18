//! Capability queries between behaviors
//!
//! A behavior never inspects its peer's concrete type; it asks through a
//! capability trait resolved by whoever routes the gesture.

use crate::view::ViewTree;

/// Query whether an element can still absorb upward scroll delta.
///
/// Implemented by the content-side behavior; the header-side behavior
/// collapses only while its peer reports `true`, which keeps the pair
/// moving in lockstep.
pub trait ScrollCapability {
    fn can_scroll_up(&self, tree: &ViewTree) -> bool;
}
