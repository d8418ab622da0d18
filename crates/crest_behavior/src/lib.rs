//! Crest Coordination Behaviors
//!
//! Coordinated scrolling between a collapsible header and the scrollable
//! content beneath it. Two state machines own the two offsets:
//!
//! - [`HeaderBehavior`] collapses and reveals the bar, decides the
//!   post-gesture snap, and fans committed offsets out to listeners
//! - [`ContentBehavior`] keeps the content glued below the bar and
//!   resizes it so its bottom edge is reachable at full collapse
//! - [`ScrollCoordinator`] routes one nested-scroll gesture across both,
//!   in the order the pairing requires
//!
//! All callbacks run on the host's single dispatch thread; ordering
//! between the two behaviors is enforced purely by call order.

pub mod content;
pub mod coordinator;
pub mod header;

pub use content::ContentBehavior;
pub use coordinator::ScrollCoordinator;
pub use header::{HeaderBehavior, OffsetCallback, OffsetListenerId, SnapConfig};
