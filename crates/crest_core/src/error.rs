//! Coordination errors
//!
//! Scroll-path failures (a recycled view, a gone peer) are silent
//! no-ops, never errors. The only recoverable failure is a layout pass
//! reaching a behavior whose dependency is not in the tree.

use thiserror::Error;

use crate::view::ViewId;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CoordError {
    /// A view this behavior depends on is not in the tree. The host is
    /// expected to lay out dependencies before their dependents.
    #[error("dependency view {0:?} is not in the tree")]
    MissingDependency(ViewId),
}
