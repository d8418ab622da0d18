//! Crest Core Primitives
//!
//! This crate provides the foundational types shared by the Crest
//! coordinators:
//!
//! - **View Arena**: slotmap-backed handles to host-managed views, with
//!   liveness-checked access (a held id never keeps a view alive)
//! - **Scroll Bounds**: the clamp window every vertical offset mutation
//!   is fed through
//! - **Capability Queries**: traits letting one behavior ask its peer
//!   about remaining scroll room without runtime type inspection

pub mod bounds;
pub mod capability;
pub mod error;
pub mod geometry;
pub mod view;

pub use bounds::ScrollBounds;
pub use capability::ScrollCapability;
pub use error::CoordError;
pub use geometry::{Rect, Size};
pub use view::{View, ViewId, ViewTree};
