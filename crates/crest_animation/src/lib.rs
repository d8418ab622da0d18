//! Crest Animation Driver
//!
//! Fixed-duration value interpolation for snap transitions.
//!
//! # Features
//!
//! - **Easing**: linear and quadratic curves applied to normalized
//!   progress
//! - **Tweens**: host-ticked A→B interpolation over a fixed duration;
//!   the tween produces values, it never mutates anything itself
//! - **Cancellation**: dropping or stopping a tween halts it with no
//!   completion side effects

pub mod easing;
pub mod tween;

pub use easing::Easing;
pub use tween::Tween;
