//! Shared interpolation and board resolution used by every panel

pub mod interpolator;
pub mod resolver;

pub use interpolator::{interpolate, round_to};
pub use resolver::{BoardResolver, Resolution, ResolutionStrategy};
