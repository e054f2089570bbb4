//! Service implementations
//!
//! Real implementations of the service traits. These are the only parts of
//! the crate that perform I/O.

pub mod reference_store;

#[cfg(test)]
mod tests;

pub use reference_store::RealReferenceStore;
