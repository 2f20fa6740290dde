//! Category generators grouped by operation.
//!
//! Limited families expose an enumeration function returning the complete
//! fact set in a stable order:
//!
//! ```ignore
//! pub fn make_ten() -> Vec<FactQuestion>
//! ```
//!
//! Unlimited families expose a sampler returning one fresh fact per call:
//!
//! ```ignore
//! pub fn sample_bridge_ten<R: Rng>(rng: &mut R) -> FactQuestion
//! ```
//!
//! The generator dispatches to these via `generator.rs`.

pub mod addition;
pub mod multi_addend;
pub mod subtraction;
