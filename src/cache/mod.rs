//! Precomputed snapshots
//!
//! Opening recommendations and quality-tier word sets are expensive to compute
//! and identical across games, so they are generated offline and loaded as JSON.
//! A missing or malformed snapshot is never fatal: loaders log and fall back.

mod error;
mod opening;
mod quality;

pub use error::CacheError;
pub use opening::{OpeningCache, load_opening_cache};
pub use quality::{QualityTiers, load_quality_tiers};
