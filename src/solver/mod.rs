//! Guess recommendation
//!
//! Entropy scoring, the ranked `Recommendation` result type, and the `Advisor`
//! engine that ties the constraint filter, candidate pool and scorer together.

mod engine;
pub mod entropy;
mod recommendation;

pub use crate::pool::PlayMode;
pub use engine::Advisor;
pub use recommendation::{Recommendation, sort_ranked};
