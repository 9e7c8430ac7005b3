//! Command implementations

pub mod generate;
pub mod suggest;

pub use generate::{generate_openings, generate_tiers};
pub use suggest::{AdvisorSources, SuggestResult, build_advisor, parse_history, suggest};
