//! Candidate pool and tiering policy
//!
//! The classified vocabulary (answer-eligible vs guess-only), the auxiliary
//! quality-tier sets, used-word reclassification, and the policy that picks
//! which words get scored on a given turn.

mod candidate_pool;
mod tier;
mod used_words;

pub use candidate_pool::{CandidatePool, WordEntry};
pub use tier::{COMMON_LETTERS, PlayMode, Tier, is_high_quality};
pub use used_words::{UsedWord, UsedWordIndex};
