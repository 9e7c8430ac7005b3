//! Constraint filtering
//!
//! Decides whether a candidate word is still consistent with every guess and
//! feedback pattern played so far.

mod constraints;

pub use constraints::{Constraints, is_consistent};
