//! Command implementations

pub mod check;
pub mod drill;
pub mod spell;

pub use check::check_response;
pub use drill::{DrillConfig, run_drill};
pub use spell::{Spelling, spell_word};
