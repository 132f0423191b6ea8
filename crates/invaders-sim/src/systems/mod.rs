//! Systems that operate on the entity store each tick.
//!
//! Systems are free functions over `EntityStore` plus whatever round state
//! they need. They do not own state.

pub mod collision;
pub mod motion;
pub mod snapshot;
