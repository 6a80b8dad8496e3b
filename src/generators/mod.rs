//! Prompt-based content generators.
//!
//! Excuses and apologies are produced the same way: build a string prompt
//! from the user's selections, forward it to the model, and hand back the
//! text. Neither generator raises on upstream failure; both return a
//! payload describing the error so the front ends can render and record it
//! like any other result.

pub mod apology;
pub mod excuse;

pub use apology::{build_apology_prompt, ApologyGenerator};
pub use excuse::{build_excuse_prompt, ExcuseGenerator};
