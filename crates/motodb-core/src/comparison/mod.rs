//! Side-by-side comparison of up to three products.
//!
//! - `selection`: the bounded comparison set and its toggle rule
//! - `diff`: per-field divergence across the selected products

mod diff;
mod selection;

pub use diff::{COMPARED_FIELDS, Comparison, SpecRow, diff, resolve};
pub use selection::{MAX_SELECTION, Selection, ToggleOutcome};
