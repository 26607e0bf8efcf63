//! Scene operations on evaluated samples
//!
//! Operations work on `Sample`s (distance plus material) so that the
//! material of the winning surface travels with its distance.
//!
//! Author: Moroya Sakamoto

mod colorize;
mod union;

pub use colorize::sample_colorize;
pub use union::sample_union;
