//! Union operation for scene samples
//!
//! Author: Moroya Sakamoto

use crate::types::Sample;

/// Union of two samples (nearest surface)
///
/// Strictly smaller distance wins; on a tie (or NaN) `b` is returned.
#[inline(always)]
pub fn sample_union(a: Sample, b: Sample) -> Sample {
    if a.distance < b.distance {
        a
    } else {
        b
    }
}
