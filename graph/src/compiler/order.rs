//! Discovery order to submission order.

use crate::graph::PassHandle;

/// Turn a root-to-leaf discovery order into a submission order.
///
/// The discovery order is reversed so dependencies come before the passes
/// that need them, then compacted so each pass keeps only its first
/// occurrence. `pass_count` bounds the handles in `discovery`.
pub fn normalize_order(mut discovery: Vec<PassHandle>, pass_count: usize) -> Vec<PassHandle> {
    discovery.reverse();

    let mut seen = vec![false; pass_count];
    discovery.retain(|handle| !std::mem::replace(&mut seen[handle.index()], true));
    discovery
}
