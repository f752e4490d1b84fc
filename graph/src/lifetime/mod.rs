//! Resource lifetime analysis over a scheduled pass list.
//!
//! Once the submission order is fixed, each resource's lifetime is the span
//! of pass indices that touch it. Transient textures whose lifetimes never
//! overlap, and whose formats match, may live in the same memory.
//!
//! ```text
//! pass:    0   1   2   3   4
//! A:       [=====]
//! B:           [=====]
//! C:               [=====]        C reuses A
//! D:                   [=====]    D reuses B
//! ```

mod alias;
mod usage;

pub use alias::{AliasTable, resolve_aliases};
pub use usage::{Span, UsageRange, UsageTable};
