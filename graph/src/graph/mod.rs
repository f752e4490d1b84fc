//! Pass descriptors and the lookup structures built over them.
//!
//! A pipeline description is an unordered list of [`PassDescriptor`]s that
//! refer to each other by name. Before anything is scheduled, two indices are
//! built over that list:
//!
//! | Index | Maps | Purpose |
//! |-------|------|---------|
//! | [`PassIndex`] | pass name → [`PassHandle`] | Explicit dependencies |
//! | [`WriteIndex`] | resource name → writer handles | Implicit dependencies, formats |
//!
//! Both borrow the descriptor slice, which acts as an index-stable arena:
//! a [`PassHandle`] is simply a position in that slice.
//!
//! # Example
//!
//! ```
//! use redlilium_graph::{PassDescriptor, PassIndex, TextureFormat, WriteIndex};
//!
//! let passes = vec![
//!     PassDescriptor::new("gbuffer").with_texture_output("Albedo", TextureFormat::Rgba8Unorm),
//!     PassDescriptor::new("final")
//!         .with_texture_input("Albedo")
//!         .with_texture_output("Backbuffer", TextureFormat::Bgra8Unorm),
//! ];
//!
//! let index = PassIndex::build(&passes)?;
//! let writes = WriteIndex::build(&index)?;
//! let gbuffer = index.handle("gbuffer").unwrap();
//! assert_eq!(writes.writers("Albedo"), Some(&[gbuffer][..]));
//! # Ok::<(), redlilium_graph::GraphError>(())
//! ```

mod pass;
mod writers;

use std::collections::HashMap;
use std::collections::hash_map::Entry;

pub use pass::{PassDescriptor, TextureOutput};
pub use writers::WriteIndex;

use crate::error::GraphError;

/// Handle to a pass in a [`PassIndex`].
///
/// `PassHandle` is `Copy` and cheap to pass around. It is only valid within
/// the `PassIndex` that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PassHandle(u32);

impl PassHandle {
    pub(crate) fn new(index: u32) -> Self {
        Self(index)
    }

    /// Position of the pass in the descriptor slice.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Name-keyed lookup over a slice of pass descriptors.
#[derive(Debug)]
pub struct PassIndex<'a> {
    passes: &'a [PassDescriptor],
    by_name: HashMap<&'a str, PassHandle>,
}

impl<'a> PassIndex<'a> {
    /// Build the index.
    ///
    /// Fails with [`GraphError::DuplicatePass`] if two passes share a name.
    pub fn build(passes: &'a [PassDescriptor]) -> Result<Self, GraphError> {
        let mut by_name = HashMap::with_capacity(passes.len());

        for (index, pass) in passes.iter().enumerate() {
            match by_name.entry(pass.name()) {
                Entry::Occupied(_) => {
                    return Err(GraphError::DuplicatePass {
                        name: pass.name().to_string(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(PassHandle::new(index as u32));
                }
            }
        }

        Ok(Self { passes, by_name })
    }

    /// Look up a pass handle by name.
    pub fn handle(&self, name: &str) -> Option<PassHandle> {
        self.by_name.get(name).copied()
    }

    /// Get the descriptor behind a handle.
    pub fn get(&self, handle: PassHandle) -> &'a PassDescriptor {
        &self.passes[handle.index()]
    }

    /// Get a pass descriptor by name.
    pub fn by_name(&self, name: &str) -> Option<&'a PassDescriptor> {
        self.handle(name).map(|handle| self.get(handle))
    }

    /// Get the name of the pass behind a handle.
    pub fn name(&self, handle: PassHandle) -> &'a str {
        self.get(handle).name()
    }

    /// Iterate over all passes with their handles, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (PassHandle, &'a PassDescriptor)> + '_ {
        self.passes
            .iter()
            .enumerate()
            .map(|(index, pass)| (PassHandle::new(index as u32), pass))
    }

    /// All descriptors, in declaration order.
    pub fn passes(&self) -> &'a [PassDescriptor] {
        self.passes
    }

    /// Get the number of passes.
    pub fn len(&self) -> usize {
        self.passes.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }
}
