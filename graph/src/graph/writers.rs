//! Resource name to writer pass lookup.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::error::GraphError;
use crate::types::ResourceFormat;

use super::{PassHandle, PassIndex};

/// Maps each resource name to the passes that write it.
///
/// Writers are listed in pass declaration order. Texture outputs and output
/// buffers share one namespace. The first writer of a texture fixes its
/// format; later writers must agree.
#[derive(Debug, Default)]
pub struct WriteIndex<'a> {
    writers: HashMap<&'a str, Vec<PassHandle>>,
    formats: HashMap<&'a str, ResourceFormat>,
}

impl<'a> WriteIndex<'a> {
    /// Build the write index over every pass in `passes`.
    ///
    /// Fails with [`GraphError::ConflictingFormat`] if two passes write the
    /// same texture with different formats.
    pub fn build(passes: &PassIndex<'a>) -> Result<Self, GraphError> {
        let mut index = Self::default();

        for (handle, pass) in passes.iter() {
            for output in pass.texture_outputs() {
                index.add_writer(&output.name, handle);

                match index.formats.entry(output.name.as_str()) {
                    Entry::Occupied(existing) if *existing.get() != output.format => {
                        return Err(GraphError::ConflictingFormat {
                            resource: output.name.clone(),
                            pass: pass.name().to_string(),
                        });
                    }
                    Entry::Occupied(_) => {}
                    Entry::Vacant(slot) => {
                        slot.insert(output.format);
                    }
                }
            }

            for buffer in pass.output_buffers() {
                index.add_writer(buffer, handle);
            }
        }

        log::trace!("Write index covers {} resources", index.writers.len());
        Ok(index)
    }

    fn add_writer(&mut self, resource: &'a str, handle: PassHandle) {
        let writers = self.writers.entry(resource).or_default();
        // A pass listing the same output twice is still one writer
        if writers.last() != Some(&handle) {
            writers.push(handle);
        }
    }

    /// Get the writers of a resource, or `None` if nothing writes it.
    pub fn writers(&self, resource: &str) -> Option<&[PassHandle]> {
        self.writers.get(resource).map(Vec::as_slice)
    }

    /// Check if anything writes the resource.
    pub fn is_written(&self, resource: &str) -> bool {
        self.writers.contains_key(resource)
    }

    /// Get the texture format of a resource.
    ///
    /// Returns `None` for buffers and for resources nothing writes.
    pub fn format(&self, resource: &str) -> Option<&ResourceFormat> {
        self.formats.get(resource)
    }

    /// Get the number of written resources.
    pub fn resource_count(&self) -> usize {
        self.writers.len()
    }
}
