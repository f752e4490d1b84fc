//! Per-resource usage ranges over the submission order.

use std::collections::HashMap;

use crate::config::RangeTracking;
use crate::graph::PassDescriptor;

/// An inclusive range of pass indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// First pass index.
    pub first: usize,
    /// Last pass index.
    pub last: usize,
}

impl Span {
    /// A span covering a single pass.
    pub fn at(index: usize) -> Self {
        Self {
            first: index,
            last: index,
        }
    }

    fn extend(&mut self, index: usize) {
        self.first = self.first.min(index);
        self.last = self.last.max(index);
    }

    fn include(span: &mut Option<Span>, index: usize) {
        match span {
            Some(span) => span.extend(index),
            None => *span = Some(Span::at(index)),
        }
    }
}

/// Where in the submission order a resource is read and written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UsageRange {
    write: Option<Span>,
    read: Option<Span>,
}

impl UsageRange {
    /// Create an unused range.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a write at the given pass index.
    pub fn record_write(&mut self, pass_index: usize) {
        Span::include(&mut self.write, pass_index);
    }

    /// Record a read at the given pass index.
    pub fn record_read(&mut self, pass_index: usize) {
        Span::include(&mut self.read, pass_index);
    }

    /// The span of passes writing the resource.
    pub fn write_span(&self) -> Option<Span> {
        self.write
    }

    /// The span of passes reading the resource.
    pub fn read_span(&self) -> Option<Span> {
        self.read
    }

    /// Check if any write was recorded.
    pub fn has_writer(&self) -> bool {
        self.write.is_some()
    }

    /// Check if any read was recorded.
    pub fn has_reader(&self) -> bool {
        self.read.is_some()
    }

    /// Check if the resource is accessed at all.
    pub fn is_used(&self) -> bool {
        self.has_writer() || self.has_reader()
    }

    /// Check if the resource may give up its memory to an alias partner.
    ///
    /// A resource read at or before its first write holds data from before
    /// this graph ran, so it must be preserved.
    pub fn can_alias(&self) -> bool {
        match (self.read, self.write) {
            (Some(read), Some(write)) => read.first > write.first,
            _ => true,
        }
    }

    /// First pass index touching the resource.
    pub fn first_used_pass(&self) -> Option<usize> {
        match (self.write, self.read) {
            (Some(w), Some(r)) => Some(w.first.min(r.first)),
            (Some(span), None) | (None, Some(span)) => Some(span.first),
            (None, None) => None,
        }
    }

    /// Last pass index touching the resource.
    pub fn last_used_pass(&self) -> Option<usize> {
        match (self.write, self.read) {
            (Some(w), Some(r)) => Some(w.last.max(r.last)),
            (Some(span), None) | (None, Some(span)) => Some(span.last),
            (None, None) => None,
        }
    }

    /// The full lifetime of the resource, if it is used.
    pub fn lifetime(&self) -> Option<Span> {
        Some(Span {
            first: self.first_used_pass()?,
            last: self.last_used_pass()?,
        })
    }

    /// Check if the two resources could share memory.
    ///
    /// Both must be used, both must be allowed to alias, and one lifetime
    /// must end strictly before the other begins.
    pub fn is_disjoint_with(&self, other: &UsageRange) -> bool {
        if !self.can_alias() || !other.can_alias() {
            return false;
        }

        match (self.lifetime(), other.lifetime()) {
            (Some(a), Some(b)) => a.last < b.first || b.last < a.first,
            _ => false,
        }
    }
}

/// Usage ranges for every resource touched by an ordered pass list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsageTable {
    ranges: HashMap<String, UsageRange>,
    in_order: Vec<String>,
}

impl UsageTable {
    /// Walk the ordered passes once and record every resource access.
    ///
    /// Within a pass, texture inputs are visited first, then texture outputs,
    /// then input and output buffers. The first visit of a resource fixes
    /// its discovery position.
    pub fn track(passes: &[PassDescriptor], tracking: RangeTracking) -> Self {
        let mut table = Self::default();

        for (pass_index, pass) in passes.iter().enumerate() {
            for texture in pass.texture_inputs() {
                table.record_read(texture, pass_index, tracking);
            }
            for output in pass.texture_outputs() {
                table.entry(&output.name).record_write(pass_index);
            }
            for buffer in pass.input_buffers() {
                table.record_read(buffer, pass_index, tracking);
            }
            for buffer in pass.output_buffers() {
                table.entry(buffer).record_write(pass_index);
            }
        }

        log::trace!(
            "Tracked usage of {} resources over {} passes",
            table.in_order.len(),
            passes.len()
        );
        table
    }

    fn record_read(&mut self, resource: &str, pass_index: usize, tracking: RangeTracking) {
        let range = self.entry(resource);
        match tracking {
            RangeTracking::Conservative => range.record_write(pass_index),
            RangeTracking::Split => range.record_read(pass_index),
        }
    }

    fn entry(&mut self, resource: &str) -> &mut UsageRange {
        if !self.ranges.contains_key(resource) {
            self.in_order.push(resource.to_string());
        }
        self.ranges.entry(resource.to_string()).or_default()
    }

    /// Get the usage range of a resource.
    pub fn range(&self, resource: &str) -> Option<&UsageRange> {
        self.ranges.get(resource)
    }

    /// Resource names in the order they were first accessed.
    pub fn resources_in_order(&self) -> &[String] {
        &self.in_order
    }

    /// Iterate over resources and their ranges in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &UsageRange)> + '_ {
        self.in_order
            .iter()
            .map(move |name| (name.as_str(), &self.ranges[name]))
    }

    /// Get the number of tracked resources.
    pub fn len(&self) -> usize {
        self.in_order.len()
    }

    /// Check if no resource was tracked.
    pub fn is_empty(&self) -> bool {
        self.in_order.is_empty()
    }
}
