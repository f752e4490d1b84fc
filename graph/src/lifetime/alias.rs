//! Transient texture aliasing.

use std::collections::{BTreeMap, HashMap};

use crate::config::ScheduleConfig;
use crate::graph::WriteIndex;

use super::usage::{UsageRange, UsageTable};

/// Maps an aliased resource to the resource whose memory it reuses.
///
/// Backing resources are never themselves aliased, so every entry points
/// directly at the owner of the allocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    aliases: BTreeMap<String, String>,
}

impl AliasTable {
    /// Get the resource whose memory `resource` reuses.
    pub fn backing(&self, resource: &str) -> Option<&str> {
        self.aliases.get(resource).map(String::as_str)
    }

    /// Get the resource that owns the allocation used by `resource`.
    ///
    /// Returns `resource` itself when it is not aliased.
    pub fn allocation_owner<'a>(&'a self, resource: &'a str) -> &'a str {
        self.backing(resource).unwrap_or(resource)
    }

    /// Check if the resource shares another resource's memory.
    pub fn is_aliased(&self, resource: &str) -> bool {
        self.aliases.contains_key(resource)
    }

    /// Iterate over `(resource, backing)` pairs, sorted by resource name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.aliases.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Get the number of aliased resources.
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Check if nothing is aliased.
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

/// Decide which transient textures can share memory.
///
/// Resources are visited in discovery order and paired with the first
/// earlier resource that has the same format and a lifetime disjoint from
/// it and from everything already sharing that resource. The terminal
/// resource and format-less resources (buffers, external inputs) never take
/// part.
pub fn resolve_aliases(
    usage: &UsageTable,
    formats: &WriteIndex<'_>,
    config: &ScheduleConfig,
) -> AliasTable {
    let resources = usage.resources_in_order();
    let mut table = AliasTable::default();
    // Lifetimes of the resources sharing each backing allocation
    let mut sharers: HashMap<&str, Vec<&UsageRange>> = HashMap::new();

    for (i, name) in resources.iter().enumerate() {
        if config.is_terminal(name) {
            continue;
        }
        let (Some(format), Some(range)) = (formats.format(name), usage.range(name)) else {
            continue;
        };

        for candidate in &resources[..i] {
            if config.is_terminal(candidate) || table.is_aliased(candidate) {
                continue;
            }
            let (Some(candidate_format), Some(candidate_range)) =
                (formats.format(candidate), usage.range(candidate))
            else {
                continue;
            };

            if !format.is_alias_compatible(candidate_format)
                || !range.is_disjoint_with(candidate_range)
            {
                continue;
            }

            let group = sharers.entry(candidate.as_str()).or_default();
            if group.iter().any(|other| !range.is_disjoint_with(other)) {
                continue;
            }

            log::trace!("Aliasing `{name}` onto `{candidate}`");
            group.push(range);
            table.aliases.insert(name.clone(), candidate.clone());
            break;
        }
    }

    table
}
