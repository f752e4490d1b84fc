//! Shared pass sets and property checks for scheduling tests.

#![allow(dead_code)]

use std::collections::HashSet;
use std::path::PathBuf;

use redlilium_graph::{CompiledGraph, PassDescriptor, ScheduleConfig, TextureFormat};

/// Route the scheduler's `debug!`/`trace!` output to the test harness.
///
/// Safe to call from every test; only the first call installs the logger.
pub fn init_logging() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

// ============================================================================
// Pass Sets
// ============================================================================

/// {A writes G; B reads G, writes Backbuffer}.
pub fn producer_consumer() -> Vec<PassDescriptor> {
    vec![
        PassDescriptor::new("A").with_texture_output("G", TextureFormat::Rgba8Unorm),
        PassDescriptor::new("B")
            .with_texture_input("G")
            .with_texture_output("Backbuffer", TextureFormat::Bgra8Unorm),
    ]
}

/// Two passes writing the backbuffer, unrelated to each other.
pub fn two_terminal_writers() -> Vec<PassDescriptor> {
    vec![
        PassDescriptor::new("A").with_texture_output("Backbuffer", TextureFormat::Bgra8Unorm),
        PassDescriptor::new("B").with_texture_output("Backbuffer", TextureFormat::Bgra8Unorm),
    ]
}

/// A deferred pipeline with shadows, a compute light list, post effects and
/// a debug pass that does not feed the backbuffer.
pub fn deferred() -> Vec<PassDescriptor> {
    vec![
        PassDescriptor::new("debug_overlay")
            .with_texture_input("Depth")
            .with_texture_output("DebugView", TextureFormat::Rgba8Unorm),
        PassDescriptor::new("tonemap")
            .with_texture_input("Bloomed")
            .with_texture_output("Backbuffer", TextureFormat::Bgra8Unorm),
        PassDescriptor::new("bloom")
            .with_texture_input("Lit")
            .with_texture_output("Bloomed", TextureFormat::Rgba16Float),
        PassDescriptor::new("lighting")
            .with_dependency("shadow")
            .with_texture_input("Albedo")
            .with_texture_input("Normals")
            .with_texture_input("Depth")
            .with_texture_input("ShadowMap")
            .with_input_buffer("LightList")
            .with_texture_output("Lit", TextureFormat::Rgba16Float),
        PassDescriptor::new("light_culling")
            .with_texture_input("Depth")
            .with_output_buffer("LightList"),
        PassDescriptor::new("shadow").with_texture_output("ShadowMap", TextureFormat::Depth32Float),
        PassDescriptor::new("gbuffer")
            .with_texture_output("Albedo", TextureFormat::Rgba8Unorm)
            .with_texture_output("Normals", TextureFormat::Rgba16Float)
            .with_texture_output("Depth", TextureFormat::Depth32Float),
    ]
}

/// A straight chain of `len` passes, declared leaf-first, ending in the
/// backbuffer. Every intermediate texture has the same format.
pub fn chain(len: usize) -> Vec<PassDescriptor> {
    (0..len)
        .map(|i| {
            let mut pass = PassDescriptor::new(format!("pass_{i}"));
            if i > 0 {
                pass = pass.with_texture_input(format!("T{}", i - 1));
            }
            let output = if i + 1 == len {
                "Backbuffer".to_string()
            } else {
                format!("T{i}")
            };
            pass.with_texture_output(output, TextureFormat::Rgba8Unorm)
        })
        .collect()
}

/// `layers` layers of two passes each. Every pass past the first layer reads
/// both outputs of the layer before it, and a composite pass reads the last
/// layer and writes the backbuffer.
pub fn lattice(layers: usize) -> Vec<PassDescriptor> {
    let mut passes = Vec::with_capacity(layers * 2 + 1);
    for layer in 0..layers {
        for i in 0..2 {
            let mut pass = PassDescriptor::new(format!("layer{layer}_{i}"));
            if layer > 0 {
                pass = pass
                    .with_texture_input(format!("L{}_0", layer - 1))
                    .with_texture_input(format!("L{}_1", layer - 1));
            }
            passes.push(pass.with_texture_output(format!("L{layer}_{i}"), TextureFormat::Rgba8Unorm));
        }
    }

    let last = layers - 1;
    passes.push(
        PassDescriptor::new("composite")
            .with_texture_input(format!("L{last}_0"))
            .with_texture_input(format!("L{last}_1"))
            .with_texture_output("Backbuffer", TextureFormat::Bgra8Unorm),
    );
    passes
}

/// Path to a pipeline description under `tests/data`.
pub fn data_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

// ============================================================================
// Property Checks
// ============================================================================

/// Every explicit dependency and every writer of every input of a scheduled
/// pass is scheduled before it.
pub fn assert_order_valid(compiled: &CompiledGraph, passes: &[PassDescriptor]) {
    for (position, pass) in compiled.pass_order().iter().enumerate() {
        for dependency in pass.dependencies() {
            let before = compiled
                .position(dependency)
                .unwrap_or_else(|| panic!("dependency `{dependency}` of `{}` not scheduled", pass.name()));
            assert!(
                before < position,
                "`{dependency}` must precede `{}`",
                pass.name()
            );
        }

        let inputs = pass.texture_inputs().iter().chain(pass.input_buffers());
        for input in inputs {
            for writer in passes.iter().filter(|p| p.writes(input)) {
                if writer.name() == pass.name() {
                    continue;
                }
                let before = compiled
                    .position(writer.name())
                    .unwrap_or_else(|| panic!("writer `{}` of `{input}` not scheduled", writer.name()));
                assert!(
                    before < position,
                    "writer `{}` of `{input}` must precede `{}`",
                    writer.name(),
                    pass.name()
                );
            }
        }
    }
}

/// No pass is scheduled twice.
pub fn assert_unique(compiled: &CompiledGraph) {
    let mut seen = HashSet::new();
    for name in compiled.pass_names() {
        assert!(seen.insert(name), "`{name}` scheduled twice");
    }
}

/// Aliased pairs have disjoint lifetimes and equal formats, and the terminal
/// resource is not involved in any pair.
pub fn assert_aliases_safe(
    compiled: &CompiledGraph,
    passes: &[PassDescriptor],
    config: &ScheduleConfig,
) {
    let format_of = |resource: &str| {
        passes
            .iter()
            .flat_map(|p| p.texture_outputs())
            .find(|output| output.name == resource)
            .map(|output| output.format)
    };

    for (resource, backing) in compiled.aliases().iter() {
        assert!(!config.is_terminal(resource), "terminal `{resource}` aliased");
        assert!(!config.is_terminal(backing), "`{resource}` aliased onto terminal");

        let usage = compiled.usage();
        let (Some(a), Some(b)) = (usage.range(resource), usage.range(backing)) else {
            panic!("aliased pair `{resource}`/`{backing}` has no usage range");
        };
        assert!(a.is_disjoint_with(b), "`{resource}` overlaps `{backing}`");

        assert!(format_of(resource).is_some());
        assert_eq!(format_of(resource), format_of(backing));
    }

    // Resources sharing one allocation must be pairwise disjoint too
    let aliased: Vec<_> = compiled.aliases().iter().collect();
    for (i, &(a, owner_a)) in aliased.iter().enumerate() {
        for &(b, owner_b) in &aliased[i + 1..] {
            if owner_a != owner_b {
                continue;
            }
            let usage = compiled.usage();
            let (Some(ra), Some(rb)) = (usage.range(a), usage.range(b)) else {
                continue;
            };
            assert!(ra.is_disjoint_with(rb), "`{a}` and `{b}` share `{owner_a}` but overlap");
        }
    }
}
