//! Render pass descriptors.

use serde::{Deserialize, Serialize};

use crate::types::ResourceFormat;

/// A texture written by a pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureOutput {
    /// Resource name.
    pub name: String,
    /// Format of the written texture.
    #[serde(default)]
    pub format: ResourceFormat,
}

impl TextureOutput {
    /// Create a new texture output.
    pub fn new(name: impl Into<String>, format: impl Into<ResourceFormat>) -> Self {
        Self {
            name: name.into(),
            format: format.into(),
        }
    }
}

/// A pass in the render pipeline description.
///
/// Passes reference each other and their resources by name only. The
/// scheduler never modifies a descriptor, it only decides where it goes in
/// the submission order.
///
/// # Example
///
/// ```
/// use redlilium_graph::{PassDescriptor, TextureFormat};
///
/// let lighting = PassDescriptor::new("lighting")
///     .with_dependency("shadow")
///     .with_texture_input("Normals")
///     .with_texture_output("Lit", TextureFormat::Rgba16Float);
///
/// assert_eq!(lighting.name(), "lighting");
/// assert!(lighting.writes("Lit"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassDescriptor {
    name: String,
    #[serde(default)]
    dependencies: Vec<String>,
    #[serde(default)]
    texture_inputs: Vec<String>,
    #[serde(default)]
    input_buffers: Vec<String>,
    #[serde(default)]
    texture_outputs: Vec<TextureOutput>,
    #[serde(default)]
    output_buffers: Vec<String>,
}

impl PassDescriptor {
    /// Create a new pass with no dependencies and no resources.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dependencies: Vec::new(),
            texture_inputs: Vec::new(),
            input_buffers: Vec::new(),
            texture_outputs: Vec::new(),
            output_buffers: Vec::new(),
        }
    }

    /// Add an explicit dependency on another pass.
    pub fn with_dependency(mut self, pass: impl Into<String>) -> Self {
        self.dependencies.push(pass.into());
        self
    }

    /// Add a texture this pass samples.
    pub fn with_texture_input(mut self, texture: impl Into<String>) -> Self {
        self.texture_inputs.push(texture.into());
        self
    }

    /// Add a buffer this pass reads.
    pub fn with_input_buffer(mut self, buffer: impl Into<String>) -> Self {
        self.input_buffers.push(buffer.into());
        self
    }

    /// Add a texture this pass writes.
    pub fn with_texture_output(
        mut self,
        texture: impl Into<String>,
        format: impl Into<ResourceFormat>,
    ) -> Self {
        self.texture_outputs.push(TextureOutput::new(texture, format));
        self
    }

    /// Add a buffer this pass writes.
    pub fn with_output_buffer(mut self, buffer: impl Into<String>) -> Self {
        self.output_buffers.push(buffer.into());
        self
    }

    /// Get the pass name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Explicit dependencies, in declaration order.
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// Textures read by this pass.
    pub fn texture_inputs(&self) -> &[String] {
        &self.texture_inputs
    }

    /// Buffers read by this pass.
    pub fn input_buffers(&self) -> &[String] {
        &self.input_buffers
    }

    /// Textures written by this pass.
    pub fn texture_outputs(&self) -> &[TextureOutput] {
        &self.texture_outputs
    }

    /// Buffers written by this pass.
    pub fn output_buffers(&self) -> &[String] {
        &self.output_buffers
    }

    /// Check if this pass writes the named texture or buffer.
    pub fn writes(&self, resource: &str) -> bool {
        self.texture_outputs.iter().any(|o| o.name == resource)
            || self.output_buffers.iter().any(|b| b == resource)
    }

    /// Check if this pass reads the named texture or buffer.
    pub fn reads(&self, resource: &str) -> bool {
        self.texture_inputs.iter().any(|t| t == resource)
            || self.input_buffers.iter().any(|b| b == resource)
    }
}
