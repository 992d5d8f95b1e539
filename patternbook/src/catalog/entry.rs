//! Catalog entry types for inventory-based discovery.

use serde_json::Value;

use crate::error::CatalogError;

use super::params::ParamSpec;

/// Renders a component from a JSON parameter record.
pub type RenderParamsFn = fn(&Value) -> Result<String, CatalogError>;

/// How the explorer hosts a rendered fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Centered with padding around the fragment.
    #[default]
    Padded,
    /// Edge to edge, for page-level shells.
    Fullscreen,
}

/// A named documentation variant of a component.
#[derive(Debug, Clone, Copy)]
pub struct VariantEntry {
    /// Variant name.
    pub name: &'static str,
    /// Renders the variant to an HTML string.
    pub render: fn() -> String,
}

impl VariantEntry {
    /// Create a new variant entry.
    pub const fn new(name: &'static str, render: fn() -> String) -> Self {
        Self { name, render }
    }
}

/// Component registration entry for inventory.
pub struct ComponentEntry {
    /// Catalog title, two levels deep (`Group/Name`).
    pub title: &'static str,
    /// Hosting layout.
    pub layout: Layout,
    /// Parameter schema; empty when the component takes no parameters.
    pub params: &'static [ParamSpec],
    /// Parameterized renderer, when the component supports one.
    pub render_params: Option<RenderParamsFn>,
    /// Named variants in display order.
    pub variants: &'static [VariantEntry],
}

impl ComponentEntry {
    /// Create a new component entry.
    pub const fn new(
        title: &'static str,
        layout: Layout,
        variants: &'static [VariantEntry],
    ) -> Self {
        Self {
            title,
            layout,
            params: &[],
            render_params: None,
            variants,
        }
    }

    /// Attach a parameter schema.
    pub const fn with_params(mut self, params: &'static [ParamSpec]) -> Self {
        self.params = params;
        self
    }

    /// Attach a parameterized renderer.
    pub const fn with_render(mut self, render: RenderParamsFn) -> Self {
        self.render_params = Some(render);
        self
    }

    /// Look up a variant by name.
    pub fn variant(&self, name: &str) -> Option<&VariantEntry> {
        self.variants.iter().find(|v| v.name == name)
    }

    /// Render a named variant.
    pub fn render_variant(&self, name: &str) -> Result<String, CatalogError> {
        self.variant(name)
            .map(|v| (v.render)())
            .ok_or_else(|| CatalogError::unknown_variant(self.title, name))
    }

    /// Render from a JSON parameter record.
    pub fn render_with(&self, params: &Value) -> Result<String, CatalogError> {
        match self.render_params {
            Some(render) => render(params),
            None => Err(CatalogError::NotParameterized {
                title: self.title.to_string(),
            }),
        }
    }
}

impl std::fmt::Debug for ComponentEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentEntry")
            .field("title", &self.title)
            .field("layout", &self.layout)
            .field("params", &self.params.len())
            .field("variants", &self.variants.len())
            .finish()
    }
}
