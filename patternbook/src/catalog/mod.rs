//! Component catalog and discovery.
//!
//! Component modules register a [`ComponentEntry`] through inventory; the
//! hosting explorer walks [`registered_components`] to list them, reads
//! their parameter schemas, and renders named variants or parameter
//! records. Registration is declaration-only: nothing renders until a
//! variant or parameter record is asked for.

mod entry;
mod params;

pub use entry::{ComponentEntry, Layout, RenderParamsFn, VariantEntry};
pub use params::{Control, ParamSpec, SelectOption};

use crate::error::CatalogError;

inventory::collect!(ComponentEntry);

/// Get all registered components.
pub fn registered_components() -> impl Iterator<Item = &'static ComponentEntry> {
    inventory::iter::<ComponentEntry>()
}

/// Find a component by its catalog title.
pub fn find_component(title: &str) -> Result<&'static ComponentEntry, CatalogError> {
    registered_components()
        .find(|entry| entry.title == title)
        .ok_or_else(|| CatalogError::unknown_component(title))
}
