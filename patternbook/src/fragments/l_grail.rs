//! l-grail layout fragment.

use crate::catalog::{ComponentEntry, Layout, VariantEntry};

/// Base fragment: the holy-grail page shell with header and footer
/// spanning the page, nav and aside flanking the main content.
pub const BASE: &str = include_str!("../../assets/l-grail.html");

fn default_grail() -> String {
    BASE.to_string()
}

const VARIANTS: &[VariantEntry] = &[VariantEntry::new("Default", default_grail)];

inventory::submit! {
    ComponentEntry::new("Layouts/Grail", Layout::Fullscreen, VARIANTS)
}
