//! c-card fragment.

use crate::catalog::{ComponentEntry, Layout, VariantEntry};
use crate::transform;

/// Base fragment: `div.c-card` holding an image wrapper and a body with
/// title, description and action link.
pub const BASE: &str = include_str!("../../assets/c-card.html");

fn default_card() -> String {
    BASE.to_string()
}

/// Base with the `c-card__image` block removed.
fn no_image() -> String {
    transform::remove_block(BASE, "div", "c-card__image")
}

const VARIANTS: &[VariantEntry] = &[
    VariantEntry::new("Default", default_card),
    VariantEntry::new("NoImage", no_image),
];

inventory::submit! {
    ComponentEntry::new("Components/Card", Layout::Padded, VARIANTS)
}
