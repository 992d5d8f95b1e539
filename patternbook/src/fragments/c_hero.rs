//! c-hero fragment.

use crate::catalog::{ComponentEntry, Layout, VariantEntry};
use crate::transform;

/// Base fragment: `section.c-hero` with title, subtitle and one large
/// call-to-action button.
pub const BASE: &str = include_str!("../../assets/c-hero.html");

fn default_hero() -> String {
    BASE.to_string()
}

/// Base with the subtitle and the call-to-action button removed.
fn simple() -> String {
    let without_subtitle = transform::remove_block(BASE, "p", "c-hero__subtitle");
    transform::remove_block(&without_subtitle, "div", "c-button")
}

const VARIANTS: &[VariantEntry] = &[
    VariantEntry::new("Default", default_hero),
    VariantEntry::new("Simple", simple),
];

inventory::submit! {
    ComponentEntry::new("Components/Hero", Layout::Fullscreen, VARIANTS)
}
