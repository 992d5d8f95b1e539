//! l-grid layout fragment.

use crate::catalog::{ComponentEntry, Layout, VariantEntry};
use crate::transform;

/// Base fragment: `div.l-grid` with six items, auto-fitting columns to
/// `--min-item-width`.
pub const BASE: &str = include_str!("../../assets/l-grid.html");

fn auto_fit() -> String {
    BASE.to_string()
}

/// Base with the auto-fit declaration swapped for a fixed column count.
fn fixed_columns() -> String {
    transform::replace_first(BASE, "--min-item-width: 250px;", "--cols: 3;")
}

const VARIANTS: &[VariantEntry] = &[
    VariantEntry::new("AutoFit", auto_fit),
    VariantEntry::new("FixedColumns", fixed_columns),
];

inventory::submit! {
    ComponentEntry::new("Layouts/Grid", Layout::Padded, VARIANTS)
}
