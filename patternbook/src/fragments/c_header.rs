//! c-header fragment.

use crate::catalog::{ComponentEntry, Layout, VariantEntry};
use crate::transform;

/// Base fragment: `header.c-header` with the brand and two adjacent
/// `c-button` wrappers (log in, sign up) in the actions div.
pub const BASE: &str = include_str!("../../assets/c-header.html");

/// Replacement for the signed-in state: both action buttons collapse into
/// a single log-out button.
const LOG_OUT_BUTTON: &str = r#"<div class="c-button" style="--variant: secondary; --size: small;"><button type="button">Log Out</button></div>"#;

fn default_header() -> String {
    BASE.to_string()
}

/// Base with a welcome text spliced into the actions div and the two
/// account buttons replaced by a log-out button.
fn logged_in() -> String {
    let with_welcome = transform::replace_first(
        BASE,
        r#"<div class="c-header__actions">"#,
        r#"<div class="c-header__actions"><span>Welcome, User!</span>"#,
    );
    transform::replace_adjacent_blocks(&with_welcome, "div", "c-button", LOG_OUT_BUTTON)
}

fn logged_out() -> String {
    BASE.to_string()
}

const VARIANTS: &[VariantEntry] = &[
    VariantEntry::new("Default", default_header),
    VariantEntry::new("LoggedIn", logged_in),
    VariantEntry::new("LoggedOut", logged_out),
];

inventory::submit! {
    ComponentEntry::new("Components/Header", Layout::Fullscreen, VARIANTS)
}
