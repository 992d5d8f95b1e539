//! c-button fragment and its property generator.
//!
//! Unlike the other fragment modules, c-button is parameterized: every
//! visual knob of the stylesheet is exposed as a CSS custom property, and
//! the generator rebuilds the fragment's root element with the properties
//! the caller explicitly supplied. Anything left unset falls back to the
//! stylesheet's defaults.

use htmldom::Element;
use serde::Deserialize;

use crate::catalog::{ComponentEntry, Control, Layout, ParamSpec, SelectOption, VariantEntry};
use crate::error::CatalogError;
use crate::types::{ButtonSize, ButtonVariant};

/// Base fragment. The generator's output keeps to this wrapper shape: a
/// `div.c-button` root carrying the custom-property overrides.
pub const BASE: &str = include_str!("../../assets/c-button.html");

/// The c-button property generator.
///
/// Builds the `div.c-button` root with a `--c-button-*` custom property
/// for each supplied value. The two context properties (`--variant`,
/// `--size`) are suppressed at their defaults so the output carries no
/// redundant overrides; empty strings count as unset.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CButton {
    label: String,
    variant: ButtonVariant,
    size: ButtonSize,
    font_family: String,
    font_weight: String,
    color: String,
    bg: String,
    bg_hover: String,
    shadow: String,
    shadow_hover: String,
    transition: String,
    border_radius: String,
    hover_y: String,
}

impl Default for CButton {
    fn default() -> Self {
        Self {
            label: "Button".into(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            font_family: String::new(),
            font_weight: String::new(),
            color: String::new(),
            bg: String::new(),
            bg_hover: String::new(),
            shadow: String::new(),
            shadow_hover: String::new(),
            transition: String::new(),
            border_radius: String::new(),
            hover_y: String::new(),
        }
    }
}

impl CButton {
    /// Create a new generator with every property at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the button label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the visual variant.
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button size.
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set `--c-button-font-family`.
    pub fn font_family(mut self, value: impl Into<String>) -> Self {
        self.font_family = value.into();
        self
    }

    /// Set `--c-button-font-weight`.
    pub fn font_weight(mut self, value: impl Into<String>) -> Self {
        self.font_weight = value.into();
        self
    }

    /// Set `--c-button-color`.
    pub fn color(mut self, value: impl Into<String>) -> Self {
        self.color = value.into();
        self
    }

    /// Set `--c-button-bg`.
    pub fn bg(mut self, value: impl Into<String>) -> Self {
        self.bg = value.into();
        self
    }

    /// Set `--c-button-bg-hover`.
    pub fn bg_hover(mut self, value: impl Into<String>) -> Self {
        self.bg_hover = value.into();
        self
    }

    /// Set `--c-button-shadow`.
    pub fn shadow(mut self, value: impl Into<String>) -> Self {
        self.shadow = value.into();
        self
    }

    /// Set `--c-button-shadow-hover`.
    pub fn shadow_hover(mut self, value: impl Into<String>) -> Self {
        self.shadow_hover = value.into();
        self
    }

    /// Set `--c-button-transition`.
    pub fn transition(mut self, value: impl Into<String>) -> Self {
        self.transition = value.into();
        self
    }

    /// Set `--c-button-border-radius`.
    pub fn border_radius(mut self, value: impl Into<String>) -> Self {
        self.border_radius = value.into();
        self
    }

    /// Set the hover offset, emitted as `--c-button-transform-hover:
    /// translateY(..)`.
    pub fn hover_y(mut self, value: impl Into<String>) -> Self {
        self.hover_y = value.into();
        self
    }

    /// Build the fragment's root element.
    pub fn build(self) -> Element {
        let mut elem = Element::text("div", self.label).class("c-button");

        // Context properties, only at non-default values
        if self.variant != ButtonVariant::default() {
            elem = elem.style_prop("--variant", self.variant.as_str());
        }
        if self.size != ButtonSize::default() {
            elem = elem.style_prop("--size", self.size.as_str());
        }

        // Public API properties
        if !self.font_family.is_empty() {
            elem = elem.style_prop("--c-button-font-family", self.font_family);
        }
        if !self.font_weight.is_empty() {
            elem = elem.style_prop("--c-button-font-weight", self.font_weight);
        }
        if !self.color.is_empty() {
            elem = elem.style_prop("--c-button-color", self.color);
        }
        if !self.bg.is_empty() {
            elem = elem.style_prop("--c-button-bg", self.bg);
        }
        if !self.bg_hover.is_empty() {
            elem = elem.style_prop("--c-button-bg-hover", self.bg_hover);
        }
        if !self.shadow.is_empty() {
            elem = elem.style_prop("--c-button-shadow", self.shadow);
        }
        if !self.shadow_hover.is_empty() {
            elem = elem.style_prop("--c-button-shadow-hover", self.shadow_hover);
        }
        if !self.transition.is_empty() {
            elem = elem.style_prop("--c-button-transition", self.transition);
        }
        if !self.border_radius.is_empty() {
            elem = elem.style_prop("--c-button-border-radius", self.border_radius);
        }
        if !self.hover_y.is_empty() {
            elem = elem.style_prop(
                "--c-button-transform-hover",
                format!("translateY({})", self.hover_y),
            );
        }

        elem
    }
}

fn render_params(params: &serde_json::Value) -> Result<String, CatalogError> {
    let button: CButton = serde_json::from_value(params.clone())?;
    Ok(htmldom::render(&button.build()))
}

fn default_button() -> String {
    htmldom::render(&CButton::new().build())
}

fn primary() -> String {
    htmldom::render(&CButton::new().variant(ButtonVariant::Primary).build())
}

fn secondary() -> String {
    htmldom::render(&CButton::new().variant(ButtonVariant::Secondary).build())
}

fn small() -> String {
    htmldom::render(&CButton::new().size(ButtonSize::Small).build())
}

fn medium() -> String {
    htmldom::render(&CButton::new().size(ButtonSize::Medium).build())
}

fn large() -> String {
    htmldom::render(&CButton::new().size(ButtonSize::Large).build())
}

fn custom_colors() -> String {
    htmldom::render(
        &CButton::new()
            .bg("#e91e63")
            .bg_hover("#c2185b")
            .color("#ffffff")
            .build(),
    )
}

const VARIANT_OPTIONS: &[SelectOption] = &[
    SelectOption::new("primary", "primary"),
    SelectOption::new("secondary", "secondary"),
];

const SIZE_OPTIONS: &[SelectOption] = &[
    SelectOption::new("small", "small"),
    SelectOption::new("medium", "medium"),
    SelectOption::new("large", "large"),
];

const FONT_FAMILY_OPTIONS: &[SelectOption] = &[
    SelectOption::new("Default (system)", ""),
    SelectOption::new("system-ui", "system-ui, sans-serif"),
    SelectOption::new("Georgia (serif)", "Georgia, serif"),
    SelectOption::new("Menlo (monospace)", "Menlo, monospace"),
];

const FONT_WEIGHT_OPTIONS: &[SelectOption] = &[
    SelectOption::new("Default", ""),
    SelectOption::new("400 (Normal)", "400"),
    SelectOption::new("500 (Medium)", "500"),
    SelectOption::new("600 (Semi Bold)", "600"),
    SelectOption::new("700 (Bold)", "700"),
    SelectOption::new("800 (Extra Bold)", "800"),
];

// Shared by shadow and shadowHover
const SHADOW_OPTIONS: &[SelectOption] = &[
    SelectOption::new("Default", ""),
    SelectOption::new("None", "none"),
    SelectOption::new("Small", "0 1px 2px rgba(0,0,0,0.1)"),
    SelectOption::new("Medium", "0 4px 6px rgba(0,0,0,0.1)"),
    SelectOption::new("Large", "0 10px 15px rgba(0,0,0,0.1)"),
];

const TRANSITION_OPTIONS: &[SelectOption] = &[
    SelectOption::new("Default", ""),
    SelectOption::new("None", "none"),
    SelectOption::new("Fast (0.1s)", "all 0.1s ease-in-out"),
    SelectOption::new("Standard (0.2s)", "all 0.2s ease-in-out"),
    SelectOption::new("Slow (0.3s)", "all 0.3s ease-in-out"),
    SelectOption::new("Bounce", "all 0.3s cubic-bezier(0.68, -0.55, 0.265, 1.55)"),
];

const BORDER_RADIUS_OPTIONS: &[SelectOption] = &[
    SelectOption::new("Default", ""),
    SelectOption::new("None (0)", "0"),
    SelectOption::new("Small (0.25em)", "0.25em"),
    SelectOption::new("Medium (0.5em)", "0.5em"),
    SelectOption::new("Large (1em)", "1em"),
    SelectOption::new("Round (3em)", "3em"),
    SelectOption::new("Circle (50%)", "50%"),
];

const HOVER_Y_OPTIONS: &[SelectOption] = &[
    SelectOption::new("Default", ""),
    SelectOption::new("None", "0"),
    SelectOption::new("Float (-2px)", "-2px"),
    SelectOption::new("Float higher (-4px)", "-4px"),
    SelectOption::new("Sink (2px)", "2px"),
];

const PARAMS: &[ParamSpec] = &[
    ParamSpec::new("label", Control::Text)
        .with_category("Content")
        .with_summary("string")
        .with_default("Button")
        .with_description("Button label text"),
    ParamSpec::new("variant", Control::Select)
        .with_options(VARIANT_OPTIONS)
        .with_category("Context")
        .with_summary("primary | secondary")
        .with_default("primary")
        .with_description("Visual style variant"),
    ParamSpec::new("size", Control::Select)
        .with_options(SIZE_OPTIONS)
        .with_category("Context")
        .with_summary("small | medium | large")
        .with_default("medium")
        .with_description("Button size"),
    ParamSpec::new("fontFamily", Control::Select)
        .with_options(FONT_FAMILY_OPTIONS)
        .with_category("API: Typography")
        .with_summary("string")
        .with_default("var(--sys-font-body)")
        .with_description("Font family"),
    ParamSpec::new("fontWeight", Control::Select)
        .with_options(FONT_WEIGHT_OPTIONS)
        .with_category("API: Typography")
        .with_summary("number")
        .with_default("600")
        .with_description("Font weight"),
    ParamSpec::new("color", Control::Color)
        .with_category("API: Colors")
        .with_summary("color")
        .with_default("var(--sys-text-inverse)")
        .with_description("Text color"),
    ParamSpec::new("bg", Control::Color)
        .with_category("API: Colors")
        .with_summary("color")
        .with_default("var(--sys-bg-action)")
        .with_description("Background color"),
    ParamSpec::new("bgHover", Control::Color)
        .with_category("API: Colors")
        .with_summary("color")
        .with_default("var(--sys-bg-action-hover)")
        .with_description("Background color on hover"),
    ParamSpec::new("shadow", Control::Select)
        .with_options(SHADOW_OPTIONS)
        .with_category("API: Effects")
        .with_summary("string")
        .with_default("var(--sys-elevation-base)")
        .with_description("Box shadow"),
    ParamSpec::new("shadowHover", Control::Select)
        .with_options(SHADOW_OPTIONS)
        .with_category("API: Effects")
        .with_summary("string")
        .with_default("var(--sys-elevation-md)")
        .with_description("Box shadow on hover"),
    ParamSpec::new("borderRadius", Control::Select)
        .with_options(BORDER_RADIUS_OPTIONS)
        .with_category("API: Effects")
        .with_summary("string")
        .with_default("3em")
        .with_description("Corner radius"),
    ParamSpec::new("transition", Control::Select)
        .with_options(TRANSITION_OPTIONS)
        .with_category("API: Effects")
        .with_summary("string")
        .with_default("all 0.2s ease-in-out")
        .with_description("Hover transition"),
    ParamSpec::new("hoverY", Control::Select)
        .with_options(HOVER_Y_OPTIONS)
        .with_category("API: Effects")
        .with_summary("string")
        .with_default("-2px")
        .with_description("Vertical offset on hover"),
];

const VARIANTS: &[VariantEntry] = &[
    VariantEntry::new("Default", default_button),
    VariantEntry::new("Primary", primary),
    VariantEntry::new("Secondary", secondary),
    VariantEntry::new("Small", small),
    VariantEntry::new("Medium", medium),
    VariantEntry::new("Large", large),
    VariantEntry::new("CustomColors", custom_colors),
];

inventory::submit! {
    ComponentEntry::new("Components/Button", Layout::Padded, VARIANTS)
        .with_params(PARAMS)
        .with_render(render_params)
}
