//! Button builder.

use htmldom::{ClickHandler, Element};
use serde::Deserialize;

use crate::catalog::{ComponentEntry, Control, Layout, ParamSpec, SelectOption, VariantEntry};
use crate::error::CatalogError;
use crate::types::ButtonSize;

/// A button builder.
///
/// Produces a `<button type="button">` carrying the `btn` base class plus
/// the modifier classes chosen by `size` and `primary`.
///
/// # Example
///
/// ```ignore
/// let el = Button::new()
///     .label("Get Started")
///     .primary(true)
///     .size(ButtonSize::Large)
///     .build();
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Button {
    label: Option<String>,
    primary: bool,
    size: ButtonSize,
    background_color: Option<String>,
    #[serde(skip)]
    on_click: Option<ClickHandler>,
}

impl Button {
    /// Create a new button builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the button label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Mark the button as the primary action.
    pub fn primary(mut self, primary: bool) -> Self {
        self.primary = primary;
        self
    }

    /// Set the button size.
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Override the background color inline.
    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Set the click handler.
    pub fn on_click(mut self, handler: ClickHandler) -> Self {
        self.on_click = Some(handler);
        self
    }

    /// Build the button element.
    pub fn build(self) -> Element {
        let label = self.label.unwrap_or_default();
        let mode = if self.primary {
            "btn--primary"
        } else {
            "btn--secondary"
        };

        let mut elem = Element::text("button", label)
            .attr("type", "button")
            .class("btn")
            .class(format!("btn--{}", self.size.as_str()))
            .class(mode);

        if let Some(color) = self.background_color.filter(|c| !c.is_empty()) {
            elem = elem.style_prop("background-color", color);
        }
        if let Some(handler) = self.on_click {
            elem = elem.on_click(handler);
        }

        elem
    }
}

fn render_params(params: &serde_json::Value) -> Result<String, CatalogError> {
    let button: Button = serde_json::from_value(params.clone())?;
    Ok(htmldom::render(&button.build()))
}

fn primary() -> String {
    htmldom::render(&Button::new().primary(true).label("Button").build())
}

fn secondary() -> String {
    htmldom::render(&Button::new().label("Button").build())
}

fn large() -> String {
    htmldom::render(&Button::new().size(ButtonSize::Large).label("Button").build())
}

fn small() -> String {
    htmldom::render(&Button::new().size(ButtonSize::Small).label("Button").build())
}

const SIZE_OPTIONS: &[SelectOption] = &[
    SelectOption::new("small", "small"),
    SelectOption::new("medium", "medium"),
    SelectOption::new("large", "large"),
];

const PARAMS: &[ParamSpec] = &[
    ParamSpec::new("backgroundColor", Control::Color),
    ParamSpec::new("label", Control::Text),
    ParamSpec::new("onClick", Control::Action),
    ParamSpec::new("primary", Control::Boolean),
    ParamSpec::new("size", Control::Select).with_options(SIZE_OPTIONS),
];

const VARIANTS: &[VariantEntry] = &[
    VariantEntry::new("Primary", primary),
    VariantEntry::new("Secondary", secondary),
    VariantEntry::new("Large", large),
    VariantEntry::new("Small", small),
];

inventory::submit! {
    ComponentEntry::new("Elements/Button", Layout::Padded, VARIANTS)
        .with_params(PARAMS)
        .with_render(render_params)
}
