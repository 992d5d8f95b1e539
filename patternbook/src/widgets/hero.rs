//! Hero builder.

use htmldom::{ClickHandler, Element};
use serde::Deserialize;

use crate::catalog::{ComponentEntry, Control, Layout, ParamSpec, VariantEntry};
use crate::error::CatalogError;
use crate::types::ButtonSize;

use super::Button;

/// A hero banner builder.
///
/// Produces a `div.hero` with a title, a subtitle, and an actions row
/// holding up to two large buttons. Each action label carries its own
/// click handler; omitting a label omits that button. The actions row is
/// always present, even when empty.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hero {
    title: Option<String>,
    subtitle: Option<String>,
    primary_action_label: Option<String>,
    secondary_action_label: Option<String>,
    #[serde(skip)]
    on_primary_click: Option<ClickHandler>,
    #[serde(skip)]
    on_secondary_click: Option<ClickHandler>,
}

impl Hero {
    /// Create a new hero builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the headline.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the subtitle shown under the headline.
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Set the primary action label.
    pub fn primary_action_label(mut self, label: impl Into<String>) -> Self {
        self.primary_action_label = Some(label.into());
        self
    }

    /// Set the secondary action label.
    pub fn secondary_action_label(mut self, label: impl Into<String>) -> Self {
        self.secondary_action_label = Some(label.into());
        self
    }

    /// Set the handler for the primary action.
    pub fn on_primary_click(mut self, handler: ClickHandler) -> Self {
        self.on_primary_click = Some(handler);
        self
    }

    /// Set the handler for the secondary action.
    pub fn on_secondary_click(mut self, handler: ClickHandler) -> Self {
        self.on_secondary_click = Some(handler);
        self
    }

    /// Build the hero element.
    pub fn build(self) -> Element {
        let mut actions = Element::div().class("hero__actions");

        if let Some(label) = self.primary_action_label.filter(|l| !l.is_empty()) {
            let mut button = Button::new()
                .primary(true)
                .size(ButtonSize::Large)
                .label(label);
            if let Some(handler) = self.on_primary_click {
                button = button.on_click(handler);
            }
            actions = actions.child(button.build());
        }

        if let Some(label) = self.secondary_action_label.filter(|l| !l.is_empty()) {
            let mut button = Button::new().size(ButtonSize::Large).label(label);
            if let Some(handler) = self.on_secondary_click {
                button = button.on_click(handler);
            }
            actions = actions.child(button.build());
        }

        Element::div().class("hero").child(
            Element::div()
                .class("hero__content")
                .child(Element::text("h1", self.title.unwrap_or_default()).class("hero__title"))
                .child(
                    Element::text("p", self.subtitle.unwrap_or_default()).class("hero__subtitle"),
                )
                .child(actions),
        )
    }
}

fn render_params(params: &serde_json::Value) -> Result<String, CatalogError> {
    let hero: Hero = serde_json::from_value(params.clone())?;
    Ok(htmldom::render(&hero.build()))
}

fn default_hero() -> String {
    htmldom::render(
        &Hero::new()
            .title("Build Your Dream Website")
            .subtitle(
                "Create stunning, responsive websites with our easy-to-use components. \
                 No coding required for the future, but for now, enjoy these clean \
                 HTML/CSS blocks.",
            )
            .primary_action_label("Get Started")
            .secondary_action_label("Learn More")
            .build(),
    )
}

fn simple() -> String {
    htmldom::render(
        &Hero::new()
            .title("Welcome to the Future")
            .subtitle("AI-driven development is here.")
            .primary_action_label("Join Waitlist")
            .build(),
    )
}

const PARAMS: &[ParamSpec] = &[
    ParamSpec::new("title", Control::Text),
    ParamSpec::new("subtitle", Control::Text),
    ParamSpec::new("primaryActionLabel", Control::Text),
    ParamSpec::new("secondaryActionLabel", Control::Text),
    ParamSpec::new("onPrimaryClick", Control::Action),
    ParamSpec::new("onSecondaryClick", Control::Action),
];

const VARIANTS: &[VariantEntry] = &[
    VariantEntry::new("Default", default_hero),
    VariantEntry::new("Simple", simple),
];

inventory::submit! {
    ComponentEntry::new("Elements/Hero", Layout::Padded, VARIANTS)
        .with_params(PARAMS)
        .with_render(render_params)
}
