//! Card builder.

use htmldom::{ClickHandler, Element};
use serde::Deserialize;

use crate::catalog::{ComponentEntry, Control, Layout, ParamSpec, VariantEntry};
use crate::error::CatalogError;

/// A content card builder.
///
/// Produces a `div.card` holding an optional image, a content block with
/// title and description, and an optional action link. The image inherits
/// the card title as its alt text.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Card {
    title: Option<String>,
    description: Option<String>,
    image_url: Option<String>,
    action_text: Option<String>,
    #[serde(skip)]
    on_action_click: Option<ClickHandler>,
}

impl Card {
    /// Create a new card builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the card title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the card description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the image shown above the content.
    pub fn image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Set the action link text.
    pub fn action_text(mut self, text: impl Into<String>) -> Self {
        self.action_text = Some(text.into());
        self
    }

    /// Set the handler invoked when the action link is clicked.
    pub fn on_action_click(mut self, handler: ClickHandler) -> Self {
        self.on_action_click = Some(handler);
        self
    }

    /// Build the card element.
    pub fn build(self) -> Element {
        let title = self.title.unwrap_or_default();
        let description = self.description.unwrap_or_default();

        let mut card = Element::div().class("card");

        if let Some(url) = self.image_url.filter(|u| !u.is_empty()) {
            card = card.child(
                Element::new("img")
                    .class("card__image")
                    .attr("src", url)
                    .attr("alt", title.as_str()),
            );
        }

        let mut content = Element::div()
            .class("card__content")
            .child(Element::text("h3", title.as_str()).class("card__title"))
            .child(Element::text("p", description).class("card__description"));

        if let Some(text) = self.action_text.filter(|t| !t.is_empty()) {
            let mut action = Element::text("a", text)
                .class("card__action")
                .attr("href", "#");
            if let Some(handler) = self.on_action_click {
                action = action.on_click(handler);
            }
            content = content.child(action);
        }

        card.child(content)
    }
}

fn render_params(params: &serde_json::Value) -> Result<String, CatalogError> {
    let card: Card = serde_json::from_value(params.clone())?;
    Ok(htmldom::render(&card.build()))
}

fn default_card() -> String {
    htmldom::render(
        &Card::new()
            .title("Beautiful Landscapes")
            .description(
                "Explore the hidden gems of nature with our guided tours. \
                 Experience serenity like never before.",
            )
            .image_url(
                "https://images.unsplash.com/photo-1506744038136-46273834b3fb\
                 ?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
            )
            .action_text("Learn More")
            .build(),
    )
}

fn no_image() -> String {
    htmldom::render(
        &Card::new()
            .title("Simple Card")
            .description("This is a card without an image, just focusing on the content and action.")
            .action_text("Read")
            .build(),
    )
}

const PARAMS: &[ParamSpec] = &[
    ParamSpec::new("title", Control::Text),
    ParamSpec::new("description", Control::Text),
    ParamSpec::new("imageUrl", Control::Text),
    ParamSpec::new("actionText", Control::Text),
    ParamSpec::new("onActionClick", Control::Action),
];

const VARIANTS: &[VariantEntry] = &[
    VariantEntry::new("Default", default_card),
    VariantEntry::new("NoImage", no_image),
];

inventory::submit! {
    ComponentEntry::new("Elements/Card", Layout::Padded, VARIANTS)
        .with_params(PARAMS)
        .with_render(render_params)
}
