//! Header builder.

use htmldom::{ClickHandler, Element};
use serde::Deserialize;

use crate::catalog::{ComponentEntry, Control, Layout, ParamSpec, VariantEntry};
use crate::error::CatalogError;
use crate::types::ButtonSize;

use super::Button;

/// The signed-in user shown in the header.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Display name, rendered into the welcome text.
    pub name: String,
}

/// A site header builder.
///
/// Produces a `header.header` with the brand on one side and the account
/// actions on the other. With a user present the actions show a welcome
/// text and a log-out button; without one they show log-in and sign-up
/// buttons. Each button forwards its own callback.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Header {
    user: Option<User>,
    #[serde(skip)]
    on_login: Option<ClickHandler>,
    #[serde(skip)]
    on_logout: Option<ClickHandler>,
    #[serde(skip)]
    on_create_account: Option<ClickHandler>,
}

impl Header {
    /// Create a new header builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the signed-in user.
    pub fn user(mut self, name: impl Into<String>) -> Self {
        self.user = Some(User { name: name.into() });
        self
    }

    /// Set the handler for the log-in button.
    pub fn on_login(mut self, handler: ClickHandler) -> Self {
        self.on_login = Some(handler);
        self
    }

    /// Set the handler for the log-out button.
    pub fn on_logout(mut self, handler: ClickHandler) -> Self {
        self.on_logout = Some(handler);
        self
    }

    /// Set the handler for the sign-up button.
    pub fn on_create_account(mut self, handler: ClickHandler) -> Self {
        self.on_create_account = Some(handler);
        self
    }

    /// Build the header element.
    pub fn build(self) -> Element {
        let mut actions = Element::div().class("header__actions");

        match self.user {
            Some(user) => {
                actions = actions.child(
                    Element::text("span", format!("Welcome, {}!", user.name))
                        .class("header__welcome"),
                );

                let mut logout = Button::new().size(ButtonSize::Small).label("Log out");
                if let Some(handler) = self.on_logout {
                    logout = logout.on_click(handler);
                }
                actions = actions.child(logout.build());
            }
            None => {
                let mut login = Button::new().size(ButtonSize::Small).label("Log in");
                if let Some(handler) = self.on_login {
                    login = login.on_click(handler);
                }
                actions = actions.child(login.build());

                let mut signup = Button::new()
                    .primary(true)
                    .size(ButtonSize::Small)
                    .label("Sign up");
                if let Some(handler) = self.on_create_account {
                    signup = signup.on_click(handler);
                }
                actions = actions.child(signup.build());
            }
        }

        Element::new("header")
            .class("header")
            .child(Element::text("div", "PatternBook").class("header__brand"))
            .child(actions)
    }
}

fn render_params(params: &serde_json::Value) -> Result<String, CatalogError> {
    let header: Header = serde_json::from_value(params.clone())?;
    Ok(htmldom::render(&header.build()))
}

fn logged_in() -> String {
    htmldom::render(&Header::new().user("Jane Doe").build())
}

fn logged_out() -> String {
    htmldom::render(&Header::new().build())
}

const PARAMS: &[ParamSpec] = &[
    ParamSpec::new("onLogin", Control::Action),
    ParamSpec::new("onLogout", Control::Action),
    ParamSpec::new("onCreateAccount", Control::Action),
];

const VARIANTS: &[VariantEntry] = &[
    VariantEntry::new("LoggedIn", logged_in),
    VariantEntry::new("LoggedOut", logged_out),
];

inventory::submit! {
    ComponentEntry::new("Elements/Header", Layout::Padded, VARIANTS)
        .with_params(PARAMS)
        .with_render(render_params)
}
