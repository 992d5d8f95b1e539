pub mod catalog;
pub mod error;
pub mod fragments;
pub mod transform;
pub mod types;
pub mod widgets;

pub use catalog::{find_component, registered_components, ComponentEntry, VariantEntry};
pub use error::CatalogError;
pub use types::{ButtonSize, ButtonVariant};

pub mod prelude {
    pub use crate::catalog::{
        find_component, registered_components, ComponentEntry, Control, Layout, ParamSpec,
        SelectOption, VariantEntry,
    };
    pub use crate::error::CatalogError;
    pub use crate::fragments::CButton;
    pub use crate::types::{ButtonSize, ButtonVariant};
    pub use crate::widgets::{Button, Card, Header, Hero, User};

    pub use htmldom::{render, ClickEvent, ClickHandler, Element};
}
