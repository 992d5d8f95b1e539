pub mod element;
pub mod render;

pub use element::{find, find_class, ClickEvent, ClickHandler, Content, Element};
pub use render::render;
