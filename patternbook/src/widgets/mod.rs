//! Built-in component builders.
//!
//! Each builder is a parameter record with fluent setters that produces an
//! owned htmldom element tree. Builders are pure: identical parameters
//! yield identical trees, absent optional fields suppress the
//! corresponding sub-element, and a provided callback becomes the click
//! handler of the node that owns it. Missing text renders as empty
//! content rather than failing.

pub mod button;
pub mod card;
pub mod header;
pub mod hero;

pub use button::Button;
pub use card::Card;
pub use header::{Header, User};
pub use hero::Hero;
