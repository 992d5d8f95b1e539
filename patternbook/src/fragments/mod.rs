//! Static markup fragments and their documentation variants.
//!
//! Each module here owns one base fragment, compiled in verbatim from
//! `assets/`. The base string is immutable ground truth: a variant either
//! returns it unchanged or derives a new string through the first-occurrence
//! substitutions in [`crate::transform`]. The c-button module additionally
//! carries a parameterized generator that rebuilds the fragment's root
//! element with CSS custom properties chosen from fixed option tables.
//!
//! Consumers editing the asset files must preserve the element structure
//! the transforms anchor on: the enclosing tags and classes named by each
//! variant function.

pub mod c_button;
pub mod c_card;
pub mod c_header;
pub mod c_hero;
pub mod l_grail;
pub mod l_grid;

pub use c_button::CButton;
