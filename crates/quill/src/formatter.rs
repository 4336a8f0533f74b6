//! Turns a raw response from the model into displayable pieces.
//!
//! [`items::split_items`] breaks one response into answer entries at numbered
//! list markers, and [`markup::render_inline`] breaks one entry into typed
//! segments. Both are pure and allocation-light: everything they return borrows
//! from the input text.
pub mod items;
pub mod markup;

pub use items::split_items;
pub use markup::render_inline;
