//! These models represent the objects passed between the chat session, the
//! provider and the renderer.
//!
//! Messages are what the session log holds. Segments are the transient output
//! of the formatter and never outlive the answer text they borrow from.
pub mod message;
pub mod role;
pub mod segment;
