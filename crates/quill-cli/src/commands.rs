pub mod ask;
pub mod session;
pub mod version;
