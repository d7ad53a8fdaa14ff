pub mod convert;
pub mod error;
pub mod manifest;
pub mod render;
