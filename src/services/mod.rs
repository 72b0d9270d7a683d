pub mod generator;
pub mod loader;
pub mod manifest;
pub mod rename;
pub mod writer;
