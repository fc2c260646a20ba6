pub mod compare;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod exchange;
pub mod geometry;
pub mod interaction;
pub mod model;
pub mod overlap;
pub mod presets;
pub mod selection;
pub mod store;
// cmd and reports belong to the binary crate (main.rs).
