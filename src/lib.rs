//! # roomfinder-ui
//!
//! Browser-side helpers for the Escape Room Finder pages, compiled to
//! WebAssembly. The server renders plain HTML; this crate attaches the small
//! behaviors those pages need once the document is ready and exposes a handful
//! of functions to inline markup handlers.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Selectors and class names, with JSON overrides |
//! | [`error`] | Error types for browser glue and geolocation |
//! | [`dom`] | [`dom::UiElement`] adapter over DOM nodes |
//! | [`util`] | Formatters, timers, debounce |
//! | [`geo`] | Current-location lookup and "search near me" |
//! | [`ui`] | Widgets, lazy images, spoilers, clipboard/share, forms, star rating |
//! | `bindings` | `wasm-bindgen` exports and the page-ready hook (`hydrate` only) |
//!
//! Everything outside `bindings` and the `hydrate`-gated browser adapters is
//! plain Rust and runs under native `cargo test`.

pub mod config;
pub mod dom;
pub mod error;
pub mod geo;
pub mod ui;
pub mod util;

#[cfg(feature = "hydrate")]
mod bindings;

#[cfg(test)]
mod test_support;
