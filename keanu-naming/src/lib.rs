//! # keanu-naming
//!
//! Identifier case conversion for the Keanu object bridge.
//!
//! Callers address engine objects with snake_case attribute names while the
//! engine itself exposes camelCase methods. This crate holds the two pure
//! conversions used on every forwarded call:
//!
//! - [`to_remote_name`]: `get_vertex_by_label` → `getVertexByLabel`
//! - [`to_local_name`]: `getVertexByLabel` → `get_vertex_by_label`
//!
//! ## Quick Start
//!
//! ```rust
//! use keanu_naming::{to_local_name, to_remote_name};
//!
//! let remote = to_remote_name("get_posterior_samples");
//! assert_eq!(remote, "getPosteriorSamples");
//! assert_eq!(to_local_name(&remote), "get_posterior_samples");
//! ```
//!
//! ## Round trips
//!
//! `to_local_name(to_remote_name(x)) == x` holds for lowercase words of two
//! or more letters joined by single underscores. It does not hold in general: `to_local_name` is a
//! many-to-one normalisation (`getHTTPValue` and `getHttpValue` both map to
//! `get_http_value`), `to_remote_name` drops empty words, and single-letter
//! words collapse into an acronym (`get_x_y` → `getXY` → `get_xy`).
//!
//! ## Crate Features
//!
//! - `wasm`: exports `toRemoteName` / `toLocalName` through wasm-bindgen

pub mod camel;
pub mod snake;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use camel::to_remote_name;
pub use snake::{is_local_name, to_local_name};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
