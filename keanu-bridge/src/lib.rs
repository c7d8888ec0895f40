//! # keanu-bridge
//!
//! Typed wrappers over objects living in the Keanu probabilistic
//! programming engine.
//!
//! Every engine object is held through a [`RemoteHandle`]. Adapters such as
//! [`Vertex`], [`BayesNet`] and [`NetworkSamples`] implement a closed set of
//! snake_case methods; any other attribute goes through
//! [`Wrapper::get_attr`], which converts the name with
//! [`keanu_naming::to_remote_name`], warns, and calls the engine directly.
//!
//! ## Example
//!
//! ```rust,no_run
//! use keanu_bridge::{BayesNet, Gateway, InferenceAlgorithm, KeanuContext, NdArray, Result, Vertex};
//! use std::rc::Rc;
//!
//! fn posterior_mean(gateway: Rc<dyn Gateway>) -> Result<Vec<f64>> {
//!     let ctx = KeanuContext::new(gateway);
//!
//!     let mu = Vertex::constant(&ctx, &NdArray::scalar(0.0))?;
//!     let shifted = (&mu + 1.0)?;
//!     let net = BayesNet::new(&ctx, &[&mu, &shifted])?;
//!
//!     let samples = InferenceAlgorithm::nuts(&ctx)?
//!         .get_posterior_samples(&ctx, &net, &[&mu], 1000)?;
//!     Ok(samples.get(&mu)?.get_averages()?.into_vec())
//! }
//! ```
//!
//! ## Dispatch policy
//!
//! [`DispatchPolicy::Permissive`] (default) accepts engine-style camelCase
//! names for locally implemented members. [`DispatchPolicy::Strict`]
//! rejects them with a hint naming the snake_case spelling.
//!
//! ## Threading
//!
//! Handles are reference counted with `Rc`; a context and everything built
//! from it stays on one thread.

pub mod collection;
pub mod config;
pub mod context;
pub mod diagnostics;
pub mod dispatch;
pub mod error;
pub mod inference;
pub mod label;
pub mod network;
pub mod remote;
pub mod tensor;
pub mod vertex;
pub mod wrapper;


// Re-exports
pub use collection::*;
pub use config::*;
pub use context::*;
pub use diagnostics::*;
pub use dispatch::*;
pub use error::*;
pub use inference::*;
pub use label::*;
pub use network::*;
pub use remote::*;
pub use tensor::*;
pub use vertex::*;
pub use wrapper::*;

pub use keanu_naming::{to_local_name, to_remote_name};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
