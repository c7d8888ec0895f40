//! Explicit engine context.
//!
//! Built once at startup and handed by reference to every adapter that has
//! to reach the engine (constructors, static calls, list conversion).

use crate::config::BridgeConfig;
use crate::diagnostics::{DiagnosticSink, LogSink};
use crate::error::Result;
use crate::remote::{Gateway, RemoteHandle, RemoteValue};
use std::rc::Rc;

/// Fully qualified engine class names used by the adapters
pub mod classes {
    pub const BAYESIAN_NETWORK: &str = "io.improbable.keanu.network.BayesianNetwork";
    pub const METROPOLIS_HASTINGS: &str = "io.improbable.keanu.algorithms.mcmc.MetropolisHastings";
    pub const NUTS: &str = "io.improbable.keanu.algorithms.mcmc.NUTS";
    pub const HAMILTONIAN: &str = "io.improbable.keanu.algorithms.mcmc.Hamiltonian";
    pub const VERTEX_LABEL: &str = "io.improbable.keanu.vertices.VertexLabel";
    pub const DOUBLE_TENSOR: &str = "io.improbable.keanu.tensor.dbl.DoubleTensor";
    pub const CONSTANT_DOUBLE_VERTEX: &str =
        "io.improbable.keanu.vertices.dbl.nonprobabilistic.ConstantDoubleVertex";
}

/// Connection to the engine plus bridge-wide settings
#[derive(Debug)]
pub struct KeanuContext {
    gateway: Rc<dyn Gateway>,
    config: BridgeConfig,
    diagnostics: Rc<dyn DiagnosticSink>,
}

impl KeanuContext {
    /// Create a context with default configuration, logging warnings via `log`
    pub fn new(gateway: Rc<dyn Gateway>) -> Self {
        Self::with_config(gateway, BridgeConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(gateway: Rc<dyn Gateway>, config: BridgeConfig) -> Self {
        let diagnostics = Rc::new(LogSink::new(config.log_target.clone()));
        Self {
            gateway,
            config,
            diagnostics,
        }
    }

    /// Replace the diagnostic sink
    pub fn with_diagnostics(mut self, sink: Rc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = sink;
        self
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn diagnostics(&self) -> &dyn DiagnosticSink {
        self.diagnostics.as_ref()
    }

    pub fn gateway(&self) -> &dyn Gateway {
        self.gateway.as_ref()
    }

    /// Call an engine constructor
    pub fn construct(&self, class: &str, args: &[RemoteValue]) -> Result<RemoteHandle> {
        log::debug!("constructing {} with {} argument(s)", class, args.len());
        Ok(self.gateway.construct(class, args)?)
    }

    /// Class object for static calls
    pub fn class_ref(&self, class: &str) -> Result<RemoteHandle> {
        Ok(self.gateway.class_ref(class)?)
    }

    /// Convert a host list into an engine list
    pub fn to_remote_list(&self, items: Vec<RemoteValue>) -> Result<RemoteHandle> {
        Ok(self.gateway.to_remote_list(items)?)
    }

    /// Convert host strings into an engine `String[]`
    pub fn to_remote_string_array(&self, items: &[String]) -> Result<RemoteHandle> {
        Ok(self.gateway.to_remote_string_array(items)?)
    }
}
