//! MCMC inference and sample access.
//!
//! ```text
//! InferenceAlgorithm ──get_posterior_samples──▶ NetworkSamples
//!                                                  │ get(vertex)
//!                                                  ▼
//!                                             VertexSamples
//! ```

use crate::collection::Collection;
use crate::context::{classes, KeanuContext};
use crate::error::{BridgeError, Result};
use crate::network::BayesNet;
use crate::remote::{RemoteHandle, RemoteValue};
use crate::tensor::NdArray;
use crate::vertex::Vertex;
use crate::wrapper::{ObjectWrapper, RemoteList, RemoteSet, Wrapper};
use serde::{Deserialize, Serialize};

/// Supported posterior samplers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    MetropolisHastings,
    Nuts,
    Hamiltonian,
}

impl Algorithm {
    pub fn class_name(self) -> &'static str {
        match self {
            Algorithm::MetropolisHastings => classes::METROPOLIS_HASTINGS,
            Algorithm::Nuts => classes::NUTS,
            Algorithm::Hamiltonian => classes::HAMILTONIAN,
        }
    }
}

/// Engine sampler class, configured with its defaults at sampling time
#[derive(Debug)]
pub struct InferenceAlgorithm {
    algorithm: Algorithm,
    class: RemoteHandle,
}

impl InferenceAlgorithm {
    pub fn new(ctx: &KeanuContext, algorithm: Algorithm) -> Result<Self> {
        let class = ctx.class_ref(algorithm.class_name())?;
        Ok(Self { algorithm, class })
    }

    pub fn metropolis_hastings(ctx: &KeanuContext) -> Result<Self> {
        Self::new(ctx, Algorithm::MetropolisHastings)
    }

    pub fn nuts(ctx: &KeanuContext) -> Result<Self> {
        Self::new(ctx, Algorithm::Nuts)
    }

    pub fn hamiltonian(ctx: &KeanuContext) -> Result<Self> {
        Self::new(ctx, Algorithm::Hamiltonian)
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Draw `sample_count` posterior samples of `vertices` from `net`.
    ///
    /// `vertices` must be a list; engine sets are rejected.
    pub fn get_posterior_samples<'a>(
        &self,
        ctx: &KeanuContext,
        net: &BayesNet,
        vertices: impl Into<Collection<'a>>,
        sample_count: usize,
    ) -> Result<NetworkSamples> {
        let count = RemoteValue::try_from(sample_count)?;
        let vertices = vertices.into().to_remote(ctx, false)?;

        log::debug!(
            "sampling {} draws with {:?}",
            sample_count,
            self.algorithm
        );

        let sampler = self.class.call_object("withDefaultConfig", &[])?;
        let samples = sampler.call_object(
            "getPosteriorSamples",
            &[net.unwrap().into(), vertices.into(), count],
        )?;
        NetworkSamples::wrap(samples)
    }
}

/// Samples for every requested vertex
#[derive(Debug)]
pub struct NetworkSamples {
    object: ObjectWrapper,
}

impl NetworkSamples {
    pub fn wrap(handle: RemoteHandle) -> Result<Self> {
        Ok(Self {
            object: ObjectWrapper::wrap(handle)?,
        })
    }

    fn samples(&self, method: &str, args: &[RemoteValue]) -> Result<NetworkSamples> {
        NetworkSamples::wrap(self.object.call_object(method, args)?)
    }

    pub fn get_double_tensor_samples(&self, vertex: &Vertex) -> Result<VertexSamples> {
        VertexSamples::wrap(
            self.object
                .call_object("getDoubleTensorSamples", &[vertex.unwrap().into()])?,
        )
    }

    pub fn get_integer_tensor_samples(&self, vertex: &Vertex) -> Result<VertexSamples> {
        VertexSamples::wrap(
            self.object
                .call_object("getIntegerTensorSamples", &[vertex.unwrap().into()])?,
        )
    }

    pub fn get(&self, vertex: &Vertex) -> Result<VertexSamples> {
        VertexSamples::wrap(self.object.call_object("get", &[vertex.unwrap().into()])?)
    }

    /// Discard the first `count` samples
    pub fn drop(&self, count: usize) -> Result<NetworkSamples> {
        self.samples("drop", &[RemoteValue::try_from(count)?])
    }

    /// Keep every `interval`-th sample
    pub fn down_sample(&self, interval: usize) -> Result<NetworkSamples> {
        if interval == 0 {
            return Err(BridgeError::UnsupportedOperation(
                "down_sample interval must be at least 1".to_string(),
            ));
        }
        self.samples("downSample", &[RemoteValue::try_from(interval)?])
    }

    pub fn get_network_state(&self, index: usize) -> Result<NetworkState> {
        let index = RemoteValue::try_from(index)?;
        NetworkState::wrap(self.object.call_object("getNetworkState", &[index])?)
    }

    /// Fraction of samples satisfying an engine-side predicate
    pub fn probability(&self, predicate: &RemoteHandle) -> Result<f64> {
        self.object.call("probability", &[predicate.into()])?.into_f64()
    }

    pub fn size(&self) -> Result<usize> {
        self.object.call("size", &[])?.into_usize()
    }
}

impl Wrapper for NetworkSamples {
    const LOCAL_ATTRIBUTES: &'static [&'static str] = &[
        "get_double_tensor_samples",
        "get_integer_tensor_samples",
        "get",
        "drop",
        "down_sample",
        "get_network_state",
        "probability",
        "size",
    ];

    fn object(&self) -> &ObjectWrapper {
        &self.object
    }
}

/// Samples of a single vertex
#[derive(Debug)]
pub struct VertexSamples {
    object: ObjectWrapper,
}

impl VertexSamples {
    pub fn wrap(handle: RemoteHandle) -> Result<Self> {
        Ok(Self {
            object: ObjectWrapper::wrap(handle)?,
        })
    }

    /// Element-wise mean over all samples
    pub fn get_averages(&self) -> Result<NdArray> {
        NdArray::from_remote(&self.object.call_object("getAverages", &[])?)
    }

    /// Most frequent sample
    pub fn get_mode(&self) -> Result<NdArray> {
        NdArray::from_remote(&self.object.call_object("getMode", &[])?)
    }

    pub fn as_list(&self) -> Result<RemoteList> {
        RemoteList::wrap(self.object.call_object("asList", &[])?)
    }

    pub fn probability(&self, predicate: &RemoteHandle) -> Result<f64> {
        self.object.call("probability", &[predicate.into()])?.into_f64()
    }
}

impl Wrapper for VertexSamples {
    const LOCAL_ATTRIBUTES: &'static [&'static str] =
        &["get_averages", "get_mode", "as_list", "probability"];

    fn object(&self) -> &ObjectWrapper {
        &self.object
    }
}

/// Values of every vertex at one sample
#[derive(Debug)]
pub struct NetworkState {
    object: ObjectWrapper,
}

impl NetworkState {
    pub fn wrap(handle: RemoteHandle) -> Result<Self> {
        Ok(Self {
            object: ObjectWrapper::wrap(handle)?,
        })
    }

    pub fn get(&self, vertex: &Vertex) -> Result<RemoteValue> {
        self.object.call("get", &[vertex.unwrap().into()])
    }

    pub fn get_vertex_ids(&self) -> Result<RemoteSet> {
        RemoteSet::wrap(self.object.call_object("getVertexIds", &[])?)
    }
}

impl Wrapper for NetworkState {
    const LOCAL_ATTRIBUTES: &'static [&'static str] = &["get", "get_vertex_ids"];

    fn object(&self) -> &ObjectWrapper {
        &self.object
    }
}
