//! Bayesian network adapter.

use crate::collection::Collection;
use crate::context::{classes, KeanuContext};
use crate::error::Result;
use crate::label::VertexLabel;
use crate::remote::{RemoteHandle, RemoteValue};
use crate::vertex::Vertex;
use crate::wrapper::{CtorWrapper, ObjectWrapper, RemoteList, Wrapper};

/// Network built from the vertices reachable from a seed collection
#[derive(Debug)]
pub struct BayesNet {
    ctor: CtorWrapper,
}

impl BayesNet {
    /// Build a `BayesianNetwork` from `vertices`. Lists and sets are both
    /// accepted.
    pub fn new<'a>(ctx: &KeanuContext, vertices: impl Into<Collection<'a>>) -> Result<Self> {
        let vertices = vertices.into().to_remote(ctx, true)?;
        let ctor = CtorWrapper::construct(ctx, classes::BAYESIAN_NETWORK, &[vertices.into()])?;
        Ok(Self { ctor })
    }

    fn list(&self, method: &str) -> Result<RemoteList> {
        RemoteList::wrap(self.ctor.object().call_object(method, &[])?)
    }

    pub fn get_latent_or_observed_vertices(&self) -> Result<RemoteList> {
        self.list("getLatentOrObservedVertices")
    }

    pub fn get_top_level_latent_or_observed_vertices(&self) -> Result<RemoteList> {
        self.list("getTopLevelLatentOrObservedVertices")
    }

    pub fn get_latent_vertices(&self) -> Result<RemoteList> {
        self.list("getLatentVertices")
    }

    pub fn get_top_level_latent_vertices(&self) -> Result<RemoteList> {
        self.list("getTopLevelLatentVertices")
    }

    pub fn get_observed_vertices(&self) -> Result<RemoteList> {
        self.list("getObservedVertices")
    }

    pub fn get_top_level_observed_vertices(&self) -> Result<RemoteList> {
        self.list("getTopLevelObservedVertices")
    }

    pub fn get_continuous_latent_vertices(&self) -> Result<RemoteList> {
        self.list("getContinuousLatentVertices")
    }

    pub fn get_discrete_latent_vertices(&self) -> Result<RemoteList> {
        self.list("getDiscreteLatentVertices")
    }

    /// Search for a starting state with non-zero probability, drawing from
    /// the engine-side random source `random`.
    pub fn probe_for_non_zero_probability(&self, attempts: usize, random: &RemoteHandle) -> Result<()> {
        let attempts = RemoteValue::try_from(attempts)?;
        self.ctor
            .object()
            .call("probeForNonZeroProbability", &[attempts, random.into()])?;
        Ok(())
    }

    /// `None` when no vertex carries `label`
    pub fn get_vertex_by_label(&self, label: &VertexLabel) -> Result<Option<Vertex>> {
        match self
            .ctor
            .object()
            .call("getVertexByLabel", &[label.unwrap().into()])?
        {
            RemoteValue::Null => Ok(None),
            other => Vertex::wrap(other.into_handle()?).map(Some),
        }
    }
}

impl Wrapper for BayesNet {
    const LOCAL_ATTRIBUTES: &'static [&'static str] = &[
        "get_latent_or_observed_vertices",
        "get_top_level_latent_or_observed_vertices",
        "get_latent_vertices",
        "get_top_level_latent_vertices",
        "get_observed_vertices",
        "get_top_level_observed_vertices",
        "get_continuous_latent_vertices",
        "get_discrete_latent_vertices",
        "probe_for_non_zero_probability",
        "get_vertex_by_label",
    ];

    fn object(&self) -> &ObjectWrapper {
        self.ctor.object()
    }

    fn describe(&self) -> String {
        self.ctor.describe("BayesNet")
    }
}
