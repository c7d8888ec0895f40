//! Vertex labels.

use crate::context::{classes, KeanuContext};
use crate::error::Result;
use crate::remote::{RemoteHandle, RemoteValue};
use crate::wrapper::{ObjectWrapper, Wrapper};

/// A (possibly namespaced) vertex label
#[derive(Debug)]
pub struct VertexLabel {
    object: ObjectWrapper,
}

impl VertexLabel {
    /// `VertexLabel(first)` or, with a namespace, `VertexLabel(first, String[] remainder)`
    pub fn new(ctx: &KeanuContext, first: &str, remainder: &[&str]) -> Result<Self> {
        let handle = if remainder.is_empty() {
            ctx.construct(classes::VERTEX_LABEL, &[first.into()])?
        } else {
            let remainder: Vec<String> = remainder.iter().map(|s| s.to_string()).collect();
            let array = ctx.to_remote_string_array(&remainder)?;
            ctx.construct(classes::VERTEX_LABEL, &[first.into(), array.into()])?
        };
        Self::wrap(handle)
    }

    pub fn wrap(handle: RemoteHandle) -> Result<Self> {
        Ok(Self {
            object: ObjectWrapper::wrap(handle)?,
        })
    }

    pub fn get_qualified_name(&self) -> Result<String> {
        self.object.call("getQualifiedName", &[])?.into_string()
    }

    pub fn get_unqualified_name(&self) -> Result<String> {
        self.object.call("getUnqualifiedName", &[])?.into_string()
    }

    /// Label one level further into `namespace`
    pub fn in_namespace(&self, namespace: &str) -> Result<VertexLabel> {
        let handle = self
            .object
            .call_object("withExtraNamespace", &[RemoteValue::from(namespace)])?;
        Self::wrap(handle)
    }
}

impl Wrapper for VertexLabel {
    const LOCAL_ATTRIBUTES: &'static [&'static str] = &[
        "get_qualified_name",
        "get_unqualified_name",
        "in_namespace",
    ];

    fn object(&self) -> &ObjectWrapper {
        &self.object
    }
}
