//! Collection arguments.
//!
//! Engine calls that take a group of vertices accept either a host-side
//! list, which is converted through the gateway, or a collection that
//! already lives in the engine.

use crate::context::KeanuContext;
use crate::error::{BridgeError, Result};
use crate::remote::{RemoteHandle, RemoteValue};
use crate::vertex::Vertex;
use crate::wrapper::{RemoteList, RemoteSet, Wrapper};

/// A collection-like argument
#[derive(Debug)]
pub enum Collection<'a> {
    /// Host list of engine objects
    Native(Vec<RemoteHandle>),
    /// Wrapped engine list
    List(&'a RemoteList),
    /// Wrapped engine set
    Set(&'a RemoteSet),
    /// Untyped value; only a host list of objects is accepted
    Value(RemoteValue),
}

impl<'a> From<&'a [Vertex]> for Collection<'a> {
    fn from(vertices: &'a [Vertex]) -> Self {
        Collection::Native(vertices.iter().map(|v| v.unwrap().clone()).collect())
    }
}

impl<'a> From<&'a Vec<Vertex>> for Collection<'a> {
    fn from(vertices: &'a Vec<Vertex>) -> Self {
        Collection::from(vertices.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [&'a Vertex; N]> for Collection<'a> {
    fn from(vertices: &'a [&'a Vertex; N]) -> Self {
        Collection::Native(vertices.iter().map(|v| v.unwrap().clone()).collect())
    }
}

impl<'a> From<Vec<RemoteHandle>> for Collection<'a> {
    fn from(handles: Vec<RemoteHandle>) -> Self {
        Collection::Native(handles)
    }
}

impl<'a> From<&'a RemoteList> for Collection<'a> {
    fn from(list: &'a RemoteList) -> Self {
        Collection::List(list)
    }
}

impl<'a> From<&'a RemoteSet> for Collection<'a> {
    fn from(set: &'a RemoteSet) -> Self {
        Collection::Set(set)
    }
}

impl<'a> From<RemoteValue> for Collection<'a> {
    fn from(value: RemoteValue) -> Self {
        Collection::Value(value)
    }
}

impl<'a> Collection<'a> {
    fn describe(&self) -> String {
        match self {
            Collection::Native(_) => "list".to_string(),
            Collection::List(list) => list.describe(),
            Collection::Set(set) => set.describe(),
            Collection::Value(value) => value.type_name().to_string(),
        }
    }

    /// Engine-side collection for this argument.
    ///
    /// Host lists are converted with one gateway call; wrapped collections
    /// are passed through untouched. Sets are refused unless `accept_sets`.
    pub fn to_remote(self, ctx: &KeanuContext, accept_sets: bool) -> Result<RemoteHandle> {
        let expected = if accept_sets {
            "a list or set of vertices"
        } else {
            "a list of vertices"
        };

        match self {
            Collection::Native(handles) => {
                ctx.to_remote_list(handles.into_iter().map(RemoteValue::Object).collect())
            }
            Collection::List(list) => Ok(list.unwrap().clone()),
            Collection::Set(set) if accept_sets => Ok(set.unwrap().clone()),
            Collection::Value(RemoteValue::List(items)) => {
                if let Some(bad) = items.iter().find(|item| item.as_handle().is_none()) {
                    return Err(BridgeError::type_mismatch(
                        expected,
                        format!("a list containing {}", bad.type_name()),
                    ));
                }
                ctx.to_remote_list(items)
            }
            other => Err(BridgeError::type_mismatch(expected, other.describe())),
        }
    }
}
