//! Local-or-remote attribute dispatch.
//!
//! Each wrapper type declares the snake_case attributes it implements. A
//! lookup for any other name takes the single fallback path below, whose
//! behaviour depends on [`DispatchPolicy`]:
//!
//! | requested           | declared locally as | permissive          | strict                      |
//! |---------------------|---------------------|---------------------|-----------------------------|
//! | `get_latent_vertices` | yes               | `Local`             | `Local`                     |
//! | `getLatentVertices` | `get_latent_vertices` | `Local`           | `UnknownAttribute` + hint   |
//! | `getFoo`            | no                  | warn + forward `getFoo` | `UnknownAttribute`      |
//! | `get_foo`           | no                  | warn + forward `getFoo` | warn + forward `getFoo` |

use crate::config::DispatchPolicy;
use crate::context::KeanuContext;
use crate::diagnostics::{ForwardReason, ForwardingWarning};
use crate::error::{BridgeError, Result};
use crate::remote::RemoteValue;
use crate::wrapper::{ObjectWrapper, BASE_ATTRIBUTES};
use keanu_naming::{to_local_name, to_remote_name};

/// Outcome of an attribute lookup
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
    /// The name resolves to a locally implemented member; call it through
    /// the wrapper's typed API
    Local(&'static str),
    /// Result of calling the engine directly. Not wrapped.
    Forwarded(RemoteValue),
}

impl Attribute {
    pub fn is_local(&self) -> bool {
        matches!(self, Attribute::Local(_))
    }

    pub fn into_forwarded(self) -> Option<RemoteValue> {
        match self {
            Attribute::Forwarded(value) => Some(value),
            Attribute::Local(_) => None,
        }
    }
}

fn declared(local: &'static [&'static str], name: &str) -> Option<&'static str> {
    BASE_ATTRIBUTES
        .iter()
        .chain(local.iter())
        .find(|&&attr| attr == name)
        .copied()
}

/// Resolve `requested` for the wrapper holding `object`.
pub fn lookup(
    ctx: &KeanuContext,
    object: &ObjectWrapper,
    local: &'static [&'static str],
    requested: &str,
    args: &[RemoteValue],
) -> Result<Attribute> {
    if let Some(attr) = declared(local, requested) {
        return Ok(Attribute::Local(attr));
    }

    let local_name = to_local_name(requested);

    match ctx.config().dispatch_policy {
        DispatchPolicy::Permissive => {
            if let Some(attr) = declared(local, &local_name) {
                return Ok(Attribute::Local(attr));
            }
            forward(ctx, object, requested, args, ForwardReason::NotImplemented)
        }
        DispatchPolicy::Strict => {
            if requested != local_name {
                return Err(BridgeError::UnknownAttribute {
                    name: requested.to_string(),
                    suggestion: declared(local, &local_name).map(str::to_string),
                });
            }
            forward(ctx, object, requested, args, ForwardReason::Incomplete)
        }
    }
}

fn forward(
    ctx: &KeanuContext,
    object: &ObjectWrapper,
    requested: &str,
    args: &[RemoteValue],
    reason: ForwardReason,
) -> Result<Attribute> {
    let remote_name = to_remote_name(requested);

    ctx.diagnostics().warn(&ForwardingWarning {
        requested: requested.to_string(),
        remote_name: remote_name.clone(),
        class_name: object.class_name().to_string(),
        reason,
    });

    let value = object.call(&remote_name, args)?;
    Ok(Attribute::Forwarded(value))
}
