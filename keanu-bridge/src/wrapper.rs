//! Wrapper base types.
//!
//! A wrapper owns exactly one [`RemoteHandle`] and the engine class name
//! read when it was created. Typed adapters embed an [`ObjectWrapper`] and
//! implement [`Wrapper`], which gives them `unwrap`, `describe` and the
//! forwarding lookup.

use crate::context::KeanuContext;
use crate::dispatch::{self, Attribute};
use crate::error::Result;
use crate::remote::{RemoteHandle, RemoteValue};

/// Attributes every wrapper implements locally
pub const BASE_ATTRIBUTES: &[&str] = &["unwrap", "describe"];

/// Owns one remote handle.
#[derive(Debug)]
pub struct ObjectWrapper {
    handle: RemoteHandle,
    class_name: String,
}

impl ObjectWrapper {
    /// Wrap `handle`, asking the engine for its class name once
    pub fn wrap(handle: RemoteHandle) -> Result<Self> {
        let class_name = handle.class_name()?;
        Ok(Self { handle, class_name })
    }

    /// The wrapped handle, as given to [`ObjectWrapper::wrap`]
    #[inline]
    pub fn unwrap(&self) -> &RemoteHandle {
        &self.handle
    }

    pub fn into_handle(self) -> RemoteHandle {
        self.handle
    }

    /// Engine class name cached at construction
    #[inline]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// `[ClassName => LocalType]`
    pub fn describe(&self, local_type: &str) -> String {
        format!("[{} => {}]", self.class_name, local_type)
    }

    pub(crate) fn call(&self, method: &str, args: &[RemoteValue]) -> Result<RemoteValue> {
        self.handle.call(method, args)
    }

    pub(crate) fn call_object(&self, method: &str, args: &[RemoteValue]) -> Result<RemoteHandle> {
        self.handle.call_object(method, args)
    }
}

/// Wrapper around an object the bridge created by calling an engine
/// constructor. Keeps the constructor arguments for display.
#[derive(Debug)]
pub struct CtorWrapper {
    object: ObjectWrapper,
    args: Vec<String>,
}

impl CtorWrapper {
    pub fn construct(ctx: &KeanuContext, class: &str, args: &[RemoteValue]) -> Result<Self> {
        let handle = ctx.construct(class, args)?;
        Ok(Self {
            object: ObjectWrapper::wrap(handle)?,
            args: args.iter().map(ToString::to_string).collect(),
        })
    }

    pub fn object(&self) -> &ObjectWrapper {
        &self.object
    }

    /// Display form of the constructor arguments
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// `[ClassName => LocalType: (arg1,arg2)]`
    pub fn describe(&self, local_type: &str) -> String {
        format!(
            "[{} => {}: ({})]",
            self.object.class_name(),
            local_type,
            self.args.join(",")
        )
    }
}

/// Typed adapter over a remote object.
///
/// `LOCAL_ATTRIBUTES` is the closed set of snake_case names the type
/// implements itself. Anything else goes through [`Wrapper::get_attr`].
pub trait Wrapper: Sized {
    const LOCAL_ATTRIBUTES: &'static [&'static str];

    fn object(&self) -> &ObjectWrapper;

    /// The wrapped handle
    fn unwrap(&self) -> &RemoteHandle {
        self.object().unwrap()
    }

    fn class_name(&self) -> &str {
        self.object().class_name()
    }

    /// Diagnostic tag; not used for equality
    fn describe(&self) -> String {
        self.object().describe(local_type_name::<Self>())
    }

    /// Resolve `name` against the local surface, forwarding to the engine
    /// according to the context's dispatch policy.
    fn get_attr(&self, ctx: &KeanuContext, name: &str, args: &[RemoteValue]) -> Result<Attribute> {
        dispatch::lookup(ctx, self.object(), Self::LOCAL_ATTRIBUTES, name, args)
    }
}

/// Last path segment of a type name
pub fn local_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Remote ordered collection
#[derive(Debug)]
pub struct RemoteList {
    object: ObjectWrapper,
}

impl RemoteList {
    pub fn wrap(handle: RemoteHandle) -> Result<Self> {
        Ok(Self {
            object: ObjectWrapper::wrap(handle)?,
        })
    }

    pub fn len(&self) -> Result<usize> {
        self.object.call("size", &[])?.into_usize()
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    pub fn get(&self, index: usize) -> Result<RemoteValue> {
        self.object.call("get", &[RemoteValue::try_from(index)?])
    }

    /// Copy the elements to the host
    pub fn to_vec(&self) -> Result<Vec<RemoteValue>> {
        self.object.call("toArray", &[])?.into_list()
    }
}

impl Wrapper for RemoteList {
    const LOCAL_ATTRIBUTES: &'static [&'static str] = &["len", "is_empty", "get", "to_vec"];

    fn object(&self) -> &ObjectWrapper {
        &self.object
    }
}

/// Remote unordered collection
#[derive(Debug)]
pub struct RemoteSet {
    object: ObjectWrapper,
}

impl RemoteSet {
    pub fn wrap(handle: RemoteHandle) -> Result<Self> {
        Ok(Self {
            object: ObjectWrapper::wrap(handle)?,
        })
    }

    pub fn len(&self) -> Result<usize> {
        self.object.call("size", &[])?.into_usize()
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    pub fn contains(&self, item: impl Into<RemoteValue>) -> Result<bool> {
        match self.object.call("contains", &[item.into()])? {
            RemoteValue::Bool(b) => Ok(b),
            other => Err(crate::error::BridgeError::type_mismatch("a bool", other.type_name())),
        }
    }

    /// Copy the elements to the host, in engine iteration order
    pub fn to_vec(&self) -> Result<Vec<RemoteValue>> {
        self.object.call("toArray", &[])?.into_list()
    }
}

impl Wrapper for RemoteSet {
    const LOCAL_ATTRIBUTES: &'static [&'static str] = &["len", "is_empty", "contains", "to_vec"];

    fn object(&self) -> &ObjectWrapper {
        &self.object
    }
}
