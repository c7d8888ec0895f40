//! The remote object capability.
//!
//! Everything the bridge knows about the engine goes through two traits:
//! [`RemoteObject`] (call a method by name, ask for the runtime class) and
//! [`Gateway`] (construct objects, reach static members, turn host lists
//! into engine collections). The transport behind them is not our concern.

use crate::error::{BridgeError, RemoteError, Result};
use std::fmt;
use std::rc::Rc;

/// An object living inside the engine.
pub trait RemoteObject: fmt::Debug {
    /// Simple runtime class name, e.g. `BayesianNetwork`
    fn class_name(&self) -> std::result::Result<String, RemoteError>;

    /// Invoke an engine method by its camelCase name
    fn invoke(
        &self,
        method: &str,
        args: &[RemoteValue],
    ) -> std::result::Result<RemoteValue, RemoteError>;
}

/// Entry point into the engine runtime.
pub trait Gateway: fmt::Debug {
    /// Call a public constructor of `class` (fully qualified)
    fn construct(
        &self,
        class: &str,
        args: &[RemoteValue],
    ) -> std::result::Result<RemoteHandle, RemoteError>;

    /// Reference to a class object, for static calls
    fn class_ref(&self, class: &str) -> std::result::Result<RemoteHandle, RemoteError>;

    /// Build an engine-side list from host values
    fn to_remote_list(
        &self,
        items: Vec<RemoteValue>,
    ) -> std::result::Result<RemoteHandle, RemoteError>;

    /// Build an engine-side `String[]`
    fn to_remote_string_array(
        &self,
        items: &[String],
    ) -> std::result::Result<RemoteHandle, RemoteError>;
}

/// Shared reference to a [`RemoteObject`].
///
/// Cloning a handle never copies the engine object; two handles are the
/// same object exactly when [`RemoteHandle::same`] says so.
#[derive(Clone)]
pub struct RemoteHandle(Rc<dyn RemoteObject>);

impl RemoteHandle {
    pub fn new<T: RemoteObject + 'static>(object: T) -> Self {
        Self(Rc::new(object))
    }

    pub fn from_rc(object: Rc<dyn RemoteObject>) -> Self {
        Self(object)
    }

    /// Identity comparison
    pub fn same(&self, other: &RemoteHandle) -> bool {
        std::ptr::eq(
            Rc::as_ptr(&self.0) as *const (),
            Rc::as_ptr(&other.0) as *const (),
        )
    }

    /// Runtime class name, one remote call
    pub fn class_name(&self) -> Result<String> {
        Ok(self.0.class_name()?)
    }

    /// Invoke `method` on the engine object
    pub fn call(&self, method: &str, args: &[RemoteValue]) -> Result<RemoteValue> {
        Ok(self.0.invoke(method, args)?)
    }

    /// Invoke `method` and require an object back
    pub fn call_object(&self, method: &str, args: &[RemoteValue]) -> Result<RemoteHandle> {
        self.call(method, args)?.into_handle()
    }

    /// Access the underlying object
    pub fn object(&self) -> &dyn RemoteObject {
        self.0.as_ref()
    }
}

impl PartialEq for RemoteHandle {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl fmt::Debug for RemoteHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

/// A value crossing the bridge in either direction.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteValue {
    Null,
    Bool(bool),
    Int(i64),
    Double(f64),
    Str(String),
    /// Host-side list, not yet converted to an engine collection
    List(Vec<RemoteValue>),
    Object(RemoteHandle),
}

impl RemoteValue {
    /// Short name of the variant, used in type errors
    pub fn type_name(&self) -> &'static str {
        match self {
            RemoteValue::Null => "null",
            RemoteValue::Bool(_) => "bool",
            RemoteValue::Int(_) => "int",
            RemoteValue::Double(_) => "float",
            RemoteValue::Str(_) => "str",
            RemoteValue::List(_) => "list",
            RemoteValue::Object(_) => "remote object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, RemoteValue::Null)
    }

    /// Numeric view; ints are widened and bools map to 0/1
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            RemoteValue::Double(x) => Some(x),
            RemoteValue::Int(i) => Some(i as f64),
            RemoteValue::Bool(b) => Some(if b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            RemoteValue::Int(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            RemoteValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_handle(&self) -> Option<&RemoteHandle> {
        match self {
            RemoteValue::Object(h) => Some(h),
            _ => None,
        }
    }

    pub fn into_handle(self) -> Result<RemoteHandle> {
        match self {
            RemoteValue::Object(h) => Ok(h),
            other => Err(BridgeError::type_mismatch("a remote object", other.type_name())),
        }
    }

    pub fn into_f64(self) -> Result<f64> {
        self.as_f64()
            .ok_or_else(|| BridgeError::type_mismatch("a number", self.type_name()))
    }

    pub fn into_string(self) -> Result<String> {
        match self {
            RemoteValue::Str(s) => Ok(s),
            other => Err(BridgeError::type_mismatch("a string", other.type_name())),
        }
    }

    pub fn into_list(self) -> Result<Vec<RemoteValue>> {
        match self {
            RemoteValue::List(items) => Ok(items),
            other => Err(BridgeError::type_mismatch("a list", other.type_name())),
        }
    }

    /// Non-negative integer, e.g. a collection size or a tensor dimension
    pub fn into_usize(self) -> Result<usize> {
        match self {
            RemoteValue::Int(i) => usize::try_from(i)
                .map_err(|_| BridgeError::type_mismatch("a non-negative integer", i.to_string())),
            other => Err(BridgeError::type_mismatch("an integer", other.type_name())),
        }
    }
}

impl fmt::Display for RemoteValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteValue::Null => write!(f, "null"),
            RemoteValue::Bool(b) => write!(f, "{}", b),
            RemoteValue::Int(i) => write!(f, "{}", i),
            RemoteValue::Double(x) => write!(f, "{}", x),
            RemoteValue::Str(s) => write!(f, "{}", s),
            RemoteValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            RemoteValue::Object(h) => write!(f, "{:?}", h),
        }
    }
}

impl From<bool> for RemoteValue {
    fn from(b: bool) -> Self {
        RemoteValue::Bool(b)
    }
}

impl From<i64> for RemoteValue {
    fn from(i: i64) -> Self {
        RemoteValue::Int(i)
    }
}

impl From<i32> for RemoteValue {
    fn from(i: i32) -> Self {
        RemoteValue::Int(i64::from(i))
    }
}

/// Counts, indices and dimensions; the engine takes signed 64-bit integers
impl TryFrom<usize> for RemoteValue {
    type Error = BridgeError;

    fn try_from(n: usize) -> Result<Self> {
        i64::try_from(n)
            .map(RemoteValue::Int)
            .map_err(|_| BridgeError::type_mismatch("an integer that fits in 64 signed bits", n.to_string()))
    }
}

impl From<f64> for RemoteValue {
    fn from(x: f64) -> Self {
        RemoteValue::Double(x)
    }
}

impl From<&str> for RemoteValue {
    fn from(s: &str) -> Self {
        RemoteValue::Str(s.to_string())
    }
}

impl From<String> for RemoteValue {
    fn from(s: String) -> Self {
        RemoteValue::Str(s)
    }
}

impl From<RemoteHandle> for RemoteValue {
    fn from(h: RemoteHandle) -> Self {
        RemoteValue::Object(h)
    }
}

impl From<&RemoteHandle> for RemoteValue {
    fn from(h: &RemoteHandle) -> Self {
        RemoteValue::Object(h.clone())
    }
}

impl<T: Into<RemoteValue>> From<Vec<T>> for RemoteValue {
    fn from(items: Vec<T>) -> Self {
        RemoteValue::List(items.into_iter().map(Into::into).collect())
    }
}
