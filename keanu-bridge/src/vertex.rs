//! Vertex wrapper and operator sugar.
//!
//! Arithmetic on `&Vertex` builds new vertices in the engine graph, one
//! remote call per operator:
//!
//! ```text
//! &a + &b      a.plus(b)           -&a        a.unaryMinus()
//! &a * 2.0     a.times(2.0)        a.pow(&b)  a.pow(b)
//! ```
//!
//! The operators return `Result<Vertex>` because each one is a remote call.

use crate::context::{classes, KeanuContext};
use crate::error::{BridgeError, Result};
use crate::label::VertexLabel;
use crate::remote::{RemoteHandle, RemoteValue};
use crate::tensor::NdArray;
use crate::wrapper::{ObjectWrapper, Wrapper};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Right-hand side of a vertex operation
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    Vertex(&'a Vertex),
    Scalar(f64),
}

impl<'a> From<&'a Vertex> for Operand<'a> {
    fn from(v: &'a Vertex) -> Self {
        Operand::Vertex(v)
    }
}

impl From<f64> for Operand<'_> {
    fn from(x: f64) -> Self {
        Operand::Scalar(x)
    }
}

impl Operand<'_> {
    fn to_remote(self) -> RemoteValue {
        match self {
            Operand::Vertex(v) => RemoteValue::Object(v.unwrap().clone()),
            Operand::Scalar(x) => RemoteValue::Double(x),
        }
    }
}

/// A node of the engine's computation graph
#[derive(Debug)]
pub struct Vertex {
    object: ObjectWrapper,
}

impl Vertex {
    pub fn wrap(handle: RemoteHandle) -> Result<Self> {
        Ok(Self {
            object: ObjectWrapper::wrap(handle)?,
        })
    }

    /// Call an engine vertex constructor, then attach `label` if given
    pub fn construct(
        ctx: &KeanuContext,
        class: &str,
        args: &[RemoteValue],
        label: Option<&str>,
    ) -> Result<Self> {
        let vertex = Self::wrap(ctx.construct(class, args)?)?;
        if let Some(label) = label {
            vertex.set_label(&VertexLabel::new(ctx, label, &[])?)?;
        }
        Ok(vertex)
    }

    /// Constant double vertex holding `value`
    pub fn constant(ctx: &KeanuContext, value: &NdArray) -> Result<Self> {
        let tensor = value.to_remote(ctx)?;
        Self::construct(ctx, classes::CONSTANT_DOUBLE_VERTEX, &[tensor.into()], None)
    }

    fn apply(&self, method: &str, args: &[RemoteValue]) -> Result<Vertex> {
        Vertex::wrap(self.object.call_object(method, args)?)
    }

    fn binary<'a>(&self, method: &str, rhs: impl Into<Operand<'a>>) -> Result<Vertex> {
        self.apply(method, &[rhs.into().to_remote()])
    }

    /// Current value, read from the engine
    pub fn get_value(&self) -> Result<NdArray> {
        NdArray::from_remote(&self.object.call_object("getValue", &[])?)
    }

    pub fn get_id(&self) -> Result<RemoteValue> {
        self.object.call("getId", &[])
    }

    pub fn get_label(&self) -> Result<Option<VertexLabel>> {
        match self.object.call("getLabel", &[])? {
            RemoteValue::Null => Ok(None),
            other => VertexLabel::wrap(other.into_handle()?).map(Some),
        }
    }

    pub fn set_label(&self, label: &VertexLabel) -> Result<()> {
        self.object.call("setLabel", &[label.unwrap().into()])?;
        Ok(())
    }

    pub fn observe(&self, value: impl Into<RemoteValue>) -> Result<()> {
        self.object.call("observe", &[value.into()])?;
        Ok(())
    }

    pub fn plus<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Vertex> {
        self.binary("plus", rhs)
    }

    pub fn minus<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Vertex> {
        self.binary("minus", rhs)
    }

    pub fn times<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Vertex> {
        self.binary("times", rhs)
    }

    pub fn div<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Vertex> {
        self.binary("div", rhs)
    }

    pub fn pow<'a>(&self, exponent: impl Into<Operand<'a>>) -> Result<Vertex> {
        self.binary("pow", exponent)
    }

    pub fn unary_minus(&self) -> Result<Vertex> {
        self.apply("unaryMinus", &[])
    }

    pub fn abs(&self) -> Result<Vertex> {
        self.apply("abs", &[])
    }

    pub fn floor(&self) -> Result<Vertex> {
        self.apply("floor", &[])
    }

    pub fn ceil(&self) -> Result<Vertex> {
        self.apply("ceil", &[])
    }

    /// Round half away from zero. Only `ndigits == 0` is supported.
    pub fn round(&self, ndigits: i32) -> Result<Vertex> {
        if ndigits != 0 {
            return Err(BridgeError::UnsupportedOperation(
                "Keanu only supports rounding to 0 digits".to_string(),
            ));
        }
        self.apply("round", &[])
    }

    pub fn greater_than<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Vertex> {
        self.binary("greaterThan", rhs)
    }

    pub fn greater_than_or_equal<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Vertex> {
        self.binary("greaterThanOrEqual", rhs)
    }

    pub fn less_than<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Vertex> {
        self.binary("lessThan", rhs)
    }

    pub fn less_than_or_equal<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Vertex> {
        self.binary("lessThanOrEqual", rhs)
    }

    pub fn equal_to<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Vertex> {
        self.binary("equalTo", rhs)
    }

    pub fn not_equal_to<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Vertex> {
        self.binary("notEqualTo", rhs)
    }
}

impl Wrapper for Vertex {
    const LOCAL_ATTRIBUTES: &'static [&'static str] = &[
        "get_value",
        "get_id",
        "get_label",
        "set_label",
        "observe",
        "plus",
        "minus",
        "times",
        "div",
        "pow",
        "unary_minus",
        "abs",
        "floor",
        "ceil",
        "round",
        "greater_than",
        "greater_than_or_equal",
        "less_than",
        "less_than_or_equal",
        "equal_to",
        "not_equal_to",
    ];

    fn object(&self) -> &ObjectWrapper {
        &self.object
    }
}

impl<'a, R: Into<Operand<'a>>> Add<R> for &Vertex {
    type Output = Result<Vertex>;

    fn add(self, rhs: R) -> Self::Output {
        self.plus(rhs)
    }
}

impl<'a, R: Into<Operand<'a>>> Sub<R> for &Vertex {
    type Output = Result<Vertex>;

    fn sub(self, rhs: R) -> Self::Output {
        self.minus(rhs)
    }
}

impl<'a, R: Into<Operand<'a>>> Mul<R> for &Vertex {
    type Output = Result<Vertex>;

    fn mul(self, rhs: R) -> Self::Output {
        self.times(rhs)
    }
}

impl<'a, R: Into<Operand<'a>>> Div<R> for &Vertex {
    type Output = Result<Vertex>;

    fn div(self, rhs: R) -> Self::Output {
        Vertex::div(self, rhs)
    }
}

impl Add<&Vertex> for f64 {
    type Output = Result<Vertex>;

    fn add(self, rhs: &Vertex) -> Self::Output {
        rhs.plus(self)
    }
}

/// `x - v` is built as `-v + x`
impl Sub<&Vertex> for f64 {
    type Output = Result<Vertex>;

    fn sub(self, rhs: &Vertex) -> Self::Output {
        rhs.unary_minus()?.plus(self)
    }
}

impl Mul<&Vertex> for f64 {
    type Output = Result<Vertex>;

    fn mul(self, rhs: &Vertex) -> Self::Output {
        rhs.times(self)
    }
}

impl Neg for &Vertex {
    type Output = Result<Vertex>;

    fn neg(self) -> Self::Output {
        self.unary_minus()
    }
}
