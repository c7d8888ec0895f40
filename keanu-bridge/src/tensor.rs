//! Tensor conversion.
//!
//! Engine tensors cross the bridge as a flat buffer plus a shape. On the
//! host side they become an [`NdArray`]: row-major `f64` data with the
//! engine's shape. Rank 0, 1 and 2 arrays can be viewed as nalgebra
//! matrices.

use crate::context::{classes, KeanuContext};
use crate::error::{BridgeError, Result};
use crate::remote::{RemoteHandle, RemoteValue};
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

/// Host-side n-dimensional array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawNdArray")]
pub struct NdArray {
    data: Vec<f64>,
    shape: Vec<usize>,
}

/// Unchecked serialized form, validated through [`NdArray::new`]
#[derive(Deserialize)]
struct RawNdArray {
    data: Vec<f64>,
    shape: Vec<usize>,
}

impl TryFrom<RawNdArray> for NdArray {
    type Error = BridgeError;

    fn try_from(raw: RawNdArray) -> Result<Self> {
        Self::new(raw.data, raw.shape)
    }
}

impl NdArray {
    /// Reshape flat row-major `data` to `shape`.
    ///
    /// An empty shape is a scalar and holds exactly one element.
    pub fn new(data: Vec<f64>, shape: Vec<usize>) -> Result<Self> {
        let expected = shape
            .iter()
            .try_fold(1usize, |n, &dim| n.checked_mul(dim))
            .ok_or_else(|| {
                BridgeError::type_mismatch(
                    "a shape whose element count fits in memory",
                    format!("{:?}", shape),
                )
            })?;
        if expected != data.len() {
            return Err(BridgeError::ShapeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self { data, shape })
    }

    pub fn scalar(value: f64) -> Self {
        Self {
            data: vec![value],
            shape: Vec::new(),
        }
    }

    /// One-dimensional array
    pub fn vector(data: Vec<f64>) -> Self {
        let shape = vec![data.len()];
        Self { data, shape }
    }

    /// Read an engine tensor: `asFlatArray` then `getShape`.
    pub fn from_remote(tensor: &RemoteHandle) -> Result<Self> {
        let data = tensor
            .call("asFlatArray", &[])?
            .into_list()?
            .into_iter()
            .map(RemoteValue::into_f64)
            .collect::<Result<Vec<f64>>>()?;

        let shape = tensor
            .call("getShape", &[])?
            .into_list()?
            .into_iter()
            .map(RemoteValue::into_usize)
            .collect::<Result<Vec<usize>>>()?;

        Self::new(data, shape)
    }

    /// Create the engine-side `DoubleTensor` holding this array
    pub fn to_remote(&self, ctx: &KeanuContext) -> Result<RemoteHandle> {
        let shape = self
            .shape
            .iter()
            .map(|&dim| RemoteValue::try_from(dim))
            .collect::<Result<Vec<_>>>()?;

        let class = ctx.class_ref(classes::DOUBLE_TENSOR)?;
        class.call_object("create", &[self.data.clone().into(), RemoteValue::List(shape)])
    }

    /// Flat row-major data
    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    #[inline]
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at a multi-index, `None` when out of bounds
    pub fn get(&self, index: &[usize]) -> Option<f64> {
        if index.len() != self.shape.len() {
            return None;
        }

        let mut offset = 0;
        for (&i, &dim) in index.iter().zip(self.shape.iter()) {
            if i >= dim {
                return None;
            }
            offset = offset * dim + i;
        }

        self.data.get(offset).copied()
    }

    /// Same data under a new shape
    pub fn reshape(self, shape: Vec<usize>) -> Result<Self> {
        Self::new(self.data, shape)
    }

    /// Matrix view: scalars are 1×1, vectors are columns
    pub fn to_matrix(&self) -> Result<DMatrix<f64>> {
        match *self.shape.as_slice() {
            [] => self
                .data
                .first()
                .map(|&x| DMatrix::from_element(1, 1, x))
                .ok_or(BridgeError::ShapeMismatch { expected: 1, got: 0 }),
            [n] => Ok(DMatrix::from_column_slice(n, 1, &self.data)),
            [rows, cols] => Ok(DMatrix::from_row_slice(rows, cols, &self.data)),
            _ => Err(BridgeError::UnsupportedOperation(format!(
                "cannot view a rank {} array as a matrix",
                self.rank()
            ))),
        }
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }
}

impl From<DMatrix<f64>> for NdArray {
    fn from(matrix: DMatrix<f64>) -> Self {
        let shape = vec![matrix.nrows(), matrix.ncols()];
        // nalgebra stores column-major
        let data = matrix.transpose().as_slice().to_vec();
        Self { data, shape }
    }
}
