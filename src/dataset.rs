use crate::axes::{default_axes, AxisType};
use crate::combine::{combine, BinaryScalarOp, CombineError};
use crate::dtype::DType;
use crate::numeric_scalar::NumericScalar;
use crate::numeric_tensor::{NumericTensor, NumericTensorError};

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("{axes} axis labels supplied for a rank {rank} tensor")]
    AxisCountMismatch { axes: usize, rank: usize },
    #[error("axis {0} has extent 0")]
    ZeroExtent(usize),
    #[error(transparent)]
    Tensor(#[from] NumericTensorError),
}

/// A numeric tensor together with a name and one semantic label per axis.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Dataset {
    name: String,
    tensor: NumericTensor,
    axes: Vec<AxisType>,
}

impl Dataset {
    /// Wrap `tensor` with the given axis labels. There must be exactly one
    /// label per axis and every extent must be positive.
    pub fn new(name: impl Into<String>, tensor: NumericTensor, axes: Vec<AxisType>) -> Result<Self, DatasetError> {
        if axes.len() != tensor.rank() {
            return Err(DatasetError::AxisCountMismatch {
                axes: axes.len(),
                rank: tensor.rank(),
            });
        }
        if let Some(axis) = tensor.shape().iter().position(|&e| e == 0) {
            return Err(DatasetError::ZeroExtent(axis));
        }
        Ok(Self {
            name: name.into(),
            tensor,
            axes,
        })
    }

    /// Wrap `tensor` with the conventional labels for its rank.
    pub fn with_default_axes(name: impl Into<String>, tensor: NumericTensor) -> Result<Self, DatasetError> {
        let axes = default_axes(tensor.rank());
        Self::new(name, tensor, axes)
    }

    /// An all-zero dataset of the given element type and extents.
    pub fn zeros(name: impl Into<String>, dtype: DType, extents: &[usize], axes: Vec<AxisType>) -> Result<Self, DatasetError> {
        Self::new(name, NumericTensor::zeros(dtype, extents), axes)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tensor(&self) -> &NumericTensor {
        &self.tensor
    }

    pub fn axes(&self) -> &[AxisType] {
        &self.axes
    }

    pub fn rank(&self) -> usize {
        self.tensor.rank()
    }

    pub fn shape(&self) -> &[usize] {
        self.tensor.shape()
    }

    pub fn dtype(&self) -> DType {
        self.tensor.dtype()
    }

    pub fn extent(&self, axis: usize) -> Option<usize> {
        self.tensor.shape().get(axis).copied()
    }

    pub fn axis_type(&self, axis: usize) -> Option<&AxisType> {
        self.axes.get(axis)
    }

    pub fn get(&self, coord: &[usize]) -> Result<NumericScalar, NumericTensorError> {
        self.tensor.get(coord).ok_or_else(|| NumericTensorError::OutOfRange {
            coord: coord.to_vec(),
            extents: self.tensor.shape().to_vec(),
        })
    }

    pub fn set(&mut self, coord: &[usize], value: NumericScalar) -> Result<(), NumericTensorError> {
        self.tensor.set(coord, value)
    }

    /// Element-wise sum of two datasets of equal rank, accumulated in f64 and
    /// written out as F32. The result covers the per-axis minimum of the two
    /// extents.
    pub fn add(&self, other: &Dataset) -> Result<Dataset, CombineError> {
        combine(self, other, BinaryScalarOp::Add, DType::F32)
    }
}
