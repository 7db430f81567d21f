use std::fmt::{Display, Formatter};
use ndarray::Zip;
use num_traits::Float;
use crate::axes::AxisType;
use crate::dataset::{Dataset, DatasetError};
use crate::dtype::DType;
use crate::numeric_tensor::{NumericTensor, NumericTensorError};

#[derive(Debug, thiserror::Error)]
pub enum CombineError {
    #[error("input datasets must have the same number of dimensions, got {0} and {1}")]
    ShapeMismatch(usize, usize),
    #[error("dtype {0} cannot take part in a numeric combination")]
    UnsupportedDType(DType),
    #[error(transparent)]
    Tensor(#[from] NumericTensorError),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Pure per-element binary operations over the f64 accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BinaryScalarOp {
    Add,
    Sub,
    Mul,
    Div,
    Min,
    Max,
}

impl BinaryScalarOp {
    pub fn apply<F: Float>(&self, a: F, b: F) -> F {
        match self {
            BinaryScalarOp::Add => a + b,
            BinaryScalarOp::Sub => a - b,
            BinaryScalarOp::Mul => a * b,
            BinaryScalarOp::Div => a / b,
            BinaryScalarOp::Min => a.min(b),
            BinaryScalarOp::Max => a.max(b),
        }
    }
}

impl Display for BinaryScalarOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Per-axis minimum of the two extents.
pub fn output_extents(a: &Dataset, b: &Dataset) -> Vec<usize> {
    a.shape()
        .iter()
        .zip(b.shape())
        .map(|(&x, &y)| x.min(y))
        .collect()
}

/// Axis label for each output axis: the first input's where it has one,
/// otherwise the second input's.
pub fn output_axes(a: &Dataset, b: &Dataset) -> Vec<AxisType> {
    let rank = output_extents(a, b).len();
    (0..rank)
        .map(|i| {
            a.axis_type(i)
                .or_else(|| b.axis_type(i))
                .cloned()
                .unwrap_or(AxisType::Unknown)
        })
        .collect()
}

/// Combine two datasets element-wise over the intersection of their bounding
/// boxes.
///
/// Both inputs must have the same rank and real numeric element types, which
/// may differ from each other. Each input element is widened to f64, `op` is
/// applied per coordinate, and the result is narrowed to `out_dtype`. The
/// output is named "result" and spans the per-axis minimum of the two input
/// extents, with labels taken per [`output_axes`].
pub fn combine(a: &Dataset, b: &Dataset, op: BinaryScalarOp, out_dtype: DType) -> Result<Dataset, CombineError> {
    combine_impl(a, b, op, out_dtype, false)
}

/// Same as [`combine`], evaluated with a parallel iterator. The per-element
/// operation is pure, so the output is bit-identical to the sequential form.
pub fn combine_parallel(a: &Dataset, b: &Dataset, op: BinaryScalarOp, out_dtype: DType) -> Result<Dataset, CombineError> {
    combine_impl(a, b, op, out_dtype, true)
}

fn combine_impl(a: &Dataset, b: &Dataset, op: BinaryScalarOp, out_dtype: DType, parallel: bool) -> Result<Dataset, CombineError> {
    if a.rank() != b.rank() {
        return Err(CombineError::ShapeMismatch(a.rank(), b.rank()));
    }
    for dtype in [a.dtype(), b.dtype(), out_dtype] {
        if !dtype.is_real_numeric() {
            return Err(CombineError::UnsupportedDType(dtype));
        }
    }
    let extents = output_extents(a, b);
    log::debug!(
        "combine {op}: {:?}{:?} with {:?}{:?} -> {out_dtype}{extents:?}",
        a.dtype(), a.shape(), b.dtype(), b.shape()
    );
    let lhs = a.tensor().slice_leading(&extents)?.to_f64_array()?;
    let rhs = b.tensor().slice_leading(&extents)?.to_f64_array()?;
    let zip = Zip::from(&lhs).and(&rhs);
    let out = if parallel {
        zip.par_map_collect(|&x, &y| op.apply(x, y))
    } else {
        zip.map_collect(|&x, &y| op.apply(x, y))
    };
    let tensor = NumericTensor::from_f64_array(out_dtype, out)?;
    let axes = output_axes(a, b);
    Ok(Dataset::new("result", tensor, axes)?)
}
