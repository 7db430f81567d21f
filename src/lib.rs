//! Bounded element-wise combination of labeled N-dimensional numeric arrays.
//!
//! A [`Dataset`] is a dtype-dispatched [`NumericTensor`] together with a name
//! and one [`AxisType`] label per axis. [`combine`] applies a
//! [`BinaryScalarOp`] to two datasets of equal rank over the intersection of
//! their bounding boxes, widening each element to f64 and narrowing the
//! result to a caller-chosen output dtype.

pub mod axes;
pub mod combine;
pub mod dataset;
pub mod dtype;
pub mod numeric_scalar;
pub mod numeric_tensor;

pub use axes::{default_axes, AxisType};
pub use combine::{combine, combine_parallel, output_axes, output_extents, BinaryScalarOp, CombineError};
pub use dataset::{Dataset, DatasetError};
pub use dtype::{DType, DTypeOfPrimitive};
pub use numeric_scalar::NumericScalar;
pub use numeric_tensor::{NumericTensor, NumericTensorError, NumericTensorType};
