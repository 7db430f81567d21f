use half::{bf16, f16};
use ndarray::{ArcArray, ArrayD, IxDyn, Slice};
use crate::dtype::{DType, DTypeOfPrimitive};
use crate::numeric_scalar::NumericScalar;

#[derive(Debug, thiserror::Error)]
pub enum NumericTensorError {
    #[error("Requested dtype {0}, but had dtype {1}")]
    WrongDType(DType, DType),
    #[error("coordinate {coord:?} is outside the extents {extents:?}")]
    OutOfRange { coord: Vec<usize>, extents: Vec<usize> },
    #[error("unsupported operation {0} for dtype {1}")]
    UnsupportedDType(String, DType),
    #[error(transparent)]
    ShapeError(#[from] ndarray::ShapeError)
}

/// An N-dimensional array of one of the supported element types, dispatched
/// by dtype. Storage is shared copy-on-write, so clones and slices are cheap
/// and a tensor handed to a kernel is never mutated behind the caller's back.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum NumericTensor {
    F64(ArcArray<f64, IxDyn>),
    F32(ArcArray<f32, IxDyn>),
    BF16(ArcArray<bf16, IxDyn>),
    F16(ArcArray<f16, IxDyn>),
    U64(ArcArray<u64, IxDyn>),
    I64(ArcArray<i64, IxDyn>),
    U32(ArcArray<u32, IxDyn>),
    I32(ArcArray<i32, IxDyn>),
    U16(ArcArray<u16, IxDyn>),
    I16(ArcArray<i16, IxDyn>),
    U8(ArcArray<u8, IxDyn>),
    I8(ArcArray<i8, IxDyn>),
    BOOL(ArcArray<bool, IxDyn>),
}

impl NumericTensor {
    pub fn rank(&self) -> usize {
        self.shape().len()
    }

    pub fn dtype(&self) -> DType {
        match self {
            NumericTensor::F64(_) => DType::F64,
            NumericTensor::F32(_) => DType::F32,
            NumericTensor::BF16(_) => DType::BF16,
            NumericTensor::F16(_) => DType::F16,
            NumericTensor::U64(_) => DType::U64,
            NumericTensor::I64(_) => DType::I64,
            NumericTensor::U32(_) => DType::U32,
            NumericTensor::I32(_) => DType::I32,
            NumericTensor::U16(_) => DType::U16,
            NumericTensor::I16(_) => DType::I16,
            NumericTensor::U8(_) => DType::U8,
            NumericTensor::I8(_) => DType::I8,
            NumericTensor::BOOL(_) => DType::BOOL
        }
    }

    pub fn shape(&self) -> &[usize] {
        match self {
            NumericTensor::F64(x) => x.shape(),
            NumericTensor::F32(x) => x.shape(),
            NumericTensor::BF16(x) => x.shape(),
            NumericTensor::F16(x) => x.shape(),
            NumericTensor::U64(x) => x.shape(),
            NumericTensor::I64(x) => x.shape(),
            NumericTensor::U32(x) => x.shape(),
            NumericTensor::I32(x) => x.shape(),
            NumericTensor::U16(x) => x.shape(),
            NumericTensor::I16(x) => x.shape(),
            NumericTensor::U8(x) => x.shape(),
            NumericTensor::I8(x) => x.shape(),
            NumericTensor::BOOL(x) => x.shape()
        }
    }

    pub fn num_elements(&self) -> usize {
        self.shape().iter().product()
    }

    /// Bounds-checked random access. `None` when `coord` has the wrong length
    /// or any component is outside the corresponding extent.
    pub fn get(&self, coord: &[usize]) -> Option<NumericScalar> {
        Some(match self {
            NumericTensor::F64(x) => NumericScalar::F64(*x.get(IxDyn(coord))?),
            NumericTensor::F32(x) => NumericScalar::F32(*x.get(IxDyn(coord))?),
            NumericTensor::BF16(x) => NumericScalar::BF16(*x.get(IxDyn(coord))?),
            NumericTensor::F16(x) => NumericScalar::F16(*x.get(IxDyn(coord))?),
            NumericTensor::U64(x) => NumericScalar::U64(*x.get(IxDyn(coord))?),
            NumericTensor::I64(x) => NumericScalar::I64(*x.get(IxDyn(coord))?),
            NumericTensor::U32(x) => NumericScalar::U32(*x.get(IxDyn(coord))?),
            NumericTensor::I32(x) => NumericScalar::I32(*x.get(IxDyn(coord))?),
            NumericTensor::U16(x) => NumericScalar::U16(*x.get(IxDyn(coord))?),
            NumericTensor::I16(x) => NumericScalar::I16(*x.get(IxDyn(coord))?),
            NumericTensor::U8(x) => NumericScalar::U8(*x.get(IxDyn(coord))?),
            NumericTensor::I8(x) => NumericScalar::I8(*x.get(IxDyn(coord))?),
            NumericTensor::BOOL(x) => NumericScalar::BOOL(*x.get(IxDyn(coord))?),
        })
    }

    /// Bounds-checked write. The scalar's dtype must match the tensor's.
    pub fn set(&mut self, coord: &[usize], value: NumericScalar) -> Result<(), NumericTensorError> {
        if value.dtype() != self.dtype() {
            return Err(NumericTensorError::WrongDType(value.dtype(), self.dtype()));
        }
        let extents = self.shape().to_vec();
        let out_of_range = || NumericTensorError::OutOfRange {
            coord: coord.to_vec(),
            extents,
        };
        match (self, value) {
            (NumericTensor::F64(x), NumericScalar::F64(v)) => *x.get_mut(IxDyn(coord)).ok_or_else(out_of_range)? = v,
            (NumericTensor::F32(x), NumericScalar::F32(v)) => *x.get_mut(IxDyn(coord)).ok_or_else(out_of_range)? = v,
            (NumericTensor::BF16(x), NumericScalar::BF16(v)) => *x.get_mut(IxDyn(coord)).ok_or_else(out_of_range)? = v,
            (NumericTensor::F16(x), NumericScalar::F16(v)) => *x.get_mut(IxDyn(coord)).ok_or_else(out_of_range)? = v,
            (NumericTensor::U64(x), NumericScalar::U64(v)) => *x.get_mut(IxDyn(coord)).ok_or_else(out_of_range)? = v,
            (NumericTensor::I64(x), NumericScalar::I64(v)) => *x.get_mut(IxDyn(coord)).ok_or_else(out_of_range)? = v,
            (NumericTensor::U32(x), NumericScalar::U32(v)) => *x.get_mut(IxDyn(coord)).ok_or_else(out_of_range)? = v,
            (NumericTensor::I32(x), NumericScalar::I32(v)) => *x.get_mut(IxDyn(coord)).ok_or_else(out_of_range)? = v,
            (NumericTensor::U16(x), NumericScalar::U16(v)) => *x.get_mut(IxDyn(coord)).ok_or_else(out_of_range)? = v,
            (NumericTensor::I16(x), NumericScalar::I16(v)) => *x.get_mut(IxDyn(coord)).ok_or_else(out_of_range)? = v,
            (NumericTensor::U8(x), NumericScalar::U8(v)) => *x.get_mut(IxDyn(coord)).ok_or_else(out_of_range)? = v,
            (NumericTensor::I8(x), NumericScalar::I8(v)) => *x.get_mut(IxDyn(coord)).ok_or_else(out_of_range)? = v,
            (NumericTensor::BOOL(x), NumericScalar::BOOL(v)) => *x.get_mut(IxDyn(coord)).ok_or_else(out_of_range)? = v,
            // dtype equality was checked above
            (t, v) => return Err(NumericTensorError::WrongDType(v.dtype(), t.dtype())),
        }
        Ok(())
    }

    pub fn zeros(dtype: DType, shape: &[usize]) -> Self {
        match dtype {
            DType::F64 => NumericTensor::F64(ArrayD::from_elem(IxDyn(shape), 0.0f64).into_shared()),
            DType::F32 => NumericTensor::F32(ArrayD::from_elem(IxDyn(shape), 0.0f32).into_shared()),
            DType::BF16 => NumericTensor::BF16(ArrayD::from_elem(IxDyn(shape), bf16::ZERO).into_shared()),
            DType::F16 => NumericTensor::F16(ArrayD::from_elem(IxDyn(shape), f16::ZERO).into_shared()),
            DType::U64 => NumericTensor::U64(ArrayD::from_elem(IxDyn(shape), 0u64).into_shared()),
            DType::I64 => NumericTensor::I64(ArrayD::from_elem(IxDyn(shape), 0i64).into_shared()),
            DType::U32 => NumericTensor::U32(ArrayD::from_elem(IxDyn(shape), 0u32).into_shared()),
            DType::I32 => NumericTensor::I32(ArrayD::from_elem(IxDyn(shape), 0i32).into_shared()),
            DType::U16 => NumericTensor::U16(ArrayD::from_elem(IxDyn(shape), 0u16).into_shared()),
            DType::I16 => NumericTensor::I16(ArrayD::from_elem(IxDyn(shape), 0i16).into_shared()),
            DType::U8 => NumericTensor::U8(ArrayD::from_elem(IxDyn(shape), 0u8).into_shared()),
            DType::I8 => NumericTensor::I8(ArrayD::from_elem(IxDyn(shape), 0i8).into_shared()),
            DType::BOOL => NumericTensor::BOOL(ArrayD::from_elem(IxDyn(shape), false).into_shared()),
        }
    }

    /// Restrict the tensor to the leading box `[0, extents[i])` on every axis.
    ///
    /// `extents` must have one entry per axis, each no larger than the
    /// corresponding extent of this tensor.
    pub fn slice_leading(&self, extents: &[usize]) -> Result<Self, NumericTensorError> {
        let shape = self.shape();
        if extents.len() != shape.len() || extents.iter().zip(shape).any(|(&e, &s)| e > s) {
            return Err(NumericTensorError::OutOfRange {
                coord: extents.to_vec(),
                extents: shape.to_vec(),
            });
        }
        let bound = |ax: ndarray::AxisDescription| Slice::from(0..extents[ax.axis.index()] as isize);
        Ok(match self {
            NumericTensor::F64(x) => NumericTensor::F64(x.slice_each_axis(bound).to_owned().into_shared()),
            NumericTensor::F32(x) => NumericTensor::F32(x.slice_each_axis(bound).to_owned().into_shared()),
            NumericTensor::BF16(x) => NumericTensor::BF16(x.slice_each_axis(bound).to_owned().into_shared()),
            NumericTensor::F16(x) => NumericTensor::F16(x.slice_each_axis(bound).to_owned().into_shared()),
            NumericTensor::U64(x) => NumericTensor::U64(x.slice_each_axis(bound).to_owned().into_shared()),
            NumericTensor::I64(x) => NumericTensor::I64(x.slice_each_axis(bound).to_owned().into_shared()),
            NumericTensor::U32(x) => NumericTensor::U32(x.slice_each_axis(bound).to_owned().into_shared()),
            NumericTensor::I32(x) => NumericTensor::I32(x.slice_each_axis(bound).to_owned().into_shared()),
            NumericTensor::U16(x) => NumericTensor::U16(x.slice_each_axis(bound).to_owned().into_shared()),
            NumericTensor::I16(x) => NumericTensor::I16(x.slice_each_axis(bound).to_owned().into_shared()),
            NumericTensor::U8(x) => NumericTensor::U8(x.slice_each_axis(bound).to_owned().into_shared()),
            NumericTensor::I8(x) => NumericTensor::I8(x.slice_each_axis(bound).to_owned().into_shared()),
            NumericTensor::BOOL(x) => NumericTensor::BOOL(x.slice_each_axis(bound).to_owned().into_shared()),
        })
    }

    /// Widen every element into an f64 working array, the accumulator
    /// representation used by the combine kernels.
    pub fn to_f64_array(&self) -> Result<ArrayD<f64>, NumericTensorError> {
        Ok(match self {
            NumericTensor::F64(x) => x.to_owned(),
            NumericTensor::F32(x) => x.mapv(|v| v as f64),
            NumericTensor::BF16(x) => x.mapv(|v| v.to_f64()),
            NumericTensor::F16(x) => x.mapv(|v| v.to_f64()),
            NumericTensor::U64(x) => x.mapv(|v| v as f64),
            NumericTensor::I64(x) => x.mapv(|v| v as f64),
            NumericTensor::U32(x) => x.mapv(|v| v as f64),
            NumericTensor::I32(x) => x.mapv(|v| v as f64),
            NumericTensor::U16(x) => x.mapv(|v| v as f64),
            NumericTensor::I16(x) => x.mapv(|v| v as f64),
            NumericTensor::U8(x) => x.mapv(|v| v as f64),
            NumericTensor::I8(x) => x.mapv(|v| v as f64),
            NumericTensor::BOOL(_) => {
                return Err(NumericTensorError::UnsupportedDType("to_f64".to_string(), DType::BOOL));
            }
        })
    }

    /// Narrow an f64 working array into a tensor of `dtype`. Float-to-int
    /// narrowing saturates at the target type's bounds.
    pub fn from_f64_array(dtype: DType, array: ArrayD<f64>) -> Result<Self, NumericTensorError> {
        Ok(match dtype {
            DType::F64 => NumericTensor::F64(array.into_shared()),
            DType::F32 => NumericTensor::F32(array.mapv(|v| v as f32).into_shared()),
            DType::BF16 => NumericTensor::BF16(array.mapv(bf16::from_f64).into_shared()),
            DType::F16 => NumericTensor::F16(array.mapv(f16::from_f64).into_shared()),
            DType::U64 => NumericTensor::U64(array.mapv(|v| v as u64).into_shared()),
            DType::I64 => NumericTensor::I64(array.mapv(|v| v as i64).into_shared()),
            DType::U32 => NumericTensor::U32(array.mapv(|v| v as u32).into_shared()),
            DType::I32 => NumericTensor::I32(array.mapv(|v| v as i32).into_shared()),
            DType::U16 => NumericTensor::U16(array.mapv(|v| v as u16).into_shared()),
            DType::I16 => NumericTensor::I16(array.mapv(|v| v as i16).into_shared()),
            DType::U8 => NumericTensor::U8(array.mapv(|v| v as u8).into_shared()),
            DType::I8 => NumericTensor::I8(array.mapv(|v| v as i8).into_shared()),
            DType::BOOL => {
                return Err(NumericTensorError::UnsupportedDType("from_f64".to_string(), DType::BOOL));
            }
        })
    }
}

/// Primitive element types a [`NumericTensor`] can be built from.
pub trait NumericTensorType: Sized + DTypeOfPrimitive + Clone {
    fn numeric_tensor_from_parts(v: Vec<Self>, shape: &[usize]) -> Result<NumericTensor, NumericTensorError>;
    fn numeric_tensor_inner(tensor: &NumericTensor) -> Result<&ArcArray<Self, IxDyn>, NumericTensorError>;
}

macro_rules! impl_numeric_tensor_type {
    ($prim:ty, $variant:ident) => {
        impl NumericTensorType for $prim {
            fn numeric_tensor_from_parts(v: Vec<Self>, shape: &[usize]) -> Result<NumericTensor, NumericTensorError> {
                Ok(NumericTensor::$variant(ArcArray::from_shape_vec(IxDyn(shape), v)?))
            }
            fn numeric_tensor_inner(tensor: &NumericTensor) -> Result<&ArcArray<Self, IxDyn>, NumericTensorError> {
                match tensor {
                    NumericTensor::$variant(x) => Ok(x),
                    _ => Err(NumericTensorError::WrongDType(<$prim as DTypeOfPrimitive>::DTYPE, tensor.dtype()))
                }
            }
        }
    };
}

impl_numeric_tensor_type!(f64, F64);
impl_numeric_tensor_type!(f32, F32);
impl_numeric_tensor_type!(bf16, BF16);
impl_numeric_tensor_type!(f16, F16);
impl_numeric_tensor_type!(u64, U64);
impl_numeric_tensor_type!(i64, I64);
impl_numeric_tensor_type!(u32, U32);
impl_numeric_tensor_type!(i32, I32);
impl_numeric_tensor_type!(u16, U16);
impl_numeric_tensor_type!(i16, I16);
impl_numeric_tensor_type!(u8, U8);
impl_numeric_tensor_type!(i8, I8);
impl_numeric_tensor_type!(bool, BOOL);

impl NumericTensor {
    pub fn from_vec_shape<T: NumericTensorType>(v: Vec<T>, shape: &[usize]) -> Result<Self, NumericTensorError> {
        T::numeric_tensor_from_parts(v, shape)
    }

    pub fn as_inner<T: NumericTensorType>(&self) -> Result<&ArcArray<T, IxDyn>, NumericTensorError> {
        T::numeric_tensor_inner(self)
    }
}
