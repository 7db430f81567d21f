use half::{bf16, f16};
use serde::{Deserialize, Serialize};
use crate::dtype::DType;

/// A single element of any supported dtype.
///
/// Scalars read out of a tensor keep their native representation; arithmetic
/// on them goes through the f64 accumulator (`to_f64` / `from_f64`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NumericScalar {
    F64(f64),
    F32(f32),
    BF16(bf16),
    F16(f16),
    U64(u64),
    I64(i64),
    U32(u32),
    I32(i32),
    U16(u16),
    I16(i16),
    U8(u8),
    I8(i8),
    BOOL(bool)
}

impl NumericScalar {
    pub fn dtype(&self) -> DType {
        match self {
            NumericScalar::F64(_) => DType::F64,
            NumericScalar::F32(_) => DType::F32,
            NumericScalar::BF16(_) => DType::BF16,
            NumericScalar::F16(_) => DType::F16,
            NumericScalar::U64(_) => DType::U64,
            NumericScalar::I64(_) => DType::I64,
            NumericScalar::U32(_) => DType::U32,
            NumericScalar::I32(_) => DType::I32,
            NumericScalar::U16(_) => DType::U16,
            NumericScalar::I16(_) => DType::I16,
            NumericScalar::U8(_) => DType::U8,
            NumericScalar::I8(_) => DType::I8,
            NumericScalar::BOOL(_) => DType::BOOL
        }
    }

    pub fn zero_of(dtype: DType) -> Self {
        match dtype {
            DType::F64 => NumericScalar::F64(0.0),
            DType::F32 => NumericScalar::F32(0.0),
            DType::BF16 => NumericScalar::BF16(bf16::ZERO),
            DType::F16 => NumericScalar::F16(f16::ZERO),
            DType::U64 => NumericScalar::U64(0),
            DType::I64 => NumericScalar::I64(0),
            DType::U32 => NumericScalar::U32(0),
            DType::I32 => NumericScalar::I32(0),
            DType::U16 => NumericScalar::U16(0),
            DType::I16 => NumericScalar::I16(0),
            DType::U8 => NumericScalar::U8(0),
            DType::I8 => NumericScalar::I8(0),
            DType::BOOL => NumericScalar::BOOL(false)
        }
    }

    /// Widen to the f64 accumulator. Sign and magnitude are preserved for
    /// every real-numeric dtype; BOOL has no real value and yields `None`.
    pub fn to_f64(&self) -> Option<f64> {
        Some(match self {
            NumericScalar::F64(x) => *x,
            NumericScalar::F32(x) => *x as f64,
            NumericScalar::BF16(x) => x.to_f64(),
            NumericScalar::F16(x) => x.to_f64(),
            NumericScalar::U64(x) => *x as f64,
            NumericScalar::I64(x) => *x as f64,
            NumericScalar::U32(x) => *x as f64,
            NumericScalar::I32(x) => *x as f64,
            NumericScalar::U16(x) => *x as f64,
            NumericScalar::I16(x) => *x as f64,
            NumericScalar::U8(x) => *x as f64,
            NumericScalar::I8(x) => *x as f64,
            NumericScalar::BOOL(_) => return None
        })
    }

    /// Narrow an accumulator value to `dtype`. Lossy for dtypes narrower than
    /// f64 (float-to-int casts saturate). `None` for BOOL.
    pub fn from_f64(dtype: DType, v: f64) -> Option<Self> {
        Some(match dtype {
            DType::F64 => NumericScalar::F64(v),
            DType::F32 => NumericScalar::F32(v as f32),
            DType::BF16 => NumericScalar::BF16(bf16::from_f64(v)),
            DType::F16 => NumericScalar::F16(f16::from_f64(v)),
            DType::U64 => NumericScalar::U64(v as u64),
            DType::I64 => NumericScalar::I64(v as i64),
            DType::U32 => NumericScalar::U32(v as u32),
            DType::I32 => NumericScalar::I32(v as i32),
            DType::U16 => NumericScalar::U16(v as u16),
            DType::I16 => NumericScalar::I16(v as i16),
            DType::U8 => NumericScalar::U8(v as u8),
            DType::I8 => NumericScalar::I8(v as i8),
            DType::BOOL => return None
        })
    }
}
