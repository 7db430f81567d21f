use ndcombine::{combine, combine_parallel, BinaryScalarOp, CombineError, DType, Dataset, NumericTensor, NumericTensorType};

pub mod errors;
pub mod shape;

/// Which evaluation path of the combine kernel a case runs against.
#[derive(Debug, Clone, Copy)]
pub enum Kernel {
    Sequential,
    Parallel,
}

impl Kernel {
    pub fn combine(&self, a: &Dataset, b: &Dataset, op: BinaryScalarOp, out_dtype: DType) -> Result<Dataset, CombineError> {
        match self {
            Kernel::Sequential => combine(a, b, op, out_dtype),
            Kernel::Parallel => combine_parallel(a, b, op, out_dtype),
        }
    }
}

pub fn dataset<T: NumericTensorType>(v: Vec<T>, shape: &[usize]) -> Dataset {
    Dataset::with_default_axes("in", NumericTensor::from_vec_shape(v, shape).unwrap()).unwrap()
}

fn flatten_f64(d: &Dataset) -> Vec<f64> {
    d.tensor().to_f64_array().unwrap().iter().copied().collect()
}

fn test_eq(value: &Dataset, correct: &Dataset, atol: f64, rtol: f64) {
    assert_eq!(value.dtype(), correct.dtype());
    assert_eq!(value.shape(), correct.shape());
    let value_vec = flatten_f64(value);
    let correct_vec = flatten_f64(correct);
    for i in 0..value_vec.len() {
        let a = value_vec[i];
        let b = correct_vec[i];
        let err = (a - b).abs();
        let limit = atol + rtol * (a.abs().max(b.abs()));
        assert!(err < limit, "{a} != {b}: {err} < {limit}");
    }
}

fn test_eq_f16(value: &Dataset, correct: &Dataset) {
    assert_eq!(value.dtype(), DType::F16);
    test_eq(value, correct, 1e-5, 4e-3);
}

fn test_eq_bf16(value: &Dataset, correct: &Dataset) {
    assert_eq!(value.dtype(), DType::BF16);
    test_eq(value, correct, 1e-5, 1.6e-2);
}

fn test_eq_f32(value: &Dataset, correct: &Dataset) {
    assert_eq!(value.dtype(), DType::F32);
    test_eq(value, correct, 1e-5, 1.3e-6);
}

fn test_eq_exact(value: &Dataset, correct: &Dataset) {
    assert_eq!(value.tensor(), correct.tensor());
}
