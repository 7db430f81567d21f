use crate::combine_tests::{dataset, Kernel};
use ndcombine::{BinaryScalarOp, CombineError, DType};

pub fn test_rank_mismatch(kernel: Kernel) {
    let a = dataset(vec![1.0f32; 4], &[2, 2]);
    let b = dataset(vec![1.0f32; 8], &[2, 2, 2]);
    let err = kernel.combine(&a, &b, BinaryScalarOp::Add, DType::F32).unwrap_err();
    assert!(matches!(err, CombineError::ShapeMismatch(2, 3)), "{err}");
}

pub fn test_bool_input_rejected(kernel: Kernel) {
    let a = dataset(vec![true, false], &[2]);
    let b = dataset(vec![1.0f32, 2.0], &[2]);
    let err = kernel.combine(&a, &b, BinaryScalarOp::Add, DType::F32).unwrap_err();
    assert!(matches!(err, CombineError::UnsupportedDType(DType::BOOL)), "{err}");
}

pub fn test_bool_output_rejected(kernel: Kernel) {
    let a = dataset(vec![1.0f32, 2.0], &[2]);
    let b = dataset(vec![3.0f32, 4.0], &[2]);
    let err = kernel.combine(&a, &b, BinaryScalarOp::Add, DType::BOOL).unwrap_err();
    assert!(matches!(err, CombineError::UnsupportedDType(DType::BOOL)), "{err}");
}
