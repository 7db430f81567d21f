use crate::combine_tests::{dataset, test_eq_exact, test_eq_f32, Kernel};
use ndcombine::{AxisType, BinaryScalarOp, DType, Dataset, NumericScalar, NumericTensor};

pub fn test_clip_to_smaller_rows(kernel: Kernel) {
    let a = dataset(vec![1.0f32, 2.0, 3.0, 4.0], &[2, 2]);
    let b = dataset(vec![10.0f32, 20.0, 30.0, 40.0, 50.0, 60.0], &[3, 2]);
    let result = kernel.combine(&a, &b, BinaryScalarOp::Add, DType::F32).unwrap();
    assert_eq!(result.shape(), &[2, 2]);
    let correct = dataset(vec![11.0f32, 22.0, 33.0, 44.0], &[2, 2]);
    test_eq_f32(&result, &correct);
}

pub fn test_clip_each_axis_3d(kernel: Kernel) {
    let a = dataset((0..24).map(|v| v as f32).collect(), &[2, 3, 4]);
    let b = dataset(vec![1.0f32; 30], &[3, 2, 5]);
    let result = kernel.combine(&a, &b, BinaryScalarOp::Add, DType::F32).unwrap();
    assert_eq!(result.shape(), &[2, 2, 4]);
    // a's value at [i, j, k] is i*12 + j*4 + k, offset by 1 everywhere
    for i in 0..2 {
        for j in 0..2 {
            for k in 0..4 {
                let expected = (i * 12 + j * 4 + k) as f64 + 1.0;
                let got = result.get(&[i, j, k]).unwrap().to_f64().unwrap();
                assert_eq!(got, expected);
            }
        }
    }
}

pub fn test_self_shape_idempotent(kernel: Kernel) {
    let a = dataset(vec![0.0f32, 1.0, 2.0, 3.0, 4.0, 5.0], &[3, 2]);
    let result = kernel.combine(&a, &a, BinaryScalarOp::Min, DType::F32).unwrap();
    assert_eq!(result.shape(), a.shape());
    assert_eq!(result.axes(), a.axes());
    test_eq_exact(&result, &a);
}

pub fn test_axis_labels_from_first_input(kernel: Kernel) {
    let a = Dataset::new(
        "left",
        NumericTensor::from_vec_shape(vec![1.0f32, 2.0, 3.0, 4.0], &[2, 2]).unwrap(),
        vec![AxisType::Time, AxisType::Custom("wavelength".to_string())],
    )
    .unwrap();
    let b = dataset(vec![1.0f32, 2.0, 3.0, 4.0], &[2, 2]);
    let result = kernel.combine(&a, &b, BinaryScalarOp::Add, DType::F32).unwrap();
    assert_eq!(result.name(), "result");
    assert_eq!(result.axes(), a.axes());
}

pub fn test_scalar_rank0(kernel: Kernel) {
    let a = Dataset::with_default_axes("a", NumericTensor::from_vec_shape(vec![5.0f32], &[]).unwrap()).unwrap();
    let b = Dataset::with_default_axes("b", NumericTensor::from_vec_shape(vec![7.0f32], &[]).unwrap()).unwrap();
    let result = kernel.combine(&a, &b, BinaryScalarOp::Add, DType::F32).unwrap();
    assert_eq!(result.rank(), 0);
    assert_eq!(result.get(&[]).unwrap(), NumericScalar::F32(12.0));
}
