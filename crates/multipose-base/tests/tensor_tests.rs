use multipose_base::{Tensor, TensorError};

#[test]
fn test_tensor_new_valid() {
    let tensor = Tensor::new(vec![1, 2, 3], vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    assert_eq!(tensor.shape, vec![1, 2, 3]);
    assert_eq!(tensor.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn test_tensor_new_shape_mismatch() {
    let result = Tensor::new(vec![1, 6, 56], vec![0.0f32; 56]);
    assert!(matches!(
        result,
        Err(TensorError::ShapeMismatch { expected: 336, got: 56 })
    ));
}

#[test]
fn test_tensor_new_overflow() {
    let result = Tensor::<f32>::new(vec![usize::MAX, 2], vec![]);
    assert!(matches!(result, Err(TensorError::ShapeOverflow)));
}

#[test]
fn test_tensor_zeros() {
    let tensor = Tensor::<f32>::zeros(vec![1, 2, 56]).unwrap();
    assert_eq!(tensor.len(), 112);
    assert!(tensor.data.iter().all(|&v| v == 0.0));
}

#[test]
fn test_tensor_dims3() {
    let tensor = Tensor::<f32>::zeros(vec![1, 6, 56]).unwrap();
    assert_eq!(tensor.ndim(), 3);
    assert_eq!(tensor.dims3(), Ok((1, 6, 56)));
}

#[test]
fn test_tensor_dims3_wrong_rank() {
    let tensor = Tensor::<f32>::zeros(vec![6, 56]).unwrap();
    assert_eq!(
        tensor.dims3(),
        Err(TensorError::RankMismatch { expected: 3, got: 2 })
    );
}

#[test]
fn test_tensor_is_empty() {
    let empty = Tensor::<f32>::new(vec![1, 0, 56], vec![]).unwrap();
    assert!(empty.is_empty());
    assert_eq!(empty.dims3(), Ok((1, 0, 56)));
}

#[test]
fn test_tensor_error_display() {
    let err = TensorError::ShapeMismatch { expected: 56, got: 10 };
    assert_eq!(err.to_string(), "shape mismatch: expected 56 elements, got 10");
}
