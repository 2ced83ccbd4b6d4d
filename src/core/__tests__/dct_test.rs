use approx::assert_abs_diff_eq;
use ndarray::{arr1, arr2, ArrayD, IxDyn};
use rand::Rng;

use crate::core::dct::DctCodec;
use crate::core::error::CodecError;

fn max_abs_diff(a: &ArrayD<f64>, b: &ArrayD<f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

#[test]
fn test_dct_1d_golden() {
    // scipy.fft.dct([1,2,3,4], norm="ortho") 기준값
    let mut codec = DctCodec::new();
    let input = arr1(&[1.0, 2.0, 3.0, 4.0]).into_dyn();
    let coeffs = codec.forward(&input).unwrap();
    let expected = [5.0, -2.230442497387663, 0.0, -0.158512667781108];
    for (&value, &golden) in coeffs.iter().zip(expected.iter()) {
        assert_abs_diff_eq!(value, golden, epsilon = 1e-9);
    }
}

#[test]
fn test_single_point_is_identity() {
    let mut codec = DctCodec::new();
    let input = arr1(&[42.0]).into_dyn();
    let coeffs = codec.forward(&input).unwrap();
    assert_abs_diff_eq!(coeffs[[0]], 42.0, epsilon = 1e-12);
    let back = codec.inverse(&coeffs).unwrap();
    assert_abs_diff_eq!(back[[0]], 42.0, epsilon = 1e-12);
}

#[test]
fn 이차원_왕복_테스트() {
    let mut codec = DctCodec::new();
    let mut rng = rand::thread_rng();
    let input = ArrayD::from_shape_fn(IxDyn(&[8, 8]), |_| rng.gen_range(-1.0..1.0));
    let coeffs = codec.forward(&input).unwrap();
    let back = codec.inverse(&coeffs).unwrap();
    assert!(
        max_abs_diff(&input, &back) < 1e-9,
        "왕복 오차가 허용치를 벗어남"
    );
}

#[test]
fn test_3d_roundtrip() {
    let mut codec = DctCodec::new();
    let mut rng = rand::thread_rng();
    let input = ArrayD::from_shape_fn(IxDyn(&[4, 3, 2]), |_| rng.gen_range(-10.0..10.0));
    let coeffs = codec.forward(&input).unwrap();
    let back = codec.inverse(&coeffs).unwrap();
    assert!(max_abs_diff(&input, &back) < 1e-9);
}

#[test]
fn test_degenerate_axis_roundtrip() {
    // 길이 1 축이 섞여도 왕복이 성립해야 함
    let mut codec = DctCodec::new();
    let input = arr2(&[[1.0, 2.0, 3.0, 4.0, 5.0]]).into_dyn();
    let coeffs = codec.forward(&input).unwrap();
    let back = codec.inverse(&coeffs).unwrap();
    assert!(max_abs_diff(&input, &back) < 1e-9);
}

#[test]
fn test_energy_preserved() {
    // ortho 정규화는 유니터리이므로 계수 에너지가 입력 에너지와 같다
    let mut codec = DctCodec::new();
    let mut rng = rand::thread_rng();
    let input = ArrayD::from_shape_fn(IxDyn(&[6, 6]), |_| rng.gen_range(-1.0..1.0));
    let coeffs = codec.forward(&input).unwrap();
    let energy_in: f64 = input.iter().map(|v| v * v).sum();
    let energy_out: f64 = coeffs.iter().map(|v| v * v).sum();
    assert_abs_diff_eq!(energy_in, energy_out, epsilon = 1e-9);
}

#[test]
fn test_zero_length_axis_rejected() {
    let mut codec = DctCodec::new();
    let input = ArrayD::<f64>::zeros(IxDyn(&[0, 4]));
    assert!(matches!(
        codec.forward(&input),
        Err(CodecError::InvalidShape(_))
    ));
}

#[test]
fn test_non_finite_rejected() {
    let mut codec = DctCodec::new();
    let mut input = ArrayD::<f64>::zeros(IxDyn(&[2, 2]));
    input[[0, 1]] = f64::NAN;
    assert!(matches!(
        codec.forward(&input),
        Err(CodecError::InvalidInput(_))
    ));
}
