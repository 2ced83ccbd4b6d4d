use ndarray::Array2;

use crate::core::error::CodecError;
use crate::core::types::WaveletKind;
use crate::core::wavelet::{analyze, synthesize};

/// 복원 검증용 테스트 패턴 (경사 + 파동)
fn test_pattern(rows: usize, cols: usize) -> Array2<f32> {
    Array2::from_shape_fn((rows, cols), |(i, j)| {
        let x = j as f32 / cols as f32;
        let y = i as f32 / rows as f32;
        100.0 * x + 80.0 * y + 40.0 * (6.28318 * x).sin() + 25.0 * (6.28318 * y).cos()
    })
}

fn max_abs_diff(a: &Array2<f32>, b: &Array2<f32>) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f32::max)
}

#[test]
fn test_subband_shapes() {
    let matrix = test_pattern(8, 8);
    let subbands = analyze(&matrix, WaveletKind::Bior13).unwrap();
    assert_eq!(subbands.band_shape(), (4, 4));
    for (_, band) in subbands.bands() {
        assert_eq!(band.dim(), (4, 4));
    }
}

#[test]
fn 분해_복원_왕복_테스트() {
    for (rows, cols) in [(4, 4), (8, 8), (16, 12)] {
        let matrix = test_pattern(rows, cols);
        let subbands = analyze(&matrix, WaveletKind::Bior13).unwrap();
        let back = synthesize(&subbands, WaveletKind::Bior13).unwrap();
        assert_eq!(back.dim(), (rows, cols));
        let err = max_abs_diff(&matrix, &back);
        assert!(err < 1e-2, "{}x{} 복원 오차 초과: {}", rows, cols, err);
    }
}

#[test]
fn test_haar_constant_has_no_detail() {
    let matrix = Array2::from_elem((8, 8), 50.0f32);
    let subbands = analyze(&matrix, WaveletKind::Haar).unwrap();
    for (name, band) in [
        ("LH", &subbands.lh),
        ("HL", &subbands.hl),
        ("HH", &subbands.hh),
    ] {
        for &value in band.iter() {
            assert!(
                value.abs() < 1e-3,
                "상수 입력의 {} 디테일이 0이 아님: {}",
                name,
                value
            );
        }
    }
}

#[test]
fn test_kernel_mismatch_degrades_reconstruction() {
    // 분해와 다른 커널로 합성하면 완전복원 조건이 깨져야 함
    let matrix = test_pattern(16, 16);
    let subbands = analyze(&matrix, WaveletKind::Bior13).unwrap();

    let matched = synthesize(&subbands, WaveletKind::Bior13).unwrap();
    let mismatched = synthesize(&subbands, WaveletKind::Bior31).unwrap();

    let matched_err = max_abs_diff(&matrix, &matched);
    let mismatched_err = max_abs_diff(&matrix, &mismatched);

    assert!(matched_err < 1e-2, "동일 커널 복원 오차 초과: {}", matched_err);
    assert!(
        mismatched_err > (matched_err * 100.0).max(0.5),
        "커널 불일치가 복원을 망가뜨리지 않음: matched={} mismatched={}",
        matched_err,
        mismatched_err
    );
}

#[test]
fn test_odd_dimensions_rejected() {
    for (rows, cols) in [(5, 4), (4, 5), (7, 7)] {
        let matrix = Array2::<f32>::zeros((rows, cols));
        assert!(matches!(
            analyze(&matrix, WaveletKind::Bior13),
            Err(CodecError::InvalidShape(_))
        ));
    }
}

#[test]
fn test_inconsistent_subbands_rejected() {
    let matrix = test_pattern(8, 8);
    let mut subbands = analyze(&matrix, WaveletKind::Bior13).unwrap();
    subbands.lh = Array2::zeros((2, 4));
    assert!(matches!(
        synthesize(&subbands, WaveletKind::Bior13),
        Err(CodecError::ShapeMismatch(_))
    ));
}
