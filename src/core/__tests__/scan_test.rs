use std::collections::HashSet;

use ndarray::Array2;
use rand::Rng;

use crate::core::error::CodecError;
use crate::core::scan::*;

#[test]
fn test_zigzag_golden_4x4() {
    // 1..16 행렬의 지그재그 순서 회귀 테스트
    let matrix =
        Array2::from_shape_vec((4, 4), (1..=16).map(|v| v as f64).collect()).unwrap();
    let sequence = linearize(&matrix).unwrap();
    let expected = [
        1.0, 2.0, 5.0, 9.0, 6.0, 3.0, 4.0, 7.0, 10.0, 13.0, 14.0, 11.0, 8.0, 12.0, 15.0,
        16.0,
    ];
    assert_eq!(sequence, expected);
}

#[test]
fn 전단사_검증_테스트() {
    // 모든 칸을 정확히 한 번씩 방문해야 함
    for n in [1usize, 2, 3, 4, 8] {
        let mut visited = HashSet::new();
        for k in 0..n * n {
            let (i, j) = zig_zag_index(k, n);
            assert!(i < n && j < n, "좌표가 범위를 벗어남: ({},{}) n={}", i, j, n);
            assert!(visited.insert((i, j)), "중복 방문: ({},{}) n={}", i, j, n);
        }
        assert_eq!(visited.len(), n * n);
    }
}

#[test]
fn test_delinearize_roundtrip_exact() {
    let mut rng = rand::thread_rng();
    for n in [1usize, 2, 5, 8] {
        let matrix = Array2::from_shape_fn((n, n), |_| rng.gen::<f64>());
        let sequence = linearize(&matrix).unwrap();
        let back = delinearize(&sequence, n).unwrap();
        // 좌표 사상만 있고 산술이 없으므로 정확히 일치해야 함
        assert_eq!(matrix, back);
    }
}

#[test]
fn test_linearize_integer_elements() {
    let matrix = Array2::from_shape_vec((2, 2), vec![1i32, 2, 3, 4]).unwrap();
    let sequence = linearize(&matrix).unwrap();
    assert_eq!(sequence, vec![1, 2, 3, 4]);
}

#[test]
fn test_non_square_rejected() {
    let matrix = Array2::<f64>::zeros((3, 4));
    assert!(matches!(
        linearize(&matrix),
        Err(CodecError::InvalidShape(_))
    ));
}

#[test]
fn test_delinearize_wrong_length_rejected() {
    let sequence = vec![1.0; 10];
    assert!(matches!(
        delinearize(&sequence, 3),
        Err(CodecError::InvalidShape(_))
    ));
}
