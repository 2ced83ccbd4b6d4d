//! 지그재그(서펜타인) 스캔
//!
//! 정사각 행렬의 (row, col) 좌표와 1차원 스캔 위치 사이의 결정적 전단사.
//! 반대각선을 따라 저주파 계수가 시퀀스 앞쪽에 오도록 순서를 만들며,
//! 런길이 압축 전 고주파 0 근방 계수들을 연속 구간으로 모으는 용도.

use ndarray::Array2;

use crate::core::error::CodecError;

/// 스캔 위치 k를 n×n 행렬의 (row, col) 좌표로 변환
///
/// 하삼각 구간은 닫힌형 공식으로 직접 계산하고, 상삼각 구간은 보수
/// 인덱스 n²−1−k의 좌표를 구해 한 번만 반사한다. 재귀 없음.
pub fn zig_zag_index(k: usize, n: usize) -> (usize, usize) {
    debug_assert!(n > 0 && k < n * n);

    let lower = n * (n + 1) / 2;
    let (k, reflect) = if k < lower {
        (k, false)
    } else {
        (n * n - 1 - k, true)
    };

    // 1+8k가 완전제곱수인 경계에서도 f64 sqrt는 2^53 미만에서 정확
    let i = (((1.0 + 8.0 * k as f64).sqrt() - 1.0) / 2.0) as usize;
    let j = k - i * (i + 1) / 2;
    let (row, col) = if i % 2 == 1 { (j, i - j) } else { (i - j, j) };

    if reflect {
        (n - 1 - row, n - 1 - col)
    } else {
        (row, col)
    }
}

/// 정사각 행렬을 지그재그 순서의 1차원 시퀀스로 직렬화
pub fn linearize<T: Copy>(matrix: &Array2<T>) -> Result<Vec<T>, CodecError> {
    let (rows, cols) = matrix.dim();
    if rows != cols {
        return Err(CodecError::InvalidShape(format!(
            "지그재그 스캔은 정사각 행렬만 지원: {}x{}",
            rows, cols
        )));
    }
    let n = rows;
    let mut out = Vec::with_capacity(n * n);
    for k in 0..n * n {
        let (i, j) = zig_zag_index(k, n);
        out.push(matrix[[i, j]]);
    }
    Ok(out)
}

/// 지그재그 시퀀스를 n×n 행렬로 복원 (`linearize`의 역)
pub fn delinearize<T: Copy>(sequence: &[T], n: usize) -> Result<Array2<T>, CodecError> {
    if sequence.len() != n * n {
        return Err(CodecError::InvalidShape(format!(
            "시퀀스 길이 {}가 {}x{} 행렬과 맞지 않음",
            sequence.len(),
            n,
            n
        )));
    }
    // 전단사이므로 모든 칸이 정확히 한 번씩 덮어써진다
    let mut flat = sequence.to_vec();
    for (k, &value) in sequence.iter().enumerate() {
        let (i, j) = zig_zag_index(k, n);
        flat[i * n + j] = value;
    }
    Array2::from_shape_vec((n, n), flat)
        .map_err(|e| CodecError::InvalidShape(e.to_string()))
}
