//! RGB↔YUV 색공간 변환
//!
//! 아날로그 YUV 계수 행렬을 그대로 사용한다. 두 행렬은 서로 정확한
//! 역행렬이 아니므로 왕복 변환에 작은 잔차가 남는다 (픽셀당 ±2 이내).
//! 성분 규약: [0, 255] 범위의 실수.

use ndarray::Array2;

use crate::core::error::CodecError;

/// RGB를 YUV로 변환
pub fn rgb_to_yuv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let y = 0.299 * r + 0.587 * g + 0.114 * b;
    let u = -0.147 * r - 0.289 * g + 0.436 * b;
    let v = 0.615 * r - 0.515 * g - 0.100 * b;
    (y, u, v)
}

/// YUV를 RGB로 역변환
pub fn yuv_to_rgb(y: f64, u: f64, v: f64) -> (f64, f64, f64) {
    let r = y + 1.140 * v;
    let g = y - 0.395 * u - 0.581 * v;
    let b = y + 2.032 * u;
    (r, g, b)
}

/// 세 채널 평면 전체를 YUV로 변환
///
/// 파이프라인에서 컬러 이미지를 변환 스테이지에 넣기 전 분리용.
pub fn rgb_planes_to_yuv(
    r: &Array2<f64>,
    g: &Array2<f64>,
    b: &Array2<f64>,
) -> Result<(Array2<f64>, Array2<f64>, Array2<f64>), CodecError> {
    check_planes(r.dim(), g.dim(), b.dim())?;
    let mut y = Array2::zeros(r.dim());
    let mut u = Array2::zeros(r.dim());
    let mut v = Array2::zeros(r.dim());
    for ((i, j), &rv) in r.indexed_iter() {
        let (yv, uv, vv) = rgb_to_yuv(rv, g[[i, j]], b[[i, j]]);
        y[[i, j]] = yv;
        u[[i, j]] = uv;
        v[[i, j]] = vv;
    }
    Ok((y, u, v))
}

/// 세 채널 평면 전체를 RGB로 역변환
pub fn yuv_planes_to_rgb(
    y: &Array2<f64>,
    u: &Array2<f64>,
    v: &Array2<f64>,
) -> Result<(Array2<f64>, Array2<f64>, Array2<f64>), CodecError> {
    check_planes(y.dim(), u.dim(), v.dim())?;
    let mut r = Array2::zeros(y.dim());
    let mut g = Array2::zeros(y.dim());
    let mut b = Array2::zeros(y.dim());
    for ((i, j), &yv) in y.indexed_iter() {
        let (rv, gv, bv) = yuv_to_rgb(yv, u[[i, j]], v[[i, j]]);
        r[[i, j]] = rv;
        g[[i, j]] = gv;
        b[[i, j]] = bv;
    }
    Ok((r, g, b))
}

/// 세 채널을 평균 내어 그레이스케일 평면 하나로 접기
///
/// 웨이블릿 분해 입력 전처리용. 출력은 웨이블릿 경로와 같은 f32.
pub fn rgb_to_gray(
    r: &Array2<f64>,
    g: &Array2<f64>,
    b: &Array2<f64>,
) -> Result<Array2<f32>, CodecError> {
    check_planes(r.dim(), g.dim(), b.dim())?;
    let mut gray = Array2::zeros(r.dim());
    for ((i, j), &rv) in r.indexed_iter() {
        gray[[i, j]] = ((rv + g[[i, j]] + b[[i, j]]) / 3.0) as f32;
    }
    Ok(gray)
}

fn check_planes(
    a: (usize, usize),
    b: (usize, usize),
    c: (usize, usize),
) -> Result<(), CodecError> {
    if a != b || a != c {
        return Err(CodecError::ShapeMismatch(format!(
            "채널 평면 형태가 서로 다름: {:?} / {:?} / {:?}",
            a, b, c
        )));
    }
    Ok(())
}
