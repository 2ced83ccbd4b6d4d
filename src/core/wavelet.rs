//! 1레벨 2차원 웨이블릿 분해/복원
//!
//! 행 방향, 열 방향으로 분리 적용되는 biorthogonal 스플라인 필터뱅크.
//! 분해 결과는 사분면 배치(각 축 앞 절반이 근사 성분)로 나오며, 이를
//! 네 개의 서브밴드 행렬로 쪼개어 돌려준다. 복원은 같은 커널로 사분면을
//! 재조립한 뒤 역필터를 적용한다. 분해/복원의 경계 처리 규약은 omni-wave
//! 내부에서 일치되므로 커널만 같으면 부동소수 오차 수준으로 복원된다.

use ndarray::{s, Array1, Array2};
use omni_wave::{decompose_2d, reconstruct_2d, wavelet as w};

use crate::core::error::CodecError;
use crate::core::types::{Subbands, WaveletKind};

impl WaveletKind {
    pub(crate) fn window_size(self) -> usize {
        match self {
            WaveletKind::Bior13 => w::BIOR_1_3.window_size(),
            WaveletKind::Bior31 => w::BIOR_3_1.window_size(),
            WaveletKind::Haar => w::HAAR.window_size(),
        }
    }
}

/// 행렬을 1레벨 분해하여 네 서브밴드를 얻는다
///
/// # Arguments
/// * `matrix` - 짝수 크기(각 축 2 이상)의 2차원 실수 행렬
/// * `kernel` - 분해 커널. 복원 시에도 동일 커널을 써야 한다
pub fn analyze(matrix: &Array2<f32>, kernel: WaveletKind) -> Result<Subbands, CodecError> {
    let (rows, cols) = matrix.dim();
    if rows < 2 || cols < 2 || rows % 2 != 0 || cols % 2 != 0 {
        return Err(CodecError::InvalidShape(format!(
            "웨이블릿 분해는 짝수 크기 행렬만 지원 (2x2 이상): {}x{}",
            rows, cols
        )));
    }

    let mut work = matrix.clone();
    let mut buffer = Array1::zeros(rows.max(cols) + kernel.window_size() - 2);
    match kernel {
        WaveletKind::Bior13 => decompose_2d(work.view_mut(), buffer.view_mut(), w::BIOR_1_3),
        WaveletKind::Bior31 => decompose_2d(work.view_mut(), buffer.view_mut(), w::BIOR_3_1),
        WaveletKind::Haar => decompose_2d(work.view_mut(), buffer.view_mut(), w::HAAR),
    }

    let (half_rows, half_cols) = (rows / 2, cols / 2);
    Ok(Subbands {
        ll: work.slice(s![..half_rows, ..half_cols]).to_owned(),
        lh: work.slice(s![..half_rows, half_cols..]).to_owned(),
        hl: work.slice(s![half_rows.., ..half_cols]).to_owned(),
        hh: work.slice(s![half_rows.., half_cols..]).to_owned(),
    })
}

/// 네 서브밴드로부터 원 행렬을 복원한다
///
/// 분해 때와 같은 커널을 써야 한다. 커널이 다르면 필터뱅크의
/// 완전복원 조건이 깨져 복원 오차가 크게 벌어진다.
pub fn synthesize(subbands: &Subbands, kernel: WaveletKind) -> Result<Array2<f32>, CodecError> {
    let (half_rows, half_cols) = subbands.ll.dim();
    if half_rows == 0 || half_cols == 0 {
        return Err(CodecError::InvalidShape(
            "빈 서브밴드는 합성할 수 없음".to_string(),
        ));
    }
    for (name, band) in [
        ("LH", &subbands.lh),
        ("HL", &subbands.hl),
        ("HH", &subbands.hh),
    ] {
        if band.dim() != (half_rows, half_cols) {
            return Err(CodecError::ShapeMismatch(format!(
                "서브밴드 {} 형태 {:?}가 LL {:?}와 다름",
                name,
                band.dim(),
                (half_rows, half_cols)
            )));
        }
    }

    let (rows, cols) = (half_rows * 2, half_cols * 2);
    let mut work = Array2::zeros((rows, cols));
    work.slice_mut(s![..half_rows, ..half_cols]).assign(&subbands.ll);
    work.slice_mut(s![..half_rows, half_cols..]).assign(&subbands.lh);
    work.slice_mut(s![half_rows.., ..half_cols]).assign(&subbands.hl);
    work.slice_mut(s![half_rows.., half_cols..]).assign(&subbands.hh);

    let mut buffer = Array1::zeros(rows.max(cols) + kernel.window_size() - 2);
    match kernel {
        WaveletKind::Bior13 => reconstruct_2d(work.view_mut(), buffer.view_mut(), w::BIOR_1_3),
        WaveletKind::Bior31 => reconstruct_2d(work.view_mut(), buffer.view_mut(), w::BIOR_3_1),
        WaveletKind::Haar => reconstruct_2d(work.view_mut(), buffer.view_mut(), w::HAAR),
    }
    Ok(work)
}
