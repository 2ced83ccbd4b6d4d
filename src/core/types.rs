//! 변환 타입 및 값 구조체 정의 (DCT, Wavelet, RLE 토큰 등)

use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// 변환 타입
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransformKind {
    Dct, // Discrete Cosine Transform
    Dwt, // Discrete Wavelet Transform
}

/// 웨이블릿 커널 선택
///
/// 분해와 합성에는 반드시 같은 커널을 써야 한다. 커널이 다르면 복원이
/// 눈에 띄게 망가진다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaveletKind {
    /// biorthogonal 1.3 스플라인 (기본값)
    Bior13,
    /// biorthogonal 3.1 스플라인
    Bior31,
    /// Haar (가장 단순, 테스트용)
    Haar,
}

impl Default for WaveletKind {
    fn default() -> Self {
        WaveletKind::Bior13
    }
}

/// 런길이 부호화 토큰
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RleToken {
    /// 반복되는 심볼
    pub symbol: char,
    /// 반복 횟수 (항상 1 이상)
    pub count: usize,
}

/// 1레벨 2차원 웨이블릿 분해 결과의 네 서브밴드
///
/// `ll`은 근사(저주파) 성분. `lh`/`hl`/`hh`는 각각 수평/수직/대각 디테일로,
/// 분해 직후 사분면 배치 기준 우상/좌하/우하 사분면에 해당한다.
/// 네 행렬의 형태는 모두 (rows/2, cols/2)로 동일하다.
#[derive(Debug, Clone, PartialEq)]
pub struct Subbands {
    pub ll: Array2<f32>,
    pub lh: Array2<f32>,
    pub hl: Array2<f32>,
    pub hh: Array2<f32>,
}

impl Subbands {
    /// 서브밴드 한 장의 형태 (ll 기준)
    pub fn band_shape(&self) -> (usize, usize) {
        self.ll.dim()
    }

    /// 이름과 함께 네 밴드를 순회 (전송 계층의 정규화/인코딩용)
    pub fn bands(&self) -> [(&'static str, &Array2<f32>); 4] {
        [
            ("LL", &self.ll),
            ("LH", &self.lh),
            ("HL", &self.hl),
            ("HH", &self.hh),
        ]
    }
}
