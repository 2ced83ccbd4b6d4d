//! 인코딩 파이프라인 조립
//!
//! 블록 단위: 순방향 DCT → 지그재그 스캔, 또는 웨이블릿 분해.
//! 디코딩은 각 스테이지를 역순으로 푼다. 블록들 사이에는 의존성이
//! 없으므로 배치 처리는 rayon으로 블록별 병렬화하고 인덱스 순서
//! 그대로 결과를 모은다.

use ndarray::{Array2, Ix2};
use rayon::prelude::*;

use crate::core::dct::DctCodec;
use crate::core::error::CodecError;
use crate::core::scan;
use crate::core::types::{Subbands, TransformKind, WaveletKind};
use crate::core::wavelet;

/// 변환 영역으로 인코딩된 블록
///
/// 어떤 변환을 썼는지와 그 페이로드를 함께 들고 다닌다. DWT 쪽은
/// 분해에 쓴 커널을 기억해 복원 시 동일 커널을 강제한다.
#[derive(Debug, Clone, PartialEq)]
pub enum EncodedBlock {
    /// DCT 계수의 지그재그 스캔 시퀀스
    Dct { sequence: Vec<f64>, n: usize },
    /// 1레벨 웨이블릿 서브밴드
    Dwt { subbands: Subbands, kernel: WaveletKind },
}

/// 정사각 블록 하나를 변환 영역 스캔 시퀀스로 인코딩
pub fn encode_block(
    codec: &mut DctCodec,
    block: &Array2<f64>,
) -> Result<Vec<f64>, CodecError> {
    let coeffs = codec.forward(&block.clone().into_dyn())?;
    let coeffs = coeffs
        .into_dimensionality::<Ix2>()
        .map_err(|e| CodecError::InvalidShape(e.to_string()))?;
    scan::linearize(&coeffs)
}

/// 스캔 시퀀스를 n×n 블록으로 디코딩
pub fn decode_block(
    codec: &mut DctCodec,
    sequence: &[f64],
    n: usize,
) -> Result<Array2<f64>, CodecError> {
    let coeffs = scan::delinearize(sequence, n)?;
    let block = codec.inverse(&coeffs.into_dyn())?;
    block
        .into_dimensionality::<Ix2>()
        .map_err(|e| CodecError::InvalidShape(e.to_string()))
}

/// 변환 종류를 골라 행렬 하나를 인코딩
pub fn encode_matrix(
    matrix: &Array2<f64>,
    kind: TransformKind,
    kernel: WaveletKind,
) -> Result<EncodedBlock, CodecError> {
    match kind {
        TransformKind::Dct => {
            let mut codec = DctCodec::new();
            let n = matrix.nrows();
            let sequence = encode_block(&mut codec, matrix)?;
            Ok(EncodedBlock::Dct { sequence, n })
        }
        TransformKind::Dwt => {
            let gray = matrix.mapv(|v| v as f32);
            let subbands = wavelet::analyze(&gray, kernel)?;
            Ok(EncodedBlock::Dwt { subbands, kernel })
        }
    }
}

/// 인코딩된 블록을 행렬로 복원
pub fn decode_matrix(block: &EncodedBlock) -> Result<Array2<f64>, CodecError> {
    match block {
        EncodedBlock::Dct { sequence, n } => {
            let mut codec = DctCodec::new();
            decode_block(&mut codec, sequence, *n)
        }
        EncodedBlock::Dwt { subbands, kernel } => {
            let gray = wavelet::synthesize(subbands, *kernel)?;
            Ok(gray.mapv(f64::from))
        }
    }
}

/// 서브밴드 하나를 표시용 0..255 바이트 범위로 정규화
///
/// 전송 계층이 밴드를 이미지로 인코딩하기 전 단계. 동적 범위가 0인
/// (균일한) 밴드는 나눗셈을 건너뛰고 0으로 채워 NaN 전파를 막는다.
pub fn normalize_band(band: &Array2<f32>) -> Array2<u8> {
    let min = band.iter().cloned().fold(f32::INFINITY, f32::min);
    let max = band.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    let range = max - min;
    if !(range > 0.0) {
        return Array2::zeros(band.dim());
    }
    band.mapv(|v| (((v - min) / range) * 255.0).clamp(0.0, 255.0) as u8)
}

/// 독립 블록들의 병렬 배치 인코딩
///
/// 블록별로 스레드 로컬 코덱을 만들어 처리한다. 결과 순서는 입력
/// 인덱스와 동일하다.
pub fn encode_blocks(blocks: &[Array2<f64>]) -> Result<Vec<Vec<f64>>, CodecError> {
    log::debug!("{}개 블록 병렬 인코딩", blocks.len());
    blocks
        .par_iter()
        .map(|block| {
            let mut local_codec = DctCodec::new();
            encode_block(&mut local_codec, block)
        })
        .collect()
}

/// 독립 블록들의 병렬 배치 디코딩
pub fn decode_blocks(
    sequences: &[Vec<f64>],
    n: usize,
) -> Result<Vec<Array2<f64>>, CodecError> {
    log::debug!("{}개 블록 병렬 디코딩", sequences.len());
    sequences
        .par_iter()
        .map(|sequence| {
            let mut local_codec = DctCodec::new();
            decode_block(&mut local_codec, sequence, n)
        })
        .collect()
}
