//! tdcodec: 변환 영역(transform-domain) 이미지/비디오 코딩 파이프라인
//!
//! 색공간 분리 → 블록 변환(DCT/DWT) → 지그재그 스캔 → 런길이 압축으로
//! 이어지는 코덱 프론트엔드의 순수 수치 스테이지들을 제공하는 라이브러리

pub mod core;

// 핵심 모듈들 재수출
pub use crate::core::{
    // 색공간 변환
    rgb_to_gray, rgb_to_yuv, yuv_to_rgb,
    // 블록 변환
    DctCodec,
    // 웨이블릿 분해/복원
    analyze, synthesize,
    // 스캔 및 런길이 부호화
    delinearize, linearize, zig_zag_index,
    // 파이프라인
    decode_matrix, encode_matrix, EncodedBlock,
    // 타입 및 에러
    CodecError, RleToken, Subbands, TransformKind, WaveletKind,
    // 외부 미디어 도구
    CodecFormat, MediaTool,
};

// 편의 타입 별칭들
pub type Matrix = ndarray::Array2<f64>;
pub type Tensor = ndarray::ArrayD<f64>;
