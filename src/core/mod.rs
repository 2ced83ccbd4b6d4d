//! # 변환 영역 코딩 핵심 모듈
//!
//! 다섯 개의 순수 수치 스테이지와 이를 엮는 파이프라인

pub mod color;
pub mod dct;
pub mod error;
pub mod media;
pub mod pipeline;
pub mod rle;
pub mod scan;
pub mod types;
pub mod wavelet;

// 테스트 모듈
#[cfg(test)]
mod __tests__;

// 주요 타입들 재수출
pub use color::{rgb_planes_to_yuv, rgb_to_gray, rgb_to_yuv, yuv_planes_to_rgb, yuv_to_rgb};
pub use dct::DctCodec;
pub use error::CodecError;
pub use media::{CodecFormat, LadderRung, MediaTool, ENCODING_LADDER};
pub use pipeline::{
    decode_block, decode_blocks, decode_matrix, encode_block, encode_blocks, encode_matrix,
    normalize_band, EncodedBlock,
};
pub use rle::{decode, decode_symbols, encode, encode_symbols};
pub use scan::{delinearize, linearize, zig_zag_index};
pub use types::{RleToken, Subbands, TransformKind, WaveletKind};
pub use wavelet::{analyze, synthesize};
