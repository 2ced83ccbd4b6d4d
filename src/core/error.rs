//! 코덱 에러 타입 정의

use thiserror::Error;

/// 파이프라인 전 스테이지가 공유하는 에러 분류
///
/// 모든 에러는 연산 시작 시점에 동기적으로 검출된다. 내부 재시도나
/// 기본값 대체는 없다.
#[derive(Debug, Error)]
pub enum CodecError {
    /// 연산이 요구하는 형태가 아닌 입력 (정사각 아님, 홀수 크기, 길이 0 축 등)
    #[error("invalid shape: {0}")]
    InvalidShape(String),

    /// 서로 맞물려야 하는 행렬들의 형태 불일치 (서브밴드 합성 등)
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// 값 자체가 계약 위반인 입력 (비유한 원소, 0 이하 런 카운트 등)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// 외부 미디어 도구의 비정상 종료. stderr 텍스트가 유일한 진단 정보
    #[error("external tool exited with status {status}: {stderr}")]
    Tool { status: i32, stderr: String },

    /// 외부 도구 실행 자체의 실패 (바이너리 없음 등)
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
