//! 사주 엔진의 에러 타입.
//!
//! 엔진의 모든 계산은 문서화된 입력 범위에서 전체 함수(total function)입니다.
//! 따라서 에러는 계약 위반(잘못된 입력)과 주변 인프라(설정, 직렬화)에서만 발생합니다.
//! 선택 필드의 부재(용신/기신/대운 없음, 절기 조회 실패)는 에러가 아니라 no-op입니다.

use thiserror::Error;

/// 핵심 엔진 에러.
#[derive(Debug, Error)]
pub enum SajuError {
    /// 잘못된 입력 (지원 범위를 벗어난 연도, 겹치는 대운 구간 등)
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),

    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 직렬화 에러
    #[error("직렬화 에러: {0}")]
    Serialization(String),

    /// 내부 에러
    #[error("내부 에러: {0}")]
    Internal(String),
}

/// 엔진 작업을 위한 Result 타입.
pub type SajuResult<T> = Result<T, SajuError>;

impl SajuError {
    /// 호출자의 계약 위반(잘못된 입력)인지 확인합니다.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, SajuError::InvalidInput(_))
    }

    /// 잘못된 입력 에러를 생성합니다.
    pub fn invalid(msg: impl Into<String>) -> Self {
        SajuError::InvalidInput(msg.into())
    }
}

impl From<serde_json::Error> for SajuError {
    fn from(err: serde_json::Error) -> Self {
        SajuError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for SajuError {
    fn from(err: config::ConfigError) -> Self {
        SajuError::Config(err.to_string())
    }
}
