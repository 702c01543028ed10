//! 사주 시기 예측 CLI 도구 모음.
//!
//! 이 crate는 다음 기능을 제공합니다:
//! - 월별 시기 점수 조회 (`score`)
//! - 최적 기간 순위 (`rank`)
//! - 날짜의 사주 간지 조회 (`ganji`)

pub mod commands;
