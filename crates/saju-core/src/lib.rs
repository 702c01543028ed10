//! # Saju Core
//!
//! 사주 시기 예측 엔진의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 엔진 전반에서 사용되는 기본 타입을 제공합니다:
//! - 오행, 천간, 지지, 간지 쌍
//! - 십신, 십이운성, 지지 관계 태그
//! - 명식 입력(ChartInput)과 대운 주기
//! - 이벤트 유형 및 월별/기간 결과 타입
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod types;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
pub use types::*;
