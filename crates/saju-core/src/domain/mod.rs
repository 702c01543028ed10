//! 도메인 모델.
//!
//! - [`chart`]: 명식 입력과 대운 주기
//! - [`event`]: 이벤트 유형
//! - [`timing`]: 월별 점수와 최적 기간 결과

pub mod chart;
pub mod event;
pub mod timing;

pub use chart::{ChartInput, DaeunCycle};
pub use event::EventType;
pub use timing::{Grade, MonthlyTimingResult, OptimalPeriod, YearRange, GRADE_THRESHOLDS};
