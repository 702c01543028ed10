//! 사주 이벤트 시기 예측 엔진.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - 역법 변환 (연/월/일/시 간지)
//! - 관계 분류 (십신, 십이운성, 지지 관계)
//! - 달력 문맥 제공자 (절기, 대운, 2차 진행)
//! - 이벤트 유형별 선호 프로필
//! - 월별 시기 점수 계산
//! - 최적 기간 병합, 등급, 순위
//!
//! 모든 계산은 순수하고 동기적입니다. 병렬 순위 산출만 tokio 런타임을 사용합니다.

pub mod branch_interaction;
pub mod calendar;
pub mod daeun;
pub mod event_profile;
pub mod monthly_scorer;
pub mod period_ranker;
pub mod progression;
pub mod sibsin;
pub mod solar_term;
pub mod twelve_stage;

// 역법
pub use calendar::{
    ganji_for_day, ganji_for_hour, ganji_for_month, ganji_for_year, month_bounds, month_element,
    MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR,
};

// 관계 분류
pub use branch_interaction::{branch_interaction, INTERACTION_PRIORITY};
pub use sibsin::sibsin;
pub use twelve_stage::twelve_stage;

// 문맥 제공자
pub use daeun::daeun_stage_for;
pub use progression::{
    secondary_progression, MeanMotionProgression, MoonPhase, Progression, ProgressionProvider,
    ZodiacSign,
};
pub use solar_term::{
    solar_term_for, FixedSolarTerms, SolarTerm, SolarTermProvider, TermType, SOLAR_TERMS,
};

// 채점 및 순위
pub use event_profile::{profile_for, EventProfile};
pub use monthly_scorer::{InteractionTarget, MonthlyScorer, ScoreOptions};
pub use period_ranker::{PeriodRanker, RankOptions};
