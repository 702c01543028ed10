//! 설정 관리.
//!
//! 이 모듈은 엔진 설정(채점 상수, 기간 순위 설정, 로깅)을 정의하고 관리합니다.
//! 채점 상수는 제품 튜닝 값이므로 코드에 기본값을 두고 파일/환경 변수로 덮어씁니다.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
    /// 월별 채점 상수
    #[serde(default)]
    pub scoring: ScoringWeights,
    /// 기간 순위 설정
    #[serde(default)]
    pub ranking: RankingConfig,
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// 월별 채점 상수 테이블.
///
/// 모든 가감점은 양수 크기로 저장하며, 불리 항목은 엔진이 차감합니다.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// 기본 점수
    pub base_score: i32,
    /// 유리 십신 가산
    pub favorable_sibsin: i32,
    /// 불리 십신 차감
    pub avoid_sibsin: i32,
    /// 유리 십이운성 가산
    pub favorable_stage: i32,
    /// 불리 십이운성 차감
    pub avoid_stage: i32,
    /// 이벤트 유리 오행 가산
    pub favorable_element: i32,
    /// 용신 오행 가산
    pub yongsin: i32,
    /// 기신 오행 차감
    pub kisin: i32,
    /// 절기 오행이 유리 오행일 때 가산
    pub solar_term_element: i32,
    /// 절기 오행이 용신일 때 가산
    pub solar_term_yongsin: i32,
    /// 지지 관계 점수 배율
    pub interaction_weight: Decimal,
    /// 대운 십신/운성 배율
    pub daeun_weight: Decimal,
    /// 대운-절기 오행 동기화 가산
    pub daeun_sync: i32,
    /// 진행 금성 별자리 가산
    pub progression_venus_sign: i32,
    /// 진행 금성 하우스 가산
    pub progression_venus_house: i32,
    /// 진행 태양 하우스 가산
    pub progression_sun_house: i32,
    /// 진행 달 위상 가산
    pub progression_moon_phase: i32,
    /// 최종 점수 하한 (None이면 제한 없음)
    pub min_score: Option<i32>,
    /// 최종 점수 상한 (None이면 제한 없음)
    pub max_score: Option<i32>,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            base_score: 50,
            favorable_sibsin: 10,
            avoid_sibsin: 10,
            favorable_stage: 8,
            avoid_stage: 8,
            favorable_element: 8,
            yongsin: 10,
            kisin: 10,
            solar_term_element: 5,
            solar_term_yongsin: 3,
            interaction_weight: dec!(1.0),
            daeun_weight: dec!(0.5),
            daeun_sync: 3,
            progression_venus_sign: 5,
            progression_venus_house: 4,
            progression_sun_house: 5,
            progression_moon_phase: 3,
            min_score: None,
            max_score: None,
        }
    }
}

/// 기간 순위 설정.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RankingConfig {
    /// 이 점수를 초과하는 월만 기간에 포함
    pub threshold: i32,
    /// 반환할 최대 기간 수 (0 = 무제한)
    pub top_n: usize,
    /// 병렬 스캔 시 동시 실행 연도 수
    pub parallelism: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            threshold: 60,
            top_n: 0,
            parallelism: 4,
        }
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    ///
    /// 파일이 없으면 기본값을 사용합니다. 환경 변수는 `SAJU__SCORING__BASE_SCORE=55`처럼
    /// `SAJU` 접두사와 `__` 구분자를 사용합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // 기본값으로 시작
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            // 파일에서 로드 (선택)
            .add_source(config::File::from(path.as_ref()).required(false))
            // 환경 변수로 오버라이드
            .add_source(
                config::Environment::with_prefix("SAJU")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// 기본 경로에서 설정을 로드합니다.
    pub fn load_default() -> Result<Self, config::ConfigError> {
        Self::load("config/default.toml")
    }
}
