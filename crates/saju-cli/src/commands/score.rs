//! 월별 시기 점수 조회.

use anyhow::Result;
use saju_core::{ChartInput, EventType, MonthlyTimingResult, ScoringWeights};
use saju_timing::{InteractionTarget, MonthlyScorer, ScoreOptions};
use tracing::info;

use super::{to_json, OutputFormat};

/// 점수 조회 설정.
#[derive(Debug)]
pub struct ScoreConfig {
    pub chart: ChartInput,
    pub event: EventType,
    pub year: i32,
    pub month: u32,
    /// 대운 조회 나이 (None이면 연도 차이)
    pub age: Option<u32>,
    pub use_progressions: bool,
    pub use_solar_terms: bool,
    /// 지지 관계를 연지 기준으로 계산
    pub year_branch: bool,
    pub format: OutputFormat,
}

impl ScoreConfig {
    fn options(&self) -> ScoreOptions {
        ScoreOptions {
            use_progressions: self.use_progressions,
            use_solar_terms: self.use_solar_terms,
            interaction_target: if self.year_branch {
                InteractionTarget::YearBranch
            } else {
                InteractionTarget::DayBranch
            },
        }
    }
}

/// 점수 계산만 수행합니다.
pub fn compute_score(config: &ScoreConfig, weights: ScoringWeights) -> Result<MonthlyTimingResult> {
    let age = config
        .age
        .unwrap_or_else(|| config.chart.age_in(config.year));
    let result = MonthlyScorer::new(weights).score(
        &config.chart,
        config.event,
        config.year,
        config.month,
        age,
        &config.options(),
    )?;
    Ok(result)
}

/// 점수 조회 실행.
pub fn run_score(config: ScoreConfig, weights: ScoringWeights) -> Result<()> {
    let result = compute_score(&config, weights)?;
    info!(
        event = %config.event,
        year = result.year,
        month = result.month,
        score = result.score,
        "Monthly score computed"
    );

    let content = match config.format {
        OutputFormat::Table => format_table(config.event, &result),
        OutputFormat::Json => to_json(&result)?,
    };
    println!("{}", content);
    Ok(())
}

fn format_table(event: EventType, result: &MonthlyTimingResult) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{}년 {}월 {} 점수: {}\n",
        result.year, result.month, event, result.score
    ));
    output.push_str(&format!(
        "기간: {} ~ {} (중간일 {})\n",
        result.month_start, result.month_end, result.month_mid
    ));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for reason in &result.reasons {
        output.push_str(&format!("  + {}\n", reason));
    }
    for reason in &result.avoid_reasons {
        output.push_str(&format!("  - {}\n", reason));
    }
    if result.reasons.is_empty() && result.avoid_reasons.is_empty() {
        output.push_str("  (해당 근거 없음)\n");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use saju_core::{Branch, Stem};

    fn config() -> ScoreConfig {
        ScoreConfig {
            chart: ChartInput::new(
                NaiveDate::from_ymd_opt(1990, 3, 10).unwrap(),
                Stem::Gap,
                Branch::Hae,
                Branch::In,
                Branch::O,
            ),
            event: EventType::Career,
            year: 2024,
            month: 2,
            age: None,
            use_progressions: false,
            use_solar_terms: true,
            year_branch: false,
            format: OutputFormat::Table,
        }
    }

    #[test]
    fn test_compute_score() {
        let result = compute_score(&config(), ScoringWeights::default()).unwrap();
        assert_eq!(result.score, 79);
    }

    #[test]
    fn test_year_branch_flag() {
        let mut cfg = config();
        cfg.year_branch = true;
        assert_eq!(cfg.options().interaction_target, InteractionTarget::YearBranch);
    }

    #[test]
    fn test_table_marks_reasons() {
        let result = compute_score(&config(), ScoringWeights::default()).unwrap();
        let table = format_table(EventType::Career, &result);
        assert!(table.contains("2024년 2월 직업 점수: 79"));
        assert!(table.contains("  + 지지 육합"));
    }

    #[test]
    fn test_invalid_month_is_error() {
        let mut cfg = config();
        cfg.month = 13;
        assert!(compute_score(&cfg, ScoringWeights::default()).is_err());
    }
}
