//! 최적 기간 순위 조회.

use anyhow::Result;
use saju_core::{ChartInput, EventType, OptimalPeriod, ScoringWeights, YearRange};
use saju_timing::{MonthlyScorer, PeriodRanker, RankOptions};
use tracing::info;

use super::{to_json, OutputFormat};

/// 기간 순위 설정.
#[derive(Debug)]
pub struct RankConfig {
    pub chart: ChartInput,
    pub event: EventType,
    pub range: YearRange,
    pub options: RankOptions,
    /// 연도별 병렬 스캔
    pub parallel: bool,
    pub format: OutputFormat,
}

/// 순위 계산만 수행합니다.
pub async fn compute_periods(config: &RankConfig, weights: ScoringWeights) -> Result<Vec<OptimalPeriod>> {
    let ranker = PeriodRanker::new(MonthlyScorer::new(weights));
    let periods = if config.parallel {
        ranker
            .rank_periods_parallel(&config.chart, config.event, config.range, &config.options)
            .await?
    } else {
        ranker.rank_periods(&config.chart, config.event, config.range, &config.options)?
    };
    Ok(periods)
}

/// 기간 순위 실행.
pub async fn run_rank(config: RankConfig, weights: ScoringWeights) -> Result<()> {
    let periods = compute_periods(&config, weights).await?;
    info!(
        event = %config.event,
        range = %config.range,
        periods = periods.len(),
        "Optimal periods ranked"
    );

    let content = match config.format {
        OutputFormat::Table => format_table(config.event, &periods),
        OutputFormat::Json => to_json(&periods)?,
    };
    println!("{}", content);
    Ok(())
}

fn format_table(event: EventType, periods: &[OptimalPeriod]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<4} {:<12} {:<12} {:<6} {:<6} {:<6} {:<6}\n",
        "#", "START", "END", "SCORE", "GRADE", "AVG", "MONTHS"
    ));
    output.push_str(&"-".repeat(62));
    output.push('\n');

    for (i, period) in periods.iter().enumerate() {
        output.push_str(&format!(
            "{:<4} {:<12} {:<12} {:<6} {:<6} {:<6} {:<6}\n",
            i + 1,
            period.start_date.to_string(),
            period.end_date.to_string(),
            period.score,
            period.grade.to_string(),
            period.average_score,
            period.month_count
        ));
        for reason in &period.reasons {
            output.push_str(&format!("       + {}\n", reason));
        }
        for reason in &period.avoid_reasons {
            output.push_str(&format!("       - {}\n", reason));
        }
    }

    output.push('\n');
    output.push_str(&format!("{}: {} periods", event, periods.len()));
    output
}
