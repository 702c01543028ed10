//! 최적 기간 순위 및 등급.
//!
//! 연도 범위의 모든 월을 채점한 뒤, 임계값을 초과하는 달력상 연속 월을 하나의 기간으로
//! 병합하고 등급을 매겨 점수 내림차순으로 정렬합니다.
//!
//! # 병합 규칙
//!
//! - 임계값 비교는 초과(`score > threshold`)입니다.
//! - 12월과 다음 해 1월도 연속으로 봅니다.
//! - 기간 점수는 구성 월 점수의 최댓값이며 등급은 [`Grade::from_score`]로 산출합니다.
//! - 근거는 중복을 제거하고 최초 등장 순서를 유지합니다.
//! - 정렬: 점수 내림차순, 같은 점수는 시작일이 빠른 순.

use std::collections::HashSet;

use futures::stream::{self, StreamExt};
use saju_core::{
    ChartInput, EventType, Grade, MonthlyTimingResult, OptimalPeriod, RankingConfig, SajuError,
    SajuResult, YearRange,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::calendar::ensure_supported_year;
use crate::monthly_scorer::{MonthlyScorer, ScoreOptions};

/// 기간 순위 옵션.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankOptions {
    /// 이 점수를 초과하는 월만 기간에 포함
    pub threshold: i32,
    /// 반환할 최대 기간 수 (0 = 무제한)
    pub top_n: usize,
    /// 병렬 스캔 시 동시 실행 연도 수
    pub parallelism: usize,
    /// 월별 채점 옵션
    pub score_options: ScoreOptions,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self::from(&RankingConfig::default())
    }
}

impl From<&RankingConfig> for RankOptions {
    fn from(config: &RankingConfig) -> Self {
        Self {
            threshold: config.threshold,
            top_n: config.top_n,
            parallelism: config.parallelism,
            score_options: ScoreOptions::default(),
        }
    }
}

impl RankOptions {
    pub fn with_threshold(mut self, threshold: i32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_score_options(mut self, options: ScoreOptions) -> Self {
        self.score_options = options;
        self
    }
}

/// 최적 기간 순위 산출기.
#[derive(Debug, Clone, Default)]
pub struct PeriodRanker {
    scorer: MonthlyScorer,
}

impl PeriodRanker {
    pub fn new(scorer: MonthlyScorer) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &MonthlyScorer {
        &self.scorer
    }

    /// 연도 범위에서 이벤트의 최적 기간을 찾습니다.
    ///
    /// 각 월의 나이는 `chart.age_in(year)`을 사용합니다.
    pub fn rank_periods(
        &self,
        chart: &ChartInput,
        event: EventType,
        range: YearRange,
        options: &RankOptions,
    ) -> SajuResult<Vec<OptimalPeriod>> {
        let _span = saju_core::timing_span!("rank_periods", event, range.start).entered();
        info!(
            event = %event,
            range = %range,
            threshold = options.threshold,
            "최적 기간 탐색 시작"
        );

        let months = self.scorer.scan(chart, event, range, &options.score_options)?;
        let periods = rank_months(&months, options);

        info!(
            event = %event,
            months = months.len(),
            periods = periods.len(),
            "최적 기간 탐색 완료"
        );
        Ok(periods)
    }

    /// 연도별로 병렬 채점한 뒤 순위를 산출합니다.
    ///
    /// 각 연도의 채점은 `spawn_blocking`에서 실행되며 동시 실행 수는 `options.parallelism`으로
    /// 제한됩니다. 완료 순서와 무관하게 결과는 [`rank_periods`](Self::rank_periods)와 같습니다.
    pub async fn rank_periods_parallel(
        &self,
        chart: &ChartInput,
        event: EventType,
        range: YearRange,
        options: &RankOptions,
    ) -> SajuResult<Vec<OptimalPeriod>> {
        range.validate()?;
        ensure_supported_year(range.start)?;
        ensure_supported_year(range.end)?;
        chart.validate()?;

        let parallelism = options.parallelism.max(1);
        info!(
            event = %event,
            range = %range,
            threshold = options.threshold,
            parallelism,
            "최적 기간 병렬 탐색 시작"
        );

        let tasks: Vec<_> = range
            .years()
            .map(|year| {
                // spawn_blocking으로 옮기기 위해 owned 값으로 복제
                let scorer = self.scorer.clone();
                let chart = chart.clone();
                let score_options = options.score_options;
                async move {
                    tokio::task::spawn_blocking(move || {
                        scorer.scan(&chart, event, YearRange::new(year, year), &score_options)
                    })
                    .await
                    .map_err(|e| SajuError::Internal(format!("{}년 채점 태스크 실패: {}", year, e)))?
                }
            })
            .collect();

        let results: Vec<SajuResult<Vec<MonthlyTimingResult>>> = stream::iter(tasks)
            .buffer_unordered(parallelism)
            .collect()
            .await;

        let mut months = Vec::with_capacity(range.len() * 12);
        for result in results {
            months.extend(result?);
        }
        months.sort_by_key(MonthlyTimingResult::sort_key);

        let periods = rank_months(&months, options);
        info!(
            event = %event,
            months = months.len(),
            periods = periods.len(),
            "최적 기간 병렬 탐색 완료"
        );
        Ok(periods)
    }
}

/// 시간순 월별 결과에서 기간을 병합하고 정렬/제한합니다.
pub fn rank_months(months: &[MonthlyTimingResult], options: &RankOptions) -> Vec<OptimalPeriod> {
    let mut periods = merge_periods(months, options.threshold);
    sort_periods(&mut periods);
    if options.top_n > 0 {
        periods.truncate(options.top_n);
    }
    periods
}

/// 임계값을 초과하는 연속 월을 기간으로 병합합니다 (시간순 입력 가정).
pub fn merge_periods(months: &[MonthlyTimingResult], threshold: i32) -> Vec<OptimalPeriod> {
    let mut periods = Vec::new();
    let mut run: Vec<&MonthlyTimingResult> = Vec::new();

    for month in months {
        debug!(
            year = month.year,
            month = month.month,
            score = month.score,
            "월 점수"
        );

        if month.score <= threshold {
            if !run.is_empty() {
                periods.push(build_period(&run));
                run.clear();
            }
            continue;
        }

        let continues = run.last().is_some_and(|last| last.is_followed_by(month));
        if !continues && !run.is_empty() {
            periods.push(build_period(&run));
            run.clear();
        }
        run.push(month);
    }

    if !run.is_empty() {
        periods.push(build_period(&run));
    }
    periods
}

/// 점수 내림차순, 시작일 오름차순.
pub fn sort_periods(periods: &mut [OptimalPeriod]) {
    periods.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.start_date.cmp(&b.start_date))
    });
}

fn dedup_in_order<'a>(items: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut unique = Vec::new();
    for item in items {
        if seen.insert(item.as_str()) {
            unique.push(item.clone());
        }
    }
    unique
}

fn build_period(run: &[&MonthlyTimingResult]) -> OptimalPeriod {
    let score = run.iter().map(|m| m.score).max().unwrap_or_default();
    let total: i32 = run.iter().map(|m| m.score).sum();
    let month_count = run.len() as u32;

    OptimalPeriod {
        start_date: run[0].month_start,
        end_date: run[run.len() - 1].month_end,
        score,
        grade: Grade::from_score(score),
        reasons: dedup_in_order(run.iter().flat_map(|m| m.reasons.iter())),
        avoid_reasons: dedup_in_order(run.iter().flat_map(|m| m.avoid_reasons.iter())),
        month_count,
        average_score: total / month_count.max(1) as i32,
    }
}
