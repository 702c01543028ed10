//! 월별 시기 점수 계산기.
//!
//! 명식과 이벤트 유형에 대해 한 달의 유리도 점수와 근거 목록을 산출합니다.
//!
//! # 채점 단계 (고정 순서, 기본 50점에서 가감)
//!
//! 1. **월주 십신/십이운성**: 월간의 십신, 월지의 십이운성을 프로필과 비교
//! 2. **월 오행**: 프로필 유리 오행, 용신, 기신
//! 3. **절기**: 15일이 속한 절기의 오행 (비활성 시 조회 자체를 생략)
//! 4. **지지 관계**: 월지와 일지(또는 연지)의 관계 점수 × 관계 가중치
//! 5. **대운**: 해당 나이의 대운 십신/십이운성 × 대운 가중치, 절기 오행과 일치 시 동기화 보너스
//! 6. **2차 진행**: 이벤트별 금성/태양/달 세부 규칙 (비활성 시 조회 자체를 생략)
//!
//! 최종 점수는 가감의 단순 합이며, `min_score`/`max_score`가 설정된 경우에만 그 범위로 제한합니다.
//! 근거는 단계 순서대로 `reasons`(가점) 또는 `avoid_reasons`(감점)에 쌓입니다.

use std::sync::Arc;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use saju_core::{
    ChartInput, EventType, Impact, MonthlyTimingResult, SajuResult, ScoringWeights,
    YearRange,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::branch_interaction::branch_interaction;
use crate::calendar::{self, ganji_for_month, month_bounds};
use crate::daeun::daeun_stage_for;
use crate::event_profile::{profile_for, EventProfile};
use crate::progression::{MeanMotionProgression, ProgressionProvider};
use crate::sibsin::sibsin;
use crate::solar_term::{FixedSolarTerms, SolarTerm, SolarTermProvider};
use crate::twelve_stage::twelve_stage;

/// 지지 관계 비교 대상.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionTarget {
    /// 일지 (기본)
    #[default]
    DayBranch,
    /// 연지
    YearBranch,
}

/// 채점 옵션.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreOptions {
    /// 2차 진행 단계 사용 여부
    pub use_progressions: bool,
    /// 절기 단계 사용 여부
    pub use_solar_terms: bool,
    /// 지지 관계 비교 대상
    pub interaction_target: InteractionTarget,
}

impl Default for ScoreOptions {
    fn default() -> Self {
        Self {
            use_progressions: true,
            use_solar_terms: true,
            interaction_target: InteractionTarget::DayBranch,
        }
    }
}

impl ScoreOptions {
    pub fn without_progressions(mut self) -> Self {
        self.use_progressions = false;
        self
    }

    pub fn without_solar_terms(mut self) -> Self {
        self.use_solar_terms = false;
        self
    }

    pub fn with_interaction_target(mut self, target: InteractionTarget) -> Self {
        self.interaction_target = target;
        self
    }
}

/// 점수와 근거를 누적하는 채점표.
struct ScoreSheet {
    score: i32,
    reasons: Vec<String>,
    avoid_reasons: Vec<String>,
}

impl ScoreSheet {
    fn new(base: i32) -> Self {
        Self {
            score: base,
            reasons: Vec::new(),
            avoid_reasons: Vec::new(),
        }
    }

    fn favor(&mut self, delta: i32, reason: String) {
        self.score += delta;
        self.reasons.push(reason);
    }

    fn avoid(&mut self, delta: i32, reason: String) {
        self.score -= delta;
        self.avoid_reasons.push(reason);
    }
}

/// 가중치 적용 후 반올림.
fn weighted(value: i32, weight: Decimal) -> i32 {
    (Decimal::from(value) * weight).round().to_i32().unwrap_or(0)
}

/// 월별 시기 점수 계산기.
///
/// 절기/진행 제공자는 교체할 수 있으며 기본값은 고정 절기표와 평균 궤도 근사입니다.
#[derive(Clone)]
pub struct MonthlyScorer {
    weights: ScoringWeights,
    solar_terms: Arc<dyn SolarTermProvider>,
    progressions: Arc<dyn ProgressionProvider>,
}

impl Default for MonthlyScorer {
    fn default() -> Self {
        Self::new(ScoringWeights::default())
    }
}

impl std::fmt::Debug for MonthlyScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonthlyScorer")
            .field("weights", &self.weights)
            .finish_non_exhaustive()
    }
}

impl MonthlyScorer {
    /// 주어진 가중치와 기본 제공자로 생성합니다.
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            weights,
            solar_terms: Arc::new(FixedSolarTerms),
            progressions: Arc::new(MeanMotionProgression),
        }
    }

    /// 절기 제공자를 교체합니다.
    pub fn with_solar_terms(mut self, provider: Arc<dyn SolarTermProvider>) -> Self {
        self.solar_terms = provider;
        self
    }

    /// 진행 제공자를 교체합니다.
    pub fn with_progressions(mut self, provider: Arc<dyn ProgressionProvider>) -> Self {
        self.progressions = provider;
        self
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// 한 달의 시기 점수를 계산합니다.
    ///
    /// # 인자
    ///
    /// * `chart` - 명식
    /// * `event` - 이벤트 유형
    /// * `year`, `month` - 대상 연월 (1900~2100, 1~12)
    /// * `age` - 대운 조회용 나이
    /// * `options` - 단계 활성화 옵션
    ///
    /// # 반환
    ///
    /// 연도/월이 범위를 벗어나거나 대운 목록이 잘못되면 `SajuError::InvalidInput`.
    /// 선택 필드(용신, 기신, 대운)가 없는 것은 오류가 아니라 해당 단계의 생략입니다.
    pub fn score(
        &self,
        chart: &ChartInput,
        event: EventType,
        year: i32,
        month: u32,
        age: u32,
        options: &ScoreOptions,
    ) -> SajuResult<MonthlyTimingResult> {
        chart.validate()?;
        let pillar = ganji_for_month(year, month)?;
        let (month_start, month_mid, month_end) = month_bounds(year, month)?;

        let profile = profile_for(event);
        let w = &self.weights;
        let day_stem = chart.day_stem;
        let mut sheet = ScoreSheet::new(w.base_score);

        // 1. 월주 십신 / 십이운성
        let month_sibsin = sibsin(day_stem, pillar.stem);
        if profile.favors_sibsin(month_sibsin) {
            sheet.favor(
                w.favorable_sibsin,
                format!("월운 십신 {}: {} 유리", month_sibsin, event),
            );
        } else if profile.avoids_sibsin(month_sibsin) {
            sheet.avoid(
                w.avoid_sibsin,
                format!("월운 십신 {}: {} 불리", month_sibsin, event),
            );
        }

        let stage = twelve_stage(day_stem, pillar.branch);
        if profile.favors_stage(stage) {
            sheet.favor(
                w.favorable_stage,
                format!(
                    "월운 십이운성 {}({}점): {} 유리",
                    stage.korean_name(),
                    stage.score(),
                    event
                ),
            );
        } else if profile.avoids_stage(stage) {
            sheet.avoid(
                w.avoid_stage,
                format!(
                    "월운 십이운성 {}({}점): {} 불리",
                    stage.korean_name(),
                    stage.score(),
                    event
                ),
            );
        }

        // 2. 월 오행
        let element = pillar.branch.element();
        if profile.favors_element(element) {
            sheet.favor(
                w.favorable_element,
                format!("월운 오행 {}: {} 유리 오행", element, event),
            );
        }
        if chart.yongsin.is_some_and(|set| set.contains(element)) {
            sheet.favor(w.yongsin, format!("월운 오행 {}: 용신 부합", element));
        }
        if chart.kisin.is_some_and(|set| set.contains(element)) {
            sheet.avoid(w.kisin, format!("월운 오행 {}: 기신 해당", element));
        }

        // 3. 절기
        let term = if options.use_solar_terms {
            self.solar_terms.solar_term_for(month_mid)
        } else {
            None
        };
        if let Some(term) = &term {
            self.score_solar_term(&mut sheet, chart, profile, term);
        }

        // 4. 지지 관계
        let target_branch = match options.interaction_target {
            InteractionTarget::DayBranch => chart.day_branch,
            InteractionTarget::YearBranch => chart.year_branch,
        };
        let interaction = branch_interaction(pillar.branch, target_branch);
        // 가감 방향은 관계의 길흉으로 정하고 가중치는 크기에만 적용
        let magnitude = weighted(interaction.score, w.interaction_weight).abs();
        if magnitude > 0 {
            let reason = format!(
                "지지 {}: {}-{} ({})",
                interaction.kind.korean_name(),
                pillar.branch,
                target_branch,
                interaction.description
            );
            match interaction.impact {
                Impact::Positive => sheet.favor(magnitude, reason),
                Impact::Negative => sheet.avoid(magnitude, reason),
                Impact::Neutral => {}
            }
        }

        // 5. 대운
        if let Some(cycle) = daeun_stage_for(chart, age) {
            let label = format!("{}{}", cycle.stem, cycle.branch);

            let cycle_sibsin = sibsin(day_stem, cycle.stem);
            if profile.favors_sibsin(cycle_sibsin) {
                sheet.favor(
                    weighted(w.favorable_sibsin, w.daeun_weight),
                    format!("대운 {} 십신 {}: {} 유리", label, cycle_sibsin, event),
                );
            } else if profile.avoids_sibsin(cycle_sibsin) {
                sheet.avoid(
                    weighted(w.avoid_sibsin, w.daeun_weight),
                    format!("대운 {} 십신 {}: {} 불리", label, cycle_sibsin, event),
                );
            }

            let cycle_stage = twelve_stage(day_stem, cycle.branch);
            if profile.favors_stage(cycle_stage) {
                sheet.favor(
                    weighted(w.favorable_stage, w.daeun_weight),
                    format!(
                        "대운 {} 십이운성 {}: {} 유리",
                        label,
                        cycle_stage.korean_name(),
                        event
                    ),
                );
            } else if profile.avoids_stage(cycle_stage) {
                sheet.avoid(
                    weighted(w.avoid_stage, w.daeun_weight),
                    format!(
                        "대운 {} 십이운성 {}: {} 불리",
                        label,
                        cycle_stage.korean_name(),
                        event
                    ),
                );
            }

            if term.is_some_and(|t| t.element == cycle.element) {
                sheet.favor(
                    w.daeun_sync,
                    format!("대운-절기 오행 동기화 ({})", cycle.element),
                );
            }
        }

        // 6. 2차 진행
        if options.use_progressions {
            let p = self.progressions.progression(chart.birth_date, month_mid);
            if profile.venus_signs.contains(&p.venus_sign) {
                sheet.favor(
                    w.progression_venus_sign,
                    format!("진행 금성 {}: {} 유리", p.venus_sign, event),
                );
            }
            if profile.venus_houses.contains(&p.venus_house) {
                sheet.favor(
                    w.progression_venus_house,
                    format!("진행 금성 {}하우스: {} 유리", p.venus_house, event),
                );
            }
            if profile.sun_houses.contains(&p.sun_house) {
                sheet.favor(
                    w.progression_sun_house,
                    format!("진행 태양 {}하우스: {} 유리", p.sun_house, event),
                );
            }
            if profile.moon_phases.contains(&p.moon_phase) {
                sheet.favor(
                    w.progression_moon_phase,
                    format!("진행 달 위상 {}: {} 유리", p.moon_phase, event),
                );
            }
        }

        let mut score = sheet.score;
        if let Some(min) = w.min_score {
            score = score.max(min);
        }
        if let Some(max) = w.max_score {
            score = score.min(max);
        }
        debug!(
            event = %event,
            year,
            month,
            raw = sheet.score,
            score,
            "월별 점수 계산"
        );

        Ok(MonthlyTimingResult {
            year,
            month,
            score,
            reasons: sheet.reasons,
            avoid_reasons: sheet.avoid_reasons,
            month_start,
            month_mid,
            month_end,
        })
    }

    fn score_solar_term(
        &self,
        sheet: &mut ScoreSheet,
        chart: &ChartInput,
        profile: &EventProfile,
        term: &SolarTerm,
    ) {
        let w = &self.weights;
        if profile.favors_element(term.element) {
            sheet.favor(
                w.solar_term_element,
                format!(
                    "절기 {} 오행 {}: {} 유리",
                    term, term.element, profile.event
                ),
            );
        }
        if chart.yongsin.is_some_and(|set| set.contains(term.element)) {
            sheet.favor(
                w.solar_term_yongsin,
                format!("절기 {} 오행 {}: 용신 부합", term, term.element),
            );
        }
    }

    /// 연도 범위의 모든 월을 순서대로 채점합니다. 나이는 `chart.age_in(year)`.
    pub fn scan(
        &self,
        chart: &ChartInput,
        event: EventType,
        range: YearRange,
        options: &ScoreOptions,
    ) -> SajuResult<Vec<MonthlyTimingResult>> {
        range.validate()?;
        calendar::ensure_supported_year(range.start)?;
        calendar::ensure_supported_year(range.end)?;

        range
            .months()
            .map(|(year, month)| self.score(chart, event, year, month, chart.age_in(year), options))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use saju_core::{Branch, DaeunCycle, Element, Stem};

    /// 갑목 일간, 해수 일지, 1990년생.
    fn gap_chart() -> ChartInput {
        ChartInput::new(
            NaiveDate::from_ymd_opt(1990, 3, 10).unwrap(),
            Stem::Gap,
            Branch::Hae,
            Branch::In,
            Branch::O,
        )
    }

    fn offline() -> ScoreOptions {
        ScoreOptions::default().without_progressions()
    }

    #[test]
    fn test_career_in_month_breakdown() {
        // 2024-02 병인월: 식신(중립), 건록 +8, 목 +8, 입춘 목 +5, 인-해 육합 +8
        let r = MonthlyScorer::default()
            .score(&gap_chart(), EventType::Career, 2024, 2, 34, &offline())
            .unwrap();
        assert_eq!(r.score, 79);
        assert_eq!(
            r.reasons,
            vec![
                "월운 십이운성 건록(90점): 직업 유리".to_string(),
                "월운 오행 목(木): 직업 유리 오행".to_string(),
                "절기 입춘(Start of Spring) 오행 목(木): 직업 유리".to_string(),
                "지지 육합: 인-해 (인해합 목)".to_string(),
            ]
        );
        assert!(r.avoid_reasons.is_empty());
        assert_eq!(r.month_mid, NaiveDate::from_ymd_opt(2024, 2, 15).unwrap());
        assert_eq!(r.month_end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_solar_terms_off() {
        let r = MonthlyScorer::default()
            .score(
                &gap_chart(),
                EventType::Career,
                2024,
                2,
                34,
                &offline().without_solar_terms(),
            )
            .unwrap();
        assert_eq!(r.score, 74);
        assert!(r.reasons.iter().all(|s| !s.contains("절기")));
    }

    #[test]
    fn test_yongsin_adds_month_and_term_bonus() {
        let chart = gap_chart().with_yongsin(&[Element::Wood]);
        let r = MonthlyScorer::default()
            .score(&chart, EventType::Career, 2024, 2, 34, &offline())
            .unwrap();
        assert_eq!(r.score, 79 + 10 + 3);
        assert!(r.reasons.iter().any(|s| s == "월운 오행 목(木): 용신 부합"));
        assert!(r
            .reasons
            .iter()
            .any(|s| s == "절기 입춘(Start of Spring) 오행 목(木): 용신 부합"));
    }

    #[test]
    fn test_kisin_month() {
        // 2024-06 경오월: 편관 +10, 사 -8, 화 +8, 기신 화 -10, 망종 화 +5, 오-해 무관
        let chart = gap_chart().with_kisin(&[Element::Fire]);
        let r = MonthlyScorer::default()
            .score(&chart, EventType::Career, 2024, 6, 34, &offline())
            .unwrap();
        assert_eq!(r.score, 55);
        assert_eq!(
            r.avoid_reasons,
            vec![
                "월운 십이운성 사(20점): 직업 불리".to_string(),
                "월운 오행 화(火): 기신 해당".to_string(),
            ]
        );
        assert_eq!(r.reasons[0], "월운 십신 편관: 직업 유리");
    }

    #[test]
    fn test_empty_yongsin_is_noop() {
        let absent = MonthlyScorer::default()
            .score(&gap_chart(), EventType::Career, 2024, 2, 34, &offline())
            .unwrap();
        let empty = MonthlyScorer::default()
            .score(
                &gap_chart().with_yongsin(&[]).with_kisin(&[]),
                EventType::Career,
                2024,
                2,
                34,
                &offline(),
            )
            .unwrap();
        assert_eq!(absent, empty);
    }

    #[test]
    fn test_year_branch_target() {
        // 인-오 (연지 오) 삼합
        let options = offline().with_interaction_target(InteractionTarget::YearBranch);
        let r = MonthlyScorer::default()
            .score(&gap_chart(), EventType::Career, 2024, 2, 34, &options)
            .unwrap();
        assert_eq!(r.score, 50 + 8 + 8 + 5 + 6);
        assert!(r.reasons.iter().any(|s| s.starts_with("지지 삼합: 인-오")));
    }

    #[test]
    fn test_daeun_scoring_and_sync() {
        // 갑인 대운: 비견(중립), 건록 8 × 0.5 = 4, 목 == 입춘 목 → 동기화 +3
        let chart = gap_chart().with_daeun(vec![DaeunCycle {
            start_age: 30,
            end_age: 39,
            stem: Stem::Gap,
            branch: Branch::In,
            element: Element::Wood,
        }]);
        let r = MonthlyScorer::default()
            .score(&chart, EventType::Career, 2024, 2, 34, &offline())
            .unwrap();
        assert_eq!(r.score, 79 + 4 + 3);
        assert!(r.reasons.iter().any(|s| s == "대운 갑인 십이운성 건록: 직업 유리"));
        assert!(r.reasons.iter().any(|s| s == "대운-절기 오행 동기화 (목(木))"));

        // 나이가 구간 밖이면 변화 없음
        let outside = MonthlyScorer::default()
            .score(&chart, EventType::Career, 2024, 2, 45, &offline())
            .unwrap();
        assert_eq!(outside.score, 79);
        assert!(outside.reasons.iter().all(|s| !s.contains("대운")));
    }

    #[test]
    fn test_no_sync_without_solar_terms() {
        let chart = gap_chart().with_daeun(vec![DaeunCycle {
            start_age: 30,
            end_age: 39,
            stem: Stem::Gap,
            branch: Branch::In,
            element: Element::Wood,
        }]);
        let r = MonthlyScorer::default()
            .score(
                &chart,
                EventType::Career,
                2024,
                2,
                34,
                &offline().without_solar_terms(),
            )
            .unwrap();
        assert!(r.reasons.iter().all(|s| !s.contains("동기화")));
    }

    #[test]
    fn test_score_is_unbounded_by_default() {
        // 기본 99 + 29
        let weights = ScoringWeights {
            base_score: 99,
            ..Default::default()
        };
        let r = MonthlyScorer::new(weights)
            .score(&gap_chart(), EventType::Career, 2024, 2, 34, &offline())
            .unwrap();
        assert_eq!(r.score, 128);
    }

    #[test]
    fn test_configured_bounds_limit_score() {
        let weights = ScoringWeights {
            base_score: 99,
            min_score: Some(0),
            max_score: Some(100),
            ..Default::default()
        };
        let r = MonthlyScorer::new(weights)
            .score(&gap_chart(), EventType::Career, 2024, 2, 34, &offline())
            .unwrap();
        assert_eq!(r.score, 100);

        let weights = ScoringWeights {
            base_score: -50,
            min_score: Some(0),
            max_score: Some(100),
            ..Default::default()
        };
        let r = MonthlyScorer::new(weights)
            .score(&gap_chart(), EventType::Career, 2024, 2, 34, &offline())
            .unwrap();
        assert_eq!(r.score, 0);
    }

    #[test]
    fn test_clash_stays_avoid_reason_with_negative_weight() {
        // 2024-05 기사월: 사-해 충
        let plain = MonthlyScorer::default()
            .score(&gap_chart(), EventType::Career, 2024, 5, 34, &offline())
            .unwrap();
        let weights = ScoringWeights {
            interaction_weight: dec!(-1.0),
            ..Default::default()
        };
        let inverted = MonthlyScorer::new(weights)
            .score(&gap_chart(), EventType::Career, 2024, 5, 34, &offline())
            .unwrap();

        for r in [&plain, &inverted] {
            assert!(r.avoid_reasons.iter().any(|s| s.starts_with("지지 충: 사-해")));
            assert!(r.reasons.iter().all(|s| !s.starts_with("지지 ")));
        }
        assert_eq!(plain.score, inverted.score);
    }

    #[test]
    fn test_interaction_weight_scales() {
        let weights = ScoringWeights {
            interaction_weight: dec!(0.5),
            ..Default::default()
        };
        let r = MonthlyScorer::new(weights)
            .score(&gap_chart(), EventType::Career, 2024, 2, 34, &offline())
            .unwrap();
        assert_eq!(r.score, 79 - 4);
    }

    #[test]
    fn test_invalid_input() {
        let scorer = MonthlyScorer::default();
        let chart = gap_chart();
        assert!(scorer
            .score(&chart, EventType::Career, 2024, 13, 34, &offline())
            .unwrap_err()
            .is_invalid_input());
        assert!(scorer
            .score(&chart, EventType::Career, 1850, 1, 0, &offline())
            .unwrap_err()
            .is_invalid_input());

        let overlapping = gap_chart().with_daeun(vec![
            DaeunCycle {
                start_age: 0,
                end_age: 10,
                stem: Stem::Gap,
                branch: Branch::In,
                element: Element::Wood,
            },
            DaeunCycle {
                start_age: 5,
                end_age: 15,
                stem: Stem::Eul,
                branch: Branch::Myo,
                element: Element::Wood,
            },
        ]);
        assert!(scorer
            .score(&overlapping, EventType::Career, 2024, 2, 34, &offline())
            .unwrap_err()
            .is_invalid_input());
    }

    #[test]
    fn test_scan_covers_every_month() {
        let timeline = MonthlyScorer::default()
            .scan(
                &gap_chart(),
                EventType::Study,
                YearRange::new(2024, 2025),
                &ScoreOptions::default(),
            )
            .unwrap();
        assert_eq!(timeline.len(), 24);
        assert_eq!(timeline[0].sort_key(), (2024, 1));
        assert_eq!(timeline[23].sort_key(), (2025, 12));
        assert!(timeline.windows(2).all(|w| w[0].is_followed_by(&w[1])));
    }
}
