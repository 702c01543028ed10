//! 명식 입력 (ChartInput)과 대운 주기.
//!
//! 엔진의 유일한 입력입니다. 원시 생년월일 검증과 정규화는 외부 호출자의 책임이며,
//! 여기서는 대운 목록의 구조적 계약(오름차순, 겹침 없음)만 검증합니다.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{SajuError, SajuResult};
use crate::types::{Branch, Element, ElementSet, Stem};

/// 대운(大運) 주기.
///
/// `[start_age, end_age]` 양 끝을 포함하는 나이 구간에 적용됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaeunCycle {
    /// 시작 나이 (포함)
    pub start_age: u32,
    /// 종료 나이 (포함)
    pub end_age: u32,
    /// 대운 천간
    pub stem: Stem,
    /// 대운 지지
    pub branch: Branch,
    /// 대운 오행
    pub element: Element,
}

impl DaeunCycle {
    /// 나이가 이 주기에 속하는지 확인.
    pub fn contains(&self, age: u32) -> bool {
        self.start_age <= age && age <= self.end_age
    }
}

/// 정규화된 명식 입력.
///
/// 선택 필드는 `Option`으로 표현합니다. `None`은 "없음", `Some(빈 집합)`은
/// "있지만 비어 있음"으로 구분되며, 둘 다 해당 채점 단계에서 no-op입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartInput {
    /// 생년월일 (양력)
    pub birth_date: NaiveDate,
    /// 일간 (日干)
    pub day_stem: Stem,
    /// 일지
    pub day_branch: Branch,
    /// 월지
    pub month_branch: Branch,
    /// 연지
    pub year_branch: Branch,
    /// 용신 오행
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yongsin: Option<ElementSet>,
    /// 기신 오행
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kisin: Option<ElementSet>,
    /// 대운 목록 (나이 오름차순)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daeun: Option<Vec<DaeunCycle>>,
}

impl ChartInput {
    /// 필수 필드만으로 명식을 생성합니다.
    pub fn new(
        birth_date: NaiveDate,
        day_stem: Stem,
        day_branch: Branch,
        month_branch: Branch,
        year_branch: Branch,
    ) -> Self {
        Self {
            birth_date,
            day_stem,
            day_branch,
            month_branch,
            year_branch,
            yongsin: None,
            kisin: None,
            daeun: None,
        }
    }

    /// 용신을 설정합니다.
    pub fn with_yongsin(mut self, elements: &[Element]) -> Self {
        self.yongsin = Some(elements.iter().copied().collect());
        self
    }

    /// 기신을 설정합니다.
    pub fn with_kisin(mut self, elements: &[Element]) -> Self {
        self.kisin = Some(elements.iter().copied().collect());
        self
    }

    /// 대운 목록을 설정합니다.
    pub fn with_daeun(mut self, cycles: Vec<DaeunCycle>) -> Self {
        self.daeun = Some(cycles);
        self
    }

    /// 출생 연도.
    pub fn birth_year(&self) -> i32 {
        self.birth_date.year()
    }

    /// 대상 연도의 나이 (연도 차이 기준).
    pub fn age_in(&self, year: i32) -> u32 {
        (year - self.birth_year()).max(0) as u32
    }

    /// 구조적 계약을 검증합니다.
    ///
    /// 대운 구간은 `start_age <= end_age`여야 하고, 나이 오름차순이며 서로 겹치지 않아야 합니다.
    /// 대운 목록이 없거나 비어 있는 것은 유효합니다.
    pub fn validate(&self) -> SajuResult<()> {
        let Some(cycles) = &self.daeun else {
            return Ok(());
        };

        for (i, cycle) in cycles.iter().enumerate() {
            if cycle.start_age > cycle.end_age {
                return Err(SajuError::invalid(format!(
                    "대운 #{} 구간이 뒤집혔습니다: {}~{}",
                    i, cycle.start_age, cycle.end_age
                )));
            }
        }

        for (i, pair) in cycles.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.start_age <= prev.end_age {
                return Err(SajuError::invalid(format!(
                    "대운 #{}({}~{})와 #{}({}~{}) 구간이 겹치거나 정렬되지 않았습니다",
                    i,
                    prev.start_age,
                    prev.end_age,
                    i + 1,
                    next.start_age,
                    next.end_age
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle(start: u32, end: u32) -> DaeunCycle {
        DaeunCycle {
            start_age: start,
            end_age: end,
            stem: Stem::Byeong,
            branch: Branch::In,
            element: Element::Fire,
        }
    }

    fn chart() -> ChartInput {
        ChartInput::new(
            NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(),
            Stem::Gap,
            Branch::Ja,
            Branch::Sa,
            Branch::O,
        )
    }

    #[test]
    fn test_validate_without_daeun() {
        assert!(chart().validate().is_ok());
        assert!(chart().with_daeun(vec![]).validate().is_ok());
    }

    #[test]
    fn test_validate_ascending_cycles() {
        let c = chart().with_daeun(vec![cycle(3, 12), cycle(13, 22), cycle(23, 32)]);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_overlap() {
        let c = chart().with_daeun(vec![cycle(3, 12), cycle(12, 21)]);
        let err = c.validate().unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let c = chart().with_daeun(vec![cycle(12, 3)]);
        assert!(c.validate().unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_absent_vs_empty_yongsin() {
        let absent = chart();
        let empty = chart().with_yongsin(&[]);
        assert!(absent.yongsin.is_none());
        assert_eq!(empty.yongsin, Some(ElementSet::EMPTY));
        assert_ne!(absent, empty);
    }

    #[test]
    fn test_chart_from_json() {
        let json = r#"{
            "birth_date": "1990-05-15",
            "day_stem": "갑",
            "day_branch": "자",
            "month_branch": "사",
            "year_branch": "오",
            "kisin": ["fire"]
        }"#;
        let chart: ChartInput = serde_json::from_str(json).unwrap();
        assert_eq!(chart.day_stem, Stem::Gap);
        assert!(chart.yongsin.is_none());
        assert!(chart.kisin.unwrap().contains(Element::Fire));
        assert!(chart.daeun.is_none());
        assert_eq!(chart.birth_year(), 1990);
    }

    #[test]
    fn test_age_in() {
        let c = chart();
        assert_eq!(c.age_in(2025), 35);
        assert_eq!(c.age_in(1980), 0);
    }

    #[test]
    fn test_cycle_contains_inclusive() {
        let c = cycle(3, 12);
        assert!(c.contains(3));
        assert!(c.contains(12));
        assert!(!c.contains(13));
        assert!(!c.contains(2));
    }
}
