//! 시기 예측 결과 타입.
//!
//! - [`MonthlyTimingResult`]: 한 달의 점수와 근거 목록
//! - [`OptimalPeriod`]: 인접한 고득점 월을 병합한 기간과 등급

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{SajuError, SajuResult};

/// 월별 시기 점수.
///
/// `reasons`/`avoid_reasons`는 정렬하지 않은 삽입 순서(채점 단계 순서)를 유지합니다.
/// 생성 후 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTimingResult {
    /// 연도
    pub year: i32,
    /// 월 (1~12)
    pub month: u32,
    /// 최종 점수 (기본 점수에 단계별 가감을 더한 값)
    pub score: i32,
    /// 유리한 근거 (평가 순서)
    pub reasons: Vec<String>,
    /// 불리한 근거 (평가 순서)
    pub avoid_reasons: Vec<String>,
    /// 월 시작일 (1일)
    pub month_start: NaiveDate,
    /// 월 중간일 (15일 고정)
    pub month_mid: NaiveDate,
    /// 월 말일
    pub month_end: NaiveDate,
}

impl MonthlyTimingResult {
    /// 다음 달과 달력상 인접한지 확인 (12월 → 다음 해 1월 포함).
    pub fn is_followed_by(&self, next: &MonthlyTimingResult) -> bool {
        self.month_end.succ_opt() == Some(next.month_start)
    }

    /// (연, 월) 정렬 키.
    pub fn sort_key(&self) -> (i32, u32) {
        (self.month_start.year(), self.month_start.month())
    }
}

/// 기간 등급.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    /// 85점 이상
    S,
    /// 70점 이상
    A,
    /// 55점 이상
    B,
    /// 40점 이상
    C,
    /// 40점 미만
    D,
}

/// (하한 점수, 등급) 계단. 위에서부터 처음 만족하는 등급을 사용합니다.
pub const GRADE_THRESHOLDS: [(i32, Grade); 4] =
    [(85, Grade::S), (70, Grade::A), (55, Grade::B), (40, Grade::C)];

impl Grade {
    /// 대표 점수로부터 등급 산출.
    pub fn from_score(score: i32) -> Self {
        GRADE_THRESHOLDS
            .iter()
            .find(|(min, _)| score >= *min)
            .map(|(_, grade)| *grade)
            .unwrap_or(Grade::D)
    }

    /// 등급 설명.
    pub const fn label(self) -> &'static str {
        match self {
            Grade::S => "최상",
            Grade::A => "우수",
            Grade::B => "양호",
            Grade::C => "보통",
            Grade::D => "주의",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Grade::S => "S",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        };
        f.write_str(s)
    }
}

/// 최적 기간.
///
/// 임계값을 넘는 연속 월을 하나로 병합한 결과입니다. 엔진은 저장하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimalPeriod {
    /// 첫 월의 시작일
    pub start_date: NaiveDate,
    /// 마지막 월의 말일
    pub end_date: NaiveDate,
    /// 대표 점수 (구성 월 중 최댓값)
    pub score: i32,
    /// 등급
    pub grade: Grade,
    /// 유리한 근거 (중복 제거, 최초 등장 순서)
    pub reasons: Vec<String>,
    /// 불리한 근거 (중복 제거, 최초 등장 순서)
    pub avoid_reasons: Vec<String>,
    /// 구성 월 수
    pub month_count: u32,
    /// 구성 월 평균 점수 (소수점 버림)
    pub average_score: i32,
}

/// 검색 연도 범위 (양 끝 포함).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl YearRange {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// 시작 연도가 끝 연도보다 크지 않은지 확인합니다.
    pub fn validate(&self) -> SajuResult<()> {
        if self.start > self.end {
            return Err(SajuError::invalid(format!(
                "연도 범위가 뒤집혔습니다: {}~{}",
                self.start, self.end
            )));
        }
        Ok(())
    }

    /// 범위의 연도들.
    pub fn years(&self) -> std::ops::RangeInclusive<i32> {
        self.start..=self.end
    }

    /// 범위의 (연, 월) 순서쌍.
    pub fn months(&self) -> impl Iterator<Item = (i32, u32)> {
        self.years().flat_map(|year| (1..=12).map(move |month| (year, month)))
    }

    /// 연도 수.
    pub fn len(&self) -> usize {
        (self.end - self.start + 1).max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}~{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(year: i32, month: u32) -> MonthlyTimingResult {
        let start = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        let next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap()
        };
        MonthlyTimingResult {
            year,
            month,
            score: 50,
            reasons: vec![],
            avoid_reasons: vec![],
            month_start: start,
            month_mid: NaiveDate::from_ymd_opt(year, month, 15).unwrap(),
            month_end: next.pred_opt().unwrap(),
        }
    }

    #[test]
    fn test_grade_staircase() {
        assert_eq!(Grade::from_score(100), Grade::S);
        assert_eq!(Grade::from_score(85), Grade::S);
        assert_eq!(Grade::from_score(84), Grade::A);
        assert_eq!(Grade::from_score(70), Grade::A);
        assert_eq!(Grade::from_score(69), Grade::B);
        assert_eq!(Grade::from_score(55), Grade::B);
        assert_eq!(Grade::from_score(54), Grade::C);
        assert_eq!(Grade::from_score(40), Grade::C);
        assert_eq!(Grade::from_score(39), Grade::D);
        assert_eq!(Grade::from_score(0), Grade::D);
    }

    #[test]
    fn test_adjacency_across_year() {
        assert!(month(2024, 12).is_followed_by(&month(2025, 1)));
        assert!(month(2024, 2).is_followed_by(&month(2024, 3)));
        assert!(!month(2024, 2).is_followed_by(&month(2024, 4)));
        assert!(!month(2024, 3).is_followed_by(&month(2024, 2)));
    }

    #[test]
    fn test_year_range() {
        let range = YearRange::new(2024, 2025);
        assert!(range.validate().is_ok());
        assert_eq!(range.len(), 2);
        assert_eq!(range.months().count(), 24);
        assert_eq!(range.months().nth(12), Some((2025, 1)));

        let inverted = YearRange::new(2025, 2024);
        assert!(inverted.validate().unwrap_err().is_invalid_input());
        assert!(inverted.is_empty());
    }

    #[test]
    fn test_grade_display() {
        assert_eq!(Grade::S.to_string(), "S");
        assert_eq!(Grade::D.label(), "주의");
    }
}
