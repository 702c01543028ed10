//! 24절기 조회.
//!
//! 절기는 태양 황경에 묶인 고정 달력 표지이며, 각 절기는 해당 월지의 오행을 가집니다.
//! 시작일은 연도와 무관한 고정 (월, 일) 근사치를 사용하며, 각 절기의 구간은
//! 다음 절기 시작일 직전까지입니다 (`[start, end)`).
//!
//! 동지 구간(12/22 ~ 1/6)은 연도 경계를 넘어가므로 조회 시 명시적으로 처리합니다.

use chrono::{Datelike, NaiveDate};
use saju_core::Element;
use serde::Serialize;
use std::fmt;

/// 절기 유형.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TermType {
    /// 절(節): 월을 여는 절기
    Major,
    /// 중기(中氣)
    Minor,
}

/// 연도와 무관한 (월, 일) 표지.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    const fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    /// 비교용 키 (`month * 100 + day`).
    pub const fn key(self) -> u32 {
        self.month * 100 + self.day
    }

    fn of(date: NaiveDate) -> Self {
        Self::new(date.month(), date.day())
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

/// 절기 정보.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarTerm {
    /// 영문 이름
    pub name: &'static str,
    /// 한글 이름
    pub korean_name: &'static str,
    /// 오행 (소속 월지 기준)
    pub element: Element,
    /// 태양 황경 (도)
    pub longitude: u16,
    /// 구간 시작 (포함)
    pub start: MonthDay,
    /// 구간 끝 (미포함, 다음 절기 시작)
    pub end: MonthDay,
    /// 절/중기 구분
    pub term_type: TermType,
}

impl SolarTerm {
    /// 구간이 연도 경계를 넘는지 여부.
    pub const fn wraps_year(&self) -> bool {
        self.end.key() <= self.start.key()
    }

    /// 날짜가 이 절기 구간 `[start, end)`에 속하는지 확인합니다.
    pub fn contains(&self, date: NaiveDate) -> bool {
        let key = MonthDay::of(date).key();
        let (start, end) = (self.start.key(), self.end.key());
        if self.wraps_year() {
            key >= start || key < end
        } else {
            key >= start && key < end
        }
    }
}

impl fmt::Display for SolarTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.korean_name, self.name)
    }
}

macro_rules! term {
    ($name:expr, $ko:expr, $elem:ident, $lon:expr, ($sm:expr, $sd:expr), ($em:expr, $ed:expr), $kind:ident) => {
        SolarTerm {
            name: $name,
            korean_name: $ko,
            element: Element::$elem,
            longitude: $lon,
            start: MonthDay::new($sm, $sd),
            end: MonthDay::new($em, $ed),
            term_type: TermType::$kind,
        }
    };
}

/// 24절기 (소한부터 달력 순서).
pub static SOLAR_TERMS: [SolarTerm; 24] = [
    term!("Minor Cold", "소한", Earth, 285, (1, 6), (1, 20), Major),
    term!("Major Cold", "대한", Earth, 300, (1, 20), (2, 4), Minor),
    term!("Start of Spring", "입춘", Wood, 315, (2, 4), (2, 19), Major),
    term!("Rain Water", "우수", Wood, 330, (2, 19), (3, 6), Minor),
    term!("Awakening of Insects", "경칩", Wood, 345, (3, 6), (3, 21), Major),
    term!("Spring Equinox", "춘분", Wood, 0, (3, 21), (4, 5), Minor),
    term!("Clear and Bright", "청명", Earth, 15, (4, 5), (4, 20), Major),
    term!("Grain Rain", "곡우", Earth, 30, (4, 20), (5, 6), Minor),
    term!("Start of Summer", "입하", Fire, 45, (5, 6), (5, 21), Major),
    term!("Grain Buds", "소만", Fire, 60, (5, 21), (6, 6), Minor),
    term!("Grain in Ear", "망종", Fire, 75, (6, 6), (6, 21), Major),
    term!("Summer Solstice", "하지", Fire, 90, (6, 21), (7, 7), Minor),
    term!("Minor Heat", "소서", Earth, 105, (7, 7), (7, 23), Major),
    term!("Major Heat", "대서", Earth, 120, (7, 23), (8, 8), Minor),
    term!("Start of Autumn", "입추", Metal, 135, (8, 8), (8, 23), Major),
    term!("End of Heat", "처서", Metal, 150, (8, 23), (9, 8), Minor),
    term!("White Dew", "백로", Metal, 165, (9, 8), (9, 23), Major),
    term!("Autumn Equinox", "추분", Metal, 180, (9, 23), (10, 8), Minor),
    term!("Cold Dew", "한로", Earth, 195, (10, 8), (10, 23), Major),
    term!("Frost Descent", "상강", Earth, 210, (10, 23), (11, 7), Minor),
    term!("Start of Winter", "입동", Water, 225, (11, 7), (11, 22), Major),
    term!("Minor Snow", "소설", Water, 240, (11, 22), (12, 7), Minor),
    term!("Major Snow", "대설", Water, 255, (12, 7), (12, 22), Major),
    term!("Winter Solstice", "동지", Water, 270, (12, 22), (1, 6), Minor),
];

/// 날짜가 속한 절기를 찾습니다 (선형 탐색).
pub fn solar_term_for(date: NaiveDate) -> Option<&'static SolarTerm> {
    SOLAR_TERMS.iter().find(|term| term.contains(date))
}

/// 한글 이름으로 절기를 찾습니다.
pub fn solar_term_by_korean_name(name: &str) -> Option<&'static SolarTerm> {
    SOLAR_TERMS.iter().find(|term| term.korean_name == name)
}

// ==================== 제공자 ====================

/// 절기 조회 제공자.
///
/// 채점 엔진은 이 트레이트를 통해 절기를 조회하므로 테스트에서 대체할 수 있습니다.
pub trait SolarTermProvider: Send + Sync {
    /// 날짜가 속한 절기. 없으면 `None`.
    fn solar_term_for(&self, date: NaiveDate) -> Option<SolarTerm>;
}

/// 고정 (월, 일) 표를 사용하는 기본 제공자.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedSolarTerms;

impl SolarTermProvider for FixedSolarTerms {
    fn solar_term_for(&self, date: NaiveDate) -> Option<SolarTerm> {
        solar_term_for(date).copied()
    }
}
