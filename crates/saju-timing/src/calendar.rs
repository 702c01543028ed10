//! 역법 변환기 (Calendrical Base Converter).
//!
//! 양력 날짜를 육십갑자 간지(연주·월주·일주·시주)로 변환합니다.
//! 고정된 기준점(epoch) 오프셋에 대한 순수 함수이며, 지원 범위는 1900~2100년입니다.
//!
//! # 월주 규칙
//!
//! - 월지: 양력 월 기준 근사 (1월=축, 2월=인, ..., 11월=해, 12월=자)
//! - 월간: 연간 기준 오호둔(五虎遁) 규칙 (갑·기년 → 병인월 ...)
//! - 1월(축월)은 직전 해의 절기 주기에 속하므로 월간은 `year - 1`의 연간으로 계산합니다.

use chrono::{Datelike, NaiveDate};
use saju_core::{Branch, Element, GanjiPair, SajuError, SajuResult, Stem};

/// 지원 최소 연도.
pub const MIN_SUPPORTED_YEAR: i32 = 1900;

/// 지원 최대 연도.
pub const MAX_SUPPORTED_YEAR: i32 = 2100;

/// 육십갑자 연도 기준점 (서기 4년 = 갑자년).
const YEAR_EPOCH: i32 = 4;

/// `num_days_from_ce()`에 더하면 일진 인덱스가 되는 오프셋 (2000-01-01 = 무오일).
const DAY_EPOCH_OFFSET: i32 = 14;

/// 중간일 (달 길이와 무관하게 15일 고정).
pub const MID_MONTH_DAY: u32 = 15;

/// 연도가 지원 범위인지 확인합니다.
pub fn ensure_supported_year(year: i32) -> SajuResult<()> {
    if (MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(SajuError::invalid(format!(
            "지원 범위({}~{})를 벗어난 연도: {}",
            MIN_SUPPORTED_YEAR, MAX_SUPPORTED_YEAR, year
        )))
    }
}

fn ensure_month(month: u32) -> SajuResult<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(SajuError::invalid(format!("잘못된 월: {}", month)))
    }
}

fn year_pillar_unchecked(year: i32) -> GanjiPair {
    GanjiPair::from_sexagenary_index((year - YEAR_EPOCH).rem_euclid(60) as usize)
}

/// 연주 (예: 1984 → 갑자, 2024 → 갑진).
pub fn ganji_for_year(year: i32) -> SajuResult<GanjiPair> {
    ensure_supported_year(year)?;
    Ok(year_pillar_unchecked(year))
}

/// 양력 월의 월지.
pub fn month_branch(month: u32) -> Branch {
    Branch::from_index(month as usize % 12)
}

/// 월주.
pub fn ganji_for_month(year: i32, month: u32) -> SajuResult<GanjiPair> {
    ensure_supported_year(year)?;
    ensure_month(month)?;

    let branch = month_branch(month);
    let solar_year = if month == 1 { year - 1 } else { year };
    let year_stem = year_pillar_unchecked(solar_year).stem;

    // 인월의 천간: 갑·기 → 병, 을·경 → 무, 병·신 → 경, 정·임 → 임, 무·계 → 갑
    let first_stem = (year_stem.index() % 5 * 2 + 2) % 10;
    let offset = (branch.index() + 12 - Branch::In.index()) % 12;

    Ok(GanjiPair {
        stem: Stem::from_index(first_stem + offset),
        branch,
    })
}

/// 월의 오행 (월지 본기).
pub fn month_element(year: i32, month: u32) -> SajuResult<Element> {
    Ok(ganji_for_month(year, month)?.branch.element())
}

/// 일주.
pub fn ganji_for_day(date: NaiveDate) -> SajuResult<GanjiPair> {
    ensure_supported_year(date.year())?;
    let index = (date.num_days_from_ce() + DAY_EPOCH_OFFSET).rem_euclid(60);
    Ok(GanjiPair::from_sexagenary_index(index as usize))
}

/// 시주. 자시는 23:00~00:59이며 시간은 오서둔(五鼠遁) 규칙을 따릅니다.
pub fn ganji_for_hour(day_stem: Stem, hour: u32) -> SajuResult<GanjiPair> {
    if hour > 23 {
        return Err(SajuError::invalid(format!("잘못된 시간: {}", hour)));
    }
    let branch = Branch::from_index(((hour + 1) / 2) as usize);
    let first_stem = day_stem.index() % 5 * 2;
    Ok(GanjiPair {
        stem: Stem::from_index(first_stem + branch.index()),
        branch,
    })
}

/// 월 경계 (시작일, 중간일, 말일).
pub fn month_bounds(year: i32, month: u32) -> SajuResult<(NaiveDate, NaiveDate, NaiveDate)> {
    ensure_month(month)?;
    let invalid = || SajuError::invalid(format!("잘못된 날짜: {}-{}", year, month));

    let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let mid = NaiveDate::from_ymd_opt(year, month, MID_MONTH_DAY).ok_or_else(invalid)?;
    let next_start = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(invalid)?;
    let end = next_start.pred_opt().ok_or_else(invalid)?;

    Ok((start, mid, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_year_pillars() {
        assert_eq!(ganji_for_year(1984).unwrap().to_string(), "갑자");
        assert_eq!(ganji_for_year(2024).unwrap().to_string(), "갑진");
        assert_eq!(ganji_for_year(2025).unwrap().to_string(), "을사");
        assert_eq!(ganji_for_year(1900).unwrap().to_string(), "경자");
    }

    #[test]
    fn test_year_out_of_range() {
        assert!(ganji_for_year(1899).unwrap_err().is_invalid_input());
        assert!(ganji_for_year(2101).unwrap_err().is_invalid_input());
        assert!(ganji_for_month(2200, 3).is_err());
    }

    #[test]
    fn test_month_pillars() {
        // 2024 갑진년: 2월 병인, 3월 정묘, 12월 병자
        assert_eq!(ganji_for_month(2024, 2).unwrap().to_string(), "병인");
        assert_eq!(ganji_for_month(2024, 3).unwrap().to_string(), "정묘");
        assert_eq!(ganji_for_month(2024, 12).unwrap().to_string(), "병자");
        // 2024년 1월은 계묘년 축월 → 을축
        assert_eq!(ganji_for_month(2024, 1).unwrap().to_string(), "을축");
        // 2025 을사년 2월 무인
        assert_eq!(ganji_for_month(2025, 2).unwrap().to_string(), "무인");
    }

    #[test]
    fn test_month_pillars_are_valid_pairs() {
        for year in [1900, 1955, 2000, 2100] {
            for month in 1..=12 {
                assert!(ganji_for_month(year, month).unwrap().is_valid());
            }
        }
    }

    #[test]
    fn test_invalid_month() {
        assert!(ganji_for_month(2024, 0).unwrap_err().is_invalid_input());
        assert!(ganji_for_month(2024, 13).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_month_element() {
        assert_eq!(month_element(2024, 2).unwrap(), Element::Wood);
        assert_eq!(month_element(2024, 6).unwrap(), Element::Fire);
        assert_eq!(month_element(2024, 9).unwrap(), Element::Metal);
        assert_eq!(month_element(2024, 12).unwrap(), Element::Water);
        assert_eq!(month_element(2024, 7).unwrap(), Element::Earth);
    }

    #[test]
    fn test_day_pillars() {
        assert_eq!(ganji_for_day(ymd(2000, 1, 1)).unwrap().to_string(), "무오");
        assert_eq!(ganji_for_day(ymd(2000, 1, 2)).unwrap().to_string(), "기미");
        // 60일 주기
        assert_eq!(
            ganji_for_day(ymd(2000, 3, 1)).unwrap(),
            ganji_for_day(ymd(2000, 1, 1)).unwrap()
        );
    }

    #[test]
    fn test_hour_pillars() {
        assert_eq!(ganji_for_hour(Stem::Gap, 0).unwrap().to_string(), "갑자");
        assert_eq!(ganji_for_hour(Stem::Gap, 23).unwrap().to_string(), "갑자");
        assert_eq!(ganji_for_hour(Stem::Gap, 1).unwrap().to_string(), "을축");
        assert_eq!(ganji_for_hour(Stem::Eul, 0).unwrap().to_string(), "병자");
        assert_eq!(ganji_for_hour(Stem::Mu, 12).unwrap().to_string(), "무오");
        assert!(ganji_for_hour(Stem::Gap, 24).is_err());
    }

    #[test]
    fn test_month_bounds() {
        let (start, mid, end) = month_bounds(2024, 2).unwrap();
        assert_eq!(start, ymd(2024, 2, 1));
        assert_eq!(mid, ymd(2024, 2, 15));
        assert_eq!(end, ymd(2024, 2, 29));

        let (_, _, dec_end) = month_bounds(2023, 12).unwrap();
        assert_eq!(dec_end, ymd(2023, 12, 31));
    }
}
