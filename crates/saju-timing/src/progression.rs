//! 2차 진행법(secondary progression) 근사.
//!
//! 출생 후 하루를 인생의 1년으로 대응시켜 진행된 천체 위치를 구합니다.
//! 천문력 수준의 정밀도가 아니라 J2000 평균 궤도 요소를 사용한 결정론적 근사이며,
//! 같은 입력에는 항상 같은 결과를 반환합니다.
//!
//! 하우스는 자연 하우스(양자리 = 1하우스)를 사용합니다.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

/// 1년 평균 일수 (그레고리력).
const DAYS_PER_YEAR: f64 = 365.2425;

/// 2000-01-01의 `num_days_from_ce()`.
const J2000_DAYS_FROM_CE: i32 = 730_120;

/// 금성 궤도 반경 (AU).
const VENUS_RADIUS_AU: f64 = 0.723;

/// 황도 12궁.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// 황경(도)이 속한 궁.
    pub fn from_longitude(longitude: f64) -> Self {
        let index = (normalize_degrees(longitude) / 30.0).floor() as usize;
        Self::ALL[index % 12]
    }

    /// 자연 하우스 번호 (1~12).
    pub const fn natural_house(self) -> u8 {
        self.index() as u8 + 1
    }

    pub const fn korean_name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "양자리",
            ZodiacSign::Taurus => "황소자리",
            ZodiacSign::Gemini => "쌍둥이자리",
            ZodiacSign::Cancer => "게자리",
            ZodiacSign::Leo => "사자자리",
            ZodiacSign::Virgo => "처녀자리",
            ZodiacSign::Libra => "천칭자리",
            ZodiacSign::Scorpio => "전갈자리",
            ZodiacSign::Sagittarius => "궁수자리",
            ZodiacSign::Capricorn => "염소자리",
            ZodiacSign::Aquarius => "물병자리",
            ZodiacSign::Pisces => "물고기자리",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.korean_name())
    }
}

/// 달의 위상 (태양-달 이각 45도 구간).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    pub const ALL: [MoonPhase; 8] = [
        MoonPhase::New,
        MoonPhase::WaxingCrescent,
        MoonPhase::FirstQuarter,
        MoonPhase::WaxingGibbous,
        MoonPhase::Full,
        MoonPhase::WaningGibbous,
        MoonPhase::LastQuarter,
        MoonPhase::WaningCrescent,
    ];

    /// 이각(달 황경 - 태양 황경)으로부터 위상을 구합니다. 각 위상은 중심 ±22.5도.
    pub fn from_elongation(elongation: f64) -> Self {
        let index = ((normalize_degrees(elongation) + 22.5) / 45.0).floor() as usize;
        Self::ALL[index % 8]
    }

    pub const fn korean_name(self) -> &'static str {
        match self {
            MoonPhase::New => "삭",
            MoonPhase::WaxingCrescent => "초승달",
            MoonPhase::FirstQuarter => "상현",
            MoonPhase::WaxingGibbous => "차는 달",
            MoonPhase::Full => "망",
            MoonPhase::WaningGibbous => "기우는 달",
            MoonPhase::LastQuarter => "하현",
            MoonPhase::WaningCrescent => "그믐달",
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.korean_name())
    }
}

/// 진행된 천체 위치 태그.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progression {
    pub moon_phase: MoonPhase,
    pub moon_sign: ZodiacSign,
    pub sun_sign: ZodiacSign,
    pub sun_house: u8,
    pub venus_sign: ZodiacSign,
    pub venus_house: u8,
}

fn normalize_degrees(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}

/// 태양 시황경 (평균 황경 + 중심차).
fn sun_longitude(n: f64) -> f64 {
    let mean = 280.460 + 0.985_647_4 * n;
    let anomaly = (357.528 + 0.985_600_3 * n).to_radians();
    normalize_degrees(mean + 1.915 * anomaly.sin() + 0.020 * (2.0 * anomaly).sin())
}

fn moon_longitude(n: f64) -> f64 {
    normalize_degrees(218.316 + 13.176_396 * n)
}

/// 금성 지심 황경. 일심 평균 황경을 원궤도로 두고 지구 위치(태양 + 180도)를 빼서 구합니다.
fn venus_longitude(n: f64, sun: f64) -> f64 {
    let venus = (181.979_801 + 1.602_130_224_4 * n).to_radians();
    let earth = (sun + 180.0).to_radians();
    let x = VENUS_RADIUS_AU * venus.cos() - earth.cos();
    let y = VENUS_RADIUS_AU * venus.sin() - earth.sin();
    normalize_degrees(y.atan2(x).to_degrees())
}

/// 2차 진행 계산.
///
/// # 인자
///
/// * `birth` - 출생일
/// * `target` - 대상일 (출생일 이전이면 출생 시점으로 봅니다)
pub fn secondary_progression(birth: NaiveDate, target: NaiveDate) -> Progression {
    let elapsed_years = ((target - birth).num_days().max(0) as f64) / DAYS_PER_YEAR;
    // 진행일 = 출생일 + 경과 연수(일)
    let n = f64::from(birth.num_days_from_ce() - J2000_DAYS_FROM_CE) + elapsed_years;

    let sun = sun_longitude(n);
    let moon = moon_longitude(n);
    let venus = venus_longitude(n, sun);

    let sun_sign = ZodiacSign::from_longitude(sun);
    let venus_sign = ZodiacSign::from_longitude(venus);

    Progression {
        moon_phase: MoonPhase::from_elongation(moon - sun),
        moon_sign: ZodiacSign::from_longitude(moon),
        sun_sign,
        sun_house: sun_sign.natural_house(),
        venus_sign,
        venus_house: venus_sign.natural_house(),
    }
}

// ==================== 제공자 ====================

/// 진행 천체 위치 제공자.
pub trait ProgressionProvider: Send + Sync {
    fn progression(&self, birth: NaiveDate, target: NaiveDate) -> Progression;
}

/// 평균 궤도 요소 기반 기본 제공자.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanMotionProgression;

impl ProgressionProvider for MeanMotionProgression {
    fn progression(&self, birth: NaiveDate, target: NaiveDate) -> Progression {
        secondary_progression(birth, target)
    }
}
