//! 날짜의 사주 간지 조회.
//!
//! 연주/월주는 엔진과 같은 양력 월 근사를 사용합니다 (1월은 직전 해의 절기 주기).

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use saju_core::GanjiPair;
use saju_timing::{ganji_for_day, ganji_for_hour, ganji_for_month, ganji_for_year, solar_term_for};
use serde::Serialize;

use super::{to_json, OutputFormat};

/// 간지 조회 설정.
#[derive(Debug)]
pub struct GanjiConfig {
    pub date: NaiveDate,
    pub hour: Option<u32>,
    pub format: OutputFormat,
}

/// 하나의 기둥.
#[derive(Debug, Clone, Serialize)]
pub struct PillarInfo {
    pub label: &'static str,
    pub ganji: String,
    pub hanja: String,
    pub element: String,
    pub napeum: Option<String>,
}

impl PillarInfo {
    fn new(label: &'static str, pair: GanjiPair) -> Self {
        Self {
            label,
            ganji: pair.to_string(),
            hanja: pair.hanja(),
            element: pair.stem_element().to_string(),
            napeum: pair
                .napeum()
                .map(|n| format!("{}({}) {}", n.name, n.hanja, n.element)),
        }
    }
}

/// 간지 조회 결과.
#[derive(Debug, Clone, Serialize)]
pub struct GanjiReport {
    pub date: NaiveDate,
    pub solar_term: Option<String>,
    pub pillars: Vec<PillarInfo>,
}

/// 날짜의 연/월/일(/시) 기둥을 계산합니다.
pub fn build_report(date: NaiveDate, hour: Option<u32>) -> Result<GanjiReport> {
    let solar_year = if date.month() == 1 {
        date.year() - 1
    } else {
        date.year()
    };

    let day = ganji_for_day(date)?;
    let mut pillars = vec![
        PillarInfo::new("연주", ganji_for_year(solar_year)?),
        PillarInfo::new("월주", ganji_for_month(date.year(), date.month())?),
        PillarInfo::new("일주", day),
    ];
    if let Some(hour) = hour {
        pillars.push(PillarInfo::new("시주", ganji_for_hour(day.stem, hour)?));
    }

    Ok(GanjiReport {
        date,
        solar_term: solar_term_for(date).map(|t| t.to_string()),
        pillars,
    })
}

/// 간지 조회 실행.
pub fn run_ganji(config: GanjiConfig) -> Result<()> {
    let report = build_report(config.date, config.hour)?;
    let content = match config.format {
        OutputFormat::Table => format_table(&report),
        OutputFormat::Json => to_json(&report)?,
    };
    println!("{}", content);
    Ok(())
}

fn format_table(report: &GanjiReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("날짜: {}\n", report.date));
    if let Some(term) = &report.solar_term {
        output.push_str(&format!("절기: {}\n", term));
    }
    output.push('\n');

    output.push_str(&format!(
        "{:<6} {:<8} {:<8} {:<10} {:<20}\n",
        "기둥", "간지", "한자", "천간오행", "납음"
    ));
    output.push_str(&"-".repeat(56));
    output.push('\n');

    for pillar in &report.pillars {
        output.push_str(&format!(
            "{:<6} {:<8} {:<8} {:<10} {:<20}\n",
            pillar.label,
            pillar.ganji,
            pillar.hanja,
            pillar.element,
            pillar.napeum.as_deref().unwrap_or("-")
        ));
    }

    output
}
