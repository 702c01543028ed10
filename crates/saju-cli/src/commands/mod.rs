//! CLI 명령어 구현 모듈.

pub mod ganji;
pub mod rank;
pub mod score;

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use saju_core::{ChartInput, EventType};
use serde::Serialize;

/// 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => Err(anyhow::anyhow!("Invalid format: {}. Use: table, json", s)),
        }
    }
}

/// 명식 JSON 파일을 읽습니다.
pub fn load_chart(path: impl AsRef<Path>) -> Result<ChartInput> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read chart file: {}", path.display()))?;
    let chart: ChartInput = serde_json::from_str(&content)
        .with_context(|| format!("Invalid chart JSON: {}", path.display()))?;
    chart
        .validate()
        .with_context(|| format!("Invalid chart: {}", path.display()))?;
    Ok(chart)
}

/// 이벤트 유형 파싱 (영문 또는 한글).
pub fn parse_event(s: &str) -> Result<EventType> {
    s.parse::<EventType>().map_err(|e| anyhow::anyhow!("{}", e))
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date format: {}. Expected YYYY-MM-DD", s))
}

pub(crate) fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}
