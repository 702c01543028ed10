//! 관계 태그: 십신, 십이운성, 지지 관계.
//!
//! 태그 자체만 정의합니다. 분류 규칙은 `saju-timing`의 분류기가 담당합니다.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 십신(十神). 일간 기준으로 다른 천간이 갖는 관계.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sibsin {
    /// 비견: 같은 오행, 같은 음양
    #[serde(rename = "비견")]
    Bigyeon,
    /// 겁재: 같은 오행, 다른 음양
    #[serde(rename = "겁재")]
    Geopjae,
    /// 식신: 일간이 생하는 오행, 같은 음양
    #[serde(rename = "식신")]
    Siksin,
    /// 상관: 일간이 생하는 오행, 다른 음양
    #[serde(rename = "상관")]
    Sanggwan,
    /// 편재: 일간이 극하는 오행, 같은 음양
    #[serde(rename = "편재")]
    Pyeonjae,
    /// 정재: 일간이 극하는 오행, 다른 음양
    #[serde(rename = "정재")]
    Jeongjae,
    /// 편관: 일간을 극하는 오행, 같은 음양
    #[serde(rename = "편관")]
    Pyeongwan,
    /// 정관: 일간을 극하는 오행, 다른 음양
    #[serde(rename = "정관")]
    Jeonggwan,
    /// 편인: 일간을 생하는 오행, 같은 음양
    #[serde(rename = "편인")]
    Pyeonin,
    /// 정인: 일간을 생하는 오행, 다른 음양
    #[serde(rename = "정인")]
    Jeongin,
}

impl Sibsin {
    /// 전체 십신.
    pub const ALL: [Sibsin; 10] = [
        Sibsin::Bigyeon,
        Sibsin::Geopjae,
        Sibsin::Siksin,
        Sibsin::Sanggwan,
        Sibsin::Pyeonjae,
        Sibsin::Jeongjae,
        Sibsin::Pyeongwan,
        Sibsin::Jeonggwan,
        Sibsin::Pyeonin,
        Sibsin::Jeongin,
    ];

    /// 한글 이름.
    pub const fn korean_name(self) -> &'static str {
        match self {
            Sibsin::Bigyeon => "비견",
            Sibsin::Geopjae => "겁재",
            Sibsin::Siksin => "식신",
            Sibsin::Sanggwan => "상관",
            Sibsin::Pyeonjae => "편재",
            Sibsin::Jeongjae => "정재",
            Sibsin::Pyeongwan => "편관",
            Sibsin::Jeonggwan => "정관",
            Sibsin::Pyeonin => "편인",
            Sibsin::Jeongin => "정인",
        }
    }
}

impl fmt::Display for Sibsin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.korean_name())
    }
}

/// 십이운성(十二運星). 일간 대비 지지의 생명력 단계.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TwelveStage {
    /// 장생
    #[serde(rename = "장생")]
    Jangsaeng,
    /// 목욕
    #[serde(rename = "목욕")]
    Mogyok,
    /// 관대
    #[serde(rename = "관대")]
    Gwandae,
    /// 건록
    #[serde(rename = "건록")]
    Geonrok,
    /// 제왕
    #[serde(rename = "제왕")]
    Jewang,
    /// 쇠
    #[serde(rename = "쇠")]
    Soe,
    /// 병
    #[serde(rename = "병")]
    Byeong,
    /// 사
    #[serde(rename = "사")]
    Sa,
    /// 묘
    #[serde(rename = "묘")]
    Myo,
    /// 절
    #[serde(rename = "절")]
    Jeol,
    /// 태
    #[serde(rename = "태")]
    Tae,
    /// 양
    #[serde(rename = "양")]
    Yang,
}

/// (한글 이름, 점수, 설명)
const STAGE_TABLE: [(&str, u8, &str); 12] = [
    ("장생", 80, "새로 태어나 성장을 시작하는 단계"),
    ("목욕", 50, "씻기고 다듬어지는 불안정한 단계"),
    ("관대", 70, "의관을 갖추고 사회에 나서는 단계"),
    ("건록", 90, "녹봉을 받으며 자립하는 단계"),
    ("제왕", 100, "기운이 정점에 이른 단계"),
    ("쇠", 50, "정점을 지나 기운이 줄어드는 단계"),
    ("병", 30, "기운이 약해져 병드는 단계"),
    ("사", 20, "기운이 멈추는 단계"),
    ("묘", 40, "기운이 저장되어 잠기는 단계"),
    ("절", 10, "기운이 끊어진 단계"),
    ("태", 60, "새 기운이 잉태되는 단계"),
    ("양", 70, "태중에서 길러지는 단계"),
];

impl TwelveStage {
    /// 장생부터 양까지 순서대로.
    pub const ALL: [TwelveStage; 12] = [
        TwelveStage::Jangsaeng,
        TwelveStage::Mogyok,
        TwelveStage::Gwandae,
        TwelveStage::Geonrok,
        TwelveStage::Jewang,
        TwelveStage::Soe,
        TwelveStage::Byeong,
        TwelveStage::Sa,
        TwelveStage::Myo,
        TwelveStage::Jeol,
        TwelveStage::Tae,
        TwelveStage::Yang,
    ];

    /// 순서 인덱스 (장생=0 .. 양=11).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 인덱스로부터 단계 (mod 12).
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    /// 원시 점수 (0~100). 이벤트 가중 전 신호입니다.
    pub const fn score(self) -> u8 {
        STAGE_TABLE[self.index()].1
    }

    /// 한글 이름.
    pub const fn korean_name(self) -> &'static str {
        STAGE_TABLE[self.index()].0
    }

    /// 설명.
    pub const fn description(self) -> &'static str {
        STAGE_TABLE[self.index()].2
    }
}

impl fmt::Display for TwelveStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.korean_name())
    }
}

/// 지지 관계 유형.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractionKind {
    /// 육합(六合)
    #[serde(rename = "육합")]
    Yukhap,
    /// 삼합(三合) - 삼합 국의 두 지지
    #[serde(rename = "삼합")]
    Samhap,
    /// 방합(方合) - 같은 계절 방위의 두 지지
    #[serde(rename = "방합")]
    Banghap,
    /// 충(沖)
    #[serde(rename = "충")]
    Chung,
    /// 파(破)
    #[serde(rename = "파")]
    Pa,
    /// 해(害)
    #[serde(rename = "해")]
    Hae,
    /// 원진(怨嗔)
    #[serde(rename = "원진")]
    Wonjin,
    /// 귀문(鬼門)
    #[serde(rename = "귀문")]
    Gwimun,
    /// 해당 관계 없음
    #[serde(rename = "neutral")]
    Neutral,
}

impl InteractionKind {
    /// 한글 이름.
    pub const fn korean_name(self) -> &'static str {
        match self {
            InteractionKind::Yukhap => "육합",
            InteractionKind::Samhap => "삼합",
            InteractionKind::Banghap => "방합",
            InteractionKind::Chung => "충",
            InteractionKind::Pa => "파",
            InteractionKind::Hae => "해",
            InteractionKind::Wonjin => "원진",
            InteractionKind::Gwimun => "귀문",
            InteractionKind::Neutral => "무관",
        }
    }

    /// 합 계열 여부.
    pub const fn is_combination(self) -> bool {
        matches!(
            self,
            InteractionKind::Yukhap | InteractionKind::Samhap | InteractionKind::Banghap
        )
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.korean_name())
    }
}

/// 관계의 길흉 방향.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    /// 길
    Positive,
    /// 흉
    Negative,
    /// 무관
    Neutral,
}

/// 두 지지 사이의 관계 분류 결과.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchInteraction {
    /// 관계 유형
    pub kind: InteractionKind,
    /// 길흉 방향
    pub impact: Impact,
    /// 부호 있는 점수 (길: 양수, 흉: 음수, 무관: 0)
    pub score: i32,
    /// 설명
    pub description: String,
}

impl BranchInteraction {
    /// 무관 관계.
    pub fn neutral() -> Self {
        Self {
            kind: InteractionKind::Neutral,
            impact: Impact::Neutral,
            score: 0,
            description: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_scores_in_range() {
        for stage in TwelveStage::ALL {
            assert!(stage.score() <= 100);
            assert!(!stage.description().is_empty());
        }
        assert_eq!(TwelveStage::Jewang.score(), 100);
        assert_eq!(TwelveStage::Jeol.score(), 10);
    }

    #[test]
    fn test_kind_families() {
        assert!(InteractionKind::Yukhap.is_combination());
        assert!(InteractionKind::Banghap.is_combination());
        assert!(!InteractionKind::Chung.is_combination());
        assert!(!InteractionKind::Neutral.is_combination());
    }

    #[test]
    fn test_neutral_interaction() {
        let n = BranchInteraction::neutral();
        assert_eq!(n.kind, InteractionKind::Neutral);
        assert_eq!(n.impact, Impact::Neutral);
        assert_eq!(n.score, 0);
    }

    #[test]
    fn test_sibsin_serde_korean() {
        assert_eq!(serde_json::to_string(&Sibsin::Jeonggwan).unwrap(), r#""정관""#);
        let s: Sibsin = serde_json::from_str(r#""편인""#).unwrap();
        assert_eq!(s, Sibsin::Pyeonin);
    }
}
