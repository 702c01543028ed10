//! 천간(天干)·지지(地支)와 육십갑자 간지 쌍.
//!
//! 천간 10자, 지지 12자는 인덱스(천간 mod 10, 지지 mod 12)로 고정된
//! 프로세스 전역 상수 테이블입니다.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::element::{Element, Polarity};

/// 천간.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stem {
    /// 갑(甲) 양목
    #[serde(rename = "갑", alias = "gap")]
    Gap,
    /// 을(乙) 음목
    #[serde(rename = "을", alias = "eul")]
    Eul,
    /// 병(丙) 양화
    #[serde(rename = "병", alias = "byeong")]
    Byeong,
    /// 정(丁) 음화
    #[serde(rename = "정", alias = "jeong")]
    Jeong,
    /// 무(戊) 양토
    #[serde(rename = "무", alias = "mu")]
    Mu,
    /// 기(己) 음토
    #[serde(rename = "기", alias = "gi")]
    Gi,
    /// 경(庚) 양금
    #[serde(rename = "경", alias = "gyeong")]
    Gyeong,
    /// 신(辛) 음금
    #[serde(rename = "신", alias = "sin")]
    Sin,
    /// 임(壬) 양수
    #[serde(rename = "임", alias = "im")]
    Im,
    /// 계(癸) 음수
    #[serde(rename = "계", alias = "gye")]
    Gye,
}

const STEM_NAMES: [(&str, &str); 10] = [
    ("갑", "甲"),
    ("을", "乙"),
    ("병", "丙"),
    ("정", "丁"),
    ("무", "戊"),
    ("기", "己"),
    ("경", "庚"),
    ("신", "辛"),
    ("임", "壬"),
    ("계", "癸"),
];

impl Stem {
    /// 갑부터 계까지 전체 천간.
    pub const ALL: [Stem; 10] = [
        Stem::Gap,
        Stem::Eul,
        Stem::Byeong,
        Stem::Jeong,
        Stem::Mu,
        Stem::Gi,
        Stem::Gyeong,
        Stem::Sin,
        Stem::Im,
        Stem::Gye,
    ];

    /// 인덱스 (갑=0 .. 계=9).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 인덱스로부터 천간 (mod 10).
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % 10]
    }

    /// 오행. 두 천간씩 같은 오행을 공유합니다.
    pub const fn element(self) -> Element {
        Element::from_index(self.index() / 2)
    }

    /// 음양.
    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// 한글 이름.
    pub const fn korean_name(self) -> &'static str {
        STEM_NAMES[self.index()].0
    }

    /// 한자.
    pub const fn hanja(self) -> &'static str {
        STEM_NAMES[self.index()].1
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.korean_name())
    }
}

impl FromStr for Stem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        STEM_NAMES
            .iter()
            .position(|(ko, hanja)| *ko == s || *hanja == s)
            .map(Stem::from_index)
            .ok_or_else(|| format!("Unknown stem: {}", s))
    }
}

/// 지지.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Branch {
    /// 자(子) 쥐
    #[serde(rename = "자", alias = "ja")]
    Ja,
    /// 축(丑) 소
    #[serde(rename = "축", alias = "chuk")]
    Chuk,
    /// 인(寅) 호랑이
    #[serde(rename = "인", alias = "in")]
    In,
    /// 묘(卯) 토끼
    #[serde(rename = "묘", alias = "myo")]
    Myo,
    /// 진(辰) 용
    #[serde(rename = "진", alias = "jin")]
    Jin,
    /// 사(巳) 뱀
    #[serde(rename = "사", alias = "sa")]
    Sa,
    /// 오(午) 말
    #[serde(rename = "오", alias = "o")]
    O,
    /// 미(未) 양
    #[serde(rename = "미", alias = "mi")]
    Mi,
    /// 신(申) 원숭이
    #[serde(rename = "신", alias = "sin")]
    Sin,
    /// 유(酉) 닭
    #[serde(rename = "유", alias = "yu")]
    Yu,
    /// 술(戌) 개
    #[serde(rename = "술", alias = "sul")]
    Sul,
    /// 해(亥) 돼지
    #[serde(rename = "해", alias = "hae")]
    Hae,
}

const BRANCH_NAMES: [(&str, &str); 12] = [
    ("자", "子"),
    ("축", "丑"),
    ("인", "寅"),
    ("묘", "卯"),
    ("진", "辰"),
    ("사", "巳"),
    ("오", "午"),
    ("미", "未"),
    ("신", "申"),
    ("유", "酉"),
    ("술", "戌"),
    ("해", "亥"),
];

const BRANCH_ELEMENTS: [Element; 12] = [
    Element::Water,
    Element::Earth,
    Element::Wood,
    Element::Wood,
    Element::Earth,
    Element::Fire,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Metal,
    Element::Earth,
    Element::Water,
];

impl Branch {
    /// 자부터 해까지 전체 지지.
    pub const ALL: [Branch; 12] = [
        Branch::Ja,
        Branch::Chuk,
        Branch::In,
        Branch::Myo,
        Branch::Jin,
        Branch::Sa,
        Branch::O,
        Branch::Mi,
        Branch::Sin,
        Branch::Yu,
        Branch::Sul,
        Branch::Hae,
    ];

    /// 인덱스 (자=0 .. 해=11).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 인덱스로부터 지지 (mod 12).
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    /// 본기 오행.
    pub const fn element(self) -> Element {
        BRANCH_ELEMENTS[self.index()]
    }

    /// 음양.
    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// 한글 이름.
    pub const fn korean_name(self) -> &'static str {
        BRANCH_NAMES[self.index()].0
    }

    /// 한자.
    pub const fn hanja(self) -> &'static str {
        BRANCH_NAMES[self.index()].1
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.korean_name())
    }
}

impl FromStr for Branch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        BRANCH_NAMES
            .iter()
            .position(|(ko, hanja)| *ko == s || *hanja == s)
            .map(Branch::from_index)
            .ok_or_else(|| format!("Unknown branch: {}", s))
    }
}

/// 간지 쌍 (천간 + 지지).
///
/// 연주·월주·일주·시주에 사용됩니다. 유효한 간지는 천간과 지지의 음양이 같습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GanjiPair {
    /// 천간
    pub stem: Stem,
    /// 지지
    pub branch: Branch,
}

impl GanjiPair {
    /// 간지 쌍 생성. 음양이 맞지 않으면 `None`.
    pub fn new(stem: Stem, branch: Branch) -> Option<Self> {
        let pair = Self { stem, branch };
        pair.is_valid().then_some(pair)
    }

    /// 육십갑자 인덱스로부터 생성 (갑자=0 .. 계해=59, mod 60).
    pub const fn from_sexagenary_index(index: usize) -> Self {
        let index = index % 60;
        Self {
            stem: Stem::from_index(index),
            branch: Branch::from_index(index),
        }
    }

    /// 천간·지지의 음양이 일치하는지 확인.
    pub fn is_valid(&self) -> bool {
        self.stem.index() % 2 == self.branch.index() % 2
    }

    /// 육십갑자 인덱스. 유효한 간지에서만 의미가 있습니다.
    pub const fn sexagenary_index(&self) -> usize {
        let s = self.stem.index() as i64;
        let b = self.branch.index() as i64;
        (6 * s - 5 * b).rem_euclid(60) as usize
    }

    /// 간지 오행 (천간 기준).
    pub const fn stem_element(&self) -> Element {
        self.stem.element()
    }

    /// 납음오행. 음양이 맞지 않는 쌍은 `None`.
    pub fn napeum(&self) -> Option<&'static Napeum> {
        if !self.is_valid() {
            return None;
        }
        NAPEUM_TABLE.get(self.sexagenary_index() / 2)
    }

    /// 한자 표기 (예: 甲子).
    pub fn hanja(&self) -> String {
        format!("{}{}", self.stem.hanja(), self.branch.hanja())
    }
}

impl fmt::Display for GanjiPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

/// 납음오행 항목.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Napeum {
    /// 한글 이름
    pub name: &'static str,
    /// 한자
    pub hanja: &'static str,
    /// 납음 오행
    pub element: Element,
}

const fn napeum(name: &'static str, hanja: &'static str, element: Element) -> Napeum {
    Napeum {
        name,
        hanja,
        element,
    }
}

/// 육십갑자 두 개씩 공유하는 30개 납음.
pub const NAPEUM_TABLE: [Napeum; 30] = [
    napeum("해중금", "海中金", Element::Metal),
    napeum("노중화", "爐中火", Element::Fire),
    napeum("대림목", "大林木", Element::Wood),
    napeum("노방토", "路傍土", Element::Earth),
    napeum("검봉금", "劍鋒金", Element::Metal),
    napeum("산두화", "山頭火", Element::Fire),
    napeum("간하수", "澗下水", Element::Water),
    napeum("성두토", "城頭土", Element::Earth),
    napeum("백랍금", "白蠟金", Element::Metal),
    napeum("양류목", "楊柳木", Element::Wood),
    napeum("천중수", "泉中水", Element::Water),
    napeum("옥상토", "屋上土", Element::Earth),
    napeum("벽력화", "霹靂火", Element::Fire),
    napeum("송백목", "松柏木", Element::Wood),
    napeum("장류수", "長流水", Element::Water),
    napeum("사중금", "沙中金", Element::Metal),
    napeum("산하화", "山下火", Element::Fire),
    napeum("평지목", "平地木", Element::Wood),
    napeum("벽상토", "壁上土", Element::Earth),
    napeum("금박금", "金箔金", Element::Metal),
    napeum("복등화", "覆燈火", Element::Fire),
    napeum("천하수", "天河水", Element::Water),
    napeum("대역토", "大驛土", Element::Earth),
    napeum("차천금", "釵釧金", Element::Metal),
    napeum("상자목", "桑柘木", Element::Wood),
    napeum("대계수", "大溪水", Element::Water),
    napeum("사중토", "沙中土", Element::Earth),
    napeum("천상화", "天上火", Element::Fire),
    napeum("석류목", "石榴木", Element::Wood),
    napeum("대해수", "大海水", Element::Water),
];
