//! 오행(五行)과 음양 정의.
//!
//! 상생: 목 → 화 → 토 → 금 → 수 → 목
//! 상극: 목 → 토 → 수 → 화 → 금 → 목

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 오행.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    /// 목(木)
    #[serde(alias = "목")]
    Wood,
    /// 화(火)
    #[serde(alias = "화")]
    Fire,
    /// 토(土)
    #[serde(alias = "토")]
    Earth,
    /// 금(金)
    #[serde(alias = "금")]
    Metal,
    /// 수(水)
    #[serde(alias = "수")]
    Water,
}

impl Element {
    /// 상생 순서의 전체 오행.
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    /// 상생 순서 인덱스 (목=0 .. 수=4).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 인덱스로부터 오행 (mod 5).
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % 5]
    }

    /// 이 오행이 생(生)하는 오행.
    pub const fn generates(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// 이 오행이 극(剋)하는 오행.
    pub const fn controls(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// 이 오행을 생하는 오행.
    pub const fn generated_by(self) -> Self {
        Self::from_index(self.index() + 4)
    }

    /// 이 오행을 극하는 오행.
    pub const fn controlled_by(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// 한글 이름.
    pub const fn korean_name(self) -> &'static str {
        match self {
            Element::Wood => "목",
            Element::Fire => "화",
            Element::Earth => "토",
            Element::Metal => "금",
            Element::Water => "수",
        }
    }

    /// 한자 이름.
    pub const fn hanja(self) -> &'static str {
        match self {
            Element::Wood => "木",
            Element::Fire => "火",
            Element::Earth => "土",
            Element::Metal => "金",
            Element::Water => "水",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.korean_name(), self.hanja())
    }
}

impl FromStr for Element {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wood" | "목" | "木" => Ok(Element::Wood),
            "fire" | "화" | "火" => Ok(Element::Fire),
            "earth" | "토" | "土" => Ok(Element::Earth),
            "metal" | "금" | "金" => Ok(Element::Metal),
            "water" | "수" | "水" => Ok(Element::Water),
            _ => Err(format!("Unknown element: {}", s)),
        }
    }
}

/// 음양.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// 양(陽)
    Yang,
    /// 음(陰)
    Yin,
}

impl Polarity {
    /// 짝수 인덱스는 양, 홀수 인덱스는 음.
    pub const fn from_index(index: usize) -> Self {
        if index % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }
}

/// 오행 집합.
///
/// 용신/기신 및 이벤트 프로필의 유리 오행을 표현합니다. 비트마스크로 저장하며
/// 직렬화 시 상생 순서의 오행 목록이 됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Element>", into = "Vec<Element>")]
pub struct ElementSet(u8);

impl ElementSet {
    /// 빈 집합.
    pub const EMPTY: ElementSet = ElementSet(0);

    /// 슬라이스로부터 집합 생성 (const 테이블용).
    pub const fn of(elements: &[Element]) -> Self {
        let mut bits = 0u8;
        let mut i = 0;
        while i < elements.len() {
            bits |= 1 << elements[i].index();
            i += 1;
        }
        ElementSet(bits)
    }

    /// 오행 포함 여부.
    pub const fn contains(self, element: Element) -> bool {
        self.0 & (1 << element.index()) != 0
    }

    /// 오행 추가.
    pub fn insert(&mut self, element: Element) {
        self.0 |= 1 << element.index();
    }

    /// 빈 집합 여부.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// 원소 개수.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// 상생 순서로 원소를 순회합니다.
    pub fn iter(self) -> impl Iterator<Item = Element> {
        Element::ALL.into_iter().filter(move |e| self.contains(*e))
    }
}

impl From<Vec<Element>> for ElementSet {
    fn from(elements: Vec<Element>) -> Self {
        elements.into_iter().collect()
    }
}

impl From<ElementSet> for Vec<Element> {
    fn from(set: ElementSet) -> Self {
        set.iter().collect()
    }
}

impl FromIterator<Element> for ElementSet {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        let mut set = ElementSet::EMPTY;
        for element in iter {
            set.insert(element);
        }
        set
    }
}

impl fmt::Display for ElementSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(Element::korean_name).collect();
        write!(f, "[{}]", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_cycle_is_closed() {
        let mut current = Element::Wood;
        let mut seen = Vec::new();
        for _ in 0..5 {
            assert!(!seen.contains(&current));
            seen.push(current);
            current = current.generates();
        }
        assert_eq!(current, Element::Wood);
        assert_eq!(
            seen,
            vec![
                Element::Wood,
                Element::Fire,
                Element::Earth,
                Element::Metal,
                Element::Water
            ]
        );
    }

    #[test]
    fn test_control_cycle() {
        assert_eq!(Element::Wood.controls(), Element::Earth);
        assert_eq!(Element::Earth.controls(), Element::Water);
        assert_eq!(Element::Water.controls(), Element::Fire);
        assert_eq!(Element::Fire.controls(), Element::Metal);
        assert_eq!(Element::Metal.controls(), Element::Wood);

        for e in Element::ALL {
            assert_eq!(e.controls().controlled_by(), e);
            assert_eq!(e.generates().generated_by(), e);
        }
    }

    #[test]
    fn test_element_from_str() {
        assert_eq!("wood".parse::<Element>().unwrap(), Element::Wood);
        assert_eq!("화".parse::<Element>().unwrap(), Element::Fire);
        assert_eq!("METAL".parse::<Element>().unwrap(), Element::Metal);
        assert!("stone".parse::<Element>().is_err());
    }

    #[test]
    fn test_element_set_serde() {
        let set = ElementSet::of(&[Element::Water, Element::Wood]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["wood","water"]"#);

        let parsed: ElementSet = serde_json::from_str(r#"["화", "earth"]"#).unwrap();
        assert!(parsed.contains(Element::Fire));
        assert!(parsed.contains(Element::Earth));
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_element_set_empty() {
        let set: ElementSet = serde_json::from_str("[]").unwrap();
        assert!(set.is_empty());
        assert_eq!(set.to_string(), "[]");
    }
}
