//! 이벤트 유형 정의.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 시기를 예측할 인생 이벤트 유형.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    /// 결혼
    Marriage,
    /// 직업/승진
    Career,
    /// 투자
    Investment,
    /// 이사
    Move,
    /// 학업/시험
    Study,
    /// 건강
    Health,
    /// 연애
    Relationship,
}

impl EventType {
    /// 전체 이벤트 유형.
    pub const ALL: [EventType; 7] = [
        EventType::Marriage,
        EventType::Career,
        EventType::Investment,
        EventType::Move,
        EventType::Study,
        EventType::Health,
        EventType::Relationship,
    ];

    /// 한글 이름.
    pub const fn korean_name(self) -> &'static str {
        match self {
            EventType::Marriage => "결혼",
            EventType::Career => "직업",
            EventType::Investment => "투자",
            EventType::Move => "이사",
            EventType::Study => "학업",
            EventType::Health => "건강",
            EventType::Relationship => "연애",
        }
    }

    /// 영문 식별자.
    pub const fn as_str(self) -> &'static str {
        match self {
            EventType::Marriage => "marriage",
            EventType::Career => "career",
            EventType::Investment => "investment",
            EventType::Move => "move",
            EventType::Study => "study",
            EventType::Health => "health",
            EventType::Relationship => "relationship",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.korean_name())
    }
}

impl FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        EventType::ALL
            .into_iter()
            .find(|e| e.as_str() == s || e.korean_name() == s)
            .ok_or_else(|| format!("Unknown event type: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_from_str() {
        assert_eq!("career".parse::<EventType>().unwrap(), EventType::Career);
        assert_eq!("MARRIAGE".parse::<EventType>().unwrap(), EventType::Marriage);
        assert_eq!("이사".parse::<EventType>().unwrap(), EventType::Move);
        assert!("lottery".parse::<EventType>().is_err());
    }

    #[test]
    fn test_event_type_serde() {
        assert_eq!(
            serde_json::to_string(&EventType::Relationship).unwrap(),
            r#""relationship""#
        );
    }
}
