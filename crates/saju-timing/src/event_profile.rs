//! 이벤트 유형별 선호 프로필.
//!
//! 각 이벤트 유형마다 유리/불리한 십신, 유리/불리한 십이운성, 유리한 오행과
//! 2차 진행 세부 규칙(금성 궁/하우스, 태양 하우스, 달 위상)을 정의하는 정적 표입니다.
//! 프로세스 전역에서 읽기 전용으로 사용합니다.

use saju_core::{Element, ElementSet, EventType, Sibsin, TwelveStage};

use crate::progression::{MoonPhase, ZodiacSign};

/// 이벤트 선호 프로필.
#[derive(Debug, Clone, PartialEq)]
pub struct EventProfile {
    pub event: EventType,
    pub favorable_sibsin: &'static [Sibsin],
    pub avoid_sibsin: &'static [Sibsin],
    pub favorable_stages: &'static [TwelveStage],
    pub avoid_stages: &'static [TwelveStage],
    pub favorable_elements: ElementSet,
    /// 유리한 진행 금성 궁
    pub venus_signs: &'static [ZodiacSign],
    /// 유리한 진행 금성 하우스
    pub venus_houses: &'static [u8],
    /// 유리한 진행 태양 하우스
    pub sun_houses: &'static [u8],
    /// 유리한 진행 달 위상
    pub moon_phases: &'static [MoonPhase],
}

impl EventProfile {
    pub fn favors_sibsin(&self, sibsin: Sibsin) -> bool {
        self.favorable_sibsin.contains(&sibsin)
    }

    pub fn avoids_sibsin(&self, sibsin: Sibsin) -> bool {
        self.avoid_sibsin.contains(&sibsin)
    }

    pub fn favors_stage(&self, stage: TwelveStage) -> bool {
        self.favorable_stages.contains(&stage)
    }

    pub fn avoids_stage(&self, stage: TwelveStage) -> bool {
        self.avoid_stages.contains(&stage)
    }

    pub fn favors_element(&self, element: Element) -> bool {
        self.favorable_elements.contains(element)
    }
}

use Sibsin::*;
use TwelveStage as Ts;

const ROMANTIC_VENUS_SIGNS: &[ZodiacSign] =
    &[ZodiacSign::Taurus, ZodiacSign::Libra, ZodiacSign::Pisces];

static PROFILES: [EventProfile; 7] = [
    EventProfile {
        event: EventType::Marriage,
        favorable_sibsin: &[Jeongjae, Jeonggwan, Siksin, Jeongin],
        avoid_sibsin: &[Geopjae, Sanggwan, Pyeongwan],
        favorable_stages: &[Ts::Jangsaeng, Ts::Gwandae, Ts::Geonrok, Ts::Jewang],
        avoid_stages: &[Ts::Sa, Ts::Myo, Ts::Jeol],
        favorable_elements: ElementSet::of(&[Element::Fire, Element::Wood]),
        venus_signs: ROMANTIC_VENUS_SIGNS,
        venus_houses: &[7],
        sun_houses: &[],
        moon_phases: &[MoonPhase::Full],
    },
    EventProfile {
        event: EventType::Career,
        favorable_sibsin: &[Jeonggwan, Pyeongwan, Jeongin],
        avoid_sibsin: &[Sanggwan, Geopjae],
        favorable_stages: &[Ts::Gwandae, Ts::Geonrok, Ts::Jewang],
        avoid_stages: &[Ts::Byeong, Ts::Sa, Ts::Jeol],
        favorable_elements: ElementSet::of(&[Element::Wood, Element::Fire]),
        venus_signs: &[],
        venus_houses: &[],
        sun_houses: &[10],
        moon_phases: &[MoonPhase::FirstQuarter],
    },
    EventProfile {
        event: EventType::Investment,
        favorable_sibsin: &[Jeongjae, Pyeonjae, Siksin],
        avoid_sibsin: &[Geopjae, Bigyeon],
        favorable_stages: &[Ts::Geonrok, Ts::Jewang, Ts::Jangsaeng],
        avoid_stages: &[Ts::Soe, Ts::Byeong, Ts::Sa, Ts::Jeol],
        favorable_elements: ElementSet::of(&[Element::Metal, Element::Water]),
        venus_signs: &[],
        venus_houses: &[2],
        sun_houses: &[2],
        moon_phases: &[MoonPhase::WaxingCrescent],
    },
    EventProfile {
        event: EventType::Move,
        favorable_sibsin: &[Pyeonjae, Siksin, Pyeonin],
        avoid_sibsin: &[Pyeongwan, Geopjae],
        favorable_stages: &[Ts::Jangsaeng, Ts::Gwandae, Ts::Tae],
        avoid_stages: &[Ts::Myo, Ts::Sa],
        favorable_elements: ElementSet::of(&[Element::Wood, Element::Water]),
        venus_signs: &[],
        venus_houses: &[],
        sun_houses: &[4],
        moon_phases: &[MoonPhase::New],
    },
    EventProfile {
        event: EventType::Study,
        favorable_sibsin: &[Jeongin, Pyeonin, Siksin],
        avoid_sibsin: &[Pyeonjae, Jeongjae],
        favorable_stages: &[Ts::Jangsaeng, Ts::Gwandae, Ts::Yang],
        avoid_stages: &[Ts::Sa, Ts::Jeol],
        favorable_elements: ElementSet::of(&[Element::Water, Element::Wood]),
        venus_signs: &[],
        venus_houses: &[],
        sun_houses: &[9],
        moon_phases: &[MoonPhase::WaxingCrescent],
    },
    EventProfile {
        event: EventType::Health,
        favorable_sibsin: &[Jeongin, Bigyeon, Siksin],
        avoid_sibsin: &[Pyeongwan, Sanggwan],
        favorable_stages: &[Ts::Jangsaeng, Ts::Geonrok, Ts::Jewang],
        avoid_stages: &[Ts::Byeong, Ts::Sa, Ts::Myo, Ts::Jeol],
        favorable_elements: ElementSet::of(&[Element::Earth, Element::Water]),
        venus_signs: &[],
        venus_houses: &[],
        sun_houses: &[6],
        moon_phases: &[],
    },
    EventProfile {
        event: EventType::Relationship,
        favorable_sibsin: &[Jeongjae, Pyeonjae, Jeonggwan, Siksin],
        avoid_sibsin: &[Geopjae, Sanggwan],
        favorable_stages: &[Ts::Jangsaeng, Ts::Mogyok, Ts::Gwandae],
        avoid_stages: &[Ts::Sa, Ts::Jeol],
        favorable_elements: ElementSet::of(&[Element::Fire, Element::Earth]),
        venus_signs: ROMANTIC_VENUS_SIGNS,
        venus_houses: &[5],
        sun_houses: &[],
        moon_phases: &[MoonPhase::WaxingGibbous, MoonPhase::Full],
    },
];

/// 이벤트 유형의 프로필.
pub fn profile_for(event: EventType) -> &'static EventProfile {
    let index = match event {
        EventType::Marriage => 0,
        EventType::Career => 1,
        EventType::Investment => 2,
        EventType::Move => 3,
        EventType::Study => 4,
        EventType::Health => 5,
        EventType::Relationship => 6,
    };
    &PROFILES[index]
}
