//! 십신(十神) 분류기.
//!
//! 일간과 대상 천간의 오행 관계(상생/상극)와 음양 일치 여부로 십신을 결정합니다.
//! 10×10 전체 함수이며 같은 천간은 항상 비견입니다.

use saju_core::{Sibsin, Stem};

/// 일간 기준 대상 천간의 십신.
pub fn sibsin(day_stem: Stem, target_stem: Stem) -> Sibsin {
    let me = day_stem.element();
    let other = target_stem.element();
    let same_polarity = day_stem.polarity() == target_stem.polarity();

    let (same, different) = if other == me {
        (Sibsin::Bigyeon, Sibsin::Geopjae)
    } else if me.generates() == other {
        (Sibsin::Siksin, Sibsin::Sanggwan)
    } else if me.controls() == other {
        (Sibsin::Pyeonjae, Sibsin::Jeongjae)
    } else if other.controls() == me {
        (Sibsin::Pyeongwan, Sibsin::Jeonggwan)
    } else {
        // 남은 관계는 대상이 일간을 생하는 경우뿐
        (Sibsin::Pyeonin, Sibsin::Jeongin)
    };

    if same_polarity {
        same
    } else {
        different
    }
}
