//! 십이운성(十二運星) 분류기.
//!
//! 양간은 장생지에서 순행하고 음간은 장생지에서 역행합니다.

use saju_core::{Branch, Polarity, Stem, TwelveStage};

/// 천간별 장생지 (갑=해, 을=오, 병·무=인, 정·기=유, 경=사, 신=자, 임=신, 계=묘).
const JANGSAENG_BRANCH: [Branch; 10] = [
    Branch::Hae,
    Branch::O,
    Branch::In,
    Branch::Yu,
    Branch::In,
    Branch::Yu,
    Branch::Sa,
    Branch::Ja,
    Branch::Sin,
    Branch::Myo,
];

/// 일간 기준 지지의 십이운성.
pub fn twelve_stage(day_stem: Stem, branch: Branch) -> TwelveStage {
    let start = JANGSAENG_BRANCH[day_stem.index()].index();
    let target = branch.index();
    let step = match day_stem.polarity() {
        Polarity::Yang => (target + 12 - start) % 12,
        Polarity::Yin => (start + 12 - target) % 12,
    };
    TwelveStage::from_index(step)
}
