//! 지지 관계 분류기.
//!
//! 두 지지의 관계(육합, 삼합, 방합, 충, 파, 해, 원진, 귀문)를 분류합니다.
//! 순서 없는 쌍에 대한 대칭 전체 함수입니다.
//!
//! # 우선순위
//!
//! 한 쌍이 여러 관계에 동시에 해당할 수 있습니다 (예: 인-해는 육합이면서 파).
//! [`INTERACTION_PRIORITY`] 목록에서 먼저 나오는 관계 하나만 반환하며, 합 계열이
//! 충돌 계열보다 항상 앞섭니다.

use saju_core::{Branch, BranchInteraction, Impact, InteractionKind};

use Branch::*;

/// 관계 판정 우선순위 (앞선 것이 이김).
pub const INTERACTION_PRIORITY: [InteractionKind; 8] = [
    InteractionKind::Yukhap,
    InteractionKind::Samhap,
    InteractionKind::Banghap,
    InteractionKind::Chung,
    InteractionKind::Pa,
    InteractionKind::Hae,
    InteractionKind::Wonjin,
    InteractionKind::Gwimun,
];

/// 관계 유형별 점수 (부호 포함).
pub const fn interaction_score(kind: InteractionKind) -> i32 {
    match kind {
        InteractionKind::Yukhap => 8,
        InteractionKind::Samhap => 6,
        InteractionKind::Banghap => 4,
        InteractionKind::Chung => -8,
        InteractionKind::Pa => -3,
        InteractionKind::Hae => -4,
        InteractionKind::Wonjin => -5,
        InteractionKind::Gwimun => -3,
        InteractionKind::Neutral => 0,
    }
}

/// 육합 쌍과 합화 오행 설명.
const YUKHAP: [(Branch, Branch, &str); 6] = [
    (Ja, Chuk, "자축합 토"),
    (In, Hae, "인해합 목"),
    (Myo, Sul, "묘술합 화"),
    (Jin, Yu, "진유합 금"),
    (Sa, Sin, "사신합 수"),
    (O, Mi, "오미합 화"),
];

/// 삼합 국 (세 지지 중 두 지지만 만나도 반합으로 봅니다).
const SAMHAP: [([Branch; 3], &str); 4] = [
    ([Sin, Ja, Jin], "신자진 수국"),
    ([Hae, Myo, Mi], "해묘미 목국"),
    ([In, O, Sul], "인오술 화국"),
    ([Sa, Yu, Chuk], "사유축 금국"),
];

/// 방합 (계절 방위).
const BANGHAP: [([Branch; 3], &str); 4] = [
    ([In, Myo, Jin], "인묘진 동방 목"),
    ([Sa, O, Mi], "사오미 남방 화"),
    ([Sin, Yu, Sul], "신유술 서방 금"),
    ([Hae, Ja, Chuk], "해자축 북방 수"),
];

const CHUNG: [(Branch, Branch, &str); 6] = [
    (Ja, O, "자오충"),
    (Chuk, Mi, "축미충"),
    (In, Sin, "인신충"),
    (Myo, Yu, "묘유충"),
    (Jin, Sul, "진술충"),
    (Sa, Hae, "사해충"),
];

const PA: [(Branch, Branch, &str); 6] = [
    (Ja, Yu, "자유파"),
    (Chuk, Jin, "축진파"),
    (In, Hae, "인해파"),
    (Myo, O, "묘오파"),
    (Sa, Sin, "사신파"),
    (Mi, Sul, "미술파"),
];

const HAE: [(Branch, Branch, &str); 6] = [
    (Ja, Mi, "자미해"),
    (Chuk, O, "축오해"),
    (In, Sa, "인사해"),
    (Myo, Jin, "묘진해"),
    (Sin, Hae, "신해해"),
    (Yu, Sul, "유술해"),
];

const WONJIN: [(Branch, Branch, &str); 6] = [
    (Ja, Mi, "자미원진"),
    (Chuk, O, "축오원진"),
    (In, Yu, "인유원진"),
    (Myo, Sin, "묘신원진"),
    (Jin, Hae, "진해원진"),
    (Sa, Sul, "사술원진"),
];

const GWIMUN: [(Branch, Branch, &str); 6] = [
    (Ja, Yu, "자유귀문"),
    (Chuk, O, "축오귀문"),
    (In, Mi, "인미귀문"),
    (Myo, Sin, "묘신귀문"),
    (Jin, Hae, "진해귀문"),
    (Sa, Sul, "사술귀문"),
];

fn match_pair(table: &[(Branch, Branch, &'static str)], a: Branch, b: Branch) -> Option<&'static str> {
    table
        .iter()
        .find(|(x, y, _)| (*x == a && *y == b) || (*x == b && *y == a))
        .map(|(_, _, desc)| *desc)
}

fn match_triad(table: &[([Branch; 3], &'static str)], a: Branch, b: Branch) -> Option<&'static str> {
    if a == b {
        return None;
    }
    table
        .iter()
        .find(|(triad, _)| triad.contains(&a) && triad.contains(&b))
        .map(|(_, desc)| *desc)
}

/// 한 관계 유형의 표에서 쌍을 찾습니다.
fn lookup(kind: InteractionKind, a: Branch, b: Branch) -> Option<&'static str> {
    match kind {
        InteractionKind::Yukhap => match_pair(&YUKHAP, a, b),
        InteractionKind::Samhap => match_triad(&SAMHAP, a, b),
        InteractionKind::Banghap => match_triad(&BANGHAP, a, b),
        InteractionKind::Chung => match_pair(&CHUNG, a, b),
        InteractionKind::Pa => match_pair(&PA, a, b),
        InteractionKind::Hae => match_pair(&HAE, a, b),
        InteractionKind::Wonjin => match_pair(&WONJIN, a, b),
        InteractionKind::Gwimun => match_pair(&GWIMUN, a, b),
        InteractionKind::Neutral => None,
    }
}

/// 두 지지가 해당하는 모든 관계 유형 (우선순위 순서).
pub fn matching_kinds(a: Branch, b: Branch) -> Vec<InteractionKind> {
    INTERACTION_PRIORITY
        .into_iter()
        .filter(|kind| lookup(*kind, a, b).is_some())
        .collect()
}

/// 두 지지의 관계를 분류합니다. 해당 관계가 없으면 무관(neutral, 0점).
pub fn branch_interaction(a: Branch, b: Branch) -> BranchInteraction {
    INTERACTION_PRIORITY
        .into_iter()
        .find_map(|kind| lookup(kind, a, b).map(|desc| (kind, desc)))
        .map(|(kind, desc)| {
            let score = interaction_score(kind);
            BranchInteraction {
                kind,
                impact: if score > 0 {
                    Impact::Positive
                } else {
                    Impact::Negative
                },
                score,
                description: desc.to_string(),
            }
        })
        .unwrap_or_else(BranchInteraction::neutral)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_yukhap_beats_pa() {
        // 인-해는 육합이자 파
        assert_eq!(
            matching_kinds(In, Hae),
            vec![InteractionKind::Yukhap, InteractionKind::Pa]
        );
        let r = branch_interaction(In, Hae);
        assert_eq!(r.kind, InteractionKind::Yukhap);
        assert_eq!(r.impact, Impact::Positive);
        assert_eq!(r.score, 8);
    }

    #[test]
    fn test_clash() {
        let r = branch_interaction(Ja, O);
        assert_eq!(r.kind, InteractionKind::Chung);
        assert_eq!(r.impact, Impact::Negative);
        assert!(r.score < 0);
    }

    #[test]
    fn test_samhap_pairwise() {
        assert_eq!(branch_interaction(Sin, Jin).kind, InteractionKind::Samhap);
        assert_eq!(branch_interaction(Hae, Mi).kind, InteractionKind::Samhap);
    }

    #[test]
    fn test_banghap() {
        assert_eq!(branch_interaction(In, Jin).kind, InteractionKind::Banghap);
        assert_eq!(branch_interaction(Sin, Sul).kind, InteractionKind::Banghap);
    }

    #[test]
    fn test_overlapping_antagonisms() {
        // 자-미: 해와 원진 모두 해당 → 해
        assert_eq!(branch_interaction(Ja, Mi).kind, InteractionKind::Hae);
        // 묘-신: 원진과 귀문 → 원진
        assert_eq!(branch_interaction(Myo, Sin).kind, InteractionKind::Wonjin);
        // 인-미: 귀문만 해당
        assert_eq!(branch_interaction(In, Mi).kind, InteractionKind::Gwimun);
        // 인-유: 원진
        assert_eq!(branch_interaction(In, Yu).kind, InteractionKind::Wonjin);
    }

    #[test]
    fn test_neutral() {
        let r = branch_interaction(Ja, Ja);
        assert_eq!(r, BranchInteraction::neutral());
        // 자-인: 어떤 관계도 없음
        assert_eq!(branch_interaction(Ja, In).kind, InteractionKind::Neutral);
    }

    #[test]
    fn test_combination_families_precede_clash_families() {
        let first_clash = INTERACTION_PRIORITY
            .iter()
            .position(|k| !k.is_combination())
            .unwrap();
        assert!(INTERACTION_PRIORITY[..first_clash]
            .iter()
            .all(|k| k.is_combination()));
        assert!(INTERACTION_PRIORITY[first_clash..]
            .iter()
            .all(|k| !k.is_combination()));
    }

    #[test]
    fn test_symmetry_exhaustive() {
        for a in Branch::ALL {
            for b in Branch::ALL {
                assert_eq!(branch_interaction(a, b), branch_interaction(b, a));
            }
        }
    }

    proptest! {
        #[test]
        fn prop_symmetric(a in 0usize..12, b in 0usize..12) {
            let (a, b) = (Branch::from_index(a), Branch::from_index(b));
            prop_assert_eq!(branch_interaction(a, b), branch_interaction(b, a));
        }

        #[test]
        fn prop_impact_matches_sign(a in 0usize..12, b in 0usize..12) {
            let r = branch_interaction(Branch::from_index(a), Branch::from_index(b));
            match r.impact {
                Impact::Positive => prop_assert!(r.score > 0),
                Impact::Negative => prop_assert!(r.score < 0),
                Impact::Neutral => prop_assert_eq!(r.score, 0),
            }
        }
    }
}
