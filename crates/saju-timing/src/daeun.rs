//! 대운(大運) 조회.

use saju_core::{ChartInput, DaeunCycle};

/// 나이가 속한 대운 주기. 대운 목록이 없거나 어느 구간에도 속하지 않으면 `None`.
///
/// 구간은 양 끝을 포함합니다. 목록은 [`ChartInput::validate`]로 검증된 것으로 가정합니다.
pub fn daeun_stage_for(chart: &ChartInput, age: u32) -> Option<&DaeunCycle> {
    chart
        .daeun
        .as_deref()?
        .iter()
        .find(|cycle| cycle.contains(age))
}
