use crate::{LayoutMeasurement, ResolveError, TargetOffset};

/// Computes where the indicator should sit for `active_index`.
///
/// Returns `Unknown` while fewer than `tab_count` tabs have been measured, regardless of
/// `active_index`. Once every tab is known, the active tab's `x` minus `inset` is returned.
///
/// `measurements` is expected to hold at most one entry per index, as [`crate::LayoutRegistry`]
/// guarantees.
pub fn resolve_target_offset(
    active_index: usize,
    measurements: &[LayoutMeasurement],
    tab_count: usize,
    inset: f32,
) -> Result<TargetOffset, ResolveError> {
    if measurements.len() < tab_count {
        return Ok(TargetOffset::Unknown);
    }
    if active_index >= tab_count {
        gwarn!(active_index, tab_count, "resolve: active index out of range");
        return Err(ResolveError::ActiveIndexOutOfRange {
            index: active_index,
            tab_count,
        });
    }

    let m = measurements
        .iter()
        .find(|m| m.index == active_index)
        .ok_or(ResolveError::MissingMeasurement {
            index: active_index,
        })?;
    Ok(TargetOffset::Resolved(m.x - inset))
}
