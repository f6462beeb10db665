use thiserror::Error;

/// Inconsistencies detected while resolving the indicator's target offset.
///
/// These indicate that the navigator and the tab bar disagree about the tab set. A wrong offset
/// is worse than none, so the resolver reports them instead of falling back to a default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("active index {index} is out of range for {tab_count} tabs")]
    ActiveIndexOutOfRange { index: usize, tab_count: usize },
    #[error("no layout measurement recorded for active index {index}")]
    MissingMeasurement { index: usize },
}
