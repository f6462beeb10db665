use glidebar::ResolveError;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BarError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    /// The tab set is fixed at construction; a render with a different route count is rejected.
    #[error("route set changed after mount: expected {expected} routes, got {actual}")]
    RoutesChanged { expected: usize, actual: usize },
}
