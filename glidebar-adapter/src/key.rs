/// Identity of a route as supplied by the navigator.
pub trait TabKey: Clone + PartialEq {}
impl<T: Clone + PartialEq> TabKey for T {}
