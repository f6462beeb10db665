#[cfg(feature = "tracing")]
macro_rules! gtrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "glidebar_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! gtrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! gdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "glidebar_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! gdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! gwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "glidebar_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! gwarn {
    ($($tt:tt)*) => {};
}
