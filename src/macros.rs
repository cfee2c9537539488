// Trace events for layout computations. Compiled out unless the `tracing`
// feature is enabled, so `no_std` builds pay nothing.

#[cfg(feature = "tracing")]
macro_rules! trace_layout {
    ($($arg:tt)*) => {
        ::tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_layout {
    ($($arg:tt)*) => {};
}
