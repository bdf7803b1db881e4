/// Emits a `tracing` event when the `tracing` feature is enabled.
///
/// The first token selects the level (`trace` or `debug`); the rest is
/// forwarded to the matching `tracing` macro unchanged. Without the feature
/// the arguments are not evaluated.
macro_rules! trace_event {
    (trace, $($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)+);
    }};
    (debug, $($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)+);
    }};
}

pub(crate) use trace_event;
