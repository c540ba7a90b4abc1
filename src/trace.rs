//! Diagnostic events
//!
//! With the `tracing` feature enabled these forward to the `tracing` crate;
//! otherwise they expand to nothing and the arguments are never evaluated.

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)*);
        }
    }};
}

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::debug!($($arg)*);
        }
    }};
}
