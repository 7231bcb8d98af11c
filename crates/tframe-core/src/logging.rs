#![forbid(unsafe_code)]

//! Structured logging.
//!
//! tframe crates log through `tframe_core::debug!`, `tframe_core::trace!`
//! and friends. With the `tracing` feature these are the `tracing` crate's
//! macros. Without it they expand to nothing and the span macros yield a
//! [`NoopSpan`], so call sites need no `cfg` of their own.

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, info, trace, trace_span, warn};

#[cfg(not(feature = "tracing"))]
mod disabled {
    /// Expands to nothing; `tracing::debug!` with the feature on.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// Expands to nothing; `tracing::info!` with the feature on.
    #[macro_export]
    macro_rules! info {
        ($($arg:tt)*) => {};
    }

    /// Expands to nothing; `tracing::trace!` with the feature on.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// Expands to nothing; `tracing::warn!` with the feature on.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }

    /// A [`NoopSpan`](crate::logging::NoopSpan); `tracing::debug_span!` with the feature on.
    #[macro_export]
    macro_rules! debug_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }

    /// A [`NoopSpan`](crate::logging::NoopSpan); `tracing::trace_span!` with the feature on.
    #[macro_export]
    macro_rules! trace_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }
}

/// Span handle used when logging is compiled out.
#[cfg(not(feature = "tracing"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    #[inline]
    pub fn enter(&self) -> NoopGuard {
        NoopGuard
    }
}

/// Returned by [`NoopSpan::enter`]; dropping it does nothing.
#[cfg(not(feature = "tracing"))]
#[derive(Debug)]
pub struct NoopGuard;
