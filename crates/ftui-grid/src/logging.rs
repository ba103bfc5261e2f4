#![forbid(unsafe_code)]

//! Logging shims.
//!
//! With the `tracing` feature enabled the engine emits structured events and
//! spans through [`tracing`]. Without it, the crate-root macros below expand
//! to nothing so call sites compile unchanged and the engine carries no
//! logging cost.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, debug_span, trace, warn};

#[cfg(not(feature = "tracing"))]
pub(crate) use crate::{debug, debug_span, trace, warn};

/// Stand-in for an entered span when tracing is compiled out.
#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    #[inline]
    pub fn entered(self) -> Self {
        self
    }
}

#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! debug_span {
    ($($arg:tt)*) => {
        $crate::logging::NoopSpan
    };
}
