//! Diagnostic assertion layer.
//!
//! Bounds and shape preconditions are asserted only when this layer is compiled in:
//! always under `debug_assertions`, and in any profile with the `debug-checks`
//! feature. Otherwise the checks vanish and the hot path runs unchecked.

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(any(debug_assertions, feature = "debug-checks"))] {
        pub(crate) const ENABLED: bool = true;
    } else {
        pub(crate) const ENABLED: bool = false;
    }
}

/// Reports whether bounds and shape assertions are active in this build.
pub const fn debug_checks_enabled() -> bool {
    ENABLED
}

/// Panics with the given message when the assertion layer is active and `cond` fails.
macro_rules! debug_check {
    ($cond:expr, $($msg:tt)+) => {
        if $crate::assert::ENABLED && !($cond) {
            panic!($($msg)+);
        }
    };
}

pub(crate) use debug_check;
