//! Logging support.
//!
//! With the `log` feature the crate-internal macros (`debug!`, `trace!`,
//! `warning!`) forward to the `log` crate.
//! With `esp32-log` they print through `esp_println`. Otherwise they expand to
//! nothing at runtime but still type-check their arguments.

#[cfg(feature = "log")]
pub(crate) use log::{debug, trace, warn as warning};

#[cfg(not(feature = "log"))]
mod fallback {
    macro_rules! emit {
        ($level:literal, $($arg:tt)*) => {{
            #[cfg(feature = "esp32-log")]
            esp_println::println!("[{}] {}", $level, core::format_args!($($arg)*));
            #[cfg(not(feature = "esp32-log"))]
            $crate::logging::discard(core::format_args!($($arg)*));
        }};
    }

    macro_rules! debug {
        ($($arg:tt)*) => {
            $crate::logging::emit!("debug", $($arg)*)
        };
    }

    macro_rules! trace {
        ($($arg:tt)*) => {
            $crate::logging::emit!("trace", $($arg)*)
        };
    }

    macro_rules! warning {
        ($($arg:tt)*) => {
            $crate::logging::emit!("warn", $($arg)*)
        };
    }

    pub(crate) use {debug, emit, trace, warning};
}

#[cfg(not(feature = "log"))]
pub(crate) use fallback::{debug, emit, trace, warning};

#[cfg(all(not(feature = "log"), not(feature = "esp32-log")))]
#[inline]
pub(crate) fn discard(_args: core::fmt::Arguments<'_>) {}
