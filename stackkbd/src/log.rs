//! `debug!` and `warn!` for the rest of the crate.
//!
//! `defmt` wins when both backends are enabled; with neither, the macros
//! only type-check their arguments.

#[cfg(feature = "defmt")]
pub(crate) use defmt::{debug, warn};

#[cfg(all(feature = "log", not(feature = "defmt")))]
pub(crate) use log::{debug, warn};

#[cfg(not(any(feature = "log", feature = "defmt")))]
macro_rules! debug {
    ($($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}

#[cfg(not(any(feature = "log", feature = "defmt")))]
macro_rules! warn {
    ($($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}

#[cfg(not(any(feature = "log", feature = "defmt")))]
pub(crate) use {debug, warn};
