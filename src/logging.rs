// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Logging macros shared by the firmware and the host build.
//!
//! - With the `rp2350` feature the macros forward to `defmt`.
//! - In host unit tests they print to stdout/stderr.
//! - Any other host build only type-checks the arguments.
//!
//! Format strings must stay within the subset both `defmt` and
//! `core::fmt` accept: plain `{}` placeholders over integers and `&str`.

/// Log an informational message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "rp2350")]
        ::defmt::info!($($arg)*);

        #[cfg(all(not(feature = "rp2350"), test))]
        println!("[INFO] {}", format!($($arg)*));

        #[cfg(all(not(feature = "rp2350"), not(test)))]
        let _ = format_args!($($arg)*);
    }};
}

/// Log a warning
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "rp2350")]
        ::defmt::warn!($($arg)*);

        #[cfg(all(not(feature = "rp2350"), test))]
        println!("[WARN] {}", format!($($arg)*));

        #[cfg(all(not(feature = "rp2350"), not(test)))]
        let _ = format_args!($($arg)*);
    }};
}

/// Log an error
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        #[cfg(feature = "rp2350")]
        ::defmt::error!($($arg)*);

        #[cfg(all(not(feature = "rp2350"), test))]
        eprintln!("[ERROR] {}", format!($($arg)*));

        #[cfg(all(not(feature = "rp2350"), not(test)))]
        let _ = format_args!($($arg)*);
    }};
}

/// Log a debug message
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "rp2350")]
        ::defmt::debug!($($arg)*);

        #[cfg(all(not(feature = "rp2350"), test))]
        println!("[DEBUG] {}", format!($($arg)*));

        #[cfg(all(not(feature = "rp2350"), not(test)))]
        let _ = format_args!($($arg)*);
    }};
}
