// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Time source used by the control loop.
//!
//! All timing decisions (stall window, display cadence) are plain integer
//! comparisons against the value returned here, so a test can drive the
//! loop through any point in time without waiting for it.

/// Monotonic millisecond counter since boot.
pub trait Clock {
    /// Milliseconds elapsed since the process started. Never decreases.
    fn elapsed_millis(&self) -> u64;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn elapsed_millis(&self) -> u64 {
        (**self).elapsed_millis()
    }
}
