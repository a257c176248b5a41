// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Proximity sensor inputs.
//!
//! The robot carries two analog distance sensors: one on the side, used to
//! follow whatever is there, and one facing forward, used only to spot
//! head-on obstacles. Both report an intensity that grows as an object gets
//! closer.
//!
//! # Ranges
//!
//! Readings are expressed on a 10-bit scale:
//! - `0`: nothing in range
//! - `~650`: side sensor, object very close
//! - `1023`: full scale
//!
//! Anything outside `PROXIMITY_MIN..=PROXIMITY_MAX` is a [`SensorFault`].
//! The control loop clamps faulty readings and keeps going.

use crate::config::{ADC_TO_PROXIMITY_SHIFT, PROXIMITY_MAX, PROXIMITY_MIN};

/// Which of the two proximity sensors to sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "rp2350", derive(defmt::Format))]
pub enum SensorChannel {
    /// Side-facing sensor used for following
    Side,
    /// Forward-facing sensor used for obstacle detection
    Front,
}

impl SensorChannel {
    /// Short human-readable name, used in log output
    pub fn name(&self) -> &'static str {
        match self {
            SensorChannel::Side => "side",
            SensorChannel::Front => "front",
        }
    }
}

/// Source of proximity readings.
///
/// Implementations return the raw intensity for a channel. Values are not
/// expected to be validated; the control loop does that with
/// [`check_reading`].
pub trait ProximitySensor {
    /// Samples one channel. Larger means closer.
    fn read_proximity(&mut self, channel: SensorChannel) -> i32;
}

impl<T: ProximitySensor + ?Sized> ProximitySensor for &mut T {
    fn read_proximity(&mut self, channel: SensorChannel) -> i32 {
        (**self).read_proximity(channel)
    }
}

/// A reading outside the documented sensor range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "rp2350", derive(defmt::Format))]
pub enum SensorFault {
    /// Reading below `PROXIMITY_MIN`
    BelowRange {
        /// Value as read
        raw: i32,
    },
    /// Reading above `PROXIMITY_MAX`
    AboveRange {
        /// Value as read
        raw: i32,
    },
}

impl SensorFault {
    /// The nearest in-range value, used in place of the faulty reading.
    pub fn clamped(&self) -> i32 {
        match self {
            SensorFault::BelowRange { .. } => PROXIMITY_MIN,
            SensorFault::AboveRange { .. } => PROXIMITY_MAX,
        }
    }

    /// The value originally read
    pub fn raw(&self) -> i32 {
        match self {
            SensorFault::BelowRange { raw } | SensorFault::AboveRange { raw } => *raw,
        }
    }
}

/// Validates a raw reading against the sensor range.
///
/// # Returns
///
/// * `Ok(reading)` - The reading is within `PROXIMITY_MIN..=PROXIMITY_MAX`
/// * `Err(fault)` - The reading is out of range; `fault.clamped()` gives the
///   value to use instead
///
/// # Examples
///
/// ```
/// use pool_racer::sensor::{check_reading, SensorFault};
///
/// assert_eq!(check_reading(650), Ok(650));
/// assert_eq!(check_reading(-3), Err(SensorFault::BelowRange { raw: -3 }));
/// ```
pub fn check_reading(raw: i32) -> Result<i32, SensorFault> {
    if raw < PROXIMITY_MIN {
        Err(SensorFault::BelowRange { raw })
    } else if raw > PROXIMITY_MAX {
        Err(SensorFault::AboveRange { raw })
    } else {
        Ok(raw)
    }
}

/// Converts a 12-bit RP2350 ADC sample to the 10-bit proximity scale.
pub fn adc_to_proximity(sample: u16) -> i32 {
    i32::from(sample >> ADC_TO_PROXIMITY_SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_readings_pass_through() {
        assert_eq!(check_reading(PROXIMITY_MIN), Ok(PROXIMITY_MIN));
        assert_eq!(check_reading(100), Ok(100));
        assert_eq!(check_reading(650), Ok(650));
        assert_eq!(check_reading(PROXIMITY_MAX), Ok(PROXIMITY_MAX));
    }

    #[test]
    fn negative_reading_clamps_to_min() {
        let fault = check_reading(-1).unwrap_err();
        assert_eq!(fault, SensorFault::BelowRange { raw: -1 });
        assert_eq!(fault.clamped(), PROXIMITY_MIN);
        assert_eq!(fault.raw(), -1);
    }

    #[test]
    fn saturated_reading_clamps_to_max() {
        let fault = check_reading(PROXIMITY_MAX + 1).unwrap_err();
        assert_eq!(fault, SensorFault::AboveRange { raw: 1024 });
        assert_eq!(fault.clamped(), PROXIMITY_MAX);
    }

    #[test]
    fn adc_scaling_keeps_reference_thresholds() {
        assert_eq!(adc_to_proximity(0), 0);
        assert_eq!(adc_to_proximity(800), 200);
        assert_eq!(adc_to_proximity(803), 200);
        assert_eq!(adc_to_proximity(4095), PROXIMITY_MAX);
    }

    #[test]
    fn channel_names() {
        assert_eq!(SensorChannel::Side.name(), "side");
        assert_eq!(SensorChannel::Front.name(), "front");
    }
}
