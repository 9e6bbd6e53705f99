//! Raw converter samples and the temperatures derived from them

use ufmt::{uDisplay, uWrite};

use crate::config::{ADC_FULL_SCALE, SAMPLE_MASK, SENSOR_SPAN_C};

/// A 10-bit reading from the analog to digital converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sample(u16);

impl Sample {
	/// Create a sample from a raw converter word, keeping only the result bits
	pub fn new(raw: u16) -> Self {
		Self(raw & SAMPLE_MASK)
	}

	pub fn raw(self) -> u16 {
		self.0
	}
}

/// Whole degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Temperature(u16);

impl Temperature {
	pub const fn from_celsius(celsius: u16) -> Self {
		Self(celsius)
	}

	/// Scale a sample to degrees, truncating.
	///
	/// The multiplication has to happen before the division, and `1023 * 330` does not fit in a
	/// u16.
	pub fn from_sample(sample: Sample) -> Self {
		let celsius = u32::from(sample.raw()) * SENSOR_SPAN_C / ADC_FULL_SCALE;
		Self(celsius as u16)
	}

	pub fn celsius(self) -> u16 {
		self.0
	}
}

impl From<Sample> for Temperature {
	fn from(sample: Sample) -> Self {
		Self::from_sample(sample)
	}
}

impl uDisplay for Temperature {
	fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
	where
		W: uWrite + ?Sized,
	{
		uDisplay::fmt(&self.0, f)
	}
}
