//! Result of a single control cycle and its status line

use ufmt::{uDisplay, uWrite};

use crate::{
	state::OperatingState,
	temperature::{Sample, Temperature},
};

/// Everything derived from one sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
	pub sample: Sample,
	pub temperature: Temperature,
	pub state: OperatingState,
}

impl Reading {
	pub fn from_sample(sample: Sample) -> Self {
		let temperature = Temperature::from_sample(sample);

		Self {
			sample,
			temperature,
			state: OperatingState::classify(temperature),
		}
	}
}

impl uDisplay for Reading {
	/// Renders the status line, e.g. `Temp: 42 C | State: HEATING\r\n`
	fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
	where
		W: uWrite + ?Sized,
	{
		ufmt::uwrite!(f, "Temp: {} C | State: {}\r\n", self.temperature, self.state)
	}
}
