//! Analog input driver for the temperature sensor

use core::convert::Infallible;

use crate::temperature::Sample;

/// A single, already configured analog channel
///
/// Implementations start a conversion on the first call and keep returning
/// [`nb::Error::WouldBlock`] until the converter reports that the result is ready.
pub trait AnalogChannel {
	fn convert(&mut self) -> nb::Result<u16, Infallible>;
}

/// Linear temperature sensor (10 mV/°C) attached to one analog channel
pub struct TemperatureSensor<C> {
	channel: C,
}

impl<C: AnalogChannel> TemperatureSensor<C> {
	/// Take ownership of the channel. The channel must already be selected and the converter
	/// enabled.
	pub fn new(channel: C) -> Self {
		Self { channel }
	}

	/// Trigger a conversion and spin until it completes.
	///
	/// There is no timeout: a converter which never finishes stalls the caller forever.
	pub fn read(&mut self) -> Sample {
		match nb::block!(self.channel.convert()) {
			Ok(raw) => Sample::new(raw),
			Err(never) => match never {},
		}
	}

	pub fn release(self) -> C {
		self.channel
	}
}
