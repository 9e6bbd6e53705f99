//! Logic for coordinating peripheral inputs and outputs

use embedded_hal::{blocking::delay::DelayMs, digital::v2::OutputPin, serial};

use crate::{
	actuators::Actuators,
	config::LOOP_PERIOD_MS,
	sensor::{AnalogChannel, TemperatureSensor},
	serial::SerialWriter,
	status::Reading,
};

/// Central type which connects the components of the system
///
/// Owns every peripheral handle. Nothing else touches the hardware once this is constructed.
pub struct System<C, H, B, W, D> {
	/// Temperature sensor
	sensor: TemperatureSensor<C>,
	/// Heater and buzzer lines
	actuators: Actuators<H, B>,
	/// Status output
	serial: SerialWriter<W>,
	/// Busy-wait delay between cycles
	delay: D,
}

impl<C, H, B, W, D> System<C, H, B, W, D>
where
	C: AnalogChannel,
	H: OutputPin,
	B: OutputPin,
	W: serial::Write<u8>,
	D: DelayMs<u16>,
{
	pub fn new(
		sensor: TemperatureSensor<C>,
		actuators: Actuators<H, B>,
		serial: SerialWriter<W>,
		delay: D,
	) -> Self {
		Self {
			sensor,
			actuators,
			serial,
			delay,
		}
	}

	/// Sample, classify, drive the outputs and report. Does not wait afterwards.
	pub fn tick(&mut self) -> Reading {
		let reading = Reading::from_sample(self.sensor.read());

		self.actuators.apply(reading.state.actuators());
		self.report(reading);

		reading
	}

	/// A full cycle: [`System::tick`] followed by the loop delay
	pub fn cycle(&mut self) -> Reading {
		let reading = self.tick();
		self.delay.delay_ms(LOOP_PERIOD_MS);
		reading
	}

	/// Run the control loop for the rest of the program's lifetime
	pub fn run(mut self) -> ! {
		loop {
			self.cycle();
		}
	}

	/// Write the status line for a reading
	fn report(&mut self, reading: Reading) {
		let _ = ufmt::uwrite!(self.serial, "{}", reading);
	}
}
