//! Digital outputs for the heater indicator and the buzzer

use embedded_hal::digital::v2::OutputPin;

use crate::state::ActuatorState;

/// Holds the two output lines
pub struct Actuators<H, B> {
	/// Heater indicator
	heater: H,
	/// Buzzer
	buzzer: B,
}

impl<H, B> Actuators<H, B>
where
	H: OutputPin,
	B: OutputPin,
{
	/// Create a new [`Actuators`] from pins which are already configured as outputs
	pub fn new(heater: H, buzzer: B) -> Self {
		Self { heater, buzzer }
	}

	/// Drive the heater line without touching the buzzer line
	pub fn set_heater(&mut self, on: bool) {
		let _ = if on {
			self.heater.set_high()
		} else {
			self.heater.set_low()
		};
	}

	/// Drive the buzzer line without touching the heater line
	pub fn set_buzzer(&mut self, on: bool) {
		let _ = if on {
			self.buzzer.set_high()
		} else {
			self.buzzer.set_low()
		};
	}

	/// Write both lines, heater first. Lines are always written, even if they already hold the
	/// requested level.
	pub fn apply(&mut self, state: ActuatorState) {
		self.set_heater(state.heater);
		self.set_buzzer(state.buzzer);
	}

	pub fn release(self) -> (H, B) {
		(self.heater, self.buzzer)
	}
}
