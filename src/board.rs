//! Arduino Nano wiring
//!
//! ```text
//! A0 <- sensor output (10 mV/°C), AREF tied to 3.3 V
//! D3 -> heater indicator
//! D4 -> buzzer
//! D1 -> serial TX
//! ```

use arduino_hal::{
	adc::{AdcSettings, ReferenceVoltage},
	clock::MHz16,
	hal::{
		port::{PC0, PD3, PD4},
		usart::Usart0,
		Adc,
	},
	pac::ADC,
	port::{
		mode::{Analog, Floating, Input, Output},
		Pin,
	},
};
use core::convert::Infallible;

use thermo_controller::{Actuators, AnalogChannel, SerialWriter, System, TemperatureSensor};

/// The controller as wired on this board
pub type Controller = System<
	SensorChannel,
	Pin<Output, PD3>,
	Pin<Output, PD4>,
	Usart0<MHz16>,
	arduino_hal::Delay,
>;

/// ADC channel 0, read against the external reference
pub struct SensorChannel {
	/// Analog to digital converter, owned outright since nothing else samples
	adc: Adc<MHz16>,
	/// Sensor input
	pin: Pin<Analog, PC0>,
}

impl SensorChannel {
	/// Enable the converter against AREF and switch A0 into analog mode
	pub fn new(adc: ADC, a0: Pin<Input<Floating>, PC0>) -> Self {
		let mut adc = Adc::new(
			adc,
			AdcSettings {
				ref_voltage: ReferenceVoltage::Aref,
				..Default::default()
			},
		);
		let pin = a0.into_analog_input(&mut adc);

		Self { adc, pin }
	}
}

impl AnalogChannel for SensorChannel {
	fn convert(&mut self) -> nb::Result<u16, Infallible> {
		// `analog_read` starts the conversion and spins on its completion itself.
		Ok(self.pin.analog_read(&mut self.adc))
	}
}

/// Bring up the peripherals in order (converter, serial, outputs) and hand them to the control
/// loop
pub fn init(dp: arduino_hal::Peripherals) -> Controller {
	let pins = arduino_hal::pins!(dp);

	let sensor = TemperatureSensor::new(SensorChannel::new(dp.ADC, pins.a0));
	let serial = SerialWriter::new(arduino_hal::default_serial!(
		dp,
		pins,
		thermo_controller::config::BAUD_RATE
	));
	let actuators = Actuators::new(pins.d3.into_output(), pins.d4.into_output());

	System::new(sensor, actuators, serial, arduino_hal::Delay::new())
}
