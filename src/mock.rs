//! Recording fakes for every hardware seam, used by the unit tests.
//!
//! All fakes created from one [`Trace`] append to the same event list, so tests can check the
//! order in which peripherals were touched.

use std::{cell::RefCell, collections::VecDeque, convert::Infallible, rc::Rc};

use embedded_hal::{blocking::delay::DelayMs, digital::v2::OutputPin, serial};

use crate::sensor::AnalogChannel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
	/// A conversion result was handed out
	Converted(u16),
	Heater(bool),
	Buzzer(bool),
	/// A byte was accepted by the transmitter
	Byte(u8),
	DelayMs(u16),
}

#[derive(Clone, Default)]
pub struct Trace(Rc<RefCell<Vec<Event>>>);

impl Trace {
	pub fn new() -> Self {
		Self::default()
	}

	fn push(&self, event: Event) {
		self.0.borrow_mut().push(event);
	}

	pub fn events(&self) -> Vec<Event> {
		self.0.borrow().clone()
	}

	pub fn clear(&self) {
		self.0.borrow_mut().clear();
	}

	/// Everything written to the serial port so far
	pub fn serial_text(&self) -> String {
		let bytes: Vec<u8> = self
			.0
			.borrow()
			.iter()
			.filter_map(|event| match event {
				Event::Byte(byte) => Some(*byte),
				_ => None,
			})
			.collect();
		String::from_utf8(bytes).unwrap()
	}

	pub fn channel(&self, samples: &[u16]) -> MockChannel {
		MockChannel {
			trace: self.clone(),
			samples: samples.iter().copied().collect(),
			busy_polls: 0,
			polls: 0,
		}
	}

	pub fn heater(&self) -> MockPin {
		MockPin {
			trace: self.clone(),
			line: Line::Heater,
			high: false,
		}
	}

	pub fn buzzer(&self) -> MockPin {
		MockPin {
			trace: self.clone(),
			line: Line::Buzzer,
			high: false,
		}
	}

	pub fn port(&self) -> MockPort {
		MockPort {
			trace: self.clone(),
			busy_polls: 0,
			pending: 0,
			polls: 0,
		}
	}

	pub fn delay(&self) -> MockDelay {
		MockDelay {
			trace: self.clone(),
		}
	}
}

/// Analog channel which hands out queued samples, repeating the last one once the queue is empty
pub struct MockChannel {
	trace: Trace,
	samples: VecDeque<u16>,
	/// How many times every conversion reports `WouldBlock` before completing
	pub busy_polls: usize,
	/// Total calls to `convert`
	pub polls: usize,
}

impl AnalogChannel for MockChannel {
	fn convert(&mut self) -> nb::Result<u16, Infallible> {
		self.polls += 1;
		if self.polls % (self.busy_polls + 1) != 0 {
			return Err(nb::Error::WouldBlock);
		}

		let raw = if self.samples.len() > 1 {
			self.samples.pop_front().unwrap()
		} else {
			*self.samples.front().unwrap()
		};
		self.trace.push(Event::Converted(raw));
		Ok(raw)
	}
}

#[derive(Debug, Clone, Copy)]
enum Line {
	Heater,
	Buzzer,
}

pub struct MockPin {
	trace: Trace,
	line: Line,
	pub high: bool,
}

impl MockPin {
	fn drive(&mut self, high: bool) {
		self.high = high;
		self.trace.push(match self.line {
			Line::Heater => Event::Heater(high),
			Line::Buzzer => Event::Buzzer(high),
		});
	}
}

impl OutputPin for MockPin {
	type Error = Infallible;

	fn set_low(&mut self) -> Result<(), Self::Error> {
		self.drive(false);
		Ok(())
	}

	fn set_high(&mut self) -> Result<(), Self::Error> {
		self.drive(true);
		Ok(())
	}
}

/// Transmitter which can pretend its holding register is still full
pub struct MockPort {
	trace: Trace,
	/// How many times every byte is refused with `WouldBlock` before being accepted
	pub busy_polls: usize,
	pending: usize,
	/// Total calls to `write`
	pub polls: usize,
}

impl serial::Write<u8> for MockPort {
	type Error = Infallible;

	fn write(&mut self, word: u8) -> nb::Result<(), Self::Error> {
		self.polls += 1;
		if self.pending < self.busy_polls {
			self.pending += 1;
			return Err(nb::Error::WouldBlock);
		}

		self.pending = 0;
		self.trace.push(Event::Byte(word));
		Ok(())
	}

	fn flush(&mut self) -> nb::Result<(), Self::Error> {
		Ok(())
	}
}

pub struct MockDelay {
	trace: Trace,
}

impl DelayMs<u16> for MockDelay {
	fn delay_ms(&mut self, ms: u16) {
		self.trace.push(Event::DelayMs(ms));
	}
}
