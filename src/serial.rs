//! Write formatted data to the USART peripheral.

use core::convert::Infallible;

use embedded_hal::serial;
use ufmt::uWrite;

/// Blocking writer over a transmitter which is already configured for the right baud rate and
/// frame format
pub struct SerialWriter<W> {
	inner: W,
}

impl<W: serial::Write<u8>> SerialWriter<W> {
	pub fn new(inner: W) -> Self {
		Self { inner }
	}

	/// Spin until the transmit register is empty, then load `byte` into it.
	pub fn write_byte(&mut self, byte: u8) {
		let _ = nb::block!(self.inner.write(byte));
	}

	/// Write bytes in order, stopping at the first NUL
	pub fn write_text(&mut self, text: &[u8]) {
		for &byte in text.iter().take_while(|&&byte| byte != 0) {
			self.write_byte(byte);
		}
	}

	pub fn release(self) -> W {
		self.inner
	}
}

impl<W: serial::Write<u8>> uWrite for SerialWriter<W> {
	type Error = Infallible;

	fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
		self.write_text(s.as_bytes());
		Ok(())
	}
}
