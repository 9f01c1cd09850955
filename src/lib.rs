#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `no_std` drag-scroll processing for pointing-device firmware.
//!
//! While a dedicated key is held, pointer motion is turned into wheel output
//! instead of cursor movement. The crate exposes a small, allocation-free core
//! that the surrounding firmware feeds with key transitions and motion
//! reports:
//!
//! - Scroll axis chosen from the average pointer speed over a short rolling
//!   window, so a mostly sideways drag scrolls horizontally
//! - Sub-step motion carried between ticks instead of being truncated away
//! - Tapping the key without scrolling produces a middle click
//! - Optional `embedded-hal` / `embedded-hal-async` 1.0 adapter for a button
//!   wired straight to a GPIO
//! - Optional `defmt` logging (enable the `defmt` Cargo feature)
//!
//! ```no_run
//! use dragscroll::{Button, Config, DragScroll, Host, KeyEvent, Keycode, MouseReport};
//!
//! struct Firmware;
//!
//! impl Host for Firmware {
//!   fn now(&self) -> u32 {
//!     0
//!   }
//!
//!   fn tap(&mut self, _button: Button) {}
//! }
//!
//! let mut host = Firmware;
//! let mut session: DragScroll = DragScroll::new(Config::default().inverted()).unwrap();
//!
//! session.process_key(&mut host, Keycode::DragScroll, KeyEvent::press(host.now()));
//! let report = session.process_report(&host, MouseReport::new(12, -40));
//! assert_eq!((report.x, report.y), (0, 0));
//! ```

// Must come first so the logging macros are visible to the other modules.
mod fmt;

mod config;
mod history;
mod pin;
mod report;
mod scroll;
mod session;

pub use config::Config;
pub use history::{History, Sample, Velocity};
pub use pin::{KeyPin, Polarity};
pub use report::{elapsed, Button, Host, Instant, KeyEvent, Keycode, MouseReport};
pub use scroll::{Accumulator, Axis, Classifier};
pub use session::{DragScroll, Mode, DEFAULT_HISTORY};

/// Errors reported when building a [`DragScroll`] session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
  /// A scroll divisor was zero, negative, or not a finite number.
  InvalidDivisor,
  /// The history ring needs at least two buckets to measure velocity.
  InvalidCapacity,
}

impl core::fmt::Display for Error {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      Error::InvalidDivisor => f.write_str("scroll divisor must be a positive finite number"),
      Error::InvalidCapacity => f.write_str("scroll history needs at least two buckets"),
    }
  }
}
