//! Activation key wired straight to a GPIO.
//!
//! Boards without a key matrix can drive [`crate::DragScroll`] from a single
//! button pin. [`KeyPin`] tracks the last seen level and turns changes into
//! [`KeyEvent`]s, either by polling through `embedded-hal` or by awaiting an
//! edge through `embedded-hal-async`.

use embedded_hal::digital::InputPin;
use embedded_hal_async::digital::Wait;

use crate::report::{Host, Instant, KeyEvent};

/// Electrical level that means "pressed".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
  /// Pressed pulls the line low (button to ground with a pull-up).
  ActiveLow,
  /// Pressed drives the line high.
  ActiveHigh,
}

/// Edge detector for a single activation button.
pub struct KeyPin<P> {
  pin: P,
  polarity: Polarity,
  pressed: bool,
}

impl<P> KeyPin<P> {
  /// Wrap `pin`, assuming the button starts released.
  pub fn new(pin: P, polarity: Polarity) -> Self {
    Self { pin, polarity, pressed: false }
  }

  /// Last state reported through [`KeyPin::poll`] or [`KeyPin::wait`].
  pub fn is_pressed(&self) -> bool {
    self.pressed
  }

  /// Release the underlying pin.
  pub fn into_inner(self) -> P {
    self.pin
  }
}

impl<P: InputPin> KeyPin<P> {
  fn read(&mut self) -> Result<bool, P::Error> {
    let low = self.pin.is_low()?;
    Ok(match self.polarity {
      Polarity::ActiveLow => low,
      Polarity::ActiveHigh => !low,
    })
  }

  fn update(&mut self, pressed: bool, time: Instant) -> Option<KeyEvent> {
    if pressed == self.pressed {
      return None;
    }
    self.pressed = pressed;
    trace!("activation key {} at {}", pressed, time);
    Some(KeyEvent { pressed, time })
  }

  /// Sample the pin and report a transition if the state changed since the
  /// previous call.
  pub fn poll(&mut self, now: Instant) -> Result<Option<KeyEvent>, P::Error> {
    let pressed = self.read()?;
    Ok(self.update(pressed, now))
  }
}

impl<P: InputPin + Wait> KeyPin<P> {
  /// Wait for the button to change state and report the transition,
  /// timestamped with the host timer.
  ///
  /// Edges that leave the button in its previous state (bounce) are skipped.
  pub async fn wait<H: Host>(&mut self, host: &H) -> Result<KeyEvent, <P as embedded_hal::digital::ErrorType>::Error> {
    loop {
      self.pin.wait_for_any_edge().await?;
      let pressed = self.read()?;
      if let Some(event) = self.update(pressed, host.now()) {
        return Ok(event);
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::report::Button;
  use core::convert::Infallible;
  use embassy_futures::block_on;
  use embedded_hal::digital::ErrorType;

  /// Pin that replays a fixed list of levels, one per read.
  struct ScriptedPin {
    levels: &'static [bool],
    next: usize,
  }

  impl ScriptedPin {
    fn new(levels: &'static [bool]) -> Self {
      Self { levels, next: 0 }
    }
  }

  impl ErrorType for ScriptedPin {
    type Error = Infallible;
  }

  impl InputPin for ScriptedPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
      let level = self.levels[self.next.min(self.levels.len() - 1)];
      self.next += 1;
      Ok(level)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
      self.is_high().map(|high| !high)
    }
  }

  impl Wait for ScriptedPin {
    async fn wait_for_high(&mut self) -> Result<(), Self::Error> {
      Ok(())
    }

    async fn wait_for_low(&mut self) -> Result<(), Self::Error> {
      Ok(())
    }

    async fn wait_for_rising_edge(&mut self) -> Result<(), Self::Error> {
      Ok(())
    }

    async fn wait_for_falling_edge(&mut self) -> Result<(), Self::Error> {
      Ok(())
    }

    async fn wait_for_any_edge(&mut self) -> Result<(), Self::Error> {
      Ok(())
    }
  }

  struct Clock(Instant);

  impl Host for Clock {
    fn now(&self) -> Instant {
      self.0
    }

    fn tap(&mut self, _: Button) {}
  }

  #[test]
  fn poll_reports_only_changes() {
    let mut key = KeyPin::new(ScriptedPin::new(&[true, false, false, true, true]), Polarity::ActiveLow);

    assert_eq!(key.poll(0), Ok(None));
    assert_eq!(key.poll(10), Ok(Some(KeyEvent::press(10))));
    assert!(key.is_pressed());
    assert_eq!(key.poll(20), Ok(None));
    assert_eq!(key.poll(30), Ok(Some(KeyEvent::release(30))));
    assert_eq!(key.poll(40), Ok(None));

    let pin = key.into_inner();
    assert_eq!(pin.next, 5);
  }

  #[test]
  fn active_high_polarity() {
    let mut key = KeyPin::new(ScriptedPin::new(&[true, false]), Polarity::ActiveHigh);

    assert_eq!(key.poll(5), Ok(Some(KeyEvent::press(5))));
    assert_eq!(key.poll(6), Ok(Some(KeyEvent::release(6))));
  }

  #[test]
  fn wait_skips_bounces() {
    let mut key = KeyPin::new(ScriptedPin::new(&[true, true, false, false, true]), Polarity::ActiveLow);

    let event = block_on(key.wait(&Clock(77)));
    assert_eq!(event, Ok(KeyEvent::press(77)));

    let event = block_on(key.wait(&Clock(90)));
    assert_eq!(event, Ok(KeyEvent::release(90)));
    assert!(!key.is_pressed());
  }
}
