use crate::Error;

/// Tuning knobs for drag-scroll.
///
/// Mirrors the compile-time options a keymap would normally set. Construct it
/// with the fluent helpers; values are checked when handed to
/// [`crate::DragScroll::new`].
///
/// # Example
/// ```no_run
/// use dragscroll::Config;
///
/// let config = Config::default()
///   .with_divisors(6.0, 12.0)
///   .with_sample_period(8)
///   .inverted();
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
  /// Motion units per horizontal scroll step. Larger is slower.
  pub divisor_h: f32,
  /// Motion units per vertical scroll step. Larger is slower.
  pub divisor_v: f32,
  /// Duration of one history bucket, in milliseconds. A new bucket is opened
  /// once strictly more than this has passed since the current one started.
  pub sample_period: u32,
  /// Flip the sign of vertical output (classic vs. natural scrolling).
  pub invert: bool,
  /// Longest hold, in milliseconds, that still counts as a click when no
  /// scrolling happened.
  pub tap_term: u32,
}

impl Config {
  pub const fn new() -> Self {
    Self { divisor_h: 8.0, divisor_v: 8.0, sample_period: 10, invert: false, tap_term: 200 }
  }

  pub const fn with_divisors(mut self, divisor_h: f32, divisor_v: f32) -> Self {
    self.divisor_h = divisor_h;
    self.divisor_v = divisor_v;
    self
  }

  pub const fn with_sample_period(mut self, sample_period: u32) -> Self {
    self.sample_period = sample_period;
    self
  }

  pub const fn with_tap_term(mut self, tap_term: u32) -> Self {
    self.tap_term = tap_term;
    self
  }

  pub const fn inverted(mut self) -> Self {
    self.invert = true;
    self
  }

  pub(crate) fn validate(&self) -> Result<(), Error> {
    for divisor in [self.divisor_h, self.divisor_v] {
      if !divisor.is_finite() || divisor <= 0.0 {
        return Err(Error::InvalidDivisor);
      }
    }
    Ok(())
  }
}

impl Default for Config {
  fn default() -> Self {
    Self::new()
  }
}
