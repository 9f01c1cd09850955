/// Milliseconds read from the host's monotonic timer.
///
/// The timer is free running and allowed to wrap, so durations are always
/// computed with [`elapsed`].
pub type Instant = u32;

/// Time passed between `since` and `now`, tolerant of timer wrap-around.
pub const fn elapsed(since: Instant, now: Instant) -> u32 {
  now.wrapping_sub(since)
}

/// Relative motion report exchanged with the host every pointing tick.
///
/// `x`/`y` carry cursor displacement, `h`/`v` carry horizontal and vertical
/// wheel output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MouseReport {
  pub buttons: u8,
  pub x: i16,
  pub y: i16,
  pub h: i8,
  pub v: i8,
}

impl MouseReport {
  pub const fn new(x: i16, y: i16) -> Self {
    Self { buttons: 0, x, y, h: 0, v: 0 }
  }

  /// Returns `true` if the report carries any wheel output.
  pub const fn is_scroll(&self) -> bool {
    self.h != 0 || self.v != 0
  }
}

/// Mouse buttons the core can ask the host to tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
  Left = 0,
  Right = 1,
  Middle = 2,
  Back = 3,
  Forward = 4,
}

impl Button {
  /// Bit of this button in [`MouseReport::buttons`].
  pub const fn mask(self) -> u8 {
    1 << self as u8
  }
}

/// Key identifiers delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Keycode {
  /// The key that arms drag-scroll while held.
  DragScroll,
  /// Any other key, identified by the host's raw code. Never consumed here.
  Other(u16),
}

/// A single key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
  pub pressed: bool,
  pub time: Instant,
}

impl KeyEvent {
  pub const fn press(time: Instant) -> Self {
    Self { pressed: true, time }
  }

  pub const fn release(time: Instant) -> Self {
    Self { pressed: false, time }
  }
}

/// Services the surrounding firmware provides to the core.
pub trait Host {
  /// Current reading of the monotonic millisecond timer.
  fn now(&self) -> Instant;

  /// Emit a press immediately followed by a release of `button`.
  fn tap(&mut self, button: Button);
}
