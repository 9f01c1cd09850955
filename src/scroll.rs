//! Scroll classifier: turns pointer motion into wheel output on one axis.

use crate::config::Config;
use crate::history::History;
use crate::report::{Instant, MouseReport};

/// Fractional running total that carries sub-step motion between ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Accumulator(f32);

impl Accumulator {
  pub const fn value(self) -> f32 {
    self.0
  }

  fn add(&mut self, delta: i16, divisor: f32) {
    self.0 += f32::from(delta) / divisor;
  }

  /// Whole scroll steps currently held, truncated toward zero and clamped to
  /// the wheel range.
  fn whole(self) -> i8 {
    self.0 as i8
  }

  /// Drop the whole part, keeping only the remainder in `(-1, 1)`.
  fn carry(&mut self) {
    // The cast saturates far outside the i32 range, leaving no fraction to keep.
    let rest = self.0 - self.0 as i32 as f32;
    self.0 = if rest > -1.0 && rest < 1.0 { rest } else { 0.0 };
  }
}

/// Which wheel a tick was routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
  Horizontal,
  Vertical,
}

/// Motion history plus per-axis accumulators for one drag-scroll session.
#[derive(Debug, Clone)]
pub struct Classifier<const N: usize> {
  history: History<N>,
  acc_h: Accumulator,
  acc_v: Accumulator,
  axis: Axis,
}

impl<const N: usize> Classifier<N> {
  pub(crate) const fn new() -> Self {
    Self { history: History::new(), acc_h: Accumulator(0.0), acc_v: Accumulator(0.0), axis: Axis::Vertical }
  }

  /// Forget all motion and start a fresh window at `now`.
  pub(crate) fn reset(&mut self, now: Instant) {
    self.acc_h = Accumulator::default();
    self.acc_v = Accumulator::default();
    self.axis = Axis::Vertical;
    self.history.reset(now);
  }

  pub fn history(&self) -> &History<N> {
    &self.history
  }

  pub fn accumulators(&self) -> (Accumulator, Accumulator) {
    (self.acc_h, self.acc_v)
  }

  /// Axis chosen on the most recent tick.
  pub fn axis(&self) -> Axis {
    self.axis
  }

  /// Convert the motion in `report` into wheel output.
  ///
  /// Cursor motion is always consumed. At most one of `h`/`v` is nonzero in
  /// the returned report.
  pub(crate) fn classify(&mut self, config: &Config, mut report: MouseReport, now: Instant) -> MouseReport {
    self.acc_h.add(report.x, config.divisor_h);
    self.acc_v.add(report.y, config.divisor_v);

    self.history.record(report.x, report.y, now, config.sample_period);
    let velocity = self.history.velocity();

    let axis = if velocity.is_horizontal() { Axis::Horizontal } else { Axis::Vertical };
    if axis != self.axis {
      debug!("drag-scroll axis {} -> {}", self.axis, axis);
      self.axis = axis;
    }

    match axis {
      Axis::Vertical => {
        let v = self.acc_v.whole();
        report.v = if config.invert { v.saturating_neg() } else { v };
        report.h = 0;
      }
      Axis::Horizontal => {
        report.h = self.acc_h.whole();
        report.v = 0;
      }
    }

    self.acc_h.carry();
    self.acc_v.carry();

    report.x = 0;
    report.y = 0;
    report
  }
}
