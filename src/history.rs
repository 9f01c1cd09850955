//! Fixed-capacity ring of motion buckets used to estimate pointer velocity.
//!
//! Each bucket sums the raw displacement seen during one sampling period. The
//! ring spans `N` buckets, so with the default 30 × 10 ms the estimate looks at
//! roughly the last 300 ms of motion.

use crate::report::{elapsed, Instant};

/// Net displacement observed during one time bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
  pub dx: i16,
  pub dy: i16,
  /// Timer reading when the bucket was opened.
  pub start: Instant,
}

impl Sample {
  pub const fn empty(start: Instant) -> Self {
    Self { dx: 0, dy: 0, start }
  }
}

/// Average absolute speed per axis, in motion units per millisecond.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Velocity {
  pub h: f32,
  pub v: f32,
}

impl Velocity {
  /// Horizontal motion wins only when strictly faster than vertical.
  pub fn is_horizontal(&self) -> bool {
    self.h > self.v
  }
}

/// Circular history of [`Sample`]s.
///
/// `head` is the bucket currently being filled and `tail` the oldest one still
/// retained. Both always index valid slots; the ring never holds more than `N`
/// buckets.
#[derive(Debug, Clone)]
pub struct History<const N: usize> {
  samples: [Sample; N],
  head: usize,
  tail: usize,
}

impl<const N: usize> History<N> {
  pub(crate) const fn new() -> Self {
    Self { samples: [Sample::empty(0); N], head: 0, tail: 0 }
  }

  /// Collapse the ring to a single empty bucket opened at `now`.
  pub(crate) fn reset(&mut self, now: Instant) {
    self.tail = self.head;
    self.samples[self.head] = Sample::empty(now);
  }

  /// Number of buckets currently retained, always within `1..=N`.
  pub fn len(&self) -> usize {
    (self.head + N - self.tail) % N + 1
  }

  pub fn head(&self) -> usize {
    self.head
  }

  pub fn tail(&self) -> usize {
    self.tail
  }

  /// The bucket currently being filled.
  pub fn current(&self) -> Sample {
    self.samples[self.head]
  }

  /// Record raw motion at `now`, opening a fresh bucket first if the current
  /// one is older than `period`.
  pub(crate) fn record(&mut self, dx: i16, dy: i16, now: Instant, period: u32) {
    if elapsed(self.samples[self.head].start, now) > period {
      self.advance(now);
    }

    let sample = &mut self.samples[self.head];
    sample.dx = sample.dx.saturating_add(dx);
    sample.dy = sample.dy.saturating_add(dy);
  }

  fn advance(&mut self, now: Instant) {
    self.head = (self.head + 1) % N;
    if self.head == self.tail {
      self.tail = (self.tail + 1) % N;
      trace!("history full, evicted bucket {}", self.head);
    }
    self.samples[self.head] = Sample::empty(now);
  }

  /// Iterate over consecutive bucket pairs from oldest to newest.
  ///
  /// The oldest bucket only serves as the time reference for the one after
  /// it, so a ring holding `k` buckets yields `k - 1` pairs.
  fn pairs(&self) -> impl Iterator<Item = (Sample, Sample)> + '_ {
    (0..self.len() - 1).map(move |step| {
      let i0 = (self.tail + step) % N;
      let i1 = (i0 + 1) % N;
      (self.samples[i0], self.samples[i1])
    })
  }

  /// Average per-axis speed across every bucket pair in the ring.
  ///
  /// A ring with a single bucket has no pairs and reports zero on both axes.
  pub fn velocity(&self) -> Velocity {
    let mut sum = Velocity::default();
    let mut count = 0u32;

    for (older, newer) in self.pairs() {
      // Buckets open strictly after the period, so `dt` is at least 1 in practice.
      let dt = elapsed(older.start, newer.start).max(1) as f32;
      sum.h += f32::from(newer.dx.unsigned_abs()) / dt;
      sum.v += f32::from(newer.dy.unsigned_abs()) / dt;
      count += 1;
    }

    if count == 0 {
      return Velocity::default();
    }

    let count = count as f32;
    Velocity { h: sum.h / count, v: sum.v / count }
  }
}
