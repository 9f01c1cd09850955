//! Gesture mode controller tying the activation key to the scroll classifier.

use crate::config::Config;
use crate::report::{elapsed, Button, Host, Instant, KeyEvent, Keycode, MouseReport};
use crate::scroll::Classifier;
use crate::Error;

/// Ring capacity used when none is given.
pub const DEFAULT_HISTORY: usize = 30;

/// Drag-scroll activation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
  /// Pointer motion passes through untouched.
  Idle,
  /// The activation key is held and motion is turned into scrolling.
  Dragging {
    /// Timer reading when the key went down.
    since: Instant,
    /// Whether any wheel output was produced since then.
    scrolled: bool,
  },
}

impl Mode {
  pub const fn is_dragging(self) -> bool {
    matches!(self, Mode::Dragging { .. })
  }
}

/// Per-device drag-scroll state, owned by the host and fed every key event
/// and pointing tick.
///
/// Holding [`Keycode::DragScroll`] turns pointer motion into wheel output.
/// Releasing it quickly without having scrolled taps the middle button
/// instead, so one key serves as both middle click and scroll modifier.
///
/// `N` is the number of history buckets kept for velocity estimation.
///
/// ```no_run
/// use dragscroll::{Config, DragScroll, Host, KeyEvent, Keycode, MouseReport};
///
/// fn on_key<H: Host>(session: &mut DragScroll, host: &mut H, keycode: Keycode, event: KeyEvent) -> bool {
///   session.process_key(host, keycode, event)
/// }
///
/// fn on_motion<H: Host>(session: &mut DragScroll, host: &H, report: MouseReport) -> MouseReport {
///   session.process_report(host, report)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DragScroll<const N: usize = DEFAULT_HISTORY> {
  config: Config,
  mode: Mode,
  classifier: Classifier<N>,
}

impl<const N: usize> DragScroll<N> {
  /// Create an idle session after checking `config` and the ring capacity.
  pub fn new(config: Config) -> Result<Self, Error> {
    if N < 2 {
      return Err(Error::InvalidCapacity);
    }
    config.validate()?;
    Ok(Self { config, mode: Mode::Idle, classifier: Classifier::new() })
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  pub fn mode(&self) -> Mode {
    self.mode
  }

  pub fn is_dragging(&self) -> bool {
    self.mode.is_dragging()
  }

  pub fn classifier(&self) -> &Classifier<N> {
    &self.classifier
  }

  /// Handle a key transition.
  ///
  /// Returns `false` when the key was consumed and the host must skip its
  /// default handling, `true` otherwise.
  pub fn process_key<H: Host>(&mut self, host: &mut H, keycode: Keycode, event: KeyEvent) -> bool {
    match keycode {
      Keycode::DragScroll => {
        if event.pressed {
          self.activate(event.time);
        } else {
          self.deactivate(host, event.time);
        }
        false
      }
      Keycode::Other(_) => true,
    }
  }

  /// Transform one pointing tick. Outside drag-scroll the report is returned
  /// unchanged.
  pub fn process_report<H: Host>(&mut self, host: &H, report: MouseReport) -> MouseReport {
    let Mode::Dragging { ref mut scrolled, .. } = self.mode else {
      return report;
    };

    let report = self.classifier.classify(&self.config, report, host.now());
    if report.is_scroll() {
      *scrolled = true;
    }
    report
  }

  fn activate(&mut self, now: Instant) {
    self.classifier.reset(now);
    self.mode = Mode::Dragging { since: now, scrolled: false };
    debug!("drag-scroll on at {}", now);
  }

  fn deactivate<H: Host>(&mut self, host: &mut H, now: Instant) {
    let Mode::Dragging { since, scrolled } = self.mode else {
      return;
    };
    self.mode = Mode::Idle;

    let held = elapsed(since, now);
    if !scrolled && held < self.config.tap_term {
      debug!("drag-scroll tapped after {} ms, clicking", held);
      host.tap(Button::Middle);
    } else {
      debug!("drag-scroll off after {} ms (scrolled: {})", held, scrolled);
    }
  }
}
