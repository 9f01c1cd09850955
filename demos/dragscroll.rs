//! Firmware loop: a GPIO activation button plus a motion sensor feeding drag-scroll.
#![allow(unused)]
use embedded_hal_async::digital::Wait;
use embedded_hal::digital::InputPin;
use dragscroll::{Button, Config, DragScroll, Host, KeyPin, Keycode, MouseReport, Polarity};

/// What the surrounding firmware has to offer: a millisecond timer, a way to
/// read the sensor and a way to send HID reports.
trait Board: Host {
  async fn next_motion(&mut self) -> (i16, i16);
  async fn send(&mut self, report: MouseReport);
}

#[allow(dead_code)]
async fn main_async<B, P>(board: &mut B, pin: P) -> Result<(), <P as embedded_hal::digital::ErrorType>::Error>
where
  B: Board,
  P: InputPin + Wait,
{
  let config = Config::default().with_divisors(6.0, 6.0).with_tap_term(180);
  let mut session: DragScroll = match DragScroll::new(config) {
    Ok(session) => session,
    Err(_) => return Ok(()),
  };
  let mut key = KeyPin::new(pin, Polarity::ActiveLow);

  loop {
    if let Some(event) = key.poll(board.now())? {
      session.process_key(board, Keycode::DragScroll, event);
    }

    let (x, y) = board.next_motion().await;
    let report = session.process_report(&*board, MouseReport::new(x, y));
    if report != MouseReport::default() {
      board.send(report).await;
    }
  }
}

fn main() {}
