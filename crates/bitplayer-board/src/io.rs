//! Platform pin I/O traits

use crate::{BoardResult, KeyEvent, Pin, PullMode};

/// Callback run when a registered key event fires.
pub type KeyHandler = Box<dyn FnMut()>;

/// Synchronous access to the host's pins.
pub trait PinIo {
    fn set_pull(&mut self, pin: Pin, mode: PullMode) -> BoardResult<()>;

    /// Logic level of a digital input; `true` is high.
    fn digital_read(&mut self, pin: Pin) -> BoardResult<bool>;

    fn digital_write(&mut self, pin: Pin, high: bool) -> BoardResult<()>;

    /// One analog sample, `0..=1023` on the micro:bit.
    fn analog_read(&mut self, pin: Pin) -> BoardResult<u16>;
}

/// Host event bus that dispatches button events by pin.
pub trait KeyEvents {
    fn register(&mut self, pin: Pin, event: KeyEvent, handler: KeyHandler) -> BoardResult<()>;
}

pub mod mock {
    use super::*;
    use crate::BoardError;
    use std::collections::{HashMap, VecDeque};

    /// Level reported by unread analog pins: a centered stick.
    pub const MOCK_ANALOG_REST: u16 = 500;

    /// In-memory board. Digital inputs idle high (released, with pull-ups);
    /// analog inputs idle at [`MOCK_ANALOG_REST`].
    #[derive(Default)]
    pub struct MockPinIo {
        digital_levels: HashMap<Pin, bool>,
        analog_levels: HashMap<Pin, u16>,
        analog_queue: HashMap<Pin, VecDeque<u16>>,
        pulls: HashMap<Pin, PullMode>,
        write_history: Vec<(Pin, bool)>,
        analog_reads: HashMap<Pin, usize>,
        handlers: Vec<(Pin, KeyEvent, KeyHandler)>,
        disconnected: bool,
    }

    impl MockPinIo {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set_digital(&mut self, pin: Pin, high: bool) {
            self.digital_levels.insert(pin, high);
        }

        /// Pulls an active-low key's pin to ground.
        pub fn press(&mut self, pin: Pin) {
            self.set_digital(pin, false);
        }

        pub fn release(&mut self, pin: Pin) {
            self.set_digital(pin, true);
        }

        pub fn set_analog(&mut self, pin: Pin, value: u16) {
            self.analog_levels.insert(pin, value);
        }

        /// Queues one-shot readings served before the steady level.
        pub fn queue_analog(&mut self, pin: Pin, value: u16) {
            self.analog_queue.entry(pin).or_default().push_back(value);
        }

        pub fn pull(&self, pin: Pin) -> PullMode {
            self.pulls.get(&pin).copied().unwrap_or_default()
        }

        pub fn write_history(&self) -> &[(Pin, bool)] {
            &self.write_history
        }

        /// Last level written to `pin`, if any.
        pub fn output_level(&self, pin: Pin) -> Option<bool> {
            self.write_history
                .iter()
                .rev()
                .find(|(p, _)| *p == pin)
                .map(|&(_, high)| high)
        }

        pub fn analog_read_count(&self, pin: Pin) -> usize {
            self.analog_reads.get(&pin).copied().unwrap_or(0)
        }

        pub fn handler_count(&self) -> usize {
            self.handlers.len()
        }

        /// Runs every handler registered for `pin` and `event`, returning how
        /// many ran.
        pub fn fire(&mut self, pin: Pin, event: KeyEvent) -> usize {
            let mut fired = 0usize;
            for (p, e, handler) in &mut self.handlers {
                if *p == pin && *e == event {
                    handler();
                    fired = fired.saturating_add(1);
                }
            }
            fired
        }

        pub fn disconnect(&mut self) {
            self.disconnected = true;
        }

        pub fn reconnect(&mut self) {
            self.disconnected = false;
        }

        fn check_connected(&self) -> BoardResult<()> {
            if self.disconnected {
                return Err(BoardError::Disconnected);
            }
            Ok(())
        }
    }

    impl PinIo for MockPinIo {
        fn set_pull(&mut self, pin: Pin, mode: PullMode) -> BoardResult<()> {
            self.check_connected()?;
            self.pulls.insert(pin, mode);
            Ok(())
        }

        fn digital_read(&mut self, pin: Pin) -> BoardResult<bool> {
            self.check_connected()?;
            Ok(self.digital_levels.get(&pin).copied().unwrap_or(true))
        }

        fn digital_write(&mut self, pin: Pin, high: bool) -> BoardResult<()> {
            self.check_connected()?;
            self.write_history.push((pin, high));
            Ok(())
        }

        fn analog_read(&mut self, pin: Pin) -> BoardResult<u16> {
            self.check_connected()?;
            let count = self.analog_reads.entry(pin).or_insert(0);
            *count = count.saturating_add(1);

            let queued = self.analog_queue.get_mut(&pin).and_then(VecDeque::pop_front);
            Ok(queued.unwrap_or_else(|| {
                self.analog_levels
                    .get(&pin)
                    .copied()
                    .unwrap_or(MOCK_ANALOG_REST)
            }))
        }
    }

    impl KeyEvents for MockPinIo {
        fn register(&mut self, pin: Pin, event: KeyEvent, handler: KeyHandler) -> BoardResult<()> {
            self.check_connected()?;
            self.handlers.push((pin, event, handler));
            Ok(())
        }
    }
}
