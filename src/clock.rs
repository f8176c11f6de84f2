use std::time::{Duration, Instant};

/// Time source for the game loop
///
/// `delay` blocks the calling thread. The mismatch pause relies on this:
/// nothing else runs (not even input polling) until it returns.
pub trait Clock {
    /// Milliseconds since the clock was created
    fn elapsed_ms(&self) -> u64;

    fn delay(&mut self, ms: u64);
}

/// Wall clock backed by `Instant` and `thread::sleep`
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        SystemClock {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    fn delay(&mut self, ms: u64) {
        std::thread::sleep(Duration::from_millis(ms));
    }
}

/// Manually driven clock for tests. `delay` advances time instead of sleeping.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct FakeClock {
    pub now_ms: u64,
    pub delays: Vec<u64>,
}

#[cfg(test)]
impl FakeClock {
    pub fn advance(&mut self, ms: u64) {
        self.now_ms += ms;
    }
}

#[cfg(test)]
impl Clock for FakeClock {
    fn elapsed_ms(&self) -> u64 {
        self.now_ms
    }

    fn delay(&mut self, ms: u64) {
        self.delays.push(ms);
        self.now_ms += ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_delay_blocks() {
        let mut clock = SystemClock::new();
        let before = clock.elapsed_ms();
        clock.delay(20);
        assert!(clock.elapsed_ms() >= before + 20);
    }

    #[test]
    fn test_fake_clock_records_delays() {
        let mut clock = FakeClock::default();
        clock.advance(1_000);
        clock.delay(500);

        assert_eq!(clock.elapsed_ms(), 1_500);
        assert_eq!(clock.delays, vec![500]);
    }
}
