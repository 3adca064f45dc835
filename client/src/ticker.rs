use std::time::{Duration, Instant};

pub struct FrameSleeper {
    interval: Duration,
    last_tick: Option<Instant>,
}

impl FrameSleeper {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_tick: None,
        }
    }

    /// Sleeps out the remainder of the interval since the previous tick.
    /// Returns immediately on the first call and when the last cycle overran,
    /// so a late frame queues behind the previous one instead of being skipped.
    pub fn wait(&mut self) {
        let now = Instant::now();

        if let Some(last_tick) = self.last_tick {
            let elapsed = now.duration_since(last_tick);
            if elapsed < self.interval {
                spin_sleep::sleep(self.interval - elapsed);
            }
        }

        self.last_tick = Some(Instant::now());
    }
}
