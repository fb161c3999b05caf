use std::{
    sync::{
        atomic::{AtomicBool, AtomicU64, Ordering},
        Arc,
    },
    thread,
    time::Duration,
};

/// Granularity of the cancellation check within each one-second tick.
const TICK_SLICE: Duration = Duration::from_millis(100);
const SLICES_PER_TICK: u32 = 10;

/// A repeating one-second tick incrementing a shared seconds counter on a
/// background thread. Stopping (or dropping) the timer joins the thread, so
/// the counter cannot move once `stop` has returned.
#[derive(Debug)]
pub struct Timer {
    stop: Arc<AtomicBool>,
    thread: Option<thread::JoinHandle<()>>,
}

impl Timer {
    /// Start ticking into `seconds`. The counter is incremented once per
    /// elapsed second, starting one second from now.
    pub fn start(seconds: Arc<AtomicU64>) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);
        let thread = thread::spawn(move || loop {
            for _ in 0..SLICES_PER_TICK {
                thread::sleep(TICK_SLICE);
                if thread_stop.load(Ordering::Acquire) {
                    return;
                }
            }
            seconds.fetch_add(1, Ordering::Release);
        });
        Timer {
            stop,
            thread: Some(thread),
        }
    }

    /// Cancel the tick and wait for the thread to exit. Idempotent.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Release);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_once_per_second() {
        let seconds = Arc::new(AtomicU64::new(0));
        let mut timer = Timer::start(Arc::clone(&seconds));
        thread::sleep(Duration::from_millis(2500));
        timer.stop();

        let elapsed = seconds.load(Ordering::Acquire);
        assert!((1..=3).contains(&elapsed), "elapsed was {}", elapsed);

        // Stop joined the thread, so the counter is frozen
        thread::sleep(Duration::from_millis(1200));
        assert_eq!(seconds.load(Ordering::Acquire), elapsed);
    }

    #[test]
    fn stop_before_first_tick() {
        let seconds = Arc::new(AtomicU64::new(0));
        let mut timer = Timer::start(Arc::clone(&seconds));
        thread::sleep(Duration::from_millis(300));
        timer.stop();

        assert_eq!(seconds.load(Ordering::Acquire), 0);
    }
}
