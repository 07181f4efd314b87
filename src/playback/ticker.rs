// Re-armed one-shot playback timer
// One sleep thread per tick; stale callbacks drop out via the epoch token

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use super::{PlaybackInner, PlaybackPhase};

/// Delay before the next frame advance, derived from the speed setting
pub(super) fn tick_delay(speed: u32) -> Duration {
    Duration::from_millis(u64::from(500 - speed))
}

/// Schedule a single cursor advance after `delay`.
///
/// The callback re-arms itself while playback continues. Every
/// state-changing operation bumps the epoch before (re)arming, so a
/// callback holding an outdated token finds the state replaced under it
/// and exits without advancing anything.
pub(super) fn arm(inner: Arc<Mutex<PlaybackInner>>, token: u64, delay: Duration) {
    thread::spawn(move || {
        thread::sleep(delay);

        let next = {
            let mut guard = inner.lock().unwrap();
            if guard.epoch != token || guard.phase != PlaybackPhase::Playing {
                return;
            }

            guard.advance_tick();

            if guard.phase == PlaybackPhase::Playing {
                // Read the speed afresh so slider changes land mid-flight
                Some(tick_delay(guard.speed))
            } else {
                None
            }
        };

        if let Some(delay) = next {
            arm(inner, token, delay);
        }
    });
}
