// Playback controller
// Drives a cursor through a recorded sort trace on a re-armed one-shot timer

mod ticker;

use std::sync::{Arc, Mutex};
use std::time::Instant;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::sorter::{self, Frame, RunStats, SortAlgorithm, Trace};

/// Playback speed bounds; the tick delay is `500 - speed` milliseconds
pub const SPEED_MIN: u32 = 10;
pub const SPEED_MAX: u32 = 300;

/// Bounds for generated array lengths
pub const ARRAY_SIZE_MIN: usize = 10;
pub const ARRAY_SIZE_MAX: usize = 100;

const DEFAULT_SPEED: u32 = 100;
const DEFAULT_ARRAY_SIZE: usize = 30;

/// Generated values land in this range
const VALUE_MIN: i32 = 10;
const VALUE_MAX: i32 = 309;

/// Where playback currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackPhase {
    /// Fresh array, nothing sorted yet (trivial single-frame trace)
    Idle,

    /// Trace available, cursor parked
    Ready,

    Playing,

    Paused,

    /// Cursor on the last frame
    Finished,
}

/// Full playback state handed to the display layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    pub phase: PlaybackPhase,
    pub is_playing: bool,
    pub cursor: usize,
    pub last_index: usize,
    pub speed: u32,
    pub array_size: usize,
    pub algorithm: SortAlgorithm,
    pub stats: RunStats,
}

struct PlaybackInner {
    base_array: Vec<i32>,
    trace: Trace,
    cursor: usize,
    phase: PlaybackPhase,
    speed: u32,
    array_size: usize,
    algorithm: SortAlgorithm,
    stats: RunStats,
    started_at: Option<Instant>,

    /// Bumped on every state-changing operation; a pending timer whose
    /// token no longer matches must not touch the cursor
    epoch: u64,
}

impl PlaybackInner {
    fn last_index(&self) -> usize {
        self.trace.len().saturating_sub(1)
    }

    /// Install a fresh array with its trivial single-frame trace
    fn reseed(&mut self, base: Vec<i32>) {
        self.epoch += 1;
        self.trace = vec![Frame::initial(base.clone())];
        self.base_array = base;
        self.cursor = 0;
        self.stats = RunStats::default();
        self.phase = PlaybackPhase::Idle;
        self.started_at = None;
    }

    /// One timer firing: advance the cursor, finishing at the end
    fn advance_tick(&mut self) {
        if self.cursor < self.last_index() {
            self.cursor += 1;
        }
        if self.cursor >= self.last_index() {
            self.finish();
        }
    }

    /// The cursor reached the last frame: stop the clock, force pause
    fn finish(&mut self) {
        self.phase = PlaybackPhase::Finished;
        if let Some(started) = self.started_at {
            self.stats.elapsed_ms = started.elapsed().as_millis() as u64;
        }
    }
}

/// Owns the trace, the cursor, and the timer driving forward playback
///
/// State lives behind a mutex so the timer callback and the IPC commands
/// see one consistent view; the controller itself is what Tauri manages.
pub struct PlaybackController {
    inner: Arc<Mutex<PlaybackInner>>,
}

impl PlaybackController {
    pub fn new() -> Self {
        let base = random_array(DEFAULT_ARRAY_SIZE);
        let inner = PlaybackInner {
            trace: vec![Frame::initial(base.clone())],
            base_array: base,
            cursor: 0,
            phase: PlaybackPhase::Idle,
            speed: DEFAULT_SPEED,
            array_size: DEFAULT_ARRAY_SIZE,
            algorithm: SortAlgorithm::Bubble,
            stats: RunStats::default(),
            started_at: None,
            epoch: 0,
        };

        PlaybackController {
            inner: Arc::new(Mutex::new(inner)),
        }
    }

    /// Replace the working array with a fresh random one
    pub fn generate_array(&self) {
        let mut inner = self.inner.lock().unwrap();
        let size = inner.array_size;
        inner.reseed(random_array(size));
    }

    /// Run the selected algorithm over the current array and start playback
    pub fn start_sort(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.epoch += 1;

        let (trace, stats) = sorter::generate_trace(&inner.base_array, inner.algorithm);
        // Elapsed time keeps its old value until this playback completes
        inner.stats.comparisons = stats.comparisons;
        inner.stats.swaps = stats.swaps;
        inner.trace = trace;
        inner.cursor = 0;
        inner.phase = PlaybackPhase::Playing;
        inner.started_at = Some(Instant::now());

        self.arm(&inner);
    }

    /// Flip between playing and paused; with no trace yet this starts a sort
    pub fn toggle_play_pause(&self) {
        {
            let mut inner = self.inner.lock().unwrap();
            if inner.trace.len() > 1 {
                inner.epoch += 1;
                match inner.phase {
                    PlaybackPhase::Playing => inner.phase = PlaybackPhase::Paused,
                    _ if inner.cursor >= inner.last_index() => {
                        // At the end playback cannot resume
                        inner.phase = PlaybackPhase::Finished;
                    }
                    _ => {
                        inner.phase = PlaybackPhase::Playing;
                        self.arm(&inner);
                    }
                }
                return;
            }
        }

        // No trace yet: the toggle doubles as the start button
        self.start_sort();
    }

    /// Move the cursor one frame forward, clamped to the trace
    pub fn step_forward(&self) {
        let mut inner = self.inner.lock().unwrap();
        if inner.cursor < inner.last_index() {
            inner.cursor += 1;
            if inner.cursor == inner.last_index() && inner.trace.len() > 1 {
                inner.finish();
            }
        }
    }

    /// Move the cursor one frame back; at the start this is a no-op
    pub fn step_backward(&self) {
        let mut inner = self.inner.lock().unwrap();
        if inner.cursor > 0 {
            inner.cursor -= 1;
            if inner.phase == PlaybackPhase::Finished {
                inner.phase = PlaybackPhase::Paused;
            }
        }
    }

    /// Rewind to the first frame without regenerating the trace
    pub fn reset(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.epoch += 1;
        inner.cursor = 0;
        inner.stats = RunStats::default();
        inner.phase = PlaybackPhase::Ready;
    }

    /// Change playback speed; while playing, the timer is re-armed so the
    /// new delay applies immediately
    pub fn set_speed(&self, speed: u32) {
        let mut inner = self.inner.lock().unwrap();
        inner.speed = speed.clamp(SPEED_MIN, SPEED_MAX);
        inner.epoch += 1;
        if inner.phase == PlaybackPhase::Playing {
            self.arm(&inner);
        }
    }

    /// Resize the working array; stops playback and regenerates
    pub fn set_array_size(&self, size: usize) {
        let mut inner = self.inner.lock().unwrap();
        inner.array_size = size.clamp(ARRAY_SIZE_MIN, ARRAY_SIZE_MAX);
        let size = inner.array_size;
        inner.reseed(random_array(size));
    }

    /// Select a different algorithm; stops playback and invalidates the
    /// current trace, keeping the array
    pub fn set_algorithm(&self, algorithm: SortAlgorithm) {
        let mut inner = self.inner.lock().unwrap();
        inner.algorithm = algorithm;
        let base = inner.base_array.clone();
        inner.reseed(base);
    }

    /// The frame the cursor currently points at
    pub fn current_frame(&self) -> Frame {
        let inner = self.inner.lock().unwrap();
        inner.trace[inner.cursor.min(inner.last_index())].clone()
    }

    pub fn stats(&self) -> RunStats {
        self.inner.lock().unwrap().stats
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        let inner = self.inner.lock().unwrap();
        PlaybackSnapshot {
            phase: inner.phase,
            is_playing: inner.phase == PlaybackPhase::Playing,
            cursor: inner.cursor,
            last_index: inner.last_index(),
            speed: inner.speed,
            array_size: inner.array_size,
            algorithm: inner.algorithm,
            stats: inner.stats,
        }
    }

    /// Cancel-and-reschedule: the caller has already bumped the epoch, so
    /// any previously pending timer is dead; this arms the replacement
    fn arm(&self, inner: &PlaybackInner) {
        ticker::arm(
            Arc::clone(&self.inner),
            inner.epoch,
            ticker::tick_delay(inner.speed),
        );
    }

    #[cfg(test)]
    fn seed_array(&self, values: Vec<i32>) {
        self.inner.lock().unwrap().reseed(values);
    }
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new()
    }
}

fn random_array(len: usize) -> Vec<i32> {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| rng.random_range(VALUE_MIN..=VALUE_MAX))
        .collect()
}
