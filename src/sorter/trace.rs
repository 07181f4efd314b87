// Sort trace recording
// Frames, run counters, and the recorder the tracers narrate through

use serde::{Deserialize, Serialize};

/// A single immutable snapshot of array state during a sort run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Full array state at this point in execution
    pub array: Vec<i32>,

    /// Indices currently being compared (one or two)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparing: Option<Vec<usize>>,

    /// Pair of indices currently being exchanged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swapping: Option<(usize, usize)>,

    /// Indices already in their final sorted position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorted: Option<Vec<usize>>,

    /// Active pivot index (quick sort only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pivot_index: Option<usize>,
}

impl Frame {
    /// Frame with no annotations, representing the initial state
    pub fn initial(array: Vec<i32>) -> Self {
        Frame {
            array,
            comparing: None,
            swapping: None,
            sorted: None,
            pivot_index: None,
        }
    }
}

/// The complete ordered frame sequence for one algorithm run
pub type Trace = Vec<Frame>;

/// Aggregate counters for one sort run
///
/// `comparisons` and `swaps` are fixed at trace generation; `elapsed_ms`
/// is filled in when playback first reaches the last frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub comparisons: u64,
    pub swaps: u64,
    pub elapsed_ms: u64,
}

/// Positional annotations attached to an emitted frame
///
/// The `swapping` pair is not part of the marks; the recorder sets it on
/// the frames its swap and shift operations emit.
#[derive(Debug, Clone, Default)]
pub struct FrameMarks {
    pub comparing: Option<Vec<usize>>,
    pub sorted: Option<Vec<usize>>,
    pub pivot_index: Option<usize>,
}

impl FrameMarks {
    /// Marks with no annotations at all
    pub fn none() -> Self {
        FrameMarks::default()
    }

    /// Start from a comparison annotation
    pub fn comparing(indices: Vec<usize>) -> Self {
        FrameMarks {
            comparing: Some(indices),
            ..FrameMarks::default()
        }
    }

    /// Attach the set of indices already in final position
    pub fn with_sorted(mut self, indices: Vec<usize>) -> Self {
        self.sorted = Some(indices);
        self
    }

    /// Attach the active pivot index
    pub fn with_pivot(mut self, index: usize) -> Self {
        self.pivot_index = Some(index);
        self
    }
}

/// Records frames while a tracer sorts a private copy of the input
///
/// The recorder owns the working array, so every mutation goes through it
/// and every emitted frame snapshots a consistent state.
pub struct TraceRecorder {
    values: Vec<i32>,
    frames: Vec<Frame>,
    comparisons: u64,
    swaps: u64,
}

impl TraceRecorder {
    /// Start a recording; emits the unannotated initial frame
    pub fn new(initial: &[i32]) -> Self {
        TraceRecorder {
            values: initial.to_vec(),
            frames: vec![Frame::initial(initial.to_vec())],
            comparisons: 0,
            swaps: 0,
        }
    }

    /// Number of elements being sorted
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Current working array state
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    /// Emit an annotated frame without touching the counters
    pub fn mark(&mut self, marks: FrameMarks) {
        self.push(marks, None);
    }

    /// Count a comparison and emit a frame for it
    pub fn compare(&mut self, marks: FrameMarks) {
        self.comparisons += 1;
        self.push(marks, None);
    }

    /// Count a comparison that gets no frame of its own
    /// (insertion sort's shift loop folds the comparison into the shift frame)
    pub fn count_comparison(&mut self) {
        self.comparisons += 1;
    }

    /// Exchange two elements, count the swap, and emit a frame for it
    pub fn swap(&mut self, i: usize, j: usize, marks: FrameMarks) {
        self.values.swap(i, j);
        self.swaps += 1;
        self.push(marks, Some((i, j)));
    }

    /// Copy the element at `from` over the one at `to`, counted as a swap
    ///
    /// This is insertion sort's shift: the value at `from` is duplicated
    /// until the held element is placed, and the frame shows exactly that.
    pub fn shift(&mut self, from: usize, to: usize, marks: FrameMarks) {
        self.values[to] = self.values[from];
        self.swaps += 1;
        self.push(marks, Some((from, to)));
    }

    /// Overwrite a slot silently (no frame, no counter)
    pub fn place(&mut self, index: usize, value: i32) {
        self.values[index] = value;
    }

    fn push(&mut self, marks: FrameMarks, swapping: Option<(usize, usize)>) {
        self.frames.push(Frame {
            array: self.values.clone(),
            comparing: marks.comparing,
            swapping,
            sorted: marks.sorted,
            pivot_index: marks.pivot_index,
        });
    }

    /// Emit the final all-sorted frame and hand back the trace and counters
    pub fn finish(mut self) -> (Trace, RunStats) {
        let all: Vec<usize> = (0..self.values.len()).collect();
        self.push(FrameMarks::none().with_sorted(all), None);

        let stats = RunStats {
            comparisons: self.comparisons,
            swaps: self.swaps,
            elapsed_ms: 0,
        };

        (self.frames, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_recorder_emits_initial_frame() {
        let rec = TraceRecorder::new(&[4, 2, 7]);
        assert_eq!(rec.len(), 3);
        assert_eq!(rec.values(), &[4, 2, 7]);

        let (trace, stats) = rec.finish();
        assert_eq!(trace.len(), 2);
        assert_eq!(trace[0], Frame::initial(vec![4, 2, 7]));
        assert_eq!(stats.comparisons, 0);
        assert_eq!(stats.swaps, 0);
    }

    #[test]
    fn test_compare_counts_and_emits() {
        let mut rec = TraceRecorder::new(&[2, 1]);
        rec.compare(FrameMarks::comparing(vec![0, 1]));

        let (trace, stats) = rec.finish();
        assert_eq!(stats.comparisons, 1);
        assert_eq!(trace[1].comparing, Some(vec![0, 1]));
        assert_eq!(trace[1].array, vec![2, 1]);
    }

    #[test]
    fn test_swap_exchanges_and_emits() {
        let mut rec = TraceRecorder::new(&[2, 1]);
        rec.swap(0, 1, FrameMarks::none());

        let (trace, stats) = rec.finish();
        assert_eq!(stats.swaps, 1);
        assert_eq!(trace[1].swapping, Some((0, 1)));
        assert_eq!(trace[1].array, vec![1, 2]);
    }

    #[test]
    fn test_shift_duplicates_value() {
        let mut rec = TraceRecorder::new(&[5, 9]);
        rec.shift(0, 1, FrameMarks::none());
        assert_eq!(rec.values(), &[5, 5]);

        rec.place(0, 9);
        assert_eq!(rec.values(), &[9, 5]);

        let (trace, stats) = rec.finish();
        assert_eq!(stats.swaps, 1);
        // place() emits nothing: shift frame, then the final frame
        assert_eq!(trace.len(), 3);
        assert_eq!(trace[1].array, vec![5, 5]);
    }

    #[test]
    fn test_finish_marks_every_index_sorted() {
        let rec = TraceRecorder::new(&[3, 1, 2]);
        let (trace, _) = rec.finish();

        let last = trace.last().unwrap();
        assert_eq!(last.sorted, Some(vec![0, 1, 2]));
        assert_eq!(last.comparing, None);
        assert_eq!(last.swapping, None);
    }

    #[test]
    fn test_frame_json_omits_absent_annotations() {
        let frame = Frame::initial(vec![1, 2]);
        let json = serde_json::to_value(&frame).unwrap();

        assert_eq!(json["array"], serde_json::json!([1, 2]));
        assert!(json.get("comparing").is_none());
        assert!(json.get("swapping").is_none());
        assert!(json.get("sorted").is_none());
        assert!(json.get("pivot_index").is_none());
    }

    #[test]
    fn test_frame_json_keeps_empty_sorted_set() {
        let mut rec = TraceRecorder::new(&[2, 1]);
        rec.compare(FrameMarks::comparing(vec![0, 1]).with_sorted(vec![]));

        let (trace, _) = rec.finish();
        let json = serde_json::to_value(&trace[1]).unwrap();
        assert_eq!(json["sorted"], serde_json::json!([]));
    }
}
