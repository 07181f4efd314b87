// Bubble sort tracer
// Adjacent comparisons, with the tail growing settled after each pass

use super::trace::{FrameMarks, TraceRecorder};
use super::SortTracer;

pub struct BubbleSort;

impl SortTracer for BubbleSort {
    fn sort(&self, rec: &mut TraceRecorder) {
        let n = rec.len();

        for i in 0..n.saturating_sub(1) {
            for j in 0..n - i - 1 {
                rec.compare(
                    FrameMarks::comparing(vec![j, j + 1]).with_sorted(settled_tail(n, i)),
                );

                if rec.values()[j] > rec.values()[j + 1] {
                    rec.swap(j, j + 1, FrameMarks::none().with_sorted(settled_tail(n, i)));
                }
            }
        }
    }
}

/// The last `count` indices, largest-first: already bubbled into place
fn settled_tail(n: usize, count: usize) -> Vec<usize> {
    (0..count).map(|k| n - 1 - k).collect()
}
