// Selection sort tracer
// Scans for the minimum, with the head marked settled at the start of
// each pass (display convention carried over from the original animation)

use super::trace::{FrameMarks, TraceRecorder};
use super::SortTracer;

pub struct SelectionSort;

impl SortTracer for SelectionSort {
    fn sort(&self, rec: &mut TraceRecorder) {
        let n = rec.len();

        for i in 0..n.saturating_sub(1) {
            let mut min_index = i;

            // Pass marker: not a counted comparison
            rec.mark(FrameMarks::comparing(vec![i]).with_sorted(settled_head(i)));

            for j in i + 1..n {
                rec.compare(
                    FrameMarks::comparing(vec![min_index, j]).with_sorted(settled_head(i)),
                );

                if rec.values()[j] < rec.values()[min_index] {
                    min_index = j;
                }
            }

            if min_index != i {
                rec.swap(i, min_index, FrameMarks::none().with_sorted(settled_head(i)));
            }
        }
    }
}

/// The first `count` indices, already settled by earlier passes
fn settled_head(count: usize) -> Vec<usize> {
    (0..count).collect()
}
