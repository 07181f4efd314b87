// Insertion sort tracer
// Shifts the sorted head right to open a slot for each element

use super::trace::{FrameMarks, TraceRecorder};
use super::SortTracer;

pub struct InsertionSort;

impl SortTracer for InsertionSort {
    fn sort(&self, rec: &mut TraceRecorder) {
        let n = rec.len();

        for i in 1..n {
            let current = rec.values()[i];
            rec.mark(FrameMarks::comparing(vec![i]).with_sorted(settled_head(i)));

            let mut slot = i;
            while slot > 0 && rec.values()[slot - 1] > current {
                // Comparison and shift are one visible step
                rec.count_comparison();
                rec.shift(slot - 1, slot, FrameMarks::none().with_sorted(settled_head(i)));
                slot -= 1;
            }

            // Final placement of the held element gets no frame
            rec.place(slot, current);
        }
    }
}

/// The first `count` indices, already ordered among themselves
fn settled_head(count: usize) -> Vec<usize> {
    (0..count).collect()
}
