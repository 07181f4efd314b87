// Quick sort tracer
// Lomuto partition around the last element of each range, left side first

use super::trace::{FrameMarks, TraceRecorder};
use super::SortTracer;

pub struct QuickSort;

impl SortTracer for QuickSort {
    fn sort(&self, rec: &mut TraceRecorder) {
        let n = rec.len();
        if n > 1 {
            sort_range(rec, 0, n - 1);
        }
    }
}

/// Sort the inclusive range `[low, high]`; callers guarantee `low < high`
fn sort_range(rec: &mut TraceRecorder, low: usize, high: usize) {
    let pivot_pos = partition(rec, low, high);

    if pivot_pos > low + 1 {
        sort_range(rec, low, pivot_pos - 1);
    }
    if pivot_pos + 1 < high {
        sort_range(rec, pivot_pos + 1, high);
    }
}

/// Partition around `values[high]`, returning the pivot's final position
///
/// `boundary` tracks the first index not known to be below the pivot, so
/// it lands on the pivot's slot once the scan completes.
fn partition(rec: &mut TraceRecorder, low: usize, high: usize) -> usize {
    let pivot = rec.values()[high];
    let mut boundary = low;

    rec.mark(FrameMarks::comparing(vec![high]).with_pivot(high));

    for j in low..high {
        rec.compare(FrameMarks::comparing(vec![j, high]).with_pivot(high));

        if rec.values()[j] < pivot {
            if boundary != j {
                rec.swap(boundary, j, FrameMarks::none().with_pivot(high));
            }
            boundary += 1;
        }
    }

    if boundary != high {
        // Pivot moves into place; the original leaves this frame unmarked
        rec.swap(boundary, high, FrameMarks::none());
    }

    boundary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorter::{generate_trace, SortAlgorithm};

    #[test]
    fn test_hand_traced_run() {
        // partition(0,3) with pivot 1: nothing beats the pivot, it swaps
        // to the front; partition(1,3) with pivot 5 places it at index 2
        let (trace, stats) = generate_trace(&[5, 3, 8, 1], SortAlgorithm::Quick);

        assert_eq!(stats.comparisons, 5);
        assert_eq!(stats.swaps, 2);
        assert_eq!(trace.last().unwrap().array, vec![1, 3, 5, 8]);
    }

    #[test]
    fn test_first_partition_marks_last_index_as_pivot() {
        let (trace, _) = generate_trace(&[5, 3, 8, 1], SortAlgorithm::Quick);

        // Frame 0 is the initial state; frame 1 enters the top-level call
        assert_eq!(trace[1].pivot_index, Some(3));
        assert_eq!(trace[1].comparing, Some(vec![3]));
    }

    #[test]
    fn test_scan_swaps_keep_pivot_annotation() {
        // [3,1,2]: scanning against pivot 2 swaps 1 forward while the
        // pivot stays marked; the closing pivot swap is unannotated
        let (trace, _) = generate_trace(&[3, 1, 2], SortAlgorithm::Quick);

        let scan_swap = trace
            .iter()
            .find(|f| f.swapping.is_some() && f.pivot_index.is_some())
            .expect("scan swap carries the pivot");
        assert_eq!(scan_swap.pivot_index, Some(2));

        let pivot_swap = trace
            .iter()
            .find(|f| f.swapping.is_some() && f.pivot_index.is_none())
            .expect("pivot placement drops the annotation");
        assert_eq!(pivot_swap.swapping, Some((1, 2)));
    }

    #[test]
    fn test_no_sorted_annotations_before_final_frame() {
        let (trace, _) = generate_trace(&[9, 1, 8, 2, 7, 3], SortAlgorithm::Quick);
        for frame in &trace[..trace.len() - 1] {
            assert_eq!(frame.sorted, None);
        }
        assert!(trace.last().unwrap().sorted.is_some());
    }

    #[test]
    fn test_reverse_sorted_worst_case() {
        let input: Vec<i32> = (1..=8).rev().collect();
        let (trace, _) = generate_trace(&input, SortAlgorithm::Quick);
        let expected: Vec<i32> = (1..=8).collect();
        assert_eq!(trace.last().unwrap().array, expected);
    }
}
