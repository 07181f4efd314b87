// Sorting trace generation
// Four algorithm tracers behind one interface

mod bubble;
mod insertion;
mod quick;
mod selection;
pub mod trace;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use trace::{Frame, FrameMarks, RunStats, Trace, TraceRecorder};

/// An algorithm identifier arriving over IPC was not one of the four
#[derive(Debug, Error)]
#[error("unknown sorting algorithm: {0}")]
pub struct UnknownAlgorithm(String);

/// The sorting algorithms the visualizer can animate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
    Quick,
}

impl SortAlgorithm {
    /// Convert from string representation (for IPC arguments)
    ///
    /// The selector is a closed enumeration; anything else is rejected
    /// rather than mapped to a fallback.
    pub fn from_string(s: &str) -> Result<Self, UnknownAlgorithm> {
        match s {
            "bubble" => Ok(SortAlgorithm::Bubble),
            "selection" => Ok(SortAlgorithm::Selection),
            "insertion" => Ok(SortAlgorithm::Insertion),
            "quick" => Ok(SortAlgorithm::Quick),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }

    /// Convert to string representation
    pub fn to_string(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Selection => "selection",
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Quick => "quick",
        }
    }

    /// Human-readable name for UI display
    pub fn display_name(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "Bubble Sort",
            SortAlgorithm::Selection => "Selection Sort",
            SortAlgorithm::Insertion => "Insertion Sort",
            SortAlgorithm::Quick => "Quick Sort",
        }
    }

    fn tracer(&self) -> &'static dyn SortTracer {
        match self {
            SortAlgorithm::Bubble => &bubble::BubbleSort,
            SortAlgorithm::Selection => &selection::SelectionSort,
            SortAlgorithm::Insertion => &insertion::InsertionSort,
            SortAlgorithm::Quick => &quick::QuickSort,
        }
    }
}

/// A sorting algorithm that narrates its work through a recorder
pub trait SortTracer {
    /// Sort the recorder's working array, emitting a frame for every
    /// step a learner should see
    fn sort(&self, rec: &mut TraceRecorder);
}

/// Run `algorithm` over a copy of `initial`, recording every intermediate
/// state
///
/// The input array is never mutated. Identical inputs yield identical
/// traces and counters.
pub fn generate_trace(initial: &[i32], algorithm: SortAlgorithm) -> (Trace, RunStats) {
    let mut rec = TraceRecorder::new(initial);
    algorithm.tracer().sort(&mut rec);
    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [SortAlgorithm; 4] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Quick,
    ];

    #[test]
    fn test_algorithm_string_round_trip() {
        for algorithm in ALL {
            let parsed = SortAlgorithm::from_string(algorithm.to_string()).unwrap();
            assert_eq!(parsed, algorithm);
        }
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        assert!(SortAlgorithm::from_string("merge").is_err());
        assert!(SortAlgorithm::from_string("").is_err());
        assert!(SortAlgorithm::from_string("Bubble").is_err());
    }

    #[test]
    fn test_final_frame_matches_reference_sort() {
        let input = vec![37, -4, 0, 112, 9, 9, -4, 51];
        let mut expected = input.clone();
        expected.sort();

        for algorithm in ALL {
            let (trace, _) = generate_trace(&input, algorithm);
            let last = trace.last().unwrap();
            assert_eq!(last.array, expected, "{}", algorithm.to_string());
            assert_eq!(
                last.sorted,
                Some((0..input.len()).collect()),
                "{}",
                algorithm.to_string()
            );
        }
    }

    #[test]
    fn test_input_array_is_not_mutated() {
        let input = vec![5, 3, 8, 1];
        for algorithm in ALL {
            let _ = generate_trace(&input, algorithm);
            assert_eq!(input, vec![5, 3, 8, 1]);
        }
    }

    #[test]
    fn test_trace_is_deterministic() {
        let input = vec![12, 7, 44, 7, -3, 19];
        for algorithm in ALL {
            let (trace_a, stats_a) = generate_trace(&input, algorithm);
            let (trace_b, stats_b) = generate_trace(&input, algorithm);
            assert_eq!(trace_a, trace_b);
            assert_eq!(stats_a, stats_b);
        }
    }

    #[test]
    fn test_empty_and_single_element_inputs() {
        for algorithm in ALL {
            let (trace, stats) = generate_trace(&[], algorithm);
            assert_eq!(trace.len(), 2);
            assert_eq!(trace[1].sorted, Some(vec![]));
            assert_eq!(stats.comparisons, 0);
            assert_eq!(stats.swaps, 0);

            let (trace, stats) = generate_trace(&[42], algorithm);
            assert_eq!(trace.len(), 2);
            assert_eq!(trace[1].array, vec![42]);
            assert_eq!(trace[1].sorted, Some(vec![0]));
            assert_eq!(stats.comparisons, 0);
            assert_eq!(stats.swaps, 0);
        }
    }

    #[test]
    fn test_swap_counter_matches_swapping_frames() {
        let input = vec![9, 1, 8, 2, 7, 3];
        for algorithm in ALL {
            let (trace, stats) = generate_trace(&input, algorithm);
            let swapping_frames = trace.iter().filter(|f| f.swapping.is_some()).count();
            assert_eq!(
                stats.swaps,
                swapping_frames as u64,
                "{}",
                algorithm.to_string()
            );
        }
    }

    #[test]
    fn test_annotation_indices_stay_in_bounds() {
        let input = vec![15, 3, 99, -20, 3, 61, 8];
        let n = input.len();
        for algorithm in ALL {
            let (trace, _) = generate_trace(&input, algorithm);
            for frame in &trace {
                assert_eq!(frame.array.len(), n);
                if let Some(comparing) = &frame.comparing {
                    assert!(comparing.iter().all(|&i| i < n));
                }
                if let Some((a, b)) = frame.swapping {
                    assert!(a < n && b < n);
                }
                if let Some(sorted) = &frame.sorted {
                    assert!(sorted.iter().all(|&i| i < n));
                }
                if let Some(pivot) = frame.pivot_index {
                    assert!(pivot < n);
                }
            }
        }
    }
}
