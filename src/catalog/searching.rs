// Searching reference entries

use super::types::{AlgorithmEntry, Category, Implementation};

pub fn binary_search() -> AlgorithmEntry {
    AlgorithmEntry {
        id: "binary-search".to_string(),
        name: "Binary Search".to_string(),
        category: Category::Searching,
        description: "An efficient algorithm for finding an item from a sorted list by \
                      repeatedly dividing the search interval in half."
            .to_string(),
        time_complexity: "O(log n)".to_string(),
        space_complexity: "O(1) iterative, O(log n) recursive".to_string(),
        implementations: vec![
            Implementation {
                language: "JavaScript".to_string(),
                code: r#"function binarySearch(arr, target) {
  let left = 0;
  let right = arr.length - 1;

  while (left <= right) {
    const mid = Math.floor((left + right) / 2);

    if (arr[mid] === target) {
      return mid; // Found the target
    } else if (arr[mid] < target) {
      left = mid + 1; // Search right half
    } else {
      right = mid - 1; // Search left half
    }
  }

  return -1; // Target not found
}"#
                .to_string(),
            },
            Implementation {
                language: "Python".to_string(),
                code: r#"def binary_search(arr, target):
    left = 0
    right = len(arr) - 1

    while left <= right:
        mid = (left + right) // 2

        if arr[mid] == target:
            return mid  # Found the target
        elif arr[mid] < target:
            left = mid + 1  # Search right half
        else:
            right = mid - 1  # Search left half

    return -1  # Target not found"#
                    .to_string(),
            },
        ],
        steps: vec![
            "Start with the entire sorted array".to_string(),
            "Find the middle element".to_string(),
            "If middle element equals target, return its index".to_string(),
            "If target is less than middle, search the left half".to_string(),
            "If target is greater than middle, search the right half".to_string(),
            "Repeat until target is found or search space is empty".to_string(),
        ],
        use_case: "Searching in sorted arrays, databases, and any scenario requiring efficient \
                   lookups."
            .to_string(),
    }
}
