// Sorting reference entries

use super::types::{AlgorithmEntry, Category, Implementation};

pub fn bubble_sort() -> AlgorithmEntry {
    AlgorithmEntry {
        id: "bubble-sort".to_string(),
        name: "Bubble Sort".to_string(),
        category: Category::Sorting,
        description: "A simple sorting algorithm that repeatedly steps through the list, \
                      compares adjacent elements and swaps them if they are in the wrong order."
            .to_string(),
        time_complexity: "O(n²)".to_string(),
        space_complexity: "O(1)".to_string(),
        implementations: vec![
            Implementation {
                language: "JavaScript".to_string(),
                code: r#"function bubbleSort(arr) {
  const n = arr.length;

  for (let i = 0; i < n - 1; i++) {
    for (let j = 0; j < n - i - 1; j++) {
      if (arr[j] > arr[j + 1]) {
        // Swap elements
        [arr[j], arr[j + 1]] = [arr[j + 1], arr[j]];
      }
    }
  }

  return arr;
}"#
                .to_string(),
            },
            Implementation {
                language: "Python".to_string(),
                code: r#"def bubble_sort(arr):
    n = len(arr)

    for i in range(n - 1):
        for j in range(n - i - 1):
            if arr[j] > arr[j + 1]:
                # Swap elements
                arr[j], arr[j + 1] = arr[j + 1], arr[j]

    return arr"#
                    .to_string(),
            },
            Implementation {
                language: "Java".to_string(),
                code: r#"public static void bubbleSort(int[] arr) {
    int n = arr.length;

    for (int i = 0; i < n - 1; i++) {
        for (int j = 0; j < n - i - 1; j++) {
            if (arr[j] > arr[j + 1]) {
                // Swap elements
                int temp = arr[j];
                arr[j] = arr[j + 1];
                arr[j + 1] = temp;
            }
        }
    }
}"#
                .to_string(),
            },
        ],
        steps: vec![
            "Compare adjacent elements in the array".to_string(),
            "If the first element is greater than the second, swap them".to_string(),
            "Continue through the entire array".to_string(),
            "Repeat the process until no more swaps are needed".to_string(),
            "The largest element 'bubbles' to the end after each pass".to_string(),
        ],
        use_case: "Educational purposes and small datasets where simplicity is preferred over \
                   efficiency."
            .to_string(),
    }
}

pub fn quick_sort() -> AlgorithmEntry {
    AlgorithmEntry {
        id: "quick-sort".to_string(),
        name: "Quick Sort".to_string(),
        category: Category::Sorting,
        description: "An efficient divide-and-conquer sorting algorithm that works by selecting \
                      a 'pivot' element and partitioning the array around it."
            .to_string(),
        time_complexity: "O(n log n) average, O(n²) worst".to_string(),
        space_complexity: "O(log n)".to_string(),
        implementations: vec![
            Implementation {
                language: "JavaScript".to_string(),
                code: r#"function quickSort(arr, low = 0, high = arr.length - 1) {
  if (low < high) {
    // Partition the array and get pivot index
    const pivotIndex = partition(arr, low, high);

    // Recursively sort elements before and after partition
    quickSort(arr, low, pivotIndex - 1);
    quickSort(arr, pivotIndex + 1, high);
  }
  return arr;
}

function partition(arr, low, high) {
  const pivot = arr[high]; // Choose rightmost element as pivot
  let i = low - 1; // Index of smaller element

  for (let j = low; j < high; j++) {
    if (arr[j] < pivot) {
      i++;
      [arr[i], arr[j]] = [arr[j], arr[i]]; // Swap
    }
  }

  [arr[i + 1], arr[high]] = [arr[high], arr[i + 1]]; // Place pivot
  return i + 1;
}"#
                .to_string(),
            },
            Implementation {
                language: "Python".to_string(),
                code: r#"def quick_sort(arr, low=0, high=None):
    if high is None:
        high = len(arr) - 1

    if low < high:
        # Partition the array and get pivot index
        pivot_index = partition(arr, low, high)

        # Recursively sort elements before and after partition
        quick_sort(arr, low, pivot_index - 1)
        quick_sort(arr, pivot_index + 1, high)

    return arr

def partition(arr, low, high):
    pivot = arr[high]  # Choose rightmost element as pivot
    i = low - 1  # Index of smaller element

    for j in range(low, high):
        if arr[j] < pivot:
            i += 1
            arr[i], arr[j] = arr[j], arr[i]  # Swap

    arr[i + 1], arr[high] = arr[high], arr[i + 1]  # Place pivot
    return i + 1"#
                    .to_string(),
            },
        ],
        steps: vec![
            "Choose a pivot element from the array".to_string(),
            "Partition the array so elements smaller than pivot go left, larger go right"
                .to_string(),
            "Recursively apply quicksort to the left and right subarrays".to_string(),
            "Combine the results to get the final sorted array".to_string(),
        ],
        use_case: "General-purpose sorting with good average performance, widely used in practice."
            .to_string(),
    }
}
