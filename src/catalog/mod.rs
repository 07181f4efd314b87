// Reference Catalog Module
// Static algorithm study material for the browsing UI

pub mod types;

mod dynamic_programming;
mod graph;
mod searching;
mod sorting;

pub use types::{AlgorithmEntry, AlgorithmSummary, Category, Implementation};

/// Get a reference entry by id
pub fn get_algorithm(id: &str) -> Option<AlgorithmEntry> {
    match id {
        "bubble-sort" => Some(sorting::bubble_sort()),
        "quick-sort" => Some(sorting::quick_sort()),
        "binary-search" => Some(searching::binary_search()),
        "dijkstra" => Some(graph::dijkstra()),
        "fibonacci-dp" => Some(dynamic_programming::fibonacci_dp()),
        _ => None,
    }
}

/// List all reference entries as browsing summaries
pub fn list_algorithms() -> Vec<AlgorithmSummary> {
    vec![
        sorting::bubble_sort().summary(),
        sorting::quick_sort().summary(),
        searching::binary_search().summary(),
        graph::dijkstra().summary(),
        dynamic_programming::fibonacci_dp().summary(),
    ]
}

/// Get all reference entry ids
pub fn list_algorithm_names() -> Vec<String> {
    vec![
        "bubble-sort".to_string(),
        "quick-sort".to_string(),
        "binary-search".to_string(),
        "dijkstra".to_string(),
        "fibonacci-dp".to_string(),
    ]
}

/// The browsing categories, in display order
pub fn list_categories() -> Vec<Category> {
    vec![
        Category::Sorting,
        Category::Searching,
        Category::Graph,
        Category::DynamicProgramming,
        Category::StringManipulation,
    ]
}
