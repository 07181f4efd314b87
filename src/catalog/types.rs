// Reference catalog types
// Study material for browsing, independent of the visualizer's algorithms

use serde::{Deserialize, Serialize};

/// Broad grouping for browsing the reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Sorting,
    Searching,
    Graph,
    DynamicProgramming,
    StringManipulation,
}

impl Category {
    /// Human-readable name for UI display
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Sorting => "Sorting",
            Category::Searching => "Searching",
            Category::Graph => "Graph",
            Category::DynamicProgramming => "Dynamic Programming",
            Category::StringManipulation => "String Manipulation",
        }
    }
}

/// One reference implementation in a specific language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Implementation {
    pub language: String,
    pub code: String,
}

/// Complete reference entry for one algorithm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmEntry {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub description: String,
    pub time_complexity: String,
    pub space_complexity: String,
    pub implementations: Vec<Implementation>,
    pub steps: Vec<String>,
    pub use_case: String,
}

/// Compact entry for the browsing grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmSummary {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub description: String,
    pub time_complexity: String,
}

impl AlgorithmEntry {
    /// Compact form for the browsing grid
    pub fn summary(&self) -> AlgorithmSummary {
        AlgorithmSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            category: self.category,
            description: self.description.clone(),
            time_complexity: self.time_complexity.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_projection() {
        let entry = AlgorithmEntry {
            id: "test-sort".to_string(),
            name: "Test Sort".to_string(),
            category: Category::Sorting,
            description: "Sorts things".to_string(),
            time_complexity: "O(n)".to_string(),
            space_complexity: "O(1)".to_string(),
            implementations: vec![],
            steps: vec![],
            use_case: "Testing".to_string(),
        };

        let summary = entry.summary();
        assert_eq!(summary.id, "test-sort");
        assert_eq!(summary.category, Category::Sorting);
        assert_eq!(summary.time_complexity, "O(n)");
    }

    #[test]
    fn test_category_display_names() {
        assert_eq!(Category::Sorting.display_name(), "Sorting");
        assert_eq!(
            Category::DynamicProgramming.display_name(),
            "Dynamic Programming"
        );
        assert_eq!(
            Category::StringManipulation.display_name(),
            "String Manipulation"
        );
    }
}
