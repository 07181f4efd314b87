// Graph reference entries

use super::types::{AlgorithmEntry, Category, Implementation};

pub fn dijkstra() -> AlgorithmEntry {
    AlgorithmEntry {
        id: "dijkstra".to_string(),
        name: "Dijkstra's Algorithm".to_string(),
        category: Category::Graph,
        description: "Finds the shortest path between nodes in a weighted graph with \
                      non-negative edge weights."
            .to_string(),
        time_complexity: "O((V + E) log V)".to_string(),
        space_complexity: "O(V)".to_string(),
        implementations: vec![Implementation {
            language: "JavaScript".to_string(),
            code: r#"function dijkstra(graph, start) {
  const distances = {};
  const previous = {};
  const unvisited = new Set();

  // Initialize distances
  for (let vertex in graph) {
    distances[vertex] = vertex === start ? 0 : Infinity;
    previous[vertex] = null;
    unvisited.add(vertex);
  }

  while (unvisited.size > 0) {
    // Find unvisited vertex with minimum distance
    let current = null;
    for (let vertex of unvisited) {
      if (!current || distances[vertex] < distances[current]) {
        current = vertex;
      }
    }

    unvisited.delete(current);

    // Update distances to neighbors
    for (let neighbor in graph[current]) {
      const distance = distances[current] + graph[current][neighbor];
      if (distance < distances[neighbor]) {
        distances[neighbor] = distance;
        previous[neighbor] = current;
      }
    }
  }

  return { distances, previous };
}"#
            .to_string(),
        }],
        steps: vec![
            "Initialize distances to all vertices as infinite, except start vertex (0)"
                .to_string(),
            "Mark all vertices as unvisited".to_string(),
            "Select unvisited vertex with minimum distance as current".to_string(),
            "Update distances to all neighbors of current vertex".to_string(),
            "Mark current vertex as visited".to_string(),
            "Repeat until all vertices are visited or shortest path is found".to_string(),
        ],
        use_case: "GPS navigation, network routing protocols, and finding optimal paths in \
                   weighted graphs."
            .to_string(),
    }
}
