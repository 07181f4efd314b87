// Dynamic programming reference entries

use super::types::{AlgorithmEntry, Category, Implementation};

pub fn fibonacci_dp() -> AlgorithmEntry {
    AlgorithmEntry {
        id: "fibonacci-dp".to_string(),
        name: "Fibonacci (Dynamic Programming)".to_string(),
        category: Category::DynamicProgramming,
        description: "Efficiently calculates Fibonacci numbers using dynamic programming to \
                      avoid redundant calculations."
            .to_string(),
        time_complexity: "O(n)".to_string(),
        space_complexity: "O(n) or O(1) optimized".to_string(),
        implementations: vec![Implementation {
            language: "JavaScript".to_string(),
            code: r#"// Bottom-up approach with memoization
function fibonacci(n) {
  if (n <= 1) return n;

  const dp = new Array(n + 1);
  dp[0] = 0;
  dp[1] = 1;

  for (let i = 2; i <= n; i++) {
    dp[i] = dp[i - 1] + dp[i - 2];
  }

  return dp[n];
}

// Space-optimized version
function fibonacciOptimized(n) {
  if (n <= 1) return n;

  let prev2 = 0, prev1 = 1;

  for (let i = 2; i <= n; i++) {
    const current = prev1 + prev2;
    prev2 = prev1;
    prev1 = current;
  }

  return prev1;
}"#
            .to_string(),
        }],
        steps: vec![
            "Handle base cases: F(0) = 0, F(1) = 1".to_string(),
            "Create array to store previously calculated values".to_string(),
            "Build up solution from bottom (F(2)) to top (F(n))".to_string(),
            "Each value is sum of two previous values".to_string(),
            "Return the final result F(n)".to_string(),
        ],
        use_case: "Mathematical calculations, algorithm optimization examples, and teaching \
                   dynamic programming concepts."
            .to_string(),
    }
}
