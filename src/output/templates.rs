//! Starter code attached to every exported problem

use serde::{Deserialize, Serialize};

const PYTHON: &str = r#"def solve():
    # Read input
    # Process data
    # Output result
    pass

if __name__ == "__main__":
    solve()"#;

const CPP: &str = r#"#include <iostream>
#include <vector>
#include <string>
using namespace std;

int main() {
    // Read input
    // Process data
    // Output result
    return 0;
}"#;

const JAVA: &str = r#"import java.util.*;
import java.io.*;

public class Solution {
    public static void main(String[] args) {
        Scanner sc = new Scanner(System.in);
        // Read input
        // Process data
        // Output result
        sc.close();
    }
}"#;

const JAVASCRIPT: &str = r#"function solve() {
    // Read input
    // Process data
    // Output result
}

solve();"#;

/// Per-language starter code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeTemplates {
    pub python: String,
    pub cpp: String,
    pub java: String,
    pub javascript: String,
}

impl Default for CodeTemplates {
    fn default() -> Self {
        Self {
            python: PYTHON.to_string(),
            cpp: CPP.to_string(),
            java: JAVA.to_string(),
            javascript: JAVASCRIPT.to_string(),
        }
    }
}
