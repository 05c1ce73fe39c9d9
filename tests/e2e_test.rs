/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Write a small test repository with a diamond-shaped graph.
fn write_basic_repo(dir: &Path) {
    let repo = r#"{
    "app": ["lib1", "lib2"],
    "lib1": ["lib2"],
    "lib2": []
}
"#;
    fs::write(dir.join("repo.json"), repo).unwrap();
}

/// Write a repository whose two packages depend on each other.
fn write_cyclic_repo(dir: &Path) {
    let repo = r#"{"a": ["b"], "b": ["a"]}"#;
    fs::write(dir.join("repo.json"), repo).unwrap();
}

/// Write a four-package chain for depth limit tests.
fn write_chain_repo(dir: &Path) {
    let repo = r#"{"a": ["b"], "b": ["c"], "c": ["d"], "d": []}"#;
    fs::write(dir.join("repo.json"), repo).unwrap();
}

// ============================================================================
// Exit Code Tests
// ============================================================================

mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - normal run against a test repository
    #[test]
    fn test_exit_code_success() {
        let dir = TempDir::new().unwrap();
        write_basic_repo(dir.path());

        cargo_bin_cmd!("depgraph")
            .current_dir(dir.path())
            .args(["-p", "app", "-m", "test", "-r", "repo.json"])
            .assert()
            .code(0);
    }

    /// Exit code 0: a cycle is a diagnostic, not a failure
    #[test]
    fn test_exit_code_success_with_cycles() {
        let dir = TempDir::new().unwrap();
        write_cyclic_repo(dir.path());

        cargo_bin_cmd!("depgraph")
            .current_dir(dir.path())
            .args(["-p", "a", "-m", "test", "-r", "repo.json"])
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("depgraph").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("depgraph").arg("--version").assert().code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("depgraph")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid mode value
    #[test]
    fn test_exit_code_invalid_mode() {
        cargo_bin_cmd!("depgraph")
            .args(["-m", "cargo"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - no package name given
    #[test]
    fn test_exit_code_missing_package() {
        let dir = TempDir::new().unwrap();

        cargo_bin_cmd!("depgraph")
            .current_dir(dir.path())
            .assert()
            .code(3)
            .stderr(predicate::str::contains("No package name given"));
    }

    /// Exit code 3: Application error - test mode without a repository
    #[test]
    fn test_exit_code_test_mode_without_repository() {
        let dir = TempDir::new().unwrap();

        cargo_bin_cmd!("depgraph")
            .current_dir(dir.path())
            .args(["-p", "app", "-m", "test"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Test mode requires a repository file"));
    }

    /// Exit code 3: Application error - test repository file does not exist
    #[test]
    fn test_exit_code_missing_repository_file() {
        let dir = TempDir::new().unwrap();

        cargo_bin_cmd!("depgraph")
            .current_dir(dir.path())
            .args(["-p", "app", "-m", "test", "-r", "missing.json"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Test repository not found"));
    }

    /// Exit code 3: Application error - malformed configuration file
    #[test]
    fn test_exit_code_broken_config() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.json"), "{ broken").unwrap();

        cargo_bin_cmd!("depgraph")
            .current_dir(dir.path())
            .args(["-p", "app"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to parse config file"));
    }

    /// Exit code 3: Application error - negative max depth
    #[test]
    fn test_exit_code_negative_max_depth() {
        let dir = TempDir::new().unwrap();
        write_basic_repo(dir.path());

        cargo_bin_cmd!("depgraph")
            .current_dir(dir.path())
            .args(["-p", "app", "-m", "test", "-r", "repo.json", "--max-depth", "-1"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid max_depth: -1"));
    }
}

// ============================================================================
// Staged Output Tests
// ============================================================================

mod staged_output_tests {
    use super::*;

    #[test]
    fn test_stage_headers_appear_in_order() {
        let dir = TempDir::new().unwrap();
        write_basic_repo(dir.path());

        let output = cargo_bin_cmd!("depgraph")
            .current_dir(dir.path())
            .args(["-p", "app", "-m", "test", "-r", "repo.json"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        let positions: Vec<usize> = [
            "Stage 1: Configuration parameters",
            "Stage 2: Direct dependencies",
            "Stage 3: Building the dependency graph",
            "Stage 4: Reverse dependencies",
            "Stage 5: Visualization",
        ]
        .iter()
        .map(|header| stdout.find(header).expect(header))
        .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_stage1_lists_effective_settings() {
        let dir = TempDir::new().unwrap();
        write_basic_repo(dir.path());

        let output = cargo_bin_cmd!("depgraph")
            .current_dir(dir.path())
            .args(["-p", "app", "-m", "test", "-r", "repo.json"])
            .output()
            .unwrap();

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("  package_name: app\n"));
        assert!(stdout.contains("  mode: test\n"));
        assert!(stdout.contains("  repository: repo.json\n"));
        assert!(stdout.contains("  output_file: graph\n"));
        assert!(stdout.contains("  max_depth: 0\n"));
        assert!(stdout.contains("  ascii_tree: false\n"));
    }

    #[test]
    fn test_stage2_lists_direct_dependencies() {
        let dir = TempDir::new().unwrap();
        write_basic_repo(dir.path());

        let output = cargo_bin_cmd!("depgraph")
            .current_dir(dir.path())
            .args(["-p", "app", "-m", "test", "-r", "repo.json"])
            .output()
            .unwrap();

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Stage 2: Direct dependencies\n  lib1\n  lib2\n"));
    }

    #[test]
    fn test_stage3_and_stage4_for_acyclic_graph() {
        let dir = TempDir::new().unwrap();
        write_basic_repo(dir.path());

        let output = cargo_bin_cmd!("depgraph")
            .current_dir(dir.path())
            .args(["-p", "app", "-m", "test", "-r", "repo.json"])
            .output()
            .unwrap();

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("No cycles detected.\nGraph built.\n"));
        // Nothing depends on the root
        assert!(stdout.contains("Stage 4: Reverse dependencies\n  (none)\n"));
    }

    #[test]
    fn test_cycle_run_reports_on_both_streams() {
        let dir = TempDir::new().unwrap();
        write_cyclic_repo(dir.path());

        let output = cargo_bin_cmd!("depgraph")
            .current_dir(dir.path())
            .args(["-p", "a", "-m", "test", "-r", "repo.json"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("⚠️  Cycle detected: a"));
        assert!(stdout.contains("Cycles detected in the dependency graph (see warnings above).\n"));
        // Both cycle members depend on the root, including the root itself
        assert!(stdout.contains("Stage 4: Reverse dependencies\n  a\n  b\n"));
    }

    #[test]
    fn test_completion_summary_on_stderr() {
        let dir = TempDir::new().unwrap();
        write_basic_repo(dir.path());

        cargo_bin_cmd!("depgraph")
            .current_dir(dir.path())
            .args(["-p", "app", "-m", "test", "-r", "repo.json"])
            .assert()
            .code(0)
            .stderr(predicate::str::contains("✅ Graph complete: 3 package(s), 3 edge(s)"));
    }

    #[test]
    fn test_mermaid_block_lists_edges() {
        let dir = TempDir::new().unwrap();
        write_basic_repo(dir.path());

        let output = cargo_bin_cmd!("depgraph")
            .current_dir(dir.path())
            .args(["-p", "app", "-m", "test", "-r", "repo.json"])
            .output()
            .unwrap();

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains(
            "Mermaid:\ngraph TD\n    app --> lib1\n    app --> lib2\n    lib1 --> lib2\n"
        ));
    }

    #[test]
    fn test_ascii_tree_flag_prints_tree() {
        let dir = TempDir::new().unwrap();
        write_basic_repo(dir.path());

        let output = cargo_bin_cmd!("depgraph")
            .current_dir(dir.path())
            .args(["-p", "app", "-m", "test", "-r", "repo.json", "--ascii-tree"])
            .output()
            .unwrap();

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains(
            "ASCII dependency tree:\n└── app\n    ├── lib1\n    │   └── lib2\n    └── lib2\n"
        ));
    }

    #[test]
    fn test_tree_is_absent_without_the_flag() {
        let dir = TempDir::new().unwrap();
        write_basic_repo(dir.path());

        let output = cargo_bin_cmd!("depgraph")
            .current_dir(dir.path())
            .args(["-p", "app", "-m", "test", "-r", "repo.json"])
            .output()
            .unwrap();

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(!stdout.contains("ASCII dependency tree:"));
    }

    #[test]
    fn test_filter_excludes_from_graph_but_not_direct_listing() {
        let dir = TempDir::new().unwrap();
        let repo = r#"{"app": ["lib", "libtest"], "lib": [], "libtest": []}"#;
        fs::write(dir.path().join("repo.json"), repo).unwrap();

        let output = cargo_bin_cmd!("depgraph")
            .current_dir(dir.path())
            .args(["-p", "app", "-m", "test", "-r", "repo.json", "--filter", "test"])
            .output()
            .unwrap();

        let stdout = String::from_utf8_lossy(&output.stdout);
        // Stage 2 still shows the raw listing
        assert!(stdout.contains("Stage 2: Direct dependencies\n  lib\n  libtest\n"));
        // The graph and its renderings drop the match
        assert!(stdout.contains("    app --> lib\n"));
        assert!(!stdout.contains("app --> libtest"));
    }

    #[test]
    fn test_max_depth_limits_traversal() {
        let dir = TempDir::new().unwrap();
        write_chain_repo(dir.path());

        let output = cargo_bin_cmd!("depgraph")
            .current_dir(dir.path())
            .args(["-p", "a", "-m", "test", "-r", "repo.json", "--max-depth", "1"])
            .output()
            .unwrap();

        let stdout = String::from_utf8_lossy(&output.stdout);
        // b is recorded at the limit with its outgoing edge, c is not expanded
        assert!(stdout.contains("    a --> b\n"));
        assert!(stdout.contains("    b --> c\n"));
        assert!(!stdout.contains("c --> d"));
    }

    #[test]
    fn test_repeated_runs_produce_identical_output() {
        let dir = TempDir::new().unwrap();
        write_basic_repo(dir.path());

        let run = || {
            cargo_bin_cmd!("depgraph")
                .current_dir(dir.path())
                .args(["-p", "app", "-m", "test", "-r", "repo.json"])
                .output()
                .unwrap()
        };

        let first = run();
        let second = run();

        assert!(first.status.success());
        assert_eq!(first.stdout, second.stdout);
    }
}

// ============================================================================
// Output File Tests
// ============================================================================

mod output_file_tests {
    use super::*;

    #[test]
    fn test_default_output_files_are_written() {
        let dir = TempDir::new().unwrap();
        write_basic_repo(dir.path());

        let output = cargo_bin_cmd!("depgraph")
            .current_dir(dir.path())
            .args(["-p", "app", "-m", "test", "-r", "repo.json"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Graph saved to SVG: graph.svg\n"));
        assert!(stdout.contains("Graph saved to PlantUML: graph.puml\n"));

        let svg = fs::read_to_string(dir.path().join("graph.svg")).unwrap();
        assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(">app</text>"));

        let puml = fs::read_to_string(dir.path().join("graph.puml")).unwrap();
        assert!(puml.starts_with("@startuml"));
        assert!(puml.ends_with("@enduml"));
        assert!(puml.contains("\"app\" --> \"lib1\""));
    }

    #[test]
    fn test_custom_output_base_name() {
        let dir = TempDir::new().unwrap();
        write_basic_repo(dir.path());

        let output = cargo_bin_cmd!("depgraph")
            .current_dir(dir.path())
            .args(["-p", "app", "-m", "test", "-r", "repo.json", "-o", "deps"])
            .output()
            .unwrap();

        assert!(output.status.success());
        assert!(dir.path().join("deps.svg").exists());
        assert!(dir.path().join("deps.puml").exists());
    }

    #[test]
    fn test_output_with_svg_extension_keeps_its_name() {
        let dir = TempDir::new().unwrap();
        write_basic_repo(dir.path());

        let output = cargo_bin_cmd!("depgraph")
            .current_dir(dir.path())
            .args(["-p", "app", "-m", "test", "-r", "repo.json", "-o", "picture.svg"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Graph saved to SVG: picture.svg\n"));
        assert!(stdout.contains("Graph saved to PlantUML: picture.puml\n"));
        assert!(dir.path().join("picture.svg").exists());
        assert!(dir.path().join("picture.puml").exists());
    }

    #[test]
    fn test_write_failure_is_not_fatal() {
        let dir = TempDir::new().unwrap();
        write_basic_repo(dir.path());

        // The output directory does not exist, so both writes fail
        let output = cargo_bin_cmd!("depgraph")
            .current_dir(dir.path())
            .args(["-p", "app", "-m", "test", "-r", "repo.json", "-o", "missing_dir/out"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("⚠️  Warning: Failed to write SVG"));
        assert!(stderr.contains("⚠️  Warning: Failed to write PlantUML"));
        assert!(!stdout.contains("Graph saved to"));
    }
}
