/// End-to-end tests for the CLI against a local mock registry
use assert_cmd::cargo::cargo_bin_cmd;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Registry serving `app -> {left-pad, missing-pkg}` and `left-pad`
fn start_registry() -> MockServer {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/app");
        then.status(200).json_body(json!({
            "name": "app",
            "dist-tags": { "latest": "1.0.0" },
            "versions": {
                "1.0.0": {
                    "dependencies": { "left-pad": "^1.3.0", "missing-pkg": "9.9.9" }
                }
            }
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/left-pad");
        then.status(200).json_body(json!({
            "name": "left-pad",
            "dist-tags": { "latest": "1.3.0" },
            "versions": { "1.3.0": { "dependencies": {} } }
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/missing-pkg");
        then.status(404).json_body(json!({ "error": "Not found" }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/ghost");
        then.status(404).json_body(json!({ "error": "Not found" }));
    });
    server
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("deptree").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("deptree")
            .arg("--version")
            .assert()
            .code(0)
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    /// Exit code 2: Missing subcommand
    #[test]
    fn test_exit_code_missing_subcommand() {
        cargo_bin_cmd!("deptree").assert().code(2);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("deptree")
            .args(["tree", "react", "--invalid-option"])
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("deptree")
            .args(["tree", "react", "-f", "xml"])
            .assert()
            .code(2);
    }

    /// Exit code 2: Depth must be a non-negative integer
    #[test]
    fn test_exit_code_negative_depth() {
        cargo_bin_cmd!("deptree")
            .args(["tree", "react", "--depth", "-1"])
            .assert()
            .code(2);
    }

    /// Exit code 1: Root package does not exist
    #[test]
    fn test_exit_code_root_not_found() {
        let server = start_registry();
        cargo_bin_cmd!("deptree")
            .args(["--quiet", "tree", "ghost", "--registry", &server.base_url()])
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Package not found: ghost@latest"));
    }

    /// Exit code 3: Registry failure below the root
    #[test]
    fn test_exit_code_registry_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/app");
            then.status(200).json_body(json!({
                "dist-tags": { "latest": "1.0.0" },
                "versions": { "1.0.0": { "dependencies": { "broken": "1.0.0" } } }
            }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/broken");
            then.status(500);
        });

        cargo_bin_cmd!("deptree")
            .args(["--quiet", "tree", "app", "--registry", &server.base_url()])
            .assert()
            .code(3)
            .stderr(predicate::str::contains(
                "Failed to build dependency tree for app@latest",
            ))
            .stderr(predicate::str::contains("Caused by"))
            .stderr(predicate::str::contains("status code 500"));
    }

    /// Exit code 3: Registry unreachable
    #[test]
    fn test_exit_code_unreachable_registry() {
        cargo_bin_cmd!("deptree")
            .args([
                "--quiet",
                "tree",
                "react",
                "--registry",
                "http://127.0.0.1:9",
                "--timeout",
                "1",
            ])
            .assert()
            .code(3);
    }

    /// Exit code 3: Invalid timeout on the command line
    #[test]
    fn test_exit_code_zero_timeout() {
        cargo_bin_cmd!("deptree")
            .args(["tree", "react", "--timeout", "0"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("timeout_secs must be greater than 0"));
    }

    /// Exit code 3: outdated without a package.json
    #[test]
    fn test_exit_code_outdated_missing_manifest() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("deptree")
            .args(["outdated", "-p"])
            .arg(dir.path())
            .assert()
            .code(3)
            .stderr(predicate::str::contains("package.json not found"));
    }

    /// Exit code 3: outdated with a path that is not a directory
    #[test]
    fn test_exit_code_outdated_file_not_directory() {
        cargo_bin_cmd!("deptree")
            .args(["outdated", "-p", "Cargo.toml"])
            .assert()
            .code(3);
    }
}

mod tree_command_tests {
    use super::*;

    #[test]
    fn test_tree_json_output_with_stub() {
        let server = start_registry();
        let output = cargo_bin_cmd!("deptree")
            .args(["--quiet", "tree", "app", "--registry", &server.base_url()])
            .output()
            .unwrap();

        assert!(output.status.success());
        let tree: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(tree["key"], "app@1.0.0");
        assert_eq!(tree["type"], "dependency");
        assert_eq!(tree["expanded"], true);
        assert_eq!(tree["children"][0]["key"], "left-pad@1.3.0");
        assert!(tree["children"][0].get("children").is_none());
        assert_eq!(tree["children"][1]["key"], "missing-pkg@9.9.9");
        assert_eq!(tree["children"][1]["data"]["version"], "Not Found");
    }

    #[test]
    fn test_tree_depth_zero() {
        let server = start_registry();
        let output = cargo_bin_cmd!("deptree")
            .args(["--quiet", "tree", "app", "-d", "0", "--registry", &server.base_url()])
            .output()
            .unwrap();

        assert!(output.status.success());
        let tree: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert!(tree.get("children").is_none());
    }

    #[test]
    fn test_tree_text_output() {
        let server = start_registry();
        cargo_bin_cmd!("deptree")
            .args(["--quiet", "tree", "app", "-f", "text", "--registry", &server.base_url()])
            .assert()
            .code(0)
            .stdout(predicate::str::starts_with("app@1.0.0"))
            .stdout(predicate::str::contains("├── left-pad@1.3.0"))
            .stdout(predicate::str::contains("└── missing-pkg@9.9.9 (not found)"));
    }

    #[test]
    fn test_tree_output_to_file() {
        let server = start_registry();
        let dir = TempDir::new().unwrap();
        let output_path = dir.path().join("tree.json");

        cargo_bin_cmd!("deptree")
            .args(["tree", "left-pad", "--registry", &server.base_url(), "-o"])
            .arg(&output_path)
            .assert()
            .code(0)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Output complete"));

        let content = fs::read_to_string(&output_path).unwrap();
        let tree: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(tree["key"], "left-pad@1.3.0");
    }

    #[test]
    fn test_tree_progress_goes_to_stderr() {
        let server = start_registry();
        cargo_bin_cmd!("deptree")
            .args(["tree", "app", "--registry", &server.base_url()])
            .assert()
            .code(0)
            .stderr(predicate::str::contains("Resolving app@latest"))
            .stderr(predicate::str::contains("could not be found"));
    }

    #[test]
    fn test_tree_tolerates_legacy_manifest_in_old_version() {
        let server = start_registry();
        server.mock(|when, then| {
            when.method(GET).path("/legacy");
            then.status(200).json_body(json!({
                "dist-tags": null,
                "versions": {
                    "0.0.1": { "dependencies": ["foo"] },
                    "2.0.0": { "dependencies": { "left-pad": "1.3.0" } }
                }
            }));
        });

        let output = cargo_bin_cmd!("deptree")
            .args(["--quiet", "tree", "legacy", "-V", "2.0.0", "--registry", &server.base_url()])
            .output()
            .unwrap();

        assert!(output.status.success());
        let tree: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(tree["key"], "legacy@2.0.0");
        assert_eq!(tree["children"][0]["key"], "left-pad@1.3.0");
    }

    #[test]
    fn test_tree_with_concurrency_limit() {
        let server = start_registry();
        cargo_bin_cmd!("deptree")
            .args([
                "--quiet",
                "tree",
                "app",
                "--max-concurrency",
                "1",
                "--registry",
                &server.base_url(),
            ])
            .assert()
            .code(0)
            .stdout(predicate::str::contains("missing-pkg@9.9.9"));
    }
}

mod outdated_command_tests {
    use super::*;

    fn start_latest_registry() -> MockServer {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/left-pad");
            then.status(200).json_body(json!({
                "dist-tags": { "latest": "1.3.0" },
                "versions": { "1.3.0": {} }
            }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/express");
            then.status(200).json_body(json!({
                "dist-tags": { "latest": "4.21.2" },
                "versions": { "4.21.2": {} }
            }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/typescript");
            then.status(500);
        });
        server
    }

    #[test]
    fn test_outdated_json_output() {
        let server = start_latest_registry();
        let output = cargo_bin_cmd!("deptree")
            .args(["--quiet", "outdated", "--registry", &server.base_url(), "-p"])
            .arg(fixtures_path().join("sample-project"))
            .output()
            .unwrap();

        assert!(output.status.success());
        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(
            report,
            json!({
                "outdatedDependencies": [
                    {
                        "name": "left-pad",
                        "currentVersion": "1.3.0",
                        "latestVersion": "1.3.0",
                        "needsUpdate": false
                    },
                    {
                        "name": "express",
                        "currentVersion": "^4.18.0",
                        "latestVersion": "4.21.2",
                        "needsUpdate": true
                    }
                ]
            })
        );
    }

    #[test]
    fn test_outdated_dev_lookup_failure_is_reported_not_fatal() {
        let server = start_latest_registry();
        let output = cargo_bin_cmd!("deptree")
            .args(["--quiet", "outdated", "--dev", "--registry", &server.base_url(), "-p"])
            .arg(fixtures_path().join("sample-project"))
            .output()
            .unwrap();

        assert!(output.status.success());
        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let entry = &report["outdatedDependencies"][0];
        assert_eq!(entry["name"], "typescript");
        assert_eq!(entry["latestVersion"], "Error");
        assert_eq!(entry["needsUpdate"], false);
    }

    #[test]
    fn test_outdated_text_output() {
        let server = start_latest_registry();
        cargo_bin_cmd!("deptree")
            .args(["--quiet", "outdated", "-f", "text", "--registry", &server.base_url(), "-p"])
            .arg(fixtures_path().join("sample-project"))
            .assert()
            .code(0)
            .stdout(predicate::str::contains("Package"))
            .stdout(predicate::str::contains("express"))
            .stdout(predicate::str::contains("yes"));
    }

    #[test]
    fn test_outdated_empty_dependencies() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{ "name": "empty", "dependencies": {} }"#,
        )
        .unwrap();

        cargo_bin_cmd!("deptree")
            .args(["outdated", "-p"])
            .arg(dir.path())
            .assert()
            .code(3)
            .stderr(predicate::str::contains("No dependencies provided"));
    }
}
