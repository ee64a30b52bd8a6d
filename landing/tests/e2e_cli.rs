//! End-to-end tests for the `rt-landing` binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn rt_landing() -> Command {
    cargo_bin_cmd!("rt-landing")
}

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        rt_landing()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("build"))
            .stdout(predicate::str::contains("check"));
    }

    #[test]
    fn shows_version() {
        rt_landing()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

mod build {
    use super::*;

    #[test]
    fn writes_landing_and_success_pages() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("dist");

        rt_landing()
            .current_dir(temp.path())
            .arg("build")
            .arg("--index")
            .arg(fixtures_path().join("skills-index.json"))
            .arg("--out")
            .arg(&out)
            .assert()
            .success()
            .stdout(predicate::str::contains("index.html"));

        let landing = std::fs::read_to_string(out.join("index.html")).expect("landing page");
        assert!(landing.starts_with("<!DOCTYPE html>"));
        assert!(landing.contains("187 skills • 38 plugins • 18 MCPs"));
        assert!(landing.contains("187 skills across 13 categories"));
        assert!(out.join("success/index.html").is_file());
    }

    #[test]
    fn invalid_index_fails_and_writes_nothing() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("dist");

        rt_landing()
            .current_dir(temp.path())
            .arg("build")
            .arg("--index")
            .arg(fixtures_path().join("negative-skills.json"))
            .arg("--out")
            .arg(&out)
            .assert()
            .failure()
            .stderr(predicate::str::contains("totalSkills"));

        assert!(!out.exists());
    }

    #[test]
    fn missing_field_is_named() {
        let temp = TempDir::new().expect("temp dir");

        rt_landing()
            .current_dir(temp.path())
            .arg("build")
            .arg("--index")
            .arg(fixtures_path().join("missing-mcps.json"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("totalMCPs"));

        assert!(!temp.path().join("dist").exists());
    }

    #[test]
    fn missing_index_file_fails() {
        let temp = TempDir::new().expect("temp dir");

        rt_landing()
            .current_dir(temp.path())
            .args(["build", "--index", "nope.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("nope.json"));
    }

    #[test]
    fn explicit_config_overrides_links_and_drops_missing_video() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("dist");

        rt_landing()
            .current_dir(temp.path())
            .arg("build")
            .arg("--index")
            .arg(fixtures_path().join("skills-index.json"))
            .arg("--config")
            .arg(fixtures_path().join("site.toml"))
            .arg("--out")
            .arg(&out)
            .assert()
            .success()
            .stdout(predicate::str::contains("video section omitted"));

        let landing = std::fs::read_to_string(out.join("index.html")).expect("landing page");
        assert!(landing.contains("https://pay.example.com/pro"));
        assert!(landing.contains("https://risingtides.example"));
        assert!(!landing.contains("<video"));
    }

    #[test]
    fn unparsable_explicit_config_fails() {
        let temp = TempDir::new().expect("temp dir");
        let config = temp.path().join("broken.toml");
        std::fs::write(&config, "[checkout\npro = 1").expect("write config");

        rt_landing()
            .current_dir(temp.path())
            .arg("build")
            .arg("--index")
            .arg(fixtures_path().join("skills-index.json"))
            .arg("--config")
            .arg(&config)
            .assert()
            .failure()
            .stderr(predicate::str::contains("broken.toml"));
    }
}

mod check {
    use super::*;

    #[test]
    fn prints_counts() {
        rt_landing()
            .arg("check")
            .arg("--index")
            .arg(fixtures_path().join("skills-index.json"))
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "187 skills, 38 plugins, 9 CLIs, 18 MCPs, 13 categories",
            ));
    }

    #[test]
    fn prints_counts_as_json() {
        let output = rt_landing()
            .arg("check")
            .arg("--index")
            .arg(fixtures_path().join("skills-index.json"))
            .arg("--json")
            .output()
            .expect("run rt-landing");
        assert!(output.status.success());

        let summary: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("json output");
        assert_eq!(summary["skills"], 187);
        assert_eq!(summary["plugins"], 38);
        assert_eq!(summary["clis"], 9);
        assert_eq!(summary["mcps"], 18);
        assert_eq!(summary["categories"], 13);
    }

    #[test]
    fn rejects_negative_count() {
        rt_landing()
            .arg("check")
            .arg("--index")
            .arg(fixtures_path().join("negative-skills.json"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("non-negative"));
    }
}
