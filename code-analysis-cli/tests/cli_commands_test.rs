use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Command running in an isolated home and working directory
fn code_analysis(temp_dir: &TempDir) -> Result<Command> {
    let mut cmd = Command::cargo_bin("code-analysis")?;
    cmd.env("HOME", temp_dir.path())
        .env_remove("CODE_ANALYSIS_EXCLUDED_DIRECTORIES")
        .current_dir(temp_dir.path());
    Ok(cmd)
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let temp_dir = TempDir::new()?;
    code_analysis(&temp_dir)?
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
    Ok(())
}

#[test]
fn test_list_json_shows_minimal_descriptions() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = code_analysis(&temp_dir)?
        .args(["list", "--format", "json"])
        .assert()
        .success();

    let tools: serde_json::Value = serde_json::from_slice(&output.get_output().stdout)?;
    let tools = tools.as_array().expect("list output should be an array");
    assert_eq!(tools.len(), 6);
    assert_eq!(tools[0]["name"], "review_comments");
    assert_eq!(tools[0]["argument"], "filepath");
    assert_eq!(tools[5]["name"], "draw_gridmat");
    assert_eq!(tools[5]["argument"], "directory");
    assert_eq!(
        tools[5]["resource"],
        "ctroy://tool-descriptions/draw_gridmat"
    );
    Ok(())
}

#[test]
fn test_list_table() -> Result<()> {
    let temp_dir = TempDir::new()?;
    code_analysis(&temp_dir)?
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("review_test_coverage"));
    Ok(())
}

#[test]
fn test_describe_known_and_unknown_tools() -> Result<()> {
    let temp_dir = TempDir::new()?;
    code_analysis(&temp_dir)?
        .args(["describe", "review_comments"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Superfluous comments"));

    code_analysis(&temp_dir)?
        .args(["describe", "review_vibes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown tool: review_vibes"));
    Ok(())
}

#[test]
fn test_run_review_tool_on_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("sample.py");
    fs::write(&path, "def add(a, b):\n    return a + b\n")?;

    code_analysis(&temp_dir)?
        .args(["run", "review_names"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("return a + b"))
        .stdout(predicate::str::contains(format!("File: {}", path.display())));
    Ok(())
}

#[test]
fn test_run_gridmat_on_directory() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let project = temp_dir.path().join("project");
    fs::create_dir_all(project.join("pkg"))?;
    fs::create_dir_all(project.join("node_modules/dep"))?;
    fs::write(project.join("pkg/main.py"), "")?;
    fs::write(project.join(".env"), "")?;

    code_analysis(&temp_dir)?
        .args(["run", "draw_gridmat"])
        .arg(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains("pkg/"))
        .stdout(predicate::str::contains("main.py"))
        .stdout(predicate::str::contains("node_modules").not())
        .stdout(predicate::str::contains(".env").not());
    Ok(())
}

#[test]
fn test_run_missing_file_fails_with_general_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    code_analysis(&temp_dir)?
        .args(["run", "review_comments", "does_not_exist.py"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does_not_exist.py"));
    Ok(())
}

#[test]
fn test_run_unknown_tool_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;
    code_analysis(&temp_dir)?
        .args(["run", "review_everything", "a.py"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown tool: review_everything"));
    Ok(())
}

#[test]
fn test_prompt_renders_without_reading_files() -> Result<()> {
    let temp_dir = TempDir::new()?;
    code_analysis(&temp_dir)?
        .args(["prompt", "prompt_review_names", "/nowhere/foo.py"])
        .assert()
        .success()
        .stdout(predicate::str::contains("`/nowhere/foo.py`"));

    code_analysis(&temp_dir)?
        .args(["prompt", "prompt_nothing", "foo.py"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Prompt not found"));
    Ok(())
}

#[test]
fn test_completion_scripts() -> Result<()> {
    let temp_dir = TempDir::new()?;
    for shell in ["bash", "zsh", "fish", "powershell"] {
        code_analysis(&temp_dir)?
            .args(["completion", shell])
            .assert()
            .success()
            .stdout(predicate::str::contains("code-analysis"));
    }
    Ok(())
}

#[test]
fn test_invalid_subcommand_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;
    code_analysis(&temp_dir)?
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("frobnicate"));
    Ok(())
}
