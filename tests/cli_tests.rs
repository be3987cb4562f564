mod common;

use std::process::Command;

use anyhow::Result;
use assert_cmd::prelude::*;
use common::{create_scenario_tree, read_file, write_file};
use predicates::prelude::*;
use tempfile::tempdir;

fn addnotice() -> Result<Command> {
  let mut cmd = Command::cargo_bin("addnotice")?;
  cmd.env_remove("ADDNOTICE_ROOT").env_remove("ADDNOTICE_SUFFIX").env_remove("RUST_LOG");
  Ok(cmd)
}

#[test]
fn test_end_to_end_with_relative_root() -> Result<()> {
  let temp_dir = tempdir()?;
  let base = temp_dir.path();
  create_scenario_tree(base)?;

  addnotice()?
    .args(["--suffix", ".cs"])
    .args(["--no-default-excludes", "--exclude", "Assets/Fungus/Thirdparty/CSVParser/"])
    .args(["--notice", "N\n"])
    .arg("Assets")
    .current_dir(base)
    .assert()
    .success();

  assert_eq!(read_file(base, "Assets/A.cs")?, "N\nx");
  assert_eq!(read_file(base, "Assets/Fungus/Thirdparty/CSVParser/B.cs")?, "y");
  assert_eq!(read_file(base, "Assets/C.txt")?, "z");
  Ok(())
}

#[test]
fn test_reference_defaults_from_project_root() -> Result<()> {
  let temp_dir = tempdir()?;
  let base = temp_dir.path();
  write_file(base, "Assets/Fungus/Scripts/Flowchart.cs", "class Flowchart {}\n")?;
  write_file(base, "Assets/Fungus/Thirdparty/Usfxr/SfxrSynth.cs", "class SfxrSynth {}\n")?;
  write_file(base, "Assets/Fungus/Thirdparty/Reorderable List Field/List.cs", "class List {}\n")?;

  // No arguments at all: root Assets, suffix .cs, built-in notice and exclusions
  addnotice()?.arg("--no-echo").current_dir(base).assert().success();

  let flowchart = read_file(base, "Assets/Fungus/Scripts/Flowchart.cs")?;
  assert!(flowchart.starts_with("// This code is part of the Fungus library"));
  assert!(flowchart.ends_with("\n\nclass Flowchart {}\n"));
  assert_eq!(
    read_file(base, "Assets/Fungus/Thirdparty/Usfxr/SfxrSynth.cs")?,
    "class SfxrSynth {}\n"
  );
  assert_eq!(
    read_file(base, "Assets/Fungus/Thirdparty/Reorderable List Field/List.cs")?,
    "class List {}\n"
  );
  Ok(())
}

#[test]
fn test_new_contents_echoed_to_stdout() -> Result<()> {
  let temp_dir = tempdir()?;
  let base = temp_dir.path();
  write_file(base, "src/lib.rs", "pub fn answer() -> u32 { 42 }\n")?;

  addnotice()?
    .args(["--suffix", ".rs", "--notice", "// NOTICE\n", "--colors=never", "src"])
    .current_dir(base)
    .assert()
    .success()
    .stdout(predicate::str::contains("// NOTICE\npub fn answer() -> u32 { 42 }"))
    .stderr(predicate::str::contains("Added notice to 1 file"));
  Ok(())
}

#[test]
fn test_no_echo_keeps_stdout_empty() -> Result<()> {
  let temp_dir = tempdir()?;
  let base = temp_dir.path();
  write_file(base, "src/lib.rs", "fn x() {}\n")?;

  addnotice()?
    .args(["--suffix", ".rs", "--notice", "// N\n", "--no-echo", "src"])
    .current_dir(base)
    .assert()
    .success()
    .stdout(predicate::str::is_empty());

  assert_eq!(read_file(base, "src/lib.rs")?, "// N\nfn x() {}\n");
  Ok(())
}

#[test]
fn test_quiet_prints_nothing_but_still_rewrites() -> Result<()> {
  let temp_dir = tempdir()?;
  let base = temp_dir.path();
  write_file(base, "Assets/A.cs", "x")?;

  addnotice()?
    .args(["-q", "--notice", "N\n"])
    .current_dir(base)
    .assert()
    .success()
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::is_empty());

  assert_eq!(read_file(base, "Assets/A.cs")?, "N\nx");
  Ok(())
}

#[test]
fn test_missing_root_fails_with_path_on_stderr() -> Result<()> {
  let temp_dir = tempdir()?;

  addnotice()?
    .arg("does-not-exist")
    .current_dir(temp_dir.path())
    .assert()
    .failure()
    .stderr(predicate::str::contains("Root directory not found: does-not-exist"));
  Ok(())
}

#[test]
fn test_root_from_environment() -> Result<()> {
  let temp_dir = tempdir()?;
  let base = temp_dir.path();
  write_file(base, "Game/Player.cs", "class Player {}")?;

  addnotice()?
    .env("ADDNOTICE_ROOT", "Game")
    .args(["--notice", "N\n", "--no-echo"])
    .current_dir(base)
    .assert()
    .success();

  assert_eq!(read_file(base, "Game/Player.cs")?, "N\nclass Player {}");
  Ok(())
}

#[test]
fn test_decoding_error_exits_non_zero() -> Result<()> {
  let temp_dir = tempdir()?;
  let base = temp_dir.path();
  write_file(base, "Assets/Blob.cs", [0xc3u8, 0x28])?;

  addnotice()?
    .current_dir(base)
    .assert()
    .failure()
    .stderr(predicate::str::contains("Blob.cs").and(predicate::str::contains("UTF-8")));
  Ok(())
}

#[test]
fn test_notice_file_is_used_verbatim() -> Result<()> {
  let temp_dir = tempdir()?;
  let base = temp_dir.path();
  write_file(base, "NOTICE.txt", "/*\n * Copyright Example\n */\n")?;
  write_file(base, "Assets/A.cs", "class A {}")?;

  addnotice()?
    .args(["--notice-file", "NOTICE.txt", "--no-echo"])
    .current_dir(base)
    .assert()
    .success();

  assert_eq!(read_file(base, "Assets/A.cs")?, "/*\n * Copyright Example\n */\nclass A {}");
  Ok(())
}

#[test]
fn test_missing_notice_file_fails_before_touching_files() -> Result<()> {
  let temp_dir = tempdir()?;
  let base = temp_dir.path();
  write_file(base, "Assets/A.cs", "class A {}")?;

  addnotice()?
    .args(["--notice-file", "missing.txt"])
    .current_dir(base)
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to load notice from missing.txt"));

  assert_eq!(read_file(base, "Assets/A.cs")?, "class A {}");
  Ok(())
}

#[test]
fn test_skip_noticed_makes_reruns_stable() -> Result<()> {
  let temp_dir = tempdir()?;
  let base = temp_dir.path();
  write_file(base, "Assets/A.cs", "x")?;

  for _ in 0..2 {
    addnotice()?
      .args(["--notice", "N\n", "--skip-noticed", "--no-echo"])
      .current_dir(base)
      .assert()
      .success();
  }

  assert_eq!(read_file(base, "Assets/A.cs")?, "N\nx");
  Ok(())
}

#[test]
fn test_json_report_written() -> Result<()> {
  let temp_dir = tempdir()?;
  let base = temp_dir.path();
  create_scenario_tree(base)?;

  addnotice()?
    .args(["--notice", "N\n", "--no-echo", "--report-json", "report.json"])
    .current_dir(base)
    .assert()
    .success();

  let report: serde_json::Value = serde_json::from_str(&read_file(base, "report.json")?)?;
  assert_eq!(report["root"], "Assets");
  assert_eq!(report["noticed"], 1);
  assert_eq!(report["excluded"], 1);
  assert_eq!(report["wrong_suffix"], 1);
  assert_eq!(report["files"][0]["path"], "Assets/A.cs");
  assert_eq!(
    report["files"][1]["excluded_by"],
    "Assets/Fungus/Thirdparty/CSVParser/"
  );
  Ok(())
}

#[test]
fn test_colors_never_has_no_ansi_codes() -> Result<()> {
  let temp_dir = tempdir()?;
  let base = temp_dir.path();
  write_file(base, "Assets/A.cs", "x")?;

  let output = addnotice()?
    .args(["--colors=never", "--verbose", "--notice", "N\n"])
    .current_dir(base)
    .output()?;

  assert!(output.status.success());
  let stderr = String::from_utf8(output.stderr)?;
  assert!(!stderr.contains("\x1b["), "stderr: {stderr}");
  assert!(stderr.contains("Processing file: Assets/A.cs"));
  Ok(())
}

#[test]
fn test_help_lists_flags() -> Result<()> {
  addnotice()?
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("--exclude").and(predicate::str::contains("--skip-noticed")));
  Ok(())
}

#[cfg(target_os = "linux")]
#[test]
fn test_failed_echo_exits_with_error_instead_of_panicking() -> Result<()> {
  use std::fs::OpenOptions;
  use std::process::Stdio;

  let temp_dir = tempdir()?;
  let base = temp_dir.path();
  write_file(base, "Assets/A.cs", "a")?;
  write_file(base, "Assets/B.cs", "b")?;

  // Every write to /dev/full fails with ENOSPC
  let full = OpenOptions::new().write(true).open("/dev/full")?;
  addnotice()?
    .args(["--notice", "N\n", "--colors=never"])
    .current_dir(base)
    .stdout(Stdio::from(full))
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("Failed to write <stdout>"))
    .stderr(predicate::str::contains("panicked").not());

  // A.cs was written before its echo failed; the run stopped there
  assert_eq!(read_file(base, "Assets/A.cs")?, "N\na");
  assert_eq!(read_file(base, "Assets/B.cs")?, "b");
  Ok(())
}

#[cfg(unix)]
#[test]
fn test_read_only_file_exits_non_zero() -> Result<()> {
  use common::{ModeGuard, file_is_read_only};

  let temp_dir = tempdir()?;
  let base = temp_dir.path();
  let read_only = write_file(base, "Assets/A.cs", "a")?;
  let _guard = ModeGuard::set(&read_only, 0o444, 0o644)?;
  if !file_is_read_only(&read_only) {
    return Ok(());
  }

  addnotice()?
    .args(["--notice", "N\n", "--no-echo"])
    .current_dir(base)
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("Failed to write Assets/A.cs"));

  assert_eq!(read_file(base, "Assets/A.cs")?, "a");
  Ok(())
}

#[cfg(unix)]
#[test]
fn test_unreadable_directory_exits_non_zero() -> Result<()> {
  use common::{ModeGuard, dir_is_locked};

  let temp_dir = tempdir()?;
  let base = temp_dir.path();
  write_file(base, "Assets/Locked/Hidden.cs", "h")?;
  let locked = base.join("Assets/Locked");
  let _guard = ModeGuard::set(&locked, 0o000, 0o755)?;
  if !dir_is_locked(&locked) {
    return Ok(());
  }

  addnotice()?
    .args(["--notice", "N\n", "--no-echo"])
    .current_dir(base)
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("Failed to walk Assets/Locked"));
  Ok(())
}
