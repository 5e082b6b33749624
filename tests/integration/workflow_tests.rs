use anyhow::Result;
use std::fs;

use prj::RegistryError;

use crate::helpers::test_harness::TestHarness;

#[test]
fn test_new_then_goto_across_runs() -> Result<()> {
    let harness = TestHarness::new()?;

    let (out, outcome) = harness.run(&["new", "site", "-c", "clients"])?;
    outcome?;
    assert_eq!(out, "Created project\n");

    let expected = harness.home().join("Projects").join("clients").join("site");
    assert!(expected.is_dir());

    let (out, outcome) = harness.run(&["goto", "site"])?;
    outcome?;
    assert_eq!(out, format!("cd {};\n", expected.display()));

    Ok(())
}

#[test]
fn test_basedir_flag_overrides_config_for_one_run() -> Result<()> {
    let harness = TestHarness::new()?;
    let code = harness.home().join("code");
    let code_arg = code.to_string_lossy().into_owned();

    let (_, outcome) = harness.run(&["--basedir", &code_arg, "new", "tool"])?;
    outcome?;
    assert!(code.join("tool").is_dir());

    // Configured base dir is unchanged
    let (out, _) = harness.run(&["config", "get", "BaseDir"])?;
    assert_eq!(out.trim_end(), harness.home().join("Projects").display().to_string());

    Ok(())
}

#[test]
fn test_config_set_persists() -> Result<()> {
    let harness = TestHarness::new()?;

    harness.run(&["config", "set", "EditorInBackground", "true"])?.1?;
    harness.run(&["config", "set", "AlwaysGit", "yes"])?.1?;
    harness.run(&["config", "set", "NoSuchKey", "true"])?.1?;

    let (out, outcome) = harness.run(&["config", "list"])?;
    outcome?;
    assert!(out.contains("EditorInBackground: true\n"));
    assert!(out.contains("AlwaysGit: false\n"));
    assert!(!out.contains("NoSuchKey"));

    Ok(())
}

#[test]
fn test_add_list_delete() -> Result<()> {
    let harness = TestHarness::new()?;
    let zed = harness.create_dir("z/zed")?;
    let alpha = harness.create_dir("a/alpha")?;
    let zed_arg = zed.to_string_lossy().into_owned();
    let alpha_arg = alpha.to_string_lossy().into_owned();

    harness.run(&["add", "zed", &zed_arg])?.1?;
    harness.run(&["add", "alpha", &alpha_arg])?.1?;

    let (out, _) = harness.run(&["list"])?;
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines[0], "Projects");
    assert_eq!(lines[1], "--------");
    assert!(lines[2].starts_with("alpha: "));
    assert!(lines[3].starts_with("zed: "));

    let (out, _) = harness.run(&["names"])?;
    assert_eq!(out, "alpha\nzed\n");

    let (out, outcome) = harness.run(&["rm", "zed"])?;
    outcome?;
    assert!(out.contains("Leaving directory in place"));
    assert!(zed.is_dir());

    let (out, _) = harness.run(&["names"])?;
    assert_eq!(out, "alpha\n");

    Ok(())
}

#[test]
fn test_delete_with_nocache_removes_directory() -> Result<()> {
    let harness = TestHarness::new()?;
    harness.run(&["new", "scratch"])?.1?;
    let dir = harness.home().join("Projects").join("scratch");
    fs::write(dir.join("notes.txt"), "temp")?;

    let (out, outcome) = harness.run(&["delete", "scratch", "--nocache"])?;
    outcome?;
    assert!(out.contains("Removing directory"));
    assert!(out.ends_with("Project: 'scratch' deleted\n"));
    assert!(!dir.exists());

    Ok(())
}

#[test]
fn test_failed_commands_report_and_keep_registry() -> Result<()> {
    let harness = TestHarness::new()?;
    harness.run(&["new", "site"])?.1?;
    let before = fs::read(harness.registry_file())?;

    let (_, outcome) = harness.run(&["goto", "missing"])?;
    let err = outcome.unwrap_err();
    assert_eq!(
        err.downcast_ref::<RegistryError>(),
        Some(&RegistryError::NotFound("missing".to_string()))
    );

    let (_, outcome) = harness.run(&["delete", "missing"])?;
    assert!(outcome.is_err());

    let other = harness.create_dir("other")?;
    let other_arg = other.to_string_lossy().into_owned();
    let (_, outcome) = harness.run(&["add", "site", &other_arg])?;
    let err = outcome.unwrap_err();
    assert_eq!(
        err.downcast_ref::<RegistryError>(),
        Some(&RegistryError::AlreadyExists("site".to_string()))
    );

    // Every run persisted, and none of them changed anything
    assert_eq!(fs::read(harness.registry_file())?, before);

    Ok(())
}

#[test]
fn test_goto_editor_line_follows_config() -> Result<()> {
    let harness = TestHarness::new()?;
    harness.run(&["new", "site"])?.1?;
    harness.run(&["config", "set", "EditorInBackground", "true"])?.1?;

    let (out, outcome) = harness.run(&["g", "site", "--editor"])?;
    outcome?;
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("cd "));
    assert!(lines[1].ends_with(" . &"));

    Ok(())
}
