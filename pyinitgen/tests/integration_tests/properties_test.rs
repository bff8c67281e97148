// tests/integration_tests/properties_test.rs
use super::common::{create_dirs, create_ignore_file, create_test_file, dirs_with_init, init_file, set_of};
use anyhow::Result;
use pyinitgen::{
    DEFAULT_EXCLUDE_DIRS, ExclusionSet, Mode, ScanOptions, create_inits, resolve_exclusions,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn setup_mixed_tree() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    create_dirs(
        temp_dir.path(),
        &[
            "app/core/models",
            "app/api",
            "app/api/node_modules/lib/deep",
            "build/lib/app",
            "vendored/inner",
            "tests/unit",
        ],
    )?;
    create_test_file(temp_dir.path(), "app/api/__init__.py", "API = True\n")?;
    create_ignore_file(temp_dir.path(), &["vendored"])?;
    Ok(temp_dir)
}

fn snapshot(dir: &Path) -> Result<Vec<(String, String)>> {
    let mut files = Vec::new();
    for relative in dirs_with_init(dir)? {
        let content = fs::read_to_string(init_file(dir, &relative))?;
        files.push((relative, content));
    }
    Ok(files)
}

#[test]
fn test_second_write_run_creates_nothing() -> Result<()> {
    let temp_dir = setup_mixed_tree()?;

    let first = create_inits(temp_dir.path(), &ScanOptions::default());
    let after_first = snapshot(temp_dir.path())?;
    let second = create_inits(temp_dir.path(), &ScanOptions::default());

    assert_eq!(first.status, 0);
    assert!(first.created > 0);
    assert_eq!(second.status, 0);
    assert_eq!(second.created, 0);
    assert_eq!(second.scanned_dirs, first.scanned_dirs);
    assert_eq!(snapshot(temp_dir.path())?, after_first);
    Ok(())
}

#[test]
fn test_nothing_below_an_excluded_directory_is_touched() -> Result<()> {
    let temp_dir = setup_mixed_tree()?;

    for mode in [Mode::Write, Mode::DryRun, Mode::Check] {
        create_inits(temp_dir.path(), &ScanOptions::with_mode(mode));
    }

    let marked = dirs_with_init(temp_dir.path())?;
    for relative in &marked {
        assert!(
            !relative.split('/').any(|part| part == "node_modules"
                || part == "build"
                || part == "vendored"),
            "{relative} is inside an excluded directory"
        );
    }
    assert_eq!(
        marked,
        set_of(&["", "app", "app/api", "app/core", "app/core/models", "tests", "tests/unit"])
    );
    Ok(())
}

#[test]
fn test_existing_content_survives_every_mode() -> Result<()> {
    let temp_dir = setup_mixed_tree()?;

    for mode in [Mode::Check, Mode::DryRun, Mode::Write] {
        let options = ScanOptions {
            mode,
            init_content: String::from("different = 1\n"),
            ..ScanOptions::default()
        };
        create_inits(temp_dir.path(), &options);
        assert_eq!(
            fs::read_to_string(init_file(temp_dir.path(), "app/api"))?,
            "API = True\n"
        );
    }
    Ok(())
}

#[test]
fn test_read_only_modes_never_write() -> Result<()> {
    let temp_dir = setup_mixed_tree()?;
    let before = snapshot(temp_dir.path())?;

    let dry_run = create_inits(temp_dir.path(), &ScanOptions::with_mode(Mode::DryRun));
    let check = create_inits(temp_dir.path(), &ScanOptions::with_mode(Mode::Check));

    assert_eq!(dry_run.created, 0);
    assert_eq!(dry_run.status, 0);
    assert_eq!(check.created, 0);
    assert_eq!(check.status, 1);
    assert_eq!(dry_run.scanned_dirs, check.scanned_dirs);
    assert_eq!(snapshot(temp_dir.path())?, before);
    Ok(())
}

#[test]
fn test_write_count_matches_missing_markers() -> Result<()> {
    let temp_dir = setup_mixed_tree()?;

    let scanned = create_inits(temp_dir.path(), &ScanOptions::with_mode(Mode::DryRun)).scanned_dirs;
    let already_marked = u64::try_from(dirs_with_init(temp_dir.path())?.len())?;
    let result = create_inits(temp_dir.path(), &ScanOptions::default());

    assert_eq!(result.created, scanned - already_marked);
    Ok(())
}

#[test]
fn test_effective_exclusions_are_the_union_of_sources() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_ignore_file(temp_dir.path(), &["# comment", "from_ignore", "", "shared"])?;
    create_test_file(
        temp_dir.path(),
        "pyproject.toml",
        "[tool.pyinitgen]\nexclude_dirs = [\"from_config\", \"shared\"]\n",
    )?;

    let exclusions = resolve_exclusions(temp_dir.path());

    let mut expected: ExclusionSet = DEFAULT_EXCLUDE_DIRS
        .iter()
        .map(|name| (*name).to_owned())
        .collect();
    expected.extend(["from_ignore", "from_config", "shared"].map(String::from));
    assert_eq!(exclusions, expected);
    Ok(())
}
