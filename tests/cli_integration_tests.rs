#![allow(deprecated)] // cargo_bin deprecation - still works fine

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const HEADER: &str =
    "Name,Trailers,Volume 1,Volume 2,Volume 3,Volume 4,Volume 5,Volume 6,Volume 7,Volume 8,Notes";

fn cmd() -> Command {
    Command::cargo_bin("appearance-graph").expect("binary should exist")
}

fn write_wide(dir: &TempDir, rows: &[&str]) -> std::path::PathBuf {
    let path = dir.path().join("characters_by_volume.csv");
    let mut s = format!("{HEADER}\n");
    for row in rows {
        s.push_str(row);
        s.push('\n');
    }
    fs::write(&path, s).unwrap();
    path
}

#[test]
fn pre_process_writes_long_table_to_the_default_path() {
    let dir = TempDir::new().unwrap();
    let input = write_wide(
        &dir,
        &["Ruby Rose,Main,Main,Main,Main,Main,Main,Main,Main,Main,leader"],
    );

    cmd()
        .current_dir(dir.path())
        .arg(&input)
        .arg("--pre-process-only")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Wrote character appearances to: character_appearances.csv",
        ));

    let long = fs::read_to_string(dir.path().join("character_appearances.csv")).unwrap();
    let lines: Vec<_> = long.lines().collect();
    assert_eq!(lines[0], "name,volume,appearance_type");
    assert_eq!(lines[1], "Ruby Rose,Trailers,Main");
    assert_eq!(lines[9], "Ruby Rose,Volume 8,Main");
    assert_eq!(lines.len(), 10);
}

#[test]
fn output_override_is_respected() {
    let dir = TempDir::new().unwrap();
    let input = write_wide(
        &dir,
        &[
            "Ruby Rose,Main,Main,Main,Main,Main,Main,Main,Main,Main,",
            "Penny Polendina,No Appearance,No Appearance,Minor,Secondary,Deceased,Secondary,Main,Main,Main,",
        ],
    );
    let output = dir.path().join("nested_name.csv");

    cmd()
        .arg(&input)
        .arg("--output_character_appearances_csv")
        .arg(&output)
        .arg("--pre-process-only")
        .assert()
        .success();

    let long = fs::read_to_string(&output).unwrap();
    assert_eq!(long.lines().count(), 1 + 2 * 9);
    assert!(long.contains("Penny Polendina,Volume 4,Deceased"));
}

#[test]
fn full_run_writes_both_charts_to_overridden_paths() {
    let dir = TempDir::new().unwrap();
    let input = write_wide(
        &dir,
        &[
            "Ruby Rose,Main,Main,Main,Main,Main,Main,Main,Main,Main,",
            "Pyrrha Nikos,No Appearance,Main,Main,Main,Deceased,Deceased,Mentioned,Mentioned,Deceased,",
            "Penny Polendina,No Appearance,No Appearance,Minor,Secondary,Deceased,Secondary,Main,Main,Main,",
        ],
    );
    let table = dir.path().join("long.csv");
    let bars = dir.path().join("bars.png");
    let tiles = dir.path().join("tiles.png");

    cmd()
        .current_dir(dir.path())
        .arg(&input)
        .arg("--output_character_appearances_csv")
        .arg(&table)
        .arg("--output_num_characters_by_volume_plot")
        .arg(&bars)
        .arg("--output_characters_appearances")
        .arg(&tiles)
        .args(["--dpi", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Wrote character appearances to: {}",
            table.display()
        )))
        .stdout(predicate::str::contains(format!(
            "Wrote num characters by volume plot to: {}",
            bars.display()
        )))
        .stdout(predicate::str::contains(format!(
            "Wrote character appearances plot: {}",
            tiles.display()
        )));

    for path in [&bars, &tiles] {
        let bytes = fs::read(path).unwrap();
        assert!(bytes.starts_with(b"\x89PNG"), "{}", path.display());
    }
    assert!(!dir.path().join("num_characters_by_volume.png").exists());
    assert!(!dir.path().join("characters_appearances.png").exists());
}

#[test]
fn missing_volume_column_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("broken.csv");
    fs::write(
        &input,
        "Name,Trailers,Volume 1,Volume 2,Volume 3,Volume 4,Volume 5,Volume 6,Volume 7\nX,1,2,3,4,5,6,7,8\n",
    )
    .unwrap();

    cmd()
        .current_dir(dir.path())
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required column `Volume 8`"))
        .stdout(predicate::str::is_empty());

    assert!(!dir.path().join("character_appearances.csv").exists());
}

#[test]
fn missing_name_column_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("no_name.csv");
    fs::write(
        &input,
        "Trailers,Volume 1,Volume 2,Volume 3,Volume 4,Volume 5,Volume 6,Volume 7,Volume 8\n",
    )
    .unwrap();

    cmd()
        .current_dir(dir.path())
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required column `Name`"));
}

#[test]
fn nonexistent_input_fails() {
    let dir = TempDir::new().unwrap();

    cmd()
        .current_dir(dir.path())
        .arg("does_not_exist.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"))
        .stderr(predicate::str::contains("caused by:"));
}

#[test]
fn zero_dpi_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = write_wide(&dir, &[]);

    cmd()
        .current_dir(dir.path())
        .arg(&input)
        .args(["--dpi", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("dpi must be between 1 and"));
}

#[test]
fn no_arguments_prints_usage() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("CHARACTERS_BY_VOLUME_CSV"));
}
