//! Sample data and habit grid feeding the views

use std::fs;
use std::path::PathBuf;

use habit_flow::core::Context;
use habit_flow::domain::{SampleData, Tone};
use habit_flow::Error;

fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("habit-flow-it-{}-{}", std::process::id(), name))
}

#[test]
fn test_same_seed_same_grid_across_contexts() {
    let a = Context::new(SampleData::builtin(), Some(7));
    let b = Context::new(SampleData::builtin(), Some(7));
    let c = Context::new(SampleData::builtin(), Some(8));
    assert_eq!(a.habit_grid, b.habit_grid);
    assert_ne!(a.habit_grid, c.habit_grid);
    assert_eq!(a.habit_grid.rows.len(), 3);
    assert!(a.habit_grid.rows.iter().all(|row| row.completed.len() == 30));
}

#[test]
fn test_json_data_with_explicit_grid() {
    let mut data = SampleData::builtin();
    data.habit_grid.days = 5;
    data.habit_grid.rows.truncate(1);
    data.habit_grid.rows[0].days = Some(vec![true, true, false, true, false]);
    data.weekly_progress = 40;

    let path = temp_file("explicit.json");
    fs::write(&path, serde_json::to_string(&data).unwrap()).unwrap();
    let loaded = SampleData::load(&path).unwrap();
    let _ = fs::remove_file(&path);

    let ctx = Context::new(loaded, Some(1));
    assert_eq!(ctx.data.weekly_progress, 40);
    assert_eq!(
        ctx.habit_grid.rows[0].completed,
        vec![true, true, false, true, false]
    );
    // explicit rows ignore the seed
    assert_eq!(Context::new(ctx.data.clone(), Some(2)).habit_grid, ctx.habit_grid);
}

#[test]
fn test_minimal_toml_uses_defaults() {
    let path = temp_file("minimal.toml");
    fs::write(
        &path,
        r#"
metrics = []
timeline = []
events = []
goals = []
goal_summary = []
habits = []
achievements = []
progress_summary = []
notifications = []

[habit_grid]
rows = [{ habit = "Stretch", tone = "purple" }]
"#,
    )
    .unwrap();
    let data = SampleData::load(&path).unwrap();
    let _ = fs::remove_file(&path);

    assert_eq!(data.weekly_progress, 75);
    assert!(data.preferences.dark_mode);
    assert_eq!(data.habit_grid.days, 30);
    assert_eq!(data.habit_grid.rows[0].tone, Tone::Purple);
}

#[test]
fn test_bad_data_file_is_reported() {
    let path = temp_file("bad.toml");
    fs::write(&path, "metrics = 3").unwrap();
    let err = SampleData::load(&path).unwrap_err();
    let _ = fs::remove_file(&path);
    match err {
        Error::Data { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}
