use filekit::{ConfigValue, CsvTable, ErrorKind, FileHelper, Scalar, ScalarType, ValueType};

use crate::common::{TempProject, project};

#[test]
fn typed_values_round_trip_through_ini() {
    let ws = TempProject::new();
    let path = project("Config/Game.ini");
    std::fs::create_dir(ws.path("Config")).expect("mkdir");

    let volume = ConfigValue::Scalar(Scalar::Float(0.75));
    assert!(ws.helper.write_config(&path, "Audio", "Volume", &volume, false).is_success());
    let maps = ConfigValue::Array(vec!["Arena".into(), "Docks".into()]);
    assert!(ws.helper.write_config(&path, "Maps", "Rotation", &maps, false).is_success());

    let read = ws.helper.read_config(&path, "audio", "volume", ValueType::Scalar(ScalarType::Float), false);
    assert_eq!(read.value, Some(volume));
    let read = ws.helper.read_config(&path, "Maps", "Rotation", ValueType::Array(ScalarType::String), false);
    assert_eq!(read.value, Some(maps));
    assert!(!ws.path("Config/Game.ini.lock").exists());
}

#[test]
fn missing_key_and_removal() {
    let ws = TempProject::new();
    ws.create_file("Engine.ini", "[Core]\nThreads=4\n");
    let path = project("Engine.ini");

    let missing = ws.helper.read_config(&path, "Core", "Absent", ValueType::Scalar(ScalarType::Integer), false);
    assert_eq!(missing.kind(), Some(ErrorKind::NotFound));
    assert_eq!(missing.value, None);

    let threads = ws.helper.read_config(&path, "Core", "Threads", ValueType::Scalar(ScalarType::Integer), false);
    assert_eq!(threads.value, Some(ConfigValue::Scalar(Scalar::Integer(4))));

    assert!(ws.helper.remove_config(&path, "Core", "Threads").value);
    let again = ws.helper.remove_config(&path, "Core", "Threads");
    assert!(again.is_success());
    assert!(!again.value);
}

#[test]
fn csv_file_round_trip() {
    let ws = TempProject::new();
    let table = CsvTable::new(
        vec!["name".into(), "note".into()],
        vec![vec!["a".into(), "has, comma".into()], vec!["b".into(), "says \"hi\"".into()]],
    );
    assert!(ws.helper.save_csv(&project("t.csv"), &table, false).is_success());
    assert_eq!(ws.helper.save_csv(&project("t.csv"), &table, false).kind(), Some(ErrorKind::AlreadyExists));

    let read = ws.helper.read_csv(&project("t.csv"), true);
    assert_eq!(read.value, table);
    assert_eq!(ws.helper.string_to_csv(&ws.helper.csv_to_string(&table), true).value, table);
}

#[test]
fn helper_loads_json_settings() {
    let ws = TempProject::new();
    ws.create_file("data/hello.txt", "hi");
    let settings = serde_json::json!({ "project_root": "data", "line_terminator": "lf" });
    ws.create_file("filekit.json", settings.to_string());

    let helper = FileHelper::from_settings_file(ws.path("filekit.json")).expect("settings");
    assert_eq!(helper.read_text(&project("hello.txt")).value, "hi");
}
