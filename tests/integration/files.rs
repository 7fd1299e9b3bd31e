use filekit::{ErrorKind, MIN_TIMESTAMP, PathSpec};

use crate::common::{TempProject, project};

#[test]
fn save_then_load_round_trips() {
    let ws = TempProject::new();
    let saved = ws.helper.save_file(&project("Saved/notes.txt"), true, false, b"hello");
    assert!(saved.is_success(), "{:?}", saved.result);
    assert_eq!(saved.value.file_name, "notes.txt");
    assert_eq!(saved.value.full_path, ws.path("Saved/notes.txt"));

    let loaded = ws.helper.load_file(&project("Saved/notes.txt"));
    assert!(loaded.is_success());
    assert_eq!(loaded.value.file_name, "notes.txt");
    assert_eq!(loaded.value.bytes, b"hello");
}

#[test]
fn save_refuses_existing_file_without_overwrite() {
    let ws = TempProject::new();
    ws.create_file("data.bin", b"original");

    let refused = ws.helper.save_file(&project("data.bin"), false, false, b"new");
    assert_eq!(refused.kind(), Some(ErrorKind::AlreadyExists));
    assert_eq!(refused.result.error_code, 3);
    assert_eq!(ws.read("data.bin"), b"original");

    let replaced = ws.helper.save_file(&project("data.bin"), false, true, b"new");
    assert!(replaced.is_success());
    assert_eq!(ws.read("data.bin"), b"new");
}

#[test]
fn save_into_missing_directory_is_not_found() {
    let ws = TempProject::new();
    let outcome = ws.helper.save_file(&project("missing/dir/file.txt"), false, false, b"x");
    assert_eq!(outcome.kind(), Some(ErrorKind::NotFound));
    assert!(!ws.path("missing").exists());
}

#[test]
fn save_to_dot_segments_is_an_invalid_argument() {
    let ws = TempProject::new();
    std::fs::create_dir(ws.path("Saved")).expect("mkdir");
    for raw in ["Saved/..", "Saved/."] {
        let outcome = ws.helper.save_file(&project(raw), true, true, b"x");
        assert_eq!(outcome.kind(), Some(ErrorKind::InvalidArgument), "{raw}");
    }
}

#[test]
fn load_missing_file_reports_not_found_with_empty_value() {
    let ws = TempProject::new();
    let outcome = ws.helper.load_file(&project("nope.txt"));
    assert_eq!(outcome.kind(), Some(ErrorKind::NotFound));
    assert!(outcome.value.bytes.is_empty());
    assert!(outcome.value.file_name.is_empty());
}

#[test]
fn empty_path_is_an_invalid_argument() {
    let ws = TempProject::new();
    assert_eq!(ws.helper.read_bytes(&PathSpec::absolute("")).kind(), Some(ErrorKind::InvalidArgument));
    assert_eq!(ws.helper.save_file(&project(""), true, true, b"x").kind(), Some(ErrorKind::InvalidArgument));
}

#[test]
fn text_and_lines_use_configured_terminator() {
    let ws = TempProject::new();
    let path = project("log.txt");
    assert!(ws.helper.write_lines(&path, &["alpha", "beta", "gamma"], false).is_success());
    assert_eq!(ws.read("log.txt"), b"alpha\nbeta\ngamma\n");

    let filtered = ws.helper.read_lines(&path, "^(alpha|gamma)$");
    assert_eq!(filtered.value, vec!["alpha", "gamma"]);

    let range = ws.helper.read_line_range(&path, 1, Some(10));
    assert_eq!(range.value, vec!["beta", "gamma"]);

    assert!(ws.helper.write_text(&path, "delta", true).is_success());
    assert_eq!(ws.helper.read_text(&path).value, "alpha\nbeta\ngamma\ndelta");
}

#[test]
fn invalid_line_pattern_fails_cleanly() {
    let ws = TempProject::new();
    ws.create_file("a.txt", "x\n");
    let outcome = ws.helper.read_lines(&project("a.txt"), "(unclosed");
    assert_eq!(outcome.kind(), Some(ErrorKind::InvalidArgument));
    assert!(outcome.value.is_empty());
}

#[test]
fn stat_and_size_of_missing_file_use_sentinels() {
    let ws = TempProject::new();
    let size = ws.helper.file_size(&project("ghost"));
    assert_eq!(size.value, -1);
    assert_eq!(size.kind(), Some(ErrorKind::NotFound));
    assert_eq!(ws.helper.get_timestamp(&project("ghost")).value, MIN_TIMESTAMP);
    assert!(!ws.helper.stat(&project("ghost")).value.has_modification_time());
}

#[test]
fn set_timestamp_is_observable() {
    use chrono::TimeZone;

    let ws = TempProject::new();
    ws.create_file("stamp.txt", "x");
    let when = chrono::Utc.with_ymd_and_hms(2024, 3, 9, 8, 30, 0).single().expect("valid time");
    assert!(ws.helper.set_timestamp(&project("stamp.txt"), when).is_success());
    assert_eq!(ws.helper.get_timestamp(&project("stamp.txt")).value, when);
    assert_eq!(ws.helper.set_timestamp(&project("stamp.txt"), MIN_TIMESTAMP).kind(), Some(ErrorKind::InvalidArgument));
}

#[test]
fn copy_move_rename_and_delete() {
    let ws = TempProject::new();
    ws.create_file("a.txt", "payload");

    assert!(ws.helper.copy_file(&project("a.txt"), &project("b.txt"), false).is_success());
    assert_eq!(ws.helper.copy_file(&project("a.txt"), &project("b.txt"), false).kind(), Some(ErrorKind::AlreadyExists));

    assert!(ws.helper.move_file(&project("b.txt"), &project("c.txt"), false).is_success());
    assert!(!ws.path("b.txt").exists());

    let renamed = ws.helper.rename_file(&project("c.txt"), "d.txt");
    assert!(renamed.is_success());
    assert_eq!(renamed.value, ws.path("d.txt"));
    assert_eq!(ws.read("d.txt"), b"payload");

    assert!(ws.helper.delete_file(&project("d.txt")).is_success());
    assert!(!ws.helper.exists(&project("d.txt")));
}

#[test]
fn read_only_flag_toggles() {
    let ws = TempProject::new();
    ws.create_file("ro.txt", "x");
    assert!(ws.helper.set_read_only(&project("ro.txt"), true).is_success());
    assert!(ws.helper.is_read_only(&project("ro.txt")).value);
    assert!(ws.helper.set_read_only(&project("ro.txt"), false).is_success());
    assert!(!ws.helper.is_read_only(&project("ro.txt")).value);
}

#[test]
fn filename_helpers() {
    let ws = TempProject::new();
    let parts = ws.helper.path_parts("dir/sub/archive.tar.gz");
    assert_eq!(parts.file_name, "archive.tar.gz");
    assert_eq!(parts.extension, "gz");
    assert!(ws.helper.is_valid_filename("report.txt"));
    assert!(!ws.helper.is_valid_filename("bad:name"));
}
