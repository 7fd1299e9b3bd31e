use filekit::{ErrorKind, ListOptions, PathSpec};

use crate::common::{TempProject, project};

fn tree() -> TempProject {
    let ws = TempProject::new();
    ws.create_file("tree/a.txt", "a");
    ws.create_file("tree/notes.md", "m");
    ws.create_file("tree/sub/b.txt", "b");
    ws.create_file("tree/sub/deeper/c.TXT", "c");
    ws
}

#[test]
fn recursive_listing_prefixes_subdirectories() {
    let ws = tree();
    let listing = ws.helper.list_files(&project("tree"), "txt", true);
    assert!(listing.is_success());
    assert_eq!(listing.value.names, vec!["a.txt", "b.txt", "c.TXT"]);
    assert_eq!(listing.value.paths, vec!["tree/a.txt", "tree/sub/b.txt", "tree/sub/deeper/c.TXT"]);
    assert_eq!(listing.value.count, 3);
}

#[test]
fn project_root_listing_uses_relative_paths() {
    let ws = tree();
    let listing = ws.helper.list_files(&project(""), ".md", true);
    assert_eq!(listing.value.paths, vec!["tree/notes.md"]);
}

#[test]
fn flat_listing_skips_subdirectories() {
    let ws = tree();
    let listing = ws.helper.list_files(&project("tree"), "", false);
    assert_eq!(listing.value.names, vec!["a.txt", "notes.md"]);
}

#[test]
fn listing_missing_directory_fails() {
    let ws = TempProject::new();
    let listing = ws.helper.list_files(&project("absent"), "txt", true);
    assert_eq!(listing.kind(), Some(ErrorKind::NotFound));
    assert!(listing.value.is_empty());
    assert_eq!(ws.helper.list_files(&PathSpec::absolute(""), "", false).kind(), Some(ErrorKind::InvalidArgument));
}

#[test]
fn directories_and_nodes() {
    let ws = tree();
    ws.create_file("tree/sub_bak/x.txt", "x");

    let dirs = ws.helper.list_directories(&project("tree"), "_bak");
    assert_eq!(dirs.value.names, vec!["sub_bak"]);
    assert_eq!(dirs.value.paths, vec!["tree/sub_bak"]);

    let options = ListOptions { pattern: r"^b\.".to_string(), files: true, directories: false, recursive: true };
    let nodes = ws.helper.list_nodes(&project("tree"), &options);
    assert_eq!(nodes.value.names, vec!["b.txt"]);
    assert_eq!(nodes.value.paths, vec![ws.path("tree/sub/b.txt").to_string_lossy().into_owned()]);
}

#[test]
fn create_and_remove_tree() {
    let ws = TempProject::new();
    assert!(ws.helper.create_directory_tree(&project("x/y/z")).is_success());
    assert!(ws.helper.is_directory(&project("x/y/z")));
    assert!(ws.helper.remove_directory_recursive(&project("x")).is_success());
    assert!(!ws.helper.exists(&project("x")));
    assert!(ws.helper.remove_directory_recursive(&project("x")).is_success());
}

#[test]
fn copy_directory_copies_everything() {
    let ws = tree();
    let outcome = ws.helper.copy_directory(&project("tree"), &project("copy"));
    assert!(outcome.is_success(), "{:?}", outcome.result);
    assert_eq!(outcome.value.files_transferred, 4);
    assert_eq!(ws.read("copy/sub/deeper/c.TXT"), b"c");
    assert!(ws.path("tree/a.txt").exists());
}

#[test]
fn copy_directory_reports_partial_failure_without_rollback() {
    let ws = tree();
    // A directory where a file must be written blocks exactly one entry.
    std::fs::create_dir_all(ws.path("copy/a.txt")).expect("blocker");

    let outcome = ws.helper.copy_directory(&project("tree"), &project("copy"));
    assert!(!outcome.is_success());
    assert_eq!(outcome.kind(), Some(ErrorKind::Io));
    assert_eq!(outcome.value.failures.len(), 1);
    assert_eq!(outcome.value.failures[0].path, ws.path("tree/a.txt"));
    assert_eq!(outcome.value.files_transferred, 3);
    assert_eq!(ws.read("copy/sub/b.txt"), b"b");
    assert_eq!(ws.read("copy/notes.md"), b"m");
}

#[test]
fn copy_into_own_subtree_is_rejected() {
    let ws = tree();
    let outcome = ws.helper.copy_directory(&project("tree"), &project("tree/sub/inner"));
    assert_eq!(outcome.kind(), Some(ErrorKind::InvalidArgument));
    assert!(!ws.path("tree/sub/inner").exists());
}

#[test]
fn move_directory_relocates_tree() {
    let ws = tree();
    let outcome = ws.helper.move_directory(&project("tree"), &project("moved"));
    assert!(outcome.is_success());
    assert!(!ws.path("tree").exists());
    assert_eq!(ws.read("moved/sub/b.txt"), b"b");
}
