use filekit::{ErrorKind, PathSpec};

use crate::common::{TempProject, project};

#[test]
fn split_and_join_restore_the_file() {
    let ws = TempProject::new();
    let data: Vec<u8> = (0..=255u8).cycle().take(10_001).collect();
    ws.create_file("pak/game.pak", &data);

    let split = ws.helper.split(&project("pak/game.pak"), "parts", 4);
    assert!(split.is_success(), "{:?}", split.result);
    let sizes: Vec<u64> = split.value.iter().map(|p| p.size_bytes).collect();
    assert_eq!(sizes, vec![2500, 2500, 2500, 2501]);
    assert!(ws.path("pak/parts/game.pak_part3").is_file());

    let parts: Vec<PathSpec> = split.value.iter().map(|p| PathSpec::from(p.absolute_path.clone())).collect();
    let joined = ws.helper.join(&parts, &project("restored.pak"), false);
    assert_eq!(joined.value, 10_001);
    assert_eq!(ws.read("restored.pak"), data);
}

#[test]
fn single_part_copies_the_file() {
    let ws = TempProject::new();
    ws.create_file("one.bin", b"abcdef");
    let split = ws.helper.split(&project("one.bin"), "", 1);
    assert_eq!(split.value.len(), 1);
    assert_eq!(split.value[0].size_bytes, 6);
    assert_eq!(ws.read("one.bin_part0"), b"abcdef");
}

#[test]
fn split_refuses_file_not_larger_than_part_count() {
    let ws = TempProject::new();
    ws.create_file("tiny.bin", b"abcd");
    let split = ws.helper.split(&project("tiny.bin"), "out", 4);
    assert_eq!(split.kind(), Some(ErrorKind::InvalidArgument));
    assert!(split.value.is_empty());
    assert!(!ws.path("out").exists());
}

#[test]
fn split_missing_file_is_not_found() {
    let ws = TempProject::new();
    assert_eq!(ws.helper.split(&project("ghost.bin"), "", 2).kind(), Some(ErrorKind::NotFound));
}
