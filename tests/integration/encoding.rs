use filekit::{ErrorKind, PathSpec};

use crate::common::{TempProject, project};

#[test]
fn known_vectors() {
    let ws = TempProject::new();
    assert_eq!(ws.helper.encode(b"Man"), "TWFu");
    assert_eq!(ws.helper.text_to_base64("hi"), "aGk=");
    assert_eq!(ws.helper.hash_bytes(b"abc").to_string(), "900150983cd24fb0d6963f7d28e17f72");
    assert_eq!(ws.helper.hash_bytes(b"").to_string(), "d41d8cd98f00b204e9800998ecf8427e");
}

#[test]
fn invalid_base64_is_a_decode_failure() {
    let ws = TempProject::new();
    let decoded = ws.helper.decode("not base64!");
    assert_eq!(decoded.kind(), Some(ErrorKind::Decode));
    assert!(decoded.value.is_empty());
    assert_eq!(ws.helper.base64_to_text("%%%"), "");
    assert_eq!(ws.helper.base64_to_text_checked("%%%").kind(), Some(ErrorKind::Decode));
}

#[test]
fn file_hash_matches_in_memory_hash() {
    let ws = TempProject::new();
    let data = vec![7u8; 200_000];
    ws.create_file("blob.bin", &data);
    let hashed = ws.helper.hash_file(&project("blob.bin"));
    assert!(hashed.is_success());
    assert_eq!(hashed.value, ws.helper.hash_bytes(&data));
    assert_eq!(ws.helper.hash_file(&project("missing.bin")).kind(), Some(ErrorKind::NotFound));
}

#[test]
fn file_to_base64_and_back() {
    let ws = TempProject::new();
    ws.create_file("in/photo.png", [0u8, 159, 146, 150, 255]);
    let encoded = ws.helper.file_to_base64(&project("in/photo.png"));
    assert!(encoded.is_success());
    assert_eq!(encoded.value.file_name, "photo.png");

    std::fs::create_dir(ws.path("out")).expect("mkdir");
    assert!(ws.helper.base64_to_file(&project("out/photo.png"), &encoded.value.base64).is_success());
    assert_eq!(ws.read("out/photo.png"), ws.read("in/photo.png"));
}

#[test]
fn base64_to_file_requires_existing_directory() {
    let ws = TempProject::new();
    let outcome = ws.helper.base64_to_file(&project("nowhere/x.bin"), "AAEC");
    assert_eq!(outcome.kind(), Some(ErrorKind::NotFound));
    assert_eq!(ws.helper.base64_to_file(&project("x.bin"), "").kind(), Some(ErrorKind::InvalidArgument));
    assert!(!ws.helper.is_file(&PathSpec::from(ws.path("x.bin"))));
}
