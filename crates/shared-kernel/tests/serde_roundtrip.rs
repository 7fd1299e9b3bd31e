// crates/shared-kernel/tests/serde_roundtrip.rs
use chrono::{TimeZone, Utc};
use filekit_shared_kernel::{ChunkDescriptor, FileStat, MIN_TIMESTAMP, OperationResult};

#[test]
fn file_stat_json_roundtrip() {
    let stamp = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
    let original = FileStat {
        size_bytes: 2048,
        modification_time: stamp,
        last_access_time: stamp,
        creation_time: stamp,
        ..FileStat::default()
    };
    let json = serde_json::to_string(&original).expect("serializes");
    let decoded: FileStat = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(decoded, original);
    assert!(decoded.has_modification_time());
}

#[test]
fn default_stat_uses_sentinel() {
    let stat = FileStat::default();
    assert_eq!(stat.creation_time, MIN_TIMESTAMP);
    assert!(!stat.has_modification_time());
}

#[test]
fn chunk_and_result_serialize_with_field_names() {
    let chunk = ChunkDescriptor::new("/tmp/a.bin_part0", 10);
    let json = serde_json::to_value(&chunk).expect("serializes");
    assert_eq!(json["size_bytes"], 10);

    let result = OperationResult::ok();
    let json = serde_json::to_value(&result).expect("serializes");
    assert_eq!(json["error_code"], 0);
    assert_eq!(json["success"], true);
}
