// crates/shared-kernel/tests/listing_report.rs
use filekit_shared_kernel::{Listing, TreeReport};

#[test]
fn listing_count_tracks_pushes() {
    let mut listing = Listing::default();
    assert!(listing.is_empty());
    listing.push("a.txt".into(), "data/a.txt".into());
    listing.push("b.txt".into(), "data/sub/b.txt".into());
    assert_eq!(listing.count, 2);
    assert_eq!(listing.paths[1], "data/sub/b.txt");
}

#[test]
fn report_is_incomplete_after_failure() {
    let mut report = TreeReport::default();
    assert!(report.is_complete());
    report.record_failure("/x/y", "permission denied");
    assert!(!report.is_complete());
    assert_eq!(report.failures[0].reason, "permission denied");
}
