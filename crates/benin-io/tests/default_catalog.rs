//! The process-wide catalog reads `data/` relative to the working directory,
//! so this file runs in its own test binary and moves to the repository root.

use std::path::Path;

use benin_io::{load_all, SOURCES};

#[test]
fn load_all_is_shared_for_the_process() {
    std::env::set_current_dir(Path::new(env!("CARGO_MANIFEST_DIR")).join("../..")).unwrap();

    let first = load_all().expect("shipped data loads");
    let second = load_all().expect("second call hits the cache");

    assert_eq!(first as *const _, second as *const _);
    assert_eq!(first.len(), SOURCES.len());
    assert_eq!(first.get("Population").unwrap().len(), 14);
}
