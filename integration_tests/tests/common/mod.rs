use std::path::PathBuf;

use monitor_core::MonitorData;

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("test_monitor_data.json")
}

pub fn load_fixture() -> MonitorData {
    MonitorData::from_file(&fixture_path()).expect("test monitor dataset should load")
}
