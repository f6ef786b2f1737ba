//! Test helpers for sample-util integration tests

use std::fs;
use std::path::PathBuf;

use sample_util::{MemorySink, SampleUtil};

/// A context with a capturing print sink installed
pub struct Harness {
    pub util: SampleUtil,
    pub output: MemorySink,
}

impl Harness {
    pub fn new() -> Self {
        let util = SampleUtil::new();
        let output = MemorySink::new();
        util.initialize(output.clone());
        Self { util, output }
    }
}

/// Load a description document shared with the DOM crate's tests
pub fn load_description(filename: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("../upnp-dom/tests/fixtures");
    path.push(filename);

    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", filename, e))
}
