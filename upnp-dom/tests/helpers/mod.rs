//! Test helpers for fixture-based description tests

use std::fs;
use std::path::PathBuf;

/// A device description document loaded from the fixtures directory
#[derive(Debug, Clone)]
pub struct DescriptionFixture {
    pub name: String,
    pub xml_content: String,
}

impl DescriptionFixture {
    /// Load a fixture from the fixtures directory
    pub fn load(filename: &str) -> Self {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("tests/fixtures");
        path.push(filename);

        let xml_content = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", filename, e));

        Self {
            name: filename.to_string(),
            xml_content,
        }
    }

    /// Location the description would have been fetched from
    pub fn location(&self, ip: &str) -> String {
        format!("http://{}:49152/{}", ip, self.name)
    }
}
