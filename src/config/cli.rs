use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::io::Write;
use std::path::Path;

/// "Download": writes the export under a base directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, data)?;
        Ok(full_path.display().to_string())
    }
}

/// "Copy": writes the export to stdout, ignoring the suggested file name.
#[derive(Debug, Clone, Default)]
pub struct StdoutStorage;

impl StdoutStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for StdoutStorage {
    async fn write_file(&self, _path: &str, data: &[u8]) -> Result<String> {
        let mut out = std::io::stdout().lock();
        out.write_all(data)?;
        out.write_all(b"\n")?;
        out.flush()?;
        Ok("stdout".to_string())
    }
}
