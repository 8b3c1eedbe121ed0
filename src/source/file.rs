//! Table source backed by a JSON file on disk.

use std::path::PathBuf;

use async_trait::async_trait;
use log::info;

use crate::model::{Mappable, Table};
use crate::source::{SourceError, TableSource};

pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }
}

#[async_trait]
impl TableSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn load(&self) -> Result<Table, SourceError> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(SourceError::Io)?;
        let table = Table::from_json(&text).map_err(SourceError::Decode)?;
        info!(
            "loaded table \"{}\" from {}",
            table.identifier,
            self.path.display()
        );
        Ok(table)
    }
}
