//! Table source backed by an HTTP endpoint serving a JSON table document.

use async_trait::async_trait;
use futures::StreamExt;
use log::{debug, info, warn};

use crate::model::{Mappable, Table};
use crate::source::{SourceError, TableSource};

pub struct RemoteSource {
    url: String,
    client: reqwest::Client,
}

impl RemoteSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl TableSource for RemoteSource {
    fn name(&self) -> &str {
        &self.url
    }

    async fn load(&self) -> Result<Table, SourceError> {
        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        debug!("GET {} -> {}", self.url, response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            warn!("table fetch failed: HTTP {status} from {}", self.url);
            return Err(SourceError::Http { status });
        }

        // Stream the body in so a slow or large document never blocks in one
        // read; the event loop stays responsive while this task accumulates.
        let mut body: Vec<u8> = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| SourceError::Network(e.to_string()))?;
            body.extend_from_slice(&chunk);
        }

        let text = String::from_utf8_lossy(&body);
        let table = Table::from_json(&text).map_err(SourceError::Decode)?;
        info!(
            "loaded table \"{}\" ({} bytes) from {}",
            table.identifier,
            body.len(),
            self.url
        );
        Ok(table)
    }
}
