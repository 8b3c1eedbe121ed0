use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::sync::Arc;

use drilldown::core::config::{self, ResolvedConfig};
use drilldown::core::state::App;
use drilldown::demo;
use drilldown::source::{FileSource, RemoteSource};
use drilldown::tui::{self, RendererMap};

#[derive(Parser)]
#[command(name = "drilldown", about = "Declarative drill-down tables for the terminal")]
struct Args {
    /// Built-in demo to show when no source is given
    #[arg(short, long, value_parser = ["settings", "form", "json"])]
    demo: Option<String>,

    /// Load the root table from a JSON file
    #[arg(short, long)]
    file: Option<String>,

    /// Fetch the root table from a URL (wins over --file)
    #[arg(short, long)]
    url: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let config = config::load_config().unwrap_or_else(|e| {
        eprintln!("warning: {e}, using defaults");
        Default::default()
    });
    let resolved = config::resolve(
        &config,
        args.demo.as_deref(),
        args.file.as_deref(),
        args.url.as_deref(),
    );

    // File logger - writes to drilldown.log in the current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("drilldown.log") {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!("Drilldown starting up: {:?}", resolved);

    let (app, renderers) = build_app(&resolved);
    tui::run(app, renderers)
}

/// A URL or file source starts empty and fetches; otherwise a built-in demo.
fn build_app(config: &ResolvedConfig) -> (App, RendererMap) {
    if let Some(url) = &config.source_url {
        let app = App::loading(
            Arc::new(RemoteSource::new(url.clone())),
            Box::new(demo::json::JsonDelegate),
        );
        return (app, RendererMap::new());
    }
    if let Some(path) = &config.source_file {
        let app = App::loading(
            Arc::new(FileSource::new(path)),
            Box::new(demo::json::JsonDelegate),
        );
        return (app, RendererMap::new());
    }
    match config.demo.as_str() {
        "form" => demo::form::app(),
        "json" => demo::json::app(),
        _ => demo::settings::app(),
    }
}
