use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use cheatsheet_rs::api::{DashboardComposer, PageLayout};
use cheatsheet_rs::cheatsheet::CheatSheet;
use cheatsheet_rs::config::SheetConfig;
use cheatsheet_rs::render::SvgRenderer;
use cheatsheet_rs::server;
use cheatsheet_rs::telemetry::init_default_tracing;
use cheatsheet_rs::template::{HtmlOptions, render_page_html};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, info};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Compose the HoloViews cheat sheet and serve or export it.
struct Args {
    /// JSON config file; defaults apply when omitted
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the page over HTTP until Ctrl-C
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Write the page to disk
    Export {
        #[arg(long, value_name = "PATH")]
        output: PathBuf,
        #[arg(long, value_enum, default_value_t = ExportFormat::Html)]
        format: ExportFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    Html,
    Json,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let _ = init_default_tracing();
    let args = Args::parse();
    if let Err(err) = run(args).await {
        error!(error = %err, "cheatsheet failed");
        return Err(err);
    }
    Ok(())
}

async fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => SheetConfig::load_from_file(path)?,
        None => SheetConfig::default(),
    };

    let defaults = CheatSheet::default_style_defaults(&config.thumbnail);
    let mut composer = DashboardComposer::new(&defaults, SvgRenderer::new());
    let page = CheatSheet::compose(&mut composer, config.template.clone())?;

    match args.command {
        Command::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            server::serve(&page, &config.server).await?;
        }
        Command::Export { output, format } => export(&page, &output, format)?,
    }
    Ok(())
}

fn export(page: &PageLayout, output: &Path, format: ExportFormat) -> Result<(), Box<dyn Error>> {
    let document = match format {
        ExportFormat::Html => render_page_html(page, &HtmlOptions::generated_now())?,
        ExportFormat::Json => page.to_json_pretty()?,
    };
    if let Some(parent) = output.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(output, &document)?;
    info!(
        path = %output.display(),
        format = ?format,
        bytes = document.len(),
        plots = page.plot_count(),
        "exported cheat sheet"
    );
    Ok(())
}
