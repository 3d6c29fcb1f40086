use anyhow::{bail, Context, Result};
use clap::Parser;
use keyidx::source::DocumentList;
use keyidx::{IndexBuilder, NoiseWords};
use server::build_app;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// File listing the document files to index
    #[arg(long, conflicts_with = "dir", required_unless_present = "dir")]
    docs: Option<PathBuf>,
    /// Directory whose .txt files are indexed
    #[arg(long)]
    dir: Option<PathBuf>,
    /// Noise-word file; the built-in English list is used when omitted
    #[arg(long)]
    noise: Option<PathBuf>,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let noise = match &args.noise {
        Some(path) => NoiseWords::from_file(path)?,
        None => NoiseWords::default_english(),
    };
    let list = match (&args.docs, &args.dir) {
        (Some(file), _) => DocumentList::from_file(file)?,
        (None, Some(dir)) => DocumentList::from_dir(dir)?,
        (None, None) => bail!("either --docs or --dir is required"),
    };
    // the index is frozen before the listener accepts anything
    let index = IndexBuilder::build(noise, list.documents()).context("index build failed")?;
    let app = build_app(index);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
