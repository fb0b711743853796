//! ldp-project: print the RDF projection of resources in a repository snapshot

use anyhow::Context;
use clap::Parser;
use ldp_projection::{Projection, ProjectionConfig, RepositorySnapshot, ResourceId};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "ldp-project", version, about = "Project repository resources to RDF")]
struct Cli {
    /// Repository snapshot (YAML or JSON)
    #[arg(long)]
    snapshot: PathBuf,

    /// Projection config (YAML or JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured base URI
    #[arg(long)]
    base_uri: Option<String>,

    /// Resource paths to project
    #[arg(required = true)]
    paths: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => ProjectionConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ProjectionConfig::default(),
    };
    if let Some(base_uri) = cli.base_uri {
        config.base_uri = base_uri;
    }
    config.validate()?;

    let store = RepositorySnapshot::load(&cli.snapshot)
        .with_context(|| format!("loading snapshot {}", cli.snapshot.display()))?
        .into_store()?;
    let translator = config.translator()?;
    let projection = Projection::new(&store, &config);
    info!(
        "Projecting {} resources under {} with contexts {:?}",
        cli.paths.len(),
        config.base_uri,
        projection.context_names()
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for path in &cli.paths {
        let id = ResourceId::new(path.as_str())?;
        for triple in projection.project(&id, &translator) {
            let triple = triple.with_context(|| format!("projecting {}", id))?;
            writeln!(out, "{}", triple)?;
        }
    }
    out.flush()?;
    Ok(())
}
