// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `tabl`: explore the library triangles from the command line.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tabl::matrix::{self, Row};
use tabl::report::{self, num_to_anum, render_sequence, summarize, TraitDatabase};
use tabl::traits::{all_traits, TraitId};
use tabl::triangle::format_row;
use tabl::{library, Config, Triangle};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "tabl", version, about = "Integer triangles and their traits")]
struct Cli {
    /// JSON file overriding the default configuration.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the library triangles.
    List,
    /// Print the first rows of a triangle.
    Show {
        name: String,
        #[arg(long, default_value_t = 7)]
        rows: usize,
    },
    /// Print trait sequences of a triangle.
    Traits {
        name: String,
        /// Only this trait.
        #[arg(long = "trait")]
        trait_name: Option<String>,
        /// Rows or terms, instead of each trait's default.
        #[arg(long)]
        size: Option<usize>,
    },
    /// Print the inverse triangle.
    Inverse {
        name: String,
        #[arg(long, default_value_t = 7)]
        size: usize,
        /// Multiply back and compare with the identity.
        #[arg(long)]
        check: bool,
    },
    /// Full report: traits, identity and first rows.
    Inspect { name: String },
    /// Write all trait sequences as JSON.
    Export {
        output: PathBuf,
        /// Triangles to export; all of them if omitted.
        #[arg(long, num_args = 1..)]
        names: Vec<String>,
    },
    /// Summarize the cached trait database.
    Database {
        /// Where this A-number occurs, instead of the summary.
        #[arg(long)]
        anum: Option<u64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => Config::default(),
    };

    match cli.command {
        Commands::List => list(),
        Commands::Show { name, rows } => {
            print!("{}", library::get(&name)?.render(rows)?);
            Ok(())
        }
        Commands::Traits {
            name,
            trait_name,
            size,
        } => traits(library::get(&name)?, trait_name.as_deref(), size, &config),
        Commands::Inverse { name, size, check } => inverse(library::get(&name)?, size, check),
        Commands::Inspect { name } => {
            print!("{}", report::inspect(library::get(&name)?, &config)?);
            Ok(())
        }
        Commands::Export { output, names } => export(&names, &output),
        Commands::Database { anum } => database(&config, anum),
    }
}

fn list() -> Result<()> {
    for t in library::all() {
        let identity = t.identity();
        let inverse = if identity.inverse_id.is_empty() {
            "-"
        } else {
            identity.inverse_id.as_str()
        };
        println!(
            "{:<18} {:<40} inverse {}",
            identity.name,
            identity.similars.join(" "),
            inverse
        );
    }
    Ok(())
}

fn traits(
    t: &Triangle,
    trait_name: Option<&str>,
    size: Option<usize>,
    config: &Config,
) -> Result<()> {
    let selected: Vec<TraitId> = match trait_name {
        Some(name) => vec![TraitId::parse(name)?],
        None => all_traits().map(|info| info.id).collect(),
    };
    for id in selected {
        let info = id.info();
        let seq = id.evaluate_with(t, size.unwrap_or(info.size))?;
        println!("{:<14} {}", id.name(), info.formula);
        println!("    {}", render_sequence(&seq, &config.render));
    }
    Ok(())
}

fn inverse(t: &Triangle, size: usize, check: bool) -> Result<()> {
    let inverse: Vec<Row> = match t.invert(size)? {
        Some(inverse) => inverse,
        None => bail!("{} has no integral inverse", t.name()),
    };
    for (n, row) in inverse.iter().enumerate() {
        println!("[{}] {}", n, format_row(row));
    }
    if check {
        let product = matrix::multiply(&t.as_matrix(size)?, &matrix::pad_square(&inverse, size));
        if product != matrix::identity(size) {
            bail!("{}: matrix times inverse is not the identity", t.name());
        }
        info!("[{}] inverse verified for {} rows", t.name(), size);
    }
    Ok(())
}

fn export(names: &[String], output: &Path) -> Result<()> {
    let triangles: Vec<&Triangle> = if names.is_empty() {
        library::all().iter().collect()
    } else {
        names
            .iter()
            .map(|name| library::get(name))
            .collect::<Result<_, _>>()?
    };
    let count = report::export_sequences(&triangles, output)
        .with_context(|| format!("writing {}", output.display()))?;
    info!("wrote {} sequences to {}", count, output.display());
    Ok(())
}

fn database(config: &Config, anum: Option<u64>) -> Result<()> {
    let db = TraitDatabase::load(&config.database_path)
        .with_context(|| format!("reading {}", config.database_path.display()))?;
    if let Some(anum) = anum {
        println!("{}: {}", num_to_anum(anum), db.anum_occurrences(anum).join(" "));
        return Ok(());
    }
    for (table, dict) in db.tables() {
        let summary = summarize(dict);
        println!(
            "{:<18} distinct {:>3}  hits {:>3}  misses {:>3}",
            table, summary.distinct, summary.hits, summary.misses
        );
    }
    Ok(())
}
