// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use thiserror::Error;

use knot_catalog::catalog::{CatalogExport, CatalogState, ExportError};
use knot_catalog::generator::knot_candidate;
use knot_catalog::geometry::{all_sectors, index_edges, Knot};
use knot_catalog::simplify::simplification_trace;
use knot_catalog::survey::{self, check_crossings, ConfigError, SeedRange, SurveyConfig};
use knot_catalog::symmetry::{all_equivalent, canonicalize, check_symmetry};
use knot_catalog::validation::{check_all, check_structure, geometric_violations, KnotFailure};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("{knot} is not a knot vector: {source}")]
    Malformed {
        knot: Knot,
        #[source]
        source: KnotFailure,
    },
}

#[derive(Parser)]
#[command(
    name = "knots",
    about = "Enumerate, simplify and catalog alternating knot vectors",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate candidates and add the distinct knots to a catalog
    Survey {
        /// Path to a TOML survey config
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Target crossing count
        #[arg(short = 'n', long)]
        crossings: Option<usize>,
        /// First seed (inclusive)
        #[arg(long)]
        from: Option<u64>,
        /// Last seed (exclusive)
        #[arg(long)]
        to: Option<u64>,
        /// Walk every candidate instead of drawing seeds
        #[arg(long)]
        exhaustive: bool,
        /// Prepare candidates on a single thread
        #[arg(long)]
        serial: bool,
        /// Catalog JSON to resume from
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Write the resulting catalog JSON here
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a knot vector, e.g. "1,-2,3,-1,2,-3"
    Check {
        #[arg(allow_hyphen_values = true)]
        knot: Knot,
    },
    /// Print the canonical form of a knot vector
    Canonical {
        #[arg(allow_hyphen_values = true)]
        knot: Knot,
    },
    /// Print every canonical vector equivalent to a knot vector
    Equivalents {
        #[arg(allow_hyphen_values = true)]
        knot: Knot,
    },
    /// Print the sectors traced from a knot vector and any inconsistent edges
    Sectors {
        #[arg(allow_hyphen_values = true)]
        knot: Knot,
    },
    /// Remove twists, printing every step
    Simplify {
        #[arg(allow_hyphen_values = true)]
        knot: Knot,
    },
    /// Print the candidate vector drawn from a seed
    Candidate {
        #[arg(short, long)]
        seed: u64,
        /// Target crossing count
        #[arg(short = 'n', long)]
        crossings: usize,
    },
}

pub fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Survey {
            config,
            crossings,
            from,
            to,
            exhaustive,
            serial,
            catalog,
            output,
        } => {
            let mut config = match config {
                Some(path) => SurveyConfig::load(path)?,
                None => SurveyConfig::default(),
            };

            // Apply CLI overrides.
            if let Some(n) = crossings {
                config.crossings = n;
            }
            let start = from.unwrap_or(config.seeds.start);
            let end = to.unwrap_or(config.seeds.end);
            config.seeds = SeedRange::new(start, end);
            if exhaustive {
                config.exhaustive = true;
            }
            if serial {
                config.parallel = false;
            }
            if catalog.is_some() {
                config.catalog = catalog;
            }
            if output.is_some() {
                config.output = output;
            }
            config.validate()?;

            let state = match &config.catalog {
                Some(path) => CatalogState::from(CatalogExport::load(path)?),
                None => CatalogState::new(),
            };
            let (state, report) = survey::run(&config, state);

            println!(
                "considered {} candidates, {} new",
                report.considered,
                report.added.len()
            );
            for (n, bucket) in state.catalog().buckets() {
                println!("{} crossings: {} knots", n, bucket.len());
                for knot in bucket {
                    println!("  {}", knot);
                }
            }
            println!("stats: {}", state.stats());

            if let Some(path) = &config.output {
                state.export().save(path)?;
                tracing::info!(path = %path.display(), "catalog written");
            }
        }
        Command::Check { knot } => match check_all(&knot) {
            Ok(()) => println!("valid"),
            Err(failure) => println!("{}: {}", failure.kind(), failure),
        },
        Command::Canonical { knot } => {
            well_formed(&knot)?;
            println!("{}", canonicalize(&knot));
        }
        Command::Equivalents { knot } => {
            well_formed(&knot)?;
            println!("{:?}", check_symmetry(&knot));
            for member in all_equivalent(&knot) {
                println!("{}", member);
            }
        }
        Command::Sectors { knot } => {
            well_formed(&knot)?;
            let index = index_edges(&knot);
            for sector in all_sectors(&index) {
                println!("{}", sector);
            }
            for edge in geometric_violations(&index) {
                println!("inconsistent {}", edge);
            }
        }
        Command::Simplify { knot } => {
            well_formed(&knot)?;
            for step in simplification_trace(&knot) {
                println!("{}", step);
            }
        }
        Command::Candidate { seed, crossings } => {
            check_crossings(crossings)?;
            println!("{}", knot_candidate(seed, crossings));
        }
    }
    Ok(())
}

fn well_formed(knot: &Knot) -> Result<(), CliError> {
    check_structure(knot).map_err(|source| CliError::Malformed {
        knot: knot.clone(),
        source,
    })
}
