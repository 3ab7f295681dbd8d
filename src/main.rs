//! Swagger generator - command-line tool for generating a Swagger 2.0 document.
//!
//! This binary reads a YAML configuration file describing an API's metadata and
//! resolves the configured api classes against a classpath of source-tree
//! directories, then writes the resulting document as YAML or JSON.
//!
//! # Usage
//!
//! ```bash
//! swagger-from-classpath [OPTIONS] <CONFIG>
//! ```
//!
//! # Examples
//!
//! Generate from a configuration with two classpath roots:
//! ```bash
//! swagger-from-classpath swagger-gen.yaml -c target/classes -c deps/classes
//! ```
//!
//! Override the configured format:
//! ```bash
//! swagger-from-classpath swagger-gen.yaml -c target/classes -f json
//! ```
//!
//! Enable verbose logging:
//! ```bash
//! swagger-from-classpath swagger-gen.yaml -c target/classes -v
//! ```

mod api_classes;
mod classpath;
mod cli;
mod config;
mod engine;
mod error;
mod serializer;
mod swagger_builder;

use anyhow::Result;
use clap::Parser;
use log::info;

fn main() -> Result<()> {
    // Parse once to read the verbose flag, then validate after logger init
    let args_for_verbose = cli::CliArgs::parse();

    let log_level = if args_for_verbose.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    info!("Swagger generator starting...");

    let args = cli::parse_args_from_parsed(args_for_verbose)?;

    cli::run(args)?;

    info!("Swagger document generation completed successfully");

    Ok(())
}
