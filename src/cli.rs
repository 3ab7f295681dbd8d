use crate::config::FileFormat;
use anyhow::Result;
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

/// Swagger generator - builds a Swagger 2.0 document from API metadata and a classpath of source trees
#[derive(Parser, Debug)]
#[command(name = "swagger-from-classpath")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to the YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config_path: PathBuf,

    /// Classpath entry (a directory of source trees); repeat in classpath
    /// order, runtime entries before compile entries
    #[arg(short = 'c', long = "classpath", value_name = "DIR")]
    pub classpath: Vec<PathBuf>,

    /// Override the configured output format
    #[arg(short = 'f', long = "format", value_enum)]
    pub format: Option<FileFormat>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Parse command line arguments
pub fn parse_args() -> Result<CliArgs> {
    let args = CliArgs::parse();
    parse_args_from_parsed(args)
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    if !args.config_path.exists() {
        anyhow::bail!(
            "Configuration file does not exist: {}",
            args.config_path.display()
        );
    }

    info!("Configuration file: {}", args.config_path.display());
    info!("Classpath entries: {}", args.classpath.len());
    if let Some(format) = args.format {
        info!("Output format override: {:?}", format);
    }

    Ok(args)
}

/// Run the main workflow.
///
/// The stages run strictly in sequence - load configuration, resolve the
/// api classes, assemble the document, write the file - and the first
/// error aborts everything that follows.
pub fn run(args: CliArgs) -> Result<()> {
    use crate::api_classes::{collect_api_classes, ApiReference};
    use crate::classpath::ClasspathScope;
    use crate::config::GeneratorConfig;
    use crate::engine::PassthroughEngine;
    use crate::serializer::write_swagger_file;
    use crate::swagger_builder::SwaggerBuilder;

    // Step 1: Load configuration
    let mut config = GeneratorConfig::from_file(&args.config_path)?;
    if let Some(format) = args.format {
        config.generated_format = format;
    }

    // Step 2: Resolve api classes
    info!("Reading api classes ...");
    let scope = ClasspathScope::build(&args.classpath)?;
    let references = ApiReference::ordered(&config.api_sources, &config.api_packages);
    let classes = collect_api_classes(&scope, &references)?;

    // Step 3: Assemble the document
    let builder = SwaggerBuilder::from_config(&config);
    let document = builder.finish(&classes, &PassthroughEngine)?;

    // Step 4: Write the file
    info!("Creating swagger file ...");
    let written = write_swagger_file(
        &document,
        &config.output_directory,
        config.filename.as_deref(),
        config.generated_format,
    )?;

    info!("Swagger file creation successful.");
    info!("Generated {}", written.display());

    Ok(())
}
