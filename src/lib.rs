//! Swagger generator - builds a Swagger 2.0 document from configuration and a classpath.
//!
//! This library turns a set of configuration values describing an API's metadata
//! (title, host, schemes, contact/license info) plus two symbolic reference lists
//! (fully-qualified class names and package names) into a serialized Swagger 2.0
//! document. References are resolved against a classpath of source-tree roots by
//! static analysis: package directories are enumerated and source files parsed to
//! produce loadable type handles, no runtime loading involved.
//!
//! # Architecture
//!
//! The library is organized into several modules that work together:
//!
//! 1. [`config`] - Configuration model and YAML config-file loading
//! 2. [`classpath`] - Classpath resolution scope and type handles
//! 3. [`api_classes`] - Resolves API references into a de-duplicated class set
//! 4. [`swagger_builder`] - Swagger 2.0 document model and base-document assembly
//! 5. [`engine`] - The scanning-engine boundary that populates paths/definitions
//! 6. [`serializer`] - Serializes the final document to YAML or JSON on disk
//!
//! # Example Usage
//!
//! ```no_run
//! use swagger_from_classpath::{
//!     api_classes::{collect_api_classes, ApiReference},
//!     classpath::ClasspathScope,
//!     config::GeneratorConfig,
//!     engine::PassthroughEngine,
//!     serializer::write_swagger_file,
//!     swagger_builder::SwaggerBuilder,
//! };
//! use std::path::{Path, PathBuf};
//!
//! // Load configuration and build the resolution scope
//! let config = GeneratorConfig::from_file(Path::new("swagger-gen.yaml")).unwrap();
//! let scope = ClasspathScope::build(&[PathBuf::from("./target/classes")]).unwrap();
//!
//! // Resolve the configured references into a class set
//! let references = ApiReference::ordered(&config.api_sources, &config.api_packages);
//! let classes = collect_api_classes(&scope, &references).unwrap();
//!
//! // Assemble and write the document
//! let document = SwaggerBuilder::from_config(&config)
//!     .finish(&classes, &PassthroughEngine)
//!     .unwrap();
//! let written = write_swagger_file(
//!     &document,
//!     &config.output_directory,
//!     config.filename.as_deref(),
//!     config.generated_format,
//! )
//! .unwrap();
//! println!("Generated {}", written.display());
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module which provides a complete CLI application.

pub mod api_classes;
pub mod classpath;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod serializer;
pub mod swagger_builder;
