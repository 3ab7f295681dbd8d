use crate::error::Error;
use crate::swagger_builder;
use anyhow::{Context, Result};
use clap::ValueEnum;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Generator configuration, loaded once per run from a YAML file.
///
/// The fields mirror the document metadata the generator emits plus the
/// symbolic references it resolves against the classpath. Everything is
/// optional except where a default is given; absent values are omitted from
/// the generated document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Metadata about the API (title, version, contact, license, ...)
    pub info: Option<Info>,
    /// The host (name or ip) serving the API, optionally with a port.
    /// Host only, no scheme and no sub-paths.
    pub host: Option<String>,
    /// The base path on which the API is served, relative to the host.
    /// Must start with a leading slash.
    pub base_path: Option<String>,
    /// The transfer protocols of the API
    pub schemes: Option<Vec<Scheme>>,
    /// MIME types the APIs can consume, global to all APIs
    pub consumes: Option<Vec<String>>,
    /// MIME types the APIs can produce, global to all APIs
    pub produces: Option<Vec<String>>,
    /// Fully-qualified names of API source classes to resolve
    #[serde(default)]
    pub api_sources: Vec<String>,
    /// Package names whose top-level types are all API sources
    #[serde(default)]
    pub api_packages: Vec<String>,
    /// Output format of the generated file
    #[serde(default)]
    pub generated_format: FileFormat,
    /// Generated filename, defaulting by format when unset
    pub filename: Option<String>,
    /// Output directory for the generated file
    #[serde(default = "default_output_directory")]
    pub output_directory: PathBuf,
}

fn default_output_directory() -> PathBuf {
    PathBuf::from("target")
}

/// Metadata about the API, used by clients if needed
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Info {
    /// The title of the application
    pub title: Option<String>,
    /// A short description of the application
    pub description: Option<String>,
    /// The Terms of Service for the API
    pub terms_of_service: Option<String>,
    /// Contact information for the exposed API
    pub contact: Option<Contact>,
    /// License information for the exposed API
    pub license: Option<License>,
    /// Version of the application API (not the specification version)
    pub version: Option<String>,
}

/// Contact information for the exposed API.
///
/// No cross-field validation is performed; upstream specification
/// conformance is trusted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    /// Identifying name of the contact person/organization
    pub name: Option<String>,
    /// URL pointing to the contact information
    pub url: Option<String>,
    /// Email address of the contact person/organization
    pub email: Option<String>,
}

/// License information for the exposed API
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct License {
    /// License name used for the API
    pub name: Option<String>,
    /// URL to the license used for the API
    pub url: Option<String>,
}

/// Transfer protocol of the API.
///
/// Values outside this list are rejected when the configuration file is
/// deserialized, never silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Http,
    Https,
    Ws,
    Wss,
}

/// Generated file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(try_from = "String")]
pub enum FileFormat {
    /// YAML format
    #[default]
    Yaml,
    /// JSON format
    Json,
}

impl TryFrom<String> for FileFormat {
    type Error = Error;

    fn try_from(value: String) -> std::result::Result<Self, Error> {
        match value.to_ascii_lowercase().as_str() {
            "yaml" => Ok(FileFormat::Yaml),
            "json" => Ok(FileFormat::Json),
            _ => Err(Error::UnsupportedFormat(value)),
        }
    }
}

impl FileFormat {
    /// Default filename for this format, used when no override is configured
    pub fn default_filename(&self) -> &'static str {
        match self {
            FileFormat::Yaml => "swagger.yaml",
            FileFormat::Json => "swagger.json",
        }
    }
}

impl GeneratorConfig {
    /// Loads a configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not deserialize
    /// into a valid configuration (unknown keys, invalid scheme or format
    /// values).
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let config: GeneratorConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid configuration file: {}", path.display()))?;

        Ok(config)
    }
}

impl Info {
    /// Converts the configured metadata into the document's info block
    pub fn to_swagger_info(&self) -> swagger_builder::Info {
        swagger_builder::Info {
            title: self.title.clone(),
            description: self.description.clone(),
            terms_of_service: self.terms_of_service.clone(),
            contact: self.contact.as_ref().map(Contact::to_swagger_contact),
            license: self.license.as_ref().map(License::to_swagger_license),
            version: self.version.clone(),
        }
    }
}

impl Contact {
    /// Converts the configured contact into the document's contact object
    pub fn to_swagger_contact(&self) -> swagger_builder::Contact {
        swagger_builder::Contact {
            name: self.name.clone(),
            url: self.url.clone(),
            email: self.email.clone(),
        }
    }
}

impl License {
    /// Converts the configured license into the document's license object
    pub fn to_swagger_license(&self) -> swagger_builder::License {
        swagger_builder::License {
            name: self.name.clone(),
            url: self.url.clone(),
        }
    }
}

impl Scheme {
    /// Converts the configured scheme into the document's scheme value
    pub fn to_swagger_scheme(&self) -> swagger_builder::Scheme {
        match self {
            Scheme::Http => swagger_builder::Scheme::Http,
            Scheme::Https => swagger_builder::Scheme::Https,
            Scheme::Ws => swagger_builder::Scheme::Ws,
            Scheme::Wss => swagger_builder::Scheme::Wss,
        }
    }
}
