use crate::classpath::TypeHandle;
use crate::config::GeneratorConfig;
use crate::engine::ScanEngine;
use anyhow::Result;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// Swagger document builder.
///
/// Builds the base document straight from the configuration fields, then
/// either returns it as-is (no api classes) or hands it to the scanning
/// engine together with the resolved class set. The engine's output
/// replaces the document wholesale; no merging or post-processing happens
/// here.
pub struct SwaggerBuilder {
    document: SwaggerDocument,
}

/// Complete Swagger 2.0 document.
///
/// Maps are ordered so that serialization is reproducible for identical
/// inputs; absent optional fields are omitted from the output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwaggerDocument {
    /// Specification version, always `"2.0"`
    pub swagger: String,
    /// API metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<Info>,
    /// Host serving the API, name or ip, optionally with a port
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Base path on which the API is served, relative to the host
    #[serde(rename = "basePath", skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
    /// Transfer protocols of the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schemes: Option<Vec<Scheme>>,
    /// MIME types the APIs can consume
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumes: Option<Vec<String>>,
    /// MIME types the APIs can produce
    #[serde(skip_serializing_if = "Option::is_none")]
    pub produces: Option<Vec<String>>,
    /// Paths collection (URL path -> PathItem), populated by the engine
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub paths: BTreeMap<String, PathItem>,
    /// Data type definitions referenced from operations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definitions: Option<BTreeMap<String, Schema>>,
}

/// Swagger Info object
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Info {
    /// API title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// API description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Terms of Service for the API
    #[serde(rename = "termsOfService", skip_serializing_if = "Option::is_none")]
    pub terms_of_service: Option<String>,
    /// Contact information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    /// License information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
    /// API version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Swagger Contact object
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Swagger License object
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct License {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Transfer protocol value in the generated document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Http,
    Https,
    Ws,
    Wss,
}

/// Swagger PathItem object - all operations for a single path
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<Operation>,
}

/// Swagger Operation object - a single API operation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Operation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "operationId", skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub responses: BTreeMap<String, Response>,
}

/// Swagger Parameter object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name
    pub name: String,
    /// Parameter location (path, query, header, body)
    #[serde(rename = "in")]
    pub location: String,
    /// Whether the parameter is required
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}

/// Swagger Response object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    /// Response description
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}

/// Swagger Schema object, either inline or a `$ref` to a definition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
}

impl SwaggerBuilder {
    /// Builds the base document from the configuration fields: info block,
    /// host, base path, element-wise scheme conversion, and the media-type
    /// lists passed through verbatim.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        debug!("Building base swagger document from configuration");

        let document = SwaggerDocument {
            swagger: "2.0".to_string(),
            info: config.info.as_ref().map(|info| info.to_swagger_info()),
            host: config.host.clone(),
            base_path: config.base_path.clone(),
            schemes: config.schemes.as_ref().map(|schemes| {
                schemes
                    .iter()
                    .map(|scheme| scheme.to_swagger_scheme())
                    .collect()
            }),
            consumes: config.consumes.clone(),
            produces: config.produces.clone(),
            paths: BTreeMap::new(),
            definitions: None,
        };

        Self { document }
    }

    /// The base document as built so far
    pub fn base_document(&self) -> &SwaggerDocument {
        &self.document
    }

    /// Produces the final document.
    ///
    /// An empty class set means the base document is the final document and
    /// the engine is not invoked at all. Otherwise the engine's output
    /// replaces the base document entirely.
    ///
    /// # Errors
    ///
    /// Propagates whatever error the engine raises.
    pub fn finish(
        self,
        classes: &BTreeSet<TypeHandle>,
        engine: &dyn ScanEngine,
    ) -> Result<SwaggerDocument> {
        if classes.is_empty() {
            info!("No api classes defined.");
            return Ok(self.document);
        }

        info!("Parsing api classes ...");
        engine.scan(self.document, classes)
    }
}
