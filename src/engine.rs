use crate::classpath::TypeHandle;
use crate::swagger_builder::SwaggerDocument;
use anyhow::Result;
use log::debug;
use std::collections::BTreeSet;

/// Boundary to the annotation-scanning engine.
///
/// An engine takes the base document plus the resolved class set and
/// returns a fully populated document (paths, definitions, ...). It is
/// treated as a black box: the generator never merges or post-processes
/// its output, and the engine must tolerate receiving the handles in any
/// order. The class set handed in is never empty; an empty resolved set
/// skips the engine entirely.
pub trait ScanEngine {
    /// Populates the document from the given api classes.
    ///
    /// # Errors
    ///
    /// Engines raise their own errors; any error aborts the run.
    fn scan(
        &self,
        base: SwaggerDocument,
        classes: &BTreeSet<TypeHandle>,
    ) -> Result<SwaggerDocument>;
}

/// Engine that returns the base document unchanged.
///
/// Stands in where no annotation-processing engine is wired up: the
/// resolved classes are still validated and logged, but path and
/// definition discovery is left to external tooling. The binary uses this
/// engine by default.
pub struct PassthroughEngine;

impl ScanEngine for PassthroughEngine {
    fn scan(
        &self,
        base: SwaggerDocument,
        classes: &BTreeSet<TypeHandle>,
    ) -> Result<SwaggerDocument> {
        for class in classes {
            debug!(
                "Skipping annotation scan for '{}' (no engine configured)",
                class.qualified_name()
            );
        }
        Ok(base)
    }
}
