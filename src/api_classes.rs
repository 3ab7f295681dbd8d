use crate::classpath::{ClasspathScope, TypeHandle};
use crate::error::Result;
use log::{debug, info};
use std::collections::BTreeSet;

/// A symbolic reference to API source code.
///
/// Explicit references resolve to exactly one type handle and fail the run
/// when missing; package scans resolve to zero or more handles and an empty
/// result is informational, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiReference {
    /// A single type, by fully-qualified name
    ExplicitClass(String),
    /// Every top-level type declared directly in a package
    PackageScan(String),
}

impl ApiReference {
    /// Orders the configured reference lists the way the run consumes them:
    /// explicit classes first, then package scans, each in declaration order.
    pub fn ordered(api_sources: &[String], api_packages: &[String]) -> Vec<ApiReference> {
        api_sources
            .iter()
            .cloned()
            .map(ApiReference::ExplicitClass)
            .chain(
                api_packages
                    .iter()
                    .cloned()
                    .map(ApiReference::PackageScan),
            )
            .collect()
    }
}

/// Resolves the configured API references into a single de-duplicated set
/// of type handles.
///
/// Each successfully resolved handle is logged before insertion. The set
/// orders handles by qualified name, which keeps the build deterministic
/// for identical inputs; downstream consumers must tolerate any order.
///
/// # Errors
///
/// The first resolution failure aborts the whole run with the originating
/// error; no partial set is returned.
pub fn collect_api_classes(
    scope: &ClasspathScope,
    references: &[ApiReference],
) -> Result<BTreeSet<TypeHandle>> {
    debug!("Collecting api classes from {} references", references.len());

    let mut classes = BTreeSet::new();

    for reference in references {
        match reference {
            ApiReference::ExplicitClass(name) => {
                let handle = scope.load_class(name)?;
                info!("-> Found '{}'", handle.qualified_name());
                classes.insert(handle);
            }
            ApiReference::PackageScan(package) => {
                let found = scope.top_level_types(package)?;
                if found.is_empty() {
                    info!("No types found in package '{}'", package);
                }
                for handle in found {
                    info!(
                        "-> Found '{}' in package {}",
                        handle.simple_name(),
                        package
                    );
                    classes.insert(handle);
                }
            }
        }
    }

    debug!("Collected {} api classes", classes.len());
    Ok(classes)
}
