use crate::error::{Error, Result};
use log::debug;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Classpath resolution scope.
///
/// Built once per run from an ordered list of classpath entries (runtime
/// entries followed by compile-time entries), each a directory containing
/// source trees laid out in package directories. The scope is read-only
/// after construction and performs no caching across invocations: every
/// lookup walks the relevant package directories and parses the source
/// files it finds there.
///
/// A fully-qualified name like `com.example.PetResource` resolves to the
/// top-level type `PetResource` declared by any `.rs` file directly inside
/// `<root>/com/example/`, with earlier roots taking precedence.
///
/// # Example
///
/// ```no_run
/// use swagger_from_classpath::classpath::ClasspathScope;
/// use std::path::PathBuf;
///
/// let scope = ClasspathScope::build(&[PathBuf::from("./target/classes")]).unwrap();
/// let handle = scope.load_class("com.example.PetResource").unwrap();
/// println!("resolved {}", handle.qualified_name());
/// ```
pub struct ClasspathScope {
    roots: Vec<PathBuf>,
}

/// An opaque, resolved reference to a declared type.
///
/// Equality, ordering, and hashing are determined by the fully-qualified
/// name alone, so a set of handles deduplicates a type reachable through
/// several classpath roots or reference styles.
#[derive(Debug, Clone)]
pub struct TypeHandle {
    qualified_name: String,
    source: PathBuf,
    kind: TypeKind,
}

/// Category of a resolved type declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Struct,
    Enum,
    Trait,
}

impl TypeHandle {
    /// The dotted fully-qualified name, e.g. `com.example.PetResource`
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// The type name without its package prefix
    pub fn simple_name(&self) -> &str {
        match self.qualified_name.rsplit_once('.') {
            Some((_, simple)) => simple,
            None => &self.qualified_name,
        }
    }

    /// The source file the type was resolved from
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// The declaration kind of the resolved type
    pub fn kind(&self) -> TypeKind {
        self.kind
    }
}

impl PartialEq for TypeHandle {
    fn eq(&self, other: &Self) -> bool {
        self.qualified_name == other.qualified_name
    }
}

impl Eq for TypeHandle {}

impl PartialOrd for TypeHandle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeHandle {
    fn cmp(&self, other: &Self) -> Ordering {
        self.qualified_name.cmp(&other.qualified_name)
    }
}

impl Hash for TypeHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.qualified_name.hash(state);
    }
}

/// Failure to read or parse a single source file
enum SourceError {
    Io(std::io::Error),
    Syntax(syn::Error),
}

impl SourceError {
    fn message(&self) -> String {
        match self {
            SourceError::Io(e) => e.to_string(),
            SourceError::Syntax(e) => e.to_string(),
        }
    }
}

impl ClasspathScope {
    /// Builds a resolution scope from the given classpath entries.
    ///
    /// # Errors
    ///
    /// Fails fast with [`Error::InvalidClasspathEntry`] naming the first
    /// entry that does not exist or is not a directory.
    pub fn build(entries: &[PathBuf]) -> Result<Self> {
        debug!("Building classpath scope from {} entries", entries.len());

        for entry in entries {
            if !entry.exists() {
                return Err(Error::InvalidClasspathEntry {
                    entry: entry.clone(),
                    reason: "path does not exist".to_string(),
                });
            }
            if !entry.is_dir() {
                return Err(Error::InvalidClasspathEntry {
                    entry: entry.clone(),
                    reason: "not a directory".to_string(),
                });
            }
        }

        Ok(Self {
            roots: entries.to_vec(),
        })
    }

    /// Resolves a single type by its fully-qualified name.
    ///
    /// Roots are searched in classpath order and the first declaration wins.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClassResolution`] if no root declares the type or a
    /// candidate source file in the type's package is malformed.
    pub fn load_class(&self, qualified_name: &str) -> Result<TypeHandle> {
        debug!("Resolving class '{}'", qualified_name);

        let (package, simple_name) = match qualified_name.rsplit_once('.') {
            Some((package, simple)) => (package, simple),
            None => ("", qualified_name),
        };

        for root in &self.roots {
            let dir = package_dir(root, package);
            if !dir.is_dir() {
                continue;
            }

            for file in source_files(&dir) {
                let syntax_tree = parse_source(&file).map_err(|e| Error::ClassResolution {
                    name: qualified_name.to_string(),
                    reason: format!("malformed source file {}: {}", file.display(), e.message()),
                })?;

                if let Some(kind) = declared_type(&syntax_tree, simple_name) {
                    debug!("Resolved '{}' in {}", qualified_name, file.display());
                    return Ok(TypeHandle {
                        qualified_name: qualified_name.to_string(),
                        source: file,
                        kind,
                    });
                }
            }
        }

        Err(Error::ClassResolution {
            name: qualified_name.to_string(),
            reason: "not found on the classpath".to_string(),
        })
    }

    /// Enumerates all top-level types declared directly in a package.
    ///
    /// Results are merged across all roots and deduplicated by qualified
    /// name, the first root winning. A package that does not exist or
    /// declares nothing yields an empty set, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PackageScanIo`] if the package directory cannot be
    /// enumerated, or [`Error::ClassResolution`] if a source file in the
    /// package is malformed.
    pub fn top_level_types(&self, package: &str) -> Result<BTreeSet<TypeHandle>> {
        debug!("Scanning package '{}'", package);

        let mut types = BTreeSet::new();

        for root in &self.roots {
            let dir = package_dir(root, package);
            if !dir.is_dir() {
                continue;
            }

            for file in source_files_checked(&dir, package)? {
                let syntax_tree = parse_source(&file).map_err(|e| match e {
                    SourceError::Io(source) => Error::PackageScanIo {
                        package: package.to_string(),
                        source,
                    },
                    SourceError::Syntax(err) => Error::ClassResolution {
                        name: qualified_name(package, &file_stem(&file)),
                        reason: format!(
                            "malformed source file {}: {}",
                            file.display(),
                            err
                        ),
                    },
                })?;

                for (name, kind) in declared_types(&syntax_tree) {
                    types.insert(TypeHandle {
                        qualified_name: qualified_name(package, &name),
                        source: file.clone(),
                        kind,
                    });
                }
            }
        }

        debug!("Package '{}' declares {} types", package, types.len());
        Ok(types)
    }
}

/// Maps a dotted package name onto a directory under the given root
fn package_dir(root: &Path, package: &str) -> PathBuf {
    if package.is_empty() {
        return root.to_path_buf();
    }
    let mut dir = root.to_path_buf();
    for segment in package.split('.') {
        dir.push(segment);
    }
    dir
}

fn qualified_name(package: &str, simple_name: &str) -> String {
    if package.is_empty() {
        simple_name.to_string()
    } else {
        format!("{}.{}", package, simple_name)
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Lists the `.rs` files directly inside a package directory, sorted by
/// file name so that resolution is deterministic for identical inputs.
/// Inaccessible entries are skipped silently.
fn source_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("rs"))
        .collect()
}

/// Like [`source_files`] but surfaces enumeration failures as
/// [`Error::PackageScanIo`]
fn source_files_checked(dir: &Path, package: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| Error::PackageScanIo {
            package: package.to_string(),
            source: e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("directory walk failed")),
        })?;

        let path = entry.into_path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("rs") {
            files.push(path);
        }
    }

    Ok(files)
}

fn parse_source(path: &Path) -> std::result::Result<syn::File, SourceError> {
    let content = std::fs::read_to_string(path).map_err(SourceError::Io)?;
    syn::parse_file(&content).map_err(SourceError::Syntax)
}

/// Checks whether the syntax tree declares a top-level type with the given
/// name, returning its kind
fn declared_type(syntax_tree: &syn::File, name: &str) -> Option<TypeKind> {
    declared_types(syntax_tree)
        .into_iter()
        .find(|(declared, _)| declared == name)
        .map(|(_, kind)| kind)
}

/// Collects the top-level type declarations (structs, enums, traits) of a
/// parsed source file in declaration order
fn declared_types(syntax_tree: &syn::File) -> Vec<(String, TypeKind)> {
    syntax_tree
        .items
        .iter()
        .filter_map(|item| match item {
            syn::Item::Struct(item_struct) => {
                Some((item_struct.ident.to_string(), TypeKind::Struct))
            }
            syn::Item::Enum(item_enum) => Some((item_enum.ident.to_string(), TypeKind::Enum)),
            syn::Item::Trait(item_trait) => Some((item_trait.ident.to_string(), TypeKind::Trait)),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Helper to lay out a package tree under a temporary root
    fn create_root(files: Vec<(&str, &str)>) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        for (path, content) in files {
            let file_path = temp_dir.path().join(path);
            if let Some(parent) = file_path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&file_path, content).unwrap();
        }
        temp_dir
    }

    #[test]
    fn test_build_rejects_missing_entry() {
        let result = ClasspathScope::build(&[PathBuf::from("/nonexistent/classes")]);

        match result {
            Err(Error::InvalidClasspathEntry { entry, .. }) => {
                assert_eq!(entry, PathBuf::from("/nonexistent/classes"));
            }
            other => panic!("expected InvalidClasspathEntry, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_build_rejects_file_entry() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("classes.jar");
        fs::write(&file, "not a directory").unwrap();

        let result = ClasspathScope::build(&[file.clone()]);

        match result {
            Err(Error::InvalidClasspathEntry { entry, reason }) => {
                assert_eq!(entry, file);
                assert!(reason.contains("not a directory"));
            }
            other => panic!("expected InvalidClasspathEntry, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_load_class_by_qualified_name() {
        let root = create_root(vec![(
            "com/example/resources.rs",
            "pub struct PetResource { pub id: u32 }",
        )]);
        let scope = ClasspathScope::build(&[root.path().to_path_buf()]).unwrap();

        let handle = scope.load_class("com.example.PetResource").unwrap();

        assert_eq!(handle.qualified_name(), "com.example.PetResource");
        assert_eq!(handle.simple_name(), "PetResource");
        assert_eq!(handle.kind(), TypeKind::Struct);
        assert!(handle.source().ends_with("com/example/resources.rs"));
    }

    #[test]
    fn test_load_class_without_package() {
        let root = create_root(vec![("api.rs", "pub trait RootResource {}")]);
        let scope = ClasspathScope::build(&[root.path().to_path_buf()]).unwrap();

        let handle = scope.load_class("RootResource").unwrap();

        assert_eq!(handle.qualified_name(), "RootResource");
        assert_eq!(handle.kind(), TypeKind::Trait);
    }

    #[test]
    fn test_load_class_missing_is_error() {
        let root = create_root(vec![("com/example/resources.rs", "pub struct Other;")]);
        let scope = ClasspathScope::build(&[root.path().to_path_buf()]).unwrap();

        let result = scope.load_class("com.example.Missing");

        match result {
            Err(Error::ClassResolution { name, reason }) => {
                assert_eq!(name, "com.example.Missing");
                assert!(reason.contains("not found"));
            }
            other => panic!("expected ClassResolution, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_load_class_malformed_source_is_error() {
        let root = create_root(vec![(
            "com/example/broken.rs",
            "pub struct Broken { missing",
        )]);
        let scope = ClasspathScope::build(&[root.path().to_path_buf()]).unwrap();

        let result = scope.load_class("com.example.Broken");

        match result {
            Err(Error::ClassResolution { name, reason }) => {
                assert_eq!(name, "com.example.Broken");
                assert!(reason.contains("malformed source file"));
            }
            other => panic!("expected ClassResolution, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_load_class_earlier_root_wins() {
        let runtime = create_root(vec![(
            "com/example/api.rs",
            "pub struct PetResource;",
        )]);
        let compile = create_root(vec![(
            "com/example/api.rs",
            "pub enum PetResource { A }",
        )]);
        let scope = ClasspathScope::build(&[
            runtime.path().to_path_buf(),
            compile.path().to_path_buf(),
        ])
        .unwrap();

        let handle = scope.load_class("com.example.PetResource").unwrap();

        assert_eq!(handle.kind(), TypeKind::Struct);
        assert!(handle.source().starts_with(runtime.path()));
    }

    #[test]
    fn test_top_level_types_lists_package_declarations() {
        let root = create_root(vec![
            (
                "com/example/pets.rs",
                "pub struct PetResource;\npub enum PetKind { Cat, Dog }",
            ),
            ("com/example/store.rs", "pub trait StoreResource {}"),
            ("com/example/nested/inner.rs", "pub struct NotDirect;"),
        ]);
        let scope = ClasspathScope::build(&[root.path().to_path_buf()]).unwrap();

        let types = scope.top_level_types("com.example").unwrap();

        let names: Vec<&str> = types.iter().map(TypeHandle::qualified_name).collect();
        assert_eq!(
            names,
            vec![
                "com.example.PetKind",
                "com.example.PetResource",
                "com.example.StoreResource"
            ]
        );
    }

    #[test]
    fn test_top_level_types_missing_package_is_empty() {
        let root = create_root(vec![("com/example/pets.rs", "pub struct PetResource;")]);
        let scope = ClasspathScope::build(&[root.path().to_path_buf()]).unwrap();

        let types = scope.top_level_types("com.nothing.here").unwrap();

        assert!(types.is_empty());
    }

    #[test]
    fn test_top_level_types_ignores_non_type_items() {
        let root = create_root(vec![(
            "com/example/mixed.rs",
            "pub fn handler() {}\npub const X: u32 = 1;\npub struct Resource;",
        )]);
        let scope = ClasspathScope::build(&[root.path().to_path_buf()]).unwrap();

        let types = scope.top_level_types("com.example").unwrap();

        assert_eq!(types.len(), 1);
        assert_eq!(
            types.iter().next().unwrap().qualified_name(),
            "com.example.Resource"
        );
    }

    #[test]
    fn test_top_level_types_merges_roots_and_dedupes() {
        let runtime = create_root(vec![(
            "com/example/a.rs",
            "pub struct Shared;\npub struct OnlyRuntime;",
        )]);
        let compile = create_root(vec![(
            "com/example/b.rs",
            "pub struct Shared;\npub struct OnlyCompile;",
        )]);
        let scope = ClasspathScope::build(&[
            runtime.path().to_path_buf(),
            compile.path().to_path_buf(),
        ])
        .unwrap();

        let types = scope.top_level_types("com.example").unwrap();

        let names: Vec<&str> = types.iter().map(TypeHandle::qualified_name).collect();
        assert_eq!(
            names,
            vec![
                "com.example.OnlyCompile",
                "com.example.OnlyRuntime",
                "com.example.Shared"
            ]
        );

        // The duplicate resolved through the first root
        let shared = types
            .iter()
            .find(|h| h.simple_name() == "Shared")
            .unwrap();
        assert!(shared.source().starts_with(runtime.path()));
    }

    #[test]
    fn test_top_level_types_malformed_file_is_error() {
        let root = create_root(vec![("com/example/bad.rs", "struct {")]);
        let scope = ClasspathScope::build(&[root.path().to_path_buf()]).unwrap();

        let result = scope.top_level_types("com.example");

        match result {
            Err(Error::ClassResolution { reason, .. }) => {
                assert!(reason.contains("malformed source file"));
            }
            other => panic!("expected ClassResolution, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_type_handle_equality_by_name_only() {
        let a = TypeHandle {
            qualified_name: "com.example.Pet".to_string(),
            source: PathBuf::from("/a/com/example/x.rs"),
            kind: TypeKind::Struct,
        };
        let b = TypeHandle {
            qualified_name: "com.example.Pet".to_string(),
            source: PathBuf::from("/b/com/example/y.rs"),
            kind: TypeKind::Enum,
        };

        assert_eq!(a, b);

        let mut set = BTreeSet::new();
        set.insert(a);
        set.insert(b);
        assert_eq!(set.len(), 1);
    }
}
