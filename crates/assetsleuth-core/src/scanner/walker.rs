//! Sequential asset-tree walker built on `jwalk`.
//!
//! `jwalk` runs in serial mode with sorted directory reads so that two walks
//! over an unchanged tree yield files in the same order. Hidden directories
//! are dropped inside `process_read_dir`, before `jwalk` queues them for
//! reading, so their subtrees are never visited at all.
use crate::error::AssetError;
use crate::config::{DEFAULT_HIDDEN_PREFIX, DEFAULT_SIDECAR_SUFFIX};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

type EntryIter = Box<dyn Iterator<Item = Result<jwalk::DirEntry<((), ())>, jwalk::Error>>>;

/// Name-based filters applied during the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkRules {
    /// File names ending with this suffix are excluded. Case-sensitive.
    pub sidecar_suffix: String,
    /// Directories whose name starts with this prefix are not descended.
    pub hidden_prefix: String,
}

impl Default for WalkRules {
    fn default() -> Self {
        Self {
            sidecar_suffix: DEFAULT_SIDECAR_SUFFIX.to_string(),
            hidden_prefix: DEFAULT_HIDDEN_PREFIX.to_string(),
        }
    }
}

impl WalkRules {
    pub fn is_sidecar(&self, file_name: &str) -> bool {
        !self.sidecar_suffix.is_empty() && file_name.ends_with(&self.sidecar_suffix)
    }

    pub fn is_hidden_dir(&self, dir_name: &str) -> bool {
        !self.hidden_prefix.is_empty() && dir_name.starts_with(&self.hidden_prefix)
    }
}

/// A candidate file produced by the walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    pub path: PathBuf,
    pub name: String,
}

/// Lazy, finite sequence of the files under one root.
///
/// Yields `Err` for entries that could not be read. Those are
/// [recoverable](AssetError::is_recoverable) except when the root itself
/// fails, after which the walker is exhausted.
pub struct AssetWalker {
    root: PathBuf,
    rules: WalkRules,
    entries: Option<EntryIter>,
    root_missing: bool,
    sidecars_excluded: u64,
}

impl AssetWalker {
    /// Prepare a walk of `root`.
    ///
    /// A missing root is not an error: a warning is logged and the walker
    /// yields nothing. A root that exists but cannot be listed is fatal.
    pub fn new(root: impl Into<PathBuf>, rules: WalkRules) -> Result<Self, AssetError> {
        let root = root.into();

        match fs::metadata(&root) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                return Err(AssetError::RootUnreadable {
                    path: root,
                    source: io::Error::other("not a directory"),
                })
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                warn!("Asset root {} not found; nothing to scan", root.display());
                return Ok(Self {
                    root,
                    rules,
                    entries: None,
                    root_missing: true,
                    sidecars_excluded: 0,
                });
            }
            Err(source) => return Err(AssetError::RootUnreadable { path: root, source }),
        }

        // Surface an unlistable root up front rather than mid-iteration.
        fs::read_dir(&root).map_err(|source| AssetError::RootUnreadable {
            path: root.clone(),
            source,
        })?;

        let prune_rules = rules.clone();
        let walk = jwalk::WalkDir::new(&root)
            .parallelism(jwalk::Parallelism::Serial)
            .sort(true)
            .skip_hidden(false)
            .follow_links(false)
            .min_depth(1)
            .process_read_dir(move |depth, _dir, _state, children| {
                // `None` is the synthetic read holding the root entry itself;
                // the root is scanned whatever its name.
                if depth.is_none() {
                    return;
                }
                children.retain(|child| match child {
                    Ok(entry) => {
                        !(entry.file_type().is_dir()
                            && prune_rules.is_hidden_dir(&entry.file_name().to_string_lossy()))
                    }
                    Err(_) => true,
                });
            });

        Ok(Self {
            root,
            rules,
            entries: Some(Box::new(walk.into_iter())),
            root_missing: false,
            sidecars_excluded: 0,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `true` when the root did not exist at construction time.
    pub fn is_root_missing(&self) -> bool {
        self.root_missing
    }

    /// Sidecar files dropped so far.
    pub fn sidecars_excluded(&self) -> u64 {
        self.sidecars_excluded
    }

    fn walk_error(&mut self, err: jwalk::Error) -> AssetError {
        let path = err
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.root.clone());
        let kind = err.io_error().map_or(io::ErrorKind::Other, io::Error::kind);
        let source = io::Error::new(kind, err.to_string());

        if path == self.root {
            self.entries = None;
            AssetError::RootUnreadable { path, source }
        } else {
            AssetError::PerFileIo { path, source }
        }
    }
}

impl Iterator for AssetWalker {
    type Item = Result<WalkedFile, AssetError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let next = self.entries.as_mut()?.next()?;
            let entry = match next {
                Ok(entry) => entry,
                Err(err) => return Some(Err(self.walk_error(err))),
            };

            let file_type = entry.file_type();
            if file_type.is_dir() {
                continue;
            }
            if !file_type.is_file() && !file_type.is_symlink() {
                debug!("Skipping special file {}", entry.path().display());
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            if self.rules.is_sidecar(&name) {
                self.sidecars_excluded += 1;
                continue;
            }

            return Some(Ok(WalkedFile {
                path: entry.path(),
                name,
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"x").unwrap();
    }

    fn names(walker: AssetWalker) -> Vec<String> {
        walker.map(|r| r.unwrap().name).collect()
    }

    #[test]
    fn rules_match_suffix_and_prefix() {
        let rules = WalkRules::default();
        assert!(rules.is_sidecar("hero.fbx.meta"));
        assert!(!rules.is_sidecar("hero.META"));
        assert!(!rules.is_sidecar("metadata.json"));
        assert!(rules.is_hidden_dir(".git"));
        assert!(!rules.is_hidden_dir("Textures"));
    }

    /// An empty prefix or suffix disables that filter instead of matching
    /// everything.
    #[test]
    fn empty_rules_match_nothing() {
        let rules = WalkRules {
            sidecar_suffix: String::new(),
            hidden_prefix: String::new(),
        };
        assert!(!rules.is_sidecar("a.meta"));
        assert!(!rules.is_hidden_dir("anything"));
    }

    #[test]
    fn yields_files_at_every_depth_in_sorted_order() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("b.png"));
        touch(&tmp.path().join("a/deep/er/c.fbx"));
        touch(&tmp.path().join("a/a.cs"));

        let walker = AssetWalker::new(tmp.path(), WalkRules::default()).unwrap();
        assert_eq!(names(walker), vec!["a.cs", "c.fbx", "b.png"]);
    }

    #[test]
    fn sidecars_are_excluded_and_counted() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("a.prefab"));
        touch(&tmp.path().join("a.prefab.meta"));
        touch(&tmp.path().join("Models.meta"));

        let mut walker = AssetWalker::new(tmp.path(), WalkRules::default()).unwrap();
        let found: Vec<_> = walker.by_ref().map(|r| r.unwrap().name).collect();
        assert_eq!(found, vec!["a.prefab"]);
        assert_eq!(walker.sidecars_excluded(), 2);
    }

    #[test]
    fn hidden_directories_are_pruned() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join(".cache/big.png"));
        touch(&tmp.path().join("visible/.hidden/nested.png"));
        touch(&tmp.path().join("visible/kept.png"));
        // Hidden *files* are still candidates; only directories are pruned.
        touch(&tmp.path().join(".keep.cs"));

        let walker = AssetWalker::new(tmp.path(), WalkRules::default()).unwrap();
        assert_eq!(names(walker), vec![".keep.cs", "kept.png"]);
    }

    #[test]
    fn root_with_hidden_prefix_is_still_scanned() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join(".assets");
        touch(&root.join("b.png"));
        touch(&root.join(".cache/skipped.png"));

        let walker = AssetWalker::new(&root, WalkRules::default()).unwrap();
        assert_eq!(names(walker), vec!["b.png"]);
    }

    #[test]
    fn missing_root_yields_nothing() {
        let tmp = TempDir::new().unwrap();
        let mut walker =
            AssetWalker::new(tmp.path().join("Assets"), WalkRules::default()).unwrap();
        assert!(walker.is_root_missing());
        assert!(walker.next().is_none());
    }

    #[test]
    fn file_root_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("not_a_dir.png");
        touch(&file);
        let err = AssetWalker::new(&file, WalkRules::default())
            .err()
            .expect("a file root must be rejected");
        assert!(matches!(err, AssetError::RootUnreadable { .. }));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn paths_are_absolute_under_root() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("Scenes/Main.unity"));
        let walker = AssetWalker::new(tmp.path(), WalkRules::default()).unwrap();
        let files: Vec<WalkedFile> = walker.map(Result::unwrap).collect();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, tmp.path().join("Scenes").join("Main.unity"));
    }
}
