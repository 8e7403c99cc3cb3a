//! Asset categorisation based on file extensions.
//!
//! The taxonomy is closed: every file lands in exactly one of eight
//! categories, with `Other` catching unmapped and missing extensions.
use serde::{Deserialize, Serialize};

/// Fixed asset classes, in taxonomy order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Prefabs,
    Scenes,
    Meshes,
    Textures,
    Materials,
    Audio,
    Scripts,
    #[default]
    Other,
}

/// Extension → category lookup. Keys are lowercase and unique.
static EXTENSION_TABLE: &[(&str, Category)] = &[
    ("prefab", Category::Prefabs),
    ("unity", Category::Scenes),
    ("fbx", Category::Meshes),
    ("obj", Category::Meshes),
    ("blend", Category::Meshes),
    ("png", Category::Textures),
    ("jpg", Category::Textures),
    ("jpeg", Category::Textures),
    ("tga", Category::Textures),
    ("mat", Category::Materials),
    ("shader", Category::Materials),
    ("mp3", Category::Audio),
    ("wav", Category::Audio),
    ("ogg", Category::Audio),
    ("m4a", Category::Audio),
    ("cs", Category::Scripts),
];

impl Category {
    /// Every category, in taxonomy order.
    pub const ALL: [Category; 8] = [
        Self::Prefabs,
        Self::Scenes,
        Self::Meshes,
        Self::Textures,
        Self::Materials,
        Self::Audio,
        Self::Scripts,
        Self::Other,
    ];

    /// Lowercase key used in the report.
    pub fn label(self) -> &'static str {
        match self {
            Self::Prefabs => "prefabs",
            Self::Scenes => "scenes",
            Self::Meshes => "meshes",
            Self::Textures => "textures",
            Self::Materials => "materials",
            Self::Audio => "audio",
            Self::Scripts => "scripts",
            Self::Other => "other",
        }
    }

    /// Inverse of [`Category::label`].
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Position in [`Category::ALL`], used as a dense array index.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Categorise an extension (without the leading dot).
    ///
    /// Matching is ASCII case-insensitive and allocation-free.
    pub fn from_extension(ext: &str) -> Self {
        EXTENSION_TABLE
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(ext))
            .map_or(Self::Other, |&(_, category)| category)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Text after the last `.` of a file name.
///
/// A name whose only dot is the leading one (`.gitignore`) has no extension.
pub fn extension_of(name: &str) -> Option<&str> {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => Some(ext),
        _ => None,
    }
}

/// Categorise a bare file name by its extension.
pub fn classify_file_name(name: &str) -> Category {
    extension_of(name).map_or(Category::Other, Category::from_extension)
}
