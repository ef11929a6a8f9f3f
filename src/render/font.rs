//! Font resolution with an ordered fallback chain.
//!
//! Candidates are tried in order until one loads. If none do, the built-in
//! bitmap font is used, so resolution never fails.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use walkdir::WalkDir;

use crate::error::{BrandError, Result};

use super::bitmap;

/// macOS system Helvetica.
pub const HELVETICA_MACOS: &str = "/System/Library/Fonts/Helvetica.ttc";
/// DejaVu Sans as shipped by most Linux distributions.
pub const DEJAVU_LINUX: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";
/// Generic font file looked up by name in the system font directories.
pub const ARIAL: &str = "Arial.ttf";

/// A place to load a font from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// An explicit font file.
    Path(PathBuf),
    /// A file name searched for in the font directories.
    Named(String),
}

impl FontSource {
    /// Interpret a user-supplied font spec: anything with a path separator is
    /// a path, a bare file name is searched for.
    pub fn parse(spec: &str) -> Self {
        if spec.contains('/') || spec.contains('\\') {
            FontSource::Path(PathBuf::from(spec))
        } else {
            FontSource::Named(spec.to_string())
        }
    }
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSource::Path(path) => write!(f, "{}", path.display()),
            FontSource::Named(name) => write!(f, "{}", name),
        }
    }
}

/// A loaded typeface, not yet bound to a size.
#[derive(Clone)]
pub enum FontFace {
    Outline {
        name: String,
        font: Arc<rusttype::Font<'static>>,
    },
    /// The built-in bitmap font. It has a single fixed size.
    Builtin,
}

impl FontFace {
    /// Bind the face to a pixel size. The built-in face ignores `size`.
    pub fn at_size(&self, size: f32) -> Font {
        Font {
            face: self.clone(),
            size: match self {
                FontFace::Outline { .. } => size,
                FontFace::Builtin => bitmap::GLYPH_HEIGHT as f32,
            },
        }
    }

    /// Human-readable name for status output.
    pub fn name(&self) -> &str {
        match self {
            FontFace::Outline { name, .. } => name,
            FontFace::Builtin => "built-in bitmap",
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, FontFace::Builtin)
    }
}

impl fmt::Debug for FontFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontFace::Outline { name, .. } => f.debug_tuple("Outline").field(name).finish(),
            FontFace::Builtin => f.write_str("Builtin"),
        }
    }
}

/// A face at a specific pixel size.
#[derive(Debug, Clone)]
pub struct Font {
    face: FontFace,
    size: f32,
}

impl Font {
    /// The built-in bitmap font.
    pub fn builtin() -> Self {
        FontFace::Builtin.at_size(0.0)
    }

    pub fn face(&self) -> &FontFace {
        &self.face
    }

    /// Pixel size. For the built-in face this is its fixed cell height.
    pub fn size(&self) -> f32 {
        self.size
    }
}

/// Ordered font candidates plus the directories used to find named fonts.
#[derive(Debug, Clone)]
pub struct FontResolver {
    sources: Vec<FontSource>,
    search_dirs: Vec<PathBuf>,
}

impl FontResolver {
    pub fn new(sources: Vec<FontSource>) -> Self {
        Self {
            sources,
            search_dirs: default_search_dirs(),
        }
    }

    /// Platform fonts first, then the generic named font.
    pub fn system_default() -> Self {
        Self::new(vec![
            FontSource::Path(PathBuf::from(HELVETICA_MACOS)),
            FontSource::Path(PathBuf::from(DEJAVU_LINUX)),
            FontSource::Named(ARIAL.to_string()),
        ])
    }

    /// A resolver with no candidates: always yields the built-in font.
    pub fn builtin_only() -> Self {
        Self {
            sources: Vec::new(),
            search_dirs: Vec::new(),
        }
    }

    /// Put extra candidates ahead of the existing ones.
    pub fn with_preferred(mut self, preferred: impl IntoIterator<Item = FontSource>) -> Self {
        let mut sources: Vec<FontSource> = preferred.into_iter().collect();
        sources.append(&mut self.sources);
        self.sources = sources;
        self
    }

    /// Replace the directories searched for named fonts.
    pub fn with_search_dirs(mut self, dirs: Vec<PathBuf>) -> Self {
        self.search_dirs = dirs;
        self
    }

    pub fn sources(&self) -> &[FontSource] {
        &self.sources
    }

    /// Resolve the first loadable face.
    pub fn resolve_face(&self) -> FontFace {
        self.resolve_face_with(|_, _| {})
    }

    /// Resolve the first loadable face, reporting each skipped candidate.
    pub fn resolve_face_with(&self, mut on_skip: impl FnMut(&FontSource, &BrandError)) -> FontFace {
        for source in &self.sources {
            match self.load(source) {
                Ok(face) => return face,
                Err(e) => on_skip(source, &e),
            }
        }
        FontFace::Builtin
    }

    fn load(&self, source: &FontSource) -> Result<FontFace> {
        let path = match source {
            FontSource::Path(path) => path.clone(),
            FontSource::Named(name) => self.find_named(name)?,
        };
        load_file(&path)
    }

    fn find_named(&self, name: &str) -> Result<PathBuf> {
        for dir in &self.search_dirs {
            let found = WalkDir::new(dir)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
                .find(|e| {
                    e.file_type().is_file()
                        && e.file_name().to_string_lossy().eq_ignore_ascii_case(name)
                });
            if let Some(entry) = found {
                return Ok(entry.into_path());
            }
        }
        Err(BrandError::Font {
            message: format!("{} not found in font directories", name),
        })
    }
}

impl Default for FontResolver {
    fn default() -> Self {
        Self::system_default()
    }
}

/// Load face 0 of a TrueType/OpenType file or collection.
fn load_file(path: &Path) -> Result<FontFace> {
    let bytes = fs::read(path).map_err(|e| BrandError::Font {
        message: format!("{}: {}", path.display(), e),
    })?;

    let font = rusttype::Font::try_from_vec_and_index(bytes, 0).ok_or_else(|| BrandError::Font {
        message: format!("{}: not a usable font file", path.display()),
    })?;

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(FontFace::Outline {
        name,
        font: Arc::new(font),
    })
}

/// Standard system and user font directories.
fn default_search_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![
        PathBuf::from("/usr/share/fonts"),
        PathBuf::from("/usr/local/share/fonts"),
    ];
    if let Some(home) = std::env::var_os("HOME") {
        let home = PathBuf::from(home);
        dirs.push(home.join(".fonts"));
        dirs.push(home.join(".local/share/fonts"));
        dirs.push(home.join("Library/Fonts"));
    }
    dirs.push(PathBuf::from("/Library/Fonts"));
    dirs.push(PathBuf::from("/System/Library/Fonts"));
    if let Some(windir) = std::env::var_os("WINDIR") {
        dirs.push(PathBuf::from(windir).join("Fonts"));
    } else {
        dirs.push(PathBuf::from(r"C:\Windows\Fonts"));
    }
    dirs.retain(|d| d.is_dir());
    dirs
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_builtin_only() {
        let face = FontResolver::builtin_only().resolve_face();
        assert!(face.is_builtin());
        assert_eq!(face.name(), "built-in bitmap");
    }

    #[test]
    fn test_builtin_ignores_size() {
        let font = FontResolver::builtin_only().resolve_face().at_size(120.0);
        assert_eq!(font.size(), bitmap::GLYPH_HEIGHT as f32);
    }

    #[test]
    fn test_missing_path_falls_back() {
        let dir = tempdir().unwrap();
        let resolver = FontResolver::new(vec![FontSource::Path(dir.path().join("nope.ttf"))])
            .with_search_dirs(vec![]);

        let mut skipped = Vec::new();
        let face = resolver.resolve_face_with(|source, _| skipped.push(source.clone()));

        assert!(face.is_builtin());
        assert_eq!(skipped, vec![FontSource::Path(dir.path().join("nope.ttf"))]);
    }

    #[test]
    fn test_corrupt_font_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Broken.ttf");
        fs::write(&path, b"definitely not a font").unwrap();

        let resolver = FontResolver::new(vec![FontSource::Path(path)]).with_search_dirs(vec![]);
        assert!(resolver.resolve_face().is_builtin());
    }

    #[test]
    fn test_named_search_finds_nested_file() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("truetype").join("brand");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("Brand.ttf"), b"junk").unwrap();

        let resolver = FontResolver::new(vec![]).with_search_dirs(vec![dir.path().to_path_buf()]);

        let found = resolver.find_named("brand.TTF").unwrap();
        assert_eq!(found, nested.join("Brand.ttf"));
        assert!(resolver.find_named("Other.ttf").is_err());
    }

    #[test]
    fn test_loads_outline_font_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join("DejaVuSans.ttf");
        let resolver = FontResolver::new(vec![FontSource::Path(path)]).with_search_dirs(vec![]);

        let mut skipped = 0;
        let face = resolver.resolve_face_with(|_, _| skipped += 1);

        assert!(!face.is_builtin());
        assert_eq!(face.name(), "DejaVuSans");
        assert_eq!(skipped, 0);
        assert_eq!(face.at_size(36.0).size(), 36.0);
    }

    #[test]
    fn test_with_preferred_goes_first() {
        let resolver = FontResolver::system_default()
            .with_preferred(vec![FontSource::Named("Inter.ttf".to_string())]);
        assert_eq!(resolver.sources()[0], FontSource::Named("Inter.ttf".to_string()));
        assert_eq!(resolver.sources().len(), 4);
    }

    #[test]
    fn test_parse_source() {
        assert_eq!(FontSource::parse("Arial.ttf"), FontSource::Named("Arial.ttf".to_string()));
        assert_eq!(
            FontSource::parse("fonts/Inter.ttf"),
            FontSource::Path(PathBuf::from("fonts/Inter.ttf"))
        );
    }
}
