//! Resource collaborator contract: which shader sources and images the
//! viewer needs, a readiness gate over them, and the name → handle
//! registries the draw list resolves against.
//!
//! The host owns the GPU objects. The engine only sees opaque handles and
//! whether each one is usable yet.

use std::path::{Path, PathBuf};

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::SolariumError;

/// Shader and image resources, keyed by logical name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceManifest {
    /// Shader source name → path relative to the resource root.
    pub shaders: Vec<(String, PathBuf)>,
    /// Image name → path relative to the resource root.
    pub textures: Vec<(String, PathBuf)>,
}

impl ResourceManifest {
    /// Shaders and textures of the solar-system viewer.
    #[must_use]
    pub fn default_solar() -> Self {
        let entries = |list: &[(&str, &str)]| {
            list.iter()
                .map(|(name, path)| ((*name).to_owned(), PathBuf::from(path)))
                .collect()
        };
        Self {
            shaders: entries(&[
                ("planetVert", "shaders/planet.vs"),
                ("planetFrag", "shaders/planet.fs"),
                ("starVert", "shaders/star.vs"),
                ("starFrag", "shaders/star.fs"),
                ("skyboxVert", "shaders/skybox.vs"),
                ("skyboxFrag", "shaders/skybox.fs"),
                ("simpleVert", "shaders/simple.vs"),
                ("simpleFrag", "shaders/simple.fs"),
            ]),
            textures: entries(&[
                ("earth", "textures/earth.jpg"),
                ("moon", "textures/moon.jpg"),
                ("sun", "textures/sun.jpg"),
                ("jupiter", "textures/jupiter.jpg"),
                ("mars", "textures/mars.jpg"),
                ("phobos", "textures/mars-phobos.jpg"),
                ("neptune", "textures/neptune.jpg"),
                ("saturn", "textures/saturn.jpg"),
                ("venus", "textures/venus.jpg"),
                ("stars", "textures/stars.jpg"),
                ("uranus", "textures/uranus.jpg"),
                ("mercury", "textures/mercury.jpg"),
            ]),
        }
    }

    /// Every resource name, shaders first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.shaders
            .iter()
            .chain(&self.textures)
            .map(|(name, _)| name.as_str())
    }
}

/// Readiness gate over a set of named resources.
///
/// Completion order is irrelevant: the tracker reports ready only once
/// every requested name has completed, so loads may run in parallel.
#[derive(Debug, Clone, Default)]
pub struct LoadTracker {
    pending: FxHashSet<String>,
    completed: usize,
}

impl LoadTracker {
    /// Track the given names.
    #[must_use]
    pub fn new<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            pending: names.into_iter().map(str::to_owned).collect(),
            completed: 0,
        }
    }

    /// Track every resource in a manifest.
    #[must_use]
    pub fn for_manifest(manifest: &ResourceManifest) -> Self {
        Self::new(manifest.names())
    }

    /// Mark `name` complete. Returns `false` for names that were never
    /// requested or already completed.
    pub fn complete(&mut self, name: &str) -> bool {
        let removed = self.pending.remove(name);
        if removed {
            self.completed += 1;
        }
        removed
    }

    /// Number of resources still outstanding.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Number of resources that have completed.
    #[must_use]
    pub fn completed(&self) -> usize {
        self.completed
    }

    /// Whether every requested resource has completed.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Read every shader source of `manifest` from under `root`.
///
/// Every file is attempted even after a failure so one error reports all
/// missing sources.
///
/// # Errors
///
/// Returns [`SolariumError::ResourceMissing`] listing each file that could
/// not be read; no partial map is returned.
pub fn load_shader_sources(
    root: &Path,
    manifest: &ResourceManifest,
) -> Result<FxHashMap<String, String>, SolariumError> {
    let mut tracker = LoadTracker::new(manifest.shaders.iter().map(|(n, _)| n.as_str()));
    let mut sources = FxHashMap::default();
    let mut failures = Vec::new();

    for (name, path) in &manifest.shaders {
        let full = root.join(path);
        match std::fs::read_to_string(&full) {
            Ok(source) => {
                let _ = sources.insert(name.clone(), source);
                let _ = tracker.complete(name);
            }
            Err(e) => failures.push(format!("{}: {e}", full.display())),
        }
    }

    if !tracker.is_ready() {
        return Err(SolariumError::ResourceMissing(format!(
            "{} of {} shader sources missing: {}",
            tracker.pending(),
            manifest.shaders.len(),
            failures.join("; ")
        )));
    }
    log::info!("Loaded {} shader sources from {}", sources.len(), root.display());
    Ok(sources)
}

/// Opaque host-side texture handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Opaque host-side shader program handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramHandle(pub u32);

/// Logical shader programs the draw list refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgramKind {
    /// Lit, textured planet surface.
    Planet,
    /// Self-luminous star surface.
    Star,
    /// Background star sphere.
    Skybox,
    /// Flat-colored lines (orbit rings).
    Simple,
}

impl ProgramKind {
    /// All programs, in draw order of first use.
    pub const ALL: [Self; 4] = [Self::Skybox, Self::Simple, Self::Planet, Self::Star];

    /// Manifest names of the vertex and fragment sources.
    #[must_use]
    pub fn source_names(self) -> (&'static str, &'static str) {
        match self {
            Self::Planet => ("planetVert", "planetFrag"),
            Self::Star => ("starVert", "starFrag"),
            Self::Skybox => ("skyboxVert", "skyboxFrag"),
            Self::Simple => ("simpleVert", "simpleFrag"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct TextureEntry {
    handle: TextureHandle,
    ready: bool,
}

/// Image name → texture handle, with a readiness flag per entry.
#[derive(Debug, Clone, Default)]
pub struct TextureRegistry {
    entries: FxHashMap<String, TextureEntry>,
}

impl TextureRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a texture whose image is still uploading.
    pub fn insert_pending(&mut self, name: &str, handle: TextureHandle) {
        let _ = self
            .entries
            .insert(name.to_owned(), TextureEntry { handle, ready: false });
    }

    /// Register a texture that can be bound right away.
    pub fn insert_ready(&mut self, name: &str, handle: TextureHandle) {
        let _ = self
            .entries
            .insert(name.to_owned(), TextureEntry { handle, ready: true });
    }

    /// Flag a pending texture as ready. Returns `false` for unknown names.
    pub fn mark_ready(&mut self, name: &str) -> bool {
        self.entries.get_mut(name).is_some_and(|entry| {
            entry.ready = true;
            true
        })
    }

    /// Handle for `name`, if registered and ready.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<TextureHandle> {
        self.entries
            .get(name)
            .filter(|entry| entry.ready)
            .map(|entry| entry.handle)
    }

    /// Number of registered textures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Link outcome of a shader program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramStatus {
    /// Linked and usable.
    Linked(ProgramHandle),
    /// Compilation or linking failed; the host has already logged why.
    Failed,
}

/// Program kind → link status.
#[derive(Debug, Clone, Default)]
pub struct ProgramRegistry {
    entries: FxHashMap<ProgramKind, ProgramStatus>,
}

impl ProgramRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry where every program is linked, with handles numbered in
    /// [`ProgramKind::ALL`] order. Used by hosts that do not draw.
    #[must_use]
    pub fn all_linked() -> Self {
        let mut registry = Self::new();
        for (i, kind) in ProgramKind::ALL.into_iter().enumerate() {
            registry.set(kind, ProgramStatus::Linked(ProgramHandle(i as u32)));
        }
        registry
    }

    /// Record a program's link outcome.
    pub fn set(&mut self, kind: ProgramKind, status: ProgramStatus) {
        let _ = self.entries.insert(kind, status);
    }

    /// Status of a program, `None` if the host never reported it.
    #[must_use]
    pub fn status(&self, kind: ProgramKind) -> Option<ProgramStatus> {
        self.entries.get(&kind).copied()
    }

    /// Handle for a linked program.
    #[must_use]
    pub fn get(&self, kind: ProgramKind) -> Option<ProgramHandle> {
        match self.status(kind)? {
            ProgramStatus::Linked(handle) => Some(handle),
            ProgramStatus::Failed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_manifest_covers_every_program() {
        let manifest = ResourceManifest::default_solar();
        assert_eq!(manifest.shaders.len(), 8);
        assert_eq!(manifest.textures.len(), 12);
        let names: FxHashSet<&str> = manifest.names().collect();
        for kind in ProgramKind::ALL {
            let (vs, fs) = kind.source_names();
            assert!(names.contains(vs) && names.contains(fs), "{kind:?}");
        }
        assert!(names.contains("stars"));
    }

    #[test]
    fn tracker_ready_only_after_all_complete() {
        let mut tracker = LoadTracker::new(["a", "b", "c"]);
        assert!(!tracker.is_ready());
        assert!(tracker.complete("c"));
        assert!(tracker.complete("a"));
        assert!(!tracker.is_ready());
        assert!(!tracker.complete("a"));
        assert!(!tracker.complete("zzz"));
        assert_eq!(tracker.pending(), 1);
        assert!(tracker.complete("b"));
        assert!(tracker.is_ready());
        assert_eq!(tracker.completed(), 3);
    }

    #[test]
    fn manifest_tracker_waits_for_shaders_and_textures() {
        let manifest = ResourceManifest::default_solar();
        let mut tracker = LoadTracker::for_manifest(&manifest);
        assert_eq!(tracker.pending(), 20);
        for (name, _) in &manifest.shaders {
            assert!(tracker.complete(name));
        }
        assert!(!tracker.is_ready());
        for (name, _) in manifest.textures.iter().rev() {
            assert!(tracker.complete(name));
        }
        assert!(tracker.is_ready());
        assert_eq!(tracker.completed(), 20);
    }

    #[test]
    fn empty_tracker_is_ready() {
        assert!(LoadTracker::default().is_ready());
    }

    #[test]
    fn shader_sources_load_from_disk() {
        let root = std::env::temp_dir().join(format!(
            "solarium-shaders-{}",
            std::process::id()
        ));
        let manifest = ResourceManifest {
            shaders: vec![
                ("aVert".to_owned(), PathBuf::from("shaders/a.vs")),
                ("aFrag".to_owned(), PathBuf::from("shaders/a.fs")),
            ],
            textures: Vec::new(),
        };
        std::fs::create_dir_all(root.join("shaders")).unwrap();
        std::fs::write(root.join("shaders/a.vs"), "void main() {}").unwrap();

        let Err(SolariumError::ResourceMissing(msg)) = load_shader_sources(&root, &manifest)
        else {
            panic!("expected a missing-resource error");
        };
        assert!(msg.starts_with("1 of 2"), "{msg}");
        assert!(msg.contains("a.fs") && !msg.contains("a.vs"), "{msg}");

        std::fs::write(root.join("shaders/a.fs"), "void main() { }").unwrap();
        let sources = load_shader_sources(&root, &manifest).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources["aVert"], "void main() {}");

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn unready_textures_are_not_handed_out() {
        let mut textures = TextureRegistry::new();
        textures.insert_pending("earth", TextureHandle(7));
        textures.insert_ready("sun", TextureHandle(1));
        assert_eq!(textures.get("earth"), None);
        assert_eq!(textures.get("sun"), Some(TextureHandle(1)));
        assert_eq!(textures.get("pluto"), None);
        assert!(textures.mark_ready("earth"));
        assert!(!textures.mark_ready("pluto"));
        assert_eq!(textures.get("earth"), Some(TextureHandle(7)));
        assert_eq!(textures.len(), 2);
    }

    #[test]
    fn failed_programs_have_no_handle() {
        let mut programs = ProgramRegistry::all_linked();
        assert_eq!(programs.get(ProgramKind::Skybox), Some(ProgramHandle(0)));
        programs.set(ProgramKind::Star, ProgramStatus::Failed);
        assert_eq!(programs.get(ProgramKind::Star), None);
        assert_eq!(
            programs.status(ProgramKind::Star),
            Some(ProgramStatus::Failed)
        );
        assert_eq!(ProgramRegistry::new().status(ProgramKind::Planet), None);
    }
}
