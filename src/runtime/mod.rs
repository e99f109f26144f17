//! Where per-process diagnostic files live.
//!
//! The error log belongs next to the window manager's other ephemeral state
//! (IPC socket, restart state), so the default resolver roots it in the XDG
//! runtime directory. Hosts with their own layout plug in a different
//! [`PathResolver`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Maps a short base name (e.g. `"errorlog"`) to an absolute file path.
pub trait PathResolver: Send + Sync {
    /// `None` means no usable location exists; the caller degrades to stdout only.
    fn resolve(&self, name: &str) -> Option<PathBuf>;
}

#[derive(Debug, Clone)]
enum Base {
    /// `$XDG_RUNTIME_DIR`, or a fresh temp dir when it is unset.
    Xdg,
    /// A caller-chosen runtime directory.
    Dir(PathBuf),
    /// Always a fresh temp dir.
    Temp,
}

/// `<runtime_dir>/<app>/<name>.<pid>`.
///
/// The `<app>` directory is created with mode 0700, and an existing one is
/// only used if it is a real directory owned by the current user that no one
/// else can access. Without a runtime directory the file goes into a freshly
/// created `<tmp>/<app>-XXXXXX` directory instead of a predictable shared
/// path, which is created once per resolver and kept after exit.
#[derive(Debug, Clone)]
pub struct RuntimeDir {
    app: String,
    base: Base,
    temp: OnceLock<PathBuf>,
}

impl Default for RuntimeDir {
    fn default() -> Self {
        Self::new("tilelog")
    }
}

impl RuntimeDir {
    #[must_use]
    pub fn new(app: impl Into<String>) -> Self {
        Self {
            app: app.into(),
            base: Base::Xdg,
            temp: OnceLock::new(),
        }
    }

    /// Uses `dir` as the runtime directory instead of `$XDG_RUNTIME_DIR`.
    /// `dir` itself must exist.
    #[must_use]
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base = Base::Dir(dir.into());
        self
    }

    /// Ignores `$XDG_RUNTIME_DIR` and always uses a fresh temp directory.
    #[must_use]
    pub fn temp_only(mut self) -> Self {
        self.base = Base::Temp;
        self
    }

    fn app_dir(&self) -> io::Result<PathBuf> {
        let runtime_dir = match &self.base {
            Base::Dir(dir) => Some(dir.clone()),
            Base::Xdg => directories::BaseDirs::new()
                .and_then(|dirs| dirs.runtime_dir().map(Path::to_path_buf)),
            Base::Temp => None,
        };

        match runtime_dir {
            Some(base) => {
                let dir = base.join(&self.app);
                ensure_private_dir(&dir)?;
                Ok(dir)
            }
            None => self.temp_dir(),
        }
    }

    fn temp_dir(&self) -> io::Result<PathBuf> {
        if let Some(dir) = self.temp.get() {
            return Ok(dir.clone());
        }
        let dir = tempfile::Builder::new()
            .prefix(&format!("{}-", self.app))
            .tempdir()?
            .keep();
        Ok(self.temp.get_or_init(|| dir).clone())
    }
}

impl PathResolver for RuntimeDir {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let dir = self.app_dir().ok()?;
        Some(dir.join(format!("{name}.{}", std::process::id())))
    }
}

/// `<dir>/<name>`, with no pid suffix. The directory is not created.
#[derive(Debug, Clone)]
pub struct FixedDir(pub PathBuf);

impl PathResolver for FixedDir {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        Some(self.0.join(name))
    }
}

/// Never resolves; leaves the logger on stdout only.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unresolvable;

impl PathResolver for Unresolvable {
    fn resolve(&self, _name: &str) -> Option<PathBuf> {
        None
    }
}

/// Creates `dir` with mode 0700, or checks that an existing `dir` is a
/// directory (not a symlink) owned by us with no group or other access.
#[cfg(unix)]
fn ensure_private_dir(dir: &Path) -> io::Result<()> {
    use std::os::unix::fs::{DirBuilderExt, MetadataExt};

    match fs::symlink_metadata(dir) {
        Ok(meta) => {
            if !meta.is_dir() {
                return Err(refuse(dir, "not a directory"));
            }
            if meta.uid() != current_uid()? {
                return Err(refuse(dir, "owned by another user"));
            }
            if meta.mode() & 0o077 != 0 {
                return Err(refuse(dir, "accessible by other users"));
            }
            Ok(())
        }
        // Non-recursive: losing a creation race fails instead of adopting the winner's directory.
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            fs::DirBuilder::new().mode(0o700).create(dir)
        }
        Err(e) => Err(e),
    }
}

#[cfg(not(unix))]
fn ensure_private_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

/// Owner of a file we just created, i.e. our effective uid.
#[cfg(unix)]
fn current_uid() -> io::Result<u32> {
    use std::os::unix::fs::MetadataExt;

    Ok(tempfile::tempfile()?.metadata()?.uid())
}

#[cfg(unix)]
fn refuse(dir: &Path, reason: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::PermissionDenied,
        format!("refusing runtime directory {}: {reason}", dir.display()),
    )
}
