use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// A generated project with `tests/e2e` and a sibling `tests/unit` suite.
pub(crate) fn create_generated_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    write(path, "README.md", "# my-app\n");
    write(path, "tests/e2e/spec.test", "describe('app')\n");
    write(path, "tests/e2e/cypress.config.js", "module.exports = {}\n");
    write(path, "tests/unit/app.test", "test('app')\n");

    temp_dir
}

/// Write a JSON context file into `dir` and return its path.
pub(crate) fn write_context(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("context.json");
    std::fs::write(&path, json).unwrap();
    path
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}
