// src/store.rs
//! Local page cache: raw markup per game under `.store/pages/<id>.html`.

use std::{fs, io, path::{Path, PathBuf}};

use crate::config::consts::{PAGES_SUBDIR, STORE_DIR};
use crate::file::ensure_directory;

#[derive(Clone, Debug)]
pub struct PageStore {
    dir: PathBuf,
}

impl Default for PageStore {
    fn default() -> Self {
        Self::new(Path::new(STORE_DIR).join(PAGES_SUBDIR))
    }
}

impl PageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, game_id: u32) -> PathBuf {
        self.dir.join(format!("{game_id}.html"))
    }

    /// Cached page, if any. Unreadable or empty files count as a miss.
    pub fn load(&self, game_id: u32) -> Option<String> {
        fs::read_to_string(self.path_for(game_id))
            .ok()
            .filter(|s| !s.trim().is_empty())
    }

    /// Written to `<id>.html.tmp`, then renamed into place.
    pub fn save(&self, game_id: u32, html: &str) -> io::Result<()> {
        ensure_directory(&self.dir)?;
        let path = self.path_for(game_id);
        let tmp = path.with_extension("html.tmp");
        fs::write(&tmp, html)?;
        fs::rename(&tmp, &path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join(format!("jarchive_store_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        let store = PageStore::new(&dir);
        assert_eq!(store.load(1), None);
        store.save(1, "<html>1</html>").unwrap();
        assert_eq!(store.load(1).as_deref(), Some("<html>1</html>"));
        store.save(2, "  \n").unwrap();
        assert_eq!(store.load(2), None);
    }
}
