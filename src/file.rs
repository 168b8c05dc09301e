// src/file.rs

use std::{
    collections::BTreeMap,
    fs::{self, File, OpenOptions},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::options::{ExportOptions, ExportType, OnConflict};
use crate::csv::{first_row, write_rows};
use crate::error::ExportError;
use crate::record::{header, ClueRow};

/// Write rows according to `export` (one merged file or one file per game).
/// Returns the paths written, in game order for per-game export.
pub fn export_rows(rows: &[ClueRow], export: &ExportOptions) -> Result<Vec<PathBuf>, ExportError> {
    if rows.is_empty() {
        logf!("Export: nothing to write");
        return Ok(Vec::new());
    }

    match export.export_type {
        ExportType::SingleFile => {
            let path = export.out_path();
            write_table(&path, rows, export)?;
            Ok(vec![path])
        }
        ExportType::PerGame => {
            let dir = export.out_path();
            ensure_export_dir(&dir)?;

            let mut by_game: BTreeMap<u32, Vec<ClueRow>> = BTreeMap::new();
            for r in rows {
                by_game.entry(r.game_id).or_default().push(r.clone());
            }

            let mut written = Vec::with_capacity(by_game.len());
            for (game_id, game_rows) in by_game {
                let path = dir.join(export.game_file_name(game_id));
                write_table(&path, &game_rows, export)?;
                written.push(path);
            }
            Ok(written)
        }
    }
}

/// Create `dir` (and parents) unless it already exists as a directory.
pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotADirectory,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/* ---- helpers ---- */

fn ensure_export_dir(dir: &Path) -> Result<(), ExportError> {
    ensure_directory(dir).map_err(|e| match e.kind() {
        io::ErrorKind::NotADirectory => ExportError::NotADirectory(dir.to_path_buf()),
        _ => ExportError::Io(e),
    })
}

/// One file, honouring the conflict policy.
fn write_table(path: &Path, rows: &[ClueRow], export: &ExportOptions) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_export_dir(parent)?;
        }
    }

    let sep = export.delim();
    let head = header(export.include_notes);
    let cells: Vec<Vec<String>> = rows.iter().map(|r| r.to_cells(export.include_notes)).collect();

    let exists = path.exists();
    let (file, write_header) = match (exists, export.on_conflict) {
        (true, OnConflict::Fail) => return Err(ExportError::Exists(path.to_path_buf())),
        (true, OnConflict::Append) => {
            let existing = fs::read_to_string(path)?;
            let fresh = existing.trim().is_empty();
            if export.include_headers && !fresh && first_row(&existing, sep).as_ref() != Some(&head) {
                return Err(ExportError::HeaderMismatch(path.to_path_buf()));
            }
            (OpenOptions::new().append(true).open(path)?, export.include_headers && fresh)
        }
        (true, OnConflict::Replace) | (false, _) => (File::create(path)?, export.include_headers),
    };

    let mut out = BufWriter::new(file);
    write_rows(&mut out, write_header.then_some(head.as_slice()), &cells, sep)?;
    out.flush()?;

    logd!("Export: {} rows → {}", cells.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_directory_rejects_files() {
        let base = std::env::temp_dir().join(format!("jarchive_file_{}", std::process::id()));
        let _ = fs::remove_dir_all(&base);
        ensure_directory(&base.join("a/b")).unwrap();
        assert!(base.join("a/b").is_dir());

        let f = base.join("plain.txt");
        fs::write(&f, "x").unwrap();
        assert!(matches!(ensure_export_dir(&f), Err(ExportError::NotADirectory(_))));
    }
}
