use crate::error::GenerateError;
use std::io::Write;
use std::path::Path;

/// Writes `contents` to a temporary file next to `path` and renames it into
/// place, so `path` is either left untouched or fully replaced.
pub(crate) fn write_atomically(path: &Path, contents: &str) -> Result<(), GenerateError> {
    let write_error = |source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    };

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(directory).map_err(write_error)?;

    let mut file = tempfile::NamedTempFile::new_in(directory).map_err(write_error)?;
    file.write_all(contents.as_bytes()).map_err(write_error)?;
    file.persist(path).map_err(|err| write_error(err.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generated").join("include").join("messages.h");

        write_atomically(&path, "// header\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "// header\n");
    }

    #[test]
    fn replaces_existing_file_without_leftovers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("messages.h");
        std::fs::write(&path, "old contents that are longer than the new ones").unwrap();

        write_atomically(&path, "new").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
