use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::SimilarityError;
use crate::similarity::Document;

/// List the base filenames of `.txt` files directly inside `dir`,
/// sorted lexicographically ascending. Subdirectories are not entered.
pub fn discover_txt_files(dir: &Path) -> Result<Vec<String>, SimilarityError> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("txt") {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
            names.push(name.to_string());
        }
    }
    names.sort();
    debug!(dir = %dir.display(), file_num = names.len(), "directory scan done");
    Ok(names)
}

/// Read and decode the named files under `dir` into documents.
///
/// The whole batch is atomic: any unreadable or non-UTF-8 file aborts with
/// an error and no documents are returned.
pub fn load_documents(dir: &Path, names: &[String]) -> Result<Vec<Document>, SimilarityError> {
    names
        .iter()
        .map(|name| {
            let path = dir.join(name);
            let bytes = fs::read(&path)?;
            let text = String::from_utf8(bytes)
                .map_err(|_| SimilarityError::Decoding { path: path.clone() })?;
            Ok(Document::new(name.clone(), text))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, bytes: &[u8]) {
        let mut file = fs::File::create(dir.join(name)).unwrap();
        file.write_all(bytes).unwrap();
    }

    #[test]
    fn discovery_lists_only_txt_sorted() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "b.txt", b"beta");
        write_file(dir.path(), "a.txt", b"alpha");
        write_file(dir.path(), "notes.md", b"ignored");
        write_file(dir.path(), "c.txt", b"gamma");
        fs::create_dir(dir.path().join("nested.txt")).unwrap();

        let names = discover_txt_files(dir.path()).unwrap();
        assert_eq!(names, vec!["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn discovery_is_not_recursive() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        write_file(&sub, "inner.txt", b"hidden");
        write_file(dir.path(), "outer.txt", b"visible");

        let names = discover_txt_files(dir.path()).unwrap();
        assert_eq!(names, vec!["outer.txt"]);
    }

    #[test]
    fn discovery_of_empty_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_txt_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn load_reads_utf8_documents() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "a.txt", "Cat DOG".as_bytes());
        let docs = load_documents(dir.path(), &["a.txt".to_string()]).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].name, "a.txt");
        assert_eq!(docs[0].text, "Cat DOG");
    }

    #[test]
    fn load_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "ok.txt", b"fine");
        write_file(dir.path(), "bad.txt", &[0xff, 0xfe, 0x00]);

        let names = vec!["bad.txt".to_string(), "ok.txt".to_string()];
        let err = load_documents(dir.path(), &names).unwrap_err();
        assert!(matches!(err, SimilarityError::Decoding { .. }));
        assert!(err.to_string().contains("bad.txt"));
    }

    #[test]
    fn load_surfaces_missing_files_as_io() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_documents(dir.path(), &["gone.txt".to_string()]).unwrap_err();
        assert!(matches!(err, SimilarityError::Io(_)));
    }
}
