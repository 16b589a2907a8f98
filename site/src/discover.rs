use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};

use crate::error::SiteError;

/// The pattern an example's files must match, relative to the examples directory.
pub fn example_pattern(slug: &str, file_pattern: &str) -> String {
    format!("{}/{}", slug, file_pattern)
}

fn compile(pattern: &str) -> Result<GlobMatcher, globset::Error> {
    Ok(GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()?
        .compile_matcher())
}

fn has_glob_meta(s: &str) -> bool {
    s.contains(['*', '?', '[', ']', '{', '}'])
}

/// Files under `examples_dir` matching `<slug>/<file_pattern>`, sorted by path.
///
/// A missing directory matches nothing. Only regular files are returned.
pub fn example_files(
    examples_dir: &Path,
    slug: &str,
    file_pattern: &str,
) -> Result<Vec<PathBuf>, globset::Error> {
    let matcher = compile(&example_pattern(slug, file_pattern))?;

    let dirs: Vec<PathBuf> = if has_glob_meta(slug) {
        subdirectories(examples_dir)
    } else {
        vec![examples_dir.join(slug)]
    };

    let mut files = Vec::new();
    for dir in dirs {
        let Ok(entries) = std::fs::read_dir(&dir) else {
            continue;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Ok(relative) = path.strip_prefix(examples_dir) else {
                continue;
            };
            if matcher.is_match(relative) {
                files.push(path);
            }
        }
    }
    files.sort();
    Ok(files)
}

fn subdirectories(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect()
}

/// Like `example_files`, with a pattern error tied to its manifest declaration.
pub fn files_for_entry(
    examples_dir: &Path,
    entry: &exemplar::ManifestEntry,
    file_pattern: &str,
) -> Result<Vec<PathBuf>, SiteError> {
    example_files(examples_dir, &entry.slug, file_pattern).map_err(|source| SiteError::BadPattern {
        example: entry.name.clone(),
        pattern: example_pattern(&entry.slug, file_pattern),
        source,
        span: entry.span.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "x").unwrap();
    }

    #[test]
    fn sorted_and_scoped() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "hello/z.sh");
        touch(dir.path(), "hello/a.go");
        touch(dir.path(), "hello/nested/deep.go");
        touch(dir.path(), "other/b.go");

        let files = example_files(dir.path(), "hello", "*").unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.go", "z.sh"]);
    }

    #[test]
    fn extension_pattern() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "intro/intro.md");
        touch(dir.path(), "intro/intro.go");
        let files = example_files(dir.path(), "intro", "*.md").unwrap();
        assert_eq!(files, vec![dir.path().join("intro/intro.md")]);
    }

    #[test]
    fn missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(example_files(dir.path(), "nope", "*").unwrap().is_empty());
        assert!(example_files(&dir.path().join("absent"), "nope", "*").unwrap().is_empty());
    }

    #[test]
    fn malformed_pattern() {
        let dir = tempfile::tempdir().unwrap();
        assert!(example_files(dir.path(), "broken[", "*").is_err());
        assert!(example_files(dir.path(), "ok", "*.{go").is_err());
    }
}
