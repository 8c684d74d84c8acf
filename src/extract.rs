// Document text extraction.
//
// PDFs go through pdf-extract; anything else is read as UTF-8 text. The
// result must contain at least one non-whitespace character, otherwise the
// document counts as unreadable (scanned images have no text layer).

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{DocumentRole, MatchError};

/// Read the plain text of the document at `path`.
pub fn extract_text(path: &Path, role: DocumentRole) -> Result<String, MatchError> {
    let failed = |reason: String| MatchError::Extraction {
        document: role,
        reason,
    };

    if !path.is_file() {
        return Err(failed(format!("{} is not a readable file", path.display())));
    }

    let text = if is_pdf(path) {
        extract_pdf(path).map_err(failed)?
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| failed(format!("{}: {e}", path.display())))?
    };

    if text.trim().is_empty() {
        warn!(document = %role, path = %path.display(), "Document has no text layer");
        return Err(failed(format!(
            "{} contains no extractable text",
            path.display()
        )));
    }

    debug!(document = %role, chars = text.len(), "Extracted document text");
    Ok(text)
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

fn extract_pdf(path: &Path) -> Result<String, String> {
    // pdf-extract panics on some malformed files instead of returning an error.
    let result = std::panic::catch_unwind(|| pdf_extract::extract_text(path));
    match result {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(format!("{}: {e}", path.display())),
        Err(_) => Err(format!("{}: malformed or encrypted PDF", path.display())),
    }
}

/// Turn a typed or pasted path into a `PathBuf`.
///
/// Strips surrounding whitespace and one pair of matching quotes, which
/// terminals add when a file is dragged in.
pub fn clean_path_input(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|&q| {
            trimmed
                .strip_prefix(q)
                .and_then(|rest| rest.strip_suffix(q))
        })
        .unwrap_or(trimmed);
    PathBuf::from(unquoted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reads_plain_text() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Rust engineer").unwrap();
        let text = extract_text(file.path(), DocumentRole::Resume).unwrap();
        assert_eq!(text.trim(), "Rust engineer");
    }

    #[test]
    fn test_blank_file_is_extraction_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "   ").unwrap();
        let err = extract_text(file.path(), DocumentRole::JobDescription).unwrap_err();
        assert!(matches!(
            err,
            MatchError::Extraction {
                document: DocumentRole::JobDescription,
                ..
            }
        ));
    }

    #[test]
    fn test_missing_file_is_extraction_error() {
        let err = extract_text(Path::new("/no/such/resume.txt"), DocumentRole::Resume).unwrap_err();
        assert_eq!(err.document(), Some(DocumentRole::Resume));
    }

    #[test]
    fn test_garbage_pdf_is_extraction_error() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(b"not really a pdf").unwrap();
        assert!(extract_text(file.path(), DocumentRole::Resume).is_err());
    }

    #[test]
    fn test_clean_path_input() {
        assert_eq!(clean_path_input("  \"/tmp/cv.pdf\" \n"), PathBuf::from("/tmp/cv.pdf"));
        assert_eq!(clean_path_input("'/tmp/jd.txt'"), PathBuf::from("/tmp/jd.txt"));
        assert_eq!(clean_path_input("/tmp/plain"), PathBuf::from("/tmp/plain"));
        assert_eq!(clean_path_input("\"unbalanced"), PathBuf::from("\"unbalanced"));
    }
}
