//! Caller-held state for the load → extract → save flow.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::extract::{self, TagFrequency};
use crate::report;
use crate::stopwords::{self, StopWordSet};

/// State for one interactive run: the selected document, the loaded
/// stop words, and the most recent extraction.
///
/// The caller owns the session and drives it step by step; each operation
/// checks its preconditions and reports a typed error instead of
/// proceeding on missing input.
#[derive(Debug, Default)]
pub struct Session {
    document: Option<PathBuf>,
    stop_words: Option<StopWordSet>,
    tags: Option<TagFrequency>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the stop-word list. Replaces any previously loaded set.
    pub fn load_stop_words(&mut self, path: &Path) -> Result<&StopWordSet> {
        let set = stopwords::load_stop_words(path)?;
        Ok(self.stop_words.insert(set))
    }

    /// Record the document to extract from. The file must be readable at
    /// selection time; a bad path fails here rather than at extraction.
    pub fn select_document(&mut self, path: &Path) -> Result<()> {
        fs::metadata(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        self.document = Some(path.to_path_buf());
        Ok(())
    }

    /// Run extraction over the selected document with the loaded stop
    /// words. Any previous result is discarded and rebuilt fresh.
    pub fn extract(&mut self) -> Result<&TagFrequency> {
        let document = self.document.as_ref().ok_or(Error::DocumentNotSelected)?;
        let stop_words = self.stop_words.as_ref().ok_or(Error::StopWordsNotLoaded)?;

        let freq = extract::extract_tags(document, stop_words)?;
        Ok(self.tags.insert(freq))
    }

    /// Save the most recent extraction as a `token: count` report.
    pub fn save(&self, path: &Path) -> Result<()> {
        let tags = self.tags.as_ref().ok_or(Error::NothingExtracted)?;
        report::save_tags(path, tags)
    }

    /// The most recent extraction, if one has run.
    #[must_use]
    pub fn tags(&self) -> Option<&TagFrequency> {
        self.tags.as_ref()
    }

    #[must_use]
    pub fn stop_words(&self) -> Option<&StopWordSet> {
        self.stop_words.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn write_tmp(content: &str) -> NamedTempFile {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "{content}").unwrap();
        tmp.flush().unwrap();
        tmp
    }

    #[test]
    fn extract_requires_document() {
        let mut session = Session::new();
        let err = session.extract().unwrap_err();
        assert!(matches!(err, Error::DocumentNotSelected));
    }

    #[test]
    fn extract_requires_stop_words() {
        let doc = write_tmp("some text");
        let mut session = Session::new();
        session.select_document(doc.path()).unwrap();

        let err = session.extract().unwrap_err();
        assert!(matches!(err, Error::StopWordsNotLoaded));
    }

    #[test]
    fn save_requires_extraction() {
        let session = Session::new();
        let err = session.save(Path::new("out.txt")).unwrap_err();
        assert!(matches!(err, Error::NothingExtracted));
    }

    #[test]
    fn select_document_rejects_missing_file() {
        let mut session = Session::new();
        let err = session
            .select_document(Path::new("/nonexistent/doc.txt"))
            .unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
    }

    #[test]
    fn full_flow_load_extract_save() {
        let stops = write_tmp("the\non\n");
        let doc = write_tmp("The Cat sat on the MAT. Cat!");
        let out_dir = TempDir::new().unwrap();
        let out = out_dir.path().join("tags.txt");

        let mut session = Session::new();
        session.load_stop_words(stops.path()).unwrap();
        session.select_document(doc.path()).unwrap();

        let tags = session.extract().unwrap();
        assert_eq!(tags.get("cat"), Some(&2));

        session.save(&out).unwrap();
        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            "cat: 2\nmat: 1\nsat: 1\n"
        );
    }

    #[test]
    fn re_extraction_rebuilds_from_scratch() {
        let stops = write_tmp("the\n");
        let doc_a = write_tmp("alpha alpha");
        let doc_b = write_tmp("beta");

        let mut session = Session::new();
        session.load_stop_words(stops.path()).unwrap();

        session.select_document(doc_a.path()).unwrap();
        session.extract().unwrap();

        session.select_document(doc_b.path()).unwrap();
        let tags = session.extract().unwrap();

        assert!(tags.get("alpha").is_none());
        assert_eq!(tags.get("beta"), Some(&1));
    }
}
