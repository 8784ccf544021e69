//! Archive packaging for the generated document pair.
//!
//! The packager performs no validation of its own: it preserves the document
//! bytes exactly as given and names the two entries with their conventional
//! native-language filenames. Entry metadata is pinned (fixed timestamp) so
//! identical inputs produce identical archives.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::errors::EngineError;
use crate::models::GeneratedDocument;

/// Fixed logical filename of the standardized curriculum document.
pub const RIREKISHO_FILENAME: &str = "履歴書.docx";

/// Fixed logical filename of the free-form work-history document.
pub const SHOKUMU_FILENAME: &str = "職務経歴書.docx";

/// Bundles the two serialized documents into a single compressed archive
/// containing exactly those two entries, in the order given.
pub fn bundle_documents(documents: [&GeneratedDocument; 2]) -> Result<Vec<u8>, EngineError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        // Pinned timestamp (DOS epoch) keeps the archive deterministic.
        .last_modified_time(zip::DateTime::default());

    for document in documents {
        writer.start_file(document.filename, options)?;
        writer
            .write_all(&document.bytes)
            .map_err(|e| EngineError::Packaging(e.into()))?;
    }

    Ok(writer.finish()?.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn documents() -> (GeneratedDocument, GeneratedDocument) {
        (
            GeneratedDocument {
                filename: RIREKISHO_FILENAME,
                bytes: b"rirekisho-bytes".to_vec(),
            },
            GeneratedDocument {
                filename: SHOKUMU_FILENAME,
                bytes: b"shokumu-bytes".to_vec(),
            },
        )
    }

    #[test]
    fn test_archive_contains_exactly_two_named_entries() {
        let (rirekisho, shokumu) = documents();
        let bytes = bundle_documents([&rirekisho, &shokumu]).unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);
        assert_eq!(archive.by_index(0).unwrap().name(), RIREKISHO_FILENAME);
        assert_eq!(archive.by_index(1).unwrap().name(), SHOKUMU_FILENAME);
    }

    #[test]
    fn test_documents_round_trip_byte_for_byte() {
        let (rirekisho, shokumu) = documents();
        let bytes = bundle_documents([&rirekisho, &shokumu]).unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut recovered = Vec::new();
        archive
            .by_name(SHOKUMU_FILENAME)
            .unwrap()
            .read_to_end(&mut recovered)
            .unwrap();
        assert_eq!(recovered, shokumu.bytes);
    }

    #[test]
    fn test_identical_inputs_produce_identical_archives() {
        let (rirekisho, shokumu) = documents();
        let first = bundle_documents([&rirekisho, &shokumu]).unwrap();
        let second = bundle_documents([&rirekisho, &shokumu]).unwrap();
        assert_eq!(first, second);
    }
}
