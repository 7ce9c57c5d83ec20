#![no_main]

use libfuzzer_sys::fuzz_target;
use notebook_pages::notebook::classify::classify_document;
use notebook_pages::notebook::{NotebookDocument, title_from_document};

fuzz_target!(|data: &[u8]| {
    // Parsing may fail; whatever parses must classify and title without panicking
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(doc) = NotebookDocument::from_json(text) {
        let _ = classify_document(&doc);
        let _ = title_from_document(&doc);
    }
});
