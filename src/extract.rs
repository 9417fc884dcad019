use std::path::Path;

use log::debug;

/// Extract all text from a PDF file.
///
/// Page text is returned concatenated in document order. Any failure to
/// open or parse the file degrades to an empty string; there is no
/// partial-page recovery.
pub fn extract_text(path: &Path) -> String {
    match pdf_extract::extract_text(path) {
        Ok(mut text) => {
            debug!("extracted {} bytes of text from {}", text.len(), path.display());
            // Section regexes anchor on newlines; the last page must end
            // with one like every other page.
            if !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
            }
            text
        }
        Err(e) => {
            println!("Error reading {}: {}", path.display(), e);
            String::new()
        }
    }
}
