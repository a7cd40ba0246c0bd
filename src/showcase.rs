//! Aggregate HTML preview of the generated assets.
//!
//! Presentation only: the page references files by path relative to the
//! output directory so it can be opened straight from `dist/`. Nothing
//! else consumes it.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Writes `index.html` under `out_dir`, with one tile per file.
///
/// Paths outside `out_dir` are skipped; the page can only reference files
/// it can reach relatively.
pub fn write_page(out_dir: &Path, files: &[PathBuf]) -> Result<PathBuf> {
    let mut tiles = String::new();
    for file in files {
        let Ok(relative) = file.strip_prefix(out_dir) else {
            continue;
        };
        let href = relative.to_string_lossy().replace('\\', "/");
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let _ = write!(
            tiles,
            "    <figure><img src=\"{href}\" alt=\"{name}\"><figcaption>{name}</figcaption></figure>\n"
        );
    }

    let page = format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Zoo logo assets</title>\n\
         <style>\n\
         body {{ font-family: sans-serif; background: #f4f4f4; margin: 2rem; }}\n\
         main {{ display: grid; grid-template-columns: repeat(auto-fill, minmax(160px, 1fr)); gap: 1rem; }}\n\
         figure {{ background: repeating-conic-gradient(#ddd 0% 25%, #fff 0% 50%) 0 0 / 16px 16px; margin: 0; padding: 1rem; text-align: center; }}\n\
         img {{ max-width: 128px; max-height: 128px; }}\n\
         figcaption {{ font-size: 0.75rem; word-break: break-all; margin-top: 0.5rem; }}\n\
         </style>\n\
         </head>\n\
         <body>\n\
         <h1>Zoo logo assets</h1>\n\
         <main>\n{tiles}</main>\n\
         </body>\n\
         </html>\n"
    );

    fs::create_dir_all(out_dir).map_err(|e| Error::io(out_dir, e))?;
    let path = out_dir.join("index.html");
    fs::write(&path, page).map_err(|e| Error::io(&path, e))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_references_files_relatively() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![
            dir.path().join("icons/zoo-64.png"),
            dir.path().join("favicons/favicon-32x32.png"),
        ];
        let page = write_page(dir.path(), &files).unwrap();
        let html = std::fs::read_to_string(page).unwrap();
        assert!(html.contains("src=\"icons/zoo-64.png\""));
        assert!(html.contains("src=\"favicons/favicon-32x32.png\""));
    }

    #[test]
    fn files_outside_out_dir_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![PathBuf::from("/elsewhere/zoo-64.png")];
        let page = write_page(dir.path(), &files).unwrap();
        let html = std::fs::read_to_string(page).unwrap();
        assert!(!html.contains("elsewhere"));
    }
}
