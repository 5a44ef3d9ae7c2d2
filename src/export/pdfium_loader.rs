//! PDFium library loader with platform-specific search paths.
//!
//! PDF export binds to the PDFium dynamic library at runtime. A copy shipped
//! next to the binary wins over the system one.

use super::{ExportError, ExportResult};
use pdfium_render::prelude::*;
use std::path::PathBuf;

/// Env var pointing at a directory that contains the PDFium library
pub const PDFIUM_DIR_ENV: &str = "PDFIUM_DYNAMIC_LIB_PATH";

pub struct PdfiumLoader;

impl PdfiumLoader {
    /// Load the PDFium library from known search paths or system library.
    ///
    /// Search order:
    /// 1. `$PDFIUM_DYNAMIC_LIB_PATH`
    /// 2. `lib/` in current working directory (development)
    /// 3. `lib/` relative to executable
    /// 4. `Resources/lib/` in a macOS bundle
    /// 5. System library fallback
    pub fn load() -> ExportResult<Pdfium> {
        for path in Self::search_paths() {
            if path.exists() {
                match Pdfium::bind_to_library(&path) {
                    Ok(bindings) => return Ok(Pdfium::new(bindings)),
                    Err(e) => tracing::debug!(path = %path.display(), error = ?e, "Skipping PDFium candidate"),
                }
            }
        }
        Pdfium::bind_to_system_library()
            .map(Pdfium::new)
            .map_err(|e| ExportError::Document(format!("Failed to load pdfium: {:?}", e)))
    }

    /// Platform file name, e.g. `libpdfium.so`
    pub fn library_name() -> String {
        Pdfium::pdfium_platform_library_name().to_string_lossy().into_owned()
    }

    fn search_paths() -> Vec<PathBuf> {
        let name = Self::library_name();
        let mut paths = Vec::new();

        if let Some(dir) = std::env::var_os(PDFIUM_DIR_ENV) {
            paths.push(PathBuf::from(dir).join(&name));
        }

        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join("lib").join(&name));
        }

        if let Ok(exe) = std::env::current_exe() {
            if let Some(parent) = exe.parent() {
                paths.push(parent.join("lib").join(&name));

                if let Some(grandparent) = parent.parent() {
                    paths.push(grandparent.join("Resources/lib").join(&name));
                }
            }
        }

        paths
    }
}
