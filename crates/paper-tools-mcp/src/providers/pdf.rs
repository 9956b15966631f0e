//! PDF folder provider: list and extract text from PDFs in one directory.

use std::path::{Component, Path, PathBuf};

use lopdf::Document;

use crate::error::{PdfError, PdfResult, ToolResult};
use crate::pool::WorkerPool;

/// A directory of PDFs, fixed at startup.
#[derive(Debug, Clone)]
pub struct PdfFolder {
    folder: PathBuf,
}

impl PdfFolder {
    /// Serve PDFs from `folder`.
    #[must_use]
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self { folder: folder.into() }
    }

    /// The configured folder.
    #[must_use]
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Whether the folder currently exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.folder.is_dir()
    }

    /// File names (no directory prefix) of the `*.pdf` files in the folder,
    /// sorted by name.
    ///
    /// # Errors
    ///
    /// [`PdfError::FolderNotFound`] if the folder does not exist, or an I/O
    /// error while reading it.
    pub fn list_pdfs(&self) -> PdfResult<Vec<String>> {
        if !self.exists() {
            return Err(PdfError::FolderNotFound(self.folder.clone()));
        }

        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.folder)? {
            let entry = entry?;
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            // `*.pdf` glob semantics: case-sensitive, hidden files excluded
            if name.starts_with('.') || !name.ends_with(".pdf") {
                continue;
            }
            if entry.path().is_file() {
                names.push(name);
            }
        }

        names.sort();
        Ok(names)
    }

    /// Resolve a caller-supplied file name inside the folder.
    ///
    /// # Errors
    ///
    /// [`PdfError::InvalidFilename`] unless `filename` is a single plain path
    /// component; [`PdfError::FileNotFound`] if no such file exists.
    pub fn resolve(&self, filename: &str) -> PdfResult<PathBuf> {
        let mut components = Path::new(filename).components();
        if !matches!((components.next(), components.next()), (Some(Component::Normal(_)), None)) {
            return Err(PdfError::InvalidFilename(filename.to_string()));
        }

        let path = self.folder.join(filename);
        if !path.is_file() {
            return Err(PdfError::FileNotFound {
                filename: filename.to_string(),
                folder: self.folder.clone(),
            });
        }
        Ok(path)
    }

    /// Text of every page of `filename`, in page order, joined by newlines.
    ///
    /// # Errors
    ///
    /// Resolution errors as for [`Self::resolve`], or [`PdfError::Parse`] if
    /// the file or any one of its pages cannot be parsed.
    pub fn extract_text(&self, filename: &str) -> PdfResult<String> {
        let path = self.resolve(filename)?;
        extract_pdf_text(&path, filename)
    }
}

/// Extract every page of the PDF at `path`.
///
/// Each page's trailing line breaks are dropped so pages are separated by
/// exactly one `\n`.
pub fn extract_pdf_text(path: &Path, filename: &str) -> PdfResult<String> {
    let parse_error = |source| PdfError::Parse { filename: filename.to_string(), source };

    let document = Document::load(path).map_err(parse_error)?;

    // BTreeMap keyed by 1-based page number: ascending page order
    let pages = document.get_pages();
    let mut texts = Vec::with_capacity(pages.len());
    for page_number in pages.keys() {
        let text = document.extract_text(&[*page_number]).map_err(parse_error)?;
        texts.push(text.trim_end_matches(['\r', '\n']).to_string());
    }

    Ok(texts.join("\n"))
}

/// Async front of [`PdfFolder`]: every call runs on the worker pool's
/// blocking side.
#[derive(Debug, Clone)]
pub struct PdfFolderProvider {
    folder: PdfFolder,
    pool: WorkerPool,
}

impl PdfFolderProvider {
    /// Create the provider.
    #[must_use]
    pub fn new(folder: PdfFolder, pool: WorkerPool) -> Self {
        Self { folder, pool }
    }

    /// The configured folder.
    #[must_use]
    pub fn folder(&self) -> &Path {
        self.folder.folder()
    }

    /// See [`PdfFolder::list_pdfs`].
    pub async fn list_pdfs(&self) -> ToolResult<Vec<String>> {
        let folder = self.folder.clone();
        let names = self.pool.run_blocking(move || folder.list_pdfs()).await??;
        tracing::debug!(count = names.len(), folder = %self.folder().display(), "Listed PDFs");
        Ok(names)
    }

    /// See [`PdfFolder::extract_text`].
    pub async fn extract_text(&self, filename: &str) -> ToolResult<String> {
        tracing::info!(filename, "Extracting PDF text");
        let folder = self.folder.clone();
        let name = filename.to_string();
        let text = self.pool.run_blocking(move || folder.extract_text(&name)).await??;
        Ok(text)
    }
}
