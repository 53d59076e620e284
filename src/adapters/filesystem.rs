use crate::ports::FileSystemPort;
use anyhow::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

pub struct FileSystemAdapter;

impl FileSystemAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystemPort for FileSystemAdapter {
    fn list_files(&self, root: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
        let mut builder = WalkBuilder::new(root);
        // Ignore files do not apply here; hidden entries are still skipped.
        builder.standard_filters(false);
        builder.hidden(true);
        if !recursive {
            builder.max_depth(Some(1));
        }

        let mut files: Vec<PathBuf> = builder
            .build()
            .filter_map(|entry| {
                let entry = entry.ok()?;
                let path = entry.path();
                if !path.is_file() {
                    return None;
                }
                Some(path.to_path_buf())
            })
            .collect();

        // Walk order is platform dependent; digests must land in a stable
        // file order.
        files.sort();
        Ok(files)
    }
}
