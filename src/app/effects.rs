use std::path::Path;

use anyhow::{Context, Result};

use crate::app::{App, Message, Model, ToastLevel};

/// Extensions the upload prompt accepts.
pub const UPLOAD_EXTENSIONS: &[&str] = &["txt"];

impl App {
    pub(super) fn handle_message_side_effects(&self, model: &mut Model, msg: &Message) {
        if let Message::UploadFile(path) = msg {
            upload_file(model, path);
        }
    }
}

/// Read `path` and add it to the store, reporting the outcome as a toast.
pub(super) fn upload_file(model: &mut Model, path: &Path) {
    if path.as_os_str().is_empty() {
        model.show_toast(ToastLevel::Warning, "Please choose a text file");
        return;
    }
    match read_upload(path) {
        Ok((name, bytes)) => model.upload_bytes(&name, bytes),
        Err(err) => {
            tracing::warn!(path = %path.display(), "upload failed: {err:#}");
            model.show_toast(ToastLevel::Error, format!("Upload failed: {err:#}"));
        }
    }
}

fn read_upload(path: &Path) -> Result<(String, Vec<u8>)> {
    let accepted = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            UPLOAD_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        });
    if !accepted {
        anyhow::bail!(
            "{} is not a text file (expected .{})",
            path.display(),
            UPLOAD_EXTENSIONS.join(", .")
        );
    }
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .with_context(|| format!("{} has no file name", path.display()))?;
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok((name, bytes))
}
