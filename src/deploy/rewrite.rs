// ABOUTME: Channel isolation for functions: installs a per-channel entry point.
// ABOUTME: Rewrites package.json `main` and generates aliased re-exports of the original module.

use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::discovery::{ExportDecl, ExportDiscovery};
use crate::types::ChannelId;

/// Package manifest read from the project directory.
pub const MANIFEST_FILE: &str = "package.json";

#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid JSON: {source}")]
    InvalidManifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0} has no string \"main\" field")]
    MissingMain(PathBuf),
}

/// What a channel rewrite changed on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelRewrite {
    pub manifest: PathBuf,
    /// `main` before the rewrite, relative to the project directory.
    pub original_main: String,
    /// `main` after the rewrite.
    pub channel_main: String,
    pub exports: Vec<ExportDecl>,
}

/// Split a `main` path into directory, file stem and extension.
fn split_main(main: &str) -> (Option<&str>, &str, Option<&str>) {
    let (dir, file) = match main.rsplit_once('/') {
        Some((dir, file)) => (Some(dir), file),
        None => (None, main),
    };
    match file.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (dir, stem, Some(ext)),
        _ => (dir, file, None),
    }
}

/// The channel-scoped sibling of `main`: `lib/index.js` becomes `lib/index-<channel>.js`.
pub fn channel_main(main: &str, channel: &ChannelId) -> String {
    let (dir, stem, ext) = split_main(main);
    let file = match ext {
        Some(ext) => format!("{stem}-{channel}.{ext}"),
        None => format!("{stem}-{channel}"),
    };
    match dir {
        Some(dir) => format!("{dir}/{file}"),
        None => file,
    }
}

/// One `export { N as N<channel> } from './<module>';` line per export.
pub fn render_reexports(exports: &[ExportDecl], module_file: &str, channel: &ChannelId) -> String {
    exports
        .iter()
        .map(|export| {
            format!(
                "export {{ {name} as {name}{channel} }} from './{module_file}';\n",
                name = export.name
            )
        })
        .collect()
}

fn read(path: &Path) -> Result<String, RewriteError> {
    std::fs::read_to_string(path).map_err(|source| RewriteError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn write(path: &Path, contents: &str) -> Result<(), RewriteError> {
    std::fs::write(path, contents).map_err(|source| RewriteError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Point the project's entry point at a channel-specific module that re-exports
/// every export of the original under a channel-suffixed name.
///
/// The manifest is rewritten before the entry point is read, so a missing entry
/// point leaves the manifest already pointing at the channel file.
pub fn rewrite_entry_point(
    project_dir: &Path,
    channel: &ChannelId,
    discovery: &dyn ExportDiscovery,
) -> Result<ChannelRewrite, RewriteError> {
    let manifest_path = project_dir.join(MANIFEST_FILE);
    let mut manifest: Value =
        serde_json::from_str(&read(&manifest_path)?).map_err(|source| {
            RewriteError::InvalidManifest {
                path: manifest_path.clone(),
                source,
            }
        })?;

    let original_main = manifest
        .get("main")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| RewriteError::MissingMain(manifest_path.clone()))?;
    let channel_main = channel_main(&original_main, channel);

    if let Some(fields) = manifest.as_object_mut() {
        fields.insert("main".to_string(), Value::String(channel_main.clone()));
    }
    let mut rendered = serde_json::to_string_pretty(&manifest).map_err(|source| {
        RewriteError::InvalidManifest {
            path: manifest_path.clone(),
            source,
        }
    })?;
    rendered.push('\n');
    write(&manifest_path, &rendered)?;
    tracing::debug!("Set {} main to {}", manifest_path.display(), channel_main);

    let source = read(&project_dir.join(&original_main))?;
    let exports = discovery.discover(&source);

    let module_file = original_main
        .rsplit_once('/')
        .map_or(original_main.as_str(), |(_, file)| file);
    let channel_path = project_dir.join(&channel_main);
    write(
        &channel_path,
        &render_reexports(&exports, module_file, channel),
    )?;
    tracing::info!(
        "Wrote {} with {} channel export(s)",
        channel_path.display(),
        exports.len()
    );

    Ok(ChannelRewrite {
        manifest: manifest_path,
        original_main,
        channel_main,
        exports,
    })
}
