//! Generation driver: the fixed set of outputs and the sequential run.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::favicon::write_favicon;
use crate::rendering::raster::write_badge;
use crate::rendering::BadgeStyle;
use crate::svg::write_badge_svg;
use crate::{GeneratedAsset, IconConfig, Result};

/// One file the driver produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputJob {
    /// Transparent PNG badge
    Badge { size: u32, path: PathBuf },
    /// Multi-resolution ICO
    Favicon { path: PathBuf },
    /// 512x512 SVG badge
    Svg { path: PathBuf },
}

impl OutputJob {
    pub fn path(&self) -> &Path {
        match self {
            OutputJob::Badge { path, .. } | OutputJob::Favicon { path } | OutputJob::Svg { path } => path.as_path(),
        }
    }
}

/// Every output of a run, in the order it is written.
///
/// The maskable variants are rendered exactly like the plain icons; no
/// safe-area padding is added.
pub fn required_outputs(config: &IconConfig, root: &Path) -> Vec<OutputJob> {
    let web = root.join(&config.web_dir);
    let icons = root.join(&config.icons_dir);
    vec![
        OutputJob::Badge { size: 32, path: web.join("favicon.png") },
        OutputJob::Badge { size: 192, path: icons.join("Icon-192.png") },
        OutputJob::Badge { size: 512, path: icons.join("Icon-512.png") },
        OutputJob::Badge { size: 192, path: icons.join("Icon-maskable-192.png") },
        OutputJob::Badge { size: 512, path: icons.join("Icon-maskable-512.png") },
        OutputJob::Favicon { path: web.join("favicon.ico") },
        OutputJob::Svg { path: web.join("favicon.svg") },
        OutputJob::Svg { path: icons.join("Icon.svg") },
    ]
}

/// Create the web and icons directories under `root` if they are missing.
pub fn ensure_output_dirs(config: &IconConfig, root: &Path) -> Result<()> {
    for dir in [root.join(&config.web_dir), root.join(&config.icons_dir)] {
        if dir.is_dir() {
            debug!("{} already exists", dir.display());
        } else {
            fs::create_dir_all(&dir)?;
            debug!("created {}", dir.display());
        }
    }
    Ok(())
}

/// Write every output under `root`, calling `progress` after each file.
///
/// The first failure aborts the run; files already written are left in
/// place.
pub fn generate_all<F>(config: &IconConfig, root: &Path, mut progress: F) -> Result<Vec<GeneratedAsset>>
where
    F: FnMut(&GeneratedAsset),
{
    config.validate()?;
    ensure_output_dirs(config, root)?;

    let style = BadgeStyle::from(config);
    let text = config.label.as_str();
    let mut assets = Vec::new();

    for job in required_outputs(config, root) {
        let asset = match &job {
            OutputJob::Badge { size, path } => write_badge(path, *size, text, &style)?,
            OutputJob::Favicon { path } => write_favicon(path, text, &style)?,
            OutputJob::Svg { path } => write_badge_svg(path, text, config.background, config.foreground)?,
        };
        debug!("{} sha256={}", asset.path.display(), asset.sha256);
        progress(&asset);
        assets.push(asset);
    }

    Ok(assets)
}
