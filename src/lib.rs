//! Iconsmith
//!
//! Generates the icon set for a web build from a text label and a color
//! pair: rounded-square badges rendered to PNG at several sizes, a
//! multi-resolution `favicon.ico`, and a 512x512 SVG variant.
//!
//! # Example
//!
//! ```no_run
//! use iconsmith::{generate_all, IconConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = IconConfig {
//!     label: "AB".to_string(),
//!     ..Default::default()
//! };
//!
//! let assets = generate_all(&config, std::path::Path::new("."), |asset| {
//!     println!("Created: {}", asset.path.display());
//! })?;
//! assert_eq!(assets.len(), 8);
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

pub mod config;
pub mod error;
pub mod favicon;
pub mod generate;
pub mod rendering;
pub mod svg;

pub use config::{Color, IconConfig};
pub use error::{Error, Result};
pub use generate::{ensure_output_dirs, generate_all, required_outputs, OutputJob};
pub use rendering::BadgeStyle;

/// File format of a generated asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Transparent RGBA PNG
    Png,
    /// Multi-resolution icon container
    Ico,
    /// Vector badge
    Svg,
}

/// A file written by the generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAsset {
    /// Where the file was written
    pub path: PathBuf,
    pub kind: AssetKind,
    /// Pixel dimensions; one entry per frame for ICO files
    pub dimensions: Vec<(u32, u32)>,
    /// Hex SHA-256 of the bytes written
    pub sha256: String,
}

impl GeneratedAsset {
    pub fn new(path: &Path, kind: AssetKind, dimensions: Vec<(u32, u32)>, bytes: &[u8]) -> Self {
        Self {
            path: path.to_path_buf(),
            kind,
            dimensions,
            sha256: hex::encode(Sha256::digest(bytes)),
        }
    }

    /// Human-readable size, e.g. `32x32`, `SVG` or `16x16, 32x32`.
    pub fn describe(&self) -> String {
        match self.kind {
            AssetKind::Svg => "SVG".to_string(),
            _ => self
                .dimensions
                .iter()
                .map(|(w, h)| format!("{w}x{h}"))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}
