//! Proportional image resizing.
//!
//! The arithmetic ([`target_dimensions`]), naming ([`default_output_name`])
//! and formatting ([`format_file_size`]) helpers are pure; only
//! [`read_info`], [`find_images`] and [`resize_image`] touch the filesystem.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use thiserror::Error;

use crate::asset::find_files;

/// Image suffixes the resizer accepts (lowercase, compared case-insensitively)
pub const SUPPORTED_FORMATS: &[&str] = &[
    ".bmp", ".gif", ".jpeg", ".jpg", ".png", ".tif", ".tiff", ".webp",
];

/// Quality used when writing JPEG output
const JPEG_QUALITY: u8 = 95;

/// Resize errors
#[derive(Debug, Error)]
pub enum ResizeError {
    #[error("scale factor must be positive, got {0}")]
    InvalidScale(f64),

    #[error("{0} must be positive")]
    InvalidDimension(&'static str),

    #[error("resized image would be {0}x{1} pixels")]
    EmptyResult(u32, u32),

    #[error("resized {0} would exceed {max} pixels", max = u32::MAX)]
    TooLarge(&'static str),

    #[error("unsupported image format `{0}` (supported: {list})", list = SUPPORTED_FORMATS.join(", "))]
    Unsupported(String),

    #[error("image file not found: `{}`", .0.display())]
    NotFound(PathBuf),

    #[error("`{}` already exists, pass --force to overwrite", .0.display())]
    OutputExists(PathBuf),

    #[error("IO error on `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// How the new size is derived from the original
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeTarget {
    /// Multiply both sides (0.5 halves, 2.0 doubles)
    Scale(f64),
    /// Fixed width, height follows the aspect ratio
    Width(u32),
    /// Fixed height, width follows the aspect ratio
    Height(u32),
}

impl ResizeTarget {
    /// Pick the target from mutually exclusive CLI options
    pub fn from_options(
        scale: Option<f64>,
        width: Option<u32>,
        height: Option<u32>,
    ) -> Option<Self> {
        scale
            .map(Self::Scale)
            .or(width.map(Self::Width))
            .or(height.map(Self::Height))
    }
}

/// Compute the resized dimensions, keeping the aspect ratio
///
/// Fractional results are truncated. A side that does not fit in `u32` is
/// an error rather than a wrapped value.
///
/// ```ignore
/// target_dimensions((800, 600), ResizeTarget::Scale(0.5)) -> (400, 300)
/// target_dimensions((800, 600), ResizeTarget::Width(400)) -> (400, 300)
/// target_dimensions((800, 600), ResizeTarget::Height(150)) -> (200, 150)
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn target_dimensions(
    original: (u32, u32),
    target: ResizeTarget,
) -> Result<(u32, u32), ResizeError> {
    let (width, height) = original;
    if width == 0 || height == 0 {
        return Err(ResizeError::EmptyResult(width, height));
    }

    // side * num / den, with the product taken in u64
    let scaled = |side: u32, num: u32, den: u32, name: &'static str| {
        let value = u64::from(side) * u64::from(num) / u64::from(den);
        u32::try_from(value).map_err(|_| ResizeError::TooLarge(name))
    };
    let multiplied = |side: u32, factor: f64, name: &'static str| {
        let value = (f64::from(side) * factor).trunc();
        if value > f64::from(u32::MAX) {
            return Err(ResizeError::TooLarge(name));
        }
        Ok(value as u32)
    };

    let (new_width, new_height) = match target {
        ResizeTarget::Scale(factor) => {
            if !(factor.is_finite() && factor > 0.0) {
                return Err(ResizeError::InvalidScale(factor));
            }
            (
                multiplied(width, factor, "width")?,
                multiplied(height, factor, "height")?,
            )
        }
        ResizeTarget::Width(0) => return Err(ResizeError::InvalidDimension("width")),
        ResizeTarget::Height(0) => return Err(ResizeError::InvalidDimension("height")),
        ResizeTarget::Width(target) => (target, scaled(height, target, width, "height")?),
        ResizeTarget::Height(target) => (scaled(width, target, height, "width")?, target),
    };

    if new_width == 0 || new_height == 0 {
        return Err(ResizeError::EmptyResult(new_width, new_height));
    }
    Ok((new_width, new_height))
}

/// Default output file name: `photo.png` -> `photo_resized.png`
pub fn default_output_name(path: &Path) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    match path.extension() {
        Some(ext) => PathBuf::from(format!("{stem}_resized.{}", ext.to_string_lossy())),
        None => PathBuf::from(format!("{stem}_resized")),
    }
}

/// Human-readable file size with two decimals (1024-based)
///
/// ```ignore
/// format_file_size(512)     -> "512.00 B"
/// format_file_size(1536)    -> "1.50 KB"
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn format_file_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    for unit in ["B", "KB", "MB", "GB"] {
        if size < 1024.0 {
            return format!("{size:.2} {unit}");
        }
        size /= 1024.0;
    }
    format!("{size:.2} TB")
}

/// Whether the path has a supported image suffix
pub fn is_supported(path: &Path) -> bool {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    SUPPORTED_FORMATS.iter().any(|ext| name.ends_with(ext))
}

/// All supported images under `root`, relative to it and sorted
pub fn find_images(root: &Path) -> Vec<PathBuf> {
    find_files(root, SUPPORTED_FORMATS, root)
}

/// Dimensions, size on disk and format of an image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub file_size: u64,
    pub format: Option<ImageFormat>,
}

/// Read image properties without decoding the pixel data
pub fn read_info(path: &Path) -> Result<ImageInfo, ResizeError> {
    check_input(path)?;
    let (width, height) = image::image_dimensions(path)?;
    let file_size = fs::metadata(path)
        .map_err(|err| ResizeError::Io(path.to_path_buf(), err))?
        .len();

    Ok(ImageInfo {
        width,
        height,
        file_size,
        format: ImageFormat::from_path(path).ok(),
    })
}

/// Resize `input` to `size` with Lanczos3 and write it to `output`
///
/// The output format follows the output extension. Refuses to replace an
/// existing output unless `overwrite` is set. Returns the new file size.
pub fn resize_image(
    input: &Path,
    output: &Path,
    size: (u32, u32),
    overwrite: bool,
) -> Result<u64, ResizeError> {
    check_input(input)?;
    if output.exists() && !overwrite {
        return Err(ResizeError::OutputExists(output.to_path_buf()));
    }
    let format = ImageFormat::from_path(output)?;

    let img = image::open(input)?;
    let resized = img.resize_exact(size.0, size.1, FilterType::Lanczos3);

    let io_err = |err: std::io::Error| ResizeError::Io(output.to_path_buf(), err);
    if format == ImageFormat::Jpeg {
        // JPEG has no alpha channel
        let rgb = DynamicImage::ImageRgb8(resized.to_rgb8());
        let writer = BufWriter::new(File::create(output).map_err(io_err)?);
        rgb.write_with_encoder(JpegEncoder::new_with_quality(writer, JPEG_QUALITY))?;
    } else {
        resized.save_with_format(output, format)?;
    }

    Ok(fs::metadata(output).map_err(io_err)?.len())
}

/// Input must exist and carry a supported suffix
fn check_input(path: &Path) -> Result<(), ResizeError> {
    if !path.is_file() {
        return Err(ResizeError::NotFound(path.to_path_buf()));
    }
    if !is_supported(path) {
        let ext = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        return Err(ResizeError::Unsupported(ext));
    }
    Ok(())
}
