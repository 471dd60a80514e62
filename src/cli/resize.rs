//! `resize` command: list, inspect or resize images.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::ResizeArgs;
use crate::config::ProjectConfig;
use crate::image::{
    ImageInfo, ResizeTarget, SUPPORTED_FORMATS, default_output_name, find_images,
    format_file_size, read_info, resize_image, target_dimensions,
};
use crate::log;
use crate::utils::{path::resolve_path, path::to_slash, plural_count};

/// Dispatch on the given arguments
///
/// - no image: list supported images under the project root
/// - image without a target: print its dimensions, size and format
/// - image with a target: resize it next to the original
pub fn run_resize(config: &ProjectConfig, args: &ResizeArgs) -> Result<()> {
    let Some(image) = &args.image else {
        list_images(config.get_root());
        return Ok(());
    };

    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let input = resolve_path(image, &cwd, config.get_root());

    match ResizeTarget::from_options(args.scale, args.width, args.height) {
        None => show_info(&input),
        Some(target) => resize(&input, target, args),
    }
}

fn list_images(root: &Path) {
    let images = find_images(root);
    if images.is_empty() {
        log!("resize"; "no images found under {}", root.display());
        log!("resize"; "supported formats: {}", SUPPORTED_FORMATS.join(", "));
        return;
    }

    log!("resize"; "found {}", plural_count(images.len(), "image"));
    for rel in &images {
        match read_info(&root.join(rel)) {
            Ok(info) => println!(
                "  {} ({}x{}, {})",
                to_slash(rel),
                info.width,
                info.height,
                format_file_size(info.file_size)
            ),
            Err(_) => println!("  {}", to_slash(rel)),
        }
    }
}

fn show_info(input: &Path) -> Result<()> {
    let info = read_info(input)?;
    log!("resize"; "{}", input.display());
    println!("  dimensions: {}x{}", info.width, info.height);
    println!("  file size:  {}", format_file_size(info.file_size));
    println!("  format:     {}", format_name(&info));
    Ok(())
}

fn resize(input: &Path, target: ResizeTarget, args: &ResizeArgs) -> Result<()> {
    let info = read_info(input)?;
    let size = target_dimensions((info.width, info.height), target)?;
    let output = output_path(input, args.output.as_deref());

    let new_size = resize_image(input, &output, size, args.force)
        .with_context(|| format!("failed to resize {}", input.display()))?;

    log!(
        "resize";
        "{}x{} -> {}x{}",
        info.width, info.height, size.0, size.1
    );
    log!(
        "resize";
        "{} -> {}",
        format_file_size(info.file_size),
        format_file_size(new_size)
    );
    log!("resize"; "saved {}", output.display());
    Ok(())
}

/// Output lands next to the input; only the file name of `-o` is used
fn output_path(input: &Path, requested: Option<&Path>) -> PathBuf {
    let name = requested
        .and_then(Path::file_name)
        .map(PathBuf::from)
        .unwrap_or_else(|| default_output_name(input));
    input.parent().map_or_else(|| name.clone(), |dir| dir.join(&name))
}

fn format_name(info: &ImageInfo) -> String {
    info.format
        .map(|format| format!("{format:?}").to_uppercase())
        .unwrap_or_else(|| "unknown".to_string())
}
