//! Image utilities.
//!
//! # Modules
//!
//! - [`resize`]: proportional resizing and image discovery

pub mod resize;

pub use resize::{
    ImageInfo, ResizeTarget, SUPPORTED_FORMATS, default_output_name, find_images,
    format_file_size, read_info, resize_image, target_dimensions,
};
