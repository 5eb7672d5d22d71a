use image::imageops::FilterType;
use image::{DynamicImage, ImageReader, RgbImage};
use rten_tensor::Tensor;
use std::io::Cursor;
use std::path::Path;

use crate::error::{DermaError, Result};

/// Model input tensor, laid out as (batch, height, width, channels)
pub type InputTensor = Tensor<f32>;

/// Spatial size both skin classifiers were trained on
pub const DEFAULT_INPUT_SIZE: u32 = 112;

/// Decode uploaded JPEG/PNG bytes into an RGB image
pub fn decode_image(bytes: &[u8]) -> Result<RgbImage> {
    if bytes.is_empty() {
        return Err(DermaError::InvalidImageFormat("empty upload".to_string()));
    }
    let img = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DermaError::InvalidImageFormat(e.to_string()))?
        .decode()
        .map_err(|e| DermaError::InvalidImageFormat(e.to_string()))?;
    to_rgb(img)
}

/// Open an image file from disk
pub fn open_image(path: &Path) -> Result<RgbImage> {
    let img = ImageReader::open(path)
        .map_err(|e| DermaError::InvalidImageFormat(format!("{}: {}", path.display(), e)))?
        .with_guessed_format()
        .map_err(|e| DermaError::InvalidImageFormat(format!("{}: {}", path.display(), e)))?
        .decode()
        .map_err(|e| DermaError::InvalidImageFormat(format!("{}: {}", path.display(), e)))?;
    to_rgb(img)
}

/// Convert any decoded color type to 8-bit RGB, rejecting degenerate images
pub fn to_rgb(img: DynamicImage) -> Result<RgbImage> {
    let rgb = img.to_rgb8();
    ensure_not_empty(&rgb)?;
    Ok(rgb)
}

/// Reject images with a zero width or height
pub fn ensure_not_empty(img: &RgbImage) -> Result<()> {
    if img.width() == 0 || img.height() == 0 {
        return Err(DermaError::InvalidImageFormat(format!(
            "image has zero size ({}x{})",
            img.width(),
            img.height()
        )));
    }
    Ok(())
}

/// Resize to a square of `size` pixels with bilinear filtering
pub fn resize(img: &RgbImage, size: u32) -> RgbImage {
    image::imageops::resize(img, size, size, FilterType::Triangle)
}

/// Lay out pixels as (1, height, width, 3) and scale each channel to [0, 1]
pub fn to_tensor(img: &RgbImage) -> InputTensor {
    let (width, height) = img.dimensions();
    let data: Vec<f32> = img.as_raw().iter().map(|&v| v as f32 / 255.0).collect();
    let shape = [1, height as usize, width as usize, 3];
    Tensor::from_data(&shape, data)
}

/// Validate the image and the target size, then resize
pub fn resize_for_model(img: &RgbImage, size: u32) -> Result<RgbImage> {
    ensure_not_empty(img)?;
    if size == 0 {
        return Err(DermaError::Config("input size must be positive".to_string()));
    }
    Ok(resize(img, size))
}
