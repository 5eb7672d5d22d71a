use dermascan::error::Result;
use dermascan::inference::preprocessing::InputTensor;
use dermascan::{Artifacts, DermaError, InferenceSettings, ProbabilityModel};
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb, Rgba};
use std::io::Cursor;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Model stub that always returns the same scores and counts its calls
pub struct FakeModel {
    name: String,
    scores: Vec<f32>,
    calls: AtomicUsize,
}

impl FakeModel {
    pub fn new(name: &str, scores: Vec<f32>) -> Self {
        Self {
            name: name.to_string(),
            scores,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ProbabilityModel for FakeModel {
    fn predict(&self, _input: &InputTensor) -> Result<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.scores.clone())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Model stub whose every invocation fails
pub struct FailingModel;

impl ProbabilityModel for FailingModel {
    fn predict(&self, _input: &InputTensor) -> Result<Vec<f32>> {
        Err(DermaError::ClassificationUnavailable(
            "runtime exploded".to_string(),
        ))
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// Scores of length `len` where `index` holds `confidence` and the rest share
/// the remainder evenly
pub fn peaked(len: usize, index: usize, confidence: f32) -> Vec<f32> {
    let rest = (1.0 - confidence) / (len - 1) as f32;
    (0..len)
        .map(|i| if i == index { confidence } else { rest })
        .collect()
}

/// Creates a solid red RGB image of the given size
pub fn red_image(width: u32, height: u32) -> image::RgbImage {
    ImageBuffer::from_fn(width, height, |_, _| Rgb([255u8, 0u8, 0u8]))
}

/// Encodes an image to in-memory bytes, as an upload would arrive
pub fn encode(img: DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, format)
        .expect("Failed to encode test image");
    bytes.into_inner()
}

/// PNG bytes of a solid red RGB image
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    encode(DynamicImage::ImageRgb8(red_image(width, height)), ImageFormat::Png)
}

/// PNG bytes of a half transparent RGBA image
pub fn rgba_png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = ImageBuffer::from_fn(width, height, |_, _| Rgba([0u8, 128u8, 255u8, 128u8]));
    encode(DynamicImage::ImageRgba8(img), ImageFormat::Png)
}

/// Artifacts backed by fake models.
/// Returns the artifacts and the individual fakes so tests can count calls.
pub fn fake_artifacts(
    screening: Vec<f32>,
    condition: Vec<f32>,
    diabetes: Vec<f32>,
) -> (Artifacts, Arc<FakeModel>, Arc<FakeModel>, Arc<FakeModel>) {
    let screening = Arc::new(FakeModel::new("screening", screening));
    let condition = Arc::new(FakeModel::new("condition", condition));
    let diabetes = Arc::new(FakeModel::new("diabetes", diabetes));
    let artifacts = Artifacts::from_models(
        screening.clone(),
        condition.clone(),
        diabetes.clone(),
        small_settings(),
    );
    (artifacts, screening, condition, diabetes)
}

/// Default threshold with a small input size to keep tests fast
pub fn small_settings() -> InferenceSettings {
    InferenceSettings {
        input_size: 16,
        ..InferenceSettings::default()
    }
}
