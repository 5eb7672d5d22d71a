mod common;

use common::*;
use std::sync::Arc;

#[test]
fn test_debug_output_per_step() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let debug_dir = dir.path().join("debug");

    let model = Arc::new(FakeModel::new("condition", peaked(10, 1, 0.7)));
    let flow = ClassificationFlow::condition(model, &small_settings()).with_debug(debug_dir.clone())?;
    let outcome = flow.classify_image(red_image(40, 30))?;
    assert_eq!(outcome.reported_label(), "Cold Sore");

    for step in ["00_input", "01_resize"] {
        assert!(
            debug_dir.join(step).join("01.png").exists(),
            "missing debug image for {}",
            step
        );
    }
    // Steps that leave the image alone write a summary instead of a copy
    for step in ["02_normalize", "03_classify", "04_decide"] {
        assert!(!debug_dir.join(step).join("01.png").exists());
    }

    let normalized = std::fs::read_to_string(debug_dir.join("02_normalize").join("01.txt"))?;
    assert!(normalized.contains("tensor: [1, 16, 16, 3]"));

    let classified = std::fs::read_to_string(debug_dir.join("03_classify").join("01.txt"))?;
    assert!(classified.contains("prediction: Cold Sore (index 1, confidence 0.7000)"));

    let decided = std::fs::read_to_string(debug_dir.join("04_decide").join("01.txt"))?;
    assert!(decided.contains("outcome: Identified"));

    let resized = image::open(debug_dir.join("01_resize").join("01.png"))?;
    assert_eq!((resized.width(), resized.height()), (16, 16));
    Ok(())
}

#[test]
fn test_debug_dir_must_be_empty() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    std::fs::write(dir.path().join("leftover.txt"), "x")?;

    let model = Arc::new(FakeModel::new("screening", vec![1.0, 0.0, 0.0]));
    let result = ClassificationFlow::screening(model, &small_settings())
        .with_debug(dir.path().to_path_buf());
    assert!(result.is_err());
    Ok(())
}

#[test]
fn test_run_partial_stops_before_classify() {
    use dermascan::inference::build_pipeline;
    use dermascan::inference::policy::DecisionPolicy;

    let model = Arc::new(FakeModel::new("screening", vec![1.0, 0.0, 0.0]));
    let pipeline = build_pipeline(
        model.clone(),
        dermascan::SCREENING_LABELS,
        DecisionPolicy::ReportRaw,
        8,
    );
    assert_eq!(
        pipeline.step_names(),
        vec!["Resize", "Normalize", "Classify", "Decide"]
    );

    let data = pipeline
        .run_partial(red_image(20, 20), 2)
        .expect("partial run failed");
    assert!(data.tensor.is_some());
    assert!(data.prediction.is_none());
    assert_eq!(model.calls(), 0);
}
