use super::*;

fn write_png(path: &Path, w: u32, h: u32) {
    image::RgbImage::from_pixel(w, h, image::Rgb([30, 60, 90]))
        .save(path)
        .unwrap();
}

#[test]
fn large_images_shrink_to_fit_the_box() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("pics")).unwrap();
    write_png(&dir.path().join("pics").join("wide.png"), 960, 480);

    let bytes = thumbnail_png(dir.path(), "pics", "wide.png").unwrap();
    let thumb = image::load_from_memory_with_format(&bytes, image::ImageFormat::Png).unwrap();
    assert_eq!((thumb.width(), thumb.height()), (240, 120));
}

#[test]
fn small_images_are_not_enlarged() {
    let dir = tempfile::TempDir::new().unwrap();
    write_png(&dir.path().join("tiny.png"), 16, 8);

    let bytes = thumbnail_png(dir.path(), "", "tiny.png").unwrap();
    let thumb = image::load_from_memory(&bytes).unwrap();
    assert_eq!((thumb.width(), thumb.height()), (16, 8));
}

#[test]
fn missing_or_disallowed_files_are_rejected() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("notes.txt"), b"x").unwrap();

    let err = thumbnail_png(dir.path(), "", "notes.txt").unwrap_err();
    assert!(matches!(err, ConcatError::Validation(_)));
    let err = thumbnail_png(dir.path(), "", "absent.png").unwrap_err();
    assert!(matches!(err, ConcatError::Validation(_)));
    let err = thumbnail_png(dir.path(), "..", "x.png").unwrap_err();
    assert!(matches!(err, ConcatError::PathOutsideRoot(_)));
}

#[test]
fn minor_axis_rounds_to_nearest_pixel() {
    assert_eq!(thumbnail_size(Size::new(1000, 333)), Size::new(240, 80));
    assert_eq!(thumbnail_size(Size::new(333, 1000)), Size::new(80, 240));
    assert_eq!(thumbnail_size(Size::new(1000, 331)), Size::new(240, 79));
    assert_eq!(thumbnail_size(Size::new(5000, 1)), Size::new(240, 1));
    assert_eq!(thumbnail_size(Size::new(240, 100)), Size::new(240, 100));
}

#[test]
fn thumbnail_png_uses_rounded_size() {
    let dir = tempfile::TempDir::new().unwrap();
    write_png(&dir.path().join("strip.png"), 1000, 333);

    let bytes = thumbnail_png(dir.path(), "", "strip.png").unwrap();
    let thumb = image::load_from_memory(&bytes).unwrap();
    assert_eq!((thumb.width(), thumb.height()), (240, 80));
}
