use proptest::prelude::*;

use super::*;

fn solid(w: u32, h: u32) -> image::RgbaImage {
    image::RgbaImage::from_pixel(w, h, image::Rgba([200, 10, 10, 255]))
}

fn cfg(mode: ResizeMode, max_width: Option<u32>, max_height: Option<u32>) -> CompositionConfig {
    CompositionConfig {
        resize_mode: mode,
        max_width,
        max_height,
        ..CompositionConfig::default()
    }
}

#[test]
fn no_bounds_is_a_noop() {
    assert_eq!(scaled_dimensions(Size::new(10, 20), None, None).unwrap(), None);
}

#[test]
fn tighter_bound_wins() {
    // 200x100 into 100x100: width ratio 0.5 < height ratio 1.0
    assert_eq!(
        scaled_dimensions(Size::new(200, 100), Some(100), Some(100)).unwrap(),
        Some(Size::new(100, 50))
    );
    // 100x200 into 100x100: height ratio wins
    assert_eq!(
        scaled_dimensions(Size::new(100, 200), Some(100), Some(100)).unwrap(),
        Some(Size::new(50, 100))
    );
}

#[test]
fn single_bound_can_upscale() {
    assert_eq!(
        scaled_dimensions(Size::new(10, 20), Some(30), None).unwrap(),
        Some(Size::new(30, 60))
    );
    assert_eq!(
        scaled_dimensions(Size::new(3, 7), None, Some(10)).unwrap(),
        Some(Size::new(4, 10))
    );
}

#[test]
fn zero_bound_leaves_image_unchanged() {
    assert_eq!(scaled_dimensions(Size::new(10, 20), Some(0), None).unwrap(), None);
    assert_eq!(
        scaled_dimensions(Size::new(10, 20), Some(50), Some(0)).unwrap(),
        None
    );
}

#[test]
fn dimensions_never_collapse_to_zero() {
    assert_eq!(
        scaled_dimensions(Size::new(1000, 1), Some(10), None).unwrap(),
        Some(Size::new(10, 1))
    );
}

#[test]
fn oversized_upscale_is_invalid_config() {
    let err = scaled_dimensions(Size::new(1, u32::MAX), Some(2), None).unwrap_err();
    assert!(matches!(err, ConcatError::InvalidConfig(_)));
}

#[test]
fn unchanged_size_skips_resampling() {
    let img = solid(40, 30);
    let out = scale_to_fit(img.clone(), Some(40), None).unwrap();
    assert_eq!(out, img);
}

#[test]
fn fit_max_without_bounds_returns_input_untouched() {
    let images = vec![solid(10, 10), solid(30, 5)];
    let out = apply_resize_mode(images.clone(), &cfg(ResizeMode::FitMax, None, None)).unwrap();
    assert_eq!(out, images);
}

#[test]
fn fit_max_scales_each_image_independently() {
    let images = vec![solid(200, 100), solid(50, 50)];
    let out =
        apply_resize_mode(images, &cfg(ResizeMode::FitMax, Some(100), Some(100))).unwrap();
    assert_eq!(out[0].dimensions(), (100, 50));
    assert_eq!(out[1].dimensions(), (100, 100));
}

#[test]
fn match_width_uses_the_widest_image() {
    let images = vec![solid(40, 50), solid(40, 80), solid(40, 60)];
    let out =
        apply_resize_mode(images.clone(), &cfg(ResizeMode::MatchWidth, None, None)).unwrap();
    assert_eq!(out, images);

    let images = vec![solid(20, 10), solid(40, 10)];
    let out = apply_resize_mode(images, &cfg(ResizeMode::MatchWidth, None, None)).unwrap();
    assert_eq!(out[0].dimensions(), (40, 20));
    assert_eq!(out[1].dimensions(), (40, 10));
}

#[test]
fn none_mode_ignores_bounds() {
    let images = vec![solid(500, 500)];
    let out = apply_resize_mode(images, &cfg(ResizeMode::None, Some(10), Some(10))).unwrap();
    assert_eq!(out[0].dimensions(), (500, 500));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn match_height_hits_target_and_keeps_aspect(
        dims in prop::collection::vec((1u32..=2000, 1u32..=2000), 1..6)
    ) {
        let target = dims.iter().map(|&(_, h)| h).max().unwrap();
        for &(w, h) in &dims {
            let out = scaled_dimensions(Size::new(w, h), None, Some(target))
                .unwrap()
                .unwrap_or(Size::new(w, h));
            prop_assert_eq!(out.height, target);
            let exact = f64::from(w) * f64::from(target) / f64::from(h);
            prop_assert!((f64::from(out.width) - exact).abs() <= 1.0);
        }
    }

    #[test]
    fn fit_max_never_exceeds_both_bounds(
        w in 1u32..=4000, h in 1u32..=4000, mw in 1u32..=1000, mh in 1u32..=1000
    ) {
        let out = scaled_dimensions(Size::new(w, h), Some(mw), Some(mh))
            .unwrap()
            .unwrap_or(Size::new(w, h));
        prop_assert!(out.width <= mw.max(1));
        prop_assert!(out.height <= mh.max(1));
        prop_assert!(out.width == mw || out.height == mh);
    }
}
