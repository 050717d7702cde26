use std::io::Cursor;

use super::*;
use crate::foundation::error::ConcatError;

fn png_bytes(w: u32, h: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(w, h, image::Rgb([1, 2, 3]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn preserves_input_order_across_source_kinds() {
    let dir = tempfile::TempDir::new().unwrap();
    let on_disk = dir.path().join("b.png");
    std::fs::write(&on_disk, png_bytes(7, 3)).unwrap();

    let sources = vec![
        ImageSource::Bytes {
            name: "a.png".to_string(),
            bytes: png_bytes(5, 2),
        },
        ImageSource::Path(on_disk),
        ImageSource::Bytes {
            name: "c.png".to_string(),
            bytes: png_bytes(1, 9),
        },
    ];
    let images = load_images(&sources).unwrap();
    let dims: Vec<_> = images.iter().map(|i| i.dimensions()).collect();
    assert_eq!(dims, vec![(5, 2), (7, 3), (1, 9)]);
    assert!(images.iter().all(|i| i.get_pixel(0, 0).0[3] == 255));
}

#[test]
fn one_corrupt_source_fails_the_whole_call() {
    let sources = vec![
        ImageSource::Bytes {
            name: "good.png".to_string(),
            bytes: png_bytes(2, 2),
        },
        ImageSource::Bytes {
            name: "broken.png".to_string(),
            bytes: b"\x89PNG truncated".to_vec(),
        },
    ];
    match load_images(&sources) {
        Err(ConcatError::Decode { source_name, .. }) => assert_eq!(source_name, "broken.png"),
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[test]
fn empty_source_list_loads_nothing() {
    assert!(load_images(&[]).unwrap().is_empty());
}
