use std::fs;
use std::io::Cursor;

use iconsmith::favicon::{build_favicon, write_favicon, FAVICON_SIZES};
use iconsmith::{AssetKind, BadgeStyle, Color};

fn style() -> BadgeStyle {
    BadgeStyle::builtin_only(Color::rgb(0, 0, 0), Color::rgb(0x00, 0xe6, 0x76))
}

#[test]
fn container_holds_four_opaque_frames() {
    let scratch = tempfile::tempdir().unwrap();
    let bytes = build_favicon("KTMS", &BadgeStyle::default(), scratch.path()).expect("build ico");

    let dir = ico::IconDir::read(Cursor::new(&bytes)).expect("parse ico");
    let mut sizes: Vec<(u32, u32)> = dir.entries().iter().map(|e| (e.width(), e.height())).collect();
    sizes.sort();
    assert_eq!(sizes, vec![(16, 16), (32, 32), (48, 48), (64, 64)]);

    for entry in dir.entries() {
        let image = entry.decode().expect("decode frame");
        assert!(
            image.rgba_data().chunks(4).all(|px| px[3] == 255),
            "{}px frame has transparent pixels",
            entry.width()
        );
        // Transparent corners became white; at 16px the corner pixel is
        // partly covered by the rounded edge.
        if entry.width() >= 32 {
            assert_eq!(&image.rgba_data()[0..4], &[255, 255, 255, 255]);
        }
    }
}

#[test]
fn write_favicon_leaves_no_intermediate_files() {
    let root = tempfile::tempdir().unwrap();
    let web = root.path().join("web");
    fs::create_dir_all(&web).unwrap();
    let path = web.join("favicon.ico");

    let asset = write_favicon(&path, "KTMS", &style()).expect("write ico");
    assert_eq!(asset.kind, AssetKind::Ico);
    assert_eq!(asset.dimensions.len(), FAVICON_SIZES.len());

    let names: Vec<String> = fs::read_dir(&web)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["favicon.ico".to_string()]);
    assert_eq!(fs::read_dir(root.path()).unwrap().count(), 1);
}

#[test]
fn favicon_is_deterministic() {
    let scratch = tempfile::tempdir().unwrap();
    let a = build_favicon("KTMS", &style(), scratch.path()).unwrap();
    let b = build_favicon("KTMS", &style(), scratch.path()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn unrenderable_label_still_packages() {
    let scratch = tempfile::tempdir().unwrap();
    let bytes = build_favicon("日本", &style(), scratch.path()).unwrap();
    let dir = ico::IconDir::read(Cursor::new(&bytes)).unwrap();
    assert_eq!(dir.entries().len(), 4);
}
