use std::fs;
use std::path::PathBuf;

use iconsmith::svg::badge_svg;
use iconsmith::IconConfig;
use sha2::{Digest, Sha256};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

#[test]
fn golden_svg_matches_fixture() {
    let cfg = IconConfig::default();
    let svg = badge_svg(&cfg.label, cfg.background, cfg.foreground);
    let digest = hex::encode(Sha256::digest(svg.as_bytes()));

    let expected_path = golden_path("badge_svg.sha256");
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, format!("{digest}\n")).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    let expected = fs::read_to_string(&expected_path).expect("unable to read golden");
    assert_eq!(digest, expected.trim(), "SVG output does not match golden:\n{svg}");
}
