use std::fs;

use sha2::{Digest, Sha256};

use showcard::{og, showcase};

fn digest(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

#[test]
fn og_card_written_with_documented_dimensions() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = og::write_card(dir.path()).expect("write og card");
    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("og-image.png")
    );

    let bytes = fs::read(&path).expect("read output");
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    let (w, h) = image::image_dimensions(&path).expect("probe dimensions");
    assert_eq!((w, h), (og::WIDTH, og::HEIGHT));
}

#[test]
fn og_write_fails_when_directory_is_missing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("no-such-dir");
    assert!(og::write_card(&missing).is_err());
}

#[test]
fn screenshots_written_for_every_project() {
    let dir = tempfile::tempdir().expect("tempdir");
    // the writer creates the output directory itself
    let out = dir.path().join("screenshots");
    let paths = showcase::write_cards(&out).expect("write cards");
    assert_eq!(paths.len(), 3);

    for name in [
        "infohunter.png",
        "TrendRadar.png",
        "truthsocial-trump-monitor.png",
    ] {
        let path = out.join(name);
        assert!(path.exists(), "missing {name}");
        let (w, h) = image::image_dimensions(&path).expect("probe dimensions");
        assert_eq!((w, h), (showcase::WIDTH, showcase::HEIGHT));
    }
}

#[test]
fn og_gradient_strip_interpolates_between_accents() {
    let canvas = og::render();
    let y = og::HEIGHT - 2;

    assert_eq!(canvas.pixel(0, y), og::PRIMARY);

    let last = canvas.pixel(og::WIDTH - 1, y);
    assert!((last.0 as i32 - og::ACCENT.0 as i32).abs() <= 1);
    assert!((last.1 as i32 - og::ACCENT.1 as i32).abs() <= 1);
    assert!((last.2 as i32 - og::ACCENT.2 as i32).abs() <= 1);

    // each channel moves monotonically from PRIMARY toward ACCENT
    let mut prev = canvas.pixel(0, y);
    for x in 1..og::WIDTH {
        let cur = canvas.pixel(x, y);
        assert!(cur.0 >= prev.0, "red regressed at x={x}");
        assert!(cur.1 >= prev.1, "green regressed at x={x}");
        assert!(cur.2 <= prev.2, "blue regressed at x={x}");
        prev = cur;
    }
}

#[test]
fn flattened_output_is_fully_opaque() {
    let bytes = og::render().encode_png().expect("encode");
    let img = image::load_from_memory(&bytes).expect("decode");
    assert_eq!(img.color(), image::ColorType::Rgb8);
}

#[test]
fn renders_are_idempotent() {
    let a = og::render().encode_png().expect("encode");
    let b = og::render().encode_png().expect("encode");
    assert_eq!(digest(&a), digest(&b));

    let fonts = showcase::Fonts::resolve();
    let project = &showcard::project::showcase_projects()[1];
    let c = showcase::render_card(project, &fonts)
        .encode_png()
        .expect("encode");
    let d = showcase::render_card(project, &fonts)
        .encode_png()
        .expect("encode");
    assert_eq!(digest(&c), digest(&d));
}
