//! End-to-end emission tests: real rasterization against a scratch
//! directory.

use std::fs;

use zoo_logo::{
    emit, favicon_svg, mono_svg, run, standard_requests, write_svg_sources, LogoConfig,
    PlacementPolicy, RenderRequest, Variant, BLACK,
};

fn color_svg() -> String {
    Variant::Color.render(&LogoConfig::default()).unwrap()
}

#[test]
fn plain_policy_produces_exact_size_with_transparent_margin() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("zoo-256.png");

    emit(&color_svg(), &target, 256, &PlacementPolicy::Plain).unwrap();

    let img = image::open(&target).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (256, 256));
    // Outside the outer clip circle: fully transparent.
    assert_eq!(img.get_pixel(2, 2).0[3], 0);
    // The triple-overlap region at the logo center is opaque white.
    assert_eq!(img.get_pixel(128, 128).0, [255, 255, 255, 255]);
}

#[test]
fn emission_is_byte_stable() {
    let dir = tempfile::tempdir().unwrap();
    let svg = color_svg();
    let first = dir.path().join("a.png");
    let second = dir.path().join("b.png");

    emit(&svg, &first, 64, &PlacementPolicy::Plain).unwrap();
    emit(&svg, &second, 64, &PlacementPolicy::Plain).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn re_emitting_over_an_existing_file_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("zoo-32.png");
    let svg = color_svg();

    emit(&svg, &target, 32, &PlacementPolicy::Plain).unwrap();
    let before = fs::read(&target).unwrap();
    emit(&svg, &target, 32, &PlacementPolicy::Plain).unwrap();
    assert_eq!(before, fs::read(&target).unwrap());
}

#[test]
fn padded_policy_centers_logo_on_rounded_background() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("touch.png");
    let mono = mono_svg(&LogoConfig::default()).unwrap();

    emit(
        &mono,
        &target,
        180,
        &PlacementPolicy::padded(BLACK, 28, 0.65),
    )
    .unwrap();

    let img = image::open(&target).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (180, 180));
    // Inside the rounded-off corner: transparent.
    assert_eq!(img.get_pixel(1, 1).0[3], 0);
    // On the background, clear of both corner and logo: opaque black.
    assert_eq!(img.get_pixel(90, 1).0, [0, 0, 0, 255]);
}

#[test]
fn fixed_aspect_policy_fills_the_full_canvas() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("share.png");

    emit(
        &color_svg(),
        &target,
        1200,
        &PlacementPolicy::fixed_aspect(1200, 630, BLACK, 0.4),
    )
    .unwrap();

    let img = image::open(&target).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (1200, 630));
    // Sharp corners: the canvas corner is opaque background.
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
    assert_eq!(img.get_pixel(1199, 629).0, [0, 0, 0, 255]);
}

#[test]
fn emit_creates_nested_directories() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("deep/nested/tree/icon.png");

    emit(&favicon_svg(), &target, 32, &PlacementPolicy::Plain).unwrap();

    assert!(target.exists());
    let img = image::open(&target).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (32, 32));
}

#[test]
fn malformed_markup_fails_without_leaving_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("broken.png");

    let result = emit("this is not svg", &target, 32, &PlacementPolicy::Plain);

    assert!(result.is_err());
    assert!(!target.exists());
}

#[test]
fn batch_continues_past_individual_failures() {
    let dir = tempfile::tempdir().unwrap();
    let requests = vec![
        RenderRequest::new(
            "not markup at all",
            dir.path().join("bad.png"),
            32,
            PlacementPolicy::Plain,
        ),
        RenderRequest::new(
            favicon_svg(),
            dir.path().join("good.png"),
            32,
            PlacementPolicy::Plain,
        ),
    ];

    let report = run(&requests);

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.written.len(), 1);
    assert!(report.failures[0].target.ends_with("bad.png"));
    assert!(dir.path().join("good.png").exists());
    assert!(!report.is_success());
}

#[test]
fn standard_batch_generates_every_target() {
    let dir = tempfile::tempdir().unwrap();
    let config = LogoConfig::default();

    let svg_sources = write_svg_sources(&config, dir.path()).unwrap();
    assert_eq!(svg_sources.len(), 6);
    for path in &svg_sources {
        let markup = fs::read_to_string(path).unwrap();
        assert!(markup.starts_with("<svg"));
    }

    // The small end of each ladder keeps the test fast; the large sizes
    // only change the scale factor.
    let requests: Vec<_> = standard_requests(&config, dir.path())
        .unwrap()
        .into_iter()
        .filter(|r| r.pixel_size <= 64)
        .collect();
    let report = run(&requests);

    assert!(report.is_success(), "failures: {:?}", report.failures);
    for request in &requests {
        assert!(request.target.exists(), "missing {:?}", request.target);
    }
}
