//! Fitting, rotation and point preservation on bare Viewport/Image pairs.
//!
//! No host, no events: every test drives the engine directly, the same way
//! the viewer does after it has measured the window.

use approx::assert_abs_diff_eq;
use fitview::rotate::{PinnedPoint, preserve_point, rotate, rotate_clockwise};
use fitview::*;

fn viewport(w: f64, h: f64) -> Viewport {
    Viewport::new(Extent::new(w, h), Extent::ZERO, Dpr::ONE)
}

fn viewport_with_bars(w: f64, h: f64, bar: f64) -> Viewport {
    Viewport::new(Extent::new(w, h), Extent::new(bar, bar), Dpr::ONE)
}

const IMAGES: [(u32, u32); 6] = [
    (2000, 1000),
    (1000, 2000),
    (3000, 1999),
    (640, 480),
    (4000, 300),
    (1, 5000),
];

const VIEWPORTS: [(f64, f64); 4] = [
    (1000.0, 800.0),
    (1280.0, 720.0),
    (375.0, 812.0),
    (1920.0, 1080.0),
];

// ---- Scenarios ----

#[test]
fn fit_wide_image_is_width_driven() {
    let vp = viewport(1000.0, 800.0);
    let mut img = Image::new(2000, 1000).unwrap();
    let mut engine = FitEngine::default();

    let p = engine.apply_fitting(FittingType::Fit, &vp, &mut img);

    assert_eq!(p.fitting, FittingType::Fit);
    assert_eq!(p.scale, 0.5);
    assert!(!p.pan);
    assert_eq!(img.size(), Extent::new(1000.0, 500.0));
    assert_eq!(img.position(), Point::new(0.0, 150.0));
}

#[test]
fn fill_wide_image_is_height_driven() {
    let vp = viewport(1000.0, 800.0);
    let mut img = Image::new(2000, 1000).unwrap();
    let mut engine = FitEngine::default();

    let p = engine.apply_fitting(FittingType::Fill, &vp, &mut img);

    assert_eq!(p.fitting, FittingType::Fill);
    assert_eq!(p.scale, 0.8);
    assert!(p.pan);
    assert_eq!(img.size(), Extent::new(1600.0, 800.0));
    assert_eq!(img.position(), Point::ORIGIN);
}

#[test]
fn rotating_fitted_image_refits_against_swapped_size() {
    let vp = viewport(1000.0, 800.0);
    let mut img = Image::new(2000, 1000).unwrap();
    let mut engine = FitEngine::default();
    engine.apply_fitting(FittingType::Fit, &vp, &mut img);

    let p = rotate_clockwise(&mut engine, &vp, &mut img);

    assert_eq!((img.full_width(), img.full_height()), (1000.0, 2000.0));
    assert_eq!(p.fitting, FittingType::Fit);
    assert_eq!(p.scale, 0.4);
    assert_eq!(img.size(), Extent::new(400.0, 800.0));
    assert_eq!(img.position(), Point::new(300.0, 0.0));
}

// ---- Properties ----

#[test]
fn full_size_swaps_iff_orientation_is_odd() {
    for (w, h) in IMAGES {
        let mut img = Image::new(w, h).unwrap();
        for o in Orientation::ALL {
            img.set_orientation(i32::from(o.quarter_turns()));
            let full = (img.full_width(), img.full_height());
            if o.quarter_turns() % 2 == 1 {
                assert_eq!(full, (f64::from(h), f64::from(w)), "{w}x{h} {o:?}");
            } else {
                assert_eq!(full, (f64::from(w), f64::from(h)), "{w}x{h} {o:?}");
            }
        }
    }
}

#[test]
fn fit_on_smaller_image_always_degrades() {
    let vp = viewport_with_bars(1000.0, 800.0, 17.0);
    for (w, h) in [(1000, 800), (999, 1), (1, 799), (500, 500)] {
        let mut img = Image::new(w, h).unwrap();
        let mut engine = FitEngine::default();
        let p = engine.apply_fitting(FittingType::Fit, &vp, &mut img);
        assert_eq!(p.fitting, FittingType::Natural, "{w}x{h}");
        assert_eq!(p.scale, 1.0);
        assert_eq!(img.size(), img.full());
    }
}

#[test]
fn fill_is_idempotent() {
    for (vw, vh) in VIEWPORTS {
        for bar in [0.0, 17.0] {
            let vp = viewport_with_bars(vw, vh, bar);
            for (w, h) in IMAGES {
                let mut img = Image::new(w, h).unwrap();
                let mut engine = FitEngine::default();
                let first = engine.apply_fitting(FittingType::Fill, &vp, &mut img);
                let snapshot = img.clone();
                let second = engine.apply_fitting(FittingType::Fill, &vp, &mut img);
                assert_eq!(first, second, "{w}x{h} in {vw}x{vh}");
                assert_eq!(img, snapshot, "{w}x{h} in {vw}x{vh}");
            }
        }
    }
}

#[test]
fn four_rotations_are_bit_exact() {
    for (vw, vh) in VIEWPORTS {
        let vp = viewport_with_bars(vw, vh, 15.0);
        for (w, h) in IMAGES {
            for fitting in [FittingType::Fit, FittingType::Fill, FittingType::Natural] {
                let mut img = Image::new(w, h).unwrap();
                let mut engine = FitEngine::default();
                engine.apply_fitting(fitting, &vp, &mut img);
                let before = img.clone();

                for _ in 0..4 {
                    rotate_clockwise(&mut engine, &vp, &mut img);
                }
                assert!(img.orientation().is_identity());
                assert_eq!(img, before, "{fitting:?} {w}x{h} in {vw}x{vh}");

                for _ in 0..4 {
                    rotate(RotationDirection::CounterClockwise, &mut engine, &vp, &mut img);
                }
                assert_eq!(img, before, "{fitting:?} {w}x{h} in {vw}x{vh}");
            }
        }
    }
}

#[test]
fn rotation_keeps_point_under_anchor() {
    let scrolls = [
        Point::ORIGIN,
        Point::new(120.0, 45.5),
        Point::new(1500.0, 900.0),
    ];
    for (vw, vh) in VIEWPORTS {
        let vp = viewport_with_bars(vw, vh, 17.0);
        for (w, h) in IMAGES {
            for fitting in [FittingType::Fit, FittingType::Fill, FittingType::Natural] {
                for anchor in [Anchor::Center, Anchor::At(Point::new(37.0, 211.0))] {
                    for direction in [
                        RotationDirection::Clockwise,
                        RotationDirection::CounterClockwise,
                    ] {
                        for scroll in scrolls {
                            let mut img = Image::new(w, h).unwrap();
                            let mut engine = FitEngine::default();
                            engine.apply_fitting(fitting, &vp, &mut img);

                            let at = anchor.resolve(&vp, &img);
                            let before =
                                PinnedPoint::capture(&img, engine.scale(), scroll, at)
                                    .natural_offset();

                            let (_, scroll) = preserve_point(
                                anchor,
                                scroll,
                                &mut engine,
                                &vp,
                                &mut img,
                                |engine, vp, img| Some(rotate(direction, engine, vp, img)),
                            )
                            .unwrap();

                            let at = anchor.resolve(&vp, &img);
                            let after = PinnedPoint::capture(&img, engine.scale(), scroll, at)
                                .natural_offset();
                            assert_abs_diff_eq!(before.x, after.x, epsilon = 1e-6);
                            assert_abs_diff_eq!(before.y, after.y, epsilon = 1e-6);
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn fitting_change_keeps_point_under_center() {
    let vp = viewport_with_bars(1280.0, 720.0, 17.0);
    let mut img = Image::new(3000, 1999).unwrap();
    let mut engine = FitEngine::default();
    engine.apply_fitting(FittingType::Fit, &vp, &mut img);
    let mut scroll = Point::ORIGIN;

    for fitting in [
        FittingType::Natural,
        FittingType::Fill,
        FittingType::Fit,
        FittingType::Natural,
    ] {
        let at = Anchor::Center.resolve(&vp, &img);
        let before = PinnedPoint::capture(&img, engine.scale(), scroll, at).natural_offset();
        let (_, next) = preserve_point(
            Anchor::Center,
            scroll,
            &mut engine,
            &vp,
            &mut img,
            |engine, vp, img| Some(engine.apply_fitting(fitting, vp, img)),
        )
        .unwrap();
        let at = Anchor::Center.resolve(&vp, &img);
        let after = PinnedPoint::capture(&img, engine.scale(), next, at).natural_offset();
        assert_abs_diff_eq!(before.x, after.x, epsilon = 1e-6);
        assert_abs_diff_eq!(before.y, after.y, epsilon = 1e-6);
        scroll = next;
    }
}

#[test]
fn fill_pans_and_fit_does_not() {
    for (vw, vh) in VIEWPORTS {
        let vp = viewport_with_bars(vw, vh, 17.0);
        for (w, h) in IMAGES {
            let mut img = Image::new(w, h).unwrap();
            let mut engine = FitEngine::default();
            let p = engine.apply_fitting(FittingType::Fill, &vp, &mut img);
            if p.fitting == FittingType::Fill {
                assert!(p.pan);
                assert_eq!(img.position(), Point::ORIGIN);
            }
            let p = engine.apply_fitting(FittingType::Fit, &vp, &mut img);
            if p.fitting == FittingType::Fit {
                assert!(!p.pan);
            }
        }
    }
}
