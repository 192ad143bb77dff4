use fractal_clock_core::{
    opacity_for_depth, Bounds, ClockSettings, FixedTime, FractalClock, Stroke, Vec2,
};

const EPS: f64 = 1e-9;

fn strokes_at(seconds: f64, bounds: Bounds) -> Vec<Stroke> {
    FractalClock::new(ClockSettings::default(), FixedTime(seconds), false)
        .unwrap()
        .frame(bounds)
        .unwrap()
        .strokes()
        .collect()
}

#[test]
fn full_frame_has_2047_strokes() {
    let strokes = strokes_at(37_812.4, Bounds::new(1920.0, 1080.0));
    assert_eq!(strokes.len(), 2047);
    assert_eq!(strokes.iter().filter(|s| s.depth == 10).count(), 1024);
}

#[test]
fn full_frame_colour_and_opacity() {
    for s in strokes_at(51_000.0, Bounds::new(800.0, 600.0)) {
        assert!(s.colour.is_normalized(), "depth {} colour {:?}", s.depth, s.colour);
        assert_eq!(s.opacity, opacity_for_depth(s.depth));
        assert_eq!(s.width, 2.0);
    }
}

#[test]
fn midnight_golden_root() {
    let strokes = strokes_at(0.0, Bounds::new(600.0, 600.0));
    let root = strokes.last().unwrap();

    assert_eq!(root.depth, 0);
    assert_eq!(root.opacity, 1.0);
    assert!((root.from.x - 300.0).abs() < EPS && (root.from.y - 350.0).abs() < EPS);
    assert!((root.to.x - 300.0).abs() < EPS && (root.to.y - 300.0).abs() < EPS);
}

#[test]
fn geometry_scales_with_view() {
    let small = strokes_at(20_000.0, Bounds::new(300.0, 300.0));
    let large = strokes_at(20_000.0, Bounds::new(600.0, 600.0));

    for (a, b) in small.iter().zip(&large) {
        let a_to = a.to * 2.0;
        assert!((a_to - b.to).length() < 1e-6);
        assert_eq!(a.colour, b.colour);
    }
}

#[test]
fn every_child_hangs_off_a_parent_tip() {
    let strokes = strokes_at(4321.0, Bounds::new(500.0, 500.0));
    let tips: Vec<Vec2> = strokes.iter().map(|s| s.to).collect();

    for s in strokes.iter().filter(|s| s.depth > 0) {
        assert!(
            tips.iter().any(|t| (*t - s.from).length() < 1e-9),
            "stroke at depth {} does not start at any tip",
            s.depth
        );
    }
}
