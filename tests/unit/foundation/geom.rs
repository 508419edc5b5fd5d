use super::*;

fn assert_close(a: Point, b: Point) {
    assert!((a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9, "{a:?} != {b:?}");
}

#[test]
fn pixel_offset_is_linear() {
    let canvas = CanvasSize {
        width: 612,
        height: 792,
    };
    assert_close(to_pixel_offset(0.0, 0.0, canvas), Point::new(0.0, 0.0));
    assert_close(to_pixel_offset(50.0, 50.0, canvas), Point::new(306.0, 396.0));
    assert_close(to_pixel_offset(100.0, 25.0, canvas), Point::new(612.0, 198.0));
}

#[test]
fn compose_transform_pivots_on_center() {
    let center = Point::new(306.0, 396.0);
    let tr = compose_transform(center, 37.0, 1.3);
    assert_close(tr * center, center);

    // Identity parameters give the identity transform.
    let id = compose_transform(center, 0.0, 1.0);
    assert_close(id * Point::new(12.0, 7.0), Point::new(12.0, 7.0));
}

#[test]
fn compose_transform_scales_about_center() {
    let center = Point::new(100.0, 100.0);
    let tr = compose_transform(center, 0.0, 2.0);
    assert_close(tr * Point::new(150.0, 100.0), Point::new(200.0, 100.0));
    assert_close(tr * Point::new(50.0, 100.0), Point::new(0.0, 100.0));
}

#[test]
fn rotate_about_keeps_pivot_fixed() {
    let pivot = Point::new(40.0, 60.0);
    let tr = rotate_about(pivot, 90.0);
    assert_close(tr * pivot, pivot);
    assert_close(tr * Point::new(50.0, 60.0), Point::new(40.0, 70.0));
}

#[test]
fn rounded_rect_degenerates_to_rectangle() {
    let plain = rounded_rect_path(10.0, 20.0, 100.0, 50.0, 0.0);
    let negative = rounded_rect_path(10.0, 20.0, 100.0, 50.0, -3.0);
    assert_eq!(plain.bounding_box(), Rect::new(10.0, 20.0, 110.0, 70.0));
    assert_eq!(negative.bounding_box(), Rect::new(10.0, 20.0, 110.0, 70.0));

    // A rectangle path has no curve elements; a rounded one does.
    let has_curves = |p: &BezPath| {
        p.elements().iter().any(|el| {
            matches!(el, kurbo::PathEl::QuadTo(..) | kurbo::PathEl::CurveTo(..))
        })
    };
    assert!(!has_curves(&plain));
    assert!(has_curves(&rounded_rect_path(0.0, 0.0, 100.0, 50.0, 8.0)));
}

#[test]
fn gradient_sampling_hits_stop_colors() {
    let stops = fade_stops(Rgb::new(10, 20, 30), 0.8);
    assert_eq!(sample_linear(&stops, 0.0), [10, 20, 30, 0]);
    assert_eq!(sample_linear(&stops, 1.0), [10, 20, 30, 204]);

    let mid = sample_linear(&stops, 0.5);
    assert_eq!(&mid[..3], &[10, 20, 30]);
    assert_eq!(mid[3], 102);
}

#[test]
fn gradient_sampling_clamps_outside_range() {
    let stops = [
        GradientStop::new(0.25, Rgb::new(0, 0, 0), 1.0),
        GradientStop::new(0.75, Rgb::new(200, 0, 0), 1.0),
    ];
    assert_eq!(sample_linear(&stops, 0.0), [0, 0, 0, 255]);
    assert_eq!(sample_linear(&stops, 1.0), [200, 0, 0, 255]);
    assert_eq!(sample_linear(&stops, 0.5), [100, 0, 0, 255]);
    assert_eq!(sample_linear(&[], 0.4), [0, 0, 0, 0]);
}
