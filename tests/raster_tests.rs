use gridframe::canvas::Canvas;
use gridframe::raster::{self, Orientation, RectGlyphs};

fn drawn_points(canvas: &Canvas) -> Vec<(i32, i32)> {
    let mut points = Vec::new();
    for y in 0..i32::from(canvas.height()) {
        for x in 0..i32::from(canvas.width()) {
            if canvas.get(x, y) != Some(' ') {
                points.push((x, y));
            }
        }
    }
    points
}

#[test]
fn line_draws_the_same_points_in_either_direction() {
    let mut forward = Canvas::new(80, 24);
    let mut backward = Canvas::new(80, 24);
    raster::line(&mut forward, 3, 20, 70, 2, '*');
    raster::line(&mut backward, 70, 2, 3, 20, '*');
    assert_eq!(forward, backward);
}

#[test]
fn zero_length_line_is_a_single_point() {
    let mut canvas = Canvas::new(80, 24);
    raster::line(&mut canvas, 40, 12, 40, 12, '*');
    assert_eq!(drawn_points(&canvas), vec![(40, 12)]);
}

#[test]
fn rectangle_on_80x24_has_the_documented_corners() {
    let mut canvas = Canvas::new(80, 24);
    raster::rect(&mut canvas, 10, 10, 5, 3, &RectGlyphs::default());

    assert_eq!(canvas.get(10, 10), Some('┌'));
    assert_eq!(canvas.get(15, 10), Some('┐'));
    assert_eq!(canvas.get(10, 13), Some('└'));
    assert_eq!(canvas.get(15, 13), Some('┘'));

    // Edges are straight and exclusive of corners.
    for x in 11..15 {
        assert_eq!(canvas.get(x, 10), Some('─'));
        assert_eq!(canvas.get(x, 13), Some('─'));
    }
    for y in 11..13 {
        assert_eq!(canvas.get(10, y), Some('│'));
        assert_eq!(canvas.get(15, y), Some('│'));
    }
}

#[test]
fn degenerate_rectangle_draws_exactly_one_cell() {
    let mut canvas = Canvas::new(80, 24);
    raster::rect(&mut canvas, 12, 12, 0, 0, &RectGlyphs::default());
    assert_eq!(drawn_points(&canvas).len(), 1);
}

#[test]
fn radius_zero_circle_draws_at_most_the_center() {
    let mut canvas = Canvas::new(80, 24);
    raster::circle(&mut canvas, 40, 12, 0, '*');
    let points = drawn_points(&canvas);
    assert!(points.is_empty() || points == vec![(40, 12)]);
}

#[test]
fn shapes_partially_off_canvas_do_not_fail() {
    let mut canvas = Canvas::new(20, 10);
    raster::circle(&mut canvas, 0, 0, 8, '*');
    raster::ellipse(&mut canvas, -5, -5, 25, 15, '*');
    raster::rect(&mut canvas, 15, 5, 30, 30, &RectGlyphs::default());
    raster::text(&mut canvas, 18, 9, "overflowing text", Orientation::Horizontal);
    assert!(!drawn_points(&canvas).is_empty());
}

#[test]
fn vertical_text_reads_top_to_bottom() {
    let mut canvas = Canvas::new(10, 10);
    raster::text(&mut canvas, 2, 1, "hey", Orientation::Vertical);
    assert_eq!(canvas.get(2, 1), Some('h'));
    assert_eq!(canvas.get(2, 2), Some('e'));
    assert_eq!(canvas.get(2, 3), Some('y'));
}
