//! Rasterization primitives: shape parameters in, glyph writes on a [`Canvas`] out.
//!
//! Everything here is integer arithmetic. Degenerate inputs (zero-length
//! lines, zero radii, off-canvas coordinates) draw fewer cells instead of
//! failing; out-of-range writes are dropped by [`Canvas::set`].

use crate::canvas::Canvas;

/// Glyph used when the caller does not care.
pub const DEFAULT_GLYPH: char = '.';

/// Draw a single glyph at `(x, y)`.
pub fn point(canvas: &mut Canvas, x: i32, y: i32, glyph: char) {
    canvas.set(x, y, glyph);
}

/// Draw a line from `(x1, y1)` to `(x2, y2)`, both endpoints inclusive.
///
/// Integer Bresenham. Lines shallower than 45 degrees step along x, all
/// others (including exact diagonals) step along y; each call is oriented so
/// the driving axis ascends, which makes the drawn point set independent of
/// endpoint order.
pub fn line(canvas: &mut Canvas, x1: i32, y1: i32, x2: i32, y2: i32, glyph: char) {
    if (y2 - y1).abs() < (x2 - x1).abs() {
        if x1 > x2 {
            line_low(canvas, x2, y2, x1, y1, glyph);
        } else {
            line_low(canvas, x1, y1, x2, y2, glyph);
        }
    } else if y1 > y2 {
        line_high(canvas, x2, y2, x1, y1, glyph);
    } else {
        line_high(canvas, x1, y1, x2, y2, glyph);
    }
}

fn line_low(canvas: &mut Canvas, x1: i32, y1: i32, x2: i32, y2: i32, glyph: char) {
    let dx = x2 - x1;
    let mut dy = y2 - y1;
    let mut yi = 1;
    if dy < 0 {
        yi = -1;
        dy = -dy;
    }
    let mut d = 2 * dy - dx;
    let mut y = y1;
    for x in x1..=x2 {
        canvas.set(x, y, glyph);
        if d > 0 {
            y += yi;
            d += 2 * (dy - dx);
        } else {
            d += 2 * dy;
        }
    }
}

fn line_high(canvas: &mut Canvas, x1: i32, y1: i32, x2: i32, y2: i32, glyph: char) {
    let mut dx = x2 - x1;
    let dy = y2 - y1;
    let mut xi = 1;
    if dx < 0 {
        xi = -1;
        dx = -dx;
    }
    let mut d = 2 * dx - dy;
    let mut x = x1;
    for y in y1..=y2 {
        canvas.set(x, y, glyph);
        if d > 0 {
            x += xi;
            d += 2 * (dx - dy);
        } else {
            d += 2 * dx;
        }
    }
}

/// Glyph slots for [`rect`]: four corners plus horizontal and vertical edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectGlyphs {
    pub horizontal: char,
    pub vertical: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
}

impl Default for RectGlyphs {
    fn default() -> Self {
        Self {
            horizontal: '─',
            vertical: '│',
            top_left: '┌',
            top_right: '┐',
            bottom_left: '└',
            bottom_right: '┘',
        }
    }
}

/// Draw a rectangle outline with its top-left corner at `(x, y)`, spanning
/// `w` columns and `h` rows beyond it.
///
/// Corners are placed first (top-left, top-right, bottom-left, bottom-right,
/// so a 0x0 rectangle collapses to one cell holding the bottom-right glyph),
/// then the four edges exclusive of corners.
pub fn rect(canvas: &mut Canvas, x: i32, y: i32, w: i32, h: i32, glyphs: &RectGlyphs) {
    canvas.set(x, y, glyphs.top_left);
    canvas.set(x + w, y, glyphs.top_right);
    canvas.set(x, y + h, glyphs.bottom_left);
    canvas.set(x + w, y + h, glyphs.bottom_right);
    for i in (x + 1)..(x + w) {
        canvas.set(i, y, glyphs.horizontal);
        canvas.set(i, y + h, glyphs.horizontal);
    }
    for j in (y + 1)..(y + h) {
        canvas.set(x, j, glyphs.vertical);
        canvas.set(x + w, j, glyphs.vertical);
    }
}

/// Draw an ellipse inscribed in the bounding box with opposite corners
/// `(x1, y1)` and `(x2, y2)`.
///
/// Midpoint algorithm over the rectangle: a quadrant sweep placing four
/// symmetric points per step, then a completion pass filling the residual
/// rows at the minor-axis ends. The `b & 1` term keeps odd-height boxes
/// symmetric.
pub fn ellipse(canvas: &mut Canvas, x1: i32, y1: i32, x2: i32, y2: i32, glyph: char) {
    let mut a = i64::from((x2 - x1).abs());
    let b = i64::from((y2 - y1).abs());
    let mut b1 = b & 1;

    let mut dx = 4 * (1 - a) * b * b;
    let mut dy = 4 * (b1 + 1) * a * a;
    let mut err = dx + dy + b1 * a * a;

    let (mut x1, mut x2) = if x1 > x2 {
        (i64::from(x2), i64::from(x2) + a)
    } else {
        (i64::from(x1), i64::from(x2))
    };
    let mut y1 = i64::from(y1.min(y2)) + (b + 1) / 2;
    let mut y2 = y1 - b1;

    a *= 8 * a;
    b1 = 8 * b * b;

    while x1 <= x2 {
        set64(canvas, x2, y1, glyph);
        set64(canvas, x1, y1, glyph);
        set64(canvas, x1, y2, glyph);
        set64(canvas, x2, y2, glyph);
        let e2 = 2 * err;
        if e2 <= dy {
            y1 += 1;
            y2 -= 1;
            dy += a;
            err += dy;
        }
        if e2 >= dx || 2 * err > dy {
            x1 += 1;
            x2 -= 1;
            dx += b1;
            err += dx;
        }
    }

    // Flat ellipses: the sweep exits before reaching the minor-axis ends.
    while y1 - y2 < b {
        set64(canvas, x1 - 1, y1, glyph);
        set64(canvas, x2 + 1, y1, glyph);
        y1 += 1;
        set64(canvas, x1 - 1, y2, glyph);
        set64(canvas, x2 + 1, y2, glyph);
        y2 -= 1;
    }
}

fn set64(canvas: &mut Canvas, x: i64, y: i64, glyph: char) {
    if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
        canvas.set(x, y, glyph);
    }
}

/// Draw a circle of radius `r` centered on `(cx, cy)`.
///
/// Midpoint algorithm, four symmetric points per step; terminates when the
/// driving coordinate reaches zero, so `r <= 0` draws nothing.
pub fn circle(canvas: &mut Canvas, cx: i32, cy: i32, r: i32, glyph: char) {
    let mut x = -r;
    let mut y = 0;
    let mut err = 2 - 2 * r;
    while x < 0 {
        canvas.set(cx - x, cy + y, glyph);
        canvas.set(cx - y, cy - x, glyph);
        canvas.set(cx + x, cy - y, glyph);
        canvas.set(cx + y, cy + x, glyph);
        let e = err;
        if e <= y {
            y += 1;
            err += y * 2 + 1;
        }
        if e > x || err > y {
            x += 1;
            err += x * 2 + 1;
        }
    }
}

/// Axis along which [`text`] advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
    Diagonal,
}

impl Orientation {
    /// Parse the compact axis spellings `"x"`, `"y"`, `"xy"`.
    ///
    /// Anything unrecognized means [`Orientation::Horizontal`]; an unknown
    /// orientation is a defined default, never an error.
    pub fn parse(s: &str) -> Self {
        match s {
            "y" => Self::Vertical,
            "xy" => Self::Diagonal,
            _ => Self::Horizontal,
        }
    }
}

/// Draw `s` starting at `(x, y)`, one glyph per character, advancing along
/// `orientation`.
pub fn text(canvas: &mut Canvas, x: i32, y: i32, s: &str, orientation: Orientation) {
    let (sx, sy) = match orientation {
        Orientation::Horizontal => (1, 0),
        Orientation::Vertical => (0, 1),
        Orientation::Diagonal => (1, 1),
    };
    for (i, ch) in s.chars().enumerate() {
        let i = i as i32;
        canvas.set(x + i * sx, y + i * sy, ch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drawn(canvas: &Canvas) -> Vec<(i32, i32, char)> {
        let mut cells = Vec::new();
        for y in 0..i32::from(canvas.height()) {
            for x in 0..i32::from(canvas.width()) {
                let ch = canvas.get(x, y).unwrap();
                if ch != ' ' {
                    cells.push((x, y, ch));
                }
            }
        }
        cells
    }

    fn line_points(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<(i32, i32, char)> {
        let mut c = Canvas::new(40, 40);
        line(&mut c, x1, y1, x2, y2, '#');
        drawn(&c)
    }

    #[test]
    fn line_is_symmetric_in_endpoint_order() {
        let cases = [
            (1, 1, 10, 4),
            (3, 2, 5, 12),
            (0, 0, 9, 9),
            (7, 3, 2, 3),
            (4, 8, 4, 1),
            (12, 2, 3, 9),
        ];
        for (x1, y1, x2, y2) in cases {
            assert_eq!(
                line_points(x1, y1, x2, y2),
                line_points(x2, y2, x1, y1),
                "endpoints ({x1},{y1})-({x2},{y2})"
            );
        }
    }

    #[test]
    fn line_endpoints_are_inclusive() {
        let pts = line_points(2, 3, 8, 5);
        assert!(pts.contains(&(2, 3, '#')));
        assert!(pts.contains(&(8, 5, '#')));
    }

    #[test]
    fn zero_length_line_draws_exactly_one_point() {
        assert_eq!(line_points(6, 7, 6, 7), vec![(6, 7, '#')]);
    }

    #[test]
    fn exact_diagonal_steps_both_axes() {
        let pts = line_points(0, 0, 3, 3);
        assert_eq!(
            pts,
            vec![(0, 0, '#'), (1, 1, '#'), (2, 2, '#'), (3, 3, '#')]
        );
    }

    #[test]
    fn horizontal_and_vertical_lines_are_straight() {
        let pts = line_points(2, 5, 6, 5);
        assert!(pts.iter().all(|&(_, y, _)| y == 5));
        assert_eq!(pts.len(), 5);

        let pts = line_points(3, 1, 3, 6);
        assert!(pts.iter().all(|&(x, _, _)| x == 3));
        assert_eq!(pts.len(), 6);
    }

    #[test]
    fn line_degrades_gracefully_off_canvas() {
        let mut c = Canvas::new(10, 10);
        line(&mut c, -5, -5, 20, 3, '#');
        // Only the on-canvas portion lands; no panic either way.
        assert!(drawn(&c).iter().all(|&(x, y, _)| (0..10).contains(&x) && (0..10).contains(&y)));
    }

    #[test]
    fn rect_places_corners_and_edges() {
        let mut c = Canvas::new(80, 24);
        rect(&mut c, 10, 10, 5, 3, &RectGlyphs::default());

        assert_eq!(c.get(10, 10), Some('┌'));
        assert_eq!(c.get(15, 10), Some('┐'));
        assert_eq!(c.get(10, 13), Some('└'));
        assert_eq!(c.get(15, 13), Some('┘'));
        for x in 11..15 {
            assert_eq!(c.get(x, 10), Some('─'));
            assert_eq!(c.get(x, 13), Some('─'));
        }
        for y in 11..13 {
            assert_eq!(c.get(10, y), Some('│'));
            assert_eq!(c.get(15, y), Some('│'));
        }
        assert_eq!(c.get(12, 12), Some(' '), "interior stays blank");
    }

    #[test]
    fn degenerate_rect_collapses_to_one_cell() {
        let mut c = Canvas::new(20, 20);
        rect(&mut c, 4, 4, 0, 0, &RectGlyphs::default());
        assert_eq!(drawn(&c), vec![(4, 4, '┘')]);
    }

    #[test]
    fn rect_honors_custom_glyphs() {
        let glyphs = RectGlyphs {
            horizontal: '-',
            vertical: '|',
            top_left: '1',
            top_right: '2',
            bottom_left: '3',
            bottom_right: '4',
        };
        let mut c = Canvas::new(20, 20);
        rect(&mut c, 0, 0, 3, 2, &glyphs);
        assert_eq!(c.get(0, 0), Some('1'));
        assert_eq!(c.get(3, 0), Some('2'));
        assert_eq!(c.get(0, 2), Some('3'));
        assert_eq!(c.get(3, 2), Some('4'));
        assert_eq!(c.get(1, 0), Some('-'));
        assert_eq!(c.get(0, 1), Some('|'));
    }

    #[test]
    fn circle_radius_zero_terminates_without_drawing() {
        let mut c = Canvas::new(20, 20);
        circle(&mut c, 10, 10, 0, '#');
        assert!(drawn(&c).is_empty());
    }

    #[test]
    fn circle_touches_the_four_cardinal_points() {
        let mut c = Canvas::new(20, 20);
        circle(&mut c, 10, 10, 5, '#');
        assert_eq!(c.get(5, 10), Some('#'));
        assert_eq!(c.get(15, 10), Some('#'));
        assert_eq!(c.get(10, 5), Some('#'));
        assert_eq!(c.get(10, 15), Some('#'));
        assert_eq!(c.get(10, 10), Some(' '), "center stays blank");
    }

    #[test]
    fn circle_is_four_way_rotationally_symmetric() {
        let mut c = Canvas::new(41, 41);
        circle(&mut c, 20, 20, 8, '#');
        let pts = drawn(&c);
        assert!(!pts.is_empty());
        for (x, y, _) in pts {
            let (dx, dy) = (x - 20, y - 20);
            assert_eq!(c.get(20 - dy, 20 + dx), Some('#'), "rotation of ({x},{y})");
        }
    }

    #[test]
    fn ellipse_stays_inside_its_bounding_box() {
        for (x1, y1, x2, y2) in [(2, 2, 22, 12), (2, 2, 21, 11), (5, 5, 30, 10)] {
            let mut c = Canvas::new(40, 40);
            ellipse(&mut c, x1, y1, x2, y2, '#');
            let pts = drawn(&c);
            assert!(!pts.is_empty());
            for (x, y, _) in pts {
                assert!(
                    (x1..=x2).contains(&x) && (y1..=y2).contains(&y),
                    "({x},{y}) outside box ({x1},{y1})-({x2},{y2})"
                );
            }
        }
    }

    #[test]
    fn ellipse_touches_both_extreme_columns() {
        // Even and odd minor-axis lengths take different parity paths.
        for (x1, y1, x2, y2) in [(2, 2, 20, 10), (2, 2, 20, 9)] {
            let mut c = Canvas::new(40, 40);
            ellipse(&mut c, x1, y1, x2, y2, '#');
            let pts = drawn(&c);
            assert!(pts.iter().any(|&(x, _, _)| x == x1));
            assert!(pts.iter().any(|&(x, _, _)| x == x2));
        }
    }

    #[test]
    fn ellipse_is_endpoint_order_independent() {
        let mut a = Canvas::new(40, 40);
        let mut b = Canvas::new(40, 40);
        ellipse(&mut a, 3, 4, 25, 14, '#');
        ellipse(&mut b, 25, 14, 3, 4, '#');
        assert_eq!(a, b);
    }

    #[test]
    fn text_orientations_advance_the_right_axes() {
        let mut c = Canvas::new(20, 20);
        text(&mut c, 1, 1, "abc", Orientation::Horizontal);
        text(&mut c, 1, 3, "abc", Orientation::Vertical);
        text(&mut c, 6, 6, "abc", Orientation::Diagonal);

        assert_eq!(c.get(1, 1), Some('a'));
        assert_eq!(c.get(2, 1), Some('b'));
        assert_eq!(c.get(3, 1), Some('c'));

        assert_eq!(c.get(1, 3), Some('a'));
        assert_eq!(c.get(1, 4), Some('b'));
        assert_eq!(c.get(1, 5), Some('c'));

        assert_eq!(c.get(6, 6), Some('a'));
        assert_eq!(c.get(7, 7), Some('b'));
        assert_eq!(c.get(8, 8), Some('c'));
    }

    #[test]
    fn unknown_orientation_spelling_falls_back_to_horizontal() {
        assert_eq!(Orientation::parse("x"), Orientation::Horizontal);
        assert_eq!(Orientation::parse("y"), Orientation::Vertical);
        assert_eq!(Orientation::parse("xy"), Orientation::Diagonal);
        assert_eq!(Orientation::parse("yx"), Orientation::Horizontal);
        assert_eq!(Orientation::parse(""), Orientation::Horizontal);
        assert_eq!(Orientation::default(), Orientation::Horizontal);
    }
}
