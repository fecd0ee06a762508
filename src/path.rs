//! Paths
//!
//! A [`Path`] is an append-only stream of verbs and control points.
//! Every contour begins with a `Move`; iteration through [`Edger`]
//! yields complete segments, supplying the implicit start point and
//! the closing segment back to each contour's first point.

use crate::geom::{Point, Rect};
use crate::matrix::Matrix;

/// Path construction verbs
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Verb {
    Move,
    Line,
    Quad,
    Cubic,
}

/// Contour traversal direction in y-down device space
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Default for Direction {
    fn default() -> Direction {
        Direction::Clockwise
    }
}

/// A verb + point stream describing contours of lines and curves
#[derive(Debug, Default, Clone)]
pub struct Path {
    verbs: Vec<Verb>,
    points: Vec<Point>,
}

impl Path {
    pub fn new() -> Self {
        Self { verbs: vec![], points: vec![] }
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Begin a new contour at `p`
    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.verbs.push(Verb::Move);
        self.points.push(p);
        self
    }
    /// Line from the current point to `p`
    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.verbs.push(Verb::Line);
        self.points.push(p);
        self
    }
    /// Quadratic from the current point with off-curve control `b`
    pub fn quad_to(&mut self, b: Point, c: Point) -> &mut Self {
        self.verbs.push(Verb::Quad);
        self.points.push(b);
        self.points.push(c);
        self
    }
    /// Cubic from the current point with off-curve controls `b` and `c`
    pub fn cubic_to(&mut self, b: Point, c: Point, d: Point) -> &mut Self {
        self.verbs.push(Verb::Cubic);
        self.points.push(b);
        self.points.push(c);
        self.points.push(d);
        self
    }

    /// Append the rect as a contour beginning at its top-left corner
    pub fn add_rect(&mut self, rect: Rect, dir: Direction) -> &mut Self {
        let tl = Point::new(rect.left, rect.top);
        let tr = Point::new(rect.right, rect.top);
        let br = Point::new(rect.right, rect.bottom);
        let bl = Point::new(rect.left, rect.bottom);
        self.move_to(tl);
        match dir {
            Direction::Clockwise => {
                self.line_to(tr).line_to(br).line_to(bl);
            }
            Direction::CounterClockwise => {
                self.line_to(bl).line_to(br).line_to(tr);
            }
        }
        self
    }

    /// Append a polygon contour: `move_to(pts[0])` then lines
    pub fn add_polygon(&mut self, pts: &[Point]) -> &mut Self {
        if pts.is_empty() {
            return self;
        }
        self.move_to(pts[0]);
        for &p in &pts[1..] {
            self.line_to(p);
        }
        self
    }

    /// Append an approximate circle built from 8 quadratic arcs
    ///
    /// Each quadrant is two arcs over the unit circle, off-curve
    /// controls at distance `tan(pi/8)` from the axes, then mapped by
    /// `[r 0 cx; 0 r cy]`
    pub fn add_circle(&mut self, center: Point, radius: f32, dir: Direction) -> &mut Self {
        let h = (std::f32::consts::PI / 8.0).tan();
        let s = std::f32::consts::SQRT_2 * 0.5;
        let m = Matrix::new(radius, 0.0, center.x, 0.0, radius, center.y);

        // (on-curve endpoint, preceding off-curve control), clockwise
        // from (1, 0) in y-down space
        let cw: [(Point, Point); 8] = [
            (Point::new(s, s), Point::new(1.0, h)),
            (Point::new(0.0, 1.0), Point::new(h, 1.0)),
            (Point::new(-s, s), Point::new(-h, 1.0)),
            (Point::new(-1.0, 0.0), Point::new(-1.0, h)),
            (Point::new(-s, -s), Point::new(-1.0, -h)),
            (Point::new(0.0, -1.0), Point::new(-h, -1.0)),
            (Point::new(s, -s), Point::new(h, -1.0)),
            (Point::new(1.0, 0.0), Point::new(1.0, -h)),
        ];
        let ccw: [(Point, Point); 8] = [
            (Point::new(s, -s), Point::new(1.0, -h)),
            (Point::new(0.0, -1.0), Point::new(h, -1.0)),
            (Point::new(-s, -s), Point::new(-h, -1.0)),
            (Point::new(-1.0, 0.0), Point::new(-1.0, -h)),
            (Point::new(-s, s), Point::new(-1.0, h)),
            (Point::new(0.0, 1.0), Point::new(-h, 1.0)),
            (Point::new(s, s), Point::new(h, 1.0)),
            (Point::new(1.0, 0.0), Point::new(1.0, h)),
        ];

        self.move_to(m * Point::new(1.0, 0.0));
        let arcs = if dir == Direction::Clockwise { &cw } else { &ccw };
        for &(on, off) in arcs.iter() {
            self.quad_to(m * off, m * on);
        }
        self
    }

    /// Axis-aligned bounds of every control point
    ///
    /// Off-curve controls count, so the true curve may be strictly
    /// inside. Empty paths return the zero rect
    pub fn bounds(&self) -> Rect {
        let first = match self.points.first() {
            Some(p) => *p,
            None => return Rect::ltrb(0.0, 0.0, 0.0, 0.0),
        };
        let (mut min_x, mut max_x) = (first.x, first.x);
        let (mut min_y, mut max_y) = (first.y, first.y);
        for p in &self.points[1..] {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }
        Rect::ltrb(min_x, min_y, max_x, max_y)
    }

    /// Transform every control point in place
    pub fn transform(&mut self, m: &Matrix) {
        m.map_points(&mut self.points);
    }

    /// Iterate the path's segments
    pub fn edger(&self) -> Edger {
        Edger {
            path: self,
            verb: 0,
            point: 0,
            contour_start: Point::default(),
            current: Point::default(),
            open: false,
        }
    }

    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

/// A complete path segment with its start point made explicit
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Segment {
    Line([Point; 2]),
    Quad([Point; 3]),
    Cubic([Point; 4]),
}

/// Segment iterator over a [`Path`]
///
/// Closes each contour with a synthesized line back to its start when
/// the contour does not already end there
pub struct Edger<'a> {
    path: &'a Path,
    verb: usize,
    point: usize,
    contour_start: Point,
    current: Point,
    open: bool,
}

impl<'a> Edger<'a> {
    fn close(&mut self) -> Option<Segment> {
        self.open = false;
        if self.current != self.contour_start {
            Some(Segment::Line([self.current, self.contour_start]))
        } else {
            None
        }
    }
}

impl<'a> Iterator for Edger<'a> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        loop {
            if self.verb == self.path.verbs.len() {
                if self.open {
                    if let Some(seg) = self.close() {
                        return Some(seg);
                    }
                }
                return None;
            }
            match self.path.verbs[self.verb] {
                Verb::Move => {
                    if self.open {
                        // finish the previous contour before consuming
                        // the move
                        if let Some(seg) = self.close() {
                            return Some(seg);
                        }
                    }
                    self.contour_start = self.path.points[self.point];
                    self.current = self.contour_start;
                    self.point += 1;
                    self.verb += 1;
                }
                Verb::Line => {
                    let p = self.path.points[self.point];
                    let seg = Segment::Line([self.current, p]);
                    self.current = p;
                    self.point += 1;
                    self.verb += 1;
                    self.open = true;
                    return Some(seg);
                }
                Verb::Quad => {
                    let b = self.path.points[self.point];
                    let c = self.path.points[self.point + 1];
                    let seg = Segment::Quad([self.current, b, c]);
                    self.current = c;
                    self.point += 2;
                    self.verb += 1;
                    self.open = true;
                    return Some(seg);
                }
                Verb::Cubic => {
                    let b = self.path.points[self.point];
                    let c = self.path.points[self.point + 1];
                    let d = self.path.points[self.point + 2];
                    let seg = Segment::Cubic([self.current, b, c, d]);
                    self.current = d;
                    self.point += 3;
                    self.verb += 1;
                    self.open = true;
                    return Some(seg);
                }
            }
        }
    }
}
