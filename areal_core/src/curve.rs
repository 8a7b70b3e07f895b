// Copyright 2026 the Areal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The curve interpolation protocol and the default linear strategy.

extern crate alloc;

use alloc::boxed::Box;

use kurbo::{BezPath, Point};

/// An interpolation strategy connecting the points of one polyline edge.
///
/// A strategy is stateful: the generator calls [`begin`](Curve::begin) once
/// per edge, [`point`](Curve::point) once per point in order, then
/// [`end`](Curve::end) to flush anything buffered. `begin` must fully reset
/// the state, so one instance can be reused across edges and runs.
pub trait Curve {
    /// Resets state for a new polyline edge.
    ///
    /// When `continued` is true the first point extends the subpath already
    /// under construction (the trailing edge of an area contour) instead of
    /// opening a new one.
    fn begin(&mut self, continued: bool);

    /// Feeds the next point of the edge.
    fn point(&mut self, out: &mut BezPath, p: Point);

    /// Finishes the edge, appending any buffered commands to `out`.
    fn end(&mut self, out: &mut BezPath);
}

/// A source of [`Curve`] instances.
///
/// Generators hold a factory rather than a strategy so production can stay
/// `&self` and re-entrant: every generation call interpolates with a fresh
/// instance.
pub trait CurveFactory {
    /// Creates a strategy instance in its initial state.
    fn instantiate(&self) -> Box<dyn Curve>;
}

/// The default strategy: straight segments between consecutive points.
#[derive(Clone, Copy, Debug, Default)]
pub struct Linear;

impl CurveFactory for Linear {
    fn instantiate(&self) -> Box<dyn Curve> {
        Box::new(LinearCurve::default())
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct LinearCurve {
    continued: bool,
    started: bool,
}

impl Curve for LinearCurve {
    fn begin(&mut self, continued: bool) {
        self.continued = continued;
        self.started = false;
    }

    fn point(&mut self, out: &mut BezPath, p: Point) {
        if self.started || self.continued {
            out.line_to(p);
        } else {
            out.move_to(p);
        }
        self.started = true;
    }

    fn end(&mut self, _out: &mut BezPath) {}
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::PathEl;

    use super::*;

    #[test]
    fn linear_opens_a_subpath_unless_continued() {
        let mut out = BezPath::new();
        let mut c = Linear.instantiate();

        c.begin(false);
        c.point(&mut out, Point::new(0.0, 1.0));
        c.point(&mut out, Point::new(2.0, 3.0));
        c.end(&mut out);

        c.begin(true);
        c.point(&mut out, Point::new(2.0, 0.0));
        c.end(&mut out);

        assert_eq!(
            out.elements(),
            &[
                PathEl::MoveTo(Point::new(0.0, 1.0)),
                PathEl::LineTo(Point::new(2.0, 3.0)),
                PathEl::LineTo(Point::new(2.0, 0.0)),
            ]
        );
    }

    #[test]
    fn begin_resets_the_started_state() {
        let mut out = BezPath::new();
        let mut c = Linear.instantiate();

        c.begin(false);
        c.point(&mut out, Point::new(0.0, 0.0));
        c.end(&mut out);

        c.begin(false);
        c.point(&mut out, Point::new(5.0, 5.0));
        c.end(&mut out);

        assert_eq!(
            out.elements(),
            &[
                PathEl::MoveTo(Point::new(0.0, 0.0)),
                PathEl::MoveTo(Point::new(5.0, 5.0)),
            ]
        );
    }
}
