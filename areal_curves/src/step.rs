// Copyright 2026 the Areal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Step interpolation: piecewise-constant segments.

extern crate alloc;

use alloc::boxed::Box;

use areal_core::{Curve, CurveFactory};
use kurbo::{BezPath, Point};

/// Step curve factory: connects consecutive points with axis-aligned steps.
///
/// `t` is the changeover fraction between consecutive points: `0` steps at
/// the previous point, `1` at the next point, `0.5` midway.
#[derive(Clone, Copy, Debug)]
pub struct Step {
    t: f64,
}

impl Step {
    /// A step curve with the given changeover fraction, clamped to `[0, 1]`.
    pub fn new(t: f64) -> Self {
        Self {
            t: t.clamp(0.0, 1.0),
        }
    }

    /// Changeover at the previous point.
    pub fn before() -> Self {
        Self::new(0.0)
    }

    /// Changeover midway between points.
    pub fn mid() -> Self {
        Self::new(0.5)
    }

    /// Changeover at the next point.
    pub fn after() -> Self {
        Self::new(1.0)
    }
}

impl CurveFactory for Step {
    fn instantiate(&self) -> Box<dyn Curve> {
        Box::new(StepCurve {
            t: self.t,
            eff: self.t,
            continued: false,
            state: 0,
            x: f64::NAN,
            y: f64::NAN,
        })
    }
}

#[derive(Clone, Copy, Debug)]
struct StepCurve {
    t: f64,
    eff: f64,
    continued: bool,
    state: u8,
    x: f64,
    y: f64,
}

impl Curve for StepCurve {
    fn begin(&mut self, continued: bool) {
        // The trailing edge walks the points in reverse, so the changeover
        // fraction flips to keep risers vertically aligned across edges.
        self.eff = if continued { 1.0 - self.t } else { self.t };
        self.continued = continued;
        self.state = 0;
        self.x = f64::NAN;
        self.y = f64::NAN;
    }

    fn point(&mut self, out: &mut BezPath, p: Point) {
        if self.state == 0 {
            self.state = 1;
            if self.continued {
                out.line_to(p);
            } else {
                out.move_to(p);
            }
        } else {
            self.state = 2;
            if self.eff <= 0.0 {
                out.line_to((self.x, p.y));
                out.line_to(p);
            } else {
                let x1 = self.x * (1.0 - self.eff) + p.x * self.eff;
                out.line_to((x1, self.y));
                out.line_to((x1, p.y));
            }
        }
        self.x = p.x;
        self.y = p.y;
    }

    fn end(&mut self, out: &mut BezPath) {
        // A changeover strictly inside (0, 1) leaves the final horizontal
        // segment pending.
        if 0.0 < self.eff && self.eff < 1.0 && self.state == 2 {
            out.line_to((self.x, self.y));
        }
    }
}
