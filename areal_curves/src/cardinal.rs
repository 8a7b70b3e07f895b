// Copyright 2026 the Areal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cardinal spline interpolation.

extern crate alloc;

use alloc::boxed::Box;

use areal_core::{Curve, CurveFactory};
use kurbo::{BezPath, Point};

/// Cardinal spline factory.
///
/// `tension` in `[0, 1]` controls how tightly the spline bends around its
/// control points: `1` degenerates to straight segments, `0` (the default)
/// is the loosest fit. Boundary tangents use duplicated endpoints, and a
/// two-point polyline degenerates to a straight segment.
#[derive(Clone, Copy, Debug)]
pub struct Cardinal {
    tension: f64,
}

impl Cardinal {
    /// A cardinal spline with tension `0`.
    pub fn new() -> Self {
        Self { tension: 0.0 }
    }

    /// Sets the tension, clamped to `[0, 1]`.
    pub fn with_tension(mut self, tension: f64) -> Self {
        self.tension = tension.clamp(0.0, 1.0);
        self
    }
}

impl Default for Cardinal {
    fn default() -> Self {
        Self::new()
    }
}

impl CurveFactory for Cardinal {
    fn instantiate(&self) -> Box<dyn Curve> {
        Box::new(CardinalCurve {
            k: (1.0 - self.tension) / 6.0,
            continued: false,
            state: 0,
            x0: f64::NAN,
            y0: f64::NAN,
            x1: f64::NAN,
            y1: f64::NAN,
            x2: f64::NAN,
            y2: f64::NAN,
        })
    }
}

/// Streaming spline state: a three-point window over the incoming polyline.
#[derive(Clone, Copy, Debug)]
struct CardinalCurve {
    k: f64,
    continued: bool,
    state: u8,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CardinalCurve {
    /// Appends the cubic segment ending at `(x2, y2)`, with `(x, y)` as the
    /// lookahead point shaping the outgoing tangent.
    fn emit(&self, out: &mut BezPath, x: f64, y: f64) {
        out.curve_to(
            (
                self.x1 + self.k * (self.x2 - self.x0),
                self.y1 + self.k * (self.y2 - self.y0),
            ),
            (
                self.x2 + self.k * (self.x1 - x),
                self.y2 + self.k * (self.y1 - y),
            ),
            (self.x2, self.y2),
        );
    }
}

impl Curve for CardinalCurve {
    fn begin(&mut self, continued: bool) {
        self.continued = continued;
        self.state = 0;
        self.x0 = f64::NAN;
        self.y0 = f64::NAN;
        self.x1 = f64::NAN;
        self.y1 = f64::NAN;
        self.x2 = f64::NAN;
        self.y2 = f64::NAN;
    }

    fn point(&mut self, out: &mut BezPath, p: Point) {
        match self.state {
            0 => {
                self.state = 1;
                if self.continued {
                    out.line_to(p);
                } else {
                    out.move_to(p);
                }
            }
            1 => {
                // Duplicate the first point so the boundary tangent is
                // well-defined.
                self.state = 2;
                self.x1 = p.x;
                self.y1 = p.y;
            }
            2 => {
                self.state = 3;
                self.emit(out, p.x, p.y);
            }
            _ => self.emit(out, p.x, p.y),
        }
        self.x0 = self.x1;
        self.y0 = self.y1;
        self.x1 = self.x2;
        self.y1 = self.y2;
        self.x2 = p.x;
        self.y2 = p.y;
    }

    fn end(&mut self, out: &mut BezPath) {
        match self.state {
            2 => out.line_to((self.x2, self.y2)),
            3 => self.emit(out, self.x1, self.y1),
            _ => {}
        }
    }
}
