// Copyright 2026 the Areal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The area generator: slot binding and filled-contour production.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{BezPath, Point};

use crate::accessor::{Accessor, CoordSpec};
use crate::curve::{Curve, CurveFactory, Linear};

/// A per-point inclusion predicate.
///
/// Points where this returns false split the area into disconnected
/// contours; the shape never interpolates across a gap in the data.
pub type DefinedFn<D> = Box<dyn Fn(&D, usize, &[D]) -> bool>;

/// Builder for [`Area`]: binds coordinate slots, the defined predicate, and
/// the curve strategy.
///
/// Coordinate slots accept `impl Into<CoordSpec<D>>`, so a plain `f64` binds
/// a constant and [`CoordSpec::derived`] binds a per-point function. Binds
/// are idempotent and last-write-wins; unset slots keep their defaults:
/// - `x0`/`y0` fall back to the constant `0` accessor at [`build`](Self::build),
/// - `x1`/`y1` stay unset, which makes the corresponding edge follow its
///   sibling accessor (a stroke-thin, baseline-following region),
/// - `defined` defaults to always true, `curve` to [`Linear`].
///
/// [`AreaBuilder::pairs`] preconfigures the conventional defaults for
/// `(x, y)` pair data.
pub struct AreaBuilder<D> {
    x0: Option<CoordSpec<D>>,
    x1: Option<CoordSpec<D>>,
    y0: Option<CoordSpec<D>>,
    y1: Option<CoordSpec<D>>,
    defined: Option<DefinedFn<D>>,
    curve: Box<dyn CurveFactory>,
}

impl<D> AreaBuilder<D> {
    /// A builder with no slots bound.
    pub fn new() -> Self {
        Self {
            x0: None,
            x1: None,
            y0: None,
            y1: None,
            defined: None,
            curve: Box::new(Linear),
        }
    }

    /// Binds `x0` and clears `x1`: a single-edge shape along x.
    pub fn with_x(mut self, spec: impl Into<CoordSpec<D>>) -> Self {
        self.x0 = Some(spec.into());
        self.x1 = None;
        self
    }

    /// Binds the `x0` (trailing-edge) slot.
    pub fn with_x0(mut self, spec: impl Into<CoordSpec<D>>) -> Self {
        self.x0 = Some(spec.into());
        self
    }

    /// Binds the `x1` (leading-edge) slot; together with `x0` this produces
    /// a two-edge ribbon along x.
    pub fn with_x1(mut self, spec: impl Into<CoordSpec<D>>) -> Self {
        self.x1 = Some(spec.into());
        self
    }

    /// Clears the `x1` slot.
    pub fn without_x1(mut self) -> Self {
        self.x1 = None;
        self
    }

    /// Binds `y0` and clears `y1`: a single-edge shape along y.
    pub fn with_y(mut self, spec: impl Into<CoordSpec<D>>) -> Self {
        self.y0 = Some(spec.into());
        self.y1 = None;
        self
    }

    /// Binds the `y0` (baseline) slot.
    pub fn with_y0(mut self, spec: impl Into<CoordSpec<D>>) -> Self {
        self.y0 = Some(spec.into());
        self
    }

    /// Binds the `y1` (topline) slot.
    pub fn with_y1(mut self, spec: impl Into<CoordSpec<D>>) -> Self {
        self.y1 = Some(spec.into());
        self
    }

    /// Clears the `y1` slot.
    pub fn without_y1(mut self) -> Self {
        self.y1 = None;
        self
    }

    /// Replaces the defined predicate.
    pub fn with_defined(mut self, pred: impl Fn(&D, usize, &[D]) -> bool + 'static) -> Self {
        self.defined = Some(Box::new(pred));
        self
    }

    /// Replaces the curve strategy.
    pub fn with_curve(mut self, curve: impl CurveFactory + 'static) -> Self {
        self.curve = Box::new(curve);
        self
    }

    /// Finalizes the configuration, resolving every bound spec into accessor
    /// form exactly once.
    pub fn build(self) -> Area<D> {
        Area {
            x0: self.x0.unwrap_or(CoordSpec::Value(0.0)).resolve(),
            x1: self.x1.map(CoordSpec::resolve),
            y0: self.y0.unwrap_or(CoordSpec::Value(0.0)).resolve(),
            y1: self.y1.map(CoordSpec::resolve),
            defined: self.defined.unwrap_or_else(|| Box::new(|_, _, _| true)),
            curve: self.curve,
        }
    }
}

impl AreaBuilder<(f64, f64)> {
    /// A builder preconfigured for `(x, y)` pair data: `x0` reads the first
    /// element, `y1` the second, and `y0` is the constant `0` baseline.
    pub fn pairs() -> Self {
        Self::new()
            .with_x0(CoordSpec::derived(|d: &(f64, f64), _, _| d.0))
            .with_y0(0.0)
            .with_y1(CoordSpec::derived(|d: &(f64, f64), _, _| d.1))
    }
}

impl<D> Default for AreaBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> fmt::Debug for AreaBuilder<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AreaBuilder")
            .field("x0", &self.x0)
            .field("x1", &self.x1)
            .field("y0", &self.y0)
            .field("y1", &self.y1)
            .finish_non_exhaustive()
    }
}

/// A finalized area generator.
///
/// Immutable once built; [`generate`](Self::generate) is a pure function of
/// the configuration and its input, so one instance can produce paths for
/// any number of datasets.
pub struct Area<D> {
    x0: Accessor<D>,
    x1: Option<Accessor<D>>,
    y0: Accessor<D>,
    y1: Option<Accessor<D>>,
    defined: DefinedFn<D>,
    curve: Box<dyn CurveFactory>,
}

impl<D> Area<D> {
    /// Generates the filled-area outline for `data`.
    ///
    /// The dataset is partitioned into maximal runs of points for which the
    /// defined predicate holds, and each run becomes one closed contour: the
    /// leading edge `(x1, y1)` in index order, the trailing edge `(x0, y0)`
    /// in reverse, then a close. An empty dataset, or one with no defined
    /// points, yields an empty path. Accessor output is not validated;
    /// non-finite coordinates flow through to the caller's rendering
    /// surface.
    pub fn generate(&self, data: &[D]) -> BezPath {
        let mut out = BezPath::new();
        let mut curve = self.curve.instantiate();
        // Single pass, evaluating the predicate exactly once per index:
        // caller-supplied predicates may be stateful.
        let mut start = None;
        for (i, d) in data.iter().enumerate() {
            if (self.defined)(d, i, data) {
                if start.is_none() {
                    start = Some(i);
                }
            } else if let Some(s) = start.take() {
                self.contour(&mut out, curve.as_mut(), data, s, i);
            }
        }
        if let Some(s) = start {
            self.contour(&mut out, curve.as_mut(), data, s, data.len());
        }
        out
    }

    /// Emits one closed contour for the defined run `data[start..stop]`.
    ///
    /// Accessors receive original indices; runs are never renumbered. An
    /// unset `x1`/`y1` falls back to the sibling value computed for the same
    /// point, not to zero.
    fn contour(
        &self,
        out: &mut BezPath,
        curve: &mut dyn Curve,
        data: &[D],
        start: usize,
        stop: usize,
    ) {
        // Leading edge in index order, caching the trailing-edge coordinates
        // computed along the way.
        let mut base = Vec::with_capacity(stop - start);
        curve.begin(false);
        for i in start..stop {
            let d = &data[i];
            let bx = (self.x0)(d, i, data);
            let by = (self.y0)(d, i, data);
            let tx = self.x1.as_ref().map_or(bx, |f| f(d, i, data));
            let ty = self.y1.as_ref().map_or(by, |f| f(d, i, data));
            base.push(Point::new(bx, by));
            curve.point(out, Point::new(tx, ty));
        }
        curve.end(out);

        // Trailing edge replayed in reverse, then close the contour.
        curve.begin(true);
        for &p in base.iter().rev() {
            curve.point(out, p);
        }
        curve.end(out);
        out.close_path();
    }
}

impl<D> fmt::Debug for Area<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Area")
            .field("has_x1", &self.x1.is_some())
            .field("has_y1", &self.y1.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use kurbo::PathEl;

    use super::*;

    const DATA: [(f64, f64); 3] = [(0.0, 1.0), (1.0, 3.0), (2.0, 2.0)];

    fn m(x: f64, y: f64) -> PathEl {
        PathEl::MoveTo(Point::new(x, y))
    }

    fn l(x: f64, y: f64) -> PathEl {
        PathEl::LineTo(Point::new(x, y))
    }

    #[test]
    fn defaults_close_one_contour_over_the_baseline() {
        let path = AreaBuilder::pairs().build().generate(&DATA);
        assert_eq!(
            path.elements(),
            &[
                m(0.0, 1.0),
                l(1.0, 3.0),
                l(2.0, 2.0),
                l(2.0, 0.0),
                l(1.0, 0.0),
                l(0.0, 0.0),
                PathEl::ClosePath,
            ]
        );
    }

    #[test]
    fn empty_dataset_generates_an_empty_path() {
        let path = AreaBuilder::pairs().build().generate(&[]);
        assert!(path.elements().is_empty());
    }

    #[test]
    fn fully_undefined_dataset_generates_an_empty_path() {
        let area = AreaBuilder::pairs().with_defined(|_, _, _| false).build();
        assert!(area.generate(&DATA).elements().is_empty());
    }

    #[test]
    fn single_point_yields_a_minimal_closed_contour() {
        let path = AreaBuilder::pairs().build().generate(&[(4.0, 5.0)]);
        assert_eq!(
            path.elements(),
            &[m(4.0, 5.0), l(4.0, 0.0), PathEl::ClosePath]
        );
    }

    #[test]
    fn undefined_point_splits_into_disjoint_contours() {
        let area = AreaBuilder::pairs().with_defined(|_, i, _| i != 1).build();
        let path = area.generate(&DATA);
        assert_eq!(
            path.elements(),
            &[
                m(0.0, 1.0),
                l(0.0, 0.0),
                PathEl::ClosePath,
                m(2.0, 2.0),
                l(2.0, 0.0),
                PathEl::ClosePath,
            ]
        );
    }

    #[test]
    fn gap_contours_match_independent_sub_run_generation() {
        let data: Vec<(f64, f64)> = alloc::vec![
            (0.0, 1.0),
            (1.0, 3.0),
            (1.5, 4.0),
            (2.0, 2.0),
            (3.0, 5.0),
        ];
        let gapped = AreaBuilder::pairs().with_defined(|_, i, _| i != 2).build();
        let whole = gapped.generate(&data);

        // Accessors here are index-independent, so generating each defined
        // sub-run on its own and concatenating must reproduce the whole.
        let plain = AreaBuilder::pairs().build();
        let mut expected: Vec<PathEl> = plain.generate(&data[..2]).elements().to_vec();
        expected.extend(plain.generate(&data[3..]).elements().iter().copied());
        assert_eq!(whole.elements(), expected.as_slice());
    }

    #[test]
    fn rebinding_a_slot_is_idempotent() {
        let once = AreaBuilder::pairs()
            .with_y1(CoordSpec::derived(|d: &(f64, f64), _, _| d.1 * 2.0))
            .build()
            .generate(&DATA);
        let twice = AreaBuilder::pairs()
            .with_y1(CoordSpec::derived(|d: &(f64, f64), _, _| d.1 * 2.0))
            .with_y1(CoordSpec::derived(|d: &(f64, f64), _, _| d.1 * 2.0))
            .build()
            .generate(&DATA);
        assert_eq!(once.elements(), twice.elements());
    }

    #[test]
    fn x_alias_equals_x0_with_x1_cleared() {
        let f = |d: &(f64, f64), _: usize, _: &[(f64, f64)]| d.0 + 10.0;
        let aliased = AreaBuilder::pairs()
            .with_x1(3.0)
            .with_x(CoordSpec::derived(f))
            .build()
            .generate(&DATA);
        let explicit = AreaBuilder::pairs()
            .with_x1(3.0)
            .with_x0(CoordSpec::derived(f))
            .without_x1()
            .build()
            .generate(&DATA);
        assert_eq!(aliased.elements(), explicit.elements());
    }

    #[test]
    fn both_edges_bound_produces_a_ribbon() {
        let area = AreaBuilder::<(f64, f64)>::new()
            .with_x0(CoordSpec::derived(|d: &(f64, f64), _, _| d.0))
            .with_x1(CoordSpec::derived(|d: &(f64, f64), _, _| d.0))
            .with_y0(CoordSpec::derived(|d: &(f64, f64), _, _| d.1 - 1.0))
            .with_y1(CoordSpec::derived(|d: &(f64, f64), _, _| d.1 + 1.0))
            .build();
        let path = area.generate(&[(0.0, 2.0), (1.0, 4.0)]);
        assert_eq!(
            path.elements(),
            &[
                m(0.0, 3.0),
                l(1.0, 5.0),
                l(1.0, 3.0),
                l(0.0, 1.0),
                PathEl::ClosePath,
            ]
        );
    }

    #[test]
    fn unset_topline_falls_back_to_the_baseline_accessor() {
        // Only x0/y0 bound: both edges trace the same polyline, collapsing
        // the shape to a stroke-thin region.
        let area = AreaBuilder::<(f64, f64)>::new()
            .with_x(CoordSpec::derived(|d: &(f64, f64), _, _| d.0))
            .with_y0(CoordSpec::derived(|d: &(f64, f64), _, _| d.1))
            .build();
        let path = area.generate(&DATA[..2]);
        assert_eq!(
            path.elements(),
            &[
                m(0.0, 1.0),
                l(1.0, 3.0),
                l(1.0, 3.0),
                l(0.0, 1.0),
                PathEl::ClosePath,
            ]
        );
    }

    #[test]
    fn accessors_receive_original_indices_across_runs() {
        let area = AreaBuilder::<i32>::new()
            .with_x(CoordSpec::derived(|_, i, _| i as f64))
            .with_y0(0.0)
            .with_y1(CoordSpec::derived(|d: &i32, _, _| f64::from(*d)))
            .with_defined(|_, i, _| i != 1)
            .build();
        let path = area.generate(&[5, 6, 7]);
        assert_eq!(
            path.elements(),
            &[
                m(0.0, 5.0),
                l(0.0, 0.0),
                PathEl::ClosePath,
                m(2.0, 7.0),
                l(2.0, 0.0),
                PathEl::ClosePath,
            ]
        );
    }

    #[test]
    fn curve_is_reset_between_edges_and_runs() {
        struct Recorder(Rc<RefCell<Vec<bool>>>);

        impl Curve for Recorder {
            fn begin(&mut self, continued: bool) {
                self.0.borrow_mut().push(continued);
            }

            fn point(&mut self, _out: &mut BezPath, _p: Point) {}

            fn end(&mut self, _out: &mut BezPath) {}
        }

        struct RecorderFactory(Rc<RefCell<Vec<bool>>>);

        impl CurveFactory for RecorderFactory {
            fn instantiate(&self) -> Box<dyn Curve> {
                Box::new(Recorder(self.0.clone()))
            }
        }

        let calls = Rc::new(RefCell::new(Vec::new()));
        let area = AreaBuilder::pairs()
            .with_defined(|_, i, _| i != 1)
            .with_curve(RecorderFactory(calls.clone()))
            .build();
        area.generate(&DATA);

        // Leading then trailing edge for each of the two runs.
        assert_eq!(&*calls.borrow(), &[false, true, false, true]);
    }

    #[test]
    fn defined_is_evaluated_exactly_once_per_index() {
        let calls = Rc::new(RefCell::new(0_usize));
        let c = calls.clone();
        let area = AreaBuilder::pairs()
            .with_defined(move |_, i, _| {
                *c.borrow_mut() += 1;
                i != 1
            })
            .build();
        let path = area.generate(&DATA);

        assert_eq!(*calls.borrow(), DATA.len());
        // Partitioning is unchanged: one contour per defined run.
        assert_eq!(
            path.elements(),
            &[
                m(0.0, 1.0),
                l(0.0, 0.0),
                PathEl::ClosePath,
                m(2.0, 2.0),
                l(2.0, 0.0),
                PathEl::ClosePath,
            ]
        );
    }

    #[test]
    fn generate_is_reusable_across_datasets() {
        let area = AreaBuilder::pairs().build();
        let a = area.generate(&DATA);
        let b = area.generate(&[(0.0, 0.0), (1.0, 1.0)]);
        let a_again = area.generate(&DATA);
        assert_eq!(a.elements(), a_again.elements());
        assert_ne!(a.elements(), b.elements());
    }
}
