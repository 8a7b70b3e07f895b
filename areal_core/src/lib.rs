// Copyright 2026 the Areal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parametric area-shape generation.
//!
//! The building blocks here turn an ordered dataset plus per-axis coordinate
//! accessors into the closed outline of a filled region, as a
//! [`kurbo::BezPath`]:
//! - [`CoordSpec`] normalizes "a number or a per-point function" into the
//!   uniform [`Accessor`] form.
//! - [`AreaBuilder`] binds coordinate slots, a `defined` predicate, and a
//!   curve strategy, then finalizes into an immutable [`Area`] whose
//!   [`Area::generate`] maps a dataset to a path.
//! - [`Curve`]/[`CurveFactory`] is the pluggable interpolation protocol;
//!   [`Linear`] is the built-in default. Richer strategies live in
//!   `areal_curves`.
//!
//! Rendering the produced path (SVG markup, painting, styling) is out of
//! scope here; see `areal_svg`.

#![no_std]

extern crate alloc;

mod accessor;
mod area;
mod curve;

pub use accessor::{Accessor, CoordSpec};
pub use area::{Area, AreaBuilder, DefinedFn};
pub use curve::{Curve, CurveFactory, Linear};
