// Copyright 2026 the Areal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Curve interpolation strategies beyond the linear default.
//!
//! Every strategy here implements the `areal_core` begin/point/end protocol
//! and plugs into [`areal_core::AreaBuilder::with_curve`]:
//! - [`Step`] — piecewise-constant segments with a configurable changeover
//!   fraction (before/mid/after).
//! - [`Cardinal`] — cubic cardinal spline with configurable tension.

#![no_std]

extern crate alloc;

mod cardinal;
mod step;

pub use cardinal::Cardinal;
pub use step::Step;
