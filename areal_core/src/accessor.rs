// Copyright 2026 the Areal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accessor normalization: "a number or a per-point function" coordinate
//! specs, resolved once into a uniform function form.

extern crate alloc;

use alloc::boxed::Box;
use core::fmt;

/// A resolved per-point coordinate accessor.
///
/// Receives the datum, its index in the dataset, and the full dataset, and
/// derives one coordinate. Indices always refer to the original dataset,
/// even when the generator walks a sub-run of it.
pub type Accessor<D> = Box<dyn Fn(&D, usize, &[D]) -> f64>;

/// A coordinate slot specification: a fixed value or a per-point function.
///
/// Builder slots accept `impl Into<CoordSpec<D>>`, so a plain `f64` binds a
/// constant and [`CoordSpec::derived`] binds a function.
pub enum CoordSpec<D> {
    /// The same value for every point.
    Value(f64),
    /// A value derived from the datum, its index, and the full dataset.
    Derived(Accessor<D>),
}

impl<D> CoordSpec<D> {
    /// Creates a fixed-value spec.
    pub fn value(v: f64) -> Self {
        Self::Value(v)
    }

    /// Creates a per-point spec from an accessor function.
    pub fn derived(f: impl Fn(&D, usize, &[D]) -> f64 + 'static) -> Self {
        Self::Derived(Box::new(f))
    }

    /// Resolves the spec into the uniform accessor form.
    ///
    /// Fixed values are lifted into closures that ignore their arguments;
    /// derived specs pass through unchanged. Resolution happens once at
    /// finalize time, never per point, and values are not validated: a
    /// non-finite constant flows into the generated path as-is.
    pub fn resolve(self) -> Accessor<D> {
        match self {
            Self::Value(v) => Box::new(move |_, _, _| v),
            Self::Derived(f) => f,
        }
    }
}

impl<D> From<f64> for CoordSpec<D> {
    fn from(v: f64) -> Self {
        Self::Value(v)
    }
}

impl<D> fmt::Debug for CoordSpec<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Derived(_) => f.debug_tuple("Derived").field(&"..").finish(),
        }
    }
}
