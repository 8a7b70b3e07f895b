// Copyright 2026 the Areal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG rendering surface for `areal_core` shapes.
//!
//! [`AreaShape`] is the prop-driven wrapper around the core generator: it
//! binds coordinate props, merges class names, and renders a [`PathElement`]
//! carrying the produced outline — or hands the configured generator to a
//! caller-supplied override instead.

mod element;
mod shape;

pub use element::PathElement;
pub use shape::{AREA_CLASS, AreaShape};
