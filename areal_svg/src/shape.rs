// Copyright 2026 the Areal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The area shape component: props in, `<path>` element out.

use core::fmt;

use areal_core::{Area, AreaBuilder, CoordSpec, CurveFactory};
use peniko::Brush;

use crate::element::PathElement;

/// Class present on every rendered area element, ahead of any caller class.
pub const AREA_CLASS: &str = "areal-area";

/// Props for an area `<path>` element.
///
/// Coordinate props follow the aliasing rules of [`AreaBuilder`]: `with_x`
/// binds `x0` and clears `x1`, and symmetrically for `y`. All props are
/// optional. [`AreaShape::pairs`] preconfigures the conventional accessors
/// for `(x, y)` pair data.
pub struct AreaShape<D> {
    data: Vec<D>,
    area: AreaBuilder<D>,
    class_name: Option<String>,
    fill: Option<Brush>,
    attrs: Vec<(String, String)>,
}

impl<D> AreaShape<D> {
    /// A shape with no data and no accessors bound.
    pub fn new() -> Self {
        Self::from_builder(AreaBuilder::new())
    }

    fn from_builder(area: AreaBuilder<D>) -> Self {
        Self {
            data: Vec::new(),
            area,
            class_name: None,
            fill: None,
            attrs: Vec::new(),
        }
    }

    /// Sets the dataset to render.
    pub fn with_data(mut self, data: Vec<D>) -> Self {
        self.data = data;
        self
    }

    /// Binds `x0` and clears `x1`.
    pub fn with_x(mut self, spec: impl Into<CoordSpec<D>>) -> Self {
        self.area = self.area.with_x(spec);
        self
    }

    /// Binds the `x0` slot.
    pub fn with_x0(mut self, spec: impl Into<CoordSpec<D>>) -> Self {
        self.area = self.area.with_x0(spec);
        self
    }

    /// Binds the `x1` slot.
    pub fn with_x1(mut self, spec: impl Into<CoordSpec<D>>) -> Self {
        self.area = self.area.with_x1(spec);
        self
    }

    /// Binds `y0` and clears `y1`.
    pub fn with_y(mut self, spec: impl Into<CoordSpec<D>>) -> Self {
        self.area = self.area.with_y(spec);
        self
    }

    /// Binds the `y0` (baseline) slot.
    pub fn with_y0(mut self, spec: impl Into<CoordSpec<D>>) -> Self {
        self.area = self.area.with_y0(spec);
        self
    }

    /// Binds the `y1` (topline) slot.
    pub fn with_y1(mut self, spec: impl Into<CoordSpec<D>>) -> Self {
        self.area = self.area.with_y1(spec);
        self
    }

    /// Replaces the defined predicate.
    pub fn with_defined(mut self, pred: impl Fn(&D, usize, &[D]) -> bool + 'static) -> Self {
        self.area = self.area.with_defined(pred);
        self
    }

    /// Replaces the curve strategy.
    pub fn with_curve(mut self, curve: impl CurveFactory + 'static) -> Self {
        self.area = self.area.with_curve(curve);
        self
    }

    /// Appends a class merged after the [`AREA_CLASS`] base class.
    pub fn with_class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = Some(class.into());
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// Appends a passthrough attribute for the `<path>` element.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    fn class(&self) -> String {
        match &self.class_name {
            Some(c) if !c.is_empty() => format!("{AREA_CLASS} {c}"),
            _ => AREA_CLASS.to_string(),
        }
    }

    /// Finalizes the generator, produces the outline for the configured
    /// data, and wraps it as a `<path>` element.
    pub fn render(self) -> PathElement {
        let class = self.class();
        let area = self.area.build();
        let mut el = PathElement::new(area.generate(&self.data), class);
        if let Some(fill) = self.fill {
            el = el.with_fill(fill);
        }
        for (name, value) in self.attrs {
            el = el.with_attr(name, value);
        }
        el
    }

    /// Render-override escape hatch: hands the finalized generator to
    /// `children` instead of rendering a `<path>` element.
    ///
    /// The closure receives the immutable [`Area`] and may call
    /// [`Area::generate`] over any datasets, including none; the configured
    /// `data` prop is ignored, matching the precedence rule for overrides.
    pub fn render_with<R>(self, children: impl FnOnce(&Area<D>) -> R) -> R {
        children(&self.area.build())
    }
}

impl AreaShape<(f64, f64)> {
    /// A shape preconfigured for `(x, y)` pair data.
    pub fn pairs() -> Self {
        Self::from_builder(AreaBuilder::pairs())
    }
}

impl<D> Default for AreaShape<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> fmt::Debug for AreaShape<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AreaShape")
            .field("data_len", &self.data.len())
            .field("class_name", &self.class_name)
            .field("fill", &self.fill)
            .field("attrs", &self.attrs)
            .finish_non_exhaustive()
    }
}
