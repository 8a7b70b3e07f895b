// Copyright 2026 the Areal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG `<path>` element construction.

use kurbo::BezPath;
use peniko::Brush;

/// A rendered `<path>` element: geometry plus presentation attributes.
#[derive(Clone, Debug)]
pub struct PathElement {
    path: BezPath,
    class: String,
    fill: Option<Brush>,
    attrs: Vec<(String, String)>,
}

impl PathElement {
    /// Creates an element wrapping `path` with the given class string.
    pub fn new(path: BezPath, class: impl Into<String>) -> Self {
        Self {
            path,
            class: class.into(),
            fill: None,
            attrs: Vec::new(),
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// Appends a passthrough attribute.
    ///
    /// Attributes are emitted in insertion order, unvalidated; the value is
    /// XML-escaped, the name is the caller's responsibility.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// The generated outline.
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// The class string.
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Serializes the element as SVG markup.
    pub fn to_svg_string(&self) -> String {
        let d = self.path.to_svg();
        let mut out = format!(r#"<path class="{}" d="{d}""#, escape_xml(&self.class));
        if let Some(fill) = &self.fill {
            write_paint_attr(&mut out, "fill", fill);
        }
        for (name, value) in &self.attrs {
            out.push_str(&format!(r#" {name}="{}""#, escape_xml(value)));
        }
        out.push_str("/>");
        out
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let paint = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (paint, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
