// Copyright 2026 the Areal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Area shape demos for `areal`.

use areal_core::CoordSpec;
use areal_curves::Step;
use areal_svg::AreaShape;
use peniko::color::palette::css;

const PANEL_W: f64 = 140.0;
const PANEL_H: f64 = 110.0;

fn main() {
    let sections = vec![defaults_demo(), gap_demo(), ribbon_demo(), step_demo()];

    let width = 20.0 + PANEL_W * sections.len() as f64;
    let mut out = String::new();
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {PANEL_H}" width="{width}" height="{PANEL_H}">"#
    ));
    out.push('\n');
    for (i, path) in sections.iter().enumerate() {
        out.push_str(&format!(
            r#"<g transform="translate({},5)">"#,
            10.0 + PANEL_W * i as f64
        ));
        out.push_str(path);
        out.push_str("</g>\n");
    }
    out.push_str("</svg>\n");

    std::fs::write("areal_demo.svg", out).expect("write areal_demo.svg");
    println!("wrote areal_demo.svg");
}

/// A pre-scaled sample series: x in `[0, 120]`, y growing downward with a
/// baseline at `y = 100`.
fn series() -> Vec<(f64, f64)> {
    (0..=12)
        .map(|i| {
            let x = f64::from(i) * 10.0;
            let t = f64::from(i) / 12.0;
            (x, 100.0 - 80.0 * (t * std::f64::consts::PI).sin())
        })
        .collect()
}

fn defaults_demo() -> String {
    AreaShape::pairs()
        .with_data(series())
        .with_y0(100.0)
        .with_fill(css::CORNFLOWER_BLUE)
        .render()
        .to_svg_string()
}

fn gap_demo() -> String {
    AreaShape::pairs()
        .with_data(series())
        .with_y0(100.0)
        .with_defined(|_, i, _| !(4..=6).contains(&i))
        .with_fill(css::INDIAN_RED)
        .render()
        .to_svg_string()
}

fn ribbon_demo() -> String {
    AreaShape::pairs()
        .with_data(series())
        .with_y0(CoordSpec::derived(|d: &(f64, f64), _, _| d.1 + 8.0))
        .with_y1(CoordSpec::derived(|d: &(f64, f64), _, _| d.1 - 8.0))
        .with_fill(css::ORCHID)
        .render()
        .to_svg_string()
}

fn step_demo() -> String {
    AreaShape::pairs()
        .with_data(series())
        .with_y0(100.0)
        .with_curve(Step::mid())
        .with_class_name("step")
        .with_fill(css::SEA_GREEN)
        .render()
        .to_svg_string()
}
