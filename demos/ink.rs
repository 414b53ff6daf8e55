//! Renders a sheet of sample strokes to SVG.
//!
//! Run with: cargo run --example ink [output.svg]

use freehand::io::outline_to_svg_path;
use freehand::stroke::{get_stroke, Easing, EndOptions, StrokeOptions, Taper};
use freehand::Polygon;

use std::f64::consts::PI;
use std::fs::File;
use std::io::Write;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;

/// SVG helper to collect filled outlines and labels.
struct Svg {
    content: String,
}

impl Svg {
    fn new() -> Self {
        Self {
            content: String::new(),
        }
    }

    fn outline(&mut self, outline: &Polygon<f64>, fill: &str) {
        self.content.push_str(&format!(
            r#"<path d="{}" fill="{}" fill-rule="nonzero"/>"#,
            outline_to_svg_path(outline),
            fill
        ));
        self.content.push('\n');
    }

    fn text(&mut self, x: f64, y: f64, text: &str) {
        self.content.push_str(&format!(
            r##"<text x="{}" y="{}" font-family="system-ui, sans-serif" font-size="13" fill="#8888aa">{}</text>"##,
            x, y, text
        ));
        self.content.push('\n');
    }

    fn save(&self, path: &str) -> std::io::Result<()> {
        let svg = format!(
            r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">
<rect width="100%" height="100%" fill="#1a1a2e"/>
{}
</svg>"##,
            self.content,
            w = WIDTH,
            h = HEIGHT
        );
        let mut file = File::create(path)?;
        file.write_all(svg.as_bytes())
    }
}

/// A loose handwriting-like loop with pressure rising and falling.
fn scrawl(origin_y: f64) -> Vec<[f64; 3]> {
    (0..160)
        .map(|i| {
            let t = i as f64 / 159.0;
            let x = 60.0 + t * 620.0 + (t * 10.0 * PI).cos() * 18.0;
            let y = origin_y + (t * 10.0 * PI).sin() * 28.0;
            let pressure = 0.3 + 0.6 * (t * PI).sin();
            [x, y, pressure]
        })
        .collect()
}

/// A zigzag with reversals sharp enough to produce corner joints.
fn zigzag(origin_y: f64) -> Vec<[f64; 2]> {
    (0..120)
        .map(|i| {
            let leg = i / 20;
            let along = (i % 20) as f64 * 4.0;
            let x = 60.0 + leg as f64 * 100.0 + if leg % 2 == 0 { along } else { 80.0 - along };
            [x, origin_y + if leg % 2 == 0 { 0.0 } else { 6.0 }]
        })
        .collect()
}

fn main() -> std::io::Result<()> {
    let path = std::env::args().nth(1).unwrap_or_else(|| "ink.svg".to_string());
    let mut svg = Svg::new();

    svg.text(60.0, 40.0, "real pressure, thinning 0.7");
    let pen = StrokeOptions::with_size(14.0)
        .thinning(0.7)
        .simulate_pressure(false)
        .last(true);
    svg.outline(&get_stroke(&scrawl(90.0), &pen), "#e0e0ff");

    svg.text(60.0, 170.0, "simulated pressure, tapered both ends");
    let brush = StrokeOptions::with_size(18.0)
        .thinning(0.6)
        .start(EndOptions::start().taper(Taper::Distance(120.0)))
        .end(EndOptions::end().taper(Taper::Distance(120.0)))
        .last(true);
    svg.outline(&get_stroke(&scrawl(220.0), &brush), "#ffd27a");

    svg.text(60.0, 300.0, "constant width, flat caps, eased pressure");
    let marker = StrokeOptions::with_size(10.0)
        .thinning(0.0)
        .easing(Easing::EaseInOutCubic)
        .start(EndOptions::start().cap(false))
        .end(EndOptions::end().cap(false))
        .last(true);
    svg.outline(&get_stroke(&scrawl(350.0), &marker), "#7ad8ff");

    svg.text(60.0, 440.0, "sharp corners");
    let felt = StrokeOptions::with_size(8.0).streamline(0.2).last(true);
    svg.outline(&get_stroke(&zigzag(480.0), &felt), "#ff8fa3");

    svg.text(60.0, 540.0, "dots");
    for (i, x) in [100.0, 160.0, 220.0].into_iter().enumerate() {
        let dot = StrokeOptions::with_size(8.0 + i as f64 * 6.0).last(true);
        svg.outline(&get_stroke(&[[x, 565.0]], &dot), "#b0ffb0");
    }

    svg.save(&path)?;
    println!("Wrote {path}");
    Ok(())
}
