//! Scatter plot of generated points.

use std::path::Path;

use anyhow::{Context, Result};
use num_traits::ToPrimitive;
use plotters::prelude::*;
use weierstrass::{BigUint, GeneratedEntry};

const SIZE: (u32, u32) = (2000, 2000);
const GRID: RGBColor = RGBColor(220, 220, 220);

/// Render the `(x, y)` pairs over `[0, p) × [0, p)` as a PNG.
pub fn plot_points(entries: &[GeneratedEntry], p: &BigUint, path: &Path) -> Result<()> {
    let bound = p.to_f64().context("field modulus does not fit an f64 axis")?;

    let root = BitMapBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .build_cartesian_2d(0f64..bound, 0f64..bound)?;

    for i in 1..10 {
        let at = bound * f64::from(i) / 10.0;
        chart.draw_series(LineSeries::new([(at, 0.0), (at, bound)], &GRID))?;
        chart.draw_series(LineSeries::new([(0.0, at), (bound, at)], &GRID))?;
    }

    let style = BLUE.mix(0.8).filled();
    chart.draw_series(entries.iter().filter_map(|entry| {
        let x = entry.x.to_f64()?;
        let y = entry.y.to_f64()?;
        Some(Circle::new((x, y), 3, style))
    }))?;

    root.present()
        .with_context(|| format!("saving plot to {}", path.display()))?;
    Ok(())
}
