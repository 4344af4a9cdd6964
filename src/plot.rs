//! SVG charts of a run's diagnostics.

use std::error::Error;
use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::adaptive::Quadrature;
use crate::diagnostics::Diagnostics;
use crate::interval::Interval;

const SIZE: (u32, u32) = (1000, 500);
const RECONSTRUCTION_SAMPLES: usize = 400;

/// Bounds for a log axis covering `values`. Zeros (exact estimates) are drawn
/// one decade below the smallest positive value.
pub fn log_range(values: impl IntoIterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values
        .into_iter()
        .filter(|v| *v > 0. && v.is_finite())
        .fold((f64::INFINITY, 0f64), |(min, max), v| (min.min(v), max.max(v)));

    if min.is_infinite() {
        return (1e-17, 1e-15);
    }

    (min / 10., max * 10.)
}

fn clamp_to(floor: f64) -> impl Fn(f64) -> f64 {
    move |v| if v > floor { v } else { floor * 1.0001 }
}

pub fn plot_error_history(path: &Path, diagnostics: &Diagnostics) -> Result<(), Box<dyn Error>> {
    let errors = diagnostics.errors();
    let (lo, hi) = log_range(errors.iter().copied());
    let clamp = clamp_to(lo);

    let drawing_area = SVGBackend::new(path, SIZE).into_drawing_area();
    drawing_area.fill(&WHITE)?;

    let mut chart_builder = ChartBuilder::on(&drawing_area);

    let mut chart_context = chart_builder
        .caption("Adaptive Simpson error per iteration", ("sans-serif", 20))
        .margin(40)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(0usize..errors.len().max(1), (lo..hi).log_scale())?;

    chart_context
        .configure_mesh()
        .x_desc("Iteration")
        .y_desc("Error estimate")
        .y_label_formatter(&|y| format!("{:.0e}", y))
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    chart_context.draw_series(LineSeries::new(
        errors.iter().enumerate().map(|(i, e)| (i, clamp(*e))),
        BLUE.stroke_width(2),
    ))?;

    drawing_area.present()?;

    Ok(())
}

pub fn plot_error_vs_size(path: &Path, diagnostics: &Diagnostics) -> Result<(), Box<dyn Error>> {
    let sizes = diagnostics.interval_sizes();
    let errors = diagnostics.errors();
    let (size_lo, size_hi) = log_range(sizes.iter().copied());
    let (error_lo, error_hi) = log_range(errors.iter().copied());
    let clamp = clamp_to(error_lo);

    let drawing_area = SVGBackend::new(path, SIZE).into_drawing_area();
    drawing_area.fill(&WHITE)?;

    let mut chart_builder = ChartBuilder::on(&drawing_area);

    let mut chart_context = chart_builder
        .caption("Error vs interval size", ("sans-serif", 20))
        .margin(40)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(
            (size_lo..size_hi).log_scale(),
            (error_lo..error_hi).log_scale(),
        )?;

    chart_context
        .configure_mesh()
        .x_desc("Interval size")
        .y_desc("Error estimate")
        .x_label_formatter(&|x| format!("{:.0e}", x))
        .y_label_formatter(&|y| format!("{:.0e}", y))
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    chart_context.draw_series(
        sizes
            .iter()
            .zip(errors.iter())
            .map(|(h, e)| Circle::new((*h, clamp(*e)), 3, BLUE.filled())),
    )?;

    drawing_area.present()?;

    Ok(())
}

/// The integrand over `support` with every accepted interval shaded.
pub fn plot_reconstruction<F>(
    path: &Path,
    f: F,
    label: &str,
    support: Interval,
    accepted: &[Interval],
) -> Result<(), Box<dyn Error>>
where
    F: Fn(f64) -> f64,
{
    let step = support.width() / (RECONSTRUCTION_SAMPLES - 1) as f64;
    let curve: Vec<(f64, f64)> = (0..RECONSTRUCTION_SAMPLES)
        .map(|i| support.a + step * i as f64)
        .map(|x| (x, f(x)))
        .collect();

    let (y_min, y_max) = curve
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, y)| {
            (lo.min(*y), hi.max(*y))
        });
    let pad = ((y_max - y_min) * 0.1).max(1e-3);
    let (y_lo, y_hi) = (y_min.min(0.) - pad, y_max.max(0.) + pad);

    let drawing_area = SVGBackend::new(path, (1200, 400)).into_drawing_area();
    drawing_area.fill(&WHITE)?;

    let mut chart_builder = ChartBuilder::on(&drawing_area);

    let mut chart_context = chart_builder
        .caption("Integrand with adaptive intervals", ("sans-serif", 20))
        .margin(40)
        .set_label_area_size(LabelAreaPosition::Left, 50)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(support.a..support.b, y_lo..y_hi)?;

    chart_context
        .configure_mesh()
        .x_desc("x")
        .y_desc(label)
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    chart_context.draw_series(accepted.iter().enumerate().map(|(i, interval)| {
        let color = if i % 2 == 0 { BLUE } else { CYAN };
        Rectangle::new(
            [(interval.a, y_lo), (interval.b, y_hi)],
            color.mix(0.25).filled(),
        )
    }))?;

    chart_context
        .draw_series(LineSeries::new(curve, RED.stroke_width(2)))?
        .label(label)
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart_context
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    drawing_area.present()?;

    Ok(())
}

/// Writes all three charts into `dir` and returns their paths.
pub fn plot_all<F>(
    dir: &Path,
    f: F,
    label: &str,
    support: Interval,
    quadrature: &Quadrature,
) -> Result<Vec<PathBuf>, Box<dyn Error>>
where
    F: Fn(f64) -> f64,
{
    std::fs::create_dir_all(dir)?;

    let history = dir.join("error-history.svg");
    let scatter = dir.join("error-vs-size.svg");
    let reconstruction = dir.join("reconstruction.svg");

    plot_error_history(&history, &quadrature.diagnostics)?;
    plot_error_vs_size(&scatter, &quadrature.diagnostics)?;
    plot_reconstruction(
        &reconstruction,
        f,
        label,
        support,
        quadrature.diagnostics.accepted(),
    )?;

    Ok(vec![history, scatter, reconstruction])
}
