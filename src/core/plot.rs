use std::{error::Error, ops::Range};

use plotters::{
    coord::types::RangedCoordf64,
    prelude::{
        Cartesian2d, ChartBuilder, ChartContext, Circle, CoordTranslate, Cross, DrawingBackend,
        IntoDrawingArea, LabelAreaPosition, PathElement, SVGBackend,
    },
    series::LineSeries,
    style::{Color, FontStyle, IntoFont, Palette, Palette99, BLACK, RED, WHITE},
};

use super::optimization::OptimizationResult;

const FONT: &str = "Arial";

fn config_chart<'a, DB: DrawingBackend>(
    chart: &'a mut ChartBuilder<'a, '_, DB>,
    title: &str,
    x_range: Range<f64>,
    y_range: Range<f64>,
    (x_desc, y_desc): (&str, &str),
) -> Result<ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>, Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    chart
        .caption(title, (FONT, 44, FontStyle::Bold).into_font())
        .set_label_area_size(LabelAreaPosition::Left, 80)
        .set_label_area_size(LabelAreaPosition::Bottom, 60)
        .margin(60);

    let mut c = chart.build_cartesian_2d(x_range, y_range)?;

    c.configure_mesh()
        .y_max_light_lines(0)
        .x_labels(5)
        .y_labels(5)
        .x_desc(x_desc)
        .y_desc(y_desc)
        .x_label_style((FONT, 30).into_font())
        .y_label_style((FONT, 30).into_font())
        .draw()?;
    Ok(c)
}

fn config_series_label<'a, DB: DrawingBackend + 'a, CT: CoordTranslate>(
    chart: &mut ChartContext<'a, DB, CT>,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    chart
        .configure_series_labels()
        .label_font((FONT, 30).into_font())
        .background_style(&WHITE)
        .border_style(&BLACK)
        .draw()?;
    Ok(())
}

/// Widen a degenerate range so the chart always has some height.
fn padded(min: f64, max: f64) -> Range<f64> {
    let pad = ((max - min) * 0.05).max(0.5);
    (min - pad)..(max + pad)
}

/// Line chart of the gbest objective value per iteration.
pub fn graph_heuristic(result: &OptimizationResult, path: &str) -> Result<(), Box<dyn Error>> {
    let root = SVGBackend::new(path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let min = result.convergence.iter().copied().fold(f64::MAX, f64::min);
    let max = result.convergence.iter().copied().fold(f64::MIN, f64::max);
    let last = result.convergence.len().saturating_sub(1).max(1) as f64;

    let mut chart_b = ChartBuilder::on(&root);
    let mut chart = config_chart(
        &mut chart_b,
        &format!("Optimization {}", result.index),
        0f64..last,
        padded(min, max),
        ("Iteration", "Heuristic"),
    )?;

    let color = Palette99::pick(0);
    chart
        .draw_series(LineSeries::new(
            result
                .convergence
                .iter()
                .enumerate()
                .map(|(i, v)| (i as f64, *v)),
            color.stroke_width(4),
        ))?
        .label("gbest")
        .legend(move |(x, y)| {
            PathElement::new([(x, y), (x + 20, y)], color.filled().stroke_width(4))
        });

    config_series_label(&mut chart)?;
    root.present()?;
    Ok(())
}

/// Scatter of the first two position coordinates of every particle at `iteration`.
pub fn graph_particles(
    result: &OptimizationResult,
    iteration: usize,
    path: &str,
) -> Result<(), Box<dyn Error>> {
    let xy = |coordinates: &[f64]| {
        (
            coordinates.first().copied().unwrap_or(0.0),
            coordinates.get(1).copied().unwrap_or(0.0),
        )
    };
    let points = result
        .trajectory
        .iteration(iteration)
        .iter()
        .map(|r| xy(&r.position))
        .collect::<Vec<_>>();
    let gbest = xy(&result.gbest);

    let extent = points
        .iter()
        .chain(std::iter::once(&gbest))
        .fold(1f64, |m, (x, y)| m.max(x.abs()).max(y.abs()));

    let root = SVGBackend::new(path, (1024, 1024)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart_b = ChartBuilder::on(&root);
    let mut chart = config_chart(
        &mut chart_b,
        &format!("Optimization {}, iteration {}", result.index, iteration),
        padded(-extent, extent),
        padded(-extent, extent),
        ("x", "y"),
    )?;

    let color = Palette99::pick(1);
    chart
        .draw_series(
            points
                .iter()
                .map(|point| Circle::new(*point, 6, color.mix(0.7).filled())),
        )?
        .label("particles")
        .legend(move |(x, y)| Circle::new((x + 10, y), 6, color.filled()));

    chart
        .draw_series(std::iter::once(Cross::new(gbest, 10, RED.stroke_width(3))))?
        .label("gbest")
        .legend(|(x, y)| Cross::new((x + 10, y), 6, RED.stroke_width(3)));

    config_series_label(&mut chart)?;
    root.present()?;
    Ok(())
}
