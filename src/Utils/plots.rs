use crate::numerical::sampler::Point;
use plotters::prelude::*;

/// Splits sampled points into continuous runs, a hole ends a run.
pub fn continuous_runs(points: &[Option<Point>]) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for p in points {
        match p {
            Some(p) => current.push((p.x, p.y)),
            None => {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// PNG chart of a sampled curve, every continuous run drawn as its own line
pub fn plot_samples(
    caption: &str,
    points: &[Option<Point>],
    domain: (f64, f64),
    codomain: (f64, f64),
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let root_area = BitMapBackend::new(filename, (800, 600)).into_drawing_area();
    root_area.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root_area)
        .caption(caption, ("sans-serif", 40))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(domain.0..domain.1, codomain.0..codomain.1)?;

    chart.configure_mesh().x_desc("x").y_desc("y").draw()?;

    for (i, run) in continuous_runs(points).into_iter().enumerate() {
        let series = chart.draw_series(LineSeries::new(run, &Palette99::pick(0)))?;
        if i == 0 {
            series
                .label(caption.to_string())
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &Palette99::pick(0)));
        }
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root_area.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_split_at_holes() {
        let p = |x: f64| Some(Point { x, y: x });
        let points = vec![p(0.0), p(1.0), None, p(3.0), None, None, p(6.0)];
        let runs = continuous_runs(&points);
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0], vec![(0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(runs[2], vec![(6.0, 6.0)]);
    }
}
