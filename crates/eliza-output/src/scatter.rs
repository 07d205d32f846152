//! Character-grid scatter rendering for regression plots.
//!
//! Stands in for a graphical scatter-and-fit-line plot: observations are
//! drawn as `*`, the fitted line as `.`, inside a fixed-size frame.

use eliza_model::PlotData;

const WIDTH: usize = 64;
const HEIGHT: usize = 20;

/// Render aligned returns as a character-grid scatter with the fitted line.
pub fn render_scatter(plot: &PlotData) -> String {
    if plot.market_returns.is_empty() || plot.stock_returns.is_empty() {
        return String::from("(no observations to plot)\n");
    }

    let (mut x_min, mut x_max) = bounds(&plot.market_returns);
    let (mut y_min, mut y_max) = bounds(&plot.stock_returns);

    // Keep the fitted line inside the frame.
    for x in [x_min, x_max] {
        let y = plot.alpha + plot.beta * x;
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    if (x_max - x_min).abs() < f64::EPSILON {
        x_min -= 1e-6;
        x_max += 1e-6;
    }
    if (y_max - y_min).abs() < f64::EPSILON {
        y_min -= 1e-6;
        y_max += 1e-6;
    }

    let mut grid = vec![[' '; WIDTH]; HEIGHT];

    for col in 0..WIDTH {
        let x = x_min + (x_max - x_min) * (col as f64 + 0.5) / WIDTH as f64;
        let y = plot.alpha + plot.beta * x;
        if y >= y_min && y <= y_max {
            grid[row_of(y, y_min, y_max)][col] = '.';
        }
    }

    for (&x, &y) in plot.market_returns.iter().zip(&plot.stock_returns) {
        grid[row_of(y, y_min, y_max)][col_of(x, x_min, x_max)] = '*';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "\nFit: y = {:.6} + {:.4} * x\n",
        plot.alpha, plot.beta
    ));
    out.push('+');
    out.push_str(&"-".repeat(WIDTH));
    out.push_str("+\n");
    for row in &grid {
        out.push('|');
        out.extend(row.iter());
        out.push_str("|\n");
    }
    out.push('+');
    out.push_str(&"-".repeat(WIDTH));
    out.push_str("+\n");
    out.push_str(&format!(
        "x: [{x_min:.4}, {x_max:.4}]  y: [{y_min:.4}, {y_max:.4}]\n"
    ));

    out
}

fn bounds(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (min, max)
}

fn col_of(x: f64, x_min: f64, x_max: f64) -> usize {
    scale(x, x_min, x_max, WIDTH)
}

fn row_of(y: f64, y_min: f64, y_max: f64) -> usize {
    // Row zero is the top of the frame.
    HEIGHT - 1 - scale(y, y_min, y_max, HEIGHT)
}

fn scale(value: f64, min: f64, max: f64, cells: usize) -> usize {
    let t = (value - min) / (max - min);
    let index = (t * (cells - 1) as f64).round() as isize;
    index.clamp(0, cells as isize - 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scatter_contains_points_and_line() {
        let plot = PlotData {
            market_returns: vec![-0.02, -0.01, 0.0, 0.01, 0.02],
            stock_returns: vec![-0.025, -0.011, 0.001, 0.013, 0.024],
            alpha: 0.0002,
            beta: 1.2,
        };
        let rendered = render_scatter(&plot);

        assert!(rendered.contains('*'));
        assert!(rendered.contains('.'));
        assert!(rendered.contains("Fit: y ="));
        assert_eq!(rendered.matches('|').count(), HEIGHT * 2);
    }

    #[test]
    fn test_empty_plot() {
        let plot = PlotData {
            market_returns: vec![],
            stock_returns: vec![],
            alpha: 0.0,
            beta: 1.0,
        };
        assert_eq!(render_scatter(&plot), "(no observations to plot)\n");
    }

    #[test]
    fn test_single_point_does_not_panic() {
        let plot = PlotData {
            market_returns: vec![0.01],
            stock_returns: vec![0.01],
            alpha: 0.0,
            beta: 1.0,
        };
        let rendered = render_scatter(&plot);
        assert!(rendered.contains('*'));
    }
}
