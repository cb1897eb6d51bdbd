//! SVG geometry for the dashboard charts.
//!
//! Produces `points`/`d` attribute strings; rendering is left to the view.

use std::f64::consts::PI;

/// Round `max` up to the next multiple of `step` (at least one step).
pub fn nice_max(values: impl IntoIterator<Item = f64>, step: f64) -> f64 {
    let max = values.into_iter().fold(0.0_f64, f64::max);
    let steps = (max / step).ceil().max(1.0);
    steps * step
}

/// Evenly spaced y-axis tick values from 0 to `max` inclusive.
pub fn ticks(max: f64, count: usize) -> Vec<f64> {
    if count < 2 {
        return vec![max];
    }
    (0..count)
        .map(|i| max * i as f64 / (count - 1) as f64)
        .collect()
}

/// Polyline `points` for `values` in a `width` x `height` box.
///
/// Values are scaled against `max`; the y axis points down as in SVG.
pub fn line_points(values: &[f64], width: f64, height: f64, max: f64) -> String {
    let max = if max > 0.0 { max } else { 1.0 };
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = step * i as f64;
            let y = height - (v.clamp(0.0, max) / max) * height;
            format!("{:.1},{:.1}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn polar(cx: f64, cy: f64, r: f64, deg: f64) -> (f64, f64) {
    let rad = (deg - 90.0) * PI / 180.0;
    (cx + r * rad.cos(), cy + r * rad.sin())
}

/// Donut ring geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Donut {
    pub cx: f64,
    pub cy: f64,
    pub inner: f64,
    pub outer: f64,
    /// Gap between segments in degrees
    pub pad_deg: f64,
}

impl Donut {
    /// Path `d` strings, one per share, clockwise from 12 o'clock.
    pub fn segments(&self, shares: &[f64]) -> Vec<String> {
        let total: f64 = shares.iter().filter(|v| **v > 0.0).sum();
        if total <= 0.0 {
            return Vec::new();
        }

        let pad = if shares.len() > 1 { self.pad_deg } else { 0.0 };
        let available = 360.0 - pad * shares.len() as f64;
        let mut start = 0.0;

        shares
            .iter()
            .map(|&value| {
                let span = (value.max(0.0) / total * available).min(359.99);
                let end = start + span;
                let path = self.arc(start, end);
                start = end + pad;
                path
            })
            .collect()
    }

    fn arc(&self, start: f64, end: f64) -> String {
        let (x1, y1) = polar(self.cx, self.cy, self.outer, start);
        let (x2, y2) = polar(self.cx, self.cy, self.outer, end);
        let (x3, y3) = polar(self.cx, self.cy, self.inner, end);
        let (x4, y4) = polar(self.cx, self.cy, self.inner, start);
        let large = if end - start > 180.0 { 1 } else { 0 };

        format!(
            "M {:.2} {:.2} A {o} {o} 0 {l} 1 {:.2} {:.2} L {:.2} {:.2} A {i} {i} 0 {l} 0 {:.2} {:.2} Z",
            x1,
            y1,
            x2,
            y2,
            x3,
            y3,
            x4,
            y4,
            o = self.outer,
            i = self.inner,
            l = large,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_max() {
        assert_eq!(nice_max([120.0, 200.0, 190.0], 50.0), 200.0);
        assert_eq!(nice_max([201.0], 50.0), 250.0);
        assert_eq!(nice_max(Vec::<f64>::new(), 50.0), 50.0);
    }

    #[test]
    fn test_ticks() {
        assert_eq!(ticks(200.0, 5), vec![0.0, 50.0, 100.0, 150.0, 200.0]);
        assert_eq!(ticks(10.0, 1), vec![10.0]);
    }

    #[test]
    fn test_line_points() {
        let points = line_points(&[0.0, 100.0, 200.0], 300.0, 100.0, 200.0);
        assert_eq!(points, "0.0,100.0 150.0,50.0 300.0,0.0");
    }

    #[test]
    fn test_line_points_edge_cases() {
        assert_eq!(line_points(&[], 100.0, 100.0, 10.0), "");
        assert_eq!(line_points(&[5.0], 100.0, 100.0, 10.0), "0.0,50.0");
        assert_eq!(line_points(&[5.0], 100.0, 100.0, 0.0), "0.0,0.0");
    }

    #[test]
    fn test_donut_segments() {
        let donut = Donut {
            cx: 100.0,
            cy: 100.0,
            inner: 60.0,
            outer: 100.0,
            pad_deg: 0.0,
        };
        let paths = donut.segments(&[75.0, 25.0]);
        assert_eq!(paths.len(), 2);
        assert!(paths[0].starts_with("M 100.00 0.00 A 100 100 0 1 1"));
        assert!(paths[1].contains(" 0 0 1 "));
    }

    #[test]
    fn test_donut_empty() {
        let donut = Donut {
            cx: 0.0,
            cy: 0.0,
            inner: 1.0,
            outer: 2.0,
            pad_deg: 5.0,
        };
        assert!(donut.segments(&[]).is_empty());
        assert!(donut.segments(&[0.0, 0.0]).is_empty());
    }
}
