use std::f64::consts::{FRAC_PI_2, TAU};

/// Largest sweep of one polygon piece. Keeps every piece convex.
const MAX_PIECE_SWEEP: f64 = FRAC_PI_2;
/// Arc vertices per full turn.
const ARC_RESOLUTION: f64 = 128.0;

/// Angular extent of one slice, in radians measured clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    pub start: f64,
    pub end: f64,
}

impl Wedge {
    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }

    /// Point on the bisector at `radius`, where the value label goes.
    pub fn label_anchor(&self, radius: f64) -> [f64; 2] {
        polar(radius, (self.start + self.end) / 2.0)
    }

    /// Convex polygons (centre plus arc) covering the wedge.
    pub fn polygons(&self, radius: f64) -> Vec<Vec<[f64; 2]>> {
        if self.sweep() <= 0.0 {
            return Vec::new();
        }
        let pieces = (self.sweep() / MAX_PIECE_SWEEP).ceil() as usize;
        let piece_sweep = self.sweep() / pieces as f64;
        let steps = ((piece_sweep / TAU) * ARC_RESOLUTION).ceil().max(1.0) as usize;

        (0..pieces)
            .map(|p| {
                let from = self.start + p as f64 * piece_sweep;
                let mut poly = Vec::with_capacity(steps + 2);
                poly.push([0.0, 0.0]);
                for s in 0..=steps {
                    poly.push(polar(radius, from + piece_sweep * s as f64 / steps as f64));
                }
                poly
            })
            .collect()
    }
}

/// Split a full turn proportionally to `values`. All-zero input gives no
/// wedges; zero entries give empty wedges so indices still line up.
pub fn layout(values: &[usize]) -> Vec<Wedge> {
    let total: usize = values.iter().sum();
    if total == 0 {
        return Vec::new();
    }
    let mut cursor = 0.0;
    values
        .iter()
        .map(|&v| {
            let start = cursor;
            cursor += TAU * v as f64 / total as f64;
            Wedge { start, end: cursor }
        })
        .collect()
}

fn polar(radius: f64, clockwise_from_top: f64) -> [f64; 2] {
    let theta = FRAC_PI_2 - clockwise_from_top;
    [radius * theta.cos(), radius * theta.sin()]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn layout_covers_full_turn_proportionally() {
        let wedges = layout(&[1, 3]);
        assert_eq!(wedges.len(), 2);
        assert!((wedges[0].sweep() - TAU / 4.0).abs() < EPS);
        assert!((wedges[1].end - TAU).abs() < EPS);
    }

    #[test]
    fn all_zero_values_have_no_wedges() {
        assert!(layout(&[0, 0]).is_empty());
        assert!(layout(&[]).is_empty());
    }

    #[test]
    fn zero_value_keeps_its_index_but_draws_nothing() {
        let wedges = layout(&[0, 5]);
        assert_eq!(wedges.len(), 2);
        assert!(wedges[0].polygons(1.0).is_empty());
    }

    #[test]
    fn large_wedge_is_split_into_convex_pieces() {
        let wedge = Wedge { start: 0.0, end: TAU * 0.7 };
        let polys = wedge.polygons(1.0);
        assert_eq!(polys.len(), 3);
        for poly in &polys {
            assert_eq!(poly[0], [0.0, 0.0]);
            for p in &poly[1..] {
                assert!(((p[0] * p[0] + p[1] * p[1]).sqrt() - 1.0).abs() < EPS);
            }
        }
    }

    #[test]
    fn first_wedge_starts_at_twelve_oclock_and_runs_clockwise() {
        let wedge = Wedge { start: 0.0, end: FRAC_PI_2 };
        let poly = &wedge.polygons(1.0)[0];
        let first = poly[1];
        let last = poly[poly.len() - 1];
        assert!(first[0].abs() < EPS && (first[1] - 1.0).abs() < EPS);
        assert!((last[0] - 1.0).abs() < EPS && last[1].abs() < EPS);
    }
}
