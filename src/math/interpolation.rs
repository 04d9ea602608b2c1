//! Kochanek-Bartels cubic spline through an ordered list of control nodes.
//!
//! The curve is parameterised over [0, 1] with each segment between
//! consecutive nodes taking an equal share of the parameter range.

use crate::core::types::DVec3;

/// Samples per segment for the trapezoid arc-length estimate.
const ARC_SAMPLES: usize = 8;

/// A control point with its tangent shaping parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    pub position: DVec3,
    pub tension: f64,
    pub bias: f64,
    pub continuity: f64,
}

impl Node {
    /// Node with neutral tension, bias and continuity (Catmull-Rom).
    pub fn new(position: DVec3) -> Self {
        Self {
            position,
            tension: 0.0,
            bias: 0.0,
            continuity: 0.0,
        }
    }

    pub fn with_shape(mut self, tension: f64, bias: f64, continuity: f64) -> Self {
        self.tension = tension;
        self.bias = bias;
        self.continuity = continuity;
        self
    }
}

/// Per-segment cubic coefficients: `((a*t + b)*t + c)*t + d`.
#[derive(Clone, Copy, Debug)]
struct Segment {
    a: DVec3,
    b: DVec3,
    c: DVec3,
    d: DVec3,
}

impl Segment {
    fn eval(&self, t: f64) -> DVec3 {
        ((self.a * t + self.b) * t + self.c) * t + self.d
    }

    /// Speed |dp/dt| at `t`.
    fn speed(&self, t: f64) -> f64 {
        ((self.a * 3.0 * t + self.b * 2.0) * t + self.c).length()
    }

    fn arc_length(&self, from: f64, to: f64) -> f64 {
        let step = (to - from) / ARC_SAMPLES as f64;
        let mut accum = (self.speed(from) + self.speed(to)) / 2.0;
        for j in 1..ARC_SAMPLES {
            accum += self.speed(from + step * j as f64);
        }
        accum * step
    }
}

/// Interpolating spline through a fixed node list.
#[derive(Clone, Debug)]
pub struct KochanekBartels {
    segments: Vec<Segment>,
    scaling: f64,
}

impl KochanekBartels {
    /// Build the spline. Returns `None` for an empty node list.
    pub fn new(nodes: &[Node]) -> Option<Self> {
        let last = nodes.len().checked_sub(1)?;
        let at = |i: isize| -> DVec3 {
            let clamped = i.clamp(0, last as isize) as usize;
            nodes[clamped].position
        };

        let mut segments = Vec::with_capacity(nodes.len());
        for i in 0..nodes.len() {
            let na = &nodes[i];
            let nb = &nodes[(i + 1).min(last)];

            // Tangent factors: left/right of d[i], left/right of d[i+1]
            let ta = (1.0 - na.tension) * (1.0 + na.bias) * (1.0 + na.continuity) / 2.0;
            let tb = (1.0 - na.tension) * (1.0 - na.bias) * (1.0 - na.continuity) / 2.0;
            let tc = (1.0 - nb.tension) * (1.0 + nb.bias) * (1.0 - nb.continuity) / 2.0;
            let td = (1.0 - nb.tension) * (1.0 - nb.bias) * (1.0 + nb.continuity) / 2.0;

            let i = i as isize;
            let combine = |f1: f64, f2: f64, f3: f64, f4: f64| {
                at(i - 1) * f1 + at(i) * f2 + at(i + 1) * f3 + at(i + 2) * f4
            };

            segments.push(Segment {
                a: combine(-ta, ta - tb - tc + 2.0, tb + tc - td - 2.0, td),
                b: combine(2.0 * ta, -2.0 * ta + 2.0 * tb + tc - 3.0, -2.0 * tb - tc + td + 3.0, -td),
                c: combine(-ta, ta - tb, tb, 0.0),
                d: at(i),
            });
        }

        Some(Self {
            segments,
            scaling: last as f64,
        })
    }

    fn locate(&self, t: f64) -> (usize, f64) {
        let scaled = t * self.scaling;
        let index = (scaled.floor().max(0.0) as usize).min(self.segments.len() - 1);
        (index, scaled - index as f64)
    }

    /// Point on the curve at `t` in [0, 1]; `None` outside that range.
    pub fn position(&self, t: f64) -> Option<DVec3> {
        if !(0.0..=1.0).contains(&t) {
            return None;
        }
        let (index, remainder) = self.locate(t);
        Some(self.segments[index].eval(remainder))
    }

    /// Approximate curve length between two parameter values.
    pub fn arc_length(&self, from: f64, to: f64) -> f64 {
        let (from, to) = if from > to { (to, from) } else { (from, to) };
        let (ia, ra) = self.locate(from);
        let (ib, rb) = self.locate(to);

        if ia == ib {
            return self.segments[ia].arc_length(ra, rb);
        }
        let mut total = self.segments[ia].arc_length(ra, 1.0);
        for segment in &self.segments[ia + 1..ib] {
            total += segment.arc_length(0.0, 1.0);
        }
        total + self.segments[ib].arc_length(0.0, rb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight(n: usize) -> Vec<Node> {
        (0..n)
            .map(|i| Node::new(DVec3::new(i as f64 * 2.0, 0.0, 0.0)))
            .collect()
    }

    #[test]
    fn test_empty_nodes() {
        assert!(KochanekBartels::new(&[]).is_none());
    }

    #[test]
    fn test_passes_through_nodes() {
        let nodes = vec![
            Node::new(DVec3::new(0.0, 0.0, 0.0)),
            Node::new(DVec3::new(4.0, 2.0, 0.0)),
            Node::new(DVec3::new(8.0, 0.0, 3.0)),
        ];
        let spline = KochanekBartels::new(&nodes).unwrap();
        assert!(spline.position(0.0).unwrap().distance(nodes[0].position) < 1e-9);
        assert!(spline.position(0.5).unwrap().distance(nodes[1].position) < 1e-9);
        assert!(spline.position(1.0).unwrap().distance(nodes[2].position) < 1e-9);
        assert!(spline.position(1.5).is_none());
    }

    #[test]
    fn test_straight_line_length() {
        let spline = KochanekBartels::new(&straight(4)).unwrap();
        let len = spline.arc_length(0.0, 1.0);
        assert!((len - 6.0).abs() < 0.05, "length {len}");
        assert!((spline.arc_length(1.0, 0.0) - len).abs() < 1e-12);
    }

    #[test]
    fn test_single_node() {
        let spline = KochanekBartels::new(&straight(1)).unwrap();
        assert_eq!(spline.position(0.3), Some(DVec3::ZERO));
        assert_eq!(spline.arc_length(0.0, 1.0), 0.0);
    }
}
