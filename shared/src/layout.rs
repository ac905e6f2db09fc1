use std::f64::consts::{PI, TAU};

/// Fixed on-screen angle of the pointer: 12 o'clock in the canvas
/// convention (0 at 3 o'clock, angles growing clockwise).
pub const POINTER_ANGLE: f64 = 3.0 * PI / 2.0;

/// One angular slice of the wheel, in the unrotated wheel frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Segment {
    /// Angular center of the wedge; what the spin aligns under the pointer.
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }
}

/// Equal-angle wedge layout. Wedge size deliberately ignores prize weight:
/// probabilities drive selection only, every wedge spans `2π / n`. The
/// segment order matches the configured prize list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentLayout {
    count: usize,
}

impl SegmentLayout {
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn angle_per_segment(&self) -> f64 {
        TAU / self.count as f64
    }

    pub fn segment(&self, index: usize) -> Segment {
        let span = self.angle_per_segment();
        let start_angle = index as f64 * span;
        Segment {
            index,
            start_angle,
            end_angle: start_angle + span,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Segment> + '_ {
        (0..self.count).map(move |index| self.segment(index))
    }
}
