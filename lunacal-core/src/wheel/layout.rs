//! Wheel geometry: one annular wedge per cycle day.
//!
//! Angles follow the SVG convention (radians, 0 pointing right, y
//! growing downward), so the top of the circle is -π/2. Day 1's wedge
//! starts at the top in the unrotated frame; a single group rotation
//! then pins the middle of today's wedge back to the top.

use std::f64::consts::{PI, TAU};

/// Fixed reference angle where the current day sits: 12 o'clock.
pub const TOP_ANGLE: f64 = -PI / 2.0;

/// Outer and inner radius of the day ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelRadii {
    pub outer: f64,
    pub inner: f64,
}

/// A point in wheel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One day's annular wedge, in the unrotated frame.
///
/// The four corners trace the wedge outline in drawing order: along
/// the outer arc from `outer_start` to `outer_end`, in to `inner_end`,
/// and back along the inner arc to `inner_start`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcSegment {
    pub day: u32,
    pub start_angle: f64,
    pub end_angle: f64,
    pub mid_angle: f64,
    pub outer_start: Point,
    pub outer_end: Point,
    pub inner_end: Point,
    pub inner_start: Point,
}

/// The whole ring plus the rotation that anchors today at the top.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelGeometry {
    pub cycle_length: u32,
    pub current_day: u32,
    pub radii: WheelRadii,
    pub center: Point,
    pub rotation: f64,
    pub segments: Vec<ArcSegment>,
}

/// Angular width of one day slice.
pub fn angle_per_day(cycle_length: u32) -> f64 {
    TAU / f64::from(cycle_length.max(1))
}

/// Rotation that moves the *center* of the current day's wedge onto
/// the top marker. Applied to all wedges as one rigid group; label
/// angles get the same offset so they stay glued to their wedges.
pub fn rotation_offset(current_day: u32, angle_per_day: f64) -> f64 {
    -((f64::from(current_day) - 0.5) * angle_per_day)
}

/// Point at `radius` from `center` along `angle`.
pub fn point_at(center: Point, radius: f64, angle: f64) -> Point {
    Point {
        x: center.x + radius * angle.cos(),
        y: center.y + radius * angle.sin(),
    }
}

/// Wedge geometry for one day, unrotated.
pub fn segment_geometry(day: u32, cycle_length: u32, radii: WheelRadii, center: Point) -> ArcSegment {
    let step = angle_per_day(cycle_length);
    let start_angle = TOP_ANGLE + (f64::from(day) - 1.0) * step;
    let end_angle = start_angle + step;
    let mid_angle = start_angle + step / 2.0;

    ArcSegment {
        day,
        start_angle,
        end_angle,
        mid_angle,
        outer_start: point_at(center, radii.outer, start_angle),
        outer_end: point_at(center, radii.outer, end_angle),
        inner_end: point_at(center, radii.inner, end_angle),
        inner_start: point_at(center, radii.inner, start_angle),
    }
}

impl WheelGeometry {
    /// Geometry for a full ring of `cycle_length` wedges with today's
    /// wedge centered on the top marker.
    pub fn compute(cycle_length: u32, current_day: u32, radii: WheelRadii, center: Point) -> Self {
        let cycle_length = cycle_length.max(1);
        let step = angle_per_day(cycle_length);

        let segments = (1..=cycle_length)
            .map(|day| segment_geometry(day, cycle_length, radii, center))
            .collect();

        WheelGeometry {
            cycle_length,
            current_day,
            radii,
            center,
            rotation: rotation_offset(current_day, step),
            segments,
        }
    }

    /// Angle of a day's label after the group rotation.
    pub fn label_angle(&self, day: u32) -> f64 {
        let step = angle_per_day(self.cycle_length);
        TOP_ANGLE + (f64::from(day) - 0.5) * step + self.rotation
    }

    /// Label anchor point for a day, at `radius` from the center.
    pub fn label_point(&self, day: u32, radius: f64) -> Point {
        point_at(self.center, radius, self.label_angle(day))
    }
}
