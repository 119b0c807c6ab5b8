//! Pen commands for drawing routes on a snapshot.
//!
//! The output is a resolution-independent path; compositing it onto the
//! image is left to the caller's graphics backend.

use ro_core::{GeoPoint, RouteSegment};
use ro_planner::Rgba;

use crate::{MapSnapshot, ScreenPoint, SnapshotError, SnapshotResult};

/// Colour and width of a stroked route.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrokeStyle {
    pub color: Rgba,
    pub width: f32,
}

impl Default for StrokeStyle {
    /// Orange, 2 points wide.
    fn default() -> Self {
        Self { color: Rgba::ORANGE, width: 2.0 }
    }
}

/// One pen command.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathCommand {
    MoveTo(ScreenPoint),
    LineTo(ScreenPoint),
}

/// A stroked path in snapshot image coordinates.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrokePath {
    pub commands: Vec<PathCommand>,
    pub style:    StrokeStyle,
    /// Size of the snapshot the commands were projected onto.
    pub canvas:   (u32, u32),
}

impl StrokePath {
    /// Number of `LineTo` commands.
    pub fn segment_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::LineTo(_)))
            .count()
    }
}

/// Closed route through `points`: start at the first point, visit each
/// following point in order, and finish back at the first.
///
/// # Errors
///
/// [`SnapshotError::EmptyRoute`] if `points` is empty.
pub fn route_stroke(
    points:   &[GeoPoint],
    snapshot: &impl MapSnapshot,
    style:    StrokeStyle,
) -> SnapshotResult<StrokePath> {
    let (first, rest) = points.split_first().ok_or(SnapshotError::EmptyRoute)?;
    let start = snapshot.point_for(*first);

    let mut commands = Vec::with_capacity(points.len() + 1);
    commands.push(PathCommand::MoveTo(start));
    commands.extend(rest.iter().map(|&p| PathCommand::LineTo(snapshot.point_for(p))));
    commands.push(PathCommand::LineTo(start));

    Ok(StrokePath { commands, style, canvas: snapshot.size() })
}

/// Open two-point line for a rider → boundary segment.
pub fn segment_stroke(
    segment:  &RouteSegment,
    snapshot: &impl MapSnapshot,
    style:    StrokeStyle,
) -> StrokePath {
    StrokePath {
        commands: vec![
            PathCommand::MoveTo(snapshot.point_for(segment.origin)),
            PathCommand::LineTo(snapshot.point_for(segment.destination)),
        ],
        style,
        canvas: snapshot.size(),
    }
}
