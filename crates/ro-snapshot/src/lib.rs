//! `ro-snapshot` — static map snapshots with a drawn route.
//!
//! Rendering the map itself is a collaborator's job.  This crate describes
//! what to render ([`SnapshotOptions`]), delivers the collaborator's result
//! over a channel ([`SnapshotRenderer`]), turns a route into pen commands on
//! the rendered image ([`route_stroke`]), and caches finished images
//! ([`SnapshotCache`]).
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`options`] | `SnapshotOptions`, `MapType`                                    |
//! | [`render`]  | `MapSnapshot`, `SnapshotRenderer`, `ThreadedRenderer`, `RegionFrame` |
//! | [`stroke`]  | `route_stroke`, `segment_stroke`, `StrokePath`, `StrokeStyle`   |
//! | [`cache`]   | `SnapshotCache`                                                 |
//! | [`error`]   | `SnapshotError`, `SnapshotResult<T>`                            |
//!
//! # Usage
//!
//! ```rust,ignore
//! let renderer = ThreadedRenderer::new(|opts: &SnapshotOptions| Ok(RegionFrame::new(opts)));
//! let rx = renderer.start(SnapshotOptions::around(points[0], 8_000.0, (375, 300)));
//! let snapshot = wait_for(&rx)?;
//! let stroke = route_stroke(&points, &snapshot, StrokeStyle::default())?;
//! ```

pub mod cache;
pub mod error;
pub mod options;
pub mod render;
pub mod stroke;


pub use cache::SnapshotCache;
pub use error::{SnapshotError, SnapshotResult};
pub use options::{MapType, SnapshotOptions};
pub use render::{
    MapSnapshot, RegionFrame, ScreenPoint, SnapshotRenderer, ThreadedRenderer, wait_for,
};
pub use stroke::{PathCommand, StrokePath, StrokeStyle, route_stroke, segment_stroke};
