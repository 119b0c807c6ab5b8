//! Snapshot rendering seam and channel-based result delivery.
//!
//! # Delivery
//!
//! [`SnapshotRenderer::start`] returns immediately with a
//! [`Receiver`](mpsc::Receiver) that yields exactly one result.  Callers may
//! block on it ([`wait_for`]), poll it with `try_recv`, or simply drop it;
//! a dropped receiver discards the result without error.

use std::sync::{Arc, mpsc};
use std::thread;

use ro_core::GeoPoint;

use crate::{SnapshotError, SnapshotOptions, SnapshotResult};

// ── Rendered snapshot ─────────────────────────────────────────────────────────

/// Position on a snapshot image, in points from the top-left corner.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A finished snapshot as seen by route drawing: its size and the
/// collaborator's projection from coordinates to image points.
pub trait MapSnapshot {
    /// Image size in points, `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Where `coord` appears on the image.  May lie outside the image bounds.
    fn point_for(&self, coord: GeoPoint) -> ScreenPoint;
}

/// A snapshot with a linear (equirectangular) frame over the requested
/// region and no image data.
///
/// Stands in for a real map renderer in headless runs and tests.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionFrame {
    size:      (u32, u32),
    north:     f64,
    west:      f64,
    lat_span:  f64,
    lon_span:  f64,
}

impl RegionFrame {
    pub fn new(options: &SnapshotOptions) -> Self {
        let (lat_span, lon_span) = options.region.span_degrees();
        let c = options.region.center;
        Self {
            size: options.size,
            north: c.lat + lat_span * 0.5,
            west: c.lon - lon_span * 0.5,
            lat_span,
            lon_span,
        }
    }
}

impl MapSnapshot for RegionFrame {
    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn point_for(&self, coord: GeoPoint) -> ScreenPoint {
        let (w, h) = (self.size.0 as f64, self.size.1 as f64);
        ScreenPoint::new(
            (coord.lon - self.west) / self.lon_span * w,
            (self.north - coord.lat) / self.lat_span * h,
        )
    }
}

// ── Renderer seam ─────────────────────────────────────────────────────────────

/// Produces snapshots asynchronously.
///
/// Implement this for the host map framework; [`ThreadedRenderer`] adapts
/// any blocking render function.
pub trait SnapshotRenderer {
    type Snapshot: MapSnapshot + Send + 'static;

    /// Begin rendering `options`.  The receiver yields one result.
    fn start(&self, options: SnapshotOptions) -> mpsc::Receiver<SnapshotResult<Self::Snapshot>>;
}

/// Runs a blocking render function on a worker thread per request.
pub struct ThreadedRenderer<F> {
    render: Arc<F>,
}

impl<F> ThreadedRenderer<F> {
    pub fn new(render: F) -> Self {
        Self { render: Arc::new(render) }
    }
}

impl<F, S> SnapshotRenderer for ThreadedRenderer<F>
where
    F: Fn(&SnapshotOptions) -> SnapshotResult<S> + Send + Sync + 'static,
    S: MapSnapshot + Send + 'static,
{
    type Snapshot = S;

    fn start(&self, options: SnapshotOptions) -> mpsc::Receiver<SnapshotResult<S>> {
        let (tx, rx) = mpsc::channel();
        let worker_tx = tx.clone();
        let render = Arc::clone(&self.render);

        let spawned = thread::Builder::new()
            .name("snapshot".into())
            .spawn(move || {
                let result = (*render)(&options);
                if worker_tx.send(result).is_err() {
                    log::debug!("snapshot receiver dropped before delivery");
                }
            });

        if let Err(e) = spawned {
            log::warn!("failed to spawn snapshot worker: {e}");
            if tx.send(Err(SnapshotError::Spawn(e.to_string()))).is_err() {
                log::debug!("snapshot receiver dropped before delivery");
            }
        }
        rx
    }
}

/// Block until `rx` delivers its result.
///
/// # Errors
///
/// The renderer's own error, or [`SnapshotError::Disconnected`] if the
/// sender went away without sending.
pub fn wait_for<S>(rx: &mpsc::Receiver<SnapshotResult<S>>) -> SnapshotResult<S> {
    rx.recv().map_err(|_| SnapshotError::Disconnected)?
}
