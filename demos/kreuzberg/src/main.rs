//! kreuzberg — route overlay demo over a boundary ring in south Berlin.
//!
//! Loads the boundary from a string coordinate table and annotations from a
//! bundled GeoJSON file, plans the route from a fixed rider to the nearest
//! boundary point, lists the overlays a map would draw, and builds a
//! snapshot stroke of the boundary through the threaded renderer.
//!
//! Set `RUST_LOG=debug` to see loader and planner logging.

mod scene;

use std::io::Cursor;

use anyhow::Result;

use ro_planner::{OverlayStyle, RouteOverlayPlanner};
use ro_snapshot::{
    RegionFrame, SnapshotCache, SnapshotOptions, SnapshotRenderer, SnapshotResult, StrokePath,
    StrokeStyle, ThreadedRenderer, route_stroke, segment_stroke, wait_for,
};
use ro_source::{load_boundary, load_places_reader};

use scene::{boundary_table, scene_config};

// ── Constants ─────────────────────────────────────────────────────────────────

const PLACES_GEOJSON: &str = include_str!("../data/kreuzberg.geojson");
const SNAPSHOT_SIZE:  (u32, u32) = (375, 300);
const CACHE_KEY:      &str = "kreuzberg-boundary";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = scene_config();

    println!("=== kreuzberg — route overlay demo ===");
    println!(
        "Camera: {} (radius {:.0} m, zoom-out limit {:.0} m)",
        config.initial_center, config.region_radius_m, config.max_center_distance_m,
    );
    println!();

    // ── Inputs ────────────────────────────────────────────────────────────
    let table = boundary_table();
    let boundary = load_boundary(&table)?;
    println!(
        "Boundary: {} of {} table rows valid, closed: {}",
        boundary.len(),
        table.len(),
        boundary.is_closed(),
    );

    let places = load_places_reader(Cursor::new(PLACES_GEOJSON))?;
    println!("Places:   {} annotations", places.len());
    for place in &places {
        println!(
            "  {:<18} {:<14} {}",
            place.title.as_deref().unwrap_or("(untitled)"),
            place.subtitle().unwrap_or(""),
            place.location,
        );
    }
    println!();

    // ── Plan ──────────────────────────────────────────────────────────────
    let planner = RouteOverlayPlanner::new(boundary);
    let plan = planner.plan(config.rider)?;

    println!("Rider:    {}", config.rider);
    println!("Nearest:  {} (boundary index {})", plan.nearest, plan.nearest_index);
    println!("Distance: {:.1} m", plan.distance_m());
    println!("Inside:   {}", plan.rider_inside);
    if !config.camera_allows(config.rider) {
        log::warn!("rider {} is outside the camera boundary", config.rider);
    }
    println!();

    println!("{:<10} {:<8} {:<12} {}", "Overlay", "Points", "Stroke", "Width");
    println!("{}", "-".repeat(40));
    for overlay in planner.overlays(&plan) {
        let style = OverlayStyle::for_overlay(&overlay);
        println!(
            "{:<10} {:<8} {:<12} {}",
            overlay.kind(),
            overlay.points().len(),
            format!("{:?}", style.stroke),
            style.line_width,
        );
    }
    println!();

    // ── Snapshot ──────────────────────────────────────────────────────────
    let points = planner.boundary().as_slice();
    let options = SnapshotOptions::around(
        planner.boundary().first(),
        config.clamp_center_distance(config.snapshot_radius_m),
        SNAPSHOT_SIZE,
    );

    let renderer = ThreadedRenderer::new(|o: &SnapshotOptions| -> SnapshotResult<RegionFrame> {
        Ok(RegionFrame::new(o))
    });
    let pending = renderer.start(options);

    let mut cache: SnapshotCache<(StrokePath, StrokePath)> = SnapshotCache::new();
    let snapshot = wait_for(&pending)?;
    let boundary_stroke = route_stroke(points, &snapshot, StrokeStyle::default())?;
    let rider_stroke = segment_stroke(&plan.segment, &snapshot, StrokeStyle::default());
    cache.insert(CACHE_KEY, (boundary_stroke, rider_stroke));

    if let Some((boundary_stroke, rider_stroke)) = cache.get(CACHE_KEY) {
        println!(
            "Snapshot {}x{}: boundary stroke {} segments, rider stroke {} segment",
            boundary_stroke.canvas.0,
            boundary_stroke.canvas.1,
            boundary_stroke.segment_count(),
            rider_stroke.segment_count(),
        );
    }

    Ok(())
}
