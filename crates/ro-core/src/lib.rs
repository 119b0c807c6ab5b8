//! `ro-core` — foundational types for the `route_overlay` workspace.
//!
//! This crate is a dependency of every other `ro-*` crate.  It has no `ro-*`
//! dependencies and a single required external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `GeoPoint`, haversine distance, `CoordinateRegion`    |
//! | [`path`]        | `BoundaryPath`, `RouteSegment`                        |
//! | [`config`]      | `SceneConfig`                                         |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod path;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SceneConfig;
pub use error::{CoreError, CoreResult};
pub use geo::{CoordinateRegion, GeoPoint, ReferencePoint};
pub use path::{BoundaryPath, RouteSegment};
