//! `ro-planner` — nearest-point lookup, containment, and overlay composition.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`planner`] | `nearest_point`, `point_in_polygon`, `RouteOverlayPlanner`      |
//! | [`overlay`] | `Overlay`, `OverlayStyle`, `Rgba`                               |
//! | [`error`]   | `PlanError`, `PlanResult<T>`                                    |
//!
//! All operations are pure functions over immutable inputs; nothing here
//! blocks, allocates shared state, or spawns threads.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod overlay;
pub mod planner;


pub use error::{PlanError, PlanResult};
pub use overlay::{Overlay, OverlayStyle, Rgba};
pub use planner::{
    DistanceMetric, RouteOverlayPlanner, RoutePlan, build_route_segment, nearest_index,
    nearest_point, point_in_polygon,
};
