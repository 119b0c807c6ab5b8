//! The Kreuzberg scene: boundary table, rider, and camera limits.

use ro_core::{CoordinateRegion, GeoPoint, SceneConfig};
use ro_source::CoordinateTable;

/// Boundary ring around Kreuzberg/Neukölln, as decimal strings.  The last
/// row repeats the first to close the ring.
pub fn boundary_table() -> CoordinateTable {
    CoordinateTable::new(
        [
            "52.46523208572938",
            "52.46531705969792",
            "52.46559567511719",
            "52.46588450185006",
            "52.46643273634816",
            "52.46791236348105",
            "52.46937478427294",
            "52.47075546098522",
            "52.47282231025754",
            "52.47488579494794",
            "52.47773865231441",
            "52.48033077334113",
            "52.48288190514786",
            "52.48380765947311",
            "52.48263892714145",
            "52.48913560021965",
            "52.48497864493917",
            "52.47928790150927",
            "52.47515046294253",
            "52.47273081542615",
            "52.46894872647162",
            "52.46600338189253",
            "52.46523208572938",
        ],
        [
            "13.4293270111084",
            "13.4324149042368",
            "13.43451105058194",
            "13.43790270388127",
            "13.44076663255692",
            "13.44249397516251",
            "13.44330668449402",
            "13.44398126006127",
            "13.4444560110569",
            "13.44381093978882",
            "13.44307199120522",
            "13.43993447721005",
            "13.43519300222397",
            "13.4275346249342",
            "13.42189528048039",
            "13.39991140295752",
            "13.38915691827424",
            "13.39416743139737",
            "13.41293670237065",
            "13.41322638094426",
            "13.41557465493679",
            "13.42167869210244",
            "13.4293270111084",
        ],
    )
}

/// Camera starts near Treptower Park, may roam 50 × 60 km around central
/// Berlin, and zooms out to 1000 km.
pub fn scene_config() -> SceneConfig {
    SceneConfig::new(
        GeoPoint::new(52.499967, 13.4632702),
        CoordinateRegion::new(GeoPoint::new(52.4983, 13.4066), 50_000.0, 60_000.0),
        1_000_000.0,
        GeoPoint::new(52.493552, 13.4621654),
    )
}
