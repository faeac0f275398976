//! Compile-time configuration shared by the web app and the CLI.

/// Quiescence interval for the city search input, in milliseconds.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// DOM id of the element the 3D chart engine binds to.
pub const CHART_CONTAINER_ID: &str = "__Bar3DChart__container";

/// City selected when the app starts.
pub const DEFAULT_CITY: &str = "Boston";

/// Fixed 11-stop diverging palette for the visual map (low to high).
pub const PALETTE: [&str; 11] = [
    "#313695", "#4575b4", "#74add1", "#abd9e9", "#e0f3f8", "#ffffbf", "#fee090", "#fdae61",
    "#f46d43", "#d73027", "#a50026",
];

/// Width/depth of the 3D grid box per category on the matching axis.
pub const GRID_UNITS_PER_CATEGORY: usize = 8;

/// Height of the 3D grid box.
pub const GRID_BOX_HEIGHT: u32 = 60;
