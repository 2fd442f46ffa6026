//! Colour sequences for chart series

/// Gender colours for the age histogram
pub const GENDER: &[&str] = &["#636EFA", "#EF553B"];

/// Qualitative "Set2" sequence used for the insurance comparison
pub const SET2: &[&str] = &[
    "rgb(102,194,165)",
    "rgb(252,141,98)",
    "rgb(141,160,203)",
    "rgb(231,138,195)",
    "rgb(166,216,84)",
    "rgb(255,217,47)",
    "rgb(229,196,148)",
    "rgb(179,179,179)",
];

/// Single-series default
pub const PRIMARY: &str = "#636EFA";

/// Colour for the `index`-th series, cycling through `palette`
pub fn color_at(palette: &[&'static str], index: usize) -> &'static str {
    if palette.is_empty() {
        return PRIMARY;
    }
    palette[index % palette.len()]
}
