//! Chart Figures
//!
//! Serializable figure descriptions handed to the browser's charting
//! library, plus the colour palettes the dashboard uses.

pub mod figure;
pub mod palette;

pub use figure::{
    AxisData, AxisLayout, BarMode, BarTrace, Figure, Layout, Legend, Marker, PieTrace,
    ScatterTrace, Title, Trace,
};
