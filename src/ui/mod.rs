//! UI layer: panel layout and the distribution chart.

pub mod chart;
pub mod panels;
