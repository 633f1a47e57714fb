// Domain layer - dashboard vocabulary and chart model
pub mod chart;
pub mod compressor;
pub mod telemetry;
