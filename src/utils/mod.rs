pub mod color;
pub mod exporter;
pub mod fonts;
pub mod importer;
pub mod profiler;
pub mod vector;
