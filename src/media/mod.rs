pub mod encoding;
pub mod persist;
pub mod viewer;

pub use persist::ArtifactWriter;
pub use viewer::{SystemViewer, Viewer};
