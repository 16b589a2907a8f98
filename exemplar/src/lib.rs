pub mod manifest;
pub mod render;
pub mod segment;
pub mod segmenter;
pub mod slug;

pub use manifest::{Manifest, ManifestEntry, ManifestError, ManifestProblem};
pub use segment::{Segment, SegmentKind};
pub use segmenter::{Segmenter, Strategy};
pub use slug::slugify;
