pub mod assumptions;
pub mod estimate;
pub mod financing;
pub mod location;
pub mod pipeline;
pub mod rent;
pub mod risk;
pub mod score;
pub mod synthetic;

pub use estimate::Estimate;
pub use pipeline::{ExtractionError, MetricsPipeline};
pub use synthetic::{synthesize, SyntheticListing};
