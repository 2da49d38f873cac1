pub mod buckets;
pub mod category;
pub mod record;

pub use buckets::CategoryBuckets;
pub use category::Category;
pub use record::{LabeledSequence, TaggedSample, TitleRecord};
