mod namespace;
mod pod;

pub use namespace::NamespaceSummary;
pub use pod::PodSummary;
