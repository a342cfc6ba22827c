pub mod builder;
pub mod fingerprint;
pub mod model;
pub mod palette;

pub use builder::build_spec;
pub use fingerprint::SpecFingerprint;
pub use model::ChartSpecification;
