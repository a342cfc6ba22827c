#![forbid(unsafe_code)]

pub mod collect;
pub mod dataset;
pub mod export;
pub mod foundation;
pub mod preset;
pub mod schema;
pub mod session;
pub mod snapshot;
pub mod spec;

pub use collect::{
    CollectWarning, Collected, Collector, ControlAccessor, ControlBoard, ControlState,
    ControlSurface, ValueSource, WarningKind,
};
pub use dataset::Dataset;
pub use export::{ExportOpts, extract_option, html_document, option_script};
pub use foundation::error::{HeatspecError, HeatspecResult};
pub use preset::{Preset, apply_preset, reset};
pub use schema::{ConfigValue, FieldDef, FieldKind, Schema, Section};
pub use session::{PreviewSession, SessionStats};
pub use snapshot::ConfigSnapshot;
pub use spec::{ChartSpecification, SpecFingerprint, build_spec};
