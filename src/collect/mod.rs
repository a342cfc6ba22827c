//! Turns whatever controls the UI currently exposes into a total snapshot.
//!
//! The collector walks the schema, not the UI. Each declared path is read from
//! the accessor; absent, disabled, or unreadable controls fall back to the
//! schema default, and out-of-range values are clamped with a warning. A run
//! never fails and never yields a partial snapshot.

use std::collections::BTreeMap;

use crate::{
    schema::{ConfigValue, FieldIssue, Schema},
    snapshot::ConfigSnapshot,
};

mod board;

pub use board::ControlBoard;

/// What a UI control reports for a field path.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlState {
    Value(ConfigValue),
    Absent,
    Disabled,
    Unreadable(String),
}

/// Read side of the UI: "given a control name, return its value or absence".
pub trait ControlAccessor {
    fn get(&self, path: &str) -> ControlState;
}

/// Write side, used when a preset is pushed back into the controls.
/// A written control must read back as the written value.
pub trait ControlSurface: ControlAccessor {
    fn set(&mut self, path: &str, value: ConfigValue);
}

/// Where a collected value came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueSource {
    Control,
    Default,
}

#[derive(Clone, Debug, PartialEq)]
pub enum WarningKind {
    /// The control value was outside its range; the nearest valid value was used.
    Clamped { from: f64 },
    /// The control value could not be repaired; the default was used.
    Rejected(FieldIssue),
    /// The control could not be read; the default was used.
    Unreadable(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct CollectWarning {
    pub path: &'static str,
    pub kind: WarningKind,
    pub substituted: ConfigValue,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Collected {
    pub snapshot: ConfigSnapshot,
    pub warnings: Vec<CollectWarning>,
    pub sources: BTreeMap<&'static str, ValueSource>,
}

impl Collected {
    pub fn from_controls(&self) -> usize {
        self.sources
            .values()
            .filter(|s| **s == ValueSource::Control)
            .count()
    }
}

pub struct Collector<'s> {
    schema: &'s Schema,
}

impl<'s> Collector<'s> {
    pub fn new(schema: &'s Schema) -> Self {
        Self { schema }
    }

    #[tracing::instrument(skip_all, fields(fields = self.schema.len()))]
    pub fn collect(&self, controls: &dyn ControlAccessor) -> Collected {
        let mut values = BTreeMap::new();
        let mut sources = BTreeMap::new();
        let mut warnings = Vec::new();

        for field in self.schema.fields() {
            let (value, source) = match controls.get(field.path) {
                ControlState::Value(raw) => {
                    let coerced = field.coerce(raw);
                    match coerced.issue {
                        None => (coerced.value, ValueSource::Control),
                        Some(issue) => {
                            let (kind, source) = match raw_number(&issue) {
                                Some(from) if issue.is_clampable() => {
                                    (WarningKind::Clamped { from }, ValueSource::Control)
                                }
                                _ => (WarningKind::Rejected(issue), ValueSource::Default),
                            };
                            warnings.push(warn(field.path, kind, &coerced.value));
                            (coerced.value, source)
                        }
                    }
                }
                ControlState::Absent | ControlState::Disabled => {
                    (field.default_value(), ValueSource::Default)
                }
                ControlState::Unreadable(reason) => {
                    let value = field.default_value();
                    warnings.push(warn(field.path, WarningKind::Unreadable(reason), &value));
                    (value, ValueSource::Default)
                }
            };
            values.insert(field.path.to_owned(), value);
            sources.insert(field.path, source);
        }

        let snapshot = ConfigSnapshot::from_raw(values);
        debug_assert!(snapshot.check_total(self.schema).is_ok());

        let collected = Collected {
            snapshot,
            warnings,
            sources,
        };
        tracing::debug!(
            from_controls = collected.from_controls(),
            warnings = collected.warnings.len(),
            "collected snapshot"
        );
        collected
    }
}

fn raw_number(issue: &FieldIssue) -> Option<f64> {
    match issue {
        FieldIssue::OutOfRange { value, .. } | FieldIssue::NotInteger { value } => Some(*value),
        _ => None,
    }
}

fn warn(path: &'static str, kind: WarningKind, substituted: &ConfigValue) -> CollectWarning {
    match &kind {
        WarningKind::Clamped { from } => {
            tracing::warn!(path, from, to = %substituted, "control value clamped");
        }
        WarningKind::Rejected(issue) => {
            tracing::warn!(path, %issue, default = %substituted, "control value rejected");
        }
        WarningKind::Unreadable(reason) => {
            tracing::warn!(path, reason = reason.as_str(), default = %substituted, "control unreadable");
        }
    }
    CollectWarning {
        path,
        kind,
        substituted: substituted.clone(),
    }
}
