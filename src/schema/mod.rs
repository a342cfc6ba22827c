//! The configuration schema: every field the pipeline knows about, its kind,
//! its valid range or domain, and its single default.
//!
//! The schema is the only place defaults live. The collector substitutes them for
//! missing controls; the specification builder never sees a default it did not
//! receive through a snapshot.

use std::{collections::BTreeMap, fmt, sync::OnceLock};

use crate::{
    foundation::{
        color::parse_css_color,
        error::{HeatspecError, HeatspecResult},
    },
    snapshot::ConfigSnapshot,
};

pub(crate) mod registry;
pub mod value;

pub use value::ConfigValue;

/// UI tab a field belongs to.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Basic,
    Style,
    Interaction,
    Animation,
    Advanced,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Self::Basic,
        Self::Style,
        Self::Interaction,
        Self::Animation,
        Self::Advanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Style => "style",
            Self::Interaction => "interaction",
            Self::Animation => "animation",
            Self::Advanced => "advanced",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldKind {
    Bool,
    Number { min: f64, max: f64, integer: bool },
    /// A number emitted as a CSS percentage string (`"15%"`).
    Percent { min: f64, max: f64 },
    Text,
    Color,
    Enum(&'static [&'static str]),
}

impl FieldKind {
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Bool => "boolean",
            Self::Number { .. } | Self::Percent { .. } => "number",
            Self::Text | Self::Color | Self::Enum(_) => "string",
        }
    }

    fn bounds(self) -> Option<(f64, f64, bool)> {
        match self {
            Self::Number { min, max, integer } => Some((min, max, integer)),
            Self::Percent { min, max } => Some((min, max, false)),
            _ => None,
        }
    }
}

/// Const-friendly default, materialized into a [`ConfigValue`] on demand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldDefault {
    Bool(bool),
    Number(f64),
    Text(&'static str),
}

impl FieldDefault {
    pub fn to_value(self) -> ConfigValue {
        match self {
            Self::Bool(b) => ConfigValue::Bool(b),
            Self::Number(n) => ConfigValue::Number(n),
            Self::Text(s) => ConfigValue::Text(s.to_owned()),
        }
    }
}

/// Why a value does not fit its field.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldIssue {
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    NotFinite,
    OutOfRange {
        value: f64,
        min: f64,
        max: f64,
    },
    NotInteger {
        value: f64,
    },
    NotInDomain {
        value: String,
    },
    InvalidColor {
        value: String,
        reason: String,
    },
}

impl FieldIssue {
    /// Range problems can be repaired by clamping; everything else needs the default.
    pub fn is_clampable(&self) -> bool {
        matches!(self, Self::OutOfRange { .. } | Self::NotInteger { .. })
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            Self::NotFinite => write!(f, "number must be finite"),
            Self::OutOfRange { value, min, max } => {
                write!(f, "{value} outside [{min}, {max}]")
            }
            Self::NotInteger { value } => write!(f, "{value} is not an integer"),
            Self::NotInDomain { value } => write!(f, "\"{value}\" is not an allowed choice"),
            Self::InvalidColor { value, reason } => {
                write!(f, "invalid color \"{value}\": {reason}")
            }
        }
    }
}

/// Result of fitting a live value into its field.
#[derive(Clone, Debug, PartialEq)]
pub struct Coerced {
    pub value: ConfigValue,
    pub issue: Option<FieldIssue>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldDef {
    pub path: &'static str,
    pub section: Section,
    pub label: &'static str,
    pub kind: FieldKind,
    pub default: FieldDefault,
}

impl FieldDef {
    pub const fn boolean(
        path: &'static str,
        section: Section,
        label: &'static str,
        default: bool,
    ) -> Self {
        Self {
            path,
            section,
            label,
            kind: FieldKind::Bool,
            default: FieldDefault::Bool(default),
        }
    }

    pub const fn number(
        path: &'static str,
        section: Section,
        label: &'static str,
        min: f64,
        max: f64,
        default: f64,
    ) -> Self {
        Self {
            path,
            section,
            label,
            kind: FieldKind::Number {
                min,
                max,
                integer: false,
            },
            default: FieldDefault::Number(default),
        }
    }

    pub const fn integer(
        path: &'static str,
        section: Section,
        label: &'static str,
        min: f64,
        max: f64,
        default: f64,
    ) -> Self {
        Self {
            path,
            section,
            label,
            kind: FieldKind::Number {
                min,
                max,
                integer: true,
            },
            default: FieldDefault::Number(default),
        }
    }

    pub const fn percent(
        path: &'static str,
        section: Section,
        label: &'static str,
        min: f64,
        max: f64,
        default: f64,
    ) -> Self {
        Self {
            path,
            section,
            label,
            kind: FieldKind::Percent { min, max },
            default: FieldDefault::Number(default),
        }
    }

    pub const fn text(
        path: &'static str,
        section: Section,
        label: &'static str,
        default: &'static str,
    ) -> Self {
        Self {
            path,
            section,
            label,
            kind: FieldKind::Text,
            default: FieldDefault::Text(default),
        }
    }

    pub const fn color(
        path: &'static str,
        section: Section,
        label: &'static str,
        default: &'static str,
    ) -> Self {
        Self {
            path,
            section,
            label,
            kind: FieldKind::Color,
            default: FieldDefault::Text(default),
        }
    }

    pub const fn choice(
        path: &'static str,
        section: Section,
        label: &'static str,
        domain: &'static [&'static str],
        default: &'static str,
    ) -> Self {
        Self {
            path,
            section,
            label,
            kind: FieldKind::Enum(domain),
            default: FieldDefault::Text(default),
        }
    }

    pub fn default_value(&self) -> ConfigValue {
        self.default.to_value()
    }

    pub fn check(&self, value: &ConfigValue) -> Result<(), FieldIssue> {
        match (self.kind, value) {
            (FieldKind::Bool, ConfigValue::Bool(_)) => Ok(()),
            (FieldKind::Number { .. } | FieldKind::Percent { .. }, ConfigValue::Number(n)) => {
                let Some((min, max, integer)) = self.kind.bounds() else {
                    return Ok(());
                };
                if !n.is_finite() {
                    return Err(FieldIssue::NotFinite);
                }
                if *n < min || *n > max {
                    return Err(FieldIssue::OutOfRange {
                        value: *n,
                        min,
                        max,
                    });
                }
                if integer && n.fract() != 0.0 {
                    return Err(FieldIssue::NotInteger { value: *n });
                }
                Ok(())
            }
            (FieldKind::Text, ConfigValue::Text(_)) => Ok(()),
            (FieldKind::Color, ConfigValue::Text(s)) => parse_css_color(s)
                .map(|_| ())
                .map_err(|reason| FieldIssue::InvalidColor {
                    value: s.clone(),
                    reason,
                }),
            (FieldKind::Enum(domain), ConfigValue::Text(s)) => {
                if domain.contains(&s.as_str()) {
                    Ok(())
                } else {
                    Err(FieldIssue::NotInDomain { value: s.clone() })
                }
            }
            (kind, v) => Err(FieldIssue::TypeMismatch {
                expected: kind.type_name(),
                found: v.type_name(),
            }),
        }
    }

    /// Fit a live value into this field: clamp range problems to the nearest
    /// valid value, substitute the default for anything else.
    pub fn coerce(&self, value: ConfigValue) -> Coerced {
        let issue = match self.check(&value) {
            Ok(()) => return Coerced { value, issue: None },
            Err(issue) => issue,
        };

        if issue.is_clampable()
            && let (Some((min, max, integer)), Some(n)) = (self.kind.bounds(), value.as_number())
        {
            let mut fixed = n.clamp(min, max);
            if integer {
                fixed = fixed.round().clamp(min, max);
            }
            return Coerced {
                value: ConfigValue::Number(fixed),
                issue: Some(issue),
            };
        }

        Coerced {
            value: self.default_value(),
            issue: Some(issue),
        }
    }
}

/// The immutable field registry plus a path index.
#[derive(Debug)]
pub struct Schema {
    fields: &'static [FieldDef],
    index: BTreeMap<&'static str, usize>,
}

impl Schema {
    /// Build a schema from a field table, rejecting duplicate paths and
    /// defaults that do not fit their own field.
    pub fn new(fields: &'static [FieldDef]) -> HeatspecResult<Self> {
        let mut index = BTreeMap::new();
        for (i, field) in fields.iter().enumerate() {
            if field.path.trim().is_empty() || field.path.split('.').any(str::is_empty) {
                return Err(HeatspecError::schema_violation(format!(
                    "malformed field path '{}'",
                    field.path
                )));
            }
            if index.insert(field.path, i).is_some() {
                return Err(HeatspecError::schema_violation(format!(
                    "field path '{}' declared twice",
                    field.path
                )));
            }
            if let Err(issue) = field.check(&field.default_value()) {
                return Err(HeatspecError::schema_violation(format!(
                    "default for '{}' is invalid: {issue}",
                    field.path
                )));
            }
        }
        Ok(Self { fields, index })
    }

    /// The process-wide heatmap schema. Built once and never mutated.
    pub fn standard() -> &'static Schema {
        static STANDARD: OnceLock<Schema> = OnceLock::new();
        STANDARD.get_or_init(|| {
            let index = registry::FIELDS
                .iter()
                .enumerate()
                .map(|(i, f)| (f.path, i))
                .collect();
            Schema {
                fields: registry::FIELDS,
                index,
            }
        })
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &'static [FieldDef] {
        self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.index.contains_key(path)
    }

    pub fn field(&self, path: &str) -> HeatspecResult<&'static FieldDef> {
        let fields = self.fields;
        self.index
            .get(path)
            .map(|&i| &fields[i])
            .ok_or_else(|| HeatspecError::unknown_field(path))
    }

    pub fn default_for(&self, path: &str) -> HeatspecResult<ConfigValue> {
        Ok(self.field(path)?.default_value())
    }

    pub fn section(&self, section: Section) -> impl Iterator<Item = &'static FieldDef> + '_ {
        self.fields.iter().filter(move |f| f.section == section)
    }

    pub fn validate_value(&self, path: &str, value: &ConfigValue) -> HeatspecResult<()> {
        self.field(path)?.check(value).map_err(|issue| {
            HeatspecError::schema_violation(format!("field '{path}': {issue}"))
        })
    }

    /// Clamp-or-substitute `value` for the field at `path`.
    pub fn coerce_value(&self, path: &str, value: ConfigValue) -> HeatspecResult<Coerced> {
        Ok(self.field(path)?.coerce(value))
    }

    pub fn default_snapshot(&self) -> ConfigSnapshot {
        ConfigSnapshot::defaults(self)
    }
}
