use std::collections::BTreeMap;

use crate::{
    foundation::error::{HeatspecError, HeatspecResult},
    schema::{ConfigValue, Schema},
};

/// An immutable, total mapping from every declared field path to a value.
///
/// Snapshots can only be created through constructors that check totality
/// against a [`Schema`]; there is no way to insert or remove a path afterwards.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct ConfigSnapshot {
    values: BTreeMap<String, ConfigValue>,
}

impl ConfigSnapshot {
    /// Every field at its schema default.
    pub fn defaults(schema: &Schema) -> Self {
        let values = schema
            .fields()
            .iter()
            .map(|f| (f.path.to_owned(), f.default_value()))
            .collect();
        Self { values }
    }

    /// Strict constructor: `values` must cover exactly the declared paths, each valid.
    pub fn from_values(
        schema: &Schema,
        values: BTreeMap<String, ConfigValue>,
    ) -> HeatspecResult<Self> {
        for (path, value) in &values {
            schema.validate_value(path, value)?;
        }
        let snapshot = Self { values };
        snapshot.check_total(schema)?;
        Ok(snapshot)
    }

    /// Schema defaults with `overrides` laid on top. Unknown paths and invalid
    /// values are errors; nothing is clamped here.
    pub fn merged<I, K>(schema: &Schema, overrides: I) -> HeatspecResult<Self>
    where
        I: IntoIterator<Item = (K, ConfigValue)>,
        K: Into<String>,
    {
        let mut values = Self::defaults(schema).values;
        for (path, value) in overrides {
            let path = path.into();
            schema.validate_value(&path, &value)?;
            values.insert(path, value);
        }
        Ok(Self { values })
    }

    /// Parse a flat `{ "path": value }` JSON object and merge it over the defaults.
    pub fn from_json_str(schema: &Schema, s: &str) -> HeatspecResult<Self> {
        let overrides: BTreeMap<String, ConfigValue> = serde_json::from_str(s)?;
        Self::merged(schema, overrides)
    }

    pub fn to_json_pretty(&self) -> HeatspecResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Only for callers that already guarantee totality (the collector).
    pub(crate) fn from_raw(values: BTreeMap<String, ConfigValue>) -> Self {
        Self { values }
    }

    pub fn check_total(&self, schema: &Schema) -> HeatspecResult<()> {
        for path in self.values.keys() {
            if !schema.contains(path) {
                return Err(HeatspecError::unknown_field(path.as_str()));
            }
        }
        let missing = schema
            .fields()
            .iter()
            .filter(|f| !self.values.contains_key(f.path))
            .map(|f| f.path)
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(HeatspecError::schema_violation(format!(
                "snapshot is missing {} field(s): {}",
                missing.len(),
                missing.join(", ")
            )));
        }
        Ok(())
    }

    pub fn get(&self, path: &str) -> HeatspecResult<&ConfigValue> {
        self.values.get(path).ok_or_else(|| {
            HeatspecError::schema_violation(format!("snapshot has no value for '{path}'"))
        })
    }

    pub fn bool(&self, path: &str) -> HeatspecResult<bool> {
        let v = self.get(path)?;
        v.as_bool()
            .ok_or_else(|| type_error(path, "boolean", v))
    }

    pub fn number(&self, path: &str) -> HeatspecResult<f64> {
        let v = self.get(path)?;
        v.as_number()
            .ok_or_else(|| type_error(path, "number", v))
    }

    pub fn text(&self, path: &str) -> HeatspecResult<&str> {
        let v = self.get(path)?;
        v.as_str().ok_or_else(|| type_error(path, "string", v))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn type_error(path: &str, expected: &str, found: &ConfigValue) -> HeatspecError {
    HeatspecError::schema_violation(format!(
        "field '{path}': expected {expected}, found {}",
        found.type_name()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_total() {
        let schema = Schema::standard();
        let snap = ConfigSnapshot::defaults(schema);
        snap.check_total(schema).unwrap();
        assert_eq!(snap.len(), schema.len());
    }

    #[test]
    fn merged_overrides_defaults() {
        let schema = Schema::standard();
        let snap = ConfigSnapshot::merged(
            schema,
            [
                ("xAxis.axisLine.show", ConfigValue::Bool(true)),
                ("series.itemStyle.borderWidth", ConfigValue::Number(5.0)),
            ],
        )
        .unwrap();
        assert!(snap.bool("xAxis.axisLine.show").unwrap());
        assert_eq!(snap.number("series.itemStyle.borderWidth").unwrap(), 5.0);
        assert_eq!(snap.text("title.left").unwrap(), "center");
    }

    #[test]
    fn merged_rejects_unknown_and_invalid() {
        let schema = Schema::standard();
        let err = ConfigSnapshot::merged(schema, [("nope", ConfigValue::Bool(true))]).unwrap_err();
        assert!(matches!(err, HeatspecError::UnknownField { .. }));

        let err = ConfigSnapshot::merged(
            schema,
            [("series.itemStyle.opacity", ConfigValue::Number(1.5))],
        )
        .unwrap_err();
        assert!(matches!(err, HeatspecError::SchemaViolation(_)));
    }

    #[test]
    fn from_values_requires_totality() {
        let schema = Schema::standard();
        let mut values = ConfigSnapshot::defaults(schema).values;
        values.remove("tooltip.show");
        let err = ConfigSnapshot::from_values(schema, values).unwrap_err();
        assert!(err.to_string().contains("tooltip.show"));
    }

    #[test]
    fn typed_getters_fail_fast() {
        let snap = ConfigSnapshot::defaults(Schema::standard());
        assert!(snap.bool("title.text").is_err());
        assert!(snap.number("missing.path").is_err());
    }

    #[test]
    fn json_file_merges_over_defaults() {
        let schema = Schema::standard();
        let snap = ConfigSnapshot::from_json_str(
            schema,
            r##"{ "title.text": "Scores", "dataZoom.show": true }"##,
        )
        .unwrap();
        assert_eq!(snap.text("title.text").unwrap(), "Scores");
        assert!(snap.bool("dataZoom.show").unwrap());
        snap.check_total(schema).unwrap();

        let again = ConfigSnapshot::from_json_str(schema, &snap.to_json_pretty().unwrap()).unwrap();
        assert_eq!(again, snap);
    }
}
