pub type HeatspecResult<T> = Result<T, HeatspecError>;

#[derive(thiserror::Error, Debug)]
pub enum HeatspecError {
    /// A path that the schema does not declare. Always a programmer error.
    #[error("unknown field: '{path}'")]
    UnknownField { path: String },

    #[error("schema violation: {0}")]
    SchemaViolation(String),

    #[error("dataset shape error: {0}")]
    DatasetShape(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HeatspecError {
    pub fn unknown_field(path: impl Into<String>) -> Self {
        Self::UnknownField { path: path.into() }
    }

    pub fn schema_violation(msg: impl Into<String>) -> Self {
        Self::SchemaViolation(msg.into())
    }

    pub fn dataset_shape(msg: impl Into<String>) -> Self {
        Self::DatasetShape(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for HeatspecError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            HeatspecError::unknown_field("x.y")
                .to_string()
                .contains("unknown field: 'x.y'")
        );
        assert!(
            HeatspecError::schema_violation("x")
                .to_string()
                .contains("schema violation:")
        );
        assert!(
            HeatspecError::dataset_shape("x")
                .to_string()
                .contains("dataset shape error:")
        );
        assert!(
            HeatspecError::serde("x")
                .to_string()
                .contains("serialization error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = HeatspecError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn json_errors_become_serde() {
        let err: HeatspecError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, HeatspecError::Serde(_)));
    }
}
