use std::collections::BTreeMap;

use crate::{
    collect::{ControlAccessor, ControlState, ControlSurface},
    schema::ConfigValue,
};

#[derive(Clone, Debug, PartialEq)]
struct Control {
    value: ConfigValue,
    enabled: bool,
}

/// In-memory control surface keyed by field path.
///
/// Stands in for a widget tree: controls can be bound, disabled, or left
/// unbound to simulate a partially initialized UI.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ControlBoard {
    controls: BTreeMap<String, Control>,
}

impl ControlBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, path: impl Into<String>, value: impl Into<ConfigValue>) -> &mut Self {
        self.controls.insert(
            path.into(),
            Control {
                value: value.into(),
                enabled: true,
            },
        );
        self
    }

    pub fn unbind(&mut self, path: &str) -> &mut Self {
        self.controls.remove(path);
        self
    }

    pub fn set_enabled(&mut self, path: &str, enabled: bool) -> &mut Self {
        if let Some(c) = self.controls.get_mut(path) {
            c.enabled = enabled;
        }
        self
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

impl ControlAccessor for ControlBoard {
    fn get(&self, path: &str) -> ControlState {
        match self.controls.get(path) {
            None => ControlState::Absent,
            Some(c) if !c.enabled => ControlState::Disabled,
            Some(c) => ControlState::Value(c.value.clone()),
        }
    }
}

impl ControlSurface for ControlBoard {
    fn set(&mut self, path: &str, value: ConfigValue) {
        self.bind(path, value);
    }
}
