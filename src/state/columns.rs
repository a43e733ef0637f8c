use std::collections::BTreeMap;

use serde::Deserialize;

/// Which control the filter panel renders for an enumerated column. Both
/// styles store a set of selected values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlStyle {
    #[default]
    Checkboxes,
    Select,
}

/// Static set of columns filtered by discrete values instead of free text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumeratedColumns {
    columns: BTreeMap<String, ControlStyle>,
}

impl Default for EnumeratedColumns {
    fn default() -> Self {
        Self::new([
            ("Criticality", ControlStyle::Checkboxes),
            ("CONTACTADO", ControlStyle::Select),
            ("STATI", ControlStyle::Select),
        ])
    }
}

impl EnumeratedColumns {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = (S, ControlStyle)>,
        S: Into<String>,
    {
        Self {
            columns: columns
                .into_iter()
                .map(|(name, style)| (name.into(), style))
                .collect(),
        }
    }

    pub fn none() -> Self {
        Self {
            columns: BTreeMap::new(),
        }
    }

    pub fn is_enumerated(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    pub fn control_style(&self, column: &str) -> Option<ControlStyle> {
        self.columns.get(column).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ControlStyle)> {
        self.columns
            .iter()
            .map(|(name, style)| (name.as_str(), *style))
    }
}
