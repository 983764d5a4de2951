//! Checkbox selections
//!
//! Allergies and health conditions are multi-select checklists. A selection
//! keeps the order values were checked in and never holds a value twice.

use serde::{Deserialize, Serialize};

/// The "None of the above" health condition
pub const NONE_CONDITION: &str = "None";

/// Ordered, duplicate-free set of checked values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Selection {
    values: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value. Returns false if it was already checked.
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.contains(&value) {
            return false;
        }
        self.values.push(value);
        true
    }

    /// Remove a value. Returns false if it was not checked.
    pub fn remove(&mut self, value: &str) -> bool {
        let before = self.values.len();
        self.values.retain(|v| v != value);
        self.values.len() != before
    }

    /// Apply a checkbox change
    pub fn toggle(&mut self, value: &str, checked: bool) {
        if checked {
            self.insert(value);
        } else {
            self.remove(value);
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.values
    }

    fn clear(&mut self) {
        self.values.clear();
    }
}

impl From<Vec<String>> for Selection {
    fn from(values: Vec<String>) -> Self {
        let mut selection = Selection::new();
        for value in values {
            selection.insert(value);
        }
        selection
    }
}

impl From<Selection> for Vec<String> {
    fn from(selection: Selection) -> Self {
        selection.values
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Selection::new();
        for value in iter {
            selection.insert(value);
        }
        selection
    }
}

/// Health condition checklist
///
/// "None" excludes every other condition: checking it clears the rest, and
/// checking anything else unchecks it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct HealthConditions {
    selected: Selection,
}

impl HealthConditions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a checkbox change, keeping "None" exclusive
    pub fn toggle(&mut self, condition: &str, checked: bool) {
        if !checked {
            self.selected.remove(condition);
            return;
        }

        if condition == NONE_CONDITION {
            self.selected.clear();
            self.selected.insert(NONE_CONDITION);
        } else {
            self.selected.remove(NONE_CONDITION);
            self.selected.insert(condition);
        }
    }

    pub fn contains(&self, condition: &str) -> bool {
        self.selected.contains(condition)
    }

    /// True when the user declared "None"
    pub fn is_none_declared(&self) -> bool {
        self.selected.contains(NONE_CONDITION)
    }

    /// Conditions other than the "None" sentinel
    pub fn reported(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().filter(|c| *c != NONE_CONDITION)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.selected.iter()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        self.selected.as_slice()
    }
}

impl TryFrom<Vec<String>> for HealthConditions {
    type Error = String;

    fn try_from(values: Vec<String>) -> Result<Self, Self::Error> {
        let selected = Selection::from(values);
        if selected.contains(NONE_CONDITION) && selected.len() > 1 {
            return Err(format!(
                "'{}' cannot be combined with other health conditions",
                NONE_CONDITION
            ));
        }
        Ok(Self { selected })
    }
}

impl From<HealthConditions> for Vec<String> {
    fn from(conditions: HealthConditions) -> Self {
        conditions.selected.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_ignores_duplicates() {
        let mut selection = Selection::new();
        assert!(selection.insert("Food"));
        assert!(!selection.insert("Food"));
        assert!(selection.insert("Dust"));
        assert_eq!(selection.as_slice(), &["Food".to_string(), "Dust".to_string()]);
    }

    #[test]
    fn test_selection_toggle() {
        let mut selection = Selection::new();
        selection.toggle("Pollen", true);
        selection.toggle("Pollen", true);
        assert_eq!(selection.len(), 1);
        selection.toggle("Pollen", false);
        assert!(selection.is_empty());
        // Unchecking something never checked is harmless
        selection.toggle("Dust", false);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_selection_deserialize_dedupes() {
        let selection: Selection = serde_json::from_str(r#"["Milk","Eggs","Milk"]"#).unwrap();
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_none_clears_other_conditions() {
        let mut conditions = HealthConditions::new();
        conditions.toggle("Diabetes", true);
        conditions.toggle("Asthma", true);
        conditions.toggle(NONE_CONDITION, true);
        assert_eq!(conditions.as_slice(), &["None".to_string()]);

        // Checking "None" again is a no-op
        conditions.toggle(NONE_CONDITION, true);
        assert_eq!(conditions.as_slice(), &["None".to_string()]);
    }

    #[test]
    fn test_condition_clears_none() {
        let mut conditions = HealthConditions::new();
        conditions.toggle(NONE_CONDITION, true);
        conditions.toggle("Heart Disease", true);
        assert!(!conditions.is_none_declared());
        assert_eq!(conditions.as_slice(), &["Heart Disease".to_string()]);
    }

    #[test]
    fn test_unchecking_condition() {
        let mut conditions = HealthConditions::new();
        conditions.toggle("Diabetes", true);
        conditions.toggle("Arthritis", true);
        conditions.toggle("Diabetes", false);
        assert_eq!(conditions.reported().collect::<Vec<_>>(), vec!["Arthritis"]);
    }

    #[test]
    fn test_conditions_reject_none_with_others_on_deserialize() {
        let result: Result<HealthConditions, _> = serde_json::from_str(r#"["None","Diabetes"]"#);
        assert!(result.is_err());

        let ok: HealthConditions = serde_json::from_str(r#"["None"]"#).unwrap();
        assert!(ok.is_none_declared());
        assert_eq!(ok.reported().count(), 0);
    }
}
