//! Rules Engine view state.

#[cfg(test)]
#[path = "rules_test.rs"]
mod rules_test;

use crate::net::types::Rule;

#[derive(Clone, Debug, PartialEq)]
pub struct RulesState {
    pub items: Vec<Rule>,
    pub loading: bool,
    /// Restrict the grid to one rule type.
    pub type_filter: Option<String>,
}

impl Default for RulesState {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, type_filter: None }
    }
}

impl RulesState {
    pub fn apply_list(&mut self, rules: Vec<Rule>) {
        self.items = rules;
        self.loading = false;
        if let Some(filter) = &self.type_filter {
            if !self.items.iter().any(|r| &r.rule_type == filter) {
                self.type_filter = None;
            }
        }
    }

    /// Distinct rule types in first-seen order.
    pub fn rule_types(&self) -> Vec<String> {
        let mut types: Vec<String> = Vec::new();
        for rule in &self.items {
            if !rule.rule_type.is_empty() && !types.contains(&rule.rule_type) {
                types.push(rule.rule_type.clone());
            }
        }
        types
    }

    pub fn visible(&self) -> Vec<Rule> {
        self.items
            .iter()
            .filter(|r| self.type_filter.as_ref().is_none_or(|t| &r.rule_type == t))
            .cloned()
            .collect()
    }
}

/// Pretty-printed rule parameters for the parameters panel.
pub fn parameters_json(rule: &Rule) -> String {
    if rule.parameters.is_null() {
        return "{}".to_owned();
    }
    serde_json::to_string_pretty(&rule.parameters).unwrap_or_else(|_| rule.parameters.to_string())
}
