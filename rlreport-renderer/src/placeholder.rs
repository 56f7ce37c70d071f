//! The closed set of placeholders a report template may reference.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Every placeholder the resolver knows how to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Placeholder {
    /// Aggregate reward statistics. Not implemented yet; renders empty.
    RewardTotalTable,
    /// Per-agent reward statistics table.
    RewardAgentsTable,
    /// User-defined metrics. Not implemented yet; renders empty.
    CustomMetricsTable,
}

impl Placeholder {
    /// All placeholders in a stable order.
    pub const ALL: [Placeholder; 3] = [
        Placeholder::RewardTotalTable,
        Placeholder::RewardAgentsTable,
        Placeholder::CustomMetricsTable,
    ];

    /// Marker name as written in templates (`$name` / `${name}`).
    pub fn name(self) -> &'static str {
        match self {
            Placeholder::RewardTotalTable => "reward_total_table",
            Placeholder::RewardAgentsTable => "reward_agents_table",
            Placeholder::CustomMetricsTable => "custom_metrics_table",
        }
    }

    /// Whether this placeholder has rendering logic.
    pub fn is_implemented(self) -> bool {
        matches!(self, Placeholder::RewardAgentsTable)
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Placeholder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Placeholder::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Placeholder::ALL.iter().map(|p| p.name()).collect();
                format!("unknown placeholder '{s}'; expected one of: {}", known.join(", "))
            })
    }
}

/// Resolved replacement text for every [`Placeholder`].
///
/// Built fresh for each document; every variant always has an entry, which
/// may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderMap {
    entries: BTreeMap<Placeholder, String>,
}

impl PlaceholderMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, placeholder: Placeholder, text: impl Into<String>) {
        self.entries.insert(placeholder, text.into());
    }

    pub fn get(&self, placeholder: Placeholder) -> Option<&str> {
        self.entries.get(&placeholder).map(String::as_str)
    }

    /// Look up by marker name; `None` for names outside the closed set.
    pub fn get_by_name(&self, name: &str) -> Option<&str> {
        name.parse::<Placeholder>().ok().and_then(|p| self.get(p))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Placeholder, &str)> {
        self.entries.iter().map(|(p, text)| (*p, text.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
