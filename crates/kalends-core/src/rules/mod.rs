//! Region rule data.
//!
//! A region hands the resolver an ordered [`RuleSet`] per year. Child
//! regions are composed by calling the parent's rule function and then
//! adding, removing or replacing rules.

mod date_rule;
mod rule;

pub use date_rule::DateRule;
pub use rule::{Collision, HolidayRule, Substitution, TriggerDays, YearWindow};

use chrono_tz::Tz;
use std::fmt;

use crate::calendars::WeekendType;
use crate::error::HolidayResult;

/// Ordered rules with unique keys.
///
/// # Example
///
/// ```rust
/// use kalends_core::rules::{HolidayRule, RuleSet};
///
/// let mut rules = RuleSet::new();
/// assert!(rules.add(HolidayRule::fixed("newYearsDay", 1, 1)));
/// assert!(!rules.add(HolidayRule::fixed("newYearsDay", 1, 2)));
/// assert_eq!(rules.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<HolidayRule>,
}

impl RuleSet {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `rule` unless its key is already present.
    ///
    /// Returns true if the rule was added.
    pub fn add(&mut self, rule: HolidayRule) -> bool {
        if self.contains(rule.key()) {
            return false;
        }
        self.rules.push(rule);
        true
    }

    /// Builder form of [`RuleSet::add`].
    #[must_use]
    pub fn with(mut self, rule: HolidayRule) -> Self {
        self.add(rule);
        self
    }

    /// Removes the rule for `key`.
    pub fn remove(&mut self, key: &str) -> Option<HolidayRule> {
        let index = self.position(key)?;
        Some(self.rules.remove(index))
    }

    /// Replaces the rule with the same key in place, or appends it.
    ///
    /// Returns the replaced rule.
    pub fn replace(&mut self, rule: HolidayRule) -> Option<HolidayRule> {
        match self.position(rule.key()) {
            Some(index) => Some(std::mem::replace(&mut self.rules[index], rule)),
            None => {
                self.rules.push(rule);
                None
            }
        }
    }

    /// Adds every rule of `rules` in order, skipping present keys.
    pub fn extend(&mut self, rules: impl IntoIterator<Item = HolidayRule>) {
        for rule in rules {
            self.add(rule);
        }
    }

    /// The rule for `key`.
    pub fn get(&self, key: &str) -> Option<&HolidayRule> {
        self.rules.iter().find(|rule| rule.key() == key)
    }

    /// Returns true if a rule for `key` exists.
    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(HolidayRule::key)
    }

    /// Rules in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, HolidayRule> {
        self.rules.iter()
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if there are no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.rules.iter().position(|rule| rule.key() == key)
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a HolidayRule;
    type IntoIter = std::slice::Iter<'a, HolidayRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl FromIterator<HolidayRule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = HolidayRule>>(iter: I) -> Self {
        let mut rules = RuleSet::new();
        rules.extend(iter);
        rules
    }
}

/// A region's holiday rules.
///
/// Implementations must be deterministic for a given year.
pub trait RegionProvider: Send + Sync + fmt::Debug {
    /// Short code, e.g. `NL` or `GB-SCT`.
    fn code(&self) -> &str;

    /// Display name, e.g. `Netherlands`.
    fn name(&self) -> &str;

    /// The region's timezone.
    fn timezone(&self) -> Tz;

    /// The region's weekend.
    fn weekend(&self) -> WeekendType {
        WeekendType::SaturdaySunday
    }

    /// Rules applying to `year`, in declaration order.
    fn rules(&self, year: i32) -> HolidayResult<RuleSet>;
}

/// A region defined by static data and a rule function.
#[derive(Clone, Copy)]
pub struct Region {
    code: &'static str,
    name: &'static str,
    timezone: Tz,
    weekend: WeekendType,
    rules: fn(i32) -> HolidayResult<RuleSet>,
}

impl Region {
    /// Creates a region with a Saturday/Sunday weekend.
    #[must_use]
    pub const fn new(
        code: &'static str,
        name: &'static str,
        timezone: Tz,
        rules: fn(i32) -> HolidayResult<RuleSet>,
    ) -> Self {
        Self {
            code,
            name,
            timezone,
            weekend: WeekendType::SaturdaySunday,
            rules,
        }
    }

    /// Builder method to set the weekend.
    #[must_use]
    pub fn with_weekend(mut self, weekend: WeekendType) -> Self {
        self.weekend = weekend;
        self
    }
}

impl fmt::Debug for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Region")
            .field("code", &self.code)
            .field("name", &self.name)
            .field("timezone", &self.timezone)
            .field("weekend", &self.weekend)
            .finish()
    }
}

impl RegionProvider for Region {
    fn code(&self) -> &str {
        self.code
    }

    fn name(&self) -> &str {
        self.name
    }

    fn timezone(&self) -> Tz {
        self.timezone
    }

    fn weekend(&self) -> WeekendType {
        self.weekend
    }

    fn rules(&self, year: i32) -> HolidayResult<RuleSet> {
        (self.rules)(year)
    }
}
