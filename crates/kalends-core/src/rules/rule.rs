//! Holiday rule descriptors.

use chrono::Weekday;

use super::DateRule;
use crate::calendars::WeekendType;
use crate::shift::Shift;
use crate::types::{HolidayType, Translations};

/// Years in which a rule is active.
///
/// `since` and `until` are inclusive; `removed_in` is the first year the
/// rule no longer applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct YearWindow {
    /// First year observed.
    pub since: Option<i32>,
    /// Last year observed.
    pub until: Option<i32>,
    /// First year no longer observed.
    pub removed_in: Option<i32>,
}

impl YearWindow {
    /// Returns true if `year` lies inside the window.
    pub fn contains(&self, year: i32) -> bool {
        self.since.map_or(true, |since| year >= since)
            && self.until.map_or(true, |until| year <= until)
            && self.removed_in.map_or(true, |removed| year < removed)
    }
}

/// Weekdays that trigger a substitute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerDays {
    /// The region's weekend.
    Weekend,
    /// An explicit list, e.g. only Sunday.
    Days(Vec<Weekday>),
    /// No weekday triggers; only collisions do.
    Never,
}

impl TriggerDays {
    /// Returns true if `weekday` triggers a substitute.
    pub fn triggers(&self, weekday: Weekday, weekend: WeekendType) -> bool {
        match self {
            TriggerDays::Weekend => weekend.is_weekend(weekday),
            TriggerDays::Days(days) => days.contains(&weekday),
            TriggerDays::Never => false,
        }
    }
}

/// When a clash with another holiday triggers a substitute.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Collision {
    /// Clashes are ignored.
    #[default]
    None,
    /// Any other holiday on the same date.
    ///
    /// Two holidays that both use `Any` and share a date each get a
    /// substitute. Give one of them `With` instead to let the other keep
    /// the day unmoved.
    Any,
    /// Only the listed holiday keys; this holiday yields to them.
    With(Vec<String>),
}

impl Collision {
    /// Returns true if sharing a date with `other_key` triggers a substitute.
    pub fn clashes_with(&self, other_key: &str) -> bool {
        match self {
            Collision::None => false,
            Collision::Any => true,
            Collision::With(keys) => keys.iter().any(|key| key == other_key),
        }
    }
}

/// Substitution policy of one rule.
///
/// # Example
///
/// ```rust
/// use kalends_core::rules::{Collision, Substitution};
/// use kalends_core::Shift;
///
/// // Korean Children's Day: moved on weekends and when it meets Buddha's Birthday.
/// let policy = Substitution::weekend(Shift::NextWorkingDay)
///     .on_collision(Collision::With(vec!["buddhasBirthday".to_string()]));
/// assert!(policy.collision.clashes_with("buddhasBirthday"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    /// Weekdays that trigger a substitute.
    pub trigger: TriggerDays,
    /// Holidays whose date clash triggers a substitute.
    pub collision: Collision,
    /// Where the substitute is placed.
    pub shift: Shift,
}

impl Substitution {
    /// Substitute when the holiday falls on a weekend day.
    #[must_use]
    pub fn weekend(shift: Shift) -> Self {
        Self {
            trigger: TriggerDays::Weekend,
            collision: Collision::None,
            shift,
        }
    }

    /// Substitute when the holiday falls on one of `days`.
    #[must_use]
    pub fn on_days(days: impl Into<Vec<Weekday>>, shift: Shift) -> Self {
        Self {
            trigger: TriggerDays::Days(days.into()),
            collision: Collision::None,
            shift,
        }
    }

    /// Substitute only on a clash with another holiday.
    #[must_use]
    pub fn collision_only(collision: Collision, shift: Shift) -> Self {
        Self {
            trigger: TriggerDays::Never,
            collision,
            shift,
        }
    }

    /// Builder method to add a collision trigger.
    #[must_use]
    pub fn on_collision(mut self, collision: Collision) -> Self {
        self.collision = collision;
        self
    }
}

/// One holiday of a region: key, date computation and metadata.
#[derive(Debug, Clone)]
pub struct HolidayRule {
    key: String,
    date: DateRule,
    holiday_type: HolidayType,
    translations: Translations,
    window: YearWindow,
    substitution: Option<Substitution>,
}

impl HolidayRule {
    /// Creates an official holiday rule active in every year.
    pub fn new(key: impl Into<String>, date: DateRule) -> Self {
        Self {
            key: key.into(),
            date,
            holiday_type: HolidayType::Official,
            translations: Translations::new(),
            window: YearWindow::default(),
            substitution: None,
        }
    }

    /// Fixed month/day rule.
    pub fn fixed(key: impl Into<String>, month: u32, day: u32) -> Self {
        Self::new(key, DateRule::fixed(month, day))
    }

    /// Easter-relative rule.
    pub fn easter(key: impl Into<String>, offset: i64) -> Self {
        Self::new(key, DateRule::easter(offset))
    }

    /// Builder method to set the type.
    #[must_use]
    pub fn with_type(mut self, holiday_type: HolidayType) -> Self {
        self.holiday_type = holiday_type;
        self
    }

    /// Builder method to set per-rule names that override global ones.
    #[must_use]
    pub fn with_translations(mut self, translations: Translations) -> Self {
        self.translations = translations;
        self
    }

    /// Builder method to set the first observed year.
    #[must_use]
    pub fn since(mut self, year: i32) -> Self {
        self.window.since = Some(year);
        self
    }

    /// Builder method to set the last observed year.
    #[must_use]
    pub fn until(mut self, year: i32) -> Self {
        self.window.until = Some(year);
        self
    }

    /// Builder method to set the first year the rule is gone.
    #[must_use]
    pub fn removed_in(mut self, year: i32) -> Self {
        self.window.removed_in = Some(year);
        self
    }

    /// Builder method to attach a substitution policy.
    #[must_use]
    pub fn with_substitution(mut self, substitution: Substitution) -> Self {
        self.substitution = Some(substitution);
        self
    }

    /// The holiday key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The date computation.
    pub fn date_rule(&self) -> &DateRule {
        &self.date
    }

    /// The holiday type.
    pub fn holiday_type(&self) -> HolidayType {
        self.holiday_type
    }

    /// Per-rule names.
    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    /// The active years.
    pub fn window(&self) -> YearWindow {
        self.window
    }

    /// The substitution policy, if any.
    pub fn substitution(&self) -> Option<&Substitution> {
        self.substitution.as_ref()
    }

    /// Returns true if the rule applies in `year`.
    pub fn is_active(&self, year: i32) -> bool {
        self.window.contains(year)
    }
}
