//! The four global resources: money, carbon, hope and momentum.
//!
//! Money and carbon are integers that saturate at the `i32` bounds. Hope
//! and momentum are small counters clamped to `[0, max]` on every write,
//! so no sequence of deltas can push them out of range.

use serde::{Deserialize, Serialize};

use super::config::GameConfig;

/// Named hope levels of the standard game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HopeLevel {
    Empty = 0,
    One = 1,
    Two = 2,
    Full = 3,
}

impl HopeLevel {
    /// Map a clamped hope value to its level.
    #[must_use]
    pub fn from_value(value: i32) -> Self {
        match value {
            i32::MIN..=0 => HopeLevel::Empty,
            1 => HopeLevel::One,
            2 => HopeLevel::Two,
            _ => HopeLevel::Full,
        }
    }
}

/// Signed resource change carried by a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceDelta {
    pub money: i32,
    pub carbon: i32,
    pub hope: i32,
}

impl ResourceDelta {
    #[must_use]
    pub const fn new(money: i32, carbon: i32, hope: i32) -> Self {
        Self { money, carbon, hope }
    }
}

impl std::ops::Add for ResourceDelta {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            money: self.money.saturating_add(rhs.money),
            carbon: self.carbon.saturating_add(rhs.carbon),
            hope: self.hope.saturating_add(rhs.hope),
        }
    }
}

impl std::iter::Sum for ResourceDelta {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, d| acc + d)
    }
}

/// Current resource values.
///
/// Fields are private so the hope and momentum clamps cannot be bypassed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceState {
    money: i32,
    carbon: i32,
    hope: i32,
    momentum: i32,
    max_hope: i32,
    max_momentum: i32,
}

impl ResourceState {
    /// Starting resources for a configuration.
    ///
    /// Negative maxima are treated as 0 so the clamps always have a valid
    /// range, even for a config that skipped `GameConfig::validate`.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        let max_hope = config.max_hope.max(0);
        Self {
            money: config.starting_money,
            carbon: config.starting_carbon,
            hope: config.starting_hope.clamp(0, max_hope),
            momentum: 0,
            max_hope,
            max_momentum: config.max_momentum.max(0),
        }
    }

    #[must_use]
    pub fn money(&self) -> i32 {
        self.money
    }

    #[must_use]
    pub fn carbon(&self) -> i32 {
        self.carbon
    }

    #[must_use]
    pub fn hope(&self) -> i32 {
        self.hope
    }

    #[must_use]
    pub fn hope_level(&self) -> HopeLevel {
        HopeLevel::from_value(self.hope)
    }

    #[must_use]
    pub fn momentum(&self) -> i32 {
        self.momentum
    }

    /// True while a momentum run is in progress.
    #[must_use]
    pub fn in_momentum_run(&self) -> bool {
        self.momentum > 0
    }

    /// Apply a card's deltas. Hope is clamped.
    pub fn apply(&mut self, delta: ResourceDelta) {
        self.money = self.money.saturating_add(delta.money);
        self.carbon = self.carbon.saturating_add(delta.carbon);
        self.set_hope(self.hope.saturating_add(delta.hope));
    }

    /// Spend money directly (redraw). May go negative.
    pub fn spend(&mut self, amount: i32) {
        self.money = self.money.saturating_sub(amount);
    }

    pub fn set_hope(&mut self, value: i32) {
        self.hope = value.clamp(0, self.max_hope);
    }

    /// Extend the current momentum run by one.
    pub fn add_momentum(&mut self) {
        self.momentum = self.momentum.saturating_add(1).clamp(0, self.max_momentum);
    }

    pub fn reset_momentum(&mut self) {
        self.momentum = 0;
    }
}
