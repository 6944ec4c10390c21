//! Win and loss conditions.

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, ResourceState};

/// Why a game was lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LossReason {
    CarbonTooHigh,
    OutOfMoney,
    OutOfHope,
    EventDeckExhausted,
    Forfeited,
}

impl LossReason {
    /// End-screen text for this loss.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            LossReason::CarbonTooHigh => "Carbon levels are too high now! Game Over",
            LossReason::OutOfMoney => "We have run out of money for further action! Game Over",
            LossReason::OutOfHope => "The planet has run out of time! Game Over",
            LossReason::EventDeckExhausted => "People have lost too much to continue! Game Over",
            LossReason::Forfeited => "You've Lost! Game Over",
        }
    }
}

/// State of the game as a whole.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    #[default]
    Ongoing,
    Lost(LossReason),
    Won,
}

impl GameOutcome {
    /// Has the game ended, either way?
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::Ongoing)
    }

    #[must_use]
    pub fn loss_reason(self) -> Option<LossReason> {
        match self {
            GameOutcome::Lost(reason) => Some(reason),
            _ => None,
        }
    }

    /// End-screen text, or `None` while the game continues.
    #[must_use]
    pub fn message(self) -> Option<&'static str> {
        match self {
            GameOutcome::Ongoing => None,
            GameOutcome::Lost(reason) => Some(reason.message()),
            GameOutcome::Won => Some(
                "The Planet is Saved! We have begun reducing carbon emissions \
                 and are on track to help the world! You Win!",
            ),
        }
    }

    /// Evaluate the end conditions.
    ///
    /// Loss conditions are checked in priority order (carbon, money, hope,
    /// event deck) and the first match decides the reason. A win requires
    /// that no loss condition holds. `event_deck_exhausted` is only passed
    /// as true at turn boundaries, where the next turn would need a card.
    #[must_use]
    pub fn evaluate(
        resources: &ResourceState,
        config: &GameConfig,
        event_deck_exhausted: bool,
    ) -> Self {
        if resources.carbon() >= config.carbon_limit {
            GameOutcome::Lost(LossReason::CarbonTooHigh)
        } else if resources.money() <= config.money_floor {
            GameOutcome::Lost(LossReason::OutOfMoney)
        } else if resources.hope() <= 0 {
            GameOutcome::Lost(LossReason::OutOfHope)
        } else if event_deck_exhausted {
            GameOutcome::Lost(LossReason::EventDeckExhausted)
        } else if resources.carbon() <= config.carbon_goal {
            GameOutcome::Won
        } else {
            GameOutcome::Ongoing
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Ongoing => write!(f, "ongoing"),
            GameOutcome::Lost(reason) => write!(f, "lost ({reason:?})"),
            GameOutcome::Won => write!(f, "won"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ResourceDelta;

    fn resources(money: i32, carbon: i32, hope: i32) -> ResourceState {
        let config = GameConfig::default();
        let mut res = ResourceState::from_config(&config);
        res.apply(ResourceDelta::new(
            money - config.starting_money,
            carbon - config.starting_carbon,
            hope - config.starting_hope,
        ));
        res
    }

    fn eval(money: i32, carbon: i32, hope: i32, exhausted: bool) -> GameOutcome {
        GameOutcome::evaluate(&resources(money, carbon, hope), &GameConfig::default(), exhausted)
    }

    #[test]
    fn test_ongoing() {
        assert_eq!(eval(20, 20, 3, false), GameOutcome::Ongoing);
    }

    #[test]
    fn test_each_loss() {
        assert_eq!(eval(20, 30, 3, false), GameOutcome::Lost(LossReason::CarbonTooHigh));
        assert_eq!(eval(0, 20, 3, false), GameOutcome::Lost(LossReason::OutOfMoney));
        assert_eq!(eval(5, 20, 0, false), GameOutcome::Lost(LossReason::OutOfHope));
        assert_eq!(eval(5, 20, 1, true), GameOutcome::Lost(LossReason::EventDeckExhausted));
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(eval(-5, 31, 0, true), GameOutcome::Lost(LossReason::CarbonTooHigh));
        assert_eq!(eval(-5, 10, 0, true), GameOutcome::Lost(LossReason::OutOfMoney));
        assert_eq!(eval(5, 10, 0, true), GameOutcome::Lost(LossReason::OutOfHope));
    }

    #[test]
    fn test_win_requires_no_loss() {
        assert_eq!(eval(5, 0, 1, false), GameOutcome::Won);
        assert_eq!(eval(5, -3, 1, false), GameOutcome::Won);
        assert_eq!(eval(0, 0, 1, false), GameOutcome::Lost(LossReason::OutOfMoney));
        assert_eq!(eval(5, 0, 1, true), GameOutcome::Lost(LossReason::EventDeckExhausted));
    }

    #[test]
    fn test_messages() {
        assert!(GameOutcome::Ongoing.message().is_none());
        assert!(GameOutcome::Won.message().unwrap().contains("You Win"));
        assert_eq!(
            GameOutcome::Lost(LossReason::OutOfHope).message(),
            Some("The planet has run out of time! Game Over")
        );
        assert!(GameOutcome::Lost(LossReason::Forfeited).is_terminal());
        assert!(!GameOutcome::Ongoing.is_terminal());
    }
}
