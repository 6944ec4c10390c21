//! Policies that choose commands for a headless player.
//!
//! - `RandomPolicy`: uniform over legal commands (never forfeits)
//! - `LowCarbonPolicy`: greedy, plays the card that cuts the most carbon

use crate::cards::CardCatalog;
use crate::core::{Command, GameRng};
use crate::rules::ClimateGame;

/// Chooses the next command for a running game.
pub trait Policy<C: CardCatalog>: Send + Sync {
    /// Pick a command, or `None` to stop playing.
    fn choose(&self, game: &ClimateGame<C>, rng: &mut GameRng) -> Option<Command>;
}

/// Uniform random play.
///
/// Forfeit is never chosen; redraw only when `allow_redraw` is set.
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy {
    pub allow_redraw: bool,
}

impl RandomPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_redraw(mut self) -> Self {
        self.allow_redraw = true;
        self
    }
}

impl<C: CardCatalog> Policy<C> for RandomPolicy {
    fn choose(&self, game: &ClimateGame<C>, rng: &mut GameRng) -> Option<Command> {
        let commands: Vec<Command> = game
            .legal_commands()
            .into_iter()
            .filter(|c| match c {
                Command::Forfeit | Command::SetupGame => false,
                Command::Redraw => self.allow_redraw,
                _ => true,
            })
            .collect();
        rng.choose(&commands).cloned()
    }
}

/// Greedy play: the playable card with the lowest carbon delta, cheaper
/// cards first on ties.
///
/// Redraws when no playable card reduces carbon and money stays above
/// `reserve` after paying. Ends the turn when nothing is playable.
#[derive(Clone, Debug)]
pub struct LowCarbonPolicy {
    pub reserve: i32,
}

impl Default for LowCarbonPolicy {
    fn default() -> Self {
        Self { reserve: 10 }
    }
}

impl LowCarbonPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_reserve(mut self, reserve: i32) -> Self {
        self.reserve = reserve;
        self
    }
}

impl<C: CardCatalog> Policy<C> for LowCarbonPolicy {
    fn choose(&self, game: &ClimateGame<C>, _rng: &mut GameRng) -> Option<Command> {
        if game.is_over() {
            return None;
        }
        if !game.turn().active {
            return Some(Command::BeginTurn);
        }

        let best = game
            .hand()
            .cards()
            .iter()
            .enumerate()
            .filter(|(i, _)| game.can_play_at(*i))
            .min_by_key(|(_, card)| (card.cost_carbon, -card.cost_money));

        match best {
            Some((_, card)) if card.cost_carbon >= 0
                && game.turn().active_plays.is_empty()
                && game.resources().money().saturating_sub(game.config().redraw_cost) > self.reserve =>
            {
                Some(Command::Redraw)
            }
            Some((index, _)) => Some(Command::PlayCardAt(index)),
            None => Some(Command::EndTurn),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{ActionCard, EventCard, StandardCatalog};

    fn game(actions: Vec<ActionCard>) -> ClimateGame {
        let catalog = StandardCatalog::new()
            .with_actions(actions)
            .with_events((0..5).map(|i| EventCard::new(format!("Calm {i}"), 0, 0)));
        let mut game = ClimateGame::new(catalog, 11);
        game.setup_game();
        game
    }

    #[test]
    fn test_random_never_forfeits_or_redraws() {
        let game = game((0..5).map(|i| ActionCard::new(format!("A{i}"), -1, -1)).collect());
        let policy = RandomPolicy::new();
        let mut rng = GameRng::new(1);

        for _ in 0..100 {
            let command = policy.choose(&game, &mut rng).unwrap();
            assert!(matches!(command, Command::PlayCardAt(_) | Command::EndTurn));
        }
    }

    #[test]
    fn test_low_carbon_picks_best_card() {
        let game = game(vec![
            ActionCard::new("Small", -1, -1),
            ActionCard::new("Big", -8, -5),
            ActionCard::new("Dirty", 6, 2),
            ActionCard::new("Cheap Big", -4, -5),
            ActionCard::new("Nothing", 0, 0),
        ]);
        let command = LowCarbonPolicy::new().choose(&game, &mut GameRng::new(1)).unwrap();
        let Command::PlayCardAt(index) = command else {
            panic!("expected a play, got {command}");
        };
        assert_eq!(game.hand().get(index).unwrap().name, "Cheap Big");
    }

    #[test]
    fn test_low_carbon_redraws_dirty_hand() {
        let game = game((0..10).map(|i| ActionCard::new(format!("Dirty {i}"), 3, 2)).collect());
        let command = LowCarbonPolicy::new().choose(&game, &mut GameRng::new(1));
        assert_eq!(command, Some(Command::Redraw));

        let command = LowCarbonPolicy::new()
            .with_reserve(20)
            .choose(&game, &mut GameRng::new(1));
        assert!(matches!(command, Some(Command::PlayCardAt(_))));
    }
}
