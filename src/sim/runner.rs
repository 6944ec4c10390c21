//! Headless playouts and batch statistics.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::CardCatalog;
use crate::core::{GameConfig, GameRng, ResourceState};
use crate::rules::{ClimateGame, GameOutcome, LossReason};

use super::policy::Policy;

/// Limits for a playout.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Commands issued before a game is abandoned as unfinished.
    pub max_commands: usize,

    /// Added to every seed, so batches can be offset without renumbering.
    pub seed_offset: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_commands: 1_000,
            seed_offset: 0,
        }
    }
}

impl SimulationConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_commands(mut self, max: usize) -> Self {
        self.max_commands = max;
        self
    }

    #[must_use]
    pub fn with_seed_offset(mut self, offset: u64) -> Self {
        self.seed_offset = offset;
        self
    }
}

/// Result of one playout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    pub seed: u64,
    pub outcome: GameOutcome,
    pub turns: u32,
    pub commands: usize,
    pub refused: usize,
    pub resources: ResourceState,
}

/// Aggregate over many playouts.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BatchStats {
    pub games: u32,
    pub wins: u32,
    pub losses: FxHashMap<LossReason, u32>,
    /// Games that hit the command cap.
    pub unfinished: u32,
    pub total_turns: u64,
}

impl BatchStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, report: &GameReport) {
        self.games += 1;
        self.total_turns += u64::from(report.turns);
        match report.outcome {
            GameOutcome::Won => self.wins += 1,
            GameOutcome::Lost(reason) => *self.losses.entry(reason).or_default() += 1,
            GameOutcome::Ongoing => self.unfinished += 1,
        }
    }

    #[must_use]
    pub fn losses_for(&self, reason: LossReason) -> u32 {
        self.losses.get(&reason).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn total_losses(&self) -> u32 {
        self.losses.values().sum()
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.games)
        }
    }

    #[must_use]
    pub fn mean_turns(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_turns as f64 / f64::from(self.games)
        }
    }
}

/// Plays whole games under a policy.
pub struct Simulation<C: CardCatalog + Clone, P: Policy<C>> {
    catalog: C,
    rules: GameConfig,
    policy: P,
    config: SimulationConfig,
}

impl<C: CardCatalog + Clone, P: Policy<C>> Simulation<C, P> {
    pub fn new(catalog: C, policy: P) -> Self {
        Self {
            catalog,
            rules: GameConfig::default(),
            policy,
            config: SimulationConfig::default(),
        }
    }

    #[must_use]
    pub fn with_rules(mut self, rules: GameConfig) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    /// Set up and play one game to completion or the command cap.
    pub fn run(&self, seed: u64) -> GameReport {
        let seed = seed.wrapping_add(self.config.seed_offset);
        let mut game = ClimateGame::with_config(self.rules.clone(), self.catalog.clone(), seed);
        game.setup_game();
        let mut policy_rng = GameRng::new(seed).fork();

        let mut commands = 0;
        let mut refused = 0;
        while !game.is_over() && commands < self.config.max_commands {
            let Some(command) = self.policy.choose(&game, &mut policy_rng) else {
                break;
            };
            commands += 1;
            if game.apply(command).is_err() {
                refused += 1;
            }
            game.drain_events();
        }

        log::debug!(
            "seed {seed}: {} after {} turns, {commands} commands",
            game.outcome(),
            game.turn().turn_number
        );

        GameReport {
            seed,
            outcome: game.outcome(),
            turns: game.turn().turn_number,
            commands,
            refused,
            resources: *game.resources(),
        }
    }

    /// Play one game per seed.
    pub fn run_batch(&self, seeds: impl IntoIterator<Item = u64>) -> BatchStats {
        let mut stats = BatchStats::new();
        for seed in seeds {
            stats.record(&self.run(seed));
        }
        log::info!(
            "{} games: {} wins ({:.1}%), {} losses, {} unfinished, {:.1} turns on average",
            stats.games,
            stats.wins,
            stats.win_rate() * 100.0,
            stats.total_losses(),
            stats.unfinished,
            stats.mean_turns()
        );
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{ActionCard, EventCard, StandardCatalog};
    use crate::sim::{LowCarbonPolicy, RandomPolicy};

    #[test]
    fn test_run_terminates_on_standard_catalog() {
        let sim = Simulation::new(StandardCatalog::standard().unwrap(), RandomPolicy::new());
        let report = sim.run(42);

        assert!(report.outcome.is_terminal());
        assert!(report.turns >= 1);
        assert_eq!(report.refused, 0);
    }

    #[test]
    fn test_run_is_deterministic() {
        let sim = Simulation::new(StandardCatalog::standard().unwrap(), RandomPolicy::new().with_redraw());
        assert_eq!(sim.run(7), sim.run(7));
    }

    #[test]
    fn test_guaranteed_win() {
        let catalog = StandardCatalog::new()
            .with_actions((0..20).map(|i| ActionCard::new(format!("Retrofit {i}"), 0, -5)))
            .with_events((0..10).map(|i| EventCard::new(format!("Calm {i}"), 0, 0)));
        let sim = Simulation::new(catalog, LowCarbonPolicy::new());

        let report = sim.run(1);
        assert_eq!(report.outcome, GameOutcome::Won);
        assert_eq!(report.turns, 4);
        assert_eq!(report.resources.carbon(), 0);
    }

    #[test]
    fn test_command_cap() {
        let sim = Simulation::new(StandardCatalog::standard().unwrap(), RandomPolicy::new())
            .with_config(SimulationConfig::new().with_max_commands(1));
        let report = sim.run(3);
        assert!(report.commands <= 1);
    }

    #[test]
    fn test_batch_stats() {
        let sim = Simulation::new(StandardCatalog::standard().unwrap(), LowCarbonPolicy::new());
        let stats = sim.run_batch(0..20);

        assert_eq!(stats.games, 20);
        assert_eq!(stats.wins + stats.total_losses() + stats.unfinished, 20);
        assert!(stats.mean_turns() >= 1.0);
        assert!((0.0..=1.0).contains(&stats.win_rate()));
    }

    #[test]
    fn test_empty_stats() {
        let stats = BatchStats::new();
        assert_eq!(stats.win_rate(), 0.0);
        assert_eq!(stats.mean_turns(), 0.0);
        assert_eq!(stats.losses_for(LossReason::OutOfMoney), 0);
    }
}
