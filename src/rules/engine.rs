//! The rules engine.
//!
//! `ClimateGame` owns one game session and processes commands one at a
//! time, each to completion. The turn lifecycle is:
//!
//! 1. **BeginTurn**: draw the front event card and apply its deltas now.
//! 2. **Plays**: move action cards from hand to the active plays. A card
//!    without momentum, or the last allowed play, ends the turn.
//! 3. **EndTurn**: apply every played card, queue escalations and rewards
//!    into the event deck, refill the hand, then evaluate the end
//!    conditions and open the next turn if the game goes on.
//!
//! Event deltas apply at BeginTurn while action deltas wait for EndTurn;
//! momentum-run strategy depends on that ordering.

use crate::cards::{ActionCard, CardCatalog, CardEffect, EventCard, StandardCatalog};
use crate::core::{
    Command, CommandError, ConfigError, GameConfig, GameState, MomentumStall, ResourceState,
    TurnState,
};
use crate::events::{EventQueue, GameEvent};
use crate::zones::{Deck, Hand};

use super::outcome::{GameOutcome, LossReason};

/// Log and return a refused command.
fn refuse<T>(err: CommandError) -> Result<T, CommandError> {
    log::warn!("command refused: {err}");
    Err(err)
}

/// One game session plus the catalog it draws from.
///
/// ## Example
///
/// ```
/// use climate_cards::cards::{ActionCard, EventCard, StandardCatalog};
/// use climate_cards::rules::{ClimateGame, GameOutcome};
///
/// let catalog = StandardCatalog::new()
///     .with_actions((0..10).map(|i| ActionCard::new(format!("Retrofit {i}"), -1, -2)))
///     .with_events((0..10).map(|i| EventCard::new(format!("Calm {i}"), 0, 0)));
///
/// let mut game = ClimateGame::new(catalog, 7);
/// game.setup_game();
/// assert_eq!(game.turn().turn_number, 1);
/// assert_eq!(game.hand().len(), 5);
///
/// // A card without momentum ends the turn; its deltas apply then.
/// game.play_card_at(0).unwrap();
/// assert_eq!(game.resources().carbon(), 18);
/// assert_eq!(game.resources().money(), 19);
/// assert_eq!(game.turn().turn_number, 2);
/// assert_eq!(game.outcome(), GameOutcome::Ongoing);
/// ```
#[derive(Clone, Debug)]
pub struct ClimateGame<C: CardCatalog = StandardCatalog> {
    config: GameConfig,
    catalog: C,
    state: GameState,
    events: EventQueue,
}

impl<C: CardCatalog> ClimateGame<C> {
    /// Create an engine with the standard rules. Call `setup_game` to start.
    pub fn new(catalog: C, seed: u64) -> Self {
        Self::with_config(GameConfig::default(), catalog, seed)
    }

    /// Create an engine with custom rules, rejecting a config that fails
    /// `GameConfig::validate`.
    pub fn try_with_config(
        config: GameConfig,
        catalog: C,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_config(config, catalog, seed))
    }

    /// Create an engine with custom rules.
    ///
    /// The config is trusted; use `try_with_config` for one read from
    /// outside the program.
    pub fn with_config(config: GameConfig, catalog: C, seed: u64) -> Self {
        let state = GameState::new(&config, seed);
        Self {
            config,
            catalog,
            state,
            events: EventQueue::new(),
        }
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn resources(&self) -> &ResourceState {
        &self.state.resources
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.state.hand
    }

    #[must_use]
    pub fn turn(&self) -> &TurnState {
        &self.state.turn
    }

    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        self.state.outcome
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Is hope one step from empty with nothing played yet this turn?
    #[must_use]
    pub fn must_play_hope(&self) -> bool {
        self.state.resources.hope() == 1 && self.state.turn.active_plays.is_empty()
    }

    /// Does any hand card change hope?
    #[must_use]
    pub fn has_hope_card(&self) -> bool {
        self.state.hand.any_hope()
    }

    /// Can the card at `index` be played right now?
    #[must_use]
    pub fn can_play_at(&self, index: usize) -> bool {
        self.state.is_set_up()
            && !self.is_over()
            && self.state.turn.active
            && self
                .state
                .hand
                .get(index)
                .is_some_and(|card| self.momentum_allows(card))
    }

    /// Every command the engine would accept now, excluding `SetupGame`
    /// once a session is running.
    #[must_use]
    pub fn legal_commands(&self) -> Vec<Command> {
        if !self.state.is_set_up() {
            return vec![Command::SetupGame];
        }
        if self.is_over() {
            return Vec::new();
        }
        if !self.state.turn.active {
            return vec![Command::BeginTurn, Command::Forfeit];
        }

        let mut commands: Vec<Command> = (0..self.state.hand.len())
            .filter(|&i| self.can_play_at(i))
            .map(Command::PlayCardAt)
            .collect();
        commands.push(Command::Redraw);
        commands.push(Command::EndTurn);
        commands.push(Command::Forfeit);
        commands
    }

    /// Resume a saved session. Pending notifications are dropped.
    pub fn restore(&mut self, state: GameState) {
        log::info!(
            "restored game at turn {} ({})",
            state.turn.turn_number,
            state.outcome
        );
        self.state = state;
        self.events.clear();
    }

    /// Take all notifications emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    #[must_use]
    pub fn pending_events(&self) -> &[GameEvent] {
        self.events.pending()
    }

    // === Commands ===

    /// Dispatch a command.
    pub fn apply(&mut self, command: Command) -> Result<(), CommandError> {
        match command {
            Command::SetupGame => {
                self.setup_game();
                Ok(())
            }
            Command::BeginTurn => self.begin_turn(),
            Command::PlayCardAt(index) => self.play_card_at(index),
            Command::PlayCard(card) => self.play_card(&card),
            Command::Redraw => self.redraw(),
            Command::EndTurn => self.end_turn(),
            Command::Forfeit => self.forfeit(),
        }
    }

    /// Start a new session: reset resources, build both decks, fill the
    /// hand and begin turn 1. Always accepted.
    pub fn setup_game(&mut self) {
        self.state.reset(&self.config);
        self.events.clear();
        self.state.record(Command::SetupGame);

        self.state.action_deck =
            Deck::from_master(self.catalog.master_action_cards(), &mut self.state.rng);
        self.state.event_deck =
            Deck::from_master(self.catalog.master_event_cards(), &mut self.state.rng);

        log::info!(
            "Cards For Climate! {} action cards, {} event cards",
            self.state.action_deck.len(),
            self.state.event_deck.len()
        );
        self.emit_resources();

        self.draw();
        self.open_turn();
    }

    /// Open the next turn. Only needed when `auto_advance` is off.
    pub fn begin_turn(&mut self) -> Result<(), CommandError> {
        self.ensure_ongoing()?;
        if self.state.turn.active {
            return refuse(CommandError::TurnAlreadyActive);
        }
        self.state.record(Command::BeginTurn);
        self.open_turn();
        Ok(())
    }

    /// Play the card at a 0-based hand position.
    pub fn play_card_at(&mut self, index: usize) -> Result<(), CommandError> {
        self.ensure_turn_active()?;
        let Some(card) = self.state.hand.get(index) else {
            return refuse(CommandError::NoCardAtIndex {
                index,
                hand_len: self.state.hand.len(),
            });
        };
        if !self.momentum_allows(card) {
            return refuse(CommandError::MomentumRequired(card.name.clone()));
        }

        self.state.record(Command::PlayCardAt(index));
        self.play_from_hand(index);
        Ok(())
    }

    /// Play the first hand card equal to `card`.
    pub fn play_card(&mut self, card: &ActionCard) -> Result<(), CommandError> {
        self.ensure_turn_active()?;
        let Some(index) = self.state.hand.position_of(card) else {
            return refuse(CommandError::CardNotInHand(card.name.clone()));
        };
        if !self.momentum_allows(card) {
            return refuse(CommandError::MomentumRequired(card.name.clone()));
        }

        self.state.record(Command::PlayCard(card.clone()));
        self.play_from_hand(index);
        Ok(())
    }

    /// End the current turn voluntarily.
    pub fn end_turn(&mut self) -> Result<(), CommandError> {
        self.ensure_turn_active()?;
        self.state.record(Command::EndTurn);
        self.resolve_turn();
        Ok(())
    }

    /// Pay the redraw cost, discard the hand and draw a fresh one.
    ///
    /// Money is spent immediately and may go to or below the floor, which
    /// ends the game after the new hand is drawn.
    pub fn redraw(&mut self) -> Result<(), CommandError> {
        self.ensure_turn_active()?;
        self.state.record(Command::Redraw);

        self.state.resources.spend(self.config.redraw_cost);
        let discarded = self.state.hand.discard_all();
        log::debug!("redraw: discarding {} cards", discarded.len());
        self.state.discard.extend(discarded);

        self.draw();
        self.emit_resources();
        self.check_end(false);
        Ok(())
    }

    /// Concede. The open turn is discarded without resolving.
    pub fn forfeit(&mut self) -> Result<(), CommandError> {
        self.ensure_ongoing()?;
        self.state.record(Command::Forfeit);

        let plays = std::mem::take(&mut self.state.turn.active_plays);
        self.state.discard.extend(plays);
        self.state.resources.reset_momentum();
        self.emit_resources();

        log::info!("You forfeit");
        self.finish(GameOutcome::Lost(LossReason::Forfeited));
        Ok(())
    }

    // === Internals ===

    fn ensure_ongoing(&self) -> Result<(), CommandError> {
        if !self.state.is_set_up() {
            return refuse(CommandError::NotSetUp);
        }
        if self.is_over() {
            return refuse(CommandError::GameOver);
        }
        Ok(())
    }

    fn ensure_turn_active(&self) -> Result<(), CommandError> {
        self.ensure_ongoing()?;
        if !self.state.turn.active {
            return refuse(CommandError::TurnInactive);
        }
        Ok(())
    }

    /// Outside a run anything is playable; inside one only momentum cards.
    fn momentum_allows(&self, card: &ActionCard) -> bool {
        !self.state.resources.in_momentum_run() || card.has_momentum()
    }

    fn open_turn(&mut self) {
        let Some(event) = self.state.event_deck.pop_front() else {
            log::info!("no event cards left to begin a turn");
            self.finish(GameOutcome::Lost(LossReason::EventDeckExhausted));
            return;
        };

        self.state.turn.turn_number += 1;
        let turn = self.state.turn.turn_number;
        log::info!("turn {turn} begins with event {event}");

        self.state.resources.apply(event.delta());
        self.state.turn.current_event = Some(event.clone());
        self.state.turn.active = true;

        self.events.push(GameEvent::EventCardChanged(event));
        self.emit_resources();
        self.events.push(GameEvent::TurnBegan { turn });

        if self.must_play_hope() {
            log::warn!("a positive hope card must be played");
        }
        self.log_hand();
    }

    fn play_from_hand(&mut self, index: usize) {
        let Some(card) = self.state.hand.remove(index) else {
            return;
        };
        log::debug!("card played: {card}");

        self.state.turn.active_plays.push(card.clone());
        let plays = self.state.turn.plays_made();
        self.events.push(GameEvent::CardPlayed(card.clone()));
        self.emit_hand();

        if card.momentum == 0 || plays >= self.config.max_plays_per_turn {
            self.resolve_turn();
            return;
        }

        self.state.resources.add_momentum();
        self.emit_resources();

        if self.state.hand.any_momentum() {
            log::debug!(
                "momentum run at {}, play another momentum card",
                self.state.resources.momentum()
            );
            return;
        }

        match self.config.momentum_stall {
            MomentumStall::Idle => {
                log::info!("out of momentum cards to play; end the turn to continue");
            }
            MomentumStall::ForceEndTurn => {
                log::info!("out of momentum cards to play; ending turn");
                self.resolve_turn();
            }
        }
    }

    fn resolve_turn(&mut self) {
        let turn = self.state.turn.turn_number;
        let plays = std::mem::take(&mut self.state.turn.active_plays);
        log::info!("turn {turn} ended with {} plays", plays.len());

        // Applied one card at a time so the hope clamp matches play order.
        for card in &plays {
            self.state.resources.apply(card.delta());
        }

        let escalation = self
            .state
            .turn
            .current_event
            .as_ref()
            .and_then(|event| self.catalog.escalation_for(&event.name));
        if let Some(escalation) = escalation {
            self.queue_event(escalation);
        }

        if plays.len() >= self.config.max_plays_per_turn {
            let pool = self.catalog.reward_pool();
            if let Some(reward) = self.state.rng.choose(&pool).cloned() {
                self.queue_event(reward);
            }
        }

        let play_count = plays.len();
        self.state.discard.extend(plays);
        self.state.turn.active = false;
        self.state.resources.reset_momentum();
        self.emit_resources();
        self.events.push(GameEvent::TurnEnded { turn, plays: play_count });

        self.draw();

        if self.check_end(true) {
            return;
        }
        if self.config.auto_advance {
            self.open_turn();
        }
    }

    fn queue_event(&mut self, card: EventCard) {
        let position = self.state.event_deck.insert_random(card.clone(), &mut self.state.rng);
        log::debug!("queued {} at event deck position {position}", card.name);
        self.events.push(GameEvent::EventQueued { card, position });
    }

    /// Refill the hand; stops quietly when the action deck runs out.
    fn draw(&mut self) {
        let drawn = self.state.hand.fill_from(&mut self.state.action_deck);
        if !self.state.hand.is_full() {
            log::debug!("no more action cards to draw");
        }
        log::trace!("drew {} cards", drawn.len());
        self.emit_hand();
    }

    /// Evaluate end conditions; returns true if the game just ended.
    fn check_end(&mut self, turn_boundary: bool) -> bool {
        let exhausted = turn_boundary && self.state.event_deck.is_empty();
        let outcome = GameOutcome::evaluate(&self.state.resources, &self.config, exhausted);
        if outcome.is_terminal() {
            self.finish(outcome);
            true
        } else {
            false
        }
    }

    fn finish(&mut self, outcome: GameOutcome) {
        self.state.outcome = outcome;
        self.state.turn.active = false;
        if let Some(message) = outcome.message() {
            log::info!("{message}");
        }
        self.events.push(GameEvent::GameEnded(outcome));
    }

    fn emit_resources(&mut self) {
        self.events.push(GameEvent::ResourcesChanged(self.state.resources));
    }

    fn emit_hand(&mut self) {
        self.events.push(GameEvent::HandChanged(self.state.hand.cards().to_vec()));
    }

    fn log_hand(&self) {
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }
        for (i, card) in self.state.hand.cards().iter().enumerate() {
            log::debug!("hand {}: {card}", i + 1);
        }
    }
}
