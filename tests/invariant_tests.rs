//! Property tests: invariants that hold after every command.

use proptest::prelude::*;

use climate_cards::cards::{ActionCard, CardCatalog, EventCard, StandardCatalog};
use climate_cards::core::{Command, CommandError, GameConfig};
use climate_cards::events::GameEvent;
use climate_cards::rules::{ClimateGame, GameOutcome};

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        8 => (0usize..6).prop_map(Command::PlayCardAt),
        2 => Just(Command::EndTurn),
        1 => Just(Command::Redraw),
        1 => Just(Command::BeginTurn),
    ]
}

fn sorted_names<'a>(cards: impl Iterator<Item = &'a ActionCard>) -> Vec<String> {
    let mut names: Vec<String> = cards.map(|c| c.to_string()).collect();
    names.sort();
    names
}

fn sorted_events<'a>(cards: impl Iterator<Item = &'a EventCard>) -> Vec<String> {
    let mut names: Vec<String> = cards.map(|c| c.to_string()).collect();
    names.sort();
    names
}

/// Action cards with momentum -1, 0, 1 and 2, so runs meet every kind of card.
fn mixed_momentum_catalog() -> StandardCatalog {
    StandardCatalog::new()
        .with_actions((0..24).map(|i| {
            ActionCard::new(format!("Card {i}"), -1, -1).with_momentum(i % 4 - 1)
        }))
        .with_events((0..12).map(|i| EventCard::new(format!("Calm {i}"), 0, 0)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Setup deals a permutation of the catalog: every action card is in the
    /// deck or the hand, every event card in the deck or on the table.
    #[test]
    fn prop_setup_decks_match_catalog(seed in any::<u64>()) {
        let catalog = StandardCatalog::standard().unwrap();
        let mut game = ClimateGame::new(catalog.clone(), seed);
        game.setup_game();

        let dealt = sorted_names(
            game.state().action_deck.iter().chain(game.hand().cards().iter()),
        );
        prop_assert_eq!(dealt, sorted_names(catalog.master_action_cards().iter()));

        let events = sorted_events(
            game.state().event_deck.iter().chain(game.turn().current_event.iter()),
        );
        prop_assert_eq!(events, sorted_events(catalog.master_event_cards().iter()));
    }

    /// Hope and momentum stay in bounds, plays never exceed the cap, and
    /// action cards are never created or lost.
    #[test]
    fn prop_bounds_hold_under_any_commands(
        seed in any::<u64>(),
        commands in prop::collection::vec(command(), 1..120),
    ) {
        let catalog = StandardCatalog::standard().unwrap();
        let total = catalog.master_action_cards().len();
        let mut game = ClimateGame::with_config(GameConfig::default().manual_advance(), catalog, seed);
        game.setup_game();

        for command in commands {
            let _ = game.apply(command);
            let res = game.resources();

            prop_assert!((0..=3).contains(&res.hope()), "hope {} out of bounds", res.hope());
            prop_assert!((0..=3).contains(&res.momentum()), "momentum {} out of bounds", res.momentum());
            prop_assert!(game.turn().plays_made() < 3);
            prop_assert!(game.hand().len() <= 5);
            prop_assert_eq!(game.state().action_cards_accounted(), total);
        }
    }

    /// During a momentum run, a card with zero or negative momentum is
    /// refused and the refusal changes nothing.
    #[test]
    fn prop_momentum_run_refuses_plain_cards(
        seed in any::<u64>(),
        commands in prop::collection::vec(command(), 1..120),
    ) {
        let mut game = ClimateGame::new(mixed_momentum_catalog(), seed);
        game.setup_game();

        for command in commands {
            let blocked = match &command {
                Command::PlayCardAt(i) => game.resources().in_momentum_run()
                    && game.hand().get(*i).is_some_and(|c| !c.has_momentum()),
                _ => false,
            };
            let before = game.state().clone();
            let result = game.apply(command);

            if blocked && !before.is_over() && before.turn.active {
                prop_assert!(matches!(result, Err(CommandError::MomentumRequired(_))));
            }
            if result.is_err() {
                prop_assert_eq!(game.resources(), &before.resources);
                prop_assert_eq!(game.hand(), &before.hand);
                prop_assert_eq!(game.turn(), &before.turn);
                prop_assert_eq!(game.state().history.len(), before.history.len());
            }
        }
    }

    /// Once a turn ends, momentum is back to zero and nothing is left in play.
    #[test]
    fn prop_turn_end_clears_plays(
        seed in any::<u64>(),
        commands in prop::collection::vec(command(), 1..120),
    ) {
        let mut game = ClimateGame::new(StandardCatalog::standard().unwrap(), seed);
        game.setup_game();

        for command in commands {
            game.drain_events();
            if game.apply(command).is_err() {
                continue;
            }
            let ended = game
                .pending_events()
                .iter()
                .any(|e| matches!(e, GameEvent::TurnEnded { .. }));
            if ended {
                prop_assert_eq!(game.turn().plays_made(), 0);
                prop_assert_eq!(game.resources().momentum(), 0);
            }
        }
    }

    /// A finished game refuses everything but a new setup.
    #[test]
    fn prop_terminal_is_final(
        seed in any::<u64>(),
        commands in prop::collection::vec(command(), 1..40),
    ) {
        let catalog = StandardCatalog::new()
            .with_actions((0..20).map(|i| ActionCard::new(format!("Spend {i}"), -8, 0)))
            .with_events((0..20).map(|i| EventCard::new(format!("Calm {i}"), 0, 0)));
        let mut game = ClimateGame::new(catalog, seed);
        game.setup_game();

        // Three plays empty the treasury.
        while !game.is_over() {
            game.play_card_at(0).unwrap();
        }
        let outcome = game.outcome();
        prop_assert!(outcome.is_terminal());
        prop_assert_ne!(outcome, GameOutcome::Won);

        let history = game.state().history.len();
        for command in commands {
            prop_assert_eq!(game.apply(command), Err(CommandError::GameOver));
        }
        prop_assert_eq!(game.outcome(), outcome);
        prop_assert_eq!(game.state().history.len(), history);
    }
}
