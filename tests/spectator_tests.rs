//! Spectator notification order and redaction.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use rust_yard::board::TransportGraph;
use rust_yard::core::{Location, Move, PlayerColour, PlayerConfig, RoundSchedule, Ticket, TicketMove, Transport};
use rust_yard::engine::{Game, RandomChooser, Spectator, TurnLoop};
use rust_yard::error::ProtocolError;

const BLACK: PlayerColour = PlayerColour::Black;
const BLUE: PlayerColour = PlayerColour::Blue;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Event {
    Round(u32),
    Move(Move),
    Rotation,
    GameOver(BTreeSet<PlayerColour>),
}

#[derive(Default)]
struct Recorder {
    events: RefCell<Vec<Event>>,
}

impl Recorder {
    fn take(&self) -> Vec<Event> {
        self.events.take()
    }
}

impl Spectator for Recorder {
    fn on_round_started(&self, _game: &Game, round: u32) {
        self.events.borrow_mut().push(Event::Round(round));
    }

    fn on_move_made(&self, _game: &Game, mv: &Move) {
        self.events.borrow_mut().push(Event::Move(*mv));
    }

    fn on_rotation_complete(&self, _game: &Game) {
        self.events.borrow_mut().push(Event::Rotation);
    }

    fn on_game_over(&self, _game: &Game, winners: &BTreeSet<PlayerColour>) {
        self.events.borrow_mut().push(Event::GameOver(winners.clone()));
    }
}

fn tracker(at: u32, taxi: u32) -> PlayerConfig {
    PlayerConfig::new(BLUE, Location(at))
        .with_ticket(Ticket::Taxi, taxi)
        .with_ticket(Ticket::Bus, 0)
        .with_ticket(Ticket::Underground, 0)
}

fn watched(rounds: Vec<bool>, tracker_at: u32) -> (Game, Rc<Recorder>) {
    let mut game = Game::new(
        RoundSchedule::new(rounds),
        TransportGraph::cycle(10, Transport::Taxi),
        PlayerConfig::classic_fugitive(Location(1)),
        vec![tracker(tracker_at, 5)],
    )
    .unwrap();
    let recorder = Rc::new(Recorder::default());
    game.register_spectator(recorder.clone()).unwrap();
    (game, recorder)
}

fn leg(ticket: Ticket, to: u32) -> TicketMove {
    TicketMove::new(BLACK, ticket, Location(to))
}

/// Hidden fugitive moves are reported at the disclosed location, tracker moves truthfully.
#[test]
fn test_rotation_events() {
    let (mut game, recorder) = watched(vec![false, true, false], 6);

    game.accept(Move::ticket(BLACK, Ticket::Bus, Location(2))).unwrap_err();
    game.accept(Move::ticket(BLACK, Ticket::Taxi, Location(2))).unwrap();
    game.accept(Move::ticket(BLUE, Ticket::Taxi, Location(5))).unwrap();

    assert_eq!(
        recorder.take(),
        vec![
            Event::Round(1),
            Event::Move(Move::ticket(BLACK, Ticket::Taxi, Location::UNREVEALED)),
            Event::Move(Move::ticket(BLUE, Ticket::Taxi, Location(5))),
            Event::Rotation,
        ]
    );

    // Round 2 reveals.
    game.accept(Move::ticket(BLACK, Ticket::Secret, Location(3))).unwrap();
    assert_eq!(
        recorder.take(),
        vec![
            Event::Round(2),
            Event::Move(Move::ticket(BLACK, Ticket::Secret, Location(3))),
        ]
    );
}

/// A double move is announced once, then each leg starts its own round.
#[test]
fn test_double_move_events() {
    let (mut game, recorder) = watched(vec![false, true, false, false], 6);
    let double = Move::double(BLACK, leg(Ticket::Taxi, 2), leg(Ticket::Secret, 3));

    game.accept(double).unwrap();

    assert_eq!(
        recorder.take(),
        vec![
            Event::Move(Move::double(
                BLACK,
                leg(Ticket::Taxi, 0),
                leg(Ticket::Secret, 3)
            )),
            Event::Round(1),
            Event::Move(Move::ticket(BLACK, Ticket::Taxi, Location::UNREVEALED)),
            Event::Round(2),
            Event::Move(Move::ticket(BLACK, Ticket::Secret, Location(3))),
        ]
    );
}

/// Seen on the first leg, hidden on the second: both legs report the first destination.
#[test]
fn test_double_move_seen_then_hidden() {
    let (mut game, recorder) = watched(vec![true, false, false], 6);
    let double = Move::double(BLACK, leg(Ticket::Taxi, 2), leg(Ticket::Taxi, 3));

    game.accept(double).unwrap();

    let events = recorder.take();
    assert_eq!(
        events[0],
        Event::Move(Move::double(BLACK, leg(Ticket::Taxi, 2), leg(Ticket::Taxi, 2)))
    );
    assert_eq!(game.player_location(BLACK), Some(Location(2)));
}

/// Hidden then seen: the first leg keeps the old disclosure, the second is exact.
#[test]
fn test_double_move_hidden_then_seen() {
    let (mut game, recorder) = watched(vec![true, false, true, false, false], 6);

    game.accept(Move::ticket(BLACK, Ticket::Taxi, Location(2))).unwrap();
    game.accept(Move::ticket(BLUE, Ticket::Taxi, Location(7))).unwrap();
    recorder.take();

    let double = Move::double(BLACK, leg(Ticket::Taxi, 3), leg(Ticket::Taxi, 4));
    game.accept(double).unwrap();

    let events = recorder.take();
    assert_eq!(
        events[0],
        Event::Move(Move::double(BLACK, leg(Ticket::Taxi, 2), leg(Ticket::Taxi, 4)))
    );
    assert_eq!(game.player_location(BLACK), Some(Location(4)));
}

/// Game over is announced exactly once and replaces the rotation notice.
#[test]
fn test_game_over_announced_once() {
    let (mut game, recorder) = watched(vec![false; 5], 3);

    game.accept(Move::ticket(BLACK, Ticket::Taxi, Location(2))).unwrap();
    game.accept(Move::ticket(BLUE, Ticket::Taxi, Location(2))).unwrap();

    let events = recorder.take();
    let game_overs: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, Event::GameOver(_)))
        .collect();
    assert_eq!(game_overs, vec![&Event::GameOver([BLUE].into_iter().collect())]);
    assert!(!events.contains(&Event::Rotation));

    assert_eq!(
        game.accept(Move::ticket(BLACK, Ticket::Taxi, Location(1))),
        Err(ProtocolError::GameOver)
    );
    assert!(recorder.take().is_empty());
}

/// Unregistered spectators hear nothing further.
#[test]
fn test_unregister_stops_events() {
    let (mut game, recorder) = watched(vec![false; 5], 6);
    let as_spectator: Rc<dyn Spectator> = recorder.clone();

    assert_eq!(
        game.register_spectator(as_spectator.clone()),
        Err(ProtocolError::SpectatorAlreadyRegistered)
    );
    game.unregister_spectator(&as_spectator).unwrap();
    assert_eq!(
        game.unregister_spectator(&as_spectator),
        Err(ProtocolError::SpectatorNotRegistered)
    );

    game.accept(Move::ticket(BLACK, Ticket::Taxi, Location(2))).unwrap();
    assert!(recorder.take().is_empty());
}

/// A whole driven game produces one game-over event at the very end.
#[test]
fn test_driven_game_event_stream() {
    let (mut game, recorder) = watched(vec![false, false, true, false, false, false], 6);
    let mut turns = TurnLoop::new()
        .seat(BLACK, RandomChooser::new(21))
        .seat(BLUE, RandomChooser::new(22));

    let result = turns.play_to_end(&mut game).unwrap();
    let events = recorder.take();

    assert_eq!(events.last(), Some(&Event::GameOver(result.winners.clone())));
    let rounds: Vec<u32> = events
        .iter()
        .filter_map(|e| match e {
            Event::Round(r) => Some(*r),
            _ => None,
        })
        .collect();
    let expected: Vec<u32> = (1..=game.current_round()).collect();
    assert_eq!(rounds, expected);
}
