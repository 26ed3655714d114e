//! Legal move generation.
//!
//! ## Single moves
//!
//! One `TicketMove` per (edge, ticket) pair the player can pay for, onto
//! nodes no tracker stands on. A held Secret ticket adds a second option
//! for every reachable node.
//!
//! ## Double moves
//!
//! Fugitive only, with a Double ticket and at least two rounds left. Each
//! first leg is combined with every single move available from its
//! destination once the first leg's ticket is paid. Occupancy is the same
//! snapshot for both legs: nobody else moves in between.
//!
//! ## Pass
//!
//! A tracker with no single move gets exactly one `PassMove`.

use crate::board::Board;
use crate::core::{
    DoubleMove, GameState, Location, Move, MoveSet, PlayerColour, Ticket, TicketMove, Tickets,
};

/// All legal moves for `colour` in `state`.
///
/// Unknown colours get an empty set. For the fugitive an empty set means it
/// is cornered.
pub fn legal_moves(board: &dyn Board, state: &GameState, colour: PlayerColour) -> MoveSet {
    let Some(player) = state.player(colour) else {
        return MoveSet::default();
    };

    let singles = single_moves(board, state, colour, player.location, &player.tickets);
    let mut moves: MoveSet = singles.iter().copied().map(Move::Ticket).collect();

    if player.is_fugitive()
        && player.has_ticket(Ticket::Double)
        && state.schedule().remaining(state.round()) >= 2
    {
        moves.extend(
            double_moves(board, state, colour, &player.tickets, &singles)
                .into_iter()
                .map(Move::Double),
        );
    }

    if player.is_tracker() && singles.is_empty() {
        moves.insert(Move::pass(colour));
    }

    tracing::debug!(%colour, count = moves.len(), "generated legal moves");
    moves
}

/// Single ticket moves from `from`, paid out of `tickets`.
///
/// May contain duplicates when parallel edges share a ticket kind.
pub fn single_moves(
    board: &dyn Board,
    state: &GameState,
    colour: PlayerColour,
    from: Location,
    tickets: &Tickets,
) -> Vec<TicketMove> {
    let mut moves = Vec::new();

    for edge in board.edges_from(from) {
        if state.is_occupied(edge.destination) {
            continue;
        }

        let required = Ticket::from_transport(edge.transport);
        if tickets.has(required) {
            moves.push(TicketMove::new(colour, required, edge.destination));
        }
        if required != Ticket::Secret && tickets.has(Ticket::Secret) {
            moves.push(TicketMove::new(colour, Ticket::Secret, edge.destination));
        }
    }

    moves
}

/// Double moves built on the given first legs.
fn double_moves(
    board: &dyn Board,
    state: &GameState,
    colour: PlayerColour,
    tickets: &Tickets,
    first_legs: &[TicketMove],
) -> Vec<DoubleMove> {
    let mut moves = Vec::new();

    for &first in first_legs {
        let mut remaining = *tickets;
        remaining.spend(first.ticket);

        for second in single_moves(board, state, colour, first.destination, &remaining) {
            moves.push(DoubleMove::new(colour, first, second));
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TransportGraph;
    use crate::core::{PlayerConfig, RoundSchedule, Transport};

    const BLACK: PlayerColour = PlayerColour::Black;
    const BLUE: PlayerColour = PlayerColour::Blue;

    fn fugitive(at: u32) -> PlayerConfig {
        PlayerConfig::new(BLACK, Location(at))
            .with_ticket(Ticket::Taxi, 1)
            .with_ticket(Ticket::Bus, 0)
            .with_ticket(Ticket::Underground, 0)
            .with_ticket(Ticket::Secret, 0)
            .with_ticket(Ticket::Double, 0)
    }

    fn tracker(colour: PlayerColour, at: u32, taxi: u32) -> PlayerConfig {
        PlayerConfig::new(colour, Location(at))
            .with_ticket(Ticket::Taxi, taxi)
            .with_ticket(Ticket::Bus, 0)
            .with_ticket(Ticket::Underground, 0)
    }

    fn state(
        board: &TransportGraph,
        rounds: usize,
        fugitive: PlayerConfig,
        trackers: &[PlayerConfig],
    ) -> GameState {
        GameState::from_config(RoundSchedule::new(vec![false; rounds]), board, &fugitive, trackers)
            .unwrap()
    }

    #[test]
    fn test_single_moves_skip_tracker_nodes() {
        let board = TransportGraph::cycle(4, Transport::Taxi);
        let state = state(&board, 3, fugitive(1), &[tracker(BLUE, 2, 1)]);

        let moves = legal_moves(&board, &state, BLACK);
        assert_eq!(moves.len(), 1);
        assert!(moves.contains(&Move::ticket(BLACK, Ticket::Taxi, Location(4))));
    }

    #[test]
    fn test_secret_offered_alongside_transport_ticket() {
        let board = TransportGraph::from_edges([(1, 2, Transport::Bus)]);
        let fugitive = fugitive(1).with_ticket(Ticket::Bus, 1).with_ticket(Ticket::Secret, 1);
        let state = state(&board, 3, fugitive, &[tracker(BLUE, 2, 0)]);

        // Node 2 is occupied, so nothing is legal.
        assert!(legal_moves(&board, &state, BLACK).is_empty());

        let board = TransportGraph::from_edges([(1, 2, Transport::Bus), (3, 4, Transport::Taxi)]);
        let fugitive = self::fugitive(1)
            .with_ticket(Ticket::Bus, 1)
            .with_ticket(Ticket::Secret, 1);
        let state = self::state(&board, 3, fugitive, &[tracker(BLUE, 3, 1)]);

        let moves = legal_moves(&board, &state, BLACK);
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Move::ticket(BLACK, Ticket::Bus, Location(2))));
        assert!(moves.contains(&Move::ticket(BLACK, Ticket::Secret, Location(2))));
    }

    #[test]
    fn test_ferry_requires_secret() {
        let board = TransportGraph::from_edges([(1, 2, Transport::Ferry), (3, 4, Transport::Taxi)]);
        let state1 = state(&board, 3, fugitive(1), &[tracker(BLUE, 3, 1)]);
        assert!(legal_moves(&board, &state1, BLACK).is_empty());

        let state2 = state(
            &board,
            3,
            fugitive(1).with_ticket(Ticket::Secret, 1),
            &[tracker(BLUE, 3, 1)],
        );
        let moves = legal_moves(&board, &state2, BLACK);
        assert_eq!(moves.len(), 1);
        assert!(moves.contains(&Move::ticket(BLACK, Ticket::Secret, Location(2))));
    }

    #[test]
    fn test_missing_ticket_blocks_edge() {
        let board = TransportGraph::from_edges([
            (1, 2, Transport::Underground),
            (1, 3, Transport::Taxi),
            (5, 6, Transport::Taxi),
        ]);
        let state = state(&board, 3, fugitive(1), &[tracker(BLUE, 5, 1)]);

        let moves = legal_moves(&board, &state, BLACK);
        assert_eq!(moves.len(), 1);
        assert!(moves.contains(&Move::ticket(BLACK, Ticket::Taxi, Location(3))));
    }

    #[test]
    fn test_double_moves_generated() {
        let board = TransportGraph::cycle(6, Transport::Taxi);
        let fugitive = fugitive(1)
            .with_ticket(Ticket::Taxi, 2)
            .with_ticket(Ticket::Double, 1);
        let state = state(&board, 3, fugitive, &[tracker(BLUE, 4, 1)]);

        let moves = legal_moves(&board, &state, BLACK);
        let doubles: Vec<_> = moves.iter().filter(|m| m.is_double()).collect();

        // 1 -> 2 -> {1, 3} and 1 -> 6 -> {1, 5}
        assert_eq!(doubles.len(), 4);
        let leg = |to| TicketMove::new(BLACK, Ticket::Taxi, Location(to));
        assert!(moves.contains(&Move::double(BLACK, leg(2), leg(1))));
        assert!(moves.contains(&Move::double(BLACK, leg(6), leg(5))));
    }

    #[test]
    fn test_double_second_leg_needs_remaining_ticket() {
        let board = TransportGraph::cycle(6, Transport::Taxi);
        let fugitive = fugitive(1).with_ticket(Ticket::Double, 1);
        let state = state(&board, 3, fugitive, &[tracker(BLUE, 4, 1)]);

        let moves = legal_moves(&board, &state, BLACK);
        assert!(moves.iter().all(|m| !m.is_double()));
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn test_double_second_leg_avoids_trackers() {
        let board = TransportGraph::cycle(4, Transport::Taxi);
        let fugitive = fugitive(1)
            .with_ticket(Ticket::Taxi, 2)
            .with_ticket(Ticket::Double, 1);
        let state = state(&board, 3, fugitive, &[tracker(BLUE, 3, 1)]);

        let moves = legal_moves(&board, &state, BLACK);
        for mv in &moves {
            if let Move::Double(d) = mv {
                assert_ne!(d.second.destination, Location(3));
            }
        }
        // 1 -> 2 -> 1 and 1 -> 4 -> 1
        assert_eq!(moves.iter().filter(|m| m.is_double()).count(), 2);
    }

    #[test]
    fn test_double_requires_two_rounds_left() {
        let board = TransportGraph::cycle(6, Transport::Taxi);
        let fugitive = fugitive(1)
            .with_ticket(Ticket::Taxi, 2)
            .with_ticket(Ticket::Double, 1);
        let state = state(&board, 1, fugitive, &[tracker(BLUE, 4, 1)]);

        let moves = legal_moves(&board, &state, BLACK);
        assert!(moves.iter().all(|m| !m.is_double()));
    }

    #[test]
    fn test_tracker_moves_never_secret_or_double() {
        let board = TransportGraph::cycle(6, Transport::Taxi);
        let state = state(&board, 3, fugitive(1), &[tracker(BLUE, 4, 3)]);

        let moves = legal_moves(&board, &state, BLUE);
        assert_eq!(moves.len(), 2);
        for mv in &moves {
            assert!(!mv.is_double());
            assert!(!mv.tickets().contains(&Ticket::Secret));
        }
    }

    #[test]
    fn test_tracker_may_move_onto_fugitive() {
        let board = TransportGraph::cycle(4, Transport::Taxi);
        let state = state(&board, 3, fugitive(1), &[tracker(BLUE, 2, 1)]);

        let moves = legal_moves(&board, &state, BLUE);
        assert!(moves.contains(&Move::ticket(BLUE, Ticket::Taxi, Location(1))));
    }

    #[test]
    fn test_tracker_blocked_by_tracker() {
        let board = TransportGraph::from_edges([(1, 2, Transport::Taxi), (2, 3, Transport::Taxi)]);
        let state = state(
            &board,
            3,
            fugitive(1),
            &[tracker(BLUE, 3, 1), tracker(PlayerColour::Red, 2, 1)],
        );

        let moves = legal_moves(&board, &state, BLUE);
        assert_eq!(moves.len(), 1);
        assert!(moves.contains(&Move::pass(BLUE)));
    }

    #[test]
    fn test_ticketless_tracker_passes() {
        let board = TransportGraph::cycle(4, Transport::Taxi);
        let state = state(&board, 3, fugitive(1), &[tracker(BLUE, 3, 0)]);

        let moves = legal_moves(&board, &state, BLUE);
        assert_eq!(moves.len(), 1);
        assert!(moves.contains(&Move::pass(BLUE)));
    }

    #[test]
    fn test_fugitive_never_passes() {
        let board = TransportGraph::from_edges([(1, 2, Transport::Taxi), (3, 4, Transport::Taxi)]);
        let state = state(&board, 3, fugitive(1), &[tracker(BLUE, 2, 1)]);

        assert!(legal_moves(&board, &state, BLACK).is_empty());
    }

    #[test]
    fn test_unknown_colour() {
        let board = TransportGraph::cycle(4, Transport::Taxi);
        let state = state(&board, 3, fugitive(1), &[tracker(BLUE, 3, 1)]);

        assert!(legal_moves(&board, &state, PlayerColour::Yellow).is_empty());
    }
}
