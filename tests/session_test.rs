//! Tests for the human-versus-computer match session.

use tictactoe_duel::{
    Difficulty, GameStatus, MatchSession, MatchSettings, MoveError, Outcome, Player, SessionError,
    best_move,
};

fn hard_session() -> MatchSession {
    MatchSession::new(MatchSettings::new().with_difficulty(Difficulty::Hard))
}

/// Plays one game to the end, with the human seat driven by `human`.
fn play_out(session: &mut MatchSession, mut human: impl FnMut(&MatchSession) -> usize) {
    loop {
        let index = human(session);
        let outcome = session.human_move(index).expect("legal human move");
        if outcome.is_terminal() {
            return;
        }
        let outcome = session.computer_move().expect("computer reply");
        if outcome.is_terminal() {
            return;
        }
    }
}

#[test]
fn test_optimal_against_optimal_is_a_draw() {
    let mut session = hard_session();
    play_out(&mut session, |session| {
        best_move(session.game().board(), Player::X)
            .expect("moves available")
            .to_index()
    });

    assert_eq!(session.game().status(), GameStatus::Draw);
    assert_eq!(session.score().draws(), 1);
    assert_eq!(session.score().player_wins(), 0);
    assert_eq!(session.score().computer_wins(), 0);
}

#[test]
fn test_optimal_computer_never_loses_to_first_open() {
    let mut session = hard_session();
    play_out(&mut session, |session| {
        (0..9)
            .find(|&index| {
                session
                    .game()
                    .board()
                    .squares()
                    .get(index)
                    .is_some_and(|sq| *sq == tictactoe_duel::Square::Empty)
            })
            .expect("open square")
    });

    assert_eq!(session.score().player_wins(), 0);
    assert_eq!(
        session.score().computer_wins() + session.score().draws(),
        1
    );
}

#[test]
fn test_score_survives_game_reset() {
    let mut session = hard_session();
    play_out(&mut session, |session| {
        best_move(session.game().board(), Player::X)
            .expect("moves available")
            .to_index()
    });
    assert_eq!(session.score().draws(), 1);

    session.reset_game();

    // Fresh board, same score.
    assert!(session.game().is_active());
    assert!(session.game().history().is_empty());
    assert_eq!(session.score().draws(), 1);
}

#[test]
fn test_reset_score_clears_everything() {
    let mut session = hard_session();
    play_out(&mut session, |session| {
        best_move(session.game().board(), Player::X)
            .expect("moves available")
            .to_index()
    });

    session.reset_score();

    assert_eq!(session.score().draws(), 0);
    assert_eq!(session.score().player_wins(), 0);
    assert_eq!(session.score().computer_wins(), 0);
    assert!(session.game().is_active());
}

#[test]
fn test_difficulty_change_abandons_game_keeps_score() {
    let mut session = hard_session();
    session.human_move(4).expect("legal move");
    assert_eq!(session.game().history().len(), 1);

    session.set_difficulty(Difficulty::Easy);

    assert_eq!(session.settings().difficulty(), Difficulty::Easy);
    assert!(session.game().history().is_empty());
    assert_eq!(*session.score(), tictactoe_duel::Score::new());
}

#[test]
fn test_computer_refuses_out_of_turn() {
    let mut session = hard_session();
    // X has not moved yet.
    assert_eq!(session.computer_move(), Err(SessionError::NotComputersTurn));

    // After the game ends it refuses as well.
    play_out(&mut session, |session| {
        best_move(session.game().board(), Player::X)
            .expect("moves available")
            .to_index()
    });
    assert_eq!(session.computer_move(), Err(SessionError::NotComputersTurn));
}

#[test]
fn test_human_move_validation() {
    let mut session = hard_session();

    assert_eq!(session.human_move(9), Err(MoveError::OutOfBounds(9)));

    session.human_move(4).expect("legal move");
    session.computer_move().expect("computer reply");
    assert_eq!(
        session.human_move(4),
        Err(MoveError::SquareOccupied(tictactoe_duel::Position::Center))
    );

    // Two human moves in a row: it is O's turn.
    session.human_move(1).expect("legal move");
    assert_eq!(session.human_move(2), Err(MoveError::WrongPlayer(Player::X)));
    session.computer_move().expect("computer reply");
}

#[test]
fn test_outcome_sequence_alternates_seats() {
    let mut session = hard_session();

    let outcome = session.human_move(4).expect("legal move");
    assert_eq!(outcome, Outcome::Continue(Player::O));

    let outcome = session.computer_move().expect("computer reply");
    assert_eq!(outcome, Outcome::Continue(Player::X));
}
