//! Tests for the terminal game loop.

use negamax_tictactoe::{Outcome, Player as Side};
use negamax_tictactoe_cli::{ComputerPlayer, GameLoop, HumanPlayer, PlayConfig, PlayerKind};

fn run(game: &mut GameLoop) -> (negamax_tictactoe::BoardState, String) {
    let mut out = Vec::new();
    let state = game.run(&mut out).expect("game completes");
    (state, String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn test_computer_vs_computer_is_a_draw() {
    let mut game = GameLoop::new(Box::new(ComputerPlayer::new()), Box::new(ComputerPlayer::new()));
    let (state, output) = run(&mut game);

    assert_eq!(state.outcome(), Some(Outcome::Draw));
    assert_eq!(
        output,
        "Turn for 'Cross' [0-8]: 0\nx . .\n. . .\n. . .\n\
         Turn for 'Circle' [0-8]: 4\nx . .\n. o .\n. . .\n\
         Turn for 'Cross' [0-8]: 1\nx x .\n. o .\n. . .\n\
         Turn for 'Circle' [0-8]: 2\nx x o\n. o .\n. . .\n\
         Turn for 'Cross' [0-8]: 6\nx x o\n. o .\nx . .\n\
         Turn for 'Circle' [0-8]: 3\nx x o\no o .\nx . .\n\
         Turn for 'Cross' [0-8]: 5\nx x o\no o x\nx . .\n\
         Turn for 'Circle' [0-8]: 7\nx x o\no o x\nx o .\n\
         Turn for 'Cross' [0-8]: 8\nx x o\no o x\nx o x\n\
         Game over!\nThe game is tied\n"
    );
}

#[test]
fn test_human_retries_after_invalid_input() {
    let human = HumanPlayer::new("0\nabc\n1\n2\n".as_bytes());
    let mut game = GameLoop::new(Box::new(ComputerPlayer::new()), Box::new(human));
    let (state, output) = run(&mut game);

    assert_eq!(state.outcome(), Some(Outcome::Winner(Side::Cross)));
    assert_eq!(
        output,
        "Turn for 'Cross' [0-8]: 0\nx . .\n. . .\n. . .\n\
         Turn for 'Circle' [0-8]: Invalid move! Try again [0-8]: Invalid move! Try again [0-8]: \
         x o .\n. . .\n. . .\n\
         Turn for 'Cross' [0-8]: 3\nx o .\nx . .\n. . .\n\
         Turn for 'Circle' [0-8]: x o o\nx . .\n. . .\n\
         Turn for 'Cross' [0-8]: 6\nx o o\nx . .\nx . .\n\
         Game over!\nPlayer 'Cross' won\n\n"
    );
}

#[test]
fn test_two_humans_share_input() {
    let config = PlayConfig::new(PlayerKind::Human, PlayerKind::Human);
    let mut game = GameLoop::from_config(&config, "0\n3\n1\n4\n2\n".as_bytes());
    let (state, output) = run(&mut game);

    assert_eq!(state.winner(), Some(Side::Cross));
    assert!(output.ends_with("Game over!\nPlayer 'Cross' won\n\n"));
}

#[test]
fn test_circle_win_is_announced() {
    let config = PlayConfig::new(PlayerKind::Human, PlayerKind::Human);
    let mut game = GameLoop::from_config(&config, "0\n4\n8\n1\n2\nbottom center\n".as_bytes());
    let (state, output) = run(&mut game);

    assert_eq!(state.winner(), Some(Side::Circle));
    assert!(output.ends_with("Player 'Circle' won\n\n"));
}

#[test]
fn test_free_cells_are_listed() {
    let config = PlayConfig::new(PlayerKind::Human, PlayerKind::Human).with_overrides(None, None, true);
    let mut game = GameLoop::from_config(&config, "0\n3\n1\n4\n2\n".as_bytes());
    let (_, output) = run(&mut game);

    assert!(output.starts_with("Free cells: 0 1 2 3 4 5 6 7 8\nTurn for 'Cross' [0-8]: "));
    assert!(output.contains("Free cells: 2 5 6 7 8\n"));
}

#[test]
fn test_input_ending_mid_game_is_an_error() {
    let config = PlayConfig::new(PlayerKind::Human, PlayerKind::Computer);
    let mut game = GameLoop::from_config(&config, "4\n".as_bytes());
    let mut out = Vec::new();
    assert!(game.run(&mut out).is_err());
}
