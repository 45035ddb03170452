use std::time::Duration;

use stackfall::game::{Board, Piece, Shape};
use stackfall::{Command, Game, GameConfig, GameState};

fn square() -> Shape {
    Shape::from_rows(vec![vec![1, 1], vec![1, 1]]).unwrap()
}

fn new_game(queue: Vec<Shape>, seed: u64) -> Game {
    let config = GameConfig {
        seed: Some(seed),
        queue,
        ..GameConfig::default()
    };
    Game::new(&config).unwrap()
}

#[test]
fn square_falls_to_the_floor_and_next_piece_spawns() {
    let mut game = new_game(vec![square()], 1);
    assert_eq!((game.current_piece.x, game.current_piece.y), (5, 0));

    for _ in 0..18 {
        game.step(Duration::ZERO, [Command::SoftDrop]);
    }
    assert_eq!(game.current_piece.y, 18);
    assert!(game.board.is_empty());

    game.step(Duration::ZERO, [Command::SoftDrop]);
    let landed: Vec<_> = game.board.occupied_cells().collect();
    assert_eq!(landed, vec![(5, 18), (6, 18), (5, 19), (6, 19)]);
    assert_eq!(game.current_piece.y, 0);
    assert_eq!(game.game_state, GameState::Playing);
}

#[test]
fn gravity_alone_lands_the_piece() {
    let mut game = new_game(vec![square()], 2);
    let frame = Duration::from_millis(16);

    // 1000ms interval, strictly exceeded on the 63rd frame
    for _ in 0..62 {
        game.tick(frame);
    }
    assert_eq!(game.current_piece.y, 0);
    game.tick(frame);
    assert_eq!(game.current_piece.y, 1);

    while game.board.is_empty() {
        game.tick(Duration::from_millis(1001));
    }
    assert_eq!(game.board.occupied_cells().count(), 4);
    assert_eq!(game.current_piece.y, 0);
}

#[test]
fn filled_top_row_ends_the_game_on_spawn() {
    let mut game = new_game(vec![square(), square()], 3);
    for x in 0..game.board.width() {
        game.board.set(x, 0, 1);
    }
    game.spawn_piece();

    assert_eq!(game.game_state, GameState::GameOver);
    assert!(game.board.is_empty());

    let piece = game.current_piece.clone();
    game.step(Duration::from_secs(10), [Command::SoftDrop, Command::MoveLeft]);
    assert_eq!(game.current_piece, piece);
    assert!(game.board.is_empty());
}

#[test]
fn stacking_squares_eventually_ends_the_game() {
    let mut game = new_game(vec![square(); 11], 4);
    let mut landings = 0;
    while !game.is_over() {
        if !game.drop_piece() {
            landings += 1;
        }
        assert!(landings <= 11, "game should be over by now");
    }
    // Ten squares fill rows 0..20 of columns 5-6, the eleventh cannot spawn
    assert_eq!(landings, 10);
    assert!(game.board.is_empty());
}

#[test]
fn pieces_never_overlap_after_any_command() {
    let mut game = new_game(Vec::new(), 5);
    let script = [
        Command::MoveLeft,
        Command::Rotate,
        Command::MoveLeft,
        Command::MoveLeft,
        Command::SoftDrop,
        Command::MoveRight,
        Command::Rotate,
        Command::MoveRight,
        Command::MoveRight,
        Command::MoveRight,
        Command::SoftDrop,
        Command::SoftDrop,
    ];

    for round in 0..400 {
        if game.is_over() {
            break;
        }
        let command = script[round % script.len()];
        game.step(Duration::from_millis(70), [command]);
        if !game.is_over() {
            assert!(!game.board.collides(&game.current_piece), "round {round}");
        }
    }
}

#[test]
fn spelled_word_spawns_letters_in_order() {
    let config = GameConfig {
        seed: Some(6),
        ..GameConfig::default()
    }
    .spell("AXE")
    .unwrap();
    let mut game = Game::new(&config).unwrap();

    for letter in ['A', 'X', 'E'] {
        assert_eq!(game.current_piece.shape, Shape::glyph(letter).unwrap());
        while game.drop_piece() {}
    }
    assert_eq!(game.queued_shapes(), 0);
    assert!(Shape::palette().contains(&game.current_piece.shape));
}

#[test]
fn collision_ignores_rows_above_the_board() {
    let board = Board::new(12, 20);
    let bar = Shape::from_rows(vec![vec![1, 1, 1, 1]]).unwrap();
    assert!(!board.collides(&Piece::new(bar.clone(), -10, -1)));
    assert!(board.collides(&Piece::new(bar, -10, 0)));
}
