use dama::checkers::board::Board;
use dama::checkers::core::{Location, Piece, Player};
use dama::checkers::moves::{Move, Step};
use pretty_assertions::assert_eq;

fn parse(input: &str) -> Board {
    Board::try_from(input).expect("parsing a well-formed board")
}

#[test]
fn parse_starting_position() {
    let board = parse(
        "|- o - o - o - o|\
         |o - o - o - o -|\
         |- o - o - o - o|\
         |- - - - - - - -|\
         |- - - - - - - -|\
         |x - x - x - x -|\
         |- x - x - x - x|\
         |x - x - x - x -|",
    );
    assert_eq!(board, Board::starting());
    assert_eq!(board.at(Location::new(0, 0)), None);
    assert_eq!(board.at(Location::new(0, 1)), Some(Piece::man(Player::Black)));
    assert_eq!(board.at(Location::new(7, 0)), Some(Piece::man(Player::Red)));
    assert_eq!(board.at(Location::new(7, 7)), None);
}

#[test]
fn parse_kings_and_whitespace() {
    let board = parse(
        "|- o - o - o - o|
         |o - o - o - o -|
         |- - - o - O - o|
         |- - - - x - - -|
         |- - - - - - - -|
         |x - x - o - x -|
         |- x - x - x - x|
         |X - x - x - x -|",
    );
    assert_eq!(board.at(Location::new(2, 5)), Some(Piece::king(Player::Black)));
    assert_eq!(board.at(Location::new(7, 0)), Some(Piece::king(Player::Red)));
    assert_eq!(board.at(Location::new(5, 4)), Some(Piece::man(Player::Black)));
}

#[test]
fn render_round_trip() {
    let board = parse(
        "|- o - o - o - o|\
         |o - o - o - o -|\
         |- - - o - O - o|\
         |- - - - x - - -|\
         |- - - - - - - -|\
         |x - x - o - x -|\
         |- x - x - x - x|\
         |X - x - x - x -|",
    );
    let rendered = board.to_string();
    assert_eq!(rendered.lines().count(), 8);
    assert_eq!(rendered.lines().nth(2), Some("|- - - o - O - o|"));
    assert_eq!(Board::try_from(rendered.as_str()).unwrap(), board);
}

#[test]
#[should_panic(expected = "piece glyph should be within \"xXoO\", got 'z'")]
fn unknown_glyph_is_rejected() {
    let _ = Board::try_from(
        "|- o - o - o - o|\
         |o - o - o - o -|\
         |- o - o - o - o|\
         |- - - z - - - -|\
         |- - - - - - - -|\
         |x - x - x - x -|\
         |- x - x - x - x|\
         |x - x - x - x -|",
    )
    .unwrap();
}

#[test]
#[should_panic(expected = "board should have exactly 64 squares, got 63")]
fn too_few_squares_are_rejected() {
    let _ = Board::try_from(
        "|- o - o - o - o|\
         |o - o - o - o -|\
         |- o - o - o - o|\
         |- - - - - - - -|\
         |- - - - - - - -|\
         |x - x - x - x -|\
         |- x - x - x - x|\
         |x - x - x - x|",
    )
    .unwrap();
}

#[test]
#[should_panic(expected = "board should have exactly 64 squares, got more")]
fn too_many_squares_are_rejected() {
    let _ = Board::try_from(
        "|- o - o - o - o|\
         |o - o - o - o -|\
         |- o - o - o - o|\
         |- - - - - - - -|\
         |- - - - - - - -|\
         |x - x - x - x -|\
         |- x - x - x - x|\
         |x - x - x - x - x|",
    )
    .unwrap();
}

#[test]
fn jump_removes_the_captured_piece() {
    let board = parse(
        "|- - - - - - - -|\
         |- - - - - - - -|\
         |- - - - - - - -|\
         |- o - - - - - -|\
         |X - - - - - - -|\
         |- - - - - - - -|\
         |- - - - - - - -|\
         |- - - - - - - -|",
    );
    let jump = Move::Step(Step::jump(
        Location::new(4, 0),
        Location::new(3, 1),
        Location::new(2, 2),
    ));
    let after = board.apply_move(Player::Red, &jump);
    assert_eq!(after.at(Location::new(4, 0)), None);
    assert_eq!(after.at(Location::new(3, 1)), None);
    assert_eq!(after.at(Location::new(2, 2)), Some(Piece::king(Player::Red)));
}

#[test]
fn chain_removes_every_captured_piece() {
    let board = parse(
        "|- - - - - - - -|\
         |- o - - - - - -|\
         |- - - - - - - -|\
         |- o - o - - - -|\
         |X - - - - - - -|\
         |- - - - - - - -|\
         |- - - - - - - -|\
         |- - - - - - - -|",
    );
    let chain = Move::chain(vec![
        Step::jump(Location::new(4, 0), Location::new(3, 1), Location::new(2, 2)),
        Step::jump(Location::new(2, 2), Location::new(1, 1), Location::new(0, 0)),
    ]);
    let after = board.apply_move(Player::Red, &chain);
    assert_eq!(after.at(Location::new(4, 0)), None);
    assert_eq!(after.at(Location::new(3, 1)), None);
    assert_eq!(after.at(Location::new(1, 1)), None);
    assert_eq!(after.at(Location::new(2, 2)), None);
    assert_eq!(after.at(Location::new(0, 0)), Some(Piece::king(Player::Red)));
    // The untouched black man survives.
    assert_eq!(after.at(Location::new(3, 3)), Some(Piece::man(Player::Black)));
}

#[test]
fn black_man_promotes_on_the_back_rank() {
    let board = parse(
        "|- - - - - - - -|\
         |- - - - - - - -|\
         |- - - - - - - -|\
         |- - - - - - - -|\
         |- - - - - - - -|\
         |- - - - - - - -|\
         |- - - - - o - -|\
         |- - - - - - - -|",
    );
    let slide = Move::Step(Step::slide(Location::new(6, 5), Location::new(7, 4)));
    let after = board.apply_move(Player::Black, &slide);
    assert_eq!(after.at(Location::new(6, 5)), None);
    assert_eq!(after.at(Location::new(7, 4)), Some(Piece::king(Player::Black)));
}

#[test]
fn red_man_promotes_when_jumping_onto_the_back_rank() {
    let board = parse(
        "|- - - - - - - -|\
         |- o - - - - - -|\
         |- - x - - - - -|\
         |- - - - - - - -|\
         |- - - - - - - -|\
         |- - - - - - - -|\
         |- - - - - - - -|\
         |- - - - - - - -|",
    );
    let jump = Move::Step(Step::jump(
        Location::new(2, 2),
        Location::new(1, 1),
        Location::new(0, 0),
    ));
    let after = board.apply_move(Player::Red, &jump);
    assert_eq!(after.at(Location::new(0, 0)), Some(Piece::king(Player::Red)));
    assert_eq!(after.at(Location::new(1, 1)), None);
}

#[test]
fn kings_stay_kings_away_from_the_back_rank() {
    let board = parse(
        "|- - - - - - - -|\
         |- - - - - - - -|\
         |- - - O - - - -|\
         |- - - - - - - -|\
         |- - - - - - - -|\
         |- - - - - - - -|\
         |- - - - - - - -|\
         |- - - - - - - -|",
    );
    let slide = Move::Step(Step::slide(Location::new(2, 3), Location::new(1, 2)));
    let after = board.apply_move(Player::Black, &slide);
    assert_eq!(after.at(Location::new(1, 2)), Some(Piece::king(Player::Black)));
}
