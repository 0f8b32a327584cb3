use super::*;

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn moves_of(board: &Board, at: &str) -> SquareSet {
    let pc = board.piece_at(sq(at)).unwrap();
    pseudo_legal_moves(&pc, board)
}

#[test]
fn test_startpos_pawn_and_knight_moves() {
    let b = Board::standard();
    // Pawn on e2 can advance one or two
    let e2 = moves_of(&b, "e2");
    assert_eq!(e2.len(), 2);
    assert!(e2.contains(sq("e3")));
    assert!(e2.contains(sq("e4")));

    // Knight on b1 jumps to a3 or c3
    let b1 = moves_of(&b, "b1");
    assert_eq!(b1.len(), 2);
    assert!(b1.contains(sq("a3")));
    assert!(b1.contains(sq("c3")));

    // Boxed-in pieces have nothing
    assert!(moves_of(&b, "a1").is_empty());
    assert!(moves_of(&b, "c1").is_empty());
    assert!(moves_of(&b, "d1").is_empty());
    assert!(moves_of(&b, "e1").is_empty());
}

#[test]
fn test_black_pawn_moves_down() {
    let b = Board::standard();
    let e7 = moves_of(&b, "e7");
    assert!(e7.contains(sq("e6")));
    assert!(e7.contains(sq("e5")));
}

#[test]
fn test_pawn_double_step_blocked() {
    let mut b = Board::empty();
    b.place(PieceKind::Pawn, Team::White, sq("d2"));
    b.place(PieceKind::Knight, Team::Black, sq("d4"));
    let d2 = moves_of(&b, "d2");
    assert_eq!(d2.len(), 1);
    assert!(d2.contains(sq("d3")));

    // A piece directly in front blocks both steps
    b.place(PieceKind::Knight, Team::White, sq("d3"));
    assert!(moves_of(&b, "d2").is_empty());
}

#[test]
fn test_pawn_captures_only_enemies_diagonally() {
    let mut b = Board::empty();
    b.place(PieceKind::Pawn, Team::White, sq("e4"));
    b.place(PieceKind::Pawn, Team::Black, sq("d5"));
    b.place(PieceKind::Pawn, Team::White, sq("f5"));
    b.place(PieceKind::Pawn, Team::Black, sq("e5"));
    let e4 = moves_of(&b, "e4");
    assert_eq!(e4.len(), 1);
    assert!(e4.contains(sq("d5")));
}

#[test]
fn test_knight_in_corner() {
    let mut b = Board::empty();
    b.place(PieceKind::Knight, Team::White, sq("a1"));
    b.place(PieceKind::Pawn, Team::White, sq("c2"));
    let a1 = moves_of(&b, "a1");
    assert_eq!(a1.len(), 1);
    assert!(a1.contains(sq("b3")));
}

#[test]
fn test_knight_in_center() {
    let mut b = Board::empty();
    b.place(PieceKind::Knight, Team::Black, sq("e4"));
    assert_eq!(moves_of(&b, "e4").len(), 8);
}

#[test]
fn test_bishop_rays() {
    let mut b = Board::empty();
    b.place(PieceKind::Bishop, Team::White, sq("e4"));
    assert_eq!(moves_of(&b, "e4").len(), 13);

    // Enemy blocker is capturable, friendly blocker is not, nothing beyond either
    b.place(PieceKind::Pawn, Team::Black, sq("g6"));
    b.place(PieceKind::Pawn, Team::White, sq("c2"));
    let e4 = moves_of(&b, "e4");
    assert!(e4.contains(sq("f5")));
    assert!(e4.contains(sq("g6")));
    assert!(!e4.contains(sq("h7")));
    assert!(e4.contains(sq("d3")));
    assert!(!e4.contains(sq("c2")));
    assert!(!e4.contains(sq("b1")));
}

#[test]
fn test_rook_rays_with_blockers() {
    let mut b = Board::empty();
    b.place(PieceKind::Rook, Team::White, sq("a1"));
    b.place(PieceKind::Pawn, Team::Black, sq("a4"));
    let a1 = moves_of(&b, "a1");
    assert!(a1.contains(sq("a2")));
    assert!(a1.contains(sq("a3")));
    assert!(a1.contains(sq("a4")));
    assert!(!a1.contains(sq("a5")));
    assert!(a1.contains(sq("b1")));
    assert!(a1.contains(sq("h1")));
    assert_eq!(a1.len(), 10);
}

#[test]
fn test_queen_is_rook_plus_bishop() {
    let mut b = Board::empty();
    b.place(PieceKind::Queen, Team::White, sq("d4"));
    assert_eq!(moves_of(&b, "d4").len(), 27);
}

#[test]
fn test_king_neighbours() {
    let mut b = Board::empty();
    b.place(PieceKind::King, Team::White, sq("a1"));
    b.place(PieceKind::Pawn, Team::White, sq("a2"));
    b.place(PieceKind::Rook, Team::Black, sq("b2"));
    let a1 = moves_of(&b, "a1");
    assert_eq!(a1.len(), 2);
    assert!(a1.contains(sq("b1")));
    assert!(a1.contains(sq("b2")));
}

#[test]
fn test_attacked_squares_union() {
    let mut b = Board::empty();
    b.place(PieceKind::Rook, Team::Black, sq("h8"));
    b.place(PieceKind::Knight, Team::Black, sq("b8"));
    let attacked = attacked_squares(Team::Black, &b);
    assert!(attacked.contains(sq("h1")));
    assert!(attacked.contains(sq("c8")));
    assert!(attacked.contains(sq("c6")));
    assert!(!attacked.contains(sq("a8")));
    assert!(attacked_squares(Team::White, &b).is_empty());
}
