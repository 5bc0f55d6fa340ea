use anipang::core::{find_matches, has_match, Board, GameRng};
use anipang::types::{Animal, Cell, Pos, DEFAULT_BOARD_SIZE, DEFAULT_KIND_COUNT, MIN_KIND_COUNT};

#[test]
fn generated_boards_are_full_and_match_free() {
    for seed in 0..200 {
        let mut rng = GameRng::new(seed);
        let board = Board::create(DEFAULT_BOARD_SIZE, DEFAULT_KIND_COUNT, &[], &mut rng);
        assert_eq!(board.count_empty(), 0, "seed {}", seed);
        assert!(!has_match(&board), "seed {} produced a match", seed);
    }
}

#[test]
fn generation_with_few_kinds_still_match_free() {
    for seed in 0..50 {
        let mut rng = GameRng::new(seed);
        let board = Board::create(12, MIN_KIND_COUNT, &[], &mut rng);
        assert!(find_matches(&board).is_empty(), "seed {}", seed);
    }
}

#[test]
fn two_kinds_fall_back_to_tiling() {
    // Two kinds on a 12x12 board essentially never roll match-free
    let mut rng = GameRng::new(1);
    let board = Board::create(12, 2, &[], &mut rng);
    assert!(!has_match(&board));
    assert_eq!(board.count_empty(), 0);
}

#[test]
fn obstacles_survive_generation() {
    let obstacles = [Pos::new(0, 0), Pos::new(3, 4), Pos::new(7, 7)];
    let mut rng = GameRng::new(9);
    let board = Board::create(8, 6, &obstacles, &mut rng);
    assert_eq!(board.obstacles(), obstacles.to_vec());
    assert!(!has_match(&board));
}

#[test]
fn same_seed_same_board() {
    let a = Board::create(8, 6, &[], &mut GameRng::new(77));
    let b = Board::create(8, 6, &[], &mut GameRng::new(77));
    let c = Board::create(8, 6, &[], &mut GameRng::new(78));
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn gravity_leaves_no_holes_under_animals() {
    let mut board = Board::from_rows(&[
        "01.2", //
        ".#.3",
        "2..1",
        "..0.",
    ])
    .unwrap();
    assert!(!board.is_settled());
    assert!(board.apply_gravity());
    assert!(board.is_settled());
    assert_eq!(board.to_rows(), vec![".1..", ".#.2", "0..3", "2.01"]);
}

#[test]
fn gravity_respects_obstacle_segments() {
    let mut board = Board::from_rows(&[
        "0..", //
        "#..",
        "...",
    ])
    .unwrap();
    board.apply_gravity();
    // The animal above the obstacle cannot fall past it
    assert_eq!(board.get(Pos::new(0, 0)), Some(Cell::Animal(Animal(0))));
    assert_eq!(board.get(Pos::new(2, 0)), Some(Cell::Empty));
}

#[test]
fn refill_fills_only_empty_cells() {
    let mut board = Board::from_rows(&["0#.", "1..", "2#0"]).unwrap();
    let mut rng = GameRng::new(3);
    let filled = board.refill(&mut rng);
    assert_eq!(
        filled,
        vec![Pos::new(0, 2), Pos::new(1, 1), Pos::new(1, 2)]
    );
    assert_eq!(board.count_empty(), 0);
    assert_eq!(board.obstacles(), vec![Pos::new(0, 1), Pos::new(2, 1)]);
}
