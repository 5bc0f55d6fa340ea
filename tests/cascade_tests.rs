use anipang::core::items::{self, ItemEffect};
use anipang::core::matcher::unique_positions;
use anipang::core::{find_matches, has_match, resolve, try_swap, Board, GameRng, SwapOutcome};
use anipang::types::{ItemKind, Pos, SCORE_PER_CELL};

fn latin_5x5() -> Board {
    Board::from_rows(&["01234", "12340", "23401", "34012", "40123"]).unwrap()
}

#[test]
fn basic_row_match_found() {
    let board = Board::from_rows(&["000", "121", "212"]).unwrap();
    let matches = find_matches(&board);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].len, 3);
    assert_eq!(
        matches[0].positions().collect::<Vec<_>>(),
        vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)]
    );
}

#[test]
fn four_in_a_row_is_one_match() {
    let board = Board::from_rows(&["1111", "2323", "3232", "2323"]).unwrap();
    let matches = find_matches(&board);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].len, 4);
}

#[test]
fn every_round_scores_unique_cells() {
    for seed in 0..30 {
        let mut board = Board::from_rows(&["31345", "11102", "31354", "20512", "45023"]).unwrap();
        let mut rng = GameRng::new(seed);
        let expected_first = unique_positions(&find_matches(&board)).len();
        let res = resolve(&mut board, &mut rng);

        assert_eq!(res.rounds[0].cleared.len(), expected_first);
        for round in &res.rounds {
            assert_eq!(round.score, round.cleared.len() as u32 * SCORE_PER_CELL);
        }
        assert_eq!(
            res.total_score,
            res.rounds.iter().map(|r| r.score).sum::<u32>()
        );
    }
}

#[test]
fn resolved_board_has_no_match_and_no_holes() {
    for seed in 0..50 {
        let mut board = Board::from_rows(&["31345", "11102", "31354", "20512", "45023"]).unwrap();
        let mut rng = GameRng::new(seed);
        resolve(&mut board, &mut rng);
        assert!(!has_match(&board), "seed {}", seed);
        assert_eq!(board.count_empty(), 0);
        assert!(board.is_settled());
    }
}

#[test]
fn chain_numbers_are_sequential() {
    for seed in 0..30 {
        let mut board = Board::from_rows(&["31345", "11102", "31354", "20512", "45023"]).unwrap();
        let res = resolve(&mut board, &mut GameRng::new(seed));
        for (i, round) in res.rounds.iter().enumerate() {
            assert_eq!(round.chain, i as u32 + 1);
        }
    }
}

#[test]
fn rejected_swap_restores_board() {
    let mut board = latin_5x5();
    let before = board.clone();
    let out = try_swap(&mut board, Pos::new(0, 0), Pos::new(0, 1), &mut GameRng::new(1));
    assert!(!out.is_accepted());
    assert_eq!(board, before);
}

#[test]
fn accepted_swap_is_deterministic() {
    let rows = ["1231", "2310", "0023", "3123"];
    let mut a = Board::from_rows(&rows).unwrap();
    let mut b = Board::from_rows(&rows).unwrap();
    let oa = try_swap(&mut a, Pos::new(1, 3), Pos::new(2, 2), &mut GameRng::new(4));
    let ob = try_swap(&mut b, Pos::new(1, 3), Pos::new(2, 2), &mut GameRng::new(4));
    assert!(matches!(oa, SwapOutcome::Accepted(_)));
    assert_eq!(oa, ob);
    assert_eq!(a, b);
}

#[test]
fn rainbow_with_five_cells_awards_750() {
    let mut board = latin_5x5();
    let mut rng = GameRng::new(2);
    let effect = items::apply(ItemKind::Rainbow, &mut board, Some(Pos::new(0, 0)), &mut rng);
    let Some(ItemEffect::Cleared(res)) = effect else {
        panic!("rainbow did not clear: {:?}", effect);
    };
    assert_eq!(res.rounds[0].cleared.len(), 5);
    assert_eq!(res.rounds[0].score, 750);
    for round in &res.rounds[1..] {
        assert_eq!(round.score, round.cleared.len() as u32 * SCORE_PER_CELL);
    }
}

#[test]
fn bomb_at_corner_clears_two_by_two() {
    let mut board = latin_5x5();
    let mut rng = GameRng::new(2);
    let Some(ItemEffect::Cleared(res)) =
        items::apply(ItemKind::Bomb, &mut board, Some(Pos::new(0, 0)), &mut rng)
    else {
        panic!("bomb did not clear");
    };
    assert_eq!(
        res.rounds[0].cleared,
        vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 0), Pos::new(1, 1)]
    );
    assert_eq!(res.rounds[0].score, 400);
}

#[test]
fn lightning_clears_a_row() {
    let mut board = latin_5x5();
    let Some(ItemEffect::Cleared(res)) = items::apply(
        ItemKind::Lightning,
        &mut board,
        Some(Pos::new(2, 3)),
        &mut GameRng::new(8),
    ) else {
        panic!("lightning did not clear");
    };
    let cleared = &res.rounds[0].cleared;
    assert_eq!(cleared.len(), 5);
    assert!(cleared.iter().all(|p| p.row == 2));
}

#[test]
fn shuffle_leaves_new_matches_on_the_board() {
    let (board, effect) = (0..100)
        .map(|seed| {
            let mut board = latin_5x5();
            let effect = items::apply(ItemKind::Shuffle, &mut board, None, &mut GameRng::new(seed));
            (board, effect)
        })
        .find(|(board, _)| has_match(board))
        .expect("no shuffle produced a match");

    assert_eq!(effect, Some(ItemEffect::Shuffled));
    assert_eq!(board.count_empty(), 0);
    assert!(!find_matches(&board).is_empty());
}

#[test]
fn items_and_cascades_keep_obstacles_in_place() {
    let obstacles = [Pos::new(0, 3), Pos::new(2, 5), Pos::new(3, 4), Pos::new(6, 1)];
    for seed in 0..100 {
        let mut rng = GameRng::new(seed);
        let mut board = Board::create(8, 6, &obstacles, &mut rng);
        let check = |board: &Board, what: &str| {
            assert!(!has_match(board), "seed {} {}: match left", seed, what);
            assert!(board.is_settled(), "seed {} {}: hole under an animal", seed, what);
            assert_eq!(board.count_empty(), 0, "seed {} {}", seed, what);
            assert_eq!(board.obstacles(), obstacles.to_vec(), "seed {} {}", seed, what);
        };

        let lightning = items::apply(ItemKind::Lightning, &mut board, Some(Pos::new(3, 0)), &mut rng);
        assert!(matches!(lightning, Some(ItemEffect::Cleared(_))));
        check(&board, "lightning");

        let bomb = items::apply(ItemKind::Bomb, &mut board, Some(Pos::new(2, 4)), &mut rng);
        assert!(matches!(bomb, Some(ItemEffect::Cleared(_))));
        check(&board, "bomb");

        if let Some(hint) = items::find_hint(&board) {
            let out = try_swap(&mut board, hint.from, hint.to, &mut rng);
            assert!(out.is_accepted());
            check(&board, "swap");
        }

        resolve(&mut board, &mut rng);
        check(&board, "resolve");
    }
}

#[test]
fn hint_points_at_a_matching_swap() {
    let board = Board::from_rows(&["1231", "2310", "0023", "3123"]).unwrap();
    let hint = items::find_hint(&board).unwrap();
    let mut scratch = board.clone();
    scratch.swap(hint.from, hint.to);
    assert!(has_match(&scratch));
    assert!(hint.from.is_adjacent(hint.to));
}
