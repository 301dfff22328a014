#[cfg(test)]
mod test {
    use Direction::*;
    use crate::core::*;
    use crate::levels;
    use crate::models::DragCursor;
    use crate::test::test_util::{field_from, pos, GameTestState};

    /// Square cat: head top left, tail bottom left, so head and tail touch.
    fn square_cat() -> GameTestState {
        let mut field = field_from(r#"
####
#  #
#  #
####
"#);
        field
            .lay_chain(1, &[pos(1, 1), pos(1, 2), pos(2, 2), pos(2, 1)])
            .unwrap();
        GameTestState::from_field(field)
    }

    #[test]
    fn when_head_dragged_into_empty_cat_slithers() {
        let mut game = GameTestState::new(r#"
# Aaa#
"#);
        assert_eq!(game.game.move_count(), 0);

        let kind = game.assert_drag(pos(0, 2), pos(0, 1));

        assert_eq!(kind, MoveKind::Slither);
        assert_eq!(game.game.move_count(), 1);
        game.assert_matches(r#"
#Aaa #
"#);
    }

    #[test]
    fn when_cat_slithers_links_match_a_freshly_laid_cat() {
        let mut game = GameTestState::new(r#"
#####
#   #
#Aaa#
#####
"#);
        game.assert_drags(pos(2, 1), &[Up, Right]);
        game.assert_matches(r#"
#####
#aA #
#a  #
#####
"#);

        let mut expected = game.game.field().clone();
        expected.lay_chain(1, &[pos(1, 2), pos(1, 1), pos(2, 1)]).unwrap();
        for cell in [pos(1, 2), pos(1, 1)] {
            assert_eq!(game.game.field()[cell], expected[cell], "segment at {:?}", cell);
        }

        // the tail keeps pointing at the cell it was pulled out of
        let tail = game.game.field()[pos(2, 1)];
        assert_eq!(tail.foreground_type, ForegroundType::CatTail);
        assert_eq!(tail.head_direction, Up);
        assert_eq!(tail.tail_direction, Right);
        assert_eq!(game.game.field().validate_chains(), Ok(1));
    }

    #[test]
    fn when_head_moves_it_faces_the_way_it_went() {
        let mut game = GameTestState::new(r#"
#####
#   #
#Aaa#
#####
"#);
        game.assert_drag(pos(2, 1), pos(1, 1));

        let head = game.game.field()[pos(1, 1)];
        assert_eq!(head.foreground_type, ForegroundType::CatHead);
        assert_eq!(head.head_direction, Up);
        assert_eq!(head.tail_direction, Down);

        let body = game.game.field()[pos(2, 1)];
        assert_eq!(body.head_direction, Up);
        assert_eq!(body.tail_direction, Right);
    }

    #[test]
    fn when_tail_dragged_cat_backs_up() {
        let mut game = GameTestState::new(r#"
#Aaa #
"#);
        game.assert_drag(pos(0, 3), pos(0, 4));
        game.assert_matches(r#"
# Aaa#
"#);

        let tail = game.game.field()[pos(0, 4)];
        assert_eq!(tail.foreground_type, ForegroundType::CatTail);
        assert_eq!(tail.tail_direction, Right);
        assert_eq!(tail.head_direction, Left);
        assert_eq!(game.game.move_count(), 1);
    }

    #[test]
    fn when_vacated_cell_is_empty_with_no_id() {
        let mut game = GameTestState::new(r#"
# Aa#
"#);
        game.assert_drag(pos(0, 2), pos(0, 1));

        let vacated = game.game.field()[pos(0, 3)];
        assert_eq!(vacated.foreground_type, ForegroundType::Empty);
        assert_eq!(vacated.foreground_id, 0);
    }

    #[test]
    fn when_head_dragged_onto_own_tail_cat_rotates() {
        let mut game = square_cat();

        let kind = game.assert_drag(pos(1, 1), pos(2, 1));

        assert_eq!(kind, MoveKind::Loop);
        assert_eq!(game.game.move_count(), 1);
        game.assert_matches(r#"
####
#aa#
#Aa#
####
"#);
        assert_eq!(
            trace_chain(game.game.field(), pos(2, 1), ChainEnd::Head).unwrap(),
            vec![pos(2, 1), pos(1, 1), pos(1, 2), pos(2, 2)]
        );
    }

    #[test]
    fn when_tail_dragged_onto_own_head_cat_rotates_back() {
        let mut game = square_cat();

        game.assert_drag(pos(2, 1), pos(1, 1));

        game.assert_matches(r#"
####
#aA#
#aa#
####
"#);
        assert_eq!(
            trace_chain(game.game.field(), pos(1, 2), ChainEnd::Head).unwrap(),
            vec![pos(1, 2), pos(2, 2), pos(2, 1), pos(1, 1)]
        );
    }

    #[test]
    fn when_cat_circles_four_times_it_is_back_where_it_started() {
        let mut game = square_cat();
        let start = game.game.field().clone();

        let mut head = pos(1, 1);
        for next in [pos(2, 1), pos(2, 2), pos(1, 2), pos(1, 1)] {
            game.assert_drag(head, next);
            head = next;
        }

        assert_eq!(game.game.move_count(), 4);
        assert_eq!(render(&start), game.game_to_string());
    }

    fn render(field: &Field) -> String {
        crate::console_interface::render_field_to_string(field).trim_matches('\n').into()
    }

    #[test]
    fn when_dragged_backwards_onto_own_tail_is_rejected() {
        let mut game = GameTestState::new(r#"
# Aa #
"#);
        game.assert_rejected(pos(0, 2), pos(0, 3), Rejection::Reversal);
        game.assert_rejected(pos(0, 3), pos(0, 2), Rejection::Reversal);
    }

    #[test]
    fn when_dragged_backwards_vertically_is_rejected() {
        let mut head_on_top = GameTestState::new(r#"
# #
#A#
#a#
# #
"#);
        head_on_top.assert_rejected(pos(1, 1), pos(2, 1), Rejection::Reversal);
        head_on_top.assert_rejected(pos(2, 1), pos(1, 1), Rejection::Reversal);

        let mut tail_on_top = GameTestState::new(r#"
# #
#a#
#A#
# #
"#);
        tail_on_top.assert_rejected(pos(2, 1), pos(1, 1), Rejection::Reversal);
        tail_on_top.assert_rejected(pos(1, 1), pos(2, 1), Rejection::Reversal);
    }

    #[test]
    fn when_body_dragged_is_rejected() {
        let mut game = GameTestState::new(r#"
#    #
#Aaa #
"#);
        game.assert_rejected(pos(1, 2), pos(0, 2), Rejection::NotAnEndpoint);
        game.assert_rejected(pos(0, 1), pos(0, 2), Rejection::NotAnEndpoint);
        game.assert_rejected(pos(0, 0), pos(0, 1), Rejection::NotAnEndpoint);
    }

    #[test]
    fn when_not_adjacent_is_rejected() {
        let mut game = GameTestState::new(r#"
#     #
#  Aa #
#     #
"#);
        game.assert_rejected(pos(1, 3), pos(0, 2), Rejection::NotAdjacent);
        game.assert_rejected(pos(1, 3), pos(1, 1), Rejection::NotAdjacent);
        game.assert_rejected(pos(1, 3), pos(1, 3), Rejection::NotAdjacent);
        game.assert_rejected(pos(1, 4), pos(2, 5), Rejection::NotAdjacent);
    }

    #[test]
    fn when_blocked_is_rejected() {
        let mut game = GameTestState::new(r#"
#Aaa#
#Bb #
"#);
        // wall
        game.assert_rejected(pos(0, 1), pos(0, 0), Rejection::Blocked);
        // another cat
        game.assert_rejected(pos(0, 1), pos(1, 1), Rejection::Blocked);
        game.assert_rejected(pos(1, 2), pos(0, 2), Rejection::Blocked);
        // its own body
        game.assert_rejected(pos(0, 3), pos(0, 2), Rejection::Blocked);
    }

    #[test]
    fn when_off_grid_is_rejected() {
        let mut game = GameTestState::new(r#"
Aa
"#);
        game.assert_rejected(pos(0, 0), pos(0, -1), Rejection::OutOfBounds);
        game.assert_rejected(pos(0, 0), pos(-1, 0), Rejection::OutOfBounds);
        game.assert_rejected(pos(5, 5), pos(5, 6), Rejection::OutOfBounds);
    }

    #[test]
    fn when_chain_loops_on_itself_move_fails_without_changes() {
        let mut field = Field::filled(4, 1, Tile::floor());
        field[pos(0, 1)] = Tile::cat(ForegroundType::CatHead, 1, Left, Right);
        field[pos(0, 2)] = Tile::cat(ForegroundType::CatBody, 1, Left, Right);
        field[pos(0, 3)] = Tile::cat(ForegroundType::CatBody, 1, Right, Left);
        let mut game = Game::new(field.clone());

        let result = game.move_cat(pos(0, 1), pos(0, 0));

        assert_eq!(result, Err(ChainError::TooLong { id: 1, start: pos(0, 1), limit: 4 }));
        assert_eq!(game.field(), &field);
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn when_chain_points_off_grid_move_fails_without_changes() {
        let mut field = Field::filled(3, 1, Tile::floor());
        field[pos(0, 1)] = Tile::cat(ForegroundType::CatHead, 1, Left, Up);
        field[pos(0, 2)] = Tile::cat(ForegroundType::CatTail, 1, Left, Right);
        let mut game = Game::new(field.clone());

        let result = game.move_cat(pos(0, 1), pos(0, 0));

        assert_eq!(result, Err(ChainError::PointsOffGrid { at: pos(0, 1) }));
        assert_eq!(game.field(), &field);
    }

    #[test]
    fn when_first_level_played_cat_reaches_the_exit() {
        let level = levels::find("first-steps").unwrap();
        let mut game = GameTestState { game: level.start().unwrap() };
        game.assert_matches(r#"
#####
#abB#
#ab #
#Ab #
##=##
"#);
        assert!(!game.game.is_won());

        // the decoy moves out of the way, then cat 1 walks out
        game.assert_drag(pos(1, 3), pos(2, 3));
        game.assert_drags(pos(3, 1), &[Right, Down]);

        game.assert_matches(r#"
#####
# bb#
# bB#
#aa #
##A##
"#);
        assert_eq!(game.game.move_count(), 3);
        assert!(game.game.is_won());
    }

    #[test]
    fn when_cursor_not_on_endpoint_it_cannot_grab() {
        let game = GameTestState::new(r#"
#Aaa #
"#);
        let mut cursor = DragCursor::new(pos(0, 2));
        assert!(!cursor.toggle_grab(&game.game));

        cursor.pos = pos(0, 1);
        assert!(cursor.toggle_grab(&game.game));
        assert!(!cursor.toggle_grab(&game.game));
    }

    #[test]
    fn when_cursor_holds_tail_it_drags_the_cat() {
        let mut game = GameTestState::new(r#"
#Aaa #
"#);
        let mut cursor = DragCursor::new(pos(0, 3));
        cursor.toggle_grab(&game.game);

        let outcome = cursor.push(&mut game.game, Right).unwrap();
        assert_eq!(outcome, Some(MoveOutcome::Moved(MoveKind::Slither)));
        assert_eq!(cursor.pos, pos(0, 4));

        let outcome = cursor.push(&mut game.game, Right).unwrap();
        assert_eq!(outcome, Some(MoveOutcome::Rejected(Rejection::Blocked)));
        assert_eq!(cursor.pos, pos(0, 4));
        game.assert_matches(r#"
# Aaa#
"#);
    }

    #[test]
    fn when_cursor_free_it_stays_on_the_board() {
        let mut game = GameTestState::new(r#"
Aa
"#);
        let mut cursor = DragCursor::new(pos(0, 1));
        assert_eq!(cursor.push(&mut game.game, Right).unwrap(), None);
        assert_eq!(cursor.pos, pos(0, 1));
        assert_eq!(cursor.push(&mut game.game, Left).unwrap(), None);
        assert_eq!(cursor.pos, pos(0, 0));
        assert_eq!(game.game.move_count(), 0);
    }
}
