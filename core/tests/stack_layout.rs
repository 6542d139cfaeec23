use kazuburokku_core::stack::{
    block_extent, cube_cells, cube_offsets, face_cube_index, stack_columns, stack_rows,
    CUBE_GAP, CUBE_SIZE, CUBE_STEP,
};

fn top_row_cells(value: u32) -> Vec<(u32, u32)> {
    let top = stack_rows(value) - 1;
    cube_cells(value)
        .into_iter()
        .filter(|(_, row)| *row == top)
        .collect()
}

#[test]
fn layout_yields_one_distinct_offset_per_cube() {
    for value in 1..=45 {
        let offsets = cube_offsets(value);
        assert_eq!(offsets.len(), value as usize);
        for (i, a) in offsets.iter().enumerate() {
            for b in offsets.iter().skip(i + 1) {
                assert_ne!(a, b, "value {} produced a duplicate offset", value);
            }
        }
    }
}

#[test]
fn layout_is_deterministic() {
    for value in [1, 4, 7, 9, 11, 23, 30, 35] {
        assert_eq!(cube_offsets(value), cube_offsets(value));
        assert_eq!(face_cube_index(value), face_cube_index(value));
    }
}

#[test]
fn small_values_form_single_columns() {
    for value in [1, 2, 3, 5] {
        assert_eq!(stack_columns(value), 1);
        for (col, _) in cube_cells(value) {
            assert_eq!(col, 0);
        }
    }
}

#[test]
fn four_is_a_two_by_two_square() {
    assert_eq!(stack_columns(4), 2);
    assert_eq!(stack_rows(4), 2);
    assert_eq!(cube_cells(4), vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
}

#[test]
fn seven_is_a_single_column() {
    assert_eq!(stack_columns(7), 1);
    assert_eq!(stack_rows(7), 7);
}

#[test]
fn nine_is_a_three_by_three_square() {
    assert_eq!(stack_columns(9), 3);
    assert_eq!(stack_rows(9), 3);
}

#[test]
fn paired_columns_cover_six_through_twenty_nine() {
    for value in [6, 8, 10, 11, 20, 29] {
        assert_eq!(stack_columns(value), 2, "value {}", value);
    }
}

#[test]
fn wide_values_take_a_column_per_ten() {
    assert_eq!(stack_columns(30), 3);
    assert_eq!(stack_columns(35), 3);
    assert_eq!(stack_columns(40), 4);
    assert_eq!(stack_columns(49), 4);
    assert_eq!(stack_columns(100), 10);
}

#[test]
fn eleven_leaves_a_lone_cube_top_left() {
    assert_eq!(stack_columns(11), 2);
    assert_eq!(stack_rows(11), 6);
    let top = top_row_cells(11);
    assert_eq!(top, vec![(0, 5)]);

    // The remainder cube sits at y == 0, in the leftmost column.
    let offsets = cube_offsets(11);
    assert_eq!(offsets[10], (0.0, 0.0));
    for offset in &offsets[..10] {
        assert!(offset.1 > 0.0);
    }
}

#[test]
fn bottom_left_cube_is_index_zero() {
    for value in [2, 4, 9, 11, 35] {
        let rows = stack_rows(value);
        let offsets = cube_offsets(value);
        assert_eq!(offsets[0], (0.0, (rows - 1) as f32 * CUBE_STEP));
    }
}

#[test]
fn face_cube_is_topmost_then_leftmost() {
    assert_eq!(face_cube_index(1), 0);
    assert_eq!(face_cube_index(4), 2);
    assert_eq!(face_cube_index(7), 6);
    assert_eq!(face_cube_index(9), 6);
    assert_eq!(face_cube_index(11), 10);
    assert_eq!(face_cube_index(23), 22);

    for value in 1..=40 {
        let offsets = cube_offsets(value);
        let face = offsets[face_cube_index(value)];
        for offset in &offsets {
            assert!(
                face.1 < offset.1 || (face.1 == offset.1 && face.0 <= offset.0),
                "value {}: face cube is not topmost-then-leftmost",
                value
            );
        }
    }
}

#[test]
fn extent_matches_grid_dimensions() {
    assert_eq!(block_extent(1), (CUBE_SIZE, CUBE_SIZE));
    assert_eq!(
        block_extent(4),
        (CUBE_SIZE * 2.0 + CUBE_GAP, CUBE_SIZE * 2.0 + CUBE_GAP)
    );
    assert_eq!(
        block_extent(7),
        (CUBE_SIZE, CUBE_SIZE * 7.0 + CUBE_GAP * 6.0)
    );
}
