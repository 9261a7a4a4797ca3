use super::*;

#[test]
fn five_rows_match_known_values() {
    let t = generate(5).unwrap();
    assert_eq!(
        t.rows(),
        &[
            vec![1],
            vec![1, 1],
            vec![1, 2, 1],
            vec![1, 3, 3, 1],
            vec![1, 4, 6, 4, 1],
        ]
    );
}

#[test]
fn six_rows_last_row() {
    let t = generate(6).unwrap();
    assert_eq!(t.last_row(), &[1, 5, 10, 10, 5, 1]);
}

#[test]
fn single_row_is_one() {
    let t = generate(1).unwrap();
    assert_eq!(t.len(), 1);
    assert_eq!(t.row(0), Some(&[1u64][..]));
}

#[test]
fn zero_rows_is_invalid_argument() {
    let err = generate(0).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn shape_and_recurrence_hold_for_many_sizes() {
    for rows in 1..=20 {
        let t = generate(rows).unwrap();
        assert_eq!(t.len(), rows);
        for i in 0..rows {
            let row = t.row(i).unwrap();
            assert_eq!(row.len(), i + 1);
            assert_eq!(row[0], 1);
            assert_eq!(row[i], 1);
            for j in 1..i {
                assert_eq!(
                    t.get(i, j).unwrap(),
                    t.get(i - 1, j - 1).unwrap() + t.get(i - 1, j).unwrap()
                );
            }
        }
    }
}

#[test]
fn row_sums_are_powers_of_two() {
    let t = generate(11).unwrap();
    for i in 0..11 {
        assert_eq!(t.row_sum(i), Some(1u64 << i));
    }
    assert_eq!(t.row_sum(11), None);
}

#[test]
fn serializes_as_nested_arrays() {
    let t = generate(3).unwrap();
    let json = serde_json::to_string(&t).unwrap();
    assert_eq!(json, "[[1],[1,1],[1,2,1]]");
}

#[test]
fn out_of_range_lookups_are_none() {
    let t = generate(3).unwrap();
    assert_eq!(t.get(2, 3), None);
    assert_eq!(t.get(3, 0), None);
    assert!(t.row(5).is_none());
}

#[test]
fn largest_triangle_fits_in_u64() {
    let t = generate(MAX_TRIANGLE_ROWS).unwrap();
    assert_eq!(t.len(), 68);
    // C(67, 33)
    assert_eq!(t.get(67, 33), Some(14_226_520_737_620_288_370));
    assert_eq!(t.row_sum(63), Some(1u64 << 63));
    assert_eq!(t.row_sum(64), None);
}

#[test]
fn one_row_past_the_limit_is_invalid_argument() {
    let err = generate(MAX_TRIANGLE_ROWS + 1).unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(generate(100).unwrap_err().is_invalid_argument());
}

#[test]
fn deserializes_only_genuine_triangles() {
    let t: Triangle = serde_json::from_str("[[1],[1,1],[1,2,1]]").unwrap();
    assert_eq!(t, generate(3).unwrap());

    assert!(serde_json::from_str::<Triangle>("[[1],[1,1],[1,3,1]]").is_err());
    assert!(serde_json::from_str::<Triangle>("[[1],[1]]").is_err());
    assert!(serde_json::from_str::<Triangle>("[]").is_err());
}
