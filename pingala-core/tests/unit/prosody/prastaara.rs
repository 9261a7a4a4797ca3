use super::*;
use crate::prosody::meru::generate;

use Symbol::{G, L};

fn seq(symbols: &[Symbol]) -> WeightSequence {
    WeightSequence::new(symbols.to_vec())
}

#[test]
fn width_two_table_in_canonical_order() {
    let t = Prastaara::build(2).unwrap();
    assert_eq!(
        t.rows(),
        &[seq(&[G, G]), seq(&[L, G]), seq(&[G, L]), seq(&[L, L])]
    );
    assert_eq!(t.column(0), Some(vec![G, L, G, L]));
    assert_eq!(t.column(1), Some(vec![G, G, L, L]));
    assert_eq!(t.column(2), None);
}

#[test]
fn doubling_agrees_with_enumeration() {
    for width in 1..=8 {
        assert_eq!(
            Prastaara::by_doubling(width).unwrap(),
            Prastaara::build(width).unwrap(),
            "width {width}"
        );
    }
}

#[test]
fn laghu_counts_follow_meru_row() {
    let meru = generate(9).unwrap();
    for width in 1..=8 {
        let t = Prastaara::build(width).unwrap();
        assert_eq!(t.laghu_counts(), meru.row(width).unwrap());
    }
}

#[test]
fn nashta_and_uddishta_invert_each_other() {
    for width in 1..=6 {
        for row in 1..=(1u64 << width) {
            let pattern = nashta(row, width).unwrap();
            assert_eq!(pattern.len(), width);
            assert_eq!(uddishta(&pattern), row);
        }
    }
}

#[test]
fn first_and_last_rows() {
    assert_eq!(nashta(1, 3).unwrap(), seq(&[G, G, G]));
    assert_eq!(nashta(8, 3).unwrap(), seq(&[L, L, L]));
    assert_eq!(nashta(22, 5).unwrap(), seq(&[L, G, L, G, L]));
}

#[test]
fn out_of_range_parameters_are_invalid_argument() {
    assert!(nashta(0, 3).unwrap_err().is_invalid_argument());
    assert!(nashta(9, 3).unwrap_err().is_invalid_argument());
    assert!(nashta(1, 0).unwrap_err().is_invalid_argument());
    assert!(Prastaara::build(0).unwrap_err().is_invalid_argument());
    assert!(
        Prastaara::build(MAX_TABLE_WIDTH + 1)
            .unwrap_err()
            .is_invalid_argument()
    );
    let widest = Prastaara::by_doubling(MAX_TABLE_WIDTH).unwrap();
    assert!(widest.expand().unwrap_err().is_invalid_argument());
}

#[test]
fn json_reload_keeps_the_table() {
    let t = Prastaara::build(3).unwrap();
    let json = serde_json::to_string(&t).unwrap();
    let back: Prastaara = serde_json::from_str(&json).unwrap();
    assert_eq!(back, t);
    assert_eq!(back.laghu_counts(), vec![1, 3, 3, 1]);
}

#[test]
fn json_with_mismatched_rows_is_rejected() {
    let short = serde_json::from_str::<Prastaara>(r#"{"width":3,"rows":[["L"],["G"]]}"#);
    assert!(short.is_err());

    let shuffled =
        serde_json::from_str::<Prastaara>(r#"{"width":1,"rows":[["L"],["G"]]}"#);
    assert!(shuffled.is_err());

    let too_wide = serde_json::from_str::<Prastaara>(r#"{"width":40,"rows":[]}"#);
    assert!(too_wide.is_err());
}
