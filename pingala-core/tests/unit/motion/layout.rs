use super::*;
use crate::prosody::meru::generate;

#[test]
fn row_is_centred() {
    let xs: Vec<f64> = arrange_row(5, 1.0).iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
    let xs: Vec<f64> = arrange_row(2, 1.5).iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![-0.75, 0.75]);
    assert!(arrange_row(0, 1.0).is_empty());
}

#[test]
fn column_runs_top_down() {
    let ys: Vec<f64> = arrange_column(3, 1.0).iter().map(|p| p.y).collect();
    assert_eq!(ys, vec![1.0, 0.0, -1.0]);
}

#[test]
fn triangle_rows_are_symmetric() {
    let t = generate(6).unwrap();
    let pos = MeruLayout::default().positions(&t);
    assert_eq!(pos.len(), 6);
    for (n, row) in pos.iter().enumerate() {
        assert_eq!(row.len(), n + 1);
        let first = row.first().unwrap();
        let last = row.last().unwrap();
        assert!((first.x + last.x).abs() < 1e-12);
        assert!(row.iter().all(|p| (p.y - (2.0 - 0.7 * n as f64)).abs() < 1e-12));
    }
}

#[test]
fn block_layout_matches_cube_pyramid() {
    let l = MeruLayout::blocks(5, 0.8, 0.2);
    let apex = l.position(0, 0);
    assert!((apex.x).abs() < 1e-12);
    assert!((apex.y - 2.0).abs() < 1e-12);
    let corner = l.position(4, 0);
    assert!((corner.x + 2.0).abs() < 1e-12);
    assert!((corner.y - (-2.0)).abs() < 1e-12);
}

#[test]
fn edges_link_each_parent_to_two_children() {
    let t = generate(4).unwrap();
    let edges = meru_edges(&t);
    // rows 1..4 have 1 + 2 + 3 parents, two links each
    assert_eq!(edges.len(), 12);
    assert!(edges.contains(&((2, 1), (3, 1))));
    assert!(edges.contains(&((2, 1), (3, 2))));
    assert!(edges.iter().all(|(p, c)| c.0 == p.0 + 1));
}
