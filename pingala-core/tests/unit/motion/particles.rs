use super::*;

#[test]
fn same_seed_same_field() {
    let a = ParticleField::scatter(60, ScatterBounds::default(), 9).unwrap();
    let b = ParticleField::scatter(60, ScatterBounds::default(), 9).unwrap();
    assert_eq!(a, b);
    let c = ParticleField::scatter(60, ScatterBounds::default(), 10).unwrap();
    assert_ne!(a, c);
}

#[test]
fn particles_stay_in_bounds() {
    let bounds = ScatterBounds {
        min: Vec2::new(-5.0, -1.0),
        max: Vec2::new(5.0, 1.0),
        radius: (0.05, 0.05),
        opacity: (1.0, 1.0),
    };
    let field = ParticleField::scatter(25, bounds, 1).unwrap();
    assert_eq!(field.len(), 25);
    for p in &field.particles {
        assert!((-5.0..=5.0).contains(&p.position.x));
        assert!((-1.0..=1.0).contains(&p.position.y));
        assert_eq!(p.radius, 0.05);
        assert_eq!(p.opacity, 1.0);
    }
}

#[test]
fn rejects_inverted_ranges() {
    let bad = ScatterBounds {
        min: Vec2::new(1.0, 0.0),
        max: Vec2::new(0.0, 0.0),
        ..ScatterBounds::default()
    };
    assert!(ParticleField::scatter(1, bad, 0).is_err());

    let bad = ScatterBounds {
        opacity: (0.5, 1.5),
        ..ScatterBounds::default()
    };
    assert!(ParticleField::scatter(1, bad, 0).is_err());
}

#[test]
fn empty_field_is_fine() {
    let field = ParticleField::scatter(0, ScatterBounds::default(), 3).unwrap();
    assert!(field.is_empty());
}
