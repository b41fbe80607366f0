use tumbler::collision::{contains_point, resolve_boundary, resolve_pairs, BOUNCE_NUDGE};
use tumbler::{closest_point_on_segment, Particle, Vec2};

fn square(half: f64) -> Vec<Vec2<f64>> {
    vec![
        Vec2::new(-half, -half),
        Vec2::new(half, -half),
        Vec2::new(half, half),
        Vec2::new(-half, half),
    ]
}

#[test]
fn closest_point_from_perpendicular_offset() {
    let a = Vec2::new(-30.0f64, 10.0);
    let b = Vec2::new(50.0, 70.0);
    let dir = (b - a).normalize();
    let mid = Vec2::new((a.x + b.x) * 0.5, (a.y + b.y) * 0.5);

    for d in [0.5, 7.0, 42.0] {
        let p = mid + dir.perp().scale(d);
        let contact = closest_point_on_segment(p, a, b);
        assert!((contact.distance - d).abs() < 1e-9, "distance {} expected {}", contact.distance, d);
        assert!(contact.normal.dot(dir).abs() < 1e-9, "normal should be perpendicular to the edge");
        assert!((contact.normal.length() - 1.0).abs() < 1e-9);
        assert!(contact.closest.distance(mid) < 1e-9);
    }
}

#[test]
fn flat_wall_bounce_pushes_out_and_reflects() {
    let boundary = square(100.0);
    let depth = 2.5;
    let speed = 6.0;
    let restitution = 0.8;
    let start_y = 100.0 - 10.0 + depth;
    let mut ps = [Particle::new(0, Vec2::new(0.0, start_y), Vec2::new(0.0, speed), 10.0)];

    let contacts = resolve_boundary(&mut ps, &boundary, restitution);
    assert_eq!(contacts, 1);

    let p = &ps[0];
    assert!((p.pos.y - (start_y - depth)).abs() < 1e-12, "pos.y = {}", p.pos.y);
    assert_eq!(p.pos.x, 0.0);
    assert!(p.vel.y < 0.0, "velocity should point away from the wall");
    let outward = -p.vel.y;
    assert!(
        (outward - speed * restitution).abs() <= BOUNCE_NUDGE as f64 + 1e-12,
        "outward speed {} expected about {}",
        outward,
        speed * restitution,
    );
}

#[test]
fn wall_contact_moving_away_keeps_velocity() {
    let boundary = square(100.0);
    let mut ps = [Particle::new(0, Vec2::new(0.0, 95.0), Vec2::new(1.0, -3.0), 10.0)];
    resolve_boundary(&mut ps, &boundary, 0.5);
    assert_eq!(ps[0].vel, Vec2::new(1.0, -3.0));
    assert!((ps[0].pos.y - 90.0).abs() < 1e-12);
}

#[test]
fn boundary_phase_is_idempotent_once_resolved() {
    let boundary = square(100.0);
    let mut ps = vec![
        Particle::new(0, Vec2::new(0.0, 97.0), Vec2::new(0.0, 4.0), 10.0),
        Particle::new(1, Vec2::new(-95.0, 0.0), Vec2::new(-2.0, 1.0), 10.0),
        Particle::new(2, Vec2::new(20.0, -30.0), Vec2::new(3.0, 3.0), 10.0),
    ];
    resolve_boundary(&mut ps, &boundary, 0.9);
    let settled = ps.clone();

    let contacts = resolve_boundary(&mut ps, &boundary, 0.9);
    assert_eq!(contacts, 0);
    assert_eq!(ps, settled);
}

#[test]
fn concave_boundary_does_not_push_from_inner_edge_lines() {
    // L-shaped room. The point sits past the infinite line of the inner
    // horizontal edge but far from the segment itself.
    let l_shape = vec![
        Vec2::new(0.0f64, 0.0),
        Vec2::new(200.0, 0.0),
        Vec2::new(200.0, 100.0),
        Vec2::new(100.0, 100.0),
        Vec2::new(100.0, 200.0),
        Vec2::new(0.0, 200.0),
    ];
    let pos = Vec2::new(50.0, 150.0);
    assert!(contains_point(&l_shape, pos));

    let mut ps = [Particle::new(0, pos, Vec2::new(2.0, 1.0), 10.0)];
    assert_eq!(resolve_boundary(&mut ps, &l_shape, 0.8), 0);
    assert_eq!(ps[0].pos, pos);
    assert_eq!(ps[0].vel, Vec2::new(2.0, 1.0));
}

#[test]
fn head_on_pair_exchanges_velocities() {
    let speed = 3.5f64;
    let mut ps = [
        Particle::new(0, Vec2::new(0.0, 0.0), Vec2::new(speed, 0.0), 5.0),
        Particle::new(1, Vec2::new(9.0, 0.0), Vec2::new(-speed, 0.0), 5.0),
    ];
    assert_eq!(resolve_pairs(&mut ps), 1);
    assert_eq!(ps[0].vel, Vec2::new(-speed, 0.0));
    assert_eq!(ps[1].vel, Vec2::new(speed, 0.0));
    assert!((ps[0].pos.x + 0.5).abs() < 1e-12);
    assert!((ps[1].pos.x - 9.5).abs() < 1e-12);
}

#[test]
fn glancing_pair_conserves_momentum_and_tangent() {
    let mut ps = [
        Particle::new(0, Vec2::new(0.0f64, 0.0), Vec2::new(2.0, 1.0), 4.0),
        Particle::new(1, Vec2::new(5.0, 5.0), Vec2::new(-1.0, -3.0), 4.0),
    ];
    let normal = (ps[1].pos - ps[0].pos).normalize();
    let tangent = normal.perp();
    let momentum = ps[0].vel + ps[1].vel;
    let (ta, tb) = (ps[0].vel.dot(tangent), ps[1].vel.dot(tangent));
    let (na, nb) = (ps[0].vel.dot(normal), ps[1].vel.dot(normal));

    resolve_pairs(&mut ps);

    let after = ps[0].vel + ps[1].vel;
    assert!((after.x - momentum.x).abs() < 1e-12 && (after.y - momentum.y).abs() < 1e-12);
    assert!((ps[0].vel.dot(tangent) - ta).abs() < 1e-12);
    assert!((ps[1].vel.dot(tangent) - tb).abs() < 1e-12);
    assert!((ps[0].vel.dot(normal) - nb).abs() < 1e-12);
    assert!((ps[1].vel.dot(normal) - na).abs() < 1e-12);
}

#[test]
fn distant_pairs_are_untouched() {
    let mut ps = [
        Particle::new(0, Vec2::new(0.0f32, 0.0), Vec2::new(1.0, 0.0), 5.0),
        Particle::new(1, Vec2::new(10.0, 0.0), Vec2::new(-1.0, 0.0), 5.0),
    ];
    let before = ps.clone();
    assert_eq!(resolve_pairs(&mut ps), 0);
    assert_eq!(ps, before);
}
