//! Collision detection and response.
//!
//! Two ordered phases per tick: particles against the boundary loop, then
//! particles against each other. Recovery passes reset any particle that
//! went non-finite or escaped far outside the boundary.
//!
//! The boundary test uses the distance to each edge *segment*, so it works
//! for concave outlines and does not depend on winding. Reflex corners get
//! no special treatment; particles can catch there.

use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;

/// Outward speed added after a wall bounce to break resting contact.
pub const BOUNCE_NUDGE: f32 = 0.1;

/// Closest-point query result for one edge.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SegmentContact<F: Float> {
    /// Closest point on the segment.
    pub closest: Vec2<F>,
    /// Distance from the query point to `closest`.
    pub distance: F,
    /// Unit vector from `closest` toward the query point. When the point lies
    /// on the segment this is the edge direction rotated 90° (inward for
    /// loops wound like the generated ones).
    pub normal: Vec2<F>,
}

/// Closest point on segment `a..b` to `p`, via the projection parameter
/// clamped to `[0, 1]`.
pub fn closest_point_on_segment<F: Float>(p: Vec2<F>, a: Vec2<F>, b: Vec2<F>) -> SegmentContact<F> {
    let edge = b - a;
    let len_sq = edge.length_sq();
    let t = if len_sq > F::zero() {
        ((p - a).dot(edge) / len_sq).clamp(F::zero(), F::one())
    } else {
        F::zero()
    };
    let closest = a + edge.scale(t);
    let offset = p - closest;
    let edge_normal = edge.perp().normalize_or(Vec2::new(F::one(), F::zero()));
    SegmentContact {
        closest,
        distance: offset.length(),
        normal: offset.normalize_or(edge_normal),
    }
}

/// Push particles out of every boundary edge they overlap and reflect their
/// velocity.
///
/// Edges are consecutive vertex pairs, wrapping last to first. Each
/// penetrating edge is resolved on its own against the already-corrected
/// position, so simultaneous contacts compound. Velocity is reflected only
/// when moving into the wall, then scaled by `restitution` and nudged
/// outward by [`BOUNCE_NUDGE`].
///
/// Returns the number of edge contacts resolved.
pub fn resolve_boundary<F: Float>(
    particles: &mut [Particle<F>],
    boundary: &[Vec2<F>],
    restitution: F,
) -> usize {
    let n = boundary.len();
    if n < 2 {
        return 0;
    }
    let nudge = F::from_f32(BOUNCE_NUDGE);
    let mut contacts = 0;

    for p in particles.iter_mut() {
        for i in 0..n {
            let a = boundary[i];
            let b = boundary[(i + 1) % n];
            let contact = closest_point_on_segment(p.pos, a, b);
            if !(contact.distance < p.radius) {
                continue;
            }
            contacts += 1;

            let normal = contact.normal;
            p.pos = p.pos + normal.scale(p.radius - contact.distance);

            let vn = p.vel.dot(normal);
            if vn < F::zero() {
                p.vel = p.vel - normal.scale(F::two() * vn);
                p.vel = p.vel.scale(restitution);
                p.vel = p.vel + normal.scale(nudge);
            }
        }
    }
    contacts
}

/// Separate overlapping particle pairs and exchange the normal components of
/// approaching velocities (equal-mass elastic collision).
///
/// Returns the number of overlapping pairs.
pub fn resolve_pairs<F: Float>(particles: &mut [Particle<F>]) -> usize {
    let fallback = Vec2::new(F::one(), F::zero());
    let mut overlaps = 0;

    for i in 0..particles.len() {
        let (head, tail) = particles.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            let delta = b.pos - a.pos;
            let distance = delta.length();
            let sum_radii = a.radius + b.radius;
            if !(distance < sum_radii) {
                continue;
            }
            overlaps += 1;

            let normal = delta.normalize_or(fallback);
            let correction = normal.scale((sum_radii - distance) * F::half());
            a.pos = a.pos - correction;
            b.pos = b.pos + correction;

            if (b.vel - a.vel).dot(normal) < F::zero() {
                let an = a.vel.dot(normal);
                let bn = b.vel.dot(normal);
                let a_tangent = a.vel - normal.scale(an);
                let b_tangent = b.vel - normal.scale(bn);
                a.vel = a_tangent + normal.scale(bn);
                b.vel = b_tangent + normal.scale(an);
            }
        }
    }
    overlaps
}

/// Reset particles whose position or velocity is NaN or infinite.
///
/// Returns the number of particles reset.
pub fn recover_non_finite<F: Float>(particles: &mut [Particle<F>]) -> usize {
    let mut recovered = 0;
    for p in particles.iter_mut().filter(|p| !p.is_finite()) {
        p.reset_to_origin();
        recovered += 1;
    }
    recovered
}

/// Reset particles farther than `limit` from the origin. Non-finite
/// particles count as runaways.
///
/// Returns the number of particles reset.
pub fn recover_runaways<F: Float>(particles: &mut [Particle<F>], limit: F) -> usize {
    let mut recovered = 0;
    for p in particles.iter_mut() {
        if !p.is_finite() || p.pos.length() > limit {
            p.reset_to_origin();
            recovered += 1;
        }
    }
    recovered
}

/// Even-odd point-in-polygon test against a boundary loop.
pub fn contains_point<F: Float>(boundary: &[Vec2<F>], point: Vec2<F>) -> bool {
    let n = boundary.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = boundary[i];
        let pj = boundary[j];
        let dy = pj.y - pi.y;
        if dy != F::zero()
            && ((pi.y > point.y) != (pj.y > point.y))
            && (point.x < (pj.x - pi.x) * (point.y - pi.y) / dy + pi.x)
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closest_point_clamps_to_endpoints() {
        let a = Vec2::new(0.0f64, 0.0);
        let b = Vec2::new(10.0, 0.0);
        let c = closest_point_on_segment(Vec2::new(-3.0, 4.0), a, b);
        assert_eq!(c.closest, a);
        assert!((c.distance - 5.0).abs() < 1e-12);
        let c = closest_point_on_segment(Vec2::new(14.0, -3.0), a, b);
        assert_eq!(c.closest, b);
    }

    #[test]
    fn degenerate_segment_uses_its_point() {
        let a = Vec2::new(2.0f64, 2.0);
        let c = closest_point_on_segment(Vec2::new(2.0, 5.0), a, a);
        assert_eq!(c.closest, a);
        assert_eq!(c.distance, 3.0);
        assert_eq!(c.normal, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn point_on_segment_falls_back_to_edge_perpendicular() {
        let c = closest_point_on_segment(
            Vec2::new(5.0f64, 0.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
        );
        assert_eq!(c.distance, 0.0);
        assert_eq!(c.normal, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn separating_pair_keeps_velocity() {
        let mut ps = [
            Particle::new(0, Vec2::new(0.0f64, 0.0), Vec2::new(-1.0, 0.0), 5.0),
            Particle::new(1, Vec2::new(8.0, 0.0), Vec2::new(1.0, 0.0), 5.0),
        ];
        assert_eq!(resolve_pairs(&mut ps), 1);
        assert_eq!(ps[0].vel, Vec2::new(-1.0, 0.0));
        assert_eq!(ps[1].vel, Vec2::new(1.0, 0.0));
        assert!((ps[0].pos.distance(ps[1].pos) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn coincident_pair_separates_along_x() {
        let mut ps = [
            Particle::new(0, Vec2::new(1.0f64, 1.0), Vec2::zero(), 2.0),
            Particle::new(1, Vec2::new(1.0, 1.0), Vec2::zero(), 2.0),
        ];
        resolve_pairs(&mut ps);
        assert_eq!(ps[0].pos, Vec2::new(-1.0, 1.0));
        assert_eq!(ps[1].pos, Vec2::new(3.0, 1.0));
    }

    #[test]
    fn non_finite_particles_are_reset() {
        let mut ps = [
            Particle::new(0, Vec2::new(f32::NAN, 0.0), Vec2::zero(), 2.0),
            Particle::new(1, Vec2::new(1.0, 1.0), Vec2::new(f32::INFINITY, 0.0), 2.0),
            Particle::new(2, Vec2::new(1.0, 1.0), Vec2::new(1.0, 0.0), 2.0),
        ];
        assert_eq!(recover_non_finite(&mut ps), 2);
        assert!(ps.iter().all(|p| p.is_finite()));
        assert_eq!(ps[2].pos, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn nan_boundary_reports_no_contacts() {
        let boundary = [
            Vec2::new(f64::NAN, 0.0),
            Vec2::new(10.0, f64::NAN),
            Vec2::new(f64::NAN, f64::NAN),
        ];
        let mut particles = [Particle::new(0, Vec2::new(1.0, 1.0), Vec2::new(0.5, -0.5), 5.0)];
        assert_eq!(resolve_boundary(&mut particles, &boundary, 0.8), 0);
        assert_eq!(particles[0].pos, Vec2::new(1.0, 1.0));
        assert_eq!(particles[0].vel, Vec2::new(0.5, -0.5));
    }

    #[test]
    fn contains_point_square() {
        let square = [
            Vec2::new(-1.0f64, -1.0),
            Vec2::new(1.0, -1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(-1.0, 1.0),
        ];
        assert!(contains_point(&square, Vec2::zero()));
        assert!(!contains_point(&square, Vec2::new(2.0, 0.0)));
    }
}
