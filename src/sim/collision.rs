//! Collision detection and response between the ball and an arc
//!
//! Contact is resolved in two stages. Coarse circle geometry first pushes the
//! ball back along its direction of motion onto the boundary of the region
//! where it is fully inside the arc's circle. A fine overlap test then decides
//! whether the ball is touching the drawn stroke (bounce) or sitting in the
//! cut (escape, which shatters the arc).

use glam::Vec2;
use rand::Rng;

use super::entity::{Arc, Ball, Entity};
use super::geometry::{Circle, reflect, rotate_deg, try_normalize};
use super::sdf::sd_arc;
use crate::consts::BALL_REFLECT_ANGLE;
use crate::error::SimError;

/// Pixel-level overlap between the ball and an arc's drawn stroke
pub trait OverlapTest {
    fn overlaps(&self, ball: &Ball, arc: &Arc) -> bool;
}

/// Overlap via the signed distance to the stroke band (rounded end caps)
#[derive(Debug, Clone, Copy, Default)]
pub struct SdfOverlap;

impl OverlapTest for SdfOverlap {
    fn overlaps(&self, ball: &Ball, arc: &Arc) -> bool {
        let offset = ball.circle().center - arc.circle().center;
        sd_arc(offset, &arc.band()) < ball.circle().radius()
    }
}

/// Whether the ball has left the region fully enclosed by `arc`
pub fn needs_check(arc: &Arc, ball: &Ball) -> bool {
    !arc.circle().contains(ball.circle())
}

/// Signed distance to move along unit `dir` so that `offset` ends up at
/// distance `allowed` from the origin.
///
/// Takes the smallest move that lands exactly on that circle. When the line
/// of motion misses the circle, falls back to `allowed - |offset|`.
pub fn snap_displacement(offset: Vec2, dir: Vec2, allowed: f32) -> f32 {
    let b = offset.dot(dir);
    let disc = b * b - (offset.length_squared() - allowed * allowed);
    if disc < 0.0 {
        return allowed - offset.length();
    }

    let root = disc.sqrt();
    let (near, far) = (-b - root, -b + root);
    if near.abs() <= far.abs() { near } else { far }
}

/// Move the ball along its velocity onto the boundary where it just fits
/// inside `circle`
pub fn snap_to_boundary(ball: &mut Ball, circle: &Circle) -> Result<(), SimError> {
    let dir = try_normalize(ball.velocity, "ball velocity at contact")?;
    let allowed = circle.radius() - ball.circle().radius();
    let offset = ball.circle().center - circle.center;

    let t = snap_displacement(offset, dir, allowed);
    ball.sprite_mut().circle_mut().move_by(dir * t);
    Ok(())
}

/// Resolve penetration, then report whether the ball touches the stroke
pub fn collide_ball(arc: &Arc, ball: &mut Ball, overlap: &dyn OverlapTest) -> Result<bool, SimError> {
    snap_to_boundary(ball, arc.circle())?;
    Ok(overlap.overlaps(ball, arc))
}

/// Bounce the ball off the inside of `circle`.
///
/// The normal points from the ball toward the circle's center and is rotated
/// by a random jitter of up to ±2.5° so bounces never settle into a loop.
/// Reflection only changes direction: speed is preserved.
pub fn reflect_ball<R: Rng + ?Sized>(ball: &mut Ball, circle: &Circle, rng: &mut R) -> Result<(), SimError> {
    let normal = try_normalize(circle.center - ball.circle().center, "contact normal")?;
    snap_to_boundary(ball, circle)?;

    let jitter = (rng.random::<f32>() - 0.5) * BALL_REFLECT_ANGLE;
    ball.velocity = reflect(ball.velocity, rotate_deg(normal, jitter));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{ARC_DELTA, BALL_RADIUS};
    use crate::screen_polar;
    use crate::sim::entity::ArcParams;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::f32::consts::FRAC_PI_2;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    /// Arc of radius 100 at the origin with its cut spanning 60°..90°
    fn arc() -> Arc {
        let params = ArcParams {
            color: Some([200, 50, 30]),
            angle: Some(FRAC_PI_2),
            speed: Some(0.0),
        };
        Arc::new(Vec2::ZERO, 100.0, params, &mut rng()).unwrap()
    }

    fn ball_heading(theta: f32, distance: f32) -> Ball {
        let mut ball = Ball::new(screen_polar(distance, theta), BALL_RADIUS).unwrap();
        ball.velocity = screen_polar(5.0, theta);
        ball
    }

    #[test]
    fn test_needs_check() {
        let arc = arc();
        assert!(!needs_check(&arc, &ball_heading(0.0, 50.0)));
        assert!(needs_check(&arc, &ball_heading(0.0, 90.0)));
    }

    #[test]
    fn test_collide_ball_hits_stroke() {
        let arc = arc();
        let mut ball = ball_heading(0.0, 90.0);
        assert!(collide_ball(&arc, &mut ball, &SdfOverlap).unwrap());
        assert!((ball.circle().center - Vec2::new(87.5, 0.0)).length() < 1e-3);
    }

    #[test]
    fn test_collide_ball_misses_in_cut() {
        let arc = arc();
        let mid_cut = FRAC_PI_2 - ARC_DELTA / 2.0;
        let mut ball = ball_heading(mid_cut, 90.0);
        assert!(!collide_ball(&arc, &mut ball, &SdfOverlap).unwrap());
        assert!((ball.circle().center.length() - 87.5).abs() < 1e-3);
    }

    #[test]
    fn test_collide_ball_grazing_cut_edge_hits() {
        // Heading just outside the cut: the ball overlaps the stroke's end cap
        let arc = arc();
        let mut ball = ball_heading(FRAC_PI_2 + 0.05, 90.0);
        assert!(collide_ball(&arc, &mut ball, &SdfOverlap).unwrap());
    }

    #[test]
    fn test_zero_velocity_is_degenerate() {
        let arc = arc();
        let mut ball = Ball::new(Vec2::new(95.0, 0.0), BALL_RADIUS).unwrap();
        let err = collide_ball(&arc, &mut ball, &SdfOverlap).unwrap_err();
        assert!(matches!(err, SimError::DegenerateVector { .. }));
    }

    #[test]
    fn test_snap_displacement_radial_matches_linear_push() {
        let t = snap_displacement(Vec2::new(90.0, 0.0), Vec2::X, 87.5);
        assert!((t + 2.5).abs() < 1e-4);
    }

    #[test]
    fn test_snap_displacement_line_misses_falls_back() {
        // Moving tangentially far outside the allowed circle
        let t = snap_displacement(Vec2::new(0.0, 200.0), Vec2::X, 50.0);
        assert!((t + 150.0).abs() < 1e-4);
    }

    #[test]
    fn test_reflect_ball_bounces_inward() {
        let arc = arc();
        let mut ball = ball_heading(0.0, 90.0);
        reflect_ball(&mut ball, arc.circle(), &mut rng()).unwrap();
        // Moving right into the wall becomes moving left, within the jitter
        assert!(ball.velocity.x < 0.0);
        let angle = ball.velocity.to_angle().abs();
        assert!((angle - std::f32::consts::PI).abs() <= 5.0_f32.to_radians() + 1e-4);
    }

    #[test]
    fn test_reflect_ball_at_arc_center_is_degenerate() {
        let arc = arc();
        let mut ball = Ball::new(Vec2::ZERO, BALL_RADIUS).unwrap();
        ball.velocity = Vec2::X;
        assert!(reflect_ball(&mut ball, arc.circle(), &mut rng()).is_err());
    }

    proptest! {
        #[test]
        fn prop_snap_lands_on_boundary(
            arc_radius in 60.0f32..500.0,
            ball_radius in 2.0f32..20.0,
            theta in 0.0f32..std::f32::consts::TAU,
            depth in 0.01f32..1.0,
            heading in -40.0f32..40.0,
        ) {
            let allowed = arc_radius - ball_radius;
            let circle = Circle::new(Vec2::new(300.0, 200.0), arc_radius);
            let offset = screen_polar(allowed + depth * ball_radius, theta);
            let mut ball = Ball::new(circle.center + offset, ball_radius).unwrap();
            ball.velocity = rotate_deg(offset.normalize() * 4.0, heading);
            let before = ball.circle().center;

            snap_to_boundary(&mut ball, &circle).unwrap();

            let after = ball.circle().center;
            prop_assert!((after.distance(circle.center) - allowed).abs() < 1e-2);
            // Displacement is parallel to the velocity
            prop_assert!((after - before).perp_dot(ball.velocity.normalize()).abs() < 1e-2);
        }

        #[test]
        fn prop_reflect_preserves_speed(
            theta in 0.0f32..std::f32::consts::TAU,
            heading in -80.0f32..80.0,
            speed in 0.5f32..30.0,
            seed in any::<u64>(),
        ) {
            let circle = Circle::new(Vec2::ZERO, 200.0);
            let offset = screen_polar(190.0, theta);
            let mut ball = Ball::new(offset, BALL_RADIUS).unwrap();
            ball.velocity = rotate_deg(offset.normalize() * speed, heading);
            let before = ball.velocity.length();

            reflect_ball(&mut ball, &circle, &mut Pcg32::seed_from_u64(seed)).unwrap();

            prop_assert!((ball.velocity.length() - before).abs() <= before * 1e-4);
        }
    }
}
