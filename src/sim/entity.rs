//! Simulation entities: the ball, the rotating arcs and the particles
//!
//! Every entity owns a bounding circle and a square footprint (the canvas its
//! shape is drawn on) and carries an `alive` flag. Killing an entity only sets
//! the flag; its [`Group`](super::group::Group) drops it on the next pass.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};

use super::arc::ArcBand;
use super::geometry::{Circle, rotate_deg};
use crate::consts::*;
use crate::error::SimError;
use crate::renderer::{RenderTarget, Rgba};

/// Per-tick values shared by every entity update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    /// Scales every positional and angular delta
    pub speed_mult: f32,
}

impl Default for TickContext {
    fn default() -> Self {
        Self { speed_mult: 1.0 }
    }
}

/// Common capabilities of everything the simulation advances and draws
pub trait Entity {
    /// Advance own state by one tick
    fn update(&mut self, ctx: &TickContext);
    fn render(&self, target: &mut dyn RenderTarget);
    fn sprite(&self) -> &Sprite;
    fn sprite_mut(&mut self) -> &mut Sprite;

    fn circle(&self) -> &Circle {
        self.sprite().circle()
    }

    fn is_alive(&self) -> bool {
        self.sprite().is_alive()
    }

    fn kill(&mut self) {
        self.sprite_mut().kill();
    }
}

/// Size of the canvas an entity is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub width: f32,
    pub height: f32,
}

impl Footprint {
    pub fn square(side: f32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

/// State shared by all entities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    circle: Circle,
    footprint: Footprint,
    alive: bool,
}

impl Sprite {
    /// The bounding circle is inscribed in the footprint, which must be square
    pub fn new(center: Vec2, footprint: Footprint) -> Result<Self, SimError> {
        if footprint.width != footprint.height || footprint.width < 0.0 {
            return Err(SimError::ShapeConstraint {
                width: footprint.width,
                height: footprint.height,
            });
        }
        Ok(Self {
            circle: Circle::new(center, footprint.width / 2.0),
            footprint,
            alive: true,
        })
    }

    #[inline]
    pub fn circle(&self) -> &Circle {
        &self.circle
    }

    #[inline]
    pub fn circle_mut(&mut self) -> &mut Circle {
        &mut self.circle
    }

    pub fn footprint(&self) -> Footprint {
        self.footprint
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn kill(&mut self) {
        self.alive = false;
    }
}

/// The bouncing ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    sprite: Sprite,
    pub velocity: Vec2,
}

impl Ball {
    pub fn new(center: Vec2, radius: f32) -> Result<Self, SimError> {
        Ok(Self {
            sprite: Sprite::new(center, Footprint::square(radius * 2.0))?,
            velocity: Vec2::ZERO,
        })
    }

    /// Stop the ball and move it to `center`
    pub fn reset(&mut self, center: Vec2) {
        self.velocity = Vec2::ZERO;
        self.sprite.circle_mut().center = center;
    }
}

impl Entity for Ball {
    fn update(&mut self, ctx: &TickContext) {
        let step = self.velocity * ctx.speed_mult;
        self.sprite.circle_mut().move_by(step);
        self.velocity.y += BALL_GRAVITY;
    }

    fn render(&self, target: &mut dyn RenderTarget) {
        let [r, g, b] = BALL_COLOR;
        let circle = self.circle();
        target.fill_circle(circle.center, circle.radius(), [r, g, b, 255]);
    }

    fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    fn sprite_mut(&mut self) -> &mut Sprite {
        &mut self.sprite
    }
}

/// Optional overrides for a new [`Arc`]; `None` fields are randomized
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ArcParams {
    pub color: Option<[u8; 3]>,
    pub angle: Option<f32>,
    pub speed: Option<f32>,
}

/// A rotating ring with a Δ-radian cut
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    sprite: Sprite,
    color: [u8; 3],
    /// Radians per tick, signed
    speed: f32,
    /// Running angle (radians, not wrapped); the cut spans [angle - Δ, angle]
    angle: f32,
}

impl Arc {
    pub fn new<R: Rng + ?Sized>(
        center: Vec2,
        radius: f32,
        params: ArcParams,
        rng: &mut R,
    ) -> Result<Self, SimError> {
        let color = params.color.unwrap_or_else(|| random_color(rng));
        let speed = params.speed.unwrap_or_else(|| random_arc_speed(rng));
        let angle = params.angle.unwrap_or_else(|| rng.random::<f32>() * TAU);

        Ok(Self {
            sprite: Sprite::new(center, Footprint::square(radius * 2.0))?,
            color,
            speed,
            angle,
        })
    }

    pub fn color(&self) -> [u8; 3] {
        self.color
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Start of the cut interval; the cut is [cut_start, cut_start + Δ]
    pub fn cut_start(&self) -> f32 {
        self.angle - ARC_DELTA
    }

    /// The drawn stroke, relative to the arc center
    pub fn band(&self) -> ArcBand {
        ArcBand::around_cut(self.circle().radius(), ARC_WIDTH, self.cut_start(), ARC_DELTA)
    }
}

impl Entity for Arc {
    fn update(&mut self, ctx: &TickContext) {
        self.angle += self.speed * ctx.speed_mult;
    }

    fn render(&self, target: &mut dyn RenderTarget) {
        let [r, g, b] = self.color;
        let circle = self.circle();
        target.arc(
            circle.center,
            circle.radius(),
            self.angle,
            self.angle - ARC_DELTA,
            ARC_WIDTH,
            [r, g, b, 255],
        );
    }

    fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    fn sprite_mut(&mut self) -> &mut Sprite {
        &mut self.sprite
    }
}

/// Optional overrides for a new [`Particle`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParticleParams {
    /// Defaults to (0.5, 0.5) rotated by a random angle
    pub velocity: Option<Vec2>,
    /// Defaults to (0, 0.1)
    pub gravity: Option<Vec2>,
    /// Defaults to 40 ticks
    pub lifetime: Option<f32>,
}

/// A fading dot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    sprite: Sprite,
    velocity: Vec2,
    gravity: Vec2,
    lifetime: f32,
    initial_lifetime: f32,
    color: Rgba,
}

impl Particle {
    pub fn new<R: Rng + ?Sized>(
        center: Vec2,
        color: [u8; 3],
        radius: f32,
        params: ParticleParams,
        rng: &mut R,
    ) -> Result<Self, SimError> {
        let velocity = params.velocity.unwrap_or_else(|| {
            rotate_deg(Vec2::splat(PARTICLE_SPEED), rng.random::<f32>() * 360.0)
        });
        let lifetime = params.lifetime.unwrap_or(PARTICLE_LIFETIME);
        let [r, g, b] = color;

        Ok(Self {
            sprite: Sprite::new(center, Footprint::square(radius * 2.0))?,
            velocity,
            gravity: params.gravity.unwrap_or(Vec2::new(0.0, PARTICLE_GRAVITY)),
            lifetime,
            initial_lifetime: lifetime,
            color: [r, g, b, 255],
        })
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn alpha(&self) -> u8 {
        self.color[3]
    }

    pub fn lifetime(&self) -> f32 {
        self.lifetime
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }
}

impl Entity for Particle {
    fn update(&mut self, ctx: &TickContext) {
        self.sprite.circle_mut().move_by(self.velocity * ctx.speed_mult);
        self.velocity += self.gravity;
        self.lifetime -= ctx.speed_mult;

        let fade = 255.0 * self.lifetime / self.initial_lifetime;
        self.color[3] = fade.clamp(0.0, 255.0) as u8;

        if self.lifetime <= 0.0 {
            self.kill();
        }
    }

    fn render(&self, target: &mut dyn RenderTarget) {
        let circle = self.circle();
        target.fill_circle(circle.center, circle.radius(), self.color);
    }

    fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    fn sprite_mut(&mut self) -> &mut Sprite {
        &mut self.sprite
    }
}

/// Each channel uniform in 50..=255
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> [u8; 3] {
    [
        rng.random_range(50..=255),
        rng.random_range(50..=255),
        rng.random_range(50..=255),
    ]
}

/// ±π/n radians per tick for n in [ARC_SPEED_MIN, ARC_SPEED_MAX]
pub fn random_arc_speed<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    sign * PI / rng.random_range(ARC_SPEED_MIN..=ARC_SPEED_MAX) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCall, RecordingTarget};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(12345)
    }

    #[test]
    fn test_non_square_footprint_rejected() {
        let err = Sprite::new(Vec2::ZERO, Footprint { width: 10.0, height: 12.0 }).unwrap_err();
        assert_eq!(err, SimError::ShapeConstraint { width: 10.0, height: 12.0 });
        assert!(Ball::new(Vec2::ZERO, -1.0).is_err());
    }

    #[test]
    fn test_sprite_circle_inscribed() {
        let sprite = Sprite::new(Vec2::new(5.0, 5.0), Footprint::square(25.0)).unwrap();
        assert_eq!(sprite.circle().radius(), 12.5);
        assert!(sprite.is_alive());
    }

    #[test]
    fn test_ball_update_applies_gravity_after_motion() {
        let mut ball = Ball::new(Vec2::ZERO, BALL_RADIUS).unwrap();
        ball.velocity = Vec2::new(2.0, 0.0);
        ball.update(&TickContext { speed_mult: 0.5 });
        assert_eq!(ball.circle().center, Vec2::new(1.0, 0.0));
        assert_eq!(ball.velocity, Vec2::new(2.0, BALL_GRAVITY));
    }

    #[test]
    fn test_ball_reset() {
        let mut ball = Ball::new(Vec2::ZERO, BALL_RADIUS).unwrap();
        ball.velocity = Vec2::new(3.0, 4.0);
        ball.reset(Vec2::new(10.0, 20.0));
        assert_eq!(ball.velocity, Vec2::ZERO);
        assert_eq!(ball.circle().center, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_arc_rotates_with_speed_mult() {
        let params = ArcParams {
            color: Some([1, 2, 3]),
            angle: Some(1.0),
            speed: Some(0.1),
        };
        let mut arc = Arc::new(Vec2::ZERO, 100.0, params, &mut rng()).unwrap();
        arc.update(&TickContext { speed_mult: 2.0 });
        assert!((arc.angle() - 1.2).abs() < 1e-6);
        assert_eq!(arc.color(), [1, 2, 3]);
        // The cut keeps its length however far the arc turns
        for _ in 0..100 {
            arc.update(&TickContext::default());
        }
        assert!((arc.angle() - arc.cut_start() - ARC_DELTA).abs() < 1e-5);
        assert!((arc.band().span - (TAU - ARC_DELTA)).abs() < 1e-5);
    }

    #[test]
    fn test_arc_random_defaults_in_range() {
        let mut rng = rng();
        for _ in 0..50 {
            let arc = Arc::new(Vec2::ZERO, 100.0, ArcParams::default(), &mut rng).unwrap();
            assert!(arc.color().iter().all(|&c| c >= 50));
            let n = PI / arc.speed().abs();
            assert!(n >= ARC_SPEED_MIN as f32 - 0.01 && n <= ARC_SPEED_MAX as f32 + 0.01);
            assert!((0.0..TAU).contains(&arc.angle()));
        }
    }

    #[test]
    fn test_particle_fades_and_dies() {
        let mut p = Particle::new(Vec2::ZERO, [200, 50, 30], 2.0, ParticleParams::default(), &mut rng())
            .unwrap();
        assert_eq!(p.alpha(), 255);
        let ctx = TickContext::default();
        let mut last = p.alpha();
        let mut ticks = 0;
        while p.is_alive() {
            p.update(&ctx);
            ticks += 1;
            assert!(p.alpha() <= last);
            last = p.alpha();
        }
        assert_eq!(p.alpha(), 0);
        assert!(ticks <= PARTICLE_LIFETIME as u32);
    }

    #[test]
    fn test_particle_motion() {
        let params = ParticleParams {
            velocity: Some(Vec2::new(1.0, -1.0)),
            gravity: Some(Vec2::new(0.0, 0.5)),
            lifetime: Some(10.0),
        };
        let mut p = Particle::new(Vec2::ZERO, [0, 0, 0], 3.0, params, &mut rng()).unwrap();
        p.update(&TickContext::default());
        assert_eq!(p.circle().center, Vec2::new(1.0, -1.0));
        assert_eq!(p.velocity(), Vec2::new(1.0, -0.5));
        assert_eq!(p.lifetime(), 9.0);
        assert_eq!(p.alpha(), (255.0_f32 * 0.9) as u8);
    }

    #[test]
    fn test_default_particle_speed() {
        let p = Particle::new(Vec2::ZERO, [0, 0, 0], 1.0, ParticleParams::default(), &mut rng()).unwrap();
        assert!((p.velocity().length() - PARTICLE_SPEED * 2f32.sqrt()).abs() < 1e-5);
    }

    #[test]
    fn test_render_calls() {
        let mut target = RecordingTarget::default();
        let ball = Ball::new(Vec2::new(1.0, 2.0), BALL_RADIUS).unwrap();
        ball.render(&mut target);
        let params = ArcParams {
            color: Some([9, 9, 9]),
            angle: Some(1.0),
            speed: Some(0.0),
        };
        Arc::new(Vec2::ZERO, 50.0, params, &mut rng())
            .unwrap()
            .render(&mut target);

        assert_eq!(
            target.calls[0],
            DrawCall::Circle {
                center: Vec2::new(1.0, 2.0),
                radius: BALL_RADIUS,
                color: [255, 255, 255, 255],
            }
        );
        assert!(matches!(
            target.calls[1],
            DrawCall::Arc { radius, start, width, .. } if radius == 50.0 && start == 1.0 && width == ARC_WIDTH
        ));
    }
}
