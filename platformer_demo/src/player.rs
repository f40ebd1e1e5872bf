//! Player movement
//!
//! Movement is resolved one axis at a time, horizontal first, so the sphere
//! does not catch on the seams between neighbouring floor facets. Ground is
//! sensed with two short rays cast down from either side of the body.

use facet_collision::foundation::math::{Transform, Vec3};
use facet_collision::physics::{resolve_velocity, BodyHit, BodyId, CollisionWorld, Facet};

use crate::config::PlayerConfig;

const DOWN: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// Movement state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    /// Standing on something
    Ground,
    /// Rising after a jump
    Jumping,
    /// Airborne and moving down
    Falling,
}

/// Input sampled for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Input {
    /// Left held
    pub left: bool,
    /// Right held
    pub right: bool,
    /// Jump pressed this tick
    pub jump: bool,
}

/// The controllable body and its movement state
#[derive(Debug)]
pub struct Player {
    /// Handle of the player's body in the world
    pub body: BodyId,
    /// Current movement state
    pub state: PlayerState,
    /// Horizontal speed
    pub x_speed: f32,
    /// Vertical speed (positive is down)
    pub y_speed: f32,
    /// Names of collected items, in pickup order
    pub items: Vec<String>,
    tuning: PlayerConfig,
}

impl Player {
    /// Wrap an already inserted body
    pub fn new(body: BodyId, tuning: PlayerConfig) -> Self {
        Self {
            body,
            state: PlayerState::Ground,
            x_speed: 0.0,
            y_speed: 0.0,
            items: Vec::new(),
            tuning,
        }
    }

    /// Current centre position
    pub fn position(&self, world: &CollisionWorld) -> Vec3 {
        world
            .get(self.body)
            .and_then(|body| body.transform)
            .map_or_else(Vec3::zeros, |transform| transform.position)
    }

    fn transform_mut<'w>(&self, world: &'w mut CollisionWorld) -> Option<&'w mut Transform> {
        world.get_mut(self.body).and_then(|body| body.transform.as_mut())
    }

    /// Apply held input to the speeds
    pub fn process_input(&mut self, input: Input) {
        if input.left {
            self.x_speed -= self.tuning.acceleration;
        }
        if input.right {
            self.x_speed += self.tuning.acceleration;
        }
        if input.jump && self.state == PlayerState::Ground {
            self.state = PlayerState::Jumping;
            self.y_speed = self.tuning.jump_speed;
        }
    }

    /// Horizontal step against the level
    pub fn move_x(&mut self, world: &mut CollisionWorld, facets: &[Facet]) {
        self.x_speed *= self.tuning.friction;
        self.x_speed = self.x_speed.clamp(-self.tuning.max_x_speed, self.tuning.max_x_speed);
        if self.x_speed.abs() < self.tuning.stop_threshold {
            self.x_speed = 0.0;
        }

        let position = self.position(world);
        let velocity = resolve_velocity(position, self.tuning.radius(), facets, Vec3::new(self.x_speed, 0.0, 0.0));
        self.x_speed = velocity.x;

        // A slope can push the body up while it walks
        if let Some(transform) = self.transform_mut(world) {
            transform.translate_2d(velocity.x, velocity.y);
        }
    }

    /// Vertical step: gravity, ground sensing and snapping, then the level
    pub fn move_y(&mut self, world: &mut CollisionWorld, facets: &[Facet]) {
        if matches!(self.state, PlayerState::Jumping | PlayerState::Falling) {
            self.y_speed += self.tuning.gravity;
            if self.y_speed > 0.0 {
                self.state = PlayerState::Falling;
            }
        }
        self.y_speed = self.y_speed.clamp(-self.tuning.max_y_speed, self.tuning.max_y_speed);
        if self.y_speed.abs() < self.tuning.stop_threshold {
            self.y_speed = 0.0;
        }

        let (left, right) = self.sense_ground(world);
        let half_height = self.tuning.height / 2.0;

        if self.state == PlayerState::Ground {
            let position = self.position(world);
            let ground_y = match (&left, &right) {
                (Some(l), Some(r)) => l.hit.point.y.min(r.hit.point.y) - half_height,
                (Some(hit), None) | (None, Some(hit)) => hit.hit.point.y - half_height,
                (None, None) => position.y,
            };
            if position.y + half_height >= ground_y {
                if let Some(transform) = self.transform_mut(world) {
                    transform.set_position_2d(position.x, ground_y);
                }
            }
        }

        if (left.is_some() || right.is_some()) && self.state != PlayerState::Jumping {
            self.y_speed = 0.0;
            self.state = PlayerState::Ground;
        } else if self.state == PlayerState::Ground {
            self.state = PlayerState::Falling;
        }

        let position = self.position(world);
        let velocity = resolve_velocity(position, self.tuning.radius(), facets, Vec3::new(0.0, self.y_speed, 0.0));
        self.y_speed = velocity.y;

        if let Some(transform) = self.transform_mut(world) {
            transform.translate_2d(velocity.x, velocity.y);
        }
    }

    /// Rays from both feet, reaching one body height down
    fn sense_ground(&self, world: &CollisionWorld) -> (Option<BodyHit>, Option<BodyHit>) {
        let feet = self.position(world);
        let offset = Vec3::new(self.tuning.width / 3.0, 0.0, 0.0);
        let reach = self.tuning.height;
        (
            world.ray_cast_nearest(feet - offset, DOWN, reach),
            world.ray_cast_nearest(feet + offset, DOWN, reach),
        )
    }

    /// Keep the body above the bottom of the view
    pub fn clamp_to_floor(&mut self, world: &mut CollisionWorld, view_floor: f32) {
        let bottom = self.position(world).y + self.tuning.height / 2.0;
        if bottom < view_floor {
            return;
        }
        if let Some(transform) = self.transform_mut(world) {
            transform.translate_2d(0.0, view_floor - bottom);
        }
        self.y_speed = 0.0;
        self.state = PlayerState::Ground;
    }
}
