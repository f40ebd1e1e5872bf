//! One simulation session: the collision world plus the actors living in it

use facet_collision::config::ConfigError;
use facet_collision::foundation::math::{Transform, Vec3};
use facet_collision::level::TileMap;
use facet_collision::physics::{Body, BodyId, Collider, CollisionError, CollisionWorld};

use crate::config::{DemoConfig, InputSegment, ItemConfig};
use crate::player::{Input, Player, PlayerState};

/// Errors that stop the demo from starting
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    /// Config file could not be read
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Level or body geometry was invalid
    #[error("collision setup error: {0}")]
    Collision(#[from] CollisionError),
}

/// Sprite-sized body transform at a 2D position
fn placed(width: f32, height: f32, x: f32, y: f32) -> Transform {
    let mut transform = Transform::origin_2d(width, height);
    transform.set_position_2d(x, y);
    transform
}

/// World, level geometry, player and remaining items
pub struct Session {
    world: CollisionWorld,
    level: Collider,
    player: Player,
    items: Vec<(BodyId, ItemConfig)>,
    view_floor: f32,
    ticks: u64,
}

impl Session {
    /// Build the world from a config
    pub fn new(config: &DemoConfig) -> Result<Self, DemoError> {
        let mut world = CollisionWorld::new();

        let level = TileMap::from_config(&config.level)?.collider()?;
        world.insert(Body::fixed("level", level.clone()));

        let tuning = config.player.clone();
        let [x, y] = tuning.spawn;
        let player_body = world.insert(
            Body::new("player")
                .with_collider(Collider::bounding_sphere(0.5)?.with_skip_raycast(true))
                .with_transform(placed(tuning.width, tuning.height, x, y)),
        );

        let mut items = Vec::with_capacity(config.items.len());
        for item in &config.items {
            let [x, y] = item.position;
            let id = world.insert(
                Body::new(item.name.clone())
                    .with_collider(Collider::bounding_sphere(0.5)?.with_skip_raycast(true))
                    .with_transform(placed(16.0, 16.0, x, y)),
            );
            items.push((id, item.clone()));
        }

        log::info!(
            "session ready: {} level facets, {} items",
            level.facets().len(),
            items.len()
        );

        Ok(Self {
            world,
            level,
            player: Player::new(player_body, tuning),
            items,
            view_floor: config.view_floor,
            ticks: 0,
        })
    }

    /// Advance one tick
    pub fn tick(&mut self, input: Input) {
        self.player.process_input(input);
        self.player.move_x(&mut self.world, self.level.facets());
        self.player.move_y(&mut self.world, self.level.facets());
        self.player.clamp_to_floor(&mut self.world, self.view_floor);
        self.collect_items();
        self.ticks += 1;

        let position = self.player_position();
        log::trace!(
            "tick {}: pos ({:.2}, {:.2}) speed ({:.2}, {:.2}) {:?}",
            self.ticks,
            position.x,
            position.y,
            self.player.x_speed,
            self.player.y_speed,
            self.player.state
        );
    }

    /// Play back a scripted input sequence
    pub fn run(&mut self, script: &[InputSegment]) {
        for segment in script {
            for tick in 0..segment.ticks {
                self.tick(Input {
                    left: segment.left,
                    right: segment.right,
                    jump: segment.jump && tick == 0,
                });
            }
        }
    }

    fn collect_items(&mut self) {
        for other in self.world.overlapping(self.player.body) {
            let Some(index) = self.items.iter().position(|(id, _)| *id == other) else {
                continue;
            };
            let (id, item) = self.items.remove(index);
            self.world.remove(id);
            log::info!("Got a {}! \"{}\"", item.name, item.description);
            self.player.items.push(item.name);
        }
    }

    /// Player centre position
    pub fn player_position(&self) -> Vec3 {
        self.player.position(&self.world)
    }

    /// Player movement state
    pub fn player_state(&self) -> PlayerState {
        self.player.state
    }

    /// Items picked up so far
    pub fn collected(&self) -> &[String] {
        &self.player.items
    }

    /// Ticks simulated so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The collision world
    pub fn world(&self) -> &CollisionWorld {
        &self.world
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlayerConfig;
    use approx::assert_relative_eq;
    use facet_collision::level::LevelConfig;

    /// One floor row at y = 108..124 with a block standing on its right end
    fn corridor(spawn: [f32; 2], items: Vec<ItemConfig>) -> DemoConfig {
        DemoConfig {
            view_floor: 400.0,
            player: PlayerConfig {
                spawn,
                ..PlayerConfig::default()
            },
            items,
            script: Vec::new(),
            level: LevelConfig {
                tile_width: 16.0,
                tile_height: 16.0,
                origin: [8.0, 100.0],
                tiles: vec![vec![0, 0, 0, 0, 3], vec![3, 3, 3, 3, 3]],
            },
        }
    }

    fn hold(ticks: u32, right: bool, jump: bool) -> InputSegment {
        InputSegment {
            ticks,
            right,
            jump,
            ..InputSegment::default()
        }
    }

    #[test]
    fn test_falls_and_lands_on_floor() {
        let mut session = Session::new(&corridor([24.0, 40.0], Vec::new())).unwrap();
        session.run(&[hold(120, false, false)]);

        assert_eq!(session.player_state(), PlayerState::Ground);
        assert_relative_eq!(session.player_position().y, 100.0);
        assert_relative_eq!(session.player_position().x, 24.0);
        assert_eq!(session.ticks(), 120);
    }

    #[test]
    fn test_walks_into_wall_and_stops() {
        let mut session = Session::new(&corridor([24.0, 100.0], Vec::new())).unwrap();
        session.run(&[hold(120, true, false)]);

        let position = session.player_position();
        // Wall face at x = 64, sphere radius 7.5
        assert!(position.x < 56.5, "walked through the wall: {}", position.x);
        assert!(position.x > 54.0, "stopped early: {}", position.x);
        assert_relative_eq!(position.y, 100.0);
        assert_eq!(session.player_state(), PlayerState::Ground);
    }

    #[test]
    fn test_jump_leaves_and_returns_to_ground() {
        let mut session = Session::new(&corridor([24.0, 100.0], Vec::new())).unwrap();

        session.run(&[hold(1, false, true)]);
        assert_eq!(session.player_state(), PlayerState::Jumping);
        assert!(session.player_position().y < 100.0);

        session.run(&[hold(200, false, false)]);
        assert_eq!(session.player_state(), PlayerState::Ground);
        assert_relative_eq!(session.player_position().y, 100.0);
    }

    #[test]
    fn test_walking_over_item_collects_it() {
        let gem = ItemConfig {
            name: "Gem".to_string(),
            description: "Shiny".to_string(),
            position: [48.0, 100.0],
        };
        let mut session = Session::new(&corridor([24.0, 100.0], vec![gem])).unwrap();
        assert_eq!(session.world().len(), 3);

        session.run(&[hold(120, true, false)]);
        assert_eq!(session.collected(), ["Gem".to_string()]);
        assert_eq!(session.world().len(), 2);
    }

    #[test]
    fn test_bad_level_is_reported() {
        let mut config = corridor([0.0, 0.0], Vec::new());
        config.level.tiles = vec![vec![7]];
        assert!(matches!(
            Session::new(&config),
            Err(DemoError::Collision(CollisionError::UnknownTile { .. }))
        ));
    }

    #[test]
    fn test_default_demo_runs() {
        let config = DemoConfig::default();
        let mut session = Session::new(&config).unwrap();
        session.run(&config.script);

        let position = session.player_position();
        assert!(position.x.is_finite() && position.y.is_finite());
        assert!(position.y + config.player.height / 2.0 <= config.view_floor + 1e-3);
    }
}
