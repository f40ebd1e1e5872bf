//! Headless platformer demo
//!
//! Runs a scripted session against a tile level and logs what happens. Pass a
//! `.ron` or `.toml` config path to override the built-in level and script.

mod config;
mod player;
mod session;

use facet_collision::config::Config;
use facet_collision::foundation::logging;

use config::DemoConfig;
use session::{DemoError, Session};

fn main() -> Result<(), DemoError> {
    logging::init_with_level(log::LevelFilter::Info);

    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading demo config from {}", path);
            DemoConfig::load_from_file(path)?
        }
        None => DemoConfig::default(),
    };

    let mut session = Session::new(&config)?;
    session.run(&config.script);

    let position = session.player_position();
    log::info!(
        "Finished after {} ticks at ({:.1}, {:.1}), state {:?}",
        session.ticks(),
        position.x,
        position.y,
        session.player_state()
    );
    log::info!(
        "Collected: {:?} ({} bodies left in the world)",
        session.collected(),
        session.world().len()
    );
    for (id, body) in session.world().iter() {
        log::debug!("{:?} '{}' at {:?}", id, body.name, body.transform.map(|t| t.position));
    }

    Ok(())
}
