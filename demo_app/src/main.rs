//! Headless swept-AABB demo
//!
//! Walks an actor through a stage one step at a time and stops it at the
//! first contact a sweep reports. Pass a stage file (TOML or RON) as the
//! first argument to override the built-in stage; set `RUST_LOG=debug`
//! to see every step.

use swept_aabb::foundation::logging;
use swept_aabb::prelude::*;

fn main() {
    logging::init();

    let stage = match std::env::args().nth(1) {
        Some(path) => match StageConfig::load_from_file(&path) {
            Ok(stage) => {
                log::info!("loaded stage from {path}");
                stage
            }
            Err(err) => {
                log::error!("failed to load stage {path}: {err}");
                std::process::exit(1);
            }
        },
        None => StageConfig::default(),
    };

    log::info!(
        "stage: {} solids, actor at ({}, {}), velocity ({}, {})",
        stage.solids.len(),
        stage.actor.x,
        stage.actor.y,
        stage.velocity.x,
        stage.velocity.y
    );

    let mut actor = stage.actor;
    for step in 0..stage.steps {
        let intended = Rect::new(
            actor.x + stage.velocity.x,
            actor.y + stage.velocity.y,
            actor.width,
            actor.height,
        );

        // Stop at the first contact any solid reports. Picking the
        // earliest contact across solids, or sliding along the untouched
        // axis, are resolution policies a real game would layer on here.
        let contact = stage
            .solids
            .iter()
            .find_map(|solid| sweep_rect(solid, &actor, &intended));

        if let Some(contact) = contact {
            actor = Rect::new(
                contact.position.x,
                contact.position.y,
                actor.width,
                actor.height,
            );
            log::info!(
                "step {step}: contact at t = {:.3} with face normal ({}, {}), actor stopped at ({}, {})",
                contact.t,
                contact.normal.x,
                contact.normal.y,
                actor.x,
                actor.y
            );
            break;
        }

        actor = intended;
        log::debug!("step {step}: no contact, actor at ({}, {})", actor.x, actor.y);
    }

    log::info!("final actor position: ({}, {})", actor.x, actor.y);
}
