//! Headless driver loop: a box hanging from an elastic tether.
//!
//! Stands in for a windowed host: the discrete commands a renderer
//! would bind to input (reset to equilibrium, teleport to the cursor)
//! run on a fixed schedule instead, and state is printed rather than
//! drawn.

use tether2d::{Color, Simulation, Vec2, WorldConfig};

fn main() -> tether2d::Result<()> {
    let mut sim = Simulation::new(WorldConfig::default());

    let body = sim.spawn_box(Vec2::ZERO, Vec2::splat(20.0), 10.0, Color::WHITE)?;
    let tether = sim.tether(Vec2::new(400.0, 10.0), body, 10.0, 30.0)?;
    sim.reset_to_equilibrium(tether)?;

    // Flick the box off to the side and let it swing back in.
    sim.teleport(body, Vec2::new(500.0, 200.0))?;

    for tick in 0..240u32 {
        sim.step();
        if tick % 30 == 0 {
            let body = sim.body(body).expect("body should exist");
            let center = body.center();
            println!(
                "tick {tick:3}: center = ({:7.2}, {:7.2})  speed = {:6.3}",
                center.x,
                center.y,
                body.velocity().length()
            );
        }
    }

    sim.reset_to_equilibrium(tether)?;
    let body = sim.body(body).expect("body should exist");
    let rect = body.rect();
    let anchor = sim.world().connector(tether).expect("tether").anchor();
    println!(
        "at rest: box at ({:.1}, {:.1}) {}x{}, tether from ({:.0}, {:.0}) to ({:.1}, {:.1})",
        rect.x,
        rect.y,
        rect.width,
        rect.height,
        anchor.x,
        anchor.y,
        body.center().x,
        body.center().y
    );
    Ok(())
}
