//! arena — smallest runnable demo for the rust_sct scatter toolkit.
//!
//! Scatters six solo players and two 2-player teams into a ring around the
//! arena centre, three moves per batch, one batch per simulated second.  The
//! world is an in-memory stub; swap [`ArenaWorld`] for a real engine binding
//! to run against live terrain.

mod world;

use anyhow::Result;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use sct_core::{ActorId, Destination, GroupId, PlacementStyle, Position, RunConfig, Tick, WorldId};
use sct_relocate::{Movable, RelocateObserver, Relocator};
use sct_world::RegionGuard;

use world::ArenaWorld;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:          u64 = 42;
const ARENA:         WorldId = WorldId(0);
const CENTRE:        (f64, f64) = (0.0, 0.0);
const RADIUS:        f64 = 500.0;
const SURFACE_Y:     f64 = 64.0;

// ── Toy location solver ───────────────────────────────────────────────────────

/// Stand-in for the real placement engine: `count` well-spaced points on a
/// jittered ring (or square ring) around the centre.  A production solver
/// also checks surface blocks and exclusion zones; the scheduler does not
/// care where the coordinates came from.
fn solve_locations(count: usize, style: PlacementStyle, rng: &mut SmallRng) -> Vec<Destination> {
    (0..count)
        .map(|i| {
            let angle = (i as f64 / count as f64) * std::f64::consts::TAU;
            let r = RADIUS * rng.gen_range(0.8..1.0);
            let (x, z) = match style {
                PlacementStyle::Circular => (r * angle.cos(), r * angle.sin()),
                PlacementStyle::Square => {
                    // Project the ring point out to the enclosing square.
                    let scale = r / angle.cos().abs().max(angle.sin().abs());
                    (scale * angle.cos(), scale * angle.sin())
                }
            };
            Destination::new(ARENA, Position::new(CENTRE.0 + x, SURFACE_Y, CENTRE.1 + z))
        })
        .collect()
}

// ── Progress reporting ────────────────────────────────────────────────────────

struct ConsoleObserver;

impl RelocateObserver for ConsoleObserver {
    fn on_progress(&mut self, completed: usize, total: usize) {
        println!("scattered {completed}/{total}");
    }

    fn on_done(&mut self) {
        println!("scatter finished");
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let mut rng = SmallRng::seed_from_u64(SEED);

    let config = RunConfig {
        batch_size: 3,
        ..RunConfig::default()
    };
    config.validate()?;

    // Roster: six solos plus two teams of two.
    let mut world = ArenaWorld::new();
    for i in 0..6 {
        world.add_actor(ActorId(i), &format!("player{i}"));
    }
    world.add_actor(ActorId(6), "alice");
    world.add_actor(ActorId(7), "bob");
    world.add_actor(ActorId(8), "carol");
    world.add_actor(ActorId(9), "dave");
    world.add_team(GroupId(0), &[ActorId(6), ActorId(7)]);
    world.add_team(GroupId(1), &[ActorId(8), ActorId(9)]);

    let movables: Vec<Movable> = (0..6)
        .map(ActorId)
        .map(Movable::Single)
        .chain([Movable::Group(GroupId(0)), Movable::Group(GroupId(1))])
        .collect();
    let destinations = solve_locations(movables.len(), config.style, &mut rng);

    println!(
        "starting scatter of {} players/teams ({} style, {} per batch, every {} ticks)",
        movables.len(),
        config.style,
        config.batch_size,
        config.interval_ticks,
    );

    let mut relocator = Relocator::new(RegionGuard::new(config.view_distance));
    relocator.start_with(&config, destinations, movables, Tick::ZERO, Box::new(ConsoleObserver))?;

    // The engine step loop: one relocator tick and one eviction sweep per
    // step.  While the run is live every sweep is vetoed.
    let mut now = Tick::ZERO;
    while relocator.is_active() {
        relocator.tick(now, &mut world);
        world.sweep_unloads(relocator.guard());
        now = now + 1;
    }

    // Run is over: the next sweep reclaims everything.
    world.sweep_unloads(relocator.guard());

    println!(
        "done at {now}: {} actors moved, {} regions loaded, {} unload attempts vetoed, {} regions reclaimed after",
        world.positions.len(),
        world.loads_issued,
        world.unloads_vetoed,
        world.unloads_done,
    );
    Ok(())
}
