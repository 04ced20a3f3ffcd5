//! Exchange System
//!
//! The step engine. One tick: every agent, in the order the activation
//! strategy produces, moves to a random neighboring cell and then gives
//! one unit of wealth to a random co-located peer. Agents act strictly
//! one after another, so each agent sees the positions and balances left
//! behind by the agents before it in the same tick.

use bevy_ecs::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use sim_events::{CellRef, Event};

use crate::components::agent::{Agent, AgentId, Wealth};
use crate::components::grid::{Grid, GridPos, Position};
use crate::events::TickEvents;
use crate::systems::activation::Activation;
use crate::{SimRng, SimulationState};

/// Advance the model by one tick, mutating world state in place.
pub fn advance_tick(world: &mut World) {
    let wealth_before = total_wealth(world);

    let mut agent_query = world.query_filtered::<Entity, With<Agent>>();
    let mut agents: Vec<Entity> = agent_query.iter(world).collect();

    world.resource_scope(|world, mut rng: Mut<SimRng>| {
        world.resource_scope(|world, mut grid: Mut<Grid>| {
            world.resource_scope(|world, mut events: Mut<TickEvents>| {
                let tick = world.resource::<SimulationState>().current_tick;
                let activation = *world.resource::<Activation>();
                activation.order(&mut agents, &mut rng.0);

                for &agent in &agents {
                    act(world, &mut grid, &mut rng.0, &mut events, tick, agent);
                }
            });
        });
    });

    world.resource_mut::<SimulationState>().current_tick += 1;

    debug_assert_eq!(
        total_wealth(world),
        wealth_before,
        "wealth must be conserved across a tick"
    );
}

/// One agent's turn: move, then give.
fn act(
    world: &mut World,
    grid: &mut Grid,
    rng: &mut SmallRng,
    events: &mut TickEvents,
    tick: u64,
    agent: Entity,
) {
    let Some(position) = world.get::<Position>(agent).copied() else {
        return;
    };

    let cell = match grid.random_neighbor(position.cell, rng) {
        Some(destination) => {
            grid.relocate(agent, position.cell, destination);
            if let Some(mut mirror) = world.get_mut::<Position>(agent) {
                mirror.cell = destination;
            }
            events.push(Event::movement(
                tick,
                id_of(world, agent),
                cell_ref(position.cell),
                cell_ref(destination),
            ));
            destination
        }
        // A 1x1 board has no distinct neighbors; the agent stays put.
        None => position.cell,
    };

    let Some(wealth) = world.get::<Wealth>(agent).copied() else {
        return;
    };
    if wealth.is_broke() {
        return;
    }

    let peers: Vec<Entity> = grid
        .occupants(cell)
        .iter()
        .copied()
        .filter(|&occupant| occupant != agent)
        .collect();
    let Some(&recipient) = peers.choose(rng) else {
        return;
    };

    if transfer_unit(world, agent, recipient) {
        events.push(Event::transfer(
            tick,
            id_of(world, agent),
            id_of(world, recipient),
        ));
    }
}

/// Move one unit of wealth between two agents. Returns false without
/// touching either balance when the giver is broke or either party is
/// missing a wealth component.
pub fn transfer_unit(world: &mut World, giver: Entity, recipient: Entity) -> bool {
    debug_assert_ne!(giver, recipient, "an agent cannot give to itself");

    if world.get::<Wealth>(recipient).is_none() {
        return false;
    }
    let Some(mut giver_wealth) = world.get_mut::<Wealth>(giver) else {
        return false;
    };
    if !giver_wealth.give_unit() {
        return false;
    }
    if let Some(mut recipient_wealth) = world.get_mut::<Wealth>(recipient) {
        recipient_wealth.receive_unit();
    }
    true
}

/// Sum of all agents' wealth.
pub fn total_wealth(world: &mut World) -> u64 {
    let mut query = world.query::<&Wealth>();
    query.iter(world).map(|wealth| u64::from(wealth.0)).sum()
}

fn id_of(world: &World, agent: Entity) -> String {
    world
        .get::<AgentId>(agent)
        .map(|id| id.0.clone())
        .unwrap_or_default()
}

fn cell_ref(pos: GridPos) -> CellRef {
    CellRef::new(pos.x, pos.y)
}
