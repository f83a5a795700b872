//! courtyard — smallest end-to-end example for the simple_nav workspace.
//!
//! Builds a visibility graph for a walled courtyard, writes it out as a JSON
//! asset, reloads it the way a game would at start-up, then walks four
//! agents to their destinations and prints what happened.
//!
//! Set `RUST_LOG=debug` to see every path query.

mod scene;

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nav_agent::{AgentEvent, AgentState};
use nav_core::{AgentId, Tick};
use nav_graph::{ObstacleField, VisibilityGraph, VisibilityGraphBuilder};
use nav_sim::{WorldBuilder, WorldObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR: &str = "output/courtyard";

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default, Clone)]
struct Outcome {
    planned_length: Option<f32>,
    arrived_at: Option<Tick>,
    no_path: bool,
}

/// Collects one `Outcome` per agent.
struct SummaryObserver {
    outcomes: Vec<Outcome>,
}

impl SummaryObserver {
    fn new(agent_count: usize) -> Self {
        Self { outcomes: vec![Outcome::default(); agent_count] }
    }
}

impl WorldObserver for SummaryObserver {
    fn on_agent_event(&mut self, tick: Tick, agent: AgentId, event: &AgentEvent) {
        let outcome = &mut self.outcomes[agent.index()];
        match event {
            AgentEvent::PathFound { length, .. } => outcome.planned_length = Some(*length),
            AgentEvent::PathNotFound => outcome.no_path = true,
            AgentEvent::Arrived => outcome.arrived_at = Some(tick),
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    println!("=== courtyard — simple_nav visibility-graph navigation ===");
    println!();

    // 1. Load the scene.
    let scene = scene::load(scene::COURTYARD_JSON)?;
    println!(
        "Scene: {} obstacles, {} markers, {} agents, radius {}",
        scene.obstacles.len(),
        scene.markers.len(),
        scene.agents.len(),
        scene.radius
    );

    // 2. Build the graph.
    let field = ObstacleField::from_obstacles(&scene.obstacles);
    let mut builder = VisibilityGraphBuilder::new(scene.radius)?;
    for obstacle in &scene.obstacles {
        builder.add_obstacle(obstacle)?;
    }
    for &marker in &scene.markers {
        builder.add_vertex(marker);
    }
    let t0 = Instant::now();
    let graph = builder.build(&field)?;
    println!(
        "Visibility graph: {} vertices, {} edges ({:.3} ms)",
        graph.vertex_count(),
        graph.edge_count(),
        t0.elapsed().as_secs_f64() * 1e3
    );

    // 3. Round-trip through the asset file.
    fs::create_dir_all(OUTPUT_DIR)?;
    let asset = Path::new(OUTPUT_DIR).join("graph.json");
    graph.save(&asset)?;
    let graph = Arc::new(VisibilityGraph::load(&asset)?);
    info!(path = %asset.display(), "graph asset written and reloaded");
    println!();

    // 4. Spawn agents.
    let mut builder = WorldBuilder::new(scene.sim.clone(), Arc::clone(&graph), field);
    for spec in &scene.agents {
        builder = builder.agent_heading_to(spec.start, spec.config, spec.destination);
    }
    let mut world = builder.build()?;

    // 5. Run until everyone has arrived or given up.
    let mut obs = SummaryObserver::new(world.agent_count());
    let t0 = Instant::now();
    let ran = world.run_until_settled(scene.sim.total_ticks, &mut obs)?;
    println!(
        "Ran {ran} ticks ({:.1} s simulated) in {:.3} s",
        ran as f64 * f64::from(scene.sim.tick_duration_secs),
        t0.elapsed().as_secs_f64()
    );
    if !world.is_settled() {
        println!("(tick budget exhausted before every agent settled)");
    }
    println!();

    // 6. Summary table.
    println!(
        "{:<10} {:<10} {:<18} {:<10} {:<10}",
        "Agent", "State", "Position", "Planned", "Arrived"
    );
    println!("{}", "-".repeat(62));
    for ((id, agent), spec) in world.agents().zip(&scene.agents) {
        let outcome = &obs.outcomes[id.index()];
        let state = match agent.state() {
            AgentState::Idle if outcome.no_path => "no path",
            AgentState::Idle => "idle",
            AgentState::PathPending => "pending",
            AgentState::Following => "moving",
            AgentState::Arrived => "arrived",
        };
        let planned = outcome
            .planned_length
            .map_or_else(|| "-".to_string(), |l| format!("{l:.2} m"));
        let arrived = outcome
            .arrived_at
            .map_or_else(|| "-".to_string(), |t| t.to_string());
        println!(
            "{:<10} {:<10} {:<18} {:<10} {:<10}",
            spec.name,
            state,
            agent.position().to_string(),
            planned,
            arrived
        );
    }

    Ok(())
}
