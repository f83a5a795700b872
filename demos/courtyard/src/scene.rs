//! The courtyard scene: four pillars, a long north wall, an east partition,
//! and a handful of agents crossing between them.

use serde::Deserialize;

use nav_agent::AgentConfig;
use nav_core::{Point, SimConfig};
use nav_graph::Obstacle;

/// Scene file layout.
#[derive(Debug, Deserialize)]
pub struct Scene {
    pub sim: SimConfig,
    /// Clearance radius the graph is built for.
    pub radius: f32,
    pub obstacles: Vec<Obstacle>,
    /// Extra free-standing graph vertices (doorways, crossings).
    #[serde(default)]
    pub markers: Vec<Point>,
    pub agents: Vec<AgentSpec>,
}

#[derive(Debug, Deserialize)]
pub struct AgentSpec {
    pub name: String,
    pub start: Point,
    pub destination: Point,
    #[serde(default)]
    pub config: AgentConfig,
}

pub fn load(json: &str) -> serde_json::Result<Scene> {
    serde_json::from_str(json)
}

// Coordinates in metres, y up.  The north wall only exposes its two south
// corners; the east partition exposes a diagonal pair.
pub const COURTYARD_JSON: &str = r#"{
  "sim": { "tick_duration_secs": 0.05, "total_ticks": 4000 },
  "radius": 0.5,
  "obstacles": [
    { "center": { "x": 10.0, "y": 10.0 }, "half_extents": { "x": 1.5, "y": 1.5 } },
    { "center": { "x": 20.0, "y": 10.0 }, "half_extents": { "x": 1.5, "y": 1.5 } },
    { "center": { "x": 10.0, "y": 20.0 }, "half_extents": { "x": 1.5, "y": 1.5 } },
    { "center": { "x": 20.0, "y": 20.0 }, "half_extents": { "x": 1.5, "y": 1.5 } },
    {
      "center": { "x": 15.0, "y": 30.0 }, "half_extents": { "x": 10.0, "y": 0.5 },
      "settings": { "corners_visible": 2, "arrangement": 3 }
    },
    {
      "center": { "x": 30.0, "y": 15.0 }, "half_extents": { "x": 0.5, "y": 8.0 },
      "settings": { "corners_visible": 2, "arrangement": 1, "consecutive": false }
    }
  ],
  "markers": [ { "x": 15.0, "y": 15.0 } ],
  "agents": [
    { "name": "porter",   "start": { "x": 0.0,  "y": 0.0 },  "destination": { "x": 25.0, "y": 25.0 },
      "config": { "speed": 1.4, "radius": 0.5 } },
    { "name": "gardener", "start": { "x": 15.0, "y": 15.0 }, "destination": { "x": 35.0, "y": 5.0 },
      "config": { "speed": 1.0, "radius": 0.5, "stopping_distance": 0.25 } },
    { "name": "courier",  "start": { "x": 0.0,  "y": 25.0 }, "destination": { "x": 35.0, "y": 25.0 },
      "config": { "speed": 2.5, "radius": 0.5 } },
    { "name": "visitor",  "start": { "x": 15.0, "y": 0.0 },  "destination": { "x": 10.0, "y": 10.0 },
      "config": { "speed": 1.2, "radius": 0.5 } }
  ]
}"#;
