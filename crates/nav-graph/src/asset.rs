//! JSON graph asset: build once at authoring time, load once at start-up.
//!
//! The asset is a JSON array with one record per vertex:
//!
//! ```json
//! [
//!   { "id": 0, "position": [3.0, 7.0, 0.0], "adjacent": [1, 3] },
//!   { "id": 1, "position": [7.0, 7.0, 0.0], "adjacent": [0, 2] }
//! ]
//! ```
//!
//! The third position component is written as `0.0` and ignored on load.
//! Loading runs the same validation as [`VisibilityGraph::from_vertices`].

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use nav_core::{Point, VertexId};

use crate::{GraphResult, Vertex, VisibilityGraph};

/// One persisted vertex.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VertexRecord {
    pub id: u32,
    pub position: [f32; 3],
    pub adjacent: Vec<u32>,
}

impl From<&Vertex> for VertexRecord {
    fn from(v: &Vertex) -> Self {
        Self {
            id:       v.id.0,
            position: [v.position.x, v.position.y, 0.0],
            adjacent: v.adjacent().iter().map(|u| u.0).collect(),
        }
    }
}

impl From<VertexRecord> for Vertex {
    fn from(r: VertexRecord) -> Self {
        Vertex::with_adjacent(
            VertexId(r.id),
            Point::new(r.position[0], r.position[1]),
            r.adjacent.into_iter().map(VertexId).collect(),
        )
    }
}

impl VisibilityGraph {
    pub fn to_records(&self) -> Vec<VertexRecord> {
        self.vertices().iter().map(VertexRecord::from).collect()
    }

    /// Rebuild a graph from persisted records, validating ids and symmetry.
    pub fn from_records(records: Vec<VertexRecord>) -> GraphResult<Self> {
        VisibilityGraph::from_vertices(records.into_iter().map(Vertex::from).collect())
    }

    pub fn read_json<R: Read>(reader: R) -> GraphResult<Self> {
        let records: Vec<VertexRecord> = serde_json::from_reader(reader)?;
        Self::from_records(records)
    }

    pub fn write_json<W: Write>(&self, writer: W) -> GraphResult<()> {
        serde_json::to_writer_pretty(writer, &self.to_records())?;
        Ok(())
    }

    /// Load a graph asset file.
    pub fn load(path: &Path) -> GraphResult<Self> {
        let graph = Self::read_json(BufReader::new(File::open(path)?))?;
        debug!(path = %path.display(), vertices = graph.vertex_count(), "loaded graph asset");
        Ok(graph)
    }

    /// Write a graph asset file, replacing any existing one.
    pub fn save(&self, path: &Path) -> GraphResult<()> {
        let mut out = BufWriter::new(File::create(path)?);
        self.write_json(&mut out)?;
        out.flush()?;
        Ok(())
    }
}
