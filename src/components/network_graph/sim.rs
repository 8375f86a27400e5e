use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::warn;

use super::types::GraphDocument;

/// Layout tuning. Charge is mutual repulsion, spring stiffness stands in
/// for a target edge length: stiffer springs pull linked nodes closer.
#[derive(Clone, Copy, Debug)]
pub struct SimConfig {
	pub force_charge: f32,
	pub force_spring: f32,
	pub force_max: f32,
	pub node_speed: f32,
	pub damping_factor: f32,
}

impl Default for SimConfig {
	fn default() -> Self {
		Self {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		}
	}
}

/// Wrapper around the external force-directed engine. The engine owns
/// every node's position; everything else only reads positions back after
/// a step, or writes them through the drag path.
pub struct Simulation {
	graph: ForceGraph<usize, ()>,
	handles: Vec<DefaultNodeIdx>,
	edges: Vec<(usize, usize)>,
}

impl Simulation {
	/// Build the engine graph from a document: one engine node per
	/// document node (seeded on a circle around the viewport center so the
	/// first frames do not start from a single degenerate stack), one
	/// engine edge per link whose index endpoints resolve. Dangling links
	/// are skipped, not fatal.
	pub fn new(doc: &GraphDocument, config: SimConfig, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: config.force_charge,
			force_spring: config.force_spring,
			force_max: config.force_max,
			node_speed: config.node_speed,
			damping_factor: config.damping_factor,
		});

		let mut handles = Vec::with_capacity(doc.nodes.len());
		for (slot, _) in doc.nodes.iter().enumerate() {
			let angle = (slot as f64) * 2.0 * PI / doc.nodes.len().max(1) as f64;
			let (x, y) = (
				(width / 2.0 + 100.0 * angle.cos()) as f32,
				(height / 2.0 + 100.0 * angle.sin()) as f32,
			);
			handles.push(graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: slot,
			}));
		}

		let mut edges = Vec::with_capacity(doc.links.len());
		for link in &doc.links {
			match (handles.get(link.source), handles.get(link.target)) {
				(Some(&src), Some(&tgt)) => {
					graph.add_edge(src, tgt, EdgeData::default());
					edges.push((link.source, link.target));
				}
				_ => warn!(
					"skipping link {} -> {}: endpoint outside document",
					link.source, link.target
				),
			}
		}

		Self {
			graph,
			handles,
			edges,
		}
	}

	/// Number of nodes the engine holds.
	pub fn node_count(&self) -> usize {
		self.handles.len()
	}

	/// Resolved link endpoints as document slot pairs, in document order.
	pub fn edges(&self) -> &[(usize, usize)] {
		&self.edges
	}

	/// Advance the layout by `dt` seconds.
	pub fn step(&mut self, dt: f32) {
		self.graph.update(dt);
	}

	/// Visit every node's current position as (slot, x, y).
	pub fn visit_positions(&self, mut f: impl FnMut(usize, f32, f32)) {
		self.graph
			.visit_nodes(|node| f(node.data.user_data, node.x(), node.y()));
	}

	/// Current position of a single slot, if it exists.
	pub fn position(&self, slot: usize) -> Option<(f32, f32)> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.data.user_data == slot {
				found = Some((node.x(), node.y()));
			}
		});
		found
	}

	/// Move `slot` to (x, y) and pin it there. The rest of the layout
	/// keeps settling around the pinned node on subsequent steps.
	pub fn drag_to(&mut self, slot: usize, x: f32, y: f32) {
		self.graph.visit_nodes_mut(|node| {
			if node.data.user_data == slot {
				node.data.x = x;
				node.data.y = y;
				node.data.is_anchor = true;
			}
		});
	}
}
