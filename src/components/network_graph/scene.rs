use super::palette::CategoryPalette;
use super::sim::Simulation;
use super::types::GraphDocument;

/// One filled circle plus a name label, drawn at (x, y). The position is
/// refreshed from the simulation every tick.
#[derive(Clone, Debug)]
pub struct NodeVisual {
	pub label: String,
	pub color: &'static str,
	pub x: f64,
	pub y: f64,
}

/// One line per resolved link. `source`/`target` are document slots; the
/// endpoint coordinates mirror those nodes' current positions.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinkVisual {
	pub source: usize,
	pub target: usize,
	pub x1: f64,
	pub y1: f64,
	pub x2: f64,
	pub y2: f64,
}

/// The renderer's visual slots: built once per document, then only
/// resynced. Nothing here allocates after construction.
pub struct Scene {
	pub nodes: Vec<NodeVisual>,
	pub links: Vec<LinkVisual>,
}

impl Scene {
	/// One node visual per document node (color keyed by name), one link
	/// visual per link the simulation resolved. Positions are synced
	/// immediately so the first frame draws the seeded layout.
	pub fn new(doc: &GraphDocument, sim: &Simulation) -> Self {
		let mut palette = CategoryPalette::new();
		let nodes = doc
			.nodes
			.iter()
			.map(|node| NodeVisual {
				label: node.name.clone(),
				color: palette.color_of(&node.name),
				x: 0.0,
				y: 0.0,
			})
			.collect();
		let links = sim
			.edges()
			.iter()
			.map(|&(source, target)| LinkVisual {
				source,
				target,
				..Default::default()
			})
			.collect();

		let mut scene = Self { nodes, links };
		scene.sync(sim);
		scene
	}

	/// Per-tick resync: copy each node's position into its visual, then
	/// each link's endpoints from its two nodes. O(nodes + links) with no
	/// allocation; safe to call any number of times.
	pub fn sync(&mut self, sim: &Simulation) {
		sim.visit_positions(|slot, x, y| {
			if let Some(node) = self.nodes.get_mut(slot) {
				node.x = x as f64;
				node.y = y as f64;
			}
		});
		for link in &mut self.links {
			let (a, b) = (&self.nodes[link.source], &self.nodes[link.target]);
			link.x1 = a.x;
			link.y1 = a.y;
			link.x2 = b.x;
			link.y2 = b.y;
		}
	}

	/// Topmost node whose center lies within `radius` of (x, y).
	pub fn node_at(&self, x: f64, y: f64, radius: f64) -> Option<usize> {
		let mut found = None;
		for (slot, node) in self.nodes.iter().enumerate() {
			let (dx, dy) = (node.x - x, node.y - y);
			if (dx * dx + dy * dy).sqrt() < radius {
				found = Some(slot);
			}
		}
		found
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::network_graph::sim::SimConfig;
	use crate::components::network_graph::types::{GraphLink, GraphNode};

	fn two_node_doc() -> GraphDocument {
		GraphDocument {
			nodes: vec![
				GraphNode { name: "A".into() },
				GraphNode { name: "B".into() },
			],
			links: vec![GraphLink {
				source: 0,
				target: 1,
			}],
		}
	}

	fn build(doc: &GraphDocument) -> (Simulation, Scene) {
		let sim = Simulation::new(doc, SimConfig::default(), 960.0, 500.0);
		let scene = Scene::new(doc, &sim);
		(sim, scene)
	}

	#[test]
	fn one_visual_per_node_and_link() {
		let doc = two_node_doc();
		let (_, scene) = build(&doc);
		assert_eq!(scene.nodes.len(), 2);
		assert_eq!(scene.links.len(), 1);
		assert_eq!(scene.nodes[0].label, "A");
		assert_eq!(scene.nodes[1].label, "B");
	}

	#[test]
	fn node_color_is_a_pure_function_of_name() {
		let doc = GraphDocument {
			nodes: vec![
				GraphNode { name: "dc".into() },
				GraphNode { name: "vnf".into() },
				GraphNode { name: "dc".into() },
			],
			links: vec![],
		};
		let (_, scene) = build(&doc);
		assert_eq!(scene.nodes[0].color, scene.nodes[2].color);
		assert_ne!(scene.nodes[0].color, scene.nodes[1].color);
	}

	#[test]
	fn sync_mirrors_driver_positions_into_lines_and_transforms() {
		let doc = two_node_doc();
		let (mut sim, mut scene) = build(&doc);

		sim.drag_to(0, 10.0, 20.0);
		sim.drag_to(1, 30.0, 40.0);
		scene.sync(&sim);

		assert_eq!((scene.nodes[0].x, scene.nodes[0].y), (10.0, 20.0));
		assert_eq!((scene.nodes[1].x, scene.nodes[1].y), (30.0, 40.0));
		let link = scene.links[0];
		assert_eq!((link.x1, link.y1), (10.0, 20.0));
		assert_eq!((link.x2, link.y2), (30.0, 40.0));
	}

	#[test]
	fn endpoints_track_positions_after_every_tick() {
		let doc = two_node_doc();
		let (mut sim, mut scene) = build(&doc);

		for _ in 0..5 {
			sim.step(0.016);
			scene.sync(&sim);
			let link = scene.links[0];
			assert_eq!((link.x1, link.y1), (scene.nodes[0].x, scene.nodes[0].y));
			assert_eq!((link.x2, link.y2), (scene.nodes[1].x, scene.nodes[1].y));
		}
	}

	#[test]
	fn sync_is_idempotent_for_unchanged_positions() {
		let doc = two_node_doc();
		let (sim, mut scene) = build(&doc);

		scene.sync(&sim);
		let (first_nodes, first_links): (Vec<_>, Vec<_>) = (
			scene.nodes.iter().map(|n| (n.x, n.y)).collect(),
			scene.links.iter().map(|l| (l.x1, l.y1, l.x2, l.y2)).collect(),
		);
		scene.sync(&sim);
		let again: Vec<_> = scene.nodes.iter().map(|n| (n.x, n.y)).collect();
		assert_eq!(first_nodes, again);
		let links_again: Vec<_> = scene.links.iter().map(|l| (l.x1, l.y1, l.x2, l.y2)).collect();
		assert_eq!(first_links, links_again);
	}

	#[test]
	fn drag_is_reflected_on_the_next_sync() {
		let doc = two_node_doc();
		let (mut sim, mut scene) = build(&doc);
		scene.sync(&sim);
		let before = (scene.nodes[0].x, scene.nodes[0].y);

		sim.drag_to(0, 444.0, 111.0);
		scene.sync(&sim);
		assert_ne!((scene.nodes[0].x, scene.nodes[0].y), before);
		assert_eq!((scene.nodes[0].x, scene.nodes[0].y), (444.0, 111.0));
	}

	#[test]
	fn hit_test_finds_node_within_radius() {
		let doc = two_node_doc();
		let (mut sim, mut scene) = build(&doc);
		sim.drag_to(0, 100.0, 100.0);
		sim.drag_to(1, 300.0, 300.0);
		scene.sync(&sim);

		assert_eq!(scene.node_at(103.0, 98.0, 12.0), Some(0));
		assert_eq!(scene.node_at(300.0, 305.0, 12.0), Some(1));
		assert_eq!(scene.node_at(200.0, 200.0, 12.0), None);
	}

	#[test]
	fn dangling_links_never_reach_the_scene() {
		let doc = GraphDocument {
			nodes: vec![
				GraphNode { name: "A".into() },
				GraphNode { name: "B".into() },
			],
			links: vec![
				GraphLink {
					source: 0,
					target: 1,
				},
				GraphLink {
					source: 0,
					target: 9,
				},
			],
		};
		let (_, scene) = build(&doc);
		assert_eq!(scene.links.len(), 1);
	}
}
