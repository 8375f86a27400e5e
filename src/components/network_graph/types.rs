use serde::Deserialize;

/// A labeled point in the topology. Positions live in the simulation, not
/// in the wire document.
#[derive(Clone, Debug, Deserialize)]
pub struct GraphNode {
	pub name: String,
}

/// A connection between two nodes, given as indices into the document's
/// `nodes` array. Direction only matters for which endpoint a line starts
/// at; nothing directed is drawn.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct GraphLink {
	pub source: usize,
	pub target: usize,
}

/// The full payload served by the REST endpoint, loaded once per page view
/// and immutable afterwards.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GraphDocument {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_rest_payload() {
		let body = r#"{
			"nodes": [ { "name": "dc1" }, { "name": "dc2" }, { "name": "vnf1" } ],
			"links": [ { "source": 0, "target": 1 }, { "source": 1, "target": 2 } ]
		}"#;
		let doc: GraphDocument = serde_json::from_str(body).unwrap();
		assert_eq!(doc.nodes.len(), 3);
		assert_eq!(doc.links.len(), 2);
		assert_eq!(doc.nodes[0].name, "dc1");
		assert_eq!(doc.links[1].source, 1);
		assert_eq!(doc.links[1].target, 2);
	}

	#[test]
	fn empty_graph_is_valid() {
		let doc: GraphDocument = serde_json::from_str(r#"{"nodes":[],"links":[]}"#).unwrap();
		assert!(doc.nodes.is_empty());
		assert!(doc.links.is_empty());
	}

	#[test]
	fn rejects_non_numeric_link_endpoints() {
		let body = r#"{"nodes":[{"name":"a"}],"links":[{"source":"a","target":0}]}"#;
		assert!(serde_json::from_str::<GraphDocument>(body).is_err());
	}

	#[test]
	fn rejects_non_json_body() {
		assert!(serde_json::from_str::<GraphDocument>("<html>oops</html>").is_err());
	}
}
