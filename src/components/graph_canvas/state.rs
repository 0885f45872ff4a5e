use crate::graph::{Graph, Node, NodeId};
use crate::session::Selection;

pub const NODE_RADIUS: f64 = 20.0;
pub const ARROW_SIZE: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeStyle {
	pub fill: &'static str,
	pub stroke: &'static str,
	pub line_width: f64,
}

/// Endpoints keep their colors even once visited.
pub fn node_style(selection: Selection, id: NodeId, visited: bool, hovered: bool) -> NodeStyle {
	let is_endpoint = selection.source == Some(id) || selection.dest == Some(id);
	let fill = if selection.source == Some(id) {
		"lightgreen"
	} else if selection.dest == Some(id) {
		"lightcoral"
	} else if visited {
		"lightblue"
	} else {
		"white"
	};
	NodeStyle {
		fill,
		stroke: if is_endpoint { "black" } else { "#888" },
		line_width: if hovered { 3.5 } else { 2.0 },
	}
}

/// Straight edge between two node centers, trimmed to the node outlines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
	pub start: (f64, f64),
	pub end: (f64, f64),
	/// Unit direction from start to end.
	pub dir: (f64, f64),
}

pub fn edge_segment(from: &Node, to: &Node) -> Option<Segment> {
	let (dx, dy) = (to.x - from.x, to.y - from.y);
	let dist = (dx * dx + dy * dy).sqrt();
	if dist < 0.001 {
		return None;
	}
	let (ux, uy) = (dx / dist, dy / dist);
	Some(Segment {
		start: (from.x + ux * NODE_RADIUS, from.y + uy * NODE_RADIUS),
		end: (to.x - ux * NODE_RADIUS, to.y - uy * NODE_RADIUS),
		dir: (ux, uy),
	})
}

/// Topmost node under the point; later nodes are painted over earlier ones.
pub fn node_at_position(graph: &Graph, x: f64, y: f64) -> Option<NodeId> {
	graph
		.nodes()
		.iter()
		.rev()
		.find(|node| {
			let (dx, dy) = (node.x - x, node.y - y);
			(dx * dx + dy * dy).sqrt() <= NODE_RADIUS
		})
		.map(|node| node.id)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn graph(points: &[(f64, f64)]) -> Graph {
		let nodes = points
			.iter()
			.enumerate()
			.map(|(i, &(x, y))| Node::new(i, x, y))
			.collect();
		Graph::from_parts(nodes, vec![]).unwrap()
	}

	#[test]
	fn hit_test_prefers_topmost() {
		let g = graph(&[(100.0, 100.0), (110.0, 100.0), (300.0, 300.0)]);
		assert_eq!(node_at_position(&g, 105.0, 100.0), Some(NodeId(1)));
		assert_eq!(node_at_position(&g, 85.0, 100.0), Some(NodeId(0)));
		assert_eq!(node_at_position(&g, 300.0, 319.0), Some(NodeId(2)));
		assert_eq!(node_at_position(&g, 200.0, 200.0), None);
	}

	#[test]
	fn segment_is_trimmed_by_radius() {
		let a = Node::new(0, 0.0, 0.0);
		let b = Node::new(1, 100.0, 0.0);
		let seg = edge_segment(&a, &b).unwrap();
		assert_eq!(seg.start, (20.0, 0.0));
		assert_eq!(seg.end, (80.0, 0.0));
		assert_eq!(seg.dir, (1.0, 0.0));
		assert!(edge_segment(&a, &a.clone()).is_none());
	}

	#[test]
	fn styles_by_role() {
		let selection = Selection {
			source: Some(NodeId(0)),
			dest: Some(NodeId(1)),
		};
		assert_eq!(node_style(selection, NodeId(0), true, false).fill, "lightgreen");
		assert_eq!(node_style(selection, NodeId(1), true, false).fill, "lightcoral");
		assert_eq!(node_style(selection, NodeId(1), true, false).stroke, "black");
		let other = node_style(selection, NodeId(2), true, true);
		assert_eq!((other.fill, other.stroke, other.line_width), ("lightblue", "#888", 3.5));
		assert_eq!(node_style(selection, NodeId(3), false, false).fill, "white");
	}
}
