use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::scene::Scene;

/// Drawn radius of a node circle.
pub const NODE_RADIUS: f64 = 9.0;

/// Paint the whole scene: background, one line per link, then one filled
/// circle + name label per node. Called once per animation frame after the
/// scene has been resynced.
pub fn draw(scene: &Scene, ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
	ctx.set_fill_style_str("#fafafa");
	ctx.fill_rect(0.0, 0.0, width, height);

	ctx.set_stroke_style_str("#999999");
	ctx.set_line_width(1.5);
	for link in &scene.links {
		ctx.begin_path();
		ctx.move_to(link.x1, link.y1);
		ctx.line_to(link.x2, link.y2);
		ctx.stroke();
	}

	for node in &scene.nodes {
		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(node.color);
		ctx.fill();
		ctx.set_stroke_style_str("#333333");
		ctx.set_line_width(1.0);
		ctx.stroke();

		ctx.set_fill_style_str("#111111");
		ctx.set_font("12px sans-serif");
		let _ = ctx.fill_text(&node.label, node.x + NODE_RADIUS + 3.0, node.y + 4.0);
	}
}
