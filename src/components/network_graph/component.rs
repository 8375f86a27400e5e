use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::render;
use super::scene::Scene;
use super::sim::{SimConfig, Simulation};
use super::types::GraphDocument;

/// Screen-space pick radius for grabbing a node.
const HIT_RADIUS: f64 = 12.0;

/// Upper bound on the timestep fed to the layout, so a background tab
/// resuming does not fling nodes across the viewport.
const MAX_FRAME_DT: f32 = 0.05;

struct GraphState {
	sim: Simulation,
	scene: Scene,
	width: f64,
	height: f64,
	drag: Option<usize>,
}

fn pointer_pos(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

/// Force-directed topology canvas. Takes the already-fetched document,
/// hands it to the layout engine, and runs a requestAnimationFrame loop of
/// step, resync, draw until the page goes away. Nodes can be dragged;
/// a dragged node stays pinned where it was dropped.
#[component]
pub fn NetworkGraphCanvas(
	doc: GraphDocument,
	#[prop(default = 960.0)] width: f64,
	#[prop(default = 500.0)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<GraphState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init) = (state.clone(), animate.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let sim = Simulation::new(&doc, SimConfig::default(), width, height);
		let scene = Scene::new(&doc, &sim);
		*state_init.borrow_mut() = Some(GraphState {
			sim,
			scene,
			width,
			height,
			drag: None,
		});

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		let last_frame = RefCell::new(js_sys::Date::now());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				let now = js_sys::Date::now();
				let dt = (((now - *last_frame.borrow()) / 1000.0) as f32).min(MAX_FRAME_DT);
				*last_frame.borrow_mut() = now;

				s.sim.step(dt);
				s.scene.sync(&s.sim);
				render::draw(&s.scene, &ctx, s.width, s.height);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let (x, y) = pointer_pos(&canvas, &ev);
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.drag = s.scene.node_at(x, y, HIT_RADIUS);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let (x, y) = pointer_pos(&canvas, &ev);
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if let Some(slot) = s.drag {
				s.sim.drag_to(slot, x as f32, y as f32);
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.drag = None;
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.drag = None;
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="network-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			style="display: block; cursor: grab;"
		/>
	}
}
