use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use super::render;
use super::state::{NetworkOptions, NetworkState};
use super::types::GraphDocument;
use crate::components::props::SvgIconConfig;
use crate::components::svg_icon::SvgIcon;

/// Which toolbar tool is active. Exactly one at a time; `Init` is the
/// default drag/select behavior. `Lasso` is accepted but behaves as `Init`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToolMode {
	#[default]
	Init,
	Pan,
	Lasso,
	ZoomIn,
}

/// Cursor movement under this many pixels between press and release counts
/// as a click rather than a drag.
const CLICK_SLOP: f64 = 3.0;

fn toolbar_icon(name: &str) -> SvgIconConfig {
	SvgIconConfig {
		name: Some(name.to_owned()),
		fill: Some("#4a4a6a".to_owned()),
		..Default::default()
	}
}

#[component]
pub fn NetworkCanvas(
	#[prop(default = None)] id: Option<String>,
	#[prop(into)] data: Signal<GraphDocument>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
	#[prop(default = NetworkOptions::default())] options: NetworkOptions,
	#[prop(optional, into)] on_select: Option<Callback<Option<String>>>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<NetworkState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let mode = RwSignal::new(ToolMode::Init);
	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		// Track the document; the simulation is rebuilt whenever it changes.
		let doc = data.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = if fullscreen {
			(
				window.inner_width().unwrap().as_f64().unwrap(),
				window.inner_height().unwrap().as_f64().unwrap(),
			)
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(500.0)
				}),
				height.unwrap_or(500.0),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();
		*state_init.borrow_mut() = Some(NetworkState::new(&doc, options, w, h));

		// Listeners and the animation loop survive document swaps; wire them
		// up only on the first run.
		if animate_init.borrow().is_some() {
			return;
		}

		if fullscreen {
			let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let win: Window = web_sys::window().unwrap();
				let (nw, nh) = (
					win.inner_width().unwrap().as_f64().unwrap(),
					win.inner_height().unwrap().as_f64().unwrap(),
				);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut s) = *state_resize.borrow_mut() {
					s.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				if s.animation_running {
					s.tick(0.016);
				}
				render::render(s, &ctx);
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

	let cursor_position = move |ev: &MouseEvent| -> Option<(f64, f64)> {
		let canvas: HtmlCanvasElement = canvas_ref.get_untracked()?.into();
		let rect = canvas.get_bounding_client_rect();
		Some((
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		))
	};

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = cursor_position(&ev) else {
			return;
		};

		if let Some(ref mut s) = *state_md.borrow_mut() {
			// In pan mode the whole surface pans, nodes are not grabbed.
			let grabbed = if mode.get_untracked() == ToolMode::Pan {
				None
			} else {
				s.node_at_position(x, y)
			};
			if let Some(idx) = grabbed {
				s.drag.active = true;
				s.drag.node_idx = Some(idx);
				s.drag.start_x = x;
				s.drag.start_y = y;
				s.graph.visit_nodes(|node| {
					if node.index() == idx {
						s.drag.node_start_x = node.x();
						s.drag.node_start_y = node.y();
					}
				});
			} else {
				s.pan.active = true;
				s.pan.start_x = x;
				s.pan.start_y = y;
				s.pan.transform_start_x = s.transform.x;
				s.pan.transform_start_y = s.transform.y;
			}
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = cursor_position(&ev) else {
			return;
		};

		if let Some(ref mut s) = *state_mm.borrow_mut() {
			// Update hover state when not dragging
			if !s.drag.active {
				let hovered = s.node_at_position(x, y);
				s.set_hover(hovered);
			}

			if s.drag.active {
				if let Some(idx) = s.drag.node_idx {
					let (dx, dy) = (
						(x - s.drag.start_x) / s.transform.k,
						(y - s.drag.start_y) / s.transform.k,
					);
					let (nx, ny) = (
						s.drag.node_start_x + dx as f32,
						s.drag.node_start_y + dy as f32,
					);
					s.graph.visit_nodes_mut(|node| {
						if node.index() == idx {
							node.data.x = nx;
							node.data.y = ny;
							node.data.is_anchor = true;
						}
					});
				}
			} else if s.pan.active {
				s.transform.x = s.pan.transform_start_x + (x - s.pan.start_x);
				s.transform.y = s.pan.transform_start_y + (y - s.pan.start_y);
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |ev: MouseEvent| {
		let Some((x, y)) = cursor_position(&ev) else {
			return;
		};
		let is_click = |sx: f64, sy: f64| ((x - sx).powi(2) + (y - sy).powi(2)).sqrt() < CLICK_SLOP;

		if let Some(ref mut s) = *state_mu.borrow_mut() {
			if s.drag.active {
				if let Some(idx) = s.drag.node_idx {
					if is_click(s.drag.start_x, s.drag.start_y) {
						if mode.get_untracked() == ToolMode::ZoomIn {
							s.zoom_at(x, y, 1.25);
						} else {
							let selected = s.select(Some(idx));
							if let Some(cb) = on_select {
								cb.run(selected);
							}
						}
					} else {
						// A real drag pins the node where it was dropped.
						s.graph.visit_nodes_mut(|node| {
							if node.index() == idx {
								node.data.is_anchor = true;
							}
						});
					}
				}
			} else if s.pan.active && is_click(s.pan.start_x, s.pan.start_y) {
				if mode.get_untracked() == ToolMode::ZoomIn {
					s.zoom_at(x, y, 1.25);
				} else {
					// Background click: clear the selection and return to the
					// identity view.
					let _ = s.select(None);
					s.reset_zoom();
					if let Some(cb) = on_select {
						cb.run(None);
					}
				}
			}
			s.drag.active = false;
			s.drag.node_idx = None;
			s.pan.active = false;
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.drag.active = false;
			s.drag.node_idx = None;
			s.pan.active = false;
			s.set_hover(None);
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = cursor_position(&ev) else {
			return;
		};

		if let Some(ref mut s) = *state_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			s.zoom_at(x, y, factor);
		}
	};

	let toggle = move |tool: ToolMode| {
		move |_: MouseEvent| {
			mode.update(|current| {
				*current = if *current == tool {
					ToolMode::Init
				} else {
					tool
				};
			});
		}
	};
	let button_class = move |tool: ToolMode| {
		move || {
			if mode.get() == tool {
				"modebar-btn active"
			} else {
				"modebar-btn"
			}
		}
	};

	view! {
		<div class="network-widget" id=id>
			<div class="modebar-container">
				<div class="modebar modebar--hover ease-bg">
					<div class="modebar-group">
						<a
							class=button_class(ToolMode::Pan)
							data-name="pan"
							on:click=toggle(ToolMode::Pan)
						>
							<SvgIcon config=toolbar_icon("pan") />
						</a>
						<a
							class=button_class(ToolMode::Lasso)
							data-name="lasso"
							on:click=toggle(ToolMode::Lasso)
						>
							<SvgIcon config=toolbar_icon("lasso") />
						</a>
						<a
							class=button_class(ToolMode::ZoomIn)
							data-name="zoomin"
							on:click=toggle(ToolMode::ZoomIn)
						>
							<SvgIcon config=toolbar_icon("zoomin") />
						</a>
					</div>
				</div>
			</div>
			<canvas
				node_ref=canvas_ref
				class="network-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:wheel=on_wheel
				style="display: block; cursor: grab;"
			/>
		</div>
	}
}
