use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub fn js_window() -> web_sys::Window {
    web_sys::window().expect("no global `window` exists")
}

pub fn request_animation_frame(f: &Closure<dyn FnMut()>) {
    js_window()
        .request_animation_frame(f.as_ref().unchecked_ref())
        .expect("should register `requestAnimationFrame` OK");
}

pub fn document() -> web_sys::Document {
    js_window()
        .document()
        .expect("should have a document on window")
}

pub fn body() -> web_sys::HtmlElement {
    document().body().expect("document should have a body")
}

pub fn fetch_or_create_canvas() -> HtmlCanvasElement {
    body()
        .query_selector("canvas")
        .expect("query tries to fetch element")
        .unwrap_or_else(|| {
            let canvas = document()
                .create_element("canvas")
                .expect("document should create canvas");

            body()
                .append_child(&canvas)
                .expect("added canvas to the DOM");

            canvas
        })
        .dyn_into::<HtmlCanvasElement>()
        .expect("element is canvas element")
}

/// Canvas helpers used by the game
pub trait Canvas {
    /// Resizes the drawing surface to the given world size
    fn fit_arena(&self, width: f64, height: f64);
    fn get_2d_context(&self) -> CanvasRenderingContext2d;
}

impl Canvas for HtmlCanvasElement {
    fn fit_arena(&self, width: f64, height: f64) {
        self.set_width(width as u32);
        self.set_height(height as u32);
    }

    fn get_2d_context(&self) -> CanvasRenderingContext2d {
        self.get_context("2d")
            .expect("canvas has 2d context")
            .expect("valid context")
            .dyn_into::<CanvasRenderingContext2d>()
            .expect("root canvas")
    }
}

/// Calls `frame` once per animation frame for as long as the page lives
pub fn start_animation_loop(mut frame: Box<dyn FnMut()>) {
    let f = Rc::new(RefCell::new(None));
    let g = f.clone();

    let closure = Closure::wrap(Box::new(move || {
        frame();
        // Schedule ourself for another requestAnimationFrame callback.
        request_animation_frame(f.borrow().as_ref().expect("animation loop closure is set"));
    }) as Box<dyn FnMut()>);

    *g.borrow_mut() = Some(closure);

    request_animation_frame(g.borrow().as_ref().expect("animation loop closure is set"));
}
