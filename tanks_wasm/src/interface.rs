use crate::utils::js_window;
use std::cell::{Cell, RefCell};
use tanks_core::KeysDown;
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::KeyboardEvent;

thread_local! {
    /// Keys currently held, written by the listeners and read once per frame
    pub static KEYS_DOWN: RefCell<KeysDown> = RefCell::new(KeysDown::default());
    /// Set when the fire key goes down, cleared when a frame takes it
    static FIRE_PRESSED: Cell<bool> = Cell::new(false);
}

/// Keyboard Listeners Setup
///
/// W/S drive, A/D turn and Space fires, arrow keys work too
pub fn setup_window_listeners() {
    let keydown_callback = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        if set_key(&event.code(), true) {
            // keep space from scrolling the page
            event.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    js_window()
        .add_event_listener_with_callback("keydown", keydown_callback.as_ref().unchecked_ref())
        .expect("failed to add listener");
    keydown_callback.forget();

    let keyup_callback = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        set_key(&event.code(), false);
    }) as Box<dyn FnMut(_)>);
    js_window()
        .add_event_listener_with_callback("keyup", keyup_callback.as_ref().unchecked_ref())
        .expect("failed to add listener");
    keyup_callback.forget();
}

/// Records a key transition, returns whether the key is one of ours
fn set_key(code: &str, down: bool) -> bool {
    KEYS_DOWN.with(|keys| {
        let mut keys = keys.borrow_mut();
        let slot = match code {
            "KeyW" | "ArrowUp" => &mut keys.forward,
            "KeyS" | "ArrowDown" => &mut keys.back,
            "KeyA" | "ArrowLeft" => &mut keys.left,
            "KeyD" | "ArrowRight" => &mut keys.right,
            "Space" => &mut keys.fire,
            _ => return false,
        };

        // auto repeat keydowns arrive while the key is already down
        if code == "Space" && down && !*slot {
            FIRE_PRESSED.with(|pressed| pressed.set(true));
        }
        *slot = down;
        true
    })
}

/// Whether fire went down since the last call
pub fn take_fire_press() -> bool {
    FIRE_PRESSED.with(|pressed| pressed.replace(false))
}

/// Snapshot of the held keys
pub fn keys_down() -> KeysDown {
    KEYS_DOWN.with(|keys| *keys.borrow())
}
