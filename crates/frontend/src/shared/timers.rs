use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Cancellable one-shot timer for debouncing keystrokes.
///
/// `schedule` cancels any pending callback before arming a new one, so only
/// the last scheduled closure ever runs.
#[derive(Clone, Copy)]
pub struct Debounce {
    delay_ms: i32,
    pending: StoredValue<Option<i32>>,
}

impl Debounce {
    pub fn new(delay_ms: i32) -> Self {
        Self {
            delay_ms,
            pending: StoredValue::new(None),
        }
    }

    pub fn schedule(&self, f: impl FnOnce() + 'static) {
        self.cancel();

        let window = web_sys::window().expect("no window");
        let callback = Closure::once_into_js(f);
        let handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref::<js_sys::Function>(),
                self.delay_ms,
            )
            .expect("setTimeout failed");

        self.pending.set_value(Some(handle));
    }

    pub fn cancel(&self) {
        if let Some(handle) = self.pending.get_value() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(handle);
            }
            self.pending.set_value(None);
        }
    }
}
