//! Bridge for Google Identity Services sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! The GIS script renders its own button and calls a global JavaScript
//! function with `{ credential }`. [`install_callback`] publishes that global
//! as `window.onGoogleCredential` and forwards the credential to Rust. The
//! button is only shown when the build sets `GOOGLE_CLIENT_ID`.

/// OAuth client id baked in at build time.
pub const CLIENT_ID: Option<&str> = option_env!("GOOGLE_CLIENT_ID");

/// Global function name the GIS `data-callback` attribute points at.
pub const CALLBACK_NAME: &str = "onGoogleCredential";

/// Register `on_credential` as the GIS callback.
pub fn install_callback(on_credential: impl Fn(String) + 'static) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsValue;
        use wasm_bindgen::closure::Closure;

        let callback = Closure::<dyn Fn(JsValue)>::new(move |response: JsValue| {
            let credential = js_sys::Reflect::get(&response, &JsValue::from_str("credential"))
                .ok()
                .and_then(|value| value.as_string());
            match credential {
                Some(token) => on_credential(token),
                None => log::warn!("google sign-in response without credential"),
            }
        });
        if let Some(window) = web_sys::window() {
            let _ = js_sys::Reflect::set(&window, &JsValue::from_str(CALLBACK_NAME), callback.as_ref());
        }
        // The page may call back at any time; the closure must outlive this scope.
        callback.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_credential;
    }
}
