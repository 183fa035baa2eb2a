//! Platform glue that differs between the wasm and native builds

#[cfg(target_arch = "wasm32")]
mod wasm_impl {
    pub fn set_panic_hook() {
        // Panics show up in the browser console instead of as `unreachable`.
        console_error_panic_hook::set_once();
    }

    pub fn init_logging() {
        eframe::WebLogger::init(log::LevelFilter::Debug).ok();
    }

    pub fn spawn_async<F>(future: F)
    where
        F: std::future::Future<Output = ()> + 'static,
    {
        wasm_bindgen_futures::spawn_local(future);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native_impl {
    pub fn set_panic_hook() {
        // Native panics already print through the default hook
    }

    pub fn init_logging() {
        // RUST_LOG picks the level; a second init (tests, embedding) is harmless.
        let _ = env_logger::try_init();
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_impl::*;

#[cfg(not(target_arch = "wasm32"))]
pub use native_impl::*;
