mod logging;

// Browser-side models; natively they only back the unit tests and the
// catalog endpoint.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod catalog;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod config;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod contact;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod loading;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod navigation;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod playback;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod reveal;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod scroll;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod view;

#[cfg(not(target_arch = "wasm32"))]
mod backend;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    backend::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
