//! CardRecall - a card memory game for the browser
//!
//! A hand of cards is shown for a limited time, then hidden, and the player
//! has to pick the same cards again in the same order. The game runs in wasm
//! with an egui frontend; a native launcher lives in `src/bin`.

pub mod config;
pub mod error;
pub mod game;
pub mod hardcoded_cards;

pub use config::{Config, RoundSettings};
pub use error::GameError;
pub use game::App;

#[cfg(target_arch = "wasm32")]
use eframe::{AppCreator, WebOptions, WebRunner};
#[cfg(target_arch = "wasm32")]
use egui_extras::install_image_loaders;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::spawn_local;
#[cfg(target_arch = "wasm32")]
use web_sys::HtmlCanvasElement;

/// Start the eframe app on a canvas element.
///
/// Used by [`start`], but can also be called directly with a custom app
/// creator.
#[cfg(target_arch = "wasm32")]
pub fn start_game(canvas: HtmlCanvasElement, init: AppCreator<'static>) -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Forward tracing events to the browser console
    tracing_wasm::set_as_global_default();

    let web_options = WebOptions::default();
    spawn_local(async move {
        if let Err(e) = WebRunner::new().start(canvas, web_options, init).await {
            tracing::error!("failed to start eframe: {:?}", e);
        }
    });
    Ok(())
}

/// Pick a UI scale from the screen resolution and the device pixel ratio.
///
/// The result is meant for `ctx.set_pixels_per_point()`.
#[cfg(target_arch = "wasm32")]
pub fn calculate_dpi_scale() -> f32 {
    let Some(window) = web_sys::window() else {
        return 1.0;
    };
    let device_pixel_ratio = window.device_pixel_ratio() as f32;
    let (width, height) = match window.screen() {
        Ok(screen) => (
            screen.width().unwrap_or(1920) as f32,
            screen.height().unwrap_or(1080) as f32,
        ),
        Err(_) => (1920.0, 1080.0),
    };
    let diagonal = (width * width + height * height).sqrt();
    let base_scale = if diagonal > 3000.0 {
        1.8
    } else if diagonal > 2000.0 {
        1.4
    } else if diagonal > 1500.0 {
        1.2
    } else {
        1.0
    };
    let scale = base_scale * (device_pixel_ratio / 2.0).clamp(0.75, 1.5);
    tracing::debug!(width, height, device_pixel_ratio, scale, "calculated ui scale");
    scale
}

#[cfg(not(target_arch = "wasm32"))]
pub fn calculate_dpi_scale() -> f32 {
    1.5
}

/// Entry point called from JavaScript.
///
/// ```javascript
/// import init, {start} from './pkg/card_recall.js';
///
/// async function run() {
///     await init();
///     start(document.getElementById("card_recall_canvas"));
/// }
///
/// run();
/// ```
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    let init = Box::new(|cc: &eframe::CreationContext| {
        install_image_loaders(&cc.egui_ctx);
        let app: Box<dyn eframe::App> = Box::new(App::new());
        Ok(app)
    });
    start_game(canvas, init)
}
