pub mod app;
pub mod bridge;
mod diag;
pub mod render;
pub mod storage;

use wasm_bindgen::prelude::*;

/// Item catalog shipped with the page.
pub const CATALOG_TOML: &str = include_str!("../../../config/catalog.toml");
/// Tunables shipped with the page.
pub const CONFIG_TOML: &str = include_str!("../../../config/playpen.toml");

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(target_family = "wasm")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use rand::SeedableRng;
        use rand::rngs::StdRng;

        console_error_panic_hook::set_once();

        let app = match app::App::load(CATALOG_TOML, CONFIG_TOML, StdRng::from_os_rng()) {
            Ok(app) => app,
            Err(e) => {
                diag::console_warn!("Failed to load game data: {e}");
                return;
            },
        };
        let url_game = bridge::url_game(&app.config().url_param);
        let app = Rc::new(RefCell::new(app));

        bridge::guard_history();
        bridge::attach_listeners(&app);
        bridge::dispatch(&app, |state| state.start(url_game.as_deref()));
    }
}
