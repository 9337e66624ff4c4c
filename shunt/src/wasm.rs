use crate::{Engine, EngineConfig};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmEngine {
    engine: Engine,
}

#[wasm_bindgen]
impl WasmEngine {
    /// `precision` of `undefined` keeps the default of 8 places
    #[wasm_bindgen(constructor)]
    pub fn new(precision: Option<u32>, strict: Option<bool>) -> Self {
        console_error_panic_hook::set_once();

        let mut config = EngineConfig::new().strict(strict.unwrap_or(false));
        if let Some(places) = precision {
            config = config.with_precision(places);
        }

        WasmEngine {
            engine: Engine::with_config(config),
        }
    }

    #[wasm_bindgen(js_name = calculate)]
    pub fn calculate(&self, expression: &str) -> String {
        match self.engine.calculate(expression) {
            Ok(calculation) => serde_json::json!({
                "success": true,
                "calculation": calculation,
                "error": null,
            })
            .to_string(),
            Err(e) => serde_json::json!({
                "success": false,
                "calculation": null,
                "error": e.to_string(),
            })
            .to_string(),
        }
    }

    #[wasm_bindgen(js_name = convert)]
    pub fn convert(&self, expression: &str) -> String {
        match self.engine.convert(expression) {
            Ok(postfix) => serde_json::json!({
                "success": true,
                "postfix": postfix.to_string(),
                "error": null,
            })
            .to_string(),
            Err(e) => serde_json::json!({
                "success": false,
                "postfix": null,
                "error": e.to_string(),
            })
            .to_string(),
        }
    }
}
