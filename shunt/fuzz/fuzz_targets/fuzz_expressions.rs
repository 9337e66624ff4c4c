#![no_main]

use libfuzzer_sys::fuzz_target;
use shunt::{Engine, EngineConfig};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = Engine::new().calculate(s);
        let _ = Engine::with_config(EngineConfig::new().strict(true).unrounded()).calculate(s);
    }
});
