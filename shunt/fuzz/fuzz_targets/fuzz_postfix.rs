#![no_main]

use libfuzzer_sys::fuzz_target;
use shunt::{Engine, Postfix};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(postfix) = s.parse::<Postfix>() {
            let _ = Engine::new().evaluate(&postfix);
        }
    }
});
