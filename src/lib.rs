use wasm_bindgen::prelude::*;

pub mod card;
pub mod error;
pub mod hand;
mod logging;
pub mod report;

pub use card::{Card, Rank, Suit};
pub use error::HandError;
pub use hand::Hand;
pub use report::{HandInput, HandReport};

#[wasm_bindgen]
pub fn init_logging(level: &str) {
    console_error_panic_hook::set_once();
    logging::init(logging::parse_level(level));
}

#[wasm_bindgen]
pub fn evaluate_hand(params: &JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let input: HandInput = serde_wasm_bindgen::from_value(params.clone())
        .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?;

    let result = report::evaluate(input);

    serde_wasm_bindgen::to_value(&result)
        .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
}

#[wasm_bindgen]
pub fn hand_value(cards: &JsValue) -> Result<u32, JsValue> {
    console_error_panic_hook::set_once();
    let cards: Vec<Card> = serde_wasm_bindgen::from_value(cards.clone())
        .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?;

    Ok(cards.into_iter().collect::<Hand>().value())
}
