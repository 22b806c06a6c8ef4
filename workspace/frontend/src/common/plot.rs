use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot, catch)]
    fn new_plot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue) -> Result<JsValue, JsValue>;
}

/// Convert a serde value into a plain JS object graph (maps become objects).
pub fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(JsValue::from)
}

/// Parse JSON produced by `serde_json` into a JS value.
pub fn json_to_js(json: &str) -> Result<JsValue, JsValue> {
    js_sys::JSON::parse(json)
}

/// Draw into the element with `div_id`. Failures (Plotly missing, bad data)
/// are logged and leave the container empty.
pub fn render_plot(div_id: &str, data: Result<JsValue, JsValue>, layout: Result<JsValue, JsValue>) {
    let config = serde_json::json!({"responsive": true, "displayModeBar": false});

    let result = data.and_then(|data| {
        let layout = layout?;
        let config = to_js(&config)?;
        new_plot(div_id, data, layout, config)
    });

    if let Err(err) = result {
        log::error!("Failed to render chart '{}': {:?}", div_id, err);
    }
}
