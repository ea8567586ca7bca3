//! Film preset catalog WASM bindings.
//!
//! Presets cross the boundary as plain JS objects:
//!
//! ```typescript
//! { id: "fuji-velvia", name: "Velvia (Vivid)", brand: "Fujifilm",
//!   adjustments: { brightness: 1, contrast: 1.1, saturation: 1.3, ... } }
//! ```

use std::sync::OnceLock;

use filmsim_core::Catalog;
use wasm_bindgen::prelude::*;

/// The built-in catalog, built once per module instance.
pub(crate) fn builtin() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(Catalog::builtin)
}

/// Brand names in catalog order.
#[wasm_bindgen]
pub fn list_brands() -> js_sys::Array {
    builtin()
        .list_brands()
        .into_iter()
        .map(JsValue::from_str)
        .collect()
}

/// Presets of `brand` in catalog order (empty array for an unknown brand).
#[wasm_bindgen]
pub fn list_presets(brand: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&builtin().list_presets(brand))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Look up a preset by id; `undefined` if there is none.
#[wasm_bindgen]
pub fn get_preset(id: &str) -> Result<JsValue, JsValue> {
    match builtin().get_preset(id) {
        Some(preset) => {
            serde_wasm_bindgen::to_value(preset).map_err(|e| JsValue::from_str(&e.to_string()))
        }
        None => Ok(JsValue::UNDEFINED),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_shared() {
        assert!(std::ptr::eq(builtin(), builtin()));
        assert_eq!(builtin().len(), Catalog::builtin().len());
    }

    #[test]
    fn test_builtin_brands() {
        assert_eq!(
            builtin().list_brands(),
            vec!["Fujifilm", "Leica", "Hasselblad", "Sigma"]
        );
    }
}
