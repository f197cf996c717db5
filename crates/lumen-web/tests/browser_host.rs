//! Browser adapters exercised against a real document and `WebAssembly` runtime.
#![cfg(target_arch = "wasm32")]

use lumen_boot::{ComputeModule, UiMount};
use lumen_web::loading::ModuleLoadError;
use lumen_web::module::WasmModule;
use lumen_web::mount::{MountError, YewMount};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

/// Module importing `wbg.alert` and re-exporting it as `greet`, like wasm-bindgen output.
const MODULE_WITH_IMPORTS: &str =
    "data:application/wasm;base64,AGFzbQEAAAABBAFgAAACDQEDd2JnBWFsZXJ0AAAHCQEFZ3JlZXQAAA==";

const GLUE_WITH_IMPORTS: &str = concat!(
    "data:text/javascript,",
    "export default async function (options) { ",
    "const { instance } = await WebAssembly.instantiate(options.module_or_path, ",
    "{ wbg: { alert() {} } }); return instance.exports; }",
);

const GLUE_WITHOUT_IMPORTS: &str = concat!(
    "data:text/javascript,",
    "export default async function (options) { ",
    "const { instance } = await WebAssembly.instantiate(options.module_or_path, {}); ",
    "return instance.exports; }",
);

const GLUE_WITHOUT_DEFAULT: &str = "data:text/javascript,export const init = 1;";

#[function_component(Blank)]
fn blank() -> Html {
    html! { <p class="blank">{"ready"}</p> }
}

fn document() -> Result<web_sys::Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

#[wasm_bindgen_test]
async fn module_with_imports_initialises_through_glue() {
    let mut module = WasmModule::new(MODULE_WITH_IMPORTS, GLUE_WITH_IMPORTS);
    let handle = module.handle();

    let result = module.initialize().await;

    assert!(result.is_ok(), "initialisation failed: {result:?}");
    assert_eq!(handle.export_names(), vec!["greet".to_string()]);
}

#[wasm_bindgen_test]
async fn missing_imports_surface_as_instantiation_failure() {
    let mut module = WasmModule::new(MODULE_WITH_IMPORTS, GLUE_WITHOUT_IMPORTS);
    let handle = module.handle();

    let result = module.initialize().await;

    assert!(matches!(
        result,
        Err(ModuleLoadError::Instantiate { ref detail, .. }) if detail.contains("wbg")
    ));
    assert!(handle.export_names().is_empty());
}

#[wasm_bindgen_test]
async fn glue_without_default_export_is_rejected() {
    let mut module = WasmModule::new(MODULE_WITH_IMPORTS, GLUE_WITHOUT_DEFAULT);

    let result = module.initialize().await;

    assert!(matches!(
        result,
        Err(ModuleLoadError::Glue { ref url, .. }) if url == GLUE_WITHOUT_DEFAULT
    ));
}

#[wasm_bindgen_test]
fn svg_target_is_not_mountable() -> Result<(), JsValue> {
    let svg = document()?.create_element_ns(Some("http://www.w3.org/2000/svg"), "svg")?;

    let result = YewMount::<Blank>::new(()).mount(svg.clone());

    assert!(matches!(
        result,
        Err(MountError::NotHtmlElement { ref tag }) if tag == "svg"
    ));
    assert_eq!(svg.child_element_count(), 0);
    Ok(())
}

#[wasm_bindgen_test]
fn html_target_accepts_the_root() -> Result<(), JsValue> {
    let document = document()?;
    let host = document.create_element("div")?;
    host.set_id("app");
    document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?
        .append_child(&host)?;

    let result = YewMount::<Blank>::new(()).mount(host.clone());

    assert!(result.is_ok());
    if let Ok(handle) = result {
        handle.destroy();
    }
    host.remove();
    Ok(())
}
