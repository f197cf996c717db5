//! Page entry points exported to JavaScript.

use std::cell::RefCell;

use lumen_boot::{AppInstance, BootSequencer};
use lumen_telemetry::{bootstrap_span, init_logging};
use tracing::Instrument;
use wasm_bindgen::prelude::*;
use yew::AppHandle;

use crate::CONFIG_ELEMENT_ID;
use crate::app::{LumenApp, LumenAppProps};
use crate::dom::WebDocument;
use crate::gate::StartGate;
use crate::module::WasmModule;
use crate::mount::YewMount;
use crate::report::describe;
use crate::settings::{logging_config, resolve_config};

thread_local! {
    static STARTED: StartGate = const { StartGate::new() };
    static MOUNTED: RefCell<Option<AppInstance<AppHandle<LumenApp>>>> = const { RefCell::new(None) };
}

/// Load the computation module, then mount the viewer into the configured element.
///
/// Runs once per page; later calls reject without touching the document.
///
/// # Errors
///
/// Rejects with a descriptive message when configuration is invalid, the
/// module cannot be initialised, the target element is missing, or the root
/// cannot be constructed.
#[wasm_bindgen]
pub async fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    STARTED
        .with(StartGate::enter)
        .map_err(|err| reject(&err.to_string()))?;

    let document =
        WebDocument::current().ok_or_else(|| reject("browser document unavailable"))?;
    let config = resolve_config(document.text_of(CONFIG_ELEMENT_ID).as_deref())
        .map_err(|err| reject(&format!("invalid lumen configuration: {err}")))?;
    if let Err(err) = init_logging(&logging_config(&config)) {
        gloo::console::warn!(format!("logging unavailable: {err}"));
    }

    let module = WasmModule::new(config.module_url.clone(), config.glue_url.clone());
    let props = LumenAppProps {
        compute: module.handle(),
    };
    let sequencer = BootSequencer::new(module, document, YewMount::<LumenApp>::new(props))
        .with_target(config.mount_target.clone());

    let instance = sequencer
        .run()
        .instrument(bootstrap_span())
        .await
        .map_err(|err| JsValue::from_str(&describe(&err)))?;
    MOUNTED.with(|slot| *slot.borrow_mut() = Some(instance));
    Ok(())
}

/// Destroy the mounted viewer. Returns `false` when nothing is mounted.
#[wasm_bindgen]
pub fn teardown() -> bool {
    let Some(instance) = MOUNTED.with(|slot| slot.borrow_mut().take()) else {
        return false;
    };
    instance.into_handle().destroy();
    true
}

/// Write `message` to the console and wrap it as a rejection value.
fn reject(message: &str) -> JsValue {
    gloo::console::error!(message.to_string());
    JsValue::from_str(message)
}
