//! Precompiled computation module loaded over HTTP and initialised in the page.
//!
//! # Design
//! - The module bytes are fetched here so transport failures stay typed.
//! - Instantiation goes through the generated ES glue: its default export
//!   builds the import object the module requires and returns the exports.
//! - The exports are published through a shared [`ComputeHandle`] so the UI
//!   root can reach them once the sequencer has moved on.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::Request;
use js_sys::{Function, Object, Promise, Reflect, Uint8Array};
use lumen_boot::ComputeModule;
use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::loading::{ModuleLoadError, ensure_success};

#[wasm_bindgen(inline_js = "export function import_glue(url) { \
    return import(new URL(url, document.baseURI).href); }")]
extern "C" {
    #[wasm_bindgen(catch)]
    fn import_glue(url: &str) -> Result<Promise, JsValue>;
}

/// Shared slot holding the module's exports once it is ready.
#[derive(Clone, Debug, Default)]
pub struct ComputeHandle {
    exports: Rc<RefCell<Option<Object>>>,
}

impl PartialEq for ComputeHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.exports, &other.exports)
    }
}

impl ComputeHandle {
    /// Names of the module's exports, empty until ready.
    #[must_use]
    pub fn export_names(&self) -> Vec<String> {
        self.exports
            .borrow()
            .as_ref()
            .map(|exports| {
                Object::keys(exports)
                    .iter()
                    .filter_map(|key| key.as_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn store(&self, exports: Object) {
        *self.exports.borrow_mut() = Some(exports);
    }
}

/// Computation module fetched from `url` and initialised by the glue at `glue_url`.
#[derive(Debug)]
pub struct WasmModule {
    url: String,
    glue_url: String,
    handle: ComputeHandle,
}

impl WasmModule {
    /// Module to be loaded from `url` and initialised through `glue_url`.
    #[must_use]
    pub fn new(url: impl Into<String>, glue_url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            glue_url: glue_url.into(),
            handle: ComputeHandle::default(),
        }
    }

    /// Slot the exports are published into on success.
    #[must_use]
    pub fn handle(&self) -> ComputeHandle {
        self.handle.clone()
    }

    async fn fetch_bytes(&self) -> Result<Vec<u8>, ModuleLoadError> {
        debug!(url = %self.url, "fetching computation module");
        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|source| ModuleLoadError::Fetch {
                url: self.url.clone(),
                source,
            })?;
        ensure_success(&self.url, response.status())?;
        response
            .binary()
            .await
            .map_err(|source| ModuleLoadError::Body {
                url: self.url.clone(),
                source,
            })
    }

    async fn glue_initializer(&self) -> Result<Function, ModuleLoadError> {
        debug!(url = %self.glue_url, "importing module glue");
        let promise = import_glue(&self.glue_url).map_err(|err| self.glue_error(&err))?;
        let namespace = JsFuture::from(promise)
            .await
            .map_err(|err| self.glue_error(&err))?;
        Reflect::get(&namespace, &JsValue::from_str("default"))
            .map_err(|err| self.glue_error(&err))?
            .dyn_into::<Function>()
            .map_err(|value| self.glue_error(&value))
    }

    fn glue_error(&self, value: &JsValue) -> ModuleLoadError {
        ModuleLoadError::Glue {
            url: self.glue_url.clone(),
            detail: format!("{value:?}"),
        }
    }

    fn instantiate_error(&self, value: &JsValue) -> ModuleLoadError {
        ModuleLoadError::Instantiate {
            url: self.url.clone(),
            detail: format!("{value:?}"),
        }
    }
}

#[async_trait(?Send)]
impl ComputeModule for WasmModule {
    type Error = ModuleLoadError;

    async fn initialize(&mut self) -> Result<(), ModuleLoadError> {
        let bytes = self.fetch_bytes().await?;
        let init = self.glue_initializer().await?;
        debug!(bytes = bytes.len(), "instantiating computation module");

        let options = Object::new();
        Reflect::set(
            &options,
            &JsValue::from_str("module_or_path"),
            &Uint8Array::from(bytes.as_slice()),
        )
        .map_err(|err| self.instantiate_error(&err))?;
        let pending = init
            .call1(&JsValue::UNDEFINED, &options)
            .map_err(|err| self.instantiate_error(&err))?;
        let exports = JsFuture::from(Promise::resolve(&pending))
            .await
            .map_err(|err| self.instantiate_error(&err))?
            .dyn_into::<Object>()
            .map_err(|value| self.instantiate_error(&value))?;

        self.handle.store(exports);
        Ok(())
    }
}
