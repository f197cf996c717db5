//! Yew renderer bound to a resolved document element.

use lumen_boot::UiMount;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::AppHandle;
use yew::html::BaseComponent;

/// Failures raised while constructing the Yew root.
#[derive(Debug, Error)]
pub enum MountError {
    /// The target resolved to a non-HTML element (for example inside an `<svg>`).
    #[error("mount target is not an html element")]
    NotHtmlElement {
        /// Lowercased tag name of the rejected element.
        tag: String,
    },
}

/// Mounts component `C` with fixed properties.
pub struct YewMount<C: BaseComponent> {
    props: C::Properties,
}

impl<C: BaseComponent> YewMount<C> {
    /// Mounter rendering `C` with `props`.
    pub const fn new(props: C::Properties) -> Self {
        Self { props }
    }
}

impl<C> UiMount<Element> for YewMount<C>
where
    C: BaseComponent,
    C::Properties: Clone,
{
    type Handle = AppHandle<C>;
    type Error = MountError;

    fn mount(&self, target: Element) -> Result<AppHandle<C>, MountError> {
        if !target.is_instance_of::<HtmlElement>() {
            return Err(MountError::NotHtmlElement {
                tag: target.tag_name().to_ascii_lowercase(),
            });
        }
        Ok(yew::Renderer::<C>::with_root_and_props(target, self.props.clone()).render())
    }
}
