use yew::prelude::*;

use crate::module::ComputeHandle;

#[derive(Properties, PartialEq, Clone)]
pub(crate) struct LumenAppProps {
    pub(crate) compute: ComputeHandle,
}

#[function_component(LumenApp)]
pub(crate) fn lumen_app(props: &LumenAppProps) -> Html {
    let exports = props.compute.export_names();
    let status = format!("{} exports", exports.len());

    html! {
        <main class="lumen-shell">
            <header class="lumen-header">
                <h1>{"Lumen"}</h1>
                <span class="pill">{status}</span>
            </header>
            <canvas class="lumen-surface" width="640" height="480" />
            <ul class="lumen-exports">
                { for exports.into_iter().map(|name| html! { <li key={name.clone()}>{name}</li> }) }
            </ul>
        </main>
    }
}
