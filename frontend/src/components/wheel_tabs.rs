use yew::prelude::*;
use shared::WheelId;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WheelTabsProps {
    pub wheel_ids: Vec<WheelId>,
    pub active: WheelId,
    pub on_select: Callback<WheelId>,
    pub on_create: Callback<()>,
    pub on_delete: Callback<()>,
}

#[function_component(WheelTabs)]
pub fn wheel_tabs(props: &WheelTabsProps) -> Html {
    let on_create = {
        let on_create = props.on_create.clone();
        Callback::from(move |_: MouseEvent| on_create.emit(()))
    };
    let on_delete = {
        let on_delete = props.on_delete.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(()))
    };

    html! {
        <div class="flex flex-wrap items-center gap-2 mb-6">
            { for props.wheel_ids.iter().enumerate().map(|(i, id)| {
                let onclick = {
                    let on_select = props.on_select.clone();
                    let id = id.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(id.clone()))
                };
                let class = if *id == props.active { styles::TAB_ACTIVE } else { styles::TAB };
                html! {
                    <button key={id.as_str().to_string()} {onclick} {class}>
                        {format!("Wheel {}", i + 1)}
                    </button>
                }
            }) }
            <button onclick={on_create} class={styles::BUTTON_SECONDARY}>{"+ New wheel"}</button>
            <button onclick={on_delete} class={styles::BUTTON_DANGER}>{"Delete wheel"}</button>
        </div>
    }
}
