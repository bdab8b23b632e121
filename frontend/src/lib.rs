pub mod base;
pub mod styles;
pub mod components;
pub mod pages;
pub mod config;
pub mod storage;

use yew::prelude::*;
use crate::base::Base;
use crate::pages::wheel::WheelPage;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <Base>
            <div class="mx-auto">
                <WheelPage />
            </div>
        </Base>
    }
}
