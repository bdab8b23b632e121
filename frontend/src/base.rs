use yew::prelude::*;
use web_sys::window;
use shared::persistence::{load_theme, save_theme};
use shared::Theme;
use crate::storage::BrowserStore;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct BaseProps {
    pub children: Html,
}

fn handle_theme_toggle(theme: Theme) {
    if let Some(html) = window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
        html.set_class_name(theme.as_str());
    }
    if let Err(e) = save_theme(&mut BrowserStore::open(), theme) {
        log::warn!("Failed to save theme preference: {}", e);
    }
}

#[function_component(Base)]
pub fn base(props: &BaseProps) -> Html {
    let theme = use_state(|| load_theme(&BrowserStore::open()));

    {
        let theme = *theme;
        use_effect_with((), move |_| {
            if let Some(html) = window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
                html.set_class_name(theme.as_str());
            }
            || ()
        });
    }

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = theme.toggled();
            handle_theme_toggle(next);
            theme.set(next);
        })
    };

    let (theme_icon, theme_label) = match *theme {
        Theme::Dark => ("☀️", "Light mode"),
        Theme::Light => ("🌙", "Dark mode"),
    };

    html! {
        <div class={if *theme == Theme::Dark { "dark min-h-full bg-gray-900" } else { "min-h-full bg-gray-50" }}>
            <nav class={styles::NAV}>
                <div class="w-full mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="h-16 flex items-center justify-between">
                        <span class={styles::NAV_BRAND}>{"Prize Wheel"}</span>
                        <button onclick={toggle_theme} class={styles::BUTTON_ICON} title={theme_label}>
                            {theme_icon}{" "}{theme_label}
                        </button>
                    </div>
                </div>
            </nav>
            <main class="pt-16">{props.children.clone()}</main>
        </div>
    }
}
