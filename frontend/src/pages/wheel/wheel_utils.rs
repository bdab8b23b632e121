use yew::prelude::*;
use shared::{Segment, SpinOutcome};
use crate::styles;

pub const WINNER_DISPLAY_MS: u32 = 3000;

// Spin button component
#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_text = if props.is_spinning { "Spinning..." } else { "Spin" };

    let button_class = if props.is_spinning {
        "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed text-white"
    } else {
        "bg-gradient-to-r from-teal-400 to-blue-600 hover:from-teal-500 hover:to-blue-700 text-white shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0"
    };

    let spin_icon_class = if props.is_spinning {
        "inline-block mr-2 animate-spin"
    } else {
        "hidden"
    };

    html! {
        <div class={classes!("relative", "overflow-hidden", "rounded-full", "w-full", button_class)}>
            <button
                onclick={props.onclick.clone()}
                disabled={props.is_spinning}
                class="relative w-full px-8 py-4 font-bold text-lg transition-all duration-300 focus:outline-none focus:ring-4 focus:ring-teal-300 bg-transparent"
            >
                <div class="flex items-center justify-center">
                    <svg class={spin_icon_class} xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <circle cx="12" cy="12" r="10" />
                        <path d="M12 6v6l4 2" />
                    </svg>
                    <span>{button_text}</span>
                </div>
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct WinnerOverlayProps {
    pub outcome: SpinOutcome,
}

/// Celebratory popup, removed by the page after `WINNER_DISPLAY_MS`.
#[function_component(WinnerOverlay)]
pub fn winner_overlay(props: &WinnerOverlayProps) -> Html {
    let style = format!("border: 10px solid {};", props.outcome.color);

    html! {
        <div
            class="fixed top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 z-50 bg-white dark:bg-gray-800 p-10 rounded-2xl shadow-2xl text-center animate-bounce"
            style={style}
        >
            if !props.outcome.emoji.is_empty() {
                <h1 class="text-5xl mb-2">{&props.outcome.emoji}</h1>
            }
            <h2 class={styles::TEXT_H2}>{&props.outcome.text}</h2>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HistoryListProps {
    pub history: Vec<Segment>,
}

#[function_component(HistoryList)]
pub fn history_list(props: &HistoryListProps) -> Html {
    html! {
        <div class={styles::CARD}>
            <h3 class={classes!(styles::TEXT_H3, "mb-3")}>{"History"}</h3>
            if props.history.is_empty() {
                <p class={styles::TEXT_SMALL}>{"Empty"}</p>
            } else {
                <ul class="space-y-1">
                    { for props.history.iter().map(|winner| html! {
                        <li class="flex items-center gap-2 text-gray-700 dark:text-gray-300">
                            <span class="inline-block w-3 h-3 rounded-full" style={format!("background: {};", winner.color)}></span>
                            {winner.label()}
                        </li>
                    }) }
                </ul>
            }
        </div>
    }
}
