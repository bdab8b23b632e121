use yew::prelude::*;
use web_sys::HtmlInputElement;
use shared::constants::{MAX_EMOJI_SIZE, MAX_SEGMENTS, MIN_EMOJI_SIZE, MIN_SEGMENTS};
use shared::{Segment, SegmentEdit};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SegmentEditorProps {
    pub segments: Vec<Segment>,
    pub on_edit: Callback<(usize, SegmentEdit)>,
    pub on_remove: Callback<usize>,
    pub on_add: Callback<()>,
    pub on_set_count: Callback<i64>,
}

/// Empty input clears the size; anything unparsable goes through as an
/// out-of-range value so the engine rejects it.
fn parse_emoji_size(value: &str) -> Option<u32> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.parse::<u32>().unwrap_or(0))
    }
}

#[function_component(SegmentEditor)]
pub fn segment_editor(props: &SegmentEditorProps) -> Html {
    let count_ref = use_node_ref();

    let apply_count = {
        let count_ref = count_ref.clone();
        let on_set_count = props.on_set_count.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = count_ref.cast::<HtmlInputElement>() {
                let count = input.value().trim().parse::<i64>().unwrap_or(MIN_SEGMENTS as i64);
                on_set_count.emit(count);
            }
        })
    };
    let on_add = {
        let on_add = props.on_add.clone();
        Callback::from(move |_: MouseEvent| on_add.emit(()))
    };

    let rows = props.segments.iter().enumerate().map(|(i, segment)| {
        let edit = move |make: fn(String) -> SegmentEdit| {
            let on_edit = props.on_edit.clone();
            Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                on_edit.emit((i, make(input.value())));
            })
        };
        let edit_live = move |make: fn(String) -> SegmentEdit| {
            let on_edit = props.on_edit.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                on_edit.emit((i, make(input.value())));
            })
        };
        let on_remove = {
            let on_remove = props.on_remove.clone();
            Callback::from(move |_: MouseEvent| on_remove.emit(i))
        };
        let emoji_size = segment.emoji_size.map(|s| s.to_string()).unwrap_or_default();

        html! {
            <div class="flex items-center gap-2">
                <input type="color" class="h-10 w-10 rounded cursor-pointer"
                    value={segment.color.clone()}
                    onchange={edit(SegmentEdit::Color)} />
                <input type="text" class={classes!(styles::INPUT_INLINE, "w-16")} placeholder="Emoji"
                    value={segment.emoji.clone()}
                    onchange={edit(SegmentEdit::Emoji)} />
                <input type="number" class={classes!(styles::INPUT_INLINE, "w-20")} placeholder="Size"
                    min={MIN_EMOJI_SIZE.to_string()} max={MAX_EMOJI_SIZE.to_string()}
                    value={emoji_size}
                    onchange={edit(|v| SegmentEdit::EmojiSize(parse_emoji_size(&v)))} />
                <input type="text" class={classes!(styles::INPUT_INLINE, "flex-1")} placeholder="Text"
                    value={segment.text.clone()}
                    oninput={edit_live(SegmentEdit::Text)} />
                <button class={styles::BUTTON_REMOVE} onclick={on_remove} title="Remove segment">{"×"}</button>
            </div>
        }
    });

    html! {
        <div class={styles::CARD}>
            <h3 class={classes!(styles::TEXT_H3, "mb-3")}>{"Segments"}</h3>
            <div class="flex items-center gap-2 mb-4">
                <input ref={count_ref} type="number" class={classes!(styles::INPUT_INLINE, "w-24")}
                    min={MIN_SEGMENTS.to_string()} max={MAX_SEGMENTS.to_string()}
                    value={props.segments.len().to_string()} />
                <button onclick={apply_count} class={styles::BUTTON_PRIMARY}>{"Set count"}</button>
                <button onclick={on_add} class={styles::BUTTON_SECONDARY}>{"+ Segment"}</button>
            </div>
            <div class="space-y-2 max-h-[480px] overflow-y-auto">
                { for rows }
            </div>
        </div>
    }
}
