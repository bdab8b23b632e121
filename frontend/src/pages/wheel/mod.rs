mod wheel_canvas;
mod wheel_utils;

use yew::prelude::*;
use gloo::dialogs::alert;
use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use log::{debug, error, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlCanvasElement};
use shared::{
    ConfigError, EngineError, Refresh, SegmentEdit, SpinFrame, SpinOutcome, WheelConfig, WheelEngine, WheelId,
};
use crate::components::{SegmentEditor, WheelTabs};
use crate::config::fetch_wheel_config;
use crate::storage::BrowserStore;
use crate::styles;

use wheel_canvas::{draw_wheel, CANVAS_SIZE};
use wheel_utils::{HistoryList, SpinButton, WinnerOverlay, WINNER_DISPLAY_MS};

pub enum Msg {
    ConfigLoaded(Result<String, ConfigError>),
    SelectWheel(WheelId),
    CreateWheel,
    DeleteWheel,
    SetSegmentCount(i64),
    AddSegment,
    EditSegment(usize, SegmentEdit),
    RemoveSegment(usize),
    Spin,
    Frame(f64),
    DismissWinner,
}

pub struct WheelPage {
    engine: Option<WheelEngine<BrowserStore>>,
    rng: SmallRng,
    canvas_ref: NodeRef,
    winner: Option<SpinOutcome>,
    _frame: Option<AnimationFrame>,
    _winner_timeout: Option<Timeout>,
}

fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

impl WheelPage {
    fn paint(&self) {
        let (Some(engine), Some(canvas)) = (&self.engine, self.canvas_ref.cast::<HtmlCanvasElement>()) else {
            return;
        };
        if let Err(e) = draw_wheel(&canvas, engine.active_wheel()) {
            error!("Failed to draw wheel: {:?}", e);
        }
    }

    fn schedule_frame(&mut self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        self._frame = Some(request_animation_frame(move |timestamp| {
            link.send_message(Msg::Frame(timestamp));
        }));
    }

    /// Turns an engine result into a render decision, alerting the user for
    /// rejections they should know about.
    fn apply(&self, result: Result<Refresh, EngineError>) -> bool {
        match result {
            Ok(Refresh::Full) => true,
            Ok(Refresh::Repaint) => {
                self.paint();
                false
            }
            Err(e) => {
                debug!("Rejected wheel edit: {}", e);
                if e.is_user_visible() {
                    alert(&e.to_string());
                }
                // Re-render so inputs fall back to the stored values
                true
            }
        }
    }
}

impl Component for WheelPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::ConfigLoaded(fetch_wheel_config().await));
        });

        Self {
            engine: None,
            rng: SmallRng::from_entropy(),
            canvas_ref: NodeRef::default(),
            winner: None,
            _frame: None,
            _winner_timeout: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let msg = match msg {
            Msg::ConfigLoaded(source) => {
                let config = WheelConfig::resolve(source);
                let engine = WheelEngine::bootstrap(BrowserStore::open(), config, js_sys::Date::now() as u64);
                info!("Wheel engine ready with {} wheel(s)", engine.wheels().len());
                self.engine = Some(engine);
                return true;
            }
            other => other,
        };

        let Some(engine) = self.engine.as_mut() else {
            return false;
        };

        match msg {
            Msg::ConfigLoaded(_) => false,
            Msg::SelectWheel(id) => engine.select_wheel(&id).is_some(),
            Msg::CreateWheel => {
                engine.create_wheel(js_sys::Date::now() as u64);
                true
            }
            Msg::DeleteWheel => {
                let result = engine.delete_active_wheel();
                self.apply(result)
            }
            Msg::SetSegmentCount(count) => {
                let result = engine.set_segment_count(count);
                self.apply(result)
            }
            Msg::AddSegment => {
                let result = engine.add_segment();
                self.apply(result)
            }
            Msg::EditSegment(index, edit) => {
                let result = engine.update_segment_field(index, edit);
                self.apply(result)
            }
            Msg::RemoveSegment(index) => {
                let result = engine.remove_segment(index);
                self.apply(result)
            }
            Msg::Spin => match engine.spin(&mut self.rng, now_ms()) {
                Ok(index) => {
                    debug!("Spin started, winner drawn at index {}", index);
                    self.winner = None;
                    self._winner_timeout = None;
                    self.schedule_frame(ctx);
                    true
                }
                Err(e) => {
                    debug!("Spin ignored: {}", e);
                    false
                }
            },
            Msg::Frame(timestamp) => match engine.advance(timestamp) {
                SpinFrame::Idle => true,
                SpinFrame::Turning { .. } => {
                    self.paint();
                    self.schedule_frame(ctx);
                    false
                }
                SpinFrame::Settled(outcome) => {
                    self._frame = None;
                    self.winner = Some(outcome);
                    let link = ctx.link().clone();
                    self._winner_timeout = Some(Timeout::new(WINNER_DISPLAY_MS, move || {
                        link.send_message(Msg::DismissWinner);
                    }));
                    true
                }
            },
            Msg::DismissWinner => {
                self.winner = None;
                self._winner_timeout = None;
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        self.paint();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(engine) = &self.engine else {
            return html! {
                <div class="flex justify-center py-16">
                    <div class={styles::LOADING_SPINNER}></div>
                </div>
            };
        };

        let link = ctx.link();
        let wheel = engine.active_wheel();
        let is_spinning = engine.is_spinning();

        html! {
            <div class="container mx-auto px-4 py-8">
                <WheelTabs
                    wheel_ids={engine.wheels().iter().map(|w| w.id.clone()).collect::<Vec<_>>()}
                    active={wheel.id.clone()}
                    on_select={link.callback(Msg::SelectWheel)}
                    on_create={link.callback(|_| Msg::CreateWheel)}
                    on_delete={link.callback(|_| Msg::DeleteWheel)}
                />
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                    <div class="lg:col-span-2 flex flex-col items-center">
                        <canvas
                            ref={self.canvas_ref.clone()}
                            width={CANVAS_SIZE.to_string()}
                            height={CANVAS_SIZE.to_string()}
                            class="w-full max-w-[600px] h-auto"
                        />
                        <div class="w-full max-w-[300px] mt-6">
                            <SpinButton is_spinning={is_spinning} onclick={link.callback(|_| Msg::Spin)} />
                        </div>
                    </div>
                    <div class="space-y-6">
                        <SegmentEditor
                            segments={wheel.segments.clone()}
                            on_edit={link.callback(|(index, edit): (usize, SegmentEdit)| Msg::EditSegment(index, edit))}
                            on_remove={link.callback(Msg::RemoveSegment)}
                            on_add={link.callback(|_| Msg::AddSegment)}
                            on_set_count={link.callback(Msg::SetSegmentCount)}
                        />
                        <HistoryList history={wheel.history.clone()} />
                    </div>
                </div>
                if let Some(outcome) = &self.winner {
                    <WinnerOverlay outcome={outcome.clone()} />
                }
            </div>
        }
    }
}
