mod theme;
mod wheel_canvas;
mod wheel_controls;

pub use theme::WheelTheme;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use shared::engine::{SpinOutcome, SpinStart, WheelEngine};
use shared::prize::PrizeOption;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};
use yew::prelude::*;

use wheel_canvas::{draw_wheel, WHEEL_SIZE};
use wheel_controls::{ResultDisplay, SpinButton};

#[derive(Properties, PartialEq)]
pub struct PrizeWheelProps {
    /// Active prizes only; the fetch boundary filters before we get here.
    pub prizes: Vec<PrizeOption>,
    /// Fired once per spin when the animation completes. The caller owns
    /// persisting the win and notifying the lead.
    pub on_prize_selected: Callback<SpinOutcome>,
    #[prop_or_default]
    pub theme: WheelTheme,
}

/// Everything one animation step needs. Each frame advances the engine,
/// redraws, and re-schedules itself until the engine reports the outcome.
#[derive(Clone)]
struct SpinLoop {
    engine: Rc<RefCell<WheelEngine>>,
    raf_handle: Rc<RefCell<Option<AnimationFrame>>>,
    canvas_ref: NodeRef,
    theme: WheelTheme,
    images: Rc<RefCell<HashMap<String, HtmlImageElement>>>,
    is_spinning: UseStateHandle<bool>,
    winner: UseStateHandle<Option<String>>,
    on_prize_selected: Callback<SpinOutcome>,
}

impl SpinLoop {
    fn schedule(self) {
        let slot = self.raf_handle.clone();
        let frame = request_animation_frame(move |timestamp| self.step(timestamp));
        *slot.borrow_mut() = Some(frame);
    }

    fn step(self, timestamp: f64) {
        let outcome = self.engine.borrow_mut().tick(timestamp);
        draw(&self.canvas_ref, &self.engine.borrow(), &self.theme, &self.images.borrow());
        let still_spinning = self.engine.borrow().is_spinning();
        match outcome {
            None if still_spinning => self.schedule(),
            None => {
                self.raf_handle.borrow_mut().take();
            }
            Some(outcome) => {
                self.raf_handle.borrow_mut().take();
                self.is_spinning.set(false);
                self.winner.set(Some(outcome.winning_prize.name.clone()));
                self.on_prize_selected.emit(outcome);
            }
        }
    }
}

#[function_component(PrizeWheel)]
pub fn prize_wheel(props: &PrizeWheelProps) -> Html {
    let canvas_ref = use_node_ref();
    let engine = use_mut_ref(WheelEngine::default);
    let raf_handle = use_mut_ref(|| None::<AnimationFrame>);
    let images = use_mut_ref(HashMap::<String, HtmlImageElement>::new);
    let is_spinning = use_state(|| false);
    let winner = use_state(|| None::<String>);
    let config_error = use_state(|| None::<String>);

    // Configure the engine and render the idle wheel whenever the prize
    // list changes.
    {
        let engine = engine.clone();
        let images = images.clone();
        let config_error = config_error.clone();
        let canvas_ref = canvas_ref.clone();
        let theme = props.theme.clone();

        use_effect_with(props.prizes.clone(), move |prizes| {
            if canvas_ref.cast::<HtmlCanvasElement>().is_none() {
                log::error!("wheel canvas is not mounted; frames will be skipped");
            }
            match engine.borrow_mut().configure(prizes.clone()) {
                Ok(()) => config_error.set(None),
                Err(err) => {
                    log::warn!("prize configuration rejected: {err}");
                    config_error.set(Some(err.to_string()));
                }
            }
            preload_images(prizes, &mut images.borrow_mut());
            draw(&canvas_ref, &engine.borrow(), &theme, &images.borrow());
            || ()
        });
    }

    // Cancel any in-flight animation frame when the view unmounts, so a
    // disposed canvas is never drawn to and the callback does not leak.
    {
        let raf_handle = raf_handle.clone();
        use_effect_with((), move |_| {
            move || {
                raf_handle.borrow_mut().take();
            }
        });
    }

    let on_spin = {
        let engine = engine.clone();
        let raf_handle = raf_handle.clone();
        let canvas_ref = canvas_ref.clone();
        let theme = props.theme.clone();
        let images = images.clone();
        let is_spinning = is_spinning.clone();
        let winner = winner.clone();
        let config_error = config_error.clone();
        let on_prize_selected = props.on_prize_selected.clone();

        Callback::from(move |_: MouseEvent| {
            let started = engine
                .borrow_mut()
                .start_spin(&mut rand::thread_rng(), now_ms());
            match started {
                Ok(SpinStart::Started) => {
                    is_spinning.set(true);
                    winner.set(None);
                    SpinLoop {
                        engine: engine.clone(),
                        raf_handle: raf_handle.clone(),
                        canvas_ref: canvas_ref.clone(),
                        theme: theme.clone(),
                        images: images.clone(),
                        is_spinning: is_spinning.clone(),
                        winner: winner.clone(),
                        on_prize_selected: on_prize_selected.clone(),
                    }
                    .schedule();
                }
                Ok(SpinStart::AlreadySpinning) => {}
                Err(err) => {
                    log::warn!("spin rejected: {err}");
                    config_error.set(Some(err.to_string()));
                }
            }
        })
    };

    let size = WHEEL_SIZE.to_string();

    html! {
        <div class="flex flex-col items-center">
            {
                if let Some(message) = (*config_error).clone() {
                    html! { <p class="mb-2 text-sm text-red-500">{ message }</p> }
                } else {
                    html! {}
                }
            }
            <canvas
                ref={canvas_ref}
                width={size.clone()}
                height={size}
                class="rounded-full border border-gray-200 shadow-lg"
            />
            <ResultDisplay winner={(*winner).clone()} />
            <SpinButton
                is_spinning={*is_spinning}
                disabled={config_error.is_some()}
                onclick={on_spin}
            />
        </div>
    }
}

/// Monotonic frame clock; the same time base requestAnimationFrame stamps
/// ticks with.
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Kicks off loads for wedge images so they are ready by the time the
/// wheel stops. Wedges fall back to their text label until then.
fn preload_images(prizes: &[PrizeOption], images: &mut HashMap<String, HtmlImageElement>) {
    for prize in prizes {
        let Some(image) = prize.image.as_ref() else {
            continue;
        };
        if images.contains_key(&image.url) {
            continue;
        }
        match HtmlImageElement::new() {
            Ok(element) => {
                element.set_src(&image.url);
                images.insert(image.url.clone(), element);
            }
            Err(err) => log::warn!("failed to create image element: {err:?}"),
        }
    }
}

/// Renders one frame. A missing canvas or 2d context is a safe no-op; a
/// dropped frame is preferable to killing a near-complete spin.
fn draw(
    canvas_ref: &NodeRef,
    engine: &WheelEngine,
    theme: &WheelTheme,
    images: &HashMap<String, HtmlImageElement>,
) {
    let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
        return;
    };
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };
    draw_wheel(
        &ctx,
        f64::from(canvas.width()),
        engine.options(),
        engine.layout(),
        engine.angle(),
        theme,
        images,
    );
}
