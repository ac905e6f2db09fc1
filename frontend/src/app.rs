use shared::engine::SpinOutcome;
use shared::prize::PrizeOption;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::fetch_prize_options;
use crate::pages::prize_wheel::PrizeWheel;

#[function_component(App)]
pub fn app() -> Html {
    let prizes = use_state(|| None::<Vec<PrizeOption>>);
    let error_message = use_state(|| None::<String>);
    let is_loading = use_state(|| true);
    // Bumped by the retry button to re-run the fetch effect.
    let attempt = use_state(|| 0u32);
    let last_outcome = use_state(|| None::<SpinOutcome>);

    {
        let prizes = prizes.clone();
        let error_message = error_message.clone();
        let is_loading = is_loading.clone();

        use_effect_with(*attempt, move |_| {
            spawn_local(async move {
                is_loading.set(true);
                error_message.set(None);
                match fetch_prize_options().await {
                    Ok(fetched) => {
                        if fetched.is_empty() {
                            error_message.set(Some("No active prizes are configured.".to_string()));
                            prizes.set(None);
                        } else {
                            prizes.set(Some(fetched));
                        }
                    }
                    Err(err) => {
                        log::error!("failed to fetch prize config: {err}");
                        error_message.set(Some(err));
                        prizes.set(None);
                    }
                }
                is_loading.set(false);
            });
            || ()
        });
    }

    let on_retry = {
        let attempt = attempt.clone();
        Callback::from(move |_| attempt.set(*attempt + 1))
    };

    let on_prize_selected = {
        let last_outcome = last_outcome.clone();
        Callback::from(move |outcome: SpinOutcome| {
            log::info!("spin finished: {}", outcome.winning_prize.name);
            // The surrounding lead-capture flow persists the win from here.
            last_outcome.set(Some(outcome));
        })
    };

    html! {
        <div class="container mx-auto px-4 py-8">
            <h1 class="mb-6 text-center text-3xl font-bold text-gray-900">
                {"Spin the Prize Wheel!"}
            </h1>
            {
                if *is_loading {
                    html! {
                        <div class="flex h-64 flex-col items-center justify-center">
                            <div class="h-8 w-8 animate-spin rounded-full border-4 border-violet-600 border-t-transparent"></div>
                            <p class="mt-2 text-sm text-gray-500">{"Loading the prize wheel..."}</p>
                        </div>
                    }
                } else if let Some(message) = (*error_message).clone() {
                    html! {
                        <div class="flex h-64 flex-col items-center justify-center">
                            <p class="text-red-500">{message}</p>
                            <button
                                onclick={on_retry}
                                class="mt-4 rounded-lg bg-violet-700 px-6 py-2 font-semibold text-white hover:bg-violet-800"
                            >
                                {"Try Again"}
                            </button>
                        </div>
                    }
                } else if let Some(prizes) = (*prizes).clone() {
                    html! {
                        <PrizeWheel {prizes} {on_prize_selected} />
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
