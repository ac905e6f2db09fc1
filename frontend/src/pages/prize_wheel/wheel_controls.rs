use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub disabled: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_text = if props.is_spinning { "Spinning..." } else { "Spin!" };
    let is_disabled = props.is_spinning || props.disabled;

    let button_class = if is_disabled {
        "cursor-not-allowed bg-gray-400 opacity-75 text-white"
    } else {
        "bg-violet-700 hover:bg-violet-800 text-white shadow-lg hover:shadow-xl"
    };

    html! {
        <button
            onclick={props.onclick.clone()}
            disabled={is_disabled}
            class={classes!(
                "mt-4",
                "rounded-full",
                "px-8",
                "py-3",
                "text-lg",
                "font-bold",
                "transition-all",
                "duration-300",
                button_class
            )}
        >
            { button_text }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub winner: Option<String>,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    let Some(winner) = props.winner.clone() else {
        return html! {};
    };

    html! {
        <div class="mt-4 text-center">
            <p class="mb-2 text-lg font-semibold text-gray-800">
                {"You won: "}<span class="font-bold text-violet-700">{ winner }</span>
            </p>
            <p class="text-sm text-gray-500">
                {"We'll be in touch with details on how to claim your prize."}
            </p>
        </div>
    }
}
