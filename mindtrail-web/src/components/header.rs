use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct HeaderProps {
    pub voice: bool,
    pub on_toggle_voice: Callback<bool>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let voice = props.voice;
    let on_toggle = {
        let on_toggle_voice = props.on_toggle_voice.clone();
        Callback::from(move |_| on_toggle_voice.emit(!voice))
    };
    let voice_label = if voice {
        "Narrator: on"
    } else {
        "Narrator: off"
    };

    html! {
        <header class="app-header" data-testid="app-header">
            <h1 class="app-title">{ "Mindtrail" }</h1>
            <p class="app-tagline">{ "Play your way through math, code, and science." }</p>
            <button
                class="voice-toggle"
                onclick={on_toggle}
                aria-pressed={voice.to_string()}
                data-testid="voice-toggle"
            >
                { voice_label }
            </button>
        </header>
    }
}
