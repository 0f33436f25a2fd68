use leptos::prelude::*;

/// Tone of the message box border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipTone {
    Info,
    Success,
    Danger,
}

#[component]
pub fn TipBox(
    /// Message to show
    #[prop(into)]
    text: Signal<String>,
    #[prop(into)]
    tone: Signal<TipTone>,
) -> impl IntoView {
    let class = move || match tone.get() {
        TipTone::Info => "tips-box tone-info",
        TipTone::Success => "tips-box tone-success",
        TipTone::Danger => "tips-box tone-danger",
    };

    view! {
        <div class=class>
            <span class="tips-icon">"\u{1f4a1}"</span>
            <p class="tips-text">{move || text.get()}</p>
        </div>
    }
}
