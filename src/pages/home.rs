use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands::{self, GradeForm, Intent, Notice, Persistence, Scheme, Update};
use crate::components::tip_box::{TipBox, TipTone};
use crate::export;
use crate::i18n::{notice_text, t, tip_text, LanguageContext, Text};

/// What the tip box currently shows.
#[derive(Debug, Clone, PartialEq)]
enum Message {
    Tip(commands::Tip),
    Notice(Notice),
    SessionOnly,
    Text(Text),
    Error(String),
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
pub fn HomePage() -> impl IntoView {
    let LanguageContext { language, .. } = expect_context::<LanguageContext>();

    let (scores, set_scores) = signal(String::new());
    let (secondary, set_secondary) = signal(String::new());
    let (scheme, set_scheme) = signal(Scheme::Standard);
    let (weight, set_weight) = signal(40u8);
    let (result, set_result) = signal::<Option<String>>(None);
    let (message, set_message) = signal(Message::Tip(commands::Tip::EnterScores));

    let form = move || GradeForm {
        scores: scores.get_untracked(),
        secondary: secondary.get_untracked(),
        scheme: scheme.get_untracked(),
        weight: weight.get_untracked(),
    };

    let apply = move |update: Update| match update {
        Update::Computed(outcome) => {
            set_result.set(Some(outcome.display));
            set_message.set(Message::Tip(outcome.tip));
        }
        Update::Notice(notice) => {
            if notice == Notice::MissingPrimaryScores {
                set_result.set(None);
            }
            set_message.set(Message::Notice(notice));
        }
        Update::HistoryChanged(change) => {
            if change.persistence == Persistence::SessionOnly {
                set_message.set(Message::SessionOnly);
            } else {
                set_message.set(Message::Notice(change.notice));
            }
        }
        Update::Preferences(_) => {}
    };

    let send = move |intent: Intent| {
        spawn_local(async move {
            match commands::dispatch(intent).await {
                Ok(update) => apply(update),
                Err(e) => set_message.set(Message::Error(e)),
            }
        });
    };

    // Recalculate whenever an input changes.
    Effect::new(move |_| {
        scores.track();
        secondary.track();
        scheme.track();
        weight.track();
        if scores.get_untracked().trim().is_empty() && secondary.get_untracked().trim().is_empty() {
            set_result.set(None);
            set_message.set(Message::Tip(commands::Tip::EnterScores));
            return;
        }
        send(Intent::Compute(form()));
    });

    let on_save = move |_| send(Intent::Save(form()));

    let on_clear = move |_| {
        if confirm(t(language.get_untracked(), Text::ConfirmClear)) {
            send(Intent::ClearHistory);
        }
    };

    let on_share = move |_| {
        let lang = language.get_untracked();
        spawn_local(async move {
            let text = match commands::share_text().await {
                Ok(text) => text,
                Err(e) => {
                    set_message.set(Message::Error(e));
                    return;
                }
            };
            match export::share_or_copy(t(lang, Text::Title), &text).await {
                Ok(true) => set_message.set(Message::Text(Text::Copied)),
                Ok(false) => {}
                Err(e) => set_message.set(Message::Error(e)),
            }
        });
    };

    let message_text = Signal::derive(move || {
        let lang = language.get();
        match message.get() {
            Message::Tip(tip) => tip_text(lang, tip).to_string(),
            Message::Notice(notice) => notice_text(lang, notice).to_string(),
            Message::SessionOnly => t(lang, Text::SessionOnly).to_string(),
            Message::Text(text) => t(lang, text).to_string(),
            Message::Error(e) => e,
        }
    });

    let message_tone = Signal::derive(move || match message.get() {
        Message::Notice(Notice::Saved) => TipTone::Success,
        Message::Notice(Notice::Cleared) | Message::Error(_) | Message::SessionOnly => {
            TipTone::Danger
        }
        _ => TipTone::Info,
    });

    view! {
        <div class="page home-page">
            <h2>{move || t(language.get(), Text::CalcTitle)}</h2>

            <section class="card grade-form">
                <div class="form-group">
                    <label for="primary-scores">{move || t(language.get(), Text::PrimaryLabel)}</label>
                    <input
                        id="primary-scores"
                        class="input"
                        type="text"
                        placeholder="85, 90, 78"
                        prop:value=move || scores.get()
                        on:input=move |ev| set_scores.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="secondary-score">{move || t(language.get(), Text::SecondaryLabel)}</label>
                    <input
                        id="secondary-score"
                        class="input"
                        type="number"
                        min="0"
                        max="100"
                        placeholder="80"
                        prop:value=move || secondary.get()
                        on:input=move |ev| set_secondary.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="scheme">{move || t(language.get(), Text::SchemeLabel)}</label>
                    <select
                        id="scheme"
                        class="input"
                        prop:value=move || scheme.get().as_str()
                        on:change=move |ev| set_scheme.set(Scheme::from_tag(&event_target_value(&ev)))
                    >
                        <option value="standard">{move || t(language.get(), Text::SchemeStandard)}</option>
                        <option value="custom">{move || t(language.get(), Text::SchemeCustom)}</option>
                        <option value="other">{move || t(language.get(), Text::SchemeOther)}</option>
                    </select>
                </div>

                <Show when=move || scheme.get() == Scheme::Custom>
                    <div class="form-group custom-weights">
                        <label for="primary-weight">
                            {move || format!("{}: {}%", t(language.get(), Text::PrimaryWeight), weight.get())}
                        </label>
                        <input
                            id="primary-weight"
                            type="range"
                            min="0"
                            max="100"
                            prop:value=move || weight.get().to_string()
                            on:input=move |ev| {
                                if let Ok(w) = event_target_value(&ev).parse::<u8>() {
                                    set_weight.set(w.min(100));
                                }
                            }
                        />
                        <span class="weight-complement">
                            {move || format!("{}: {}%", t(language.get(), Text::SecondaryWeight), 100 - weight.get())}
                        </span>
                    </div>
                </Show>

                <div class="button-row">
                    <button class="btn btn-primary" on:click=move |_| send(Intent::Compute(form()))>
                        {move || t(language.get(), Text::CalcButton)}
                    </button>
                    <button class="btn btn-save" on:click=on_save>
                        {move || t(language.get(), Text::SaveButton)}
                    </button>
                    <button class="btn btn-secondary" on:click=on_clear>
                        {move || t(language.get(), Text::ClearButton)}
                    </button>
                    <button class="btn btn-secondary" on:click=on_share>
                        {move || t(language.get(), Text::ShareButton)}
                    </button>
                </div>
            </section>

            <section class="card result-card">
                <span class="result-label">{move || t(language.get(), Text::ResultLabel)}</span>
                <span class="result-value">{move || result.get().unwrap_or_else(|| "-".to_string())}</span>
                <span class="result-converted">
                    {move || result.get().map(|r| format!("{}/100", r)).unwrap_or_default()}
                </span>
            </section>

            <TipBox text=message_text tone=message_tone />
        </div>
    }
}
