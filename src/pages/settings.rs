use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands::{self, Intent, Language, Update};
use crate::i18n::{t, LanguageContext, Text};
use crate::theme::ThemeContext;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let LanguageContext {
        language,
        set_language,
    } = expect_context::<LanguageContext>();
    let ThemeContext { dark, set_dark } = expect_context::<ThemeContext>();
    let (status, set_status) = signal::<Option<String>>(None);

    // The backend echoes the stored preferences; the contexts follow it.
    let send = move |intent: Intent| {
        spawn_local(async move {
            match commands::dispatch(intent).await {
                Ok(Update::Preferences(prefs)) => {
                    set_language.set(prefs.language);
                    set_dark.set(prefs.dark);
                    set_status.set(None);
                }
                Ok(_) => {}
                Err(e) => set_status.set(Some(format!("Failed to save: {}", e))),
            }
        });
    };

    let chip = move |lang: Language, label: &'static str| {
        view! {
            <button
                class="chip"
                class:chip-active=move || language.get() == lang
                on:click=move |_| send(Intent::SetLanguage(lang))
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="page settings-page">
            <h2>{move || t(language.get(), Text::SettingsTitle)}</h2>

            <section class="settings-section">
                <h3>{move || t(language.get(), Text::LanguageLabel)}</h3>
                <div class="chip-row">
                    {chip(Language::Az, "AZ")}
                    {chip(Language::En, "EN")}
                </div>
            </section>

            <section class="settings-section">
                <label class="toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || dark.get()
                        on:change=move |ev| send(Intent::SetDark(event_target_checked(&ev)))
                    />
                    <span>{move || t(language.get(), Text::DarkMode)}</span>
                </label>
            </section>

            {move || status.get().map(|msg| view! { <p class="status-message">{msg}</p> })}
        </div>
    }
}
