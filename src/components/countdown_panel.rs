use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands::{self, CountdownTick};
use crate::i18n::{countdown_text, t, LanguageContext, Text};

/// Exam date picker with a live countdown driven by backend ticks.
#[component]
pub fn CountdownPanel() -> impl IntoView {
    let LanguageContext { language, .. } = expect_context::<LanguageContext>();
    let (target, set_target) = signal(String::new());
    let (tick, set_tick) = signal::<Option<CountdownTick>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    spawn_local(async move {
        let listening = commands::listen_countdown(move |tk| {
            let _ = set_tick.try_set(Some(tk));
        })
        .await;
        match listening {
            // Unmounted while the subscription was pending.
            Ok(()) if tick.try_get_untracked().is_none() => commands::unlisten_countdown(),
            Ok(()) => {}
            Err(e) => {
                let _ = set_error.try_set(Some(e));
            }
        }
    });

    on_cleanup(|| {
        commands::unlisten_countdown();
        spawn_local(async {
            let _ = commands::stop_countdown().await;
        });
    });

    let start = move |_| {
        let value = target.get();
        if value.is_empty() {
            return;
        }
        spawn_local(async move {
            match commands::start_countdown(&value).await {
                Ok(_) => set_error.set(None),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="countdown">
            <div class="input-row">
                <input
                    class="input"
                    type="datetime-local"
                    prop:value=move || target.get()
                    on:input=move |ev| set_target.set(event_target_value(&ev))
                />
                <button class="btn btn-primary" on:click=start>
                    {move || t(language.get(), Text::CountdownButton)}
                </button>
            </div>
            <p class="countdown-display">
                {move || tick.get().map(|tk| countdown_text(language.get(), tk)).unwrap_or_default()}
            </p>
            {move || error.get().map(|e| view! { <span class="status-text status-error">{e}</span> })}
        </div>
    }
}
