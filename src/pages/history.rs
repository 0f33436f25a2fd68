use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands::{self, HistoryEntry, Intent, Update};
use crate::components::history_chart::HistoryChart;
use crate::components::history_panel::HistoryPanel;
use crate::export::download_csv;
use crate::i18n::{t, LanguageContext, Text};

const CSV_FILENAME: &str = "grades.csv";

#[component]
pub fn HistoryPage() -> impl IntoView {
    let LanguageContext { language, .. } = expect_context::<LanguageContext>();

    let (entries, set_entries) = signal::<Vec<HistoryEntry>>(Vec::new());
    let (status, set_status) = signal::<Option<String>>(None);

    // Load saved results on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::get_history().await {
                Ok(list) => set_entries.set(list),
                Err(e) => set_status.set(Some(format!("Failed to load history: {}", e))),
            }
        });
    });

    let on_export = move |_| {
        let lang = language.get_untracked();
        spawn_local(async move {
            match commands::export_history_csv().await {
                Ok(Some(csv)) => {
                    if let Err(e) = download_csv(CSV_FILENAME, &csv) {
                        set_status.set(Some(e));
                    }
                }
                Ok(None) => set_status.set(Some(t(lang, Text::NothingToExport).to_string())),
                Err(e) => set_status.set(Some(e)),
            }
        });
    };

    let on_clear = move |_| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(t(language.get_untracked(), Text::ConfirmClear))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match commands::dispatch(Intent::ClearHistory).await {
                Ok(Update::HistoryChanged(change)) => {
                    set_entries.set(change.entries);
                    set_status.set(None);
                }
                Ok(_) => {}
                Err(e) => set_status.set(Some(e)),
            }
        });
    };

    view! {
        <div class="page history-page">
            <h2>{move || t(language.get(), Text::HistoryTitle)}</h2>

            <section class="card">
                <HistoryChart entries=entries />
            </section>

            <section class="card">
                <HistoryPanel entries=entries />
                <div class="button-row">
                    <button class="btn btn-primary" on:click=on_export>
                        {move || t(language.get(), Text::ExportCsv)}
                    </button>
                    <button class="btn btn-secondary" on:click=on_clear>
                        {move || t(language.get(), Text::ClearButton)}
                    </button>
                </div>
                {move || status.get().map(|msg| view! { <p class="status-message">{msg}</p> })}
            </section>
        </div>
    }
}
