//! Table of saved results.

use leptos::prelude::*;

use crate::commands::HistoryEntry;
use crate::i18n::{t, LanguageContext, Text};

fn scheme_label(entry: &HistoryEntry, lang: crate::commands::Language) -> &'static str {
    use crate::commands::Scheme;
    match entry.scheme {
        Scheme::Standard => t(lang, Text::SchemeStandard),
        Scheme::Custom => t(lang, Text::SchemeCustom),
        Scheme::Other => t(lang, Text::SchemeOther),
    }
}

/// Saved results, oldest first.
#[component]
pub fn HistoryPanel(#[prop(into)] entries: Signal<Vec<HistoryEntry>>) -> impl IntoView {
    let LanguageContext { language, .. } = expect_context::<LanguageContext>();

    view! {
        <div class="history-panel">
            {move || {
                let lang = language.get();
                let entries = entries.get();
                if entries.is_empty() {
                    view! { <p class="history-empty">{t(lang, Text::NoHistory)}</p> }.into_any()
                } else {
                    view! {
                        <table class="history-table">
                            <thead>
                                <tr>
                                    <th>{t(lang, Text::ColDate)}</th>
                                    <th>{t(lang, Text::ColPrimary)}</th>
                                    <th>{t(lang, Text::ColSecondary)}</th>
                                    <th>{t(lang, Text::ColFinal)}</th>
                                    <th>{t(lang, Text::ColScheme)}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {entries.iter().rev().map(|entry| {
                                    let scores = entry
                                        .scores
                                        .iter()
                                        .map(|s| s.to_string())
                                        .collect::<Vec<_>>()
                                        .join(", ");
                                    view! {
                                        <tr>
                                            <td>{entry.date().to_string()}</td>
                                            <td>{scores}</td>
                                            <td>{entry.secondary.to_string()}</td>
                                            <td class="history-final">{format!("{:.2}", entry.grade)}</td>
                                            <td>{scheme_label(entry, lang)}</td>
                                        </tr>
                                    }
                                }).collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    }.into_any()
                }
            }}
        </div>
    }
}
