use leptos::prelude::*;

use crate::components::calculator_pad::CalculatorPad;
use crate::components::countdown_panel::CountdownPanel;
use crate::i18n::{t, LanguageContext, Text};

#[component]
pub fn ToolsPage() -> impl IntoView {
    let LanguageContext { language, .. } = expect_context::<LanguageContext>();

    view! {
        <div class="page tools-page">
            <h2>{move || t(language.get(), Text::ToolsTitle)}</h2>
            <div class="tools-grid">
                <CountdownPanel />
                <CalculatorPad />
            </div>
        </div>
    }
}
