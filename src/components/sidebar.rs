use leptos::prelude::*;

use crate::i18n::{t, LanguageContext, Text};

#[component]
pub fn Sidebar() -> impl IntoView {
    let LanguageContext { language, .. } = expect_context::<LanguageContext>();
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <nav class="sidebar">
            <div class="sidebar-header">
                <h1 class="sidebar-title">"Gradebook"</h1>
                <p class="sidebar-subtitle">{move || t(language.get(), Text::Title)}</p>
            </div>
            <ul class="nav-list">
                <li class="nav-item">
                    <a href="/" class="nav-link">{move || t(language.get(), Text::CalcTitle)}</a>
                </li>
                <li class="nav-item">
                    <a href="/history" class="nav-link">{move || t(language.get(), Text::HistoryTitle)}</a>
                </li>
                <li class="nav-item">
                    <a href="/tools" class="nav-link">{move || t(language.get(), Text::ToolsTitle)}</a>
                </li>
                <li class="nav-item">
                    <a href="/settings" class="nav-link">{move || t(language.get(), Text::SettingsTitle)}</a>
                </li>
            </ul>
            <footer class="sidebar-footer">{format!("\u{a9} {}", year)}</footer>
        </nav>
    }
}
