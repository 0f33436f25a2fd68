use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;
use wasm_bindgen_futures::spawn_local;

use crate::commands::{self, Language};
use crate::components::sidebar::Sidebar;
use crate::i18n::LanguageContext;
use crate::pages::history::HistoryPage;
use crate::pages::home::HomePage;
use crate::pages::settings::SettingsPage;
use crate::pages::tools::ToolsPage;
use crate::theme::{apply_language, apply_theme, ThemeContext};

#[component]
pub fn App() -> impl IntoView {
    let (dark, set_dark) = signal(false);
    let (language, set_language) = signal(Language::default());
    provide_context(ThemeContext { dark, set_dark });
    provide_context(LanguageContext {
        language,
        set_language,
    });

    // Load saved preferences on mount
    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(prefs) = commands::get_preferences().await {
                set_language.set(prefs.language);
                set_dark.set(prefs.dark);
            }
        });
    });

    // Apply theme and language to the DOM whenever they change
    Effect::new(move |_| apply_theme(dark.get()));
    Effect::new(move |_| {
        let tag = match language.get() {
            Language::Az => "az",
            Language::En => "en",
        };
        apply_language(tag);
    });

    view! {
        <Router>
            <div class="app-layout">
                <Sidebar />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/history") view=HistoryPage />
                        <Route path=path!("/tools") view=ToolsPage />
                        <Route path=path!("/settings") view=SettingsPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
