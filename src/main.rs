mod app;
mod commands;
mod components;
mod export;
mod i18n;
mod pages;
mod theme;

use app::App;

fn main() {
    leptos::mount::mount_to_body(App);
}
