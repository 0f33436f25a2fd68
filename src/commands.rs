use std::cell::RefCell;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "event"], catch)]
    async fn listen(event: &str, handler: &Closure<dyn FnMut(JsValue)>) -> Result<JsValue, JsValue>;
}

// -- Types matching backend structs --

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Az,
    En,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Preferences {
    pub language: Language,
    pub dark: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    #[default]
    Standard,
    Custom,
    Other,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Standard => "standard",
            Scheme::Custom => "custom",
            Scheme::Other => "other",
        }
    }

    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "standard" => Scheme::Standard,
            "custom" => Scheme::Custom,
            _ => Scheme::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tip {
    Excellent,
    ImprovePrimary,
    ImproveSecondary,
    EnterScores,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GradeOutcome {
    pub value: f64,
    pub display: String,
    pub tip: Tip,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HistoryEntry {
    pub timestamp: String,
    pub scores: Vec<f64>,
    pub secondary: f64,
    pub grade: f64,
    pub scheme: Scheme,
}

impl HistoryEntry {
    /// `YYYY-MM-DD` part of the timestamp, used as chart label.
    pub fn date(&self) -> &str {
        self.timestamp.get(..10).unwrap_or(&self.timestamp)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Persistence {
    Durable,
    SessionOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    MissingPrimaryScores,
    Saved,
    Cleared,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HistoryChange {
    pub notice: Notice,
    pub entries: Vec<HistoryEntry>,
    pub persistence: Persistence,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Update {
    Computed(GradeOutcome),
    Notice(Notice),
    HistoryChanged(HistoryChange),
    Preferences(Preferences),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct GradeForm {
    pub scores: String,
    pub secondary: String,
    pub scheme: Scheme,
    pub weight: u8,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Intent {
    Compute(GradeForm),
    Save(GradeForm),
    ClearHistory,
    SetLanguage(Language),
    SetDark(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CountdownTick {
    Running {
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
    },
    Finished,
}

// -- Arg structs for serialization --

#[derive(Serialize)]
struct DispatchArgs {
    intent: Intent,
}

#[derive(Serialize)]
struct PressKeyArgs {
    display: String,
    key: String,
}

#[derive(Serialize)]
struct StartCountdownArgs {
    target: String,
}

// -- Typed invoke helpers --

fn error_text(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| "Unknown error".to_string())
}

async fn call<A: Serialize, T: DeserializeOwned>(cmd: &str, args: &A) -> Result<T, String> {
    let args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke(cmd, args).await.map_err(error_text)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

fn no_args() -> serde_json::Value {
    serde_json::json!({})
}

pub async fn dispatch(intent: Intent) -> Result<Update, String> {
    call("dispatch", &DispatchArgs { intent }).await
}

pub async fn get_preferences() -> Result<Preferences, String> {
    call("get_preferences", &no_args()).await
}

pub async fn share_text() -> Result<String, String> {
    call("share_text", &no_args()).await
}

pub async fn get_history() -> Result<Vec<HistoryEntry>, String> {
    call("get_history", &no_args()).await
}

pub async fn export_history_csv() -> Result<Option<String>, String> {
    call("export_history_csv", &no_args()).await
}

pub async fn press_calculator_key(display: &str, key: &str) -> Result<String, String> {
    call(
        "press_calculator_key",
        &PressKeyArgs {
            display: display.to_string(),
            key: key.to_string(),
        },
    )
    .await
}

/// Returns `false` when the backend could not read the date.
pub async fn start_countdown(target: &str) -> Result<bool, String> {
    call(
        "start_countdown",
        &StartCountdownArgs {
            target: target.to_string(),
        },
    )
    .await
}

pub async fn stop_countdown() -> Result<(), String> {
    let args = serde_wasm_bindgen::to_value(&no_args()).map_err(|e| e.to_string())?;
    invoke("stop_countdown", args)
        .await
        .map(|_| ())
        .map_err(error_text)
}

/// A registered `countdown-tick` handler and the function that removes it.
struct CountdownListener {
    unlisten: js_sys::Function,
    _handler: Closure<dyn FnMut(JsValue)>,
}

impl CountdownListener {
    fn remove(self) {
        let _ = self.unlisten.call0(&JsValue::NULL);
    }
}

/// Holds at most one live subscription; registering a new one hands back
/// the old one so the caller can remove it.
struct ListenerSlot<L> {
    current: Option<L>,
}

impl<L> ListenerSlot<L> {
    const fn new() -> Self {
        Self { current: None }
    }

    fn replace(&mut self, next: L) -> Option<L> {
        self.current.replace(next)
    }

    fn take(&mut self) -> Option<L> {
        self.current.take()
    }
}

thread_local! {
    static COUNTDOWN_LISTENER: RefCell<ListenerSlot<CountdownListener>> =
        const { RefCell::new(ListenerSlot::new()) };
}

/// Subscribe to countdown ticks, replacing any earlier subscription.
/// The handler stays registered until [`unlisten_countdown`] runs.
pub async fn listen_countdown<F>(on_tick: F) -> Result<(), String>
where
    F: Fn(CountdownTick) + 'static,
{
    let handler = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
        let payload = js_sys::Reflect::get(&event, &JsValue::from_str("payload"))
            .unwrap_or(JsValue::UNDEFINED);
        if let Ok(tick) = serde_wasm_bindgen::from_value::<CountdownTick>(payload) {
            on_tick(tick);
        }
    });

    let unlisten = listen("countdown-tick", &handler)
        .await
        .map_err(error_text)?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| "listen did not return an unlisten function".to_string())?;

    let listener = CountdownListener {
        unlisten,
        _handler: handler,
    };
    let previous = COUNTDOWN_LISTENER.with(|slot| slot.borrow_mut().replace(listener));
    if let Some(previous) = previous {
        previous.remove();
    }
    Ok(())
}

/// Remove the countdown subscription, if any.
pub fn unlisten_countdown() {
    let current = COUNTDOWN_LISTENER.with(|slot| slot.borrow_mut().take());
    if let Some(current) = current {
        current.remove();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listener_slot_keeps_only_latest() {
        let mut slot = ListenerSlot::new();
        assert_eq!(slot.replace("first mount"), None);
        assert_eq!(slot.replace("second mount"), Some("first mount"));
        assert_eq!(slot.take(), Some("second mount"));
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn test_listener_slot_empty_after_take() {
        let mut slot = ListenerSlot::new();
        slot.replace(1);
        slot.take();
        assert_eq!(slot.replace(2), None);
    }
}
