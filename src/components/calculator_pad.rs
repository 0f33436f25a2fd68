use std::collections::VecDeque;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands;

const KEYS: [&str; 18] = [
    "7", "8", "9", "÷", "4", "5", "6", "×", "1", "2", "3", "-", "0", ".", "=", "+", "C", "B",
];

/// Key presses waiting for the backend. Only one round trip is in flight
/// at a time so each press sees the display left by the one before it.
#[derive(Debug, Default)]
struct KeyQueue {
    pending: VecDeque<&'static str>,
    draining: bool,
}

impl KeyQueue {
    /// Queue a key. Returns `true` when the caller should start draining.
    fn push(&mut self, key: &'static str) -> bool {
        self.pending.push_back(key);
        !std::mem::replace(&mut self.draining, true)
    }

    /// Next key to send, or `None` once the queue is empty and idle again.
    fn next(&mut self) -> Option<&'static str> {
        let key = self.pending.pop_front();
        if key.is_none() {
            self.draining = false;
        }
        key
    }
}

/// Basic four-function calculator. Evaluation happens in the backend.
#[component]
pub fn CalculatorPad() -> impl IntoView {
    let (display, set_display) = signal(String::from("0"));

    let queue = StoredValue::new(KeyQueue::default());

    let press = move |key: &'static str| {
        if !queue.try_update_value(|q| q.push(key)).unwrap_or(false) {
            return;
        }
        spawn_local(async move {
            while let Some(key) = queue.try_update_value(|q| q.next()).flatten() {
                let Some(current) = display.try_get_untracked() else {
                    break;
                };
                if let Ok(next) = commands::press_calculator_key(&current, key).await {
                    if set_display.try_set(next).is_some() {
                        break;
                    }
                }
            }
        });
    };

    view! {
        <div class="calculator">
            <input class="calc-display" type="text" readonly prop:value=move || display.get() />
            <div class="calc-buttons">
                {KEYS
                    .iter()
                    .map(|&key| {
                        let class = match key {
                            "=" => "calc-key calc-equals",
                            "C" | "B" => "calc-key calc-control",
                            "÷" | "×" | "-" | "+" => "calc-key calc-operator",
                            _ => "calc-key",
                        };
                        let label = if key == "B" { "\u{232b}" } else { key };
                        view! {
                            <button class=class on:click=move |_| press(key)>{label}</button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_starts_one_drain() {
        let mut queue = KeyQueue::default();
        assert!(queue.push("1"));
        assert!(!queue.push("2"), "second tap must wait for the first");
        assert_eq!(queue.next(), Some("1"));
        assert_eq!(queue.next(), Some("2"));
        assert_eq!(queue.next(), None);
    }

    #[test]
    fn test_queue_restarts_after_idle() {
        let mut queue = KeyQueue::default();
        assert!(queue.push("7"));
        assert_eq!(queue.next(), Some("7"));
        assert_eq!(queue.next(), None);
        assert!(queue.push("+"));
    }

    #[test]
    fn test_queue_accepts_presses_while_draining() {
        let mut queue = KeyQueue::default();
        queue.push("9");
        assert_eq!(queue.next(), Some("9"));
        assert!(!queue.push("="));
        assert_eq!(queue.next(), Some("="));
    }
}
