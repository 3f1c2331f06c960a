//! Countdown to the drop start.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by `DropWidget` while the start date is in the future. Owns only
//! its own ticking; when the countdown runs out it clears itself and does
//! not tell the parent.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::countdown::Countdown;
#[cfg(feature = "hydrate")]
use crate::util::{clock::now_ms, ticks::BrowserTicks};

/// Ticks once per second toward `drop_at_ms` (unix milliseconds).
#[component]
pub fn CountdownTimer(drop_at_ms: i64) -> impl IntoView {
    let timer_text = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        let countdown = Countdown::new(BrowserTicks);
        countdown.start(drop_at_ms, now_ms, move |text| timer_text.set(text));
        let countdown = StoredValue::new_local(countdown);
        on_cleanup(move || {
            let _ = countdown.try_with_value(Countdown::stop);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = drop_at_ms;
    }

    view! {
        <div class="timer-container">
            <p class="timer-header">"Candy Drop Starting In"</p>
            <Show when=move || !timer_text.get().is_empty()>
                <p class="timer-value">{move || format!("⏰ {}", timer_text.get())}</p>
            </Show>
        </div>
    }
}
