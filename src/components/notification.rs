use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// How long a toast stays on screen before it dismisses itself.
const DISMISS_AFTER_MS: u32 = 5_000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Severity {
    Success,
    Error,
}

/// One transient message. The id is a per-form counter so a replacing
/// toast with identical text still restarts the dismiss timer.
#[derive(Clone, PartialEq, Debug)]
pub struct Notification {
    pub id: u32,
    pub severity: Severity,
    pub text: String,
}

impl Notification {
    pub fn success(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            severity: Severity::Success,
            text: text.into(),
        }
    }

    pub fn error(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            severity: Severity::Error,
            text: text.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationToastProps {
    pub notification: Notification,
    pub on_dismiss: Callback<u32>,
}

/// Fixed top-right toast. The owner keeps at most one `Notification`
/// in its slot, so showing a new one replaces whatever is on screen.
#[function_component(NotificationToast)]
pub fn notification_toast(props: &NotificationToastProps) -> Html {
    {
        let id = props.notification.id;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(DISMISS_AFTER_MS, move || {
                    on_dismiss.emit(id);
                });
                // a replacing toast cancels the stale timer
                move || drop(timeout)
            },
            id,
        );
    }

    let background = match props.notification.severity {
        Severity::Success => "#22c55e",
        Severity::Error => "#ef4444",
    };

    html! {
        <div
            class="notification"
            style={format!(
                "position: fixed; top: 1rem; right: 1rem; z-index: 50; max-width: 28rem; \
                 padding: 1rem; border-radius: 0.5rem; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.25); \
                 color: #ffffff; background: {};",
                background
            )}
        >
            {props.notification.text.clone()}
        </div>
    }
}
