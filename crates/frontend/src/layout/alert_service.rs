use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Banners disappear on their own after this many milliseconds.
const AUTO_DISMISS_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Danger,
}

impl AlertKind {
    fn css_class(&self) -> &'static str {
        match self {
            AlertKind::Info => "alert-info",
            AlertKind::Danger => "alert-danger",
        }
    }

    fn icon_name(&self) -> &'static str {
        match self {
            AlertKind::Info => "info",
            AlertKind::Danger => "alert-circle",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Alert {
    id: u64,
    kind: AlertKind,
    message: String,
}

/// Service for the transient banner stack at the top of the page
#[derive(Clone, Copy)]
pub struct AlertService {
    alerts: RwSignal<Vec<Alert>>,
    next_id: StoredValue<u64>,
}

impl AlertService {
    pub fn new() -> Self {
        Self {
            alerts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Show a banner. It auto-dismisses after 5 seconds unless the user
    /// closes it first.
    pub fn show(&self, kind: AlertKind, message: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.alerts.update(|list| {
            list.push(Alert {
                id,
                kind,
                message: message.into(),
            })
        });

        let alerts = self.alerts;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            alerts.update(|list| list.retain(|a| a.id != id));
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.alerts.update(|list| list.retain(|a| a.id != id));
    }
}

impl Default for AlertService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the banner stack. Mount once, near the top of the container.
#[component]
pub fn AlertHost() -> impl IntoView {
    let service = use_context::<AlertService>().expect("AlertService not provided in context");

    view! {
        <div class="alert-host">
            <For
                each=move || service.alerts.get()
                key=|alert| alert.id
                children=move |alert| {
                    let Alert { id, kind, message } = alert;
                    view! {
                        <div class=format!("alert {} alert-dismissible fade show", kind.css_class()) role="alert">
                            {icon(kind.icon_name())}
                            {message}
                            <button
                                type="button"
                                class="btn-close"
                                aria-label="Cerrar"
                                on:click=move |_| service.dismiss(id)
                            ></button>
                        </div>
                    }
                }
            />
        </div>
    }
}
