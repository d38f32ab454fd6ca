use crate::domain::calculator::constraints::{validate, FIELDS};
use crate::domain::calculator::ui::NumberField;
use crate::domain::cities::ui::CitySearch;
use crate::domain::cities::CityEntry;
use crate::layout::{AlertKind, AlertService};
use crate::shared::components::ui::Button;
use crate::shared::format::format_latitude;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Fallback that restores the submit button when the page does not
/// navigate away after submission.
const SUBMIT_RESET_MS: u32 = 5_000;

#[component]
fn Instructions() -> impl IntoView {
    view! {
        <div class="card mb-4">
            <div class="card-body">
                <h2 class="card-title">"Instrucciones"</h2>
                <p>
                    <b>"¿Qué hace esta calculadora?"</b>
                </p>
                <p>
                    "Esta herramienta calcula la distancia óptima entre filas de paneles \
                     solares para minimizar el sombreado durante el solsticio de invierno \
                     (21 de diciembre)."
                </p>
                <b>"Parámetros requeridos:"</b>
                <ul>
                    <li><b>"Latitud:"</b> " Ubicación geográfica en grados"</li>
                    <li><b>"Inclinación:"</b> " Ángulo de inclinación de los paneles"</li>
                    <li><b>"Longitud:"</b> " Longitud física del panel solar"</li>
                </ul>
                <b>"Consejo:"</b>
                " Use la distancia recomendada para tener un margen de seguridad adicional."
            </div>
        </div>
    }
}

/// The calculator's input form. Field values live here so the city search
/// can fill in the latitude and the submit pass can see every field.
#[component]
pub fn CalculatorPage() -> impl IntoView {
    let alerts = use_context::<AlertService>().expect("AlertService not provided in context");

    let latitude = RwSignal::new(String::new());
    let tilt = RwSignal::new(String::new());
    let length = RwSignal::new(String::new());
    // Paired with FIELDS by index
    let values = [latitude, tilt, length];

    let (submitting, set_submitting) = signal(false);

    let form_ref = NodeRef::<leptos::html::Form>::new();

    // Batch pass at submit time: every field must be non-empty and valid,
    // otherwise the native submission is blocked and one banner is raised.
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        let all_valid = FIELDS
            .iter()
            .zip(values)
            .all(|(constraint, value)| !validate(&value.get_untracked(), constraint).blocks_submit());

        if !all_valid {
            ev.prevent_default();
            log::debug!("submission blocked: at least one field empty or invalid");
            alerts.show(
                AlertKind::Danger,
                "Por favor, corrija los errores en el formulario antes de continuar.",
            );
            return;
        }

        log::debug!("form valid, handing off to the calculation endpoint");
        set_submitting.set(true);
        spawn_local(async move {
            TimeoutFuture::new(SUBMIT_RESET_MS).await;
            set_submitting.set(false);
        });
    };

    // Ctrl+Enter submits from anywhere on the page, through the same
    // validation pass as a click on the button.
    let keydown_handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.ctrl_key() && ev.key() == "Enter" {
            ev.prevent_default();
            if let Some(form) = form_ref.get_untracked() {
                let _ = form.request_submit();
            }
        }
    });
    on_cleanup(move || keydown_handle.remove());

    let on_city_selected = Callback::new(move |entry: CityEntry| {
        latitude.set(format_latitude(entry.latitude));
    });

    view! {
        <h1 class="text-center my-4">
            "Calculadora de Distancia Mínima entre Paneles Solares"
        </h1>
        <Instructions />
        <div class="card">
            <div class="card-body">
                <form
                    id="calculatorForm"
                    method="post"
                    action="/calculate"
                    node_ref=form_ref
                    on:submit=on_submit
                >
                    <CitySearch on_select=on_city_selected />
                    <NumberField constraint=&FIELDS[0] value=latitude />
                    <NumberField constraint=&FIELDS[1] value=tilt />
                    <NumberField constraint=&FIELDS[2] value=length />
                    <Button
                        button_type="submit"
                        disabled=Signal::derive(move || submitting.get())
                    >
                        {move || {
                            if submitting.get() {
                                view! {
                                    <span class="spinner-border spinner-border-sm me-2"></span>
                                    "Calculando..."
                                }
                                    .into_any()
                            } else {
                                view! { "Calcular" }.into_any()
                            }
                        }}
                    </Button>
                </form>
            </div>
        </div>
    }
}
