use crate::domain::cities::{CityDirectory, CityEntry, MIN_QUERY_LEN};
use crate::shared::components::ui::Button;
use crate::shared::format::format_latitude;
use crate::shared::icons::icon;
use crate::shared::timers::Debounce;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Keystrokes are quiet for this long before a search runs.
const DEBOUNCE_MS: i32 = 300;

/// Autocomplete city search that fills in the latitude field.
///
/// Free typing is debounced; refocusing with text, the search button and the
/// Enter key act immediately. Selection reports the entry through
/// `on_select` and hides the panel.
#[component]
pub fn CitySearch(
    /// Called with the chosen entry; the form writes its latitude
    on_select: Callback<CityEntry>,
) -> impl IntoView {
    let directory = use_context::<CityDirectory>().expect("CityDirectory not provided in context");

    let (query, set_query) = signal(String::new());
    let (matches, set_matches) = signal(Vec::<CityEntry>::new());
    let (visible, set_visible) = signal(false);

    let debounce = Debounce::new(DEBOUNCE_MS);

    let run_search = Callback::new(move |q: String| {
        if q.chars().count() < MIN_QUERY_LEN {
            set_matches.set(Vec::new());
            set_visible.set(false);
            return;
        }
        let found = directory.search(&q);
        log::debug!("city search {:?}: {} matches", q, found.len());
        set_matches.set(found);
        set_visible.set(true);
    });

    let select = Callback::new(move |entry: CityEntry| {
        set_query.set(entry.name.clone());
        set_visible.set(false);
        on_select.run(entry);
    });

    // Clicking outside the whole widget hides the panel, query untouched
    let root_ref = NodeRef::<leptos::html::Div>::new();
    let click_handle = window_event_listener(leptos::ev::click, move |ev| {
        let inside = root_ref
            .get_untracked()
            .zip(ev.target())
            .and_then(|(root, target)| {
                let node = target.dyn_into::<web_sys::Node>().ok()?;
                Some(root.contains(Some(&node)))
            })
            .unwrap_or(false);
        if !inside {
            set_visible.set(false);
        }
    });
    on_cleanup(move || click_handle.remove());

    view! {
        <div class="mb-3 position-relative" node_ref=root_ref>
            <label class="form-label" for="citySearch">
                "Buscar ciudad"
            </label>
            <div class="input-group">
                <input
                    id="citySearch"
                    type="text"
                    class="form-control"
                    placeholder="Ej: Madrid, Barcelona..."
                    autocomplete="off"
                    prop:value=move || query.get()
                    on:input=move |ev| {
                        let q = event_target_value(&ev);
                        set_query.set(q.clone());
                        debounce.schedule(move || run_search.run(q));
                    }
                    on:focus=move |_| {
                        let q = query.get_untracked();
                        if !q.is_empty() {
                            run_search.run(q);
                        }
                    }
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            if visible.get_untracked() {
                                if let Some(first) = matches.get_untracked().first().cloned() {
                                    select.run(first);
                                }
                            }
                        }
                    }
                />
                <Button
                    variant="secondary"
                    on_click=Callback::new(move |_| run_search.run(query.get_untracked()))
                >
                    {icon("search")}
                </Button>
            </div>
            <div class="dropdown-menu w-100" class:show=move || visible.get()>
                {move || {
                    let found = matches.get();
                    if found.is_empty() {
                        view! {
                            <div class="dropdown-item-text text-muted">
                                "No se encontraron ciudades"
                            </div>
                        }
                            .into_any()
                    } else {
                        found
                            .into_iter()
                            .map(|entry| {
                                let label = format!("{}, {}", entry.name, entry.country);
                                let lat = format!("{}°", format_latitude(entry.latitude));
                                view! {
                                    <button
                                        type="button"
                                        class="dropdown-item"
                                        on:click=move |_| select.run(entry.clone())
                                    >
                                        {icon("map-pin")}
                                        {label}
                                        <small class="text-muted ms-2">{lat}</small>
                                    </button>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
