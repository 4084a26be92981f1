pub mod state;

use self::state::create_state;
use crate::domain::format_mapping::api as mapping_api;
use crate::domain::platform::api;
use crate::domain::platform::ui::details::PlatformDetails;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, sort_list, Sortable};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::platform::aggregate::Platform;
use contracts::domain::platform::enrich::{enrich_platforms, PlatformRow};
use leptos::prelude::*;
use std::cmp::Ordering;

impl Sortable for PlatformRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "platform" => self
                .platform
                .to_lowercase()
                .cmp(&other.platform.to_lowercase()),
            "platform_name" => self
                .platform_name
                .to_lowercase()
                .cmp(&other.platform_name.to_lowercase()),
            "platform_id" => self
                .platform_id
                .to_lowercase()
                .cmp(&other.platform_id.to_lowercase()),
            "standardized_name" => self
                .standardized_name
                .to_lowercase()
                .cmp(&other.standardized_name.to_lowercase()),
            "content_box" => self
                .content_box
                .clone()
                .unwrap_or_default()
                .to_lowercase()
                .cmp(&other.content_box.clone().unwrap_or_default().to_lowercase()),
            "marke" => self
                .marke
                .clone()
                .unwrap_or_default()
                .to_lowercase()
                .cmp(&other.marke.clone().unwrap_or_default().to_lowercase()),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn PlatformList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let state = create_state();
    let (items, set_items) = signal::<Vec<PlatformRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let fetch = move || {
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let platforms = match api::fetch_platforms().await {
                Ok(v) => v,
                Err(e) => {
                    log::error!("Error fetching platforms: {e}");
                    set_error.set(Some(format!("Failed to load platforms: {e}")));
                    set_loading.set(false);
                    return;
                }
            };
            // A failed mapping fetch degrades to an unenriched grid instead of
            // failing the whole load.
            let mappings = match mapping_api::fetch_mappings().await {
                Ok(v) => v,
                Err(e) => {
                    log::error!("Error fetching format mappings: {e}");
                    Vec::new()
                }
            };
            set_items.set(enrich_platforms(platforms, &mappings));
            set_error.set(None);
            set_loading.set(false);
        });
    };

    let open_details_modal = move |id: Option<String>| {
        modal_stack.push(move |handle| {
            let record: Option<Platform> = id.as_ref().and_then(|id| {
                items
                    .get_untracked()
                    .iter()
                    .find(|r| &r.platform_id == id)
                    .map(|r| r.record())
            });
            let existing: Vec<Platform> =
                items.get_untracked().iter().map(|r| r.record()).collect();
            view! {
                <PlatformDetails
                    record=record
                    existing=existing
                    on_saved=Callback::new({
                        let handle = handle.clone();
                        move |_| {
                            handle.close();
                            fetch();
                        }
                    })
                    on_cancel=Callback::new({
                        let handle = handle.clone();
                        move |_| handle.close()
                    })
                />
            }
            .into_any()
        });
    };

    let handle_create_new = move || {
        open_details_modal(None);
    };

    let handle_edit = move |id: String| {
        open_details_modal(Some(id));
    };

    let handle_delete = move |id: String| {
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_platform(&id).await {
                Ok(()) => fetch(),
                Err(e) => {
                    log::error!("Error deleting platform: {e}");
                    set_error.set(Some(format!("Failed to delete platform: {e}")));
                }
            }
        });
    };

    let toggle_sort = move |field: &'static str| {
        move |_| {
            state.update(|s| {
                if s.sort_field == field {
                    s.sort_ascending = !s.sort_ascending;
                } else {
                    s.sort_field = field.to_string();
                    s.sort_ascending = true;
                }
            });
        }
    };

    let sorted_items = move || {
        let mut items_vec = items.get();
        let s = state.get();
        sort_list(&mut items_vec, &s.sort_field, s.sort_ascending);
        items_vec
    };

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Platforms"}</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| handle_create_new()>
                        {icon("plus")}
                        {"Add Platform"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| {
                        state.update(|s| s.show_format_mapping = !s.show_format_mapping);
                    }>
                        {move || icon(if state.get().show_format_mapping { "eye-off" } else { "eye" })}
                        {move || if state.get().show_format_mapping { "Hide Format Mapping" } else { "Show Format Mapping" }}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("platform")>
                                "Platform"
                                <span class={move || get_sort_class(&state.get().sort_field, "platform")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "platform", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("platform_name")>
                                "Platform Name"
                                <span class={move || get_sort_class(&state.get().sort_field, "platform_name")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "platform_name", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("platform_id")>
                                "Platform ID"
                                <span class={move || get_sort_class(&state.get().sort_field, "platform_id")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "platform_id", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("standardized_name")>
                                "Standardized Name"
                                <span class={move || get_sort_class(&state.get().sort_field, "standardized_name")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "standardized_name", state.get().sort_ascending)}
                                </span>
                            </th>
                            {move || state.get().show_format_mapping.then(|| view! {
                                <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("content_box")>
                                    "Content Box"
                                    <span class="table__badge">{"Format Mapping"}</span>
                                    <span class={move || get_sort_class(&state.get().sort_field, "content_box")}>
                                        {move || get_sort_indicator(&state.get().sort_field, "content_box", state.get().sort_ascending)}
                                    </span>
                                </th>
                                <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("marke")>
                                    "Marke"
                                    <span class="table__badge">{"Format Mapping"}</span>
                                    <span class={move || get_sort_class(&state.get().sort_field, "marke")}>
                                        {move || get_sort_indicator(&state.get().sort_field, "marke", state.get().sort_ascending)}
                                    </span>
                                </th>
                            })}
                            <th class="table__header-cell">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if loading.get() && items.get().is_empty() {
                                return view! {
                                    <tr class="table__row">
                                        <td class="table__cell table__cell--loading" colspan="7">{"Loading..."}</td>
                                    </tr>
                                }.into_any();
                            }
                            sorted_items().into_iter().map(|row| {
                                let edit_id = row.platform_id.clone();
                                let delete_id = row.platform_id.clone();
                                let content_box = row.content_box.clone().unwrap_or_default();
                                let marke = row.marke.clone().unwrap_or_default();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{row.platform}</td>
                                        <td class="table__cell">{row.platform_name}</td>
                                        <td class="table__cell">{row.platform_id}</td>
                                        <td class="table__cell">{row.standardized_name}</td>
                                        {move || state.get().show_format_mapping.then(|| view! {
                                            <td class="table__cell table__cell--mapping">{content_box.clone()}</td>
                                            <td class="table__cell table__cell--mapping">{marke.clone()}</td>
                                        })}
                                        <td class="table__cell table__cell--actions">
                                            <button
                                                class="button button--small"
                                                on:click=move |_| handle_edit(edit_id.clone())
                                            >
                                                {"Edit"}
                                            </button>
                                            <button
                                                class="button button--small button--danger"
                                                on:click=move |_| handle_delete(delete_id.clone())
                                            >
                                                {"Delete"}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
