pub mod state;

use self::state::create_state;
use crate::domain::format_mapping::api;
use crate::domain::format_mapping::ui::details::FormatMappingDetails;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, sort_list, Sortable};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::format_mapping::aggregate::FormatMapping;
use leptos::prelude::*;
use std::cmp::Ordering;

impl Sortable for FormatMapping {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "standardized_name" => self
                .standardized_name
                .to_lowercase()
                .cmp(&other.standardized_name.to_lowercase()),
            "content_box" => self
                .content_box
                .to_lowercase()
                .cmp(&other.content_box.to_lowercase()),
            "marke" => self.marke.to_lowercase().cmp(&other.marke.to_lowercase()),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn FormatMappingList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let state = create_state();
    let (items, set_items) = signal::<Vec<FormatMapping>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let fetch = move || {
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_mappings().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Error fetching format mappings: {e}");
                    set_error.set(Some(format!("Failed to load format mappings: {e}")));
                }
            }
            set_loading.set(false);
        });
    };

    let open_details_modal = move |id: Option<String>| {
        modal_stack.push(move |handle| {
            let record: Option<FormatMapping> = id.as_ref().and_then(|id| {
                items
                    .get_untracked()
                    .iter()
                    .find(|m| &m.standardized_name == id)
                    .cloned()
            });
            view! {
                <FormatMappingDetails
                    record=record
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
            match api::delete_mapping(&id).await {
                Ok(()) => fetch(),
                Err(e) => {
                    log::error!("Error deleting format mapping: {e}");
                    set_error.set(Some(format!("Failed to delete format mapping: {e}")));
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
                <h2>{"Format Mappings"}</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| handle_create_new()>
                        {icon("plus")}
                        {"Add Format Mapping"}
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
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("standardized_name")>
                                "Standardized Name"
                                <span class={move || get_sort_class(&state.get().sort_field, "standardized_name")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "standardized_name", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("content_box")>
                                "Content Box"
                                <span class={move || get_sort_class(&state.get().sort_field, "content_box")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "content_box", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("marke")>
                                "Marke"
                                <span class={move || get_sort_class(&state.get().sort_field, "marke")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "marke", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if loading.get() && items.get().is_empty() {
                                return view! {
                                    <tr class="table__row">
                                        <td class="table__cell table__cell--loading" colspan="4">{"Loading..."}</td>
                                    </tr>
                                }.into_any();
                            }
                            sorted_items().into_iter().map(|row| {
                                let edit_id = row.standardized_name.clone();
                                let delete_id = row.standardized_name.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{row.standardized_name}</td>
                                        <td class="table__cell">{row.content_box}</td>
                                        <td class="table__cell">{row.marke}</td>
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
