use super::view_model::{FormatMappingDetailsViewModel, MappingField};
use crate::shared::icons::icon;
use contracts::domain::format_mapping::aggregate::FormatMapping;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn FormatMappingDetails(
    record: Option<FormatMapping>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = FormatMappingDetailsViewModel::new(record);
    let is_edit = vm.is_edit;

    // Clone vm for multiple closures
    let vm_clone = vm.clone();

    view! {
        <div class="details-container format-mapping-details">
            <div class="details-header">
                <h3>{if is_edit { "Edit Format Mapping" } else { "Add Format Mapping" }}</h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.banner.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="standardized_name">{"Standardized Name"}</label>
                    <input
                        type="text"
                        id="standardized_name"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().standardized_name
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.set_field(MappingField::StandardizedName, event_target_value(&ev));
                            }
                        }
                        placeholder="Canonical show name"
                        disabled=is_edit
                    />
                    {
                        let vm = vm_clone.clone();
                        move || vm.errors.get().standardized_name.map(|e| view! { <span class="form-error">{e}</span> })
                    }
                </div>

                <div class="form-group">
                    <label for="content_box">{"Content Box"}</label>
                    <input
                        type="text"
                        id="content_box"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().content_box
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.set_field(MappingField::ContentBox, event_target_value(&ev));
                            }
                        }
                        placeholder="Content box label"
                    />
                    {
                        let vm = vm_clone.clone();
                        move || vm.errors.get().content_box.map(|e| view! { <span class="form-error">{e}</span> })
                    }
                </div>

                <div class="form-group">
                    <label for="marke">{"Marke"}</label>
                    <input
                        type="text"
                        id="marke"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().marke
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.set_field(MappingField::Marke, event_target_value(&ev));
                            }
                        }
                        placeholder="Brand label"
                    />
                    {
                        let vm = vm_clone.clone();
                        move || vm.errors.get().marke.map(|e| view! { <span class="form-error">{e}</span> })
                    }
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let vm = vm_clone.clone();
                        move |_| vm.save_command(on_saved)
                    }
                    disabled={
                        let vm = vm_clone.clone();
                        move || vm.submitting.get()
                    }
                >
                    {icon("save")}
                    {if is_edit { "Update" } else { "Create" }}
                </button>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| on_cancel.run(())
                >
                    {icon("cancel")}
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
