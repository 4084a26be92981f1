use super::view_model::{PlatformDetailsViewModel, PlatformField};
use crate::shared::icons::icon;
use contracts::domain::platform::aggregate::Platform;
use contracts::enums::platform_kind::PlatformKind;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn PlatformDetails(
    record: Option<Platform>,
    existing: Vec<Platform>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = PlatformDetailsViewModel::new(record, existing);
    let is_edit = vm.is_edit;
    let initial_platform = vm.form.get_untracked().platform;

    // Clone vm for multiple closures
    let vm_clone = vm.clone();

    view! {
        <div class="details-container platform-details">
            <div class="details-header">
                <h3>{if is_edit { "Edit Platform" } else { "Add Platform" }}</h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.banner.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="platform">{"Platform"}</label>
                    <select
                        id="platform"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().platform
                        }
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.set_field(PlatformField::Platform, event_target_value(&ev));
                            }
                        }
                    >
                        {PlatformKind::all().into_iter().map(|kind| {
                            let name = kind.display_name();
                            let is_selected = initial_platform == name;
                            view! { <option value=name selected=is_selected>{name}</option> }
                        }).collect_view()}
                    </select>
                    {
                        let vm = vm_clone.clone();
                        move || vm.errors.get().platform.map(|e| view! { <span class="form-error">{e}</span> })
                    }
                </div>

                <div class="form-group">
                    <label for="platform_name">{"Platform Name"}</label>
                    <input
                        type="text"
                        id="platform_name"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().platform_name
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.set_field(PlatformField::PlatformName, event_target_value(&ev));
                            }
                        }
                        placeholder="Display name of the channel"
                    />
                    {
                        let vm = vm_clone.clone();
                        move || vm.errors.get().platform_name.map(|e| view! { <span class="form-error">{e}</span> })
                    }
                </div>

                <div class="form-group">
                    <label for="platform_id">{"Platform ID"}</label>
                    <input
                        type="text"
                        id="platform_id"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().platform_id
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.set_field(PlatformField::PlatformId, event_target_value(&ev));
                            }
                        }
                        placeholder="UC..."
                        disabled=is_edit
                    />
                    {
                        let vm = vm_clone.clone();
                        move || vm.errors.get().platform_id.map(|e| view! { <span class="form-error">{e}</span> })
                    }
                </div>

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
                                vm.set_field(PlatformField::StandardizedName, event_target_value(&ev));
                            }
                        }
                        placeholder="Key into the format mappings"
                    />
                    {
                        let vm = vm_clone.clone();
                        move || vm.errors.get().standardized_name.map(|e| view! { <span class="form-error">{e}</span> })
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
