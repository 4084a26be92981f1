use crate::domain::format_mapping::ui::list::FormatMappingList;
use crate::domain::platform::ui::list::PlatformList;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Dialogs of both grids render through one shared modal stack.
    provide_context(ModalStackService::new());

    view! {
        <div class="page">
            <h1 class="page__title">{"Platform Management"}</h1>
            <PlatformList />
            <FormatMappingList />
        </div>
        <ModalHost />
    }
}
