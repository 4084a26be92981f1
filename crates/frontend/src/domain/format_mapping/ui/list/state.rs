use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct FormatMappingListState {
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for FormatMappingListState {
    fn default() -> Self {
        Self {
            sort_field: "standardized_name".to_string(),
            sort_ascending: true,
        }
    }
}

pub fn create_state() -> RwSignal<FormatMappingListState> {
    RwSignal::new(FormatMappingListState::default())
}
