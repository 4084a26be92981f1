use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct PlatformListState {
    pub sort_field: String,
    pub sort_ascending: bool,
    /// Visibility of the two enriched format-mapping columns.
    pub show_format_mapping: bool,
}

impl Default for PlatformListState {
    fn default() -> Self {
        Self {
            sort_field: "platform_id".to_string(),
            sort_ascending: true,
            show_format_mapping: true,
        }
    }
}

pub fn create_state() -> RwSignal<PlatformListState> {
    RwSignal::new(PlatformListState::default())
}
