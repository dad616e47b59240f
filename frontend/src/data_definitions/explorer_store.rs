//! Explorer store: shared state, loaded definitions and typed dispatch.

use std::sync::Arc;

use common::definitions::DefinitionSet;
use common::explorer_state::{ExplorerAction, ExplorerState};
use common::filter_catalog::standard_catalog;
use common::languages::{LanguageOption, LanguageSettings};
use common::view_model::{SearchHeaderSnapshot, SearchHeaderViewModel};
use dioxus::prelude::*;

use crate::api::definitions_api::{get_definitions, get_language_settings, warm_search_index};

/// Resource value: `None` while loading.
pub type Loaded<T> = Option<Result<T, ServerFnError>>;

#[derive(Clone, Copy)]
pub struct ExplorerStore {
    pub state: Signal<ExplorerState>,
    pub language_settings: ReadSignal<Loaded<LanguageSettings>>,
    /// `Ok(None)` until an active language is known.
    pub definitions: ReadSignal<Loaded<Option<Arc<DefinitionSet>>>>,
    pub search_index: ReadSignal<Loaded<Option<u64>>>,
    pub actions: SearchHeaderActions,
}

/// Callbacks the search header forwards user events to.
#[derive(Clone, Copy, PartialEq)]
pub struct SearchHeaderActions {
    pub on_search_change: Callback<String>,
    pub remove_filter: Callback<String>,
    pub set_active_language: Callback<String>,
    pub toggle_filter_drawer: Callback<()>,
    pub dispatch: Callback<ExplorerAction>,
}

impl ExplorerStore {
    pub fn dispatch(&self, action: ExplorerAction) {
        self.actions.dispatch.call(action);
    }

    pub fn definitions(&self) -> Option<Arc<DefinitionSet>> {
        match self.definitions.read().as_ref() {
            Some(Ok(Some(defs))) => Some(defs.clone()),
            _ => None,
        }
    }

    pub fn search_index_ready(&self) -> bool {
        matches!(self.search_index.read().as_ref(), Some(Ok(Some(_))))
    }

    pub fn languages(&self) -> Vec<LanguageOption> {
        match self.language_settings.read().as_ref() {
            Some(Ok(settings)) => settings.languages.clone(),
            _ => Vec::new(),
        }
    }

    /// First load error, if any resource failed.
    pub fn load_error(&self) -> Option<ServerFnError> {
        if let Some(Err(e)) = self.language_settings.read().as_ref() {
            return Some(e.clone());
        }
        if let Some(Err(e)) = self.definitions.read().as_ref() {
            return Some(e.clone());
        }
        if let Some(Err(e)) = self.search_index.read().as_ref() {
            return Some(e.clone());
        }
        None
    }

    pub fn header_view_model(&self) -> SearchHeaderViewModel {
        let state = self.state.read();
        let definitions = self.definitions();
        let languages = self.languages();
        let snapshot = SearchHeaderSnapshot {
            state: &*state,
            definitions: definitions.as_deref(),
            search_index_ready: self.search_index_ready(),
            languages: &languages,
        };
        SearchHeaderViewModel::derive(snapshot, standard_catalog())
    }
}

fn browser_language() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()?.navigator().language()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Creates the store and provides it to every component below.
pub fn use_explorer_store_provider() -> ExplorerStore {
    let mut state = use_signal(ExplorerState::default);

    let language_settings = use_resource(get_language_settings);

    // pick the starting language once the server told us which ones exist
    use_effect(move || {
        if let Some(Ok(settings)) = language_settings.read().as_ref() {
            if state.peek().active_language.is_empty() {
                let language = settings.initial_language(browser_language().as_deref());
                dioxus::logger::tracing::info!("Starting with language {}", language);
                state.write().active_language = language;
            }
        }
    });

    let active_language = use_memo(move || state.read().active_language.clone());

    let mut definitions = use_resource(move || {
        let language = active_language();
        async move {
            if language.is_empty() {
                return Ok(None);
            }
            get_definitions(language).await.map(|defs| Some(Arc::new(defs)))
        }
    });
    let mut search_index = use_resource(move || {
        let language = active_language();
        async move {
            if language.is_empty() {
                return Ok(None);
            }
            warm_search_index(language).await.map(Some)
        }
    });
    // when the language changes, drop the old definitions instead of showing them while loading
    use_effect(move || {
        if active_language.read().is_empty() {
            return;
        }
        definitions.clear();
        definitions.restart();
        search_index.clear();
        search_index.restart();
    });

    use_effect(move || {
        if let Some(Err(e)) = definitions.read().as_ref() {
            dioxus::logger::tracing::error!("Failed to load definitions: {:#?}", e);
        }
    });

    let dispatch = use_callback(move |action: ExplorerAction| {
        dioxus::logger::tracing::debug!("Dispatch: {:?}", action);
        state.write().apply(action);
    });
    let actions = SearchHeaderActions {
        on_search_change: use_callback(move |s: String| dispatch(ExplorerAction::SearchChanged(s))),
        remove_filter: use_callback(move |key: String| dispatch(ExplorerAction::FilterCleared(key))),
        set_active_language: use_callback(move |lang: String| dispatch(ExplorerAction::ActiveLanguageSelected(lang))),
        toggle_filter_drawer: use_callback(move |_: ()| dispatch(ExplorerAction::FilterDrawerToggled)),
        dispatch,
    };

    use_context_provider(move || ExplorerStore {
        state,
        language_settings: language_settings.into(),
        definitions: definitions.into(),
        search_index: search_index.into(),
        actions,
    })
}
