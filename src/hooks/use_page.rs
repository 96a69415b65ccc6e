use gloo_storage::Storage;
use yew::prelude::*;

use crate::config::Config;
use crate::pages::Page;

/// Handle returned by `use_page` hook
#[derive(Clone, PartialEq)]
pub struct PageHandle {
    pub page: Page,
    pub navigate: Callback<Page>,
}

/// Current page with localStorage persistence of the last visit
#[hook]
pub fn use_page() -> PageHandle {
    let page = use_state(|| load_page_preference().unwrap_or_default());

    {
        let page_value = *page;
        use_effect_with(page_value, move |page| {
            save_page_preference(*page);
            || ()
        });
    }

    let navigate = {
        let page = page.clone();
        Callback::from(move |next: Page| page.set(next))
    };

    PageHandle {
        page: *page,
        navigate,
    }
}

fn load_page_preference() -> Option<Page> {
    gloo_storage::LocalStorage::get(Config::PAGE_STORAGE_KEY).ok()
}

fn save_page_preference(page: Page) {
    if let Err(e) = gloo_storage::LocalStorage::set(Config::PAGE_STORAGE_KEY, page) {
        gloo::console::warn!(&format!("Failed to save page: {e:?}"));
    }
}
