//! Page header showing the active tab's title and subtitle.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <header class="header">
            <div class="header__text">
                <h1 class="header__title">{move || ui.get().active_tab.label()}</h1>
                <p class="header__subtitle">{move || ui.get().active_tab.subtitle()}</p>
            </div>
        </header>
    }
}
