use yew::prelude::*;

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod pages;
pub mod services;
pub mod utils;

use components::{Footer, Navbar};
use hooks::use_theme::{Theme, use_theme};
use models::page::Page;
use pages::{AboutPage, ExplorerPage, HomePage};

/// Renders the view for `page`.
pub fn render_page(page: Page) -> Html {
    match page {
        Page::Home => html! { <HomePage /> },
        Page::Explorer => html! { <ExplorerPage /> },
        Page::About => html! { <AboutPage /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let page = use_state(Page::default);
    let theme = use_theme();

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |next: Page| {
            if next != *page {
                gloo::console::log!(format!("Navigating to {}", next.slug()));
                page.set(next);
            }
        })
    };

    html! {
        <ContextProvider<Theme> context={theme.effective_theme}>
            <div class="app-container">
                <Navbar page={*page} {on_navigate} theme={theme.clone()} />
                <main class="app-main">
                    { render_page(*page) }
                </main>
                <Footer />
                <style>
                    {include_str!("style.css")}
                </style>
            </div>
        </ContextProvider<Theme>>
    }
}
