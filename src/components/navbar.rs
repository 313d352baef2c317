use web_sys::HtmlElement;
use yew::prelude::*;

use super::theme_toggle::ThemeToggle;
use crate::hooks::use_theme::ThemeHandle;
use crate::models::page::Page;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub page: Page,
    pub on_navigate: Callback<Page>,
    pub theme: ThemeHandle,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    // Buttons carry their slug; anything unrecognised falls back to Home.
    let onclick = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            let target: HtmlElement = e.target_unchecked_into();
            let slug = target.get_attribute("data-page").unwrap_or_default();
            on_navigate.emit(Page::from_slug(&slug));
        })
    };

    html! {
        <nav class="navbar">
            <button class="brand" data-page={Page::Home.slug()} onclick={onclick.clone()}>
                {"⚡ BillWise"}
            </button>
            <div class="nav-links">
                {
                    Page::all().iter().map(|page| {
                        let active = *page == props.page;
                        html! {
                            <button
                                key={page.slug()}
                                class={classes!("nav-link", active.then_some("active"))}
                                data-page={page.slug()}
                                aria-current={active.then_some("page")}
                                onclick={onclick.clone()}
                            >
                                {page.title()}
                            </button>
                        }
                    }).collect::<Html>()
                }
                <ThemeToggle handle={props.theme.clone()} />
            </div>
        </nav>
    }
}
