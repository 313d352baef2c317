use chrono::{Datelike, Local};
use yew::prelude::*;

fn copyright(year: i32) -> String {
    format!("© {year} BillWise. A project by Martin. All rights reserved.")
}

/// Page footer with the current year.
#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="app-footer">
            <p>{copyright(year)}</p>
        </footer>
    }
}
