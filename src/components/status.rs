use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub kind: StatusKind,
    pub message: AttrValue,
}

#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    match props.kind {
        StatusKind::Success => html! {
            <p class="status success" role="status">{&props.message}</p>
        },
        StatusKind::Error => html! {
            <p class="status error" role="alert">{"Error: "}{&props.message}</p>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    pub label: AttrValue,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="status loading">
            <div class="spinner"></div>
            <p>{&props.label}</p>
        </div>
    }
}
