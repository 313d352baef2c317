use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FieldProps {
    pub name: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or(true)]
    pub required: bool,
    #[prop_or_default]
    pub wide: bool,
    /// Receives `(name, value)` on every edit.
    pub on_input: Callback<(String, String)>,
}

/// Controlled form input bound to a named field.
#[function_component(Field)]
pub fn field(props: &FieldProps) -> Html {
    let oninput = {
        let callback = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            callback.emit((input.name(), input.value()));
        })
    };

    let numeric = props.input_type.as_str() == "number";

    html! {
        <input
            class={classes!("field", props.wide.then_some("wide"))}
            type={props.input_type.clone()}
            name={props.name.clone()}
            value={props.value.clone()}
            placeholder={props.placeholder.clone()}
            required={props.required}
            min={numeric.then_some("0")}
            step={numeric.then_some("any")}
            aria-label={props.placeholder.clone()}
            {oninput}
        />
    }
}
