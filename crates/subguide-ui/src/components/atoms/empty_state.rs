//! Fallback card shown in place of a guide or the whole page.

use yew::prelude::*;

const DEFAULT_ICON: &str = "fa-solid fa-circle-info";

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyStateProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or(AttrValue::Static(DEFAULT_ICON))]
    pub icon: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(EmptyState)]
pub(crate) fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class={classes!("empty-state", props.class.clone())} role="note">
            <i class={props.icon.clone()} aria-hidden="true"></i>
            <h4>{props.title.clone()}</h4>
            {props.description.clone().map(|text| html! {
                <p class="muted">{text}</p>
            }).unwrap_or_default()}
        </div>
    }
}
