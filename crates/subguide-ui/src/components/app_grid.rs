//! App cards for the active platform.

use subguide_core::AppId;
use yew::prelude::*;

use crate::core::view::AppCard;

#[derive(Properties, PartialEq)]
pub(crate) struct AppGridProps {
    pub cards: Vec<AppCard>,
    pub on_select: Callback<AppId>,
}

#[function_component(AppGrid)]
pub(crate) fn app_grid(props: &AppGridProps) -> Html {
    html! {
        <div class="app-grid">
            {for props.cards.iter().map(|card| {
                let id = card.id.clone();
                let on_select = props.on_select.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_select.emit(id.clone()));
                html! {
                    <button
                        key={card.id.as_str().to_string()}
                        class={classes!("app-card", card.selected.then_some("selected"))}
                        aria-pressed={card.selected.to_string()}
                        {onclick}
                    >
                        <i class={card.icon.clone()} aria-hidden="true"></i>
                        <span>{card.name.clone()}</span>
                    </button>
                }
            })}
        </div>
    }
}
