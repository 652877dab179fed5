//! Access dialogs: the rules gate and the subscription links.
//!
//! # Design
//! - Visibility is owned by the page store; these components only render and emit.
//! - Clicking the backdrop closes; clicks inside the dialog do not bubble to it.

use subguide_core::{CopyRequest, SubscriptionFeed};
use yew::prelude::*;

use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};

#[derive(Properties, PartialEq)]
pub(crate) struct RulesModalProps {
    pub open: bool,
    pub on_accept: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(RulesModal)]
pub(crate) fn rules_modal(props: &RulesModalProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let on_accept = {
        let on_accept = props.on_accept.clone();
        Callback::from(move |_: MouseEvent| on_accept.emit(()))
    };

    html! {
        <ModalFrame id="rules-modal" open={props.open} title={t("rules.title")} close_label={t("rules.close")} on_close={props.on_close.clone()}>
            <ul class="rules">
                <li>{t("rules.item1")}</li>
                <li>{t("rules.item2")}</li>
                <li>{t("rules.item3")}</li>
            </ul>
            <button class="primary" onclick={on_accept}>{t("rules.accept")}</button>
        </ModalFrame>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ConfigsModalProps {
    pub open: bool,
    pub feeds: Vec<SubscriptionFeed>,
    #[prop_or_default]
    pub manual: Option<CopyRequest>,
    pub on_copy: Callback<String>,
    pub on_close: Callback<()>,
}

#[function_component(ConfigsModal)]
pub(crate) fn configs_modal(props: &ConfigsModalProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");

    html! {
        <ModalFrame id="configs-modal" open={props.open} title={t("configs.title")} close_label={t("configs.close")} on_close={props.on_close.clone()}>
            <p class="muted">{t("configs.description")}</p>
            <ul class="feeds">
                {for props.feeds.iter().map(|feed| {
                    let id = feed.id.clone();
                    let on_copy = props.on_copy.clone();
                    let onclick = Callback::from(move |_: MouseEvent| on_copy.emit(id.clone()));
                    html! {
                        <li key={feed.id.clone()}>
                            <div>
                                <strong>{feed.label.clone()}</strong>
                                <span class="muted">{bundle.text(&format!("configs.feed.{}", feed.id), "")}</span>
                            </div>
                            <button class="primary" {onclick}>{t("configs.copy")}</button>
                        </li>
                    }
                })}
            </ul>
            {props.manual.as_ref().map(|request| html! {
                <label class="manual-copy">
                    <span>{format!("{} [{}]", t("configs.manual"), request.label)}</span>
                    <input type="text" readonly=true value={request.url.clone()} />
                </label>
            }).unwrap_or_default()}
        </ModalFrame>
    }
}

#[derive(Properties, PartialEq)]
struct ModalFrameProps {
    id: AttrValue,
    open: bool,
    title: AttrValue,
    close_label: AttrValue,
    on_close: Callback<()>,
    #[prop_or_default]
    children: Children,
}

#[function_component(ModalFrame)]
fn modal_frame(props: &ModalFrameProps) -> Html {
    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_close = on_backdrop.clone();
    let stop = Callback::from(|event: MouseEvent| event.stop_propagation());

    html! {
        <div
            id={props.id.clone()}
            class={classes!("modal-backdrop", props.open.then_some("open"))}
            aria-hidden={(!props.open).to_string()}
            onclick={on_backdrop}
        >
            <div class="modal" role="dialog" aria-modal="true" onclick={stop}>
                <header>
                    <h3>{props.title.clone()}</h3>
                    <button class="ghost" aria-label={props.close_label.clone()} onclick={on_close}>{"✕"}</button>
                </header>
                { for props.children.iter() }
            </div>
        </div>
    }
}
