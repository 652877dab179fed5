//! Top navigation: section links, language switch and the access button.

use yew::prelude::*;

use crate::core::sections::SECTIONS;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode, TranslationBundle};

#[derive(Properties, PartialEq)]
pub(crate) struct NavBarProps {
    pub active: &'static str,
    pub locale: LocaleCode,
    pub on_navigate: Callback<&'static str>,
    pub on_locale: Callback<LocaleCode>,
    pub on_access: Callback<()>,
}

#[function_component(NavBar)]
pub(crate) fn nav_bar(props: &NavBarProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let on_access = {
        let on_access = props.on_access.clone();
        Callback::from(move |_: MouseEvent| on_access.emit(()))
    };

    html! {
        <nav class="navbar">
            <div class="nav-links">
                {for SECTIONS.iter().map(|section| {
                    let id = section.id;
                    let on_navigate = props.on_navigate.clone();
                    let onclick = Callback::from(move |_: MouseEvent| on_navigate.emit(id));
                    html! {
                        <button
                            key={id}
                            class={classes!("nav-btn", (props.active == id).then_some("active"))}
                            data-target={id}
                            {onclick}
                        >
                            {bundle.text(section.label_key, id)}
                        </button>
                    }
                })}
            </div>
            <div class="nav-actions">
                <div class="locale-switch" role="group" aria-label={bundle.text("nav.language", "")}>
                    {for LocaleCode::all().into_iter().map(|locale| {
                        let on_locale = props.on_locale.clone();
                        let onclick = Callback::from(move |_: MouseEvent| on_locale.emit(locale));
                        html! {
                            <button
                                key={locale.code()}
                                class={classes!("ghost", (props.locale == locale).then_some("active"))}
                                lang={locale.code()}
                                {onclick}
                            >
                                {locale.short_label()}
                            </button>
                        }
                    })}
                </div>
                <button class="primary" onclick={on_access}>{bundle.text("nav.access", "")}</button>
            </div>
        </nav>
    }
}
