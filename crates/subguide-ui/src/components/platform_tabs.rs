//! Platform switcher.

use subguide_core::Platform;
use yew::prelude::*;

use crate::core::view::PlatformTab;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};

#[derive(Properties, PartialEq)]
pub(crate) struct PlatformTabsProps {
    pub tabs: Vec<PlatformTab>,
    pub on_select: Callback<Platform>,
}

#[function_component(PlatformTabs)]
pub(crate) fn platform_tabs(props: &PlatformTabsProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    html! {
        <div class="platform-tabs" role="tablist">
            {for props.tabs.iter().map(|tab| {
                let platform = tab.platform;
                let on_select = props.on_select.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_select.emit(platform));
                let label = bundle.text(&format!("platforms.{}", platform.id()), platform.id());
                html! {
                    <button
                        key={platform.id()}
                        role="tab"
                        class={classes!("tab", tab.active.then_some("active"))}
                        aria-selected={tab.active.to_string()}
                        data-platform={platform.id()}
                        {onclick}
                    >
                        <i class={tab.icon.clone()} aria-hidden="true"></i>
                        <span>{label}</span>
                    </button>
                }
            })}
        </div>
    }
}
