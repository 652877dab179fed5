use std::rc::Rc;
use std::sync::Arc;

use gloo_timers::callback::Timeout;
use subguide_core::subscription::effective_origin;
use subguide_core::{
    AppId, Catalog, CatalogError, ConfigError, CopyRequest, Platform, SelectionController,
    SelectionError, SiteConfig,
};
use subguide_telemetry::{DEFAULT_LOG_LEVEL, LoggingConfig, init_logging};
use thiserror::Error;
use tracing::{error, info};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::access::{ConfigsModal, RulesModal};
use crate::components::app_grid::AppGrid;
use crate::components::atoms::EmptyState;
use crate::components::instructions::Instructions;
use crate::components::nav::NavBar;
use crate::components::platform_tabs::PlatformTabs;
use crate::components::toast::ToastHost;
use crate::core::modal::ModalState;
use crate::core::store::{PageAction, PageStore};
use crate::core::view::page_view;
use crate::embedded_config;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode, TranslationBundle};

mod clipboard;
mod environment;
mod observers;

/// Everything loaded before the first render.
struct Boot {
    config: SiteConfig,
    selection: SelectionController,
    origin: String,
    locale: LocaleCode,
}

impl PartialEq for Boot {
    fn eq(&self, other: &Self) -> bool {
        self.selection == other.selection
            && self.config == other.config
            && self.origin == other.origin
            && self.locale == other.locale
    }
}

#[derive(Debug, Error)]
enum BootError {
    #[error("site configuration invalid: {source}")]
    Config { source: ConfigError },
    #[error("catalog invalid: {source}")]
    Catalog { source: CatalogError },
    #[error("no initial selection: {source}")]
    Selection { source: SelectionError },
}

impl Boot {
    fn load() -> Result<Self, BootError> {
        let config = embedded_config().map_err(|source| BootError::Config { source })?;
        let catalog = Catalog::embedded().map_err(|source| BootError::Catalog { source })?;
        let env = environment::read_environment();
        let selection = SelectionController::detect(Arc::new(catalog), &env)
            .map_err(|source| BootError::Selection { source })?;
        info!(platform = %selection.state().platform, "page booted");
        Ok(Self {
            config,
            selection,
            origin: environment::page_origin(),
            locale: environment::browser_locale(),
        })
    }
}

#[function_component(SubguideApp)]
fn subguide_app() -> Html {
    let boot = use_memo(|_| Boot::load().map(Rc::new), ());
    match &*boot {
        Ok(boot) => html! { <Landing boot={Rc::clone(boot)} /> },
        Err(err) => {
            error!(%err, "page failed to boot");
            let bundle = TranslationBundle::new(DEFAULT_LOCALE);
            html! {
                <main class="boot-failed">
                    <EmptyState
                        icon="fa-solid fa-triangle-exclamation"
                        title={bundle.text("boot.failed", "")}
                        description={Some(AttrValue::from(err.to_string()))}
                    />
                </main>
            }
        }
    }
}

#[derive(Properties, PartialEq)]
struct LandingProps {
    boot: Rc<Boot>,
}

#[function_component(Landing)]
fn landing(props: &LandingProps) -> Html {
    let boot = Rc::clone(&props.boot);
    let store = {
        let boot = Rc::clone(&boot);
        use_reducer(move || {
            PageStore::new(
                boot.selection.clone(),
                boot.locale,
                boot.config.require_rules,
            )
        })
    };
    let dispatcher = store.dispatcher();
    let locale = store.locale;
    let bundle = use_memo(move |_| TranslationBundle::new(locale), locale);

    use_effect_with_deps(
        |locale: &LocaleCode| {
            environment::apply_lang(*locale);
            || ()
        },
        locale,
    );

    {
        let dispatcher = dispatcher.clone();
        use_effect_with_deps(
            move |_| {
                let spy = observers::observe_sections(Callback::from(
                    move |(id, intersecting): (String, bool)| {
                        dispatcher.dispatch(PageAction::SectionVisible { id, intersecting });
                    },
                ));
                let reveal = observers::reveal_on_scroll();
                move || {
                    drop(spy);
                    drop(reveal);
                }
            },
            (),
        );
    }

    {
        let dispatcher = dispatcher.clone();
        let delay = boot.config.modal_transition_ms;
        use_effect_with_deps(
            move |modal: &ModalState| {
                let timer = (*modal == ModalState::Accepted).then(|| {
                    Timeout::new(delay, move || dispatcher.dispatch(PageAction::RevealConfigs))
                });
                move || drop(timer)
            },
            store.modal,
        );
    }

    let on_platform = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |platform: Platform| {
            dispatcher.dispatch(PageAction::SelectPlatform(platform));
        })
    };
    let on_app = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |id: AppId| dispatcher.dispatch(PageAction::SelectApp(id)))
    };
    let on_access = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |()| dispatcher.dispatch(PageAction::OpenAccess))
    };
    let on_accept = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |()| dispatcher.dispatch(PageAction::AcceptRules))
    };
    let on_close = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |()| dispatcher.dispatch(PageAction::CloseModal))
    };
    let on_dismiss = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |id: u64| dispatcher.dispatch(PageAction::DismissToast(id)))
    };
    let on_locale = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |locale: LocaleCode| dispatcher.dispatch(PageAction::SetLocale(locale)))
    };
    let on_navigate = Callback::from(|id: &'static str| observers::scroll_to(id));
    let on_copy = {
        let boot = Rc::clone(&boot);
        Callback::from(move |feed_id: String| copy_feed(&boot, &feed_id, dispatcher.clone()))
    };

    let view = page_view(
        store.selection.catalog(),
        store.selection.state(),
        locale.code(),
    );
    let t = |key: &str| bundle.text(key, "");
    let cta = {
        let on_access = on_access.clone();
        Callback::from(move |_: MouseEvent| on_access.emit(()))
    };
    let feeds_cta = {
        let on_access = on_access.clone();
        Callback::from(move |_: MouseEvent| on_access.emit(()))
    };

    html! {
        <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
            <NavBar
                active={store.sections.active().id}
                locale={locale}
                on_navigate={on_navigate}
                on_locale={on_locale}
                on_access={on_access}
            />
            <main>
                <section id="home" class="hero reveal">
                    <h1>{t("hero.title")}</h1>
                    <p class="muted">{t("hero.subtitle")}</p>
                    <button class="primary" onclick={cta}>{t("hero.cta")}</button>
                </section>
                <section id="clients" class="clients reveal">
                    <h2>{t("clients.title")}</h2>
                    <p class="muted">{t("clients.subtitle")}</p>
                    <PlatformTabs tabs={view.tabs} on_select={on_platform} />
                    <AppGrid cards={view.cards} on_select={on_app} />
                    <Instructions panel={view.panel} />
                </section>
                <section id="feeds" class="feeds reveal">
                    <h2>{t("feeds.title")}</h2>
                    <p class="muted">{t("feeds.description")}</p>
                    <button class="primary" onclick={feeds_cta}>{t("feeds.open")}</button>
                </section>
            </main>
            <RulesModal
                open={store.modal.rules_open()}
                on_accept={on_accept}
                on_close={on_close.clone()}
            />
            <ConfigsModal
                open={store.modal.configs_open()}
                feeds={boot.config.feeds.clone()}
                manual={store.manual_copy.clone()}
                on_copy={on_copy}
                on_close={on_close}
            />
            <ToastHost
                toasts={store.toasts.toasts().to_vec()}
                duration_ms={boot.config.toast_duration_ms}
                on_dismiss={on_dismiss}
            />
        </ContextProvider<TranslationBundle>>
    }
}

fn copy_feed(boot: &Boot, feed_id: &str, dispatcher: UseReducerDispatcher<PageStore>) {
    let Some(feed) = boot.config.feed(feed_id) else {
        error!(feed_id, "unknown feed requested");
        return;
    };
    let origin = effective_origin(boot.config.public_url(), &boot.origin);
    let request = match CopyRequest::for_feed(origin, feed) {
        Ok(request) => request,
        Err(err) => {
            error!(%err, label = %feed.label, "subscription link unavailable");
            dispatcher.dispatch(PageAction::LinkUnavailable {
                label: feed.label.clone(),
            });
            return;
        }
    };
    spawn_local(async move {
        match clipboard::write_text(&request.url).await {
            Ok(()) => dispatcher.dispatch(PageAction::CopySucceeded(request)),
            Err(err) => {
                error!(%err, label = %request.label, "clipboard write failed");
                dispatcher.dispatch(PageAction::CopyFailed(request));
            }
        }
    });
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let level = embedded_config().map_or_else(|_| DEFAULT_LOG_LEVEL.to_string(), |c| c.log_level);
    if let Err(err) = init_logging(&LoggingConfig::with_level(&level)) {
        gloo::console::warn!(err.to_string());
    }
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<SubguideApp>::with_root(root).render();
    } else {
        yew::Renderer::<SubguideApp>::new().render();
    }
}
