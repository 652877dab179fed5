//! Guide panel for the selected app.

use subguide_core::{GuideStep, Inline};
use yew::prelude::*;

use crate::components::atoms::EmptyState;
use crate::core::view::{AppPanel, InstructionPanel};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};

#[derive(Properties, PartialEq)]
pub(crate) struct InstructionsProps {
    pub panel: InstructionPanel,
}

#[function_component(Instructions)]
pub(crate) fn instructions(props: &InstructionsProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    match &props.panel {
        InstructionPanel::App(panel) => render_panel(panel, &bundle),
        InstructionPanel::Unavailable { platform } => {
            let label = bundle.text(&format!("platforms.{}", platform.id()), platform.id());
            html! {
                <EmptyState
                    class="instructions"
                    icon="fa-solid fa-mobile-screen"
                    title={bundle.text("clients.unavailable.title", "")}
                    description={Some(AttrValue::from(bundle.format(
                        "clients.unavailable.description",
                        "",
                        &[("platform", &label)],
                    )))}
                />
            }
        }
    }
}

fn render_panel(panel: &AppPanel, bundle: &TranslationBundle) -> Html {
    html! {
        <article class="instructions">
            <header>
                <i class={panel.icon.clone()} aria-hidden="true"></i>
                <h3>{panel.name.clone()}</h3>
                <a class="primary" href={panel.download_url.clone()} target="_blank" rel="noopener noreferrer">
                    {bundle.text("clients.download", "")}
                </a>
            </header>
            <h4>{bundle.text("clients.steps", "")}</h4>
            <ol class="steps">
                {for panel.steps.iter().map(render_step)}
            </ol>
        </article>
    }
}

fn render_step(step: &GuideStep) -> Html {
    html! {
        <li>
            {for step.inlines().iter().map(|inline| match inline {
                Inline::Text(text) => html! { {text.clone()} },
                Inline::Strong(text) => html! { <strong>{text.clone()}</strong> },
                Inline::Emphasis(text) => html! { <em>{text.clone()}</em> },
                Inline::Code(text) => html! { <code>{text.clone()}</code> },
            })}
        </li>
    }
}
