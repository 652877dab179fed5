use crate::core::toast::Toast;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ToastHostProps {
    pub toasts: Vec<Toast>,
    pub duration_ms: u32,
    pub on_dismiss: Callback<u64>,
}

#[function_component(ToastHost)]
pub(crate) fn toast_host(props: &ToastHostProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    {
        let toasts = props.toasts.clone();
        let on_dismiss = props.on_dismiss.clone();
        let duration = props.duration_ms;
        use_effect_with_deps(
            move |list: &Vec<Toast>| {
                let handles: Vec<Timeout> = list
                    .iter()
                    .map(|toast| {
                        let on_dismiss = on_dismiss.clone();
                        let id = toast.id;
                        Timeout::new(duration, move || on_dismiss.emit(id))
                    })
                    .collect();
                move || drop(handles)
            },
            toasts,
        );
    }

    let dismiss_label = bundle.text("toast.dismiss", "");
    html! {
        <div class="toast-host" aria-live="polite" aria-atomic="true">
            {for props.toasts.iter().map(|toast| render_toast(toast, &bundle, props.on_dismiss.clone(), &dismiss_label))}
        </div>
    }
}

fn render_toast(
    toast: &Toast,
    bundle: &TranslationBundle,
    on_dismiss: Callback<u64>,
    dismiss_label: &str,
) -> Html {
    let id = toast.id;
    let on_close = Callback::from(move |_| on_dismiss.emit(id));

    html! {
        <div key={id} class={classes!("toast", toast.message.kind().class())} role="status">
            <span>{toast.message.render(bundle)}</span>
            <button class="ghost" aria-label={dismiss_label.to_string()} onclick={on_close}>{"✕"}</button>
        </div>
    }
}
