use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorAlertProps {
    pub message: String,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Generic failure banner. Only ever shows the view's generic message.
#[function_component(ErrorAlert)]
pub fn error_alert(props: &ErrorAlertProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div class="alert alert-error" role="alert">
            <i class="fas fa-exclamation-circle"></i>
            <span>{&props.message}</span>
            if let Some(on_retry) = props.on_retry.clone() {
                <button
                    class="btn btn-sm btn-ghost"
                    onclick={Callback::from(move |_| {
                        log::debug!("User clicked retry button");
                        on_retry.emit(());
                    })}
                >
                    <i class="fas fa-redo"></i>
                    {" Try Again"}
                </button>
            }
        </div>
    }
}
