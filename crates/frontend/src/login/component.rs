//! Restaurant login form component

use crate::components::{Alert, AlertKind};
use crate::config::LoginConfig;
use crate::login::flow::{LoginFlow, LoginFlowHandle};
use crate::login::state::{Field, LoginAction, LoginState, LoginStatus};
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

const INPUT_CLASS: &str = "bg-gray-900 text-white w-full px-3 py-2 border rounded-md focus:outline-none focus:ring focus:border-blue-300";
const LABEL_CLASS: &str = "block text-gray-100 text-sm font-medium mb-2";

#[function_component(LoginForm)]
pub fn login_form() -> Html {
    let state = use_reducer(LoginState::default);
    let provided = use_context::<LoginFlowHandle>();
    let flow = use_memo((), move |_| match provided {
        Some(LoginFlowHandle(flow)) => Ok(flow),
        None => LoginFlow::browser().map(Rc::new),
    });

    // Cancel the redirect if the form is removed before it fires
    {
        let flow = flow.clone();
        use_effect_with((), move |_| {
            move || {
                if let Ok(flow) = flow.as_ref() {
                    flow.teardown();
                }
            }
        });
    }

    // Both inputs share one handler keyed by the input's name
    let on_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match input.name().parse::<Field>() {
                Ok(field) => state.dispatch(LoginAction::Input(field, input.value())),
                Err(error) => tracing::warn!("{error}"),
            }
        })
    };

    let on_submit = {
        let state = state.clone();
        let flow = flow.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let credentials = state.credentials.clone();
            let state = state.clone();
            let flow = flow.clone();
            state.dispatch(LoginAction::Submit);

            wasm_bindgen_futures::spawn_local(async move {
                let flow = match flow.as_ref() {
                    Ok(flow) => flow,
                    Err(error) => {
                        tracing::error!(error = ?error, "login client unavailable");
                        state.dispatch(LoginAction::Failed(
                            LoginConfig::GENERIC_ERROR_MESSAGE.to_string(),
                        ));
                        return;
                    }
                };

                match flow.submit(credentials).await {
                    Ok(()) => state.dispatch(LoginAction::Succeeded),
                    Err(error) => state.dispatch(LoginAction::Failed(error.user_message())),
                }
            });
        })
    };

    let on_dismiss = {
        let state = state.clone();
        Callback::from(move |()| state.dispatch(LoginAction::Dismiss))
    };

    let notification = match &state.status {
        LoginStatus::Success(message) => html! {
            <Alert kind={AlertKind::Success} message={message.clone()} on_close={on_dismiss} />
        },
        LoginStatus::Error(message) => html! {
            <Alert kind={AlertKind::Danger} message={message.clone()} on_close={on_dismiss} />
        },
        LoginStatus::Idle | LoginStatus::Submitting => html! {},
    };

    html! {
        <div class="w-full py-10">
            <form
                onsubmit={on_submit}
                class="bg-blue-950 bg-opacity-5 rounded-lg text-white shadow-md p-6 w-3/5 mx-auto outline outline-2 outline-white"
                style="backdrop-filter: blur(2px);"
            >
                <h2 class="text-3xl font-semibold text-white mb-8 text-center">
                    {"Restaurant Login"}
                </h2>

                <div class="mb-4">
                    <label class={LABEL_CLASS} for="email">{"Email"}</label>
                    <input
                        type="email"
                        id="email"
                        name={Field::Email.name()}
                        value={state.credentials.email.clone()}
                        oninput={on_input.clone()}
                        class={INPUT_CLASS}
                        required={true}
                    />
                </div>

                <div class="mb-4">
                    <label class={LABEL_CLASS} for="password">{"Password"}</label>
                    <input
                        type="password"
                        id="password"
                        name={Field::Password.name()}
                        value={state.credentials.password.clone()}
                        oninput={on_input}
                        class={INPUT_CLASS}
                        required={true}
                    />
                </div>

                <button
                    type="submit"
                    class="w-full py-2 px-4 bg-blue-500 text-white font-semibold rounded-md hover:bg-blue-600 transition duration-200"
                >
                    {"Login"}
                </button>
            </form>

            {notification}
        </div>
    }
}
