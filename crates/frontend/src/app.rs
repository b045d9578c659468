use crate::login::LoginForm;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <main class="min-h-screen bg-gray-800 flex items-center">
            <LoginForm />
        </main>
    }
}
