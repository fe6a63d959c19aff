use crate::components::sms_form::SmsFormComponent;
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="page">
                <header>
                    <h1>{"Bulk SMS"}</h1>
                    <nav><a href="#sms-form">{"Send"}</a></nav>
                </header>
                <main>
                    <SmsFormComponent />
                </main>
            </div>
        }
    }
}
