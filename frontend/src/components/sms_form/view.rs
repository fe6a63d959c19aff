//! View rendering for the SMS form component.
//!
//! Renders purely from the component's raw field values and the controller's
//! `FormViewModel`: progress bar, loading indicator, form controls, cancel
//! button and the result section. Result lines from the dispatch service are
//! emitted as text nodes, never as markup.

use common::controller::{ResultPanel, SuccessPanel};
use common::validation::{MAX_COUNT, MIN_COUNT};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{input_value, progress_width, success_summary};
use super::messages::Msg;
use super::state::{FormViewModel, SmsFormComponent};

/// Main view function for the SMS form component.
pub fn view(component: &SmsFormComponent, ctx: &Context<SmsFormComponent>) -> Html {
    let link = ctx.link();
    let vm = component.view_model();

    html! {
        <section id="sms-form" class="sms-form-root">
            { build_form(component, vm, link) }
            { build_progress(vm) }
            { build_loading(vm) }
            { build_result(vm) }
        </section>
    }
}

fn build_form(
    component: &SmsFormComponent,
    vm: &FormViewModel,
    link: &Scope<SmsFormComponent>,
) -> Html {
    let disabled = !vm.controls_enabled;
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form class="sms-form" {onsubmit}>
            <label for="phoneNumber">{"Phone Number"}</label>
            <input
                id="phoneNumber"
                type="text"
                inputmode="numeric"
                placeholder="98XXXXXXXX"
                value={component.phone.clone()}
                {disabled}
                oninput={link.callback(|e: InputEvent| Msg::SetPhone(input_value(&e)))}
            />
            <label for="smsCount">{"Number of SMS"}</label>
            <input
                id="smsCount"
                type="number"
                min={MIN_COUNT.to_string()}
                max={MAX_COUNT.to_string()}
                placeholder="Count"
                value={component.count.clone()}
                {disabled}
                oninput={link.callback(|e: InputEvent| Msg::SetCount(input_value(&e)))}
            />
            <div class="form-actions">
                <button id="startBtn" type="submit" {disabled}>
                    <span>{ vm.submit_label.text() }</span>
                </button>
                <button
                    id="stopBtn"
                    type="button"
                    class={classes!("stop-btn", (!vm.cancel_visible).then_some("hidden"))}
                    onclick={link.callback(|_| Msg::Cancel)}
                >
                    {"STOP"}
                </button>
            </div>
        </form>
    }
}

fn build_progress(vm: &FormViewModel) -> Html {
    html! {
        <div id="progressBar" class={classes!("progress", (!vm.progress_visible).then_some("hidden"))}>
            <div id="progressFill" class="progress-fill" style={progress_width(vm.progress)}></div>
            <span id="progressText">{ format!("{}%", vm.progress) }</span>
        </div>
    }
}

fn build_loading(vm: &FormViewModel) -> Html {
    html! {
        <div id="loadingIndicator" class={classes!("loading", (!vm.loading).then_some("hidden"))}>
            <p>{"Sending SMS..."}</p>
        </div>
    }
}

fn build_result(vm: &FormViewModel) -> Html {
    let content = match &vm.result {
        None => return html! { <div id="resultSection" class="hidden"></div> },
        Some(ResultPanel::Success(panel)) => build_success_panel(panel),
        Some(ResultPanel::Error(message)) => build_error_panel(message),
    };

    html! {
        <div id="resultSection" class="result-section">
            <div id="resultContent">{ content }</div>
        </div>
    }
}

fn build_success_panel(panel: &SuccessPanel) -> Html {
    html! {
        <div class="result-success">
            <div class="result-banner success">
                <p class="result-title">{"SMS Sending Complete"}</p>
                <p>{ success_summary(panel.successes, panel.total) }</p>
            </div>
            <div class="result-stats">
                { stat_card(panel.total.to_string(), "Total SMS", "stat-total") }
                { stat_card(panel.successes.to_string(), "Sent", "stat-sent") }
                { stat_card(format!("{}%", panel.success_rate), "Success Rate", "stat-rate") }
            </div>
            <div class="result-details">
                <h4>{"Detailed Results:"}</h4>
                <ul>
                    { for panel.results.iter().map(|line| html! { <li>{ line.clone() }</li> }) }
                </ul>
            </div>
        </div>
    }
}

fn build_error_panel(message: &str) -> Html {
    html! {
        <div class="result-banner error">
            <p class="result-title">{"Error"}</p>
            <p>{ message.to_string() }</p>
        </div>
    }
}

fn stat_card(value: String, label: &'static str, class: &'static str) -> Html {
    html! {
        <div class={classes!("stat-card", class)}>
            <div class="stat-value">{ value }</div>
            <div class="stat-label">{ label }</div>
        </div>
    }
}
