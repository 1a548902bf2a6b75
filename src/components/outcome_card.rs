use yew::prelude::*;

use crate::format::{format_inr, outcome_verdict};

#[derive(Properties, PartialEq)]
pub struct OutcomeCardProps {
    pub title: AttrValue,
    pub amount: f64,
    pub icon: AttrValue,
}

#[function_component(OutcomeCard)]
pub fn outcome_card(props: &OutcomeCardProps) -> Html {
    let status = if props.amount >= 0.0 { "success" } else { "danger" };
    html! {
        <div class="card outcome-card">
            <h3>
                <span class="icon">{ props.icon.clone() }</span>
                <span>{ props.title.clone() }</span>
            </h3>
            <div class={format!("result large {}", status)}>{ format_inr(props.amount) }</div>
            <span class={format!("status-indicator {}", status)}>{ outcome_verdict(props.amount) }</span>
        </div>
    }
}
