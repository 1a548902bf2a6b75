use gloo::timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew::TargetCast;

use crate::components::OutcomeCard;
use crate::config::RESULT_DELAY_MS;
use crate::form::{CalculatorForm, Strategy};
use crate::format::{format_base_breakdown, format_base_hint, format_inr, format_odd};
use crate::strategy::ScenarioKind;
use crate::teams::{team_at, IPL_TEAMS};

#[derive(Clone, Copy)]
enum Field { OddA, OddB, UsdRate }

#[derive(Clone, Copy)]
enum TeamSlot { A, B }

fn scenario_icon(kind: ScenarioKind) -> &'static str {
    match kind {
        ScenarioKind::Normal => "→",
        ScenarioKind::SingleBonus => "✨",
        ScenarioKind::BothBonus => "🏆",
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let form = use_state(CalculatorForm::default);
    let results = use_state(|| None::<Strategy>);
    let is_calculating = use_state(|| false);
    let error = use_state(|| None::<String>);
    // Dropping the handle cancels a reveal that hasn't fired yet.
    let pending = use_mut_ref(|| None::<Timeout>);

    // Handlers
    let on_field = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            let mut f = (*form).clone();
            match field {
                Field::OddA => f.odd_a = target.value(),
                Field::OddB => f.odd_b = target.value(),
                Field::UsdRate => f.usd_rate = target.value(),
            }
            form.set(f);
        })
    };
    let on_team = |slot: TeamSlot| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            let team = team_at(target.selected_index()).to_string();
            let mut f = (*form).clone();
            match slot {
                TeamSlot::A => f.team_a = team,
                TeamSlot::B => f.team_b = team,
            }
            form.set(f);
        })
    };

    let on_calculate = {
        let form = form.clone();
        let results = results.clone();
        let is_calculating = is_calculating.clone();
        let error = error.clone();
        let pending = pending.clone();
        Callback::from(move |_: MouseEvent| {
            error.set(None);
            results.set(None);
            pending.borrow_mut().take();
            match form.submit() {
                Ok(strategy) => {
                    let r = &strategy.result;
                    gloo::console::log!(format!(
                        "bonus {} @ {} stake {:.2}, hedge {} @ {} stake {:.2}",
                        strategy.bonus_team, r.bonus_eligible_odd, r.bonus_stake,
                        strategy.hedge_team, r.hedge_odd, r.hedge_stake,
                    ));
                    is_calculating.set(true);
                    let results = results.clone();
                    let is_calculating = is_calculating.clone();
                    let timer = Timeout::new(RESULT_DELAY_MS, move || {
                        results.set(Some(strategy));
                        is_calculating.set(false);
                    });
                    *pending.borrow_mut() = Some(timer);
                }
                Err(err) => {
                    let message = err.message();
                    gloo::console::error!("Calculation Error:", message.clone());
                    error.set(Some(message));
                    is_calculating.set(false);
                }
            }
        })
    };

    let team_select = |selected: &str, onchange: Callback<Event>, label: &'static str| {
        html! {
            <select {onchange} aria-label={label}>
                { for IPL_TEAMS.iter().map(|team| {
                    html!{ <option value={*team} selected={*team == selected}>{ *team }</option> }
                })}
            </select>
        }
    };

    html! {
        <div class="container">
            <header>
                <h1>{"IPL Betting Calculator"}</h1>
                <div class="pill">{"Calculate optimal stakes and maximize your returns"}</div>
            </header>

            <div class="card">
                { if let Some(message) = (*error).clone() {
                    html!{ <div class="alert danger" role="alert">{"⚠ "}{message}</div> }
                } else { html!{} }}

                <div class="input-group">
                    <label>{"Current USD to INR Rate"}</label>
                    <input
                        type="number"
                        step="0.01"
                        value={form.usd_rate.clone()}
                        oninput={on_field(Field::UsdRate)}
                        placeholder="Enter current USD to INR rate (e.g. 82.50)"
                        aria-label="USD to INR rate" />
                    <div class="hint">{ format_base_hint(&form.usd_rate) }</div>
                </div>

                <div class="row">
                    <div class="input-group">
                        <label>{"Team A"}</label>
                        { team_select(&form.team_a, on_team(TeamSlot::A), "Team A") }
                        <input
                            type="number"
                            step="0.01"
                            value={form.odd_a.clone()}
                            oninput={on_field(Field::OddA)}
                            placeholder="Enter odds (e.g. 1.65)"
                            aria-label="Team A odds" />
                    </div>
                    <div class="input-group">
                        <label>{"Team B"}</label>
                        { team_select(&form.team_b, on_team(TeamSlot::B), "Team B") }
                        <input
                            type="number"
                            step="0.01"
                            value={form.odd_b.clone()}
                            oninput={on_field(Field::OddB)}
                            placeholder="Enter odds (e.g. 2.00)"
                            aria-label="Team B odds" />
                    </div>
                </div>

                <button onclick={on_calculate} disabled={*is_calculating} class="primary">
                    { if *is_calculating { "Calculating..." } else { "Calculate Stakes" } }
                </button>
            </div>

            { if let Some(s) = (*results).clone() {
                let r = s.result;
                html!{
                    <>
                        <div class="card">
                            <h2>{"Betting Strategy"}</h2>
                            <div class="row">
                                <div class="metric-grid">
                                    <div class="metric-item">
                                        <div class="metric-label">{"Bonus-Eligible Team"}</div>
                                        <div class="metric-value">{ s.bonus_team.clone() }</div>
                                    </div>
                                    <div class="metric-item">
                                        <div class="metric-label">{"Stake Amount"}</div>
                                        <div class="metric-value">{ format_inr(r.bonus_stake) }</div>
                                    </div>
                                    <div class="metric-item">
                                        <div class="metric-label">{"Odds"}</div>
                                        <div class="metric-value">{ format_odd(r.bonus_eligible_odd) }</div>
                                    </div>
                                </div>
                                <div class="metric-grid">
                                    <div class="metric-item">
                                        <div class="metric-label">{"Hedge Team"}</div>
                                        <div class="metric-value">{ s.hedge_team.clone() }</div>
                                    </div>
                                    <div class="metric-item">
                                        <div class="metric-label">{"Stake Amount"}</div>
                                        <div class="metric-value">{ format_inr(r.hedge_stake) }</div>
                                    </div>
                                    <div class="metric-item">
                                        <div class="metric-label">{"Odds"}</div>
                                        <div class="metric-value">{ format_odd(r.hedge_odd) }</div>
                                    </div>
                                </div>
                            </div>

                            <div class="section-divider"></div>
                            <div class="muted">{"Total Investment Required"}</div>
                            <div class="result large">{ format_inr(r.total_stake) }</div>
                            <div class="hint">{ format_base_breakdown(r.base_amount) }</div>
                        </div>

                        <h2>{"Potential Outcomes"}</h2>
                        <div class="grid three">
                            { for r.scenarios().into_iter().map(|sc| html!{
                                <OutcomeCard
                                    title={sc.kind.title()}
                                    amount={sc.amount}
                                    icon={scenario_icon(sc.kind)} />
                            }) }
                        </div>
                    </>
                }
            } else { html!{} }}

            <footer>
                {"Stakes are shown to two decimals; bonuses follow the bookmaker's $25 promotion."}
            </footer>
        </div>
    }
}
