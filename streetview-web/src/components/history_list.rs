use crate::i18n::{t, tr};
use std::collections::BTreeMap;
use streetview_core::HistoryRow;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub rows: Vec<HistoryRow>,
    pub on_revisit: Callback<usize>,
}

#[function_component(HistoryList)]
pub fn history_list(p: &Props) -> Html {
    if p.rows.is_empty() {
        return Html::default();
    }

    let count = p.rows.len().to_string();
    let mut args = BTreeMap::new();
    args.insert("count", count.as_str());

    html! {
        <section id="historySection" class="history" aria-labelledby="history-title">
            <h2 id="history-title">{ t("history.title") }</h2>
            <p class="history-count">{ tr("history.count", Some(&args)) }</p>
            <ul id="historyList">
                { for p.rows.iter().map(|row| {
                    let index = row.index;
                    let on_click = {
                        let cb = p.on_revisit.clone();
                        Callback::from(move |_: MouseEvent| cb.emit(index))
                    };
                    html! {
                        <li key={index}>
                            <a href={row.url.clone()} target="_blank" rel="noopener noreferrer">
                                { row.label.clone() }
                            </a>
                            <button class="revisit" type="button" onclick={on_click}>
                                { t("history.revisit") }
                            </button>
                        </li>
                    }
                }) }
            </ul>
        </section>
    }
}
