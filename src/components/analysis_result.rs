use leptos::*;

use crate::components::sentiment::{presentation, SentimentBadge};
use crate::models::review::ReviewRecord;
use crate::utils::format::format_confidence;

/// Panel for the record returned by the most recent analyze call.
#[component]
pub fn AnalysisResult(record: ReviewRecord) -> impl IntoView {
    let style = presentation(record.sentiment);
    let metadata = [
        record.product_name.clone(),
        record.skin_type.clone(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" / ");

    view! {
        <div class={style.panel_class}>
            <h2>{ "Analysis Result" }</h2>
            <div class="result-sentiment">
                <SentimentBadge sentiment=record.sentiment uppercase=true />
                <span class="confidence">
                    { format!("{} confidence", format_confidence(record.confidence)) }
                </span>
            </div>
            {(!metadata.is_empty()).then(|| view! {
                <p class="result-metadata">{ metadata.clone() }</p>
            })}
            <p class="result-text">{ record.review_text.clone() }</p>
            {(!record.key_points.is_empty()).then(|| view! {
                <div class="key-points">
                    <h3>{ "Key Points" }</h3>
                    <ul>
                        {record.key_points.iter().map(|point| view! {
                            <li>{ point.clone() }</li>
                        }).collect::<Vec<_>>()}
                    </ul>
                </div>
            })}
        </div>
    }
}
