use leptos::*;

use crate::models::review::Sentiment;

/// Visual treatment for one sentiment value.
pub struct SentimentPresentation {
    pub icon: &'static str,
    pub panel_class: &'static str,
    pub badge_class: &'static str,
}

/// Pure mapping from sentiment to presentation. Unknown wire values are
/// already collapsed to `Neutral` at the normalization boundary, so the
/// three arms here are total.
pub fn presentation(sentiment: Sentiment) -> SentimentPresentation {
    match sentiment {
        Sentiment::Positive => SentimentPresentation {
            icon: "▲",
            panel_class: "result-panel positive",
            badge_class: "sentiment-badge positive",
        },
        Sentiment::Negative => SentimentPresentation {
            icon: "▼",
            panel_class: "result-panel negative",
            badge_class: "sentiment-badge negative",
        },
        Sentiment::Neutral => SentimentPresentation {
            icon: "−",
            panel_class: "result-panel neutral",
            badge_class: "sentiment-badge neutral",
        },
    }
}

#[component]
pub fn SentimentBadge(
    sentiment: Sentiment,
    #[prop(default = false)] uppercase: bool,
) -> impl IntoView {
    let style = presentation(sentiment);
    let label = if uppercase {
        sentiment.as_str().to_uppercase()
    } else {
        sentiment.as_str().to_string()
    };

    view! {
        <span class="sentiment-icon">{ style.icon }</span>
        <span class={style.badge_class}>{ label }</span>
    }
}
