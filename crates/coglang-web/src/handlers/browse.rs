//! Browse page — the one-page UI over the JSON API.

use axum::{extract::State, response::Html};
use tracing::warn;

use coglang_db::LanguageRepository;

use crate::state::SharedState;

/// Static page shell and client script, injected at render time.
const PAGE_HEAD: &str = include_str!("../../templates/browse_head.html");
const APP_JS: &str = include_str!("../../templates/browse_app.js");

pub async fn browse_page(State(state): State<SharedState>) -> Html<String> {
    let languages = match LanguageRepository::new(state.db.clone()).list().await {
        Ok(rows) => rows,
        Err(e) => {
            warn!("browse page could not list languages: {e}");
            Vec::new()
        }
    };
    let stats = state.db.stats().await.unwrap_or_default();

    let options_html: String = languages
        .iter()
        .map(|l| format!(r#"<option value="{}">{}</option>"#, l.id, l.language))
        .collect();

    Html(format!(
        r#"{PAGE_HEAD}
<div class="container">
    <h1>Coglang</h1>
    <p class="muted">{} languages · {} cognates · relation strategy: {}</p>

    <div class="controls">
        <select id="language">
            <option value="">Any language</option>
            {options_html}
        </select>
        <select id="language2">
            <option value="">Cognates in any language</option>
            {options_html}
        </select>
        <button id="random-btn">Random word</button>
    </div>

    <div class="controls">
        <input type="text" id="query" placeholder="Search for a word...">
        <button id="search-btn" class="secondary">Search</button>
    </div>

    <p id="error" class="error"></p>
    <div id="result"></div>
    <div id="connected"></div>
</div>
<script>{APP_JS}</script>
</body>
</html>"#,
        stats.languages, stats.cognates, state.relations,
    ))
}
