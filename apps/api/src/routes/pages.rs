use std::path::Path;

use axum::{extract::State, response::Html};
use tracing::debug;

use crate::state::AppState;

const FALLBACK_PAGE: &str = r#"<!DOCTYPE html>
<html><head><meta charset="utf-8"><title>🔮 AI 사주 운세</title></head>
<body>
    <h1>🔮 AI 사주 운세 서비스</h1>
    <p>static/index.html 파일을 생성해주세요.</p>
    <p><a href="/api/fortune-types">운세 종류 보기</a> · <a href="/health">서버 상태</a></p>
</body></html>
"#;

/// GET /
/// Serves `{static_dir}/index.html`, or a built-in placeholder page if it can't be read.
pub async fn index_handler(State(state): State<AppState>) -> Html<String> {
    let path = Path::new(&state.config.static_dir).join("index.html");
    match tokio::fs::read_to_string(&path).await {
        Ok(html) => Html(html),
        Err(e) => {
            debug!("Serving fallback page; {} unreadable: {e}", path.display());
            Html(FALLBACK_PAGE.to_string())
        }
    }
}
