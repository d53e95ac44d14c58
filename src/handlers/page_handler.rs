use axum::response::{Html, IntoResponse};

/// Landing page hosting the widget. The external ChatKit script upgrades the
/// `chatkit-container` placeholder on its own schedule.
pub async fn page_handler() -> impl IntoResponse {
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Chat</title>
    <script src="https://cdn.platform.openai.com/deployments/chatkit/chatkit.js" async></script>
</head>
<body>
    <openai-chatkit id="chatkit-container"></openai-chatkit>
</body>
</html>
"#,
    )
}
