use axum::response::{Html, IntoResponse};

/// The single page: upload an MP3, optionally paste an API key, download the
/// review document the form POST returns.
const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Fix My Call</title>
  <style>
    body { font-family: sans-serif; max-width: 40rem; margin: 3rem auto; padding: 0 1rem; }
    form { display: flex; flex-direction: column; gap: 1rem; }
    input, button { font-size: 1rem; padding: 0.5rem; }
    button { cursor: pointer; }
    p.hint { color: #555; }
  </style>
</head>
<body>
  <h1>Fix My Call</h1>
  <p>Upload a service-advisor voicemail (.mp3). The call is transcribed,
  scored against the coaching rubric, and returned as a Word document.</p>
  <form action="/api/v1/review" method="post" enctype="multipart/form-data">
    <input type="file" name="file" accept=".mp3,audio/mpeg" required>
    <input type="password" name="api_key" placeholder="OpenAI API key (optional if configured on the server)">
    <button type="submit">Review call</button>
  </form>
  <p class="hint">Nothing is stored: the recording, transcript and report
  exist only for the duration of the request.</p>
</body>
</html>
"#;

pub async fn index_handler() -> impl IntoResponse {
    Html(INDEX_HTML)
}
