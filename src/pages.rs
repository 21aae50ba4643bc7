//! Minimal HTML shells for the browser-facing routes.
//!
//! The dashboard proper is a thin consumer of the JSON proxy endpoints; these
//! pages only provide the login entry point, the redirect targets, and a small
//! inline script that renders the fetched statistics.

use axum::{
    extract::Query,
    response::Html,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ErrorPageQuery {
    pub message: Option<String>,
}

const INDEX_HTML: &str = r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>spotistats</title></head>
<body style="font-family:sans-serif;max-width:40em;margin:4em auto">
  <h1>spotistats</h1>
  <p>A dashboard for your Spotify listening statistics.</p>
  <p><a href="/api/login">Connect Spotify</a></p>
</body>
</html>"#;

const DASHBOARD_HTML: &str = r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>spotistats - dashboard</title></head>
<body style="font-family:sans-serif;max-width:40em;margin:4em auto">
  <h1 id="who">Dashboard</h1>
  <h2>Top tracks</h2><ol id="tracks"></ol>
  <h2>Top artists</h2><ol id="artists"></ol>
  <h2>Mood</h2><pre id="features"></pre>
  <script>
    async function get(url) {
      const res = await fetch(url);
      const body = await res.json();
      if (!res.ok) throw new Error(body.error || res.status);
      return body;
    }
    function fill(id, items) {
      const el = document.getElementById(id);
      for (const item of items) {
        const li = document.createElement('li');
        li.textContent = item.name;
        el.appendChild(li);
      }
    }
    (async () => {
      try {
        const [profile, tracks, artists, mood] = await Promise.all([
          get('/api/me'),
          get('/api/me/top/tracks?limit=10'),
          get('/api/me/top/artists?limit=10'),
          get('/api/me/top/tracks/audio-features'),
        ]);
        document.getElementById('who').textContent =
          'Dashboard - ' + (profile.display_name || profile.id);
        fill('tracks', tracks.items || []);
        fill('artists', artists.items || []);
        document.getElementById('features').textContent =
          JSON.stringify(mood.features, null, 2);
      } catch (e) {
        document.getElementById('who').textContent = 'Error: ' + e.message;
      }
    })();
  </script>
</body>
</html>"#;

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn dashboard() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

/// Renders the error page with the message carried in the query string.
pub async fn error_page(Query(q): Query<ErrorPageQuery>) -> Html<String> {
    let message = q.message.unwrap_or_else(|| "Unknown error".to_string());
    Html(format!(
        r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>spotistats - error</title></head>
<body style="font-family:sans-serif;max-width:40em;margin:4em auto">
  <h1>Something went wrong</h1>
  <p>{}</p>
  <p><a href="/">Back to login</a></p>
</body>
</html>"#,
        escape_html(&message)
    ))
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
