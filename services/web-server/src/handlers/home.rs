use axum::response::Html;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Coin Flip Demo API</title>
</head>
<body>
    <h1>Coin Flip Demo - Web Server</h1>
    <h2>Available Endpoints:</h2>
    <ul>
        <li><a href="/health">/health</a> - Health check</li>
        <li><a href="/api/flip?count=100">/api/flip?count=100</a> - Run coin flips</li>
        <li><a href="/api/analyze?count=100">/api/analyze?count=100</a> - Analyze coin flips</li>
        <li><a href="/api/compare?trials=50,100,150">/api/compare?trials=50,100,150</a> - Compare flip series</li>
    </ul>
</body>
</html>
"#;

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
