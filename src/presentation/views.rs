use std::fmt::Write;

use crate::application::services::CloneOutcome;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 42rem; margin: 2rem auto; padding: 0 1rem; }
fieldset { margin-bottom: 1rem; }
table { border-collapse: collapse; width: 100%; }
td, th { padding: 0.25rem 0.5rem; border-bottom: 1px solid #ddd; text-align: left; }
.note { color: #666; }
"#;

pub fn upload_form_page() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Voice conversion</title>
<style>{STYLE}</style>
</head>
<body>
<h1>Voice conversion</h1>
<p class="note">The clip is cut into one equal segment per model; segment N is converted with model N.</p>
<form action="/process" method="post" enctype="multipart/form-data">
<fieldset>
<legend>Source audio</legend>
<input type="file" name="audio" accept="audio/*" required>
</fieldset>
<fieldset>
<legend>Voice models</legend>
<input type="file" name="models" multiple required>
</fieldset>
<fieldset>
<legend>Index files (optional, same order as models)</legend>
<input type="file" name="indexes" multiple>
</fieldset>
<button type="submit">Convert</button>
</form>
</body>
</html>
"#
    )
}

pub fn results_page(outcome: &CloneOutcome) -> String {
    let mut rows = String::new();
    for result in &outcome.results {
        let _ = writeln!(
            rows,
            r#"<tr><td>{}</td><td>{}</td><td><a href="/download/{name}">{name}</a></td></tr>"#,
            result.segment_index + 1,
            result.window,
            name = result.output,
        );
    }

    let dropped = if outcome.plan.dropped_ms() > 0 {
        format!(
            r#"<p class="note">The last {}ms of the clip did not fit an equal segment and was not converted.</p>"#,
            outcome.plan.dropped_ms()
        )
    } else {
        String::new()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Converted clips</title>
<style>{STYLE}</style>
</head>
<body>
<h1>Converted clips</h1>
<table>
<tr><th>Segment</th><th>Window</th><th>File</th></tr>
{rows}</table>
{dropped}
<p><a href="/">Convert another clip</a></p>
</body>
</html>
"#
    )
}
