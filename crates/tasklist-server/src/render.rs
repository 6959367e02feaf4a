//! Server-side HTML rendering.
//!
//! [`render_page`] is a pure function from a task list plus the active filter
//! to a complete, self-contained document. Task titles and timestamps are
//! user-controlled and must pass through [`escape_html`] before interpolation.

use tasklist_core::{StatusFilter, Task};

const STYLE: &str = r#"
    :root {
      --bg: #f5f7fb;
      --panel: #ffffff;
      --text: #172236;
      --muted: #5f6c82;
      --primary: #0b66ff;
      --danger: #d64545;
      --border: #d6ddea;
    }
    * { box-sizing: border-box; }
    body {
      margin: 0;
      font-family: "Avenir Next", "Segoe UI", sans-serif;
      background: linear-gradient(135deg, #eef2ff, #f8fbff);
      color: var(--text);
      min-height: 100vh;
      display: grid;
      place-items: center;
      padding: 1rem;
    }
    .card {
      width: min(860px, 100%);
      background: var(--panel);
      border: 1px solid var(--border);
      border-radius: 16px;
      padding: 1.2rem;
      box-shadow: 0 10px 24px rgba(13, 28, 56, 0.08);
    }
    h1 { margin: 0 0 .2rem; }
    p { margin: .2rem 0 1rem; color: var(--muted); }
    form.add { display: flex; gap: .6rem; margin-bottom: 1rem; }
    input[name="title"] {
      flex: 1;
      border: 1px solid var(--border);
      border-radius: 10px;
      padding: .7rem .8rem;
      font-size: 1rem;
    }
    button {
      border: 1px solid transparent;
      border-radius: 10px;
      padding: .65rem .9rem;
      font-weight: 600;
      cursor: pointer;
    }
    .primary { background: var(--primary); color: #fff; }
    .danger { background: #fff; border-color: #f0a9a9; color: var(--danger); }
    .filters { display: flex; gap: .4rem; margin-bottom: .8rem; }
    .tag {
      text-decoration: none;
      color: var(--muted);
      border: 1px solid var(--border);
      border-radius: 999px;
      padding: .28rem .62rem;
      font-size: .9rem;
    }
    .tag.active { border-color: var(--primary); color: var(--primary); }
    ul { list-style: none; margin: 0; padding: 0; }
    .task {
      display: grid;
      grid-template-columns: auto 1fr auto auto;
      gap: .7rem;
      align-items: center;
      border-bottom: 1px solid #edf1f8;
      padding: .6rem 0;
    }
    .task .title { overflow-wrap: anywhere; }
    .task.done .title { text-decoration: line-through; color: var(--muted); }
    .inline { margin: 0; }
    .toggle { padding: 0; border: none; background: transparent; }
    .empty { color: var(--muted); padding: .8rem 0; }
    small { color: var(--muted); }
    @media (max-width: 700px) {
      .task { grid-template-columns: auto 1fr auto; }
      .task small { display: none; }
    }
"#;

/// Render the full task page for `tasks` under `filter`.
///
/// Counts come from the slice itself, not from separate queries, so the
/// counts line always agrees with the list shown below it.
pub fn render_page(tasks: &[Task], filter: StatusFilter) -> String {
    let done = tasks.iter().filter(|t| t.completed).count();
    let active = tasks.len() - done;

    let filters = StatusFilter::ALL
        .iter()
        .map(|option| {
            let class = if *option == filter { "tag active" } else { "tag" };
            format!(
                r#"<a class="{class}" href="/?status={key}">{label}</a>"#,
                key = option.as_str(),
                label = option.display_name(),
            )
        })
        .collect::<Vec<_>>()
        .join(" ");

    let list_markup = if tasks.is_empty() {
        "<p class='empty'>No tasks yet.</p>".to_string()
    } else {
        tasks.iter().map(render_item).collect::<Vec<_>>().join("\n")
    };

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Task Manager</title>
  <style>{style}</style>
</head>
<body>
  <main class="card">
    <h1>Task Manager</h1>
    <p>{active} active, {done} done, {shown} shown</p>
    <form method="post" action="/add" class="add">
      <input name="title" type="text" maxlength="140" placeholder="Add a task" required>
      <button class="primary" type="submit">Add</button>
    </form>
    <nav class="filters">{filters}</nav>
    <ul>{list_markup}</ul>
  </main>
</body>
</html>
"#,
        style = STYLE,
        shown = tasks.len(),
    )
}

fn render_item(task: &Task) -> String {
    let checked = if task.completed { "checked" } else { "" };
    let state_cls = if task.completed { "done" } else { "todo" };
    format!(
        r#"<li class="task {state_cls}">
  <form method="post" action="/toggle/{id}" class="inline">
    <button class="toggle" type="submit" title="Toggle task">
      <input type="checkbox" {checked} onclick="return false" aria-label="toggle">
    </button>
  </form>
  <span class="title">{title}</span>
  <small>{created_at}</small>
  <form method="post" action="/delete/{id}" class="inline delete-form">
    <button class="danger" type="submit">Delete</button>
  </form>
</li>"#,
        id = task.id,
        title = escape_html(&task.title),
        created_at = escape_html(&task.created_at_str()),
    )
}

/// Escape text for embedding in HTML content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
