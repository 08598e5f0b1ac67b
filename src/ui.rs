use crate::models::{Goal, GoalId, GoalSummary};
use crate::views::GoalViews;
use std::fmt::Write;

pub fn render_index(views: &GoalViews, summary: &GoalSummary, editing: Option<GoalId>) -> String {
    INDEX_HTML
        .replace("{{TOTAL}}", &summary.total.to_string())
        .replace("{{ACTIVE_COUNT}}", &summary.active.to_string())
        .replace("{{COMPLETED_COUNT}}", &summary.completed.to_string())
        .replace("{{OVERDUE}}", &summary.overdue.to_string())
        .replace("{{ACTIVE}}", &render_list(&views.active, editing, "No active goals yet."))
        .replace(
            "{{COMPLETED}}",
            &render_list(&views.completed, editing, "Nothing completed yet."),
        )
}

fn render_list(goals: &[Goal], editing: Option<GoalId>, empty: &str) -> String {
    if goals.is_empty() {
        return format!(r#"<p class="empty">{}</p>"#, escape(empty));
    }

    let mut html = String::from("<ul>");
    for goal in goals {
        if editing == Some(goal.id) {
            render_editing(&mut html, goal);
        } else {
            render_display(&mut html, goal);
        }
    }
    html.push_str("</ul>");
    html
}

fn render_display(html: &mut String, goal: &Goal) {
    let id = goal.id;
    let class = if goal.done { "goal done" } else { "goal" };
    let toggle_label = if goal.done { "Undo" } else { "Done" };
    let _ = write!(
        html,
        r#"<li class="{class}">
  <form method="post" action="/goals/{id}/edit" class="edit-trigger">
    <button type="submit" class="title" title="Double-click to edit">{title}</button>"#,
        title = escape(&goal.title),
    );
    if !goal.notes.is_empty() {
        let _ = write!(html, r#"<p class="notes">{}</p>"#, escape(&goal.notes));
    }
    html.push_str("</form>");
    if let Some(due) = goal.due {
        let _ = write!(html, r#"<span class="due">Due {due}</span>"#);
    }
    let _ = write!(
        html,
        r#"
  <div class="actions">
    <form method="post" action="/goals/{id}/toggle"><button type="submit">{toggle_label}</button></form>
    <form method="post" action="/goals/{id}/delete"><button type="submit" class="danger">Delete</button></form>
  </div>
</li>"#
    );
}

fn render_editing(html: &mut String, goal: &Goal) {
    let id = goal.id;
    let _ = write!(
        html,
        r#"<li class="goal editing">
  <form method="post" action="/goals/{id}/commit" class="edit-form">
    <input name="title" value="{title}" autofocus />
    <textarea name="notes" rows="2">
{notes}</textarea>
    <button type="submit">Save</button>
    <button type="submit" class="cancel" formaction="/goals/cancel">Cancel</button>
  </form>
</li>"#,
        title = escape(&goal.title),
        notes = escape(&goal.notes),
    );
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            // Keeps user text from matching a template placeholder.
            '{' => out.push_str("&#123;"),
            _ => out.push(ch),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Goal Tracker</title>
  <style>
    :root {
      --bg: #f6f4ef;
      --ink: #23262b;
      --muted: #6b6f76;
      --accent: #3a6ff7;
      --danger: #d9534f;
      --card: #ffffff;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Inter", "Helvetica Neue", sans-serif;
      display: grid;
      place-items: start center;
      padding: 40px 18px;
    }

    .app {
      width: min(760px, 100%);
      background: var(--card);
      border-radius: 20px;
      box-shadow: 0 18px 40px rgba(35, 38, 43, 0.12);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    h1 {
      margin: 0;
    }

    .stats {
      display: flex;
      gap: 18px;
      color: var(--muted);
    }

    .add {
      display: grid;
      grid-template-columns: 2fr 2fr 1fr auto;
      gap: 8px;
    }

    ul {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 10px;
    }

    .goal {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 8px;
      padding: 12px 14px;
      border-radius: 12px;
      border: 1px solid #e4e2dc;
    }

    .goal.done .title {
      text-decoration: line-through;
      color: var(--muted);
    }

    .title {
      background: none;
      border: none;
      font: inherit;
      font-weight: 600;
      padding: 0;
      cursor: text;
      text-align: left;
    }

    .notes {
      margin: 4px 0 0;
      color: var(--muted);
    }

    .due {
      font-size: 0.85rem;
      color: var(--accent);
    }

    .actions {
      display: flex;
      gap: 6px;
    }

    .danger {
      color: var(--danger);
    }

    .empty {
      color: var(--muted);
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Goal Tracker</h1>
      <div class="stats">
        <span>{{TOTAL}} total</span>
        <span>{{ACTIVE_COUNT}} active</span>
        <span>{{COMPLETED_COUNT}} completed</span>
        <span>{{OVERDUE}} overdue</span>
      </div>
    </header>

    <form class="add" method="post" action="/goals">
      <input name="title" placeholder="New goal" required />
      <input name="notes" placeholder="Notes (optional)" />
      <input name="due" type="date" />
      <button type="submit">Add</button>
    </form>

    <section>
      <h2>Active</h2>
      {{ACTIVE}}
    </section>

    <section>
      <h2>Completed</h2>
      {{COMPLETED}}
    </section>
  </main>

  <script>
    document.querySelectorAll(".edit-trigger").forEach((form) => {
      form.querySelector(".title").addEventListener("click", (event) => event.preventDefault());
      form.addEventListener("dblclick", () => form.submit());
    });
    document.querySelectorAll(".edit-form").forEach((form) => {
      const cancel = form.querySelector(".cancel");
      let leaving = false;
      form.addEventListener("submit", () => {
        leaving = true;
      });
      // Keep focus inside the form so pressing Cancel does not commit first.
      cancel.addEventListener("mousedown", (event) => event.preventDefault());
      form.addEventListener("keydown", (event) => {
        if (event.key === "Escape") {
          form.requestSubmit(cancel);
        }
      });
      form.addEventListener("focusout", (event) => {
        if (!leaving && !form.contains(event.relatedTarget)) {
          leaving = true;
          form.submit();
        }
      });
    });
  </script>
</body>
</html>
"#;
