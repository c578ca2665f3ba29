//! Stylesheet inlined into every rendered page.
//!
//! Dark slate theme with green/red accents for the two sentiment tones.

/// Complete CSS for the dashboard.
pub const DASHBOARD_CSS: &str = r#"
:root {
    --bg-deep: #0f172a;
    --bg-card: rgba(30, 41, 59, 0.5);
    --bg-input: #0f172a;
    --border: #334155;
    --border-input: #475569;
    --text: #ffffff;
    --text-soft: #cbd5e1;
    --text-muted: #94a3b8;
    --accent: #3b82f6;
    --accent-strong: #2563eb;
    --positive: #4ade80;
    --positive-bar: #22c55e;
    --positive-bg: rgba(34, 197, 94, 0.1);
    --negative: #f87171;
    --negative-bar: #ef4444;
    --negative-bg: rgba(239, 68, 68, 0.1);
}

* { box-sizing: border-box; }

body {
    margin: 0;
    min-height: 100vh;
    font-family: system-ui, -apple-system, sans-serif;
    color: var(--text);
    background: linear-gradient(135deg, #0f172a, #1e293b, #0f172a);
}

.site-header {
    border-bottom: 1px solid var(--border);
    background: rgba(15, 23, 42, 0.5);
}

.site-header .inner,
.container {
    max-width: 72rem;
    margin: 0 auto;
    padding: 1.5rem 2rem;
}

.site-header .inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.site-header h1 { margin: 0; font-size: 1.875rem; }
.site-header .tagline { margin: 0.25rem 0 0; font-size: 0.875rem; color: var(--text-muted); }

.pill {
    border-radius: 0.5rem;
    padding: 0.5rem 1rem;
    font-size: 0.875rem;
    color: #60a5fa;
    background: rgba(59, 130, 246, 0.1);
}

.tab-bar {
    display: flex;
    gap: 0.5rem;
    margin-bottom: 1.5rem;
    border-bottom: 1px solid var(--border);
}

.tab {
    padding: 0.5rem 1rem;
    font-weight: 500;
    color: var(--text-muted);
    text-decoration: none;
    border-bottom: 2px solid transparent;
}

.tab:hover { color: var(--text-soft); }
.tab.active { color: #60a5fa; border-bottom-color: var(--accent); }

.grid { display: grid; gap: 1.5rem; }
.two-columns { grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr)); }
.three-columns { grid-template-columns: repeat(3, 1fr); gap: 1rem; }
.stack { display: flex; flex-direction: column; gap: 1.5rem; }

.card {
    border: 1px solid var(--border);
    border-radius: 0.75rem;
    background: var(--bg-card);
    padding: 1.5rem;
}

.card h2 { margin: 0 0 1rem; font-size: 1.125rem; }
.card h3 { margin: 0 0 1rem; font-size: 1rem; }

textarea {
    width: 100%;
    margin-bottom: 1rem;
    padding: 0.75rem 1rem;
    border: 1px solid var(--border-input);
    border-radius: 0.5rem;
    background: var(--bg-input);
    color: var(--text);
    font: inherit;
    resize: vertical;
}

textarea:focus { outline: none; border-color: var(--accent); }

.actions { display: flex; gap: 0.75rem; }

button {
    padding: 0.6rem 1rem;
    border-radius: 0.5rem;
    font: inherit;
    cursor: pointer;
}

button.primary {
    flex: 1;
    width: 100%;
    border: none;
    color: var(--text);
    background: var(--accent-strong);
}

button.primary:hover { background: #1d4ed8; }
button:disabled { opacity: 0.5; cursor: not-allowed; }

button.secondary {
    border: 1px solid var(--border-input);
    color: var(--text-soft);
    background: transparent;
}

.error {
    margin-bottom: 1rem;
    padding: 0.75rem;
    border-radius: 0.5rem;
    font-size: 0.875rem;
    color: var(--negative);
    background: var(--negative-bg);
}

.muted { color: var(--text-muted); font-size: 0.875rem; }

.sentiment-badge.positive { background: var(--positive-bg); }
.sentiment-badge.negative { background: var(--negative-bg); }
.sentiment-label { font-size: 1.875rem; font-weight: 700; margin: 0.5rem 0; }

.positive { color: var(--positive); }
.negative { color: var(--negative); }

.bar-row { margin-bottom: 0.75rem; }
.bar-legend { display: flex; justify-content: space-between; font-size: 0.875rem; margin-bottom: 0.25rem; }
.bar-track { height: 0.5rem; overflow: hidden; border-radius: 9999px; background: var(--border); }
.bar-fill { height: 100%; transition: width 300ms; }
.bar-fill.positive { background: var(--positive-bar); }
.bar-fill.negative { background: var(--negative-bar); }

.detail-row { display: flex; justify-content: space-between; font-size: 0.875rem; padding: 0.25rem 0; }
.detail-row .label { color: var(--text-muted); }
.detail-row .value { color: #e2e8f0; font-weight: 500; }

.tile .count { margin-top: 0.5rem; font-size: 1.875rem; font-weight: 700; }

.results { list-style: none; margin: 0; padding: 0; }

.result-row {
    display: flex;
    align-items: flex-start;
    justify-content: space-between;
    gap: 1rem;
    margin-bottom: 0.75rem;
    padding: 1rem;
    border: 1px solid var(--border);
    border-radius: 0.5rem;
    background: rgba(15, 23, 42, 0.5);
}

.result-row p { margin: 0; flex: 1; font-size: 0.875rem; color: var(--text-soft); }

.badge {
    border-radius: 9999px;
    padding: 0.25rem 0.75rem;
    font-size: 0.875rem;
    font-weight: 500;
}

.badge.positive { background: rgba(34, 197, 94, 0.2); }
.badge.negative { background: rgba(239, 68, 68, 0.2); }
"#;
