//! Global CSS styles for Date Fact.
//!
//! Dark single-screen layout with a paper-note result panel.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --ink-black: #101318;
  --ink-lighter: #171b22;
  --ink-border: #262c36;

  /* Accents */
  --teal: #2dd4bf;
  --teal-glow: rgba(45, 212, 191, 0.25);
  --amber: #f4bf4f;

  /* Text */
  --text-primary: #f2f4f7;
  --text-secondary: rgba(242, 244, 247, 0.7);
  --text-muted: rgba(242, 244, 247, 0.45);

  /* Semantic */
  --danger: #f26d78;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', Helvetica, sans-serif;
  --font-serif: Georgia, 'Times New Roman', serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--ink-black);
  color: var(--text-primary);
  font-family: var(--font-sans);
  -webkit-font-smoothing: antialiased;
}

/* === Screen Layout === */
.screen {
  max-width: 420px;
  margin: 0 auto;
  padding: 2rem 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  min-height: 100vh;
}

.screen-header {
  text-align: center;
  padding-bottom: 0.5rem;
  border-bottom: 1px solid var(--ink-border);
}

.page-title {
  font-family: var(--font-serif);
  font-size: 2rem;
  font-weight: 600;
  color: var(--amber);
}

.tagline {
  margin-top: 0.25rem;
  font-size: 0.875rem;
  color: var(--text-muted);
}

/* === Form === */
.date-form {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.form-group {
  display: flex;
  flex-direction: column;
  gap: 0.375rem;
}

.form-label {
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.08em;
  color: var(--text-secondary);
}

.form-select,
.form-input {
  background: var(--ink-lighter);
  border: 1px solid var(--ink-border);
  border-radius: 8px;
  color: var(--text-primary);
  font-size: 1rem;
  padding: 0.625rem 0.75rem;
  transition: border-color var(--transition-fast);
}

.form-select:focus,
.form-input:focus {
  outline: none;
  border-color: var(--teal);
  box-shadow: 0 0 0 3px var(--teal-glow);
}

.form-input::placeholder {
  color: var(--text-muted);
}

/* === Result Panel === */
.fact-panel {
  border-radius: 10px;
  padding: 1.25rem;
  font-size: 1.0625rem;
  line-height: 1.5;
  animation: panel-in var(--transition-normal);
}

.fact-panel--fact {
  background: var(--ink-lighter);
  border: 1px solid var(--ink-border);
  font-family: var(--font-serif);
}

.fact-panel--error {
  background: rgba(242, 109, 120, 0.08);
  border: 1px solid var(--danger);
  color: var(--danger);
}

.fact-panel--loading {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  color: var(--text-secondary);
}

@keyframes panel-in {
  from { opacity: 0; transform: translateY(4px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Loading Spinner === */
.loading-spinner {
  width: 1.125rem;
  height: 1.125rem;
  border: 2px solid var(--ink-border);
  border-top-color: var(--teal);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}
"#;
