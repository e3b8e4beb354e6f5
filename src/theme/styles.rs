//! Global CSS styles for the Human Biology Explorer.
//!
//! Palette variables and `.accent-*` classes come from `colors::palette_css`.
//! Everything here uses logical properties so one stylesheet serves both
//! `dir="ltr"` and `dir="rtl"`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-arabic: 'Noto Sans Arabic', 'Segoe UI', 'Tahoma', sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;

  /* Radius / Shadow */
  --radius: 0.75rem;
  --shadow-card: 0 1px 3px rgba(15, 23, 42, 0.08);
  --shadow-panel: 0 10px 40px rgba(15, 23, 42, 0.2);

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-panel: 300ms cubic-bezier(0.16, 1, 0.3, 1);

  /* Layout */
  --panel-width: min(32rem, 100vw);
}

/* === Base === */
*, *::before, *::after { box-sizing: border-box; }

html, body {
  margin: 0;
  padding: 0;
  background: var(--background);
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: var(--text-base);
  line-height: 1.6;
}

[dir="rtl"] body, [dir="rtl"] .app-shell { font-family: var(--font-arabic); }

h1, h2, h3, h4, p { margin: 0; }

/* === Shell === */
.app-shell { min-height: 100vh; }

.app-header {
  position: sticky;
  inset-block-start: 0;
  z-index: 10;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  padding-block: 1rem;
  padding-inline: 2rem;
  background: var(--card);
  border-block-end: 1px solid var(--border);
}

.brand { display: flex; align-items: center; gap: 0.75rem; }

.brand-mark {
  display: grid;
  place-items: center;
  inline-size: 2.5rem;
  block-size: 2.5rem;
  border-radius: 50%;
  background: var(--muted);
  font-size: var(--text-xl);
}

.app-title { font-size: var(--text-xl); font-weight: 700; }
.app-subtitle { font-size: var(--text-sm); color: var(--text-muted); }

.explorer-main {
  padding-block: 2rem;
  padding-inline: 2rem;
  transition: padding var(--transition-panel);
}

.explorer-layout {
  display: grid;
  grid-template-columns: minmax(12rem, 18rem) 1fr;
  gap: 2rem;
  align-items: start;
}

@media (max-width: 800px) {
  .explorer-layout { grid-template-columns: 1fr; }
}

/* === Buttons === */
button { font: inherit; cursor: pointer; }

.btn-pill {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding-block: 0.5rem;
  padding-inline: 1rem;
  border-radius: 999px;
  transition: background var(--transition-fast), border-color var(--transition-fast);
  background: var(--card);
  color: var(--text-primary);
  border: 1px solid var(--border);
}

.btn-pill:hover { background: var(--muted); }

.icon-btn {
  display: grid;
  place-items: center;
  inline-size: 2.25rem;
  block-size: 2.25rem;
  border: none;
  border-radius: 50%;
  background: transparent;
  color: var(--text-muted);
  font-size: var(--text-xl);
}

.icon-btn:hover { background: var(--muted); color: var(--text-primary); }

.close-btn { margin-inline-start: auto; }

/* === Body Figure === */
.body-figure {
  position: sticky;
  inset-block-start: 6rem;
  text-align: center;
}

.body-svg { inline-size: 100%; max-block-size: 70vh; }

.silhouette ellipse, .silhouette rect { fill: var(--muted); stroke: var(--border); }

.body-region { cursor: pointer; }

.body-region ellipse, .body-region rect {
  fill: transparent;
  stroke: transparent;
  stroke-width: 2;
  transition: fill var(--transition-fast), stroke var(--transition-fast);
}

.body-region:hover ellipse, .body-region:hover rect,
.body-region:focus ellipse, .body-region:focus rect {
  fill: color-mix(in srgb, var(--accent) 25%, transparent);
  stroke: var(--accent);
}

.body-region.active ellipse, .body-region.active rect {
  fill: color-mix(in srgb, var(--accent) 45%, transparent);
  stroke: var(--accent);
}

.region-label {
  fill: var(--text-muted);
  font-size: 11px;
  pointer-events: none;
}

.body-region.active .region-label { fill: var(--accent); font-weight: 700; }

.body-hint { margin-block-start: 1rem; font-size: var(--text-sm); color: var(--text-muted); }

/* === Overview === */
.overview-heading { font-size: var(--text-lg); margin-block-end: 1rem; }

.system-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr));
  gap: 1.25rem;
}

.system-card {
  position: relative;
  display: flex;
  flex-direction: column;
  padding: 0;
  overflow: hidden;
  text-align: start;
  background: var(--card);
  color: inherit;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  box-shadow: var(--shadow-card);
  transition: transform var(--transition-fast), border-color var(--transition-fast);
}

.system-card:hover { transform: translateY(-2px); border-color: var(--accent); }
.system-card.active { border-color: var(--accent); }

.card-media { position: relative; block-size: 9rem; background: var(--muted); }
.card-media img { inline-size: 100%; block-size: 100%; object-fit: cover; }

.card-icon {
  position: absolute;
  inset-block-end: 0.5rem;
  inset-inline-start: 0.5rem;
  font-size: var(--text-xl);
}

.card-accent { block-size: 4px; background: var(--accent); }
.card-body { padding: 1rem; display: flex; flex-direction: column; gap: 0.5rem; }
.card-title { font-size: var(--text-lg); }
.card-description { font-size: var(--text-sm); color: var(--text-muted); }
.card-facts { font-size: var(--text-xs); color: var(--text-muted); font-style: italic; }

.card-chevron {
  position: absolute;
  inset-block-start: 10rem;
  inset-inline-end: 1rem;
  color: var(--text-muted);
  font-size: var(--text-xl);
}

[dir="rtl"] .card-chevron { transform: scaleX(-1); }

/* === Info Panel === */
.panel-backdrop {
  position: fixed;
  inset: 0;
  z-index: 40;
  background: rgba(15, 23, 42, 0.4);
  animation: fade-in var(--transition-panel);
}

.info-panel {
  position: fixed;
  inset-block: 0;
  inset-inline-end: 0;
  z-index: 50;
  inline-size: var(--panel-width);
  overflow-y: auto;
  background: var(--card);
  box-shadow: var(--shadow-panel);
  border-inline-start: 4px solid var(--accent);
  animation: slide-in-end var(--transition-panel);
}

[dir="rtl"] .info-panel { animation-name: slide-in-start; }

.panel-header {
  position: sticky;
  inset-block-start: 0;
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 1.25rem;
  background: var(--card);
  border-block-end: 1px solid var(--border);
}

.panel-icon { font-size: var(--text-2xl); }
.panel-title { font-size: var(--text-xl); }

.panel-body { display: flex; flex-direction: column; gap: 1.5rem; padding: 1.25rem; }

.panel-media { margin: 0; display: flex; flex-direction: column; gap: 0.75rem; }
.panel-media img { inline-size: 100%; border-radius: var(--radius); background: var(--muted); }

.panel-description { color: var(--text-primary); }

.panel-facts {
  padding: 1rem;
  border-radius: var(--radius);
  border-inline-start: 3px solid var(--accent);
  background: var(--muted);
  font-size: var(--text-sm);
}

.panel-section { display: flex; flex-direction: column; gap: 0.75rem; }

.section-heading {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: var(--text-lg);
}

.accent-dot {
  inline-size: 0.625rem;
  block-size: 0.625rem;
  border-radius: 50%;
  background: var(--accent);
}

.item-grid { display: grid; gap: 0.75rem; }

.item-card {
  padding: 0.875rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  background: var(--card);
  transition: border-color var(--transition-fast);
}

.item-card:hover { border-color: var(--accent); }
.item-card.muted { background: var(--muted); border-color: transparent; }
.item-name { font-size: var(--text-base); margin-block-end: 0.25rem; }
.item-description { font-size: var(--text-sm); color: var(--text-muted); }

/* === Phase Cycle === */
.phase-cycle {
  padding: 1rem;
  border-radius: var(--radius);
  border: 1px dashed var(--accent);
}

.phase-title { margin-block-end: 0.75rem; }

.phase-steps { list-style: none; margin: 0; padding: 0; display: grid; gap: 0.5rem; }

.phase-step {
  display: flex;
  gap: 0.75rem;
  padding: 0.5rem;
  border-radius: calc(var(--radius) / 2);
  opacity: 0.5;
  transition: opacity var(--transition-fast), background var(--transition-fast);
}

.phase-step.active { opacity: 1; background: var(--muted); }

.phase-marker {
  flex: none;
  display: grid;
  place-items: center;
  inline-size: 1.5rem;
  block-size: 1.5rem;
  border-radius: 50%;
  background: var(--accent);
  color: var(--card);
  font-size: var(--text-xs);
}

.phase-step p { font-size: var(--text-sm); color: var(--text-muted); }

.animation-heartbeat .phase-step.active .phase-marker { animation: pulse 600ms ease-in-out infinite; }
.animation-breathing .phase-step.active .phase-marker { animation: pulse 2000ms ease-in-out infinite; }
.animation-action-potential .phase-step.active .phase-marker { animation: pulse 1000ms ease-in-out infinite; }

/* === Keyframes === */
@keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }
@keyframes slide-in-end { from { transform: translateX(100%); } to { transform: translateX(0); } }
@keyframes slide-in-start { from { transform: translateX(-100%); } to { transform: translateX(0); } }
@keyframes pulse { 0%, 100% { transform: scale(1); } 50% { transform: scale(1.25); } }
"#;
