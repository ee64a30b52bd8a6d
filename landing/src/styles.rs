//! CSS for the landing and success pages.
//!
//! Dark background, amber accent, monospace numerals. Entrance animations
//! only apply once the inline script has tagged `<html>` with `js`, so the
//! page stays fully visible without JavaScript.

/// Complete stylesheet inlined into every page.
pub const LANDING_CSS: &str = r#"
:root {
    --bg: #0a0a0f;
    --bg-card: #151520;
    --bg-terminal: #0d0d12;
    --border: #2a2a3a;
    --text: #f5f5f7;
    --text-dim: #9ca3af;
    --text-muted: #6b7280;
    --amber: #f59e0b;
    --amber-dark: #d97706;
    --purple: #a855f7;
    --green: #22c55e;
    --red: #f87171;
    --blue: #3b82f6;
    --font-sans: 'DM Sans', system-ui, -apple-system, sans-serif;
    --font-mono: 'Space Mono', 'JetBrains Mono', monospace;
    --container: 1152px;
}

*, *::before, *::after { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
    margin: 0;
    min-height: 100vh;
    background: var(--bg);
    color: var(--text);
    font-family: var(--font-sans);
    line-height: 1.6;
    -webkit-font-smoothing: antialiased;
}

a { color: inherit; text-decoration: none; }

.sun-rays {
    position: fixed;
    inset: 0;
    pointer-events: none;
    background: radial-gradient(ellipse at top, rgba(245, 158, 11, 0.08), transparent 60%);
    z-index: 0;
}

main { position: relative; z-index: 1; }

.container { max-width: var(--container); margin: 0 auto; padding: 0 24px; }
.container-narrow { max-width: 896px; margin: 0 auto; padding: 0 24px; }
.container-tight { max-width: 768px; margin: 0 auto; padding: 0 24px; }

.section { padding: 96px 0; }

.section-divider {
    border: 0;
    height: 1px;
    margin: 0 auto;
    max-width: var(--container);
    background: linear-gradient(90deg, transparent, var(--border), transparent);
}

.section-header { text-align: center; margin-bottom: 64px; }

.section-eyebrow {
    color: var(--amber);
    font-family: var(--font-mono);
    font-size: 14px;
    letter-spacing: 0.1em;
    text-transform: uppercase;
}

.section-title { font-size: clamp(30px, 4vw, 48px); font-weight: 700; margin: 16px 0 24px; }
.section-description { color: var(--text-dim); font-size: 18px; max-width: 672px; margin: 0 auto; }

.gradient-text {
    background: linear-gradient(90deg, var(--amber), var(--purple));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.icon-amber { color: var(--amber); }
.icon-green { color: var(--green); }
.icon-red { color: var(--red); }
.icon-blue { color: var(--blue); }

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 8px;
    padding: 16px 32px;
    border-radius: 12px;
    font-weight: 600;
    transition: transform 0.2s, background 0.2s, border-color 0.2s;
}
.btn-primary { background: var(--amber); color: #000; box-shadow: 0 0 40px rgba(245, 158, 11, 0.3); }
.btn-primary:hover { background: var(--amber-dark); transform: scale(1.05); }
.btn-secondary { border: 1px solid var(--border); }
.btn-secondary:hover { border-color: rgba(245, 158, 11, 0.5); background: var(--bg-card); }
.btn-large { padding: 20px 40px; font-size: 18px; }
.btn-block { display: flex; width: 100%; }

/* Navigation */
.nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    transition: background 0.3s, border-color 0.3s;
    border-bottom: 1px solid transparent;
}
.nav.scrolled {
    background: rgba(10, 10, 15, 0.9);
    backdrop-filter: blur(12px);
    border-bottom-color: var(--border);
}
.nav-inner {
    max-width: var(--container);
    margin: 0 auto;
    padding: 16px 24px;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.brand { display: flex; align-items: center; gap: 8px; font-size: 20px; font-weight: 700; }
.brand-mark { color: var(--amber); font-size: 24px; }
.nav-links { display: flex; align-items: center; gap: 32px; }
.nav-link { color: var(--text-dim); transition: color 0.2s; }
.nav-link:hover { color: var(--text); }
.nav-cta { padding: 8px 16px; background: var(--amber); color: #000; border-radius: 8px; font-weight: 500; }
.nav-toggle { display: none; background: none; border: 0; color: var(--text-dim); padding: 8px; cursor: pointer; }
.nav-toggle .icon-close { display: none; }
.nav.open .nav-toggle .icon-open { display: none; }
.nav.open .nav-toggle .icon-close { display: inline; }
.nav-mobile { display: none; flex-direction: column; gap: 16px; padding: 16px 24px; background: rgba(10, 10, 15, 0.95); border-bottom: 1px solid var(--border); }
.nav.open .nav-mobile { display: flex; }

@media (max-width: 768px) {
    .nav-links { display: none; }
    .nav-toggle { display: block; }
}

/* Hero */
.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 80px 24px 128px;
    overflow: hidden;
    text-align: center;
}
.hero-glow { position: absolute; width: 384px; height: 384px; border-radius: 50%; filter: blur(128px); pointer-events: none; }
.hero-glow.amber { top: 25%; left: 25%; background: rgba(245, 158, 11, 0.2); }
.hero-glow.purple { bottom: 25%; right: 25%; background: rgba(168, 85, 247, 0.2); }
.hero-inner { position: relative; max-width: 896px; }
.hero-badge {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 8px 16px;
    border-radius: 999px;
    border: 1px solid var(--border);
    background: rgba(21, 21, 32, 0.8);
    margin-bottom: 32px;
    font-size: 14px;
}
.hero-badge-counts { color: var(--amber); font-family: var(--font-mono); }
.hero-title { font-size: clamp(36px, 6vw, 72px); line-height: 1.1; margin: 0 0 24px; }
.hero-description { color: var(--text-dim); font-size: 20px; max-width: 672px; margin: 0 auto 40px; }
.hero-actions { display: flex; flex-wrap: wrap; gap: 16px; justify-content: center; margin-bottom: 64px; }
.hero-stats { display: flex; flex-wrap: wrap; justify-content: center; gap: 48px; }
.hero-stat-number { font-family: var(--font-mono); font-size: 36px; font-weight: 700; color: var(--amber); }
.hero-stat-label { font-size: 14px; color: var(--text-muted); }
.scroll-hint { position: absolute; bottom: 32px; left: 50%; transform: translateX(-50%); width: 24px; height: 40px; border: 2px solid var(--border); border-radius: 999px; display: flex; justify-content: center; padding-top: 8px; }
.scroll-hint span { width: 4px; height: 8px; background: var(--amber); border-radius: 999px; }

/* Cards */
.card-grid { display: grid; gap: 24px; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); }
.card {
    padding: 32px;
    border-radius: 16px;
    border: 1px solid var(--border);
    background: rgba(21, 21, 32, 0.5);
    transition: transform 0.2s, border-color 0.2s;
}
.card:hover { transform: translateY(-4px); }
.card.highlight { border-color: rgba(245, 158, 11, 0.5); background: linear-gradient(135deg, rgba(245, 158, 11, 0.1), transparent); }
.card-title { font-size: 20px; font-weight: 600; margin: 0 0 12px; }
.card-text { color: var(--text-dim); margin: 0; }
.card-icon { width: 48px; height: 48px; border-radius: 12px; display: flex; align-items: center; justify-content: center; margin-bottom: 24px; }
.card-icon.problem { background: rgba(239, 68, 68, 0.1); color: var(--red); }
.card-icon.feature { width: 40px; height: 40px; margin: 0; background: rgba(245, 158, 11, 0.1); color: var(--amber); }
.feature-head { display: flex; align-items: center; gap: 16px; margin-bottom: 24px; }
.feature-number { color: var(--amber); font-family: var(--font-mono); font-size: 14px; }

/* Terminal demo */
.terminal { border-radius: 16px; border: 1px solid var(--border); background: var(--bg-terminal); overflow: hidden; }
.terminal-header { display: flex; align-items: center; gap: 8px; padding: 12px 16px; background: var(--bg-card); border-bottom: 1px solid var(--border); }
.terminal-dot { width: 12px; height: 12px; border-radius: 50%; }
.terminal-dot.red { background: #ef4444; }
.terminal-dot.yellow { background: #eab308; }
.terminal-dot.green { background: #22c55e; }
.terminal-title { margin-left: 12px; color: var(--text-muted); font-family: var(--font-mono); font-size: 14px; }
.terminal-body { padding: 24px; font-family: var(--font-mono); }
.terminal-line { margin-top: 8px; white-space: pre-wrap; color: var(--text-muted); transition: opacity 0.3s, transform 0.3s; }
.terminal-line:first-child { margin-top: 0; }
.terminal-line.prompt { color: #d1d5db; }
.terminal-prompt { color: var(--amber); }
.terminal-input { color: #fff; }
.terminal-match { color: var(--amber); }
.terminal-cursor { display: inline-block; width: 8px; height: 20px; margin-left: 4px; vertical-align: middle; background: var(--amber); animation: blink 1s step-end infinite; }
.js .terminal-line.pending { opacity: 0; transform: translateX(-10px); }
@keyframes blink { 50% { opacity: 0; } }

/* Video */
.video-frame { border-radius: 16px; border: 1px solid var(--border); overflow: hidden; background: var(--bg-card); box-shadow: 0 25px 50px rgba(245, 158, 11, 0.1); }
.video-frame video { display: block; width: 100%; aspect-ratio: 16 / 9; }
.video-caption { text-align: center; color: var(--text-muted); font-size: 14px; margin-top: 16px; }

/* How it works */
.steps { display: flex; flex-wrap: wrap; align-items: center; justify-content: center; gap: 16px; }
.step { text-align: center; max-width: 384px; }
.step-number { width: 64px; height: 64px; border-radius: 16px; margin: 0 auto 24px; display: flex; align-items: center; justify-content: center; background: linear-gradient(135deg, rgba(245, 158, 11, 0.2), rgba(168, 85, 247, 0.2)); color: var(--amber); font-family: var(--font-mono); font-size: 24px; font-weight: 700; }
.step-arrow { color: var(--amber); }

/* Categories */
.chips { display: flex; flex-wrap: wrap; justify-content: center; gap: 12px; }
.chip { padding: 8px 16px; border-radius: 999px; border: 1px solid var(--border); background: rgba(21, 21, 32, 0.5); }
.chip:hover { border-color: rgba(245, 158, 11, 0.5); }
.chip-count { color: var(--amber); font-family: var(--font-mono); font-weight: 700; margin-right: 8px; }
.chip-name { color: #d1d5db; }

/* Comparison */
.compare { border-radius: 16px; border: 1px solid var(--border); overflow: hidden; }
.compare-row { display: grid; grid-template-columns: repeat(3, 1fr); }
.compare-row > div { padding: 16px; border-bottom: 1px solid var(--border); display: flex; align-items: center; gap: 8px; }
.compare-row > div + div { border-left: 1px solid var(--border); }
.compare-head { background: var(--bg-card); }
.compare-head > div { justify-content: center; font-weight: 500; }
.compare-feature { color: #d1d5db; font-weight: 500; }
.compare-diy { color: var(--text-muted); font-size: 14px; }
.compare-rt { color: #d1d5db; font-size: 14px; background: rgba(245, 158, 11, 0.05); }
.compare-head .compare-rt { color: var(--amber); background: rgba(245, 158, 11, 0.1); }

/* Pricing */
.plans { display: grid; gap: 24px; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); align-items: start; }
.plan { position: relative; }
.plan.highlight { border-color: var(--amber); background: linear-gradient(135deg, rgba(245, 158, 11, 0.1), rgba(168, 85, 247, 0.1)); }
.plan-badge { position: absolute; top: -12px; left: 50%; transform: translateX(-50%); display: flex; align-items: center; gap: 4px; padding: 4px 12px; background: var(--amber); color: #000; border-radius: 999px; font-size: 14px; font-weight: 500; }
.plan-name { display: flex; align-items: center; gap: 8px; }
.plan-price-row { display: flex; flex-wrap: wrap; align-items: baseline; gap: 8px; }
.plan-price { font-size: 36px; font-weight: 700; }
.plan-original { font-size: 24px; color: var(--text-muted); text-decoration: line-through; }
.plan-note { font-size: 14px; color: var(--text-muted); }
.plan-limited { font-size: 12px; color: var(--amber); text-transform: uppercase; letter-spacing: 0.05em; }
.plan-savings { font-size: 12px; color: var(--green); }
.plan-features { list-style: none; padding: 0; margin: 24px 0 32px; display: grid; gap: 12px; }
.plan-features li { display: flex; align-items: flex-start; gap: 12px; color: #d1d5db; }
.plan-features a { color: var(--amber); }
.pricing-trust { text-align: center; color: var(--text-muted); font-size: 14px; margin-top: 48px; }

/* FAQ */
.faq-list { border-radius: 16px; border: 1px solid var(--border); background: rgba(21, 21, 32, 0.5); padding: 0 24px; }
.faq-item { border-bottom: 1px solid var(--border); }
.faq-item:last-child { border-bottom: 0; }
.faq-question { width: 100%; padding: 24px 0; display: flex; align-items: center; justify-content: space-between; gap: 16px; background: none; border: 0; color: inherit; font: inherit; font-weight: 500; text-align: left; cursor: pointer; }
.faq-question:hover { color: var(--amber); }
.faq-question svg { flex-shrink: 0; transition: transform 0.3s; }
.faq-item.open .faq-question svg { transform: rotate(180deg); }
.faq-answer { color: var(--text-dim); padding-bottom: 24px; margin: 0; }
.js .faq-item:not(.open) .faq-answer { display: none; }

/* CTA + footer */
.cta { padding: 128px 0; text-align: center; }
.cta-title { font-size: clamp(30px, 5vw, 48px); line-height: 1.2; margin: 0 0 24px; }
.cta-tagline { font-size: 20px; color: var(--text-dim); margin-bottom: 40px; }
.footer { border-top: 1px solid var(--border); padding: 48px 0; }
.footer-inner { display: flex; flex-wrap: wrap; align-items: center; justify-content: space-between; gap: 24px; }
.footer-links { display: flex; gap: 24px; color: var(--text-dim); }
.footer-links a:hover { color: var(--text); }
.footer-copyright { color: var(--text-muted); font-size: 14px; }

/* Success page */
.success { min-height: 100vh; display: flex; align-items: center; justify-content: center; padding: 80px 24px; }
.success-inner { position: relative; max-width: 672px; text-align: center; }
.success-glow { position: absolute; top: 33%; left: 50%; transform: translateX(-50%); width: 600px; height: 600px; border-radius: 50%; background: rgba(34, 197, 94, 0.2); filter: blur(150px); pointer-events: none; }
.success-badge { width: 96px; height: 96px; margin: 0 auto 32px; border-radius: 50%; background: rgba(34, 197, 94, 0.2); color: var(--green); display: flex; align-items: center; justify-content: center; }
.success-title { font-size: clamp(36px, 5vw, 48px); margin: 0 0 16px; }
.success-lead { font-size: 20px; color: var(--text-dim); margin-bottom: 48px; }
.next-steps { display: grid; gap: 16px; margin-bottom: 48px; text-align: left; }
.next-step { display: flex; align-items: flex-start; gap: 16px; padding: 24px; }
.next-step-marker { width: 40px; height: 40px; flex-shrink: 0; border-radius: 12px; display: flex; align-items: center; justify-content: center; font-weight: 700; }
.next-step-marker.amber { background: rgba(245, 158, 11, 0.2); color: var(--amber); }
.next-step-marker.purple { background: rgba(168, 85, 247, 0.2); color: var(--purple); }
.next-step-marker.green { background: rgba(34, 197, 94, 0.2); color: var(--green); }
.next-step-marker.blue { background: rgba(59, 130, 246, 0.2); color: var(--blue); }
.next-step h3 { margin: 0 0 4px; font-size: 16px; }
.next-step p { margin: 0; color: var(--text-dim); font-size: 14px; }
.success-actions { display: flex; flex-wrap: wrap; gap: 16px; justify-content: center; }
.support-note { margin-top: 48px; padding: 16px; border-radius: 12px; background: #1a1a2e; border: 1px solid var(--border); color: var(--text-dim); font-size: 14px; }
.support-note strong { color: var(--text); }
.support-note a { color: var(--amber); }

/* Scroll-triggered entrances */
.js [data-reveal] { opacity: 0; transform: translateY(20px); transition: opacity 0.5s ease-out, transform 0.5s ease-out; }
.js [data-reveal].revealed { opacity: 1; transform: none; }
"#;

#[cfg(test)]
mod tests {
    use super::LANDING_CSS;

    #[test]
    fn hidden_states_are_gated_on_script() {
        for line in LANDING_CSS.lines() {
            if line.contains("opacity: 0;") && line.contains('{') && !line.contains("@keyframes") {
                assert!(line.trim_start().starts_with(".js "), "ungated: {line}");
            }
        }
        assert!(LANDING_CSS.contains(".js .faq-item:not(.open) .faq-answer { display: none; }"));
    }
}
