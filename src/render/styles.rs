//! Page chrome CSS

/// Layout and typography shared by every page
pub const BASE_CSS: &str = r#"
* { box-sizing: border-box; }
body {
  margin: 0;
  font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
  color: rgba(15,15,15,0.95);
  background: #f6f7f9;
}
.app { min-height: 100vh; }
main.content { padding: 2.5rem 1.5rem; }
.block-container { max-width: 1280px; margin: 0 auto; padding-top: 2.5rem; padding-bottom: 2.5rem; }

.hero-title { font-size: 44px; line-height: 1.05; font-weight: 700; letter-spacing: -0.02em; margin: 0 0 10px 0; }
.hero-sub { font-size: 16px; opacity: 0.80; margin: 0 0 22px 0; }
.centered { display: flex; justify-content: center; }
.caption { font-size: 13px; opacity: 0.75; margin: 0 0 12px 0; }

select, button {
  font: inherit;
  padding: 10px 14px;
  border-radius: 14px;
  border: 1px solid rgba(0,0,0,0.15);
  background: #fff;
  color: rgba(15,15,15,0.95);
}
button { cursor: pointer; }

.kpi-card {
  border-radius: 18px;
  padding: 16px;
  border: 1px solid rgba(0,0,0,0.06);
  background: rgba(255,255,255,0.7);
}
"#;

/// Hero text, picker and logo on the landing page
pub const LANDING_CSS: &str = r#"
.app { background: linear-gradient(160deg, #0b1d3a 0%, #123a5e 100%); }
.landing-hero { min-height: 60vh; display: flex; align-items: center; justify-content: center; }
.landing-hero > div { width: min(1100px, 92vw); margin: 0 auto; text-align: center; }
.landing-title {
  font-size: 54px;
  line-height: 1.05;
  font-weight: 750;
  letter-spacing: -0.02em;
  margin: 0 0 18px 0;
  color: rgba(255,255,255,0.95);
  text-shadow: 0 10px 30px rgba(0,0,0,0.35);
}
.landing-label { font-size: 14px; letter-spacing: 0.02em; color: rgba(255,255,255,0.78); margin: 0 0 8px 0; }
.landing-picker { display: flex; justify-content: center; gap: 8px; margin-top: -120px; }
.landing-picker select { min-width: 320px; }
.corner-logo {
  position: fixed;
  top: 18px;
  right: 18px;
  width: 110px;
  z-index: 2;
  filter: drop-shadow(0 10px 30px rgba(0,0,0,0.35));
}
"#;

/// Opaque content panel that keeps dashboard text readable on any flag
pub const DASHBOARD_CSS: &str = r#"
main.content > .block-container {
  background: rgba(255,255,255,0.96);
  border: 1px solid rgba(0,0,0,0.08);
  border-radius: 18px;
  padding: 28px 28px 18px 28px;
  box-shadow: 0 18px 70px rgba(0,0,0,0.22);
}
main.content h1, main.content h2, main.content h3, main.content h4,
main.content p, main.content li, main.content label, main.content span,
main.content .caption, main.content .metric * {
  color: rgba(15,15,15,0.95);
  opacity: 1;
}
.top-bar { display: flex; align-items: end; justify-content: space-between; gap: 16px; margin-bottom: 16px; }
.top-bar label { display: block; font-size: 14px; margin-bottom: 6px; }
.columns { display: grid; grid-template-columns: 1fr 1.4fr; gap: 32px; }
.grid-2 { display: grid; grid-template-columns: repeat(2, 1fr); gap: 12px; }
.grid-3 { display: grid; grid-template-columns: repeat(3, 1fr); gap: 12px; }
.grid-4 { display: grid; grid-template-columns: repeat(4, 1fr); gap: 12px; }
.metric {
  background: rgba(255,255,255,0.98);
  padding: 14px 16px;
  border-radius: 14px;
  border: 1px solid rgba(0,0,0,0.06);
}
.metric-label { font-size: 14px; }
.metric-value { font-size: 28px; font-weight: 600; margin-top: 4px; }
.right-panel { border-left: 2px solid rgba(0,0,0,0.12); padding-left: 28px; margin-left: 10px; background: transparent; }
.callout { border-radius: 12px; padding: 14px 16px; }
.callout.info { background: rgba(28,131,225,0.10); }
.callout.warning { background: rgba(255,189,69,0.18); }
.callout.success { background: rgba(33,195,84,0.12); }
.notice-warning { background: rgba(255,189,69,0.18); border-radius: 12px; padding: 12px 16px; }
.line-chart { display: block; max-width: 100%; }
"#;
