//! Global CSS styles for the portfolio page.
//!
//! Theme colors are CSS custom properties switched by the `data-theme`
//! attribute the core writes on the root element.

use super::colors::*;

/// Custom properties for both themes, generated from the palette
pub fn theme_variables() -> String {
    format!(
        r#"
:root, [data-theme="light"] {{
  --color-primary: {TEAL};
  --color-primary-glow: {TEAL_GLOW};
  --color-sun: {SUN};
  --color-danger: {DANGER};
  --color-warning: {WARNING};
  --color-info: {INFO};
  --color-background: {LIGHT_BACKGROUND};
  --color-surface: {LIGHT_SURFACE};
  --color-text: {LIGHT_TEXT};
  --color-text-muted: {LIGHT_TEXT_MUTED};
  --color-border: {LIGHT_BORDER};
}}

[data-theme="dark"] {{
  --color-background: {DARK_BACKGROUND};
  --color-surface: {DARK_SURFACE};
  --color-text: {DARK_TEXT};
  --color-text-muted: {DARK_TEXT_MUTED};
  --color-border: {DARK_BORDER};
}}
"#
    )
}

pub const GLOBAL_STYLES: &str = r#"
/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  overflow: hidden;
}

body {
  font-family: 'Inter', -apple-system, 'Segoe UI', Roboto, sans-serif;
  -webkit-font-smoothing: antialiased;
}

.page {
  position: fixed;
  inset: 0;
  overflow: hidden;
  outline: none;
  background: var(--color-background);
  color: var(--color-text);
  line-height: 1.6;
}

.page-scroll {
  will-change: transform;
}

.startup-error {
  padding: 2rem;
  color: var(--color-danger);
}

/* === Header === */
.header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: 80px;
  z-index: 100;
  backdrop-filter: blur(10px);
  border-bottom: 1px solid var(--color-border);
}

.nav {
  max-width: 1200px;
  height: 100%;
  margin: 0 auto;
  padding: 0 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.nav-logo {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--color-primary);
  text-decoration: none;
}

.nav-menu {
  display: flex;
  gap: 1.5rem;
  list-style: none;
}

.nav-link {
  color: var(--color-text);
  text-decoration: none;
  font-weight: 500;
  transition: color 150ms ease;
}

.nav-link:hover,
.nav-link.active {
  color: var(--color-primary);
}

.nav-link.active {
  border-bottom: 2px solid var(--color-primary);
}

.nav-actions {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.theme-toggle {
  width: 40px;
  height: 40px;
  border-radius: 50%;
  border: 1px solid var(--color-border);
  background: var(--color-surface);
  color: var(--color-text);
  cursor: pointer;
}

.nav-toggle {
  display: none;
  flex-direction: column;
  gap: 5px;
  background: none;
  border: none;
  cursor: pointer;
}

.nav-toggle span {
  display: block;
  width: 25px;
  height: 3px;
  background: var(--color-text);
  transition: all 300ms ease;
}

@media (max-width: 768px) {
  .nav-toggle {
    display: flex;
  }

  .nav-menu {
    position: fixed;
    top: 80px;
    left: -100%;
    width: 100%;
    flex-direction: column;
    padding: 2rem;
    background: var(--color-surface);
    transition: left 300ms ease;
  }

  .nav-menu.active {
    left: 0;
  }
}

/* === Sections === */
section {
  position: relative;
  overflow: hidden;
  padding: 100px 1.5rem 2rem;
}

.section-title {
  text-align: center;
  font-size: 2.25rem;
  margin-bottom: 2rem;
}

.experience-card,
.project-card,
.education-card,
.certification-item {
  max-width: 800px;
  height: 200px;
  margin: 0 auto 20px;
  padding: 1.5rem;
  border-radius: 12px;
  background: var(--color-surface);
  border: 1px solid var(--color-border);
}

/* === Hero === */
.hero {
  display: flex;
  align-items: center;
  justify-content: center;
  text-align: center;
}

.particles {
  position: absolute;
  inset: 0;
  pointer-events: none;
}

.particle {
  position: absolute;
  border-radius: 50%;
  background: var(--color-primary);
  opacity: 0.5;
  animation-name: float;
  animation-iteration-count: infinite;
  animation-timing-function: ease-in-out;
}

@keyframes float {
  0%, 100% { transform: translateY(0); opacity: 0.5; }
  50% { transform: translateY(-30px); opacity: 1; }
}

.hero-content {
  position: relative;
  z-index: 1;
}

.profile-photo-container {
  width: 200px;
  height: 200px;
  margin: 0 auto 1.5rem;
  border-radius: 50%;
  overflow: hidden;
  border: 4px solid var(--color-primary);
  box-shadow: 0 0 30px var(--color-primary-glow);
  transform: scale(0.9);
  opacity: 0.6;
  transition: all 600ms ease;
}

.profile-photo-container.loaded {
  opacity: 1;
}

.profile-photo-container.animate-in {
  transform: scale(1);
}

.profile-photo {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.profile-placeholder {
  width: 100%;
  height: 100%;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  background: linear-gradient(135deg, var(--color-primary), var(--color-info));
  color: white;
}

.placeholder-icon {
  font-size: 3rem;
}

.placeholder-text {
  font-size: 1.5rem;
  font-weight: 700;
}

.hero-title {
  font-size: 3rem;
}

.hero-subtitle {
  font-size: 1.5rem;
  color: var(--color-text-muted);
}

.typewriter {
  color: var(--color-primary);
  border-right: 2px solid var(--color-primary);
  padding-right: 2px;
}

.hero-tagline {
  margin: 1rem 0 2rem;
}

.hero-actions {
  display: flex;
  gap: 1rem;
  justify-content: center;
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.75rem 1.5rem;
  border-radius: 8px;
  font-weight: 600;
  font-size: 1rem;
  text-decoration: none;
  cursor: pointer;
  transition: all 150ms ease;
}

.btn--primary {
  background: var(--color-primary);
  color: white;
  border: 2px solid var(--color-primary);
}

.btn--outline {
  background: transparent;
  color: var(--color-primary);
  border: 2px solid var(--color-primary);
}

.btn:disabled,
.btn.loading {
  opacity: 0.7;
  cursor: not-allowed;
}

/* === Skills === */
.skills-grid {
  max-width: 800px;
  margin: 0 auto;
}

.skill-item {
  height: 40px;
  margin-bottom: 20px;
}

.skill-header {
  display: flex;
  justify-content: space-between;
  font-size: 0.875rem;
}

.skill-bar {
  height: 8px;
  border-radius: 4px;
  background: var(--color-border);
  overflow: hidden;
}

.skill-progress {
  width: 0;
  height: 100%;
  background: var(--color-primary);
  transition: width 1.5s ease;
}

/* === Contact === */
.contact-form {
  max-width: 600px;
  margin: 0 auto;
}

.form-group {
  margin-bottom: 1rem;
}

.form-label {
  display: block;
  margin-bottom: 0.25rem;
  font-weight: 500;
}

.form-control {
  width: 100%;
  padding: 0.75rem;
  border-radius: 8px;
  border: 1px solid var(--color-border);
  background: var(--color-surface);
  color: var(--color-text);
  font: inherit;
}

textarea.form-control {
  min-height: 120px;
  resize: vertical;
}

/* === Entrance animations === */
.fade-in {
  opacity: 0;
  transform: translateY(30px);
  transition: opacity 600ms ease, transform 600ms ease;
}

.fade-in.visible {
  opacity: 1;
  transform: translateY(0);
}

/* === Footer === */
.footer {
  height: 100px;
  display: flex;
  align-items: center;
  justify-content: center;
  border-top: 1px solid var(--color-border);
  color: var(--color-text-muted);
}

.back-to-top {
  position: fixed;
  right: 2rem;
  bottom: 2rem;
  width: 48px;
  height: 48px;
  border-radius: 50%;
  border: none;
  background: var(--color-primary);
  color: white;
  cursor: pointer;
  opacity: 0;
  visibility: hidden;
  transition: all 300ms ease;
  z-index: 90;
}

.back-to-top.visible {
  opacity: 1;
  visibility: visible;
}

/* === Notifications === */
.notification {
  position: fixed;
  top: 100px;
  right: 20px;
  z-index: 1000;
  max-width: 400px;
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 1rem 1.25rem;
  border-radius: 8px;
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.2);
  transition: transform 300ms ease;
  cursor: pointer;
}

.notification-close {
  background: none;
  border: none;
  color: inherit;
  opacity: 0.7;
  cursor: pointer;
}
"#;
