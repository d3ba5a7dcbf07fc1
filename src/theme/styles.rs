//! Global CSS styles for the autobiography page.
//!
//! Only what the gallery grid and the lightbox overlay need.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --purple: #6a0dad;
  --purple-glow: rgba(106, 13, 173, 0.35);
  --ink: #333333;
  --paper: #faf7fc;
  --overlay: rgba(0, 0, 0, 0.92);

  --font-serif: Georgia, 'Times New Roman', serif;
  --font-sans: 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;

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
  font-family: var(--font-sans);
  background: var(--paper);
  color: var(--ink);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Page === */
.page {
  max-width: 1100px;
  margin: 0 auto;
  padding: 3rem 1.5rem;
}

.page-title {
  font-family: var(--font-serif);
  font-size: 2.5rem;
  color: var(--purple);
}

.page-tagline {
  font-style: italic;
  opacity: 0.8;
}

.section {
  margin-top: 3rem;
}

.section-header {
  font-family: var(--font-serif);
  font-size: 1.75rem;
  margin-bottom: 1.25rem;
}

/* === Gallery === */
.gallery {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
  gap: 1rem;
}

.gallery__img {
  width: 100%;
  aspect-ratio: 4 / 3;
  object-fit: cover;
  border-radius: 8px;
  cursor: pointer;
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.gallery__img:hover {
  transform: scale(1.03);
  box-shadow: 0 8px 24px var(--purple-glow);
}

/* === Lightbox === */
.lightbox {
  position: fixed;
  inset: 0;
  z-index: 2000;
  background: var(--overlay);
  flex-direction: column;
  align-items: center;
  justify-content: center;
  animation: lightbox-fade 300ms ease-out;
}

@keyframes lightbox-fade {
  from { opacity: 0; }
  to { opacity: 1; }
}

.lightbox-content {
  max-width: 90%;
  max-height: 80vh;
  border-radius: 4px;
  box-shadow: 0 0 40px rgba(0, 0, 0, 0.6);
}

.lightbox-caption {
  margin-top: 1rem;
  color: #f0f0f0;
  text-align: center;
  display: flex;
  gap: 1rem;
  align-items: baseline;
}

.lightbox-counter {
  font-size: 0.85rem;
  opacity: 0.6;
}

.icon-btn {
  background: none;
  border: none;
  color: #f0f0f0;
  cursor: pointer;
  transition: color var(--transition-fast);
}

.icon-btn:hover {
  color: var(--purple);
}

.close-lightbox {
  position: absolute;
  top: 1.25rem;
  right: 2rem;
  font-size: 2.75rem;
  line-height: 1;
}

.lightbox-nav {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  font-size: 2.5rem;
  padding: 1rem;
}

.lightbox-nav.prev { left: 1rem; }
.lightbox-nav.next { right: 1rem; }

@media (max-width: 768px) {
  .lightbox-nav { font-size: 1.75rem; padding: 0.5rem; }
  .close-lightbox { right: 1rem; }
}
"#;
