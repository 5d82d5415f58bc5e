pub const BASE_COMPONENTS: &str = r#"
/* Header and navigation */
.app-header {
  background-color: var(--surface);
  box-shadow: var(--shadow-sm);
  position: sticky;
  top: 0;
  z-index: 10;
}

.nav-container {
  display: flex;
  min-height: var(--header-height);
  align-items: center;
  justify-content: space-between;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.nav-links {
  display: flex;
  gap: var(--space-2);
}

.nav-link {
  color: var(--text-secondary);
  font-weight: 500;
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
  transition: color var(--transition-fast) var(--easing-standard),
  background-color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover {
  color: var(--text-primary);
  text-decoration: none;
}

.nav-link.active {
  color: var(--primary);
  background-color: rgba(59, 130, 246, 0.1);
}

.theme-toggle {
  background: none;
  border: 1px solid var(--border);
  border-radius: 9999px;
  color: var(--text-primary);
  width: 40px;
  height: 40px;
  cursor: pointer;
}

/* Content container */
#app-content {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: var(--space-6) var(--space-4);
  transition: opacity var(--transition-page) ease, transform var(--transition-page) ease;
}

#app-content.fading {
  opacity: 0;
  transform: translateY(20px);
}

.page-loading {
  display: flex;
  justify-content: center;
  align-items: center;
  min-height: 200px;
}

/* Cards */
.card {
  background-color: var(--surface);
  color: var(--text-primary);
  border-color: var(--border);
  box-shadow: var(--shadow-md);
}

/* Contact form */
.contact-form .form-control.is-invalid,
.contact-form .form-select.is-invalid {
  border-color: var(--error);
}

.contact-form .form-control.is-valid,
.contact-form .form-select.is-valid {
  border-color: var(--success);
}

.character-counter.text-warning small {
  font-weight: 600;
}

.btn-loading {
  cursor: progress;
}

.avatar-fallback {
  display: none;
}
"#;
