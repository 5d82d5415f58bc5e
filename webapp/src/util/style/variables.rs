pub const CSS_VARIABLES: &str = r#"
:root {
  /* palette */
  --primary: #4F46E5;
  --success: #059669;
  --error: #DC2626;

  --background: #F8FAFC;
  --surface: #FFFFFF;
  --text-primary: #0F172A;
  --text-secondary: #475569;
  --border: #E2E8F0;

  /* layout */
  --header-height: 60px;
  --container-width: 1120px;

  --space-2: 0.5rem;
  --space-3: 0.75rem;
  --space-4: 1rem;
  --space-6: 1.5rem;

  --radius-md: 0.5rem;
  --shadow-sm: 0 1px 3px rgba(15, 23, 42, 0.08);
  --shadow-md: 0 6px 16px rgba(15, 23, 42, 0.12);

  /* motion */
  --transition-fast: 150ms;
  --transition-page: 200ms;
  --easing-standard: cubic-bezier(0.25, 0.1, 0.25, 1);
}

/* the theme toggle flips this class on <body> */
body.dark-mode {
  --primary: #818CF8;
  --background: #0B1120;
  --surface: #172033;
  --text-primary: #E2E8F0;
  --text-secondary: #94A3B8;
  --border: #26324A;
  --shadow-md: 0 6px 16px rgba(0, 0, 0, 0.45);
}
"#;
