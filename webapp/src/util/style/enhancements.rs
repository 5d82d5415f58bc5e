// styles backing the enhancement pass: ripple, navbar slide and the typing cursor
pub const ENHANCEMENTS: &str = r#"
.btn { position: relative; overflow: hidden; }
.ripple {
  position: absolute;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.4);
  transform: scale(0);
  animation: ripple-animation 0.6s linear;
  pointer-events: none;
}
@keyframes ripple-animation { to { transform: scale(4); opacity: 0; } }
.navbar, .app-header { transition: transform 0.3s ease; }
.typing-animation::after { content: '|'; animation: blink 1s infinite; }
@keyframes blink { 0%, 50% { opacity: 1; } 51%, 100% { opacity: 0; } }
"#;
