// geometry and state for the cosmetic page effects
//
// the browser glue lives in the webapp; everything here is plain arithmetic so that it
// can be checked without a dom

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

// a ripple is a circle as wide as the larger side of the button, centred on the pointer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    pub fn at(rect: Rect, client_x: f64, client_y: f64) -> Self {
        let size = rect.width.max(rect.height);

        Ripple {
            size,
            left: client_x - rect.left - size / 2.0,
            top: client_y - rect.top - size / 2.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {}px; top: {}px;",
            self.left,
            self.top,
            size = self.size
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarVisibility {
    Shown,
    Hidden,
}

impl NavbarVisibility {
    pub fn transform(self) -> &'static str {
        match self {
            NavbarVisibility::Shown => "translateY(0)",
            NavbarVisibility::Hidden => "translateY(-100%)",
        }
    }
}

// hides the navbar while scrolling down past the threshold, shows it on any upward move
#[derive(Clone, Debug)]
pub struct ScrollTracker {
    last: f64,
    threshold: f64,
}

impl ScrollTracker {
    pub fn new(threshold: f64) -> Self {
        ScrollTracker {
            last: 0.0,
            threshold,
        }
    }

    pub fn update(&mut self, scroll_top: f64) -> NavbarVisibility {
        let visibility = if scroll_top > self.last && scroll_top > self.threshold {
            NavbarVisibility::Hidden
        } else {
            NavbarVisibility::Shown
        };

        self.last = scroll_top;
        visibility
    }
}

pub fn parallax_transform(scroll_top: f64, rate: f64) -> String {
    // adding zero folds -0 into 0 so the top of the page renders as 0px
    format!("translateY({}px)", scroll_top * rate + 0.0)
}

// styles for cards waiting to be revealed, and once they have been
pub const REVEAL_HIDDEN: (&str, &str) = ("translateY(30px)", "0");
pub const REVEAL_SHOWN: (&str, &str) = ("translateY(0)", "1");
pub const REVEAL_TRANSITION: &str = "all 0.6s ease";

// typewriter reveal, one character per tick
#[derive(Clone, Debug)]
pub struct TypingAnimator {
    chars: Vec<char>,
    shown: usize,
}

impl TypingAnimator {
    pub fn new(text: &str) -> Self {
        TypingAnimator {
            chars: text.chars().collect(),
            shown: 0,
        }
    }

    pub fn done(&self) -> bool {
        self.shown >= self.chars.len()
    }

    // the visible text after one more character, or None once everything is shown
    pub fn tick(&mut self) -> Option<String> {
        if self.done() {
            return None;
        }

        self.shown += 1;
        Some(self.chars[..self.shown].iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripple_uses_larger_side() {
        let rect = Rect {
            left: 10.0,
            top: 20.0,
            width: 120.0,
            height: 40.0,
        };

        let ripple = Ripple::at(rect, 70.0, 40.0);

        assert_eq!(ripple.size, 120.0);
        assert_eq!(ripple.left, 0.0);
        assert_eq!(ripple.top, -40.0);
        assert_eq!(
            ripple.style(),
            "width: 120px; height: 120px; left: 0px; top: -40px;"
        );
    }

    #[test]
    fn navbar_hides_only_scrolling_down_past_threshold() {
        let mut tracker = ScrollTracker::new(100.0);

        assert_eq!(tracker.update(50.0), NavbarVisibility::Shown);
        assert_eq!(tracker.update(150.0), NavbarVisibility::Hidden);
        assert_eq!(tracker.update(200.0), NavbarVisibility::Hidden);
        assert_eq!(tracker.update(180.0), NavbarVisibility::Shown);
        assert_eq!(tracker.update(180.0), NavbarVisibility::Shown);
        assert_eq!(NavbarVisibility::Hidden.transform(), "translateY(-100%)");
    }

    #[test]
    fn parallax_moves_at_negative_half_rate() {
        assert_eq!(parallax_transform(200.0, -0.5), "translateY(-100px)");
        assert_eq!(parallax_transform(0.0, -0.5), "translateY(0px)");
    }

    #[test]
    fn typing_reveals_one_char_per_tick() {
        let mut typing = TypingAnimator::new("Hé!");

        assert_eq!(typing.tick().as_deref(), Some("H"));
        assert_eq!(typing.tick().as_deref(), Some("Hé"));
        assert_eq!(typing.tick().as_deref(), Some("Hé!"));
        assert!(typing.done());
        assert_eq!(typing.tick(), None);
    }

    #[test]
    fn empty_typing_is_done() {
        assert!(TypingAnimator::new("").done());
    }
}
