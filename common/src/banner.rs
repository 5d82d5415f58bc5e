#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    pub fn alert_class(self) -> &'static str {
        match self {
            BannerKind::Success => "alert-success",
            BannerKind::Error => "alert-danger",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            BannerKind::Success => "fa-check-circle",
            BannerKind::Error => "fa-exclamation-triangle",
        }
    }

    // only good news goes away on its own
    pub fn auto_dismiss(self) -> bool {
        self == BannerKind::Success
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
    pub generation: u64,
}

// holds at most one banner
//
// every banner gets a fresh generation number, so a dismiss timer armed for an older
// banner cannot remove the one that replaced it
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BannerSlot {
    current: Option<Banner>,
    generation: u64,
}

impl BannerSlot {
    pub fn show(&mut self, kind: BannerKind, message: impl Into<String>) -> u64 {
        self.generation += 1;
        self.current = Some(Banner {
            kind,
            message: message.into(),
            generation: self.generation,
        });
        self.generation
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    // returns whether anything was removed
    pub fn dismiss_generation(&mut self, generation: u64) -> bool {
        match &self.current {
            Some(banner) if banner.generation == generation => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Banner> {
        self.current.as_ref()
    }

    // a success banner is scrolled to once, the first time it shows up after
    // last_scrolled.  returns its generation so the caller can remember it
    pub fn pending_scroll(&self, last_scrolled: u64) -> Option<u64> {
        self.current
            .as_ref()
            .filter(|b| b.kind == BannerKind::Success && b.generation > last_scrolled)
            .map(|b| b.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_banner_replaces_older() {
        let mut slot = BannerSlot::default();

        slot.show(BannerKind::Error, "first");
        slot.show(BannerKind::Success, "second");

        let banner = slot.current().unwrap();
        assert_eq!(banner.message, "second");
        assert_eq!(banner.kind, BannerKind::Success);
    }

    #[test]
    fn stale_dismiss_keeps_newer_banner() {
        let mut slot = BannerSlot::default();

        let old = slot.show(BannerKind::Success, "sent");
        let new = slot.show(BannerKind::Error, "failed");

        assert!(!slot.dismiss_generation(old));
        assert_eq!(slot.current().unwrap().message, "failed");

        assert!(slot.dismiss_generation(new));
        assert!(slot.current().is_none());
    }

    #[test]
    fn only_success_auto_dismisses() {
        assert!(BannerKind::Success.auto_dismiss());
        assert!(!BannerKind::Error.auto_dismiss());
        assert_eq!(BannerKind::Error.alert_class(), "alert-danger");
    }

    #[test]
    fn success_is_scrolled_to_once() {
        let mut slot = BannerSlot::default();
        assert_eq!(slot.pending_scroll(0), None);

        let generation = slot.show(BannerKind::Success, "sent");
        assert_eq!(slot.pending_scroll(0), Some(generation));
        assert_eq!(slot.pending_scroll(generation), None);

        slot.show(BannerKind::Error, "failed");
        assert_eq!(slot.pending_scroll(generation), None);

        let next = slot.show(BannerKind::Success, "sent again");
        assert_eq!(slot.pending_scroll(generation), Some(next));
    }
}
