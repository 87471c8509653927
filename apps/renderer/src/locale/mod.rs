//! Locale support: long-form month names, the ongoing-entry label, and the
//! key-based message catalog used for section labels and template names.
//!
//! Lookup contract: `lookup(key)` returns the translated string, or the key
//! itself when unresolved. Callers that have their own fallback must treat
//! "value equals key" as "not translated" — `lookup_or` does exactly that.

// ────────────────────────────────────────────────────────────────────────────
// Locale
// ────────────────────────────────────────────────────────────────────────────

/// Supported display locales. Turkish is the product default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Tr,
    En,
}

const TR_MONTHS: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];

const EN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl Locale {
    /// Parses a locale tag (`tr`, `en`). Unknown tags fall back to Turkish.
    pub fn from_tag(tag: &str) -> Locale {
        match tag.to_ascii_lowercase().as_str() {
            "en" => Locale::En,
            _ => Locale::Tr,
        }
    }

    /// Long-form month name for a 1-based month number.
    pub fn month_name(&self, month: u32) -> &'static str {
        let table = match self {
            Locale::Tr => &TR_MONTHS,
            Locale::En => &EN_MONTHS,
        };
        table[((month.clamp(1, 12)) - 1) as usize]
    }

    /// Label substituted for the end date of an ongoing entry.
    pub fn ongoing(&self) -> &'static str {
        match self {
            Locale::Tr => "Devam ediyor",
            Locale::En => "Present",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Message catalog
// ────────────────────────────────────────────────────────────────────────────

const TR_MESSAGES: &[(&str, &str)] = &[
    ("cv.sections.summary", "Özet"),
    ("cv.sections.workExperience", "İş Deneyimi"),
    ("cv.sections.education", "Eğitim"),
    ("cv.sections.skills", "Yetenekler"),
    ("cv.sections.languages", "Diller"),
    ("cv.sections.certifications", "Sertifikalar"),
    ("cv.sections.projects", "Projeler"),
    ("cv.sections.references", "Referanslar"),
    ("cv.fields.credentialId", "Kimlik No"),
    ("cv.fields.expires", "Geçerlilik"),
    ("home.templates.items.modern.name", "Modern"),
    ("home.templates.items.classic.name", "Klasik"),
    ("home.templates.items.minimal.name", "Minimal"),
    ("home.templates.items.professional.name", "Profesyonel"),
    ("home.templates.items.executive.name", "Yönetici"),
    ("home.templates.items.clean.name", "Sade"),
    ("home.templates.items.elegant.name", "Zarif"),
    ("home.templates.items.corporate.name", "Kurumsal"),
    ("home.templates.items.technical.name", "Teknik"),
    ("home.templates.items.developer.name", "Yazılımcı"),
    ("home.templates.items.creative.name", "Yaratıcı"),
    ("home.templates.items.artistic.name", "Sanatsal"),
    ("home.templates.items.innovative.name", "Yenilikçi"),
    ("home.templates.items.portfolio.name", "Portfolyo"),
    ("home.templates.items.academic.name", "Akademik"),
    ("home.templates.items.scholar.name", "Akademisyen"),
];

const EN_MESSAGES: &[(&str, &str)] = &[
    ("cv.sections.summary", "Summary"),
    ("cv.sections.workExperience", "Work Experience"),
    ("cv.sections.education", "Education"),
    ("cv.sections.skills", "Skills"),
    ("cv.sections.languages", "Languages"),
    ("cv.sections.certifications", "Certifications"),
    ("cv.sections.projects", "Projects"),
    ("cv.sections.references", "References"),
    ("cv.fields.credentialId", "Credential ID"),
    ("cv.fields.expires", "Expires"),
    ("home.templates.items.modern.name", "Modern"),
    ("home.templates.items.classic.name", "Classic"),
    ("home.templates.items.minimal.name", "Minimal"),
    ("home.templates.items.professional.name", "Professional"),
    ("home.templates.items.executive.name", "Executive"),
    ("home.templates.items.clean.name", "Clean"),
    ("home.templates.items.elegant.name", "Elegant"),
    ("home.templates.items.corporate.name", "Corporate"),
    ("home.templates.items.technical.name", "Technical"),
    ("home.templates.items.developer.name", "Developer"),
    ("home.templates.items.creative.name", "Creative"),
    ("home.templates.items.artistic.name", "Artistic"),
    ("home.templates.items.innovative.name", "Innovative"),
    ("home.templates.items.portfolio.name", "Portfolio"),
    ("home.templates.items.academic.name", "Academic"),
    ("home.templates.items.scholar.name", "Scholar"),
];

/// Key-based message lookup for one locale.
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    pub fn new(locale: Locale) -> Messages {
        Messages { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    fn table(&self) -> &'static [(&'static str, &'static str)] {
        match self.locale {
            Locale::Tr => TR_MESSAGES,
            Locale::En => EN_MESSAGES,
        }
    }

    /// Resolves a message key; unresolved keys come back verbatim.
    pub fn lookup<'a>(&self, key: &'a str) -> &'a str {
        self.table()
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .unwrap_or(key)
    }

    /// Resolves a message key, falling back when the key is unresolved.
    ///
    /// Equivalent to calling `lookup` and treating "value equals key" as
    /// "not translated, use the provided fallback."
    pub fn lookup_or<'a>(&self, key: &str, fallback: &'a str) -> &'a str {
        match self.table().iter().find(|(k, _)| *k == key) {
            Some((_, value)) => value,
            None => fallback,
        }
    }
}

impl Default for Messages {
    fn default() -> Messages {
        Messages::new(Locale::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locale_is_turkish() {
        assert_eq!(Locale::default(), Locale::Tr);
        assert_eq!(Messages::default().locale(), Locale::Tr);
    }

    #[test]
    fn test_month_names() {
        assert_eq!(Locale::Tr.month_name(1), "Ocak");
        assert_eq!(Locale::Tr.month_name(12), "Aralık");
        assert_eq!(Locale::En.month_name(1), "January");
        assert_eq!(Locale::En.month_name(9), "September");
    }

    #[test]
    fn test_ongoing_label() {
        assert_eq!(Locale::Tr.ongoing(), "Devam ediyor");
        assert_eq!(Locale::En.ongoing(), "Present");
    }

    #[test]
    fn test_lookup_resolves_section_labels() {
        let tr = Messages::new(Locale::Tr);
        assert_eq!(tr.lookup("cv.sections.workExperience"), "İş Deneyimi");

        let en = Messages::new(Locale::En);
        assert_eq!(en.lookup("cv.sections.workExperience"), "Work Experience");
    }

    #[test]
    fn test_lookup_unresolved_returns_key() {
        let msgs = Messages::new(Locale::Tr);
        assert_eq!(msgs.lookup("cv.sections.doesNotExist"), "cv.sections.doesNotExist");
    }

    #[test]
    fn test_lookup_or_falls_back_on_key_equality() {
        let msgs = Messages::new(Locale::Tr);
        assert_eq!(msgs.lookup_or("no.such.key", "Fallback"), "Fallback");
        assert_eq!(
            msgs.lookup_or("home.templates.items.modern.name", "Fallback"),
            "Modern"
        );
    }

    #[test]
    fn test_from_tag() {
        assert_eq!(Locale::from_tag("en"), Locale::En);
        assert_eq!(Locale::from_tag("EN"), Locale::En);
        assert_eq!(Locale::from_tag("tr"), Locale::Tr);
        assert_eq!(Locale::from_tag("de"), Locale::Tr);
    }
}
