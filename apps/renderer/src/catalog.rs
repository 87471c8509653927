//! Template catalog: the metadata the picker and page chrome need for each
//! of the sixteen templates. Identifiers are persisted on CV records, so the
//! catalog may grow but existing entries never change id.

use crate::locale::Messages;
use crate::render::{Layout, TemplateId};

/// Picker metadata for one template.
#[derive(Debug, Clone, Copy)]
pub struct TemplateMeta {
    pub id: TemplateId,
    /// i18n key for the display name, `home.templates.items.<id>.name`.
    pub name_key: &'static str,
    /// Shown when the lookup resolves to the key itself (untranslated).
    pub fallback_name: &'static str,
}

pub static CATALOG: [TemplateMeta; 16] = [
    TemplateMeta {
        id: TemplateId::Modern,
        name_key: "home.templates.items.modern.name",
        fallback_name: "Modern",
    },
    TemplateMeta {
        id: TemplateId::Classic,
        name_key: "home.templates.items.classic.name",
        fallback_name: "Classic",
    },
    TemplateMeta {
        id: TemplateId::Minimal,
        name_key: "home.templates.items.minimal.name",
        fallback_name: "Minimal",
    },
    TemplateMeta {
        id: TemplateId::Professional,
        name_key: "home.templates.items.professional.name",
        fallback_name: "Professional",
    },
    TemplateMeta {
        id: TemplateId::Executive,
        name_key: "home.templates.items.executive.name",
        fallback_name: "Executive",
    },
    TemplateMeta {
        id: TemplateId::Clean,
        name_key: "home.templates.items.clean.name",
        fallback_name: "Clean",
    },
    TemplateMeta {
        id: TemplateId::Elegant,
        name_key: "home.templates.items.elegant.name",
        fallback_name: "Elegant",
    },
    TemplateMeta {
        id: TemplateId::Corporate,
        name_key: "home.templates.items.corporate.name",
        fallback_name: "Corporate",
    },
    TemplateMeta {
        id: TemplateId::Technical,
        name_key: "home.templates.items.technical.name",
        fallback_name: "Technical",
    },
    TemplateMeta {
        id: TemplateId::Developer,
        name_key: "home.templates.items.developer.name",
        fallback_name: "Developer",
    },
    TemplateMeta {
        id: TemplateId::Creative,
        name_key: "home.templates.items.creative.name",
        fallback_name: "Creative",
    },
    TemplateMeta {
        id: TemplateId::Artistic,
        name_key: "home.templates.items.artistic.name",
        fallback_name: "Artistic",
    },
    TemplateMeta {
        id: TemplateId::Innovative,
        name_key: "home.templates.items.innovative.name",
        fallback_name: "Innovative",
    },
    TemplateMeta {
        id: TemplateId::Portfolio,
        name_key: "home.templates.items.portfolio.name",
        fallback_name: "Portfolio",
    },
    TemplateMeta {
        id: TemplateId::Academic,
        name_key: "home.templates.items.academic.name",
        fallback_name: "Academic",
    },
    TemplateMeta {
        id: TemplateId::Scholar,
        name_key: "home.templates.items.scholar.name",
        fallback_name: "Scholar",
    },
];

/// Catalog entry for a template identifier.
pub fn entry(id: TemplateId) -> &'static TemplateMeta {
    // The catalog covers every variant, so the lookup always lands.
    CATALOG
        .iter()
        .find(|meta| meta.id == id)
        .unwrap_or(&CATALOG[0])
}

/// Translated display name, falling back to the catalog name when the
/// message lookup comes back untranslated.
pub fn display_name(id: TemplateId, messages: &Messages) -> &'static str {
    let meta = entry(id);
    messages.lookup_or(meta.name_key, meta.fallback_name)
}

/// The distinct layout a template resolves to, for grouping in the picker.
pub fn layout_of(id: TemplateId) -> Layout {
    id.layout()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{Locale, Messages};

    #[test]
    fn test_catalog_covers_every_identifier_once() {
        for id in TemplateId::ALL {
            assert_eq!(entry(id).id, id);
        }
        let mut keys: Vec<&str> = CATALOG.iter().map(|meta| meta.name_key).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 16);
    }

    #[test]
    fn test_display_name_translates_per_locale() {
        let tr = Messages::new(Locale::Tr);
        assert_eq!(display_name(TemplateId::Classic, &tr), "Klasik");
        assert_eq!(display_name(TemplateId::Developer, &tr), "Yazılımcı");

        let en = Messages::new(Locale::En);
        assert_eq!(display_name(TemplateId::Classic, &en), "Classic");
    }

    #[test]
    fn test_aliased_templates_share_a_layout() {
        assert_eq!(
            layout_of(TemplateId::Developer),
            layout_of(TemplateId::Technical)
        );
        assert_eq!(
            layout_of(TemplateId::Artistic),
            layout_of(TemplateId::Creative)
        );
        assert_eq!(
            layout_of(TemplateId::Innovative),
            layout_of(TemplateId::Creative)
        );
        assert_eq!(
            layout_of(TemplateId::Scholar),
            layout_of(TemplateId::Academic)
        );
    }
}
