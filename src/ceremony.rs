//! Ceremony content overlay
//!
//! Every template ships static section texts; the backend may hold a
//! richer version per ceremony type. Remote texts are merged over the
//! defaults by case-insensitive ceremony-type equality. A missing remote
//! text is normal, never an error.

use crate::api::CeremonyText;

/// A template's static section for one ceremony type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CeremonySection {
    pub ceremony_type: &'static str,
    pub title: &'static str,
    pub default_content: &'static str,
}

/// Sections every template renders, in display order.
pub const DEFAULT_SECTIONS: &[CeremonySection] = &[
    CeremonySection {
        ceremony_type: "religiosa",
        title: "Cerimônia Religiosa",
        default_content: "A cerimônia religiosa será realizada na presença de \
            familiares e amigos queridos. Aguardamos você para celebrar conosco.",
    },
    CeremonySection {
        ceremony_type: "festiva",
        title: "Festa",
        default_content: "Após a cerimônia, celebraremos com música, comida boa \
            e muita alegria. Venha dançar com a gente!",
    },
];

/// Resolve the content for one section: the remote text wins when its
/// ceremony type matches (case-insensitively), otherwise the static
/// default stands.
pub fn section_content(section: &CeremonySection, texts: &[CeremonyText]) -> String {
    texts
        .iter()
        .find(|t| t.ceremony_type.eq_ignore_ascii_case(section.ceremony_type))
        .map(|t| t.content.clone())
        .unwrap_or_else(|| section.default_content.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(ceremony_type: &str, content: &str) -> CeremonyText {
        CeremonyText {
            id: "ct-1".into(),
            ceremony_type: ceremony_type.into(),
            content: content.into(),
        }
    }

    #[test]
    fn remote_text_overrides_the_static_default() {
        let texts = vec![remote("religiosa", "Texto personalizado.")];
        assert_eq!(
            section_content(&DEFAULT_SECTIONS[0], &texts),
            "Texto personalizado."
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        let texts = vec![remote("RELIGIOSA", "Maiúsculas também valem.")];
        assert_eq!(
            section_content(&DEFAULT_SECTIONS[0], &texts),
            "Maiúsculas também valem."
        );
    }

    #[test]
    fn absence_means_the_static_default_not_an_error() {
        let texts = vec![remote("festiva", "Só a festa foi editada.")];
        assert_eq!(
            section_content(&DEFAULT_SECTIONS[0], &texts),
            DEFAULT_SECTIONS[0].default_content
        );
        assert_eq!(section_content(&DEFAULT_SECTIONS[1], &texts), "Só a festa foi editada.");
    }
}
