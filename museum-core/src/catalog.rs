//! Static exhibit catalog — the complete narrative dataset.
//!
//! The catalog is built by a hardcoded constructor rather than loaded from
//! a file: the exhibit content is fixed editorial material, and embedding
//! it keeps the binary self-contained. `validate()` checks the structural
//! invariants once at startup.

use crate::domain::{
    ContentEntry, ExhibitImage, Icon, KeyPoint, MapLocation, Section, SectionId, Tone,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("expected {expected} sections, found {found}")]
    SectionCount { expected: usize, found: usize },

    #[error("section {0} appears more than once")]
    DuplicateSection(SectionId),

    #[error("section {0} has no content entry")]
    MissingContent(SectionId),

    #[error("section {0} has no key points")]
    EmptyPoints(SectionId),

    #[error("location id {0:?} appears more than once")]
    DuplicateLocation(String),

    #[error("a location has an empty id")]
    EmptyLocationId,
}

/// The complete exhibit catalog: section cards, map locations, and the
/// narrative content keyed by section.
///
/// `contents` uses `BTreeMap` for deterministic iteration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub sections: Vec<Section>,
    pub locations: Vec<MapLocation>,
    pub contents: BTreeMap<SectionId, ContentEntry>,
}

impl Catalog {
    /// The narrative content for a section. Total: every section in the
    /// closed id set has an entry in a validated catalog.
    pub fn content(&self, id: SectionId) -> &ContentEntry {
        &self.contents[&id]
    }

    /// Quest assignment text for a section.
    pub fn quest_task(id: SectionId) -> &'static str {
        match id {
            SectionId::Ostrog => {
                "Найдите на карте Омской крепости место, где располагалась казарма №7. \
                 Запишите координаты в дневник исследователя."
            }
            SectionId::Sobor => {
                "Изучите описание иконостаса Воскресенского собора. \
                 Создайте коллаж с элементами храмовой архитектуры."
            }
            SectionId::Slovo => {
                "Выберите цитату из \"Записок из Мёртвого дома\" и свяжите её \
                 с конкретным местом в Омске. Подготовьте эссе."
            }
        }
    }

    /// Check structural invariants: one card per section id, content with
    /// at least one key point for every section, unique non-empty
    /// location ids.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.sections.len() != SectionId::ALL.len() {
            return Err(CatalogError::SectionCount {
                expected: SectionId::ALL.len(),
                found: self.sections.len(),
            });
        }
        for id in SectionId::ALL {
            if self.sections.iter().filter(|s| s.id == id).count() != 1 {
                return Err(CatalogError::DuplicateSection(id));
            }
            let entry = self.contents.get(&id).ok_or(CatalogError::MissingContent(id))?;
            if entry.points.is_empty() {
                return Err(CatalogError::EmptyPoints(id));
            }
        }
        let mut seen = std::collections::BTreeSet::new();
        for loc in &self.locations {
            if loc.id.is_empty() {
                return Err(CatalogError::EmptyLocationId);
            }
            if !seen.insert(loc.id.as_str()) {
                return Err(CatalogError::DuplicateLocation(loc.id.clone()));
            }
        }
        Ok(())
    }

    /// The Omsk exhibit: three halls, five map locations, full narrative.
    pub fn default_omsk() -> Self {
        let sections = vec![
            Section::new(
                SectionId::Ostrog,
                "Острог",
                "География несвободы",
                Icon::Shield,
                Tone::Crimson,
            ),
            Section::new(SectionId::Sobor, "Собор", "Оазис души", Icon::Church, Tone::Azure),
            Section::new(
                SectionId::Slovo,
                "Слово",
                "Побег в вечность",
                Icon::BookOpen,
                Tone::Violet,
            ),
        ];

        let mut contents = BTreeMap::new();

        contents.insert(
            SectionId::Ostrog,
            ContentEntry {
                quote: "«Эти четыре года я считаю за время, в которое я был похоронен \
                        заживо и закрыт в гробу»"
                    .into(),
                description: "Омская крепость стала местом каторги для Достоевского \
                              с 1850 по 1854 год. Здесь он познал глубины человеческого \
                              страдания."
                    .into(),
                image: None,
                points: vec![
                    KeyPoint::new("Острожный двор", "Место заключения каторжников", "1850-1854"),
                    KeyPoint::new("Казарма №7", "Жилище Достоевского в остроге", "1850"),
                    KeyPoint::new("Кузница", "Работа в кандалах", "1851-1853"),
                ],
            },
        );

        contents.insert(
            SectionId::Sobor,
            ContentEntry {
                quote: "«Я верю, что есть Бог и жизнь будущая. В этом всё моё упование»".into(),
                description: "Воскресенский военный собор был единственным местом духовного \
                              утешения. Здесь писатель находил силы для внутреннего \
                              возрождения."
                    .into(),
                image: Some(ExhibitImage {
                    url: "https://cdn.poehali.dev/files/f3abbce0-707e-4926-8e21-979354bb3078.png"
                        .into(),
                    caption: "Фрагмент арки Воскресенского собора с резьбой".into(),
                }),
                points: vec![
                    KeyPoint::new("Иконостас", "Художественное убранство собора", "1769"),
                    KeyPoint::new("Библиотека", "Собрание духовной литературы", "1840-е"),
                    KeyPoint::new(
                        "Церковные службы",
                        "Каждое воскресенье для каторжан",
                        "1850-1854",
                    ),
                ],
            },
        );

        contents.insert(
            SectionId::Slovo,
            ContentEntry {
                quote: "«Человек есть тайна. Её надо разгадать, и ежели будешь её разгадывать \
                        всю жизнь, то не говори, что потерял время»"
                    .into(),
                description: "Опыт каторги стал основой для великих произведений. Омск вошёл \
                              в вечность через литературу."
                    .into(),
                image: None,
                points: vec![
                    KeyPoint::new(
                        "«Записки из Мёртвого дома»",
                        "Документальная повесть о каторге",
                        "1860-1862",
                    ),
                    KeyPoint::new(
                        "«Преступление и наказание»",
                        "Философский роман о границах человека",
                        "1866",
                    ),
                    KeyPoint::new(
                        "«Братья Карамазовы»",
                        "Размышления о вере и страдании",
                        "1879-1880",
                    ),
                ],
            },
        );

        let locations = vec![
            MapLocation::new(
                "loc1",
                "Омская крепость (Острог)",
                "Место заключения Достоевского (1850-1854)",
                "54.9924° N, 73.3686° E",
                SectionId::Ostrog,
                Icon::Shield,
            ),
            MapLocation::new(
                "loc2",
                "Воскресенский военный собор",
                "Храм, который посещал писатель",
                "54.9945° N, 73.3698° E",
                SectionId::Sobor,
                Icon::Church,
            ),
            MapLocation::new(
                "loc3",
                "Дом коменданта",
                "Административный центр крепости",
                "54.9935° N, 73.3692° E",
                SectionId::Ostrog,
                Icon::Home,
            ),
            MapLocation::new(
                "loc4",
                "Литературный музей им. Достоевского",
                "Современный музей писателя",
                "54.9889° N, 73.3692° E",
                SectionId::Slovo,
                Icon::BookOpen,
            ),
            MapLocation::new(
                "loc5",
                "Иртышская набережная",
                "Место прогулок заключённых",
                "54.9950° N, 73.3710° E",
                SectionId::Ostrog,
                Icon::Waves,
            ),
        ];

        Self { sections, locations, contents }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_validates() {
        let c = Catalog::default_omsk();
        c.validate().unwrap();
    }

    #[test]
    fn default_catalog_has_three_sections_five_locations() {
        let c = Catalog::default_omsk();
        assert_eq!(c.sections.len(), 3);
        assert_eq!(c.locations.len(), 5);
    }

    #[test]
    fn every_section_has_three_points() {
        let c = Catalog::default_omsk();
        for id in SectionId::ALL {
            assert_eq!(c.content(id).points.len(), 3, "{id}");
        }
    }

    #[test]
    fn only_sobor_carries_an_image() {
        let c = Catalog::default_omsk();
        assert!(c.content(SectionId::Ostrog).image.is_none());
        assert!(c.content(SectionId::Sobor).image.is_some());
        assert!(c.content(SectionId::Slovo).image.is_none());
    }

    #[test]
    fn location_categories_stay_in_the_closed_set() {
        // The type makes this total; the assertion documents the tally.
        let c = Catalog::default_omsk();
        let ostrog = c.locations.iter().filter(|l| l.category == SectionId::Ostrog).count();
        assert_eq!(ostrog, 3);
    }

    #[test]
    fn quest_task_is_defined_for_every_section() {
        for id in SectionId::ALL {
            assert!(!Catalog::quest_task(id).is_empty());
        }
    }

    #[test]
    fn validate_rejects_duplicate_locations() {
        let mut c = Catalog::default_omsk();
        let dup = c.locations[0].clone();
        c.locations.push(dup);
        assert!(matches!(c.validate(), Err(CatalogError::DuplicateLocation(_))));
    }

    #[test]
    fn validate_rejects_missing_content() {
        let mut c = Catalog::default_omsk();
        c.contents.remove(&SectionId::Slovo);
        assert!(matches!(
            c.validate(),
            Err(CatalogError::MissingContent(SectionId::Slovo))
        ));
    }

    #[test]
    fn validate_rejects_empty_points() {
        let mut c = Catalog::default_omsk();
        if let Some(entry) = c.contents.get_mut(&SectionId::Sobor) {
            entry.points.clear();
        }
        assert!(matches!(
            c.validate(),
            Err(CatalogError::EmptyPoints(SectionId::Sobor))
        ));
    }

    #[test]
    fn catalog_serialization_roundtrip() {
        let c = Catalog::default_omsk();
        let json = serde_json::to_string(&c).unwrap();
        let back: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(c.sections, back.sections);
        assert_eq!(c.locations, back.locations);
    }
}
