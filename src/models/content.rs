use serde::{Deserialize, Serialize};

/// The content document served by `GET /content`.
///
/// Always replaced wholesale; never merged field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub contacts: Contacts,
    pub packages: Packages,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contacts {
    pub email: String,
    pub phones: Vec<String>,
    pub address: String,
    pub social: Social,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Social {
    pub instagram: String,
    pub telegram: String,
    pub vk: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Packages {
    pub b2c: Vec<Package>,
    pub b2b: Vec<Package>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub popular: bool,
    #[serde(
        rename = "freeLesson",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub free_lesson: Option<bool>,
}

/// Which of the two package lists an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageSegment {
    /// Families and individual learners.
    B2c,
    /// Organisations.
    B2b,
}

impl PackageSegment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::B2c => "b2c",
            Self::B2b => "b2b",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::B2c => "B2C - Для семей и детей",
            Self::B2b => "B2B - Для организаций",
        }
    }
}

impl std::fmt::Display for PackageSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Packages {
    pub fn segment(&self, segment: PackageSegment) -> &[Package] {
        match segment {
            PackageSegment::B2c => &self.b2c,
            PackageSegment::B2b => &self.b2b,
        }
    }

    pub fn segment_mut(&mut self, segment: PackageSegment) -> &mut Vec<Package> {
        match segment {
            PackageSegment::B2c => &mut self.b2c,
            PackageSegment::B2b => &mut self.b2b,
        }
    }

    /// Returns a copy with one list swapped out.
    pub fn with_segment(&self, segment: PackageSegment, items: Vec<Package>) -> Self {
        let mut next = self.clone();
        *next.segment_mut(segment) = items;
        next
    }
}

/// Next free id inside one package list. Ids are only unique per list.
///
/// Saturates at `i64::MAX` rather than overflowing.
pub fn next_package_id(items: &[Package]) -> i64 {
    items
        .iter()
        .map(|p| p.id)
        .max()
        .unwrap_or(0)
        .saturating_add(1)
}

impl Contacts {
    /// Phone number formatted for a `tel:` link.
    pub fn tel_href(phone: &str) -> String {
        let digits: String = phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{digits}")
    }
}

fn package(id: i64, name: &str, description: &str, features: &[&str], popular: bool) -> Package {
    Package {
        id,
        name: name.to_string(),
        description: description.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
        popular,
        free_lesson: None,
    }
}

impl SiteContent {
    /// Built-in document shown whenever the backend cannot be reached.
    pub fn fallback() -> Self {
        let with_free_lesson = |p: Package| Package {
            free_lesson: Some(true),
            ..p
        };

        Self {
            contacts: Contacts {
                email: "silisykt@mail.ru".to_string(),
                phones: vec!["8 914 287 0753".to_string(), "8 964 076 7660".to_string()],
                address: "г. Якутск, ул. Лермонтова 47, ТЦ НОРД, 4 этаж".to_string(),
                social: Social {
                    instagram: "silis_school".to_string(),
                    telegram: "https://t.me/silisschool".to_string(),
                    vk: "https://vk.com/siliscenter".to_string(),
                },
            },
            packages: Packages {
                b2c: vec![
                    with_free_lesson(package(
                        1,
                        "Интенсивы",
                        "Быстрое погружение в язык",
                        &[
                            "Групповые занятия 3 раза в неделю",
                            "Разговорная практика",
                            "Домашние задания",
                            "Поддержка преподавателя",
                        ],
                        false,
                    )),
                    with_free_lesson(package(
                        2,
                        "Частные занятия",
                        "Индивидуальный подход",
                        &[
                            "Персональный преподаватель",
                            "Гибкий график",
                            "Индивидуальная программа",
                            "Быстрый прогресс",
                        ],
                        true,
                    )),
                    with_free_lesson(package(
                        3,
                        "Вебинары",
                        "Онлайн обучение",
                        &[
                            "Доступ из любой точки мира",
                            "Записи занятий",
                            "Интерактивные материалы",
                            "Сертификат участника",
                        ],
                        false,
                    )),
                ],
                b2b: vec![
                    package(
                        1,
                        "Старт",
                        "Базовое сопровождение",
                        &[
                            "Консультация специалиста",
                            "Базовый перевод документов",
                            "Email поддержка",
                        ],
                        false,
                    ),
                    package(
                        2,
                        "Стандарт",
                        "Комплексное сопровождение",
                        &[
                            "Все из пакета Старт",
                            "Деловые тренинги",
                            "Телефонная поддержка",
                            "Культурное консультирование",
                        ],
                        true,
                    ),
                    package(
                        3,
                        "Премиум",
                        "Полное сопровождение",
                        &[
                            "Все из пакета Стандарт",
                            "Персональный менеджер",
                            "Срочные переводы",
                            "Выездные тренинги",
                        ],
                        false,
                    ),
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_complete() {
        let content = SiteContent::fallback();
        assert_eq!(content.packages.b2c.len(), 3);
        assert_eq!(content.packages.b2b.len(), 3);
        assert_eq!(content.contacts.phones.len(), 2);
        assert!(content.packages.b2c.iter().all(|p| p.free_lesson == Some(true)));
        assert!(content.packages.b2b.iter().all(|p| p.free_lesson.is_none()));
    }

    #[test]
    fn absent_contact_fields_decode_empty() {
        let json = r#"{
            "contacts": {"email": "a@b.c", "address": "x", "social": {"vk": "v"}},
            "packages": {"b2c": [], "b2b": []}
        }"#;
        let content: SiteContent = serde_json::from_str(json).unwrap();
        assert!(content.contacts.phones.is_empty());
        assert_eq!(content.contacts.social.instagram, "");
        assert_eq!(content.contacts.social.vk, "v");
    }

    #[test]
    fn missing_packages_is_malformed() {
        let json = r#"{"contacts": {"email": "a@b.c"}}"#;
        assert!(serde_json::from_str::<SiteContent>(json).is_err());
    }

    #[test]
    fn free_lesson_uses_camel_case_on_the_wire() {
        let pkg: Package =
            serde_json::from_str(r#"{"id": 4, "name": "n", "freeLesson": true}"#).unwrap();
        assert_eq!(pkg.free_lesson, Some(true));

        let json = serde_json::to_value(&pkg).unwrap();
        assert_eq!(json["freeLesson"], true);
    }

    #[test]
    fn next_id_is_per_list() {
        let content = SiteContent::fallback();
        assert_eq!(next_package_id(&content.packages.b2b), 4);
        assert_eq!(next_package_id(&[]), 1);
    }

    #[test]
    fn next_id_saturates_at_max() {
        let items = [Package {
            id: i64::MAX,
            ..Package::default()
        }];
        assert_eq!(next_package_id(&items), i64::MAX);
    }

    #[test]
    fn tel_href_keeps_digits_only() {
        assert_eq!(Contacts::tel_href("8 914 287-07-53"), "tel:89142870753");
        assert_eq!(Contacts::tel_href("+7 (900) 1"), "tel:+79001");
    }
}
