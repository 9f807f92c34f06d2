use serde::{Deserialize, Serialize};

/// Роли сотрудников панели администрирования
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "HR")]
    Hr,
    #[serde(rename = "MODERATOR")]
    Moderator,
    #[serde(rename = "SOCIAL_MEDIA_MANAGER")]
    SocialMediaManager,
}

impl Role {
    /// Получить код роли (как хранится на сервере)
    pub fn code(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Hr => "HR",
            Role::Moderator => "MODERATOR",
            Role::SocialMediaManager => "SOCIAL_MEDIA_MANAGER",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Администратор",
            Role::Hr => "HR",
            Role::Moderator => "Модератор",
            Role::SocialMediaManager => "SMM-менеджер",
        }
    }

    /// Получить все роли
    pub fn all() -> Vec<Role> {
        vec![
            Role::Admin,
            Role::Hr,
            Role::Moderator,
            Role::SocialMediaManager,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ADMIN" => Some(Role::Admin),
            "HR" => Some(Role::Hr),
            "MODERATOR" => Some(Role::Moderator),
            "SOCIAL_MEDIA_MANAGER" => Some(Role::SocialMediaManager),
            _ => None,
        }
    }

    /// Полный доступ ко всем разделам панели
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for role in Role::all() {
            assert_eq!(Role::from_code(role.code()), Some(role));
        }
        assert_eq!(Role::from_code("GUEST"), None);
    }

    #[test]
    fn test_serde_uses_wire_codes() {
        let json = serde_json::to_string(&Role::SocialMediaManager).unwrap();
        assert_eq!(json, "\"SOCIAL_MEDIA_MANAGER\"");
        let role: Role = serde_json::from_str("\"HR\"").unwrap();
        assert_eq!(role, Role::Hr);
    }
}
