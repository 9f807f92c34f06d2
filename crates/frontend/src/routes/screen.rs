use once_cell::sync::Lazy;

/// Экран панели; активный экран хранится в сигнале и выбирается из меню
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Applications,
    Jobs,
    JobForms,
    Categories,
    Statuses,
    Moderators,
}

/// Описание пункта меню
pub struct ScreenEntry {
    pub screen: Screen,
    pub label: &'static str,
    pub admin_only: bool,
}

/// Реестр экранов в порядке отображения в меню
pub static SCREEN_REGISTRY: Lazy<Vec<ScreenEntry>> = Lazy::new(|| {
    vec![
        ScreenEntry {
            screen: Screen::Applications,
            label: "Отклики",
            admin_only: false,
        },
        ScreenEntry {
            screen: Screen::Jobs,
            label: "Вакансии",
            admin_only: false,
        },
        ScreenEntry {
            screen: Screen::JobForms,
            label: "Анкеты",
            admin_only: false,
        },
        ScreenEntry {
            screen: Screen::Categories,
            label: "Категории",
            admin_only: true,
        },
        ScreenEntry {
            screen: Screen::Statuses,
            label: "Статусы",
            admin_only: true,
        },
        ScreenEntry {
            screen: Screen::Moderators,
            label: "Модераторы",
            admin_only: true,
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_each_screen_once() {
        let screens: Vec<Screen> = SCREEN_REGISTRY.iter().map(|e| e.screen).collect();
        assert_eq!(screens.len(), 6);
        for (i, screen) in screens.iter().enumerate() {
            assert!(!screens[..i].contains(screen));
        }
        assert!(screens.contains(&Screen::default()));
    }

    #[test]
    fn test_directories_are_admin_only() {
        for entry in SCREEN_REGISTRY.iter() {
            let expected = matches!(
                entry.screen,
                Screen::Categories | Screen::Statuses | Screen::Moderators
            );
            assert_eq!(entry.admin_only, expected, "{}", entry.label);
        }
    }
}
