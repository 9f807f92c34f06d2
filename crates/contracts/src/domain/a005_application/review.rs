use super::aggregate::Application;
use crate::enums::Role;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

/// Рецензентские поля отклика
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewField {
    ShortListStatus,
    CalStatus,
    Mailed,
    Designation,
    TestResult,
    Level,
    Profile,
    HiringType,
    InternShipProbationSalary,
    FinalSalary,
    HiringStatus,
    Joining,
    Comment,
}

impl ReviewField {
    pub fn all() -> Vec<ReviewField> {
        vec![
            ReviewField::ShortListStatus,
            ReviewField::CalStatus,
            ReviewField::Mailed,
            ReviewField::Designation,
            ReviewField::TestResult,
            ReviewField::Level,
            ReviewField::Profile,
            ReviewField::HiringType,
            ReviewField::InternShipProbationSalary,
            ReviewField::FinalSalary,
            ReviewField::HiringStatus,
            ReviewField::Joining,
            ReviewField::Comment,
        ]
    }

    /// Имя поля на сервере
    pub fn wire_name(&self) -> &'static str {
        match self {
            ReviewField::ShortListStatus => "shortListStatus",
            ReviewField::CalStatus => "calStatus",
            ReviewField::Mailed => "mailed",
            ReviewField::Designation => "designation",
            ReviewField::TestResult => "testResult",
            ReviewField::Level => "level",
            ReviewField::Profile => "profile",
            ReviewField::HiringType => "hiringType",
            ReviewField::InternShipProbationSalary => "internShipProbationSalary",
            ReviewField::FinalSalary => "finalSalary",
            ReviewField::HiringStatus => "hiringStatus",
            ReviewField::Joining => "joining",
            ReviewField::Comment => "comment",
        }
    }

    /// Таблица прав: кто может менять поле. Единственный источник истины —
    /// по ней рендерер включает контролы, а отправка закрепляет чужие поля.
    pub fn editable_by(&self, role: Role) -> bool {
        use Role::*;
        match self {
            ReviewField::ShortListStatus
            | ReviewField::Designation
            | ReviewField::TestResult
            | ReviewField::Level
            | ReviewField::Profile
            | ReviewField::HiringType
            | ReviewField::InternShipProbationSalary
            | ReviewField::FinalSalary
            | ReviewField::Joining => matches!(role, Admin | Moderator),
            ReviewField::CalStatus | ReviewField::Mailed => {
                matches!(role, Admin | Moderator | SocialMediaManager)
            }
            ReviewField::HiringStatus => matches!(role, Admin | Hr),
            ReviewField::Comment => true,
        }
    }
}

/// Полный патч отклика: сервер заменяет запись целиком, поэтому в патче
/// присутствует каждое рецензентское поле
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPatch {
    pub short_list_status: String,
    pub cal_status: String,
    pub mailed: String,
    pub designation: String,
    pub test_result: String,
    pub level: String,
    pub profile: String,
    pub hiring_type: String,
    pub intern_ship_probation_salary: String,
    pub final_salary: String,
    pub hiring_status: String,
    pub joining: Option<String>,
    pub comment: String,
    pub comment_id: Option<Uuid>,
}

impl ReviewPatch {
    /// Стартовый патч из текущего состояния записи — с него начинается
    /// редактирование строки
    pub fn from_application(application: &Application) -> Self {
        Self {
            short_list_status: application.short_list_status.clone(),
            cal_status: application.cal_status.clone(),
            mailed: application.mailed.clone(),
            designation: application.designation.clone(),
            test_result: application.test_result.clone(),
            level: application.level.clone(),
            profile: application.profile.clone(),
            hiring_type: application.hiring_type.clone(),
            intern_ship_probation_salary: application.intern_ship_probation_salary.clone(),
            final_salary: application.final_salary.clone(),
            hiring_status: application.hiring_status.clone(),
            joining: application.joining.clone(),
            comment: application
                .comment
                .as_ref()
                .map(|c| c.text.clone())
                .unwrap_or_default(),
            comment_id: application.comment.as_ref().map(|c| c.id),
        }
    }
}

/// Авторизовать правку: поля вне прав роли закрепляются текущими серверными
/// значениями — молча, без ошибки, поскольку UI и так прячет их контролы.
/// Комментарий включается всегда вместе с id существующего комментария.
pub fn authorize_edit(role: Role, current: &Application, proposed: &ReviewPatch) -> ReviewPatch {
    let mut patch = proposed.clone();

    for field in ReviewField::all() {
        if field.editable_by(role) {
            continue;
        }
        match field {
            ReviewField::ShortListStatus => {
                patch.short_list_status = current.short_list_status.clone()
            }
            ReviewField::CalStatus => patch.cal_status = current.cal_status.clone(),
            ReviewField::Mailed => patch.mailed = current.mailed.clone(),
            ReviewField::Designation => patch.designation = current.designation.clone(),
            ReviewField::TestResult => patch.test_result = current.test_result.clone(),
            ReviewField::Level => patch.level = current.level.clone(),
            ReviewField::Profile => patch.profile = current.profile.clone(),
            ReviewField::HiringType => patch.hiring_type = current.hiring_type.clone(),
            ReviewField::InternShipProbationSalary => {
                patch.intern_ship_probation_salary =
                    current.intern_ship_probation_salary.clone()
            }
            ReviewField::FinalSalary => patch.final_salary = current.final_salary.clone(),
            ReviewField::HiringStatus => patch.hiring_status = current.hiring_status.clone(),
            ReviewField::Joining => patch.joining = current.joining.clone(),
            ReviewField::Comment => {}
        }
    }

    patch.comment_id = current.comment.as_ref().map(|c| c.id);
    patch.joining = normalize_joining(patch.joining.take());
    patch
}

/// Дата выхода приводится к формату даты без времени; пустое значение — null
fn normalize_joining(joining: Option<String>) -> Option<String> {
    let raw = joining?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let date_part = trimmed.split('T').next().unwrap_or(trimmed);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => Some(date.format("%Y-%m-%d").to_string()),
        // нераспознанное значение пропускаем как есть, дальше проверит сервер
        Err(_) => Some(trimmed.to_string()),
    }
}

fn is_filled(value: &str) -> bool {
    !value.trim().is_empty() && value != "NONE"
}

/// Показатель заполненности: сколько рецензентских полей уже заполнено,
/// плюс один за непустой комментарий. Используется только для сортировки.
pub fn completeness_score(application: &Application) -> usize {
    let mut score = [
        &application.short_list_status,
        &application.cal_status,
        &application.mailed,
        &application.designation,
        &application.test_result,
        &application.level,
        &application.profile,
        &application.hiring_type,
        &application.intern_ship_probation_salary,
        &application.final_salary,
        &application.hiring_status,
    ]
    .iter()
    .filter(|value| is_filled(value))
    .count();

    if application
        .joining
        .as_deref()
        .map(is_filled)
        .unwrap_or(false)
    {
        score += 1;
    }
    if application
        .comment
        .as_ref()
        .map(|c| !c.text.trim().is_empty())
        .unwrap_or(false)
    {
        score += 1;
    }
    score
}

/// Порядок списка откликов: свежие правки вверху (без отметки времени —
/// в самом низу), при равенстве — более заполненные записи первыми
pub fn sort_for_review(applications: &mut [Application]) {
    applications.sort_by(|a, b| match b.updated_at.cmp(&a.updated_at) {
        Ordering::Equal => completeness_score(b).cmp(&completeness_score(a)),
        other => other,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_application::aggregate::{ApplicationId, ReviewComment};
    use chrono::{TimeZone, Utc};

    fn blank_application() -> Application {
        Application {
            id: ApplicationId::new(Uuid::new_v4()),
            job_id: None,
            applicant_name: "Иван Петров".to_string(),
            email: "ivan@example.com".to_string(),
            phone: None,
            short_list_status: "NONE".to_string(),
            cal_status: "NONE".to_string(),
            mailed: "NONE".to_string(),
            designation: "NONE".to_string(),
            test_result: "NONE".to_string(),
            level: "NONE".to_string(),
            profile: "NONE".to_string(),
            hiring_type: "NONE".to_string(),
            intern_ship_probation_salary: "NONE".to_string(),
            final_salary: "NONE".to_string(),
            hiring_status: "NONE".to_string(),
            joining: None,
            comment: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_permission_table_matches_matrix() {
        use ReviewField::*;
        // колонка HR из таблицы прав
        assert!(!ShortListStatus.editable_by(Role::Hr));
        assert!(HiringStatus.editable_by(Role::Hr));
        assert!(Comment.editable_by(Role::Hr));
        assert!(!FinalSalary.editable_by(Role::Hr));
        // SMM меняет только calStatus, mailed и комментарий
        for field in ReviewField::all() {
            let expected = matches!(field, CalStatus | Mailed | Comment);
            assert_eq!(field.editable_by(Role::SocialMediaManager), expected);
        }
        // администратору доступно всё, модератору всё кроме hiringStatus
        for field in ReviewField::all() {
            assert!(field.editable_by(Role::Admin));
            assert_eq!(
                field.editable_by(Role::Moderator),
                !matches!(field, HiringStatus)
            );
        }
    }

    #[test]
    fn test_hr_edit_pins_foreign_fields() {
        let mut current = blank_application();
        current.short_list_status = "SELECTED".to_string();

        let mut proposed = ReviewPatch::from_application(&current);
        proposed.short_list_status = "REJECTED".to_string();
        proposed.hiring_status = "HIRED".to_string();

        let patch = authorize_edit(Role::Hr, &current, &proposed);

        // чужое поле закреплено текущим значением, своё — изменено
        assert_eq!(patch.short_list_status, "SELECTED");
        assert_eq!(patch.hiring_status, "HIRED");
    }

    #[test]
    fn test_comment_id_taken_from_current_record() {
        let comment_id = Uuid::new_v4();
        let mut current = blank_application();
        current.comment = Some(ReviewComment {
            id: comment_id,
            text: "старый текст".to_string(),
        });

        let mut proposed = ReviewPatch::from_application(&current);
        proposed.comment = "новый текст".to_string();
        proposed.comment_id = None;

        let patch = authorize_edit(Role::SocialMediaManager, &current, &proposed);
        assert_eq!(patch.comment, "новый текст");
        assert_eq!(patch.comment_id, Some(comment_id));

        let without_comment = blank_application();
        let patch = authorize_edit(Role::Admin, &without_comment, &proposed);
        assert_eq!(patch.comment_id, None);
    }

    #[test]
    fn test_joining_normalization() {
        let current = blank_application();
        let mut proposed = ReviewPatch::from_application(&current);

        proposed.joining = Some("2026-09-01T10:30:00Z".to_string());
        let patch = authorize_edit(Role::Admin, &current, &proposed);
        assert_eq!(patch.joining.as_deref(), Some("2026-09-01"));

        proposed.joining = Some("   ".to_string());
        let patch = authorize_edit(Role::Admin, &current, &proposed);
        assert_eq!(patch.joining, None);
    }

    #[test]
    fn test_completeness_score_counts_filled_fields_and_comment() {
        let mut application = blank_application();
        assert_eq!(completeness_score(&application), 0);

        application.short_list_status = "SELECTED".to_string();
        application.level = "L2".to_string();
        application.joining = Some("2026-09-01".to_string());
        application.comment = Some(ReviewComment {
            id: Uuid::new_v4(),
            text: "созвон в пятницу".to_string(),
        });
        assert_eq!(completeness_score(&application), 4);

        // пустой комментарий не считается
        application.comment = Some(ReviewComment {
            id: Uuid::new_v4(),
            text: "  ".to_string(),
        });
        assert_eq!(completeness_score(&application), 3);
    }

    #[test]
    fn test_sort_newest_first_then_more_complete() {
        let early = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2026, 8, 20, 12, 0, 0).unwrap();

        let mut stale = blank_application();
        stale.updated_at = Some(early);

        let mut fresh_sparse = blank_application();
        fresh_sparse.updated_at = Some(late);

        let mut fresh_complete = blank_application();
        fresh_complete.updated_at = Some(late);
        fresh_complete.level = "L3".to_string();
        fresh_complete.mailed = "YES".to_string();

        let mut untouched = blank_application();
        untouched.updated_at = None;

        let mut applications = vec![
            stale.clone(),
            fresh_sparse.clone(),
            untouched.clone(),
            fresh_complete.clone(),
        ];
        sort_for_review(&mut applications);

        assert_eq!(applications[0].id, fresh_complete.id);
        assert_eq!(applications[1].id, fresh_sparse.id);
        assert_eq!(applications[2].id, stale.id);
        // запись без отметки времени уходит в конец
        assert_eq!(applications[3].id, untouched.id);
    }
}
