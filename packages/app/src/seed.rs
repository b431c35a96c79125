// ABOUTME: Demo data loaded at startup
// ABOUTME: One team workspace with two projects and a few tasks on the first board

use chrono::Utc;
use taskboard_tasks::{Task, TaskPriority};
use taskboard_workspaces::{Project, Workspace};

pub const DEMO_WORKSPACE_ID: &str = "1";
pub const DEMO_PROJECT_ID: &str = "1";

pub fn demo_workspace() -> Workspace {
    let now = Utc::now();
    Workspace {
        id: DEMO_WORKSPACE_ID.to_string(),
        name: "Основное пространство".to_string(),
        description: "Главное рабочее пространство команды".to_string(),
        members: vec!["admin".into(), "user1".into(), "user2".into()],
        tags: ["urgent", "feature", "bug"].into_iter().collect(),
        statuses: vec![
            "Бэклог".into(),
            "В работе".into(),
            "На проверке".into(),
            "Готово".into(),
        ],
        projects: vec![
            Project {
                id: DEMO_PROJECT_ID.to_string(),
                name: "Веб-приложение".to_string(),
                description: "Разработка основного продукта".to_string(),
                created_at: now,
            },
            Project {
                id: "2".to_string(),
                name: "Мобильное приложение".to_string(),
                description: "iOS и Android версии".to_string(),
                created_at: now,
            },
        ],
        created_at: now,
    }
}

/// Tasks of the demo workspace's first project
pub fn demo_tasks() -> Vec<Task> {
    let now = Utc::now();
    vec![
        Task {
            id: "1".to_string(),
            title: "Настроить окружение разработки".to_string(),
            description: "Установить все необходимые зависимости и инструменты".to_string(),
            status: "Готово".to_string(),
            priority: TaskPriority::High,
            tags: vec!["urgent".into()],
            assignee: Some("admin".into()),
            is_active: false,
            created_at: now,
        },
        Task {
            id: "2".to_string(),
            title: "Создать дизайн-систему".to_string(),
            description: "Разработать компоненты UI и цветовую палитру".to_string(),
            status: "В работе".to_string(),
            priority: TaskPriority::High,
            tags: vec!["feature".into()],
            assignee: Some("user1".into()),
            is_active: true,
            created_at: now,
        },
        Task {
            id: "3".to_string(),
            title: "Интеграция с API".to_string(),
            description: "Подключить бэкенд и настроить endpoints".to_string(),
            status: "Бэклог".to_string(),
            priority: TaskPriority::Medium,
            tags: vec!["feature".into()],
            assignee: None,
            is_active: true,
            created_at: now,
        },
    ]
}
