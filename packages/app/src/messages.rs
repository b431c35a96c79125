// ABOUTME: Texts of the notifications shown to the user
// ABOUTME: Each builder returns a ready notification for one kind of outcome

use taskboard_auth::AuthError;
use taskboard_core::{Notification, NotificationKind, User};
use taskboard_tasks::Task;
use taskboard_workspaces::{Project, Workspace};

pub fn auth_succeeded(user: &User) -> Notification {
    let description = if user.is_admin() {
        "Добро пожаловать, администратор!".to_string()
    } else {
        format!("Добро пожаловать, {}!", user.username)
    };
    Notification::new(NotificationKind::AuthSucceeded, "Вход выполнен", description)
}

pub fn auth_failed(error: &AuthError) -> Notification {
    let description = match error {
        AuthError::MissingFields => "Введите логин и пароль".to_string(),
        AuthError::InvalidCredentials => "Неверный логин или пароль".to_string(),
        AuthError::UsernameTaken(name) => format!("Пользователь {} уже существует", name),
        AuthError::InvalidMode(mode) => format!("Неизвестный режим входа: {}", mode),
    };
    Notification::new(NotificationKind::AuthFailed, "Ошибка", description)
}

pub fn workspace_created(workspace: &Workspace) -> Notification {
    Notification::new(
        NotificationKind::WorkspaceCreated,
        "Пространство создано",
        format!(
            "Рабочее пространство \"{}\" успешно создано",
            workspace.name
        ),
    )
}

pub fn project_created(project: &Project) -> Notification {
    Notification::new(
        NotificationKind::ProjectCreated,
        "Проект создан",
        format!("Проект \"{}\" добавлен в пространство", project.name),
    )
}

pub fn task_created(task: &Task) -> Notification {
    Notification::new(
        NotificationKind::TaskCreated,
        "Задача создана",
        format!(
            "Задача \"{}\" добавлена в колонку \"{}\"",
            task.title, task.status
        ),
    )
}

pub fn task_moved(task: &Task) -> Notification {
    Notification::new(
        NotificationKind::TaskMoved,
        "Задача перемещена",
        format!("\"{}\" → {}", task.title, task.status),
    )
}

pub fn task_updated() -> Notification {
    Notification::new(
        NotificationKind::TaskUpdated,
        "Задача обновлена",
        "Изменения сохранены",
    )
}
