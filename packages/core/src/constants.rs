/// Username of the built-in administrator account
pub const ADMIN_USERNAME: &str = "admin";

/// Password of the built-in administrator account
pub const ADMIN_PASSWORD: &str = "qwerty12+";

/// Kanban columns given to every newly created workspace
pub const DEFAULT_STATUSES: [&str; 3] = ["Бэклог", "В работе", "Готово"];

/// Length of generated entity ids
pub const ID_LENGTH: usize = 8;
