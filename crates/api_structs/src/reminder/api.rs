pub mod send_reminders {
    use serde::{Deserialize, Serialize};

    /// Field names are part of the external contract of the reminder
    /// endpoint and are kept as-is.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct APIResponse {
        pub success: bool,
        pub enviados: usize,
        pub mensaje: String,
    }

    impl APIResponse {
        pub fn new(enviados: usize) -> Self {
            Self {
                success: true,
                enviados,
                mensaje: format!("{} recordatorios enviados", enviados),
            }
        }
    }
}
