use super::Record;
use serde::{Deserialize, Serialize};

/// Dashboard to-do line. Has no status: "done" only dims the rendered line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Due {
    pub id: String,
    pub text: String,
}

impl Record for Due {
    const KIND: &'static str = "due item";

    fn id(&self) -> &str {
        &self.id
    }
}
