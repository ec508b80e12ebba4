// File: ./src/model/display.rs
use crate::model::item::Task;

pub trait TaskDisplay {
    fn status_symbol(&self) -> &'static str;
    fn display_line(&self) -> String;
}

impl TaskDisplay for Task {
    fn status_symbol(&self) -> &'static str {
        if self.is_done() { "X" } else { " " }
    }

    /// `[D][X] return book (by: 2019-12-02)`
    fn display_line(&self) -> String {
        format!(
            "[{}][{}] {}",
            self.type_tag(),
            self.status_symbol(),
            self.full_description()
        )
    }
}
